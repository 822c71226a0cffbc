// Copyright (c) 2025 Zensical and contributors

// SPDX-License-Identifier: MIT
// Third-party contributions licensed under DCO

// Permission is hereby granted, free of charge, to any person obtaining a copy
// of this software and associated documentation files (the "Software"), to
// deal in the Software without restriction, including without limitation the
// rights to use, copy, modify, merge, publish, distribute, sublicense, and/or
// sell copies of the Software, and to permit persons to whom the Software is
// furnished to do so, subject to the following conditions:

// The above copyright notice and this permission notice shall be included in
// all copies or substantial portions of the Software.

// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
// FITNESS FOR A PARTICULAR PURPOSE AND NON-INFRINGEMENT. IN NO EVENT SHALL THE
// AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
// LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING
// FROM, OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS
// IN THE SOFTWARE.

// ----------------------------------------------------------------------------

//! HTTP headers.

use std::collections::BTreeMap;
use std::collections::btree_map::Iter;

use super::Header;

// ----------------------------------------------------------------------------
// Structs
// ----------------------------------------------------------------------------

/// HTTP header map.
///
/// The same map is used for requests and responses. Values are owned, since
/// a request carries at most the forwarded path base, and responses must not
/// be tied to the lifetime of the request they answer.
///
/// # Examples
///
/// ```
/// use apidoc_serve::http::{Header, Headers};
///
/// // Create header map and add headers
/// let mut headers = Headers::default();
/// headers.insert(Header::ContentType, "application/json");
/// headers.insert(Header::ContentLength, 2);
/// assert_eq!(headers.get(Header::ContentLength), Some("2"));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Headers {
    /// Headers, ordered by variant.
    inner: BTreeMap<Header, String>,
}

// ----------------------------------------------------------------------------
// Implementations
// ----------------------------------------------------------------------------

#[allow(clippy::must_use_candidate)]
impl Headers {
    /// Returns the value for the given header.
    #[inline]
    pub fn get(&self, header: Header) -> Option<&str> {
        self.inner.get(&header).map(String::as_str)
    }

    /// Sets the given header, replacing a previous value.
    #[allow(clippy::needless_pass_by_value)]
    #[inline]
    pub fn insert<V>(&mut self, header: Header, value: V)
    where
        V: ToString,
    {
        self.inner.insert(header, value.to_string());
    }

    /// Returns the number of headers.
    #[inline]
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// Returns whether there are any headers.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}

// ----------------------------------------------------------------------------
// Trait implementations
// ----------------------------------------------------------------------------

impl<'a> IntoIterator for &'a Headers {
    type Item = (&'a Header, &'a String);
    type IntoIter = Iter<'a, Header, String>;

    /// Creates an iterator over the header map, for hosting frameworks to
    /// copy the headers into their own response type.
    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.inner.iter()
    }
}

// ----------------------------------------------------------------------------
// Tests
// ----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_replaces() {
        let mut headers = Headers::default();
        headers.insert(Header::Location, "/a");
        headers.insert(Header::Location, "/b");
        assert_eq!(headers.get(Header::Location), Some("/b"));
        assert_eq!(headers.len(), 1);
    }

    #[test]
    fn test_iter_ordered() {
        let mut headers = Headers::default();
        headers.insert(Header::Location, "/a");
        headers.insert(Header::ContentLength, 0);
        let names: Vec<_> = (&headers)
            .into_iter()
            .map(|(header, _)| header.as_str())
            .collect();
        assert_eq!(names, ["Content-Length", "Location"]);
    }
}
