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

//! Route template parameters.

use std::slice::Iter;

// ----------------------------------------------------------------------------
// Structs
// ----------------------------------------------------------------------------

/// Route template parameters.
///
/// Parameters are produced fresh for every match, and borrow both their names
/// from the [`Template`][] and their values from the matched path, so they
/// never outlive the request. Templates rarely declare more than one or two
/// parameters, so a list is used instead of a map.
///
/// [`Template`]: crate::route::Template
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Params<'k, 'v> {
    /// Parameter list.
    inner: Vec<(&'k str, &'v str)>,
}

// ----------------------------------------------------------------------------
// Implementations
// ----------------------------------------------------------------------------

impl<'k, 'v> Params<'k, 'v> {
    /// Creates route template parameters.
    #[inline]
    pub(crate) fn new() -> Self {
        Self { inner: Vec::new() }
    }

    /// Adds a parameter.
    #[inline]
    pub(crate) fn push(&mut self, key: &'k str, value: &'v str) {
        self.inner.push((key, value));
    }

    /// Returns the value for the given key.
    ///
    /// # Examples
    ///
    /// ```
    /// # use std::error::Error;
    /// # fn main() -> Result<(), Box<dyn Error>> {
    /// use apidoc_serve::route::Template;
    ///
    /// // Create template and match path
    /// let template: Template = "/docs/{apiVersion}".parse()?;
    /// if let Some(params) = template.matches("/docs/v1") {
    ///     assert_eq!(params.get("apiVersion"), Some("v1"));
    ///     assert_eq!(params.get("version"), None);
    /// }
    /// # Ok(())
    /// # }
    /// ```
    #[inline]
    pub fn get<K>(&self, key: K) -> Option<&'v str>
    where
        K: AsRef<str>,
    {
        let key = key.as_ref();
        self.inner
            .iter()
            .find_map(|&(name, value)| (name == key).then_some(value))
    }

    /// Returns whether the parameter is contained.
    #[inline]
    #[must_use]
    pub fn contains<K>(&self, key: K) -> bool
    where
        K: AsRef<str>,
    {
        self.get(key).is_some()
    }

    /// Returns an iterator over all parameters.
    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = (&'k str, &'v str)> + '_ {
        self.inner.iter().copied()
    }
}

#[allow(clippy::must_use_candidate)]
impl Params<'_, '_> {
    /// Returns the number of parameters.
    #[inline]
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// Returns whether there are any parameters.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}

// ----------------------------------------------------------------------------
// Trait implementations
// ----------------------------------------------------------------------------

impl<'a, 'k, 'v> IntoIterator for &'a Params<'k, 'v> {
    type Item = &'a (&'k str, &'v str);
    type IntoIter = Iter<'a, (&'k str, &'v str)>;

    /// Creates an iterator over all parameters.
    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.inner.iter()
    }
}
