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

//! HTTP header.

use std::fmt;
use std::str::FromStr;

use super::Error;

// ----------------------------------------------------------------------------
// Enums
// ----------------------------------------------------------------------------

/// HTTP header.
///
/// Documentation middlewares read a single request header, the path base set
/// by a reverse proxy, and write the three headers their responses carry.
/// Hosting frameworks drop every other header when translating requests.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum Header {
    /// Content-Length
    ContentLength,
    /// Content-Type
    ContentType,
    /// Location
    Location,
    /// X-Forwarded-PathBase
    XForwardedPathBase,
}

// ----------------------------------------------------------------------------
// Implementations
// ----------------------------------------------------------------------------

impl Header {
    /// All headers, in order.
    const ALL: [Header; 4] = [
        Header::ContentLength,
        Header::ContentType,
        Header::Location,
        Header::XForwardedPathBase,
    ];

    /// Returns the header name in its canonical casing.
    ///
    /// # Examples
    ///
    /// ```
    /// use apidoc_serve::http::Header;
    ///
    /// // Obtain header name
    /// let header = Header::XForwardedPathBase;
    /// assert_eq!(header.as_str(), "X-Forwarded-PathBase");
    /// ```
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Header::ContentLength => "Content-Length",
            Header::ContentType => "Content-Type",
            Header::Location => "Location",
            Header::XForwardedPathBase => "X-Forwarded-PathBase",
        }
    }
}

// ----------------------------------------------------------------------------
// Trait implementations
// ----------------------------------------------------------------------------

impl FromStr for Header {
    type Err = Error;

    /// Attempts to create a header from its name.
    ///
    /// Unlike methods, header names are case-insensitive, so any casing a
    /// client or proxy chooses resolves to the same header.
    ///
    /// # Errors
    ///
    /// This method returns [`Error::Header`], if the name is not one of the
    /// known headers.
    ///
    /// # Examples
    ///
    /// ```
    /// # use std::error::Error;
    /// # fn main() -> Result<(), Box<dyn Error>> {
    /// use apidoc_serve::http::Header;
    ///
    /// // Create header from name
    /// let header: Header = "x-forwarded-pathbase".parse()?;
    /// assert_eq!(header, Header::XForwardedPathBase);
    /// # Ok(())
    /// # }
    /// ```
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Header::ALL
            .into_iter()
            .find(|header| header.as_str().eq_ignore_ascii_case(value))
            .ok_or_else(|| Error::Header(value.to_string()))
    }
}

// ----------------------------------------------------------------------------

impl fmt::Display for Header {
    /// Formats the header for display.
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ----------------------------------------------------------------------------
// Tests
// ----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_str_ignores_case() {
        let test_cases = vec![
            "X-Forwarded-PathBase",
            "x-forwarded-pathbase",
            "X-FORWARDED-PATHBASE",
        ];
        for name in test_cases {
            assert_eq!(
                Header::from_str(name),
                Ok(Header::XForwardedPathBase),
                "Failed for name: {name}"
            );
        }
    }

    #[test]
    fn test_from_str_unknown() {
        assert_eq!(
            Header::from_str("Accept"),
            Err(Error::Header(String::from("Accept")))
        );
    }
}
