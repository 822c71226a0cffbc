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

//! HTTP method.

use std::fmt;
use std::str::FromStr;

use super::Error;

// ----------------------------------------------------------------------------
// Enums
// ----------------------------------------------------------------------------

/// HTTP method.
///
/// Documentation middlewares only ever answer [`Method::Get`], and pass on
/// requests with any other method. The remaining variants exist so hosting
/// frameworks can translate every standard method.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Get,
    Head,
    Post,
    Put,
    Delete,
    Options,
    Trace,
    Patch,
}

// ----------------------------------------------------------------------------
// Implementations
// ----------------------------------------------------------------------------

impl Method {
    /// Returns the method token.
    ///
    /// # Examples
    ///
    /// ```
    /// use apidoc_serve::http::Method;
    ///
    /// // Obtain method token
    /// assert_eq!(Method::Get.as_str(), "GET");
    /// ```
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Head => "HEAD",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Delete => "DELETE",
            Method::Options => "OPTIONS",
            Method::Trace => "TRACE",
            Method::Patch => "PATCH",
        }
    }
}

// ----------------------------------------------------------------------------
// Trait implementations
// ----------------------------------------------------------------------------

impl FromStr for Method {
    type Err = Error;

    /// Attempts to create a method from its token.
    ///
    /// Method tokens are case-sensitive, so `get` is not [`Method::Get`].
    ///
    /// # Errors
    ///
    /// This method returns [`Error::Method`], if the token is not one of the
    /// standard methods, compared ordinally.
    ///
    /// # Examples
    ///
    /// ```
    /// # use std::error::Error;
    /// # fn main() -> Result<(), Box<dyn Error>> {
    /// use apidoc_serve::http::Method;
    ///
    /// // Create method from token
    /// let method: Method = "GET".parse()?;
    /// assert_eq!(method, Method::Get);
    /// assert!("get".parse::<Method>().is_err());
    /// # Ok(())
    /// # }
    /// ```
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "GET" => Ok(Method::Get),
            "HEAD" => Ok(Method::Head),
            "POST" => Ok(Method::Post),
            "PUT" => Ok(Method::Put),
            "DELETE" => Ok(Method::Delete),
            "OPTIONS" => Ok(Method::Options),
            "TRACE" => Ok(Method::Trace),
            "PATCH" => Ok(Method::Patch),
            _ => Err(Error::Method(value.to_string())),
        }
    }
}

// ----------------------------------------------------------------------------

impl fmt::Display for Method {
    /// Formats the method for display.
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
    fn test_from_str() {
        let test_cases = vec![
            ("GET", Ok(Method::Get)),
            ("HEAD", Ok(Method::Head)),
            ("PATCH", Ok(Method::Patch)),
            ("get", Err(Error::Method(String::from("get")))),
            ("Get", Err(Error::Method(String::from("Get")))),
            ("BREW", Err(Error::Method(String::from("BREW")))),
        ];
        for (value, expected) in test_cases {
            assert_eq!(
                Method::from_str(value),
                expected,
                "Failed for value: {value}"
            );
        }
    }

    #[test]
    fn test_display_matches_token() {
        for method in [Method::Get, Method::Options, Method::Delete] {
            assert_eq!(
                method.to_string().parse::<Method>(),
                Ok(method),
                "Failed for method: {method}"
            );
        }
    }
}
