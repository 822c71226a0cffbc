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

//! Redirect middleware.

use std::str::FromStr;

use crate::handler::{Handler, Result};
use crate::http::response::ResponseExt;
use crate::http::{Method, Request, Response};
use crate::middleware::Middleware;
use crate::route::Template;

// ----------------------------------------------------------------------------
// Structs
// ----------------------------------------------------------------------------

/// Redirect middleware.
///
/// This middleware answers `GET` requests matching its route with "302 Found",
/// redirecting to the configured path relative to the path base of the
/// request. The target is used as is, and the `X-Forwarded-PathBase` header is
/// not taken into account.
///
/// # Examples
///
/// ```
/// # use std::error::Error;
/// # fn main() -> Result<(), Box<dyn Error>> {
/// use apidoc_serve::handler::NotFound;
/// use apidoc_serve::http::{Header, Request, Status};
/// use apidoc_serve::middleware::{Middleware, Redirect};
///
/// // Create middleware
/// let redirect = Redirect::new("/", "swagger/ui")?;
///
/// // Handle request with middleware
/// let res = redirect.process(Request::new().uri("/").base("/app"), &NotFound);
/// assert_eq!(res.status, Status::Found);
/// assert_eq!(res.headers.get(Header::Location), Some("/app/swagger/ui"));
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct Redirect {
    /// Route to redirect from.
    from: Template,
    /// Path to redirect to, relative to the path base.
    to: String,
}

// ----------------------------------------------------------------------------
// Implementations
// ----------------------------------------------------------------------------

impl Redirect {
    /// Creates a redirect middleware.
    ///
    /// # Errors
    ///
    /// This method returns [`Error::Route`][], if the route is invalid.
    ///
    /// [`Error::Route`]: crate::handler::Error::Route
    pub fn new<F, T>(from: F, to: T) -> Result<Self>
    where
        F: AsRef<str>,
        T: Into<String>,
    {
        Ok(Self {
            from: Template::from_str(from.as_ref())?,
            to: to.into(),
        })
    }

    /// Attempts to answer the given request.
    #[must_use]
    pub fn try_handle(&self, req: &Request) -> Option<Response> {
        if req.method != Method::Get {
            return None;
        }

        // Redirect relative to path base
        self.from.matches(&req.uri.path)?;
        Some(Response::redirect(format!("{}/{}", req.base, self.to)))
    }
}

// ----------------------------------------------------------------------------
// Trait implementations
// ----------------------------------------------------------------------------

impl Middleware for Redirect {
    /// Processes the given request.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(skip_all, fields(path = %req.uri.path))
    )]
    fn process(&self, req: Request, next: &dyn Handler) -> Response {
        match self.try_handle(&req) {
            Some(res) => res,
            None => next.handle(req),
        }
    }
}

// ----------------------------------------------------------------------------
// Tests
// ----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use crate::handler::NotFound;
    use crate::http::{Header, Status};

    use super::*;

    #[test]
    fn test_redirect() {
        let redirect = Redirect::new("/", "swagger/ui").unwrap();
        let test_cases = vec![
            ("", "/swagger/ui"),
            ("/app", "/app/swagger/ui"),
        ];

        for (base, expected) in test_cases {
            let req = Request::new().uri("/").base(base);
            let res = redirect.process(req, &NotFound);
            assert_eq!(res.status, Status::Found);
            assert_eq!(res.headers.get(Header::Location), Some(expected));
            assert_eq!(res.headers.get(Header::ContentLength), Some("0"));
        }
    }

    #[test]
    fn test_ignores_forwarded_path_base() {
        let redirect = Redirect::new("/swagger", "swagger/ui/index.html")
            .unwrap();
        let req = Request::new()
            .uri("/SWAGGER/")
            .header(Header::XForwardedPathBase, "/gw");

        let res = redirect.process(req, &NotFound);
        assert_eq!(
            res.headers.get(Header::Location),
            Some("/swagger/ui/index.html")
        );
    }

    #[test]
    fn test_passes_through() {
        let redirect = Redirect::new("/", "swagger/ui").unwrap();
        let test_cases = vec![
            Request::new().method(Method::Post).uri("/"),
            Request::new().method(Method::Options).uri("/"),
            Request::new().uri("/pets"),
        ];

        for req in test_cases {
            let res = redirect.process(req, &NotFound);
            assert_eq!(res.status, Status::NotFound);
        }
    }
}
