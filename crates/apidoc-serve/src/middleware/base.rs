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

//! Base path middleware.

use std::borrow::Cow;

use crate::handler::Handler;
use crate::http::{Request, Response, Uri};
use crate::middleware::Middleware;
use crate::path;

// ----------------------------------------------------------------------------
// Structs
// ----------------------------------------------------------------------------

/// Base path middleware.
///
/// This middleware establishes the path base of an application mounted under
/// a prefix, as hosting frameworks do. If the request path starts with the
/// prefix, it's removed from the path, and appended to the path base of the
/// request, before the request is passed on. Other requests are passed on
/// unchanged.
///
/// # Examples
///
/// ```
/// use apidoc_serve::handler::Handler;
/// use apidoc_serve::http::response::ResponseExt;
/// use apidoc_serve::http::{Request, Response};
/// use apidoc_serve::middleware::{BasePath, Middleware};
///
/// // Create middleware
/// let base = BasePath::new("/app");
///
/// // Create handler echoing path base and path
/// let echo = |req: Request| {
///     Response::from_text(format!("{} {}", req.base, req.uri.path))
/// };
///
/// // Handle request with middleware
/// let res = base.process(Request::new().uri("/app/swagger/ui"), &echo);
/// assert_eq!(res.body, b"/app /swagger/ui");
/// ```
#[derive(Clone, Debug)]
pub struct BasePath {
    /// Path base, normalized.
    base: String,
}

// ----------------------------------------------------------------------------
// Implementations
// ----------------------------------------------------------------------------

impl BasePath {
    /// Creates a base path middleware.
    ///
    /// The prefix is normalized to start with a slash, and to not end with
    /// one, so `app`, `/app` and `/app/` are equivalent.
    #[must_use]
    pub fn new<P>(prefix: P) -> Self
    where
        P: AsRef<str>,
    {
        Self { base: path::join([prefix.as_ref()]) }
    }

    /// Returns the request path with the prefix removed.
    fn strip<'p>(&self, path: &'p str) -> Option<&'p str> {
        let rest = path.strip_prefix(self.base.as_str())?;
        if rest.is_empty() {
            Some("/")
        } else {
            rest.starts_with('/').then_some(rest)
        }
    }
}

#[allow(clippy::must_use_candidate)]
impl BasePath {
    /// Returns the path base.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.base
    }
}

// ----------------------------------------------------------------------------
// Trait implementations
// ----------------------------------------------------------------------------

impl Middleware for BasePath {
    /// Processes the given request.
    fn process(&self, mut req: Request, next: &dyn Handler) -> Response {
        if self.base == "/" {
            return next.handle(req);
        }

        // Move prefix from path to path base, if present
        if let Some(rest) = self.strip(&req.uri.path) {
            let path = rest.to_owned();
            req.base = Cow::Owned(format!("{}{}", req.base, self.base));
            req.uri = Uri::from_parts(path, req.uri.query);
        }

        // Forward with modified request
        next.handle(req)
    }
}

// ----------------------------------------------------------------------------
// Tests
// ----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use crate::http::response::ResponseExt;

    use super::*;

    fn echo(req: Request) -> Response {
        Response::from_text(format!("{}|{}", req.base, req.uri.path))
    }

    #[test]
    fn test_strips_prefix() {
        let base = BasePath::new("app/");
        let test_cases = vec![
            ("/app", "/app|/"),
            ("/app/", "/app|/"),
            ("/app/swagger/ui", "/app|/swagger/ui"),
            ("/application", "|/application"),
            ("/other/app", "|/other/app"),
        ];

        for (path, expected) in test_cases {
            let res = base.process(Request::new().uri(path), &echo);
            assert_eq!(res.body, expected.as_bytes(), "Failed for path: {path}");
        }
    }

    #[test]
    fn test_nests() {
        let base = BasePath::new("/inner");
        let req = Request::new().uri("/inner/ui").base("/outer");

        let res = base.process(req, &echo);
        assert_eq!(res.body, b"/outer/inner|/ui");
    }

    #[test]
    fn test_root() {
        let base = BasePath::new("/");
        let res = base.process(Request::new().uri("/ui"), &echo);
        assert_eq!(res.body, b"|/ui");
    }
}
