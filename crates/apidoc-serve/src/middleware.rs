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

//! Middleware.

use std::fmt;

use super::handler::Handler;
use super::http::{Request, Response};

mod base;
mod convert;
pub mod document;
mod interface;
mod redirect;

pub use base::BasePath;
pub use convert::TryIntoMiddleware;
pub use document::Document;
pub use interface::Interface;
pub use redirect::Redirect;

// ----------------------------------------------------------------------------
// Traits
// ----------------------------------------------------------------------------

/// Middleware.
///
/// Middlewares are the links of a request processing chain. Each middleware
/// owns a set of requests, e.g., those matching a route, which it answers with
/// a [`Response`], and forwards all other requests to the next [`Handler`],
/// which can be another middleware or the application itself.
///
/// Middlewares are created once, and shared by all requests for the lifetime
/// of the process, which is why they must be [`Send`] and [`Sync`]. Nothing a
/// middleware holds may change while requests are processed. Besides closures
/// which exactly match the signature of [`Middleware::process`], this trait is
/// implemented for the following data types:
///
/// - [`Document`]: Serves API description documents.
/// - [`Interface`]: Serves the interactive UI shell.
/// - [`Redirect`]: Redirects to the UI.
/// - [`BasePath`]: Establishes the path base.
/// - [`Stack`][]: Stack of middlewares.
///
/// [`Stack`]: crate::handler::Stack
pub trait Middleware: Send + Sync + 'static {
    /// Processes the given request.
    ///
    /// This method is invoked with a request and is expected to either answer
    /// the request with a response, or pass it on to the given handler. Since
    /// request processing is infallible, errors must be translated into
    /// responses, e.g., "500 Internal Server Error".
    ///
    /// # Examples
    ///
    /// This example shows how to implement a health check middleware, which
    /// answers `GET /health`, while passing all other requests on.
    ///
    /// ```
    /// use apidoc_serve::handler::{Handler, NotFound};
    /// use apidoc_serve::http::response::ResponseExt;
    /// use apidoc_serve::http::{Method, Request, Response, Status};
    /// use apidoc_serve::middleware::Middleware;
    ///
    /// // Define middleware
    /// struct Health;
    ///
    /// // Create middleware implementation
    /// impl Middleware for Health {
    ///     fn process(&self, req: Request, next: &dyn Handler) -> Response {
    ///         if req.method == Method::Get && req.uri.path == "/health" {
    ///             Response::from_text("OK")
    ///         } else {
    ///             next.handle(req)
    ///         }
    ///     }
    /// }
    ///
    /// // Handle request with middleware
    /// let res = Health.process(Request::new().uri("/health"), &NotFound);
    /// assert_eq!(res.status, Status::Ok);
    /// ```
    fn process(&self, req: Request, next: &dyn Handler) -> Response;
}

// ----------------------------------------------------------------------------
// Trait implementations
// ----------------------------------------------------------------------------

impl fmt::Debug for Box<dyn Middleware> {
    /// Formats the middleware for debugging.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Box<dyn Middleware>")
    }
}

// ----------------------------------------------------------------------------
// Blanket implementations
// ----------------------------------------------------------------------------

impl<F, R> Middleware for F
where
    F: Fn(Request, &dyn Handler) -> R + Send + Sync + 'static,
    R: Into<Response>,
{
    #[inline]
    fn process(&self, req: Request, next: &dyn Handler) -> Response {
        self(req, next).into()
    }
}
