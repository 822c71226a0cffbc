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

//! UI middleware.

use std::str::FromStr;

use crate::asset::Loader;
use crate::handler::{Handler, Result};
use crate::http::response::ResponseExt;
use crate::http::{Header, Method, Request, Response};
use crate::middleware::Middleware;
use crate::path;
use crate::route;
use crate::template::{Placeholders, Template, DOCUMENT_URL};

// ----------------------------------------------------------------------------
// Structs
// ----------------------------------------------------------------------------

/// UI middleware.
///
/// This middleware answers `GET` requests matching its route with the UI shell,
/// an HTML page which loads the interactive UI and points it to the document.
/// Parameters in the route are allowed, but their values are ignored.
///
/// The document URL embedded into the page combines the `X-Forwarded-PathBase`
/// header with the configured document path. Unlike the [`Document`][]
/// middleware, the path base of the request is not taken into account, so the
/// document path must include it, if the application is mounted under one.
///
/// __Warning__: the header value is substituted into the page as is, and the
/// bundled shell embeds it in a script string literal. Hosting frameworks must
/// only pass on `X-Forwarded-PathBase` when it was set by a trusted reverse
/// proxy, and strip it from all other requests.
///
/// [`Document`]: crate::middleware::Document
///
/// # Examples
///
/// ```
/// # use std::error::Error;
/// # fn main() -> Result<(), Box<dyn Error>> {
/// use apidoc_serve::handler::NotFound;
/// use apidoc_serve::http::{Header, Request, Status};
/// use apidoc_serve::middleware::{Interface, Middleware};
/// use apidoc_serve::template::Template;
///
/// // Create middleware
/// let template = Template::new("<html>%(DocumentUrl)</html>");
/// let interface = Interface::new("/ui/", "v1/doc.json", template)?;
///
/// // Create request
/// let req = Request::new()
///     .uri("/ui/")
///     .header(Header::XForwardedPathBase, "/gw");
///
/// // Handle request with middleware
/// let res = interface.process(req, &NotFound);
/// assert_eq!(res.status, Status::Ok);
/// assert_eq!(res.body, b"<html>/gw/v1/doc.json</html>");
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct Interface {
    /// UI route.
    route: route::Template,
    /// Document path, relative to the forwarded path base.
    document_path: String,
    /// UI shell.
    template: Template,
}

// ----------------------------------------------------------------------------
// Implementations
// ----------------------------------------------------------------------------

impl Interface {
    /// Creates a UI middleware with the given template.
    ///
    /// # Errors
    ///
    /// This method returns [`Error::Route`][], if the route is invalid.
    ///
    /// [`Error::Route`]: crate::handler::Error::Route
    pub fn new<R, D>(
        route: R, document_path: D, template: Template,
    ) -> Result<Self>
    where
        R: AsRef<str>,
        D: Into<String>,
    {
        Ok(Self {
            route: route::Template::from_str(route.as_ref())?,
            document_path: document_path.into(),
            template,
        })
    }

    /// Creates a UI middleware, loading the template with the given loader.
    ///
    /// The template is loaded once, so a missing or unreadable asset is an
    /// error here, and never surfaces while requests are handled.
    ///
    /// # Errors
    ///
    /// This method returns [`Error::Route`][], if the route is invalid, and
    /// [`Error::AssetNotFound`][] or [`Error::Asset`][], if the template can't
    /// be loaded.
    ///
    /// [`Error::Asset`]: crate::handler::Error::Asset
    /// [`Error::AssetNotFound`]: crate::handler::Error::AssetNotFound
    /// [`Error::Route`]: crate::handler::Error::Route
    ///
    /// # Examples
    ///
    /// ```
    /// # use std::error::Error;
    /// # fn main() -> Result<(), Box<dyn Error>> {
    /// use apidoc_serve::asset::Embedded;
    /// use apidoc_serve::middleware::Interface;
    ///
    /// // Create middleware with bundled template
    /// let interface = Interface::load(
    ///     "/swagger/ui/index.html",
    ///     "swagger/v1/swagger.json",
    ///     &Embedded::new(),
    ///     "index.html",
    /// )?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn load<R, D, L>(
        route: R, document_path: D, loader: &L, asset: &str,
    ) -> Result<Self>
    where
        R: AsRef<str>,
        D: Into<String>,
        L: Loader + ?Sized,
    {
        let template = Template::load(loader, asset)?;
        Self::new(route, document_path, template)
    }

    /// Attempts to answer the given request.
    ///
    /// Requests that aren't `GET` requests, or don't match the route, are not
    /// answered, and [`None`] is returned. Otherwise, the rendered UI shell is
    /// returned as a "200 OK" response.
    #[must_use]
    pub fn try_handle(&self, req: &Request) -> Option<Response> {
        if req.method != Method::Get {
            return None;
        }

        // Only whether the route matches is relevant, not its parameters
        self.route.matches(&req.uri.path)?;

        // Compute document URL from forwarded path base only
        let forwarded = req.headers.get(Header::XForwardedPathBase);
        let url = path::join([
            forwarded.unwrap_or_default(),
            self.document_path.as_str(),
        ]);

        // Render template
        let placeholders = Placeholders::new().with(DOCUMENT_URL, url);
        Some(Response::from_html(self.template.render(&placeholders)))
    }
}

#[allow(clippy::must_use_candidate)]
impl Interface {
    /// Returns the UI shell.
    #[inline]
    pub fn template(&self) -> &Template {
        &self.template
    }
}

// ----------------------------------------------------------------------------
// Trait implementations
// ----------------------------------------------------------------------------

impl Middleware for Interface {
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
    use crate::asset::Embedded;
    use crate::handler::{Error, NotFound};
    use crate::http::Status;

    use super::*;

    fn interface() -> Interface {
        Interface::load("/ui/", "v1/doc.json", &Embedded::new(), "index.html")
            .unwrap()
    }

    #[test]
    fn test_embeds_document_url() {
        let req = Request::new()
            .uri("/ui/")
            .header(Header::XForwardedPathBase, "/gw");

        let res = interface().process(req, &NotFound);
        assert_eq!(res.status, Status::Ok);
        assert_eq!(res.headers.get(Header::ContentType), Some("text/html"));

        let body = String::from_utf8(res.body).unwrap();
        assert!(body.contains("\"/gw/v1/doc.json\""));
        assert!(!body.contains(DOCUMENT_URL));
    }

    #[test]
    fn test_substitutes_header_verbatim() {
        let template = Template::new("url: \"%(DocumentUrl)\"");
        let interface = Interface::new("/ui", "doc.json", template).unwrap();
        let req = Request::new()
            .uri("/ui")
            .header(Header::XForwardedPathBase, "/gw\"+x+\"");

        let res = interface.process(req, &NotFound);
        assert_eq!(res.body, b"url: \"/gw\"+x+\"/doc.json\"");
    }

    #[test]
    fn test_ignores_request_path_base() {
        let req = Request::new().uri("/ui").base("/app");

        let res = interface().process(req, &NotFound);
        let body = String::from_utf8(res.body).unwrap();
        assert!(body.contains("\"/v1/doc.json\""));
        assert!(!body.contains("/app"));
    }

    #[test]
    fn test_blank_document_path() {
        let template = Template::new(DOCUMENT_URL);
        let interface = Interface::new("/ui", " ", template).unwrap();

        let res = interface.process(Request::new().uri("/ui"), &NotFound);
        assert_eq!(res.body, b"/");

        let req = Request::new()
            .uri("/ui")
            .header(Header::XForwardedPathBase, "gw/");
        let res = interface.process(req, &NotFound);
        assert_eq!(res.body, b"/gw");
    }

    #[test]
    fn test_ignores_parameters() {
        let template = Template::new(DOCUMENT_URL);
        let interface = Interface::new("/ui/{page}", "doc.json", template)
            .unwrap();

        let req = Request::new().uri("/ui/index.html");
        let res = interface.process(req, &NotFound);
        assert_eq!(res.body, b"/doc.json");
    }

    #[test]
    fn test_is_idempotent() {
        let interface = interface();
        let before = interface.template().clone();

        let first = interface.process(Request::new().uri("/ui/"), &NotFound);
        let second = interface.process(Request::new().uri("/ui/"), &NotFound);
        assert_eq!(first, second);
        assert_eq!(interface.template(), &before);
    }

    #[test]
    fn test_passes_through() {
        let interface = interface();
        let test_cases = vec![
            Request::new().method(Method::Post).uri("/ui/"),
            Request::new().method(Method::Delete).uri("/ui/"),
            Request::new().uri("/ui/index.html"),
            Request::new().uri("/"),
        ];

        for req in test_cases {
            let res = interface.process(req, &NotFound);
            assert_eq!(res.status, Status::NotFound);
        }
    }

    #[test]
    fn test_missing_template() {
        let loader = Embedded::new();
        let res = Interface::load("/ui/", "doc.json", &loader, "nope.html");
        assert!(matches!(res, Err(Error::AssetNotFound(_))));
    }
}
