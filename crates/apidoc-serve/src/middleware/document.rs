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

//! Document middleware.

use std::str::FromStr;

use crate::convention::Conventions;
use crate::handler::{self, Handler};
use crate::http::response::ResponseExt;
use crate::http::{Header, Method, Request, Response};
use crate::middleware::Middleware;
use crate::path;
use crate::provider::Provider;
use crate::route::Template;

mod error;

pub use error::{Error, Result};

// ----------------------------------------------------------------------------
// Constants
// ----------------------------------------------------------------------------

/// Route parameter holding the requested version.
pub const API_VERSION: &str = "apiVersion";

// ----------------------------------------------------------------------------
// Structs
// ----------------------------------------------------------------------------

/// Document middleware.
///
/// This middleware answers `GET` requests matching its route with the API
/// description document for the version captured by the `{apiVersion}` route
/// parameter. The document is obtained from a [`Provider`], and serialized as
/// JSON according to the middleware's [`Conventions`].
///
/// The base path handed to the provider combines the `X-Forwarded-PathBase`
/// header, set by reverse proxies, and the path base of the request, so that
/// the document describes the routes as clients see them. Provider errors,
/// e.g., for unknown versions, result in "500 Internal Server Error".
///
/// # Examples
///
/// ```
/// # use std::error::Error;
/// # fn main() -> Result<(), Box<dyn Error>> {
/// use apidoc_serve::handler::NotFound;
/// use apidoc_serve::http::{Header, Request, Status};
/// use apidoc_serve::middleware::{Document, Middleware};
/// use apidoc_serve::provider::Versions;
/// use serde_json::{json, Value};
///
/// // Create middleware
/// let provider = Versions::new()
///     .version("v1", json!({ "swagger": "2.0", "host": null }));
/// let document = Document::new("/docs/{apiVersion}/doc.json", provider)?;
///
/// // Create request
/// let req = Request::new()
///     .uri("/docs/v1/doc.json")
///     .header(Header::XForwardedPathBase, "/gateway");
///
/// // Handle request with middleware
/// let res = document.process(req, &NotFound);
/// assert_eq!(res.status, Status::Ok);
///
/// // Obtain document from response
/// let value: Value = serde_json::from_slice(&res.body)?;
/// assert_eq!(value, json!({ "swagger": "2.0", "basePath": "/gateway" }));
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct Document<P> {
    /// Document route.
    route: Template,
    /// Document provider.
    provider: P,
    /// Serialization conventions.
    conventions: Conventions,
}

// ----------------------------------------------------------------------------
// Implementations
// ----------------------------------------------------------------------------

impl<P> Document<P>
where
    P: Provider,
{
    /// Creates a document middleware.
    ///
    /// The route must contain the `{apiVersion}` parameter. Documents are
    /// serialized with the default [`Conventions`].
    ///
    /// # Errors
    ///
    /// This method returns [`handler::Error::Route`], if the route is invalid,
    /// and [`handler::Error::Parameter`], if it lacks `{apiVersion}`.
    pub fn new<R>(route: R, provider: P) -> handler::Result<Self>
    where
        R: AsRef<str>,
    {
        let route = Template::from_str(route.as_ref())?;
        if !route.contains(API_VERSION) {
            return Err(handler::Error::Parameter {
                route: route.to_string(),
                name: API_VERSION,
            });
        }

        // Create middleware
        Ok(Self {
            route,
            provider,
            conventions: Conventions::default(),
        })
    }

    /// Sets the serialization conventions.
    #[must_use]
    pub fn conventions(mut self, conventions: Conventions) -> Self {
        self.conventions = conventions;
        self
    }

    /// Attempts to answer the given request.
    ///
    /// Requests that aren't `GET` requests, or don't match the route, are not
    /// answered, and [`None`] is returned. Otherwise, the document is obtained
    /// from the provider and serialized into a "200 OK" response.
    ///
    /// # Errors
    ///
    /// This method returns [`Error::Provider`], if the provider fails, and
    /// [`Error::Serialize`], if the document can't be serialized.
    pub fn try_handle(&self, req: &Request) -> Result<Option<Response>> {
        if req.method != Method::Get {
            return Ok(None);
        }

        // Match route and extract version
        let Some(params) = self.route.matches(&req.uri.path) else {
            return Ok(None);
        };
        let Some(version) = params.get(API_VERSION) else {
            return Ok(None);
        };

        // Obtain document for the externally visible path base
        let forwarded = req.headers.get(Header::XForwardedPathBase);
        let base_path = path::resolve(forwarded, &req.base);
        let document = self
            .provider
            .document(version, None, &base_path)
            .map_err(|err| Error::Provider {
                version: version.to_owned(),
                source: Box::new(err),
            })?;

        // Serialize document
        let value = self.conventions.to_value(&document)?;
        Ok(Some(Response::from_json(&value)?))
    }
}

#[allow(clippy::must_use_candidate)]
impl<P> Document<P> {
    /// Returns the document route.
    #[inline]
    pub fn route(&self) -> &Template {
        &self.route
    }

    /// Returns the document provider.
    #[inline]
    pub fn provider(&self) -> &P {
        &self.provider
    }
}

// ----------------------------------------------------------------------------
// Trait implementations
// ----------------------------------------------------------------------------

impl<P> Middleware for Document<P>
where
    P: Provider,
{
    /// Processes the given request.
    ///
    /// Matched requests are answered, even if the document can't be obtained,
    /// in which case "500 Internal Server Error" is returned. All other
    /// requests are passed on to the next handler.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(skip_all, fields(path = %req.uri.path))
    )]
    fn process(&self, req: Request, next: &dyn Handler) -> Response {
        match self.try_handle(&req).transpose() {
            Some(res) => Response::from(res),
            None => next.handle(req),
        }
    }
}

// ----------------------------------------------------------------------------
// Tests
// ----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use serde::Serialize;
    use serde_json::{json, Value};
    use std::convert::Infallible;
    use std::sync::Mutex;

    use crate::convention::Naming;
    use crate::handler::NotFound;
    use crate::http::Status;
    use crate::provider::{Filter, Versions};

    use super::*;

    #[derive(Serialize)]
    struct Description {
        swagger: &'static str,
        base_path: String,
        host: Option<&'static str>,
    }

    /// Provider recording its invocations.
    #[derive(Default)]
    struct Recording {
        calls: Mutex<Vec<(String, bool, String)>>,
    }

    impl Provider for Recording {
        type Document = Description;
        type Error = Infallible;

        fn document(
            &self, version: &str, filter: Option<&Filter>, base_path: &str,
        ) -> std::result::Result<Description, Infallible> {
            self.calls.lock().unwrap().push((
                version.to_owned(),
                filter.is_some(),
                base_path.to_owned(),
            ));
            Ok(Description {
                swagger: "2.0",
                base_path: base_path.to_owned(),
                host: None,
            })
        }
    }

    fn document() -> Document<Recording> {
        Document::new("/docs/{apiVersion}/doc.json", Recording::default())
            .unwrap()
    }

    #[test]
    fn test_invokes_provider() {
        let document = document();
        let req = Request::new()
            .uri("/docs/v1/doc.json")
            .header(Header::XForwardedPathBase, "/gateway");

        let res = document.process(req, &NotFound);
        assert_eq!(res.status, Status::Ok);
        let content_type = res.headers.get(Header::ContentType);
        assert_eq!(content_type, Some("application/json"));

        let calls = document.provider().calls.lock().unwrap();
        assert_eq!(
            *calls,
            [(String::from("v1"), false, String::from("/gateway"))]
        );

        let value: Value = serde_json::from_slice(&res.body).unwrap();
        assert_eq!(value, json!({ "swagger": "2.0", "basePath": "/gateway" }));
    }

    #[test]
    fn test_combines_path_bases() {
        let document = document();
        let req = Request::new()
            .uri("/docs/v2/doc.json")
            .header(Header::XForwardedPathBase, "gw/")
            .base("/app");

        let _ = document.process(req, &NotFound);
        let calls = document.provider().calls.lock().unwrap();
        assert_eq!(calls[0].2, "/gw/app");
    }

    #[test]
    fn test_matches_case_insensitive() {
        let document = document();
        let req = Request::new().uri("/DOCS/v1/Doc.Json");
        let res = document.process(req, &NotFound);
        assert_eq!(res.status, Status::Ok);

        let calls = document.provider().calls.lock().unwrap();
        assert_eq!(calls[0].0, "v1");
    }

    #[test]
    fn test_passes_through() {
        let document = document();
        let test_cases = vec![
            Request::new().method(Method::Post).uri("/docs/v1/doc.json"),
            Request::new().method(Method::Head).uri("/docs/v1/doc.json"),
            Request::new().uri("/docs/v1"),
            Request::new().uri("/docs/v1/doc.json/extra"),
            Request::new().uri("/other/v1/doc.json"),
        ];

        for req in test_cases {
            let res = document.process(req, &NotFound);
            assert_eq!(res.status, Status::NotFound);
        }
        assert!(document.provider().calls.lock().unwrap().is_empty());
    }

    #[test]
    fn test_method_token_case_sensitive() {
        let document = document();
        let test_cases = vec![("GET", true), ("get", false), ("Get", false)];
        for (token, expected) in test_cases {
            let answered = token.parse::<Method>().is_ok_and(|method| {
                let req = Request::new().method(method).uri("/docs/v1/doc.json");
                document.process(req, &NotFound).status == Status::Ok
            });
            assert_eq!(answered, expected, "Failed for token: {token}");
        }
        assert_eq!(document.provider().calls.lock().unwrap().len(), 1);
    }

    #[test]
    fn test_conventions() {
        let document = document().conventions(Conventions {
            naming: Naming::AsIs,
            omit_nulls: false,
        });

        let req = Request::new().uri("/docs/v1/doc.json");
        let res = document.process(req, &NotFound);
        let value: Value = serde_json::from_slice(&res.body).unwrap();
        assert_eq!(
            value,
            json!({ "swagger": "2.0", "base_path": "/", "host": null })
        );
    }

    #[test]
    fn test_unknown_version() {
        let provider = Versions::new().version("v1", json!({}));
        let document = Document::new("/docs/{apiVersion}/doc.json", provider)
            .unwrap();

        let req = Request::new().uri("/docs/v9/doc.json");
        let err = document.try_handle(&req).unwrap_err();
        assert!(matches!(err, Error::Provider { ref version, .. } if version == "v9"));

        let req = Request::new().uri("/docs/v9/doc.json");
        let res = document.process(req, &NotFound);
        assert_eq!(res.status, Status::InternalServerError);
    }

    #[cfg(feature = "tracing")]
    #[test]
    fn test_logs_failure() {
        let _ = tracing_subscriber::fmt().with_test_writer().try_init();
        let document = Document::new("/docs/{apiVersion}", Versions::new())
            .unwrap();

        let res = document.process(Request::new().uri("/docs/v1"), &NotFound);
        assert_eq!(res.status, Status::InternalServerError);
    }

    #[test]
    fn test_route_without_version() {
        let res = Document::new("/docs/{version}/doc.json", Versions::new());
        assert!(matches!(
            res,
            Err(handler::Error::Parameter { name: API_VERSION, .. })
        ));

        let res = Document::new("/docs/{apiVersion", Versions::new());
        assert!(matches!(res, Err(handler::Error::Route(_))));
    }
}
