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

//! Configuration.

use serde::Deserialize;

use crate::asset::Loader;
use crate::handler::stack::Builder;
use crate::handler::{Result, Stack};
use crate::middleware;
use crate::provider::Provider;

mod sections;

pub use sections::{Document, Interface, Redirect};

// ----------------------------------------------------------------------------
// Structs
// ----------------------------------------------------------------------------

/// Configuration.
///
/// All settings are optional, and default to serving the document at
/// `/swagger/{apiVersion}/swagger.json` and the UI at `/swagger/ui/index.html`,
/// with `/swagger/ui` redirecting to the UI. Keys are camel cased, so the
/// configuration can be embedded into the host's configuration files as is.
/// Setting `redirect` to `null` disables the redirect.
///
/// Loading configuration, e.g., from files or the environment, is left to the
/// host, as is the choice of format, as long as it's supported by [`serde`].
///
/// # Examples
///
/// ```
/// # use std::error::Error;
/// # fn main() -> Result<(), Box<dyn Error>> {
/// use apidoc_serve::config::Config;
///
/// // Parse configuration
/// let config: Config = serde_json::from_str(r#"{
///     "document": { "route": "/docs/{apiVersion}/doc.json" },
///     "interface": { "documentPath": "docs/v1/doc.json" },
///     "redirect": null
/// }"#)?;
/// assert_eq!(config.interface.route, "/swagger/ui/index.html");
/// assert!(config.redirect.is_none());
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Config {
    /// Document settings.
    pub document: Document,
    /// UI settings.
    pub interface: Interface,
    /// Redirect settings.
    pub redirect: Option<Redirect>,
}

// ----------------------------------------------------------------------------
// Implementations
// ----------------------------------------------------------------------------

impl Config {
    /// Creates a stack builder with all configured middlewares.
    ///
    /// The redirect comes first, followed by the UI and the document, so the
    /// returned builder can be extended with further middlewares, or turned
    /// into a [`Stack`] placed in front of the application.
    ///
    /// # Errors
    ///
    /// This method returns an error if any route is invalid, the document
    /// route lacks `{apiVersion}`, or the UI shell can't be loaded.
    ///
    /// # Examples
    ///
    /// ```
    /// # use std::error::Error;
    /// # fn main() -> Result<(), Box<dyn Error>> {
    /// use apidoc_serve::asset::Embedded;
    /// use apidoc_serve::config::Config;
    /// use apidoc_serve::handler::{Handler, TryIntoHandler};
    /// use apidoc_serve::http::{Request, Status};
    /// use apidoc_serve::provider::Versions;
    /// use serde_json::json;
    ///
    /// // Create stack from configuration
    /// let provider = Versions::new().version("v1", json!({ "swagger": "2.0" }));
    /// let stack = Config::default()
    ///     .stack(provider, &Embedded::new())?
    ///     .try_into_handler()?;
    ///
    /// // Handle request with stack
    /// let res = stack.handle(Request::new().uri("/swagger/v1/swagger.json"));
    /// assert_eq!(res.status, Status::Ok);
    /// # Ok(())
    /// # }
    /// ```
    pub fn stack<P, L>(&self, provider: P, loader: &L) -> Result<Builder>
    where
        P: Provider,
        L: Loader + ?Sized,
    {
        let mut builder = Stack::new();
        if let Some(redirect) = &self.redirect {
            builder.add(middleware::Redirect::new(
                &redirect.from,
                redirect.to.as_str(),
            )?);
        }

        // UI shell is loaded once, here
        builder.add(middleware::Interface::load(
            &self.interface.route,
            self.interface.document_path.as_str(),
            loader,
            &self.interface.asset,
        )?);

        // Document is served last
        let document = middleware::Document::new(&self.document.route, provider)?;
        builder.add(document.conventions(self.document.conventions));
        Ok(builder)
    }
}

// ----------------------------------------------------------------------------
// Trait implementations
// ----------------------------------------------------------------------------

impl Default for Config {
    /// Creates the default configuration.
    fn default() -> Self {
        Self {
            document: Document::default(),
            interface: Interface::default(),
            redirect: Some(Redirect::default()),
        }
    }
}

// ----------------------------------------------------------------------------
// Tests
// ----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use serde_json::{json, Value};
    use std::sync::Arc;
    use std::thread;

    use crate::asset::Embedded;
    use crate::convention::Naming;
    use crate::handler::{Error, Handler, TryIntoHandler};
    use crate::http::{Header, Method, Request, Status};
    use crate::provider::Versions;

    use super::*;

    fn provider() -> Versions {
        Versions::new()
            .version("v1", json!({ "swagger": "2.0", "host": null }))
            .version("v2", json!({ "swagger": "2.0" }))
    }

    fn stack(config: &Config) -> crate::handler::Stack {
        config
            .stack(provider(), &Embedded::new())
            .unwrap()
            .try_into_handler()
            .unwrap()
    }

    #[test]
    fn test_defaults() {
        let config: Config = serde_json::from_str("{}").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.document.route, "/swagger/{apiVersion}/swagger.json");
        assert_eq!(config.interface.document_path, "swagger/v1/swagger.json");
        assert_eq!(config.interface.asset, "index.html");
        assert_eq!(
            config.redirect,
            Some(Redirect {
                from: String::from("/swagger/ui"),
                to: String::from("swagger/ui/index.html"),
            })
        );
    }

    #[test]
    fn test_deserialize() {
        let config: Config = serde_json::from_value(json!({
            "document": {
                "route": "/api-docs/{apiVersion}",
                "conventions": { "naming": "asIs", "omitNulls": false }
            },
            "interface": { "route": "/docs", "asset": "custom.html" },
            "redirect": { "from": "/" }
        }))
        .unwrap();

        assert_eq!(config.document.route, "/api-docs/{apiVersion}");
        assert_eq!(config.document.conventions.naming, Naming::AsIs);
        assert!(!config.document.conventions.omit_nulls);
        assert_eq!(config.interface.route, "/docs");
        assert_eq!(config.interface.document_path, "swagger/v1/swagger.json");
        assert_eq!(config.interface.asset, "custom.html");
        assert_eq!(
            config.redirect.map(|redirect| redirect.to),
            Some(String::from("swagger/ui/index.html"))
        );
    }

    #[test]
    fn test_stack() {
        let stack = stack(&Config::default());
        assert_eq!(stack.len(), 3);

        // Redirect to UI
        let res = stack.handle(Request::new().uri("/swagger/ui/"));
        assert_eq!(res.status, Status::Found);
        assert_eq!(
            res.headers.get(Header::Location),
            Some("/swagger/ui/index.html")
        );

        // Serve UI
        let res = stack.handle(Request::new().uri("/swagger/ui/index.html"));
        assert_eq!(res.status, Status::Ok);
        let body = String::from_utf8(res.body).unwrap();
        assert!(body.contains("\"/swagger/v1/swagger.json\""));

        // Serve document
        let res = stack.handle(Request::new().uri("/swagger/v1/swagger.json"));
        assert_eq!(res.status, Status::Ok);
        let value: Value = serde_json::from_slice(&res.body).unwrap();
        assert_eq!(value, json!({ "swagger": "2.0", "basePath": "/" }));

        // Fail for unknown version
        let res = stack.handle(Request::new().uri("/swagger/v9/swagger.json"));
        assert_eq!(res.status, Status::InternalServerError);

        // Pass through everything else
        let req = Request::new()
            .method(Method::Put)
            .uri("/swagger/v1/swagger.json");
        assert_eq!(stack.handle(req).status, Status::NotFound);
        let res = stack.handle(Request::new().uri("/pets"));
        assert_eq!(res.status, Status::NotFound);
    }

    #[test]
    fn test_stack_without_redirect() {
        let config = Config { redirect: None, ..Config::default() };
        let stack = stack(&config);
        assert_eq!(stack.len(), 2);

        let res = stack.handle(Request::new().uri("/swagger/ui"));
        assert_eq!(res.status, Status::NotFound);
    }

    #[test]
    fn test_stack_errors() {
        let loader = Embedded::new();

        let mut config = Config::default();
        config.document.route = String::from("/swagger/{version}/swagger.json");
        let res = config.stack(provider(), &loader);
        assert!(matches!(res, Err(Error::Parameter { .. })));

        let mut config = Config::default();
        config.interface.asset = String::from("missing.html");
        let res = config.stack(provider(), &loader);
        assert!(matches!(res, Err(Error::AssetNotFound(_))));

        let mut config = Config::default();
        config.redirect = Some(Redirect {
            from: String::from("/{a}/{a}"),
            ..Redirect::default()
        });
        let res = config.stack(provider(), &loader);
        assert!(matches!(res, Err(Error::Route(_))));
    }

    #[test]
    fn test_concurrent_requests() {
        let stack = Arc::new(stack(&Config::default()));
        let expected = stack.handle(Request::new().uri("/swagger/ui/index.html"));

        thread::scope(|scope| {
            for n in 0..8 {
                let stack = Arc::clone(&stack);
                let expected = &expected;
                scope.spawn(move || {
                    for _ in 0..32 {
                        let uri = if n % 2 == 0 {
                            "/swagger/v1/swagger.json"
                        } else {
                            "/swagger/v2/swagger.json"
                        };
                        let res = stack.handle(Request::new().uri(uri));
                        assert_eq!(res.status, Status::Ok);

                        let req = Request::new().uri("/swagger/ui/index.html");
                        let res = stack.handle(req);
                        assert_eq!(&res, expected);
                    }
                });
            }
        });
    }
}
