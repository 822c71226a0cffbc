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

//! HTTP response extensions.

use serde::Serialize;

use crate::http::{Header, Status};

use super::Response;

// ----------------------------------------------------------------------------
// Traits
// ----------------------------------------------------------------------------

/// Extension trait for the `Response` type providing additional functionality.
pub trait ResponseExt: Sized {
    /// Creates a response from plain text.
    fn from_text<S>(content: S) -> Response
    where
        S: Into<String>,
    {
        Response::new() // fmt
            .status(Status::Ok)
            .text(content)
    }

    /// Creates a response from an HTML document.
    ///
    /// # Examples
    ///
    /// ```
    /// use apidoc_serve::http::response::ResponseExt;
    /// use apidoc_serve::http::{Header, Response};
    ///
    /// // Create response from HTML
    /// let res = Response::from_html("<html></html>");
    /// assert_eq!(res.headers.get(Header::ContentType), Some("text/html"));
    /// ```
    fn from_html<S>(content: S) -> Response
    where
        S: Into<String>,
    {
        let content = content.into();
        Response::new()
            .status(Status::Ok)
            .header(Header::ContentType, "text/html")
            .header(Header::ContentLength, content.len())
            .body(content)
    }

    /// Creates a response from a value serialized as JSON.
    ///
    /// The value is written straight into the response body, which is never
    /// handed out in case serialization fails midway.
    ///
    /// # Examples
    ///
    /// ```
    /// # use std::error::Error;
    /// # fn main() -> Result<(), Box<dyn Error>> {
    /// use apidoc_serve::http::response::ResponseExt;
    /// use apidoc_serve::http::{Header, Response};
    ///
    /// // Create response from value
    /// let res = Response::from_json(&["v1", "v2"])?;
    /// assert_eq!(res.body, br#"["v1","v2"]"#);
    /// assert_eq!(
    ///     res.headers.get(Header::ContentType),
    ///     Some("application/json")
    /// );
    /// # Ok(())
    /// # }
    /// ```
    fn from_json<T>(value: &T) -> serde_json::Result<Response>
    where
        T: Serialize + ?Sized,
    {
        let mut body = Vec::new();
        serde_json::to_writer(&mut body, value)?;
        Ok(Response::new()
            .status(Status::Ok)
            .header(Header::ContentType, "application/json")
            .header(Header::ContentLength, body.len())
            .body(body))
    }

    /// Creates a response from a status code.
    ///
    /// This is a convenience method to create a response with a status code
    /// and a text body, particularly useful for error handling.
    #[must_use]
    fn from_status(status: Status) -> Response {
        Response::new() // fmt
            .status(status)
            .text(status.reason())
    }

    /// Creates a redirect response.
    ///
    /// # Examples
    ///
    /// ```
    /// use apidoc_serve::http::response::ResponseExt;
    /// use apidoc_serve::http::{Header, Response, Status};
    ///
    /// // Create redirect response
    /// let res = Response::redirect("/app/swagger/ui");
    /// assert_eq!(res.status, Status::Found);
    /// assert_eq!(res.headers.get(Header::Location), Some("/app/swagger/ui"));
    /// ```
    #[must_use]
    fn redirect<L>(location: L) -> Response
    where
        L: ToString,
    {
        Response::new()
            .status(Status::Found)
            .header(Header::Location, location)
            .header(Header::ContentLength, 0)
    }

    /// Sets the given text as the body of the response.
    fn text<S>(self, content: S) -> Response
    where
        S: Into<String>;
}

// ----------------------------------------------------------------------------
// Blanket implementations
// ----------------------------------------------------------------------------

impl ResponseExt for Response {
    /// Sets the given text as the body of the response.
    fn text<S>(self, content: S) -> Response
    where
        S: Into<String>,
    {
        let content = content.into();
        self.header(Header::ContentType, "text/plain; charset=utf-8")
            .header(Header::ContentLength, content.len())
            .body(content)
    }
}
