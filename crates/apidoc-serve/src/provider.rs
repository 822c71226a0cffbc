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

//! Document provider.

use serde::Serialize;
use std::error::Error as StdError;
use std::sync::Arc;

mod error;
mod versions;

pub use error::{Error, Result};
pub use versions::Versions;

// ----------------------------------------------------------------------------
// Type aliases
// ----------------------------------------------------------------------------

/// Document filter.
///
/// Filters are predicates over the relative path of a described route, e.g.,
/// `/pets/{id}`, deciding whether the route is included in the document.
pub type Filter = dyn Fn(&str) -> bool + Send + Sync;

// ----------------------------------------------------------------------------
// Traits
// ----------------------------------------------------------------------------

/// Document provider.
///
/// Providers generate API description documents from whatever metadata the
/// application has about its routes. They are shared by all requests, and
/// must be safe to call concurrently, which is why the trait requires [`Send`]
/// and [`Sync`]. Providers are free to synchronize internally.
///
/// Documents are opaque to this crate, and only need to be serializable. How
/// they are serialized, i.e., naming of fields and omission of null values,
/// is decided by the [`Conventions`][] of the middleware serving them.
///
/// [`Conventions`]: crate::convention::Conventions
///
/// # Examples
///
/// ```
/// use std::convert::Infallible;
/// use apidoc_serve::provider::{Filter, Provider};
///
/// // Define provider
/// struct Static;
///
/// // Create provider implementation
/// impl Provider for Static {
///     type Document = String;
///     type Error = Infallible;
///
///     fn document(
///         &self, version: &str, _filter: Option<&Filter>, base_path: &str,
///     ) -> Result<Self::Document, Self::Error> {
///         Ok(format!("{version} at {base_path}"))
///     }
/// }
///
/// // Obtain document
/// let document = Static.document("v1", None, "/gateway");
/// assert_eq!(document, Ok(String::from("v1 at /gateway")));
/// ```
pub trait Provider: Send + Sync + 'static {
    /// Document type.
    type Document: Serialize;
    /// Error type.
    type Error: StdError + Send + Sync + 'static;

    /// Returns the document for the given version.
    ///
    /// The base path is the externally visible path base of the application,
    /// which providers should embed in the document, so that clients resolve
    /// the described routes correctly.
    ///
    /// # Errors
    ///
    /// This method should return an error if the version is unknown, or the
    /// document could not be generated.
    fn document(
        &self, version: &str, filter: Option<&Filter>, base_path: &str,
    ) -> std::result::Result<Self::Document, Self::Error>;
}

// ----------------------------------------------------------------------------
// Blanket implementations
// ----------------------------------------------------------------------------

impl<P> Provider for Arc<P>
where
    P: Provider,
{
    type Document = P::Document;
    type Error = P::Error;

    #[inline]
    fn document(
        &self, version: &str, filter: Option<&Filter>, base_path: &str,
    ) -> std::result::Result<Self::Document, Self::Error> {
        self.as_ref().document(version, filter, base_path)
    }
}
