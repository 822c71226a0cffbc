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

//! Document provider for pre-built documents.

use serde_json::{Map, Value};
use std::collections::BTreeMap;

use super::{Error, Filter, Provider, Result};

// ----------------------------------------------------------------------------
// Structs
// ----------------------------------------------------------------------------

/// Document provider for pre-built documents.
///
/// This provider maps API versions to documents that were generated ahead of
/// time, e.g., at build time or on startup. It never mutates them. Instead,
/// each request receives a copy, in which the `basePath` member is set to the
/// externally visible path base, and from which all entries of the `paths`
/// member are removed that the filter rejects, if any.
///
/// # Examples
///
/// ```
/// # use std::error::Error;
/// # fn main() -> Result<(), Box<dyn Error>> {
/// use apidoc_serve::provider::{Provider, Versions};
/// use serde_json::json;
///
/// // Create provider and add document
/// let provider = Versions::new()
///     .version("v1", json!({ "swagger": "2.0", "paths": {} }));
///
/// // Obtain document
/// let document = provider.document("v1", None, "/gateway")?;
/// assert_eq!(document["basePath"], "/gateway");
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug, Default)]
pub struct Versions {
    /// Documents by version.
    documents: BTreeMap<String, Value>,
}

// ----------------------------------------------------------------------------
// Implementations
// ----------------------------------------------------------------------------

impl Versions {
    /// Creates a document provider.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a document for the given version, replacing any existing one.
    #[must_use]
    pub fn version<V>(mut self, version: V, document: Value) -> Self
    where
        V: Into<String>,
    {
        self.documents.insert(version.into(), document);
        self
    }
}

// ----------------------------------------------------------------------------
// Trait implementations
// ----------------------------------------------------------------------------

impl Provider for Versions {
    type Document = Value;
    type Error = Error;

    /// Returns the document for the given version.
    ///
    /// # Errors
    ///
    /// This method returns [`Error::UnknownVersion`], if no document was added
    /// for the given version.
    fn document(
        &self, version: &str, filter: Option<&Filter>, base_path: &str,
    ) -> Result<Value> {
        let mut document = self
            .documents
            .get(version)
            .cloned()
            .ok_or_else(|| Error::UnknownVersion(version.to_string()))?;

        // Documents that aren't objects are handed out unchanged, as there's
        // nowhere to put the base path
        if let Value::Object(members) = &mut document {
            members.insert("basePath".into(), Value::from(base_path));
            if let Some(filter) = filter {
                if let Some(Value::Object(paths)) = members.get_mut("paths") {
                    retain(paths, filter);
                }
            }
        }

        // Return document
        Ok(document)
    }
}

// ----------------------------------------------------------------------------
// Functions
// ----------------------------------------------------------------------------

/// Retains all paths accepted by the given filter.
fn retain(paths: &mut Map<String, Value>, filter: &Filter) {
    let rejected = paths
        .keys()
        .filter(|path| !filter(path.as_str()))
        .cloned()
        .collect::<Vec<_>>();
    for path in rejected {
        paths.remove(&path);
    }
}

// ----------------------------------------------------------------------------
// Tests
// ----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn provider() -> Versions {
        Versions::new().version(
            "v1",
            json!({
                "swagger": "2.0",
                "paths": { "/pets": {}, "/pets/{id}": {}, "/orders": {} }
            }),
        )
    }

    #[test]
    fn test_document_sets_base_path() {
        let document = provider().document("v1", None, "/gw").unwrap();
        assert_eq!(document["basePath"], "/gw");
        assert_eq!(document["paths"].as_object().unwrap().len(), 3);
    }

    #[test]
    fn test_document_applies_filter() {
        let filter = |path: &str| path.starts_with("/pets");
        let document = provider().document("v1", Some(&filter), "/").unwrap();
        let paths = document["paths"].as_object().unwrap();
        assert_eq!(paths.keys().collect::<Vec<_>>(), ["/pets", "/pets/{id}"]);
    }

    #[test]
    fn test_document_leaves_original_untouched() {
        let provider = provider();
        let _ = provider.document("v1", None, "/first").unwrap();
        let document = provider.document("v1", None, "/second").unwrap();
        assert_eq!(document["basePath"], "/second");
    }

    #[test]
    fn test_document_unknown_version() {
        let err = provider().document("v9", None, "/").unwrap_err();
        assert_eq!(err, Error::UnknownVersion(String::from("v9")));
    }
}
