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

//! Serialization conventions.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::borrow::Cow;

mod serializer;

pub use serializer::Serializer;

// ----------------------------------------------------------------------------
// Enums
// ----------------------------------------------------------------------------

/// Naming convention for field names.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Naming {
    /// Keep field names as declared.
    AsIs,
    /// Convert field names to camel case.
    ///
    /// Names set with `#[serde(rename = "...")]` are converted as well, as
    /// they are indistinguishable from declared names once serialized. Types
    /// needing an exact name, e.g., `$ref`, should choose one that's already
    /// camel case.
    #[default]
    CamelCase,
}

// ----------------------------------------------------------------------------
// Structs
// ----------------------------------------------------------------------------

/// Serialization conventions.
///
/// Conventions decide how documents are serialized, independent of the types
/// they are made of. The naming convention applies to the fields of structs,
/// including fields flattened into them with `#[serde(flatten)]`, but never to
/// the keys of maps, which are data, e.g., paths or schema names. Maps that
/// are themselves flattened into a struct are the exception, as their keys
/// become fields of that struct.
/// Null values are omitted from structs and maps, but kept in sequences, as
/// removing them would shift the positions of the remaining elements.
///
/// Conventions are fixed when a middleware is created, so all documents served
/// by the same middleware are serialized alike.
///
/// # Examples
///
/// ```
/// # use std::error::Error;
/// # fn main() -> Result<(), Box<dyn Error>> {
/// use apidoc_serve::convention::Conventions;
/// use serde::Serialize;
/// use serde_json::json;
///
/// // Define document
/// #[derive(Serialize)]
/// struct Info {
///     api_version: &'static str,
///     terms_of_service: Option<&'static str>,
/// }
///
/// // Serialize document with default conventions
/// let info = Info { api_version: "v1", terms_of_service: None };
/// let value = Conventions::default().to_value(&info)?;
/// assert_eq!(value, json!({ "apiVersion": "v1" }));
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Conventions {
    /// Naming convention for field names.
    pub naming: Naming,
    /// Whether to omit null values.
    pub omit_nulls: bool,
}

// ----------------------------------------------------------------------------
// Implementations
// ----------------------------------------------------------------------------

impl Naming {
    /// Applies the naming convention to the given field name.
    ///
    /// Camel casing lower-cases the first character, and removes underscores,
    /// upper-casing the character that follows each of them.
    ///
    /// # Examples
    ///
    /// ```
    /// use apidoc_serve::convention::Naming;
    ///
    /// // Apply naming convention
    /// assert_eq!(Naming::CamelCase.apply("base_path"), "basePath");
    /// assert_eq!(Naming::CamelCase.apply("BasePath"), "basePath");
    /// assert_eq!(Naming::CamelCase.apply("$ref"), "$ref");
    /// assert_eq!(Naming::AsIs.apply("base_path"), "base_path");
    /// ```
    #[must_use]
    pub fn apply<'a>(&self, name: &'a str) -> Cow<'a, str> {
        match self {
            Naming::AsIs => Cow::Borrowed(name),
            Naming::CamelCase => camel_case(name),
        }
    }
}

impl Conventions {
    /// Serializes the given value into a JSON value, applying conventions.
    ///
    /// # Errors
    ///
    /// This method returns an error if the value can't be represented as JSON,
    /// e.g., if a map has keys that aren't strings or numbers.
    pub fn to_value<T>(&self, value: &T) -> serde_json::Result<Value>
    where
        T: Serialize + ?Sized,
    {
        value.serialize(Serializer::new(*self))
    }
}

// ----------------------------------------------------------------------------
// Trait implementations
// ----------------------------------------------------------------------------

impl Default for Conventions {
    /// Creates default conventions, camel casing and omitting nulls.
    fn default() -> Self {
        Self {
            naming: Naming::CamelCase,
            omit_nulls: true,
        }
    }
}

// ----------------------------------------------------------------------------
// Functions
// ----------------------------------------------------------------------------

/// Converts the given name to camel case.
fn camel_case(name: &str) -> Cow<'_, str> {
    let starts_upper = name.chars().next().is_some_and(char::is_uppercase);
    if !starts_upper && !name.contains('_') {
        return Cow::Borrowed(name);
    }

    // Leading underscores are kept, all others start a new word
    let mut output = String::with_capacity(name.len());
    let mut upper = false;
    for char in name.chars() {
        if output.is_empty() {
            output.extend(char.to_lowercase());
        } else if char == '_' {
            upper = true;
        } else if upper {
            output.extend(char.to_uppercase());
            upper = false;
        } else {
            output.push(char);
        }
    }
    Cow::Owned(output)
}

// ----------------------------------------------------------------------------
// Tests
// ----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_camel_case() {
        let test_cases = vec![
            ("swagger", "swagger"),
            ("base_path", "basePath"),
            ("BasePath", "basePath"),
            ("operation_id", "operationId"),
            ("x-logo", "x-logo"),
            ("$ref", "$ref"),
            ("type_", "type"),
            ("_private", "_private"),
            ("ExternalDocs", "externalDocs"),
            ("", ""),
        ];

        for (name, expected) in test_cases {
            assert_eq!(camel_case(name), expected, "Failed for name: {name}");
        }
    }

    #[test]
    fn test_renamed_fields_camel_cased() {
        #[derive(Serialize)]
        struct Tag {
            #[serde(rename = "ExternalDocs")]
            docs: &'static str,
            #[serde(rename = "$ref")]
            reference: &'static str,
        }

        let tag = Tag { docs: "a", reference: "b" };
        let value = Conventions::default().to_value(&tag).unwrap();
        assert_eq!(value, json!({ "externalDocs": "a", "$ref": "b" }));
    }

    #[test]
    fn test_deserialize() {
        let conventions: Conventions =
            serde_json::from_str(r#"{ "naming": "asIs" }"#).unwrap();
        assert_eq!(conventions.naming, Naming::AsIs);
        assert!(conventions.omit_nulls);
    }
}
