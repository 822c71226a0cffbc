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

//! UI template.

use std::collections::BTreeMap;
use std::fmt;

use crate::asset::Loader;
use crate::handler::{Error, Result};

// ----------------------------------------------------------------------------
// Constants
// ----------------------------------------------------------------------------

/// Placeholder token for the document URL.
pub const DOCUMENT_URL: &str = "%(DocumentUrl)";

// ----------------------------------------------------------------------------
// Structs
// ----------------------------------------------------------------------------

/// UI template.
///
/// Templates hold the text of the UI shell, which is loaded once when the UI
/// middleware is created, and never changes afterwards. Rendering replaces
/// placeholder tokens in a fresh copy of the text, leaving the template as is,
/// so a single template can be rendered by any number of requests at once.
///
/// Note that this is plain literal replacement, not a template language.
///
/// # Examples
///
/// ```
/// use apidoc_serve::template::{Placeholders, Template, DOCUMENT_URL};
///
/// // Create template and placeholders
/// let template = Template::new(r#"url: "%(DocumentUrl)""#);
/// let placeholders = Placeholders::new()
///     .with(DOCUMENT_URL, "/v1/swagger.json");
///
/// // Render template
/// let text = template.render(&placeholders);
/// assert_eq!(text, r#"url: "/v1/swagger.json""#);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Template {
    /// Template text.
    text: String,
}

/// Placeholder values.
///
/// Placeholders map tokens to the values they're replaced with. Tokens are
/// literal strings, and are assumed to be disjoint, so the order in which
/// they're replaced doesn't matter.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Placeholders {
    /// Tokens and values.
    inner: BTreeMap<String, String>,
}

// ----------------------------------------------------------------------------
// Implementations
// ----------------------------------------------------------------------------

impl Template {
    /// Creates a template from the given text.
    #[must_use]
    pub fn new<S>(text: S) -> Self
    where
        S: Into<String>,
    {
        Self { text: text.into() }
    }

    /// Loads a template with the given loader.
    ///
    /// # Errors
    ///
    /// This method returns [`Error::AssetNotFound`], if the loader has no asset
    /// with the given name, and [`Error::Asset`], if loading failed.
    ///
    /// # Examples
    ///
    /// ```
    /// # use std::error::Error;
    /// # fn main() -> Result<(), Box<dyn Error>> {
    /// use apidoc_serve::asset::Embedded;
    /// use apidoc_serve::template::{Template, DOCUMENT_URL};
    ///
    /// // Load bundled template
    /// let template = Template::load(&Embedded::new(), "index.html")?;
    /// assert!(template.as_str().contains(DOCUMENT_URL));
    /// # Ok(())
    /// # }
    /// ```
    pub fn load<L>(loader: &L, name: &str) -> Result<Self>
    where
        L: Loader + ?Sized,
    {
        match loader.load(name) {
            Ok(Some(text)) => Ok(Self::new(text)),
            Ok(None) => Err(Error::AssetNotFound(name.to_owned())),
            Err(err) => Err(Error::Asset {
                name: name.to_owned(),
                source: err,
            }),
        }
    }

    /// Renders the template with the given placeholders.
    ///
    /// Every occurrence of every token is replaced. Empty tokens are ignored.
    #[must_use]
    pub fn render(&self, placeholders: &Placeholders) -> String {
        let mut text = self.text.clone();
        for (token, value) in placeholders {
            if !token.is_empty() && text.contains(token) {
                text = text.replace(token, value);
            }
        }
        text
    }
}

#[allow(clippy::must_use_candidate)]
impl Template {
    /// Returns the template text.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.text
    }
}

// ----------------------------------------------------------------------------

impl Placeholders {
    /// Creates an empty set of placeholders.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a placeholder, returning the placeholders.
    #[inline]
    #[must_use]
    pub fn with<T, V>(mut self, token: T, value: V) -> Self
    where
        T: Into<String>,
        V: Into<String>,
    {
        self.insert(token, value);
        self
    }

    /// Adds a placeholder, replacing the value of an existing token.
    pub fn insert<T, V>(&mut self, token: T, value: V)
    where
        T: Into<String>,
        V: Into<String>,
    {
        self.inner.insert(token.into(), value.into());
    }

    /// Returns the value for the given token.
    #[must_use]
    pub fn get(&self, token: &str) -> Option<&str> {
        self.inner.get(token).map(String::as_str)
    }
}

// ----------------------------------------------------------------------------
// Trait implementations
// ----------------------------------------------------------------------------

impl<'a> IntoIterator for &'a Placeholders {
    type Item = (&'a String, &'a String);
    type IntoIter = std::collections::btree_map::Iter<'a, String, String>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.inner.iter()
    }
}

impl fmt::Display for Template {
    /// Formats the template for display.
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.text)
    }
}

// ----------------------------------------------------------------------------
// Tests
// ----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use crate::asset::Embedded;
    use crate::handler::Error;

    use super::*;

    #[test]
    fn test_render_all_occurrences() {
        let template = Template::new("%(A) and %(A), but %(B)");
        let placeholders = Placeholders::new()
            .with("%(A)", "x")
            .with("%(B)", "y");
        assert_eq!(template.render(&placeholders), "x and x, but y");
    }

    #[test]
    fn test_render_leaves_template_unchanged() {
        let template = Template::new(DOCUMENT_URL);
        let before = template.clone();
        let placeholders = Placeholders::new().with(DOCUMENT_URL, "/doc");
        assert_eq!(template.render(&placeholders), "/doc");
        assert_eq!(template.render(&placeholders), "/doc");
        assert_eq!(template, before);
    }

    #[test]
    fn test_render_ignores_empty_token() {
        let template = Template::new("text");
        let placeholders = Placeholders::new().with("", "x");
        assert_eq!(template.render(&placeholders), "text");
    }

    #[test]
    fn test_load_missing() {
        let res = Template::load(&Embedded::new(), "missing.html");
        assert!(matches!(res, Err(Error::AssetNotFound(name)) if name == "missing.html"));
    }
}
