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

//! Embedded assets.

use std::collections::BTreeMap;
use std::io;

use super::Loader;

// ----------------------------------------------------------------------------
// Constants
// ----------------------------------------------------------------------------

/// Bundled UI shell.
const INDEX: &str = include_str!("../../assets/index.html");

// ----------------------------------------------------------------------------
// Structs
// ----------------------------------------------------------------------------

/// Embedded assets.
///
/// This loader serves assets compiled into the binary. It always includes the
/// bundled UI shell as `index.html`, which loads the UI from a CDN, and can be
/// extended with further assets, or have the shell replaced.
///
/// # Examples
///
/// ```
/// # use std::error::Error;
/// # fn main() -> Result<(), Box<dyn Error>> {
/// use apidoc_serve::asset::{Embedded, Loader};
///
/// // Create loader with custom asset
/// let loader = Embedded::new()
///     .asset("custom.html", "<a href=\"%(DocumentUrl)\">API</a>");
///
/// // Load assets
/// assert!(loader.load("index.html")?.is_some());
/// assert!(loader.load("custom.html")?.is_some());
/// assert!(loader.load("missing.html")?.is_none());
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug)]
pub struct Embedded {
    /// Assets by name.
    assets: BTreeMap<&'static str, &'static str>,
}

// ----------------------------------------------------------------------------
// Implementations
// ----------------------------------------------------------------------------

impl Embedded {
    /// Creates a loader with the bundled assets.
    #[must_use]
    pub fn new() -> Self {
        let mut assets = BTreeMap::new();
        assets.insert("index.html", INDEX);
        Self { assets }
    }

    /// Adds an asset, replacing an existing asset with the same name.
    #[must_use]
    pub fn asset(mut self, name: &'static str, content: &'static str) -> Self {
        self.assets.insert(name, content);
        self
    }
}

// ----------------------------------------------------------------------------
// Trait implementations
// ----------------------------------------------------------------------------

impl Loader for Embedded {
    fn load(&self, name: &str) -> io::Result<Option<String>> {
        Ok(self.assets.get(name).map(|content| (*content).to_owned()))
    }
}

impl Default for Embedded {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}
