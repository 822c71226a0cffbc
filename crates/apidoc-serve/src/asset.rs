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

//! Asset loading.

use std::io;

mod directory;
mod embedded;

pub use directory::Directory;
pub use embedded::Embedded;

// ----------------------------------------------------------------------------
// Traits
// ----------------------------------------------------------------------------

/// Asset loader.
///
/// Loaders resolve assets, e.g., the UI shell, by their logical name. They are
/// only used when middlewares are created, so the middlewares themselves never
/// touch the file system or any other source while handling requests.
///
/// # Examples
///
/// ```
/// use std::io;
/// use apidoc_serve::asset::Loader;
///
/// // Define loader
/// struct Inline;
///
/// // Create loader implementation
/// impl Loader for Inline {
///     fn load(&self, name: &str) -> io::Result<Option<String>> {
///         Ok((name == "index.html").then(|| String::from("%(DocumentUrl)")))
///     }
/// }
///
/// // Load asset
/// let text = Inline.load("index.html")?;
/// assert!(text.is_some());
/// # Ok::<(), io::Error>(())
/// ```
pub trait Loader {
    /// Loads the asset with the given name.
    ///
    /// # Errors
    ///
    /// This method returns an error if the asset exists, but can't be read.
    /// Missing assets are not an error, and are reported as [`None`].
    fn load(&self, name: &str) -> io::Result<Option<String>>;
}

// ----------------------------------------------------------------------------
// Blanket implementations
// ----------------------------------------------------------------------------

impl<L> Loader for &L
where
    L: Loader + ?Sized,
{
    #[inline]
    fn load(&self, name: &str) -> io::Result<Option<String>> {
        (**self).load(name)
    }
}
