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

//! Directory assets.

use std::fs;
use std::io;
use std::path::{Component, Path, PathBuf};

use super::Loader;

// ----------------------------------------------------------------------------
// Structs
// ----------------------------------------------------------------------------

/// Directory assets.
///
/// This loader searches the given directories in order, and returns the first
/// asset found, which allows to override assets, e.g., a customized UI shell
/// next to a default one. Names must be relative and non-empty, and must not
/// leave the directory they're resolved against, or the asset is considered
/// missing.
#[derive(Clone, Debug)]
pub struct Directory {
    /// Asset search directories.
    dirs: Vec<PathBuf>,
}

// ----------------------------------------------------------------------------
// Implementations
// ----------------------------------------------------------------------------

impl Directory {
    /// Creates a loader for the given directories.
    pub fn new<I, P>(dirs: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        Self {
            dirs: dirs.into_iter().map(Into::into).collect(),
        }
    }
}

// ----------------------------------------------------------------------------
// Trait implementations
// ----------------------------------------------------------------------------

impl Loader for Directory {
    fn load(&self, name: &str) -> io::Result<Option<String>> {
        let path = Path::new(name);
        let mut components = path.components().peekable();
        if components.peek().is_none()
            || !components.all(|c| matches!(c, Component::Normal(_)))
        {
            return Ok(None);
        }

        // Search all directories, first hit wins
        for dir in &self.dirs {
            match fs::read_to_string(dir.join(path)) {
                Ok(content) => return Ok(Some(content)),
                Err(err) if err.kind() == io::ErrorKind::NotFound => {}
                Err(err) => return Err(err),
            }
        }

        // No asset found
        Ok(None)
    }
}

// ----------------------------------------------------------------------------
// Tests
// ----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;

    fn create_test_dir(assets: &[(&str, &str)]) -> TempDir {
        let dir = TempDir::new().unwrap();
        for (name, content) in assets {
            fs::write(dir.path().join(name), content).unwrap();
        }
        dir
    }

    #[test]
    fn test_first_hit_wins() {
        let first = create_test_dir(&[("index.html", "first")]);
        let second = create_test_dir(&[
            ("index.html", "second"),
            ("other.html", "other"),
        ]);

        let loader = Directory::new([first.path(), second.path()]);
        let test_cases = vec![
            ("index.html", Some("first")),
            ("other.html", Some("other")),
            ("missing.html", None),
        ];
        for (name, expected) in test_cases {
            assert_eq!(
                loader.load(name).unwrap().as_deref(),
                expected,
                "Failed for name: {name}"
            );
        }
    }

    #[test]
    fn test_rejects_escaping_names() {
        let dir = create_test_dir(&[("index.html", "outside")]);
        fs::create_dir(dir.path().join("nested")).unwrap();

        let loader = Directory::new([dir.path().join("nested")]);
        assert_eq!(loader.load("../index.html").unwrap(), None);
        assert_eq!(loader.load("/etc/passwd").unwrap(), None);
        assert_eq!(loader.load("").unwrap(), None);
    }
}
