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

//! Configuration sections.

use serde::Deserialize;

use crate::convention::Conventions;

// ----------------------------------------------------------------------------
// Structs
// ----------------------------------------------------------------------------

/// Document settings.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Document {
    /// Document route, which must contain `{apiVersion}`.
    pub route: String,
    /// Serialization conventions.
    pub conventions: Conventions,
}

/// UI settings.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Interface {
    /// UI route.
    pub route: String,
    /// Document path embedded into the UI shell.
    pub document_path: String,
    /// UI shell asset name.
    pub asset: String,
}

/// Redirect settings.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Redirect {
    /// Route to redirect from.
    pub from: String,
    /// Path to redirect to, relative to the path base.
    pub to: String,
}

// ----------------------------------------------------------------------------
// Trait implementations
// ----------------------------------------------------------------------------

impl Default for Document {
    fn default() -> Self {
        Self {
            route: String::from("/swagger/{apiVersion}/swagger.json"),
            conventions: Conventions::default(),
        }
    }
}

impl Default for Interface {
    fn default() -> Self {
        Self {
            route: String::from("/swagger/ui/index.html"),
            document_path: String::from("swagger/v1/swagger.json"),
            asset: String::from("index.html"),
        }
    }
}

impl Default for Redirect {
    fn default() -> Self {
        Self {
            from: String::from("/swagger/ui"),
            to: String::from("swagger/ui/index.html"),
        }
    }
}
