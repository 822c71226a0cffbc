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

//! Handler error.

use std::{io, result};
use thiserror::Error;

use crate::route;

// ----------------------------------------------------------------------------
// Enums
// ----------------------------------------------------------------------------

/// Handler error.
///
/// All errors in this enum are construction errors, raised when converting
/// configuration into middlewares. Once a handler is built, processing a
/// request can't fail in a way that is reported through this type.
#[derive(Debug, Error)]
pub enum Error {
    /// Route template error.
    #[error(transparent)]
    Route(#[from] route::Error),

    /// Route template lacks a required parameter.
    #[error("route '{route}' lacks required parameter '{{{name}}}'")]
    Parameter {
        /// Route template.
        route: String,
        /// Parameter name.
        name: &'static str,
    },

    /// Asset not found.
    #[error("asset not found: {0}")]
    AssetNotFound(String),

    /// Asset could not be loaded.
    #[error("could not load asset '{name}'")]
    Asset {
        /// Asset name.
        name: String,
        /// I/O error.
        #[source]
        source: io::Error,
    },
}

// ----------------------------------------------------------------------------
// Type aliases
// ----------------------------------------------------------------------------

/// Handler result.
pub type Result<T = ()> = result::Result<T, Error>;
