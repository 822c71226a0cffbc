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

//! Middlewares serving API description documents and their browsable UI.
//!
//! The crate plugs into a synchronous request processing chain ahead of the
//! main application. Three middlewares answer requests they own and pass all
//! other requests on, untouched:
//!
//! - [`Document`][]: serves the generated API description document.
//! - [`Interface`][]: serves the HTML shell of the browsable UI.
//! - [`Redirect`][]: redirects convenience paths to the canonical UI path.
//!
//! Documents are generated by a [`Provider`][], which is the only external
//! collaborator, and paths embedded in responses honor the path base under
//! which the application is reachable, including the `X-Forwarded-PathBase`
//! header set by reverse proxies.
//!
//! [`Document`]: crate::middleware::Document
//! [`Interface`]: crate::middleware::Interface
//! [`Provider`]: crate::provider::Provider
//! [`Redirect`]: crate::middleware::Redirect

#![allow(clippy::doc_markdown)]
#![allow(clippy::missing_errors_doc)]

pub mod asset;
pub mod config;
pub mod convention;
pub mod handler;
pub mod http;
pub mod middleware;
pub mod path;
pub mod provider;
pub mod route;
pub mod template;
