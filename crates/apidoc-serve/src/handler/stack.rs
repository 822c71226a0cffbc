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

//! Stack.

use crate::handler::{Handler, NotFound};
use crate::http::{Request, Response};
use crate::middleware::Middleware;

mod builder;
mod factory;

pub use builder::Builder;

// ----------------------------------------------------------------------------
// Structs
// ----------------------------------------------------------------------------

/// Stack.
///
/// Stacks compose multiple middlewares into one ordered chain. A request is
/// offered to each middleware in turn: a middleware either answers it, which
/// ends processing, or passes it on unchanged to the next one. When no
/// middleware is left, the terminal handler answers the request. As a
/// [`Handler`], the stack answers with "404 Not Found", and as a
/// [`Middleware`], it defers to the handler it's given.
///
/// Stacks are immutable once built, and can be shared across threads, so a
/// single stack can serve all requests for the lifetime of a process.
///
/// # Examples
///
/// ```
/// # use std::error::Error;
/// # fn main() -> Result<(), Box<dyn Error>> {
/// use apidoc_serve::handler::{Handler, Stack, TryIntoHandler};
/// use apidoc_serve::http::{Request, Status};
/// use apidoc_serve::middleware::Redirect;
///
/// // Create stack with middleware
/// let stack = Stack::new()
///     .with(Redirect::new("/", "swagger/ui")?)
///     .try_into_handler()?;
///
/// // Handle request with stack
/// let res = stack.handle(Request::new().uri("/"));
/// assert_eq!(res.status, Status::Found);
///
/// // Handle request not owned by any middleware
/// let res = stack.handle(Request::new().uri("/pets"));
/// assert_eq!(res.status, Status::NotFound);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Default)]
pub struct Stack {
    /// Middlewares.
    middlewares: Vec<Box<dyn Middleware>>,
}

/// Stack handler.
///
/// The stack handler keeps track of all middlewares that haven't been invoked
/// yet, i.e., are next in line to be called, and a reference to the handler
/// which should be invoked, when no middleware is left.
struct StackHandler<'a> {
    /// Remaining middlewares.
    middlewares: &'a [Box<dyn Middleware>],
    /// Next handler.
    next: &'a dyn Handler,
}

// ----------------------------------------------------------------------------
// Implementations
// ----------------------------------------------------------------------------

impl Stack {
    /// Creates a stack.
    ///
    /// # Examples
    ///
    /// ```
    /// use apidoc_serve::handler::Stack;
    ///
    /// // Create stack
    /// let stack = Stack::new();
    /// ```
    #[allow(clippy::new_ret_no_self)]
    #[must_use]
    pub fn new() -> Builder {
        // Stacks are built from middlewares whose construction may fail, which
        // is why we return a builder that defers all conversions to the end
        Builder::new()
    }
}

#[allow(clippy::must_use_candidate)]
impl Stack {
    /// Returns the number of middlewares.
    #[inline]
    pub fn len(&self) -> usize {
        self.middlewares.len()
    }

    /// Returns whether there are any middlewares.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.middlewares.is_empty()
    }
}

// ----------------------------------------------------------------------------
// Trait implementations
// ----------------------------------------------------------------------------

impl Middleware for Stack {
    /// Processes the given request.
    ///
    /// This method starts with the first middleware, and passes the request
    /// from one middleware to the next. If no middleware is left, the given
    /// handler is invoked, which is usually the application itself.
    ///
    /// # Examples
    ///
    /// ```
    /// # use std::error::Error;
    /// # fn main() -> Result<(), Box<dyn Error>> {
    /// use apidoc_serve::handler::{Stack, TryIntoHandler};
    /// use apidoc_serve::http::response::ResponseExt;
    /// use apidoc_serve::http::{Request, Response, Status};
    /// use apidoc_serve::middleware::{Middleware, Redirect};
    ///
    /// // Create stack with middleware
    /// let stack = Stack::new()
    ///     .with(Redirect::new("/", "swagger/ui")?)
    ///     .try_into_handler()?;
    ///
    /// // Handle request with stack, deferring to the application
    /// let app = |_: Request| Response::from_text("Hello");
    /// let res = stack.process(Request::new().uri("/pets"), &app);
    /// assert_eq!(res.status, Status::Ok);
    /// # Ok(())
    /// # }
    /// ```
    fn process(&self, req: Request, next: &dyn Handler) -> Response {
        let handler = StackHandler {
            middlewares: &self.middlewares,
            next,
        };

        // Handle request
        handler.handle(req)
    }
}

// ----------------------------------------------------------------------------

impl Handler for Stack {
    /// Handles the given request, passing it through the entire stack.
    #[inline]
    fn handle(&self, req: Request) -> Response {
        self.process(req, &NotFound)
    }
}

impl Handler for StackHandler<'_> {
    /// Handles the given request.
    ///
    /// If there are any middlewares left, the first one is invoked with a new
    /// stack handler for the remaining middlewares. If no middlewares are
    /// left, the next handler is invoked.
    fn handle(&self, req: Request) -> Response {
        match self.middlewares {
            [] => self.next.handle(req),
            [middleware, middlewares @ ..] => {
                let next = StackHandler { middlewares, next: self.next };
                middleware.process(req, &next)
            }
        }
    }
}

// ----------------------------------------------------------------------------

impl FromIterator<Box<dyn Middleware>> for Stack {
    /// Creates a stack from an iterator.
    ///
    /// Note that this is primarily intended for internal use, as stacks are
    /// usually created through method chaining via [`Builder::with`].
    fn from_iter<T>(iter: T) -> Self
    where
        T: IntoIterator<Item = Box<dyn Middleware>>,
    {
        Self { middlewares: Vec::from_iter(iter) }
    }
}

// ----------------------------------------------------------------------------
// Tests
// ----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    use crate::handler::{Handler, Stack, TryIntoHandler};
    use crate::http::response::ResponseExt;
    use crate::http::{Request, Response, Status};

    #[test]
    fn test_middlewares_run_in_order() {
        let stack = Stack::new()
            .with(|req: Request, next: &dyn Handler| {
                if req.uri.path == "/first" {
                    Response::from_text("first")
                } else {
                    next.handle(req)
                }
            })
            .with(|_: Request, _: &dyn Handler| Response::from_text("second"))
            .try_into_handler()
            .unwrap();

        let res = stack.handle(Request::new().uri("/first"));
        assert_eq!(res.body, b"first");
        let res = stack.handle(Request::new().uri("/other"));
        assert_eq!(res.body, b"second");
    }

    #[test]
    fn test_answered_request_skips_remaining_middlewares() {
        let calls = Arc::new(AtomicUsize::new(0));
        let stack = Stack::new()
            .with(|_: Request, _: &dyn Handler| Response::from_text("done"))
            .with({
                let calls = Arc::clone(&calls);
                move |req: Request, next: &dyn Handler| {
                    calls.fetch_add(1, Ordering::SeqCst);
                    next.handle(req)
                }
            })
            .try_into_handler()
            .unwrap();

        let res = stack.handle(Request::new());
        assert_eq!(res.status, Status::Ok);
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_empty_stack_answers_not_found() {
        let stack = Stack::new().try_into_handler().unwrap();
        assert!(stack.is_empty());
        assert_eq!(stack.handle(Request::new()).status, Status::NotFound);
    }
}
