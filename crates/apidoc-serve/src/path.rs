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

//! Path base resolution.
//!
//! Applications behind reverse proxies or mounted under a sub-path are not
//! reachable at the paths they see. Absolute paths embedded in responses must
//! therefore be prefixed with the externally visible path base, which is
//! combined from the `X-Forwarded-PathBase` header set by the proxy and the
//! path base reported by the hosting framework.

// ----------------------------------------------------------------------------
// Functions
// ----------------------------------------------------------------------------

/// Resolves the externally visible path base.
///
/// The forwarded path base comes first, followed by the framework's path base,
/// each trimmed of leading and trailing slashes. Blank values, i.e., empty or
/// whitespace-only, are treated as absent. The result always starts with `/`,
/// and never ends with `/`, unless it is `/` itself.
///
/// # Examples
///
/// ```
/// use apidoc_serve::path::resolve;
///
/// // Resolve path bases
/// assert_eq!(resolve(None, ""), "/");
/// assert_eq!(resolve(Some("/api/"), ""), "/api");
/// assert_eq!(resolve(None, "/base"), "/base");
/// assert_eq!(resolve(Some("x/"), "/y"), "/x/y");
/// ```
#[must_use]
pub fn resolve(forwarded: Option<&str>, base: &str) -> String {
    join([forwarded.unwrap_or_default(), base])
}

/// Joins the given parts into an absolute path.
///
/// Every part is trimmed of leading and trailing slashes, and blank parts are
/// skipped. If no parts remain, the result is `/`.
///
/// # Examples
///
/// ```
/// use apidoc_serve::path::join;
///
/// // Join parts
/// assert_eq!(join(["/gw/", "v1/doc.json"]), "/gw/v1/doc.json");
/// assert_eq!(join(["", "  "]), "/");
/// ```
#[must_use]
pub fn join<'a, I>(parts: I) -> String
where
    I: IntoIterator<Item = &'a str>,
{
    let mut path = String::new();
    for part in parts {
        // A part consisting only of slashes is not blank, and is kept as an
        // empty segment, so only whitespace and empty parts are skipped
        if part.trim().is_empty() {
            continue;
        }

        path.push('/');
        path.push_str(part.trim_matches('/'));
    }

    // Ensure the path is never empty
    if path.is_empty() {
        path.push('/');
    }
    path
}

// ----------------------------------------------------------------------------
// Tests
// ----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve() {
        let test_cases = vec![
            (None, "", "/"),
            (Some(""), "", "/"),
            (Some("   "), " ", "/"),
            (Some("/api/"), "", "/api"),
            (None, "/base", "/base"),
            (Some("x/"), "/y", "/x/y"),
            (Some("/gateway"), "", "/gateway"),
            (Some("/a/b/"), "/c/d/", "/a/b/c/d"),
        ];

        for (forwarded, base, expected) in test_cases {
            assert_eq!(
                resolve(forwarded, base),
                expected,
                "Failed for resolve({forwarded:?}, {base:?})"
            );
        }
    }

    #[test]
    fn test_resolve_never_fails() {
        for value in ["/", "//", "\t", "ä/ö", "%2F"] {
            let path = resolve(Some(value), value);
            assert!(path.starts_with('/'), "Failed for value: {value:?}");
        }
    }
}
