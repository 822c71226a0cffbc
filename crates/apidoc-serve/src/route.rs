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

//! Route template.

use std::fmt;
use std::str::FromStr;

mod error;
mod params;

pub use error::{Error, Result};
pub use params::Params;

// ----------------------------------------------------------------------------
// Enums
// ----------------------------------------------------------------------------

/// Route template segment.
#[derive(Clone, Debug, PartialEq, Eq)]
enum Segment {
    /// Literal segment, matched case-insensitively.
    Literal(String),
    /// Parameter segment, capturing exactly one path segment.
    Parameter(String),
}

// ----------------------------------------------------------------------------
// Structs
// ----------------------------------------------------------------------------

/// Route template.
///
/// Templates are compiled from patterns like `/docs/{apiVersion}/doc.json`,
/// where `{name}` denotes a parameter capturing exactly one path segment, and
/// everything else must match literally, albeit ignoring ASCII case. There are
/// no catch-all or optional parameters, so a path only matches if it has as
/// many segments as the template.
///
/// A single leading and trailing slash is insignificant, both in the pattern
/// and in the paths matched against it, which is why `swagger/ui`,
/// `/swagger/ui` and `/swagger/ui/` compile into templates with identical
/// behavior. The empty pattern and `/` both denote the root template, which
/// only matches `/`. Interior empty segments, as in `/docs//v1`, count as
/// segments. They never match a literal or a parameter, and are rejected in
/// patterns.
///
/// # Examples
///
/// ```
/// # use std::error::Error;
/// # fn main() -> Result<(), Box<dyn Error>> {
/// use apidoc_serve::route::Template;
///
/// // Create template from string
/// let template: Template = "/docs/{apiVersion}/doc.json".parse()?;
///
/// // Match path against template
/// let params = template.matches("/Docs/v1/doc.json").unwrap();
/// assert_eq!(params.get("apiVersion"), Some("v1"));
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Template {
    /// Original pattern.
    pattern: String,
    /// Compiled segments.
    segments: Vec<Segment>,
}

// ----------------------------------------------------------------------------
// Implementations
// ----------------------------------------------------------------------------

impl Template {
    /// Attempts to match the given path against the template.
    ///
    /// Returns the captured parameters, which are empty for templates without
    /// parameters, or [`None`] if the path doesn't match. Captured values are
    /// returned verbatim, i.e., without any case folding.
    ///
    /// # Examples
    ///
    /// ```
    /// # use std::error::Error;
    /// # fn main() -> Result<(), Box<dyn Error>> {
    /// use apidoc_serve::route::Template;
    ///
    /// // Create template from string
    /// let template: Template = "/swagger/ui/".parse()?;
    ///
    /// // Match paths against template
    /// assert!(template.matches("/swagger/ui").is_some());
    /// assert!(template.matches("/SWAGGER/UI/").is_some());
    /// assert!(template.matches("/swagger/ui/index.html").is_none());
    /// # Ok(())
    /// # }
    /// ```
    #[must_use]
    pub fn matches<'p>(&self, path: &'p str) -> Option<Params<'_, 'p>> {
        let mut params = Params::new();
        let mut parts = split(path);

        // Walk template and path segments in lockstep - literals must match,
        // ignoring case, and parameters capture any non-empty segment
        for segment in &self.segments {
            let part = parts.next()?;
            match segment {
                Segment::Literal(literal) => {
                    if !literal.eq_ignore_ascii_case(part) {
                        return None;
                    }
                }
                Segment::Parameter(_) if part.is_empty() => return None,
                Segment::Parameter(name) => params.push(name, part),
            }
        }

        // Ensure the path has no segments left
        parts.next().is_none().then_some(params)
    }

    /// Returns an iterator over the names of all parameters.
    ///
    /// # Examples
    ///
    /// ```
    /// # use std::error::Error;
    /// # fn main() -> Result<(), Box<dyn Error>> {
    /// use apidoc_serve::route::Template;
    ///
    /// // Create template from string
    /// let template: Template = "/docs/{apiVersion}/doc.json".parse()?;
    ///
    /// // Obtain parameter names
    /// let names = template.parameters().collect::<Vec<_>>();
    /// assert_eq!(names, ["apiVersion"]);
    /// # Ok(())
    /// # }
    /// ```
    pub fn parameters(&self) -> impl Iterator<Item = &str> {
        self.segments.iter().filter_map(|segment| match segment {
            Segment::Parameter(name) => Some(name.as_str()),
            Segment::Literal(_) => None,
        })
    }

    /// Returns whether the template declares the given parameter.
    #[must_use]
    pub fn contains<K>(&self, name: K) -> bool
    where
        K: AsRef<str>,
    {
        self.parameters().any(|param| param == name.as_ref())
    }
}

#[allow(clippy::must_use_candidate)]
impl Template {
    /// Returns the string representation.
    #[inline]
    pub fn as_str(&self) -> &str {
        self.pattern.as_str()
    }
}

// ----------------------------------------------------------------------------
// Trait implementations
// ----------------------------------------------------------------------------

impl FromStr for Template {
    type Err = Error;

    /// Attempts to compile a template from a string.
    ///
    /// # Errors
    ///
    /// This method returns an [`Error`] if a segment is empty or mixes
    /// parameters with literal text, a parameter is malformed, unsupported or
    /// declared more than once, or braces are unbalanced.
    ///
    /// # Examples
    ///
    /// ```
    /// use apidoc_serve::route::Template;
    ///
    /// // Compile invalid templates
    /// assert!("/docs/{apiVersion".parse::<Template>().is_err());
    /// assert!("/docs/{*rest}".parse::<Template>().is_err());
    /// assert!("/docs/v{version}".parse::<Template>().is_err());
    /// ```
    fn from_str(value: &str) -> Result<Self> {
        let mut segments = Vec::new();
        for part in split(value) {
            let segment = parse(part)?;

            // Ensure parameter names are unique within the template
            if let Segment::Parameter(name) = &segment {
                if segments.contains(&segment) {
                    return Err(Error::Duplicate(name.clone()));
                }
            }
            segments.push(segment);
        }

        // No errors occurred
        Ok(Self { pattern: value.to_string(), segments })
    }
}

// ----------------------------------------------------------------------------

impl AsRef<str> for Template {
    /// Returns the string representation.
    fn as_ref(&self) -> &str {
        self.pattern.as_str()
    }
}

// ----------------------------------------------------------------------------

impl fmt::Display for Template {
    /// Formats the template for display.
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.pattern)
    }
}

// ----------------------------------------------------------------------------
// Functions
// ----------------------------------------------------------------------------

/// Splits a path or pattern into its segments.
///
/// One leading and one trailing slash are stripped, so the root yields no
/// segments, while interior empty segments are kept.
fn split(value: &str) -> impl Iterator<Item = &str> {
    let value = value.strip_prefix('/').unwrap_or(value);
    let value = value.strip_suffix('/').unwrap_or(value);
    (!value.is_empty())
        .then(|| value.split('/'))
        .into_iter()
        .flatten()
}

/// Parses a single pattern segment.
fn parse(part: &str) -> Result<Segment> {
    if part.is_empty() {
        return Err(Error::Segment(String::new()));
    }

    // Literal segments must not contain any braces
    let Some(inner) = part.strip_prefix('{') else {
        return if part.contains(['{', '}']) {
            Err(Error::Segment(part.to_string()))
        } else {
            Ok(Segment::Literal(part.to_string()))
        };
    };

    // Parameters must span the entire segment
    let Some(name) = inner.strip_suffix('}') else {
        return Err(Error::Segment(part.to_string()));
    };

    // Reject empty or nested names, and catch-all or optional parameters, as
    // all parameters must capture exactly one segment
    if name.is_empty() || name.contains(['{', '}']) {
        Err(Error::Parameter(part.to_string()))
    } else if name.starts_with('*') || name.ends_with('?') {
        Err(Error::Unsupported(part.to_string()))
    } else {
        Ok(Segment::Parameter(name.to_string()))
    }
}

// ----------------------------------------------------------------------------
// Tests
// ----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn template(pattern: &str) -> Template {
        pattern.parse().unwrap()
    }

    #[test]
    fn test_matches_single_parameter() {
        let template = template("/docs/{apiVersion}/doc.json");
        let test_cases = vec![
            ("/docs/v1/doc.json", Some("v1")),
            ("docs/v2/doc.json", Some("v2")),
            ("/DOCS/V1/DOC.JSON", Some("V1")),
            ("/docs/v1/doc.json/", Some("v1")),
            ("/docs//v1//doc.json", None),
            ("/docs//doc.json", None),
            ("//docs/v1/doc.json", None),
            ("/docs/v1/doc.json//", None),
            ("/docs/doc.json", None),
            ("/docs/v1/extra/doc.json", None),
            ("/docs/v1/doc.yaml", None),
            ("/api/v1/doc.json", None),
            ("/", None),
        ];

        for (path, expected) in test_cases {
            let params = template.matches(path);
            assert_eq!(
                params.as_ref().and_then(|params| params.get("apiVersion")),
                expected,
                "Failed for path: {path}"
            );
        }
    }

    #[test]
    fn test_matches_literal_template() {
        let template = template("/swagger/ui/");
        let params = template.matches("/swagger/ui/").unwrap();
        assert!(params.is_empty());
        assert!(template.matches("/swagger").is_none());
    }

    #[test]
    fn test_matches_root_template() {
        for pattern in ["", "/"] {
            let template = template(pattern);
            assert!(template.matches("/").is_some());
            assert!(template.matches("").is_some());
            assert!(template.matches("/swagger").is_none());
        }
    }

    #[test]
    fn test_matches_multiple_parameters() {
        let template = template("/{group}/{apiVersion}");
        let params = template.matches("/pets/v3").unwrap();
        let captured = params.iter().collect::<Vec<_>>();
        assert_eq!(captured, [("group", "pets"), ("apiVersion", "v3")]);
    }

    #[test]
    fn test_compile_is_deterministic() {
        assert_eq!(template("/docs/{v}"), template("/docs/{v}"));
    }

    #[test]
    fn test_compile_errors() {
        let test_cases = vec![
            ("/docs/{apiVersion", Error::Segment(String::from("{apiVersion"))),
            ("/docs/apiVersion}", Error::Segment(String::from("apiVersion}"))),
            ("/docs/v{version}", Error::Segment(String::from("v{version}"))),
            ("/docs/{}", Error::Parameter(String::from("{}"))),
            ("/docs/{{v}}", Error::Parameter(String::from("{{v}}"))),
            ("/docs/{*rest}", Error::Unsupported(String::from("{*rest}"))),
            ("/docs/{v?}", Error::Unsupported(String::from("{v?}"))),
            ("/{v}/{v}", Error::Duplicate(String::from("v"))),
            ("/docs//{v}", Error::Segment(String::new())),
        ];

        for (pattern, expected) in test_cases {
            let err = Template::from_str(pattern).unwrap_err();
            assert_eq!(err, expected, "Failed for pattern: {pattern}");
        }
    }
}
