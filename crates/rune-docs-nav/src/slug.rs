//! Content slugs.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Path-like identifier of a content document, e.g. `guide/operators`.
///
/// Slugs are resolved by the content system relative to the docs root, so
/// they carry no scheme, no leading slash, and no query or fragment.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Slug(String);

/// Reason a slug is not a relative content path.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SlugError {
    /// Empty string.
    #[error("slug cannot be empty")]
    Empty,
    /// Starts with `/`.
    #[error("slug must not start with '/'")]
    LeadingSlash,
    /// Ends with `/`.
    #[error("slug must not end with '/'")]
    TrailingSlash,
    /// Carries a URL scheme such as `https:`.
    #[error("slug must be a relative path, not a URL")]
    Scheme,
    /// Contains `//`.
    #[error("slug contains an empty path segment")]
    EmptySegment,
    /// Contains a `.` or `..` segment.
    #[error("slug contains a '.' or '..' segment")]
    DotSegment,
    /// Contains whitespace, `?`, `#` or a backslash.
    #[error("slug contains invalid character {0:?}")]
    InvalidChar(char),
}

impl Slug {
    /// Parse and validate a slug.
    ///
    /// # Errors
    ///
    /// Returns the first [`SlugError`] found.
    pub fn parse(value: &str) -> Result<Self, SlugError> {
        let slug = Self(value.to_owned());
        slug.validate()?;
        Ok(slug)
    }

    /// Check that the slug is a relative content path.
    ///
    /// # Errors
    ///
    /// Returns the first [`SlugError`] found.
    pub fn validate(&self) -> Result<(), SlugError> {
        let value = self.0.as_str();
        if value.is_empty() {
            return Err(SlugError::Empty);
        }
        if value.starts_with('/') {
            return Err(SlugError::LeadingSlash);
        }
        if value.ends_with('/') {
            return Err(SlugError::TrailingSlash);
        }
        if value.split('/').next().is_some_and(|first| first.contains(':')) {
            return Err(SlugError::Scheme);
        }
        for segment in value.split('/') {
            match segment {
                "" => return Err(SlugError::EmptySegment),
                "." | ".." => return Err(SlugError::DotSegment),
                _ => {}
            }
        }
        if let Some(c) = value
            .chars()
            .find(|c| c.is_whitespace() || matches!(c, '?' | '#' | '\\'))
        {
            return Err(SlugError::InvalidChar(c));
        }
        Ok(())
    }

    /// Slug as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Slug {
    fn from(value: &str) -> Self {
        Self(value.to_owned())
    }
}

impl From<String> for Slug {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl fmt::Display for Slug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
