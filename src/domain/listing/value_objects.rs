use crate::domain::errors::{DomainError, DomainResult};
use std::borrow::Cow;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ListingId(pub i64);

impl ListingId {
    pub fn new(id: i64) -> DomainResult<Self> {
        if id <= 0 {
            Err(DomainError::Validation(
                "listing id must be positive".into(),
            ))
        } else {
            Ok(Self(id))
        }
    }
}

impl From<ListingId> for i64 {
    fn from(value: ListingId) -> Self {
        value.0
    }
}

impl fmt::Display for ListingId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Returns true when `value` uses only lowercase ASCII letters and digits
/// separated by single hyphens.
pub fn is_canonical_slug(value: &str) -> bool {
    !value.is_empty()
        && !value.starts_with('-')
        && !value.ends_with('-')
        && !value.contains("--")
        && value
            .bytes()
            .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit() || b == b'-')
}

/// A committed slug. Construction enforces the canonical alphabet.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ListingSlug(String);

impl ListingSlug {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(DomainError::Validation("slug cannot be empty".into()));
        }
        if !is_canonical_slug(&value) {
            return Err(DomainError::Validation(format!(
                "slug `{value}` must be lowercase letters and digits separated by single hyphens"
            )));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for ListingSlug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<ListingSlug> for String {
    fn from(value: ListingSlug) -> Self {
        value.0
    }
}

/// Namespace over which slug uniqueness is enforced, together with the token
/// used when a display name yields no usable slug.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SlugScope {
    name: Cow<'static, str>,
    default_token: Option<Cow<'static, str>>,
}

impl SlugScope {
    pub const GOLF_COURSES: Self = Self::builtin("golf-courses", "course");
    pub const YACHTS: Self = Self::builtin("yachts", "yacht");
    pub const YACHT_CHARTERS: Self = Self::builtin("yacht-charters", "charter");
    pub const PRIVATE_JETS: Self = Self::builtin("private-jets", "jet");
    pub const JET_CHARTERS: Self = Self::builtin("jet-charters", "charter");

    const fn builtin(name: &'static str, default_token: &'static str) -> Self {
        Self {
            name: Cow::Borrowed(name),
            default_token: Some(Cow::Borrowed(default_token)),
        }
    }

    pub fn builtins() -> [Self; 5] {
        [
            Self::GOLF_COURSES,
            Self::YACHTS,
            Self::YACHT_CHARTERS,
            Self::PRIVATE_JETS,
            Self::JET_CHARTERS,
        ]
    }

    /// Look up one of the built-in collections by its collection name.
    pub fn from_collection(name: &str) -> Option<Self> {
        Self::builtins()
            .into_iter()
            .find(|scope| scope.name() == name)
    }

    pub fn custom(name: impl Into<String>, default_token: Option<String>) -> Self {
        Self {
            name: Cow::Owned(name.into()),
            default_token: default_token.map(Cow::Owned),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn default_token(&self) -> Option<&str> {
        self.default_token.as_deref()
    }
}

impl fmt::Display for SlugScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}
