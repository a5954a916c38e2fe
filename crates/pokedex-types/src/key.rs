use std::fmt;

/// Identifies the catalog entry to fetch.
///
/// `ById` is signed on purpose: ids are forwarded to the remote as-is and the
/// remote decides whether they exist.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum LookupKey {
    ByName(String),
    ById(i64),
    Random,
}

impl LookupKey {
    /// Unencoded path segment for the endpoint; the client percent-encodes it.
    ///
    /// Returns `None` for `Random`, which must be settled to an id first.
    pub fn path_segment(&self) -> Option<String> {
        match self {
            LookupKey::ByName(name) => Some(name.clone()),
            LookupKey::ById(id) => Some(id.to_string()),
            LookupKey::Random => None,
        }
    }

    pub fn is_random(&self) -> bool {
        matches!(self, LookupKey::Random)
    }
}

impl fmt::Display for LookupKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LookupKey::ByName(name) => write!(f, "{}", name),
            LookupKey::ById(id) => write!(f, "#{}", id),
            LookupKey::Random => write!(f, "<random>"),
        }
    }
}
