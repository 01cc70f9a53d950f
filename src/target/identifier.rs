use std::borrow::Borrow;
use std::fmt;
use std::sync::Arc;

/// The maximum allowed length for a [`ContainerRef`].
const CONTAINER_REF_MAX_LEN: usize = 255;

/// A validated reference to a container, either its name or its ID, as passed
/// to `<runtime> inspect`.
///
/// # Examples
///
/// ```
/// # use podwatch::target::ContainerRef;
/// let by_name = ContainerRef::new("open-webui").unwrap();
/// assert_eq!(by_name.as_ref(), "open-webui");
///
/// assert!(ContainerRef::new("").is_none());
/// assert!(ContainerRef::new("two words").is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ContainerRef(Arc<str>);

impl ContainerRef {
    /// Creates a new `ContainerRef` from the given raw reference.
    ///
    /// Returns `None` if the reference is empty, longer than
    /// [`CONTAINER_REF_MAX_LEN`] bytes, or contains whitespace. A reference
    /// starting with `-` is rejected too, since the runtime would read it as a flag.
    pub fn new(src: impl AsRef<str>) -> Option<Self> {
        let src = src.as_ref();
        if src.is_empty()
            || src.len() > CONTAINER_REF_MAX_LEN
            || src.starts_with('-')
            || src.chars().any(char::is_whitespace)
        {
            return None;
        }

        Some(Self(src.into()))
    }
}

impl AsRef<str> for ContainerRef {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for ContainerRef {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ContainerRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_names_and_ids() {
        assert!(ContainerRef::new("ollama").is_some());
        assert!(ContainerRef::new("3f2a9c81d0e4").is_some());
        assert!(ContainerRef::new("a".repeat(CONTAINER_REF_MAX_LEN)).is_some());
    }

    #[test]
    fn rejects_invalid_references() {
        assert!(ContainerRef::new("").is_none());
        assert!(ContainerRef::new("a".repeat(CONTAINER_REF_MAX_LEN + 1)).is_none());
        assert!(ContainerRef::new("my container").is_none());
        assert!(ContainerRef::new("--all").is_none());
    }
}
