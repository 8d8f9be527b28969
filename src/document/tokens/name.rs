use std::fmt::{self, Display};

/// Element name as a `(local name, namespace)` pair.
///
/// The namespace is the resolved namespace URI. When the source uses a prefix
/// that is never declared the literal prefix is stored instead. Two names are
/// equal only if both parts are equal; prefixes play no role in comparison.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct QName {
    pub local: String,
    pub namespace: String,
}

impl QName {
    #[inline]
    pub fn new(namespace: impl Into<String>, local: impl Into<String>) -> Self {
        QName {
            local: local.into(),
            namespace: namespace.into(),
        }
    }

    /// Creates a name that doesn't belong to any namespace.
    #[inline]
    pub fn local(local: impl Into<String>) -> Self {
        QName::new(String::new(), local)
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.local.is_empty() && self.namespace.is_empty()
    }
}

/// Clark notation: `{namespace}local`, or just `local` without a namespace.
impl Display for QName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.namespace.is_empty() {
            f.write_str(&self.local)
        } else {
            write!(f, "{{{}}}{}", self.namespace, self.local)
        }
    }
}

impl From<&str> for QName {
    #[inline]
    fn from(local: &str) -> Self {
        QName::local(local)
    }
}
