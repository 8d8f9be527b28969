use super::start_element::qualified_name;
use super::QName;
use std::borrow::Cow;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EndElement {
    name: QName,
    prefix: Option<String>,
}

impl EndElement {
    #[inline]
    pub fn new(name: QName) -> Self {
        EndElement { name, prefix: None }
    }

    #[inline]
    pub(crate) fn from_parts(name: QName, prefix: Option<String>) -> Self {
        EndElement { name, prefix }
    }

    #[inline]
    pub fn name(&self) -> &QName {
        &self.name
    }

    #[inline]
    pub fn prefix(&self) -> Option<&str> {
        self.prefix.as_deref()
    }

    #[inline]
    pub fn qualified_name(&self) -> Cow<'_, str> {
        qualified_name(self.prefix(), &self.name.local)
    }
}
