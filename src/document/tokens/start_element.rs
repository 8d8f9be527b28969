use super::QName;
use std::borrow::Cow;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attribute {
    name: String,
    value: String,
}

impl Attribute {
    #[inline]
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Attribute {
            name: name.into(),
            value: value.into(),
        }
    }

    /// Qualified name exactly as written in the source, e.g. `xlink:href`.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Unescaped value.
    #[inline]
    pub fn value(&self) -> &str {
        &self.value
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StartElement {
    name: QName,
    prefix: Option<String>,
    attributes: Vec<Attribute>,
}

impl StartElement {
    /// Creates an element without attributes.
    ///
    /// An element in a namespace gets a default namespace declaration
    /// (`xmlns`) so that it keeps its namespace once serialized.
    pub fn new(name: QName) -> Self {
        let attributes = if name.namespace.is_empty() {
            Vec::new()
        } else {
            vec![Attribute::new("xmlns", name.namespace.as_str())]
        };

        StartElement {
            name,
            prefix: None,
            attributes,
        }
    }

    #[inline]
    pub(crate) fn from_parts(
        name: QName,
        prefix: Option<String>,
        attributes: Vec<Attribute>,
    ) -> Self {
        StartElement {
            name,
            prefix,
            attributes,
        }
    }

    #[inline]
    pub fn name(&self) -> &QName {
        &self.name
    }

    #[inline]
    pub fn prefix(&self) -> Option<&str> {
        self.prefix.as_deref()
    }

    /// Name as it is written in markup: `prefix:local` or `local`.
    #[inline]
    pub fn qualified_name(&self) -> Cow<'_, str> {
        qualified_name(self.prefix(), &self.name.local)
    }

    #[inline]
    pub fn attributes(&self) -> &[Attribute] {
        &self.attributes
    }

    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|attr| attr.name == name)
            .map(Attribute::value)
    }
}

pub(super) fn qualified_name<'n>(prefix: Option<&str>, local: &'n str) -> Cow<'n, str> {
    match prefix {
        Some(prefix) => format!("{prefix}:{local}").into(),
        None => local.into(),
    }
}
