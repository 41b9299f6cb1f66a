use std::{fmt::Display, sync::Arc};

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GeneratedName {
    /// The dotted path up to the last separator, empty for top-level names
    pub namespace: Arc<str>,
    /// The final segment of the dotted name
    pub short_name: Arc<str>,
}

impl GeneratedName {
    fn parse_str(a: &str) -> Self {
        match a.rsplit_once('.') {
            Some((namespace, short_name)) => GeneratedName {
                namespace: namespace.into(),
                short_name: short_name.into(),
            },
            None => GeneratedName {
                namespace: "".into(),
                short_name: a.into(),
            },
        }
    }

    /// Return the full dotted name the namespace and short name were split from
    pub fn to_qualified_name(&self) -> String {
        if self.namespace.is_empty() {
            self.short_name.to_string()
        } else {
            format!("{}.{}", self.namespace, self.short_name)
        }
    }
}

impl Display for GeneratedName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.to_qualified_name().fmt(f)
    }
}

impl From<String> for GeneratedName {
    fn from(value: String) -> Self {
        GeneratedName::parse_str(&value)
    }
}

impl From<&str> for GeneratedName {
    fn from(value: &str) -> Self {
        GeneratedName::parse_str(value)
    }
}
