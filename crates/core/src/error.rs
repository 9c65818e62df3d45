use std::fmt;

/// A canonical name that does not match any known value of `kind`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseNameError {
    pub kind: &'static str,
    pub name: String,
}

impl ParseNameError {
    pub fn new(kind: &'static str, name: impl Into<String>) -> Self {
        Self { kind, name: name.into() }
    }
}

impl fmt::Display for ParseNameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown {} '{}'", self.kind, self.name)
    }
}

impl std::error::Error for ParseNameError {}
