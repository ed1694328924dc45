use std::fmt;
use std::str::FromStr;

/// A `source:identifier` pair naming one capture and the record to select in it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaptureSpec {
    pub source: String,
    pub identifier: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CaptureSpecError {
    #[error("expected SOURCE:IDENTIFIER, got '{0}'")]
    MissingIdentifier(String),
    #[error("missing capture source in '{0}'")]
    EmptySource(String),
    #[error("identifier '{identifier}' in '{input}' is not a number")]
    BadIdentifier { input: String, identifier: String },
}

impl FromStr for CaptureSpec {
    type Err = CaptureSpecError;

    /// Splits on the last `:` so sources containing colons still parse.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (source, identifier) = s
            .rsplit_once(':')
            .ok_or_else(|| CaptureSpecError::MissingIdentifier(s.to_string()))?;

        if source.is_empty() {
            return Err(CaptureSpecError::EmptySource(s.to_string()));
        }

        let identifier = identifier
            .parse::<u64>()
            .map_err(|_| CaptureSpecError::BadIdentifier {
                input: s.to_string(),
                identifier: identifier.to_string(),
            })?;

        Ok(Self {
            source: source.to_string(),
            identifier,
        })
    }
}

impl fmt::Display for CaptureSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.source, self.identifier)
    }
}
