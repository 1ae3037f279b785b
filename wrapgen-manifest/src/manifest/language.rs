//! Target language selection.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

/// Supported target languages for wrapper generation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TargetLanguage {
    /// Scala 2.13
    #[default]
    Scala,
}

impl TargetLanguage {
    /// Returns the language identifier as a static string.
    pub fn as_str(&self) -> &'static str {
        match self {
            TargetLanguage::Scala => "scala",
        }
    }
}

impl fmt::Display for TargetLanguage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for TargetLanguage {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "scala" | "scala2" | "scala-2.13" => Ok(TargetLanguage::Scala),
            _ => Err(format!("unknown language '{}', expected 'scala'", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_str() {
        assert_eq!(
            TargetLanguage::from_str("scala").unwrap(),
            TargetLanguage::Scala
        );
        assert_eq!(
            TargetLanguage::from_str("Scala").unwrap(),
            TargetLanguage::Scala
        );
        assert!(TargetLanguage::from_str("kotlin").is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(TargetLanguage::Scala.to_string(), "scala");
    }
}
