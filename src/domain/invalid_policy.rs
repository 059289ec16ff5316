use serde::{Deserialize, Serialize};

/// What a tick does when the surface text is not a single letter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InvalidLetterPolicy {
    /// Leave the surface untouched and report the failure.
    #[default]
    Reject,
    /// Write the first letter of the alphabet, as if the lookup had
    /// returned position -1.
    #[serde(rename = "reset")]
    ResetToStart,
}

impl InvalidLetterPolicy {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Reject => "reject",
            Self::ResetToStart => "reset",
        }
    }
}

impl std::fmt::Display for InvalidLetterPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for InvalidLetterPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "reject" => Ok(Self::Reject),
            "reset" => Ok(Self::ResetToStart),
            other => Err(format!(
                "unknown invalid-letter policy '{}' (expected 'reject' or 'reset')",
                other
            )),
        }
    }
}
