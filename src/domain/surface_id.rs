use serde::{Deserialize, Serialize};

/// Identifier the host uses to look up a display surface.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct SurfaceId(String);

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SurfaceIdError {
    #[error("surface id must not be empty")]
    Empty,
}

impl SurfaceId {
    pub const DEFAULT: &'static str = "a";

    pub fn new(id: impl Into<String>) -> Result<Self, SurfaceIdError> {
        let id = id.into();
        let trimmed = id.trim();
        if trimmed.is_empty() {
            return Err(SurfaceIdError::Empty);
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for SurfaceId {
    fn default() -> Self {
        Self(Self::DEFAULT.to_string())
    }
}

impl std::fmt::Display for SurfaceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for SurfaceId {
    type Error = SurfaceIdError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<SurfaceId> for String {
    fn from(id: SurfaceId) -> Self {
        id.0
    }
}

impl std::str::FromStr for SurfaceId {
    type Err = SurfaceIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}
