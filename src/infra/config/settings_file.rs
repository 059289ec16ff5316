use std::time::Duration;

use serde::{Deserialize, Serialize};

use lettercycle_app::ports::ConfigStoreError;
use lettercycle_app::settings::Settings;
use lettercycle_domain::{InvalidLetterPolicy, Letter, SurfaceId};

pub const CURRENT_VERSION: u32 = 1;

/// On-disk shape of `config.toml`. Every key is optional.
#[derive(Debug, Serialize, Deserialize)]
pub struct SettingsFile {
    #[serde(default = "current_version")]
    pub version: u32,
    #[serde(default)]
    pub cycler: CyclerSection,
    #[serde(default)]
    pub display: DisplaySection,
}

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct CyclerSection {
    pub surface: Option<SurfaceId>,
    pub interval_ms: Option<u64>,
    pub start: Option<Letter>,
    pub on_invalid: Option<InvalidLetterPolicy>,
}

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct DisplaySection {
    pub surfaces: Option<Vec<SurfaceId>>,
}

fn current_version() -> u32 {
    CURRENT_VERSION
}

impl SettingsFile {
    pub fn into_settings(self) -> Result<Settings, ConfigStoreError> {
        let defaults = Settings::default();
        let cycler = self.cycler;

        let interval = match cycler.interval_ms {
            Some(0) => {
                return Err(ConfigStoreError::InvalidFormat(
                    "cycler.interval_ms must be at least 1".to_string(),
                ));
            }
            Some(ms) => Duration::from_millis(ms),
            None => defaults.interval,
        };

        let surfaces = match self.display.surfaces {
            Some(surfaces) if surfaces.is_empty() => {
                return Err(ConfigStoreError::InvalidFormat(
                    "display.surfaces must list at least one surface".to_string(),
                ));
            }
            Some(surfaces) => surfaces,
            None => defaults.surfaces,
        };

        Ok(Settings {
            surface: cycler.surface.unwrap_or(defaults.surface),
            interval,
            start: cycler.start.unwrap_or(defaults.start),
            on_invalid: cycler.on_invalid.unwrap_or(defaults.on_invalid),
            surfaces,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(content: &str) -> SettingsFile {
        toml::from_str(content).unwrap()
    }

    #[test]
    fn empty_file_yields_defaults() {
        let file = parse("");

        assert_eq!(file.version, CURRENT_VERSION);
        assert_eq!(file.into_settings().unwrap(), Settings::default());
    }

    #[test]
    fn full_file_is_applied() {
        let file = parse(
            r#"
version = 1

[cycler]
surface = "big"
interval_ms = 250
start = "y"
on_invalid = "reset"

[display]
surfaces = ["small", "big"]
"#,
        );

        let settings = file.into_settings().unwrap();

        assert_eq!(settings.surface.as_str(), "big");
        assert_eq!(settings.interval, Duration::from_millis(250));
        assert_eq!(settings.start.as_char(), 'y');
        assert_eq!(settings.on_invalid, InvalidLetterPolicy::ResetToStart);
        let surfaces: Vec<_> = settings.surfaces.iter().map(SurfaceId::as_str).collect();
        assert_eq!(surfaces, vec!["small", "big"]);
    }

    #[test]
    fn zero_interval_is_invalid() {
        let file = parse("[cycler]\ninterval_ms = 0");

        let result = file.into_settings();

        assert!(matches!(result, Err(ConfigStoreError::InvalidFormat(_))));
    }

    #[test]
    fn empty_surface_list_is_invalid() {
        let file = parse("[display]\nsurfaces = []");

        let result = file.into_settings();

        assert!(matches!(result, Err(ConfigStoreError::InvalidFormat(_))));
    }

    #[test]
    fn invalid_start_letter_fails_to_parse() {
        let result = toml::from_str::<SettingsFile>("[cycler]\nstart = \"A\"");

        assert!(result.is_err());
    }
}
