use std::time::Duration;

use lettercycle_domain::{InvalidLetterPolicy, Letter, SurfaceId};

pub const DEFAULT_INTERVAL: Duration = Duration::from_millis(100);

/// Resolved runtime settings, after the config file and CLI are merged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Surface the cycler writes to.
    pub surface: SurfaceId,
    pub interval: Duration,
    pub start: Letter,
    pub on_invalid: InvalidLetterPolicy,
    /// Surfaces the host board provides.
    pub surfaces: Vec<SurfaceId>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            surface: SurfaceId::default(),
            interval: DEFAULT_INTERVAL,
            start: Letter::FIRST,
            on_invalid: InvalidLetterPolicy::default(),
            surfaces: vec![SurfaceId::default()],
        }
    }
}

/// Values given on the command line; `None` keeps the configured value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SettingsOverrides {
    pub surface: Option<SurfaceId>,
    pub interval: Option<Duration>,
    pub start: Option<Letter>,
    pub on_invalid: Option<InvalidLetterPolicy>,
}

impl Settings {
    pub fn with_overrides(mut self, overrides: SettingsOverrides) -> Self {
        if let Some(surface) = overrides.surface {
            self.surface = surface;
        }
        if let Some(interval) = overrides.interval {
            self.interval = interval;
        }
        if let Some(start) = overrides.start {
            self.start = start;
        }
        if let Some(on_invalid) = overrides.on_invalid {
            self.on_invalid = on_invalid;
        }
        self
    }
}
