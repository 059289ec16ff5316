//! The letter cycler: owns the cycling state and writes each new letter to
//! its display surface.
//!
//! The cycler never holds a borrow of the host between ticks. It keeps the
//! surface id resolved at attach time and looks the surface up again on every
//! tick, so the host stays free to be rendered in between.

use lettercycle_domain::{InvalidLetterPolicy, Letter, LetterError, SurfaceId};

use crate::ports::display::DisplayHost;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CyclerError {
    #[error("display surface '{0}' not found")]
    DisplaySurfaceNotFound(SurfaceId),
    #[error("surface '{surface}' does not hold a letter: {source}")]
    InvalidLetter {
        surface: SurfaceId,
        #[source]
        source: LetterError,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LetterCycler {
    surface: SurfaceId,
    policy: InvalidLetterPolicy,
    ticks: u64,
}

impl LetterCycler {
    /// Resolves `surface` on the host and writes `start` to it.
    pub fn attach<H: DisplayHost + ?Sized>(
        host: &mut H,
        surface: SurfaceId,
        start: Letter,
        policy: InvalidLetterPolicy,
    ) -> Result<Self, CyclerError> {
        let target = host
            .surface_mut(&surface)
            .ok_or_else(|| CyclerError::DisplaySurfaceNotFound(surface.clone()))?;
        target.set_text(&String::from(start));

        Ok(Self {
            surface,
            policy,
            ticks: 0,
        })
    }

    /// Reads the surface, writes the successor back and returns it.
    ///
    /// Only ticks that write to the surface are counted.
    pub fn tick<H: DisplayHost + ?Sized>(&mut self, host: &mut H) -> Result<Letter, CyclerError> {
        let target = host
            .surface_mut(&self.surface)
            .ok_or_else(|| CyclerError::DisplaySurfaceNotFound(self.surface.clone()))?;

        let next = match target.text().parse::<Letter>() {
            Ok(current) => current.successor(),
            Err(source) => match self.policy {
                InvalidLetterPolicy::Reject => {
                    return Err(CyclerError::InvalidLetter {
                        surface: self.surface.clone(),
                        source,
                    });
                }
                InvalidLetterPolicy::ResetToStart => Letter::FIRST,
            },
        };

        let mut buf = [0u8; 4];
        target.set_text(next.as_char().encode_utf8(&mut buf));
        self.ticks += 1;

        Ok(next)
    }

    /// The letter currently on the surface, if it holds one.
    pub fn current<H: DisplayHost + ?Sized>(&self, host: &H) -> Option<Letter> {
        host.surface(&self.surface)
            .and_then(|surface| surface.text().parse().ok())
    }

    pub fn surface_id(&self) -> &SurfaceId {
        &self.surface
    }

    pub fn policy(&self) -> InvalidLetterPolicy {
        self.policy
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }
}
