//! In-memory host document holding the named display surfaces.

use lettercycle_domain::SurfaceId;

use crate::ports::display::{DisplayHost, DisplaySurface};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextSurface {
    text: String,
}

impl DisplaySurface for TextSurface {
    fn text(&self) -> &str {
        &self.text
    }

    fn set_text(&mut self, text: &str) {
        self.text.clear();
        self.text.push_str(text);
    }
}

/// Surfaces keep the order they were declared in. Only the cycled one is
/// drawn.
#[derive(Debug, Clone, Default)]
pub struct SurfaceBoard {
    surfaces: Vec<(SurfaceId, TextSurface)>,
}

impl SurfaceBoard {
    /// Builds a board with one empty surface per id. Repeated ids collapse.
    pub fn new(ids: impl IntoIterator<Item = SurfaceId>) -> Self {
        let mut board = Self::default();
        for id in ids {
            if !board.contains(&id) {
                board.surfaces.push((id, TextSurface::default()));
            }
        }
        board
    }

    pub fn contains(&self, id: &SurfaceId) -> bool {
        self.surfaces.iter().any(|(existing, _)| existing == id)
    }

    pub fn text_of(&self, id: &SurfaceId) -> Option<&str> {
        self.surface(id).map(DisplaySurface::text)
    }
}

impl DisplayHost for SurfaceBoard {
    fn surface(&self, id: &SurfaceId) -> Option<&dyn DisplaySurface> {
        self.surfaces
            .iter()
            .find(|(existing, _)| existing == id)
            .map(|(_, surface)| surface as &dyn DisplaySurface)
    }

    fn surface_mut(&mut self, id: &SurfaceId) -> Option<&mut dyn DisplaySurface> {
        self.surfaces
            .iter_mut()
            .find(|(existing, _)| existing == id)
            .map(|(_, surface)| surface as &mut dyn DisplaySurface)
    }
}
