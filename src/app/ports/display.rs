use lettercycle_domain::SurfaceId;

/// A text-bearing output the host exposes.
pub trait DisplaySurface {
    fn text(&self) -> &str;
    fn set_text(&mut self, text: &str);
}

/// Looks up display surfaces by identifier.
pub trait DisplayHost {
    fn surface(&self, id: &SurfaceId) -> Option<&dyn DisplaySurface>;
    fn surface_mut(&mut self, id: &SurfaceId) -> Option<&mut dyn DisplaySurface>;
}
