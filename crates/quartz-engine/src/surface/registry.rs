use std::collections::HashMap;

use super::Surface;

/// Host-side source of pre-existing surfaces, looked up by identifier.
///
/// Adoption moves the surface out of the host: from then on the clock owns it
/// exclusively.
pub trait SurfaceProvider {
    fn take_surface(&mut self, id: &str) -> Option<Surface>;
}

/// In-process [`SurfaceProvider`] keyed by string identifiers.
#[derive(Debug, Default)]
pub struct SurfaceRegistry {
    surfaces: HashMap<String, Surface>,
}

impl SurfaceRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `surface` under `id`, returning any surface it replaced.
    pub fn insert(&mut self, id: impl Into<String>, surface: Surface) -> Option<Surface> {
        self.surfaces.insert(id.into(), surface)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.surfaces.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.surfaces.len()
    }

    pub fn is_empty(&self) -> bool {
        self.surfaces.is_empty()
    }
}

impl SurfaceProvider for SurfaceRegistry {
    fn take_surface(&mut self, id: &str) -> Option<Surface> {
        self.surfaces.remove(id)
    }
}
