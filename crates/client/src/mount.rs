//! Stale-response guard for fire-and-forget fetches.
//!
//! There is no cancellation: an in-flight request keeps running when a
//! component stops needing the result. Each component therefore carries a
//! mount generation; a fetch captures the generation when it starts and a
//! completion only applies if the generation still matches. Re-mounting or
//! detaching bumps the generation, turning any late response into a no-op
//! instead of a mutation of discarded state.

use std::sync::atomic::{AtomicU64, Ordering};

/// A snapshot of the mount generation, captured when a request starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Generation(u64);

/// Per-component mount counter.
#[derive(Debug, Default)]
pub struct Mount {
    generation: AtomicU64,
}

impl Mount {
    /// Create a mount at generation zero.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Capture the current generation for an outgoing request.
    #[must_use]
    pub fn current(&self) -> Generation {
        Generation(self.generation.load(Ordering::Acquire))
    }

    /// Whether a captured generation is still the live one.
    #[must_use]
    pub fn is_current(&self, generation: Generation) -> bool {
        self.generation.load(Ordering::Acquire) == generation.0
    }

    /// Invalidate all outstanding requests (component teardown or
    /// re-mount). Returns the new live generation.
    pub fn bump(&self) -> Generation {
        Generation(self.generation.fetch_add(1, Ordering::AcqRel) + 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generation_matches_until_bumped() {
        let mount = Mount::new();
        let g = mount.current();
        assert!(mount.is_current(g));

        mount.bump();
        assert!(!mount.is_current(g));
        assert!(mount.is_current(mount.current()));
    }

    #[test]
    fn test_bump_returns_live_generation() {
        let mount = Mount::new();
        let g = mount.bump();
        assert!(mount.is_current(g));
    }
}
