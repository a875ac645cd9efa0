use std::sync::atomic::{AtomicUsize, Ordering};

/// Global loading overlay state.
///
/// A nesting counter rather than a boolean: two overlapping operations
/// each call `begin`/`end`, and the overlay stays up until the last one
/// finishes.
#[derive(Debug, Default)]
pub struct GlobalLoader {
    active: AtomicUsize,
}

impl GlobalLoader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn begin(&self) {
        self.active.fetch_add(1, Ordering::SeqCst);
    }

    pub fn end(&self) {
        // an unmatched end is a caller bug; clamp instead of wrapping
        let _ = self
            .active
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |n| n.checked_sub(1));
    }

    pub fn is_open(&self) -> bool {
        self.active.load(Ordering::SeqCst) > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overlapping_operations_keep_the_overlay_open() {
        let loader = GlobalLoader::new();
        loader.begin();
        loader.begin();

        loader.end();
        assert!(loader.is_open());

        loader.end();
        assert!(!loader.is_open());
    }

    #[test]
    fn unmatched_end_does_not_wrap() {
        let loader = GlobalLoader::new();
        loader.end();
        assert!(!loader.is_open());

        loader.begin();
        assert!(loader.is_open());
    }
}
