//! The display surface seam.
//!
//! The session never owns a window or widget; it publishes buffer swaps
//! through this trait and lets the embedding application repaint. The
//! buffer reference is only valid for the duration of the call -- the
//! session hands it out under its own lock.

use retouch_filters::PixelBuffer;

/// A consumer of buffer updates (typically a repainting canvas widget).
pub trait DisplaySurface {
    /// Called after any buffer swap or in-place mutation, with the
    /// current buffer. Implementations should copy what they need and
    /// request a repaint; they must not block for long, since the
    /// session's canvas lock is held during the call.
    fn present(&self, buffer: &PixelBuffer);
}

/// A display that ignores all updates, for headless use and tests.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullDisplay;

impl DisplaySurface for NullDisplay {
    fn present(&self, _buffer: &PixelBuffer) {}
}

#[cfg(test)]
pub(crate) mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;

    /// Counts how many times the session presented a buffer.
    #[derive(Debug, Default)]
    pub(crate) struct CountingDisplay {
        pub(crate) presented: AtomicUsize,
    }

    impl DisplaySurface for CountingDisplay {
        fn present(&self, _buffer: &PixelBuffer) {
            self.presented.fetch_add(1, Ordering::SeqCst);
        }
    }

    #[test]
    #[allow(clippy::unwrap_used)]
    fn null_display_accepts_any_buffer() {
        let buffer = PixelBuffer::blank(2, 2).unwrap();
        NullDisplay.present(&buffer);
    }
}
