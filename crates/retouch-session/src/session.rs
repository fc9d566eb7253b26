//! The editing session: one buffer, one lock, one in-flight effect.
//!
//! [`EditorSession`] is the explicit owner of the mutable bitmap that
//! the historical editors shared across UI events and background work.
//! The buffer lives behind a session-scoped lock acquired for the
//! duration of every read-modify-write sequence (filter publish, stroke
//! segment, load, clear), and the raw reference is never exposed
//! outside the lock's scope.

use std::path::Path;
use std::sync::Arc;

use log::{debug, info};
use parking_lot::Mutex;
use retouch_filters::types::Rgba;
use retouch_filters::{Brush, Dimensions, FilterKind, PixelBuffer, Point, draw};

use crate::display::{DisplaySurface, NullDisplay};
use crate::error::SessionError;
use crate::runner::{EffectReport, EffectRunner};

/// Everything guarded by the session lock.
pub(crate) struct CanvasState {
    /// The live buffer, replaced wholesale when a filter completes.
    pub(crate) buffer: Option<PixelBuffer>,
    /// Snapshot taken at load time, restored by `clear`.
    pub(crate) loaded: Option<PixelBuffer>,
    /// The active drawing tool.
    pub(crate) brush: Brush,
    /// Last recorded pointer position of an in-progress stroke.
    pub(crate) anchor: Option<Point>,
}

impl CanvasState {
    pub(crate) fn new() -> Self {
        Self {
            buffer: None,
            loaded: None,
            brush: Brush::default(),
            anchor: None,
        }
    }
}

/// A single-user editing session over one pixel buffer.
pub struct EditorSession {
    state: Arc<Mutex<CanvasState>>,
    display: Arc<dyn DisplaySurface + Send + Sync>,
    runner: EffectRunner,
}

impl Default for EditorSession {
    fn default() -> Self {
        Self::new()
    }
}

impl EditorSession {
    /// Create a headless session (updates are not displayed anywhere).
    #[must_use]
    pub fn new() -> Self {
        Self::with_display(Arc::new(NullDisplay))
    }

    /// Create a session publishing buffer swaps to `display`.
    #[must_use]
    pub fn with_display(display: Arc<dyn DisplaySurface + Send + Sync>) -> Self {
        Self {
            state: Arc::new(Mutex::new(CanvasState::new())),
            display,
            runner: EffectRunner::new(),
        }
    }

    // --- Loading -----------------------------------------------------

    /// Load an image file into the session.
    ///
    /// On failure the prior buffer is left untouched. On success the
    /// decoded image becomes both the live buffer and the snapshot that
    /// [`clear`](Self::clear) restores.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::Read`] if the file cannot be read and
    /// [`SessionError::Raster`] if it cannot be decoded.
    pub fn load_path(&mut self, path: impl AsRef<Path>) -> Result<Dimensions, SessionError> {
        let path = path.as_ref();
        let bytes = std::fs::read(path).map_err(|source| SessionError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let dimensions = self.load_bytes(&bytes)?;
        info!("loaded {} ({}x{})", path.display(), dimensions.width, dimensions.height);
        Ok(dimensions)
    }

    /// Load an image from already-read encoded bytes.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::Raster`] if the bytes cannot be decoded;
    /// the prior buffer is left untouched.
    pub fn load_bytes(&mut self, bytes: &[u8]) -> Result<Dimensions, SessionError> {
        // Decode outside the lock; only the swap needs exclusivity.
        let buffer = PixelBuffer::decode(bytes)?;
        let dimensions = buffer.dimensions();

        let mut canvas = self.state.lock();
        canvas.loaded = Some(buffer.clone());
        canvas.buffer = Some(buffer);
        canvas.anchor = None;
        if let Some(current) = canvas.buffer.as_ref() {
            self.display.present(current);
        }
        Ok(dimensions)
    }

    /// Start from a blank (opaque white) canvas instead of a file.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::Raster`] if either dimension is zero.
    pub fn new_canvas(&mut self, width: u32, height: u32) -> Result<Dimensions, SessionError> {
        let buffer = PixelBuffer::blank(width, height)?;
        let dimensions = buffer.dimensions();

        let mut canvas = self.state.lock();
        canvas.loaded = Some(buffer.clone());
        canvas.buffer = Some(buffer);
        canvas.anchor = None;
        if let Some(current) = canvas.buffer.as_ref() {
            self.display.present(current);
        }
        Ok(dimensions)
    }

    /// Discard all edits, restoring the loaded image (or the blank
    /// canvas for canvas sessions). No-op when nothing was ever loaded.
    pub fn clear(&mut self) {
        let mut canvas = self.state.lock();
        let Some(restored) = canvas.loaded.clone() else {
            return;
        };
        debug!("clearing edits");
        canvas.buffer = Some(restored);
        canvas.anchor = None;
        if let Some(current) = canvas.buffer.as_ref() {
            self.display.present(current);
        }
    }

    // --- Background effects ------------------------------------------

    /// Apply a filter on a background thread, superseding any effect
    /// still in flight. Returns the submission's generation; its
    /// resolution arrives via [`poll_reports`](Self::poll_reports) or
    /// [`wait_idle`](Self::wait_idle).
    pub fn apply(&mut self, filter: FilterKind) -> u64 {
        self.runner
            .submit(Arc::clone(&self.state), Arc::clone(&self.display), filter)
    }

    /// Request cancellation of the in-flight filter. The filter still
    /// runs to completion but its result is discarded; the buffer stays
    /// exactly as it was. Does not reduce latency.
    pub fn cancel(&mut self) {
        self.runner.cancel();
    }

    /// Whether a background filter is currently running.
    #[must_use]
    pub fn is_effect_running(&self) -> bool {
        self.runner.is_running()
    }

    /// Drain effect resolutions that have arrived, without blocking.
    pub fn poll_reports(&mut self) -> Vec<EffectReport> {
        self.runner.poll_reports()
    }

    /// Block until no effect is in flight, then drain all resolutions.
    pub fn wait_idle(&mut self) -> Vec<EffectReport> {
        self.runner.wait_idle()
    }

    // --- Freehand drawing --------------------------------------------

    /// Pointer-down: record the stroke anchor. Returns `false` (and
    /// records nothing) when no image is loaded.
    pub fn begin_stroke(&mut self, at: Point) -> bool {
        let mut canvas = self.state.lock();
        if canvas.buffer.is_none() {
            return false;
        }
        canvas.anchor = Some(at);
        true
    }

    /// Pointer-drag: draw a segment from the anchor to `to`, then
    /// advance the anchor. No-op unless a stroke is in progress.
    ///
    /// Runs synchronously under the canvas lock, so it serializes
    /// against any in-flight filter's publish.
    pub fn stroke_to(&mut self, to: Point) {
        let mut canvas = self.state.lock();
        let Some(from) = canvas.anchor else {
            return;
        };
        let brush = canvas.brush;
        let Some(buffer) = canvas.buffer.as_mut() else {
            return;
        };
        draw::stroke_segment(buffer, from, to, &brush);
        canvas.anchor = Some(to);
        if let Some(current) = canvas.buffer.as_ref() {
            self.display.present(current);
        }
    }

    /// Pointer-up: end the stroke.
    pub fn end_stroke(&mut self) {
        self.state.lock().anchor = None;
    }

    /// Set the brush color for subsequent strokes.
    pub fn set_brush_color(&mut self, color: Rgba<u8>) {
        self.state.lock().brush.color = color;
    }

    /// Set the brush stroke width for subsequent strokes (minimum 1).
    pub fn set_brush_size(&mut self, size: u32) {
        self.state.lock().brush.size = size.max(1);
    }

    /// The current brush.
    #[must_use]
    pub fn brush(&self) -> Brush {
        self.state.lock().brush
    }

    // --- Observation -------------------------------------------------

    /// Whether an image (or blank canvas) is loaded.
    #[must_use]
    pub fn has_image(&self) -> bool {
        self.state.lock().buffer.is_some()
    }

    /// Dimensions of the current buffer, if any.
    #[must_use]
    pub fn dimensions(&self) -> Option<Dimensions> {
        self.state.lock().buffer.as_ref().map(PixelBuffer::dimensions)
    }

    /// A copy of the current buffer, if any.
    #[must_use]
    pub fn snapshot(&self) -> Option<PixelBuffer> {
        self.state.lock().buffer.clone()
    }
}
