//! retouch-session: the editing session and background effect runner.
//!
//! An [`EditorSession`] owns one pixel buffer behind a session-scoped
//! lock. Filters run on a background thread through the effect runner,
//! which enforces at most one in-flight effect per session: a new
//! request supersedes the previous one by cancelling its token.
//! Cancellation is cooperative and coarse -- a cancelled filter still
//! runs its pixel loop to completion, but its result is discarded
//! instead of published.
//!
//! Freehand stroke drawing is synchronous and bypasses the runner
//! entirely; it is serialized against filters by the same canvas lock,
//! so a filter result is never partially overwritten by an interleaved
//! stroke (and vice versa).
//!
//! The display surface is a trait seam: the session calls
//! [`DisplaySurface::present`] after every buffer swap and never
//! exposes the raw buffer reference outside the lock.

pub mod display;
pub mod error;
pub mod runner;
pub mod session;

pub use display::{DisplaySurface, NullDisplay};
pub use error::SessionError;
pub use runner::{CancellationToken, EffectOutcome, EffectReport};
pub use session::EditorSession;
