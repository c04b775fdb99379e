//! TUI pane rendering modules
//!
//! Each pane is a stateless render function over the active snapshot and the
//! playback state; none of them can change either.
//!
//! # Pane Modules
//!
//! - [`array`]: Boxed cells for the active snapshot, highlights and pointer
//! - [`narration`]: What the active snapshot depicts, and the operation line
//! - [`status`]: Status bar with step counter, keybindings and playback state

pub mod array;
pub mod narration;
pub mod status;

// Re-export render functions for convenience
pub use array::render_array_pane;
pub use narration::{render_command_pane, render_narration_pane};
pub use status::render_status_bar;
