//! # Introduction
//!
//! arrviz animates elementary array operations one frame at a time. A
//! requested operation is turned into an ordered list of immutable
//! snapshots, and a playback controller steps through them by hand or on a
//! timer, driving a terminal UI built with
//! [ratatui](https://docs.rs/ratatui).
//!
//! ## Pipeline
//!
//! ```text
//! Command text → Command → Generator → Snapshots → Playback → TUI
//! ```
//!
//! 1. [`command`]: parses `push 60`-style text, rejecting non-integers.
//! 2. [`generator`]: pure, total step generator producing
//!    [`snapshot::Snapshot`]s; bad requests become an explanatory snapshot.
//! 3. [`playback`]: cursor, step navigation and self-terminating autoplay.
//! 4. [`session`]: the current array; commits each operation's result.
//! 5. [`config`]: TOML settings for the initial array and timing.
//! 6. [`ui`]: ratatui-based TUI; not part of the stable library API.
//!
//! ## Supported operations
//!
//! `push <v>`, `pop`, `find <v>`, `slice <start> <end>` (exclusive end,
//! non-destructive), and `splice <index> [<v>]` (replace one element, or
//! delete it when no value is given).

pub mod command;
pub mod config;
pub mod generator;
pub mod playback;
pub mod session;
pub mod snapshot;
pub mod ui;
