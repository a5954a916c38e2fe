//! # Presentation Layer
//!
//! Turns a transformed `DisplayRecord` (or a failed lookup) into output.
//!
//! ```text
//! [ Handler ] --> [ Presenter ] --> [ ViewModel ] --> [ Renderer ] ==(JSON)==> serde_json
//!                                                         |        ==(Text)==> [ View ] (Display)
//!                                                         |
//!                                                         +==(TUI)==> [ View ] (ratatui Widget)
//! ```
//!
//! - Presenters are pure: no I/O, no terminal state.
//! - View models carry raw values; the console view and the TUI widgets pick
//!   their own unit formatting.
//! - The TUI renderer owns input state and the search ticket counter; views
//!   only borrow.

pub mod formatters;
pub mod presenters;
pub mod renderers;
pub mod view_models;
pub mod views;
