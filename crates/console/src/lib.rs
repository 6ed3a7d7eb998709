//! # Hospital CRM Console
//!
//! A line-oriented front end for [`hcrm_core::Shell`]. Each input line is one
//! user event (`go`, `set`, `submit`, `edit`, `delete`, `filter`) and the
//! current view is drawn as text or JSON.
//!
//! The same [`Session`] drives an interactive terminal and the replay of a
//! command script.

pub mod command;
pub mod error;
pub mod render;
pub mod session;

pub use command::{Command, HELP};
pub use error::{CommandError, ConsoleError, ConsoleResult};
pub use render::{render, render_json, render_text, OutputFormat};
pub use session::{replay_file, RenderPolicy, Session, SessionOptions, SessionSummary};
