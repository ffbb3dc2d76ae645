// src/shell/mod.rs

//! Interactive menu surface.
//!
//! The shell owns no business state of its own: it renders a fixed numbered
//! menu, reads one line of input per prompt, and dispatches work to the
//! runner layer or renders registry snapshots. The loop has no terminal
//! state; it runs until the process is killed externally.
//!
//! - [`menu`] defines the menu text and the typed selection parser.
//! - [`session`] owns the input loop and dispatch.

pub mod menu;
pub mod session;

pub use menu::MenuChoice;
pub use session::InteractiveShell;
