//! Waypoint: a pure functional session navigation history library.
//!
//! Waypoint models a browser-style navigation session as a pure state
//! machine: a current page, a back stack, and a forward (redo) stack,
//! driven by an ordered list of `Visit` / `Back` / `Forward` commands.
//! The core is composed of pure functions with no side effects; the thin
//! imperative shell in [`session`] threads state values through a fold.
//!
//! # Core Concepts
//!
//! - **Page**: opaque string identifier, compared by exact equality
//! - **Command**: `Visit(name)` / `Back` / `Forward`, classified once from
//!   the raw wire form at the boundary
//! - **NavigationState**: immutable value with a pure `apply` transition
//! - **Trail**: immutable record of the moves a session actually made
//!
//! A `Visit` irrevocably discards the forward stack; `Back` and `Forward`
//! are no-ops when their source stack is empty. Every session starts on
//! `"Home"`.
//!
//! # Example
//!
//! ```rust
//! use waypoint::{run, Page};
//!
//! // Visiting a page after going back discards the redo history,
//! // so the trailing Forward has nowhere to go.
//! let page = run([
//!     "Visit About",
//!     "Visit Gallery",
//!     "Back",
//!     "Visit Contact",
//!     "Forward",
//! ])
//! .unwrap();
//! assert_eq!(page, Page::from("Contact"));
//!
//! // Malformed commands fail the whole invocation.
//! assert!(run(["Visit A", "back"]).is_err());
//! ```

pub mod command;
pub mod core;
pub mod session;

// Re-export commonly used types
pub use command::{Command, CommandError};
pub use core::{Move, MoveKind, NavigationState, Page, Trail};
pub use session::{run, ParseError, Session};
