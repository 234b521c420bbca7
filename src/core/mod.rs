//! Core navigation types and logic.
//!
//! This module contains the pure functional core of the navigator:
//! - Opaque page identifiers via [`Page`]
//! - The immutable [`NavigationState`] value and its transition function
//! - The [`Trail`] of moves a session actually made
//!
//! All logic in this module is pure (no side effects), following the
//! "pure core, imperative shell" philosophy; the shell lives in
//! [`crate::session`].

mod page;
mod state;
mod trail;

pub use page::Page;
pub use state::NavigationState;
pub use trail::{Move, MoveKind, Trail};
