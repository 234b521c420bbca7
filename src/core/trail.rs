//! Record of the moves a session actually made.
//!
//! The trail is pure bookkeeping: it never influences where `Back` or
//! `Forward` land (that is the job of the state's stacks), it only remembers
//! the path taken. Commands that do not move - `Back` or `Forward` on an
//! empty stack - leave no trace here.

use super::page::Page;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// The kind of command that produced a move.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum MoveKind {
    /// A new page was visited.
    Visit,
    /// The session stepped back through history.
    Back,
    /// The session stepped forward through redo history.
    Forward,
}

/// Record of a single move between pages.
///
/// Moves are immutable values representing a change of current page at a
/// specific point in time.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct Move {
    /// The page navigated away from
    pub from: Page,
    /// The page navigated to
    pub to: Page,
    /// Which command caused the move
    pub kind: MoveKind,
    /// When the move occurred
    pub timestamp: DateTime<Utc>,
}

/// Ordered history of moves.
///
/// The trail is immutable - [`record`](Trail::record) returns a new trail
/// with the move added, following the same value-threading style as the
/// rest of the core.
///
/// # Example
///
/// ```rust
/// use chrono::Utc;
/// use waypoint::core::{Move, MoveKind, Page, Trail};
///
/// let trail = Trail::new();
/// let trail = trail.record(Move {
///     from: Page::home(),
///     to: Page::from("Gallery"),
///     kind: MoveKind::Visit,
///     timestamp: Utc::now(),
/// });
///
/// let path = trail.get_path();
/// assert_eq!(path, vec![&Page::home(), &Page::from("Gallery")]);
/// ```
#[derive(Clone, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
pub struct Trail {
    moves: Vec<Move>,
}

impl Trail {
    /// Create a new empty trail.
    pub fn new() -> Self {
        Self { moves: Vec::new() }
    }

    /// Record a move, returning a new trail.
    ///
    /// This is a pure function - it does not mutate the existing trail but
    /// returns a new one with the move added.
    pub fn record(&self, step: Move) -> Self {
        let mut moves = self.moves.clone();
        moves.push(step);
        Self { moves }
    }

    /// Get the sequence of pages traversed.
    ///
    /// Returns references to pages in order: the starting page, then the
    /// destination of each move. Empty if nothing ever moved.
    pub fn get_path(&self) -> Vec<&Page> {
        let mut path = Vec::new();
        if let Some(first) = self.moves.first() {
            path.push(&first.from);
        }
        for step in &self.moves {
            path.push(&step.to);
        }
        path
    }

    /// Calculate total duration from first to last move.
    ///
    /// Returns `None` if there are no moves.
    pub fn duration(&self) -> Option<Duration> {
        if let (Some(first), Some(last)) = (self.moves.first(), self.moves.last()) {
            let duration = last.timestamp.signed_duration_since(first.timestamp);
            duration.to_std().ok()
        } else {
            None
        }
    }

    /// Get all recorded moves in order.
    pub fn moves(&self) -> &[Move] {
        &self.moves
    }
}
