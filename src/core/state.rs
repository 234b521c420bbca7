//! The navigation state value and its pure transition function.
//!
//! `NavigationState` is an immutable value threaded through a left fold over
//! commands: each step is a pure `(state, command) -> state` transition with
//! no hidden mutation, which keeps the navigator trivially testable and
//! thread-safe.

use super::page::Page;
use crate::command::Command;
use serde::{Deserialize, Serialize};

/// Snapshot of a navigation session: the current page plus the back and
/// forward history stacks.
///
/// Both stacks are ordered oldest-to-newest; the last element is the top,
/// i.e. the page the next `Back` or `Forward` lands on. A fresh state starts
/// on `"Home"` with both stacks empty.
///
/// The state is immutable - [`apply`](NavigationState::apply) returns a new
/// state and leaves the receiver untouched.
///
/// # Example
///
/// ```rust
/// use waypoint::command::Command;
/// use waypoint::core::{NavigationState, Page};
///
/// let state = NavigationState::new();
/// assert_eq!(state.current(), &Page::home());
///
/// let state = state.apply(&Command::Visit(Page::from("Gallery")));
/// assert_eq!(state.current(), &Page::from("Gallery"));
/// assert_eq!(state.back_stack(), &[Page::home()]);
///
/// let state = state.apply(&Command::Back);
/// assert_eq!(state.current(), &Page::home());
/// assert_eq!(state.forward_stack(), &[Page::from("Gallery")]);
/// ```
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct NavigationState {
    current: Page,
    back: Vec<Page>,
    forward: Vec<Page>,
}

impl Default for NavigationState {
    fn default() -> Self {
        Self::new()
    }
}

impl NavigationState {
    /// Create the initial state: current page `"Home"`, both stacks empty.
    pub fn new() -> Self {
        Self {
            current: Page::home(),
            back: Vec::new(),
            forward: Vec::new(),
        }
    }

    /// The page the session is currently on.
    pub fn current(&self) -> &Page {
        &self.current
    }

    /// The back stack, oldest-to-newest. The last element is the page the
    /// next `Back` returns to.
    pub fn back_stack(&self) -> &[Page] {
        &self.back
    }

    /// The forward (redo) stack, oldest-to-newest. The last element is the
    /// page the next `Forward` returns to.
    pub fn forward_stack(&self) -> &[Page] {
        &self.forward
    }

    /// Whether a `Back` command would move (pure).
    pub fn can_go_back(&self) -> bool {
        !self.back.is_empty()
    }

    /// Whether a `Forward` command would move (pure).
    pub fn can_go_forward(&self) -> bool {
        !self.forward.is_empty()
    }

    /// Apply one command, returning the resulting state.
    ///
    /// This is a pure function - it does not mutate the existing state but
    /// returns a new one. `Back` and `Forward` are no-ops when their source
    /// stack is empty; a `Visit` unconditionally clears the forward stack,
    /// so redo history is unrecoverable once a new page is visited.
    ///
    /// # Example
    ///
    /// ```rust
    /// use waypoint::command::Command;
    /// use waypoint::core::{NavigationState, Page};
    ///
    /// let state = NavigationState::new()
    ///     .apply(&Command::Visit(Page::from("A")))
    ///     .apply(&Command::Visit(Page::from("B")))
    ///     .apply(&Command::Back);
    ///
    /// // Visiting while redo history exists discards it.
    /// let state = state.apply(&Command::Visit(Page::from("C")));
    /// assert!(!state.can_go_forward());
    /// assert_eq!(state.apply(&Command::Forward).current(), &Page::from("C"));
    /// ```
    pub fn apply(&self, command: &Command) -> Self {
        match command {
            Command::Visit(name) => self.visit(name),
            Command::Back => self.go_back(),
            Command::Forward => self.go_forward(),
        }
    }

    fn visit(&self, name: &Page) -> Self {
        let mut back = self.back.clone();
        back.push(self.current.clone());
        Self {
            current: name.clone(),
            back,
            forward: Vec::new(),
        }
    }

    fn go_back(&self) -> Self {
        let mut back = self.back.clone();
        let Some(previous) = back.pop() else {
            return self.clone();
        };
        let mut forward = self.forward.clone();
        forward.push(self.current.clone());
        Self {
            current: previous,
            back,
            forward,
        }
    }

    fn go_forward(&self) -> Self {
        let mut forward = self.forward.clone();
        let Some(next) = forward.pop() else {
            return self.clone();
        };
        let mut back = self.back.clone();
        back.push(self.current.clone());
        Self {
            current: next,
            back,
            forward,
        }
    }
}
