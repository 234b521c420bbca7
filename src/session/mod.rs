//! The imperative shell around the pure core.
//!
//! A [`Session`] threads a [`NavigationState`] through applied commands and
//! keeps a [`Trail`] of the moves that actually happened. The free function
//! [`run`] is the whole-script entry point: parse every raw command up
//! front, then fold them through a fresh session and report the final page.

use crate::command::{Command, CommandError};
use crate::core::{Move, MoveKind, NavigationState, Page, Trail};
use chrono::Utc;
use thiserror::Error;

/// A malformed command string, reported with its zero-based position in the
/// input list.
///
/// Parsing is strict-reject: the first malformed string fails the whole
/// invocation and no partially-applied state is exposed.
#[derive(Clone, PartialEq, Eq, Debug, Error)]
#[error("invalid command {command:?} at position {position}: {source}")]
pub struct ParseError {
    /// Zero-based index of the offending command in the input list.
    pub position: usize,
    /// The offending raw string, verbatim.
    pub command: String,
    /// What was wrong with it.
    pub source: CommandError,
}

/// One navigation session: current state plus the trail of moves made.
///
/// # Example
///
/// ```rust
/// use waypoint::command::Command;
/// use waypoint::core::Page;
/// use waypoint::session::Session;
///
/// let mut session = Session::new();
/// session.apply(&Command::Visit(Page::from("Gallery")));
/// session.apply(&Command::Back);
///
/// assert_eq!(session.current_page(), &Page::home());
/// assert_eq!(session.trail().moves().len(), 2);
/// ```
#[derive(Clone, Debug, Default)]
pub struct Session {
    state: NavigationState,
    trail: Trail,
}

impl Session {
    /// Create a session on the initial state (current page `"Home"`).
    pub fn new() -> Self {
        Self {
            state: NavigationState::new(),
            trail: Trail::new(),
        }
    }

    /// Apply one command to the session.
    ///
    /// The underlying state transition is pure; the session simply replaces
    /// its state with the result. A move is recorded in the trail only when
    /// the command actually moved: a `Visit` always does, `Back`/`Forward`
    /// only when their stack is non-empty.
    pub fn apply(&mut self, command: &Command) {
        let moved = match command {
            Command::Visit(_) => Some(MoveKind::Visit),
            Command::Back if self.state.can_go_back() => Some(MoveKind::Back),
            Command::Forward if self.state.can_go_forward() => Some(MoveKind::Forward),
            _ => None,
        };

        let next = self.state.apply(command);

        if let Some(kind) = moved {
            self.trail = self.trail.record(Move {
                from: self.state.current().clone(),
                to: next.current().clone(),
                kind,
                timestamp: Utc::now(),
            });
        }

        self.state = next;
    }

    /// The page the session is currently on.
    pub fn current_page(&self) -> &Page {
        self.state.current()
    }

    /// The full navigation state (pure).
    pub fn state(&self) -> &NavigationState {
        &self.state
    }

    /// The trail of moves made so far (pure).
    pub fn trail(&self) -> &Trail {
        &self.trail
    }
}

/// Run a whole command script and return the final current page.
///
/// Every raw string is parsed before any command is applied, so a malformed
/// entry anywhere in the list aborts the invocation without touching any
/// state. An empty script yields `"Home"`.
///
/// # Errors
///
/// Returns [`ParseError`] for the first raw string that is not one of
/// `"Visit <name>"`, `"Back"`, or `"Forward"`.
///
/// # Example
///
/// ```rust
/// use waypoint::core::Page;
/// use waypoint::session::run;
///
/// let page = run(["Visit About Us", "Back", "Forward"]).unwrap();
/// assert_eq!(page, Page::from("About Us"));
///
/// assert_eq!(run::<[&str; 0]>([]).unwrap(), Page::home());
/// ```
pub fn run<I>(commands: I) -> Result<Page, ParseError>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    let mut script = Vec::new();
    for (position, raw) in commands.into_iter().enumerate() {
        let raw = raw.as_ref();
        let command = raw.parse::<Command>().map_err(|source| ParseError {
            position,
            command: raw.to_string(),
            source,
        })?;
        script.push(command);
    }

    let mut session = Session::new();
    for command in &script {
        session.apply(command);
    }

    Ok(session.current_page().clone())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_script_yields_home() {
        assert_eq!(run::<[&str; 0]>([]).unwrap(), Page::home());
    }

    #[test]
    fn back_then_forward_returns_to_the_visited_page() {
        let page = run(["Visit About Us", "Back", "Forward"]).unwrap();
        assert_eq!(page, Page::from("About Us"));
    }

    #[test]
    fn backing_out_of_two_visits_lands_on_home() {
        let page = run(["Visit About Us", "Visit Gallery", "Back", "Back"]).unwrap();
        assert_eq!(page, Page::home());
    }

    #[test]
    fn visit_after_back_discards_redo_history() {
        let page = run([
            "Visit About",
            "Visit Gallery",
            "Back",
            "Visit Contact",
            "Forward",
        ])
        .unwrap();
        assert_eq!(page, Page::from("Contact"));
    }

    #[test]
    fn back_and_forward_on_fresh_session_are_no_ops() {
        let page = run(["Back", "Forward"]).unwrap();
        assert_eq!(page, Page::home());
    }

    #[test]
    fn over_popping_stabilizes_at_home() {
        let page = run(["Visit A", "Back", "Back", "Back"]).unwrap();
        assert_eq!(page, Page::home());
    }

    #[test]
    fn linear_history_walks_both_ways() {
        let back_twice = run(["Visit A", "Visit B", "Visit C", "Back", "Back"]).unwrap();
        assert_eq!(back_twice, Page::from("A"));

        let and_forward_twice = run([
            "Visit A", "Visit B", "Visit C", "Back", "Back", "Forward", "Forward",
        ])
        .unwrap();
        assert_eq!(and_forward_twice, Page::from("C"));
    }

    #[test]
    fn malformed_command_fails_with_position_and_text() {
        let err = run(["Visit A", "Backwards", "Visit B"]).unwrap_err();
        assert_eq!(
            err,
            ParseError {
                position: 1,
                command: "Backwards".to_string(),
                source: CommandError::Unrecognized,
            }
        );
    }

    #[test]
    fn nameless_visit_fails_with_missing_name() {
        let err = run(["Visit "]).unwrap_err();
        assert_eq!(err.position, 0);
        assert_eq!(err.source, CommandError::MissingName);
    }

    #[test]
    fn parse_error_display_names_the_offender() {
        let err = run(["Visit A", "reload"]).unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid command \"reload\" at position 1: \
             expected \"Visit <name>\", \"Back\", or \"Forward\""
        );
    }

    #[test]
    fn session_records_only_real_moves() {
        let mut session = Session::new();
        session.apply(&Command::Back);
        session.apply(&Command::Forward);
        assert!(session.trail().moves().is_empty());

        session.apply(&Command::Visit(Page::from("A")));
        session.apply(&Command::Back);
        session.apply(&Command::Back);

        let moves = session.trail().moves();
        assert_eq!(moves.len(), 2);
        assert_eq!(moves[0].kind, MoveKind::Visit);
        assert_eq!(moves[1].kind, MoveKind::Back);
    }

    #[test]
    fn session_trail_tracks_the_path_taken() {
        let mut session = Session::new();
        for raw in ["Visit A", "Visit B", "Back", "Forward"] {
            session.apply(&raw.parse().unwrap());
        }

        let path = session.trail().get_path();
        assert_eq!(
            path,
            vec![
                &Page::home(),
                &Page::from("A"),
                &Page::from("B"),
                &Page::from("A"),
                &Page::from("B"),
            ]
        );
    }
}
