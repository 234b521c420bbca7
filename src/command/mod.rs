//! Wire-form navigation commands.
//!
//! Raw instruction strings are classified exactly once, at the boundary,
//! into the [`Command`] variants. The transition logic downstream pattern
//! matches on the variant and can never mis-dispatch on a malformed string.
//!
//! The wire forms are case-sensitive and whitespace-exact:
//!
//! - `"Visit " + name` where `name` is one or more characters, spaces and
//!   case preserved verbatim
//! - exactly `"Back"`
//! - exactly `"Forward"`

use crate::core::Page;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Errors that can occur when classifying a raw command string.
#[derive(Clone, PartialEq, Eq, Debug, Error)]
pub enum CommandError {
    #[error("expected \"Visit <name>\", \"Back\", or \"Forward\"")]
    Unrecognized,

    #[error("\"Visit\" requires a page name")]
    MissingName,
}

/// A single navigation instruction.
///
/// # Example
///
/// ```rust
/// use waypoint::command::Command;
/// use waypoint::core::Page;
///
/// let command: Command = "Visit About Us".parse().unwrap();
/// assert_eq!(command, Command::Visit(Page::from("About Us")));
///
/// assert_eq!("Back".parse::<Command>().unwrap(), Command::Back);
/// assert_eq!("Forward".parse::<Command>().unwrap(), Command::Forward);
///
/// // Anything else is rejected, never guessed at.
/// assert!("back".parse::<Command>().is_err());
/// ```
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum Command {
    /// Navigate to a new page, discarding any redo history.
    Visit(Page),
    /// Return to the most recently left page, if any.
    Back,
    /// Re-enter the most recently backed-out-of page, if any.
    Forward,
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Back" => Ok(Command::Back),
            "Forward" => Ok(Command::Forward),
            "Visit" => Err(CommandError::MissingName),
            _ => match s.strip_prefix("Visit ") {
                Some("") => Err(CommandError::MissingName),
                Some(name) => Ok(Command::Visit(Page::from(name))),
                None => Err(CommandError::Unrecognized),
            },
        }
    }
}

impl fmt::Display for Command {
    /// Render the command back to its wire form.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Command::Visit(name) => write!(f, "Visit {name}"),
            Command::Back => f.write_str("Back"),
            Command::Forward => f.write_str("Forward"),
        }
    }
}
