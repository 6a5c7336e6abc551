//! Terminal command interpreter.
//!
//! The command vocabulary is a closed enum dispatched with an exhaustive
//! match; the interpreter owns input buffer and history and talks to the
//! outside world through a [`Sink`] for text and [`Action`]s for state
//! changes.

mod clock;
mod command;
mod interpreter;

pub use clock::{Clock, SystemClock};
pub use command::{COMMANDS, Cmd, CommandSpec, completions, parse, suggestions};
pub use interpreter::{Action, Context, HistoryMove, Interpreter, OutputCategory, Sink};
