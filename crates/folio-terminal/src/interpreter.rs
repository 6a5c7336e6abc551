//! Line submission, dispatch, history, and completion.
//!
//! The interpreter owns the input buffer and the history log. It has no
//! output device of its own: every textual response goes through a single
//! [`Sink`], and anything that changes application state comes back to the
//! host as an [`Action`] to fold into the reducer.

use folio_core::Page;
use folio_i18n::Translations;
use folio_types::{Lang, Theme};

use crate::clock::Clock;
use crate::command::{self, COMMANDS, Cmd};

/// Presentation category for an output line. Never affects dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputCategory {
    /// Echo of what the user typed.
    Input,
    /// Normal command output.
    Response,
    /// Informational side text (navigation notices, completion lists).
    Info,
    /// Command-not-found and similar.
    Error,
    /// "Did you mean" lines.
    Suggestion,
}

/// Receives all interpreter output.
pub trait Sink {
    fn emit(&mut self, text: &str, category: OutputCategory);
}

/// A state change requested by a command, for the host to apply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Navigate(Page),
    ToggleTheme,
    ToggleLang,
    ClearScreen,
}

/// Read-only application context for one dispatch.
pub struct Context<'a> {
    pub page: Page,
    pub lang: Lang,
    pub theme: Theme,
    pub i18n: &'a Translations,
    pub clock: &'a dyn Clock,
}

impl Context<'_> {
    fn text(&self, key: &str) -> String {
        self.i18n.resolve(self.lang, key)
    }
}

/// History navigation direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HistoryMove {
    Up,
    Down,
}

/// The command interpreter.
///
/// Invariant: `cursor` is always within `[0, history.len()]`; at
/// `history.len()` the buffer is the fresh (empty) line.
#[derive(Debug, Default)]
pub struct Interpreter {
    history: Vec<String>,
    cursor: usize,
    input: String,
}

impl Interpreter {
    pub fn new() -> Interpreter {
        Interpreter::default()
    }

    /// The current input buffer.
    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn set_input(&mut self, text: &str) {
        self.input = text.to_string();
    }

    /// Submitted lines, oldest first.
    pub fn history(&self) -> &[String] {
        &self.history
    }

    /// Submit one raw line: echo it, log it, reset the cursor, clear the
    /// buffer, then dispatch.
    pub fn submit(&mut self, line: &str, ctx: &Context<'_>, sink: &mut dyn Sink) -> Vec<Action> {
        sink.emit(&format!("$ {line}"), OutputCategory::Input);
        let trimmed = line.trim();
        if !trimmed.is_empty() {
            self.history.push(trimmed.to_string());
        }
        self.cursor = self.history.len();
        self.input.clear();
        self.dispatch(trimmed, ctx, sink)
    }

    fn dispatch(&self, line: &str, ctx: &Context<'_>, sink: &mut dyn Sink) -> Vec<Action> {
        let mut parts = line.split_whitespace();
        let Some(raw_name) = parts.next() else {
            return Vec::new();
        };
        let args: Vec<&str> = parts.collect();
        // The name is matched case-insensitively; arguments keep their
        // case so `echo` stays verbatim.
        let name = raw_name.to_ascii_lowercase();
        match command::parse(&name, &args) {
            Some(cmd) => self.run(cmd, ctx, sink),
            None => {
                sink.emit(
                    &format!("{}: {raw_name}", ctx.text("terminal.command_not_found")),
                    OutputCategory::Error,
                );
                let similar = command::suggestions(&name);
                if !similar.is_empty() {
                    sink.emit(
                        &format!("{} {}", ctx.text("terminal.did_you_mean"), similar.join(", ")),
                        OutputCategory::Suggestion,
                    );
                }
                Vec::new()
            },
        }
    }

    fn run(&self, cmd: Cmd, ctx: &Context<'_>, sink: &mut dyn Sink) -> Vec<Action> {
        match cmd {
            Cmd::Help => {
                sink.emit(&ctx.text("terminal.help_prompt"), OutputCategory::Info);
                let listing: Vec<String> = COMMANDS
                    .iter()
                    .map(|spec| format!("  {:<12} {}", spec.name, spec.description))
                    .collect();
                sink.emit(&listing.join("\n"), OutputCategory::Response);
                Vec::new()
            },
            Cmd::Clear => vec![Action::ClearScreen],
            Cmd::Go(page) => {
                sink.emit(
                    &format!("{} {}...", ctx.text("terminal.navigating_to"), page.name()),
                    OutputCategory::Info,
                );
                vec![Action::Navigate(page)]
            },
            Cmd::Theme => {
                sink.emit(
                    &format!(
                        "{} {}",
                        ctx.text("terminal.theme_switched"),
                        ctx.theme.toggled().name()
                    ),
                    OutputCategory::Info,
                );
                vec![Action::ToggleTheme]
            },
            Cmd::Lang => {
                sink.emit(
                    &format!(
                        "{} {}",
                        ctx.text("terminal.lang_switched"),
                        ctx.lang.toggled().code()
                    ),
                    OutputCategory::Info,
                );
                vec![Action::ToggleLang]
            },
            Cmd::Social => {
                sink.emit(&ctx.text("terminal.social_links"), OutputCategory::Response);
                Vec::new()
            },
            Cmd::Whoami => {
                sink.emit(&ctx.text("terminal.whoami"), OutputCategory::Response);
                Vec::new()
            },
            Cmd::Pwd => {
                sink.emit(
                    &format!("/portfolio/{}", ctx.page.name()),
                    OutputCategory::Response,
                );
                Vec::new()
            },
            Cmd::Ls => {
                let names: Vec<&str> = COMMANDS.iter().map(|spec| spec.name).collect();
                sink.emit(&names.join("  "), OutputCategory::Response);
                Vec::new()
            },
            Cmd::Echo(args) => {
                sink.emit(&args.join(" "), OutputCategory::Response);
                Vec::new()
            },
            Cmd::Date => {
                sink.emit(&ctx.clock.now_label(ctx.lang), OutputCategory::Response);
                Vec::new()
            },
            Cmd::History => {
                for (i, entry) in self.history.iter().enumerate() {
                    sink.emit(&format!("  {}. {entry}", i + 1), OutputCategory::Response);
                }
                Vec::new()
            },
        }
    }

    /// Tab completion over the command name.
    ///
    /// One prefix match replaces the buffer; several are listed and the
    /// buffer stays; none is a no-op. Buffers already past the name
    /// (containing whitespace) are left alone.
    pub fn complete_tab(&mut self, sink: &mut dyn Sink) {
        if self.input.is_empty() || self.input.contains(char::is_whitespace) {
            return;
        }
        let matches = command::completions(&self.input);
        match matches.as_slice() {
            [] => {},
            [only] => self.input = only.to_string(),
            many => sink.emit(&many.join("  "), OutputCategory::Info),
        }
    }

    /// Move through history. Up walks toward the oldest entry; Down walks
    /// back toward the fresh line, which is always an empty buffer.
    pub fn navigate_history(&mut self, direction: HistoryMove) {
        match direction {
            HistoryMove::Up => {
                if self.cursor > 0 {
                    self.cursor -= 1;
                    self.input = self.history[self.cursor].clone();
                }
            },
            HistoryMove::Down => {
                if self.cursor < self.history.len() {
                    self.cursor += 1;
                }
                match self.history.get(self.cursor) {
                    Some(entry) => self.input = entry.clone(),
                    None => self.input.clear(),
                }
            },
        }
    }
}
