//! The closed command vocabulary.
//!
//! Commands are a fixed enumeration with an exhaustive dispatch match, not
//! a name-keyed handler table, so adding one is a compile-checked change.
//! A parallel static spec table carries the names and help text in
//! declaration order; `help`, `ls`, completion, and suggestions all read
//! from it so their ordering stays consistent.

use folio_core::Page;

/// A parsed command with its arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Cmd {
    Help,
    Clear,
    Go(Page),
    Theme,
    Lang,
    Social,
    Whoami,
    Pwd,
    Ls,
    Echo(Vec<String>),
    Date,
    History,
}

/// Static metadata for one registered command name.
#[derive(Debug, Clone, Copy)]
pub struct CommandSpec {
    pub name: &'static str,
    pub description: &'static str,
    pub usage: &'static str,
}

/// Every registered command, in declaration order. Suggestion and
/// completion candidates follow this order.
pub const COMMANDS: &[CommandSpec] = &[
    CommandSpec {
        name: "help",
        description: "List available commands",
        usage: "help",
    },
    CommandSpec {
        name: "clear",
        description: "Clear the terminal output",
        usage: "clear",
    },
    CommandSpec {
        name: "home",
        description: "Go to the home page",
        usage: "home",
    },
    CommandSpec {
        name: "about",
        description: "Go to the about page",
        usage: "about",
    },
    CommandSpec {
        name: "experience",
        description: "Go to the experience page",
        usage: "experience",
    },
    CommandSpec {
        name: "projects",
        description: "Go to the projects page",
        usage: "projects",
    },
    CommandSpec {
        name: "services",
        description: "Go to the services page",
        usage: "services",
    },
    CommandSpec {
        name: "contact",
        description: "Go to the contact page",
        usage: "contact",
    },
    CommandSpec {
        name: "blog",
        description: "Go to the blog",
        usage: "blog",
    },
    CommandSpec {
        name: "theme",
        description: "Toggle light/dark theme",
        usage: "theme",
    },
    CommandSpec {
        name: "lang",
        description: "Toggle English/German",
        usage: "lang",
    },
    CommandSpec {
        name: "social",
        description: "Show social links",
        usage: "social",
    },
    CommandSpec {
        name: "whoami",
        description: "Who is this?",
        usage: "whoami",
    },
    CommandSpec {
        name: "pwd",
        description: "Print the current location",
        usage: "pwd",
    },
    CommandSpec {
        name: "ls",
        description: "List commands",
        usage: "ls",
    },
    CommandSpec {
        name: "echo",
        description: "Print arguments",
        usage: "echo [text...]",
    },
    CommandSpec {
        name: "date",
        description: "Show the current date and time",
        usage: "date",
    },
    CommandSpec {
        name: "history",
        description: "Show command history",
        usage: "history",
    },
];

/// Parse an already-lowercased command name. `None` means unregistered.
pub fn parse(name: &str, args: &[&str]) -> Option<Cmd> {
    let cmd = match name {
        "help" => Cmd::Help,
        "clear" => Cmd::Clear,
        "theme" => Cmd::Theme,
        "lang" => Cmd::Lang,
        "social" => Cmd::Social,
        "whoami" => Cmd::Whoami,
        "pwd" => Cmd::Pwd,
        "ls" => Cmd::Ls,
        "echo" => Cmd::Echo(args.iter().map(|a| a.to_string()).collect()),
        "date" => Cmd::Date,
        "history" => Cmd::History,
        other => Cmd::Go(Page::from_name(other).filter(|p| *p != Page::Reading)?),
    };
    Some(cmd)
}

/// Suggestion candidates for an unknown name: same first character, or one
/// string contains the other, case-insensitive. Deliberately coarse (no
/// edit distance) to match the historical behavior. First three matches in
/// declaration order.
pub fn suggestions(unknown: &str) -> Vec<&'static str> {
    let lower = unknown.to_ascii_lowercase();
    let first = lower.chars().next();
    COMMANDS
        .iter()
        .map(|spec| spec.name)
        .filter(|name| {
            name.chars().next() == first || name.contains(&lower) || lower.contains(name)
        })
        .take(3)
        .collect()
}

/// Registered names with `partial` as a case-insensitive prefix.
pub fn completions(partial: &str) -> Vec<&'static str> {
    let lower = partial.to_ascii_lowercase();
    COMMANDS
        .iter()
        .map(|spec| spec.name)
        .filter(|name| name.starts_with(&lower))
        .collect()
}
