//! The command table.
//!
//! Maps every recognized command name and `ant -xx` alias to its static
//! content block, and answers tab-completion queries against the names.

pub mod content;

use crate::output::Block;

/// How a command's content reaches the output log.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Delivery {
    /// All lines are appended in one update.
    Immediate,
    /// Lines are revealed one per tick.
    Animated,
}

#[derive(Debug)]
pub struct CommandEntry {
    pub name: &'static str,
    pub aliases: &'static [&'static str],
    pub body: Block,
    pub delivery: Delivery,
}

impl CommandEntry {
    fn matches(&self, command: &str) -> bool {
        self.name == command || self.aliases.contains(&command)
    }
}

/// The literal command that empties the output log. Matched case-sensitively.
pub const CLEAR: &str = "clear";

/// Known commands, in completion order.
pub static COMMANDS: &[CommandEntry] = &[
    CommandEntry {
        name: "help",
        aliases: &["ant -h"],
        body: content::HELP,
        delivery: Delivery::Immediate,
    },
    CommandEntry {
        name: "about",
        aliases: &["ant -ab"],
        body: content::ABOUT,
        delivery: Delivery::Immediate,
    },
    CommandEntry {
        name: "experience",
        aliases: &["ant -ex"],
        body: content::EXPERIENCE,
        delivery: Delivery::Animated,
    },
    CommandEntry {
        name: "education",
        aliases: &["ant -ed"],
        body: content::EDUCATION,
        delivery: Delivery::Animated,
    },
    CommandEntry {
        name: "technical skills",
        aliases: &["ant -ts"],
        body: content::TECHNICAL_SKILLS,
        delivery: Delivery::Animated,
    },
    CommandEntry {
        name: "awards and achievements",
        aliases: &["ant -aw"],
        body: content::AWARDS,
        delivery: Delivery::Animated,
    },
    CommandEntry {
        name: "licenses & certifications",
        aliases: &["ant -lc"],
        body: content::CERTIFICATIONS,
        delivery: Delivery::Animated,
    },
    CommandEntry {
        name: "projects",
        aliases: &["ant -pr"],
        body: content::PROJECTS,
        delivery: Delivery::Animated,
    },
    CommandEntry {
        name: "volunteering",
        aliases: &["ant -vo"],
        body: content::VOLUNTEERING,
        delivery: Delivery::Animated,
    },
    CommandEntry {
        name: "publications",
        aliases: &["ant -pb"],
        body: content::PUBLICATIONS,
        delivery: Delivery::Animated,
    },
    CommandEntry {
        name: "hobbies",
        aliases: &["ant -hb"],
        body: content::HOBBIES,
        delivery: Delivery::Animated,
    },
    CommandEntry {
        name: "contacts",
        aliases: &["ant -co"],
        body: content::CONTACTS,
        delivery: Delivery::Animated,
    },
];

/// Find the entry whose name or alias equals `command` exactly.
///
/// The caller lowercases the input; the table itself is all lowercase.
pub fn lookup(command: &str) -> Option<&'static CommandEntry> {
    COMMANDS.iter().find(|entry| entry.matches(command))
}

/// First command name, in table order, that starts with `input` (ignoring case).
pub fn complete(input: &str) -> Option<&'static str> {
    let prefix = input.to_lowercase();
    COMMANDS
        .iter()
        .map(|entry| entry.name)
        .find(|name| name.starts_with(&prefix))
}
