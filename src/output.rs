//! Output line model for the scrollback.
//!
//! Lines come from two places: the static command table, and text derived
//! from what the visitor typed (prompt echoes, diagnostics). The two are kept
//! apart in the type so that typed text is always rendered literally and can
//! never be interpreted as styled content.

/// A styled piece of static content.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment {
    /// Plain text.
    Text(&'static str),
    /// Emphasized text (headings, dates, award names).
    Accent(&'static str),
    /// A hyperlink. `href` is `None` for entries shown as links but with no target.
    Link {
        text: &'static str,
        href: Option<&'static str>,
    },
}

impl Segment {
    pub fn text(&self) -> &'static str {
        match self {
            Segment::Text(s) | Segment::Accent(s) => s,
            Segment::Link { text, .. } => text,
        }
    }
}

/// A block of static content, one slice of segments per line.
pub type Block = &'static [&'static [Segment]];

/// One entry of the output log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputLine {
    /// A line from the command table.
    Static(&'static [Segment]),
    /// The prompt followed by the raw submitted input.
    Echo(String),
    /// A literal diagnostic line.
    Text(String),
}

impl OutputLine {
    pub fn text(s: impl Into<String>) -> Self {
        OutputLine::Text(s.into())
    }

    pub fn echo(input: impl Into<String>) -> Self {
        OutputLine::Echo(input.into())
    }

    /// Flatten the line to unstyled text, rendering echoes with `prompt`.
    pub fn plain_text(&self, prompt: &Prompt) -> String {
        match self {
            OutputLine::Static(segments) => segments.iter().map(Segment::text).collect(),
            OutputLine::Echo(input) => format!("{}{}", prompt.render(), input),
            OutputLine::Text(s) => s.clone(),
        }
    }
}

/// The decorative prompt, `<user>@<host>:-$ `.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prompt {
    pub user: String,
    pub host: String,
}

impl Prompt {
    pub const SUFFIX: &'static str = ":-$ ";

    pub fn new(user: impl Into<String>, host: impl Into<String>) -> Self {
        Self {
            user: user.into(),
            host: host.into(),
        }
    }

    /// The part after the highlighted user token.
    pub fn tail(&self) -> String {
        format!("@{}{}", self.host, Self::SUFFIX)
    }

    pub fn render(&self) -> String {
        format!("{}{}", self.user, self.tail())
    }
}

impl Default for Prompt {
    fn default() -> Self {
        Self::new("visitor", "terminal.prashant.dev")
    }
}
