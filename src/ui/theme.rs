//! Colors and the mapping from output lines to styled ratatui lines.

use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

use crate::output::{OutputLine, Prompt, Segment};

pub const ACCENT: Color = Color::Rgb(255, 165, 0);
pub const BUTTONS: [Color; 3] = [Color::Rgb(255, 95, 86), Color::Rgb(255, 189, 46), Color::Rgb(39, 201, 63)];

pub fn accent() -> Style {
    Style::default().fg(ACCENT)
}

pub fn link() -> Style {
    accent().add_modifier(Modifier::UNDERLINED)
}

pub fn dim() -> Style {
    Style::default().add_modifier(Modifier::DIM)
}

/// `visitor` highlighted, then `@host:-$ `.
pub fn prompt_spans(prompt: &Prompt) -> Vec<Span<'static>> {
    vec![
        Span::styled(prompt.user.clone(), accent()),
        Span::raw(prompt.tail()),
    ]
}

/// Spans for one segment. A link with a target is followed by the target,
/// dimmed, since the terminal cannot follow it on click.
pub fn segment_spans(segment: &Segment) -> Vec<Span<'static>> {
    match *segment {
        Segment::Text(s) => vec![Span::raw(s)],
        Segment::Accent(s) => vec![Span::styled(s, accent())],
        Segment::Link { text, href: None } => vec![Span::styled(text, link())],
        Segment::Link { text, href: Some(href) } => {
            let target = href.strip_prefix("mailto:").unwrap_or(href);
            vec![
                Span::styled(text, link()),
                Span::styled(format!(" <{}>", target), dim()),
            ]
        }
    }
}

pub fn output_line(line: &OutputLine, prompt: &Prompt) -> Line<'static> {
    match line {
        OutputLine::Static(segments) => Line::from(segments.iter().flat_map(segment_spans).collect::<Vec<_>>()),
        OutputLine::Echo(input) => {
            let mut spans = prompt_spans(prompt);
            spans.push(Span::raw(input.clone()));
            Line::from(spans)
        }
        OutputLine::Text(s) => Line::from(Span::raw(s.clone())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_echo_highlights_user_only() {
        let line = output_line(&OutputLine::echo("about"), &Prompt::default());
        assert_eq!(line.spans.len(), 3);
        assert_eq!(line.spans[0].content, "visitor");
        assert_eq!(line.spans[0].style.fg, Some(ACCENT));
        assert_eq!(line.spans[1].content, "@terminal.prashant.dev:-$ ");
        assert_eq!(line.spans[2].content, "about");
        assert_eq!(line.spans[2].style, Style::default());
    }

    #[test]
    fn test_segments_map_to_styles() {
        static LINE: &[Segment] = &[
            Segment::Text("a"),
            Segment::Accent("b"),
            Segment::Link { text: "c", href: None },
        ];
        let line = output_line(&OutputLine::Static(LINE), &Prompt::default());
        assert_eq!(line.spans[0].style, Style::default());
        assert_eq!(line.spans[1].style, accent());
        assert!(line.spans[2].style.add_modifier.contains(Modifier::UNDERLINED));
        assert_eq!(line.spans.len(), 3);
    }

    #[test]
    fn test_link_target_follows_text() {
        static LINE: &[Segment] = &[
            Segment::Link { text: "site", href: Some("https://example.com") },
            Segment::Link { text: "mail", href: Some("mailto:me@example.com") },
        ];
        let line = output_line(&OutputLine::Static(LINE), &Prompt::default());
        let texts: Vec<_> = line.spans.iter().map(|s| s.content.as_ref()).collect();
        assert_eq!(texts, vec!["site", " <https://example.com>", "mail", " <me@example.com>"]);
        assert_eq!(line.spans[0].style, link());
        assert_eq!(line.spans[1].style, dim());
    }
}
