pub mod theme;

pub use theme::Theme;

use itertools::{EitherOrBoth, Itertools};
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Block, Padding, Paragraph, Widget, Wrap},
};
use unicode_width::UnicodeWidthStr;

use crate::session::Session;

const HORIZONTAL_PADDING: u16 = 2;
const VERTICAL_PADDING: u16 = 1;
const BORDER: u16 = 1;

pub const CURSOR_GLYPH: &str = "█";
pub const BLANK_GLYPH: &str = " ";

/// The target phrase diffed against the input, with the cursor interleaved
/// before the character it sits on.
pub fn typing_line(session: &Session, theme: &Theme) -> Line<'static> {
    let cursor = session.cursor_index();
    let mut spans = Vec::with_capacity(session.target().len() + 1);

    for (idx, pair) in session
        .target()
        .iter()
        .zip_longest(session.typed())
        .enumerate()
    {
        let span = match pair {
            EitherOrBoth::Both(expected, typed) if expected == typed => {
                Span::styled(expected.to_string(), theme.correct)
            }
            // show what was actually typed
            EitherOrBoth::Both(_, typed) => Span::styled(typed.to_string(), theme.incorrect),
            EitherOrBoth::Left(expected) => Span::raw(expected.to_string()),
            EitherOrBoth::Right(_) => break,
        };

        if idx == cursor {
            let glyph = if session.blink() {
                CURSOR_GLYPH
            } else {
                BLANK_GLYPH
            };
            spans.push(Span::styled(glyph, theme.cursor));
        }
        spans.push(span);
    }

    Line::from(spans)
}

/// Everything drawn inside the frame for the session's current phase
pub fn frame_lines(session: &Session, theme: &Theme) -> Vec<Line<'static>> {
    if session.is_complete() {
        vec![
            Line::styled("You typed correctly!", theme.heading),
            Line::default(),
            Line::raw(format!("WPM: {}", session.final_wpm())),
            Line::raw(format!("Accuracy: {:.2}%", session.accuracy())),
            Line::default(),
            Line::styled("Press 'r' to restart", theme.hint),
        ]
    } else {
        vec![
            Line::styled("Type the following:", theme.heading),
            Line::default(),
            typing_line(session, theme),
            Line::default(),
            Line::styled("(ctrl+c) quit", theme.hint),
        ]
    }
}

fn line_width(line: &Line) -> usize {
    line.spans.iter().map(|span| span.content.width()).sum()
}

/// A `width` x `height` rect centered in `bounds`, clipped to fit
pub fn centered(bounds: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(bounds.width);
    let height = height.min(bounds.height);

    Rect::new(
        bounds.x + (bounds.width - width) / 2,
        bounds.y + (bounds.height - height) / 2,
        width,
        height,
    )
}

fn viewport_bounds(viewport: (u16, u16), area: Rect) -> Rect {
    match viewport {
        (0, _) | (_, 0) => area,
        (width, height) => Rect::new(area.x, area.y, width, height).intersection(area),
    }
}

/// Renders a session as a bordered frame centered in the viewport
pub struct SessionView<'a> {
    session: &'a Session,
    theme: &'a Theme,
}

impl<'a> SessionView<'a> {
    pub fn new(session: &'a Session, theme: &'a Theme) -> Self {
        Self { session, theme }
    }
}

impl Widget for SessionView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let lines = frame_lines(self.session, self.theme);

        let content_width = lines.iter().map(line_width).max().unwrap_or(0);
        let width = u16::try_from(content_width)
            .unwrap_or(u16::MAX)
            .saturating_add(2 * (HORIZONTAL_PADDING + BORDER));
        let height = u16::try_from(lines.len())
            .unwrap_or(u16::MAX)
            .saturating_add(2 * (VERTICAL_PADDING + BORDER));

        let frame = centered(
            viewport_bounds(self.session.viewport(), area),
            width,
            height,
        );

        let block = Block::bordered().padding(Padding::new(
            HORIZONTAL_PADDING,
            HORIZONTAL_PADDING,
            VERTICAL_PADDING,
            VERTICAL_PADDING,
        ));

        Paragraph::new(lines)
            .block(block)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: false })
            .render(frame, buf);
    }
}
