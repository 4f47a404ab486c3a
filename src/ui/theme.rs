use std::str::FromStr;

use log::warn;
use ratatui::style::{Color, Modifier, Style};

use crate::config::ThemeConfig;

/// Read-only styles handed to the presentation layer at startup
#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    pub correct: Style,
    pub incorrect: Style,
    pub cursor: Style,
    pub heading: Style,
    pub hint: Style,
}

impl Default for Theme {
    fn default() -> Self {
        Theme::from(&ThemeConfig::default())
    }
}

fn parse_color(role: &str, value: &str, fallback: Color) -> Color {
    Color::from_str(value).unwrap_or_else(|_| {
        warn!("invalid {role} colour {value:?}, using {fallback}");
        fallback
    })
}

impl From<&ThemeConfig> for Theme {
    fn from(cfg: &ThemeConfig) -> Self {
        let bold_style = Style::default().add_modifier(Modifier::BOLD);

        Self {
            correct: Style::default().fg(parse_color("correct", &cfg.correct, Color::Indexed(10))),
            incorrect: Style::default().fg(parse_color(
                "incorrect",
                &cfg.incorrect,
                Color::Indexed(9),
            )),
            cursor: bold_style.fg(parse_color("cursor", &cfg.cursor, Color::Indexed(15))),
            heading: bold_style.fg(parse_color("heading", &cfg.heading, Color::Indexed(12))),
            hint: Style::default().add_modifier(Modifier::ITALIC),
        }
    }
}
