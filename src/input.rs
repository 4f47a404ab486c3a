use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::session::{Phase, SessionEvent};

/// What a key press means for the running app
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Quit,
    /// Start over with a fresh phrase; only produced once the phrase is complete
    Restart,
    Session(SessionEvent),
    Ignore,
}

fn is_quit(key: &KeyEvent) -> bool {
    match key.code {
        KeyCode::Esc => true,
        KeyCode::Char('c') => key.modifiers.contains(KeyModifiers::CONTROL),
        _ => false,
    }
}

fn is_word_delete(key: &KeyEvent) -> bool {
    match key.code {
        KeyCode::Backspace => key
            .modifiers
            .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT),
        // terminals that can't report a modified backspace
        KeyCode::Char('w') => key.modifiers.contains(KeyModifiers::CONTROL),
        _ => false,
    }
}

/// Map a raw key event to a [`Command`] given the current session phase.
///
/// Quit chords win in every phase. Once the phrase is complete only `r` does
/// anything else.
pub fn classify(key: &KeyEvent, phase: Phase) -> Command {
    if key.kind != KeyEventKind::Press {
        return Command::Ignore;
    }

    if is_quit(key) {
        return Command::Quit;
    }

    let plain = !key
        .modifiers
        .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT);

    if phase == Phase::Complete {
        return match key.code {
            KeyCode::Char('r') if plain => Command::Restart,
            _ => Command::Ignore,
        };
    }

    if is_word_delete(key) {
        return Command::Session(SessionEvent::DeleteWord);
    }

    match key.code {
        KeyCode::Backspace => Command::Session(SessionEvent::DeleteChar),
        KeyCode::Char(' ') if plain => Command::Session(SessionEvent::Space),
        KeyCode::Char(c) if plain => Command::Session(SessionEvent::Char(c)),
        _ => Command::Ignore,
    }
}
