use std::time::{Duration, Instant};

use log::{debug, info};

use crate::metrics;

#[derive(Debug, Clone, Copy, PartialEq, Eq, strum_macros::Display)]
pub enum Phase {
    NotStarted,
    InProgress,
    Complete,
}

/// Discrete inputs to the state machine, one per processed event
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEvent {
    Char(char),
    DeleteChar,
    DeleteWord,
    /// Space key; snaps the current word to the target when possible
    Space,
    Tick,
    Resize { width: u16, height: u16 },
    /// Only honored in [`Phase::Complete`]
    Restart { target: String },
}

/// One typing attempt against a fixed target phrase.
///
/// Sessions are values: [`Session::apply`] never mutates the receiver and
/// returns the next state instead.
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    target: Vec<char>,
    typed: Vec<char>,
    started_at: Option<Instant>,
    completed_in: Option<Duration>,
    blink: bool,
    viewport: (u16, u16),
}

impl Session {
    pub fn new(target: impl AsRef<str>) -> Self {
        Self {
            target: target.as_ref().chars().collect(),
            typed: Vec::new(),
            started_at: None,
            completed_in: None,
            blink: false,
            viewport: (0, 0),
        }
    }

    pub fn with_viewport(mut self, width: u16, height: u16) -> Self {
        self.viewport = (width, height);
        self
    }

    pub fn target(&self) -> &[char] {
        &self.target
    }

    pub fn typed(&self) -> &[char] {
        &self.typed
    }

    pub fn target_text(&self) -> String {
        self.target.iter().collect()
    }

    pub fn typed_text(&self) -> String {
        self.typed.iter().collect()
    }

    pub fn started_at(&self) -> Option<Instant> {
        self.started_at
    }

    pub fn cursor_index(&self) -> usize {
        self.typed.len()
    }

    pub fn blink(&self) -> bool {
        self.blink
    }

    pub fn viewport(&self) -> (u16, u16) {
        self.viewport
    }

    pub fn is_complete(&self) -> bool {
        self.typed == self.target
    }

    pub fn phase(&self) -> Phase {
        if self.is_complete() {
            Phase::Complete
        } else if self.started_at.is_some() {
            Phase::InProgress
        } else {
            Phase::NotStarted
        }
    }

    /// Time spent typing: frozen at completion, otherwise measured up to `now`.
    pub fn elapsed(&self, now: Instant) -> Option<Duration> {
        self.completed_in
            .or_else(|| self.started_at.map(|start| now.saturating_duration_since(start)))
    }

    pub fn wpm(&self, now: Instant) -> u32 {
        self.elapsed(now)
            .map_or(0, |elapsed| metrics::words_per_minute(self.target.len(), elapsed))
    }

    /// WPM frozen at the completion instant; 0 until the phrase is complete
    pub fn final_wpm(&self) -> u32 {
        self.completed_in
            .map_or(0, |elapsed| metrics::words_per_minute(self.target.len(), elapsed))
    }

    pub fn accuracy(&self) -> f64 {
        metrics::accuracy(&self.typed, &self.target)
    }

    /// Produce the state that follows `event` at time `now`.
    pub fn apply(&self, event: &SessionEvent, now: Instant) -> Session {
        let mut next = self.clone();

        match event {
            SessionEvent::Tick => next.blink = !next.blink,
            SessionEvent::Resize { width, height } => next.viewport = (*width, *height),
            SessionEvent::Restart { target } => {
                if self.is_complete() {
                    info!("restarting with a new phrase");
                    next = Session::new(target).with_viewport(self.viewport.0, self.viewport.1);
                }
            }
            _ if self.is_complete() => {}
            SessionEvent::Char(c) => {
                next.start(now);
                next.typed.push(*c);
                next.check_completion(now);
            }
            SessionEvent::DeleteChar => {
                next.typed.pop();
            }
            SessionEvent::DeleteWord => next.delete_word(),
            SessionEvent::Space => {
                if next.snap_to_word_boundary() {
                    next.start(now);
                    next.check_completion(now);
                }
            }
        }

        if next.phase() != self.phase() {
            debug!("phase {} -> {} on {:?}", self.phase(), next.phase(), event);
        }

        next
    }

    fn start(&mut self, now: Instant) {
        if self.started_at.is_none() {
            info!("typing started");
            self.started_at = Some(now);
        }
    }

    fn check_completion(&mut self, now: Instant) {
        if self.is_complete() && self.completed_in.is_none() {
            self.completed_in = self
                .started_at
                .map(|start| now.saturating_duration_since(start));
            info!(
                "phrase completed in {:?} ({} wpm, {:.2}% acc)",
                self.completed_in,
                self.wpm(now),
                self.accuracy()
            );
        }
    }

    /// Drop the last whitespace-delimited word, keeping a single separator
    /// after whatever words remain.
    fn delete_word(&mut self) {
        let text = self.typed_text();
        let mut words: Vec<&str> = text.split_whitespace().collect();
        if words.pop().is_none() {
            return;
        }

        let mut kept = words.join(" ");
        if !kept.is_empty() {
            kept.push(' ');
        }
        self.typed = kept.chars().collect();
    }

    /// Replace the current word with the target's, up to and including the
    /// next space. Returns false, leaving input untouched, when the input is
    /// empty, already ends in a space, or no space follows in the target.
    fn snap_to_word_boundary(&mut self) -> bool {
        if !matches!(self.typed.last(), Some(c) if *c != ' ') {
            return false;
        }

        let from = self.typed.len();
        match self.target.iter().skip(from).position(|c| *c == ' ') {
            Some(offset) => {
                self.typed = self.target[..=from + offset].to_vec();
                true
            }
            None => false,
        }
    }
}
