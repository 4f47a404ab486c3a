use std::ops::ControlFlow;
use std::time::Instant;

use log::{debug, info, warn};
use rand::Rng;

use crate::{
    corpus,
    input::{self, Command},
    runtime::AppEvent,
    session::{Session, SessionEvent},
    ui::Theme,
};

/// Owns the live session and everything needed to advance it
#[derive(Debug)]
pub struct App<R: Rng> {
    pub session: Session,
    pub theme: Theme,
    rng: R,
}

impl<R: Rng> App<R> {
    pub fn new(mut rng: R, theme: Theme, viewport: (u16, u16)) -> Self {
        let target = corpus::choose(&mut rng);
        info!("new session: {target:?}");

        Self {
            session: Session::new(target).with_viewport(viewport.0, viewport.1),
            theme,
            rng,
        }
    }

    /// Advance by one event. Breaks when the loop should exit.
    pub fn handle(&mut self, event: AppEvent, now: Instant) -> ControlFlow<()> {
        let session_event = match event {
            AppEvent::Tick => SessionEvent::Tick,
            AppEvent::Resize(width, height) => SessionEvent::Resize { width, height },
            AppEvent::Closed => {
                warn!("input source closed, exiting");
                return ControlFlow::Break(());
            }
            AppEvent::Key(key) => match input::classify(&key, self.session.phase()) {
                Command::Quit => {
                    info!("quit requested");
                    return ControlFlow::Break(());
                }
                Command::Restart => SessionEvent::Restart {
                    target: corpus::choose(&mut self.rng).to_string(),
                },
                Command::Session(event) => event,
                Command::Ignore => {
                    debug!("ignoring key {key:?}");
                    return ControlFlow::Continue(());
                }
            },
        };

        self.session = self.session.apply(&session_event, now);
        ControlFlow::Continue(())
    }
}
