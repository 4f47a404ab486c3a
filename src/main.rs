use clap::{error::ErrorKind, CommandFactory, Parser};
use crossterm::{
    execute,
    terminal::{self, disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    tty::IsTty,
};
use rand::Rng;
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Frame, Terminal,
};
use std::{
    error::Error,
    io::{self, stdin},
    time::Instant,
};
use typist::{
    app::App,
    config::{ConfigStore, FileConfigStore},
    logging,
    runtime::{CrosstermEventSource, EventSource, FixedTicker, Runner, Ticker},
    ui::{SessionView, Theme},
};

/// minimal typing speed trainer for the terminal
#[derive(Parser, Debug)]
#[clap(
    version,
    about,
    long_about = "Type the phrase shown on screen. Mistakes are highlighted as you go; space snaps the current word to the target. When the phrase matches you get your wpm and accuracy."
)]
struct Cli {}

fn main() -> Result<(), Box<dyn Error>> {
    let _cli = Cli::parse();

    if !stdin().is_tty() {
        let mut cmd = Cli::command();
        cmd.error(ErrorKind::Io, "stdin must be a tty").exit();
    }

    if let Err(err) = logging::init() {
        eprintln!("warning: logging disabled: {err}");
    }

    let config = FileConfigStore::new().load();
    let theme = Theme::from(&config.theme);
    let ticker = FixedTicker::new(config.blink_interval());

    enable_raw_mode()?;

    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    let viewport = terminal::size()?;
    let mut app = App::new(rand::thread_rng(), theme, viewport);
    let result = start_tui(
        &mut terminal,
        &mut app,
        Runner::new(CrosstermEventSource::new(), ticker),
    );

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn start_tui<B: Backend, R: Rng, E: EventSource, T: Ticker>(
    terminal: &mut Terminal<B>,
    app: &mut App<R>,
    mut runner: Runner<E, T>,
) -> Result<(), Box<dyn Error>> {
    loop {
        terminal.draw(|f| ui(app, f))?;

        let event = runner.step();
        if app.handle(event, Instant::now()).is_break() {
            break;
        }
    }

    Ok(())
}

fn ui<R: Rng>(app: &App<R>, f: &mut Frame) {
    f.render_widget(SessionView::new(&app.session, &app.theme), f.area());
}
