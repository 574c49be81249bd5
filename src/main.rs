use std::io;
use std::time::Duration;

use anyhow::bail;
use crossterm::cursor;
use crossterm::event;
use crossterm::event::Event;
use crossterm::event::KeyCode;
use crossterm::event::KeyEvent;
use crossterm::event::KeyModifiers;
use crossterm::execute;
use crossterm::style;
use crossterm::terminal;
use tracing::info;
use tracing_subscriber::EnvFilter;

use bitlife::Coord;
use bitlife::app;
use bitlife::app::Console;
use bitlife::grid::BoundaryPolicy;
use bitlife::pattern;
use bitlife::render::PrintOptions;
use bitlife::render::Renderer;
use bitlife::session::GameSession;

const GRID_WIDTH: Coord = 20;
const GRID_HEIGHT: Coord = 40;

const FRAMETIME: Duration = Duration::from_millis(100);

/// Terminal-backed [`Console`]. The inter-frame pause doubles as the event
/// poll window, so keypresses are picked up without a second thread.
struct CrosstermConsole {
    stdout: io::Stdout,
    frametime: Duration,
}

impl CrosstermConsole {
    fn new(frametime: Duration) -> Self {
        Self {
            stdout: io::stdout(),
            frametime,
        }
    }
}

impl Console for CrosstermConsole {
    fn clear(&mut self) -> io::Result<()> {
        execute!(
            self.stdout,
            terminal::Clear(terminal::ClearType::All),
            cursor::MoveTo(0, 0),
        )
    }

    fn present(&mut self, frame: &str) -> io::Result<()> {
        for line in frame.lines() {
            execute!(
                self.stdout,
                style::Print(line),
                cursor::MoveToNextLine(1)
            )?;
        }

        Ok(())
    }

    /// `q` or ctrl-c stops the loop; anything else keeps it running.
    fn pause(&mut self) -> io::Result<bool> {
        if !event::poll(self.frametime)? {
            return Ok(true);
        }

        match event::read()? {
            Event::Key(KeyEvent {
                code: KeyCode::Char('q'),
                ..
            })
            | Event::Key(KeyEvent {
                code: KeyCode::Char('c'),
                modifiers: KeyModifiers::CONTROL,
                ..
            }) => Ok(false),
            _ => Ok(true),
        }
    }
}

/// A randomized 20x40 torus.
fn random_demo() -> anyhow::Result<GameSession> {
    let mut session = GameSession::new(GRID_WIDTH, GRID_HEIGHT, BoundaryPolicy::Torus)?;
    session.randomize(&mut rand::thread_rng());

    Ok(session)
}

/// A Gosper glider gun on a 20x40 grid with a dead boundary.
fn glider_gun_demo() -> anyhow::Result<GameSession> {
    let mut session = GameSession::new(GRID_WIDTH, GRID_HEIGHT, BoundaryPolicy::AllOff)?;
    pattern::seed(session.current_mut(), pattern::GLIDER_GUN)?;

    Ok(session)
}

fn run(mut session: GameSession) -> anyhow::Result<()> {
    let mut renderer = Renderer::new(PrintOptions::default());
    let mut console = CrosstermConsole::new(FRAMETIME);

    terminal::enable_raw_mode()?;
    let res = app::run(&mut session, &mut renderer, &mut console);
    terminal::disable_raw_mode()?;

    res?;

    Ok(())
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let demo = std::env::args().nth(1);

    let session = match demo.as_deref() {
        None | Some("random") => {
            info!("running the random torus demo, press q to quit");
            random_demo()?
        }
        Some("glider-gun") => {
            info!("running the glider gun demo, press q to quit");
            glider_gun_demo()?
        }
        Some(other) => bail!("unknown demo {other:?}, expected \"random\" or \"glider-gun\""),
    };

    run(session)
}
