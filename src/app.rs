use std::io;

use tracing::debug;

use crate::render::Renderer;
use crate::session::GameSession;

/// Screen clearing and frame pacing, injected by the caller.
///
/// The core never touches a terminal; the demo binary supplies a crossterm
/// implementation and tests supply a scripted one.
pub trait Console {
    /// Clear the screen before the next frame.
    fn clear(&mut self) -> io::Result<()>;

    /// Show one rendered frame.
    fn present(&mut self, frame: &str) -> io::Result<()>;

    /// Pause between generations. Returning `false` stops the loop.
    fn pause(&mut self) -> io::Result<bool>;
}

/// The render-and-step loop: clear, render, present, advance, pause, until
/// the console says stop.
///
/// The loop owns nothing but the iteration order. Stopping is entirely the
/// console's call; the session needs no reset between generations.
pub fn run<C: Console>(
    session: &mut GameSession,
    renderer: &mut Renderer,
    console: &mut C,
) -> io::Result<()> {
    let mut generation: u64 = 0;

    loop {
        console.clear()?;

        let frame = renderer.render(session.current());
        console.present(frame)?;

        session.step();
        generation += 1;
        debug!(generation, "advanced");

        if !console.pause()? {
            break;
        }
    }

    Ok(())
}
