//! Terminal PoVtris runner (default binary).
//!
//! Drives the core with a monotonic clock, maps keys to commands and "tilt"
//! orientations, and renders each frame's cell list through the framebuffer
//! renderer.

use std::env;
use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};

use povtris::core::{FrameCell, Game, GameConfig};
use povtris::input::{command_for_key, orientation_for_key, should_quit};
use povtris::term::{BoardView, FrameBuffer, Hud, TerminalRenderer, Viewport};

/// Upper bound on time spent waiting for input between frames
const FRAME_BUDGET: Duration = Duration::from_millis(16);

fn main() -> Result<()> {
    let mut config = GameConfig::from_env();
    if env::var_os("POVTRIS_SEED").is_none() {
        config.seed = clock_seed();
    }

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, config);

    // Restore the terminal before reporting anything
    let _ = term.leave();
    let hud = result?;
    eprintln!(
        "povtris: {} pieces, {} lines{}",
        hud.pieces,
        hud.lines,
        if hud.game_over { ", game over" } else { "" }
    );
    Ok(())
}

fn run(term: &mut TerminalRenderer, config: GameConfig) -> Result<Hud> {
    let mut game = Game::with_config(config);
    let view = BoardView::default();
    let mut hud = Hud::default();

    let mut cells: Vec<FrameCell> = Vec::with_capacity(256);
    let mut fb = FrameBuffer::new(0, 0);
    let epoch = Instant::now();

    loop {
        let now = epoch.elapsed().as_secs_f32();
        game.update(now);
        if let Some(event) = game.take_last_event() {
            hud.pieces += 1;
            hud.lines += event.rows_cleared as u32;
        }
        hud.orientation = game.orientation();
        hud.game_over = game.is_game_over();

        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        game.frame_into(now, &mut cells);
        view.render_into(&cells, &hud, Viewport::new(w, h), &mut fb);
        term.present(&mut fb)?;

        if !event::poll(FRAME_BUDGET)? {
            continue;
        }
        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                if should_quit(key) {
                    return Ok(hud);
                }
                if let Some(command) = command_for_key(key) {
                    game.apply(command);
                } else if let Some(target) = orientation_for_key(key) {
                    game.align_to(target);
                }
            }
            Event::Resize(_, _) => term.invalidate(),
            _ => {}
        }
    }
}

fn clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ d.as_secs() as u32)
        .unwrap_or(1)
}
