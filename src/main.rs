//! Terminal Frogger runner (default binary).
//!
//! Runs the frame-locked loop: poll input → step the world → compose the
//! frame incrementally → present → wait for the next frame boundary.

use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};

use tui_frogger::core::World;
use tui_frogger::gfx::{Composer, FrameBuffer};
use tui_frogger::input::{scan_code, should_quit, InputMapper, ScanReport};
use tui_frogger::term::{FramePacer, TermPresenter};
use tui_frogger::types::TICK_MS;

fn main() -> Result<()> {
    let mut term = TermPresenter::new();
    term.enter()?;

    let result = run(&mut term);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TermPresenter) -> Result<()> {
    let mut world = World::new(1);
    let mut composer = Composer::new();
    let mut fb = FrameBuffer::screen();
    let mut mapper = InputMapper::new();
    let mut pacer = FramePacer::new(Duration::from_millis(TICK_MS));

    loop {
        // Drain events until the frame boundary, keeping the latest press.
        let mut report = ScanReport::None;
        while event::poll(pacer.remaining())? {
            if let Event::Key(key) = event::read()? {
                if should_quit(key) {
                    return Ok(());
                }
                // Auto-repeat is ignored; the mapper edge-detects presses.
                if key.kind == KeyEventKind::Press {
                    if let Some(code) = scan_code(key.code) {
                        report = ScanReport::Single(code);
                    }
                }
            }
        }

        let command = mapper.command(report);
        world.step(command);
        composer.compose_incremental(&world, &mut fb);
        term.draw(&fb)?;
        pacer.wait_for_sync();
    }
}
