//! Cross-crate integration: edge-triggered input driving the simulation.

use tui_frogger::core::{StepOutcome, World};
use tui_frogger::input::{InputMapper, ScanReport};
use tui_frogger::types::{Command, ScanCode, TILE_H};

#[test]
fn test_held_key_moves_exactly_once() {
    let mut world = World::new(1);
    for lane in &mut world.hazards {
        lane.entities.clear();
    }
    let mut mapper = InputMapper::new();
    let start_y = world.frog.entity.y;

    // Hold "up" for twenty ticks.
    for _ in 0..20 {
        let command = mapper.command(ScanReport::Single(ScanCode::Up));
        world.step(command);
    }
    assert_eq!(world.frog.entity.y, start_y - TILE_H, "held key repeated");

    // Release, then press again: one more row.
    world.step(mapper.command(ScanReport::None));
    for _ in 0..5 {
        world.step(mapper.command(ScanReport::Single(ScanCode::Up)));
    }
    assert_eq!(world.frog.entity.y, start_y - 2 * TILE_H);
}

#[test]
fn test_confirm_restarts_only_after_game_over() {
    let mut world = World::new(1);
    let mut mapper = InputMapper::new();

    // Confirm during play is ignored.
    let y_before = world.frog.entity.y;
    world.step(mapper.command(ScanReport::Single(ScanCode::Confirm)));
    assert_eq!(world.frog.entity.y, y_before);
    assert!(!world.game_over());

    // Lose every life.
    while !world.game_over() {
        world.frog.entity.x = 0;
        world.frog.entity.y = 80;
        world.step(Command::None);
    }

    // The held confirm from earlier must re-arm before it fires again.
    world.step(mapper.command(ScanReport::None));
    let outcome = world.step(mapper.command(ScanReport::Single(ScanCode::Confirm)));
    assert_eq!(outcome, StepOutcome::WorldReset);
    assert!(!world.game_over());
    assert_eq!(world.lives(), 3);
}

#[test]
fn test_chorded_keys_do_nothing() {
    let mut world = World::new(1);
    for lane in &mut world.hazards {
        lane.entities.clear();
    }
    let mut mapper = InputMapper::new();
    let (x, y) = (world.frog.entity.x, world.frog.entity.y);

    for _ in 0..10 {
        world.step(mapper.command(ScanReport::Multiple));
    }
    assert_eq!((world.frog.entity.x, world.frog.entity.y), (x, y));
}
