// Integration tests (native) for the `romantic-pursuit` crate.
// They drive the engine through the shipped levels the way a player would.

use romantic_pursuit::{
    Catalog, Cell, DeathReason, Dimension, Direction, Engine, Event, GameMode, Lang,
};

fn new_game() -> Engine {
    let mut engine = Engine::new(Catalog::builtin(Lang::En).unwrap());
    engine.begin();
    engine
}

/// Walks a route written as `U`/`D`/`L`/`R` characters (digits repeat the next step).
fn walk(engine: &mut Engine, route: &str) {
    let mut repeat = 0u32;
    for ch in route.chars() {
        if let Some(n) = ch.to_digit(10) {
            repeat = repeat * 10 + n;
            continue;
        }
        let dir = match ch {
            'U' => Direction::Up,
            'D' => Direction::Down,
            'L' => Direction::Left,
            'R' => Direction::Right,
            _ => continue,
        };
        for _ in 0..repeat.max(1) {
            engine.step(dir);
        }
        repeat = 0;
    }
}

fn collected_texts(events: &[Event]) -> usize {
    events
        .iter()
        .filter(|e| matches!(e, Event::ItemCollected { .. }))
        .count()
}

fn clear_level_one(engine: &mut Engine) {
    assert_eq!(engine.mode(), GameMode::Dialog, "intro line expected");
    engine.advance_dialog();
    walk(engine, "9R 2D 9L 2D 4R");
    assert_eq!(engine.player().cell, Cell::new(4, 4));
    assert_eq!(engine.mode(), GameMode::Dialog);
    engine.advance_dialog();
    walk(engine, "5R 2D 9L 2D 9R D");
}

fn clear_level_two(engine: &mut Engine) {
    engine.switch_dimension(Dimension::Heaven);
    walk(engine, "4R 2D");
    engine.switch_dimension(Dimension::Human);
    walk(engine, "D R");
    assert_eq!(engine.mode(), GameMode::Dialog);
    engine.advance_dialog();
    walk(engine, "R D");
    engine.switch_dimension(Dimension::Heaven);
    walk(engine, "D 2R 4D R");
}

fn clear_level_three(engine: &mut Engine) {
    engine.switch_dimension(Dimension::Hell);
    walk(engine, "2D 4R 3D 2L U");
    assert_eq!(engine.mode(), GameMode::Dialog);
    engine.advance_dialog();
    walk(engine, "D 2R");
    engine.switch_dimension(Dimension::Human);
    walk(engine, "R D");
    assert_eq!(engine.mode(), GameMode::Dialog);
    engine.advance_dialog();
    walk(engine, "2R 3D 2R");
}

#[test]
fn full_playthrough_reaches_victory() {
    let mut engine = new_game();

    clear_level_one(&mut engine);
    assert_eq!(engine.level_index(), 1);
    let events = engine.drain_events();
    assert_eq!(events.last(), Some(&Event::LevelAdvanced(1)));
    assert_eq!(collected_texts(&events), 1);

    clear_level_two(&mut engine);
    assert_eq!(engine.level_index(), 2);
    let events = engine.drain_events();
    assert_eq!(events.last(), Some(&Event::LevelAdvanced(2)));
    assert_eq!(collected_texts(&events), 1);
    assert!(!events.iter().any(|e| matches!(e, Event::Died(_))));

    clear_level_three(&mut engine);
    assert_eq!(engine.mode(), GameMode::Victory);
    let events = engine.drain_events();
    assert_eq!(events.last(), Some(&Event::Victory));
    assert_eq!(collected_texts(&events), 2);
}

#[test]
fn advancing_resets_player_to_next_start_in_human() {
    let mut engine = new_game();
    clear_level_one(&mut engine);
    let p = engine.player();
    assert_eq!(p.cell, engine.level().start);
    assert_eq!(p.dimension, Dimension::Human);
    assert_eq!(p.facing, Direction::Down);
    assert_eq!(engine.mode(), GameMode::Playing);
}

#[test]
fn locked_heaven_on_first_level() {
    let mut engine = new_game();
    engine.advance_dialog();
    engine.drain_events();
    engine.switch_dimension(Dimension::Heaven);
    assert_eq!(engine.player().dimension, Dimension::Human);
    assert_eq!(engine.drain_events(), vec![Event::Blocked]);
}

#[test]
fn switching_into_rock_ends_the_run_until_restart() {
    let mut engine = new_game();
    clear_level_one(&mut engine);
    clear_level_two(&mut engine);
    engine.drain_events();

    // (0,1) is a corridor in Hell but solid in Heaven.
    engine.switch_dimension(Dimension::Hell);
    walk(&mut engine, "D");
    engine.switch_dimension(Dimension::Heaven);
    assert_eq!(engine.mode(), GameMode::GameOver);
    assert_eq!(engine.player().dimension, Dimension::Heaven);
    assert_eq!(engine.death(), Some(DeathReason::SpatialOverlap));
    assert_eq!(DeathReason::SpatialOverlap.to_string(), "spatial overlap");

    walk(&mut engine, "R");
    engine.switch_dimension(Dimension::Human);
    assert_eq!(engine.player().cell, Cell::new(0, 1));

    engine.restart_level();
    assert_eq!(engine.level_index(), 2);
    assert_eq!(engine.mode(), GameMode::Playing);
    assert_eq!(engine.player().cell, Cell::new(0, 0));
    assert_eq!(engine.player().dimension, Dimension::Human);
}

#[test]
fn restart_rearms_collected_triggers() {
    let mut engine = new_game();
    engine.advance_dialog();
    walk(&mut engine, "9R 2D 9L 2D 4R");
    assert!(engine.is_collected(Cell::new(4, 4)));
    engine.advance_dialog();

    engine.restart_level();
    assert!(!engine.is_collected(Cell::new(4, 4)));
    // Level 0 replays its intro on restart.
    assert_eq!(engine.mode(), GameMode::Dialog);
    engine.advance_dialog();
    engine.drain_events();
    walk(&mut engine, "9R 2D 9L 2D 4R");
    assert_eq!(collected_texts(&engine.drain_events()), 1);
}

#[test]
fn start_level_jumps_directly() {
    let mut engine = new_game();
    engine.start_level(2);
    assert_eq!(engine.level_index(), 2);
    assert_eq!(engine.mode(), GameMode::Playing);
    assert_eq!(engine.drain_events().last(), Some(&Event::LevelStarted(2)));
}
