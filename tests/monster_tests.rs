//! Monster turn integration tests.
//!
//! Random monsters are checked against scripted draws so the expected path
//! is exact, then against the seeded generator for replay determinism.

use chip_rules::{
    Creature, CreatureKind, Direction, EngineConfig, Level, Position, ScriptedDraw, ScriptedRng,
    Tile, Turn,
};

fn at(x: i32, y: i32) -> Position {
    Position::new(x, y)
}

fn scripted(draws: impl IntoIterator<Item = ScriptedDraw>) -> Level {
    Level::with_rng(&EngineConfig::default(), Box::new(ScriptedRng::new(draws)))
}

// =============================================================================
// Random Movers
// =============================================================================

#[test]
fn test_walker_tries_forward_then_drawn_turns() {
    let mut level = scripted([ScriptedDraw::Permutation3([Turn::Left, Turn::Right, Turn::Around])]);
    level.fg.set(at(8, 7), Tile::Wall);
    let walker = level.place_monster(Creature::new(Direction::Up, CreatureKind::Walker, at(8, 8)));

    assert_eq!(
        level.direction_priority(walker).to_vec(),
        vec![Some(Direction::Up), Some(Direction::Left), Some(Direction::Right), Some(Direction::Down)]
    );
    assert_eq!(level.rng.draws(), 1);
}

#[test]
fn test_blocked_walker_takes_first_drawn_turn() {
    let mut level = scripted([ScriptedDraw::Permutation3([Turn::Left, Turn::Right, Turn::Around])]);
    level.fg.set(at(8, 7), Tile::Wall);
    let walker = level.place_monster(Creature::new(Direction::Up, CreatureKind::Walker, at(8, 8)));

    assert!(level.tick_actor(walker));
    assert_eq!(level.actor(walker).position, at(7, 8));
    assert_eq!(level.fg.get(at(7, 8)), Tile::WalkerLeft);
    assert_eq!(level.rng.draws(), 1);
}

#[test]
fn test_blob_follows_drawn_order() {
    let mut level = scripted([ScriptedDraw::Permutation4([
        Turn::Around,
        Turn::Left,
        Turn::Forward,
        Turn::Right,
    ])]);
    let blob = level.place_monster(Creature::new(Direction::Up, CreatureKind::Blob, at(8, 8)));

    assert!(level.tick_actor(blob));
    assert_eq!(level.actor(blob).position, at(8, 9));
    assert_eq!(level.rng.draws(), 1);
}

#[test]
fn test_scripted_direction_still_consumes_draw() {
    let mut level = scripted([ScriptedDraw::Random4(0)]);
    let walker = level.place_monster(Creature::new(Direction::Up, CreatureKind::Walker, at(8, 8)));
    level.actor_mut(walker).set_scripted_direction(Some(Direction::Right));

    assert!(level.tick_actor(walker));
    assert_eq!(level.actor(walker).position, at(9, 8));
    assert_eq!(level.rng.draws(), 1);
    assert_eq!(level.actor(walker).scripted_direction(), None);
}

#[test]
fn test_fixed_movers_never_draw() {
    let mut level = Level::default();
    let ids: Vec<_> = [
        CreatureKind::Bug,
        CreatureKind::Fireball,
        CreatureKind::PinkBall,
        CreatureKind::TankMoving,
        CreatureKind::Glider,
        CreatureKind::Paramecium,
    ]
    .into_iter()
    .enumerate()
    .map(|(i, kind)| {
        let position = at(4 + 4 * i as i32, 10);
        level.place_monster(Creature::new(Direction::Up, kind, position))
    })
    .collect();

    for _ in 0..5 {
        for &id in &ids {
            level.tick_actor(id);
        }
    }
    assert_eq!(level.rng.draws(), 0);
}

// =============================================================================
// Chasing And Killing
// =============================================================================

#[test]
fn test_teeth_close_in_on_player() {
    let mut level = Level::default();
    level.place_chip(Creature::new(Direction::Down, CreatureKind::Chip, at(12, 5)));
    let teeth = level.place_monster(Creature::new(Direction::Down, CreatureKind::Teeth, at(10, 9)));

    // Vertical distance is larger, so teeth go up first.
    assert!(level.tick_actor(teeth));
    assert_eq!(level.actor(teeth).position, at(10, 8));
    assert_eq!(level.fg.get(at(10, 8)), Tile::TeethUp);
}

#[test]
fn test_teeth_blocked_on_main_axis_sidestep() {
    let mut level = Level::default();
    level.place_chip(Creature::new(Direction::Down, CreatureKind::Chip, at(12, 5)));
    level.fg.set(at(10, 8), Tile::Wall);
    let teeth = level.place_monster(Creature::new(Direction::Down, CreatureKind::Teeth, at(10, 9)));

    assert!(level.tick_actor(teeth));
    assert_eq!(level.actor(teeth).position, at(11, 9));
}

#[test]
fn test_player_walking_into_monster_dies() {
    let mut level = Level::default();
    let chip = level.place_chip(Creature::new(Direction::Down, CreatureKind::Chip, at(3, 3)));
    level.place_monster(Creature::new(Direction::Up, CreatureKind::Bug, at(4, 3)));

    assert!(level.move_chip(Direction::Right));
    assert!(level.actor(chip).is_dead());
    assert_eq!(level.fg.get(at(4, 3)), Tile::BugUp);
    assert_eq!(level.fg.get(at(3, 3)), Tile::Floor);
}

#[test]
fn test_glider_crosses_water_others_drown() {
    let mut level = Level::default();
    level.fg.set(at(5, 4), Tile::Water);
    level.fg.set(at(9, 4), Tile::Water);
    let glider = level.place_monster(Creature::new(Direction::Up, CreatureKind::Glider, at(5, 5)));
    let ball = level.place_monster(Creature::new(Direction::Up, CreatureKind::PinkBall, at(9, 5)));

    assert!(level.tick_actor(glider));
    assert!(!level.actor(glider).is_dead());
    assert_eq!(level.bg.get(at(5, 4)), Tile::Water);

    assert!(level.tick_actor(ball));
    assert!(level.actor(ball).is_dead());
    assert_eq!(level.monsters.dead_count, 1);
}

// =============================================================================
// Determinism
// =============================================================================

fn busy_level(seed: u64) -> Level {
    let mut level = Level::new(&EngineConfig::default().with_seed(seed));
    level.place_chip(Creature::new(Direction::Down, CreatureKind::Chip, at(16, 16)));
    for (i, kind) in [
        CreatureKind::Walker,
        CreatureKind::Blob,
        CreatureKind::Walker,
        CreatureKind::Blob,
        CreatureKind::Teeth,
        CreatureKind::Bug,
    ]
    .into_iter()
    .enumerate()
    {
        let position = at(3 + 5 * i as i32, 4);
        level.place_monster(Creature::new(Direction::Down, kind, position));
    }
    level.fg.set(at(10, 10), Tile::ForceRandom);
    level
}

fn run(level: &mut Level, rounds: usize) {
    for _ in 0..rounds {
        let order: Vec<_> = level.monsters.iter().collect();
        for id in order {
            if !level.actor(id).is_dead() {
                level.tick_actor(id);
            }
        }
    }
}

#[test]
fn test_same_seed_same_game() {
    let mut a = busy_level(1234);
    let mut b = busy_level(1234);
    run(&mut a, 60);
    run(&mut b, 60);

    assert_eq!(a.fg.codes(), b.fg.codes());
    assert_eq!(a.bg.codes(), b.bg.codes());
    assert_eq!(a.rng.draws(), b.rng.draws());
    assert!(a.rng.draws() > 0);
    for ((_, x), (_, y)) in a.actors().zip(b.actors()) {
        assert_eq!(x, y);
    }
}
