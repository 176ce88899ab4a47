//! The board state the rules read and mutate.
//!
//! ## Layers
//!
//! Each cell has a foreground tile (what is visible) and a background tile
//! (what lies beneath a creature or item). An actor entering a cell pushes
//! the old foreground down; an actor leaving pops it back up:
//!
//! ```text
//!   insert_tile(p, t):  bg <- fg, fg <- t
//!   pop_tile(p):        fg <- bg, bg <- floor
//! ```
//!
//! ## Actors
//!
//! Creatures live in one arena addressed by [`ActorId`]. Blocks only become
//! actors while something tracks them (sliding, being pushed, being cloned);
//! at rest they are just a [`Tile::Block`] on the board. Once nothing tracks
//! a block its slot is freed and handed to the next spawn.
//!
//! ```
//! use chip_rules::core::{Direction, EngineConfig, Position};
//! use chip_rules::creatures::{Creature, CreatureKind};
//! use chip_rules::level::Level;
//! use chip_rules::tiles::Tile;
//!
//! let mut level = Level::new(&EngineConfig::default().with_seed(1));
//! let chip = level.place_chip(Creature::new(Direction::Down, CreatureKind::Chip, Position::new(2, 2)));
//! assert_eq!(level.fg.get(Position::new(2, 2)), Tile::ChipDown);
//! assert_eq!(level.chip(), Some(chip));
//! ```

use rustc_hash::{FxHashMap, FxHashSet};
use tracing::{debug, trace};

use crate::core::{Candidates, EngineConfig, GameRng, Position, RandomSource, Turn};
use crate::creatures::{Creature, CreatureKind};
use crate::tiles::Tile;

use super::actor::ActorId;
use super::button::{Button, ButtonKind};
use super::inventory::Inventory;
use super::layer::Layer;
use super::monsters::MonsterList;
use super::slip::SlipList;

/// Board, actors and everything wired between them.
pub struct Level {
    /// Visible layer.
    pub fg: Layer,
    /// Layer beneath creatures and items.
    pub bg: Layer,
    /// Keys and boots.
    pub inventory: Inventory,
    /// Chips still to collect before sockets open.
    pub chips_left: i32,
    /// Non-player actors currently sliding.
    pub slip_list: SlipList,
    /// Monsters in processing order.
    pub monsters: MonsterList,
    /// Shared draw source. Every draw is part of the replay contract.
    pub rng: Box<dyn RandomSource>,

    actors: Vec<Creature>,
    free_slots: Vec<ActorId>,
    chip: Option<ActorId>,
    portals: Vec<Position>,
    toggle_doors: Vec<Position>,
    buttons: Vec<Button>,
    button_index: FxHashMap<(Position, ButtonKind), usize>,
    open_traps: FxHashSet<Position>,
    config: EngineConfig,
}

impl Level {
    /// An empty floor board with a seeded [`GameRng`].
    #[must_use]
    pub fn new(config: &EngineConfig) -> Self {
        Self::with_rng(config, Box::new(GameRng::new(config.seed)))
    }

    /// An empty floor board drawing from `rng`.
    #[must_use]
    pub fn with_rng(config: &EngineConfig, rng: Box<dyn RandomSource>) -> Self {
        Self {
            fg: Layer::default(),
            bg: Layer::default(),
            inventory: Inventory::new(),
            chips_left: 0,
            slip_list: SlipList::new(),
            monsters: MonsterList::new(),
            rng,
            actors: Vec::new(),
            free_slots: Vec::new(),
            chip: None,
            portals: Vec::new(),
            toggle_doors: Vec::new(),
            buttons: Vec::new(),
            button_index: FxHashMap::default(),
            open_traps: FxHashSet::default(),
            config: config.clone(),
        }
    }

    /// Build a level from decoded layers.
    ///
    /// Scans the foreground in board order: the player tile becomes the
    /// player actor, monster tiles join the monster list, teleports become
    /// portals. Toggle doors are registered from either layer. Blocks stay
    /// plain tiles. Buttons must still be wired by the caller.
    pub fn from_layers(
        fg: Layer,
        bg: Layer,
        config: &EngineConfig,
    ) -> Result<Self, crate::core::EncodingError> {
        let mut level = Self::new(config);
        level.fg = fg;
        level.bg = bg;

        for index in 0..crate::core::CELL_COUNT as u16 {
            let position = Position::from_index(index);
            let tile = level.fg.get(position);
            if tile.is_chip() {
                let id = level.spawn(Creature::from_tile(position, tile)?);
                level.chip = Some(id);
            } else if tile.is_monster() {
                let id = level.spawn(Creature::from_tile(position, tile)?);
                level.monsters.push(id);
            } else if tile == Tile::Teleport {
                level.portals.push(position);
            }
            if matches!(level.fg.get(position), Tile::ToggleOpen | Tile::ToggleClosed)
                || matches!(level.bg.get(position), Tile::ToggleOpen | Tile::ToggleClosed)
            {
                level.toggle_doors.push(position);
            }
        }
        debug!(
            monsters = level.monsters.len(),
            portals = level.portals.len(),
            "level built from layers"
        );
        Ok(level)
    }

    /// Active configuration.
    #[must_use]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    // === Actors ===

    /// Add a creature to the arena without touching the board.
    ///
    /// Reuses a retired slot when one is free, so a handle kept past
    /// [`Level::retire`] may name a newer actor.
    pub fn spawn(&mut self, creature: Creature) -> ActorId {
        if let Some(id) = self.free_slots.pop() {
            self.actors[id.index()] = creature;
            return id;
        }
        let id = ActorId(self.actors.len() as u32);
        self.actors.push(creature);
        id
    }

    /// Put the player on the board.
    pub fn place_chip(&mut self, creature: Creature) -> ActorId {
        let id = self.spawn(creature);
        self.insert_tile(creature.position, creature.to_tile());
        self.chip = Some(id);
        id
    }

    /// Put a monster on the board at the end of the processing order.
    pub fn place_monster(&mut self, creature: Creature) -> ActorId {
        let id = self.spawn(creature);
        self.insert_tile(creature.position, creature.to_tile());
        self.monsters.push(id);
        id
    }

    /// Put a block at rest on the board.
    pub fn place_block(&mut self, position: Position) {
        self.insert_tile(position, Tile::Block);
    }

    /// The actor behind `id`.
    ///
    /// Panics on a handle from another level.
    #[must_use]
    pub fn actor(&self, id: ActorId) -> &Creature {
        &self.actors[id.index()]
    }

    /// Mutable access to the actor behind `id`.
    pub fn actor_mut(&mut self, id: ActorId) -> &mut Creature {
        &mut self.actors[id.index()]
    }

    /// Every actor holding a slot. Killed monsters are included, retired
    /// blocks are not.
    pub fn actors(&self) -> impl Iterator<Item = (ActorId, &Creature)> + '_ {
        self.actors
            .iter()
            .enumerate()
            .map(|(index, creature)| (ActorId(index as u32), creature))
            .filter(|(id, _)| !self.free_slots.contains(id))
    }

    /// The player handle.
    #[must_use]
    pub fn chip(&self) -> Option<ActorId> {
        self.chip
    }

    /// The player's cell, or `INVALID` without a player.
    #[must_use]
    pub fn chip_position(&self) -> Position {
        self.chip
            .map_or(Position::INVALID, |id| self.actor(id).position)
    }

    /// Kill the player.
    pub fn kill_chip(&mut self) {
        if let Some(id) = self.chip {
            debug!(position = %self.actor(id).position, "chip killed");
            self.actor_mut(id).kill();
        }
    }

    /// Candidate directions for `id`'s own move, drawing from the level RNG.
    pub fn direction_priority(&mut self, id: ActorId) -> Candidates {
        let chip_position = self.chip_position();
        let Self { actors, rng, .. } = self;
        actors[id.index()].direction_priority(chip_position, rng.as_mut())
    }

    /// Candidate directions for `id` carried by the surface beneath it.
    pub fn slide_direction_priority(&mut self, id: ActorId, change_on_random_floor: bool) -> Candidates {
        let surface = self.bg.get(self.actor(id).position);
        let Self { actors, rng, .. } = self;
        actors[id.index()].slide_direction_priority(surface, rng.as_mut(), change_on_random_floor)
    }

    /// The first sliding actor standing on `position`.
    #[must_use]
    pub fn sliding_actor_at(&self, position: Position) -> Option<ActorId> {
        self.slip_list
            .iter()
            .find(|&id| self.actor(id).position == position)
    }

    /// Free the slot of a temporary actor that nothing refers to any more.
    ///
    /// Actors still sliding, listed as monsters or playing are left alone,
    /// as are slots already freed.
    pub(crate) fn retire(&mut self, id: ActorId) {
        let referenced = self.slip_list.contains(id)
            || self.monsters.contains(id)
            || self.chip == Some(id);
        if referenced || id.index() >= self.actors.len() || self.free_slots.contains(&id) {
            return;
        }
        self.actors[id.index()].kill();
        self.free_slots.push(id);
        trace!(%id, free = self.free_slots.len(), "actor retired");
    }

    // === Layers ===

    /// Lift the background tile at `position` into the foreground.
    pub fn pop_tile(&mut self, position: Position) {
        self.fg.set(position, self.bg.get(position));
        self.bg.set(position, Tile::Floor);
    }

    /// Push `tile` on top of `position`, moving the foreground down.
    pub fn insert_tile(&mut self, position: Position, tile: Tile) {
        self.bg.set(position, self.fg.get(position));
        self.fg.set(position, tile);
    }

    // === Portals, doors, buttons, traps ===

    /// Register a teleport. Scan order follows registration order.
    pub fn add_portal(&mut self, position: Position) {
        self.portals.push(position);
    }

    /// Registered teleports in scan order.
    #[must_use]
    pub fn portals(&self) -> &[Position] {
        &self.portals
    }

    /// Register a toggle door flipped by green buttons.
    pub fn add_toggle_door(&mut self, position: Position) {
        self.toggle_doors.push(position);
    }

    /// Wire a button, replacing any earlier wiring of the same cell and kind.
    pub fn wire_button(&mut self, button: Button) {
        let key = (button.position, button.kind);
        match self.button_index.get(&key) {
            Some(&slot) => self.buttons[slot] = button,
            None => {
                self.button_index.insert(key, self.buttons.len());
                self.buttons.push(button);
            }
        }
    }

    /// The button of `kind` wired at `position`.
    #[must_use]
    pub fn button(&self, position: Position, kind: ButtonKind) -> Option<Button> {
        self.button_index
            .get(&(position, kind))
            .map(|&slot| self.buttons[slot])
    }

    /// Wired brown buttons, in wiring order.
    pub fn brown_buttons(&self) -> impl Iterator<Item = Button> + '_ {
        self.buttons
            .iter()
            .copied()
            .filter(|b| b.kind == ButtonKind::Brown)
    }

    /// Whether the trap at `position` currently lets actors out.
    #[must_use]
    pub fn is_trap_open(&self, position: Position) -> bool {
        self.open_traps.contains(&position)
    }

    /// Open the trap at `position`.
    pub fn open_trap(&mut self, position: Position) {
        self.open_traps.insert(position);
    }

    /// Close the trap at `position`.
    pub fn close_trap(&mut self, position: Position) {
        self.open_traps.remove(&position);
    }

    /// Flip every registered toggle door, on whichever layer holds it.
    pub fn flip_toggle_doors(&mut self) {
        for i in 0..self.toggle_doors.len() {
            let position = self.toggle_doors[i];
            for layer in [&mut self.fg, &mut self.bg] {
                match layer.get(position) {
                    Tile::ToggleOpen => layer.set(position, Tile::ToggleClosed),
                    Tile::ToggleClosed => layer.set(position, Tile::ToggleOpen),
                    _ => {}
                }
            }
        }
    }

    /// Turn every live tank around and set stopped tanks moving again.
    pub fn reverse_tanks(&mut self) {
        let tanks: Vec<ActorId> = self
            .monsters
            .iter()
            .filter(|&id| self.actor(id).kind.is_tank())
            .collect();
        for id in tanks {
            let tank = self.actor_mut(id);
            tank.kind = CreatureKind::TankMoving;
            tank.direction = tank.direction.turn(Turn::Around);
            let (position, tile) = (tank.position, tank.to_tile());
            if self.fg.get(position).is_monster() {
                self.fg.set(position, tile);
            }
        }
    }

    /// Clone the creature standing on the clone machine at `machine`.
    ///
    /// The clone tries one step in its facing. On success a monster clone
    /// joins the monster list. Either way the template stays on the machine.
    pub fn clone_from_machine(&mut self, machine: Position) {
        let template = self.fg.get(machine);
        let Ok(clone) = Creature::from_tile(machine, template) else {
            trace!(position = %machine, ?template, "nothing to clone");
            return;
        };
        let facing = clone.direction;

        let id = self.spawn(clone);
        let moved = self.tick(id, &[Some(facing)], false);
        if moved && self.actor(id).kind.is_monster() {
            self.monsters.push(id);
        } else {
            self.retire(id);
        }
        debug!(position = %machine, ?template, moved, "clone machine fired");

        self.fg.set(machine, template);
        self.bg.set(machine, Tile::CloneMachine);
    }
}

impl Default for Level {
    fn default() -> Self {
        Self::new(&EngineConfig::default())
    }
}

impl std::fmt::Debug for Level {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Level")
            .field("chip", &self.chip)
            .field("actors", &(self.actors.len() - self.free_slots.len()))
            .field("chips_left", &self.chips_left)
            .field("inventory", &self.inventory)
            .field("slip_list", &self.slip_list)
            .field("monsters", &self.monsters)
            .field("rng_draws", &self.rng.draws())
            .finish_non_exhaustive()
    }
}
