//! The tile-entry rule table.
//!
//! [`can_enter`] is the read-only half, used for real attempts and for
//! probing (can a pushed block go further?). [`Level::try_enter`] is the
//! mutating half: same classification, plus the tile's side effect.
//! Both match every [`Tile`] variant explicitly.

use crate::core::{Direction, Position, Turn};
use crate::creatures::{Creature, CreatureKind};
use crate::level::{ActorId, Boot, Button, ButtonKind, KeyColor, Level};
use crate::tiles::{monster_tiles, Tile};

/// Whether an actor may step off `tile` at `position` heading `direction`.
///
/// Thin walls hold actors in on their walled side; a trap holds them until
/// it is opened.
pub fn can_leave(direction: Direction, tile: Tile, position: Position, level: &Level) -> bool {
    match tile {
        Tile::ThinWallUp => direction != Direction::Up,
        Tile::ThinWallRight => direction != Direction::Right,
        Tile::ThinWallDown => direction != Direction::Down,
        Tile::ThinWallLeft => direction != Direction::Left,
        Tile::ThinWallDownRight => direction != Direction::Down && direction != Direction::Right,
        Tile::Trap => level.is_trap_open(position),
        _ => true,
    }
}

/// Whether an actor of `kind` heading `direction` may enter `tile`.
pub fn can_enter(kind: CreatureKind, direction: Direction, tile: Tile, level: &Level) -> bool {
    use Direction::*;
    match tile {
        Tile::Floor
        | Tile::Water
        | Tile::Ice
        | Tile::ForceDown
        | Tile::ForceUp
        | Tile::ForceLeft
        | Tile::ForceRight
        | Tile::ButtonGreen
        | Tile::ButtonRed
        | Tile::ToggleOpen
        | Tile::ButtonBrown
        | Tile::ButtonBlue
        | Tile::Bomb
        | Tile::Trap
        | Tile::Hint
        | Tile::KeyBlue
        | Tile::KeyRed
        | Tile::KeyGreen
        | Tile::KeyYellow => true,

        Tile::Wall
        | Tile::InvisibleWall
        | Tile::Block
        | Tile::BlockUp
        | Tile::BlockLeft
        | Tile::BlockDown
        | Tile::BlockRight
        | Tile::BlueWallReal
        | Tile::OverlayBuffer
        | Tile::ToggleClosed
        | Tile::HiddenWallTemp
        | Tile::CloneMachine
        | Tile::DrownedChip
        | Tile::BurnedChip
        | Tile::BombedChip
        | Tile::Unused36
        | Tile::Unused37
        | Tile::IceBlockStatic
        | Tile::ExitedChip
        | Tile::ExitExtra1
        | Tile::ExitExtra2 => false,

        Tile::Chip
        | Tile::Dirt
        | Tile::BlueWallFake
        | Tile::Thief
        | Tile::PopUpWall
        | Tile::Teleport => kind.is_chip(),
        Tile::Fire => kind != CreatureKind::Bug && kind != CreatureKind::Walker,

        Tile::ThinWallUp => direction != Down,
        Tile::ThinWallRight => direction != Left,
        Tile::ThinWallDown => direction != Up,
        Tile::ThinWallLeft => direction != Right,
        Tile::ThinWallDownRight => direction == Down || direction == Right,

        Tile::IceSouthEast => direction == Up || direction == Left,
        Tile::IceNorthEast => direction == Down || direction == Left,
        Tile::IceNorthWest => direction == Down || direction == Right,
        Tile::IceSouthWest => direction == Up || direction == Right,

        Tile::Exit
        | Tile::Gravel
        | Tile::ForceRandom
        | Tile::BootsWater
        | Tile::BootsFire
        | Tile::BootsIce
        | Tile::BootsSlide => !kind.is_monster(),

        Tile::DoorBlue => kind.is_chip() && level.inventory.has_key(KeyColor::Blue),
        Tile::DoorRed => kind.is_chip() && level.inventory.has_key(KeyColor::Red),
        Tile::DoorGreen => kind.is_chip() && level.inventory.has_key(KeyColor::Green),
        Tile::DoorYellow => kind.is_chip() && level.inventory.has_key(KeyColor::Yellow),
        Tile::Socket => kind.is_chip() && level.chips_left <= 0,

        Tile::ChipSwimmingUp
        | Tile::ChipSwimmingLeft
        | Tile::ChipSwimmingDown
        | Tile::ChipSwimmingRight
        | Tile::ChipUp
        | Tile::ChipLeft
        | Tile::ChipDown
        | Tile::ChipRight => !kind.is_chip(),

        monster_tiles!() => kind.is_chip(),
    }
}

/// Whether the player holding `boot` keeps control on this surface.
fn keeps_footing(kind: CreatureKind, boot: Boot, level: &Level) -> bool {
    kind.is_chip() && level.inventory.has_boots(boot)
}

impl Level {
    /// Enter `tile` at `new_position`, applying its side effect.
    ///
    /// Resets the actor's sliding flag, then sets it again if the tile is a
    /// sliding surface. Buttons stepped on are appended to `pressed` and
    /// left for the caller to fire. A teleport moves `new_position` to the
    /// exit it finds.
    pub(crate) fn try_enter(
        &mut self,
        id: ActorId,
        direction: Direction,
        new_position: &mut Position,
        tile: Tile,
        pressed: &mut Vec<Button>,
    ) -> bool {
        use Direction::*;
        self.actor_mut(id).sliding = false;
        let kind = self.actor(id).kind;
        let at = *new_position;

        match tile {
            Tile::Floor | Tile::Hint | Tile::ToggleOpen | Tile::Trap => true,

            Tile::Wall
            | Tile::InvisibleWall
            | Tile::BlockUp
            | Tile::BlockLeft
            | Tile::BlockDown
            | Tile::BlockRight
            | Tile::OverlayBuffer
            | Tile::ToggleClosed
            | Tile::CloneMachine
            | Tile::DrownedChip
            | Tile::BurnedChip
            | Tile::BombedChip
            | Tile::Unused36
            | Tile::Unused37
            | Tile::IceBlockStatic
            | Tile::ExitedChip
            | Tile::ExitExtra1
            | Tile::ExitExtra2 => false,

            Tile::Chip => {
                if !kind.is_chip() {
                    return false;
                }
                self.chips_left -= 1;
                self.fg.set(at, Tile::Floor);
                true
            }
            Tile::Water => {
                if kind.is_chip() {
                    if !self.inventory.has_boots(Boot::Water) {
                        self.fg.set(at, Tile::DrownedChip);
                        self.actor_mut(id).kill();
                    }
                } else if kind.is_block() {
                    self.fg.set(at, Tile::Dirt);
                    self.actor_mut(id).kill();
                } else if kind != CreatureKind::Glider {
                    self.actor_mut(id).kill();
                }
                true
            }
            Tile::Fire => {
                if kind.is_chip() {
                    if !self.inventory.has_boots(Boot::Fire) {
                        self.fg.set(at, Tile::BurnedChip);
                        self.actor_mut(id).kill();
                    }
                    return true;
                }
                match kind {
                    CreatureKind::Block | CreatureKind::Fireball => true,
                    CreatureKind::Bug | CreatureKind::Walker => false,
                    _ => {
                        self.actor_mut(id).kill();
                        true
                    }
                }
            }

            Tile::ThinWallUp => direction != Down,
            Tile::ThinWallRight => direction != Left,
            Tile::ThinWallDown => direction != Up,
            Tile::ThinWallLeft => direction != Right,
            Tile::ThinWallDownRight => direction == Down || direction == Right,

            Tile::Block => kind.is_chip() && self.push_block(id, direction, new_position, pressed),

            Tile::Dirt | Tile::BlueWallFake => {
                if !kind.is_chip() {
                    return false;
                }
                self.fg.set(at, Tile::Floor);
                true
            }
            Tile::BlueWallReal | Tile::HiddenWallTemp => {
                if kind.is_chip() {
                    self.fg.set(at, Tile::Wall);
                }
                false
            }
            Tile::PopUpWall => {
                if !kind.is_chip() {
                    return false;
                }
                self.fg.set(at, Tile::Wall);
                true
            }

            Tile::Ice => {
                self.start_sliding(id, kind, Boot::Ice);
                true
            }
            Tile::IceSouthEast | Tile::IceNorthEast | Tile::IceNorthWest | Tile::IceSouthWest => {
                if !can_enter(kind, direction, tile, self) {
                    return false;
                }
                self.start_sliding(id, kind, Boot::Ice);
                true
            }
            Tile::ForceDown | Tile::ForceUp | Tile::ForceLeft | Tile::ForceRight => {
                self.start_sliding(id, kind, Boot::Slide);
                true
            }
            Tile::ForceRandom => {
                if kind.is_monster() {
                    return false;
                }
                self.start_sliding(id, kind, Boot::Slide);
                true
            }

            Tile::Exit => {
                if kind.is_block() {
                    return true;
                }
                if !kind.is_chip() {
                    return false;
                }
                self.fg.set(at, Tile::ExitedChip);
                self.actor_mut(id).kill();
                true
            }

            Tile::DoorBlue => self.open_door(kind, at, KeyColor::Blue, true),
            Tile::DoorRed => self.open_door(kind, at, KeyColor::Red, true),
            Tile::DoorGreen => self.open_door(kind, at, KeyColor::Green, false),
            Tile::DoorYellow => self.open_door(kind, at, KeyColor::Yellow, true),

            Tile::Thief => {
                if !kind.is_chip() {
                    return false;
                }
                self.inventory.clear_boots();
                true
            }
            Tile::Socket => {
                if !(kind.is_chip() && self.chips_left <= 0) {
                    return false;
                }
                self.fg.set(at, Tile::Floor);
                true
            }

            Tile::ButtonGreen => {
                let button = self
                    .button(at, ButtonKind::Green)
                    .unwrap_or_else(|| Button::global(ButtonKind::Green, at));
                pressed.push(button);
                true
            }
            Tile::ButtonBlue => {
                let button = self
                    .button(at, ButtonKind::Blue)
                    .unwrap_or_else(|| Button::global(ButtonKind::Blue, at));
                pressed.push(button);
                true
            }
            Tile::ButtonRed => {
                pressed.extend(self.button(at, ButtonKind::Red));
                true
            }
            Tile::ButtonBrown => {
                pressed.extend(self.button(at, ButtonKind::Brown));
                true
            }

            Tile::Teleport => {
                self.actor_mut(id).sliding = true;
                self.teleport(id, direction, new_position, pressed);
                true
            }
            Tile::Bomb => {
                if !kind.is_chip() {
                    self.fg.set(at, Tile::Floor);
                }
                self.actor_mut(id).kill();
                true
            }
            Tile::Gravel => !kind.is_monster(),

            Tile::ChipSwimmingUp
            | Tile::ChipSwimmingLeft
            | Tile::ChipSwimmingDown
            | Tile::ChipSwimmingRight
            | Tile::ChipUp
            | Tile::ChipLeft
            | Tile::ChipDown
            | Tile::ChipRight => {
                if kind.is_chip() {
                    return false;
                }
                self.kill_chip();
                true
            }
            monster_tiles!() => {
                if !kind.is_chip() {
                    return false;
                }
                self.actor_mut(id).kill();
                true
            }

            Tile::KeyBlue => self.pick_up_key(kind, at, KeyColor::Blue),
            Tile::KeyRed => self.pick_up_key(kind, at, KeyColor::Red),
            Tile::KeyGreen => self.pick_up_key(kind, at, KeyColor::Green),
            Tile::KeyYellow => self.pick_up_key(kind, at, KeyColor::Yellow),

            Tile::BootsWater => self.pick_up_boots(kind, at, Boot::Water),
            Tile::BootsFire => self.pick_up_boots(kind, at, Boot::Fire),
            Tile::BootsIce => self.pick_up_boots(kind, at, Boot::Ice),
            Tile::BootsSlide => self.pick_up_boots(kind, at, Boot::Slide),
        }
    }

    fn start_sliding(&mut self, id: ActorId, kind: CreatureKind, boot: Boot) {
        if !keeps_footing(kind, boot, self) {
            self.actor_mut(id).sliding = true;
        }
    }

    /// Pass a coloured door. The green key opens any number of green doors.
    fn open_door(&mut self, kind: CreatureKind, at: Position, color: KeyColor, spends_key: bool) -> bool {
        if !(kind.is_chip() && self.inventory.has_key(color)) {
            return false;
        }
        if spends_key {
            self.inventory.use_key(color);
        }
        self.fg.set(at, Tile::Floor);
        true
    }

    fn pick_up_key(&mut self, kind: CreatureKind, at: Position, color: KeyColor) -> bool {
        if kind.is_chip() {
            self.fg.set(at, Tile::Floor);
            self.inventory.add_key(color);
        }
        true
    }

    fn pick_up_boots(&mut self, kind: CreatureKind, at: Position, boot: Boot) -> bool {
        if kind.is_chip() {
            self.fg.set(at, Tile::Floor);
            self.inventory.give_boots(boot);
        }
        !kind.is_monster()
    }

    /// The player walks into a block: shove it one cell on, then enter
    /// whatever it uncovered.
    ///
    /// A block already sliding cannot be shoved along or against its slide.
    /// A block at rest gets a temporary actor for the push.
    fn push_block(
        &mut self,
        id: ActorId,
        direction: Direction,
        new_position: &mut Position,
        pressed: &mut Vec<Button>,
    ) -> bool {
        let at = *new_position;
        let moved = match self.sliding_actor_at(at) {
            Some(block) => {
                let facing = self.actor(block).direction;
                if facing == direction || facing.turn(Turn::Around) == direction {
                    return false;
                }
                let moved = self.try_move(block, Some(direction), false, pressed);
                self.retire(block);
                moved
            }
            None => {
                let block = self.spawn(Creature::new(Direction::Down, CreatureKind::Block, at));
                let moved = self.try_move(block, Some(direction), false, pressed);
                self.retire(block);
                moved
            }
        };
        if !moved {
            return false;
        }
        let uncovered = self.fg.get(at);
        self.try_enter(id, direction, new_position, uncovered, pressed)
    }
}
