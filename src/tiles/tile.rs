//! Board tile codes.
//!
//! The numbering is the board format's: terrain and items in `0x00..0x40`,
//! creature renderings from `0x40` in groups of four (one per facing, in
//! [`Direction`](crate::core::Direction) ordinal order), then keys, boots and
//! the player.

use serde::{Deserialize, Serialize};

use crate::core::EncodingError;

/// Content of one cell of a layer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum Tile {
    Floor = 0x00,
    Wall,
    /// Collectible chip (not the player).
    Chip,
    Water,
    Fire,
    InvisibleWall,
    ThinWallUp,
    ThinWallLeft,
    ThinWallDown,
    ThinWallRight,
    /// Pushable block.
    Block = 0x0A,
    Dirt,
    Ice,
    ForceDown,
    BlockUp = 0x0E,
    BlockLeft,
    BlockDown,
    BlockRight,
    ForceUp = 0x12,
    ForceLeft,
    ForceRight,
    Exit,
    DoorBlue = 0x16,
    DoorRed,
    DoorGreen,
    DoorYellow,
    IceSouthEast = 0x1A,
    IceSouthWest,
    IceNorthWest,
    IceNorthEast,
    BlueWallFake = 0x1E,
    BlueWallReal,
    OverlayBuffer = 0x20,
    Thief,
    Socket,
    ButtonGreen,
    ButtonRed,
    ToggleClosed,
    ToggleOpen,
    ButtonBrown,
    ButtonBlue = 0x28,
    Teleport,
    Bomb,
    Trap,
    HiddenWallTemp = 0x2C,
    Gravel,
    PopUpWall,
    Hint,
    ThinWallDownRight = 0x30,
    CloneMachine,
    ForceRandom,
    DrownedChip,
    BurnedChip,
    BombedChip,
    Unused36,
    Unused37,
    IceBlockStatic = 0x38,
    ExitedChip,
    ExitExtra1,
    ExitExtra2,
    ChipSwimmingUp = 0x3C,
    ChipSwimmingLeft,
    ChipSwimmingDown,
    ChipSwimmingRight,

    BugUp = 0x40,
    BugLeft,
    BugDown,
    BugRight,
    FireballUp = 0x44,
    FireballLeft,
    FireballDown,
    FireballRight,
    PinkBallUp = 0x48,
    PinkBallLeft,
    PinkBallDown,
    PinkBallRight,
    TankUp = 0x4C,
    TankLeft,
    TankDown,
    TankRight,
    GliderUp = 0x50,
    GliderLeft,
    GliderDown,
    GliderRight,
    TeethUp = 0x54,
    TeethLeft,
    TeethDown,
    TeethRight,
    WalkerUp = 0x58,
    WalkerLeft,
    WalkerDown,
    WalkerRight,
    BlobUp = 0x5C,
    BlobLeft,
    BlobDown,
    BlobRight,
    ParameciumUp = 0x60,
    ParameciumLeft,
    ParameciumDown,
    ParameciumRight,

    KeyBlue = 0x64,
    KeyRed,
    KeyGreen,
    KeyYellow,
    BootsWater = 0x68,
    BootsFire,
    BootsIce,
    BootsSlide,
    ChipUp = 0x6C,
    ChipLeft,
    ChipDown,
    ChipRight,
}

/// Number of tile codes.
pub const TILE_COUNT: usize = 0x70;

/// Or-pattern over every monster rendering, for exhaustive rule matches.
macro_rules! monster_tiles {
    () => {
        Tile::BugUp | Tile::BugLeft | Tile::BugDown | Tile::BugRight
            | Tile::FireballUp | Tile::FireballLeft | Tile::FireballDown | Tile::FireballRight
            | Tile::PinkBallUp | Tile::PinkBallLeft | Tile::PinkBallDown | Tile::PinkBallRight
            | Tile::TankUp | Tile::TankLeft | Tile::TankDown | Tile::TankRight
            | Tile::GliderUp | Tile::GliderLeft | Tile::GliderDown | Tile::GliderRight
            | Tile::TeethUp | Tile::TeethLeft | Tile::TeethDown | Tile::TeethRight
            | Tile::WalkerUp | Tile::WalkerLeft | Tile::WalkerDown | Tile::WalkerRight
            | Tile::BlobUp | Tile::BlobLeft | Tile::BlobDown | Tile::BlobRight
            | Tile::ParameciumUp | Tile::ParameciumLeft | Tile::ParameciumDown | Tile::ParameciumRight
    };
}
pub(crate) use monster_tiles;

use Tile::*;

const TILES: [Tile; TILE_COUNT] = [
    Floor, Wall, Chip, Water, Fire, InvisibleWall, ThinWallUp, ThinWallLeft,
    ThinWallDown, ThinWallRight, Block, Dirt, Ice, ForceDown, BlockUp, BlockLeft,
    BlockDown, BlockRight, ForceUp, ForceLeft, ForceRight, Exit, DoorBlue, DoorRed,
    DoorGreen, DoorYellow, IceSouthEast, IceSouthWest, IceNorthWest, IceNorthEast, BlueWallFake, BlueWallReal,
    OverlayBuffer, Thief, Socket, ButtonGreen, ButtonRed, ToggleClosed, ToggleOpen, ButtonBrown,
    ButtonBlue, Teleport, Bomb, Trap, HiddenWallTemp, Gravel, PopUpWall, Hint,
    ThinWallDownRight, CloneMachine, ForceRandom, DrownedChip, BurnedChip, BombedChip, Unused36, Unused37,
    IceBlockStatic, ExitedChip, ExitExtra1, ExitExtra2, ChipSwimmingUp, ChipSwimmingLeft, ChipSwimmingDown, ChipSwimmingRight,
    BugUp, BugLeft, BugDown, BugRight, FireballUp, FireballLeft, FireballDown, FireballRight,
    PinkBallUp, PinkBallLeft, PinkBallDown, PinkBallRight, TankUp, TankLeft, TankDown, TankRight,
    GliderUp, GliderLeft, GliderDown, GliderRight, TeethUp, TeethLeft, TeethDown, TeethRight,
    WalkerUp, WalkerLeft, WalkerDown, WalkerRight, BlobUp, BlobLeft, BlobDown, BlobRight,
    ParameciumUp, ParameciumLeft, ParameciumDown, ParameciumRight, KeyBlue, KeyRed, KeyGreen, KeyYellow,
    BootsWater, BootsFire, BootsIce, BootsSlide, ChipUp, ChipLeft, ChipDown, ChipRight,
];

impl Tile {
    /// Decode a stored tile code.
    pub fn from_ordinal(code: u8) -> Result<Self, EncodingError> {
        TILES
            .get(code as usize)
            .copied()
            .ok_or(EncodingError::UnknownTile(code))
    }

    /// The stored tile code.
    #[must_use]
    pub const fn ordinal(self) -> u8 {
        self as u8
    }

    /// The player, in any facing.
    #[must_use]
    pub const fn is_chip(self) -> bool {
        matches!(self, ChipUp | ChipLeft | ChipDown | ChipRight)
    }

    /// A monster rendering, `0x40..=0x63`.
    #[must_use]
    pub const fn is_monster(self) -> bool {
        let code = self as u8;
        code >= BugUp as u8 && code <= ParameciumRight as u8
    }

    /// Anything a [`Creature`](crate::creatures::Creature) can be decoded from:
    /// blocks, monsters and the player.
    #[must_use]
    pub const fn is_creature(self) -> bool {
        matches!(self, Block | BlockUp | BlockLeft | BlockDown | BlockRight)
            || self.is_monster()
            || self.is_chip()
    }

    /// Tiles drawn on top of the real terrain below them.
    ///
    /// Rule checks look through these to the background layer.
    #[must_use]
    pub const fn is_transparent(self) -> bool {
        self.is_monster()
            || self.is_chip()
            || matches!(
                self,
                ChipSwimmingUp
                    | ChipSwimmingLeft
                    | ChipSwimmingDown
                    | ChipSwimmingRight
                    | ExitedChip
                    | ExitExtra1
                    | ExitExtra2
            )
    }

    /// Plain ice and the four ice corners.
    #[must_use]
    pub const fn is_ice(self) -> bool {
        matches!(self, Ice | IceSouthEast | IceSouthWest | IceNorthWest | IceNorthEast)
    }

    /// Force floors, including the random one.
    #[must_use]
    pub const fn is_force_floor(self) -> bool {
        matches!(self, ForceUp | ForceLeft | ForceDown | ForceRight | ForceRandom)
    }
}
