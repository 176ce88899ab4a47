//! Level state: layers, actors, inventory and wiring.
//!
//! The rules in [`crate::rules`] are methods on [`Level`]; everything they
//! touch lives here.

pub mod actor;
pub mod layer;
pub mod inventory;
pub mod slip;
pub mod monsters;
pub mod button;
#[allow(clippy::module_inception)]
pub mod level;

pub use actor::ActorId;
pub use layer::Layer;
pub use inventory::{Boot, Inventory, KeyColor};
pub use slip::SlipList;
pub use monsters::MonsterList;
pub use button::{Button, ButtonKind};
pub use level::Level;
