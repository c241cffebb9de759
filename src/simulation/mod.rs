pub mod engine;
pub mod event;
pub mod npc_controller;
pub mod player_motion;
pub mod progression;
pub mod registry;

pub use engine::SimulationEngine;
pub use event::{Eater, GameEvent};
pub use npc_controller::{plan_walk, tick_npc, NpcStep};
pub use player_motion::{tick_player, PlayerStep};
pub use progression::{can_upgrade, try_upgrade, FoodStock, Upgrade};
pub use registry::AntRegistry;
