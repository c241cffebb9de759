//! # Anthill
//!
//! A tile-based ant colony game engine.
//!
//! The player ant roams a grid world collecting food and spends it to grow
//! the anthill; every upgrade hatches worker ants that wander the map on
//! their own. This library provides the world model, the motion and
//! collision rules, the worker walk cycle and the food/upgrade progression.

pub mod ant;
pub mod anthill;
pub mod cli;
pub mod config;
pub mod direction;
pub mod error;
pub mod npc;
pub mod player;
pub mod simulation;
pub mod utils;
pub mod world;

pub use ant::Agent;
pub use anthill::Anthill;
pub use cli::Args;
pub use config::SimConfig;
pub use direction::Direction;
pub use error::{MapError, Result, SpawnError};
pub use npc::{Npc, NpcId, NpcState, TurnDirection};
pub use player::Player;
pub use simulation::{GameEvent, SimulationEngine};
pub use world::{TileGrid, TileKind};

/// Re-export commonly used types
pub mod prelude {
    pub use crate::{
        Agent, Anthill, Args, Direction, GameEvent, MapError, Npc, NpcId, NpcState, Player,
        Result, SimConfig, SimulationEngine, SpawnError, TileGrid, TileKind, TurnDirection,
    };
}
