use crate::config::SimConfig;
use clap::Parser;

/// CLI arguments for the headless colony run
#[derive(Parser, Debug)]
#[command(name = "anthill_sim", about = "🐜 Grow an anthill on a tile map, headless")]
pub struct Args {
    /// Path to the map file; a walled open field is generated when omitted
    #[arg(short = 'm', long = "map")]
    pub map: Option<String>,

    /// Width of the generated map (the map format stores at most 255)
    #[arg(long, default_value_t = 60)]
    pub width: u8,

    /// Height of the generated map
    #[arg(long, default_value_t = 60)]
    pub height: u8,

    /// Number of ticks to run
    #[arg(short = 't', long, default_value_t = 10_000)]
    pub ticks: u64,

    /// Random seed
    #[arg(long)]
    pub seed: Option<u64>,

    /// Food the player starts with
    #[arg(long, default_value_t = 0)]
    pub starting_food: u32,

    /// Request an anthill upgrade after every tick
    #[arg(long, default_value_t = false)]
    pub auto_upgrade: bool,

    /// Constant player velocity (pixels per tick)
    #[arg(long, default_value_t = 0, allow_hyphen_values = true)]
    pub velocity: i32,

    /// Constant player turn rate (degrees per tick)
    #[arg(long, default_value_t = 0, allow_hyphen_values = true)]
    pub turn: i32,

    /// Number of food items kept on the map
    #[arg(long, default_value_t = 40)]
    pub world_food: usize,

    /// Credit food eaten by worker ants to the player
    #[arg(long, default_value_t = false)]
    pub shared_harvest: bool,

    /// Write the map (after the anthill is placed) to this path
    #[arg(long)]
    pub save_map: Option<String>,

    /// Print the final map as text after the summary
    #[arg(long, default_value_t = false)]
    pub print_map: bool,

    /// Suppress event logs (for benchmarks)
    #[arg(long, default_value_t = false)]
    pub suppress_events: bool,
}

impl Args {
    /// Session config with the CLI overrides applied
    pub fn sim_config(&self) -> SimConfig {
        SimConfig {
            world_food: self.world_food,
            npc_harvest_credits_player: self.shared_harvest,
            ..SimConfig::default()
        }
    }
}
