use crate::ant::Agent;
use crate::anthill::Anthill;
use crate::config::SimConfig;
use crate::error::{MapError, SpawnError};
use crate::npc::NpcId;
use crate::player::Player;
use crate::simulation::event::{Eater, GameEvent};
use crate::simulation::npc_controller::{tick_npc, NpcStep};
use crate::simulation::player_motion::{tick_player, PlayerStep};
use crate::simulation::progression::{report_spawn_failure, try_upgrade, FoodStock};
use crate::simulation::registry::AntRegistry;
use crate::utils::MAX_LEVEL;
use crate::world::{TileGrid, TileKind};
use colored::Colorize;
use log::{debug, info};
use std::time::{Duration, Instant};

/// Owns the whole world and steps every ant on one logical clock.
///
/// Each tick moves the player once, then every NPC once in spawn order, then
/// refills the food eaten during the tick.
pub struct SimulationEngine {
    config: SimConfig,
    grid: TileGrid,
    player: Player,
    anthill: Anthill,
    npcs: AntRegistry,
    food: FoodStock,
    rng: fastrand::Rng,
    ticks: u64,
    clock_ms: u64,
    events: Vec<GameEvent>,
}

impl SimulationEngine {
    /// Set up a session on `grid`: place the anthill, the player and the initial food
    pub fn new(mut grid: TileGrid, config: SimConfig, mut rng: fastrand::Rng) -> Result<Self, MapError> {
        let anthill = Anthill::place(&mut grid, &config)?;

        let center_x = grid.width() as f32 * config.cell() / 2.0;
        let center_y = grid.height() as f32 * config.cell() / 2.0;
        let mut player = Player::new(center_x, center_y, &config, 0);
        player.in_anthill = player
            .agent
            .cell(config.cell())
            .map(|(row, col)| grid.get_or_wall(row, col))
            == Some(TileKind::Anthill);

        let mut food = FoodStock::new(&grid, config.world_food);
        let cleared = food.trim_excess(&mut grid);
        if cleared > 0 {
            debug!("Cleared {} food items above the target of {}", cleared, config.world_food);
        }
        if let Err(err) = food.populate(&mut grid, &mut rng, config.spawn_attempts) {
            report_spawn_failure("food", err);
        }

        info!(
            "World {}x{} ready: anthill entrance at ({}, {}), {} food on map",
            grid.width(),
            grid.height(),
            anthill.gm_y,
            anthill.gm_x,
            food.world_food()
        );

        Ok(Self {
            npcs: AntRegistry::new(config.npc_limit),
            config,
            grid,
            player,
            anthill,
            food,
            rng,
            ticks: 0,
            clock_ms: 0,
            events: Vec::new(),
        })
    }

    /// Advance the world by one tick. Does nothing once the game is won.
    ///
    /// Events produced by the tick stay queued until [`Self::drain_events`]
    /// is called; [`Self::run`] drains after every tick.
    pub fn tick(&mut self) {
        if self.player.won {
            return;
        }
        self.ticks += 1;
        self.clock_ms += u64::from(self.config.tick_ms);
        let now = self.clock_ms;
        let mut eaten = 0usize;

        let step = tick_player(&mut self.player, &mut self.grid, &mut self.food, &self.config);
        if let PlayerStep::Ate { row, col } = step {
            self.events.push(GameEvent::FoodConsumed {
                by: Eater::Player,
                row,
                col,
            });
            eaten += 1;
        }
        if self.player.is_active() {
            self.player
                .agent
                .animate(now, self.config.anim_ms, self.config.anim_frames);
        }

        for npc in self.npcs.iter_mut() {
            let step = tick_npc(npc, &mut self.grid, &mut self.food, &self.config, &mut self.rng);
            npc.agent
                .animate(now, self.config.anim_ms, self.config.anim_frames);
            if let NpcStep::Ate { row, col } = step {
                if self.config.npc_harvest_credits_player {
                    self.player.food_count = self.player.food_count.saturating_add(1);
                }
                self.events.push(GameEvent::FoodConsumed {
                    by: Eater::Npc(npc.id),
                    row,
                    col,
                });
                eaten += 1;
            }
        }

        for _ in 0..eaten {
            self.respawn_food();
        }
    }

    /// Put one food item back after a consumption
    fn respawn_food(&mut self) {
        match self
            .food
            .spawn_one(&mut self.grid, &mut self.rng, self.config.spawn_attempts)
        {
            Ok((row, col)) => {
                debug!("Food respawned at ({}, {})", row, col);
                self.events.push(GameEvent::FoodSpawned { row, col });
            }
            Err(err) => report_spawn_failure("food", err),
        }
    }

    /// Try to upgrade the anthill with the player's food; returns whether it happened
    pub fn request_upgrade(&mut self) -> bool {
        if self.player.won {
            return false;
        }
        let Some(upgrade) = try_upgrade(&mut self.player, &mut self.anthill, &self.config) else {
            return false;
        };

        let spawned = self.spawn_npcs(upgrade.spawn_count);
        info!(
            "Anthill upgraded to level {}/{}: {} food spent, {} of {} ants hatched",
            upgrade.level, MAX_LEVEL, upgrade.cost, spawned, upgrade.spawn_count
        );
        self.events.push(GameEvent::Upgraded {
            level: upgrade.level,
            cost: upgrade.cost,
            spawned,
        });

        if upgrade.won {
            info!("Anthill complete after {} ticks", self.ticks);
            self.events.push(GameEvent::Won);
        }
        true
    }

    /// Hatch one NPC at the anthill entrance
    pub fn spawn_npc(&mut self) -> Result<NpcId, SpawnError> {
        let (row, col) = self.anthill.entrance();
        let (x, y) = self.config.cell_center(row, col);
        let agent = Agent::with_random_scale(x, y, self.clock_ms, &mut self.rng);
        let id = self.npcs.spawn(agent, col, row)?;
        self.events.push(GameEvent::NpcSpawned { id });
        Ok(id)
    }

    /// Hatch up to `count` NPCs; failures are logged and skipped
    fn spawn_npcs(&mut self, count: usize) -> usize {
        let mut spawned = 0;
        for _ in 0..count {
            match self.spawn_npc() {
                Ok(_) => spawned += 1,
                Err(err) => report_spawn_failure("npc", err),
            }
        }
        spawned
    }

    /// Debug cheat: hand the player free food
    pub fn grant_food(&mut self, amount: u32) {
        self.player.food_count = self.player.food_count.saturating_add(amount);
    }

    /// Run up to `ticks` ticks, stopping early on a win.
    ///
    /// With `auto_upgrade` an upgrade is requested after every tick. Events are
    /// handed to `on_event` as they are produced.
    pub fn run(
        &mut self,
        ticks: u64,
        auto_upgrade: bool,
        mut on_event: impl FnMut(&GameEvent),
    ) -> Duration {
        let start = Instant::now();
        for _ in 0..ticks {
            if self.player.won {
                break;
            }
            self.tick();
            if auto_upgrade {
                self.request_upgrade();
            }
            for event in self.events.drain(..) {
                on_event(&event);
            }
        }
        start.elapsed()
    }

    /// Take all pending notifications
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    /// Every ant for rendering: the player first, then NPCs in spawn order
    pub fn agents(&self) -> impl Iterator<Item = &Agent> {
        std::iter::once(&self.player.agent).chain(self.npcs.iter().map(|npc| &npc.agent))
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    pub fn grid(&self) -> &TileGrid {
        &self.grid
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    /// Mutable player access for the input layer
    pub fn player_mut(&mut self) -> &mut Player {
        &mut self.player
    }

    pub fn anthill(&self) -> &Anthill {
        &self.anthill
    }

    pub fn npcs(&self) -> &AntRegistry {
        &self.npcs
    }

    /// Food items currently on the map
    pub fn world_food(&self) -> usize {
        self.food.world_food()
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Simulated time in milliseconds
    pub fn clock_ms(&self) -> u64 {
        self.clock_ms
    }

    pub fn is_won(&self) -> bool {
        self.player.won
    }

    /// Print simulation summary
    pub fn print_summary(&self, simulation_time: Duration) {
        let outcome = if self.is_won() {
            "🏆 won".bright_green().bold()
        } else {
            "in progress".yellow()
        };
        println!(
            "\n{}\n{} {:.3} ms {} {} {} {} {} {} {} {}",
            "===".bright_blue().bold(),
            "⏱️  Simulation Latency:".green().bold(),
            simulation_time.as_secs_f64() * 1000.0,
            "|".dimmed(),
            format!("ticks={}", self.ticks).cyan(),
            format!("level={}/{}", self.anthill.level, MAX_LEVEL).cyan(),
            format!("npcs={}", self.npcs.len()).cyan(),
            format!("food={}", self.player.food_count).cyan(),
            format!("world_food={}", self.food.world_food()).cyan(),
            format!("won={}", self.is_won()).cyan(),
            outcome,
        );
    }
}
