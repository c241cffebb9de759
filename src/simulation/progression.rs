use crate::anthill::Anthill;
use crate::config::SimConfig;
use crate::error::SpawnError;
use crate::player::Player;
use crate::world::{TileGrid, TileKind};
use log::{debug, warn};

/// Tracks how many food items lie on the map and keeps that number at its target
#[derive(Clone, Debug)]
pub struct FoodStock {
    world_food: usize,
    target: usize,
}

impl FoodStock {
    /// Start counting from the food already present in `grid`
    pub fn new(grid: &TileGrid, target: usize) -> Self {
        Self {
            world_food: grid.count(TileKind::Food),
            target,
        }
    }

    /// Food items currently on the map
    #[inline]
    pub fn world_food(&self) -> usize {
        self.world_food
    }

    /// Turn food above the target back into free cells, last in row-major order first
    pub fn trim_excess(&mut self, grid: &mut TileGrid) -> usize {
        let excess = self.world_food.saturating_sub(self.target);
        let cells = grid.positions_of(TileKind::Food);
        for &(row, col) in cells.iter().rev().take(excess) {
            self.consume(grid, row, col);
        }
        excess
    }

    /// Spawn food until the target is met; stops early when the map is full
    pub fn populate(
        &mut self,
        grid: &mut TileGrid,
        rng: &mut fastrand::Rng,
        attempts: usize,
    ) -> Result<usize, SpawnError> {
        let mut spawned = 0;
        while self.world_food < self.target {
            self.spawn_one(grid, rng, attempts)?;
            spawned += 1;
        }
        Ok(spawned)
    }

    /// Place one food item on a random `Free` cell.
    ///
    /// Tries `attempts` random picks first, then falls back to choosing among
    /// all free cells; fails only when the map has none.
    pub fn spawn_one(
        &mut self,
        grid: &mut TileGrid,
        rng: &mut fastrand::Rng,
        attempts: usize,
    ) -> Result<(usize, usize), SpawnError> {
        let (width, height) = (grid.width(), grid.height());
        if width == 0 || height == 0 {
            return Err(SpawnError::NoFreeCell { attempts: 0 });
        }

        let picked = (0..attempts)
            .map(|_| (rng.usize(..height), rng.usize(..width)))
            .find(|&(row, col)| grid.get(row, col) == Some(TileKind::Free));

        let cell = match picked {
            Some(cell) => cell,
            None => {
                let free = grid.positions_of(TileKind::Free);
                if free.is_empty() {
                    return Err(SpawnError::NoFreeCell {
                        attempts: attempts + width * height,
                    });
                }
                free[rng.usize(..free.len())]
            }
        };

        grid.set(cell.0, cell.1, TileKind::Food);
        self.world_food += 1;
        Ok(cell)
    }

    /// Clear the food at `(row, col)`.
    ///
    /// Returns true only if the cell held food; calling it again on the same
    /// cell is harmless.
    pub fn consume(&mut self, grid: &mut TileGrid, row: usize, col: usize) -> bool {
        if grid.get(row, col) != Some(TileKind::Food) {
            return false;
        }
        grid.set(row, col, TileKind::Free);
        self.world_food = self.world_food.saturating_sub(1);
        debug!("Food at ({}, {}) consumed, {} left on map", row, col, self.world_food);
        true
    }
}

/// Result of a successful anthill upgrade
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Upgrade {
    /// Food deducted from the player
    pub cost: u32,
    /// Number of NPCs the upgrade asks for
    pub spawn_count: usize,
    /// Anthill level after the upgrade
    pub level: usize,
    /// Whether this upgrade finished the anthill
    pub won: bool,
}

/// Whether the player may upgrade the anthill right now
pub fn can_upgrade(player: &Player, anthill: &Anthill, config: &SimConfig) -> bool {
    player.in_anthill
        && !anthill.is_complete()
        && player.food_count >= config.threshold(anthill.level)
}

/// Spend food to raise the anthill one level.
///
/// Nothing changes unless the player stands in the anthill, holds enough food
/// and the anthill is below its last level.
pub fn try_upgrade(player: &mut Player, anthill: &mut Anthill, config: &SimConfig) -> Option<Upgrade> {
    if !can_upgrade(player, anthill, config) {
        return None;
    }

    let cost = config.threshold(anthill.level);
    player.food_count -= cost;
    anthill.level += 1;
    let won = anthill.is_complete();
    if won {
        player.won = true;
    }

    Some(Upgrade {
        cost,
        spawn_count: (cost / 2) as usize,
        level: anthill.level,
        won,
    })
}

/// Log a failed spawn; the action is dropped
pub fn report_spawn_failure(what: &str, err: SpawnError) {
    warn!("Could not spawn {}: {}", what, err);
}
