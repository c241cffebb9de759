use crate::config::SimConfig;
use crate::player::Player;
use crate::simulation::progression::FoodStock;
use crate::utils::heading;
use crate::world::{TileGrid, TileKind};

/// What a single player tick did
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlayerStep {
    /// Velocity was zero (turning may still have happened)
    Stationary,
    Moved,
    /// Destination was a wall or off the map; position restored
    Blocked,
    /// Moved onto food and ate it
    Ate { row: usize, col: usize },
}

/// Advance the player by one tick.
///
/// Turning is applied first and reversed while backing up. Only the
/// destination cell is tested; walls and off-map positions reject the whole
/// step, anthill and food cells are walkable.
pub fn tick_player(
    player: &mut Player,
    grid: &mut TileGrid,
    food: &mut FoodStock,
    config: &SimConfig,
) -> PlayerStep {
    if player.velocity >= 0 {
        player.agent.rotate(player.turn_velocity);
    } else {
        player.agent.rotate(-player.turn_velocity);
    }

    if player.velocity == 0 {
        return PlayerStep::Stationary;
    }

    let (hx, hy) = heading(player.agent.angle());
    let speed = player.velocity as f32;
    let (old_x, old_y) = (player.agent.x, player.agent.y);
    player.agent.translate(speed * hx, speed * hy);

    let target = player
        .agent
        .cell(config.cell())
        .and_then(|(row, col)| grid.get(row, col).map(|kind| (row, col, kind)));

    match target {
        None | Some((_, _, TileKind::Wall)) => {
            player.agent.x = old_x;
            player.agent.y = old_y;
            PlayerStep::Blocked
        }
        Some((_, _, TileKind::Free)) => {
            player.in_anthill = false;
            PlayerStep::Moved
        }
        Some((_, _, TileKind::Anthill)) => {
            player.in_anthill = true;
            PlayerStep::Moved
        }
        Some((_, _, TileKind::Enclosed)) => PlayerStep::Moved,
        Some((row, col, TileKind::Food)) => {
            if food.consume(grid, row, col) {
                player.food_count = player.food_count.saturating_add(1);
                PlayerStep::Ate { row, col }
            } else {
                PlayerStep::Moved
            }
        }
    }
}
