use crate::utils::{LEVEL_THRESHOLDS, MAX_LEVEL};

/// Tunables for one game session.
///
/// Defaults reproduce the shipped game: 50 px cells, 10 ms ticks and a world
/// that always holds 40 food items.
#[derive(Clone, Debug)]
pub struct SimConfig {
    /// Pixel edge length of one tile
    pub cell_size: u32,
    /// Ticks an NPC needs to cross one cell
    pub step_len: u32,
    /// Interval between two ticks
    pub tick_ms: u32,
    /// Minimum time between two animation frames
    pub anim_ms: u32,
    pub anim_frames: u8,
    /// Forward speed in pixels per tick; reverse runs at half of it
    pub velocity_max: i32,
    /// Player turn rate in degrees per tick
    pub turn_degrees: i32,
    /// NPC turn rate in degrees per tick
    pub npc_turn_rate: i32,
    /// Number of food items kept on the map
    pub world_food: usize,
    /// Upgrade cost per anthill level
    pub level_thresholds: [u32; MAX_LEVEL + 1],
    pub player_scale: f32,
    pub player_width: u32,
    pub player_height: u32,
    /// Upper bound on live NPCs
    pub npc_limit: usize,
    /// Random picks tried before falling back to a full scan for a free cell
    pub spawn_attempts: usize,
    /// Whether food eaten by NPCs is credited to the player
    pub npc_harvest_credits_player: bool,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            cell_size: 50,
            step_len: 50,
            tick_ms: 10,
            anim_ms: 100,
            anim_frames: crate::utils::ANT_FRAMES,
            velocity_max: 2,
            turn_degrees: 1,
            npc_turn_rate: 5,
            world_food: 40,
            level_thresholds: LEVEL_THRESHOLDS,
            player_scale: 1.59,
            player_width: 40,
            player_height: 60,
            npc_limit: 4096,
            spawn_attempts: 1024,
            npc_harvest_credits_player: false,
        }
    }
}

impl SimConfig {
    /// Cell size as a float for pixel math
    #[inline]
    pub fn cell(&self) -> f32 {
        self.cell_size as f32
    }

    /// Pixel center of the cell at `(row, col)`
    #[inline]
    pub fn cell_center(&self, row: usize, col: usize) -> (f32, f32) {
        let half = self.cell() / 2.0;
        (col as f32 * self.cell() + half, row as f32 * self.cell() + half)
    }

    /// Cost of the upgrade out of `level`
    #[inline]
    pub fn threshold(&self, level: usize) -> u32 {
        self.level_thresholds[level.min(MAX_LEVEL)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_step_equals_cell() {
        let cfg = SimConfig::default();
        assert_eq!(cfg.step_len, cfg.cell_size);
        assert!(cfg.velocity_max as u32 <= cfg.cell_size);
    }

    #[test]
    fn test_cell_center() {
        let cfg = SimConfig::default();
        assert_eq!(cfg.cell_center(0, 0), (25.0, 25.0));
        assert_eq!(cfg.cell_center(5, 6), (325.0, 275.0));
    }
}
