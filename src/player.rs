use crate::ant::Agent;
use crate::config::SimConfig;

/// The player-controlled ant
#[derive(Clone, Debug)]
pub struct Player {
    pub agent: Agent,
    /// Forward (positive) or backward (negative) speed in pixels per tick
    pub velocity: i32,
    /// Degrees per tick
    pub turn_velocity: i32,
    pub width: u32,
    pub height: u32,
    pub food_count: u32,
    pub in_anthill: bool,
    pub won: bool,
}

impl Player {
    /// Create a standing player at pixel `(x, y)`
    pub fn new(x: f32, y: f32, config: &SimConfig, now_ms: u64) -> Self {
        Self {
            agent: Agent::new(x, y, config.player_scale, now_ms),
            velocity: 0,
            turn_velocity: 0,
            width: config.player_width,
            height: config.player_height,
            food_count: 0,
            in_anthill: false,
            won: false,
        }
    }

    /// Overwrite both controls at once
    pub fn set_controls(&mut self, velocity: i32, turn_velocity: i32) {
        self.velocity = velocity;
        self.turn_velocity = turn_velocity;
    }

    /// Whether the player is moving or turning this tick
    #[inline]
    pub fn is_active(&self) -> bool {
        self.velocity != 0 || self.turn_velocity != 0
    }

    // Key presses and releases are additive, so opposite keys cancel out.

    pub fn press_forward(&mut self, config: &SimConfig) {
        self.velocity += config.velocity_max;
    }

    pub fn release_forward(&mut self, config: &SimConfig) {
        self.velocity -= config.velocity_max;
    }

    pub fn press_back(&mut self, config: &SimConfig) {
        self.velocity -= config.velocity_max / 2;
    }

    pub fn release_back(&mut self, config: &SimConfig) {
        self.velocity += config.velocity_max / 2;
    }

    pub fn press_left(&mut self, config: &SimConfig) {
        self.turn_velocity -= config.turn_degrees;
    }

    pub fn release_left(&mut self, config: &SimConfig) {
        self.turn_velocity += config.turn_degrees;
    }

    pub fn press_right(&mut self, config: &SimConfig) {
        self.turn_velocity += config.turn_degrees;
    }

    pub fn release_right(&mut self, config: &SimConfig) {
        self.turn_velocity -= config.turn_degrees;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_player_creation() {
        let cfg = SimConfig::default();
        let player = Player::new(100.0, 200.0, &cfg, 0);

        assert_eq!(player.food_count, 0);
        assert_eq!(player.agent.scale, cfg.player_scale);
        assert!(!player.is_active());
        assert!(!player.won);
    }

    #[test]
    fn test_key_mapping() {
        let cfg = SimConfig::default();
        let mut player = Player::new(0.0, 0.0, &cfg, 0);

        player.press_forward(&cfg);
        assert_eq!(player.velocity, 2);
        player.press_back(&cfg);
        assert_eq!(player.velocity, 1);
        player.release_forward(&cfg);
        assert_eq!(player.velocity, -1);
        player.release_back(&cfg);
        assert_eq!(player.velocity, 0);

        player.press_left(&cfg);
        player.press_right(&cfg);
        assert_eq!(player.turn_velocity, 0);
        player.release_left(&cfg);
        assert_eq!(player.turn_velocity, 1);
        player.release_right(&cfg);
        assert!(!player.is_active());
    }
}
