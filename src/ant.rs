use crate::utils::wrap_degrees;

/// Motion and animation state shared by the player and every NPC
#[derive(Clone, Debug)]
pub struct Agent {
    pub x: f32,
    pub y: f32,
    angle: i32,
    pub frame: u8,
    pub anim_timestamp: u64,
    pub scale: f32,
}

impl Agent {
    /// Create a new agent at the given pixel position, facing north
    pub fn new(x: f32, y: f32, scale: f32, now_ms: u64) -> Self {
        Self {
            x,
            y,
            angle: 0,
            frame: 0,
            anim_timestamp: now_ms,
            scale,
        }
    }

    /// Create an agent with a random render scale in `[0.75, 1.75)`
    pub fn with_random_scale(x: f32, y: f32, now_ms: u64, rng: &mut fastrand::Rng) -> Self {
        Self::new(x, y, rng.f32() + 0.75, now_ms)
    }

    /// Facing angle in degrees, always in `[0, 360)`
    #[inline]
    pub fn angle(&self) -> i32 {
        self.angle
    }

    #[inline]
    pub fn set_angle(&mut self, angle: i32) {
        self.angle = wrap_degrees(angle);
    }

    /// Rotate by `degrees` (negative turns counter-clockwise)
    #[inline]
    pub fn rotate(&mut self, degrees: i32) {
        self.set_angle(self.angle + degrees);
    }

    /// Displace by `(dx, dy)` pixels
    #[inline]
    pub fn translate(&mut self, dx: f32, dy: f32) {
        self.x += dx;
        self.y += dy;
    }

    /// Grid cell `(row, col)` under the agent, or `None` when off the map's positive quadrant
    #[inline]
    pub fn cell(&self, cell_size: f32) -> Option<(usize, usize)> {
        let row = (self.y / cell_size).floor();
        let col = (self.x / cell_size).floor();
        if row < 0.0 || col < 0.0 || !row.is_finite() || !col.is_finite() {
            return None;
        }
        Some((row as usize, col as usize))
    }

    /// Advance the walk cycle when more than `anim_ms` passed since the last frame
    pub fn animate(&mut self, now_ms: u64, anim_ms: u32, frames: u8) -> bool {
        if now_ms.saturating_sub(self.anim_timestamp) <= u64::from(anim_ms) {
            return false;
        }
        self.anim_timestamp = now_ms;
        self.frame = (self.frame + 1) % frames.max(1);
        true
    }
}
