/// Number of sprite frames in an ant walk cycle
pub const ANT_FRAMES: u8 = 4;

/// Highest anthill level; reaching it wins the game
pub const MAX_LEVEL: usize = 10;

/// Food cost of each upgrade, indexed by current level
pub const LEVEL_THRESHOLDS: [u32; MAX_LEVEL + 1] = [10, 20, 30, 40, 50, 60, 70, 80, 90, 100, 100];

/// Euclidean modulo, always in `[0, m)` for positive `m`
#[inline]
pub const fn emod(a: i32, m: i32) -> i32 {
    ((a % m) + m) % m
}

/// Wrap an angle in degrees into `[0, 360)`
#[inline]
pub const fn wrap_degrees(angle: i32) -> i32 {
    emod(angle, 360)
}

/// Screen-space unit heading for an angle where 0 points up (Y grows down)
#[inline]
pub fn heading(angle: i32) -> (f32, f32) {
    let rad = ((angle - 90) as f32).to_radians();
    (rad.cos(), rad.sin())
}
