/// 8 compass headings, one per 45 degrees clockwise from north
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum Direction {
    North = 0,
    NorthEast = 1,
    East = 2,
    SouthEast = 3,
    South = 4,
    SouthWest = 5,
    West = 6,
    NorthWest = 7,
}

/// Grid delta `(dx, dy)` per heading, indexed by `angle / 45`.
///
/// Y is inverted (screen space): north is `dy = -1`, south is `dy = +1`.
pub const DIRECTION_DELTA: [(i32, i32); 8] = [
    (0, -1),  // 0
    (1, -1),  // 45
    (1, 0),   // 90
    (1, 1),   // 135
    (0, 1),   // 180
    (-1, 1),  // 225
    (-1, 0),  // 270
    (-1, -1), // 315
];

impl Direction {
    /// All possible directions
    pub const ALL: [Direction; 8] = [
        Direction::North,
        Direction::NorthEast,
        Direction::East,
        Direction::SouthEast,
        Direction::South,
        Direction::SouthWest,
        Direction::West,
        Direction::NorthWest,
    ];

    /// Direction for an angle in degrees; the angle is wrapped and rounded down to 45
    #[inline]
    pub const fn from_angle(angle: i32) -> Direction {
        Self::ALL[(crate::utils::wrap_degrees(angle) / 45) as usize]
    }

    /// Get direction index for array indexing
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Angle in degrees this direction faces
    #[inline]
    pub const fn angle(self) -> i32 {
        self as i32 * 45
    }

    /// Grid step for this direction
    #[inline]
    pub const fn delta(self) -> (i32, i32) {
        DIRECTION_DELTA[self.index()]
    }

    /// True for the four 45-degree headings
    #[inline]
    pub const fn is_diagonal(self) -> bool {
        self.index() % 2 == 1
    }

    /// Get direction name as string
    pub const fn as_str(self) -> &'static str {
        match self {
            Direction::North => "north",
            Direction::NorthEast => "north-east",
            Direction::East => "east",
            Direction::SouthEast => "south-east",
            Direction::South => "south",
            Direction::SouthWest => "south-west",
            Direction::West => "west",
            Direction::NorthWest => "north-west",
        }
    }
}
