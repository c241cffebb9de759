use std::fmt;

/// Errors raised while reading or writing a map file
#[derive(Debug)]
pub enum MapError {
    /// IO operation failed
    IoError(std::io::Error),
    /// File ended before the announced number of cells
    Truncated { expected: usize, found: usize },
    /// Bytes left over after the last row
    TrailingBytes(usize),
    /// Width or height is zero
    EmptyDimensions,
    /// A cell carries a tag outside the tile set
    InvalidTile { row: usize, col: usize, tag: i8 },
    /// Dimensions do not fit the one-byte header
    TooLarge { width: usize, height: usize },
    /// Grid is too small to hold the 3x3 anthill at its center
    AnthillDoesNotFit { width: usize, height: usize },
}

impl fmt::Display for MapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MapError::IoError(err) => write!(f, "IO error: {}", err),
            MapError::Truncated { expected, found } => {
                write!(f, "Truncated map: expected {} cells, found {}", expected, found)
            }
            MapError::TrailingBytes(n) => write!(f, "Map has {} trailing bytes", n),
            MapError::EmptyDimensions => write!(f, "Map width and height must be non-zero"),
            MapError::InvalidTile { row, col, tag } => {
                write!(f, "Invalid tile tag {} at row {}, col {}", tag, row, col)
            }
            MapError::TooLarge { width, height } => {
                write!(f, "Map {}x{} exceeds 255x255", width, height)
            }
            MapError::AnthillDoesNotFit { width, height } => {
                write!(f, "Map {}x{} is too small for the anthill", width, height)
            }
        }
    }
}

impl std::error::Error for MapError {}

impl From<std::io::Error> for MapError {
    fn from(err: std::io::Error) -> Self {
        MapError::IoError(err)
    }
}

/// Why a food item or an NPC could not be placed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpawnError {
    /// No `Free` cell is left on the map
    NoFreeCell { attempts: usize },
    /// The colony reached its NPC cap
    ColonyFull { limit: usize },
    /// Growing the ant registry failed
    OutOfMemory,
}

impl fmt::Display for SpawnError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SpawnError::NoFreeCell { attempts } => {
                write!(f, "No free cell found after {} attempts", attempts)
            }
            SpawnError::ColonyFull { limit } => write!(f, "Colony is full ({} ants)", limit),
            SpawnError::OutOfMemory => write!(f, "Could not allocate memory for an ant"),
        }
    }
}

impl std::error::Error for SpawnError {}

/// Result type alias for map loading
pub type Result<T> = std::result::Result<T, MapError>;
