use crate::config::SimConfig;
use crate::error::MapError;
use crate::utils::MAX_LEVEL;
use crate::world::{TileGrid, TileKind};

/// The colony's 3x3 home base
#[derive(Clone, Debug, PartialEq)]
pub struct Anthill {
    /// Pixel anchor of the top-left tile
    pub x: f32,
    pub y: f32,
    /// Entrance column, where new NPCs appear
    pub gm_x: usize,
    /// Entrance row
    pub gm_y: usize,
    pub level: usize,
}

impl Anthill {
    /// Edge length in cells
    pub const SIZE: usize = 3;

    /// Stamp the anthill onto the middle of `grid`.
    ///
    /// The block spans columns `width/2 - 1 ..= width/2 + 1` and rows
    /// `height/2 ..= height/2 + 2`; the entrance is the top-middle cell.
    pub fn place(grid: &mut TileGrid, config: &SimConfig) -> Result<Self, MapError> {
        let (width, height) = (grid.width(), grid.height());
        let left = (width / 2).checked_sub(1);
        let top = height / 2;
        let left = match left {
            Some(left) if left + Self::SIZE <= width && top + Self::SIZE <= height => left,
            _ => return Err(MapError::AnthillDoesNotFit { width, height }),
        };

        for row in top..top + Self::SIZE {
            for col in left..left + Self::SIZE {
                grid.set(row, col, TileKind::Anthill);
            }
        }

        Ok(Self {
            x: left as f32 * config.cell(),
            y: top as f32 * config.cell(),
            gm_x: left + 1,
            gm_y: top,
            level: 0,
        })
    }

    /// Whether the last level was reached
    #[inline]
    pub fn is_complete(&self) -> bool {
        self.level >= MAX_LEVEL
    }

    /// Entrance cell as `(row, col)`
    #[inline]
    pub fn entrance(&self) -> (usize, usize) {
        (self.gm_y, self.gm_x)
    }
}
