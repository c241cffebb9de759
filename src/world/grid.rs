use crate::world::tile::TileKind;

/// Rectangular tile map, stored row-major in one flat buffer
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TileGrid {
    width: usize,
    height: usize,
    cells: Vec<TileKind>,
}

impl TileGrid {
    /// Create a grid filled with `Free`
    pub fn new(width: usize, height: usize) -> Self {
        Self::filled(width, height, TileKind::Free)
    }

    /// Create a grid filled with `kind`
    pub fn filled(width: usize, height: usize, kind: TileKind) -> Self {
        Self {
            width,
            height,
            cells: vec![kind; width * height],
        }
    }

    /// Create a grid from row-major cells; `None` if the length is not `width * height`
    pub fn from_cells(width: usize, height: usize, cells: Vec<TileKind>) -> Option<Self> {
        (cells.len() == width * height).then_some(Self {
            width,
            height,
            cells,
        })
    }

    /// Open field enclosed by a one-cell wall border
    pub fn bordered(width: usize, height: usize) -> Self {
        let mut grid = Self::new(width, height);
        for col in 0..width {
            grid.set(0, col, TileKind::Wall);
            grid.set(height.saturating_sub(1), col, TileKind::Wall);
        }
        for row in 0..height {
            grid.set(row, 0, TileKind::Wall);
            grid.set(row, width.saturating_sub(1), TileKind::Wall);
        }
        grid
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Check a `(row, col)` pair against the grid bounds
    #[inline]
    pub fn in_bounds(&self, row: usize, col: usize) -> bool {
        row < self.height && col < self.width
    }

    /// Signed variant of [`TileGrid::in_bounds`], for coordinates derived from deltas
    #[inline]
    pub fn checked_cell(&self, row: i64, col: i64) -> Option<(usize, usize)> {
        let row = usize::try_from(row).ok()?;
        let col = usize::try_from(col).ok()?;
        self.in_bounds(row, col).then_some((row, col))
    }

    /// Tile at `(row, col)`, `None` when out of bounds
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> Option<TileKind> {
        if !self.in_bounds(row, col) {
            return None;
        }
        Some(self.cells[row * self.width + col])
    }

    /// Tile at `(row, col)` with everything off the map reading as `Wall`
    #[inline]
    pub fn get_or_wall(&self, row: usize, col: usize) -> TileKind {
        self.get(row, col).unwrap_or(TileKind::Wall)
    }

    /// Store `kind` at `(row, col)`; returns false and does nothing when out of bounds
    #[inline]
    pub fn set(&mut self, row: usize, col: usize, kind: TileKind) -> bool {
        if !self.in_bounds(row, col) {
            return false;
        }
        self.cells[row * self.width + col] = kind;
        true
    }

    /// Row-major view of all cells
    #[inline]
    pub fn cells(&self) -> &[TileKind] {
        &self.cells
    }

    /// Iterate `((row, col), kind)` over every cell
    pub fn iter(&self) -> impl Iterator<Item = ((usize, usize), TileKind)> + '_ {
        let width = self.width;
        self.cells
            .iter()
            .enumerate()
            .map(move |(i, &kind)| ((i / width, i % width), kind))
    }

    /// Count cells of a given kind
    pub fn count(&self, kind: TileKind) -> usize {
        self.cells.iter().filter(|&&c| c == kind).count()
    }

    /// All cells of a given kind, row-major
    pub fn positions_of(&self, kind: TileKind) -> Vec<(usize, usize)> {
        self.iter()
            .filter_map(|(pos, k)| (k == kind).then_some(pos))
            .collect()
    }

    /// Render the grid as text, one line per row
    pub fn render_ascii(&self) -> String {
        let mut out = String::with_capacity((self.width + 1) * self.height);
        for row in self.cells.chunks(self.width.max(1)) {
            out.extend(row.iter().map(|k| k.glyph()));
            out.push('\n');
        }
        out
    }
}
