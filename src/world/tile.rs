/// Tile kind stored in every grid cell; the discriminant is the on-disk tag
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[repr(i8)]
pub enum TileKind {
    #[default]
    Free = 0,
    Wall = 1,
    Enclosed = 2,
    Food = 3,
    Anthill = 4,
}

impl TileKind {
    /// All tile kinds, in tag order
    pub const ALL: [TileKind; 5] = [
        TileKind::Free,
        TileKind::Wall,
        TileKind::Enclosed,
        TileKind::Food,
        TileKind::Anthill,
    ];

    /// Decode an on-disk tag
    #[inline]
    pub fn from_tag(tag: i8) -> Option<TileKind> {
        usize::try_from(tag).ok().and_then(|i| Self::ALL.get(i).copied())
    }

    /// On-disk tag
    #[inline]
    pub const fn tag(self) -> i8 {
        self as i8
    }

    /// Whether a wandering NPC may pick this cell as its next step
    #[inline]
    pub const fn is_walkable_for_npc(self) -> bool {
        !matches!(self, TileKind::Wall | TileKind::Anthill)
    }

    /// Single character used when dumping a grid as text
    pub const fn glyph(self) -> char {
        match self {
            TileKind::Free => '.',
            TileKind::Wall => '#',
            TileKind::Enclosed => '~',
            TileKind::Food => '*',
            TileKind::Anthill => 'A',
        }
    }
}
