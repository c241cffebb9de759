pub mod codec;
pub mod grid;
pub mod tile;

pub use codec::{encode_map, load_map, parse_map, write_map};
pub use grid::TileGrid;
pub use tile::TileKind;
