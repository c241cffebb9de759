use crate::error::{MapError, Result};
use crate::world::grid::TileGrid;
use crate::world::tile::TileKind;
use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

/// Bytes before the cell data: width, then height
const HEADER_LEN: usize = 2;

/// Load a map from a file path
pub fn load_map(path: impl AsRef<Path>) -> Result<TileGrid> {
    let file = File::open(path)?;
    let mut reader = BufReader::with_capacity(64 * 1024, file);
    let mut bytes = Vec::with_capacity(HEADER_LEN + 255 * 255);
    reader.read_to_end(&mut bytes)?;
    parse_map(&bytes)
}

/// Decode a map from its on-disk bytes.
///
/// Layout: 1 byte width, 1 byte height, then `width * height` signed tile
/// tags in row-major order.
pub fn parse_map(bytes: &[u8]) -> Result<TileGrid> {
    let (&width, &height) = match bytes {
        [w, h, ..] => (w, h),
        _ => {
            return Err(MapError::Truncated {
                expected: HEADER_LEN,
                found: bytes.len(),
            })
        }
    };
    let (width, height) = (usize::from(width), usize::from(height));
    if width == 0 || height == 0 {
        return Err(MapError::EmptyDimensions);
    }

    let body = &bytes[HEADER_LEN..];
    let expected = width * height;
    if body.len() < expected {
        return Err(MapError::Truncated {
            expected,
            found: body.len(),
        });
    }
    if body.len() > expected {
        return Err(MapError::TrailingBytes(body.len() - expected));
    }

    let cells = body
        .iter()
        .enumerate()
        .map(|(i, &b)| {
            let tag = b as i8;
            TileKind::from_tag(tag).ok_or(MapError::InvalidTile {
                row: i / width,
                col: i % width,
                tag,
            })
        })
        .collect::<Result<Vec<_>>>()?;

    // length checked above
    TileGrid::from_cells(width, height, cells).ok_or(MapError::Truncated {
        expected,
        found: body.len(),
    })
}

/// Encode a map into its on-disk bytes
pub fn encode_map(grid: &TileGrid) -> Result<Vec<u8>> {
    let (width, height) = (grid.width(), grid.height());
    if width == 0 || height == 0 {
        return Err(MapError::EmptyDimensions);
    }
    let (w, h) = match (u8::try_from(width), u8::try_from(height)) {
        (Ok(w), Ok(h)) => (w, h),
        _ => return Err(MapError::TooLarge { width, height }),
    };

    let mut bytes = Vec::with_capacity(HEADER_LEN + grid.cells().len());
    bytes.push(w);
    bytes.push(h);
    bytes.extend(grid.cells().iter().map(|k| k.tag() as u8));
    Ok(bytes)
}

/// Write a map to a file path
pub fn write_map(grid: &TileGrid, path: impl AsRef<Path>) -> Result<()> {
    let bytes = encode_map(grid)?;
    let mut writer = BufWriter::new(File::create(path)?);
    writer.write_all(&bytes)?;
    writer.flush()?;
    Ok(())
}
