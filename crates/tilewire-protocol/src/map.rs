//! Map envelope: grid dimensions, row-major tiles, and two overlays.
//!
//! ```text
//! ┌──────────────┬──────────────────────────┬──────────────┬──────────────┐
//! │ height width │ height × width tiles     │ highlights   │ lowlights    │
//! │  u16    u16  │ (row-major, each nested) │ u16 + (x, y) │ u16 + (x, y) │
//! └──────────────┴──────────────────────────┴──────────────┴──────────────┘
//! ```
//!
//! Only one `width` is stored, so the grid must be rectangular. That is
//! enforced by [`TileGrid`]'s constructors rather than checked during
//! encoding, which keeps [`encode_map`] infallible.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::entity::{Tile, WireRecord, clamp_children, decode_children};
use crate::error::{CodecError, Entity};
use crate::schema::{COORD_LEN, MAP_HEADER_LEN, OVERLAY_COUNT_LEN, TILE_HEADER_LEN};
use crate::wire::{WireReader, WireWriter};

// ---------------------------------------------------------------------------
// Coord
// ---------------------------------------------------------------------------

/// A grid position used by the highlight/lowlight overlays.
///
/// `x` is the column and `y` the row. Serialized as a two-element array
/// `[x, y]` in the JSON representation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "(u16, u16)", into = "(u16, u16)")]
pub struct Coord {
    pub x: u16,
    pub y: u16,
}

impl Coord {
    pub fn new(x: u16, y: u16) -> Self {
        Self { x, y }
    }
}

impl From<(u16, u16)> for Coord {
    fn from((x, y): (u16, u16)) -> Self {
        Self { x, y }
    }
}

impl From<Coord> for (u16, u16) {
    fn from(c: Coord) -> Self {
        (c.x, c.y)
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

// ---------------------------------------------------------------------------
// TileGrid
// ---------------------------------------------------------------------------

/// A rectangular, row-major grid of tiles.
///
/// Both dimensions fit in a `u16`, and `tiles.len() == height * width`
/// always holds. The JSON representation is a list of rows.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(try_from = "Vec<Vec<Tile>>", into = "Vec<Vec<Tile>>")]
pub struct TileGrid {
    height: usize,
    width: usize,
    tiles: Vec<Tile>,
}

impl TileGrid {
    /// Builds a grid from rows, rejecting ragged input.
    ///
    /// The width is taken from the first row; every other row must match.
    pub fn from_rows(rows: Vec<Vec<Tile>>) -> Result<Self, CodecError> {
        let height = rows.len();
        let width = rows.first().map_or(0, Vec::len);
        if let Some((y, row)) = rows.iter().enumerate().find(|(_, row)| row.len() != width) {
            return Err(CodecError::MalformedGrid {
                expected: format!("{width} columns in every row"),
                found: format!("{} columns in row {y}", row.len()),
            });
        }
        Self::from_flat(height, width, rows.into_iter().flatten().collect())
    }

    /// Builds a grid from row-major tiles and explicit dimensions.
    pub fn from_flat(height: usize, width: usize, tiles: Vec<Tile>) -> Result<Self, CodecError> {
        let limit = usize::from(u16::MAX);
        if height > limit || width > limit {
            return Err(CodecError::MalformedGrid {
                expected: format!("dimensions of at most {limit}"),
                found: format!("{height}x{width}"),
            });
        }
        if tiles.len() != height * width {
            return Err(CodecError::MalformedGrid {
                expected: format!("{} tiles for {height}x{width}", height * width),
                found: format!("{} tiles", tiles.len()),
            });
        }
        Ok(Self {
            height,
            width,
            tiles,
        })
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn width(&self) -> usize {
        self.width
    }

    /// The tile at column `x`, row `y`.
    pub fn get(&self, x: usize, y: usize) -> Option<&Tile> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.tiles.get(y * self.width + x)
    }

    pub fn get_mut(&mut self, x: usize, y: usize) -> Option<&mut Tile> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.tiles.get_mut(y * self.width + x)
    }

    /// Tiles in row-major order.
    pub fn iter(&self) -> std::slice::Iter<'_, Tile> {
        self.tiles.iter()
    }

    /// Rows top to bottom. Yields `height` rows even when `width` is zero.
    pub fn rows(&self) -> impl Iterator<Item = &[Tile]> + '_ {
        (0..self.height).map(move |y| &self.tiles[y * self.width..(y + 1) * self.width])
    }

    pub fn into_rows(self) -> Vec<Vec<Tile>> {
        let width = self.width;
        let mut rows = Vec::with_capacity(self.height);
        let mut tiles = self.tiles.into_iter();
        for _ in 0..self.height {
            rows.push(tiles.by_ref().take(width).collect());
        }
        rows
    }
}

impl TryFrom<Vec<Vec<Tile>>> for TileGrid {
    type Error = CodecError;

    fn try_from(rows: Vec<Vec<Tile>>) -> Result<Self, Self::Error> {
        Self::from_rows(rows)
    }
}

impl From<TileGrid> for Vec<Vec<Tile>> {
    fn from(grid: TileGrid) -> Self {
        grid.into_rows()
    }
}

// ---------------------------------------------------------------------------
// Map
// ---------------------------------------------------------------------------

/// A full world map as exchanged between backend, client and renderer.
///
/// Overlays are rendering hints only; the codec keeps their order and
/// never checks that they fall inside the grid.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Map {
    pub tiles: TileGrid,
    pub highlights: Vec<Coord>,
    pub lowlights: Vec<Coord>,
}

impl Map {
    /// A map with the given grid and no overlays.
    pub fn new(tiles: TileGrid) -> Self {
        Self {
            tiles,
            highlights: Vec::new(),
            lowlights: Vec::new(),
        }
    }

    pub fn height(&self) -> usize {
        self.tiles.height()
    }

    pub fn width(&self) -> usize {
        self.tiles.width()
    }
}

// ---------------------------------------------------------------------------
// Encode / decode
// ---------------------------------------------------------------------------

/// Encodes a map in the default (untagged) wire format.
///
/// Never fails. Same input, same bytes.
pub fn encode_map(map: &Map) -> Vec<u8> {
    let mut w = WireWriter::with_capacity(MAP_HEADER_LEN + map.tiles.tiles.len() * TILE_HEADER_LEN);
    encode_map_into(&mut w, map);
    let out = w.into_bytes();
    tracing::debug!(
        height = map.height(),
        width = map.width(),
        bytes = out.len(),
        "map encoded"
    );
    out
}

/// Decodes a map from the default (untagged) wire format.
///
/// The buffer must hold exactly one map: leftover bytes are rejected with
/// [`CodecError::TrailingBytes`].
pub fn decode_map(bytes: &[u8]) -> Result<Map, CodecError> {
    let mut r = WireReader::new(bytes);
    let map = decode_map_from(&mut r)?;
    if !r.is_empty() {
        return Err(CodecError::TrailingBytes {
            remaining: r.remaining(),
        });
    }
    Ok(map)
}

pub(crate) fn encode_map_into(w: &mut WireWriter, map: &Map) {
    // TileGrid keeps both dimensions within u16.
    w.put_u16(map.height() as u16);
    w.put_u16(map.width() as u16);
    for tile in map.tiles.iter() {
        tile.encode_into(w);
    }
    encode_overlay(w, &map.highlights, "highlights");
    encode_overlay(w, &map.lowlights, "lowlights");
}

pub(crate) fn decode_map_from(r: &mut WireReader<'_>) -> Result<Map, CodecError> {
    r.require(MAP_HEADER_LEN, Entity::Map)?;
    let height = usize::from(r.get_u16(Entity::Map)?);
    let width = usize::from(r.get_u16(Entity::Map)?);

    let tiles = decode_children::<Tile>(r, height * width)?;
    let tiles = TileGrid::from_flat(height, width, tiles)?;
    let highlights = decode_overlay(r)?;
    let lowlights = decode_overlay(r)?;

    tracing::debug!(
        height,
        width,
        highlights = highlights.len(),
        lowlights = lowlights.len(),
        bytes = r.position(),
        "map decoded"
    );
    Ok(Map {
        tiles,
        highlights,
        lowlights,
    })
}

fn encode_overlay(w: &mut WireWriter, coords: &[Coord], field: &'static str) {
    let coords = clamp_children(coords, usize::from(u16::MAX), Entity::Overlay, field);
    w.put_u16(coords.len() as u16);
    for c in coords {
        w.put_u16(c.x);
        w.put_u16(c.y);
    }
}

fn decode_overlay(r: &mut WireReader<'_>) -> Result<Vec<Coord>, CodecError> {
    r.require(OVERLAY_COUNT_LEN, Entity::Overlay)?;
    let count = usize::from(r.get_u16(Entity::Overlay)?);
    r.require(count * COORD_LEN, Entity::Overlay)?;
    let mut coords = Vec::with_capacity(count);
    for _ in 0..count {
        let x = r.get_u16(Entity::Overlay)?;
        let y = r.get_u16(Entity::Overlay)?;
        coords.push(Coord { x, y });
    }
    Ok(coords)
}
