//! Shared schema: the field order and width of every record.
//!
//! This is the one place the encoder and decoder agree on. There is no
//! version tag in the default stream, so changing any list below makes the
//! two sides disagree silently. The record lengths are pinned with
//! compile-time assertions, and the entity codecs are tested field by
//! field against the offsets from [`field_span`]. A field added, moved or
//! swapped in a codec without the same change here (or the reverse) fails
//! the build or the tests rather than the other process.
//!
//! Byte order is big-endian for every numeric field.

use std::ops::Range;

/// Width of identifier strings (`sett_id`, `vendor_id`, `cargo_id`, ...).
pub const ID_WIDTH: usize = 36;

/// Width of display-name strings.
pub const NAME_WIDTH: usize = 100;

/// Leading byte written by a tagged [`BinaryCodec`](crate::BinaryCodec).
///
/// Not part of the default stream.
pub const FORMAT_VERSION: u8 = 1;

/// The wire type of one record field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    U8,
    U16,
    U32,
    I32,
    F32,
    /// Fixed-width, zero-padded UTF-8 string.
    Str(usize),
}

impl FieldKind {
    /// Encoded size in bytes.
    pub const fn width(self) -> usize {
        match self {
            Self::U8 => 1,
            Self::U16 => 2,
            Self::U32 | Self::I32 | Self::F32 => 4,
            Self::Str(width) => width,
        }
    }
}

/// A named field in a record layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Field {
    pub name: &'static str,
    pub kind: FieldKind,
}

const fn field(name: &'static str, kind: FieldKind) -> Field {
    Field { name, kind }
}

/// Sum of the widths of `fields`.
pub const fn record_len(fields: &[Field]) -> usize {
    let mut total = 0;
    let mut i = 0;
    while i < fields.len() {
        total += fields[i].kind.width();
        i += 1;
    }
    total
}

/// Byte range of the field called `name` within a record laid out as
/// `fields`, or `None` if the layout has no such field.
///
/// ```rust
/// use tilewire_protocol::schema::{TILE_HEADER, field_span};
///
/// assert_eq!(field_span(TILE_HEADER, "settlement_count"), Some(4..6));
/// ```
pub fn field_span(fields: &[Field], name: &str) -> Option<Range<usize>> {
    let mut start = 0;
    for f in fields {
        let end = start + f.kind.width();
        if f.name == name {
            return Some(start..end);
        }
        start = end;
    }
    None
}

use FieldKind::{F32, I32, Str, U16, U32, U8};

pub const MAP_HEADER: &[Field] = &[field("height", U16), field("width", U16)];

pub const OVERLAY_COUNT: &[Field] = &[field("count", U16)];

pub const COORD: &[Field] = &[field("x", U16), field("y", U16)];

pub const TILE_HEADER: &[Field] = &[
    field("terrain_difficulty", U8),
    field("region", U8),
    field("weather", U8),
    field("special", U8),
    field("settlement_count", U16),
];

pub const SETTLEMENT_HEADER: &[Field] = &[
    field("sett_id", Str(ID_WIDTH)),
    field("name", Str(NAME_WIDTH)),
    field("sett_type", U8),
    field("import_count", U8),
    field("export_count", U8),
    field("vendor_count", U8),
];

pub const VENDOR_HEADER: &[Field] = &[
    field("vendor_id", Str(ID_WIDTH)),
    field("name", Str(NAME_WIDTH)),
    field("money", U32),
    field("fuel", U16),
    field("water", U16),
    field("food", U16),
    field("cargo_count", U16),
    field("vehicle_count", U16),
];

pub const CARGO_RECORD: &[Field] = &[
    field("cargo_id", Str(ID_WIDTH)),
    field("name", Str(NAME_WIDTH)),
    field("quantity", U32),
    field("volume", U16),
    field("weight", U16),
    field("capacity", F32),
    field("fuel", F32),
    field("water", F32),
    field("food", U8),
    field("part", U8),
    field("distributor", U8),
    field("base_price", U16),
    field("delivery_reward", U16),
];

pub const VEHICLE_RECORD: &[Field] = &[
    field("vehicle_id", Str(ID_WIDTH)),
    field("name", Str(NAME_WIDTH)),
    field("wear", F32),
    field("base_fuel_efficiency", U16),
    field("base_top_speed", U16),
    field("base_offroad_capability", U16),
    field("base_cargo_capacity", U32),
    field("base_weight_capacity", U32),
    field("base_towing_capacity", I32),
    field("ap", U16),
    field("base_max_ap", U16),
    field("base_value", U32),
    field("vendor_id", Str(ID_WIDTH)),
    field("warehouse_id", Str(ID_WIDTH)),
];

pub const MAP_HEADER_LEN: usize = record_len(MAP_HEADER);
pub const OVERLAY_COUNT_LEN: usize = record_len(OVERLAY_COUNT);
pub const COORD_LEN: usize = record_len(COORD);
pub const TILE_HEADER_LEN: usize = record_len(TILE_HEADER);
pub const SETTLEMENT_HEADER_LEN: usize = record_len(SETTLEMENT_HEADER);
pub const VENDOR_HEADER_LEN: usize = record_len(VENDOR_HEADER);
pub const CARGO_RECORD_LEN: usize = record_len(CARGO_RECORD);
pub const VEHICLE_RECORD_LEN: usize = record_len(VEHICLE_RECORD);

const _: () = assert!(MAP_HEADER_LEN == 4);
const _: () = assert!(OVERLAY_COUNT_LEN == 2);
const _: () = assert!(COORD_LEN == 4);
const _: () = assert!(TILE_HEADER_LEN == 6);
const _: () = assert!(SETTLEMENT_HEADER_LEN == 140);
const _: () = assert!(VENDOR_HEADER_LEN == 150);
const _: () = assert!(CARGO_RECORD_LEN == 163);
const _: () = assert!(VEHICLE_RECORD_LEN == 238);
