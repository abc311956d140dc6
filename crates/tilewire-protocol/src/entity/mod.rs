//! Entity codecs: one record type per level of the map tree.
//!
//! ```text
//! Tile ─┬─ Settlement ─┬─ Vendor ─┬─ Cargo   (cargo_count)
//!       │  (count u16) │ (count u8)└─ Vehicle (vehicle_count)
//! ```
//!
//! Every record is a fixed-size header followed by its children, written
//! back to back in collection order. The child count lives in the header;
//! there are no separators and no per-child length prefix.

mod cargo;
mod settlement;
mod tile;
mod vehicle;
mod vendor;

pub use cargo::Cargo;
pub use settlement::Settlement;
pub use tile::Tile;
pub use vehicle::{NO_TOWING, Vehicle};
pub use vendor::Vendor;

use crate::error::{CodecError, Entity};
use crate::wire::{WireReader, WireWriter};

/// A record with a fixed schema layout and a matching encode/decode pair.
///
/// Implementors write their header in [`schema`](crate::schema) order and
/// then recurse into their children. Encoding is infallible; decoding
/// either returns a fully populated record or an error, never a partial
/// one.
pub trait WireRecord: Sized {
    /// Which entity this is, for error reporting.
    const ENTITY: Entity;

    /// Size in bytes of the fixed part (the whole record for leaves).
    const HEADER_LEN: usize;

    /// Appends this record and all of its children.
    fn encode_into(&self, w: &mut WireWriter);

    /// Reads one record and all of its children from the cursor.
    fn decode_from(r: &mut WireReader<'_>) -> Result<Self, CodecError>;

    /// Encodes this record into a fresh buffer.
    fn to_bytes(&self) -> Vec<u8> {
        let mut w = WireWriter::with_capacity(Self::HEADER_LEN);
        self.encode_into(&mut w);
        w.into_bytes()
    }

    /// Decodes one record from the start of `bytes`.
    ///
    /// Returns the record and how many bytes it occupied, so a caller
    /// walking a larger buffer can advance past it.
    fn from_bytes(bytes: &[u8]) -> Result<(Self, usize), CodecError> {
        let mut r = WireReader::new(bytes);
        let record = Self::decode_from(&mut r)?;
        Ok((record, r.position()))
    }
}

/// Limits `items` to what a count field of maximum `max` can describe.
///
/// Encoding never fails, so an over-long collection is cut rather than
/// rejected. The count written and the children written always agree.
pub(crate) fn clamp_children<'a, T>(
    items: &'a [T],
    max: usize,
    parent: Entity,
    field: &'static str,
) -> &'a [T] {
    if items.len() > max {
        tracing::warn!(
            %parent,
            field,
            len = items.len(),
            max,
            "collection exceeds its count field, dropping the excess"
        );
        &items[..max]
    } else {
        items
    }
}

/// Reads exactly `count` child records.
pub(crate) fn decode_children<T: WireRecord>(
    r: &mut WireReader<'_>,
    count: usize,
) -> Result<Vec<T>, CodecError> {
    // Don't trust the count for the allocation: each child needs at least
    // its header, so the remaining bytes bound how many can really follow.
    let plausible = r.remaining() / T::HEADER_LEN.max(1);
    let mut children = Vec::with_capacity(count.min(plausible));
    for _ in 0..count {
        children.push(T::decode_from(r)?);
    }
    Ok(children)
}

pub(crate) fn id_or_none(id: String) -> Option<String> {
    if id.is_empty() { None } else { Some(id) }
}
