use serde::{Deserialize, Serialize};

use super::{Vendor, WireRecord, clamp_children, decode_children};
use crate::error::{CodecError, Entity};
use crate::schema::{ID_WIDTH, NAME_WIDTH, SETTLEMENT_HEADER_LEN};
use crate::wire::{WireReader, WireWriter};

/// A named location on a tile.
///
/// Only the *number* of imports and exports travels in this format; the
/// lists themselves stay with the backend.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Settlement {
    pub sett_id: String,
    pub name: String,
    #[serde(deserialize_with = "crate::lenient::u8")]
    pub sett_type: u8,
    #[serde(deserialize_with = "crate::lenient::u8")]
    pub import_count: u8,
    #[serde(deserialize_with = "crate::lenient::u8")]
    pub export_count: u8,
    pub vendors: Vec<Vendor>,
}

impl WireRecord for Settlement {
    const ENTITY: Entity = Entity::Settlement;
    const HEADER_LEN: usize = SETTLEMENT_HEADER_LEN;

    fn encode_into(&self, w: &mut WireWriter) {
        let vendors = clamp_children(
            &self.vendors,
            usize::from(u8::MAX),
            Entity::Settlement,
            "vendors",
        );
        w.put_str(&self.sett_id, ID_WIDTH);
        w.put_str(&self.name, NAME_WIDTH);
        w.put_u8(self.sett_type);
        w.put_u8(self.import_count);
        w.put_u8(self.export_count);
        w.put_u8(vendors.len() as u8);
        for vendor in vendors {
            vendor.encode_into(w);
        }
    }

    fn decode_from(r: &mut WireReader<'_>) -> Result<Self, CodecError> {
        const E: Entity = Entity::Settlement;
        r.require(SETTLEMENT_HEADER_LEN, E)?;
        let sett_id = r.get_str(ID_WIDTH, E)?;
        let name = r.get_str(NAME_WIDTH, E)?;
        let sett_type = r.get_u8(E)?;
        let import_count = r.get_u8(E)?;
        let export_count = r.get_u8(E)?;
        let vendor_count = usize::from(r.get_u8(E)?);
        let vendors = decode_children(r, vendor_count)?;
        tracing::trace!(%sett_id, %name, vendor_count, "settlement decoded");

        Ok(Self {
            sett_id,
            name,
            sett_type,
            import_count,
            export_count,
            vendors,
        })
    }
}
