use serde::{Deserialize, Serialize};

use super::WireRecord;
use crate::error::{CodecError, Entity};
use crate::schema::{CARGO_RECORD_LEN, ID_WIDTH, NAME_WIDTH};
use crate::wire::{WireReader, WireWriter};

/// A tradeable cargo item held by a vendor.
///
/// `capacity`, `fuel` and `water` are `0.0` when they don't apply to the
/// item. The format has no presence bit, so a decoded `0.0` may mean
/// either "none" or a real zero; only domain context can tell.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Cargo {
    pub cargo_id: String,
    pub name: String,
    #[serde(deserialize_with = "crate::lenient::u32")]
    pub quantity: u32,
    #[serde(deserialize_with = "crate::lenient::u16")]
    pub volume: u16,
    #[serde(deserialize_with = "crate::lenient::u16")]
    pub weight: u16,
    #[serde(
        serialize_with = "crate::lenient::finite_f32",
        deserialize_with = "crate::lenient::f32"
    )]
    pub capacity: f32,
    #[serde(
        serialize_with = "crate::lenient::finite_f32",
        deserialize_with = "crate::lenient::f32"
    )]
    pub fuel: f32,
    #[serde(
        serialize_with = "crate::lenient::finite_f32",
        deserialize_with = "crate::lenient::f32"
    )]
    pub water: f32,
    #[serde(deserialize_with = "crate::lenient::flag")]
    pub food: bool,
    #[serde(deserialize_with = "crate::lenient::flag")]
    pub part: bool,
    #[serde(deserialize_with = "crate::lenient::flag")]
    pub distributor: bool,
    #[serde(deserialize_with = "crate::lenient::u16")]
    pub base_price: u16,
    #[serde(deserialize_with = "crate::lenient::u16")]
    pub delivery_reward: u16,
}

impl WireRecord for Cargo {
    const ENTITY: Entity = Entity::Cargo;
    const HEADER_LEN: usize = CARGO_RECORD_LEN;

    fn encode_into(&self, w: &mut WireWriter) {
        w.put_str(&self.cargo_id, ID_WIDTH);
        w.put_str(&self.name, NAME_WIDTH);
        w.put_u32(self.quantity);
        w.put_u16(self.volume);
        w.put_u16(self.weight);
        w.put_f32(self.capacity);
        w.put_f32(self.fuel);
        w.put_f32(self.water);
        w.put_bool(self.food);
        w.put_bool(self.part);
        w.put_bool(self.distributor);
        w.put_u16(self.base_price);
        w.put_u16(self.delivery_reward);
    }

    fn decode_from(r: &mut WireReader<'_>) -> Result<Self, CodecError> {
        const E: Entity = Entity::Cargo;
        r.require(CARGO_RECORD_LEN, E)?;
        Ok(Self {
            cargo_id: r.get_str(ID_WIDTH, E)?,
            name: r.get_str(NAME_WIDTH, E)?,
            quantity: r.get_u32(E)?,
            volume: r.get_u16(E)?,
            weight: r.get_u16(E)?,
            capacity: r.get_f32(E)?,
            fuel: r.get_f32(E)?,
            water: r.get_f32(E)?,
            food: r.get_bool(E)?,
            part: r.get_bool(E)?,
            distributor: r.get_bool(E)?,
            base_price: r.get_u16(E)?,
            delivery_reward: r.get_u16(E)?,
        })
    }
}
