use serde::{Deserialize, Serialize};

use super::{Settlement, WireRecord, clamp_children, decode_children};
use crate::error::{CodecError, Entity};
use crate::schema::TILE_HEADER_LEN;
use crate::wire::{WireReader, WireWriter};

/// One cell of the world grid.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Tile {
    /// Movement cost code. Some producers write a negative value to mark a
    /// tile; it arrives wrapped into the top half of the byte range.
    #[serde(deserialize_with = "crate::lenient::u8")]
    pub terrain_difficulty: u8,
    /// Political-zone code.
    #[serde(deserialize_with = "crate::lenient::u8")]
    pub region: u8,
    #[serde(deserialize_with = "crate::lenient::u8")]
    pub weather: u8,
    #[serde(deserialize_with = "crate::lenient::u8")]
    pub special: u8,
    /// Usually zero or one, the format allows up to `u16::MAX`.
    pub settlements: Vec<Settlement>,
}

impl Tile {
    /// A tile with the given terrain code and nothing else.
    pub fn with_terrain(terrain_difficulty: u8) -> Self {
        Self {
            terrain_difficulty,
            ..Self::default()
        }
    }

    /// `true` if the producer wrote a negative terrain difficulty.
    pub fn is_marked(&self) -> bool {
        (self.terrain_difficulty as i8) < 0
    }
}

impl WireRecord for Tile {
    const ENTITY: Entity = Entity::Tile;
    const HEADER_LEN: usize = TILE_HEADER_LEN;

    fn encode_into(&self, w: &mut WireWriter) {
        let settlements = clamp_children(
            &self.settlements,
            usize::from(u16::MAX),
            Entity::Tile,
            "settlements",
        );
        w.put_u8(self.terrain_difficulty);
        w.put_u8(self.region);
        w.put_u8(self.weather);
        w.put_u8(self.special);
        w.put_u16(settlements.len() as u16);
        for settlement in settlements {
            settlement.encode_into(w);
        }
    }

    fn decode_from(r: &mut WireReader<'_>) -> Result<Self, CodecError> {
        const E: Entity = Entity::Tile;
        r.require(TILE_HEADER_LEN, E)?;
        let terrain_difficulty = r.get_u8(E)?;
        let region = r.get_u8(E)?;
        let weather = r.get_u8(E)?;
        let special = r.get_u8(E)?;
        let settlement_count = usize::from(r.get_u16(E)?);
        Ok(Self {
            terrain_difficulty,
            region,
            weather,
            special,
            settlements: decode_children(r, settlement_count)?,
        })
    }
}
