use serde::{Deserialize, Serialize};

use super::{WireRecord, id_or_none};
use crate::error::{CodecError, Entity};
use crate::schema::{ID_WIDTH, NAME_WIDTH, VEHICLE_RECORD_LEN};
use crate::wire::{WireReader, WireWriter};

/// `base_towing_capacity` value for a vehicle that cannot tow.
pub const NO_TOWING: i32 = -1;

/// A vehicle held in a vendor's inventory.
///
/// `vendor_id` and `warehouse_id` are zero-filled on the wire when absent.
/// An empty string is treated the same as `None`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Vehicle {
    pub vehicle_id: String,
    pub name: String,
    #[serde(
        serialize_with = "crate::lenient::finite_f32",
        deserialize_with = "crate::lenient::f32"
    )]
    pub wear: f32,
    #[serde(deserialize_with = "crate::lenient::u16")]
    pub base_fuel_efficiency: u16,
    #[serde(deserialize_with = "crate::lenient::u16")]
    pub base_top_speed: u16,
    #[serde(deserialize_with = "crate::lenient::u16")]
    pub base_offroad_capability: u16,
    #[serde(deserialize_with = "crate::lenient::u32")]
    pub base_cargo_capacity: u32,
    #[serde(deserialize_with = "crate::lenient::u32")]
    pub base_weight_capacity: u32,
    /// [`NO_TOWING`] when the vehicle cannot tow at all.
    #[serde(deserialize_with = "crate::lenient::i32")]
    pub base_towing_capacity: i32,
    #[serde(deserialize_with = "crate::lenient::u16")]
    pub ap: u16,
    #[serde(deserialize_with = "crate::lenient::u16")]
    pub base_max_ap: u16,
    #[serde(deserialize_with = "crate::lenient::u32")]
    pub base_value: u32,
    pub vendor_id: Option<String>,
    pub warehouse_id: Option<String>,
}

impl Default for Vehicle {
    fn default() -> Self {
        Self {
            vehicle_id: String::new(),
            name: String::new(),
            wear: 0.0,
            base_fuel_efficiency: 0,
            base_top_speed: 0,
            base_offroad_capability: 0,
            base_cargo_capacity: 0,
            base_weight_capacity: 0,
            base_towing_capacity: NO_TOWING,
            ap: 0,
            base_max_ap: 0,
            base_value: 0,
            vendor_id: None,
            warehouse_id: None,
        }
    }
}

impl Vehicle {
    /// Towing capacity, or `None` for the [`NO_TOWING`] sentinel.
    ///
    /// Any other negative value is also treated as "cannot tow".
    pub fn towing_capacity(&self) -> Option<u32> {
        u32::try_from(self.base_towing_capacity).ok()
    }
}

impl WireRecord for Vehicle {
    const ENTITY: Entity = Entity::Vehicle;
    const HEADER_LEN: usize = VEHICLE_RECORD_LEN;

    fn encode_into(&self, w: &mut WireWriter) {
        w.put_str(&self.vehicle_id, ID_WIDTH);
        w.put_str(&self.name, NAME_WIDTH);
        w.put_f32(self.wear);
        w.put_u16(self.base_fuel_efficiency);
        w.put_u16(self.base_top_speed);
        w.put_u16(self.base_offroad_capability);
        w.put_u32(self.base_cargo_capacity);
        w.put_u32(self.base_weight_capacity);
        w.put_i32(self.base_towing_capacity);
        w.put_u16(self.ap);
        w.put_u16(self.base_max_ap);
        w.put_u32(self.base_value);
        w.put_str(self.vendor_id.as_deref().unwrap_or_default(), ID_WIDTH);
        w.put_str(self.warehouse_id.as_deref().unwrap_or_default(), ID_WIDTH);
    }

    fn decode_from(r: &mut WireReader<'_>) -> Result<Self, CodecError> {
        const E: Entity = Entity::Vehicle;
        r.require(VEHICLE_RECORD_LEN, E)?;
        Ok(Self {
            vehicle_id: r.get_str(ID_WIDTH, E)?,
            name: r.get_str(NAME_WIDTH, E)?,
            wear: r.get_f32(E)?,
            base_fuel_efficiency: r.get_u16(E)?,
            base_top_speed: r.get_u16(E)?,
            base_offroad_capability: r.get_u16(E)?,
            base_cargo_capacity: r.get_u32(E)?,
            base_weight_capacity: r.get_u32(E)?,
            base_towing_capacity: r.get_i32(E)?,
            ap: r.get_u16(E)?,
            base_max_ap: r.get_u16(E)?,
            base_value: r.get_u32(E)?,
            vendor_id: id_or_none(r.get_str(ID_WIDTH, E)?),
            warehouse_id: id_or_none(r.get_str(ID_WIDTH, E)?),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn flatbed() -> Vehicle {
        Vehicle {
            vehicle_id: "veh-1".into(),
            name: "Flatbed".into(),
            wear: 0.25,
            base_fuel_efficiency: 14,
            base_top_speed: 90,
            base_offroad_capability: 40,
            base_cargo_capacity: 1200,
            base_weight_capacity: 8000,
            base_towing_capacity: 3500,
            ap: 3,
            base_max_ap: 5,
            base_value: 42_000,
            vendor_id: Some("vendor-7".into()),
            warehouse_id: None,
        }
    }

    #[test]
    fn test_vehicle_record_has_schema_length() {
        assert_eq!(flatbed().to_bytes().len(), VEHICLE_RECORD_LEN);
    }

    #[test]
    fn test_vehicle_roundtrip_keeps_owner_ids() {
        let v = flatbed();
        let (decoded, used) = Vehicle::from_bytes(&v.to_bytes()).unwrap();
        assert_eq!(decoded, v);
        assert_eq!(used, VEHICLE_RECORD_LEN);
    }

    #[test]
    fn test_missing_warehouse_is_zero_filled() {
        let bytes = flatbed().to_bytes();
        let tail = &bytes[VEHICLE_RECORD_LEN - ID_WIDTH..];
        assert!(tail.iter().all(|&b| b == 0));
    }

    #[test]
    fn test_empty_owner_id_decodes_as_none() {
        let v = Vehicle {
            vendor_id: Some(String::new()),
            ..flatbed()
        };
        let (decoded, _) = Vehicle::from_bytes(&v.to_bytes()).unwrap();
        assert_eq!(decoded.vendor_id, None);
    }

    #[test]
    fn test_towing_sentinel_differs_from_zero() {
        let none = Vehicle {
            base_towing_capacity: NO_TOWING,
            ..flatbed()
        };
        let zero = Vehicle {
            base_towing_capacity: 0,
            ..flatbed()
        };
        assert_eq!(none.towing_capacity(), None);
        assert_eq!(zero.towing_capacity(), Some(0));
        assert_ne!(none.to_bytes(), zero.to_bytes());
    }

    #[test]
    fn test_default_vehicle_cannot_tow() {
        assert_eq!(Vehicle::default().base_towing_capacity, NO_TOWING);
    }
}
