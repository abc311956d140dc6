use serde::{Deserialize, Serialize};

use super::{Cargo, Vehicle, WireRecord, clamp_children, decode_children};
use crate::error::{CodecError, Entity};
use crate::schema::{ID_WIDTH, NAME_WIDTH, VENDOR_HEADER_LEN};
use crate::wire::{WireReader, WireWriter};

/// An in-game shop inside a settlement.
///
/// On the wire the header carries `cargo_count` and `vehicle_count`,
/// followed by that many cargo records and then that many vehicle
/// records. The counts are taken from the inventories when encoding.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Vendor {
    pub vendor_id: String,
    pub name: String,
    #[serde(deserialize_with = "crate::lenient::u32")]
    pub money: u32,
    #[serde(deserialize_with = "crate::lenient::u16")]
    pub fuel: u16,
    #[serde(deserialize_with = "crate::lenient::u16")]
    pub water: u16,
    #[serde(deserialize_with = "crate::lenient::u16")]
    pub food: u16,
    pub cargo_inventory: Vec<Cargo>,
    pub vehicle_inventory: Vec<Vehicle>,
}

impl WireRecord for Vendor {
    const ENTITY: Entity = Entity::Vendor;
    const HEADER_LEN: usize = VENDOR_HEADER_LEN;

    fn encode_into(&self, w: &mut WireWriter) {
        let max = usize::from(u16::MAX);
        let cargo = clamp_children(&self.cargo_inventory, max, Entity::Vendor, "cargo_inventory");
        let vehicles = clamp_children(
            &self.vehicle_inventory,
            max,
            Entity::Vendor,
            "vehicle_inventory",
        );

        w.put_str(&self.vendor_id, ID_WIDTH);
        w.put_str(&self.name, NAME_WIDTH);
        w.put_u32(self.money);
        w.put_u16(self.fuel);
        w.put_u16(self.water);
        w.put_u16(self.food);
        w.put_u16(cargo.len() as u16);
        w.put_u16(vehicles.len() as u16);
        for item in cargo {
            item.encode_into(w);
        }
        for vehicle in vehicles {
            vehicle.encode_into(w);
        }
    }

    fn decode_from(r: &mut WireReader<'_>) -> Result<Self, CodecError> {
        const E: Entity = Entity::Vendor;
        r.require(VENDOR_HEADER_LEN, E)?;
        let vendor_id = r.get_str(ID_WIDTH, E)?;
        let name = r.get_str(NAME_WIDTH, E)?;
        let money = r.get_u32(E)?;
        let fuel = r.get_u16(E)?;
        let water = r.get_u16(E)?;
        let food = r.get_u16(E)?;
        let cargo_count = usize::from(r.get_u16(E)?);
        let vehicle_count = usize::from(r.get_u16(E)?);

        let cargo_inventory = decode_children(r, cargo_count)?;
        let vehicle_inventory = decode_children(r, vehicle_count)?;
        tracing::trace!(%vendor_id, cargo_count, vehicle_count, "vendor decoded");

        Ok(Self {
            vendor_id,
            name,
            money,
            fuel,
            water,
            food,
            cargo_inventory,
            vehicle_inventory,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{CARGO_RECORD_LEN, VEHICLE_RECORD_LEN};

    fn depot(cargo: usize, vehicles: usize) -> Vendor {
        Vendor {
            vendor_id: "vendor-1".into(),
            name: "Dusty Depot".into(),
            money: 1_500_000,
            fuel: 300,
            water: 120,
            food: 45,
            cargo_inventory: (0..cargo)
                .map(|i| Cargo {
                    cargo_id: format!("cargo-{i}"),
                    name: "Crate".into(),
                    quantity: i as u32,
                    ..Cargo::default()
                })
                .collect(),
            vehicle_inventory: (0..vehicles)
                .map(|i| Vehicle {
                    vehicle_id: format!("veh-{i}"),
                    name: "Buggy".into(),
                    ..Vehicle::default()
                })
                .collect(),
        }
    }

    #[test]
    fn test_empty_vendor_is_header_only() {
        assert_eq!(depot(0, 0).to_bytes().len(), VENDOR_HEADER_LEN);
    }

    #[test]
    fn test_counts_are_written_before_children() {
        let bytes = depot(2, 1).to_bytes();
        let counts = &bytes[VENDOR_HEADER_LEN - 4..VENDOR_HEADER_LEN];
        assert_eq!(counts, &[0, 2, 0, 1]);
        assert_eq!(
            bytes.len(),
            VENDOR_HEADER_LEN + 2 * CARGO_RECORD_LEN + VEHICLE_RECORD_LEN
        );
    }

    #[test]
    fn test_vendor_roundtrip_keeps_inventory_order() {
        let vendor = depot(3, 2);
        let (decoded, used) = Vendor::from_bytes(&vendor.to_bytes()).unwrap();
        assert_eq!(decoded, vendor);
        assert_eq!(used, vendor.to_bytes().len());
        let ids: Vec<_> = decoded.cargo_inventory.iter().map(|c| c.cargo_id.as_str()).collect();
        assert_eq!(ids, ["cargo-0", "cargo-1", "cargo-2"]);
    }

    #[test]
    fn test_missing_vehicle_record_is_truncation_in_vehicle() {
        let bytes = depot(1, 1).to_bytes();
        let err = Vendor::from_bytes(&bytes[..bytes.len() - 10]).unwrap_err();
        assert_eq!(err.entity(), Some(Entity::Vehicle));
    }

    #[test]
    fn test_money_is_big_endian_u32() {
        let bytes = depot(0, 0).to_bytes();
        let money = &bytes[ID_WIDTH + NAME_WIDTH..ID_WIDTH + NAME_WIDTH + 4];
        assert_eq!(money, &1_500_000u32.to_be_bytes());
    }
}
