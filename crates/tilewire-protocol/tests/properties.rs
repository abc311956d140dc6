//! Property tests: round-trip, determinism and prefix rejection over
//! randomly generated maps.

use proptest::collection::vec;
use proptest::prelude::*;

use tilewire_protocol::schema::NAME_WIDTH;
use tilewire_protocol::{
    Cargo, CodecError, Coord, Map, Settlement, Tile, TileGrid, Vehicle, Vendor, WireRecord,
    decode_map, encode_map,
};

// =========================================================================
// Strategies
// =========================================================================

fn ident() -> impl Strategy<Value = String> {
    "[a-f0-9-]{1,36}"
}

fn label() -> impl Strategy<Value = String> {
    "[A-Za-z' ]{0,40}"
}

fn quantity() -> impl Strategy<Value = f32> {
    -1.0e6f32..1.0e6f32
}

fn cargo() -> impl Strategy<Value = Cargo> {
    (
        (ident(), label(), any::<u32>(), any::<u16>(), any::<u16>()),
        (quantity(), quantity(), quantity()),
        (any::<bool>(), any::<bool>(), any::<bool>(), any::<u16>(), any::<u16>()),
    )
        .prop_map(
            |(
                (cargo_id, name, quantity, volume, weight),
                (capacity, fuel, water),
                (food, part, distributor, base_price, delivery_reward),
            )| Cargo {
                cargo_id,
                name,
                quantity,
                volume,
                weight,
                capacity,
                fuel,
                water,
                food,
                part,
                distributor,
                base_price,
                delivery_reward,
            },
        )
}

fn vehicle() -> impl Strategy<Value = Vehicle> {
    (
        (ident(), label(), 0.0f32..1.0f32),
        (any::<u16>(), any::<u16>(), any::<u16>()),
        (any::<u32>(), any::<u32>(), prop_oneof![Just(-1i32), 0i32..100_000]),
        (any::<u16>(), any::<u16>(), any::<u32>()),
        (proptest::option::of(ident()), proptest::option::of(ident())),
    )
        .prop_map(
            |(
                (vehicle_id, name, wear),
                (base_fuel_efficiency, base_top_speed, base_offroad_capability),
                (base_cargo_capacity, base_weight_capacity, base_towing_capacity),
                (ap, base_max_ap, base_value),
                (vendor_id, warehouse_id),
            )| Vehicle {
                vehicle_id,
                name,
                wear,
                base_fuel_efficiency,
                base_top_speed,
                base_offroad_capability,
                base_cargo_capacity,
                base_weight_capacity,
                base_towing_capacity,
                ap,
                base_max_ap,
                base_value,
                vendor_id,
                warehouse_id,
            },
        )
}

fn vendor() -> impl Strategy<Value = Vendor> {
    (
        (ident(), label(), any::<u32>()),
        (any::<u16>(), any::<u16>(), any::<u16>()),
        vec(cargo(), 0..3),
        vec(vehicle(), 0..3),
    )
        .prop_map(
            |((vendor_id, name, money), (fuel, water, food), cargo_inventory, vehicle_inventory)| {
                Vendor {
                    vendor_id,
                    name,
                    money,
                    fuel,
                    water,
                    food,
                    cargo_inventory,
                    vehicle_inventory,
                }
            },
        )
}

fn settlement() -> impl Strategy<Value = Settlement> {
    (
        ident(),
        label(),
        any::<u8>(),
        any::<u8>(),
        any::<u8>(),
        vec(vendor(), 0..2),
    )
        .prop_map(
            |(sett_id, name, sett_type, import_count, export_count, vendors)| Settlement {
                sett_id,
                name,
                sett_type,
                import_count,
                export_count,
                vendors,
            },
        )
}

fn tile() -> impl Strategy<Value = Tile> {
    (
        any::<u8>(),
        any::<u8>(),
        any::<u8>(),
        any::<u8>(),
        vec(settlement(), 0..2),
    )
        .prop_map(
            |(terrain_difficulty, region, weather, special, settlements)| Tile {
                terrain_difficulty,
                region,
                weather,
                special,
                settlements,
            },
        )
}

fn coord() -> impl Strategy<Value = Coord> {
    (any::<u16>(), any::<u16>()).prop_map(Coord::from)
}

fn map() -> impl Strategy<Value = Map> {
    (0usize..4, 0usize..4)
        .prop_flat_map(|(height, width)| {
            (
                Just(height),
                Just(width),
                vec(tile(), height * width),
                vec(coord(), 0..5),
                vec(coord(), 0..5),
            )
        })
        .prop_map(|(height, width, tiles, highlights, lowlights)| Map {
            tiles: TileGrid::from_flat(height, width, tiles).expect("sized by strategy"),
            highlights,
            lowlights,
        })
}

// =========================================================================
// Properties
// =========================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_map_roundtrip(m in map()) {
        let decoded = decode_map(&encode_map(&m)).expect("valid encoding decodes");
        prop_assert_eq!(decoded, m);
    }

    #[test]
    fn prop_encoding_is_deterministic(m in map()) {
        prop_assert_eq!(encode_map(&m), encode_map(&m));
    }

    #[test]
    fn prop_proper_prefix_is_truncated(m in map(), cut in any::<prop::sample::Index>()) {
        let bytes = encode_map(&m);
        let prefix = &bytes[..cut.index(bytes.len())];
        let truncated = matches!(decode_map(prefix), Err(CodecError::TruncatedInput { .. }));
        prop_assert!(truncated);
    }

    #[test]
    fn prop_vendor_consumes_exactly_its_bytes(v in vendor(), tail in vec(any::<u8>(), 0..16)) {
        let mut bytes = v.to_bytes();
        let len = bytes.len();
        bytes.extend_from_slice(&tail);
        let (decoded, used) = Vendor::from_bytes(&bytes).expect("decodes");
        prop_assert_eq!(used, len);
        prop_assert_eq!(decoded, v);
    }

    #[test]
    fn prop_ascii_names_truncate_to_width(name in "[ -~]{0,140}") {
        let s = Settlement { name: name.clone(), ..Settlement::default() };
        let (decoded, _) = Settlement::from_bytes(&s.to_bytes()).expect("decodes");
        let expected = &name[..name.len().min(NAME_WIDTH)];
        prop_assert_eq!(decoded.name.as_str(), expected);
    }

    #[test]
    fn prop_random_bytes_never_panic(bytes in vec(any::<u8>(), 0..512)) {
        let _ = decode_map(&bytes);
    }
}
