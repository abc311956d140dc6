use tilewire::prelude::*;

// ---------------------------------------------------------------------------
// Map construction
// ---------------------------------------------------------------------------

/// Two tiles in one row: open ground at (0, 0), and Riverside at (1, 0).
fn riverside_map() -> Result<Map, CodecError> {
    let riverside = Settlement {
        sett_id: "6d1f0c52-riverside".into(),
        name: "Riverside".into(),
        sett_type: 1,
        ..Settlement::default()
    };
    let grid = TileGrid::from_rows(vec![vec![
        Tile::with_terrain(5),
        Tile {
            settlements: vec![riverside],
            ..Tile::with_terrain(0)
        },
    ]])?;

    let mut map = Map::new(grid);
    map.highlights.push(Coord::new(1, 0));
    Ok(map)
}

// ---------------------------------------------------------------------------
// Main
// ---------------------------------------------------------------------------

#[tokio::main]
async fn main() -> Result<(), TilewireError> {
    tilewire::init_tracing();

    let map = riverside_map()?;
    let codec = BinaryCodec::default();

    let bytes = encode_map_blocking(map.clone()).await?;
    tracing::info!(
        bytes = bytes.len(),
        content_type = codec.content_type(),
        "encoded map"
    );

    let decoded = decode_map_blocking(bytes).await?;
    for (y, row) in decoded.tiles.rows().enumerate() {
        for (x, tile) in row.iter().enumerate() {
            let names: Vec<&str> = tile.settlements.iter().map(|s| s.name.as_str()).collect();
            tracing::info!(x, y, terrain = tile.terrain_difficulty, ?names, "tile");
        }
    }
    tracing::info!(highlights = ?decoded.highlights, matches = decoded == map, "decoded map");
    Ok(())
}
