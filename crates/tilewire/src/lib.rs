//! # Tilewire
//!
//! Hierarchical map codec for an idle logistics game.
//!
//! A world map (tiles, their settlements, the vendors in those
//! settlements, and the vendors' cargo and vehicles) travels between the
//! game backend, the chat-facing client and the map renderer as one flat
//! byte stream. This crate re-exports the codec from `tilewire-protocol`
//! and adds what a service around it needs: one error type, async
//! offload helpers, and logging setup.
//!
//! ## Quick Start
//!
//! ```rust
//! use tilewire::prelude::*;
//!
//! let grid = TileGrid::from_rows(vec![vec![Tile::with_terrain(5), Tile::default()]])?;
//! let mut map = Map::new(grid);
//! map.highlights.push(Coord::new(1, 0));
//!
//! let bytes = encode_map(&map);
//! assert_eq!(decode_map(&bytes)?, map);
//! # Ok::<(), tilewire::TilewireError>(())
//! ```

mod error;
pub mod offload;

pub use error::TilewireError;
pub use tilewire_protocol as protocol;

/// Installs a `tracing` fmt subscriber filtered by `RUST_LOG`.
///
/// Falls back to `info` when `RUST_LOG` is unset or invalid. Calling it a
/// second time leaves the first subscriber in place.
pub fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    if let Err(e) = tracing_subscriber::fmt().with_env_filter(filter).try_init() {
        tracing::debug!(error = %e, "tracing subscriber already installed");
    }
}

pub mod prelude {
    //! Everything a map producer or consumer usually needs.

    pub use crate::TilewireError;
    pub use crate::offload::{decode_map_blocking, encode_map_blocking};
    #[cfg(feature = "json")]
    pub use tilewire_protocol::JsonCodec;
    pub use tilewire_protocol::{
        BinaryCodec, Cargo, CodecConfig, CodecError, Coord, Map, MapCodec, NO_TOWING, Settlement,
        Tile, TileGrid, Vehicle, Vendor, WireRecord, decode_map, encode_map,
    };
}
