//! Wire format for Tilewire game maps.
//!
//! This crate defines how a full world map travels between the game
//! backend, the chat-facing client, and the map renderer:
//!
//! - **Entities** ([`Tile`], [`Settlement`], [`Vendor`], [`Cargo`],
//!   [`Vehicle`]): one record type per level of the map tree, each with a
//!   [`WireRecord`] encode/decode pair.
//! - **Map envelope** ([`Map`], [`TileGrid`], [`encode_map`],
//!   [`decode_map`]): dimensions, row-major tiles, and two coordinate
//!   overlays.
//! - **Primitives** ([`wire`]) and **layouts** ([`schema`]): fixed-width
//!   strings, big-endian numbers, and the field list every record follows.
//! - **Codecs** ([`MapCodec`], [`BinaryCodec`], [`JsonCodec`]): the
//!   strategy a service plugs in.
//! - **Errors** ([`CodecError`]): what can go wrong while decoding.
//!
//! # Architecture
//!
//! ```text
//! Backend (Map) → encode_map → HTTP body (bytes) → decode_map → Renderer (Map)
//! ```
//!
//! The codec is pure and synchronous. It holds no state, so any number of
//! calls can run concurrently on independent inputs.
//!
//! # Feature Flags
//!
//! - `json` (default) — [`JsonCodec`] via `serde_json`

mod codec;
mod config;
mod entity;
mod error;
mod lenient;
mod map;
pub mod schema;
pub mod wire;

pub use codec::{BinaryCodec, MapCodec};
#[cfg(feature = "json")]
pub use codec::JsonCodec;
pub use config::CodecConfig;
pub use entity::{Cargo, NO_TOWING, Settlement, Tile, Vehicle, Vendor, WireRecord};
pub use error::{CodecError, Entity};
pub use map::{Coord, Map, TileGrid, decode_map, encode_map};
