//! Running the codec from async request handlers.
//!
//! Encoding and decoding are synchronous and CPU-bound. A large grid can
//! take long enough to stall a Tokio worker, so these helpers move the
//! call onto the blocking thread pool with `spawn_blocking`. The codec
//! itself has no suspension points; a timeout, if wanted, goes around the
//! whole future.

use std::sync::Arc;

use tilewire_protocol::{BinaryCodec, Map, MapCodec};

use crate::TilewireError;

/// Encodes `map` with `codec` on the blocking pool.
pub async fn encode_blocking<C: MapCodec>(
    codec: Arc<C>,
    map: Map,
) -> Result<Vec<u8>, TilewireError> {
    let bytes = tokio::task::spawn_blocking(move || codec.encode(&map)).await??;
    Ok(bytes)
}

/// Decodes `bytes` with `codec` on the blocking pool.
pub async fn decode_blocking<C: MapCodec>(
    codec: Arc<C>,
    bytes: Vec<u8>,
) -> Result<Map, TilewireError> {
    let map = tokio::task::spawn_blocking(move || codec.decode(&bytes)).await??;
    Ok(map)
}

/// [`encode_blocking`] with the default binary format.
pub async fn encode_map_blocking(map: Map) -> Result<Vec<u8>, TilewireError> {
    encode_blocking(Arc::new(BinaryCodec::default()), map).await
}

/// [`decode_blocking`] with the default binary format.
pub async fn decode_map_blocking(bytes: Vec<u8>) -> Result<Map, TilewireError> {
    decode_blocking(Arc::new(BinaryCodec::default()), bytes).await
}
