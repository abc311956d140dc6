//! Primitive codec: fixed-width strings and big-endian numbers.
//!
//! Every record in the format is a flat run of these primitives. There is
//! no per-field tag and no length prefix on strings; each side simply
//! knows the widths from [`schema`](crate::schema).
//!
//! [`WireWriter`] only appends and never fails. [`WireReader`] only moves
//! forward and fails with [`CodecError::TruncatedInput`] the moment a read
//! would run past the end of the buffer.

use crate::error::{CodecError, Entity};

/// Packs `value` into exactly `width` bytes.
///
/// The UTF-8 bytes are truncated if they don't fit, and zero-padded on
/// the right if they are short. Truncation backs off to the last
/// character boundary that fits, so the output is always valid UTF-8
/// before the padding; for ASCII text that is exactly the first `width`
/// bytes.
///
/// ```rust
/// use tilewire_protocol::wire::pack_string;
///
/// assert_eq!(pack_string("ab", 4), b"ab\0\0");
/// assert_eq!(pack_string("abcdef", 4), b"abcd");
/// ```
pub fn pack_string(value: &str, width: usize) -> Vec<u8> {
    let mut out = Vec::with_capacity(width);
    write_padded(&mut out, value, width);
    out
}

/// Decodes a fixed-width string field.
///
/// Reads up to (not including) the first zero byte, or the whole slice if
/// there is none. Padding is never decoded as text. If the bytes before
/// the terminator are not valid UTF-8 (another encoder cut a multi-byte
/// character in half) the longest valid prefix is returned.
pub fn unpack_string(bytes: &[u8]) -> String {
    let end = bytes.iter().position(|&b| b == 0).unwrap_or(bytes.len());
    let text = &bytes[..end];
    match std::str::from_utf8(text) {
        Ok(s) => s.to_owned(),
        Err(e) => {
            tracing::trace!(
                valid = e.valid_up_to(),
                len = text.len(),
                "string field ends in invalid utf-8, keeping valid prefix"
            );
            String::from_utf8_lossy(&text[..e.valid_up_to()]).into_owned()
        }
    }
}

fn write_padded(out: &mut Vec<u8>, value: &str, width: usize) {
    let mut end = value.len().min(width);
    while !value.is_char_boundary(end) {
        end -= 1;
    }
    out.extend_from_slice(&value.as_bytes()[..end]);
    out.resize(out.len() + (width - end), 0);
}

// ---------------------------------------------------------------------------
// WireWriter
// ---------------------------------------------------------------------------

/// Append-only big-endian writer.
#[derive(Debug, Default, Clone)]
pub struct WireWriter {
    buf: Vec<u8>,
}

impl WireWriter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buf: Vec::with_capacity(capacity),
        }
    }

    pub fn put_u8(&mut self, v: u8) {
        self.buf.push(v);
    }

    pub fn put_u16(&mut self, v: u16) {
        self.buf.extend_from_slice(&v.to_be_bytes());
    }

    pub fn put_u32(&mut self, v: u32) {
        self.buf.extend_from_slice(&v.to_be_bytes());
    }

    pub fn put_i32(&mut self, v: i32) {
        self.buf.extend_from_slice(&v.to_be_bytes());
    }

    pub fn put_f32(&mut self, v: f32) {
        self.buf.extend_from_slice(&v.to_be_bytes());
    }

    /// Writes `value` as a `width`-byte string field (see [`pack_string`]).
    pub fn put_str(&mut self, value: &str, width: usize) {
        write_padded(&mut self.buf, value, width);
    }

    /// Booleans travel as a single `0`/`1` byte.
    pub fn put_bool(&mut self, v: bool) {
        self.buf.push(u8::from(v));
    }

    pub fn len(&self) -> usize {
        self.buf.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.buf
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.buf
    }
}

// ---------------------------------------------------------------------------
// WireReader
// ---------------------------------------------------------------------------

/// Forward-only cursor over an encoded buffer.
///
/// The reader borrows the input and never mutates it. Each read names the
/// [`Entity`] being decoded so a truncation error says where it happened.
#[derive(Debug, Clone)]
pub struct WireReader<'a> {
    buf: &'a [u8],
    pos: usize,
}

impl<'a> WireReader<'a> {
    pub fn new(buf: &'a [u8]) -> Self {
        Self { buf, pos: 0 }
    }

    /// Bytes consumed so far.
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Bytes not yet consumed.
    pub fn remaining(&self) -> usize {
        self.buf.len() - self.pos
    }

    pub fn is_empty(&self) -> bool {
        self.remaining() == 0
    }

    /// Fails unless at least `needed` bytes remain.
    ///
    /// Entity codecs call this once for the whole fixed-size header, so the
    /// error reports the header size instead of whichever field happened
    /// to fall off the end.
    pub fn require(&self, needed: usize, entity: Entity) -> Result<(), CodecError> {
        let remaining = self.remaining();
        if remaining < needed {
            return Err(CodecError::TruncatedInput {
                entity,
                needed,
                remaining,
            });
        }
        Ok(())
    }

    /// Consumes the next `n` bytes.
    pub fn bytes(&mut self, n: usize, entity: Entity) -> Result<&'a [u8], CodecError> {
        self.require(n, entity)?;
        let start = self.pos;
        self.pos += n;
        Ok(&self.buf[start..self.pos])
    }

    fn array<const N: usize>(&mut self, entity: Entity) -> Result<[u8; N], CodecError> {
        let mut out = [0u8; N];
        out.copy_from_slice(self.bytes(N, entity)?);
        Ok(out)
    }

    pub fn get_u8(&mut self, entity: Entity) -> Result<u8, CodecError> {
        Ok(self.array::<1>(entity)?[0])
    }

    pub fn get_u16(&mut self, entity: Entity) -> Result<u16, CodecError> {
        self.array(entity).map(u16::from_be_bytes)
    }

    pub fn get_u32(&mut self, entity: Entity) -> Result<u32, CodecError> {
        self.array(entity).map(u32::from_be_bytes)
    }

    pub fn get_i32(&mut self, entity: Entity) -> Result<i32, CodecError> {
        self.array(entity).map(i32::from_be_bytes)
    }

    pub fn get_f32(&mut self, entity: Entity) -> Result<f32, CodecError> {
        self.array(entity).map(f32::from_be_bytes)
    }

    /// Reads a `width`-byte string field (see [`unpack_string`]).
    pub fn get_str(&mut self, width: usize, entity: Entity) -> Result<String, CodecError> {
        self.bytes(width, entity).map(unpack_string)
    }

    /// Any non-zero byte reads as `true`.
    pub fn get_bool(&mut self, entity: Entity) -> Result<bool, CodecError> {
        Ok(self.get_u8(entity)? != 0)
    }
}
