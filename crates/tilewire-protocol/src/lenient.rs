//! Lenient `deserialize_with` helpers for the dictionary representation.
//!
//! Backends build maps as loosely-typed dictionaries before encoding, and
//! the wire format does not range-check integers: a value too large for
//! its field wraps. These helpers give the JSON path the same behavior,
//! accepting any JSON number and wrapping it into the field's width. A
//! producer that writes `-1` for a `u8` field therefore gets `255`, which
//! is exactly what the binary encoder would have written.
//!
//! A fractional number is truncated toward zero before wrapping (`3.7`
//! reads as `3`, `-1.5` as `-1`). Floats beyond the `i128` range saturate
//! there first and NaN reads as `0`; no backend writes such values into an
//! integer field.
//!
//! Float fields get their own pair: JSON has no infinity or NaN, so
//! [`finite_f32`] writes those as `0.0` and [`f32`] reads `null` as `0.0`.

use std::fmt;

use serde::Serializer;
use serde::de::{self, Deserializer, Visitor};

struct AnyInteger;

impl Visitor<'_> for AnyInteger {
    type Value = i128;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a number")
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<i128, E> {
        Ok(i128::from(v))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<i128, E> {
        Ok(i128::from(v))
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<i128, E> {
        Ok(v as i128)
    }

    fn visit_bool<E: de::Error>(self, v: bool) -> Result<i128, E> {
        Ok(i128::from(v))
    }
}

pub(crate) fn u8<'de, D: Deserializer<'de>>(d: D) -> Result<u8, D::Error> {
    d.deserialize_any(AnyInteger).map(|v| v as u8)
}

pub(crate) fn u16<'de, D: Deserializer<'de>>(d: D) -> Result<u16, D::Error> {
    d.deserialize_any(AnyInteger).map(|v| v as u16)
}

pub(crate) fn u32<'de, D: Deserializer<'de>>(d: D) -> Result<u32, D::Error> {
    d.deserialize_any(AnyInteger).map(|v| v as u32)
}

pub(crate) fn i32<'de, D: Deserializer<'de>>(d: D) -> Result<i32, D::Error> {
    d.deserialize_any(AnyInteger).map(|v| v as i32)
}

struct AnyFloat;

impl Visitor<'_> for AnyFloat {
    type Value = f32;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a number or null")
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<f32, E> {
        Ok(v as f32)
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<f32, E> {
        Ok(v as f32)
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<f32, E> {
        Ok(v as f32)
    }

    fn visit_unit<E: de::Error>(self) -> Result<f32, E> {
        Ok(0.0)
    }

    fn visit_none<E: de::Error>(self) -> Result<f32, E> {
        Ok(0.0)
    }
}

pub(crate) fn f32<'de, D: Deserializer<'de>>(d: D) -> Result<f32, D::Error> {
    d.deserialize_any(AnyFloat)
}

/// Writes non-finite values as `0.0`.
pub(crate) fn finite_f32<S: Serializer>(v: &f32, s: S) -> Result<S::Ok, S::Error> {
    s.serialize_f32(if v.is_finite() { *v } else { 0.0 })
}

/// `true`/`false` or any number (non-zero is `true`).
pub(crate) fn flag<'de, D: Deserializer<'de>>(d: D) -> Result<bool, D::Error> {
    d.deserialize_any(AnyInteger).map(|v| v != 0)
}
