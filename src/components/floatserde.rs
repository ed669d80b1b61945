//! Serde helpers for `f32` and `Vec2` fields that may hold non-finite values.
//!
//! JSON has no representation for infinities or NaN (serde_json writes them
//! as `null` and cannot read them back). Components are not validated, so
//! these helpers write finite values as plain numbers and non-finite ones as
//! the strings `"inf"`, `"-inf"` and `"NaN"`.
//!
//! Use with `#[serde(with = "...")]`:
//! - [`scalar`] – `f32`
//! - [`vec2`] – `Vec2` as `[x, y]`
//! - [`option_scalar`] / [`option_vec2`] – the same inside `Option`

use glam::Vec2;
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// `f32` wrapper carrying the number-or-string JSON form.
#[derive(Clone, Copy, Debug)]
pub struct Float(pub f32);

impl Serialize for Float {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let v = self.0;
        if v.is_finite() {
            serializer.serialize_f32(v)
        } else if v.is_nan() {
            serializer.serialize_str("NaN")
        } else if v > 0.0 {
            serializer.serialize_str("inf")
        } else {
            serializer.serialize_str("-inf")
        }
    }
}

impl<'de> Deserialize<'de> for Float {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Repr {
            Number(f32),
            Text(String),
        }

        match Repr::deserialize(deserializer)? {
            Repr::Number(v) => Ok(Float(v)),
            Repr::Text(text) => match text.as_str() {
                "inf" | "+inf" | "Infinity" => Ok(Float(f32::INFINITY)),
                "-inf" | "-Infinity" => Ok(Float(f32::NEG_INFINITY)),
                "NaN" | "nan" => Ok(Float(f32::NAN)),
                other => Err(D::Error::custom(format!(
                    "expected a number, \"inf\", \"-inf\" or \"NaN\", found \"{}\"",
                    other
                ))),
            },
        }
    }
}

pub mod scalar {
    use super::*;

    pub fn serialize<S: Serializer>(value: &f32, serializer: S) -> Result<S::Ok, S::Error> {
        Float(*value).serialize(serializer)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f32, D::Error> {
        Ok(Float::deserialize(deserializer)?.0)
    }
}

pub mod vec2 {
    use super::*;

    pub fn serialize<S: Serializer>(value: &Vec2, serializer: S) -> Result<S::Ok, S::Error> {
        [Float(value.x), Float(value.y)].serialize(serializer)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec2, D::Error> {
        let [x, y] = <[Float; 2]>::deserialize(deserializer)?;
        Ok(Vec2::new(x.0, y.0))
    }
}

pub mod option_scalar {
    use super::*;

    pub fn serialize<S: Serializer>(value: &Option<f32>, serializer: S) -> Result<S::Ok, S::Error> {
        value.map(Float).serialize(serializer)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<f32>, D::Error> {
        Ok(Option::<Float>::deserialize(deserializer)?.map(|f| f.0))
    }
}

pub mod option_vec2 {
    use super::*;

    pub fn serialize<S: Serializer>(
        value: &Option<Vec2>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        value
            .map(|v| [Float(v.x), Float(v.y)])
            .serialize(serializer)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<Vec2>, D::Error> {
        Ok(Option::<[Float; 2]>::deserialize(deserializer)?.map(|[x, y]| Vec2::new(x.0, y.0)))
    }
}
