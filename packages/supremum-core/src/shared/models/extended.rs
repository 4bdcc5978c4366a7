//! Extended reals (ℝ ∪ {±∞}) and their wire encoding
//!
//! JSON has no infinity literal, so infinities travel as the strings
//! `"inf"` / `"-inf"` (a few spellings are accepted on input).

use serde::de::{self, Deserializer};
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A finite real or one of the two infinity sentinels
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ExtendedReal {
    Finite(f64),
    PosInfinity,
    NegInfinity,
}

impl ExtendedReal {
    /// Map an `f64` onto the extended reals (NaN has no image)
    pub fn from_f64(value: f64) -> Option<Self> {
        if value.is_nan() {
            None
        } else if value == f64::INFINITY {
            Some(Self::PosInfinity)
        } else if value == f64::NEG_INFINITY {
            Some(Self::NegInfinity)
        } else {
            Some(Self::Finite(value))
        }
    }

    pub fn to_f64(self) -> f64 {
        match self {
            Self::Finite(v) => v,
            Self::PosInfinity => f64::INFINITY,
            Self::NegInfinity => f64::NEG_INFINITY,
        }
    }

    /// Finite value, if any
    pub fn finite(self) -> Option<f64> {
        match self {
            Self::Finite(v) => Some(v),
            _ => None,
        }
    }

    pub fn is_finite(self) -> bool {
        matches!(self, Self::Finite(_))
    }
}

impl fmt::Display for ExtendedReal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Finite(v) => write!(f, "{}", v),
            Self::PosInfinity => write!(f, "+∞"),
            Self::NegInfinity => write!(f, "-∞"),
        }
    }
}

/// Parse the accepted textual spellings of infinity
pub fn parse_infinity(text: &str) -> Option<f64> {
    match text.trim().to_ascii_lowercase().as_str() {
        "inf" | "+inf" | "infinity" | "+infinity" => Some(f64::INFINITY),
        "-inf" | "-infinity" => Some(f64::NEG_INFINITY),
        _ => None,
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawNumber {
    Number(f64),
    Text(String),
}

fn decode_raw<E: de::Error>(raw: RawNumber) -> Result<f64, E> {
    match raw {
        RawNumber::Number(v) => Ok(v),
        RawNumber::Text(text) => parse_infinity(&text)
            .ok_or_else(|| E::custom(format!("expected a number or \"inf\"/\"-inf\", got \"{}\"", text))),
    }
}

impl Serialize for ExtendedReal {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Finite(v) => serializer.serialize_f64(*v),
            Self::PosInfinity => serializer.serialize_str("inf"),
            Self::NegInfinity => serializer.serialize_str("-inf"),
        }
    }
}

impl<'de> Deserialize<'de> for ExtendedReal {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = decode_raw(RawNumber::deserialize(deserializer)?)?;
        Self::from_f64(value).ok_or_else(|| de::Error::custom("NaN is not an extended real"))
    }
}

/// `#[serde(with = "extended_f64")]` for plain `f64` fields that may hold ±∞
pub mod extended_f64 {
    use super::*;

    pub fn serialize<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
        match ExtendedReal::from_f64(*value) {
            Some(ext) => ext.serialize(serializer),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
        decode_raw(RawNumber::deserialize(deserializer)?)
    }
}
