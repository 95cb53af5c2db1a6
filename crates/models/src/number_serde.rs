//! Lenient numeric fields: accepts JSON numbers as well as numeric strings
//! (`"1000"`, `" 2.5 "`). Anything else, including `"NaN"` and `"inf"`, is a
//! conversion error.

use serde::de::{self, Unexpected, Visitor};
use serde::Deserializer;
use std::fmt;

pub fn deserialize<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
	D: Deserializer<'de>,
{
	deserializer.deserialize_any(NumberVisitor)
}

struct NumberVisitor;

impl<'de> Visitor<'de> for NumberVisitor {
	type Value = f64;

	fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
		formatter.write_str("a finite number or a numeric string")
	}

	fn visit_f64<E: de::Error>(self, v: f64) -> Result<f64, E> {
		if v.is_finite() {
			Ok(v)
		} else {
			Err(E::invalid_value(Unexpected::Float(v), &self))
		}
	}

	fn visit_i64<E: de::Error>(self, v: i64) -> Result<f64, E> {
		Ok(v as f64)
	}

	fn visit_u64<E: de::Error>(self, v: u64) -> Result<f64, E> {
		Ok(v as f64)
	}

	fn visit_str<E: de::Error>(self, v: &str) -> Result<f64, E> {
		match v.trim().parse::<f64>() {
			Ok(parsed) if parsed.is_finite() => Ok(parsed),
			_ => Err(E::invalid_value(Unexpected::Str(v), &self)),
		}
	}
}
