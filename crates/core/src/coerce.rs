//! Lenient conversions for host-supplied request fields.
//!
//! Hosts hand over loosely typed collections. These deserializers never fail
//! on content: a `null` collection becomes empty, scalars are stringified,
//! and index entries that are not non-negative integers are skipped. Only a
//! structurally wrong document (say, an object where a list belongs) is an
//! error.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Render a JSON scalar the way a host's `ToString` would.
#[must_use]
pub fn scalar_text(value: &Value) -> String {
	match value {
		Value::Null => String::new(),
		Value::String(text) => text.clone(),
		Value::Bool(flag) => flag.to_string(),
		Value::Number(number) => number.to_string(),
		other => other.to_string(),
	}
}

/// Read a stable index, accepting integral numbers and numeric strings.
#[must_use]
pub fn index_value(value: &Value) -> Option<usize> {
	match value {
		Value::Number(number) => {
			if let Some(index) = number.as_u64() {
				return usize::try_from(index).ok();
			}
			let float = number.as_f64()?;
			(float >= 0.0 && float.fract() == 0.0 && float <= u32::MAX as f64)
				.then_some(float as usize)
		}
		Value::String(text) => text.trim().parse().ok(),
		_ => None,
	}
}

/// Read a signed integer, accepting numbers and numeric strings.
#[must_use]
pub fn integer_value(value: &Value) -> Option<i64> {
	match value {
		Value::Number(number) => number
			.as_i64()
			.or_else(|| number.as_f64().filter(|float| float.fract() == 0.0).map(|float| float as i64)),
		Value::String(text) => text.trim().parse().ok(),
		Value::Bool(flag) => Some(i64::from(*flag)),
		_ => None,
	}
}

/// Parse a decimal number, substituting `fallback` when the text is not one.
#[must_use]
pub fn parse_number_or(text: &str, fallback: f64) -> f64 {
	text.trim()
		.parse::<f64>()
		.ok()
		.filter(|number| number.is_finite())
		.unwrap_or(fallback)
}

/// `null` or missing text becomes empty; scalars are stringified.
pub fn text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
	D: Deserializer<'de>,
{
	Ok(scalar_text(&Value::deserialize(deserializer)?))
}

/// Optional text where `null` stays absent.
pub fn optional_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
	D: Deserializer<'de>,
{
	let value = Value::deserialize(deserializer)?;
	Ok((!value.is_null()).then(|| scalar_text(&value)))
}

/// String list where `null` is empty and every entry is stringified.
pub fn string_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
	D: Deserializer<'de>,
{
	let values = Option::<Vec<Value>>::deserialize(deserializer)?.unwrap_or_default();
	Ok(values.iter().map(scalar_text).collect())
}

/// String list where `null` stays absent, for lists whose absence hides a
/// control.
pub fn optional_string_list<'de, D>(deserializer: D) -> Result<Option<Vec<String>>, D::Error>
where
	D: Deserializer<'de>,
{
	let values = Option::<Vec<Value>>::deserialize(deserializer)?;
	Ok(values.map(|values| values.iter().map(scalar_text).collect()))
}

/// List of string lists; a `null` or scalar inner entry becomes an empty list.
pub fn string_lists<'de, D>(deserializer: D) -> Result<Vec<Vec<String>>, D::Error>
where
	D: Deserializer<'de>,
{
	let values = Option::<Vec<Value>>::deserialize(deserializer)?.unwrap_or_default();
	Ok(values
		.into_iter()
		.map(|inner| match inner {
			Value::Array(entries) => entries.iter().map(scalar_text).collect(),
			_ => Vec::new(),
		})
		.collect())
}

/// Index list that silently skips invalid entries.
pub fn index_list<'de, D>(deserializer: D) -> Result<Vec<usize>, D::Error>
where
	D: Deserializer<'de>,
{
	let values = Option::<Vec<Value>>::deserialize(deserializer)?.unwrap_or_default();
	Ok(values.iter().filter_map(index_value).collect())
}

/// Integer that defaults to `0` when missing or unreadable.
pub fn integer<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
	D: Deserializer<'de>,
{
	Ok(integer_value(&Value::deserialize(deserializer)?).unwrap_or_default())
}

/// Decimal number accepting numeric strings; unreadable input becomes `0`.
pub fn number<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
	D: Deserializer<'de>,
{
	Ok(match Value::deserialize(deserializer)? {
		Value::Number(number) => number.as_f64().unwrap_or_default(),
		Value::String(text) => parse_number_or(&text, 0.0),
		_ => 0.0,
	})
}

/// Boolean accepting `null` (false), numbers (non-zero), and "true"/"false".
pub fn flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
	D: Deserializer<'de>,
{
	Ok(match Value::deserialize(deserializer)? {
		Value::Bool(flag) => flag,
		Value::Number(number) => number.as_f64().is_some_and(|n| n != 0.0),
		Value::String(text) => text.trim().eq_ignore_ascii_case("true"),
		_ => false,
	})
}
