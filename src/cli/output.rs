use anyhow::Result;
use serde_json::Value;

use crate::workflow::Outcome;

/// Plain text: one `key: value` line per field, or `cancelled`.
pub(crate) fn format_plain(outcome: &Outcome) -> String {
	let Some(result) = &outcome.result else {
		return "cancelled".to_string();
	};
	match result {
		Value::Object(fields) => fields
			.iter()
			.map(|(key, value)| format!("{key}: {}", plain_value(value)))
			.collect::<Vec<_>>()
			.join("\n"),
		other => plain_value(other),
	}
}

fn plain_value(value: &Value) -> String {
	match value {
		Value::Null => String::new(),
		Value::String(text) => text.clone(),
		Value::Array(items) => items.iter().map(plain_value).collect::<Vec<_>>().join(","),
		Value::Object(_) => value.to_string(),
		other => other.to_string(),
	}
}

pub(crate) fn print_plain(outcome: &Outcome) {
	println!("{}", format_plain(outcome));
}

/// JSON: the result record, or `null` when cancelled.
pub(crate) fn format_json(outcome: &Outcome) -> Result<String> {
	let value = outcome.result.clone().unwrap_or(Value::Null);
	Ok(serde_json::to_string_pretty(&value)?)
}

pub(crate) fn print_json(outcome: &Outcome) -> Result<()> {
	println!("{}", format_json(outcome)?);
	Ok(())
}
