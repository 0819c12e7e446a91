//! Immutable item collection and the per-parameter value columns aligned to it.
//!
//! An [`ItemModel`] is built once when a dialog opens. Every entry receives a
//! stable index matching the caller's original ordering, and parameter value
//! columns are addressed by that index.

use indexmap::IndexMap;

/// A single row of the item collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemEntry {
	/// Stable, 0-based position assigned when the model was initialised.
	pub index: usize,
	/// Text shown in the list.
	pub text: String,
	folded: String,
}

impl ItemEntry {
	fn new(index: usize, text: String) -> Self {
		let folded = fold(&text);
		Self {
			index,
			text,
			folded,
		}
	}

	/// Case-insensitive substring test against the entry text.
	///
	/// `needle` must already be folded with [`fold`].
	#[must_use]
	pub fn contains_folded(&self, needle: &str) -> bool {
		self.folded.contains(needle)
	}
}

/// Values of one filter parameter, stored under the caller's spelling.
#[derive(Debug, Clone, Default)]
struct ParamColumn {
	name: String,
	values: Vec<String>,
}

/// Item collection plus parameter values, keyed case-insensitively.
#[derive(Debug, Clone, Default)]
pub struct ItemModel {
	items: Vec<ItemEntry>,
	params: IndexMap<String, ParamColumn>,
}

impl ItemModel {
	/// Build a model from item texts and `(parameter, values)` pairs.
	#[must_use]
	pub fn new<I, S, P>(items: I, params: P) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
		P: IntoIterator<Item = (String, Vec<String>)>,
	{
		let mut model = Self::default();
		model.initialize(items, params);
		model
	}

	/// Model with items only and no filter parameters.
	#[must_use]
	pub fn from_items<I, S>(items: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		Self::new(items, Vec::new())
	}

	/// Replace all entries and parameter columns.
	///
	/// A parameter name that repeats (ignoring case) replaces the values of
	/// the earlier one.
	pub fn initialize<I, S, P>(&mut self, items: I, params: P)
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
		P: IntoIterator<Item = (String, Vec<String>)>,
	{
		self.items = items
			.into_iter()
			.enumerate()
			.map(|(index, text)| ItemEntry::new(index, text.into()))
			.collect();

		self.params.clear();
		for (name, values) in params {
			self.params.insert(fold(&name), ParamColumn { name, values });
		}
	}

	/// Number of items (`N`).
	#[must_use]
	pub fn count(&self) -> usize {
		self.items.len()
	}

	/// Whether the collection holds no items.
	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.items.is_empty()
	}

	/// Look up an entry by stable index.
	#[must_use]
	pub fn entry(&self, index: usize) -> Option<&ItemEntry> {
		self.items.get(index)
	}

	/// Entry text by stable index, empty when out of range.
	#[must_use]
	pub fn text(&self, index: usize) -> &str {
		self.entry(index).map_or("", |entry| entry.text.as_str())
	}

	/// All entries in stable-index order.
	#[must_use]
	pub fn entries(&self) -> &[ItemEntry] {
		&self.items
	}

	/// Whether `name` names a known parameter, ignoring case.
	#[must_use]
	pub fn has_param(&self, name: &str) -> bool {
		self.params.contains_key(&fold(name))
	}

	/// Parameter names in the order they were supplied.
	pub fn param_names(&self) -> impl Iterator<Item = &str> {
		self.params.values().map(|column| column.name.as_str())
	}

	/// Value of `param` on the item at `index`.
	///
	/// Returns `None` for an unknown parameter or when the value column is
	/// shorter than the item list.
	#[must_use]
	pub fn value(&self, param: &str, index: usize) -> Option<&str> {
		self.column(param)?.get(index).map(String::as_str)
	}

	/// Like [`ItemModel::value`] but yields an empty string for missing values.
	#[must_use]
	pub fn value_or_empty(&self, param: &str, index: usize) -> &str {
		self.value(param, index).unwrap_or("")
	}

	/// Distinct values of `param`, sorted by ordinal string comparison.
	#[must_use]
	pub fn distinct_values(&self, param: &str) -> Vec<String> {
		let Some(values) = self.column(param) else {
			return Vec::new();
		};
		let mut unique = values.to_vec();
		unique.sort();
		unique.dedup();
		unique
	}

	fn column(&self, param: &str) -> Option<&[String]> {
		self.params
			.get(&fold(param))
			.map(|column| column.values.as_slice())
	}
}

/// Fold text for case-insensitive comparison.
#[must_use]
pub fn fold(text: &str) -> String {
	text.to_lowercase()
}

/// Case-insensitive equality.
#[must_use]
pub fn eq_ignore_case(left: &str, right: &str) -> bool {
	left == right || fold(left) == fold(right)
}

#[cfg(test)]
mod tests {
	use super::*;

	fn strings(values: &[&str]) -> Vec<String> {
		values.iter().map(|value| (*value).to_string()).collect()
	}

	fn kind_model() -> ItemModel {
		ItemModel::new(
			["A1", "A2", "B1", "B2"],
			[("Kind".to_string(), strings(&["a", "a", "b", "b"]))],
		)
	}

	#[test]
	fn entries_receive_stable_indices_in_input_order() {
		let model = kind_model();
		let indices: Vec<_> = model.entries().iter().map(|entry| entry.index).collect();
		assert_eq!(indices, vec![0, 1, 2, 3]);
		assert_eq!(model.text(2), "B1");
		assert_eq!(model.text(9), "");
	}

	#[test]
	fn parameter_lookup_ignores_case() {
		let model = kind_model();
		assert!(model.has_param("KIND"));
		assert_eq!(model.value("kind", 2), Some("b"));
		assert_eq!(model.param_names().collect::<Vec<_>>(), vec!["Kind"]);
	}

	#[test]
	fn short_value_column_yields_missing_values() {
		let model = ItemModel::new(
			["x", "y", "z"],
			[("Level".to_string(), vec!["L1".to_string()])],
		);
		assert_eq!(model.value("Level", 0), Some("L1"));
		assert_eq!(model.value("Level", 2), None);
		assert_eq!(model.value_or_empty("Level", 2), "");
		assert_eq!(model.value("Unknown", 0), None);
	}

	#[test]
	fn distinct_values_are_sorted_case_sensitively() {
		let model = ItemModel::new(
			["1", "2", "3", "4"],
			[("Level".to_string(), strings(&["l1", "L2", "L1", "l1"]))],
		);
		assert_eq!(model.distinct_values("level"), vec!["L1", "L2", "l1"]);
		assert!(model.distinct_values("missing").is_empty());
	}

	#[test]
	fn repeated_parameter_name_replaces_values() {
		let model = ItemModel::new(
			["a"],
			[
				("Kind".to_string(), vec!["old".to_string()]),
				("KIND".to_string(), vec!["new".to_string()]),
			],
		);
		assert_eq!(model.value("kind", 0), Some("new"));
		assert_eq!(model.param_names().count(), 1);
	}

	#[test]
	fn initialize_discards_previous_state() {
		let mut model = kind_model();
		model.initialize(["only"], Vec::<(String, Vec<String>)>::new());
		assert_eq!(model.count(), 1);
		assert!(!model.has_param("Kind"));
	}
}
