//! Two-stage filter/search transform producing the visible subset.
//!
//! Stage one keeps items whose value for the active parameter equals the
//! chosen value (ignoring case). Stage two keeps items whose text contains the
//! trimmed search term (ignoring case). Both stages preserve stable-index
//! order; nothing here ever sorts items.

use crate::model::{ItemModel, eq_ignore_case, fold};

/// The single parameter=value pair restricting the item list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActiveFilter {
	/// Parameter name as chosen by the user.
	pub parameter: String,
	/// Value the parameter must equal, ignoring case.
	pub value: String,
}

/// Filtered and visible subsets of an [`ItemModel`], stored as stable indices.
#[derive(Debug, Clone, Default)]
pub struct FilterPipeline {
	filter: Option<ActiveFilter>,
	search: String,
	filtered: Vec<usize>,
	visible: Vec<usize>,
}

impl FilterPipeline {
	/// Start with no filter and no search: every item is visible.
	#[must_use]
	pub fn new(model: &ItemModel) -> Self {
		let mut pipeline = Self::default();
		pipeline.recompute(model);
		pipeline
	}

	/// Restrict the list to items whose `parameter` equals `value`.
	///
	/// An unknown or blank parameter, or a missing value, clears the filter
	/// instead. Returns whether a filter is active afterwards.
	pub fn set_filter(&mut self, model: &ItemModel, parameter: &str, value: Option<&str>) -> bool {
		let known = !parameter.trim().is_empty() && model.has_param(parameter);
		match value {
			Some(value) if known => {
				self.filter = Some(ActiveFilter {
					parameter: parameter.to_string(),
					value: value.to_string(),
				});
			}
			_ => self.filter = None,
		}
		self.recompute(model);
		self.filter.is_some()
	}

	/// Drop the parameter filter. The search term is kept.
	pub fn clear_filter(&mut self, model: &ItemModel) {
		self.filter = None;
		self.recompute(model);
	}

	/// Replace the search term. Surrounding whitespace is ignored.
	pub fn set_search(&mut self, model: &ItemModel, term: &str) {
		let trimmed = term.trim();
		if trimmed == self.search {
			return;
		}
		self.search = trimmed.to_string();
		self.recompute_visible(model);
	}

	/// Active filter, if any.
	#[must_use]
	pub fn active_filter(&self) -> Option<&ActiveFilter> {
		self.filter.as_ref()
	}

	/// Current trimmed search term.
	#[must_use]
	pub fn search_term(&self) -> &str {
		&self.search
	}

	/// Stable indices passing the parameter filter.
	#[must_use]
	pub fn filtered(&self) -> &[usize] {
		&self.filtered
	}

	/// Stable indices passing both filter and search.
	#[must_use]
	pub fn visible(&self) -> &[usize] {
		&self.visible
	}

	/// Recompute both stages from scratch.
	pub fn recompute(&mut self, model: &ItemModel) {
		self.filtered = match &self.filter {
			Some(filter) => model
				.entries()
				.iter()
				.filter(|entry| {
					model
						.value(&filter.parameter, entry.index)
						.is_some_and(|value| eq_ignore_case(value, &filter.value))
				})
				.map(|entry| entry.index)
				.collect(),
			None => (0..model.count()).collect(),
		};
		self.recompute_visible(model);
	}

	fn recompute_visible(&mut self, model: &ItemModel) {
		if self.search.is_empty() {
			self.visible.clone_from(&self.filtered);
			return;
		}

		let needle = fold(&self.search);
		self.visible = self
			.filtered
			.iter()
			.copied()
			.filter(|&index| {
				model
					.entry(index)
					.is_some_and(|entry| entry.contains_folded(&needle))
			})
			.collect();
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn strings(values: &[&str]) -> Vec<String> {
		values.iter().map(|value| (*value).to_string()).collect()
	}

	fn doors() -> ItemModel {
		ItemModel::new(
			["Door 01", "Door 02", "Window 01", "Wall"],
			[("Level".to_string(), strings(&["L1", "l1", "L2", "L1"]))],
		)
	}

	#[test]
	fn no_filter_shows_everything_in_order() {
		let model = doors();
		let pipeline = FilterPipeline::new(&model);
		assert_eq!(pipeline.filtered(), &[0, 1, 2, 3]);
		assert_eq!(pipeline.visible(), &[0, 1, 2, 3]);
	}

	#[test]
	fn filter_value_matches_without_case() {
		let model = doors();
		let mut pipeline = FilterPipeline::new(&model);
		assert!(pipeline.set_filter(&model, "level", Some("L1")));
		assert_eq!(pipeline.visible(), &[0, 1, 3]);
		assert_eq!(
			pipeline.active_filter(),
			Some(&ActiveFilter {
				parameter: "level".into(),
				value: "L1".into(),
			})
		);
	}

	#[test]
	fn search_narrows_filtered_subset() {
		let model = doors();
		let mut pipeline = FilterPipeline::new(&model);
		pipeline.set_filter(&model, "Level", Some("l1"));
		pipeline.set_search(&model, "  DOOR ");
		assert_eq!(pipeline.search_term(), "DOOR");
		assert_eq!(pipeline.filtered(), &[0, 1, 3]);
		assert_eq!(pipeline.visible(), &[0, 1]);
	}

	#[test]
	fn whitespace_search_is_no_restriction() {
		let model = doors();
		let mut pipeline = FilterPipeline::new(&model);
		pipeline.set_search(&model, "   ");
		assert_eq!(pipeline.visible(), &[0, 1, 2, 3]);
	}

	#[test]
	fn unknown_parameter_behaves_as_no_filter() {
		let model = doors();
		let mut pipeline = FilterPipeline::new(&model);
		pipeline.set_filter(&model, "Level", Some("L2"));
		assert!(!pipeline.set_filter(&model, "Phase", Some("L1")));
		assert!(pipeline.active_filter().is_none());
		assert_eq!(pipeline.visible(), &[0, 1, 2, 3]);
	}

	#[test]
	fn missing_value_clears_filter() {
		let model = doors();
		let mut pipeline = FilterPipeline::new(&model);
		pipeline.set_filter(&model, "Level", Some("L2"));
		assert!(!pipeline.set_filter(&model, "Level", None));
		assert_eq!(pipeline.visible().len(), 4);
	}

	#[test]
	fn clearing_filter_keeps_search() {
		let model = doors();
		let mut pipeline = FilterPipeline::new(&model);
		pipeline.set_filter(&model, "Level", Some("L2"));
		pipeline.set_search(&model, "01");
		assert_eq!(pipeline.visible(), &[2]);
		pipeline.clear_filter(&model);
		assert_eq!(pipeline.search_term(), "01");
		assert_eq!(pipeline.visible(), &[0, 2]);
	}

	#[test]
	fn short_value_column_never_matches_missing_positions() {
		let model = ItemModel::new(["a", "b", "c"], [("P".to_string(), strings(&["", ""]))]);
		let mut pipeline = FilterPipeline::new(&model);
		pipeline.set_filter(&model, "P", Some(""));
		assert_eq!(pipeline.visible(), &[0, 1]);
	}
}
