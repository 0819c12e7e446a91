//! Global selection set keyed by stable index.
//!
//! Membership never depends on visibility. Bulk commands only touch the
//! indices they are handed (the visible subset), so selections on hidden items
//! survive every filter and search transition.

use std::collections::BTreeSet;

/// Ordered set of selected stable indices.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionSet {
	members: BTreeSet<usize>,
}

impl SelectionSet {
	/// Empty selection.
	#[must_use]
	pub fn new() -> Self {
		Self::default()
	}

	/// Seed the selection, silently dropping indices outside `0..count`.
	#[must_use]
	pub fn from_prechecked<I>(indices: I, count: usize) -> Self
	where
		I: IntoIterator<Item = usize>,
	{
		Self {
			members: indices.into_iter().filter(|&index| index < count).collect(),
		}
	}

	/// Flip membership of a single index.
	pub fn toggle(&mut self, index: usize) {
		if !self.members.remove(&index) {
			self.members.insert(index);
		}
	}

	/// Whether `index` is selected.
	#[must_use]
	pub fn contains(&self, index: usize) -> bool {
		self.members.contains(&index)
	}

	/// Number of selected indices, hidden ones included.
	#[must_use]
	pub fn len(&self) -> usize {
		self.members.len()
	}

	/// Whether nothing is selected.
	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.members.is_empty()
	}

	/// Selected indices in ascending order.
	#[must_use]
	pub fn snapshot(&self) -> Vec<usize> {
		self.members.iter().copied().collect()
	}

	/// Replace the whole selection.
	pub fn replace<I>(&mut self, indices: I)
	where
		I: IntoIterator<Item = usize>,
	{
		self.members = indices.into_iter().collect();
	}

	/// Add every visible index.
	pub fn select_all_visible(&mut self, visible: &[usize]) {
		self.members.extend(visible.iter().copied());
	}

	/// Remove every visible index.
	pub fn select_none_visible(&mut self, visible: &[usize]) {
		for index in visible {
			self.members.remove(index);
		}
	}

	/// Flip membership of every visible index.
	pub fn invert_visible(&mut self, visible: &[usize]) {
		for &index in visible {
			self.toggle(index);
		}
	}

	/// Rewrite only the visible slice: `(self \ visible) ∪ highlighted`.
	pub fn sync_visible<I>(&mut self, visible: &[usize], highlighted: I)
	where
		I: IntoIterator<Item = usize>,
	{
		self.select_none_visible(visible);
		self.members.extend(highlighted);
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn prechecked_indices_out_of_range_are_dropped() {
		let selection = SelectionSet::from_prechecked([4, 1, 7, 0], 5);
		assert_eq!(selection.snapshot(), vec![0, 1, 4]);
	}

	#[test]
	fn bulk_commands_leave_hidden_members_alone() {
		let mut selection = SelectionSet::from_prechecked([0, 5], 10);
		let visible = [1, 2, 3];

		selection.select_all_visible(&visible);
		assert_eq!(selection.snapshot(), vec![0, 1, 2, 3, 5]);

		selection.select_none_visible(&visible);
		assert_eq!(selection.snapshot(), vec![0, 5]);

		selection.toggle(2);
		selection.invert_visible(&visible);
		assert_eq!(selection.snapshot(), vec![0, 1, 3, 5]);
	}

	#[test]
	fn bulk_commands_are_idempotent_or_involutive() {
		let visible = [0, 2, 4];
		let mut selection = SelectionSet::from_prechecked([1, 2], 6);

		let mut once = selection.clone();
		once.select_all_visible(&visible);
		let mut twice = once.clone();
		twice.select_all_visible(&visible);
		assert_eq!(once, twice);

		let mut once = selection.clone();
		once.select_none_visible(&visible);
		let mut twice = once.clone();
		twice.select_none_visible(&visible);
		assert_eq!(once, twice);

		let before = selection.clone();
		selection.invert_visible(&visible);
		selection.invert_visible(&visible);
		assert_eq!(selection, before);
	}

	#[test]
	fn sync_visible_preserves_hidden_selection() {
		let mut selection = SelectionSet::from_prechecked([0, 1, 2, 3], 4);
		selection.sync_visible(&[1, 2], [2]);
		assert_eq!(selection.snapshot(), vec![0, 2, 3]);
	}
}
