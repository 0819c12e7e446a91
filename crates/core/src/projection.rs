//! Projection of the visible subset into a list control.
//!
//! [`SelectionView`] owns the item model, the filter pipeline, and the global
//! selection set, and keeps a [`ListControl`] in step with them. List
//! controls report highlight changes through [`ListEvent`]s, including the
//! ones caused by programmatic repopulation; those are swallowed while a
//! repaint is in progress so the selection set is never rebuilt from a
//! half-filled list.

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use thiserror::Error;
use tracing::{debug, trace};

use crate::model::{ItemEntry, ItemModel};
use crate::pipeline::FilterPipeline;
use crate::results::FilterSelection;
use crate::selection::SelectionSet;

/// Notification emitted by a [`ListControl`] when its highlighting may have
/// changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListEvent {
	/// Highlighted rows changed, or might have.
	SelectionChanged,
}

/// Seam between the selection state and a concrete list widget.
///
/// Rows are addressed by their position in the control; each row carries the
/// stable index of the entry it shows.
pub trait ListControl {
	/// Remove every row.
	fn clear(&mut self) -> Option<ListEvent>;

	/// Append a row for `entry`.
	fn push(&mut self, entry: &ItemEntry) -> Option<ListEvent>;

	/// Mark or unmark a row as highlighted.
	fn set_highlighted(&mut self, row: usize, highlighted: bool) -> Option<ListEvent>;

	/// Whether `row` is highlighted.
	fn is_highlighted(&self, row: usize) -> bool;

	/// Stable index shown in each row, in row order.
	fn row_indices(&self) -> &[usize];

	/// Stable indices of highlighted rows.
	fn highlighted_indices(&self) -> Vec<usize>;

	/// Flip the highlight of a row.
	fn toggle_row(&mut self, row: usize) -> Option<ListEvent> {
		let highlighted = self.is_highlighted(row);
		self.set_highlighted(row, !highlighted)
	}
}

/// In-memory list control backing the terminal list widget.
#[derive(Debug, Clone, Default)]
pub struct ListRows {
	rows: Vec<usize>,
	highlighted: BTreeSet<usize>,
	cursor: usize,
}

impl ListRows {
	/// Empty control.
	#[must_use]
	pub fn new() -> Self {
		Self::default()
	}

	/// Number of rows.
	#[must_use]
	pub fn len(&self) -> usize {
		self.rows.len()
	}

	/// Whether the control shows no rows.
	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.rows.is_empty()
	}

	/// Stable index shown in `row`.
	#[must_use]
	pub fn index_at(&self, row: usize) -> Option<usize> {
		self.rows.get(row).copied()
	}

	/// Row under the keyboard cursor. Always `0` for an empty list.
	#[must_use]
	pub fn cursor(&self) -> usize {
		self.cursor.min(self.rows.len().saturating_sub(1))
	}

	/// Place the cursor, clamped to the last row.
	pub fn set_cursor(&mut self, row: usize) {
		self.cursor = row.min(self.rows.len().saturating_sub(1));
	}

	/// Move the cursor by `delta` rows, clamped to the list.
	pub fn move_cursor(&mut self, delta: isize) {
		let target = self.cursor().saturating_add_signed(delta);
		self.set_cursor(target);
	}
}

impl ListControl for ListRows {
	fn clear(&mut self) -> Option<ListEvent> {
		self.rows.clear();
		self.highlighted.clear();
		Some(ListEvent::SelectionChanged)
	}

	fn push(&mut self, entry: &ItemEntry) -> Option<ListEvent> {
		self.rows.push(entry.index);
		Some(ListEvent::SelectionChanged)
	}

	fn set_highlighted(&mut self, row: usize, highlighted: bool) -> Option<ListEvent> {
		if row >= self.rows.len() {
			return None;
		}
		let changed = if highlighted {
			self.highlighted.insert(row)
		} else {
			self.highlighted.remove(&row)
		};
		changed.then_some(ListEvent::SelectionChanged)
	}

	fn is_highlighted(&self, row: usize) -> bool {
		self.highlighted.contains(&row)
	}

	fn row_indices(&self) -> &[usize] {
		&self.rows
	}

	fn highlighted_indices(&self) -> Vec<usize> {
		self.highlighted
			.iter()
			.filter_map(|&row| self.rows.get(row).copied())
			.collect()
	}
}

/// Lifecycle of one dialog instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DialogPhase {
	/// Constructed, not yet given items.
	#[default]
	Uninitialized,
	/// Accepting gestures.
	Ready,
	/// Closed with OK; the result is readable.
	Committed,
	/// Closed with Cancel; there is no result.
	Dismissed,
}

/// The "`s` selected | `v` visible | `n` total" readout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CountReadout {
	/// Size of the global selection, hidden members included.
	pub selected: usize,
	/// Rows currently shown.
	pub visible: usize,
	/// Items in the model.
	pub total: usize,
}

impl fmt::Display for CountReadout {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(
			f,
			"{} selected | {} visible | {} total",
			self.selected, self.visible, self.total
		)
	}
}

/// Failure to read a [`CountReadout`] back from text.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("malformed count readout: {0:?}")]
pub struct ParseReadoutError(String);

impl FromStr for CountReadout {
	type Err = ParseReadoutError;

	fn from_str(text: &str) -> Result<Self, Self::Err> {
		let malformed = || ParseReadoutError(text.to_string());
		let mut parts = text.split(" | ");
		let mut field = |suffix: &str| -> Result<usize, ParseReadoutError> {
			parts
				.next()
				.and_then(|part| part.strip_suffix(suffix))
				.and_then(|number| number.parse().ok())
				.ok_or_else(malformed)
		};
		let readout = Self {
			selected: field(" selected")?,
			visible: field(" visible")?,
			total: field(" total")?,
		};
		if parts.next().is_some() {
			return Err(malformed());
		}
		Ok(readout)
	}
}

/// Item model, filter pipeline, and selection projected onto a list control.
#[derive(Debug, Clone)]
pub struct SelectionView<L = ListRows> {
	model: ItemModel,
	pipeline: FilterPipeline,
	selection: SelectionSet,
	list: L,
	updating: bool,
	phase: DialogPhase,
	readout: CountReadout,
}

impl SelectionView<ListRows> {
	/// Build a ready view over `model` with the given indices pre-selected.
	#[must_use]
	pub fn new<I>(model: ItemModel, prechecked: I) -> Self
	where
		I: IntoIterator<Item = usize>,
	{
		let mut view = Self::with_list(ListRows::new());
		view.initialize(model, prechecked);
		view
	}
}

impl SelectionView<ListRows> {
	/// Row under the keyboard cursor.
	#[must_use]
	pub fn cursor(&self) -> usize {
		self.list.cursor()
	}

	/// Move the keyboard cursor; highlighting is unaffected.
	pub fn move_cursor(&mut self, delta: isize) {
		self.list.move_cursor(delta);
	}

	/// Place the keyboard cursor; highlighting is unaffected.
	pub fn set_cursor(&mut self, row: usize) {
		self.list.set_cursor(row);
	}

	/// User gesture: toggle the row under the cursor.
	pub fn toggle_cursor_row(&mut self) {
		let row = self.list.cursor();
		self.toggle_row(row);
	}
}

impl Default for SelectionView<ListRows> {
	fn default() -> Self {
		Self::with_list(ListRows::new())
	}
}

impl<L: ListControl> SelectionView<L> {
	/// Wrap a list control. The view stays uninitialised until
	/// [`SelectionView::initialize`] is called.
	pub fn with_list(list: L) -> Self {
		Self {
			model: ItemModel::default(),
			pipeline: FilterPipeline::default(),
			selection: SelectionSet::new(),
			list,
			updating: false,
			phase: DialogPhase::Uninitialized,
			readout: CountReadout::default(),
		}
	}

	/// Replace all state and show every item.
	///
	/// Pre-selected indices outside the item range are dropped.
	pub fn initialize<I>(&mut self, model: ItemModel, prechecked: I)
	where
		I: IntoIterator<Item = usize>,
	{
		self.selection = SelectionSet::from_prechecked(prechecked, model.count());
		self.pipeline = FilterPipeline::new(&model);
		self.model = model;
		self.phase = DialogPhase::Ready;
		debug!(
			total = self.model.count(),
			selected = self.selection.len(),
			"selection view initialised"
		);
		self.repaint();
	}

	/// Item model backing the view.
	pub fn model(&self) -> &ItemModel {
		&self.model
	}

	/// Current filter and search state.
	pub fn pipeline(&self) -> &FilterPipeline {
		&self.pipeline
	}

	/// Global selection set.
	pub fn selection(&self) -> &SelectionSet {
		&self.selection
	}

	/// The list control, for rendering.
	pub fn list(&self) -> &L {
		&self.list
	}

	/// Lifecycle phase.
	pub fn phase(&self) -> DialogPhase {
		self.phase
	}

	/// Whether a repaint is in progress.
	pub fn is_updating(&self) -> bool {
		self.updating
	}

	/// Current count readout.
	pub fn readout(&self) -> CountReadout {
		self.readout
	}

	/// Stable indices currently shown.
	pub fn visible(&self) -> &[usize] {
		self.list.row_indices()
	}

	/// Selection in ascending stable-index order.
	pub fn snapshot(&self) -> Vec<usize> {
		self.selection.snapshot()
	}

	/// Distinct, sorted values offered for `parameter`.
	pub fn value_options(&self, parameter: &str) -> Vec<String> {
		self.model.distinct_values(parameter)
	}

	/// Apply a parameter=value filter. See [`FilterPipeline::set_filter`].
	pub fn apply_filter(&mut self, parameter: &str, value: Option<&str>) -> bool {
		if !self.is_ready() {
			return false;
		}
		let active = self.pipeline.set_filter(&self.model, parameter, value);
		debug!(parameter, ?value, active, "filter applied");
		self.repaint();
		active
	}

	/// Drop the parameter filter, keeping the search term.
	pub fn clear_filter(&mut self) {
		if !self.is_ready() {
			return;
		}
		self.pipeline.clear_filter(&self.model);
		debug!("filter cleared");
		self.repaint();
	}

	/// Replace the search term.
	pub fn set_search(&mut self, term: &str) {
		if !self.is_ready() {
			return;
		}
		self.pipeline.set_search(&self.model, term);
		self.repaint();
	}

	/// User gesture: flip the highlight of a shown row.
	pub fn toggle_row(&mut self, row: usize) {
		if !self.is_ready() {
			return;
		}
		if let Some(event) = self.list.toggle_row(row) {
			self.handle_list_event(event);
		}
	}

	/// User gesture: highlight or unhighlight a shown row.
	pub fn set_row_highlighted(&mut self, row: usize, highlighted: bool) {
		if !self.is_ready() {
			return;
		}
		if let Some(event) = self.list.set_highlighted(row, highlighted) {
			self.handle_list_event(event);
		}
	}

	/// Select every shown item; hidden selections are untouched.
	pub fn select_all_visible(&mut self) {
		self.bulk(SelectionSet::select_all_visible);
	}

	/// Deselect every shown item; hidden selections are untouched.
	pub fn select_none_visible(&mut self) {
		self.bulk(SelectionSet::select_none_visible);
	}

	/// Flip every shown item; hidden selections are untouched.
	pub fn invert_visible(&mut self) {
		self.bulk(SelectionSet::invert_visible);
	}

	/// Replace the whole selection, hidden members included.
	pub fn replace_selection<I>(&mut self, indices: I)
	where
		I: IntoIterator<Item = usize>,
	{
		if !self.is_ready() {
			return;
		}
		let count = self.model.count();
		self.selection
			.replace(indices.into_iter().filter(|&index| index < count));
		self.repaint();
	}

	/// Sync the selection set from the list's highlighted rows.
	///
	/// Ignored while a repaint is in progress. Only the visible slice of the
	/// selection is rewritten.
	pub fn handle_list_event(&mut self, event: ListEvent) {
		if Self::dispatch(self.updating, Some(event), &self.list, &mut self.selection) {
			trace!("list event suppressed during repaint");
			return;
		}
		self.refresh_readout();
	}

	/// Close with OK and produce the result record.
	pub fn commit(&mut self) -> Option<FilterSelection> {
		if !self.is_ready() {
			return None;
		}
		self.phase = DialogPhase::Committed;
		self.result()
	}

	/// Close with Cancel.
	pub fn dismiss(&mut self) {
		if self.is_ready() {
			self.phase = DialogPhase::Dismissed;
		}
	}

	/// The committed result, if the dialog was closed with OK.
	pub fn result(&self) -> Option<FilterSelection> {
		if self.phase != DialogPhase::Committed {
			return None;
		}
		let (parameter, value) = self
			.pipeline
			.active_filter()
			.map(|filter| (filter.parameter.clone(), filter.value.clone()))
			.unwrap_or_default();
		Some(FilterSelection {
			selected_indices: self.selection.snapshot(),
			filter_parameter: parameter,
			filter_value: value,
		})
	}

	fn is_ready(&self) -> bool {
		self.phase == DialogPhase::Ready
	}

	fn bulk(&mut self, op: fn(&mut SelectionSet, &[usize])) {
		if !self.is_ready() {
			return;
		}
		op(&mut self.selection, self.list.row_indices());
		self.repaint();
	}

	/// Repopulate the list from the visible subset and re-apply highlighting.
	fn repaint(&mut self) {
		let Self {
			model,
			pipeline,
			selection,
			list,
			updating,
			..
		} = self;

		*updating = true;
		let mut suppressed = 0usize;

		let event = list.clear();
		suppressed += usize::from(Self::dispatch(*updating, event, list, selection));

		for &index in pipeline.visible() {
			if let Some(entry) = model.entry(index) {
				let event = list.push(entry);
				suppressed += usize::from(Self::dispatch(*updating, event, list, selection));
			}
		}

		let marked: Vec<usize> = list
			.row_indices()
			.iter()
			.enumerate()
			.filter(|(_, index)| selection.contains(**index))
			.map(|(row, _)| row)
			.collect();
		for row in marked {
			let event = list.set_highlighted(row, true);
			suppressed += usize::from(Self::dispatch(*updating, event, list, selection));
		}

		*updating = false;
		trace!(suppressed, rows = list.row_indices().len(), "repaint finished");
		self.refresh_readout();
	}

	/// Route a list event to the selection set. Returns `true` when the event
	/// was suppressed by the repaint guard.
	fn dispatch(
		updating: bool,
		event: Option<ListEvent>,
		list: &L,
		selection: &mut SelectionSet,
	) -> bool {
		let Some(ListEvent::SelectionChanged) = event else {
			return false;
		};
		if updating {
			return true;
		}
		selection.sync_visible(list.row_indices(), list.highlighted_indices());
		false
	}

	fn refresh_readout(&mut self) {
		self.readout = CountReadout {
			selected: self.selection.len(),
			visible: self.list.row_indices().len(),
			total: self.model.count(),
		};
	}
}
