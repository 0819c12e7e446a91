use ratatui::Frame;
use ratatui::layout::{Constraint, Layout};
use ratatui::text::Span;
use ratatui::widgets::Paragraph;

use super::{Areas, FilterSelectDialog, Focus};
use crate::components::{Heading, INPUT_HEIGHT, render_frame};

const HINTS: &str = "Tab focus  Space toggle  ^A all  ^D none  ^R invert  ^F filter  ^X clear";

impl FilterSelectDialog {
	pub(super) fn render(&mut self, frame: &mut Frame) {
		let theme = self.decorations.theme;
		let heading = Heading {
			title: &self.title,
			prompt: &self.prompt,
		};
		let body = render_frame(frame, &self.decorations, heading, &mut self.buttons, Some(0));

		let [search, filters, list, hints] = Layout::vertical([
			Constraint::Length(INPUT_HEIGHT),
			Constraint::Length(INPUT_HEIGHT),
			Constraint::Min(3),
			Constraint::Length(1),
		])
		.areas(body);
		let [parameter, value] =
			Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)]).areas(filters);
		self.areas = Areas {
			search,
			parameter,
			value,
		};

		self.search
			.render(frame, search, "Search", self.focus == Focus::Search, &theme);
		self.params.render(
			frame,
			parameter,
			"Filter parameter",
			self.focus == Focus::Parameter,
			&theme,
		);
		self.values
			.render(frame, value, "Filter value", self.focus == Focus::Value, &theme);

		let list_title = match self.pane.view().pipeline().active_filter() {
			Some(filter) => format!("Items ({} = {})", filter.parameter, filter.value),
			None => "Items".to_string(),
		};
		self.pane
			.render(frame, list, &list_title, self.focus == Focus::List, &theme);

		frame.render_widget(Paragraph::new(Span::styled(HINTS, theme.muted)), hints);
	}
}
