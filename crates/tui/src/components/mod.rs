//! Widgets shared by the dialogs.

pub mod buttons;
pub mod check;
pub mod checklist;
pub mod choice;
pub mod frame;
pub mod input;
pub mod logo;
pub mod path;
pub mod radio;
pub mod scrollbar;

pub use buttons::ButtonBar;
pub use check::CheckBox;
pub use checklist::ChecklistPane;
pub use choice::Choice;
pub use frame::{Decorations, Heading, render_frame};
pub use input::{INPUT_HEIGHT, LineInput};
pub use logo::Logo;
pub use path::PathField;
pub use radio::RadioGroup;
pub use scrollbar::{ScrollMetrics, point_in_rect, render_scrollbar};
