//! Host pickers available to the terminal dialogs.

use bim_dialogs_core::FilePicker;
#[cfg(not(feature = "native-dialogs"))]
use bim_dialogs_core::NoPicker;

/// Native picker when built with `native-dialogs`, otherwise one that always
/// cancels so the user types paths by hand.
#[must_use]
pub fn default_picker() -> Box<dyn FilePicker> {
	#[cfg(feature = "native-dialogs")]
	{
		Box::new(native::NativePicker)
	}
	#[cfg(not(feature = "native-dialogs"))]
	{
		Box::new(NoPicker)
	}
}

#[cfg(feature = "native-dialogs")]
pub use native::NativePicker;

#[cfg(feature = "native-dialogs")]
mod native {
	use std::path::{Path, PathBuf};

	use bim_dialogs_core::{FileFilter, FilePicker, OpenFile, SaveFile};
	use rfd::FileDialog;
	use tracing::debug;

	/// Pickers provided by the desktop through `rfd`.
	#[derive(Debug, Clone, Copy, Default)]
	pub struct NativePicker;

	fn base(title: &str, filters: &[FileFilter], directory: Option<&Path>) -> FileDialog {
		let mut dialog = FileDialog::new().set_title(title);
		for filter in filters.iter().filter(|filter| !filter.is_wildcard()) {
			dialog = dialog.add_filter(filter.label.as_str(), &filter.extensions);
		}
		if let Some(directory) = directory {
			dialog = dialog.set_directory(directory);
		}
		dialog
	}

	impl FilePicker for NativePicker {
		fn open_file(&self, request: &OpenFile) -> Option<PathBuf> {
			let picked =
				base(&request.title, &request.filters, request.initial_directory.as_deref()).pick_file();
			debug!(title = %request.title, picked = ?picked, "open picker closed");
			picked
		}

		fn save_file(&self, request: &SaveFile) -> Option<PathBuf> {
			let mut dialog =
				base(&request.title, &request.filters, request.initial_directory.as_deref());
			if !request.file_name.is_empty() {
				dialog = dialog.set_file_name(request.file_name.as_str());
			}
			let picked = dialog.save_file().map(|path| request.complete(path));
			debug!(title = %request.title, picked = ?picked, "save picker closed");
			picked
		}

		fn pick_folder(&self, title: &str, initial_directory: Option<&Path>) -> Option<PathBuf> {
			let picked = base(title, &[], initial_directory).pick_folder();
			debug!(title, picked = ?picked, "folder picker closed");
			picked
		}
	}
}
