//! Word-picking services.

mod picker;

pub use picker::WordPicker;
