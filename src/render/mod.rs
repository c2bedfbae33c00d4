//! Turning a resolved report into what the results panel shows

pub mod clipboard;
pub mod format;
mod report;

pub use clipboard::{clipboard_text, Clipboard, SystemClipboard};
pub use format::{age_text, explorer_url, format_address, format_date, group_thousands};
pub use report::{classify_score, render_report, RenderedReport};
