pub mod clipboard;
pub mod extract;
pub mod fetch;
pub mod payload;
pub mod pipeline;

pub use clipboard::{ClipboardSink, SystemClipboard};
pub use extract::{Extract, ReadabilityExtractor};
pub use fetch::{Fetch, HttpFetcher};
pub use payload::{ClipboardPayload, TextBlock};
