use crate::clipboard::{self, ClipboardSink};
use crate::extract::Extract;
use crate::fetch::Fetch;
use crate::payload::ClipboardPayload;
use log::info;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("failed to serialize payload")]
    Serialize(#[from] serde_json::Error),

    #[error(transparent)]
    Clipboard(#[from] clipboard::Error),
}

/// Fetches `url`, extracts its text and writes the resulting payload to
/// `sink`. Fetch and extraction failures end up as `null` content; only the
/// clipboard write can fail the run.
pub fn run<F, E, C>(
    url: &str,
    fetcher: &F,
    extractor: &E,
    sink: &C,
) -> Result<ClipboardPayload, Error>
where
    F: Fetch + ?Sized,
    E: Extract + ?Sized,
    C: ClipboardSink + ?Sized,
{
    let raw = fetcher.fetch(url);
    let content = extractor.extract(raw.as_deref());
    if content.is_none() {
        info!("no text extracted from {url}");
    }

    let payload = ClipboardPayload::text(url, content);
    let json = payload.to_json()?;
    sink.copy_to_clipboard(&json)?;
    info!("copied payload {}", payload.text_block().id);

    Ok(payload)
}
