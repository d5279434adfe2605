use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Envelope written to the clipboard. The outer `type` names the payload
/// kind; `Text` is the only kind produced here.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(tag = "type")]
pub enum ClipboardPayload {
    Text { text: TextBlock },
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TextKind {
    #[default]
    Text,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct TextBlock {
    #[serde(rename = "type")]
    pub kind: TextKind,
    pub id: Uuid,
    /// Source URL, exactly as given on the command line.
    pub name: String,
    /// `null` when nothing could be fetched or extracted.
    pub content: Option<String>,
}

impl ClipboardPayload {
    /// Builds a text payload under a freshly generated v4 id.
    pub fn text(url: impl Into<String>, content: Option<String>) -> Self {
        ClipboardPayload::Text {
            text: TextBlock {
                kind: TextKind::Text,
                id: Uuid::new_v4(),
                name: url.into(),
                content,
            },
        }
    }

    pub fn text_block(&self) -> &TextBlock {
        match self {
            ClipboardPayload::Text { text } => text,
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}
