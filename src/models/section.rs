//! Section descriptors: the intermediate representation the renderer walks.

use serde::Serialize;

use crate::models::ChartSpec;

/// One titled or untitled block of the document, in page order.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Section {
    /// Page title followed by the introduction
    Header {
        title: String,
        icon: Option<String>,
        blocks: Vec<Block>,
    },
    /// Always-visible content
    Text { blocks: Vec<Block> },
    /// Independently collapsible panel
    Collapsible {
        title: String,
        expanded: bool,
        blocks: Vec<Block>,
    },
}

impl Section {
    pub fn blocks(&self) -> &[Block] {
        match self {
            Section::Header { blocks, .. }
            | Section::Text { blocks }
            | Section::Collapsible { blocks, .. } => blocks,
        }
    }
}

/// One content item inside a section.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Block {
    /// CommonMark text
    Markdown { text: String },
    /// Highlighted notice box; `text` is CommonMark
    Callout {
        level: CalloutLevel,
        icon: Option<String>,
        text: String,
    },
    Subheading { text: String },
    Divider,
    Image(ImageRef),
    /// Images laid out side by side
    Columns { images: Vec<ImageRef> },
    Chart(ChartSpec),
}

impl Block {
    pub fn markdown(text: impl Into<String>) -> Self {
        Block::Markdown { text: text.into() }
    }

    pub fn warning(icon: &str, text: impl Into<String>) -> Self {
        Block::Callout {
            level: CalloutLevel::Warning,
            icon: Some(icon.to_string()),
            text: text.into(),
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Block::Callout {
            level: CalloutLevel::Error,
            icon: None,
            text: text.into(),
        }
    }

    pub fn subheading(text: impl Into<String>) -> Self {
        Block::Subheading { text: text.into() }
    }

    pub fn image(file: impl Into<String>, caption: impl Into<String>) -> Self {
        Block::Image(ImageRef::new(file, caption))
    }
}

/// Severity of a callout box
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CalloutLevel {
    Warning,
    Error,
}

impl CalloutLevel {
    pub fn css_class(self) -> &'static str {
        match self {
            CalloutLevel::Warning => "callout-warning",
            CalloutLevel::Error => "callout-error",
        }
    }
}

/// Reference to an already-encoded image in the image store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ImageRef {
    /// File name inside the image store
    pub file: String,
    pub caption: String,
}

impl ImageRef {
    pub fn new(file: impl Into<String>, caption: impl Into<String>) -> Self {
        Self {
            file: file.into(),
            caption: caption.into(),
        }
    }

    /// MIME type guessed from the file extension
    pub fn mime_type(&self) -> &'static str {
        let ext = self
            .file
            .rsplit_once('.')
            .map(|(_, ext)| ext.to_ascii_lowercase())
            .unwrap_or_default();
        match ext.as_str() {
            "jpg" | "jpeg" => "image/jpeg",
            "png" => "image/png",
            "gif" => "image/gif",
            "webp" => "image/webp",
            "svg" => "image/svg+xml",
            _ => "application/octet-stream",
        }
    }
}
