use crate::model::{Artwork, GalleryItem};

pub mod list;
pub mod note;
pub mod remove;
pub mod save;

#[derive(Debug, Clone)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

/// Structured result of one operation: data for the UI to render plus
/// leveled messages. No strings are formatted for a terminal here.
#[derive(Debug, Default)]
pub struct CmdResult {
    pub artworks: Vec<Artwork>,
    pub items: Vec<GalleryItem>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_artworks(mut self, artworks: Vec<Artwork>) -> Self {
        self.artworks = artworks;
        self
    }

    pub fn with_items(mut self, items: Vec<GalleryItem>) -> Self {
        self.items = items;
        self
    }
}
