use std::sync::Arc;

/// A media attached to a message.
///
/// Decoding and playback belong to the host application; the bubble only
/// needs preview bytes and presentation metadata.
#[derive(Clone, Debug, Default)]
pub struct Media {
    /// Raw preview data for display.
    pub data: Arc<Vec<u8>>,
    /// Width in pixels.
    pub width: Option<u32>,
    /// Height in pixels.
    pub height: Option<u32>,
    /// Caption text.
    pub caption: Option<String>,
    /// MIME type of the data.
    pub mime_type: String,
    /// Duration in seconds (for audio/video).
    pub duration_secs: Option<u32>,
}

impl Media {
    /// Checks if this media has inline data available.
    pub fn has_data(&self) -> bool {
        !self.data.is_empty()
    }

    /// Duration formatted as `m:ss`, if known.
    pub fn duration_label(&self) -> Option<String> {
        self.duration_secs
            .map(|secs| format!("{}:{:02}", secs / 60, secs % 60))
    }
}
