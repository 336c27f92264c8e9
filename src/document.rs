use crate::subtitles::Subtitles;

// @module: Explicit document context for core operations

/// Framerate assumed for frame-based formats when the host supplies no hint
pub const DEFAULT_FRAMERATE: f64 = 25.0;

/// Whether the document expresses positions in time or in video frames
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TimingMode {
    /// Positions are millisecond times
    #[default]
    Times,
    /// Positions are video frame numbers
    Frames,
}

/// Script metadata embedded by header-carrying formats (SubViewer2)
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScriptMetadata {
    pub title: String,
    pub author: String,
    pub comment: String,
}

/// Owner of one subtitle collection plus the state codecs read.
///
/// Every core operation takes the document (or its collection) as an explicit
/// argument; there is no ambient "current document".
#[derive(Debug, Clone, Default)]
pub struct Document {
    /// The subtitle entries
    pub subtitles: Subtitles,

    /// Current timing mode; frame-based codecs switch this on open
    pub timing_mode: TimingMode,

    /// External framerate hint, when the host has one
    pub framerate: Option<f64>,

    /// Script metadata for formats that embed a header
    pub metadata: ScriptMetadata,
}

impl Document {
    /// Create an empty document in time mode
    pub fn new() -> Self {
        Self::default()
    }

    /// The framerate to use for frame/time conversion: the host hint when
    /// present, [`DEFAULT_FRAMERATE`] otherwise
    pub fn framerate_or_default(&self) -> f64 {
        self.framerate.unwrap_or(DEFAULT_FRAMERATE)
    }
}
