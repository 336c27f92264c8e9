/*!
 * Subtitle format codecs.
 *
 * Each codec translates between one on-disk text syntax and the subtitle
 * collection:
 * - `microdvd`: `{start}{end}text`, frame-based
 * - `mpl2`: `[start][end]text`, deciseconds
 * - `sbv`: time-pair header plus text block
 * - `subviewer2`: centisecond time pairs with an `[INFORMATION]` header
 * - `subrip`: SubRip (.srt)
 *
 * # Architecture
 *
 * Codecs implement [`SubtitleFormat`] and are registered in [`all`]. Format
 * auto-detection matches each format's signature regex against the file
 * content, first match in registry order wins. Malformed lines are skipped
 * with a warning, never escalated to a whole-file failure.
 */

pub mod microdvd;
pub mod mpl2;
pub mod sbv;
pub mod subrip;
pub mod subviewer2;

use std::io::Write;
use std::path::Path;

use anyhow::Result;
use log::{debug, warn};
use regex::Regex;

use crate::document::Document;
use crate::errors::FormatError;
use crate::file_utils::FileManager;

pub use microdvd::MicroDvd;
pub use mpl2::Mpl2;
pub use sbv::Sbv;
pub use subrip::SubRip;
pub use subviewer2::SubViewer2;

/// Static metadata describing one format
#[derive(Debug, Clone, Copy)]
pub struct FormatInfo {
    /// Display name
    pub name: &'static str,

    /// Default file extension, without the dot
    pub extension: &'static str,

    /// Signature regex; a file belongs to this format when any line matches
    pub detection_pattern: &'static str,
}

/// Parse/serialize pair for one subtitle format
pub trait SubtitleFormat {
    /// Static format metadata
    fn info(&self) -> &'static FormatInfo;

    /// Parse `content` and populate the document's collection.
    ///
    /// Leading noise and isolated malformed lines are skipped; a file that
    /// yields no entries at all is a hard failure.
    fn open(&self, content: &str, doc: &mut Document) -> Result<()>;

    /// Serialize every subtitle in document order into the target grammar
    fn save(&self, doc: &Document, writer: &mut dyn Write) -> Result<()>;
}

/// All registered codecs, in detection-priority order
pub fn all() -> Vec<Box<dyn SubtitleFormat>> {
    vec![
        Box::new(MicroDvd),
        Box::new(Mpl2),
        Box::new(SubViewer2),
        Box::new(Sbv),
        Box::new(SubRip),
    ]
}

/// Look up a codec by its display name
pub fn by_name(name: &str) -> Option<Box<dyn SubtitleFormat>> {
    all().into_iter().find(|f| f.info().name == name)
}

/// Detect the format of `content` by signature regex.
///
/// Each registered format is tried in order; the first whose signature
/// matches any line wins. The extension is advisory only and plays no part
/// here.
pub fn detect(content: &str) -> Option<Box<dyn SubtitleFormat>> {
    for format in all() {
        let pattern = format.info().detection_pattern;
        let regex = match Regex::new(pattern) {
            Ok(regex) => regex,
            Err(e) => {
                warn!("Unusable detection pattern for {}: {}", format.info().name, e);
                continue;
            }
        };
        if content.lines().any(|line| regex.is_match(line)) {
            debug!("Detected format {}", format.info().name);
            return Some(format);
        }
    }
    None
}

/// Read a file, detect its format and parse it into a fresh document
pub fn open_document<P: AsRef<Path>>(path: P) -> Result<Document> {
    let content = FileManager::read_to_string(&path)?;
    let format = detect(&content).ok_or(FormatError::UnknownFormat)?;

    let mut doc = Document::new();
    format.open(&content, &mut doc)?;
    Ok(doc)
}

/// Serialize a document with the named codec and write it to a file
pub fn save_document<P: AsRef<Path>>(path: P, doc: &Document, format_name: &str) -> Result<()> {
    let format = by_name(format_name).ok_or(FormatError::UnknownFormat)?;

    let mut buffer = Vec::new();
    format.save(doc, &mut buffer)?;
    FileManager::write_to_file(&path, &String::from_utf8_lossy(&buffer))
}
