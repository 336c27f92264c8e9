use std::io::Write;

use anyhow::Result;
use log::warn;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::document::Document;
use crate::errors::FormatError;
use crate::formats::{FormatInfo, SubtitleFormat};
use crate::subtitle_time::SubtitleTime;
use crate::subtitles::Subtitle;

// @module: SBV codec (time-pair header plus text block)

// @const: SBV header line regex (two canonical times separated by a comma)
static HEADER_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(\d+:[0-5]\d:[0-5]\d\.\d{3}),(\d+:[0-5]\d:[0-5]\d\.\d{3})\s*$").unwrap()
});

static INFO: FormatInfo = FormatInfo {
    name: "SBV",
    extension: "sbv",
    detection_pattern: r"^\d+:[0-5]\d:[0-5]\d\.\d{3},\d+:[0-5]\d:[0-5]\d\.\d{3}\s*$",
};

/// SBV (.sbv) codec.
///
/// A block is a `start,end` header line followed by text lines; a blank line
/// terminates the block. Millisecond precision, no style tags; multi-line
/// text is preserved verbatim.
pub struct Sbv;

impl SubtitleFormat for Sbv {
    fn info(&self) -> &'static FormatInfo {
        &INFO
    }

    fn open(&self, content: &str, doc: &mut Document) -> Result<()> {
        let mut current: Option<Subtitle> = None;

        for line in content.lines() {
            let trimmed = line.trim_end();

            if trimmed.trim().is_empty() {
                // Blank line terminates the open block
                if let Some(subtitle) = current.take() {
                    doc.subtitles.push(subtitle);
                }
                continue;
            }

            if let Some(caps) = HEADER_REGEX.captures(trimmed) {
                if let Some(subtitle) = current.take() {
                    doc.subtitles.push(subtitle);
                }
                // The header grammar is the canonical time grammar, so these
                // parses cannot fail once the regex matched
                current = Some(Subtitle {
                    start: SubtitleTime::parse(&caps[1])?,
                    end: SubtitleTime::parse(&caps[2])?,
                    ..Subtitle::default()
                });
                continue;
            }

            match current.as_mut() {
                Some(subtitle) => {
                    if !subtitle.text.is_empty() {
                        subtitle.text.push('\n');
                    }
                    subtitle.text.push_str(trimmed);
                }
                None => warn!("Skipping text before any SBV header: {}", trimmed),
            }
        }

        if let Some(subtitle) = current.take() {
            doc.subtitles.push(subtitle);
        }

        if doc.subtitles.is_empty() {
            return Err(FormatError::NoEntries.into());
        }
        Ok(())
    }

    fn save(&self, doc: &Document, writer: &mut dyn Write) -> Result<()> {
        for subtitle in doc.subtitles.iter() {
            writeln!(writer, "{},{}", subtitle.start, subtitle.end)?;
            writeln!(writer, "{}", subtitle.text)?;
            writeln!(writer)?;
        }
        Ok(())
    }
}
