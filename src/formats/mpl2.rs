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

// @module: MPL2 codec ([start][end]text, deciseconds)

/// Milliseconds per MPL2 time unit (deciseconds)
const MSECS_PER_UNIT: i64 = 100;

// @const: MPL2 line regex
static LINE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\[(\d+)\]\[(\d+)\](.*)$").unwrap()
});

static INFO: FormatInfo = FormatInfo {
    name: "MPL2",
    extension: "txt",
    detection_pattern: r"^\[\d+\]\[\d+\].*$",
};

/// MPL2 (.txt) codec.
///
/// Positions are deciseconds. A pipe separates physical lines.
pub struct Mpl2;

impl SubtitleFormat for Mpl2 {
    fn info(&self) -> &'static FormatInfo {
        &INFO
    }

    fn open(&self, content: &str, doc: &mut Document) -> Result<()> {
        for line in content.lines() {
            let trimmed = line.trim_end();
            let Some(caps) = LINE_REGEX.captures(trimmed) else {
                if !trimmed.trim().is_empty() {
                    warn!("Skipping non-MPL2 line: {}", trimmed);
                }
                continue;
            };

            let (Ok(start_units), Ok(end_units)) =
                (caps[1].parse::<i64>(), caps[2].parse::<i64>())
            else {
                warn!("Skipping line with unusable time values: {}", trimmed);
                continue;
            };

            doc.subtitles.push(Subtitle {
                text: caps[3].replace('|', "\n"),
                start: SubtitleTime::from_msecs(start_units * MSECS_PER_UNIT),
                end: SubtitleTime::from_msecs(end_units * MSECS_PER_UNIT),
                ..Subtitle::default()
            });
        }

        if doc.subtitles.is_empty() {
            return Err(FormatError::NoEntries.into());
        }
        Ok(())
    }

    fn save(&self, doc: &Document, writer: &mut dyn Write) -> Result<()> {
        for subtitle in doc.subtitles.iter() {
            writeln!(
                writer,
                "[{}][{}]{}",
                subtitle.start.total_msecs() / MSECS_PER_UNIT,
                subtitle.end.total_msecs() / MSECS_PER_UNIT,
                subtitle.text.replace('\n', "|")
            )?;
        }
        Ok(())
    }
}
