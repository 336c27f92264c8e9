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

// @module: SubViewer2 codec (centisecond time pairs with metadata header)

// @const: SubViewer2 time line regex (HH:MM:SS.CC,HH:MM:SS.CC)
static TIME_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(\d{2}):([0-5]\d):([0-5]\d)\.(\d{2}),(\d{2}):([0-5]\d):([0-5]\d)\.(\d{2})\s*$")
        .unwrap()
});

static INFO: FormatInfo = FormatInfo {
    name: "SubViewer2",
    extension: "sub",
    detection_pattern: r"^\d{2}:[0-5]\d:[0-5]\d\.\d{2},\d{2}:[0-5]\d:[0-5]\d\.\d{2}\s*$",
};

/// SubViewer2 (.sub) codec.
///
/// Centisecond precision: each block is one time line followed by exactly one
/// text line with `[br]` separating physical lines. Save emits the
/// `[INFORMATION]` header carrying the document metadata; open treats the
/// header as noise.
pub struct SubViewer2;

impl SubtitleFormat for SubViewer2 {
    fn info(&self) -> &'static FormatInfo {
        &INFO
    }

    fn open(&self, content: &str, doc: &mut Document) -> Result<()> {
        let mut pending: Option<(SubtitleTime, SubtitleTime)> = None;

        for line in content.lines() {
            let trimmed = line.trim_end();

            if let Some(caps) = TIME_REGEX.captures(trimmed) {
                if pending.is_some() {
                    // The previous block never got its text line
                    warn!("Skipping SubViewer2 block without a text line");
                }
                pending = Some((centi_time(&caps, 1), centi_time(&caps, 5)));
                continue;
            }

            if let Some((start, end)) = pending.take() {
                doc.subtitles.push(Subtitle {
                    text: trimmed.replace("[br]", "\n"),
                    start,
                    end,
                    ..Subtitle::default()
                });
            }
            // Anything else is header or noise; skip silently
        }

        if pending.is_some() {
            warn!("Skipping SubViewer2 block without a text line");
        }

        if doc.subtitles.is_empty() {
            return Err(FormatError::NoEntries.into());
        }
        Ok(())
    }

    fn save(&self, doc: &Document, writer: &mut dyn Write) -> Result<()> {
        writeln!(writer, "[INFORMATION]")?;
        writeln!(writer, "[TITLE]{}", doc.metadata.title)?;
        writeln!(writer, "[AUTHOR]{}", doc.metadata.author)?;
        writeln!(writer, "[SOURCE]")?;
        writeln!(writer, "[PRG]")?;
        writeln!(writer, "[FILEPATH]")?;
        writeln!(writer, "[DELAY]0")?;
        writeln!(writer, "[CD TRACK]0")?;
        writeln!(writer, "[COMMENT]{}", doc.metadata.comment)?;
        writeln!(writer, "[END INFORMATION]")?;
        writeln!(writer, "[SUBTITLE]")?;
        writeln!(writer, "[COLF]&HFFFFFF,[STYLE]no,[SIZE]18,[FONT]Arial")?;

        for subtitle in doc.subtitles.iter() {
            writeln!(
                writer,
                "{},{}",
                format_centi(subtitle.start),
                format_centi(subtitle.end)
            )?;
            writeln!(writer, "{}", subtitle.text.replace('\n', "[br]"))?;
            writeln!(writer)?;
        }
        Ok(())
    }
}

/// Read one HH:MM:SS.CC capture group run starting at `first`
fn centi_time(caps: &regex::Captures, first: usize) -> SubtitleTime {
    // The grammar guarantees two-digit groups, parses cannot fail
    let hours: i64 = caps[first].parse().unwrap();
    let minutes: i64 = caps[first + 1].parse().unwrap();
    let seconds: i64 = caps[first + 2].parse().unwrap();
    let centis: i64 = caps[first + 3].parse().unwrap();

    SubtitleTime::from_components(hours, minutes, seconds, centis * 10)
}

/// Format a time as HH:MM:SS.CC, rounding milliseconds to centiseconds
/// half-up (+5 before dividing by 10)
fn format_centi(time: SubtitleTime) -> String {
    let total_centis = (time.total_msecs().max(0) + 5) / 10;
    format!(
        "{:02}:{:02}:{:02}.{:02}",
        total_centis / 360_000,
        (total_centis % 360_000) / 6_000,
        (total_centis % 6_000) / 100,
        total_centis % 100
    )
}
