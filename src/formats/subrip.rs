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

// @module: SubRip codec (.srt)

// @const: SRT timestamp line regex
static TIMESTAMP_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(\d{2}):(\d{2}):(\d{2}),(\d{3}) --> (\d{2}):(\d{2}):(\d{2}),(\d{3})").unwrap()
});

static INFO: FormatInfo = FormatInfo {
    name: "SubRip",
    extension: "srt",
    detection_pattern: r"^\d{2}:\d{2}:\d{2},\d{3} --> \d{2}:\d{2}:\d{2},\d{3}\s*$",
};

/// SubRip (.srt) codec.
///
/// Blocks are a sequence number, a `start --> end` timestamp line with comma
/// millisecond separators, and text lines up to a blank line. `<b>/<i>/<u>`
/// tags pass through verbatim.
pub struct SubRip;

impl SubtitleFormat for SubRip {
    fn info(&self) -> &'static FormatInfo {
        &INFO
    }

    fn open(&self, content: &str, doc: &mut Document) -> Result<()> {
        fn flush(
            times: &mut Option<(SubtitleTime, SubtitleTime)>,
            text: &mut String,
            doc: &mut Document,
        ) {
            if let Some((start, end)) = times.take() {
                if text.is_empty() {
                    warn!("Skipping SubRip block without text");
                } else {
                    doc.subtitles.push(Subtitle {
                        text: std::mem::take(text),
                        start,
                        end,
                        ..Subtitle::default()
                    });
                }
            }
            text.clear();
        }

        let mut times: Option<(SubtitleTime, SubtitleTime)> = None;
        let mut seen_seq_num = false;
        let mut text = String::new();

        for line in content.lines() {
            let trimmed = line.trim();

            if trimmed.is_empty() {
                flush(&mut times, &mut text, doc);
                seen_seq_num = false;
                continue;
            }

            // A bare number between blocks is the sequence line; its value is
            // ignored, entries are renumbered on save
            if times.is_none() && text.is_empty() && trimmed.parse::<u64>().is_ok() {
                seen_seq_num = true;
                continue;
            }

            if times.is_none() && seen_seq_num {
                if let Some(caps) = TIMESTAMP_REGEX.captures(trimmed) {
                    times = Some((capture_time(&caps, 1), capture_time(&caps, 5)));
                    continue;
                }
                warn!("Skipping unusable SubRip timestamp line: {}", trimmed);
                seen_seq_num = false;
                continue;
            }

            if times.is_some() {
                if !text.is_empty() {
                    text.push('\n');
                }
                text.push_str(trimmed);
            } else {
                warn!("Skipping text outside any SubRip block: {}", trimmed);
            }
        }
        flush(&mut times, &mut text, doc);

        if doc.subtitles.is_empty() {
            return Err(FormatError::NoEntries.into());
        }
        Ok(())
    }

    fn save(&self, doc: &Document, writer: &mut dyn Write) -> Result<()> {
        for (position, subtitle) in doc.subtitles.iter().enumerate() {
            writeln!(writer, "{}", position + 1)?;
            writeln!(
                writer,
                "{} --> {}",
                format_timestamp(subtitle.start),
                format_timestamp(subtitle.end)
            )?;
            writeln!(writer, "{}", subtitle.text)?;
            writeln!(writer)?;
        }
        Ok(())
    }
}

/// Read one HH:MM:SS,mmm capture group run starting at `first`
fn capture_time(caps: &regex::Captures, first: usize) -> SubtitleTime {
    // The grammar guarantees fixed-width digit groups, parses cannot fail
    let hours: i64 = caps[first].parse().unwrap();
    let minutes: i64 = caps[first + 1].parse().unwrap();
    let seconds: i64 = caps[first + 2].parse().unwrap();
    let mseconds: i64 = caps[first + 3].parse().unwrap();

    SubtitleTime::from_components(hours, minutes, seconds, mseconds)
}

/// Format a time in SRT style (HH:MM:SS,mmm)
fn format_timestamp(time: SubtitleTime) -> String {
    format!(
        "{:02}:{:02}:{:02},{:03}",
        time.hours(),
        time.minutes(),
        time.seconds(),
        time.mseconds()
    )
}
