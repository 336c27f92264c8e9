use std::io::Write;

use anyhow::Result;
use log::warn;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::document::{Document, TimingMode};
use crate::errors::FormatError;
use crate::formats::{FormatInfo, SubtitleFormat};
use crate::subtitles::Subtitle;

// @module: MicroDVD codec ({start}{end}text, frame-based)

// @const: MicroDVD line regex
static LINE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\{(\d+)\}\{(\d+)\}(.*)$").unwrap()
});

// @const: Whole-line style marker ({y:b,i,u})
static STYLE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\{[yY]:([^}]*)\}(.*)$").unwrap()
});

static INFO: FormatInfo = FormatInfo {
    name: "MicroDVD",
    extension: "sub",
    detection_pattern: r"^\{\d+\}\{\d+\}.*$",
};

/// MicroDVD (.sub) codec.
///
/// Positions are video frame numbers. A `{1}{1}fps` record on the first
/// grammar line carries the framerate; without one, the document framerate
/// hint (or the default) is used. A pipe separates physical lines and
/// `{y:...}` markers style a whole line.
pub struct MicroDvd;

impl SubtitleFormat for MicroDvd {
    fn info(&self) -> &'static FormatInfo {
        &INFO
    }

    fn open(&self, content: &str, doc: &mut Document) -> Result<()> {
        doc.timing_mode = TimingMode::Frames;
        let mut framerate = doc.framerate_or_default();
        let mut saw_grammar_line = false;

        for line in content.lines() {
            let trimmed = line.trim_end();
            let Some(caps) = LINE_REGEX.captures(trimmed) else {
                if !trimmed.trim().is_empty() {
                    warn!("Skipping non-MicroDVD line: {}", trimmed);
                }
                continue;
            };

            let (Ok(start_frame), Ok(end_frame)) =
                (caps[1].parse::<i64>(), caps[2].parse::<i64>())
            else {
                warn!("Skipping line with unusable frame numbers: {}", trimmed);
                continue;
            };

            // A {1}{1}fps (or {0}{0}fps) record before any subtitle carries
            // the video framerate
            if !saw_grammar_line && start_frame == end_frame && start_frame <= 1 {
                if let Ok(fps) = caps[3].trim().parse::<f64>() {
                    if fps > 0.0 {
                        framerate = fps;
                        doc.framerate = Some(fps);
                        saw_grammar_line = true;
                        continue;
                    }
                }
            }
            saw_grammar_line = true;

            let mut subtitle = Subtitle {
                text: decode_text(&caps[3]),
                start_frame,
                end_frame,
                ..Subtitle::default()
            };
            subtitle.sync_times_from_frames(framerate);
            doc.subtitles.push(subtitle);
        }

        if doc.subtitles.is_empty() {
            return Err(FormatError::NoEntries.into());
        }
        Ok(())
    }

    fn save(&self, doc: &Document, writer: &mut dyn Write) -> Result<()> {
        let framerate = doc.framerate_or_default();

        if doc.framerate.is_some() {
            writeln!(writer, "{{1}}{{1}}{:.3}", framerate)?;
        }

        for subtitle in doc.subtitles.iter() {
            let (start, end) = match doc.timing_mode {
                TimingMode::Frames => (subtitle.start_frame, subtitle.end_frame),
                TimingMode::Times => (
                    subtitle.start.to_frames(framerate),
                    subtitle.end.to_frames(framerate),
                ),
            };
            writeln!(writer, "{{{}}}{{{}}}{}", start, end, encode_text(&subtitle.text))?;
        }
        Ok(())
    }
}

/// Convert raw MicroDVD text to internal form: pipes become newlines and
/// whole-line `{y:...}` markers become wrapping tags
fn decode_text(raw: &str) -> String {
    raw.split('|')
        .map(decode_segment)
        .collect::<Vec<_>>()
        .join("\n")
}

fn decode_segment(segment: &str) -> String {
    let Some(caps) = STYLE_REGEX.captures(segment) else {
        return segment.to_string();
    };

    let mut open = String::new();
    let mut close = String::new();
    for flag in caps[1].split(',') {
        match flag.trim().to_ascii_lowercase().as_str() {
            "b" => {
                open.push_str("<b>");
                close.insert_str(0, "</b>");
            }
            "i" => {
                open.push_str("<i>");
                close.insert_str(0, "</i>");
            }
            "u" => {
                open.push_str("<u>");
                close.insert_str(0, "</u>");
            }
            _ => {}
        }
    }

    if open.is_empty() {
        // Unknown marker, keep the segment verbatim
        return segment.to_string();
    }
    format!("{}{}{}", open, &caps[2], close)
}

/// Convert internal text to MicroDVD form: wrapping tags become `{y:...}`
/// markers and newlines become pipes
fn encode_text(text: &str) -> String {
    text.split('\n')
        .map(encode_segment)
        .collect::<Vec<_>>()
        .join("|")
}

fn encode_segment(segment: &str) -> String {
    let mut flags = Vec::new();
    let mut inner = segment;

    loop {
        let stripped = [("b", "<b>", "</b>"), ("i", "<i>", "</i>"), ("u", "<u>", "</u>")]
            .iter()
            .find_map(|(flag, open, close)| {
                inner
                    .strip_prefix(open)
                    .and_then(|rest| rest.strip_suffix(close))
                    .map(|rest| (*flag, rest))
            });
        match stripped {
            Some((flag, rest)) if !flags.contains(&flag) => {
                flags.push(flag);
                inner = rest;
            }
            _ => break,
        }
    }

    if flags.is_empty() {
        segment.to_string()
    } else {
        format!("{{y:{}}}{}", flags.join(","), inner)
    }
}
