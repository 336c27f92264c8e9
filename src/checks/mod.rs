/*!
 * Error-checking rules for subtitle collections.
 *
 * Each rule inspects one subtitle or a pair of adjacent subtitles and
 * reports a timing or text-layout defect, optionally correcting it in
 * place:
 * - `display_time`: reading speed below the configured minimum
 * - `min_gap`: gap between consecutive subtitles below the minimum
 * - `line_length`: a physical line exceeding the character limit
 * - `overlapping`: a subtitle still shown when the next one starts
 *
 * # Architecture
 *
 * Rules implement [`ErrorCheck`] and run against a sliding
 * `(previous, current, next)` window. `runner` owns the rule set and makes
 * one left-to-right pass over the collection so a fix to a pair boundary is
 * visible when the next pair is evaluated. Detection never fails; rules
 * report through a boolean plus error/solution strings.
 */

pub mod display_time;
pub mod line_length;
pub mod min_gap;
pub mod overlapping;
pub mod runner;

// Re-export main types
pub use display_time::TooLongDisplayTime;
pub use line_length::MaxCharactersPerLine;
pub use min_gap::MinGapBetweenSubtitles;
pub use overlapping::Overlapping;
pub use runner::{CheckIncident, CheckReport, CheckRunner};

use crate::config::TimingConfig;
use crate::subtitles::Subtitle;

/// Sliding window handed to a rule.
///
/// Rules may mutate `current` and `next`, and only when `try_to_fix` is set.
/// `error` and `solution` are output slots for human-readable descriptions.
#[derive(Debug)]
pub struct CheckContext<'a> {
    /// Entry before the current one, when there is one
    pub previous: Option<&'a Subtitle>,

    /// The entry under inspection
    pub current: &'a mut Subtitle,

    /// Entry after the current one, when there is one
    pub next: Option<&'a mut Subtitle>,

    /// Whether a rule with a defined fix should apply it
    pub try_to_fix: bool,

    /// Description of the detected defect
    pub error: String,

    /// Description of the fix (applied or proposed)
    pub solution: String,
}

impl<'a> CheckContext<'a> {
    /// Build a window; output slots start empty
    pub fn new(
        previous: Option<&'a Subtitle>,
        current: &'a mut Subtitle,
        next: Option<&'a mut Subtitle>,
        try_to_fix: bool,
    ) -> Self {
        Self {
            previous,
            current,
            next,
            try_to_fix,
            error: String::new(),
            solution: String::new(),
        }
    }
}

/// One error-checking rule.
///
/// Rules are stateless between calls apart from the thresholds loaded by
/// `init`, which runs once before any `execute`.
pub trait ErrorCheck {
    /// Stable identifier
    fn id(&self) -> &'static str;

    /// Human label
    fn label(&self) -> &'static str;

    /// One-line description of what the rule checks
    fn description(&self) -> &'static str;

    /// Load tunable parameters from configuration
    fn init(&mut self, config: &TimingConfig);

    /// Inspect the window; return true iff a defect was detected (in fix
    /// mode, iff a fix was applied). Never fails.
    fn execute(&self, ctx: &mut CheckContext) -> bool;
}
