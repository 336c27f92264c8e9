/*!
 * Minimum-gap rule: consecutive subtitles must be separated by at least the
 * configured number of milliseconds.
 */

use crate::checks::{CheckContext, ErrorCheck};
use crate::config::TimingConfig;
use crate::subtitle_time::SubtitleTime;

/// Gap lower bound between the end of one subtitle and the start of the next
#[derive(Debug, Default)]
pub struct MinGapBetweenSubtitles {
    min_gap_ms: i64,
}

impl MinGapBetweenSubtitles {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ErrorCheck for MinGapBetweenSubtitles {
    fn id(&self) -> &'static str {
        "min-gap-between-subtitles"
    }

    fn label(&self) -> &'static str {
        "Minimum gap between subtitles"
    }

    fn description(&self) -> &'static str {
        "Detects subtitle pairs closer together than the minimum gap"
    }

    fn init(&mut self, config: &TimingConfig) {
        self.min_gap_ms = config.min_gap_between_subtitles;
    }

    fn execute(&self, ctx: &mut CheckContext) -> bool {
        if self.min_gap_ms == 0 {
            return false;
        }
        let Some(next) = ctx.next.as_deref_mut() else {
            return false;
        };

        let gap_ms = (next.start - ctx.current.end).total_msecs();
        if gap_ms >= self.min_gap_ms {
            return false;
        }

        ctx.error = format!(
            "Gap of {}ms between subtitles (minimum {}ms)",
            gap_ms, self.min_gap_ms
        );

        // Redistribute symmetrically around the boundary midpoint so each
        // side gets half the required gap
        let middle_ms = (ctx.current.end.total_msecs() + next.start.total_msecs()) / 2;
        let half_gap_ms = self.min_gap_ms / 2;
        ctx.solution = format!(
            "Move boundary times to {}ms and {}ms",
            middle_ms - half_gap_ms,
            middle_ms + half_gap_ms
        );

        if ctx.try_to_fix {
            ctx.current.end = SubtitleTime::from_msecs(middle_ms - half_gap_ms);
            next.start = SubtitleTime::from_msecs(middle_ms + half_gap_ms);
        }
        true
    }
}
