/*!
 * Display-time rule: a subtitle shown so long that its reading speed drops
 * below the configured minimum characters per second.
 */

use crate::checks::{CheckContext, ErrorCheck};
use crate::config::TimingConfig;
use crate::subtitle_time::SubtitleTime;

/// Reading speed lower bound; a CPS below the minimum means the subtitle
/// lingers on screen longer than its text justifies
#[derive(Debug, Default)]
pub struct TooLongDisplayTime {
    min_cps: f64,
}

impl TooLongDisplayTime {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ErrorCheck for TooLongDisplayTime {
    fn id(&self) -> &'static str {
        "too-long-display-time"
    }

    fn label(&self) -> &'static str {
        "Too long display time"
    }

    fn description(&self) -> &'static str {
        "Detects subtitles displayed below the minimum characters per second"
    }

    fn init(&mut self, config: &TimingConfig) {
        self.min_cps = config.min_characters_per_second;
    }

    fn execute(&self, ctx: &mut CheckContext) -> bool {
        if self.min_cps == 0.0 {
            return false;
        }

        let cps = ctx.current.characters_per_second();
        if cps >= self.min_cps {
            return false;
        }

        ctx.error = format!(
            "Reading speed too low: {:.1} chars/s (minimum {:.1})",
            cps, self.min_cps
        );

        let target_ms =
            (ctx.current.char_count() as f64 * 1000.0 / self.min_cps).round() as i64;
        ctx.solution = format!("Set display duration to {}ms", target_ms);

        if ctx.try_to_fix {
            ctx.current.end = ctx.current.start + SubtitleTime::from_msecs(target_ms);
        }
        true
    }
}
