/*!
 * Overlap rule: a subtitle must have disappeared before the next one
 * starts. Report-only; which boundary to move is an editorial decision.
 */

use crate::checks::{CheckContext, ErrorCheck};
use crate::config::TimingConfig;

/// Adjacent-pair overlap detection
#[derive(Debug, Default)]
pub struct Overlapping;

impl Overlapping {
    pub fn new() -> Self {
        Self
    }
}

impl ErrorCheck for Overlapping {
    fn id(&self) -> &'static str {
        "overlapping"
    }

    fn label(&self) -> &'static str {
        "Overlapping subtitles"
    }

    fn description(&self) -> &'static str {
        "Detects subtitles still displayed when the next one starts"
    }

    fn init(&mut self, _config: &TimingConfig) {}

    fn execute(&self, ctx: &mut CheckContext) -> bool {
        let Some(next) = ctx.next.as_deref() else {
            return false;
        };

        if ctx.current.end <= next.start {
            return false;
        }

        let overlap_ms = (ctx.current.end - next.start).total_msecs();
        ctx.error = format!("Overlaps the next subtitle by {}ms", overlap_ms);
        true
    }
}
