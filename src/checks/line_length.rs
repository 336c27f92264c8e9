/*!
 * Line-length rule: no physical line may exceed the configured character
 * count. Report-only; there is no safe automatic reflow.
 */

use crate::checks::{CheckContext, ErrorCheck};
use crate::config::TimingConfig;

/// Character upper bound per physical line
#[derive(Debug, Default)]
pub struct MaxCharactersPerLine {
    max_cpl: usize,
}

impl MaxCharactersPerLine {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ErrorCheck for MaxCharactersPerLine {
    fn id(&self) -> &'static str {
        "max-characters-per-line"
    }

    fn label(&self) -> &'static str {
        "Maximum characters per line"
    }

    fn description(&self) -> &'static str {
        "Detects physical lines longer than the character limit"
    }

    fn init(&mut self, config: &TimingConfig) {
        self.max_cpl = config.max_characters_per_line;
    }

    fn execute(&self, ctx: &mut CheckContext) -> bool {
        if self.max_cpl == 0 {
            return false;
        }

        let longest = ctx
            .current
            .text
            .lines()
            .map(|line| line.chars().count())
            .max()
            .unwrap_or(0);

        if longest <= self.max_cpl {
            return false;
        }

        ctx.error = format!(
            "Line of {} characters exceeds the limit of {}",
            longest, self.max_cpl
        );
        // No automatic fix; the text is never touched
        true
    }
}
