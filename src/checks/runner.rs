/*!
 * Runner that applies error-checking rules across a collection.
 *
 * The runner owns a rule set, loads their thresholds from configuration,
 * then makes one left-to-right pass over adjacent windows in document
 * order. Running left to right matters in fix mode: a fix to one pair's
 * boundary times is already in place when the next pair is evaluated.
 */

use log::debug;

use crate::checks::{
    CheckContext, ErrorCheck, MaxCharactersPerLine, MinGapBetweenSubtitles, Overlapping,
    TooLongDisplayTime,
};
use crate::config::TimingConfig;
use crate::subtitles::Subtitles;

/// One detected defect
#[derive(Debug, Clone)]
pub struct CheckIncident {
    /// Id of the rule that fired
    pub check_id: &'static str,

    /// Position of the offending entry in document order
    pub index: usize,

    /// Description of the defect
    pub error: String,

    /// Description of the fix; empty for rules without one
    pub solution: String,

    /// Whether a fix was applied
    pub fixed: bool,
}

/// Outcome of one pass over a collection
#[derive(Debug, Clone, Default)]
pub struct CheckReport {
    /// Detected defects in evaluation order
    pub incidents: Vec<CheckIncident>,

    /// Number of entries inspected
    pub entries_checked: usize,

    /// Number of incidents that were fixed
    pub fixed_count: usize,
}

impl CheckReport {
    /// Whether no defects were detected
    pub fn is_clean(&self) -> bool {
        self.incidents.is_empty()
    }

    /// Get a summary string
    pub fn summary(&self) -> String {
        format!(
            "Checked {} entries: {} defects, {} fixed",
            self.entries_checked,
            self.incidents.len(),
            self.fixed_count
        )
    }
}

/// The standard rule set, in evaluation order
pub fn standard_checks() -> Vec<Box<dyn ErrorCheck>> {
    vec![
        Box::new(TooLongDisplayTime::new()),
        Box::new(MinGapBetweenSubtitles::new()),
        Box::new(Overlapping::new()),
        Box::new(MaxCharactersPerLine::new()),
    ]
}

/// Applies error-checking rules to subtitle collections
pub struct CheckRunner {
    checks: Vec<Box<dyn ErrorCheck>>,
}

impl CheckRunner {
    /// Create a runner with the standard rules, initialized from `config`
    pub fn new(config: &TimingConfig) -> Self {
        Self::with_checks(standard_checks(), config)
    }

    /// Create a runner with a custom rule set, initialized from `config`
    pub fn with_checks(mut checks: Vec<Box<dyn ErrorCheck>>, config: &TimingConfig) -> Self {
        for check in &mut checks {
            check.init(config);
        }
        Self { checks }
    }

    /// Run every rule over every window in document order.
    ///
    /// With `try_to_fix`, rules that define a fix mutate the collection in
    /// place; report-only rules never do.
    pub fn run(&self, subtitles: &mut Subtitles, try_to_fix: bool) -> CheckReport {
        let mut report = CheckReport {
            entries_checked: subtitles.len(),
            ..CheckReport::default()
        };

        let mut entries = subtitles.entries_mut();
        let total = entries.len();

        for index in 0..total {
            for check in &self.checks {
                let (left, rest) = entries.split_at_mut(index);
                let (current_slot, right) = rest.split_at_mut(1);

                let previous = left.last().map(|s| &**s);
                let current = &mut *current_slot[0];
                let next = right.first_mut().map(|s| &mut **s);

                let mut ctx = CheckContext::new(previous, current, next, try_to_fix);
                if check.execute(&mut ctx) {
                    let fixed = try_to_fix && !ctx.solution.is_empty();
                    if fixed {
                        report.fixed_count += 1;
                    }
                    report.incidents.push(CheckIncident {
                        check_id: check.id(),
                        index,
                        error: ctx.error,
                        solution: ctx.solution,
                        fixed,
                    });
                }
            }
        }

        debug!("{}", report.summary());
        report
    }
}
