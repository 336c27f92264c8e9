use log::debug;

use crate::subtitles::Subtitles;

// @module: Snapshot transactions for grouped edits

/// Grouped-edit boundary over a subtitle collection.
///
/// `begin` captures a full snapshot (entries, selection, id state). Grouped
/// mutations then run directly against the collection; `rollback` restores
/// the snapshot exactly, `commit` discards it. An aborted group therefore
/// leaves no partial effects.
#[derive(Debug)]
pub struct Transaction {
    snapshot: Subtitles,
}

impl Transaction {
    /// Capture the pre-edit state of `subtitles`
    pub fn begin(subtitles: &Subtitles) -> Self {
        Self {
            snapshot: subtitles.clone(),
        }
    }

    /// Keep all mutations made since `begin`
    pub fn commit(self) {
        debug!("Transaction committed");
    }

    /// Restore `subtitles` to the captured state
    pub fn rollback(self, subtitles: &mut Subtitles) {
        *subtitles = self.snapshot;
        debug!("Transaction rolled back");
    }
}
