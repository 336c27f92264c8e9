use std::fmt;

use log::debug;

use crate::subtitle_time::SubtitleTime;

// @module: Subtitle entries and the ordered collection

/// Stable handle to an entry in a [`Subtitles`] collection.
///
/// Ids survive insertion and removal of other entries; an id stops resolving
/// once its entry is removed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubtitleId(u64);

// @struct: Single subtitle entry
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Subtitle {
    // @field: Primary text, may span multiple lines
    pub text: String,

    // @field: Optional secondary text (empty when absent)
    pub translation: String,

    // @field: Start time (time mode)
    pub start: SubtitleTime,

    // @field: End time (time mode)
    pub end: SubtitleTime,

    // @field: Start frame (frame mode)
    pub start_frame: i64,

    // @field: End frame (frame mode)
    pub end_frame: i64,
}

impl Subtitle {
    /// Display duration, `end - start`. May be negative while an edit is in
    /// flight; callers must not assume `end >= start`.
    pub fn duration(&self) -> SubtitleTime {
        self.end - self.start
    }

    /// Number of visible characters, newlines excluded
    pub fn char_count(&self) -> usize {
        self.text.chars().filter(|c| *c != '\n').count()
    }

    /// Reading speed in characters per second.
    ///
    /// Returns infinity for zero or negative durations.
    pub fn characters_per_second(&self) -> f64 {
        let duration_ms = self.duration().total_msecs();
        if duration_ms <= 0 {
            return f64::INFINITY;
        }
        self.char_count() as f64 * 1000.0 / duration_ms as f64
    }

    /// Recompute frame fields from the time fields at the given framerate
    pub fn sync_frames_from_times(&mut self, framerate: f64) {
        self.start_frame = self.start.to_frames(framerate);
        self.end_frame = self.end.to_frames(framerate);
    }

    /// Recompute time fields from the frame fields at the given framerate
    pub fn sync_times_from_frames(&mut self, framerate: f64) {
        self.start = SubtitleTime::from_frames(self.start_frame, framerate);
        self.end = SubtitleTime::from_frames(self.end_frame, framerate);
    }
}

impl fmt::Display for Subtitle {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} --> {}: {}", self.start, self.end, self.text)
    }
}

#[derive(Debug, Clone)]
struct Slot {
    id: SubtitleId,
    subtitle: Subtitle,
}

/// Ordered collection of subtitle entries with selection state.
///
/// Entries are addressed by [`SubtitleId`]; positional lookups go through
/// `index_of`. The collection is exclusively owned by one document and is not
/// safe for concurrent mutation.
#[derive(Debug, Clone, Default)]
pub struct Subtitles {
    slots: Vec<Slot>,
    selection: Vec<SubtitleId>,
    next_id: u64,
}

impl Subtitles {
    /// Create an empty collection
    pub fn new() -> Self {
        Self::default()
    }

    fn allocate_id(&mut self) -> SubtitleId {
        let id = SubtitleId(self.next_id);
        self.next_id += 1;
        id
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Whether the collection has no entries
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Append a new blank entry and return its id
    pub fn append(&mut self) -> SubtitleId {
        self.push(Subtitle::default())
    }

    /// Append a prepared entry and return its id; used by codecs for bulk
    /// population during parse
    pub fn push(&mut self, subtitle: Subtitle) -> SubtitleId {
        let id = self.allocate_id();
        self.slots.push(Slot { id, subtitle });
        id
    }

    /// Insert a new blank entry immediately after `after`.
    ///
    /// The new entry is blank; duplication logic copies fields explicitly.
    /// Returns `None` when `after` does not resolve.
    pub fn insert_after(&mut self, after: SubtitleId) -> Option<SubtitleId> {
        let position = self.index_of(after)?;
        let id = self.allocate_id();
        self.slots.insert(
            position + 1,
            Slot {
                id,
                subtitle: Subtitle::default(),
            },
        );
        Some(id)
    }

    /// Remove all listed entries.
    ///
    /// Ids that do not resolve are ignored. Selection entries referring to
    /// removed subtitles are cleared.
    pub fn remove(&mut self, ids: &[SubtitleId]) {
        self.slots.retain(|slot| !ids.contains(&slot.id));
        self.selection.retain(|id| !ids.contains(id));
    }

    /// Id of the first entry, or `None` when empty
    pub fn first(&self) -> Option<SubtitleId> {
        self.slots.first().map(|slot| slot.id)
    }

    /// Id of the last entry, or `None` when empty
    pub fn last(&self) -> Option<SubtitleId> {
        self.slots.last().map(|slot| slot.id)
    }

    /// Id of the entry after `id`, or `None` at the end
    pub fn next(&self, id: SubtitleId) -> Option<SubtitleId> {
        let position = self.index_of(id)?;
        self.slots.get(position + 1).map(|slot| slot.id)
    }

    /// Id of the entry before `id`, or `None` at the start
    pub fn previous(&self, id: SubtitleId) -> Option<SubtitleId> {
        let position = self.index_of(id)?;
        position.checked_sub(1).map(|p| self.slots[p].id)
    }

    /// Position of `id` in document order
    pub fn index_of(&self, id: SubtitleId) -> Option<usize> {
        self.slots.iter().position(|slot| slot.id == id)
    }

    /// Borrow the entry for `id`
    pub fn get(&self, id: SubtitleId) -> Option<&Subtitle> {
        self.slots
            .iter()
            .find(|slot| slot.id == id)
            .map(|slot| &slot.subtitle)
    }

    /// Mutably borrow the entry for `id`
    pub fn get_mut(&mut self, id: SubtitleId) -> Option<&mut Subtitle> {
        self.slots
            .iter_mut()
            .find(|slot| slot.id == id)
            .map(|slot| &mut slot.subtitle)
    }

    /// Iterate entries in document order
    pub fn iter(&self) -> impl Iterator<Item = &Subtitle> {
        self.slots.iter().map(|slot| &slot.subtitle)
    }

    /// Iterate ids in document order
    pub fn ids(&self) -> impl Iterator<Item = SubtitleId> + '_ {
        self.slots.iter().map(|slot| slot.id)
    }

    /// Mutable access to entries in document order; used by the check runner
    /// to build sliding windows over adjacent entries
    pub fn entries_mut(&mut self) -> Vec<&mut Subtitle> {
        self.slots
            .iter_mut()
            .map(|slot| &mut slot.subtitle)
            .collect()
    }

    /// Currently selected ids, in document order
    pub fn selection(&self) -> Vec<SubtitleId> {
        self.slots
            .iter()
            .filter(|slot| self.selection.contains(&slot.id))
            .map(|slot| slot.id)
            .collect()
    }

    /// Mark `id` selected.
    ///
    /// With `exclusive`, all other selections are cleared first. Ids that do
    /// not resolve are ignored.
    pub fn select(&mut self, id: SubtitleId, exclusive: bool) {
        if self.index_of(id).is_none() {
            return;
        }
        if exclusive {
            self.selection.clear();
        }
        if !self.selection.contains(&id) {
            self.selection.push(id);
        }
    }

    /// Whether `id` is selected
    pub fn is_selected(&self, id: SubtitleId) -> bool {
        self.selection.contains(&id)
    }

    /// Clear the selection
    pub fn clear_selection(&mut self) {
        self.selection.clear();
    }

    /// Stable sort by start time.
    ///
    /// Returns the number of entries whose position changed, 0 when the
    /// collection was already ordered.
    pub fn sort_by_start_time(&mut self) -> usize {
        let order_before: Vec<SubtitleId> = self.ids().collect();

        self.slots.sort_by_key(|slot| slot.subtitle.start);

        let moved = self
            .slots
            .iter()
            .zip(order_before.iter())
            .filter(|(slot, before)| slot.id != **before)
            .count();

        debug!("Sorted {} entries, {} changed position", self.len(), moved);
        moved
    }
}
