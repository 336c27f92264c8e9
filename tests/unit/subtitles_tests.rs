/*!
 * Tests for the Subtitles collection
 */

use subtempo::subtitle_time::SubtitleTime;
use subtempo::subtitles::{Subtitle, Subtitles};

fn collection_with_starts(starts_ms: &[i64]) -> Subtitles {
    let mut subtitles = Subtitles::new();
    for start_ms in starts_ms {
        subtitles.push(Subtitle {
            start: SubtitleTime::from_msecs(*start_ms),
            end: SubtitleTime::from_msecs(start_ms + 1_000),
            ..Subtitle::default()
        });
    }
    subtitles
}

#[test]
fn test_append_shouldCreateBlankEntryAtEnd() {
    let mut subtitles = Subtitles::new();
    assert!(subtitles.is_empty());

    let id = subtitles.append();

    assert_eq!(subtitles.len(), 1);
    let entry = subtitles.get(id).unwrap();
    assert!(entry.text.is_empty());
    assert!(entry.start.is_zero());
}

#[test]
fn test_insertAfter_shouldPlaceEntryImmediatelyAfterReference() {
    let mut subtitles = collection_with_starts(&[0, 5_000]);
    let first = subtitles.first().unwrap();

    let inserted = subtitles.insert_after(first).unwrap();

    assert_eq!(subtitles.len(), 3);
    assert_eq!(subtitles.index_of(inserted), Some(1));
    // The new entry is blank; duplication copies fields explicitly
    assert!(subtitles.get(inserted).unwrap().text.is_empty());
}

#[test]
fn test_insertAfter_withRemovedReference_shouldReturnNone() {
    let mut subtitles = collection_with_starts(&[0]);
    let first = subtitles.first().unwrap();
    subtitles.remove(&[first]);

    assert!(subtitles.insert_after(first).is_none());
}

#[test]
fn test_remove_shouldIgnoreUnknownIdsAndClearSelection() {
    let mut subtitles = collection_with_starts(&[0, 5_000, 10_000]);
    let first = subtitles.first().unwrap();
    let second = subtitles.next(first).unwrap();
    subtitles.select(second, true);

    subtitles.remove(&[second]);
    // Removing again is a no-op
    subtitles.remove(&[second]);

    assert_eq!(subtitles.len(), 2);
    assert!(subtitles.selection().is_empty());
    assert!(subtitles.get(second).is_none());
}

#[test]
fn test_traversal_shouldReturnSentinelAtEnds() {
    let subtitles = collection_with_starts(&[0, 5_000]);
    let first = subtitles.first().unwrap();
    let last = subtitles.last().unwrap();

    assert!(subtitles.previous(first).is_none());
    assert_eq!(subtitles.next(first), Some(last));
    assert_eq!(subtitles.previous(last), Some(first));
    assert!(subtitles.next(last).is_none());

    let empty = Subtitles::new();
    assert!(empty.first().is_none());
    assert!(empty.last().is_none());
}

#[test]
fn test_select_withExclusive_shouldClearOtherSelections() {
    let mut subtitles = collection_with_starts(&[0, 5_000, 10_000]);
    let first = subtitles.first().unwrap();
    let second = subtitles.next(first).unwrap();

    subtitles.select(first, false);
    subtitles.select(second, false);
    assert_eq!(subtitles.selection(), vec![first, second]);

    subtitles.select(second, true);
    assert_eq!(subtitles.selection(), vec![second]);
}

#[test]
fn test_selection_shouldFollowDocumentOrder() {
    let mut subtitles = collection_with_starts(&[0, 5_000, 10_000]);
    let first = subtitles.first().unwrap();
    let last = subtitles.last().unwrap();

    // Select in reverse order; document order wins
    subtitles.select(last, false);
    subtitles.select(first, false);

    assert_eq!(subtitles.selection(), vec![first, last]);
}

#[test]
fn test_sortByStartTime_withOrderedCollection_shouldReturnZero() {
    let mut subtitles = collection_with_starts(&[0, 5_000, 10_000]);

    assert_eq!(subtitles.sort_by_start_time(), 0);
}

#[test]
fn test_sortByStartTime_withOneOutOfOrderPair_shouldReorderAndCount() {
    let mut subtitles = collection_with_starts(&[0, 10_000, 5_000]);

    let moved = subtitles.sort_by_start_time();

    assert!(moved > 0);
    let starts: Vec<i64> = subtitles.iter().map(|s| s.start.total_msecs()).collect();
    assert_eq!(starts, vec![0, 5_000, 10_000]);
}

#[test]
fn test_sortByStartTime_shouldBeStableForEqualStarts() {
    let mut subtitles = Subtitles::new();
    let first = subtitles.push(Subtitle {
        text: "first".to_string(),
        start: SubtitleTime::from_msecs(1_000),
        ..Subtitle::default()
    });
    let second = subtitles.push(Subtitle {
        text: "second".to_string(),
        start: SubtitleTime::from_msecs(1_000),
        ..Subtitle::default()
    });

    assert_eq!(subtitles.sort_by_start_time(), 0);
    assert_eq!(subtitles.index_of(first), Some(0));
    assert_eq!(subtitles.index_of(second), Some(1));
}

#[test]
fn test_duration_shouldBeEndMinusStart() {
    let subtitle = Subtitle {
        start: SubtitleTime::from_msecs(1_000),
        end: SubtitleTime::from_msecs(3_500),
        ..Subtitle::default()
    };
    assert_eq!(subtitle.duration().total_msecs(), 2_500);
}

#[test]
fn test_charactersPerSecond_shouldExcludeNewlines() {
    let subtitle = Subtitle {
        text: "Hello\nWorld".to_string(),
        start: SubtitleTime::ZERO,
        end: SubtitleTime::from_msecs(2_000),
        ..Subtitle::default()
    };
    // 10 visible chars over 2 seconds
    assert!((subtitle.characters_per_second() - 5.0).abs() < 0.01);
}

#[test]
fn test_charactersPerSecond_withNonPositiveDuration_shouldBeInfinite() {
    let subtitle = Subtitle {
        text: "Hello".to_string(),
        start: SubtitleTime::from_msecs(2_000),
        end: SubtitleTime::from_msecs(1_000),
        ..Subtitle::default()
    };
    assert!(subtitle.characters_per_second().is_infinite());
}
