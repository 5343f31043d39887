use std::cmp::Reverse;

use chrono::{NaiveDateTime, NaiveTime};

use super::types::TimelineEntry;

/// Parse a user-entered time-of-day string, "HH:MM" or "HH:MM:SS".
/// Anything else reads as absent: a malformed time loses intra-day
/// ordering, never the whole feed.
pub(super) fn parse_time_of_day(raw: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(raw, "%H:%M:%S")
        .or_else(|_| NaiveTime::parse_from_str(raw, "%H:%M"))
        .ok()
}

/// Composite sort key: the anchor date at midnight, advanced by the
/// time-of-day when one parses.
pub(super) fn sort_timestamp(entry: &TimelineEntry) -> NaiveDateTime {
    let time = entry
        .time
        .as_deref()
        .and_then(parse_time_of_day)
        .unwrap_or(NaiveTime::MIN);
    entry.date.and_time(time)
}

/// Newest first. The sort is stable, so entries with identical
/// timestamps keep their merge order.
pub(super) fn sort_newest_first(entries: &mut [TimelineEntry]) {
    entries.sort_by_key(|entry| Reverse(sort_timestamp(entry)));
}
