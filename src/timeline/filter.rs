use crate::models::TimelineFilter;

use super::types::TimelineEntry;

/// Whether an entry survives every supplied criterion. Criteria are
/// conjunctive. A criterion an entry's kind cannot express passes it
/// through: the doctor filter never drops a kind without a doctor
/// relation, the pain bounds never drop a kind without a pain level.
pub(super) fn matches(entry: &TimelineEntry, filter: &TimelineFilter) -> bool {
    in_date_range(entry, filter)
        && kind_included(entry, filter)
        && doctor_matches(entry, filter)
        && pain_in_bounds(entry, filter)
}

fn in_date_range(entry: &TimelineEntry, filter: &TimelineFilter) -> bool {
    if let Some(start) = filter.start_date {
        if entry.date < start {
            return false;
        }
    }
    if let Some(end) = filter.end_date {
        if entry.date > end {
            return false;
        }
    }
    true
}

fn kind_included(entry: &TimelineEntry, filter: &TimelineFilter) -> bool {
    match &filter.kinds {
        Some(kinds) if !kinds.is_empty() => kinds.contains(&entry.kind),
        _ => true,
    }
}

fn doctor_matches(entry: &TimelineEntry, filter: &TimelineFilter) -> bool {
    let Some(wanted) = filter.doctor_id else {
        return true;
    };
    if !entry.kind.has_doctor_relation() {
        return true;
    }
    // The kind can reference a doctor but this record doesn't: keep it.
    match entry.related.doctor_id {
        Some(id) => id == wanted,
        None => true,
    }
}

fn pain_in_bounds(entry: &TimelineEntry, filter: &TimelineFilter) -> bool {
    if !entry.kind.has_pain_level() {
        return true;
    }
    let Some(pain) = entry.pain_level() else {
        return true;
    };
    if let Some(min) = filter.min_pain_level {
        if pain < min {
            return false;
        }
    }
    if let Some(max) = filter.max_pain_level {
        if pain > max {
            return false;
        }
    }
    true
}
