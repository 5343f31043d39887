use chrono::NaiveDate;
use uuid::Uuid;

use super::enums::EntryKind;

/// Filter options for the timeline feed. All criteria are optional and
/// conjunctive; an absent or empty `kinds` set means every kind.
#[derive(Debug, Clone, Default)]
pub struct TimelineFilter {
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub kinds: Option<Vec<EntryKind>>,
    pub doctor_id: Option<Uuid>,
    pub min_pain_level: Option<u8>,
    pub max_pain_level: Option<u8>,
}
