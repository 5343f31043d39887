use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::{Appointment, Document, EntryKind, Medication, Severity, StatusEntry};

/// A single event on the timeline — unified across the four dated record
/// collections. Identity is (kind, id): ids are only unique within a kind.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimelineEntry {
    pub id: Uuid,
    pub kind: EntryKind,
    /// Anchor date of the source record (appointment date, medication
    /// start date, status date, document date).
    pub date: NaiveDate,
    /// Time of day as entered by the user, when the source record has one.
    pub time: Option<String>,
    pub title: String,
    pub summary: String,
    /// Pain-derived bucket; only status entries carry one.
    pub severity: Option<Severity>,
    pub related: RelatedRecords,
    pub details: EntryDetails,
}

/// Cross-references carried by an entry for filtering and navigation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RelatedRecords {
    pub doctor_id: Option<Uuid>,
    pub appointment_id: Option<Uuid>,
    pub medication_id: Option<Uuid>,
    #[serde(default)]
    pub document_ids: Vec<Uuid>,
}

/// Kind-specific payload: the full source record, plus the resolved
/// doctor display name for kinds that reference one. Consumers
/// pattern-match instead of probing an untyped field bag.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum EntryDetails {
    #[serde(rename_all = "camelCase")]
    Appointment {
        record: Appointment,
        doctor_name: Option<String>,
    },
    #[serde(rename_all = "camelCase")]
    Medication {
        record: Medication,
        doctor_name: Option<String>,
    },
    Status { record: StatusEntry },
    #[serde(rename_all = "camelCase")]
    Document {
        record: Document,
        doctor_name: Option<String>,
    },
}

impl TimelineEntry {
    /// Pain level of the underlying record; kinds without one return None.
    pub fn pain_level(&self) -> Option<u8> {
        match &self.details {
            EntryDetails::Status { record } => Some(record.pain_level),
            _ => None,
        }
    }

    /// Resolved doctor display name, for kinds that reference one.
    pub fn doctor_name(&self) -> Option<&str> {
        match &self.details {
            EntryDetails::Appointment { doctor_name, .. }
            | EntryDetails::Medication { doctor_name, .. }
            | EntryDetails::Document { doctor_name, .. } => doctor_name.as_deref(),
            EntryDetails::Status { .. } => None,
        }
    }
}
