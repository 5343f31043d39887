use std::collections::HashMap;

use uuid::Uuid;

use crate::models::{Appointment, Doctor, Document, EntryKind, Medication, Severity, StatusEntry};

use super::types::{EntryDetails, RelatedRecords, TimelineEntry};

/// How many note characters stand in for a summary when a status entry
/// lists no symptoms.
const NOTES_SUMMARY_CHARS: usize = 100;

pub(super) fn doctor_lookup(doctors: &[Doctor]) -> HashMap<Uuid, &Doctor> {
    doctors.iter().map(|d| (d.id, d)).collect()
}

fn resolve_name(lookup: &HashMap<Uuid, &Doctor>, id: Uuid) -> Option<String> {
    lookup.get(&id).map(|d| d.name.clone())
}

/// Empty strings entered through forms count as absent.
fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.is_empty())
}

pub(super) fn severity_from_pain(pain_level: u8) -> Severity {
    match pain_level {
        0..=3 => Severity::Low,
        4..=6 => Severity::Medium,
        7..=8 => Severity::High,
        _ => Severity::Critical,
    }
}

pub(super) fn project_appointment(
    apt: &Appointment,
    doctors: &HashMap<Uuid, &Doctor>,
) -> TimelineEntry {
    let doctor_name = resolve_name(doctors, apt.doctor_id);
    let mut summary = apt.reason.clone();
    if let Some(findings) = non_empty(&apt.findings) {
        summary.push_str(" - ");
        summary.push_str(findings);
    }

    TimelineEntry {
        id: apt.id,
        kind: EntryKind::Appointment,
        date: apt.date,
        time: apt.time.clone(),
        title: format!(
            "Appointment: {}",
            doctor_name.as_deref().unwrap_or("Unknown")
        ),
        summary,
        severity: None,
        related: RelatedRecords {
            doctor_id: Some(apt.doctor_id),
            appointment_id: Some(apt.id),
            document_ids: apt.document_ids.clone(),
            ..Default::default()
        },
        details: EntryDetails::Appointment {
            record: apt.clone(),
            doctor_name,
        },
    }
}

pub(super) fn project_medication(
    med: &Medication,
    doctors: &HashMap<Uuid, &Doctor>,
) -> TimelineEntry {
    let doctor_name = med
        .prescribing_doctor_id
        .and_then(|id| resolve_name(doctors, id));
    let mut summary = format!("{}, {}", med.dosage, med.frequency);
    if let Some(purpose) = non_empty(&med.purpose) {
        summary.push_str(" - ");
        summary.push_str(purpose);
    }

    TimelineEntry {
        id: med.id,
        kind: EntryKind::Medication,
        date: med.start_date,
        time: None,
        title: format!("Medication: {}", med.name),
        summary,
        severity: None,
        related: RelatedRecords {
            doctor_id: med.prescribing_doctor_id,
            medication_id: Some(med.id),
            ..Default::default()
        },
        details: EntryDetails::Medication {
            record: med.clone(),
            doctor_name,
        },
    }
}

pub(super) fn project_status_entry(entry: &StatusEntry) -> TimelineEntry {
    let summary = if entry.symptoms.is_empty() {
        non_empty(&entry.notes)
            .map(|n| n.chars().take(NOTES_SUMMARY_CHARS).collect())
            .unwrap_or_default()
    } else {
        entry.symptoms.join(", ")
    };

    TimelineEntry {
        id: entry.id,
        kind: EntryKind::Status,
        date: entry.date,
        time: entry.time.clone(),
        title: format!("Status: Pain {}/10", entry.pain_level),
        summary,
        severity: Some(severity_from_pain(entry.pain_level)),
        related: RelatedRecords {
            document_ids: entry.document_ids.clone(),
            ..Default::default()
        },
        details: EntryDetails::Status {
            record: entry.clone(),
        },
    }
}

pub(super) fn project_document(doc: &Document, doctors: &HashMap<Uuid, &Doctor>) -> TimelineEntry {
    let doctor_name = doc.doctor_id.and_then(|id| resolve_name(doctors, id));
    let summary = non_empty(&doc.description)
        .unwrap_or(&doc.doc_type)
        .to_string();

    TimelineEntry {
        id: doc.id,
        kind: EntryKind::Document,
        date: doc.date,
        time: None,
        title: format!("Document: {}", doc.title),
        summary,
        severity: None,
        related: RelatedRecords {
            doctor_id: doc.doctor_id,
            appointment_id: doc.appointment_id,
            document_ids: vec![doc.id],
            ..Default::default()
        },
        details: EntryDetails::Document {
            record: doc.clone(),
            doctor_name,
        },
    }
}
