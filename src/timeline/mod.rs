//! Timeline — chronological merge of the record collections.
//!
//! Projects appointments, medications, status entries and documents into
//! a unified `Vec<TimelineEntry>` with per-kind titles, summaries and
//! severity, applies the conjunctive filter criteria, and sorts
//! newest-first on a date + time-of-day key. Pure transformation over
//! already-loaded collections: no storage access, no mutation of inputs,
//! safe to call concurrently.

mod filter;
mod project;
mod sort;
mod types;

pub use types::*;

use crate::models::{Appointment, Doctor, Document, Medication, StatusEntry, TimelineFilter};

/// Merge the record collections into one filtered, sorted timeline.
///
/// Every input record projects to exactly one entry; entries are dropped
/// only by the supplied filter criteria. The doctor collection is used
/// solely to denormalize display names into entry payloads.
pub fn build_timeline(
    doctors: &[Doctor],
    appointments: &[Appointment],
    medications: &[Medication],
    statuses: &[StatusEntry],
    documents: &[Document],
    filter: &TimelineFilter,
) -> Vec<TimelineEntry> {
    let lookup = project::doctor_lookup(doctors);

    let mut entries: Vec<TimelineEntry> = Vec::with_capacity(
        appointments.len() + medications.len() + statuses.len() + documents.len(),
    );
    entries.extend(
        appointments
            .iter()
            .map(|apt| project::project_appointment(apt, &lookup)),
    );
    entries.extend(
        medications
            .iter()
            .map(|med| project::project_medication(med, &lookup)),
    );
    entries.extend(statuses.iter().map(project::project_status_entry));
    entries.extend(
        documents
            .iter()
            .map(|doc| project::project_document(doc, &lookup)),
    );

    entries.retain(|entry| filter::matches(entry, filter));
    sort::sort_newest_first(&mut entries);
    entries
}

// ── Tests ──────────────────────────────────────────────────────────────────
