//! Repository layer — entity-scoped database operations.
//!
//! Free functions over `&rusqlite::Connection`, one sub-module per record
//! collection. All public functions are re-exported here. `get_all_*`
//! returns each collection newest-first by its anchor date, the order the
//! list views display.

mod appointment;
mod doctor;
mod document;
mod medication;
mod status_entry;

pub use appointment::*;
pub use doctor::*;
pub use document::*;
pub use medication::*;
pub use status_entry::*;

use uuid::Uuid;

/// Serialize a list-valued field into its JSON TEXT column form.
pub(crate) fn json_list<T: serde::Serialize>(values: &[T]) -> String {
    serde_json::to_string(values).unwrap_or_else(|_| "[]".into())
}

/// Parse a JSON TEXT column back into a list; malformed cells read as empty.
pub(crate) fn list_from_json<T: serde::de::DeserializeOwned>(raw: &str) -> Vec<T> {
    serde_json::from_str(raw).unwrap_or_default()
}

/// Parse a nullable uuid TEXT column.
pub(crate) fn opt_uuid_from_text(raw: Option<String>) -> Option<Uuid> {
    raw.and_then(|s| Uuid::parse_str(&s).ok())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, NaiveDateTime};
    use rusqlite::Connection;
    use uuid::Uuid;

    use crate::db::sqlite::open_memory_database;
    use crate::models::*;

    fn test_db() -> Connection {
        open_memory_database().unwrap()
    }

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn ts(s: &str) -> NaiveDateTime {
        NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S").unwrap()
    }

    fn make_doctor(conn: &Connection, name: &str) -> Uuid {
        let id = Uuid::new_v4();
        insert_doctor(
            conn,
            &Doctor {
                id,
                name: name.into(),
                specialty: "Cardiology".into(),
                clinic: Some("City Practice".into()),
                address: None,
                phone: Some("+1 555 0100".into()),
                email: None,
                notes: None,
                first_visit: Some(day(2023, 5, 2)),
                is_active: true,
                created_at: ts("2024-01-01 09:00:00"),
                updated_at: ts("2024-01-01 09:00:00"),
            },
        )
        .unwrap();
        id
    }

    fn make_appointment(conn: &Connection, doctor_id: Uuid, date: NaiveDate) -> Uuid {
        let id = Uuid::new_v4();
        insert_appointment(
            conn,
            &Appointment {
                id,
                date,
                time: Some("09:30".into()),
                doctor_id,
                appointment_type: "checkup".into(),
                reason: "Annual checkup".into(),
                findings: None,
                diagnosis: None,
                recommendations: vec!["More exercise".into()],
                notes: None,
                follow_up_date: None,
                document_ids: vec![],
                created_at: ts("2024-01-01 09:00:00"),
                updated_at: ts("2024-01-01 09:00:00"),
            },
        )
        .unwrap();
        id
    }

    fn make_status_entry(conn: &Connection, date: NaiveDate, pain_level: u8) -> Uuid {
        let id = Uuid::new_v4();
        insert_status_entry(
            conn,
            &StatusEntry {
                id,
                date,
                time: None,
                pain_level,
                symptoms: vec!["headache".into(), "fatigue".into()],
                mood: Some("tired".into()),
                notes: Some("Rough night".into()),
                document_ids: vec![],
                created_at: ts("2024-01-01 09:00:00"),
                updated_at: ts("2024-01-01 09:00:00"),
            },
        )
        .unwrap();
        id
    }

    // ── Doctors ────────────────────────────────────────────────────────

    #[test]
    fn doctor_insert_and_retrieve() {
        let conn = test_db();
        let id = make_doctor(&conn, "Dr. Weber");

        let doctor = get_doctor(&conn, &id).unwrap().unwrap();
        assert_eq!(doctor.id, id);
        assert_eq!(doctor.name, "Dr. Weber");
        assert_eq!(doctor.specialty, "Cardiology");
        assert_eq!(doctor.clinic.as_deref(), Some("City Practice"));
        assert_eq!(doctor.first_visit, Some(day(2023, 5, 2)));
        assert!(doctor.is_active);
    }

    #[test]
    fn doctor_get_missing_returns_none() {
        let conn = test_db();
        assert!(get_doctor(&conn, &Uuid::new_v4()).unwrap().is_none());
    }

    #[test]
    fn doctors_listed_alphabetically() {
        let conn = test_db();
        make_doctor(&conn, "Dr. Weber");
        make_doctor(&conn, "Dr. Abel");
        make_doctor(&conn, "Dr. Miller");

        let all = get_all_doctors(&conn).unwrap();
        let names: Vec<_> = all.iter().map(|d| d.name.as_str()).collect();
        assert_eq!(names, vec!["Dr. Abel", "Dr. Miller", "Dr. Weber"]);
    }

    #[test]
    fn doctor_update_persists_changes() {
        let conn = test_db();
        let id = make_doctor(&conn, "Dr. Weber");

        let mut doctor = get_doctor(&conn, &id).unwrap().unwrap();
        doctor.specialty = "Neurology".into();
        doctor.is_active = false;
        doctor.updated_at = ts("2024-02-01 10:00:00");
        update_doctor(&conn, &doctor).unwrap();

        let reloaded = get_doctor(&conn, &id).unwrap().unwrap();
        assert_eq!(reloaded.specialty, "Neurology");
        assert!(!reloaded.is_active);
        assert_eq!(reloaded.updated_at, ts("2024-02-01 10:00:00"));
    }

    #[test]
    fn doctor_update_missing_is_not_found() {
        let conn = test_db();
        let ghost = Doctor {
            id: Uuid::new_v4(),
            name: "Nobody".into(),
            specialty: "None".into(),
            clinic: None,
            address: None,
            phone: None,
            email: None,
            notes: None,
            first_visit: None,
            is_active: true,
            created_at: ts("2024-01-01 09:00:00"),
            updated_at: ts("2024-01-01 09:00:00"),
        };
        let err = update_doctor(&conn, &ghost).unwrap_err();
        assert!(matches!(err, crate::db::DatabaseError::NotFound { .. }));
    }

    #[test]
    fn doctor_delete_and_delete_missing() {
        let conn = test_db();
        let id = make_doctor(&conn, "Dr. Weber");

        delete_doctor(&conn, &id).unwrap();
        assert!(get_doctor(&conn, &id).unwrap().is_none());

        let err = delete_doctor(&conn, &id).unwrap_err();
        assert!(matches!(err, crate::db::DatabaseError::NotFound { .. }));
    }

    // ── Appointments ───────────────────────────────────────────────────

    #[test]
    fn appointment_insert_and_retrieve() {
        let conn = test_db();
        let doctor_id = make_doctor(&conn, "Dr. Weber");
        let id = make_appointment(&conn, doctor_id, day(2024, 3, 1));

        let apt = get_appointment(&conn, &id).unwrap().unwrap();
        assert_eq!(apt.doctor_id, doctor_id);
        assert_eq!(apt.date, day(2024, 3, 1));
        assert_eq!(apt.time.as_deref(), Some("09:30"));
        assert_eq!(apt.appointment_type, "checkup");
        assert_eq!(apt.recommendations, vec!["More exercise".to_string()]);
    }

    #[test]
    fn appointments_listed_newest_first() {
        let conn = test_db();
        let doctor_id = make_doctor(&conn, "Dr. Weber");
        make_appointment(&conn, doctor_id, day(2024, 1, 10));
        make_appointment(&conn, doctor_id, day(2024, 3, 1));
        make_appointment(&conn, doctor_id, day(2024, 2, 5));

        let all = get_all_appointments(&conn).unwrap();
        let dates: Vec<_> = all.iter().map(|a| a.date).collect();
        assert_eq!(
            dates,
            vec![day(2024, 3, 1), day(2024, 2, 5), day(2024, 1, 10)]
        );
    }

    #[test]
    fn appointments_filtered_by_doctor() {
        let conn = test_db();
        let weber = make_doctor(&conn, "Dr. Weber");
        let abel = make_doctor(&conn, "Dr. Abel");
        make_appointment(&conn, weber, day(2024, 1, 10));
        make_appointment(&conn, abel, day(2024, 2, 5));

        let for_weber = get_appointments_for_doctor(&conn, &weber).unwrap();
        assert_eq!(for_weber.len(), 1);
        assert_eq!(for_weber[0].doctor_id, weber);
    }

    #[test]
    fn appointment_document_ids_round_trip() {
        let conn = test_db();
        let doctor_id = make_doctor(&conn, "Dr. Weber");
        let id = make_appointment(&conn, doctor_id, day(2024, 3, 1));
        let linked = vec![Uuid::new_v4(), Uuid::new_v4()];

        let mut apt = get_appointment(&conn, &id).unwrap().unwrap();
        apt.document_ids = linked.clone();
        apt.findings = Some("Elevated blood pressure".into());
        update_appointment(&conn, &apt).unwrap();

        let reloaded = get_appointment(&conn, &id).unwrap().unwrap();
        assert_eq!(reloaded.document_ids, linked);
        assert_eq!(reloaded.findings.as_deref(), Some("Elevated blood pressure"));
    }

    #[test]
    fn appointment_delete_missing_is_not_found() {
        let conn = test_db();
        let err = delete_appointment(&conn, &Uuid::new_v4()).unwrap_err();
        assert!(matches!(err, crate::db::DatabaseError::NotFound { .. }));
    }

    // ── Medications ────────────────────────────────────────────────────

    #[test]
    fn medication_insert_and_retrieve() {
        let conn = test_db();
        let doctor_id = make_doctor(&conn, "Dr. Weber");
        let id = Uuid::new_v4();
        insert_medication(
            &conn,
            &Medication {
                id,
                name: "Ibuprofen".into(),
                dosage: "400mg".into(),
                frequency: "twice daily".into(),
                route: "oral".into(),
                start_date: day(2024, 2, 1),
                end_date: Some(day(2024, 2, 14)),
                prescribing_doctor_id: Some(doctor_id),
                appointment_id: None,
                purpose: Some("Back pain".into()),
                side_effects: vec!["nausea".into()],
                notes: None,
                is_active: true,
                created_at: ts("2024-02-01 09:00:00"),
                updated_at: ts("2024-02-01 09:00:00"),
            },
        )
        .unwrap();

        let med = get_medication(&conn, &id).unwrap().unwrap();
        assert_eq!(med.name, "Ibuprofen");
        assert_eq!(med.prescribing_doctor_id, Some(doctor_id));
        assert_eq!(med.end_date, Some(day(2024, 2, 14)));
        assert_eq!(med.side_effects, vec!["nausea".to_string()]);
    }

    #[test]
    fn medication_without_prescriber() {
        let conn = test_db();
        let id = Uuid::new_v4();
        insert_medication(
            &conn,
            &Medication {
                id,
                name: "Vitamin D".into(),
                dosage: "1000 IU".into(),
                frequency: "daily".into(),
                route: "oral".into(),
                start_date: day(2024, 1, 1),
                end_date: None,
                prescribing_doctor_id: None,
                appointment_id: None,
                purpose: None,
                side_effects: vec![],
                notes: None,
                is_active: true,
                created_at: ts("2024-01-01 09:00:00"),
                updated_at: ts("2024-01-01 09:00:00"),
            },
        )
        .unwrap();

        let med = get_medication(&conn, &id).unwrap().unwrap();
        assert!(med.prescribing_doctor_id.is_none());
        assert!(med.side_effects.is_empty());
    }

    #[test]
    fn medications_listed_by_start_date_descending() {
        let conn = test_db();
        for (name, start) in [
            ("A", day(2024, 1, 1)),
            ("B", day(2024, 3, 1)),
            ("C", day(2024, 2, 1)),
        ] {
            insert_medication(
                &conn,
                &Medication {
                    id: Uuid::new_v4(),
                    name: name.into(),
                    dosage: "1mg".into(),
                    frequency: "daily".into(),
                    route: "oral".into(),
                    start_date: start,
                    end_date: None,
                    prescribing_doctor_id: None,
                    appointment_id: None,
                    purpose: None,
                    side_effects: vec![],
                    notes: None,
                    is_active: true,
                    created_at: ts("2024-01-01 09:00:00"),
                    updated_at: ts("2024-01-01 09:00:00"),
                },
            )
            .unwrap();
        }

        let all = get_all_medications(&conn).unwrap();
        let names: Vec<_> = all.iter().map(|m| m.name.as_str()).collect();
        assert_eq!(names, vec!["B", "C", "A"]);
    }

    // ── Status entries ─────────────────────────────────────────────────

    #[test]
    fn status_entry_insert_and_retrieve() {
        let conn = test_db();
        let id = make_status_entry(&conn, day(2024, 3, 2), 7);

        let entry = get_status_entry(&conn, &id).unwrap().unwrap();
        assert_eq!(entry.pain_level, 7);
        assert_eq!(entry.symptoms, vec!["headache".to_string(), "fatigue".to_string()]);
        assert_eq!(entry.mood.as_deref(), Some("tired"));
    }

    #[test]
    fn status_entry_update_pain_level() {
        let conn = test_db();
        let id = make_status_entry(&conn, day(2024, 3, 2), 7);

        let mut entry = get_status_entry(&conn, &id).unwrap().unwrap();
        entry.pain_level = 3;
        entry.symptoms.clear();
        update_status_entry(&conn, &entry).unwrap();

        let reloaded = get_status_entry(&conn, &id).unwrap().unwrap();
        assert_eq!(reloaded.pain_level, 3);
        assert!(reloaded.symptoms.is_empty());
    }

    #[test]
    fn status_entries_listed_newest_first() {
        let conn = test_db();
        make_status_entry(&conn, day(2024, 3, 2), 4);
        make_status_entry(&conn, day(2024, 3, 5), 6);
        make_status_entry(&conn, day(2024, 3, 1), 2);

        let all = get_all_status_entries(&conn).unwrap();
        let dates: Vec<_> = all.iter().map(|e| e.date).collect();
        assert_eq!(dates, vec![day(2024, 3, 5), day(2024, 3, 2), day(2024, 3, 1)]);
    }

    #[test]
    fn status_entry_pain_level_out_of_range_rejected() {
        let conn = test_db();
        let result = insert_status_entry(
            &conn,
            &StatusEntry {
                id: Uuid::new_v4(),
                date: day(2024, 3, 2),
                time: None,
                pain_level: 11,
                symptoms: vec![],
                mood: None,
                notes: None,
                document_ids: vec![],
                created_at: ts("2024-01-01 09:00:00"),
                updated_at: ts("2024-01-01 09:00:00"),
            },
        );
        assert!(result.is_err(), "CHECK constraint should reject pain 11");
    }

    // ── Documents ──────────────────────────────────────────────────────

    #[test]
    fn document_insert_and_retrieve() {
        let conn = test_db();
        let doctor_id = make_doctor(&conn, "Dr. Weber");
        let apt_id = make_appointment(&conn, doctor_id, day(2024, 3, 1));

        let id = Uuid::new_v4();
        insert_document(
            &conn,
            &Document {
                id,
                doc_type: "lab_report".into(),
                title: "Blood panel".into(),
                description: Some("Quarterly blood work".into()),
                date: day(2024, 3, 1),
                doctor_id: Some(doctor_id),
                appointment_id: Some(apt_id),
                file_path: "documents/blood-panel.pdf".into(),
                file_type: Some("application/pdf".into()),
                tags: vec!["blood".into(), "routine".into()],
                created_at: ts("2024-03-01 09:00:00"),
                updated_at: ts("2024-03-01 09:00:00"),
            },
        )
        .unwrap();

        let doc = get_document(&conn, &id).unwrap().unwrap();
        assert_eq!(doc.title, "Blood panel");
        assert_eq!(doc.doc_type, "lab_report");
        assert_eq!(doc.doctor_id, Some(doctor_id));
        assert_eq!(doc.appointment_id, Some(apt_id));
        assert_eq!(doc.tags, vec!["blood".to_string(), "routine".to_string()]);
    }

    #[test]
    fn document_update_and_delete() {
        let conn = test_db();
        let id = Uuid::new_v4();
        insert_document(
            &conn,
            &Document {
                id,
                doc_type: "referral".into(),
                title: "Referral letter".into(),
                description: None,
                date: day(2024, 3, 5),
                doctor_id: None,
                appointment_id: None,
                file_path: "documents/referral.pdf".into(),
                file_type: None,
                tags: vec![],
                created_at: ts("2024-03-05 09:00:00"),
                updated_at: ts("2024-03-05 09:00:00"),
            },
        )
        .unwrap();

        let mut doc = get_document(&conn, &id).unwrap().unwrap();
        doc.description = Some("Referral to neurology".into());
        update_document(&conn, &doc).unwrap();

        let reloaded = get_document(&conn, &id).unwrap().unwrap();
        assert_eq!(reloaded.description.as_deref(), Some("Referral to neurology"));

        delete_document(&conn, &id).unwrap();
        assert!(get_document(&conn, &id).unwrap().is_none());
    }

    // ── Column helpers ─────────────────────────────────────────────────

    #[test]
    fn malformed_json_list_reads_as_empty() {
        let strings: Vec<String> = list_from_json("not json");
        assert!(strings.is_empty());
        let ids: Vec<Uuid> = list_from_json("{\"oops\": 1}");
        assert!(ids.is_empty());
    }

    #[test]
    fn opt_uuid_tolerates_garbage() {
        assert!(opt_uuid_from_text(None).is_none());
        assert!(opt_uuid_from_text(Some("garbage".into())).is_none());
        let id = Uuid::new_v4();
        assert_eq!(opt_uuid_from_text(Some(id.to_string())), Some(id));
    }
}
