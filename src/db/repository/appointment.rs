use rusqlite::{params, Connection, Row};
use uuid::Uuid;

use crate::db::DatabaseError;
use crate::models::Appointment;

use super::{json_list, list_from_json};

fn appointment_from_row(row: &Row<'_>) -> rusqlite::Result<Appointment> {
    Ok(Appointment {
        id: Uuid::parse_str(&row.get::<_, String>(0)?).unwrap_or_default(),
        date: row.get(1)?,
        time: row.get(2)?,
        doctor_id: Uuid::parse_str(&row.get::<_, String>(3)?).unwrap_or_default(),
        appointment_type: row.get(4)?,
        reason: row.get(5)?,
        findings: row.get(6)?,
        diagnosis: row.get(7)?,
        recommendations: list_from_json(&row.get::<_, String>(8)?),
        notes: row.get(9)?,
        follow_up_date: row.get(10)?,
        document_ids: list_from_json(&row.get::<_, String>(11)?),
        created_at: row.get(12)?,
        updated_at: row.get(13)?,
    })
}

pub fn insert_appointment(conn: &Connection, apt: &Appointment) -> Result<(), DatabaseError> {
    conn.execute(
        "INSERT INTO appointments (id, date, time, doctor_id, type, reason, findings,
         diagnosis, recommendations, notes, follow_up_date, document_ids, created_at, updated_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13, ?14)",
        params![
            apt.id.to_string(),
            apt.date,
            apt.time,
            apt.doctor_id.to_string(),
            apt.appointment_type,
            apt.reason,
            apt.findings,
            apt.diagnosis,
            json_list(&apt.recommendations),
            apt.notes,
            apt.follow_up_date,
            json_list(&apt.document_ids),
            apt.created_at,
            apt.updated_at,
        ],
    )?;
    Ok(())
}

pub fn get_appointment(conn: &Connection, id: &Uuid) -> Result<Option<Appointment>, DatabaseError> {
    let mut stmt = conn.prepare(
        "SELECT id, date, time, doctor_id, type, reason, findings, diagnosis,
         recommendations, notes, follow_up_date, document_ids, created_at, updated_at
         FROM appointments WHERE id = ?1",
    )?;

    let result = stmt.query_row(params![id.to_string()], appointment_from_row);
    match result {
        Ok(apt) => Ok(Some(apt)),
        Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
        Err(e) => Err(e.into()),
    }
}

/// All appointments, newest first (anchor date descending).
pub fn get_all_appointments(conn: &Connection) -> Result<Vec<Appointment>, DatabaseError> {
    let mut stmt = conn.prepare(
        "SELECT id, date, time, doctor_id, type, reason, findings, diagnosis,
         recommendations, notes, follow_up_date, document_ids, created_at, updated_at
         FROM appointments ORDER BY date DESC",
    )?;

    let rows = stmt.query_map([], appointment_from_row)?;
    rows.map(|r| r.map_err(DatabaseError::from)).collect()
}

pub fn get_appointments_for_doctor(
    conn: &Connection,
    doctor_id: &Uuid,
) -> Result<Vec<Appointment>, DatabaseError> {
    let mut stmt = conn.prepare(
        "SELECT id, date, time, doctor_id, type, reason, findings, diagnosis,
         recommendations, notes, follow_up_date, document_ids, created_at, updated_at
         FROM appointments WHERE doctor_id = ?1 ORDER BY date DESC",
    )?;

    let rows = stmt.query_map(params![doctor_id.to_string()], appointment_from_row)?;
    rows.map(|r| r.map_err(DatabaseError::from)).collect()
}

pub fn update_appointment(conn: &Connection, apt: &Appointment) -> Result<(), DatabaseError> {
    let changed = conn.execute(
        "UPDATE appointments SET date = ?2, time = ?3, doctor_id = ?4, type = ?5,
         reason = ?6, findings = ?7, diagnosis = ?8, recommendations = ?9, notes = ?10,
         follow_up_date = ?11, document_ids = ?12, updated_at = ?13
         WHERE id = ?1",
        params![
            apt.id.to_string(),
            apt.date,
            apt.time,
            apt.doctor_id.to_string(),
            apt.appointment_type,
            apt.reason,
            apt.findings,
            apt.diagnosis,
            json_list(&apt.recommendations),
            apt.notes,
            apt.follow_up_date,
            json_list(&apt.document_ids),
            apt.updated_at,
        ],
    )?;

    if changed == 0 {
        return Err(DatabaseError::NotFound {
            entity_type: "appointment".into(),
            id: apt.id.to_string(),
        });
    }
    Ok(())
}

pub fn delete_appointment(conn: &Connection, id: &Uuid) -> Result<(), DatabaseError> {
    let changed = conn.execute(
        "DELETE FROM appointments WHERE id = ?1",
        params![id.to_string()],
    )?;
    if changed == 0 {
        return Err(DatabaseError::NotFound {
            entity_type: "appointment".into(),
            id: id.to_string(),
        });
    }
    Ok(())
}
