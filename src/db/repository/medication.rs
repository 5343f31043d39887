use rusqlite::{params, Connection, Row};
use uuid::Uuid;

use crate::db::DatabaseError;
use crate::models::Medication;

use super::{json_list, list_from_json, opt_uuid_from_text};

fn medication_from_row(row: &Row<'_>) -> rusqlite::Result<Medication> {
    Ok(Medication {
        id: Uuid::parse_str(&row.get::<_, String>(0)?).unwrap_or_default(),
        name: row.get(1)?,
        dosage: row.get(2)?,
        frequency: row.get(3)?,
        route: row.get(4)?,
        start_date: row.get(5)?,
        end_date: row.get(6)?,
        prescribing_doctor_id: opt_uuid_from_text(row.get(7)?),
        appointment_id: opt_uuid_from_text(row.get(8)?),
        purpose: row.get(9)?,
        side_effects: list_from_json(&row.get::<_, String>(10)?),
        notes: row.get(11)?,
        is_active: row.get::<_, i32>(12)? != 0,
        created_at: row.get(13)?,
        updated_at: row.get(14)?,
    })
}

pub fn insert_medication(conn: &Connection, med: &Medication) -> Result<(), DatabaseError> {
    conn.execute(
        "INSERT INTO medications (id, name, dosage, frequency, route, start_date, end_date,
         prescribing_doctor_id, appointment_id, purpose, side_effects, notes, is_active,
         created_at, updated_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13, ?14, ?15)",
        params![
            med.id.to_string(),
            med.name,
            med.dosage,
            med.frequency,
            med.route,
            med.start_date,
            med.end_date,
            med.prescribing_doctor_id.map(|id| id.to_string()),
            med.appointment_id.map(|id| id.to_string()),
            med.purpose,
            json_list(&med.side_effects),
            med.notes,
            med.is_active as i32,
            med.created_at,
            med.updated_at,
        ],
    )?;
    Ok(())
}

pub fn get_medication(conn: &Connection, id: &Uuid) -> Result<Option<Medication>, DatabaseError> {
    let mut stmt = conn.prepare(
        "SELECT id, name, dosage, frequency, route, start_date, end_date,
         prescribing_doctor_id, appointment_id, purpose, side_effects, notes, is_active,
         created_at, updated_at
         FROM medications WHERE id = ?1",
    )?;

    let result = stmt.query_row(params![id.to_string()], medication_from_row);
    match result {
        Ok(med) => Ok(Some(med)),
        Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
        Err(e) => Err(e.into()),
    }
}

/// All medications, newest first (anchor start date descending).
pub fn get_all_medications(conn: &Connection) -> Result<Vec<Medication>, DatabaseError> {
    let mut stmt = conn.prepare(
        "SELECT id, name, dosage, frequency, route, start_date, end_date,
         prescribing_doctor_id, appointment_id, purpose, side_effects, notes, is_active,
         created_at, updated_at
         FROM medications ORDER BY start_date DESC",
    )?;

    let rows = stmt.query_map([], medication_from_row)?;
    rows.map(|r| r.map_err(DatabaseError::from)).collect()
}

pub fn update_medication(conn: &Connection, med: &Medication) -> Result<(), DatabaseError> {
    let changed = conn.execute(
        "UPDATE medications SET name = ?2, dosage = ?3, frequency = ?4, route = ?5,
         start_date = ?6, end_date = ?7, prescribing_doctor_id = ?8, appointment_id = ?9,
         purpose = ?10, side_effects = ?11, notes = ?12, is_active = ?13, updated_at = ?14
         WHERE id = ?1",
        params![
            med.id.to_string(),
            med.name,
            med.dosage,
            med.frequency,
            med.route,
            med.start_date,
            med.end_date,
            med.prescribing_doctor_id.map(|id| id.to_string()),
            med.appointment_id.map(|id| id.to_string()),
            med.purpose,
            json_list(&med.side_effects),
            med.notes,
            med.is_active as i32,
            med.updated_at,
        ],
    )?;

    if changed == 0 {
        return Err(DatabaseError::NotFound {
            entity_type: "medication".into(),
            id: med.id.to_string(),
        });
    }
    Ok(())
}

pub fn delete_medication(conn: &Connection, id: &Uuid) -> Result<(), DatabaseError> {
    let changed = conn.execute(
        "DELETE FROM medications WHERE id = ?1",
        params![id.to_string()],
    )?;
    if changed == 0 {
        return Err(DatabaseError::NotFound {
            entity_type: "medication".into(),
            id: id.to_string(),
        });
    }
    Ok(())
}
