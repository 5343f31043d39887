use rusqlite::{params, Connection, Row};
use uuid::Uuid;

use crate::db::DatabaseError;
use crate::models::Doctor;

fn doctor_from_row(row: &Row<'_>) -> rusqlite::Result<Doctor> {
    Ok(Doctor {
        id: Uuid::parse_str(&row.get::<_, String>(0)?).unwrap_or_default(),
        name: row.get(1)?,
        specialty: row.get(2)?,
        clinic: row.get(3)?,
        address: row.get(4)?,
        phone: row.get(5)?,
        email: row.get(6)?,
        notes: row.get(7)?,
        first_visit: row.get(8)?,
        is_active: row.get::<_, i32>(9)? != 0,
        created_at: row.get(10)?,
        updated_at: row.get(11)?,
    })
}

pub fn insert_doctor(conn: &Connection, doctor: &Doctor) -> Result<(), DatabaseError> {
    conn.execute(
        "INSERT INTO doctors (id, name, specialty, clinic, address, phone, email, notes,
         first_visit, is_active, created_at, updated_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12)",
        params![
            doctor.id.to_string(),
            doctor.name,
            doctor.specialty,
            doctor.clinic,
            doctor.address,
            doctor.phone,
            doctor.email,
            doctor.notes,
            doctor.first_visit,
            doctor.is_active as i32,
            doctor.created_at,
            doctor.updated_at,
        ],
    )?;
    Ok(())
}

pub fn get_doctor(conn: &Connection, id: &Uuid) -> Result<Option<Doctor>, DatabaseError> {
    let mut stmt = conn.prepare(
        "SELECT id, name, specialty, clinic, address, phone, email, notes,
         first_visit, is_active, created_at, updated_at
         FROM doctors WHERE id = ?1",
    )?;

    let result = stmt.query_row(params![id.to_string()], doctor_from_row);
    match result {
        Ok(doctor) => Ok(Some(doctor)),
        Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
        Err(e) => Err(e.into()),
    }
}

pub fn get_all_doctors(conn: &Connection) -> Result<Vec<Doctor>, DatabaseError> {
    let mut stmt = conn.prepare(
        "SELECT id, name, specialty, clinic, address, phone, email, notes,
         first_visit, is_active, created_at, updated_at
         FROM doctors ORDER BY name COLLATE NOCASE",
    )?;

    let rows = stmt.query_map([], doctor_from_row)?;
    rows.map(|r| r.map_err(DatabaseError::from)).collect()
}

pub fn update_doctor(conn: &Connection, doctor: &Doctor) -> Result<(), DatabaseError> {
    let changed = conn.execute(
        "UPDATE doctors SET name = ?2, specialty = ?3, clinic = ?4, address = ?5,
         phone = ?6, email = ?7, notes = ?8, first_visit = ?9, is_active = ?10,
         updated_at = ?11
         WHERE id = ?1",
        params![
            doctor.id.to_string(),
            doctor.name,
            doctor.specialty,
            doctor.clinic,
            doctor.address,
            doctor.phone,
            doctor.email,
            doctor.notes,
            doctor.first_visit,
            doctor.is_active as i32,
            doctor.updated_at,
        ],
    )?;

    if changed == 0 {
        return Err(DatabaseError::NotFound {
            entity_type: "doctor".into(),
            id: doctor.id.to_string(),
        });
    }
    Ok(())
}

pub fn delete_doctor(conn: &Connection, id: &Uuid) -> Result<(), DatabaseError> {
    let changed = conn.execute("DELETE FROM doctors WHERE id = ?1", params![id.to_string()])?;
    if changed == 0 {
        return Err(DatabaseError::NotFound {
            entity_type: "doctor".into(),
            id: id.to_string(),
        });
    }
    Ok(())
}
