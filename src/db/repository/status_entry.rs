use rusqlite::{params, Connection, Row};
use uuid::Uuid;

use crate::db::DatabaseError;
use crate::models::StatusEntry;

use super::{json_list, list_from_json};

fn status_from_row(row: &Row<'_>) -> rusqlite::Result<StatusEntry> {
    Ok(StatusEntry {
        id: Uuid::parse_str(&row.get::<_, String>(0)?).unwrap_or_default(),
        date: row.get(1)?,
        time: row.get(2)?,
        pain_level: row.get::<_, i32>(3)? as u8,
        symptoms: list_from_json(&row.get::<_, String>(4)?),
        mood: row.get(5)?,
        notes: row.get(6)?,
        document_ids: list_from_json(&row.get::<_, String>(7)?),
        created_at: row.get(8)?,
        updated_at: row.get(9)?,
    })
}

pub fn insert_status_entry(conn: &Connection, entry: &StatusEntry) -> Result<(), DatabaseError> {
    conn.execute(
        "INSERT INTO status_entries (id, date, time, pain_level, symptoms, mood, notes,
         document_ids, created_at, updated_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10)",
        params![
            entry.id.to_string(),
            entry.date,
            entry.time,
            entry.pain_level as i32,
            json_list(&entry.symptoms),
            entry.mood,
            entry.notes,
            json_list(&entry.document_ids),
            entry.created_at,
            entry.updated_at,
        ],
    )?;
    Ok(())
}

pub fn get_status_entry(conn: &Connection, id: &Uuid) -> Result<Option<StatusEntry>, DatabaseError> {
    let mut stmt = conn.prepare(
        "SELECT id, date, time, pain_level, symptoms, mood, notes, document_ids,
         created_at, updated_at
         FROM status_entries WHERE id = ?1",
    )?;

    let result = stmt.query_row(params![id.to_string()], status_from_row);
    match result {
        Ok(entry) => Ok(Some(entry)),
        Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
        Err(e) => Err(e.into()),
    }
}

/// All status entries, newest first (anchor date descending).
pub fn get_all_status_entries(conn: &Connection) -> Result<Vec<StatusEntry>, DatabaseError> {
    let mut stmt = conn.prepare(
        "SELECT id, date, time, pain_level, symptoms, mood, notes, document_ids,
         created_at, updated_at
         FROM status_entries ORDER BY date DESC",
    )?;

    let rows = stmt.query_map([], status_from_row)?;
    rows.map(|r| r.map_err(DatabaseError::from)).collect()
}

pub fn update_status_entry(conn: &Connection, entry: &StatusEntry) -> Result<(), DatabaseError> {
    let changed = conn.execute(
        "UPDATE status_entries SET date = ?2, time = ?3, pain_level = ?4, symptoms = ?5,
         mood = ?6, notes = ?7, document_ids = ?8, updated_at = ?9
         WHERE id = ?1",
        params![
            entry.id.to_string(),
            entry.date,
            entry.time,
            entry.pain_level as i32,
            json_list(&entry.symptoms),
            entry.mood,
            entry.notes,
            json_list(&entry.document_ids),
            entry.updated_at,
        ],
    )?;

    if changed == 0 {
        return Err(DatabaseError::NotFound {
            entity_type: "status_entry".into(),
            id: entry.id.to_string(),
        });
    }
    Ok(())
}

pub fn delete_status_entry(conn: &Connection, id: &Uuid) -> Result<(), DatabaseError> {
    let changed = conn.execute(
        "DELETE FROM status_entries WHERE id = ?1",
        params![id.to_string()],
    )?;
    if changed == 0 {
        return Err(DatabaseError::NotFound {
            entity_type: "status_entry".into(),
            id: id.to_string(),
        });
    }
    Ok(())
}
