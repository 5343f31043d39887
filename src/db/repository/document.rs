use rusqlite::{params, Connection, Row};
use uuid::Uuid;

use crate::db::DatabaseError;
use crate::models::Document;

use super::{json_list, list_from_json, opt_uuid_from_text};

fn document_from_row(row: &Row<'_>) -> rusqlite::Result<Document> {
    Ok(Document {
        id: Uuid::parse_str(&row.get::<_, String>(0)?).unwrap_or_default(),
        doc_type: row.get(1)?,
        title: row.get(2)?,
        description: row.get(3)?,
        date: row.get(4)?,
        doctor_id: opt_uuid_from_text(row.get(5)?),
        appointment_id: opt_uuid_from_text(row.get(6)?),
        file_path: row.get(7)?,
        file_type: row.get(8)?,
        tags: list_from_json(&row.get::<_, String>(9)?),
        created_at: row.get(10)?,
        updated_at: row.get(11)?,
    })
}

pub fn insert_document(conn: &Connection, doc: &Document) -> Result<(), DatabaseError> {
    conn.execute(
        "INSERT INTO documents (id, type, title, description, date, doctor_id,
         appointment_id, file_path, file_type, tags, created_at, updated_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12)",
        params![
            doc.id.to_string(),
            doc.doc_type,
            doc.title,
            doc.description,
            doc.date,
            doc.doctor_id.map(|id| id.to_string()),
            doc.appointment_id.map(|id| id.to_string()),
            doc.file_path,
            doc.file_type,
            json_list(&doc.tags),
            doc.created_at,
            doc.updated_at,
        ],
    )?;
    Ok(())
}

pub fn get_document(conn: &Connection, id: &Uuid) -> Result<Option<Document>, DatabaseError> {
    let mut stmt = conn.prepare(
        "SELECT id, type, title, description, date, doctor_id, appointment_id,
         file_path, file_type, tags, created_at, updated_at
         FROM documents WHERE id = ?1",
    )?;

    let result = stmt.query_row(params![id.to_string()], document_from_row);
    match result {
        Ok(doc) => Ok(Some(doc)),
        Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
        Err(e) => Err(e.into()),
    }
}

/// All documents, newest first (anchor date descending).
pub fn get_all_documents(conn: &Connection) -> Result<Vec<Document>, DatabaseError> {
    let mut stmt = conn.prepare(
        "SELECT id, type, title, description, date, doctor_id, appointment_id,
         file_path, file_type, tags, created_at, updated_at
         FROM documents ORDER BY date DESC",
    )?;

    let rows = stmt.query_map([], document_from_row)?;
    rows.map(|r| r.map_err(DatabaseError::from)).collect()
}

pub fn update_document(conn: &Connection, doc: &Document) -> Result<(), DatabaseError> {
    let changed = conn.execute(
        "UPDATE documents SET type = ?2, title = ?3, description = ?4, date = ?5,
         doctor_id = ?6, appointment_id = ?7, file_path = ?8, file_type = ?9,
         tags = ?10, updated_at = ?11
         WHERE id = ?1",
        params![
            doc.id.to_string(),
            doc.doc_type,
            doc.title,
            doc.description,
            doc.date,
            doc.doctor_id.map(|id| id.to_string()),
            doc.appointment_id.map(|id| id.to_string()),
            doc.file_path,
            doc.file_type,
            json_list(&doc.tags),
            doc.updated_at,
        ],
    )?;

    if changed == 0 {
        return Err(DatabaseError::NotFound {
            entity_type: "document".into(),
            id: doc.id.to_string(),
        });
    }
    Ok(())
}

pub fn delete_document(conn: &Connection, id: &Uuid) -> Result<(), DatabaseError> {
    let changed = conn.execute(
        "DELETE FROM documents WHERE id = ?1",
        params![id.to_string()],
    )?;
    if changed == 0 {
        return Err(DatabaseError::NotFound {
            entity_type: "document".into(),
            id: id.to_string(),
        });
    }
    Ok(())
}
