use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Appointment {
    pub id: Uuid,
    pub date: NaiveDate,
    /// Time of day as entered by the user, "HH:MM" or "HH:MM:SS".
    pub time: Option<String>,
    pub doctor_id: Uuid,
    /// Free-form category tag ("checkup", "surgery", ...).
    #[serde(rename = "type")]
    pub appointment_type: String,
    pub reason: String,
    pub findings: Option<String>,
    pub diagnosis: Option<String>,
    #[serde(default)]
    pub recommendations: Vec<String>,
    pub notes: Option<String>,
    pub follow_up_date: Option<NaiveDate>,
    #[serde(default)]
    pub document_ids: Vec<Uuid>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}
