//! Wire contracts of the attendance server and the client trait the
//! controller talks through.

pub mod client;
pub mod page;

pub use client::{HttpApi, PageFileApi};

use crate::errors::AppResult;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Body of `POST /api/punch`.
#[derive(Debug, Clone, Serialize)]
pub struct PunchRequest {
    pub date: String,
    pub field: String,
}

/// Response of `POST /api/punch`. `updated_data` keys are bare field names,
/// applied to the punched date.
#[derive(Debug, Clone, Deserialize)]
pub struct PunchResponse {
    pub success: bool,
    #[serde(default)]
    pub time: Option<String>,
    #[serde(default)]
    pub updated_data: Option<BTreeMap<String, String>>,
    #[serde(default)]
    pub error: Option<String>,
}

/// Body of `POST /api/save_field`.
#[derive(Debug, Clone, Serialize)]
pub struct SaveFieldRequest {
    pub date: String,
    pub field: String,
    pub value: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SaveFieldResponse {
    pub success: bool,
    #[serde(default)]
    pub error: Option<String>,
}

/// What the controller needs from the server. A trait seam so tests can
/// record requests and feed back canned responses.
pub trait AttendanceApi {
    /// Record a check-in/check-out. The idempotency key guards against a
    /// punch reaching the server twice from a double submission.
    fn punch(&self, req: &PunchRequest, idempotency_key: &str) -> AppResult<PunchResponse>;

    fn save_field(&self, req: &SaveFieldRequest) -> AppResult<SaveFieldResponse>;

    /// Fetch the server-rendered page at `path` (the month view).
    fn fetch_page(&self, path: &str) -> AppResult<String>;

    /// Download the server-side spreadsheet export.
    fn export_excel(&self, path: &str) -> AppResult<Vec<u8>>;
}
