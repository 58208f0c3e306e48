//! Blocking HTTP client for the attendance server.

use super::{AttendanceApi, PunchRequest, PunchResponse, SaveFieldRequest, SaveFieldResponse};
use crate::errors::{AppError, AppResult};
use reqwest::blocking::Client;
use std::path::PathBuf;
use tracing::debug;

pub struct HttpApi {
    base_url: String,
    client: Client,
}

impl HttpApi {
    /// The original page never set request timeouts; neither do we.
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: Client::new(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

impl AttendanceApi for HttpApi {
    fn punch(&self, req: &PunchRequest, idempotency_key: &str) -> AppResult<PunchResponse> {
        debug!(date = %req.date, field = %req.field, "POST /api/punch");
        let resp = self
            .client
            .post(self.url("/api/punch"))
            .header("X-Idempotency-Key", idempotency_key)
            .json(req)
            .send()?
            .json::<PunchResponse>()?;
        debug!(success = resp.success, "punch response");
        Ok(resp)
    }

    fn save_field(&self, req: &SaveFieldRequest) -> AppResult<SaveFieldResponse> {
        debug!(date = %req.date, field = %req.field, "POST /api/save_field");
        let resp = self
            .client
            .post(self.url("/api/save_field"))
            .json(req)
            .send()?
            .json::<SaveFieldResponse>()?;
        debug!(success = resp.success, "save_field response");
        Ok(resp)
    }

    fn fetch_page(&self, path: &str) -> AppResult<String> {
        debug!(path, "GET page");
        Ok(self.client.get(self.url(path)).send()?.text()?)
    }

    fn export_excel(&self, path: &str) -> AppResult<Vec<u8>> {
        debug!(path, "GET excel export");
        Ok(self.client.get(self.url(path)).send()?.bytes()?.to_vec())
    }
}

/// Offline stand-in that serves the month page from a saved HTML file.
/// Mutating calls fail: there is no server to reach.
pub struct PageFileApi {
    path: PathBuf,
}

impl PageFileApi {
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self { path: path.into() }
    }
}

impl AttendanceApi for PageFileApi {
    fn punch(&self, _req: &PunchRequest, _idempotency_key: &str) -> AppResult<PunchResponse> {
        Err(AppError::Api("offline: no server configured".to_string()))
    }

    fn save_field(&self, _req: &SaveFieldRequest) -> AppResult<SaveFieldResponse> {
        Err(AppError::Api("offline: no server configured".to_string()))
    }

    fn fetch_page(&self, _path: &str) -> AppResult<String> {
        Ok(std::fs::read_to_string(&self.path)?)
    }

    fn export_excel(&self, _path: &str) -> AppResult<Vec<u8>> {
        Err(AppError::Api("offline: no server configured".to_string()))
    }
}
