#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use punchclock::api::{
    AttendanceApi, PunchRequest, PunchResponse, SaveFieldRequest, SaveFieldResponse,
};
use punchclock::core::clock::ManualClock;
use punchclock::core::controller::{Controller, ControllerSettings};
use punchclock::errors::{AppError, AppResult};
use std::cell::RefCell;
use std::collections::BTreeMap;
use std::env;
use std::path::PathBuf;
use std::rc::Rc;
use std::time::Duration;

pub fn pcl() -> Command {
    cargo_bin_cmd!("punchclock")
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    std::fs::remove_file(&p).ok();
    p
}

/// What the punch endpoint should answer.
#[derive(Clone)]
pub enum PunchBehavior {
    Success {
        time: String,
        updated_data: Option<BTreeMap<String, String>>,
    },
    Rejected(String),
    TransportError(String),
}

#[derive(Default)]
pub struct Recorded {
    pub saves: Vec<SaveFieldRequest>,
    pub punches: Vec<(PunchRequest, String)>,
    pub page_fetches: usize,
}

struct MockState {
    recorded: Recorded,
    punch_behavior: PunchBehavior,
    save_success: bool,
    save_error: Option<String>,
    page_html: String,
}

/// Recording fake of the attendance server. Clones share state, so tests
/// can hand one copy to the controller and keep another for assertions.
#[derive(Clone)]
pub struct MockApi {
    state: Rc<RefCell<MockState>>,
}

impl Default for MockApi {
    fn default() -> Self {
        Self {
            state: Rc::new(RefCell::new(MockState {
                recorded: Recorded::default(),
                punch_behavior: PunchBehavior::Success {
                    time: "09:00".to_string(),
                    updated_data: None,
                },
                save_success: true,
                save_error: None,
                page_html: String::new(),
            })),
        }
    }
}

impl MockApi {
    pub fn set_punch(&self, behavior: PunchBehavior) {
        self.state.borrow_mut().punch_behavior = behavior;
    }

    pub fn set_save_failure(&self, error: Option<&str>) {
        let mut state = self.state.borrow_mut();
        state.save_success = false;
        state.save_error = error.map(str::to_string);
    }

    pub fn set_page_html(&self, html: &str) {
        self.state.borrow_mut().page_html = html.to_string();
    }

    pub fn saves(&self) -> Vec<SaveFieldRequest> {
        self.state.borrow().recorded.saves.clone()
    }

    pub fn punches(&self) -> Vec<(PunchRequest, String)> {
        self.state.borrow().recorded.punches.clone()
    }

    pub fn page_fetches(&self) -> usize {
        self.state.borrow().recorded.page_fetches
    }
}

impl AttendanceApi for MockApi {
    fn punch(&self, req: &PunchRequest, idempotency_key: &str) -> AppResult<PunchResponse> {
        let mut state = self.state.borrow_mut();
        state
            .recorded
            .punches
            .push((req.clone(), idempotency_key.to_string()));

        match state.punch_behavior.clone() {
            PunchBehavior::Success { time, updated_data } => Ok(PunchResponse {
                success: true,
                time: Some(time),
                updated_data,
                error: None,
            }),
            PunchBehavior::Rejected(error) => Ok(PunchResponse {
                success: false,
                time: None,
                updated_data: None,
                error: Some(error),
            }),
            PunchBehavior::TransportError(msg) => Err(AppError::Other(msg)),
        }
    }

    fn save_field(&self, req: &SaveFieldRequest) -> AppResult<SaveFieldResponse> {
        let mut state = self.state.borrow_mut();
        state.recorded.saves.push(req.clone());
        Ok(SaveFieldResponse {
            success: state.save_success,
            error: state.save_error.clone(),
        })
    }

    fn fetch_page(&self, _path: &str) -> AppResult<String> {
        let mut state = self.state.borrow_mut();
        state.recorded.page_fetches += 1;
        Ok(state.page_html.clone())
    }

    fn export_excel(&self, _path: &str) -> AppResult<Vec<u8>> {
        Ok(b"stub-xlsx".to_vec())
    }
}

/// Settings mirroring the web page's timings.
pub fn test_settings() -> ControllerSettings {
    ControllerSettings {
        debounce: Duration::from_millis(1000),
        notice_ttl: Duration::from_millis(3000),
        resync_delay: Duration::from_millis(2000),
        refresh_every: Duration::from_secs(300),
        long_shift_hours: 12.0,
        standard_hours: 8.0,
        break_minutes: 60,
        page_path: "/".to_string(),
        excel_export_path: Some("/export_excel".to_string()),
    }
}

pub fn new_controller() -> (Controller<MockApi, ManualClock>, MockApi, ManualClock) {
    let api = MockApi::default();
    let clock = ManualClock::new();
    let ctl = Controller::new(api.clone(), clock.clone(), test_settings());
    (ctl, api, clock)
}

/// Minimal month page with one `<input>` per `(name, value)` pair.
pub fn page_html(inputs: &[(&str, &str)]) -> String {
    let mut html = String::from("<html><body><table><tr>");
    for (name, value) in inputs {
        html.push_str(&format!(
            r#"<td><input type="text" name="{}" value="{}"></td>"#,
            name, value
        ));
    }
    html.push_str("</tr></table></body></html>");
    html
}
