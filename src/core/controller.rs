//! The UI controller.
//!
//! Owns the form view-model and every transient piece of client state the
//! browser original kept in the DOM: pending autosaves, the visible
//! notification, the punch busy marker. All deferred work goes through the
//! scheduler and fires from `tick`, so the whole flow is single-threaded
//! and deterministic under a manual clock.

use crate::api::{AttendanceApi, PunchRequest, SaveFieldRequest};
use crate::config::Config;
use crate::core::calculator::hours;
use crate::core::calculator::stats::{self, MonthlySummary};
use crate::core::clock::Clock;
use crate::core::scheduler::{Scheduler, Task};
use crate::core::validate::{TimeValidation, validate_time_value};
use crate::errors::AppResult;
use crate::models::field::{FieldId, FieldKind};
use crate::models::form::Form;
use crate::models::notification::Notification;
use crate::utils::time::format_hours;
use std::time::Duration;
use tracing::{debug, warn};
use uuid::Uuid;

#[derive(Debug, Clone)]
pub struct ControllerSettings {
    pub debounce: Duration,
    pub notice_ttl: Duration,
    pub resync_delay: Duration,
    pub refresh_every: Duration,
    pub long_shift_hours: f64,
    pub standard_hours: f64,
    pub break_minutes: i64,
    /// Page the form was loaded from; gates the background refresh.
    pub page_path: String,
    /// Server-side spreadsheet export; None makes Ctrl+E a no-op.
    pub excel_export_path: Option<String>,
}

impl ControllerSettings {
    pub fn from_config(cfg: &Config, page_path: String) -> Self {
        Self {
            debounce: Duration::from_millis(cfg.autosave_debounce_ms),
            notice_ttl: Duration::from_millis(cfg.notification_ms),
            resync_delay: Duration::from_millis(cfg.reload_delay_ms),
            refresh_every: Duration::from_secs(cfg.refresh_interval_secs),
            long_shift_hours: cfg.long_shift_hours,
            standard_hours: cfg.standard_hours,
            break_minutes: cfg.break_minutes,
            page_path,
            excel_export_path: cfg.excel_export_path.clone(),
        }
    }
}

pub struct Controller<A: AttendanceApi, C: Clock> {
    api: A,
    clock: C,
    settings: ControllerSettings,
    form: Form,
    scheduler: Scheduler,
    notice: Option<Notification>,
    punch_busy: Option<FieldKind>,
}

impl<A: AttendanceApi, C: Clock> Controller<A, C> {
    pub fn new(api: A, clock: C, settings: ControllerSettings) -> Self {
        let now = clock.now();
        let refresh_every = settings.refresh_every;
        Self {
            api,
            clock,
            settings,
            form: Form::new(),
            scheduler: Scheduler::new(now, refresh_every),
            notice: None,
            punch_busy: None,
        }
    }

    // ------------------------------------------------
    // State accessors
    // ------------------------------------------------

    pub fn form(&self) -> &Form {
        &self.form
    }

    pub fn set_form(&mut self, form: Form) {
        self.form = form;
    }

    pub fn notice(&self) -> Option<&Notification> {
        self.notice.as_ref()
    }

    pub fn punch_busy(&self) -> Option<&FieldKind> {
        self.punch_busy.as_ref()
    }

    pub fn settings(&self) -> &ControllerSettings {
        &self.settings
    }

    /// Edits waiting out their debounce window.
    pub fn pending_saves(&self) -> usize {
        self.scheduler.pending_save_count()
    }

    // ------------------------------------------------
    // Form synchronization
    // ------------------------------------------------

    /// Fetch the month page and replace the form with the server's view.
    pub fn load_form(&mut self) -> AppResult<()> {
        let html = self.api.fetch_page(&self.settings.page_path)?;
        self.form
            .replace_with(crate::api::page::form_from_page(&html));
        debug!(fields = self.form.len(), "form loaded from page");
        Ok(())
    }

    // ------------------------------------------------
    // Notifications (one visible at a time)
    // ------------------------------------------------

    /// Display a notification. Any currently visible one is replaced, and
    /// the dismissal deadline restarts from now.
    pub fn show_notification(&mut self, notification: Notification) {
        self.notice = Some(notification);
        let at = self.clock.now() + self.settings.notice_ttl;
        self.scheduler.schedule_dismiss(at);
    }

    // ------------------------------------------------
    // Editing: autosave + validation
    // ------------------------------------------------

    /// A user edit (change event): store the value, arm this field's
    /// debounce deadline, and recompute dependent hours.
    pub fn field_changed(&mut self, id: &FieldId, value: &str) {
        self.form.edit(id, value);
        let at = self.clock.now() + self.settings.debounce;
        self.scheduler.schedule_save(id, at);

        if id.kind.is_time() {
            self.recompute_hours(&id.date);
        }
    }

    /// Focus left a field (blur event): validate time inputs.
    pub fn field_blurred(&mut self, id: &FieldId) {
        if !id.kind.is_time() {
            return;
        }
        let value = self.form.value(id).unwrap_or_default().to_string();
        match validate_time_value(&value) {
            TimeValidation::Valid => self.form.mark_invalid(id, false),
            TimeValidation::Invalid => {
                self.form.mark_invalid(id, true);
                self.show_notification(Notification::warning(
                    "Enter a valid time in HH:MM format",
                ));
            }
            TimeValidation::Skipped => {}
        }
    }

    fn save_field_now(&mut self, id: &FieldId) {
        let Some(value) = self.form.value(id).map(str::to_string) else {
            return;
        };
        let req = SaveFieldRequest {
            date: id.date.clone(),
            field: id.kind.fk_as_str().to_string(),
            value,
        };
        match self.api.save_field(&req) {
            Ok(resp) if resp.success => {
                self.form.clear_dirty(id);
                self.show_notification(Notification::success("Changes autosaved"));
            }
            Ok(resp) => {
                let msg = resp.error.unwrap_or_else(|| "Save failed".to_string());
                self.show_notification(Notification::danger(msg));
            }
            Err(e) => {
                warn!(field = %id, error = %e, "save_field failed");
                self.show_notification(Notification::danger(format!("Save failed: {}", e)));
            }
        }
    }

    /// Ctrl+S: flush every pending and dirty field immediately.
    pub fn submit_all(&mut self) {
        let mut ids = self.scheduler.take_pending_saves();
        for id in self.form.dirty_fields() {
            if !ids.contains(&id) {
                ids.push(id);
            }
        }
        for id in &ids {
            self.save_field_now(id);
        }
    }

    // ------------------------------------------------
    // Hour computation
    // ------------------------------------------------

    /// Recompute `work_hours_{date}` (and dependents) from the check pair.
    /// Computed writes never schedule a save; persistence only happens when
    /// the user edits a field.
    pub fn recompute_hours(&mut self, date: &str) {
        let check_in = self
            .form
            .value(&FieldId::new(FieldKind::CheckIn, date))
            .unwrap_or_default()
            .to_string();
        let check_out = self
            .form
            .value(&FieldId::new(FieldKind::CheckOut, date))
            .unwrap_or_default()
            .to_string();

        if check_in.is_empty() || check_out.is_empty() {
            return;
        }
        let Ok(worked) = hours::work_hours(&check_in, &check_out) else {
            return;
        };

        self.form.set_value(
            &FieldId::new(FieldKind::WorkHours, date),
            &format_hours(hours::round1(worked)),
        );

        let actual = hours::round1(hours::actual_hours(worked, self.settings.break_minutes));
        let overtime = hours::round1(hours::overtime_hours(actual, self.settings.standard_hours));
        self.form.set_value(
            &FieldId::new(FieldKind::ActualHours, date),
            &format_hours(actual),
        );
        self.form.set_value(
            &FieldId::new(FieldKind::OvertimeHours, date),
            &format_hours(overtime),
        );

        if worked > self.settings.long_shift_hours {
            self.show_notification(Notification::warning(
                "Long shift detected. Check your break times.",
            ));
        }
    }

    pub fn monthly_summary(&self) -> MonthlySummary {
        stats::monthly_summary(&self.form)
    }

    // ------------------------------------------------
    // Punch
    // ------------------------------------------------

    /// Record a check-in or check-out for `date`. Returns whether the
    /// server accepted it. A punch already in flight makes this a no-op:
    /// the double-submission guard the original page lacked.
    pub fn punch(&mut self, kind: &FieldKind, date: &str) -> bool {
        if !kind.is_punchable() {
            self.show_notification(Notification::danger(format!(
                "Cannot punch field '{}'",
                kind
            )));
            return false;
        }
        if self.punch_busy.is_some() {
            debug!(%kind, "punch ignored, another punch in flight");
            return false;
        }

        self.punch_busy = Some(kind.clone());
        let key = Uuid::new_v4().to_string();
        let req = PunchRequest {
            date: date.to_string(),
            field: kind.fk_as_str().to_string(),
        };

        let ok = match self.api.punch(&req, &key) {
            Ok(resp) if resp.success => {
                let time = resp.time.unwrap_or_default();
                let id = FieldId::new(kind.clone(), date);
                self.form.set_value(&id, &time);
                self.form.set_display(&id, &time);

                if let Some(updated) = resp.updated_data {
                    for (field, value) in updated {
                        let fid = FieldId::new(FieldKind::fk_from_str(&field), date);
                        self.form.set_value(&fid, &value);
                    }
                }
                self.recompute_hours(date);

                self.show_notification(Notification::success(format!(
                    "Recorded {} at {}",
                    kind, time
                )));

                // The response already updated the form; the full re-sync
                // below is the fallback against drift.
                let at = self.clock.now() + self.settings.resync_delay;
                self.scheduler.schedule_resync(at);
                true
            }
            Ok(resp) => {
                let msg = resp
                    .error
                    .unwrap_or_else(|| "Punch was rejected by the server".to_string());
                self.show_notification(Notification::danger(msg));
                false
            }
            Err(e) => {
                warn!(%kind, error = %e, "punch failed");
                self.show_notification(Notification::danger(format!("Punch failed: {}", e)));
                false
            }
        };

        // Always restore the control, whatever happened above.
        self.punch_busy = None;
        ok
    }

    // ------------------------------------------------
    // Export
    // ------------------------------------------------

    /// Download the server-side spreadsheet. Silent no-op when no export
    /// path is configured, like a page without the export link.
    pub fn download_excel(&mut self) -> Option<Vec<u8>> {
        let path = self.settings.excel_export_path.clone()?;
        match self.api.export_excel(&path) {
            Ok(bytes) => {
                self.show_notification(Notification::success("Spreadsheet downloaded"));
                Some(bytes)
            }
            Err(e) => {
                self.show_notification(Notification::danger(format!("Export failed: {}", e)));
                None
            }
        }
    }

    // ------------------------------------------------
    // Cooperative scheduling
    // ------------------------------------------------

    /// Run everything whose deadline has passed.
    pub fn tick(&mut self) {
        let now = self.clock.now();
        for task in self.scheduler.due(now) {
            match task {
                Task::FlushSave(id) => self.save_field_now(&id),
                Task::DismissNotice => self.notice = None,
                Task::Resync => self.resync(),
                Task::Refresh => self.background_refresh(),
            }
        }
    }

    fn resync(&mut self) {
        match self.api.fetch_page(&self.settings.page_path) {
            Ok(html) => {
                self.form
                    .replace_with(crate::api::page::form_from_page(&html));
                debug!("form re-synced from server");
            }
            Err(e) => debug!(error = %e, "re-sync fetch failed"),
        }
    }

    /// Periodic page refresh; only logs, matching the original placeholder.
    fn background_refresh(&mut self) {
        let path = &self.settings.page_path;
        if path != "/" && !path.starts_with("/attendance") {
            return;
        }
        match self.api.fetch_page(path) {
            Ok(html) => debug!(bytes = html.len(), "background refresh fetched page"),
            Err(e) => debug!(error = %e, "background refresh failed"),
        }
    }
}
