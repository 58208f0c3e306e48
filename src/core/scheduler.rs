//! Deferred-task bookkeeping for the controller.
//!
//! Everything the browser original did with `setTimeout`/`setInterval` is a
//! deadline here, fired cooperatively from `tick`. Autosave deadlines are
//! keyed per field: re-scheduling a field replaces only that field's
//! deadline, never another field's.

use crate::models::field::FieldId;
use std::collections::BTreeMap;
use std::time::{Duration, Instant};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Task {
    /// Send a debounced field save to the server.
    FlushSave(FieldId),
    /// Remove the visible notification.
    DismissNotice,
    /// Re-fetch the page and replace the form (post-punch fallback).
    Resync,
    /// Periodic silent page refresh.
    Refresh,
}

#[derive(Debug)]
pub struct Scheduler {
    saves: BTreeMap<FieldId, Instant>,
    dismiss_at: Option<Instant>,
    resync_at: Option<Instant>,
    refresh_every: Duration,
    next_refresh: Instant,
}

impl Scheduler {
    pub fn new(now: Instant, refresh_every: Duration) -> Self {
        Self {
            saves: BTreeMap::new(),
            dismiss_at: None,
            resync_at: None,
            refresh_every,
            next_refresh: now + refresh_every,
        }
    }

    /// (Re)arm a field's save deadline. Last write per field wins.
    pub fn schedule_save(&mut self, id: &FieldId, at: Instant) {
        self.saves.insert(id.clone(), at);
    }

    pub fn cancel_save(&mut self, id: &FieldId) {
        self.saves.remove(id);
    }

    /// Drain every pending save regardless of deadline (Ctrl+S flush).
    pub fn take_pending_saves(&mut self) -> Vec<FieldId> {
        let ids: Vec<FieldId> = self.saves.keys().cloned().collect();
        self.saves.clear();
        ids
    }

    pub fn pending_save_count(&self) -> usize {
        self.saves.len()
    }

    pub fn schedule_dismiss(&mut self, at: Instant) {
        self.dismiss_at = Some(at);
    }

    pub fn schedule_resync(&mut self, at: Instant) {
        self.resync_at = Some(at);
    }

    /// Pop everything due at `now`, field saves first in deadline order.
    pub fn due(&mut self, now: Instant) -> Vec<Task> {
        let mut tasks = Vec::new();

        let mut ready: Vec<(FieldId, Instant)> = self
            .saves
            .iter()
            .filter(|(_, at)| **at <= now)
            .map(|(id, at)| (id.clone(), *at))
            .collect();
        ready.sort_by_key(|(_, at)| *at);
        for (id, _) in ready {
            self.saves.remove(&id);
            tasks.push(Task::FlushSave(id));
        }

        if self.dismiss_at.is_some_and(|at| at <= now) {
            self.dismiss_at = None;
            tasks.push(Task::DismissNotice);
        }

        if self.resync_at.is_some_and(|at| at <= now) {
            self.resync_at = None;
            tasks.push(Task::Resync);
        }

        if self.next_refresh <= now {
            self.next_refresh = now + self.refresh_every;
            tasks.push(Task::Refresh);
        }

        tasks
    }
}
