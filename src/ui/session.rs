//! Interactive attendance session.
//!
//! A raw-mode terminal front-end over the controller: arrow keys move
//! between days and fields, edits autosave through the controller's
//! debounce, and the shortcut keys mirror the web page (Ctrl+S submit,
//! Ctrl+E spreadsheet download).

use crate::api::AttendanceApi;
use crate::core::clock::Clock;
use crate::core::controller::Controller;
use crate::errors::AppResult;
use crate::export::rows_from_form;
use crate::models::field::{FieldId, FieldKind};
use crate::models::notification::Notification;
use crate::ui::messages;
use crate::utils::colors::{CYAN, GREY, RESET, color_for_validity};
use crate::utils::date::today;
use crate::utils::formatting::display_or_placeholder;
use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};
use crossterm::terminal::{
    Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode,
    enable_raw_mode,
};
use crossterm::{cursor, execute};
use std::io::{self, Write};
use std::time::Duration;

const EXCEL_FILE: &str = "attendance_export.xlsx";

/// Field rows shown for the selected day, top to bottom.
const EDITABLE: [FieldKind; 5] = [
    FieldKind::CheckIn,
    FieldKind::CheckOut,
    FieldKind::WorkHours,
    FieldKind::ActualHours,
    FieldKind::OvertimeHours,
];

struct SessionState {
    date: String,
    focus: usize,
    editing: Option<String>,
}

pub fn run<A: AttendanceApi, C: Clock>(
    ctl: &mut Controller<A, C>,
    export_file: &str,
) -> AppResult<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, cursor::Hide)?;

    let result = run_loop(ctl, export_file, &mut stdout);

    execute!(stdout, LeaveAlternateScreen, cursor::Show)?;
    disable_raw_mode()?;

    result
}

fn run_loop<A: AttendanceApi, C: Clock>(
    ctl: &mut Controller<A, C>,
    export_file: &str,
    stdout: &mut io::Stdout,
) -> AppResult<()> {
    let dates = ctl.form().dates();
    let today_str = today().format("%Y-%m-%d").to_string();
    let mut state = SessionState {
        date: if dates.contains(&today_str) || dates.is_empty() {
            today_str
        } else {
            dates[0].clone()
        },
        focus: 0,
        editing: None,
    };

    loop {
        draw(ctl, &state, stdout)?;

        // Fire due debounces, dismissals and refreshes between key events.
        if event::poll(Duration::from_millis(250))? {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                if handle_key(ctl, &mut state, export_file, key.code, key.modifiers)? {
                    break;
                }
            }
        }
        ctl.tick();
    }
    Ok(())
}

/// Returns true when the session should end.
fn handle_key<A: AttendanceApi, C: Clock>(
    ctl: &mut Controller<A, C>,
    state: &mut SessionState,
    export_file: &str,
    code: KeyCode,
    modifiers: KeyModifiers,
) -> AppResult<bool> {
    // Editing mode captures everything except commit/cancel.
    if state.editing.is_some() {
        match code {
            KeyCode::Enter => {
                let value = state.editing.take().unwrap_or_default();
                let id = focused_id(state);
                ctl.field_changed(&id, &value);
                ctl.field_blurred(&id);
            }
            KeyCode::Esc => {
                state.editing = None;
                ctl.field_blurred(&focused_id(state));
            }
            KeyCode::Backspace => {
                if let Some(buffer) = state.editing.as_mut() {
                    buffer.pop();
                }
            }
            KeyCode::Char(c) => {
                if let Some(buffer) = state.editing.as_mut() {
                    buffer.push(c);
                }
            }
            _ => {}
        }
        return Ok(false);
    }

    if modifiers.contains(KeyModifiers::CONTROL) {
        match code {
            // Ctrl+S: the submit control.
            KeyCode::Char('s') => ctl.submit_all(),
            // Ctrl+E: the spreadsheet export link, if the server has one.
            KeyCode::Char('e') => {
                if let Some(bytes) = ctl.download_excel() {
                    std::fs::write(EXCEL_FILE, bytes)?;
                }
            }
            _ => {}
        }
        return Ok(false);
    }

    match code {
        KeyCode::Char('q') | KeyCode::Esc => return Ok(true),
        KeyCode::Up => state.focus = state.focus.saturating_sub(1),
        KeyCode::Down => state.focus = (state.focus + 1).min(EDITABLE.len() - 1),
        KeyCode::Left | KeyCode::Right => move_date(ctl, state, code == KeyCode::Right),
        KeyCode::Enter => {
            let id = focused_id(state);
            let current = ctl.form().value(&id).unwrap_or_default().to_string();
            state.editing = Some(current);
        }
        KeyCode::Char('i') => {
            ctl.punch(&FieldKind::CheckIn, &state.date);
        }
        KeyCode::Char('o') => {
            ctl.punch(&FieldKind::CheckOut, &state.date);
        }
        KeyCode::Char('x') => {
            let rows = rows_from_form(ctl.form());
            match crate::export::csv::write_csv(export_file, &rows) {
                Ok(()) => ctl.show_notification(Notification::success(format!(
                    "CSV saved to {}",
                    export_file
                ))),
                Err(e) => {
                    ctl.show_notification(Notification::danger(format!("CSV export failed: {}", e)))
                }
            }
        }
        KeyCode::Char('r') => {
            if let Err(e) = ctl.load_form() {
                ctl.show_notification(Notification::danger(format!("Reload failed: {}", e)));
            }
        }
        _ => {}
    }
    Ok(false)
}

fn focused_id(state: &SessionState) -> FieldId {
    FieldId::new(EDITABLE[state.focus].clone(), &state.date)
}

fn move_date<A: AttendanceApi, C: Clock>(
    ctl: &Controller<A, C>,
    state: &mut SessionState,
    forward: bool,
) {
    let dates = ctl.form().dates();
    if dates.is_empty() {
        return;
    }
    let pos = dates.iter().position(|d| *d == state.date).unwrap_or(0);
    let next = if forward {
        (pos + 1).min(dates.len() - 1)
    } else {
        pos.saturating_sub(1)
    };
    state.date = dates[next].clone();
}

fn draw<A: AttendanceApi, C: Clock>(
    ctl: &Controller<A, C>,
    state: &SessionState,
    stdout: &mut io::Stdout,
) -> AppResult<()> {
    execute!(stdout, cursor::MoveTo(0, 0), Clear(ClearType::All))?;

    let mut out = String::new();
    out.push_str(&format!("{}punchclock · {}{}\r\n\r\n", CYAN, state.date, RESET));

    for (i, kind) in EDITABLE.iter().enumerate() {
        let id = FieldId::new(kind.clone(), &state.date);
        let marker = if i == state.focus { ">" } else { " " };

        let value = match (&state.editing, i == state.focus) {
            (Some(buffer), true) => format!("{}_", buffer),
            _ => display_or_placeholder(ctl.form().value(&id).unwrap_or_default()),
        };

        let color = color_for_validity(ctl.form().is_invalid(&id));
        out.push_str(&format!(
            "{} {:<16} {}{}{}\r\n",
            marker,
            kind.fk_as_str(),
            color,
            value,
            RESET
        ));
    }

    let summary = ctl.monthly_summary();
    out.push_str(&format!(
        "\r\n{}month:{} {:.1}h actual, {:.1}h overtime, {} days, {:.1}h avg\r\n",
        GREY,
        RESET,
        summary.total_actual_hours,
        summary.total_overtime_hours,
        summary.worked_days,
        summary.average_actual_hours
    ));

    if ctl.pending_saves() > 0 {
        out.push_str(&format!(
            "{}{} unsaved edit(s), autosaving…{}\r\n",
            GREY,
            ctl.pending_saves(),
            RESET
        ));
    }

    out.push_str("\r\n");
    if let Some(busy) = ctl.punch_busy() {
        out.push_str(&format!("{}punching {}…{}\r\n", GREY, busy, RESET));
    } else if let Some(n) = ctl.notice() {
        out.push_str(&format!("{}\r\n", messages::render(n)));
    } else {
        out.push_str("\r\n");
    }

    out.push_str(&format!(
        "{}[i] check in  [o] check out  [enter] edit  [x] csv  [r] reload  [^S] save all  [^E] excel  [q] quit{}\r\n",
        GREY, RESET
    ));

    stdout.write_all(out.as_bytes())?;
    stdout.flush()?;
    Ok(())
}
