//! Field identity: the `{field}_{date}` composite key addressing one input
//! of the attendance form.

use serde::Serialize;
use std::fmt;

/// Known attendance field kinds. Anything else the server renders is carried
/// opaquely so a re-sync never loses data.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub enum FieldKind {
    CheckIn,
    CheckOut,
    WorkHours,
    ActualHours,
    OvertimeHours,
    Other(String),
}

/// Known names, longest first. Field names themselves contain underscores,
/// so identity parsing must try these before falling back to a plain split.
const KNOWN_NAMES: [&str; 5] = [
    "overtime_hours",
    "actual_hours",
    "work_hours",
    "check_out",
    "check_in",
];

impl FieldKind {
    pub fn fk_from_str(s: &str) -> Self {
        match s {
            "check_in" => FieldKind::CheckIn,
            "check_out" => FieldKind::CheckOut,
            "work_hours" => FieldKind::WorkHours,
            "actual_hours" => FieldKind::ActualHours,
            "overtime_hours" => FieldKind::OvertimeHours,
            other => FieldKind::Other(other.to_string()),
        }
    }

    pub fn fk_as_str(&self) -> &str {
        match self {
            FieldKind::CheckIn => "check_in",
            FieldKind::CheckOut => "check_out",
            FieldKind::WorkHours => "work_hours",
            FieldKind::ActualHours => "actual_hours",
            FieldKind::OvertimeHours => "overtime_hours",
            FieldKind::Other(s) => s,
        }
    }

    /// Time-of-day fields get HH:MM validation on blur.
    pub fn is_time(&self) -> bool {
        matches!(self, FieldKind::CheckIn | FieldKind::CheckOut)
    }

    pub fn is_punchable(&self) -> bool {
        matches!(self, FieldKind::CheckIn | FieldKind::CheckOut)
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.fk_as_str())
    }
}

/// One input of the form: a field kind on a given day.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub struct FieldId {
    pub kind: FieldKind,
    pub date: String,
}

impl FieldId {
    pub fn new(kind: FieldKind, date: &str) -> Self {
        Self {
            kind,
            date: date.to_string(),
        }
    }

    /// Parse an input name like `check_in_2024-05-01`.
    ///
    /// Known field names are matched as a whole (they contain underscores);
    /// unknown names fall back to splitting at the first underscore, with
    /// the remainder rejoined as the date.
    pub fn parse(name: &str) -> Option<Self> {
        for kind_name in KNOWN_NAMES {
            if let Some(rest) = name.strip_prefix(kind_name) {
                if rest.is_empty() {
                    // a bare field name carries no date
                    return None;
                }
                if let Some(date) = rest.strip_prefix('_') {
                    if date.is_empty() {
                        return None;
                    }
                    return Some(Self {
                        kind: FieldKind::fk_from_str(kind_name),
                        date: date.to_string(),
                    });
                }
            }
        }

        let (field, date) = name.split_once('_')?;
        if field.is_empty() || date.is_empty() {
            return None;
        }
        Some(Self {
            kind: FieldKind::Other(field.to_string()),
            date: date.to_string(),
        })
    }

    /// The input name on the server page.
    pub fn input_name(&self) -> String {
        format!("{}_{}", self.kind.fk_as_str(), self.date)
    }

    /// The id of the paired read-only display element.
    pub fn display_id(&self) -> String {
        format!("{}_display", self.kind.fk_as_str())
    }
}

impl fmt::Display for FieldId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.input_name())
    }
}
