//! Operating-room time slot catalog.
//!
//! Slots are configuration data: they are loaded from settings (or the
//! reference catalog below) and only ever annotated, never computed.

use serde::{Deserialize, Serialize};

/// One bookable operating-room slot.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeSlot {
    /// Catalog identifier.
    pub id: String,
    /// Time of day as displayed, e.g. `"07:30 AM"`.
    pub time: String,
    /// Calendar date, e.g. `"2024-01-15"`.
    pub date: String,
    /// Operating room identifier.
    pub room: String,
    /// Surgical team identifier.
    pub team: String,
}

impl TimeSlot {
    /// Create a slot from its display fields.
    pub fn new(
        id: impl Into<String>,
        time: impl Into<String>,
        date: impl Into<String>,
        room: impl Into<String>,
        team: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            time: time.into(),
            date: date.into(),
            room: room.into(),
            team: team.into(),
        }
    }
}

/// The four-slot reference catalog, earliest first.
pub fn reference_catalog() -> Vec<TimeSlot> {
    vec![
        TimeSlot::new("1", "07:30 AM", "2024-01-15", "OR-1", "Team A"),
        TimeSlot::new("2", "09:00 AM", "2024-01-15", "OR-2", "Team B"),
        TimeSlot::new("3", "11:30 AM", "2024-01-15", "OR-3", "Team C"),
        TimeSlot::new("4", "02:00 PM", "2024-01-16", "OR-1", "Team A"),
    ]
}
