//! Members and attendance records

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Identifier of an enrolled member. Stable for the member's lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MemberId(pub u64);

impl fmt::Display for MemberId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for MemberId {
    fn from(id: u64) -> Self {
        MemberId(id)
    }
}

/// An enrolled member of a tenant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Member {
    /// Roster identifier
    pub id: MemberId,

    /// Display name
    pub name: String,

    /// Occupation-specific ID number (roll number, staff ID, ...)
    pub external_id: String,

    /// Department, ward, team or class
    pub group_name: String,
}

impl Member {
    /// Create a new member.
    pub fn new(
        id: u64,
        name: impl Into<String>,
        external_id: impl Into<String>,
        group_name: impl Into<String>,
    ) -> Self {
        Self {
            id: MemberId(id),
            name: name.into(),
            external_id: external_id.into(),
            group_name: group_name.into(),
        }
    }
}

/// Presence of a member on a given day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AttendanceStatus {
    /// Marked present
    Present,

    /// Marked absent
    Absent,
}

impl AttendanceStatus {
    /// The other status.
    pub fn flipped(self) -> Self {
        match self {
            AttendanceStatus::Present => AttendanceStatus::Absent,
            AttendanceStatus::Absent => AttendanceStatus::Present,
        }
    }

    /// Lowercase name, as stored and exported.
    pub fn as_str(self) -> &'static str {
        match self {
            AttendanceStatus::Present => "present",
            AttendanceStatus::Absent => "absent",
        }
    }
}

impl fmt::Display for AttendanceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One member's status for one date. Unique per `(member_id, date)`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendanceRecord {
    /// Member the record refers to; the member may since have been removed
    pub member_id: MemberId,

    /// Calendar date, no time component
    pub date: NaiveDate,

    /// Recorded status
    pub status: AttendanceStatus,
}

impl AttendanceRecord {
    /// Create a new record.
    pub fn new(member_id: u64, date: NaiveDate, status: AttendanceStatus) -> Self {
        Self {
            member_id: MemberId(member_id),
            date,
            status,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_flip() {
        assert_eq!(AttendanceStatus::Present.flipped(), AttendanceStatus::Absent);
        assert_eq!(AttendanceStatus::Absent.flipped(), AttendanceStatus::Present);
    }

    #[test]
    fn test_record_wire_format() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 5).unwrap();
        let record = AttendanceRecord::new(12, date, AttendanceStatus::Absent);
        let json = serde_json::to_string(&record).unwrap();
        assert_eq!(json, r#"{"member_id":12,"date":"2024-03-05","status":"absent"}"#);
    }
}
