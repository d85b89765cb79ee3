//! Roster reconciliation for a single attendance date
//!
//! The live "mark attendance" screen needs a status for every enrolled
//! member, whether or not anything was recorded yet. Members without a
//! record default to [`AttendanceStatus::Present`] (optimistic attendance).
//! Records that point at members no longer on the roster are dropped here;
//! the history view in [`crate::history`] keeps them instead.

use std::collections::HashMap;

use chrono::NaiveDate;
use indexmap::IndexMap;
use log::debug;
use serde::{Deserialize, Serialize};

use crate::model::{AttendanceRecord, AttendanceStatus, Member, MemberId};

/// Status assigned to members that have no record for the date.
pub const DEFAULT_STATUS: AttendanceStatus = AttendanceStatus::Present;

/// Complete member → status mapping for one date.
///
/// Covers exactly the roster it was built from and iterates in roster order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RosterStatusMap {
    entries: IndexMap<MemberId, AttendanceStatus>,
}

impl RosterStatusMap {
    /// Create an empty map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Status of a member, if the member is on the map.
    pub fn status(&self, id: MemberId) -> Option<AttendanceStatus> {
        self.entries.get(&id).copied()
    }

    /// Check if a member is on the map.
    pub fn contains(&self, id: MemberId) -> bool {
        self.entries.contains_key(&id)
    }

    /// Number of members covered.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the map covers no members.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate entries in roster order.
    pub fn iter(&self) -> impl Iterator<Item = (MemberId, AttendanceStatus)> + '_ {
        self.entries.iter().map(|(id, status)| (*id, *status))
    }
}

impl FromIterator<(MemberId, AttendanceStatus)> for RosterStatusMap {
    fn from_iter<I: IntoIterator<Item = (MemberId, AttendanceStatus)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

/// Present/absent counts of a [`RosterStatusMap`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Summary {
    /// Members marked present
    pub present_count: usize,

    /// Members marked absent
    pub absent_count: usize,
}

impl Summary {
    /// Total members counted.
    pub fn total(&self) -> usize {
        self.present_count + self.absent_count
    }
}

/// Build the complete status map for a roster from the records of one date.
///
/// The caller is responsible for passing records of a single date. When a
/// member appears in several records the last one wins.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use rollcall::{reconcile, AttendanceRecord, AttendanceStatus, Member, MemberId};
///
/// let members = vec![
///     Member::new(1, "Asha", "EMP-1", "Sales"),
///     Member::new(2, "Ravi", "EMP-2", "Sales"),
/// ];
/// let day = NaiveDate::from_ymd_opt(2024, 6, 3).unwrap();
/// let records = vec![AttendanceRecord::new(2, day, AttendanceStatus::Absent)];
///
/// let map = reconcile(&members, &records);
/// assert_eq!(map.status(MemberId(1)), Some(AttendanceStatus::Present));
/// assert_eq!(map.status(MemberId(2)), Some(AttendanceStatus::Absent));
/// ```
pub fn reconcile(members: &[Member], records: &[AttendanceRecord]) -> RosterStatusMap {
    let recorded: HashMap<MemberId, AttendanceStatus> = records
        .iter()
        .map(|record| (record.member_id, record.status))
        .collect();

    let map: RosterStatusMap = members
        .iter()
        .map(|member| {
            let status = recorded.get(&member.id).copied().unwrap_or(DEFAULT_STATUS);
            (member.id, status)
        })
        .collect();

    let dropped = recorded.keys().filter(|id| !map.contains(**id)).count();
    if dropped > 0 {
        debug!("reconcile dropped {dropped} record(s) for members not on the roster");
    }

    map
}

/// Flip one member's status. Unknown ids leave the map unchanged.
pub fn toggle(map: &RosterStatusMap, id: MemberId) -> RosterStatusMap {
    let mut toggled = map.clone();
    match toggled.entries.get_mut(&id) {
        Some(status) => *status = status.flipped(),
        None => debug!("toggle ignored for member {id}: not on the roster"),
    }
    toggled
}

/// Set every member of the roster to `status`.
pub fn mark_all(members: &[Member], status: AttendanceStatus) -> RosterStatusMap {
    members.iter().map(|member| (member.id, status)).collect()
}

/// Count members by status.
pub fn summarize(map: &RosterStatusMap) -> Summary {
    map.iter().fold(Summary::default(), |mut summary, (_, status)| {
        match status {
            AttendanceStatus::Present => summary.present_count += 1,
            AttendanceStatus::Absent => summary.absent_count += 1,
        }
        summary
    })
}

/// One record per entry: the full replacement set for `date`.
pub fn to_records(map: &RosterStatusMap, date: NaiveDate) -> Vec<AttendanceRecord> {
    map.iter()
        .map(|(member_id, status)| AttendanceRecord {
            member_id,
            date,
            status,
        })
        .collect()
}
