//! Member directory helpers

use std::collections::BTreeMap;

use log::debug;

use crate::error::{Result, RollcallError};
use crate::model::{Member, MemberId};

/// Members grouped by department, department names ascending.
///
/// Members keep their roster order within a department.
pub fn group_by_department(members: &[Member]) -> BTreeMap<&str, Vec<&Member>> {
    let mut groups: BTreeMap<&str, Vec<&Member>> = BTreeMap::new();
    for member in members {
        groups.entry(member.group_name.as_str()).or_default().push(member);
    }
    groups
}

/// Remove a member from the roster after the caller confirms.
///
/// `confirm` sees the member about to be removed; returning `false` leaves
/// the roster untouched and yields `Ok(None)`. Attendance records of the
/// removed member are not affected.
pub fn remove_member<F>(members: &mut Vec<Member>, id: MemberId, confirm: F) -> Result<Option<Member>>
where
    F: FnOnce(&Member) -> bool,
{
    let position = members
        .iter()
        .position(|m| m.id == id)
        .ok_or(RollcallError::UnknownMember(id))?;

    if !confirm(&members[position]) {
        debug!("removal of member {id} declined");
        return Ok(None);
    }

    Ok(Some(members.remove(position)))
}
