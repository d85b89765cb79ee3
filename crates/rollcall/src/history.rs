//! Historical attendance view
//!
//! Unlike [`crate::roster::reconcile`], the history view keeps records whose
//! member has since been removed. Those rows show [`ORPHAN_PLACEHOLDER`] in
//! place of the member's details.

use std::collections::HashMap;

use chrono::NaiveDate;
use serde::Serialize;

use crate::error::Result;
use crate::model::{AttendanceRecord, Member, MemberId};
use crate::theme::EffectiveTheme;

/// Shown for member details of an orphaned record.
pub const ORPHAN_PLACEHOLDER: &str = "—";

/// A record joined with the member it refers to, if still enrolled.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HistoryRow {
    /// The stored record
    pub record: AttendanceRecord,

    /// The current member, `None` when the record is orphaned
    pub member: Option<Member>,
}

impl HistoryRow {
    /// Check if the member behind this record is gone.
    pub fn is_orphan(&self) -> bool {
        self.member.is_none()
    }

    /// Member name, or the placeholder.
    pub fn display_name(&self) -> &str {
        self.member.as_ref().map_or(ORPHAN_PLACEHOLDER, |m| &m.name)
    }

    /// Member ID number, or the placeholder.
    pub fn display_external_id(&self) -> &str {
        self.member.as_ref().map_or(ORPHAN_PLACEHOLDER, |m| &m.external_id)
    }

    /// Member group, or the placeholder.
    pub fn display_group(&self) -> &str {
        self.member.as_ref().map_or(ORPHAN_PLACEHOLDER, |m| &m.group_name)
    }
}

/// All rows of one date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DateGroup {
    /// The shared date
    pub date: NaiveDate,
    /// Rows in history order
    pub rows: Vec<HistoryRow>,
}

/// Most recent records first, at most `limit` of them, joined with members.
///
/// Records of the same date keep their input order.
pub fn history_rows(
    records: &[AttendanceRecord],
    members: &[Member],
    limit: usize,
) -> Vec<HistoryRow> {
    let by_id: HashMap<MemberId, &Member> = members.iter().map(|m| (m.id, m)).collect();

    let mut sorted: Vec<&AttendanceRecord> = records.iter().collect();
    sorted.sort_by(|a, b| b.date.cmp(&a.date));

    sorted
        .into_iter()
        .take(limit)
        .map(|record| HistoryRow {
            record: record.clone(),
            member: by_id.get(&record.member_id).map(|m| (*m).clone()),
        })
        .collect()
}

/// Group rows by date, newest date first.
pub fn group_by_date(rows: &[HistoryRow]) -> Vec<DateGroup> {
    let mut groups: Vec<DateGroup> = Vec::new();
    let mut index: HashMap<NaiveDate, usize> = HashMap::new();

    for row in rows {
        let date = row.record.date;
        let slot = *index.entry(date).or_insert_with(|| {
            groups.push(DateGroup {
                date,
                rows: Vec::new(),
            });
            groups.len() - 1
        });
        groups[slot].rows.push(row.clone());
    }

    groups.sort_by(|a, b| b.date.cmp(&a.date));
    groups
}

/// Render rows as CSV with the tenant's column headings.
///
/// Every field is quoted and rows are joined by `\n` with no trailing
/// terminator. Orphaned rows leave the member columns empty.
pub fn export_csv(rows: &[HistoryRow], theme: &EffectiveTheme) -> Result<String> {
    let mut buf = Vec::new();
    {
        let mut writer = csv::WriterBuilder::new()
            .quote_style(csv::QuoteStyle::Always)
            .terminator(csv::Terminator::Any(b'\n'))
            .from_writer(&mut buf);

        writer.write_record([
            "Date",
            "Name",
            theme.labels.id_label.as_str(),
            theme.labels.group_label.as_str(),
            "Status",
        ])?;

        for row in rows {
            let date = row.record.date.to_string();
            let (name, external_id, group) = match &row.member {
                Some(m) => (m.name.as_str(), m.external_id.as_str(), m.group_name.as_str()),
                None => ("", "", ""),
            };
            writer.write_record([
                date.as_str(),
                name,
                external_id,
                group,
                row.record.status.as_str(),
            ])?;
        }

        writer.flush().map_err(csv::Error::from)?;
    }

    if buf.last() == Some(&b'\n') {
        buf.pop();
    }
    Ok(String::from_utf8(buf)?)
}
