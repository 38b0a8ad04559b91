use chrono::NaiveDate;

use crate::api::{AttendanceRecord, AttendanceStatus};

/// What was marked for this employee today, if anything. `None` renders as
/// "Not marked".
pub fn today_status(
    records: &[AttendanceRecord],
    employee_id: &str,
    today: NaiveDate,
) -> Option<AttendanceStatus> {
    records
        .iter()
        .find(|record| record.employee_id == employee_id && record.date == today)
        .map(|record| record.status)
}

/// Maps the records-list select value to an employee filter. The empty
/// string is the "everyone" sentinel; it cannot collide with a real
/// employee id, which the id pattern keeps non-empty.
pub fn employee_filter(selection: &str) -> Option<&str> {
    (!selection.is_empty()).then_some(selection)
}

/// Independent, combinable equality filters over the full record list.
pub fn filter_records(
    records: &[AttendanceRecord],
    employee: Option<&str>,
    date: Option<NaiveDate>,
) -> Vec<AttendanceRecord> {
    records
        .iter()
        .filter(|record| {
            employee.map_or(true, |id| record.employee_id == id)
                && date.map_or(true, |date| record.date == date)
        })
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn record(employee_id: &str, on: NaiveDate, status: AttendanceStatus) -> AttendanceRecord {
        AttendanceRecord {
            id: 0,
            employee_id: employee_id.into(),
            date: on,
            status,
        }
    }

    fn records() -> Vec<AttendanceRecord> {
        vec![
            record("EMP-1", date(2024, 1, 10), AttendanceStatus::Present),
            record("EMP-2", date(2024, 1, 10), AttendanceStatus::Absent),
            record("EMP-1", date(2024, 1, 9), AttendanceStatus::Absent),
        ]
    }

    #[test]
    fn today_status_matches_employee_and_date() {
        let records = records();
        assert_eq!(
            today_status(&records, "EMP-1", date(2024, 1, 10)),
            Some(AttendanceStatus::Present)
        );
        assert_eq!(
            today_status(&records, "EMP-1", date(2024, 1, 9)),
            Some(AttendanceStatus::Absent)
        );
        assert_eq!(today_status(&records, "EMP-2", date(2024, 1, 9)), None);
        assert_eq!(today_status(&records, "EMP-9", date(2024, 1, 10)), None);
    }

    #[test]
    fn no_filters_returns_everything() {
        assert_eq!(filter_records(&records(), None, None).len(), 3);
    }

    #[test]
    fn only_the_empty_selection_means_everyone() {
        assert_eq!(employee_filter(""), None);
        assert_eq!(employee_filter("EMP-1"), Some("EMP-1"));
        // "all" is a legal employee id, so it must filter like any other.
        assert_eq!(employee_filter("all"), Some("all"));
    }

    #[test]
    fn an_employee_literally_named_all_is_filterable() {
        let mut records = records();
        records.push(record("all", date(2024, 1, 10), AttendanceStatus::Present));

        let filtered = filter_records(&records, employee_filter("all"), None);
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].employee_id, "all");
    }

    #[test]
    fn filters_apply_independently() {
        let records = records();
        assert_eq!(filter_records(&records, Some("EMP-1"), None).len(), 2);
        assert_eq!(filter_records(&records, None, Some(date(2024, 1, 10))).len(), 2);
    }

    #[test]
    fn filters_combine_conjunctively() {
        let records = records();
        let both = filter_records(&records, Some("EMP-1"), Some(date(2024, 1, 10)));
        assert_eq!(both.len(), 1);
        assert_eq!(both[0].status, AttendanceStatus::Present);

        assert!(filter_records(&records, Some("EMP-2"), Some(date(2024, 1, 9))).is_empty());
    }
}
