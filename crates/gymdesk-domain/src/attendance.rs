use chrono::{Duration, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A visit of a member. While `check_out_time` is unset
/// the member is on-site.
#[derive(Debug, Clone, Default, PartialEq, FromRow, Serialize, Deserialize)]
pub struct AttendanceRecord {
    pub id: u32,
    pub member_id: u32,
    pub member_name: String,
    pub check_in_time: NaiveDateTime,
    pub check_out_time: Option<NaiveDateTime>,
    /// Seconds between check in and check out, or between
    /// check in and the time of the query for open records.
    pub duration_seconds: i64,
}

impl AttendanceRecord {
    pub fn is_open(&self) -> bool {
        self.check_out_time.is_none()
    }

    pub fn duration(&self) -> Duration {
        Duration::seconds(self.duration_seconds)
    }
}

/// Attendance is listed by check in time, latest first.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct AttendanceFilter {
    pub id: Option<u32>,
    pub member_id: Option<u32>,
    /// Only open (`true`) or closed (`false`) records
    pub open: Option<bool>,
    /// Only records checked in on this day
    pub date: Option<NaiveDate>,
}
