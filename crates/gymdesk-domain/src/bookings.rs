use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Default, PartialEq, FromRow, Serialize, Deserialize)]
pub struct Booking {
    pub id: u32,
    pub member_id: u32,
    #[serde(default)]
    pub member_name: String,
    pub trainer_id: u32,
    #[serde(default)]
    pub trainer_name: String,
    pub class_date: NaiveDate,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
}

/// Bookings are listed by class date and start time.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct BookingFilter {
    pub id: Option<u32>,
    /// Classes on exactly this date
    pub date: Option<NaiveDate>,
    /// Classes on or after this date
    pub from_date: Option<NaiveDate>,
}
