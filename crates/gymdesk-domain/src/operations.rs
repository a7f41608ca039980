use anyhow::Result;
use async_trait::async_trait;

use crate::AttendanceRecord;

#[async_trait]
pub trait Query<T> {
    type Filter;
    async fn query(&self, filter: &Self::Filter) -> Result<Vec<T>>;
}

#[async_trait]
pub trait Insert<T> {
    async fn insert(&self, item: T) -> Result<T>;
}

#[async_trait]
pub trait Retrieve<T> {
    type Key;
    async fn retrieve(&self, key: Self::Key) -> Result<T>;
}

/// Check members in and out of the gym.
#[async_trait]
pub trait Attend {
    /// Open a new attendance record for the member, starting now.
    /// Members may hold more than one open record at a time.
    async fn check_in(&self, member_id: u32) -> Result<AttendanceRecord>;

    /// Close the attendance record. Closing an already closed
    /// record keeps its original check out time.
    async fn check_out(&self, attendance_id: u32) -> Result<AttendanceRecord>;
}
