use anyhow::Result;
use async_trait::async_trait;
use sqlx::{QueryBuilder, Sqlite};

use gymdesk_domain::{
    datetime, Attend, AttendanceFilter, AttendanceRecord, Query, Retrieve,
};

use crate::{
    results::{Id, QueryError},
    Connection,
};

#[async_trait]
impl Query<AttendanceRecord> for Connection {
    type Filter = AttendanceFilter;

    /// Fetch attendance records, latest check in first.
    /// Open records are measured up to now.
    async fn query(&self, filter: &Self::Filter) -> Result<Vec<AttendanceRecord>> {
        let now = datetime::now();
        let mut conn = self.acquire().await?;
        let mut qry = QueryBuilder::<Sqlite>::new(
            r#"
            SELECT
                a.id,
                a.member_id,
                m.name AS member_name,
                a.check_in_time,
                a.check_out_time,
                CAST(ROUND(
                    (julianday(COALESCE(a.check_out_time, "#,
        );
        qry.push_bind(now);
        qry.push(
            r#")) - julianday(a.check_in_time)) * 86400
                ) AS INTEGER) AS duration_seconds
            FROM attendance a
            JOIN members m ON a.member_id = m.id
            WHERE 1
            "#,
        );
        if let Some(id) = filter.id {
            qry.push(" AND a.id = ").push_bind(id);
        }
        if let Some(member_id) = filter.member_id {
            qry.push(" AND a.member_id = ").push_bind(member_id);
        }
        match filter.open {
            Some(true) => {
                qry.push(" AND a.check_out_time IS NULL");
            }
            Some(false) => {
                qry.push(" AND a.check_out_time IS NOT NULL");
            }
            None => {}
        }
        if let Some(date) = filter.date {
            qry.push(" AND date(a.check_in_time) = ").push_bind(date);
        }
        qry.push(" ORDER BY a.check_in_time DESC, a.id DESC");

        tracing::debug!(?filter, "query attendance");
        let records: Vec<AttendanceRecord> = qry.build_query_as().fetch_all(&mut *conn).await?;
        Ok(records)
    }
}

#[async_trait]
impl Retrieve<AttendanceRecord> for Connection {
    type Key = u32;
    async fn retrieve(&self, attendance_id: Self::Key) -> Result<AttendanceRecord> {
        let filter = AttendanceFilter {
            id: Some(attendance_id),
            ..Default::default()
        };
        let record = self
            .query(&filter)
            .await?
            .pop()
            .ok_or(QueryError::NotFound)?;
        Ok(record)
    }
}

#[async_trait]
impl Attend for Connection {
    async fn check_in(&self, member_id: u32) -> Result<AttendanceRecord> {
        let insert: Id<u32> = {
            let mut conn = self.acquire().await?;
            let mut qry = QueryBuilder::<Sqlite>::new(
                "INSERT INTO attendance (member_id, check_in_time) VALUES (",
            );
            qry.separated(", ")
                .push_bind(member_id)
                .push_bind(datetime::now());
            qry.push(") RETURNING id ")
                .build_query_as()
                .fetch_one(&mut *conn)
                .await?
        };
        tracing::info!(id = insert.id, member_id, "member checked in");
        self.retrieve(insert.id).await
    }

    async fn check_out(&self, attendance_id: u32) -> Result<AttendanceRecord> {
        {
            let mut conn = self.acquire().await?;
            let result = QueryBuilder::<Sqlite>::new("UPDATE attendance SET")
                .push(" check_out_time = ")
                .push_bind(datetime::now())
                .push(" WHERE id = ")
                .push_bind(attendance_id)
                .push(" AND check_out_time IS NULL")
                .build()
                .execute(&mut *conn)
                .await?;
            if result.rows_affected() == 0 {
                tracing::debug!(id = attendance_id, "attendance record not open");
            } else {
                tracing::info!(id = attendance_id, "member checked out");
            }
        }
        self.retrieve(attendance_id).await
    }
}
