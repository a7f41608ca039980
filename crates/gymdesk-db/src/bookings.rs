use anyhow::Result;
use async_trait::async_trait;
use sqlx::{QueryBuilder, Sqlite};

use gymdesk_domain::{Booking, BookingFilter, Insert, Query, Retrieve};

use crate::{
    results::{Id, QueryError},
    Connection,
};

#[async_trait]
impl Query<Booking> for Connection {
    type Filter = BookingFilter;

    /// Fetch class bookings with member and trainer names
    async fn query(&self, filter: &Self::Filter) -> Result<Vec<Booking>> {
        let mut conn = self.acquire().await?;
        let mut qry = QueryBuilder::<Sqlite>::new(
            r#"
            SELECT
                b.id,
                b.member_id,
                m.name AS member_name,
                b.trainer_id,
                t.name AS trainer_name,
                b.class_date,
                b.start_time,
                b.end_time
            FROM class_bookings b
            JOIN members m ON b.member_id = m.id
            JOIN trainers t ON b.trainer_id = t.id
            WHERE 1
            "#,
        );
        if let Some(id) = filter.id {
            qry.push(" AND b.id = ").push_bind(id);
        }
        if let Some(date) = filter.date {
            qry.push(" AND b.class_date = ").push_bind(date);
        }
        if let Some(from_date) = filter.from_date {
            qry.push(" AND b.class_date >= ").push_bind(from_date);
        }
        qry.push(" ORDER BY b.class_date, b.start_time, b.id");

        tracing::debug!(?filter, "query bookings");
        let bookings: Vec<Booking> = qry.build_query_as().fetch_all(&mut *conn).await?;
        Ok(bookings)
    }
}

#[async_trait]
impl Retrieve<Booking> for Connection {
    type Key = u32;
    async fn retrieve(&self, booking_id: Self::Key) -> Result<Booking> {
        let filter = BookingFilter {
            id: Some(booking_id),
            ..Default::default()
        };
        let booking = self
            .query(&filter)
            .await?
            .pop()
            .ok_or(QueryError::NotFound)?;
        Ok(booking)
    }
}

#[async_trait]
impl Insert<Booking> for Connection {
    /// Book a class. The time range is not checked here.
    async fn insert(&self, booking: Booking) -> Result<Booking> {
        let insert: Id<u32> = {
            let mut conn = self.acquire().await?;
            let mut qry = QueryBuilder::<Sqlite>::new(
                r#"INSERT INTO class_bookings (
                    member_id,
                    trainer_id,
                    class_date,
                    start_time,
                    end_time
                ) VALUES (
                "#,
            );
            qry.separated(", ")
                .push_bind(booking.member_id)
                .push_bind(booking.trainer_id)
                .push_bind(booking.class_date)
                .push_bind(booking.start_time)
                .push_bind(booking.end_time);

            qry.push(") RETURNING id ")
                .build_query_as()
                .fetch_one(&mut *conn)
                .await?
        };
        tracing::info!(
            id = insert.id,
            member_id = booking.member_id,
            trainer_id = booking.trainer_id,
            "class booked"
        );
        self.retrieve(insert.id).await
    }
}
