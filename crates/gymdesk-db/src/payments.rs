use anyhow::Result;
use async_trait::async_trait;
use sqlx::{QueryBuilder, Sqlite};

use gymdesk_domain::{datetime, Insert, Payment, PaymentFilter, Query, Retrieve};

use crate::{
    results::{Id, QueryError},
    Connection,
};

#[async_trait]
impl Query<Payment> for Connection {
    type Filter = PaymentFilter;

    /// Fetch payments, newest first
    async fn query(&self, filter: &Self::Filter) -> Result<Vec<Payment>> {
        let mut conn = self.acquire().await?;
        let mut qry = QueryBuilder::<Sqlite>::new(
            r#"
            SELECT
                p.id,
                p.member_id,
                m.name AS member_name,
                ROUND(p.amount, 10) AS amount,
                p.date,
                p.payment_method,
                p.status,
                p.service_type
            FROM payments p
            JOIN members m ON p.member_id = m.id
            WHERE 1
            "#,
        );
        if let Some(id) = filter.id {
            qry.push(" AND p.id = ").push_bind(id);
        }
        if let Some(member_id) = filter.member_id {
            qry.push(" AND p.member_id = ").push_bind(member_id);
        }
        if let Some(status) = filter.status {
            qry.push(" AND p.status = ").push_bind(status);
        }
        qry.push(" ORDER BY p.date DESC, p.id DESC");
        if let Some(limit) = filter.limit {
            qry.push(" LIMIT ").push_bind(limit);
        }

        tracing::debug!(?filter, "query payments");
        let payments: Vec<Payment> = qry.build_query_as().fetch_all(&mut *conn).await?;
        Ok(payments)
    }
}

#[async_trait]
impl Retrieve<Payment> for Connection {
    type Key = u32;
    async fn retrieve(&self, payment_id: Self::Key) -> Result<Payment> {
        let filter = PaymentFilter {
            id: Some(payment_id),
            ..Default::default()
        };
        let payment = self
            .query(&filter)
            .await?
            .pop()
            .ok_or(QueryError::NotFound)?;
        Ok(payment)
    }
}

#[async_trait]
impl Insert<Payment> for Connection {
    /// Record a payment. Without a date, the payment is
    /// recorded at the current time.
    async fn insert(&self, payment: Payment) -> Result<Payment> {
        let date = payment.date.unwrap_or_else(datetime::now);
        let insert: Id<u32> = {
            let mut conn = self.acquire().await?;
            let mut qry = QueryBuilder::<Sqlite>::new(
                r#"INSERT INTO payments (
                    member_id,
                    amount,
                    date,
                    payment_method,
                    status,
                    service_type
                ) VALUES (
                "#,
            );
            qry.separated(", ")
                .push_bind(payment.member_id)
                .push_bind(payment.amount)
                .push_bind(date)
                .push_bind(payment.payment_method)
                .push_bind(payment.status)
                .push_bind(payment.service_type);

            qry.push(") RETURNING id ")
                .build_query_as()
                .fetch_one(&mut *conn)
                .await?
        };
        tracing::info!(
            id = insert.id,
            member_id = payment.member_id,
            amount = payment.amount,
            "payment recorded"
        );
        self.retrieve(insert.id).await
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    use gymdesk_domain::{
        Gender, Member, MembershipType, PaymentMethod, PaymentStatus, ServiceType,
    };

    use crate::connection;

    async fn insert_member(db: &Connection, name: &str) -> Member {
        db.insert(Member {
            name: name.to_string(),
            age: 30,
            gender: Gender::Female,
            phone: "555-1111".to_string(),
            email: "a@x.com".to_string(),
            membership_type: MembershipType::Monthly,
            ..Member::default()
        })
        .await
        .unwrap()
    }

    fn at(day: u32, hour: u32) -> Option<chrono::NaiveDateTime> {
        NaiveDate::from_ymd_opt(2024, 5, day)
            .unwrap()
            .and_hms_opt(hour, 0, 0)
    }

    #[tokio::test]
    async fn test_payment_record_and_list() {
        let (_handle, db) = connection::open_test().await;
        let alice = insert_member(&db, "Alice").await;

        let payment = db
            .insert(Payment {
                member_id: alice.id,
                amount: 50.0,
                payment_method: PaymentMethod::Card,
                status: PaymentStatus::Completed,
                service_type: ServiceType::Membership,
                ..Payment::default()
            })
            .await
            .unwrap();
        assert!(payment.date.is_some());

        let filter = PaymentFilter {
            limit: Some(5),
            ..Default::default()
        };
        let payments: Vec<Payment> = db.query(&filter).await.unwrap();
        assert_eq!(payments.len(), 1);
        assert_eq!(payments[0].member_name, "Alice");
        assert_eq!(payments[0].amount, 50.0);
        assert_eq!(payments[0].payment_method, PaymentMethod::Card);
        assert_eq!(payments[0].status, PaymentStatus::Completed);
        assert_eq!(payments[0].service_type, ServiceType::Membership);
    }

    #[tokio::test]
    async fn test_payment_order_limit_and_status() {
        let (_handle, db) = connection::open_test().await;
        let alice = insert_member(&db, "Alice").await;
        let bob = insert_member(&db, "Bob").await;

        let rows = [
            (alice.id, 10.0, at(1, 9), PaymentStatus::Completed),
            (bob.id, 20.0, at(3, 9), PaymentStatus::Pending),
            (alice.id, 30.0, at(2, 9), PaymentStatus::Pending),
            (bob.id, 40.0, at(4, 9), PaymentStatus::Completed),
        ];
        for (member_id, amount, date, status) in rows {
            db.insert(Payment {
                member_id,
                amount,
                date,
                status,
                service_type: ServiceType::PersonalTraining,
                ..Payment::default()
            })
            .await
            .unwrap();
        }

        let payments: Vec<Payment> = db.query(&PaymentFilter::default()).await.unwrap();
        let amounts: Vec<f64> = payments.iter().map(|p| p.amount).collect();
        assert_eq!(amounts, vec![40.0, 20.0, 30.0, 10.0]);
        assert_eq!(payments[0].service_type, ServiceType::PersonalTraining);

        let filter = PaymentFilter {
            limit: Some(2),
            ..Default::default()
        };
        let payments: Vec<Payment> = db.query(&filter).await.unwrap();
        let amounts: Vec<f64> = payments.iter().map(|p| p.amount).collect();
        assert_eq!(amounts, vec![40.0, 20.0]);

        let filter = PaymentFilter {
            status: Some(PaymentStatus::Pending),
            ..Default::default()
        };
        let payments: Vec<Payment> = db.query(&filter).await.unwrap();
        let amounts: Vec<f64> = payments.iter().map(|p| p.amount).collect();
        assert_eq!(amounts, vec![20.0, 30.0]);
        assert!(payments.iter().all(|p| p.status == PaymentStatus::Pending));
    }

    #[tokio::test]
    async fn test_payment_unknown_member_fails() {
        let (_handle, db) = connection::open_test().await;
        let result = db
            .insert(Payment {
                member_id: 99,
                amount: 10.0,
                ..Payment::default()
            })
            .await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_payment_list_idempotent() {
        let (_handle, db) = connection::open_test().await;
        let alice = insert_member(&db, "Alice").await;
        for amount in [12.5, 7.25] {
            db.insert(Payment {
                member_id: alice.id,
                amount,
                ..Payment::default()
            })
            .await
            .unwrap();
        }
        let first: Vec<Payment> = db.query(&PaymentFilter::default()).await.unwrap();
        let second: Vec<Payment> = db.query(&PaymentFilter::default()).await.unwrap();
        assert_eq!(first, second);
    }
}
