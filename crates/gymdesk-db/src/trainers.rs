use anyhow::Result;
use async_trait::async_trait;
use sqlx::{QueryBuilder, Sqlite};

use gymdesk_domain::{Insert, Query, Retrieve, Trainer, TrainerFilter};

use crate::{
    results::{Id, QueryError},
    Connection,
};

#[async_trait]
impl Query<Trainer> for Connection {
    type Filter = TrainerFilter;
    async fn query(&self, filter: &Self::Filter) -> Result<Vec<Trainer>> {
        let mut conn = self.acquire().await?;
        let mut qry = QueryBuilder::<Sqlite>::new(
            r#"
            SELECT
                id,
                name,
                experience,
                specialization,
                gender,
                phone,
                ROUND(salary, 10) AS salary
            FROM trainers
            WHERE 1
            "#,
        );
        if let Some(id) = filter.id {
            qry.push(" AND id = ").push_bind(id);
        }
        if let Some(name) = filter.exact_name.clone() {
            qry.push(" AND name = ").push_bind(name);
        }
        qry.push(" ORDER BY id");

        tracing::debug!(?filter, "query trainers");
        let trainers: Vec<Trainer> = qry.build_query_as().fetch_all(&mut *conn).await?;
        Ok(trainers)
    }
}

#[async_trait]
impl Retrieve<Trainer> for Connection {
    type Key = u32;
    async fn retrieve(&self, trainer_id: Self::Key) -> Result<Trainer> {
        let filter = TrainerFilter {
            id: Some(trainer_id),
            ..Default::default()
        };
        let trainer = self
            .query(&filter)
            .await?
            .pop()
            .ok_or(QueryError::NotFound)?;
        Ok(trainer)
    }
}

#[async_trait]
impl Insert<Trainer> for Connection {
    async fn insert(&self, trainer: Trainer) -> Result<Trainer> {
        let insert: Id<u32> = {
            let mut conn = self.acquire().await?;
            let mut qry = QueryBuilder::<Sqlite>::new(
                r#"INSERT INTO trainers (
                    name,
                    experience,
                    specialization,
                    gender,
                    phone,
                    salary
                ) VALUES (
                "#,
            );
            qry.separated(", ")
                .push_bind(&trainer.name)
                .push_bind(trainer.experience)
                .push_bind(&trainer.specialization)
                .push_bind(trainer.gender)
                .push_bind(&trainer.phone)
                .push_bind(trainer.salary);

            qry.push(") RETURNING id ")
                .build_query_as()
                .fetch_one(&mut *conn)
                .await?
        };
        tracing::info!(id = insert.id, name = %trainer.name, "trainer added");
        self.retrieve(insert.id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use gymdesk_domain::Gender;

    use crate::connection;

    #[tokio::test]
    async fn test_trainer_insert() {
        let (_handle, db) = connection::open_test().await;
        let trainer = Trainer {
            name: "Bob".to_string(),
            experience: 7,
            specialization: "Powerlifting".to_string(),
            gender: Gender::Male,
            phone: "555-2222".to_string(),
            salary: 3200.5,
            ..Trainer::default()
        };
        let trainer = db.insert(trainer).await.unwrap();

        assert!(trainer.id > 0);
        assert_eq!(trainer.name, "Bob");
        assert_eq!(trainer.experience, 7);
        assert_eq!(trainer.specialization, "Powerlifting");
        assert_eq!(trainer.gender, Gender::Male);
        assert_eq!(trainer.phone, "555-2222");
        assert_eq!(trainer.salary, 3200.5);
    }

    #[tokio::test]
    async fn test_trainer_list() {
        let (_handle, db) = connection::open_test().await;
        for name in ["Bob", "Dana"] {
            db.insert(Trainer {
                name: name.to_string(),
                specialization: "Yoga".to_string(),
                phone: "555".to_string(),
                gender: Gender::Other,
                ..Trainer::default()
            })
            .await
            .unwrap();
        }

        let trainers: Vec<Trainer> = db.query(&TrainerFilter::default()).await.unwrap();
        let names: Vec<&str> = trainers.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, vec!["Bob", "Dana"]);

        let filter = TrainerFilter {
            exact_name: Some("Dana".to_string()),
            ..Default::default()
        };
        let trainers: Vec<Trainer> = db.query(&filter).await.unwrap();
        assert_eq!(trainers.len(), 1);
        assert_eq!(trainers[0].gender, Gender::Other);
    }

    #[tokio::test]
    async fn test_trainer_list_idempotent() {
        let (_handle, db) = connection::open_test().await;
        for name in ["Bob", "Dana"] {
            db.insert(Trainer {
                name: name.to_string(),
                salary: 2500.25,
                ..Trainer::default()
            })
            .await
            .unwrap();
        }

        let first: Vec<Trainer> = db.query(&TrainerFilter::default()).await.unwrap();
        let second: Vec<Trainer> = db.query(&TrainerFilter::default()).await.unwrap();
        assert_eq!(first.len(), 2);
        assert_eq!(first, second);
    }
}
