use anyhow::Result;
use async_trait::async_trait;
use sqlx::{QueryBuilder, Sqlite};

use gymdesk_domain::{Insert, Member, MemberFilter, Query, Retrieve};

use crate::{
    results::{contains_pattern, Id, QueryError},
    Connection,
};

#[async_trait]
impl Query<Member> for Connection {
    type Filter = MemberFilter;

    /// Fetch members with the name of their trainer
    async fn query(&self, filter: &Self::Filter) -> Result<Vec<Member>> {
        let mut conn = self.acquire().await?;
        let mut qry = QueryBuilder::<Sqlite>::new(
            r#"
            SELECT
                m.id,
                m.name,
                m.age,
                m.gender,
                m.phone,
                m.email,
                m.address,
                m.membership_type,
                m.trainer_id,
                t.name AS trainer_name
            FROM members m
            LEFT JOIN trainers t ON m.trainer_id = t.id
            WHERE 1
            "#,
        );

        if let Some(id) = filter.id {
            qry.push(" AND m.id = ").push_bind(id);
        }
        if let Some(name) = filter.name.clone() {
            qry.push(" AND m.name LIKE ")
                .push_bind(contains_pattern(&name))
                .push(r" ESCAPE '\'");
        }
        if let Some(name) = filter.exact_name.clone() {
            qry.push(" AND m.name = ").push_bind(name);
        }
        qry.push(" ORDER BY m.id");

        tracing::debug!(?filter, "query members");
        let members: Vec<Member> = qry.build_query_as().fetch_all(&mut *conn).await?;
        Ok(members)
    }
}

#[async_trait]
impl Retrieve<Member> for Connection {
    type Key = u32;
    async fn retrieve(&self, member_id: Self::Key) -> Result<Member> {
        let filter = MemberFilter {
            id: Some(member_id),
            ..Default::default()
        };
        let member = self
            .query(&filter)
            .await?
            .pop()
            .ok_or(QueryError::NotFound)?;
        Ok(member)
    }
}

#[async_trait]
impl Insert<Member> for Connection {
    async fn insert(&self, member: Member) -> Result<Member> {
        let insert: Id<u32> = {
            let mut conn = self.acquire().await?;
            let mut qry = QueryBuilder::<Sqlite>::new(
                r#"INSERT INTO members (
                    name,
                    age,
                    gender,
                    phone,
                    email,
                    address,
                    membership_type,
                    trainer_id
                ) VALUES (
                "#,
            );
            qry.separated(", ")
                .push_bind(&member.name)
                .push_bind(member.age)
                .push_bind(member.gender)
                .push_bind(&member.phone)
                .push_bind(&member.email)
                .push_bind(&member.address)
                .push_bind(member.membership_type)
                .push_bind(member.trainer_id);

            qry.push(") RETURNING id ")
                .build_query_as()
                .fetch_one(&mut *conn)
                .await?
        };
        tracing::info!(id = insert.id, name = %member.name, "member added");
        self.retrieve(insert.id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use gymdesk_domain::{Gender, MembershipType, Trainer};

    use crate::connection;

    fn alice() -> Member {
        Member {
            name: "Alice".to_string(),
            age: 30,
            gender: Gender::Female,
            phone: "555-1111".to_string(),
            email: "a@x.com".to_string(),
            membership_type: MembershipType::Monthly,
            ..Member::default()
        }
    }

    #[tokio::test]
    async fn test_member_insert() {
        let (_handle, db) = connection::open_test().await;
        let member = Member {
            address: "1 Main Street".to_string(),
            membership_type: MembershipType::Yearly,
            ..alice()
        };
        let member = db.insert(member).await.unwrap();

        assert!(member.id > 0);
        assert_eq!(member.name, "Alice");
        assert_eq!(member.age, 30);
        assert_eq!(member.gender, Gender::Female);
        assert_eq!(member.phone, "555-1111");
        assert_eq!(member.email, "a@x.com");
        assert_eq!(member.address, "1 Main Street");
        assert_eq!(member.membership_type, MembershipType::Yearly);
        assert_eq!(member.trainer_id, None);
        assert_eq!(member.trainer_name, None);
    }

    #[tokio::test]
    async fn test_member_insert_then_list() {
        let (_handle, db) = connection::open_test().await;
        let before: Vec<Member> = db.query(&MemberFilter::default()).await.unwrap();
        assert!(before.is_empty());

        let member = db.insert(alice()).await.unwrap();

        let after: Vec<Member> = db.query(&MemberFilter::default()).await.unwrap();
        assert_eq!(after.len(), 1);
        assert_eq!(after[0], member);
        assert_eq!(after[0].name, "Alice");
    }

    #[tokio::test]
    async fn test_member_with_trainer() {
        let (_handle, db) = connection::open_test().await;
        let trainer = db
            .insert(Trainer {
                name: "Bob".to_string(),
                specialization: "Strength".to_string(),
                phone: "555-2222".to_string(),
                ..Trainer::default()
            })
            .await
            .unwrap();

        let member = db
            .insert(Member {
                trainer_id: Some(trainer.id),
                ..alice()
            })
            .await
            .unwrap();
        assert_eq!(member.trainer_id, Some(trainer.id));
        assert_eq!(member.trainer_name.as_deref(), Some("Bob"));
    }

    #[tokio::test]
    async fn test_member_unknown_trainer_fails() {
        let (_handle, db) = connection::open_test().await;
        let result = db
            .insert(Member {
                trainer_id: Some(4223),
                ..alice()
            })
            .await;
        assert!(result.is_err());

        // Nothing was written
        let members: Vec<Member> = db.query(&MemberFilter::default()).await.unwrap();
        assert!(members.is_empty());
    }

    #[tokio::test]
    async fn test_member_query_name_contains() {
        let (_handle, db) = connection::open_test().await;
        for name in ["Alice Smith", "Natalie Bowen", "Bob Allison", "Carol"] {
            db.insert(Member {
                name: name.to_string(),
                ..alice()
            })
            .await
            .unwrap();
        }

        let filter = MemberFilter {
            name: Some("ALI".to_string()),
            ..MemberFilter::default()
        };
        let members: Vec<Member> = db.query(&filter).await.unwrap();
        let names: Vec<&str> = members.iter().map(|m| m.name.as_str()).collect();
        assert_eq!(names, vec!["Alice Smith", "Natalie Bowen"]);

        // Search results are a subset of the full listing
        let all: Vec<Member> = db.query(&MemberFilter::default()).await.unwrap();
        for m in &members {
            assert!(all.contains(m));
        }

        let filter = MemberFilter {
            name: Some("Dave".to_string()),
            ..MemberFilter::default()
        };
        let members: Vec<Member> = db.query(&filter).await.unwrap();
        assert!(members.is_empty());
    }

    #[tokio::test]
    async fn test_member_query_name_non_ascii_case() {
        let (_handle, db) = connection::open_test().await;
        db.insert(Member {
            name: "Émile Zola".to_string(),
            ..alice()
        })
        .await
        .unwrap();

        let search = |text: &str| MemberFilter {
            name: Some(text.to_string()),
            ..MemberFilter::default()
        };
        let members: Vec<Member> = db.query(&search("Émile")).await.unwrap();
        assert_eq!(members.len(), 1);
        let members: Vec<Member> = db.query(&search("ZOLA")).await.unwrap();
        assert_eq!(members.len(), 1);
        // Only ASCII letters fold
        let members: Vec<Member> = db.query(&search("émile")).await.unwrap();
        assert!(members.is_empty());
    }

    #[tokio::test]
    async fn test_member_query_name_wildcards() {
        let (_handle, db) = connection::open_test().await;
        db.insert(Member {
            name: "Ann_Lee".to_string(),
            ..alice()
        })
        .await
        .unwrap();
        db.insert(Member {
            name: "AnnXLee".to_string(),
            ..alice()
        })
        .await
        .unwrap();

        let filter = MemberFilter {
            name: Some("n_L".to_string()),
            ..MemberFilter::default()
        };
        let members: Vec<Member> = db.query(&filter).await.unwrap();
        assert_eq!(members.len(), 1);
        assert_eq!(members[0].name, "Ann_Lee");

        let filter = MemberFilter {
            name: Some("%".to_string()),
            ..MemberFilter::default()
        };
        let members: Vec<Member> = db.query(&filter).await.unwrap();
        assert!(members.is_empty());
    }

    #[tokio::test]
    async fn test_member_exact_name() {
        let (_handle, db) = connection::open_test().await;
        db.insert(alice()).await.unwrap();
        db.insert(Member {
            name: "Alice Cooper".to_string(),
            ..alice()
        })
        .await
        .unwrap();

        let filter = MemberFilter {
            exact_name: Some("Alice".to_string()),
            ..MemberFilter::default()
        };
        let members: Vec<Member> = db.query(&filter).await.unwrap();
        assert_eq!(members.len(), 1);
        assert_eq!(members[0].name, "Alice");
    }

    #[tokio::test]
    async fn test_member_retrieve_not_found() {
        let (_handle, db) = connection::open_test().await;
        let result: Result<Member> = db.retrieve(42).await;
        let err = result.unwrap_err();
        assert!(matches!(
            err.downcast_ref::<QueryError>(),
            Some(QueryError::NotFound)
        ));
    }

    #[tokio::test]
    async fn test_member_list_idempotent() {
        let (_handle, db) = connection::open_test().await;
        db.insert(alice()).await.unwrap();
        db.insert(Member {
            name: "Bob".to_string(),
            ..alice()
        })
        .await
        .unwrap();

        let first: Vec<Member> = db.query(&MemberFilter::default()).await.unwrap();
        let second: Vec<Member> = db.query(&MemberFilter::default()).await.unwrap();
        assert_eq!(first, second);
    }
}
