use anyhow::Result;
use async_trait::async_trait;

use gymdesk_domain::{Retrieve, Summary};

use crate::Connection;

#[async_trait]
impl Retrieve<Summary> for Connection {
    type Key = ();

    /// Count members and trainers
    async fn retrieve(&self, _key: Self::Key) -> Result<Summary> {
        let mut conn = self.acquire().await?;
        let summary: Summary = sqlx::query_as(
            r#"
            SELECT
                (SELECT COUNT(*) FROM members) AS members,
                (SELECT COUNT(*) FROM trainers) AS trainers
            "#,
        )
        .fetch_one(&mut *conn)
        .await?;
        Ok(summary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use gymdesk_domain::{Insert, Member, Trainer};

    use crate::connection;

    #[tokio::test]
    async fn test_summary_counts() {
        let (_handle, db) = connection::open_test().await;
        let summary: Summary = db.retrieve(()).await.unwrap();
        assert_eq!(summary, Summary { members: 0, trainers: 0 });

        for name in ["Alice", "Carol"] {
            db.insert(Member {
                name: name.to_string(),
                age: 20,
                ..Member::default()
            })
            .await
            .unwrap();
        }
        db.insert(Trainer {
            name: "Bob".to_string(),
            ..Trainer::default()
        })
        .await
        .unwrap();

        let summary: Summary = db.retrieve(()).await.unwrap();
        assert_eq!(summary, Summary { members: 2, trainers: 1 });
    }
}
