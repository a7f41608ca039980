use anyhow::{Context, Result};
use chrono::NaiveTime;

use gymdesk_db::{Connection, QueryError};
use gymdesk_domain::{Member, MemberFilter, Query, Retrieve, Trainer, TrainerFilter};

/// Pick the single result of a name lookup
fn single<T>(mut found: Vec<T>) -> Result<T, QueryError> {
    match found.len() {
        0 => Err(QueryError::NotFound),
        1 => Ok(found.remove(0)),
        n => Err(QueryError::Ambiguous(n)),
    }
}

/// Resolve a member given by id or by exact name
pub async fn member(db: &Connection, selection: &str) -> Result<Member> {
    let member: Result<Member> = match selection.trim().parse::<u32>() {
        Ok(id) => db.retrieve(id).await,
        Err(_) => {
            let filter = MemberFilter {
                exact_name: Some(selection.trim().to_string()),
                ..Default::default()
            };
            let found: Vec<Member> = db.query(&filter).await?;
            single(found).map_err(Into::into)
        }
    };
    member.with_context(|| format!("selecting member '{}'", selection))
}

/// Resolve a trainer given by id or by exact name
pub async fn trainer(db: &Connection, selection: &str) -> Result<Trainer> {
    let trainer: Result<Trainer> = match selection.trim().parse::<u32>() {
        Ok(id) => db.retrieve(id).await,
        Err(_) => {
            let filter = TrainerFilter {
                exact_name: Some(selection.trim().to_string()),
                ..Default::default()
            };
            let found: Vec<Trainer> = db.query(&filter).await?;
            single(found).map_err(Into::into)
        }
    };
    trainer.with_context(|| format!("selecting trainer '{}'", selection))
}

/// Parse a time of day, with or without seconds
pub fn parse_time(s: &str) -> Result<NaiveTime, chrono::ParseError> {
    NaiveTime::parse_from_str(s, "%H:%M:%S").or_else(|_| NaiveTime::parse_from_str(s, "%H:%M"))
}
