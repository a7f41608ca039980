use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::Gender;

#[derive(Debug, Clone, Default, PartialEq, FromRow, Serialize, Deserialize)]
pub struct Trainer {
    pub id: u32,
    pub name: String,
    /// Years of experience
    pub experience: u32,
    pub specialization: String,
    pub gender: Gender,
    pub phone: String,
    pub salary: f64,
}

#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct TrainerFilter {
    pub id: Option<u32>,
    pub exact_name: Option<String>,
}
