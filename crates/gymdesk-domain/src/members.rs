use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::{Gender, MembershipType};

#[derive(Debug, Clone, Default, PartialEq, FromRow, Serialize, Deserialize)]
pub struct Member {
    pub id: u32,
    pub name: String,
    pub age: u8,
    pub gender: Gender,
    pub phone: String,
    pub email: String,
    pub address: String,
    pub membership_type: MembershipType,
    pub trainer_id: Option<u32>,
    /// Name of the assigned trainer, filled in when reading
    #[serde(default)]
    pub trainer_name: Option<String>,
}

#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct MemberFilter {
    pub id: Option<u32>,
    /// Match members whose name contains this text.
    /// Case is ignored for ASCII letters only, so "émile"
    /// does not find "Émile".
    pub name: Option<String>,
    pub exact_name: Option<String>,
}
