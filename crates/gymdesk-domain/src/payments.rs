use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::{PaymentMethod, PaymentStatus, ServiceType};

#[derive(Debug, Clone, Default, PartialEq, FromRow, Serialize, Deserialize)]
pub struct Payment {
    pub id: u32,
    pub member_id: u32,
    #[serde(default)]
    pub member_name: String,
    pub amount: f64,
    /// When the payment was made. Inserting without a date
    /// records the current time.
    pub date: Option<NaiveDateTime>,
    pub payment_method: PaymentMethod,
    pub status: PaymentStatus,
    pub service_type: ServiceType,
}

/// Payments are always listed newest first.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct PaymentFilter {
    pub id: Option<u32>,
    pub member_id: Option<u32>,
    pub status: Option<PaymentStatus>,
    pub limit: Option<u32>,
}
