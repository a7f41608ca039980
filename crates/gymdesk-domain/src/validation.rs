use chrono::NaiveTime;
use thiserror::Error as ThisError;

use crate::{Booking, Member, Payment, Trainer};

pub const MIN_AGE: u8 = 15;
pub const MAX_AGE: u8 = 80;

/// Input errors, detected before anything is written
#[derive(Debug, Clone, PartialEq, ThisError)]
pub enum ValidationError {
    #[error("{0} is a required field")]
    Required(&'static str),
    #[error("age {0} is out of range (15-80)")]
    AgeOutOfRange(u8),
    #[error("salary must not be negative (got {0})")]
    NegativeSalary(f64),
    #[error("amount must be greater than zero (got {0})")]
    InvalidAmount(f64),
    #[error("end time {end} must be after start time {start}")]
    EndBeforeStart { start: NaiveTime, end: NaiveTime },
}

/// Check a record before it is handed to the database.
pub trait Validate {
    fn validate(&self) -> Result<(), ValidationError>;
}

fn required(field: &'static str, value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::Required(field));
    }
    Ok(())
}

impl Validate for Member {
    fn validate(&self) -> Result<(), ValidationError> {
        required("name", &self.name)?;
        required("phone", &self.phone)?;
        required("email", &self.email)?;
        if !(MIN_AGE..=MAX_AGE).contains(&self.age) {
            return Err(ValidationError::AgeOutOfRange(self.age));
        }
        Ok(())
    }
}

impl Validate for Trainer {
    fn validate(&self) -> Result<(), ValidationError> {
        required("name", &self.name)?;
        required("phone", &self.phone)?;
        required("specialization", &self.specialization)?;
        // NaN fails here as well
        if !(self.salary >= 0.0 && self.salary.is_finite()) {
            return Err(ValidationError::NegativeSalary(self.salary));
        }
        Ok(())
    }
}

impl Validate for Payment {
    fn validate(&self) -> Result<(), ValidationError> {
        if !(self.amount > 0.0 && self.amount.is_finite()) {
            return Err(ValidationError::InvalidAmount(self.amount));
        }
        Ok(())
    }
}

impl Validate for Booking {
    fn validate(&self) -> Result<(), ValidationError> {
        if self.end_time <= self.start_time {
            return Err(ValidationError::EndBeforeStart {
                start: self.start_time,
                end: self.end_time,
            });
        }
        Ok(())
    }
}
