use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error as ThisError;

/// A string could not be parsed into one of the
/// enumerated column values.
#[derive(Debug, Clone, PartialEq, Eq, ThisError)]
#[error("invalid {kind} '{value}', expected one of: {expected}")]
pub struct ParseKindError {
    pub kind: &'static str,
    pub value: String,
    pub expected: String,
}

/// Normalize for lenient matching: "personal-training",
/// "Personal Training" and "personaltraining" are equal.
fn normalize(s: &str) -> String {
    s.chars()
        .filter(|c| !matches!(c, ' ' | '-' | '_'))
        .flat_map(char::to_lowercase)
        .collect()
}

macro_rules! text_kind {
    ($kind:ident, $label:literal, { $($variant:ident => $text:literal),+ $(,)? }) => {
        impl $kind {
            pub const ALL: &'static [$kind] = &[$($kind::$variant),+];

            /// The stored text of the value
            pub fn as_str(&self) -> &'static str {
                match self {
                    $($kind::$variant => $text),+
                }
            }
        }

        impl fmt::Display for $kind {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.pad(self.as_str())
            }
        }

        impl FromStr for $kind {
            type Err = ParseKindError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let key = normalize(s);
                Self::ALL
                    .iter()
                    .copied()
                    .find(|k| normalize(k.as_str()) == key)
                    .ok_or_else(|| ParseKindError {
                        kind: $label,
                        value: s.to_string(),
                        expected: Self::ALL
                            .iter()
                            .map(|k| k.as_str())
                            .collect::<Vec<_>>()
                            .join(", "),
                    })
            }
        }
    };
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
pub enum Gender {
    #[default]
    Male,
    Female,
    Other,
}

text_kind!(Gender, "gender", {
    Male => "Male",
    Female => "Female",
    Other => "Other",
});

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
pub enum MembershipType {
    #[default]
    Monthly,
    Quarterly,
    Yearly,
}

text_kind!(MembershipType, "membership type", {
    Monthly => "Monthly",
    Quarterly => "Quarterly",
    Yearly => "Yearly",
});

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
pub enum PaymentMethod {
    #[default]
    Cash,
    Card,
    Online,
}

text_kind!(PaymentMethod, "payment method", {
    Cash => "Cash",
    Card => "Card",
    Online => "Online",
});

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
pub enum PaymentStatus {
    #[default]
    Completed,
    Pending,
}

text_kind!(PaymentStatus, "payment status", {
    Completed => "Completed",
    Pending => "Pending",
});

/// What a payment was made for
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
pub enum ServiceType {
    #[default]
    Membership,
    #[serde(rename = "Class Booking")]
    #[sqlx(rename = "Class Booking")]
    ClassBooking,
    #[serde(rename = "Personal Training")]
    #[sqlx(rename = "Personal Training")]
    PersonalTraining,
    Other,
}

text_kind!(ServiceType, "service type", {
    Membership => "Membership",
    ClassBooking => "Class Booking",
    PersonalTraining => "Personal Training",
    Other => "Other",
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_lenient() {
        assert_eq!("female".parse::<Gender>().unwrap(), Gender::Female);
        assert_eq!("YEARLY".parse::<MembershipType>().unwrap(), MembershipType::Yearly);
        assert_eq!(
            "personal-training".parse::<ServiceType>().unwrap(),
            ServiceType::PersonalTraining
        );
        assert_eq!(
            "Class Booking".parse::<ServiceType>().unwrap(),
            ServiceType::ClassBooking
        );
        assert_eq!("online".parse::<PaymentMethod>().unwrap(), PaymentMethod::Online);
    }

    #[test]
    fn test_parse_unknown() {
        let err = "Refunded".parse::<PaymentStatus>().unwrap_err();
        assert_eq!(err.kind, "payment status");
        assert_eq!(err.expected, "Completed, Pending");
        assert_eq!(
            err.to_string(),
            "invalid payment status 'Refunded', expected one of: Completed, Pending"
        );
    }

    #[test]
    fn test_display_is_stored_text() {
        assert_eq!(ServiceType::ClassBooking.to_string(), "Class Booking");
        assert_eq!(Gender::Other.to_string(), "Other");
        for kind in ServiceType::ALL {
            assert_eq!(kind.to_string().parse::<ServiceType>().unwrap(), *kind);
        }
    }
}
