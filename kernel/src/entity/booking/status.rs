use std::fmt::Display;
use std::str::FromStr;

use error_stack::Report;
use serde::{Deserialize, Serialize};

use crate::KernelError;

const PENDING: &str = "PENDING";
const CONFIRMED: &str = "CONFIRMED";
const CANCELED: &str = "CANCELED";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BookingStatus {
    Pending,
    #[default]
    Confirmed,
    Canceled,
}

impl AsRef<str> for BookingStatus {
    fn as_ref(&self) -> &str {
        match self {
            BookingStatus::Pending => PENDING,
            BookingStatus::Confirmed => CONFIRMED,
            BookingStatus::Canceled => CANCELED,
        }
    }
}

impl Display for BookingStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_ref())
    }
}

impl FromStr for BookingStatus {
    type Err = Report<KernelError>;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            PENDING => Ok(BookingStatus::Pending),
            CONFIRMED => Ok(BookingStatus::Confirmed),
            CANCELED => Ok(BookingStatus::Canceled),
            _ => Err(Report::new(KernelError::Internal)
                .attach_printable(format!("Unknown booking status: {s}"))),
        }
    }
}
