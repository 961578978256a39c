use error_stack::Report;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use vodca::References;

use crate::validation::{Validation, ValidationError};
use crate::KernelError;

/// Half-open stay period `[start_date, end_date)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, References, Serialize, Deserialize)]
#[serde(try_from = "UncheckedDateRange")]
pub struct DateRange {
    start_date: OffsetDateTime,
    end_date: OffsetDateTime,
}

impl DateRange {
    pub fn new(
        start_date: impl Into<OffsetDateTime>,
        end_date: impl Into<OffsetDateTime>,
    ) -> error_stack::Result<Self, KernelError> {
        let start_date = start_date.into();
        let end_date = end_date.into();
        Validation::new()
            .ensure(|| start_date != end_date, ValidationError::SameDates)
            .ensure(|| end_date > start_date, ValidationError::EndBeforeStart)
            .finish()?;
        Ok(Self {
            start_date,
            end_date,
        })
    }

    /// Whole days of the stay, partial days are dropped.
    pub fn total_nights(&self) -> i64 {
        (self.end_date - self.start_date).whole_days()
    }

    pub fn overlaps(&self, other: &DateRange) -> bool {
        self.start_date < other.end_date && other.start_date < self.end_date
    }
}

#[derive(Deserialize)]
struct UncheckedDateRange {
    start_date: OffsetDateTime,
    end_date: OffsetDateTime,
}

impl TryFrom<UncheckedDateRange> for DateRange {
    type Error = Report<KernelError>;

    fn try_from(value: UncheckedDateRange) -> Result<Self, Self::Error> {
        DateRange::new(value.start_date, value.end_date)
    }
}
