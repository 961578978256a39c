use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

/// Share of the nightly total still charged after a cancellation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RefundRule {
    FullRefund,
    PartialRefund,
    NoRefund,
}

impl RefundRule {
    pub fn multiplier(&self) -> f64 {
        match self {
            RefundRule::FullRefund => 0.0,
            RefundRule::PartialRefund => 0.5,
            RefundRule::NoRefund => 1.0,
        }
    }

    pub fn apply(&self, total: f64) -> f64 {
        total * self.multiplier()
    }
}

struct RefundTier {
    applies: fn(i64) -> bool,
    rule: RefundRule,
}

fn more_than_a_week(days: i64) -> bool {
    days > 7
}

fn at_least_a_day(days: i64) -> bool {
    days >= 1
}

fn any(_: i64) -> bool {
    true
}

// Evaluated top to bottom, first match wins.
static REFUND_TIERS: [RefundTier; 3] = [
    RefundTier {
        applies: more_than_a_week,
        rule: RefundRule::FullRefund,
    },
    RefundTier {
        applies: at_least_a_day,
        rule: RefundRule::PartialRefund,
    },
    RefundTier {
        applies: any,
        rule: RefundRule::NoRefund,
    },
];

pub struct RefundRuleFactory;

impl RefundRuleFactory {
    pub fn days_until_check_in(now: OffsetDateTime, check_in: OffsetDateTime) -> i64 {
        (check_in - now).whole_days()
    }

    pub fn create(now: OffsetDateTime, check_in: OffsetDateTime) -> RefundRule {
        Self::for_days(Self::days_until_check_in(now, check_in))
    }

    pub fn for_days(days: i64) -> RefundRule {
        REFUND_TIERS
            .iter()
            .find(|tier| (tier.applies)(days))
            .map(|tier| tier.rule)
            .unwrap_or(RefundRule::NoRefund)
    }
}
