use rust_decimal::Decimal;

/// How much scrutiny an amount warrants. Small payments get the light
/// check, everything from 100 up gets the heavy one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display)]
#[strum(serialize_all = "snake_case")]
pub enum CheckDepth {
    Light,
    Heavy,
}

/// Observability-only risk label. Nothing downstream branches on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display)]
#[strum(serialize_all = "snake_case")]
pub enum RiskLevel {
    VeryLow,
    Low,
    Medium,
    High,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RiskAssessment {
    pub depth: CheckDepth,
    pub risk: RiskLevel,
}

// Placeholder thresholds of the stub model; a real scoring service would
// replace this module wholesale.
const HEAVY_CHECK_FLOOR: Decimal = Decimal::ONE_HUNDRED;
const VERY_LOW_RISK_CEILING: Decimal = Decimal::TEN;
const HIGH_RISK_FLOOR: Decimal = Decimal::ONE_THOUSAND;

/// Classifies an amount into a check depth and risk level.
///
/// Pure function; the caller decides whether to run it at all (a
/// fraud-check level of zero skips classification entirely) and what to do
/// with the result. The assessment never blocks a payment.
pub fn classify(amount: Decimal) -> RiskAssessment {
    if amount < HEAVY_CHECK_FLOOR {
        let risk = if amount < VERY_LOW_RISK_CEILING {
            RiskLevel::VeryLow
        } else {
            RiskLevel::Low
        };
        RiskAssessment {
            depth: CheckDepth::Light,
            risk,
        }
    } else {
        let risk = if amount < HIGH_RISK_FLOOR {
            RiskLevel::Medium
        } else {
            RiskLevel::High
        };
        RiskAssessment {
            depth: CheckDepth::Heavy,
            risk,
        }
    }
}
