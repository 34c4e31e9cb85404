use crate::domain::payment::Currency;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use std::collections::HashMap;

/// A pricing adjustment selected by a discount code.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DiscountRule {
    /// Multiply the amount by this factor (e.g. 0.8 for a 20% discount).
    Multiplier(Decimal),
    /// Subtract this value from the amount. Not floored at zero.
    FlatOff(Decimal),
}

/// Deployment-level pricing knobs, injected at orchestrator construction.
///
/// `Default` carries the stock values: a single 1.2 conversion rate for all
/// non-USD currencies, the SUMMER20/WELCOME10 discount codes, and a 5%
/// refund fee.
#[derive(Debug, Clone)]
pub struct PricingConfig {
    /// Rate applied to any non-USD amount. One static rate, not a rate
    /// service.
    pub conversion_rate: Decimal,
    /// Known discount codes. Codes outside this map are no-ops.
    pub discounts: HashMap<String, DiscountRule>,
    /// Fraction of a refund amount withheld as fee.
    pub refund_fee_rate: Decimal,
}

impl Default for PricingConfig {
    fn default() -> Self {
        let mut discounts = HashMap::new();
        discounts.insert("SUMMER20".to_string(), DiscountRule::Multiplier(dec!(0.8)));
        discounts.insert("WELCOME10".to_string(), DiscountRule::FlatOff(dec!(10)));
        Self {
            conversion_rate: dec!(1.2),
            discounts,
            refund_fee_rate: dec!(0.05),
        }
    }
}

impl PricingConfig {
    /// Applies the rule selected by `code`, if any.
    ///
    /// Absent and empty codes leave the amount unchanged silently; an
    /// unrecognized non-empty code is logged and leaves it unchanged.
    pub fn apply_discount(&self, amount: Decimal, code: Option<&str>) -> Decimal {
        let Some(code) = code else {
            return amount;
        };
        if code.is_empty() {
            return amount;
        }
        match self.discounts.get(code) {
            Some(DiscountRule::Multiplier(rate)) => amount * *rate,
            Some(DiscountRule::FlatOff(value)) => amount - *value,
            None => {
                tracing::warn!(code, "unknown discount code");
                amount
            }
        }
    }

    /// Converts `amount` into the settlement amount for `currency`.
    ///
    /// USD is the base currency and passes through untouched; everything
    /// else is multiplied by the configured rate.
    pub fn convert(&self, amount: Decimal, currency: Currency) -> Decimal {
        if currency == Currency::USD {
            amount
        } else {
            amount * self.conversion_rate
        }
    }

    /// The refund amount net of the configured fee.
    pub fn refund_net(&self, amount: Decimal) -> Decimal {
        amount * (Decimal::ONE - self.refund_fee_rate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_code_leaves_amount_unchanged() {
        let pricing = PricingConfig::default();
        assert_eq!(pricing.apply_discount(dec!(100), None), dec!(100));
    }

    #[test]
    fn test_summer20_takes_twenty_percent() {
        let pricing = PricingConfig::default();
        assert_eq!(pricing.apply_discount(dec!(100), Some("SUMMER20")), dec!(80));
    }

    #[test]
    fn test_welcome10_subtracts_flat_ten() {
        let pricing = PricingConfig::default();
        assert_eq!(pricing.apply_discount(dec!(50), Some("WELCOME10")), dec!(40));
    }

    #[test]
    fn test_flat_discount_can_go_negative() {
        // WELCOME10 has no floor; a 5 unit payment nets out at -5.
        let pricing = PricingConfig::default();
        assert_eq!(pricing.apply_discount(dec!(5), Some("WELCOME10")), dec!(-5));
    }

    #[test]
    fn test_unknown_code_is_a_noop() {
        let pricing = PricingConfig::default();
        assert_eq!(pricing.apply_discount(dec!(100), Some("FALL30")), dec!(100));
    }

    #[test]
    fn test_empty_code_is_a_noop() {
        let pricing = PricingConfig::default();
        assert_eq!(pricing.apply_discount(dec!(100), Some("")), dec!(100));
    }

    #[test]
    fn test_usd_is_exempt_from_conversion() {
        let pricing = PricingConfig::default();
        assert_eq!(pricing.convert(dec!(100), Currency::USD), dec!(100));
    }

    #[test]
    fn test_non_usd_is_converted() {
        let pricing = PricingConfig::default();
        assert_eq!(pricing.convert(dec!(100), Currency::EUR), dec!(120));
        assert_eq!(pricing.convert(dec!(100), Currency::JPY), dec!(120));
    }

    #[test]
    fn test_discount_composes_before_conversion() {
        let pricing = PricingConfig::default();
        let discounted = pricing.apply_discount(dec!(100), Some("SUMMER20"));
        assert_eq!(pricing.convert(discounted, Currency::EUR), dec!(96));
    }

    #[test]
    fn test_refund_net_withholds_fee() {
        let pricing = PricingConfig::default();
        assert_eq!(pricing.refund_net(dec!(100)), dec!(95));
    }

    #[test]
    fn test_custom_rates_replace_defaults() {
        let pricing = PricingConfig {
            conversion_rate: dec!(2),
            refund_fee_rate: dec!(0.1),
            ..PricingConfig::default()
        };
        assert_eq!(pricing.convert(dec!(10), Currency::GBP), dec!(20));
        assert_eq!(pricing.refund_net(dec!(10)), dec!(9));
    }
}
