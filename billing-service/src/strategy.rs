use serde::{Deserialize, Serialize};
use rust_decimal::Decimal;

/// Share of the bill the patient still pays when insurance applies (0.7)
pub const INSURED_PAYABLE_SHARE: Decimal = Decimal::from_parts(7, 0, 0, false, 1);

/// Billing strategy applied to the base bill
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BillingStrategy {
    #[default]
    Normal,
    Insurance,
}

fn normal_billing(amount: Decimal) -> Decimal {
    amount
}

fn insurance_billing(amount: Decimal) -> Decimal {
    amount * INSURED_PAYABLE_SHARE
}

impl BillingStrategy {
    /// Pick a strategy from the desk's "Apply Insurance?" answer.
    ///
    /// Only the exact answer `yes` applies insurance; anything else,
    /// including `Yes` or an empty line, bills normally.
    pub fn from_insurance_answer(answer: &str) -> Self {
        if answer == "yes" {
            Self::Insurance
        } else {
            Self::Normal
        }
    }

    pub fn is_insurance(self) -> bool {
        matches!(self, Self::Insurance)
    }

    /// Pricing function behind this strategy
    pub fn function(self) -> fn(Decimal) -> Decimal {
        match self {
            Self::Normal => normal_billing,
            Self::Insurance => insurance_billing,
        }
    }
}

/// Final bill from a base amount and the selected strategy
pub fn generate_bill(base_amount: Decimal, strategy: BillingStrategy) -> Decimal {
    (strategy.function())(base_amount)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_insurance_answer() {
        assert_eq!(BillingStrategy::from_insurance_answer("yes"), BillingStrategy::Insurance);
        for answer in ["no", "Yes", "YES", " yes", "y", ""] {
            assert_eq!(BillingStrategy::from_insurance_answer(answer), BillingStrategy::Normal);
        }
    }

    #[test]
    fn test_insurance_discount() {
        let final_bill = generate_bill(Decimal::from(1200), BillingStrategy::Insurance);
        assert_eq!(final_bill, Decimal::from(840));
        assert_eq!(final_bill.normalize().to_string(), "840");
    }

    #[test]
    fn test_normal_is_default() {
        assert_eq!(BillingStrategy::default(), BillingStrategy::Normal);
        assert!(!BillingStrategy::Normal.is_insurance());
    }

    #[test]
    fn test_negative_amount_not_validated() {
        assert_eq!(generate_bill(Decimal::from(-100), BillingStrategy::Insurance), Decimal::from(-70));
    }

    proptest! {
        #[test]
        fn normal_billing_is_identity(mantissa in -1_000_000_000_000i64..1_000_000_000_000, scale in 0u32..6) {
            let amount = Decimal::new(mantissa, scale);
            prop_assert_eq!(generate_bill(amount, BillingStrategy::Normal), amount);
        }

        #[test]
        fn insurance_billing_is_seventy_percent(mantissa in -1_000_000_000_000i64..1_000_000_000_000, scale in 0u32..6) {
            let amount = Decimal::new(mantissa, scale);
            let discounted = generate_bill(amount, BillingStrategy::Insurance);
            prop_assert_eq!(discounted * Decimal::from(10), amount * Decimal::from(7));
        }
    }
}
