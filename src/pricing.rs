//! Pricing engine
//!
//! Pure quote computation: value-added tax, volume discount by quantity tier,
//! and installment surcharge, with explicit truncation toward zero at the end.

use rust_decimal::{Decimal, prelude::ToPrimitive};
use thiserror::Error;

use crate::prices::QuotedPrice;

/// Largest quantity that can be quoted.
pub const MAX_QUANTITY: i64 = 10_000;

/// Errors specific to quote computation.
///
/// Both variants are routine, user-correctable outcomes rather than faults;
/// callers surface them as input notices.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum QuoteError {
    /// The quantity was outside the quotable range of 0 to 10000.
    #[error("quantity must be between 0 and 10000")]
    InvalidQuantity,

    /// The installment count was not one of the offered plans (1, 3 or 6).
    #[error("installments must be 1, 3 or 6")]
    InvalidInstallments,
}

/// A volume-discount tier, selected by quantity range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tier {
    /// 0 to 100 units: full price.
    Standard,

    /// 101 to 500 units: minor discount.
    MinorDiscount,

    /// 501 to 10000 units: major discount.
    MajorDiscount,
}

impl Tier {
    /// Selects the tier covering the given quantity, or `None` when the
    /// quantity is outside the quotable range.
    pub fn for_quantity(quantity: i64) -> Option<Self> {
        match quantity {
            0..=100 => Some(Tier::Standard),
            101..=500 => Some(Tier::MinorDiscount),
            501..=MAX_QUANTITY => Some(Tier::MajorDiscount),
            _ => None,
        }
    }

    /// The discount rate for this tier, if any.
    pub fn discount(self) -> Option<Decimal> {
        match self {
            Tier::Standard => None,
            Tier::MinorDiscount => Some(Decimal::new(15, 2)),
            Tier::MajorDiscount => Some(Decimal::new(25, 2)),
        }
    }
}

/// An offered installment plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InstallmentPlan {
    /// A single payment, no surcharge.
    Single,

    /// Three installments.
    Three,

    /// Six installments.
    Six,
}

impl InstallmentPlan {
    /// The surcharge rate for splitting payment under this plan, if any.
    pub fn surcharge(self) -> Option<Decimal> {
        match self {
            InstallmentPlan::Single => None,
            InstallmentPlan::Three => Some(Decimal::new(15, 2)),
            InstallmentPlan::Six => Some(Decimal::new(30, 2)),
        }
    }
}

impl TryFrom<i64> for InstallmentPlan {
    type Error = QuoteError;

    fn try_from(count: i64) -> Result<Self, Self::Error> {
        match count {
            1 => Ok(InstallmentPlan::Single),
            3 => Ok(InstallmentPlan::Three),
            6 => Ok(InstallmentPlan::Six),
            _ => Err(QuoteError::InvalidInstallments),
        }
    }
}

/// Value-added tax multiplier applied to the quantity.
///
/// The tax is applied to the quantity itself, not to a per-unit price; this
/// matches the storefront's published quoting rules.
fn vat_multiplier() -> Decimal {
    Decimal::new(121, 2)
}

/// Computes the final quoted price for a quantity and an installment count.
///
/// The computation is deterministic and side-effect free:
///
/// 1. `after_tax = quantity * 1.21`
/// 2. the tier discount, if any, comes off the after-tax value
/// 3. the result is scaled by the unit base price of 100
/// 4. the installment surcharge, if any, is added
/// 5. the final amount is truncated toward zero
///
/// # Errors
///
/// - [`QuoteError::InvalidQuantity`]: `quantity` is outside `0..=10000`.
/// - [`QuoteError::InvalidInstallments`]: `installments` is not 1, 3 or 6.
pub fn quote_final_price(quantity: i64, installments: i64) -> Result<QuotedPrice, QuoteError> {
    let tier = Tier::for_quantity(quantity).ok_or(QuoteError::InvalidQuantity)?;
    let plan = InstallmentPlan::try_from(installments)?;

    let after_tax = Decimal::from(quantity) * vat_multiplier();

    let adjusted = match tier.discount() {
        Some(rate) => after_tax - rate * after_tax,
        None => after_tax,
    };

    let base = Decimal::ONE_HUNDRED * adjusted;

    let total = match plan.surcharge() {
        Some(rate) => base + rate * base,
        None => base,
    };

    let Some(value) = total.trunc().to_u64() else {
        unreachable!("a quote for a validated quantity always fits in a u64")
    };

    Ok(QuotedPrice::new(value))
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    #[test]
    fn quote_standard_tier_single_payment() -> TestResult {
        let price = quote_final_price(50, 1)?;

        assert_eq!(*price, 6050);

        Ok(())
    }

    #[test]
    fn quote_minor_discount_three_installments() -> TestResult {
        // 200 * 1.21 = 242; minus 15% = 205.7; * 100 = 20570; + 15% = 23655.5
        let price = quote_final_price(200, 3)?;

        assert_eq!(*price, 23655);

        Ok(())
    }

    #[test]
    fn quote_major_discount_six_installments() -> TestResult {
        let price = quote_final_price(1000, 6)?;

        assert_eq!(*price, 117_975);

        Ok(())
    }

    #[test]
    fn quote_of_zero_quantity_is_zero() -> TestResult {
        let price = quote_final_price(0, 1)?;

        assert_eq!(*price, 0);

        Ok(())
    }

    #[test]
    fn negative_quantity_is_invalid() {
        assert_eq!(quote_final_price(-1, 1), Err(QuoteError::InvalidQuantity));
    }

    #[test]
    fn quantity_above_upper_bound_is_invalid() {
        assert_eq!(
            quote_final_price(10_001, 1),
            Err(QuoteError::InvalidQuantity)
        );
    }

    #[test]
    fn unoffered_installment_count_is_invalid() {
        assert_eq!(
            quote_final_price(50, 2),
            Err(QuoteError::InvalidInstallments)
        );
    }

    #[test]
    fn invalid_quantity_reported_before_invalid_installments() {
        assert_eq!(quote_final_price(-5, 2), Err(QuoteError::InvalidQuantity));
    }

    #[test]
    fn quote_is_idempotent() -> TestResult {
        assert_eq!(quote_final_price(200, 3)?, quote_final_price(200, 3)?);

        Ok(())
    }

    #[test]
    fn price_is_monotonic_within_each_tier() -> TestResult {
        for range in [0..=100_i64, 101..=500, 501..=MAX_QUANTITY] {
            let mut previous = None;

            for quantity in range {
                let price = quote_final_price(quantity, 1)?;

                if let Some(last) = previous {
                    assert!(price >= last, "price decreased at quantity {quantity}");
                }

                previous = Some(price);
            }
        }

        Ok(())
    }

    #[test]
    fn tier_boundaries() {
        assert_eq!(Tier::for_quantity(100), Some(Tier::Standard));
        assert_eq!(Tier::for_quantity(101), Some(Tier::MinorDiscount));
        assert_eq!(Tier::for_quantity(500), Some(Tier::MinorDiscount));
        assert_eq!(Tier::for_quantity(501), Some(Tier::MajorDiscount));
        assert_eq!(Tier::for_quantity(10_000), Some(Tier::MajorDiscount));
        assert_eq!(Tier::for_quantity(10_001), None);
        assert_eq!(Tier::for_quantity(-1), None);
    }

    #[test]
    fn installment_plan_from_count() {
        assert_eq!(InstallmentPlan::try_from(1), Ok(InstallmentPlan::Single));
        assert_eq!(InstallmentPlan::try_from(3), Ok(InstallmentPlan::Three));
        assert_eq!(InstallmentPlan::try_from(6), Ok(InstallmentPlan::Six));
        assert_eq!(
            InstallmentPlan::try_from(12),
            Err(QuoteError::InvalidInstallments)
        );
    }
}
