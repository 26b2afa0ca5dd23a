use crate::error::PayrollError;
use rust_decimal::Decimal;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// A currency amount.
///
/// Wraps `rust_decimal::Decimal` so pay figures never pass through binary
/// floating point on their way from the roster to the payslip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Serialize)]
pub struct Money(pub Decimal);

impl Money {
    pub const ZERO: Self = Self(Decimal::ZERO);

    pub fn new(amount: Decimal) -> Self {
        Self(amount)
    }

    pub fn value(&self) -> Decimal {
        self.0
    }

    pub fn is_negative(&self) -> bool {
        self.0.is_sign_negative() && !self.0.is_zero()
    }

    /// Parses a pay figure as typed into a spreadsheet cell.
    ///
    /// Accepts a leading `$` and comma thousands separators. Pay figures on a
    /// roster are never negative.
    pub fn parse_amount(raw: &str) -> Result<Self, PayrollError> {
        let cleaned: String = raw
            .trim()
            .trim_start_matches('$')
            .chars()
            .filter(|c| *c != ',')
            .collect();

        if cleaned.is_empty() {
            return Err(PayrollError::InvalidAmount {
                value: raw.to_string(),
                reason: "amount is blank".to_string(),
            });
        }

        let amount = Decimal::from_str(&cleaned)
            .or_else(|_| Decimal::from_scientific(&cleaned))
            .map_err(|e| PayrollError::InvalidAmount {
                value: raw.to_string(),
                reason: e.to_string(),
            })?;

        let money = Self(amount);
        if money.is_negative() {
            return Err(PayrollError::InvalidAmount {
                value: raw.to_string(),
                reason: "amount must not be negative".to_string(),
            });
        }
        Ok(money)
    }

    /// `None` when the sum falls outside the range of `Decimal`.
    pub fn checked_add(self, rhs: Self) -> Option<Self> {
        self.0.checked_add(rhs.0).map(Self)
    }

    pub fn checked_sub(self, rhs: Self) -> Option<Self> {
        self.0.checked_sub(rhs.0).map(Self)
    }
}


impl From<Decimal> for Money {
    fn from(amount: Decimal) -> Self {
        Self(amount)
    }
}

/// `$1,234.50`, or `$-1,234.50` for negative amounts.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rounded = self.0.round_dp(2);
        let negative = rounded.is_sign_negative() && !rounded.is_zero();
        let digits = format!("{:.2}", rounded.abs());
        let (whole, cents) = digits.split_once('.').unwrap_or((digits.as_str(), "00"));

        let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
        for (i, c) in whole.chars().enumerate() {
            if i > 0 && (whole.len() - i) % 3 == 0 {
                grouped.push(',');
            }
            grouped.push(c);
        }

        let sign = if negative { "-" } else { "" };
        write!(f, "${sign}{grouped}.{cents}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_display_groups_thousands() {
        assert_eq!(Money::new(dec!(1050)).to_string(), "$1,050.00");
        assert_eq!(Money::new(dec!(1234567.891)).to_string(), "$1,234,567.89");
        assert_eq!(Money::new(dec!(999.5)).to_string(), "$999.50");
        assert_eq!(Money::new(dec!(100000)).to_string(), "$100,000.00");
        assert_eq!(Money::ZERO.to_string(), "$0.00");
    }

    #[test]
    fn test_display_negative_amount() {
        assert_eq!(Money::new(dec!(-1234.5)).to_string(), "$-1,234.50");
        assert_eq!(Money::new(dec!(-0.001)).to_string(), "$0.00");
    }

    #[test]
    fn test_parse_amount_tolerates_currency_formatting() {
        assert_eq!(Money::parse_amount("$1,050.25").unwrap(), Money::new(dec!(1050.25)));
        assert_eq!(Money::parse_amount(" 100 ").unwrap(), Money::new(dec!(100)));
        assert_eq!(Money::parse_amount("0").unwrap(), Money::ZERO);
    }

    #[test]
    fn test_parse_amount_rejects_bad_input() {
        assert!(Money::parse_amount("").is_err());
        assert!(Money::parse_amount("abc").is_err());
        assert!(Money::parse_amount("-5").is_err());
    }

    #[test]
    fn test_arithmetic_is_exact() {
        let total = Money::new(dec!(0.1)).checked_add(Money::new(dec!(0.2))).unwrap();
        assert_eq!(total, Money::new(dec!(0.3)));
        assert_eq!(total.checked_sub(Money::new(dec!(0.3))), Some(Money::ZERO));
    }

    #[test]
    fn test_arithmetic_reports_overflow() {
        let max = Money::new(Decimal::MAX);
        assert_eq!(max.checked_add(Money::new(dec!(1))), None);
        assert_eq!(Money::new(Decimal::MIN).checked_sub(Money::new(dec!(1))), None);
        assert_eq!(max.checked_sub(max), Some(Money::ZERO));
    }
}
