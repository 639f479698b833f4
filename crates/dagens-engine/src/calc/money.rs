use crate::{Error, Result};
use dagens_types::CurrencyCode;
use serde::Serialize;

const MONTHS_PER_YEAR: f64 = 12.0;
const WEEKS_PER_YEAR: f64 = 52.0;

/// `percent` % of `value`
pub fn percent_of(value: f64, percent: f64) -> Result<f64> {
    ensure_finite(&[value, percent])?;
    Ok(value * percent / 100.0)
}

/// Hourly wage from a monthly salary and a weekly hour count
pub fn hourly_wage(monthly_salary: f64, hours_per_week: f64) -> Result<f64> {
    ensure_finite(&[monthly_salary, hours_per_week])?;
    if hours_per_week <= 0.0 {
        return Err(Error::InvalidInput(
            "hours per week must be greater than zero".to_string(),
        ));
    }
    Ok(monthly_salary * MONTHS_PER_YEAR / (hours_per_week * WEEKS_PER_YEAR))
}

/// Reject amounts a conversion cannot start from
pub fn ensure_amount(amount: f64) -> Result<()> {
    if amount.is_finite() && amount > 0.0 {
        Ok(())
    } else {
        Err(Error::InvalidInput("amount must be a number greater than zero".to_string()))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Conversion {
    pub amount: f64,
    pub from: CurrencyCode,
    pub to: CurrencyCode,
    /// Units of `to` per one unit of `from`
    pub rate: f64,
    pub converted: f64,
}

impl Conversion {
    /// "250 NOK = 21.40 EUR"
    pub fn summary(&self) -> String {
        format!("{} {} = {:.2} {}", self.amount, self.from, self.converted, self.to)
    }
}

pub fn convert_currency(
    amount: f64,
    from: CurrencyCode,
    to: CurrencyCode,
    rate: f64,
) -> Result<Conversion> {
    ensure_amount(amount)?;
    if !(rate.is_finite() && rate > 0.0) {
        return Err(Error::InvalidInput(format!(
            "exchange rate {} to {} must be positive",
            from, to
        )));
    }

    Ok(Conversion {
        amount,
        from,
        to,
        rate,
        converted: amount * rate,
    })
}

fn ensure_finite(values: &[f64]) -> Result<()> {
    if values.iter().all(|v| v.is_finite()) {
        Ok(())
    } else {
        Err(Error::InvalidInput("expected finite numbers".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_percent_of() {
        assert_eq!(percent_of(200.0, 15.0).unwrap(), 30.0);
        assert_eq!(percent_of(0.0, 50.0).unwrap(), 0.0);
        assert!(percent_of(f64::NAN, 1.0).is_err());
    }

    #[test]
    fn test_hourly_wage() {
        // 52 000 per month at 37.5 h/week
        let hourly = hourly_wage(52_000.0, 37.5).unwrap();
        assert_eq!(format!("{:.2}", hourly), "320.00");
        assert!(hourly_wage(40_000.0, 0.0).is_err());
    }

    fn code(raw: &str) -> CurrencyCode {
        CurrencyCode::new(raw).unwrap()
    }

    #[test]
    fn test_convert_currency() {
        let conversion = convert_currency(250.0, code("NOK"), code("EUR"), 0.0856).unwrap();
        assert_eq!(format!("{:.2}", conversion.converted), "21.40");
        assert_eq!(conversion.summary(), "250 NOK = 21.40 EUR");
    }

    #[test]
    fn test_convert_currency_rejects_bad_amounts() {
        for amount in [0.0, -10.0, f64::NAN, f64::INFINITY] {
            assert!(
                convert_currency(amount, code("NOK"), code("EUR"), 0.1).is_err(),
                "accepted {amount}"
            );
        }
        assert!(convert_currency(10.0, code("NOK"), code("EUR"), 0.0).is_err());
    }
}
