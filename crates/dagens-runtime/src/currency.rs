use crate::Result;
use dagens_engine::calc::{self, Conversion};
use dagens_feeds::RateSource;
use dagens_types::CurrencyCode;
use std::sync::Arc;

/// Converts amounts of one base currency using the latest remote rate
pub struct CurrencyConverter {
    rates: Arc<dyn RateSource>,
    base: CurrencyCode,
}

impl CurrencyConverter {
    pub fn new(rates: Arc<dyn RateSource>, base: CurrencyCode) -> Self {
        Self { rates, base }
    }

    pub fn base(&self) -> &CurrencyCode {
        &self.base
    }

    /// Invalid amounts are rejected before any request is made
    pub async fn convert(&self, amount: f64, to: &CurrencyCode) -> Result<Conversion> {
        calc::ensure_amount(amount)?;
        let rate = self.rates.rate(&self.base, to).await?;
        Ok(calc::convert_currency(amount, self.base.clone(), to.clone(), rate)?)
    }
}
