use crate::CalcCommand;
use crate::commands::{block_on, load_config};
use crate::presentation::calc::{CalcOutput, render};
use crate::types::OutputFormat;
use anyhow::{Context, Result};
use chrono::{Local, Utc};
use dagens_engine::calc::{self, Conversion};
use dagens_feeds::ExchangeRateClient;
use dagens_runtime::CurrencyConverter;
use dagens_types::CurrencyCode;
use serde_json::json;
use std::path::Path;
use std::sync::Arc;

pub fn handle(command: CalcCommand, config_path: &Path, format: OutputFormat) -> Result<()> {
    let output = match command {
        CalcCommand::Percent { value, percent } => {
            let result = calc::percent_of(value, percent)?;
            CalcOutput {
                value: json!({ "value": value, "percent": percent, "result": result }),
                lines: vec![format!("{}% of {} = {:.2}", percent, value, result)],
            }
        }
        CalcCommand::Hourly {
            monthly_salary,
            hours_per_week,
        } => {
            let hourly = calc::hourly_wage(monthly_salary, hours_per_week)?;
            CalcOutput {
                value: json!({
                    "monthly_salary": monthly_salary,
                    "hours_per_week": hours_per_week,
                    "hourly": hourly
                }),
                lines: vec![format!("Hourly wage: {:.2}", hourly)],
            }
        }
        CalcCommand::Age { birth_date, on } => {
            let today = on.unwrap_or_else(|| Local::now().date_naive());
            let age = calc::age(birth_date, today)?;
            CalcOutput {
                value: serde_json::to_value(age)?,
                lines: vec![format!(
                    "Age: {:.1} years ({} years, {} months)",
                    age.years_decimal, age.years, age.months
                )],
            }
        }
        CalcCommand::DateDiff { from, to } => {
            let diff = calc::date_diff(from, to);
            CalcOutput {
                value: serde_json::to_value(diff)?,
                lines: vec![format!(
                    "{} days ({} years, {} months)",
                    diff.days, diff.years, diff.months
                )],
            }
        }
        CalcCommand::Minutes { minutes } => {
            let duration = calc::minutes(minutes)?;
            CalcOutput {
                value: serde_json::to_value(duration)?,
                lines: vec![
                    format!("{:.2} hours", duration.hours),
                    format!("{:.2} days", duration.days),
                ],
            }
        }
        CalcCommand::Timezone { zone } => {
            let time = calc::time_in_zone(&zone, Utc::now())?;
            CalcOutput {
                value: serde_json::to_value(&time)?,
                lines: vec![format!(
                    "Time in {}: {} (UTC{})",
                    time.zone,
                    time.display_time(),
                    time.utc_offset()
                )],
            }
        }
        CalcCommand::Expr { expression } => {
            let result = calc::evaluate(&expression)?;
            CalcOutput {
                value: json!({ "expression": expression, "result": result }),
                lines: vec![format!("{} = {}", expression.trim(), result)],
            }
        }
        CalcCommand::Currency { amount, to, from } => {
            let config = load_config(config_path)?;
            let conversion = block_on(convert(&config, amount, from, to))??;
            CalcOutput {
                value: serde_json::to_value(&conversion)?,
                lines: vec![conversion.summary()],
            }
        }
    };

    println!("{}", render(&output, format)?);
    Ok(())
}

async fn convert(
    config: &dagens_runtime::Config,
    amount: f64,
    from: Option<CurrencyCode>,
    to: CurrencyCode,
) -> Result<Conversion> {
    let base = match from {
        Some(code) => code,
        None => config.base_currency()?,
    };
    let client = ExchangeRateClient::new(&config.http_settings())?
        .with_base_url(&config.currency.base_url);
    let converter = CurrencyConverter::new(Arc::new(client), base);

    converter
        .convert(amount, &to)
        .await
        .with_context(|| format!("could not convert {} to {}", converter.base(), to))
}
