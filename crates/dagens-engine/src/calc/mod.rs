//! Stateless dashboard calculators

mod dates;
mod expr;
mod money;
mod timezone;

pub use dates::{Age, DateDiff, Duration, age, date_diff, minutes};
pub use expr::evaluate;
pub use money::{Conversion, convert_currency, ensure_amount, hourly_wage, percent_of};
pub use timezone::{ZoneTime, time_in_zone};
