pub mod currency;
pub mod domain;
pub mod error;
pub mod feed;
pub mod weather;

pub use currency::*;
pub use domain::*;
pub use error::{Error, Result};
pub use feed::*;
pub use weather::*;
