pub mod colors;
pub mod date;
pub mod formatting;

pub use formatting::{format_km, format_money, pad_right};
