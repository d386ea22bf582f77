// utils/mod.rs

pub mod ids;
pub mod time;

pub use ids::format_ids;
pub use time::format_datetime;
