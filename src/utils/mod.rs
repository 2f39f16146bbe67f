pub mod constants;
pub mod data;
pub mod format;
pub mod logger;
pub mod path;
pub mod time;

pub use time::{ format_relative_time, format_relative_time_from };
