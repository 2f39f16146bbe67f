//! Pixio: gallery, navigation and relative-time helpers for the Pixio pixel art editor.
//!
//! The centerpiece is [`format_relative_time`], which turns a timestamp into
//! captions such as "Now", "3 Days ago" or "In 2 Years".

pub mod components;
pub mod error;
pub mod libs;
pub mod state;
pub mod utils;

pub use error::{ Error, Result };
pub use utils::time::{ Direction, RelativeDescription, TimeUnit };
pub use utils::{ format_relative_time, format_relative_time_from };
