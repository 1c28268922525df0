//! Formatting utilities module.
//!
//! # Examples
//!
//! ```rust
//! use chrono::{TimeZone, Utc};
//! use tempokit::utils::{format_date, shortcuts};
//!
//! let dt = Utc.with_ymd_and_hms(2024, 3, 9, 14, 5, 0).unwrap();
//! assert_eq!(shortcuts::iso_date(&dt), "2024-03-09");
//! assert_eq!(format_date(&dt, "DD MMM YYYY"), "09 Mar 2024");
//! ```

pub use tempokit_utils::utils_core::*;
