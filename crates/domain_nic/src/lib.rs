//! National Identity Card codec
//!
//! Converts between the legacy 10-character NIC (`741922757V`) and the
//! modern 12-digit NIC (`197419202757`), and derives the holder's birth
//! year, day of year, gender, birth date and age from either form.
//!
//! # Strict and lenient paths
//!
//! - [`normalize`], [`decode_checked`] and [`Nic::parse`] return a
//!   [`NicError`] naming the check that failed. Use these to block a save.
//! - [`decode`], [`gender_of`], [`age_of`], [`birth_date_of`] and
//!   [`is_valid_nic`] never fail. Use these to auto-fill fields as the
//!   clerk types.
//!
//! Every derivation that depends on the current year takes `today`
//! explicitly.
//!
//! ```rust
//! use chrono::NaiveDate;
//! use domain_nic::{normalize, birth_date_of, Gender, gender_of};
//!
//! let today = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
//!
//! assert_eq!(normalize("001001234V").unwrap(), "200010001234");
//! assert_eq!(birth_date_of("001001234V", today), "09-04-2000");
//! assert_eq!(gender_of("916980123V", today), Some(Gender::Female));
//! ```

pub mod codec;
pub mod derive;
pub mod error;
pub mod format;
pub mod gender;

pub use codec::{decode, decode_checked, normalize, Nic, NicDetails, NicInfo};
pub use derive::{age_of, birth_date, birth_date_of, gender_of, is_valid_nic};
pub use error::{FormatViolation, NicError};
pub use format::format_nic;
pub use gender::Gender;
