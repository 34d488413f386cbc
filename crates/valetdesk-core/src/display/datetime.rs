//! DateTime display utilities.

use std::fmt;

use jiff::civil::DateTime;

/// Service wall-clock time formatted as `YYYY-MM-DD HH:MM`.
///
/// No zone conversion happens here. Naive service timestamps are shown as
/// sent; ones that carried an offset were already normalised to UTC when
/// decoded.
///
/// # Examples
///
/// ```rust
/// use valetdesk_core::display::ServiceDateTime;
///
/// let entry = jiff::civil::date(2026, 1, 31).at(9, 15, 30, 0);
/// assert_eq!(ServiceDateTime(&entry).to_string(), "2026-01-31 09:15");
/// ```
pub struct ServiceDateTime<'a>(pub &'a DateTime);

impl fmt::Display for ServiceDateTime<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.strftime("%Y-%m-%d %H:%M"))
    }
}
