//! Date display utilities.

use std::fmt;

use jiff::civil::Date;

/// A due date with its weekday, e.g. `2024-05-03 (Fri)`.
pub struct DueDate<'a>(pub &'a Date);

impl fmt::Display for DueDate<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.strftime("%Y-%m-%d (%a)"))
    }
}
