use crate::domain::Unit;
use std::fmt::Display;

/// Value the elevation service returns when it has no data for a coordinate.
pub const NOT_FOUND_SENTINEL: f64 = -1000.0;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Elevation {
    pub value: f64,
    pub unit: Unit,
}

impl Elevation {
    pub fn new(value: f64, unit: Unit) -> Self {
        Elevation { value, unit }
    }

    pub fn is_not_found(&self) -> bool {
        self.value == NOT_FOUND_SENTINEL
    }
}

// Only the number, this is what ends up on the clipboard
impl Display for Elevation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value)
    }
}
