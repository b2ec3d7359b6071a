use crate::domain::{Coordinate, Unit};

pub const MENU_TITLE: &str = "Copy Elevation to Clipboard";

/// A user-selected unit bound to a previously transformed coordinate, waiting to be dispatched.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ElevationAction {
    pub coordinate: Coordinate,
    pub unit: Unit,
}

impl ElevationAction {
    pub fn new(coordinate: Coordinate, unit: Unit) -> Self {
        ElevationAction { coordinate, unit }
    }

    pub fn label(&self) -> &'static str {
        self.unit.label()
    }
}
