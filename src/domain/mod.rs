mod action;
mod coordinate;
mod elevation;
mod unit;

pub use action::{ElevationAction, MENU_TITLE};
pub use coordinate::{Coordinate, MapPoint};
pub use elevation::Elevation;
pub use unit::{Unit, UnknownUnit};
