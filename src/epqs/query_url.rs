use crate::domain::{Coordinate, Unit};
use crate::epqs::ElevationError;
use reqwest::Url;

pub const DEFAULT_EPQS_URL: &str = "https://nationalmap.gov/epqs/pqs.php";

pub fn query_url(base: &str, coordinate: Coordinate, unit: Unit) -> Result<Url, ElevationError> {
    let mut url = Url::parse(base).map_err(|e| ElevationError::InvalidUrl {
        url: base.to_string(),
        reason: e.to_string(),
    })?;

    url.query_pairs_mut()
        .append_pair("x", &coordinate.longitude.to_string())
        .append_pair("y", &coordinate.latitude.to_string())
        .append_pair("units", unit.as_str())
        .append_pair("output", "json");

    Ok(url)
}
