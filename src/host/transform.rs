use crate::domain::{Coordinate, MapPoint};
use serde::Deserialize;
use std::f64::consts::PI;

const EARTH_RADIUS_M: f64 = 6_378_137.0;

pub trait CoordinateTransform {
    fn to_wgs84(&self, point: MapPoint) -> Coordinate;
}

/// Reference systems the map canvas can be in.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
pub enum MapCrs {
    #[default]
    #[serde(rename = "EPSG:4326")]
    Wgs84,
    #[serde(rename = "EPSG:3857")]
    WebMercator,
}

impl CoordinateTransform for MapCrs {
    fn to_wgs84(&self, point: MapPoint) -> Coordinate {
        match self {
            MapCrs::Wgs84 => Coordinate::new(point.x, point.y),
            MapCrs::WebMercator => {
                let longitude = point.x / EARTH_RADIUS_M * 180.0 / PI;
                let latitude = (point.y / EARTH_RADIUS_M).sinh().atan() * 180.0 / PI;
                Coordinate::new(longitude, latitude)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[test]
    fn wgs84_is_passed_through() {
        let coordinate = MapCrs::Wgs84.to_wgs84(MapPoint::new(-105.2705, 40.015));

        assert_eq!(coordinate, Coordinate::new(-105.2705, 40.015));
    }

    #[rstest]
    #[case::origin(0.0, 0.0, 0.0, 0.0)]
    #[case::antimeridian(20_037_508.342789244, 0.0, 180.0, 0.0)]
    #[case::boulder(-11_718_658.456, 4_868_122.278, -105.2705, 40.015)]
    #[case::sydney(16_833_176.800, -4_010_689.197, 151.2150, -33.8650)]
    fn web_mercator_is_inverted(#[case] x: f64, #[case] y: f64, #[case] longitude: f64, #[case] latitude: f64) {
        let coordinate = MapCrs::WebMercator.to_wgs84(MapPoint::new(x, y));

        assert!((coordinate.longitude - longitude).abs() < 1e-3, "longitude {} != {}", coordinate.longitude, longitude);
        assert!((coordinate.latitude - latitude).abs() < 1e-3, "latitude {} != {}", coordinate.latitude, latitude);
    }

    #[rstest]
    #[case(r#""EPSG:4326""#, MapCrs::Wgs84)]
    #[case(r#""EPSG:3857""#, MapCrs::WebMercator)]
    fn deserializes_epsg_codes(#[case] json: &str, #[case] expected: MapCrs) -> Result<(), serde_json::Error> {
        assert_eq!(serde_json::from_str::<MapCrs>(json)?, expected);
        Ok(())
    }
}
