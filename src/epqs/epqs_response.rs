use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct EpqsResponse {
    #[serde(rename = "USGS_Elevation_Point_Query_Service")]
    pub service: PointQueryService,
}

#[derive(Debug, Deserialize)]
pub struct PointQueryService {
    #[serde(rename = "Elevation_Query")]
    pub elevation_query: ElevationQuery,
}

#[derive(Debug, Deserialize)]
pub struct ElevationQuery {
    #[serde(rename = "Elevation")]
    pub elevation: f64,
    #[serde(rename = "Units", default)]
    pub units: Option<String>,
    #[serde(rename = "Data_Source", default)]
    pub data_source: Option<String>,
}
