use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize)]
pub struct PrecipitationReading {
    pub date: String,
    pub prcp: Option<f64>,
}

#[derive(Serialize, Deserialize)]
pub struct TemperatureReading {
    pub date: String,
    pub tobs: f64,
}

#[derive(Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}
