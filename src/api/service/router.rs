use axum::routing::get;

use super::State;
use super::endpoints::*;

pub fn router(state: State) -> axum::Router {
    axum::Router::new()
        .route("/", get(welcome))
        .route("/api/v1.0/precipitation", get(precipitation))
        .route("/api/v1.0/stations", get(stations))
        .route("/api/v1.0/tobs", get(tobs))
        .route("/api/v1.0/{start}", get(stats_from_start))
        .route("/api/v1.0/{start}/{end}", get(stats_between))
        .with_state(state)
}
