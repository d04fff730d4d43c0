use axum::extract::{Json, Path, State};
use chrono::{Days, NaiveDate, Utc};
use sqlx::SqlitePool;

use super::ApiError;
use super::types::*;

pub type Result<T> = std::result::Result<T, ApiError>;

const ROUTES: &str = "\
Welcome to the Climate App API!

Available Routes:
/api/v1.0/precipitation
/api/v1.0/stations
/api/v1.0/tobs
/api/v1.0/<start> (Enter date in 'YYYY-MM-DD' format)
/api/v1.0/<start>/<end> (Enter dates in 'YYYY-MM-DD/YYYY-MM-DD' format)
";

fn one_year_ago() -> NaiveDate {
    Utc::now().date_naive() - Days::new(365)
}

fn iso(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

fn parse_date(value: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .map_err(|e| ApiError::bad_request(format!("'{value}' is not a YYYY-MM-DD date: {e}")))
}

pub async fn welcome() -> &'static str {
    ROUTES
}

async fn fetch_precipitation(
    pool: &SqlitePool,
    since: NaiveDate,
) -> Result<Vec<PrecipitationReading>> {
    let rows: Vec<(String, Option<f64>)> = sqlx::query_as(
        "
        SELECT date, prcp
        FROM measurement
        WHERE date >= ?;
    ",
    )
    .bind(iso(since))
    .fetch_all(pool)
    .await?;

    let readings = rows
        .into_iter()
        .map(|(date, prcp)| PrecipitationReading { date, prcp })
        .collect();

    Ok(readings)
}

pub async fn precipitation(
    State(pool): State<SqlitePool>,
) -> Result<Json<Vec<PrecipitationReading>>> {
    let readings = fetch_precipitation(&pool, one_year_ago()).await?;
    Ok(Json(readings))
}

pub async fn stations(State(pool): State<SqlitePool>) -> Result<Json<Vec<String>>> {
    let identifiers: Vec<String> = sqlx::query_scalar(
        "
        SELECT DISTINCT station
        FROM station;
    ",
    )
    .fetch_all(&pool)
    .await?;

    Ok(Json(identifiers))
}

/* The tie-break between stations with equal measurement counts is whatever
   row order the store happens to return. */
async fn most_active_station(pool: &SqlitePool) -> Result<Option<String>> {
    let station = sqlx::query_scalar(
        "
        SELECT station
        FROM measurement
        GROUP BY station
        ORDER BY COUNT(station) DESC
        LIMIT 1;
    ",
    )
    .fetch_optional(pool)
    .await?;

    Ok(station)
}

pub async fn tobs(State(pool): State<SqlitePool>) -> Result<Json<Vec<TemperatureReading>>> {
    let Some(station) = most_active_station(&pool).await? else {
        return Ok(Json(Vec::new()));
    };

    let rows: Vec<(String, f64)> = sqlx::query_as(
        "
        SELECT date, tobs
        FROM measurement
        WHERE date >= ? AND station = ?;
    ",
    )
    .bind(iso(one_year_ago()))
    .bind(&station)
    .fetch_all(&pool)
    .await?;

    let readings = rows
        .into_iter()
        .map(|(date, tobs)| TemperatureReading { date, tobs })
        .collect();

    Ok(Json(readings))
}

async fn fetch_temperature_stats(
    pool: &SqlitePool,
    start: NaiveDate,
    end: Option<NaiveDate>,
) -> Result<[Option<f64>; 3]> {
    let query = match end {
        Some(end) => sqlx::query_as(
            "
            SELECT MIN(tobs), AVG(tobs), MAX(tobs)
            FROM measurement
            WHERE date >= ? AND date <= ?;
        ",
        )
        .bind(iso(start))
        .bind(iso(end)),

        None => sqlx::query_as(
            "
            SELECT MIN(tobs), AVG(tobs), MAX(tobs)
            FROM measurement
            WHERE date >= ?;
        ",
        )
        .bind(iso(start)),
    };

    let (min, avg, max): (Option<f64>, Option<f64>, Option<f64>) = query
        .fetch_one(pool)
        .await
        .map_err(|e| ApiError::bad_request(format!("db returned error: {e}")))?;

    Ok([min, avg, max])
}

pub async fn stats_from_start(
    State(pool): State<SqlitePool>,
    Path(start): Path<String>,
) -> Result<Json<[Option<f64>; 3]>> {
    let start = parse_date(&start)?;
    let stats = fetch_temperature_stats(&pool, start, None).await?;
    Ok(Json(stats))
}

pub async fn stats_between(
    State(pool): State<SqlitePool>,
    Path((start, end)): Path<(String, String)>,
) -> Result<Json<[Option<f64>; 3]>> {
    let start = parse_date(&start)?;
    let end = parse_date(&end)?;
    let stats = fetch_temperature_stats(&pool, start, Some(end)).await?;
    Ok(Json(stats))
}
