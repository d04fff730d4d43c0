pub const SCHEMA: &'static str = r#"

CREATE TABLE IF NOT EXISTS station (
    id INTEGER PRIMARY KEY,
    station TEXT NOT NULL UNIQUE,
    name TEXT NOT NULL,
    latitude REAL NOT NULL,
    longitude REAL NOT NULL,
    elevation REAL NOT NULL
);

CREATE TABLE IF NOT EXISTS measurement (
    id INTEGER PRIMARY KEY,
    station TEXT NOT NULL REFERENCES station (station),
    date TEXT NOT NULL,
    prcp REAL,
    tobs REAL NOT NULL
);

"#;
