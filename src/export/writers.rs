use crate::errors::AppResult;
use crate::models::Trip;
use csv::Writer;
use std::fs;
use std::path::Path;

pub(crate) fn write_csv(path: &Path, trips: &[Trip]) -> AppResult<()> {
    let mut wtr = Writer::from_path(path)?;

    wtr.write_record([
        "id",
        "date",
        "start_time",
        "end_time",
        "start_odometer",
        "end_odometer",
        "distance_km",
        "fuel_price",
        "consumption",
        "fuel_consumed",
        "total_cost",
        "note",
    ])?;

    for t in trips {
        wtr.write_record(&[
            t.id.clone(),
            t.date_str(),
            t.start_time.format("%H:%M").to_string(),
            t.end_time.format("%H:%M").to_string(),
            t.start_odometer.to_string(),
            t.end_odometer.to_string(),
            t.distance_km.to_string(),
            format!("{:.3}", t.fuel_price_at_time),
            format!("{:.2}", t.consumption_at_time),
            format!("{:.2}", t.fuel_consumed),
            format!("{:.2}", t.total_cost),
            t.note.clone().unwrap_or_default(),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}

/// Same document layout as the stored `trips` key, pretty-printed.
pub(crate) fn write_json(path: &Path, trips: &[Trip]) -> AppResult<()> {
    let json = serde_json::to_string_pretty(trips)?;
    fs::write(path, json)?;
    Ok(())
}
