use std::io;

use serde::Serialize;

use super::domain::JobForecast;

#[derive(Serialize)]
struct MonthlyRow<'a> {
    job_title: &'a str,
    month: &'a str,
    demand: f64,
}

/// Writes every monthly point as `job_title,month,demand` rows, one block per job.
pub fn write_monthly_csv<W: io::Write>(
    writer: W,
    forecasts: &[JobForecast],
) -> Result<(), csv::Error> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    if forecasts.is_empty() {
        csv_writer.write_record(["job_title", "month", "demand"])?;
    }
    for forecast in forecasts {
        for point in &forecast.monthly_predictions {
            csv_writer.serialize(MonthlyRow {
                job_title: &forecast.job_title,
                month: &point.month,
                demand: point.demand,
            })?;
        }
    }
    csv_writer.flush()?;
    Ok(())
}
