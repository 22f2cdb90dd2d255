use chrono::{DateTime, Days, NaiveDate, TimeZone, Timelike};

use crate::models::openweather::OwForecastSample;

/// Most days a reduced forecast covers.
pub const MAX_FORECAST_DAYS: usize = 3;
/// Hour of day the representative sample should be closest to.
pub const TARGET_HOUR: u32 = 12;

/// The sample chosen to stand in for a whole calendar day.
#[derive(Clone, Debug)]
pub struct DailySample {
    pub date: NaiveDate,
    pub sample: OwForecastSample,
}

/// Reduce an ascending feed of 3-hour samples to one sample per future day.
///
/// Samples before tomorrow noon (in `now`'s time zone) are dropped. Each
/// remaining calendar date keeps the first sample seen at the smallest
/// hour-distance from noon; a later sample at an equal distance never
/// replaces it. Scanning stops at the first sample for a fourth date, and
/// days come back in the order they were first seen.
pub fn reduce_daily<Tz: TimeZone>(
    samples: impl IntoIterator<Item = OwForecastSample>,
    now: &DateTime<Tz>,
) -> Vec<DailySample> {
    let tz = now.timezone();
    let cutoff = tomorrow_noon(now);
    let mut days: Vec<(DailySample, u32)> = Vec::with_capacity(MAX_FORECAST_DAYS);

    for sample in samples {
        if sample.dt < cutoff {
            continue;
        }
        let Some(local) = DateTime::from_timestamp(sample.dt, 0).map(|dt| dt.with_timezone(&tz))
        else {
            continue;
        };
        let date = local.date_naive();
        let distance = local.hour().abs_diff(TARGET_HOUR);

        match days.iter().position(|(day, _)| day.date == date) {
            Some(idx) => {
                let (day, best) = &mut days[idx];
                if distance < *best {
                    *day = DailySample { date, sample };
                    *best = distance;
                }
            }
            None if days.len() == MAX_FORECAST_DAYS => break,
            None => days.push((DailySample { date, sample }, distance)),
        }
    }

    days.into_iter().map(|(day, _)| day).collect()
}

/// Unix timestamp of 12:00:00 tomorrow in `now`'s time zone.
fn tomorrow_noon<Tz: TimeZone>(now: &DateTime<Tz>) -> i64 {
    let tz = now.timezone();
    now.date_naive()
        .checked_add_days(Days::new(1))
        .and_then(|tomorrow| tomorrow.and_hms_opt(TARGET_HOUR, 0, 0))
        .and_then(|noon| tz.from_local_datetime(&noon).earliest())
        .map(|noon| noon.timestamp())
        .unwrap_or_else(|| now.timestamp() + 86_400)
}
