//! Serialize one [`Event`] into a PHA block.
//!
//! The main entry point is [`event_to_block`], which appends a header line
//! and one line per pick to an output buffer. For whole catalogs, see
//! [`write_pha`](crate::write_pha).

use std::collections::HashMap;

use chrono::{Datelike, Timelike};
use tracing::warn;

use crate::event::Event;
use crate::evid::EventIdMapper;
use crate::time::seconds_between;
use crate::types::DEG2KM;
use crate::Result;

/// Append one event's block to `out`.
///
/// The event id is canonicalized through `mapper`. Returns `false` without
/// writing anything when the event has no origin; a missing magnitude is
/// written as 0.0. Both conditions log a warning.
pub fn event_to_block(event: &Event, mapper: &mut EventIdMapper, out: &mut String) -> Result<bool> {
    let Some(origin) = event.preferred_origin().or_else(|| event.origins.first()) else {
        warn!(event = %event.short_id(), "skip writing event with missing origin");
        return Ok(false);
    };
    let mag = match event.preferred_magnitude().or_else(|| event.magnitudes.first()) {
        Some(magnitude) => magnitude.mag,
        None => {
            warn!(event = %event.short_id(), "missing magnitude will be set to 0.0");
            0.0
        }
    };
    let evid = mapper.assign(event.short_id())?;

    let rms = origin.quality.standard_error.unwrap_or(0.0);
    // Reconstruct the km horizontal error as the larger of the two scaled
    // components. Not an exact inverse of the read-side split.
    let shortening = origin.latitude.to_radians().cos();
    let he = f64::max(
        origin.latitude_errors.map_or(0.0, |e| e * DEG2KM),
        origin.longitude_errors.map_or(0.0, |e| e * DEG2KM * shortening),
    );
    let ve = origin.depth_errors.map_or(0.0, |e| e / 1000.0);

    let t = origin.time;
    out.push_str(&format!(
        "#  {year}    {month}   {day}    {hour}   {minute}   {second}.{micro:06}   {lat}   {lon}   {depth}   {mag}  {he}   {ve}   {rms}       {evid}\n",
        year = t.year(),
        month = t.month(),
        day = t.day(),
        hour = t.hour(),
        minute = t.minute(),
        second = t.second(),
        micro = t.timestamp_subsec_micros(),
        lat = origin.latitude,
        lon = origin.longitude,
        depth = origin.depth / 1000.0,
    ));

    let mut weights: HashMap<&str, f64> = HashMap::new();
    for arrival in &origin.arrivals {
        weights.insert(arrival.pick_id.as_str(), arrival.time_weight);
    }
    for pick in &event.picks {
        let weight = weights.get(pick.resource_id.as_str()).copied().unwrap_or(1.0);
        let reltime = seconds_between(origin.time, pick.time);
        out.push_str(&format!(
            "{station}  {reltime:.4}  {weight}  {phase}\n",
            station = pick.waveform_id.station(),
            phase = pick.phase_hint,
        ));
    }
    Ok(true)
}
