//! Parse one `#`-delimited PHA event block into an [`Event`].
//!
//! The main entry point is [`block_to_event`]. For whole files or text, see
//! [`read_pha`](crate::read_pha) and friends, which split the input into
//! blocks and drive this module.

use std::collections::HashMap;
use std::str::FromStr;

use chrono::Duration;

use crate::event::{local_id, Arrival, Event, Magnitude, Origin, OriginQuality, Pick};
use crate::reader::ReadOptions;
use crate::sid::{fill_template, resolve_template, WaveformId};
use crate::time::lenient_utc;
use crate::types::{MagnitudeField, DEG2KM};
use crate::{PhaError, Result};

/// Number of header fields after the block marker is split off.
const HEADER_FIELDS: usize = 14;

/// Latitudes above this magnitude leave the longitude error unset; the
/// cosine correction blows up near the poles.
const POLE_GUARD_DEG: f64 = 89.0;

/// Parse one event block.
///
/// `block` is the text between two `#` markers (header line plus pick
/// lines); `index` is the 1-based block number used in error messages.
/// `inverse_ids` maps file event ids back to the caller's original ids.
pub fn block_to_event(
    block: &str,
    index: usize,
    opts: &ReadOptions,
    inverse_ids: Option<&HashMap<String, String>>,
) -> Result<Event> {
    let mut lines = block.trim().lines();
    let header = lines.next().unwrap_or("");
    let fields: Vec<&str> = header.split_whitespace().collect();
    if fields.len() != HEADER_FIELDS {
        return Err(PhaError::HeaderFieldCount {
            block: index,
            expected: HEADER_FIELDS,
            actual: fields.len(),
        });
    }

    let year: i32 = parse_field(fields[0], "year", index)?;
    let month: i32 = parse_field(fields[1], "month", index)?;
    let day: i32 = parse_field(fields[2], "day", index)?;
    let hour: i32 = parse_field(fields[3], "hour", index)?;
    let minute: i32 = parse_field(fields[4], "minute", index)?;
    let seconds: f64 = parse_field(fields[5], "seconds", index)?;
    let latitude: f64 = parse_field(fields[6], "latitude", index)?;
    let longitude: f64 = parse_field(fields[7], "longitude", index)?;
    let depth_km: f64 = parse_field(fields[8], "depth", index)?;
    let magnitude = MagnitudeField::parse(fields[9]).ok_or_else(|| PhaError::InvalidField {
        block: index,
        field: "magnitude",
        value: fields[9].to_string(),
    })?;
    let horizontal_km: f64 = parse_field(fields[10], "horizontal error", index)?;
    let vertical_km: f64 = parse_field(fields[11], "vertical error", index)?;
    let rms: f64 = parse_field(fields[12], "rms", index)?;

    let mut evid = fields[13].to_string();
    if let Some(inverse) = inverse_ids {
        if let Some(original) = inverse.get(&evid) {
            evid = original.clone();
        }
    }

    let time = lenient_utc(year, month, day, hour, minute, seconds)?;

    // 0 is the "unknown" sentinel on every error field
    let latitude_errors = (horizontal_km != 0.0).then(|| horizontal_km / DEG2KM);
    let longitude_errors = match latitude_errors {
        Some(err) if latitude.abs() <= POLE_GUARD_DEG => {
            Some(err / latitude.to_radians().cos())
        }
        _ => None,
    };
    let depth_errors = (vertical_km != 0.0).then(|| vertical_km * 1000.0);
    let standard_error = (rms != 0.0).then_some(rms);

    let mut picks = Vec::new();
    let mut arrivals = Vec::new();
    for line in lines {
        let pick_fields: Vec<&str> = line.split_whitespace().collect();
        if pick_fields.len() != 4 {
            return Err(PhaError::PickFieldCount {
                block: index,
                line: line.trim().to_string(),
                actual: pick_fields.len(),
            });
        }
        let station = pick_fields[0];
        let reltime: f64 = parse_field(pick_fields[1], "relative time", index)?;
        let weight: f64 = parse_field(pick_fields[2], "weight", index)?;
        let phase = pick_fields[3];

        let component = opts.ph2comp.get(phase).map(String::as_str).unwrap_or("");
        let template = resolve_template(
            station,
            &opts.id_map,
            opts.inventory.as_ref(),
            &opts.id_default,
        );
        let waveform_id = WaveformId::parse(&fill_template(&template, station, component));

        let pick_time = time
            .checked_add_signed(Duration::microseconds((reltime * 1e6).round() as i64))
            .ok_or_else(|| PhaError::InvalidField {
                block: index,
                field: "relative time",
                value: pick_fields[1].to_string(),
            })?;
        let pick_id = local_id("pick", &format!("{evid}/{}", picks.len()));
        picks.push(Pick {
            resource_id: pick_id.clone(),
            waveform_id,
            phase_hint: phase.to_string(),
            time: pick_time,
        });
        arrivals.push(Arrival {
            phase: phase.to_string(),
            pick_id,
            time_weight: weight,
        });
    }

    let quality = OriginQuality {
        associated_phase_count: Some(picks.len()),
        standard_error,
    };
    let origin = Origin {
        resource_id: local_id("origin", &evid),
        time,
        latitude,
        longitude,
        latitude_errors,
        longitude_errors,
        depth: depth_km * 1000.0,
        depth_errors,
        quality,
        arrivals,
    };

    let (magnitudes, preferred_magnitude_id) = match magnitude {
        MagnitudeField::Value(mag) => {
            let magnitude = Magnitude {
                resource_id: local_id("magnitude", &evid),
                mag,
            };
            let id = magnitude.resource_id.clone();
            (vec![magnitude], Some(id))
        }
        MagnitudeField::Absent => (Vec::new(), None),
    };

    Ok(Event {
        resource_id: local_id("event", &evid),
        preferred_origin_id: Some(origin.resource_id.clone()),
        picks,
        origins: vec![origin],
        magnitudes,
        preferred_magnitude_id,
    })
}

fn parse_field<T: FromStr>(value: &str, field: &'static str, block: usize) -> Result<T> {
    value.parse().map_err(|_| PhaError::InvalidField {
        block,
        field,
        value: value.to_string(),
    })
}
