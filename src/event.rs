//! In-memory event catalog model.
//!
//! A [`Catalog`] is an ordered list of [`Event`]s, each holding its picks,
//! origins and magnitudes. One event corresponds to one `#`-delimited block
//! of a PHA file. The model is passive data: readers build it, writers only
//! borrow it.

use std::fmt;

use chrono::{DateTime, Utc};

use crate::sid::WaveformId;

/// An ordered collection of events, in file block order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    pub events: Vec<Event>,
}

impl Catalog {
    pub fn new(events: Vec<Event>) -> Self {
        Self { events }
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Event> {
        self.events.iter()
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Event;
    type IntoIter = std::slice::Iter<'a, Event>;

    fn into_iter(self) -> Self::IntoIter {
        self.events.iter()
    }
}

/// A seismic event: one catalog entry.
#[derive(Debug, Clone, PartialEq)]
pub struct Event {
    /// Resource id, `smi:local/event/{id}` when read from a PHA file.
    pub resource_id: String,
    pub picks: Vec<Pick>,
    pub origins: Vec<Origin>,
    pub magnitudes: Vec<Magnitude>,
    pub preferred_origin_id: Option<String>,
    pub preferred_magnitude_id: Option<String>,
}

impl Event {
    /// The origin referenced by `preferred_origin_id`, if any.
    pub fn preferred_origin(&self) -> Option<&Origin> {
        let id = self.preferred_origin_id.as_deref()?;
        self.origins.iter().find(|o| o.resource_id == id)
    }

    /// The magnitude referenced by `preferred_magnitude_id`, if any.
    pub fn preferred_magnitude(&self) -> Option<&Magnitude> {
        let id = self.preferred_magnitude_id.as_deref()?;
        self.magnitudes.iter().find(|m| m.resource_id == id)
    }

    /// Short event id: the resource id with any path-like prefix removed.
    pub fn short_id(&self) -> &str {
        match self.resource_id.rsplit_once('/') {
            Some((_, tail)) => tail,
            None => &self.resource_id,
        }
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} | {} origin(s) | {} pick(s) | {} magnitude(s)",
            self.short_id(),
            self.origins.len(),
            self.picks.len(),
            self.magnitudes.len(),
        )
    }
}

/// A single location/time solution for an event.
#[derive(Debug, Clone, PartialEq)]
pub struct Origin {
    pub resource_id: String,
    pub time: DateTime<Utc>,
    /// Degrees, positive north.
    pub latitude: f64,
    /// Degrees, positive east.
    pub longitude: f64,
    /// Uncertainty in degrees; `None` when unknown.
    pub latitude_errors: Option<f64>,
    /// Uncertainty in degrees; `None` when unknown.
    pub longitude_errors: Option<f64>,
    /// Meters, positive down.
    pub depth: f64,
    /// Uncertainty in meters; `None` when unknown.
    pub depth_errors: Option<f64>,
    pub quality: OriginQuality,
    pub arrivals: Vec<Arrival>,
}

/// Travel-time fit summary for an origin.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OriginQuality {
    pub associated_phase_count: Option<usize>,
    /// RMS residual of the fit; `None` when unknown.
    pub standard_error: Option<f64>,
}

/// A phase arrival time observed at one station channel.
#[derive(Debug, Clone, PartialEq)]
pub struct Pick {
    pub resource_id: String,
    pub waveform_id: WaveformId,
    /// Phase label, conventionally `P` or `S`.
    pub phase_hint: String,
    pub time: DateTime<Utc>,
}

/// Association between a pick and an origin, carrying a fit weight.
#[derive(Debug, Clone, PartialEq)]
pub struct Arrival {
    pub phase: String,
    /// Resource id of the pick this arrival explains. Resolves to exactly
    /// one pick of the same event.
    pub pick_id: String,
    /// Fit weight, conventionally 0.0..=1.0.
    pub time_weight: f64,
}

/// A scalar event magnitude.
#[derive(Debug, Clone, PartialEq)]
pub struct Magnitude {
    pub resource_id: String,
    pub mag: f64,
}

/// Build a `smi:local/{kind}/{id}` resource id.
pub(crate) fn local_id(kind: &str, id: &str) -> String {
    format!("smi:local/{kind}/{id}")
}
