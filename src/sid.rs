//! SEED-style waveform identifiers and station id templates.
//!
//! PHA pick lines carry only a bare station code, but the catalog model
//! wants a full `NET.STA.LOC.CHA` identifier. A two-slot template such as
//! `"GR.{}..HH{}"` is resolved per station and filled with the station code
//! and a component code derived from the phase label.
//!
//! # Examples
//!
//! ```
//! use hypodd_rs::WaveformId;
//!
//! let wid = WaveformId::from_nslc("GR", "MOX", "", "HHZ");
//! assert_eq!(wid.as_str(), "GR.MOX..HHZ");
//! assert_eq!(wid.station(), "MOX");
//! assert_eq!(wid.as_template(), "GR.{}..HH{}");
//! ```

use std::collections::HashMap;
use std::fmt;

/// SEED-style waveform identifier: `NET.STA.LOC.CHA`.
///
/// Missing components are empty strings, so `".STA1..Z"` is a valid
/// identifier with no network and no location code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WaveformId {
    raw: String,
}

impl WaveformId {
    /// Wrap a dot-separated identifier string.
    pub fn parse(s: &str) -> Self {
        Self { raw: s.to_string() }
    }

    /// Build an identifier from its four codes.
    pub fn from_nslc(network: &str, station: &str, location: &str, channel: &str) -> Self {
        Self {
            raw: format!("{network}.{station}.{location}.{channel}"),
        }
    }

    /// Return the raw identifier string.
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Extract the network code.
    pub fn network(&self) -> &str {
        self.component(0)
    }

    /// Extract the station code.
    pub fn station(&self) -> &str {
        self.component(1)
    }

    /// Extract the location code.
    pub fn location(&self) -> &str {
        self.component(2)
    }

    /// Extract the channel code.
    pub fn channel(&self) -> &str {
        self.component(3)
    }

    /// The two-slot id template of this channel: station code and trailing
    /// component character replaced by `{}`.
    pub fn as_template(&self) -> String {
        let channel = self.channel();
        let cut = channel.char_indices().last().map_or(0, |(i, _)| i);
        format!(
            "{}.{{}}.{}.{}{{}}",
            self.network(),
            self.location(),
            &channel[..cut],
        )
    }

    /// Get the Nth dot-separated component.
    fn component(&self, index: usize) -> &str {
        self.raw.split('.').nth(index).unwrap_or("")
    }
}

impl fmt::Display for WaveformId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.raw)
    }
}

/// Fill a two-slot id template with a station code and a component code.
pub fn fill_template(template: &str, station: &str, component: &str) -> String {
    template
        .replacen("{}", station, 1)
        .replacen("{}", component, 1)
}

/// Minimal station inventory: an ordered list of known channels.
///
/// Stands in for a full station-metadata inventory; only the lookup the
/// PHA reader needs is provided. The first channel matching a station
/// supplies that station's id template.
#[derive(Debug, Clone, Default)]
pub struct Inventory {
    channels: Vec<WaveformId>,
}

impl Inventory {
    pub fn new(channels: Vec<WaveformId>) -> Self {
        Self { channels }
    }

    /// Id template of the first channel recorded for `station`.
    pub fn template_for(&self, station: &str) -> Option<String> {
        self.channels
            .iter()
            .find(|c| c.station() == station)
            .map(WaveformId::as_template)
    }
}

/// Resolve the id template for a station: explicit map entry, then
/// inventory, then the caller's default. First non-empty result wins.
pub(crate) fn resolve_template(
    station: &str,
    id_map: &HashMap<String, String>,
    inventory: Option<&Inventory>,
    id_default: &str,
) -> String {
    id_map
        .get(station)
        .cloned()
        .filter(|t| !t.is_empty())
        .or_else(|| inventory.and_then(|inv| inv.template_for(station)))
        .unwrap_or_else(|| id_default.to_string())
}
