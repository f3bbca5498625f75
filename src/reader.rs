//! Read PHA text into a [`Catalog`].
//!
//! [`read_pha`] reads a file, [`read_pha_from`] any byte source and
//! [`read_pha_str`] text already in memory. All three split the input on
//! the `#` block marker and parse each block with
//! [`block_to_event`](crate::decode::block_to_event); the first malformed
//! block aborts the whole read.

use std::collections::HashMap;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::decode::block_to_event;
use crate::event::Catalog;
use crate::sid::Inventory;
use crate::types::TextEncoding;
use crate::Result;

/// Options for reading a PHA file.
///
/// PHA pick lines only store station names; the id template used to build
/// each pick's waveform identifier is resolved per station by trying, in
/// order: a direct `id_map` entry, the first matching `inventory` channel,
/// and finally `id_default`.
#[derive(Debug, Clone)]
pub struct ReadOptions {
    /// Station inventory consulted for id templates when `id_map` misses.
    pub inventory: Option<Inventory>,
    /// Per-station id template overrides, e.g. `"MOX" -> "GR.{}..HH{}"`.
    pub id_map: HashMap<String, String>,
    /// Fallback id template.
    pub id_default: String,
    /// Phase label to component code, `P -> Z` and `S -> N` by default.
    pub ph2comp: HashMap<String, String>,
    /// Desired event id renames, `original id -> file id`. Inverted
    /// internally so ids found in the file map back to the original ids.
    pub eventid_map: Option<HashMap<String, String>>,
    /// Input text encoding.
    pub encoding: TextEncoding,
}

impl Default for ReadOptions {
    fn default() -> Self {
        let ph2comp = [("P", "Z"), ("S", "N")]
            .into_iter()
            .map(|(phase, comp)| (phase.to_string(), comp.to_string()))
            .collect();
        Self {
            inventory: None,
            id_map: HashMap::new(),
            id_default: ".{}..{}".to_string(),
            ph2comp,
            eventid_map: None,
            encoding: TextEncoding::default(),
        }
    }
}

impl ReadOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the station inventory.
    pub fn with_inventory(mut self, inventory: Inventory) -> Self {
        self.inventory = Some(inventory);
        self
    }

    /// Set the per-station id template overrides.
    pub fn with_id_map(mut self, id_map: HashMap<String, String>) -> Self {
        self.id_map = id_map;
        self
    }

    /// Set the fallback id template.
    pub fn with_id_default(mut self, template: &str) -> Self {
        self.id_default = template.to_string();
        self
    }

    /// Set the phase-to-component map.
    pub fn with_ph2comp(mut self, ph2comp: HashMap<String, String>) -> Self {
        self.ph2comp = ph2comp;
        self
    }

    /// Set the event id rename table (original id -> file id).
    pub fn with_eventid_map(mut self, eventid_map: HashMap<String, String>) -> Self {
        self.eventid_map = Some(eventid_map);
        self
    }

    /// Set the input text encoding.
    pub fn with_encoding(mut self, encoding: TextEncoding) -> Self {
        self.encoding = encoding;
        self
    }
}

/// Read the PHA file at `path`.
pub fn read_pha(path: impl AsRef<Path>, opts: &ReadOptions) -> Result<Catalog> {
    read_pha_from(File::open(path)?, opts)
}

/// Read PHA text from any byte source.
pub fn read_pha_from(mut reader: impl Read, opts: &ReadOptions) -> Result<Catalog> {
    let mut bytes = Vec::new();
    reader.read_to_end(&mut bytes)?;
    let text = opts.encoding.decode(bytes)?;
    read_pha_str(&text, opts)
}

/// Read PHA text already held in memory.
pub fn read_pha_str(text: &str, opts: &ReadOptions) -> Result<Catalog> {
    // invert once: ids found in the file map back to the original ids
    let inverse: Option<HashMap<String, String>> = opts.eventid_map.as_ref().map(|map| {
        map.iter()
            .map(|(original, file_id)| (file_id.clone(), original.clone()))
            .collect()
    });
    let events = text
        .split('#')
        .skip(1)
        .enumerate()
        .map(|(i, block)| block_to_event(block, i + 1, opts, inverse.as_ref()))
        .collect::<Result<Vec<_>>>()?;
    Ok(Catalog::new(events))
}
