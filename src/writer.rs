//! Write a [`Catalog`] as PHA text.
//!
//! [`write_pha`] writes to a file path, [`write_pha_to`] to any
//! [`io::Write`](std::io::Write). Events are emitted in catalog order;
//! event ids are renumbered into the numeric ids the format requires and
//! the final rename table is handed back to the caller. The whole output
//! is assembled first and written with a single call.

use std::collections::HashMap;
use std::fs;
use std::io::Write;
use std::path::Path;

use crate::encode::event_to_block;
use crate::event::Catalog;
use crate::evid::EventIdMapper;
use crate::Result;

/// Write `catalog` to the file at `path`.
///
/// `eventid_map` pre-seeds forced `original id -> numeric id` mappings for
/// this session. Returns the final mapping table, or `None` when no id
/// needed renumbering and no forced mapping was supplied.
pub fn write_pha(
    catalog: &Catalog,
    path: impl AsRef<Path>,
    eventid_map: Option<HashMap<String, String>>,
) -> Result<Option<HashMap<String, String>>> {
    let (data, renames) = render(catalog, eventid_map)?;
    fs::write(path, data)?;
    Ok(renames)
}

/// Write `catalog` to any writer in one call.
pub fn write_pha_to(
    catalog: &Catalog,
    mut writer: impl Write,
    eventid_map: Option<HashMap<String, String>>,
) -> Result<Option<HashMap<String, String>>> {
    let (data, renames) = render(catalog, eventid_map)?;
    writer.write_all(data.as_bytes())?;
    Ok(renames)
}

fn render(
    catalog: &Catalog,
    eventid_map: Option<HashMap<String, String>>,
) -> Result<(String, Option<HashMap<String, String>>)> {
    let mut mapper = match eventid_map {
        Some(map) => EventIdMapper::with_forced(map),
        None => EventIdMapper::new(),
    };
    let mut out = String::new();
    for event in catalog {
        event_to_block(event, &mut mapper, &mut out)?;
    }
    Ok((out, mapper.into_map()))
}
