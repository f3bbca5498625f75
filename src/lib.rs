//! Pure Rust reader and writer for the HypoDD PHA phase-pick catalog format.
//!
//! PHA files carry one `#`-prefixed header line per event followed by one
//! pick line per observed phase arrival. Reading produces a [`Catalog`] of
//! [`Event`]s with origins, picks, arrivals and magnitudes; writing turns a
//! catalog back into PHA text, renumbering event ids into the numeric
//! ids of at most nine digits the format requires.
//!
//! # Reading a catalog
//!
//! ```
//! use hypodd_rs::{read_pha_str, ReadOptions};
//!
//! let text = "\
//! ##  2001   1  15   8   5   0.00  40.0  -120.0  5.0  2.5  1.0  0.5  0.1  12345
//! STA1  1.2345  1.0  P
//! ";
//!
//! let catalog = read_pha_str(text, &ReadOptions::default()).unwrap();
//! assert_eq!(catalog.len(), 1);
//!
//! let origin = &catalog.events[0].origins[0];
//! assert_eq!(origin.latitude, 40.0);
//! assert_eq!(origin.depth, 5000.0); // meters, positive down
//! assert_eq!(catalog.events[0].picks[0].phase_hint, "P");
//! ```
//!
//! # Writing it back
//!
//! ```
//! use hypodd_rs::{read_pha_str, write_pha_to, ReadOptions};
//!
//! let text = "\
//! ##  2001   1  15   8   5   0.00  40.0  -120.0  5.0  2.5  0.0  0.0  0.0  12345
//! STA1  1.2345  1.0  P
//! ";
//! let catalog = read_pha_str(text, &ReadOptions::default()).unwrap();
//!
//! let mut out = Vec::new();
//! let renames = write_pha_to(&catalog, &mut out, None).unwrap();
//! assert!(renames.is_none()); // "12345" is already a valid PHA id
//! ```
//!
//! # Station id templates
//!
//! Pick lines name bare stations; the catalog wants full SEED-style
//! `NET.STA.LOC.CHA` identifiers. A two-slot template is resolved per
//! station from, in order: an explicit per-station map, the first matching
//! inventory channel, the default template. The slots are filled with the
//! station code and the component code of the pick's phase.
//!
//! ```
//! use hypodd_rs::{Inventory, WaveformId};
//!
//! let inv = Inventory::new(vec![WaveformId::from_nslc("GR", "MOX", "", "HHZ")]);
//! assert_eq!(inv.template_for("MOX").as_deref(), Some("GR.{}..HH{}"));
//! ```
//!
//! # Format sniffing
//!
//! [`is_pha`] inspects only a file's first line and never raises; chain it
//! with sibling format detectors through [`sniff_format`].

pub mod decode;
pub mod detect;
pub mod encode;
pub mod error;
pub mod event;
pub mod evid;
pub mod reader;
pub mod sid;
pub mod time;
pub mod types;
pub mod writer;

pub use error::{PhaError, Result};
pub use event::{Arrival, Catalog, Event, Magnitude, Origin, OriginQuality, Pick};
pub use evid::EventIdMapper;
pub use sid::{fill_template, Inventory, WaveformId};
pub use time::lenient_utc;
pub use types::{MagnitudeField, TextEncoding, DEG2KM};

pub use detect::{is_pha, sniff_format, FormatProbe, PHA_PROBE};
pub use reader::{read_pha, read_pha_from, read_pha_str, ReadOptions};
pub use writer::{write_pha, write_pha_to};
