//! PHA format sniffing and multi-format dispatch.
//!
//! [`is_pha`] answers "is this file plausibly a PHA phase file" from the
//! first line alone and never raises: a missing file, a short file or an
//! undecodable header are all just a negative answer. [`sniff_format`]
//! picks the first matching probe from an ordered chain, the way a
//! dispatcher chooses among sibling text formats that each expose only a
//! detect function.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::time::lenient_utc;

/// Check whether the file at `path` is plausibly a PHA phase file.
///
/// Only the first line is inspected: it must start with `#`, contain
/// exactly 15 whitespace-separated fields, and fields 2-7 must form a
/// leniently valid timestamp (out-of-range components such as minute 60
/// do not fail detection).
pub fn is_pha(path: impl AsRef<Path>) -> bool {
    let Ok(file) = File::open(path) else {
        return false;
    };
    let mut line = Vec::new();
    if BufReader::new(file).read_until(b'\n', &mut line).is_err() {
        return false;
    }
    // 8-bit-clean decode so detection never trips over encodings
    let line: String = line.into_iter().map(char::from).collect();
    sniff_header(&line).is_some()
}

/// Field-level header check, free of I/O. `None` means "not a PHA header".
fn sniff_header(line: &str) -> Option<()> {
    if !line.starts_with('#') {
        return None;
    }
    let fields: Vec<&str> = line.split_whitespace().collect();
    if fields.len() != 15 {
        return None;
    }
    let year: i32 = fields[1].parse().ok()?;
    let month: i32 = fields[2].parse().ok()?;
    let day: i32 = fields[3].parse().ok()?;
    let hour: i32 = fields[4].parse().ok()?;
    let minute: i32 = fields[5].parse().ok()?;
    let seconds: f64 = fields[6].parse().ok()?;
    lenient_utc(year, month, day, hour, minute, seconds)
        .ok()
        .map(|_| ())
}

/// A named format detector. `detect` answers "plausibly this format"
/// without raising.
#[derive(Debug, Clone, Copy)]
pub struct FormatProbe {
    pub name: &'static str,
    pub detect: fn(&Path) -> bool,
}

/// Try `probes` in order; the first whose detector accepts `path` wins.
pub fn sniff_format<'a>(path: &Path, probes: &'a [FormatProbe]) -> Option<&'a FormatProbe> {
    probes.iter().find(|probe| (probe.detect)(path))
}

/// The PHA probe, for use in a probe chain.
pub const PHA_PROBE: FormatProbe = FormatProbe {
    name: "PHA",
    detect: detect_pha,
};

fn detect_pha(path: &Path) -> bool {
    is_pha(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const VALID_LINE: &str =
        "#  2001   1  15   8   5   0.00  40.0  -120.0  5.0  2.5  1.0  0.5  0.1  12345\n";

    fn temp_file(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_valid_header_detected() {
        let file = temp_file(VALID_LINE);
        assert!(is_pha(file.path()));
    }

    #[test]
    fn test_only_first_line_matters() {
        let file = temp_file(&format!("{VALID_LINE}garbage that is not a pick line\n"));
        assert!(is_pha(file.path()));
    }

    #[test]
    fn test_missing_marker_rejected() {
        let file = temp_file(
            "  2001   1  15   8   5   0.00  40.0  -120.0  5.0  2.5  1.0  0.5  0.1  12345\n",
        );
        assert!(!is_pha(file.path()));
    }

    #[test]
    fn test_wrong_field_count_rejected() {
        let file = temp_file("#  2001   1  15   8   5   0.00  40.0  -120.0  5.0  2.5  1.0  0.5  0.1\n");
        assert!(!is_pha(file.path()));
    }

    #[test]
    fn test_non_numeric_time_rejected() {
        let file = temp_file(
            "#  2001   1  15   8   xx   0.00  40.0  -120.0  5.0  2.5  1.0  0.5  0.1  12345\n",
        );
        assert!(!is_pha(file.path()));
    }

    #[test]
    fn test_lenient_time_accepted() {
        // minute 60 normalizes instead of failing detection
        let file = temp_file(
            "#  2001   1  15   8  60   0.00  40.0  -120.0  5.0  2.5  1.0  0.5  0.1  12345\n",
        );
        assert!(is_pha(file.path()));
    }

    #[test]
    fn test_missing_file_is_false() {
        assert!(!is_pha("/no/such/file.pha"));
    }

    #[test]
    fn test_empty_file_is_false() {
        let file = temp_file("");
        assert!(!is_pha(file.path()));
    }

    #[test]
    fn test_sniff_format_first_match_wins() {
        fn always(_: &Path) -> bool {
            true
        }
        fn never(_: &Path) -> bool {
            false
        }
        let probes = [
            FormatProbe { name: "A", detect: never },
            FormatProbe { name: "B", detect: always },
            FormatProbe { name: "C", detect: always },
        ];
        let file = temp_file("");
        let hit = sniff_format(file.path(), &probes).unwrap();
        assert_eq!(hit.name, "B");
        assert!(sniff_format(file.path(), &probes[..1]).is_none());
    }
}
