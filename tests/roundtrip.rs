//! File-based round-trip tests: read, write, detect, read again.

use std::collections::HashMap;

use hypodd_rs::{is_pha, read_pha, read_pha_str, write_pha, ReadOptions, DEG2KM};

const TEXT: &str = "\
#  2001   1  15   8   5   0.00  40.0  -120.0  5.0  2.5  1.0  0.5  0.1  12345
STA1  1.2345  1.0  P
STA2  2.5000  0.5  S
#  2002   6   1  12   0  30.50  41.0  -121.0  7.5  NaN  0.0  0.0  0.0  67890
STA1  0.8000  1.0  P
";

fn approx(a: f64, b: f64) {
    assert!((a - b).abs() < 1e-9, "{a} != {b}");
}

#[test]
fn read_write_read_preserves_catalog() {
    let opts = ReadOptions::default();
    let catalog = read_pha_str(TEXT, &opts).unwrap();

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("out.pha");
    let renames = write_pha(&catalog, &path, None).unwrap();
    assert!(renames.is_none(), "numeric ids must survive unchanged");

    // the written file is itself a valid PHA file
    assert!(is_pha(&path));

    let again = read_pha(&path, &opts).unwrap();
    assert_eq!(again.len(), catalog.len());
    // the first event keeps its magnitude; the second had none, and the
    // writer pads the field with 0.0
    assert_eq!(again.events[0].magnitudes[0].mag, 2.5);
    assert_eq!(again.events[1].magnitudes[0].mag, 0.0);

    for (before, after) in catalog.iter().zip(again.iter()) {
        assert_eq!(before.resource_id, after.resource_id);

        let (o1, o2) = (&before.origins[0], &after.origins[0]);
        assert_eq!(o1.time, o2.time);
        approx(o1.latitude, o2.latitude);
        approx(o1.longitude, o2.longitude);
        approx(o1.depth, o2.depth);
        assert_eq!(
            o1.quality.associated_phase_count,
            o2.quality.associated_phase_count
        );
        match (o1.quality.standard_error, o2.quality.standard_error) {
            (Some(a), Some(b)) => approx(a, b),
            (a, b) => assert_eq!(a, b),
        }
        // error fields go through a lossy km reconstruction; compare loosely
        match (o1.latitude_errors, o2.latitude_errors) {
            (Some(a), Some(b)) => approx(a, b),
            (a, b) => assert_eq!(a, b),
        }

        assert_eq!(before.picks.len(), after.picks.len());
        for (p1, p2) in before.picks.iter().zip(after.picks.iter()) {
            assert_eq!(p1.time, p2.time);
            assert_eq!(p1.phase_hint, p2.phase_hint);
            assert_eq!(p1.waveform_id.station(), p2.waveform_id.station());
        }
        for (a1, a2) in o1.arrivals.iter().zip(o2.arrivals.iter()) {
            approx(a1.time_weight, a2.time_weight);
        }
    }
}

#[test]
fn concrete_scenario_fields() {
    let catalog = read_pha_str(TEXT, &ReadOptions::default()).unwrap();
    let event = &catalog.events[0];
    let origin = &event.origins[0];

    assert_eq!(origin.latitude, 40.0);
    assert_eq!(origin.depth, 5000.0);
    assert_eq!(event.magnitudes.len(), 1);
    assert_eq!(event.magnitudes[0].mag, 2.5);

    let laterr = origin.latitude_errors.unwrap();
    approx(laterr, 1.0 / DEG2KM);
    approx(
        origin.longitude_errors.unwrap(),
        laterr / 40.0_f64.to_radians().cos(),
    );

    // writing reconstructs the km-based errors within tolerance
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("scenario.pha");
    write_pha(&catalog, &path, None).unwrap();
    let written = std::fs::read_to_string(&path).unwrap();
    let header: Vec<&str> = written.lines().next().unwrap().split_whitespace().collect();
    assert_eq!(header[14], "12345");
    approx(header[11].parse().unwrap(), 1.0);
    approx(header[12].parse().unwrap(), 0.5);
}

#[test]
fn rename_table_round_trips_original_ids() {
    // a non-numeric id is renumbered on write; feeding the returned table
    // back into the reader restores the original id
    let mut catalog = read_pha_str(TEXT, &ReadOptions::default()).unwrap();
    catalog.events[0].resource_id = "smi:local/event/quake-a".into();

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("renamed.pha");
    let renames = write_pha(&catalog, &path, None).unwrap().unwrap();
    assert_eq!(renames["quake-a"], "1000");

    let opts = ReadOptions::default().with_eventid_map(renames);
    let again = read_pha(&path, &opts).unwrap();
    assert_eq!(again.events[0].resource_id, "smi:local/event/quake-a");
    assert_eq!(again.events[1].resource_id, "smi:local/event/67890");
}

#[test]
fn forced_ids_applied_on_write() {
    let catalog = read_pha_str(TEXT, &ReadOptions::default()).unwrap();
    let mut forced = HashMap::new();
    forced.insert("12345".to_string(), "1".to_string());

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("forced.pha");
    let renames = write_pha(&catalog, &path, Some(forced)).unwrap().unwrap();
    assert_eq!(renames["12345"], "1");

    let written = std::fs::read_to_string(&path).unwrap();
    let mut headers = written.lines().filter(|l| l.starts_with('#'));
    assert!(headers.next().unwrap().ends_with("       1"));
    assert!(headers.next().unwrap().ends_with("       67890"));
}
