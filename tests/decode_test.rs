//! Integration tests for SPLICE decoding.
//!
//! These tests assemble byte images by hand, decode them through the
//! public API, and verify every field round-trips faithfully: header
//! values, track order, ids, names, and step flags.

use splice::{decode, decode_file, SpliceError, STEPS_PER_TRACK};

/// Assemble a header with the given version text and tempo.
fn build_header(version: &str, tempo: f32) -> Vec<u8> {
    let mut data = Vec::new();

    data.extend_from_slice(b"SPLICE");

    let mut version_field = [0u8; 32];
    version_field[..version.len()].copy_from_slice(version.as_bytes());
    data.extend_from_slice(&version_field);

    data.extend_from_slice(&tempo.to_le_bytes());
    data
}

/// Append one well-formed track record.
fn push_track(data: &mut Vec<u8>, id: u8, name: &str, steps: [u8; STEPS_PER_TRACK]) {
    data.push(id);
    data.extend_from_slice(&[0, 0, 0]);
    data.push(name.len() as u8);
    data.extend_from_slice(name.as_bytes());
    data.extend_from_slice(&steps);
}

const FOUR_ON_THE_FLOOR: [u8; STEPS_PER_TRACK] = [1, 0, 0, 0, 1, 0, 0, 0, 1, 0, 0, 0, 1, 0, 0, 0];
const BACKBEAT: [u8; STEPS_PER_TRACK] = [0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0];

#[test]
fn test_header_only_pattern() {
    let data = build_header("0.708-alpha", 120.0);
    let pattern = decode(&data[..]).unwrap();

    assert_eq!(pattern.version(), "0.708-alpha");
    assert_eq!(pattern.tempo(), 120.0);
    assert!(pattern.tracks().is_empty());
}

#[test]
fn test_version_zero_padding_stripped() {
    let data = build_header("0.808-alpha", 98.4);
    let pattern = decode(&data[..]).unwrap();
    assert_eq!(pattern.version(), "0.808-alpha");
}

#[test]
fn test_version_filling_entire_field() {
    let version = "v".repeat(32);
    let data = build_header(&version, 120.0);
    let pattern = decode(&data[..]).unwrap();
    assert_eq!(pattern.version(), version);
}

#[test]
fn test_missing_signature_is_fatal() {
    let mut data = build_header("0.808-alpha", 120.0);
    data[..6].copy_from_slice(b"SAMPLE");

    let err = decode(&data[..]).unwrap_err();
    assert!(matches!(err, SpliceError::MissingSignature { actual } if &actual == b"SAMPLE"));
}

#[test]
fn test_empty_input_is_not_recognized() {
    let data: [u8; 0] = [];
    assert!(decode(&data[..]).is_err());
}

#[test]
fn test_tempo_values_decode_as_stored() {
    for tempo in [120.0f32, 98.4, 999.0, 0.0, -13.0] {
        let data = build_header("0.909", tempo);
        assert_eq!(decode(&data[..]).unwrap().tempo(), tempo);
    }

    let data = build_header("0.909", f32::NAN);
    assert!(decode(&data[..]).unwrap().tempo().is_nan());
}

#[test]
fn test_single_track_renders_four_on_the_floor() {
    let mut data = build_header("0.808-alpha", 120.0);
    push_track(&mut data, 0, "kick", FOUR_ON_THE_FLOOR);

    let pattern = decode(&data[..]).unwrap();
    assert_eq!(pattern.tracks().len(), 1);

    let kick = &pattern.tracks()[0];
    assert_eq!(kick.id(), 0);
    assert_eq!(kick.name(), "kick");
    assert_eq!(kick.render_steps(), "|x---|x---|x---|x---|");
}

#[test]
fn test_tracks_keep_file_order() {
    let mut data = build_header("0.808-alpha", 120.0);
    push_track(&mut data, 40, "kick", FOUR_ON_THE_FLOOR);
    push_track(&mut data, 1, "clap", BACKBEAT);
    push_track(&mut data, 3, "hh-open", [0, 0, 1, 0, 0, 0, 1, 0, 0, 0, 1, 0, 0, 0, 1, 0]);

    let pattern = decode(&data[..]).unwrap();
    let names: Vec<&str> = pattern.tracks().iter().map(|t| t.name()).collect();
    assert_eq!(names, vec!["kick", "clap", "hh-open"]);

    let ids: Vec<u8> = pattern.tracks().iter().map(|t| t.id()).collect();
    assert_eq!(ids, vec![40, 1, 3]);
}

#[test]
fn test_duplicate_ids_are_preserved() {
    let mut data = build_header("0.808-alpha", 120.0);
    push_track(&mut data, 5, "tom-low", [0; STEPS_PER_TRACK]);
    push_track(&mut data, 5, "tom-high", [0; STEPS_PER_TRACK]);

    let pattern = decode(&data[..]).unwrap();
    assert_eq!(pattern.tracks().len(), 2);
    assert_eq!(pattern.tracks()[0].id(), 5);
    assert_eq!(pattern.tracks()[1].id(), 5);
}

#[test]
fn test_corrupt_padding_keeps_earlier_tracks() {
    let mut data = build_header("0.808-alpha", 120.0);
    push_track(&mut data, 0, "kick", FOUR_ON_THE_FLOOR);
    push_track(&mut data, 1, "snare", BACKBEAT);

    // A record whose padding is wrong, followed by arbitrary garbage.
    data.push(2);
    data.extend_from_slice(&[1, 2, 3]);
    data.extend_from_slice(&[0xFF; 64]);

    let pattern = decode(&data[..]).unwrap();
    assert_eq!(pattern.tracks().len(), 2);
    assert_eq!(pattern.tracks()[0].name(), "kick");
    assert_eq!(pattern.tracks()[1].name(), "snare");
}

#[test]
fn test_corrupt_padding_on_first_record() {
    let mut data = build_header("0.808-alpha", 120.0);
    data.push(0);
    data.extend_from_slice(&[0, 1, 0]);
    data.extend_from_slice(&[0xFF; 32]);

    let pattern = decode(&data[..]).unwrap();
    assert!(pattern.tracks().is_empty());
}

#[test]
fn test_truncated_record_is_fatal() {
    let mut data = build_header("0.808-alpha", 120.0);
    push_track(&mut data, 0, "kick", FOUR_ON_THE_FLOOR);
    push_track(&mut data, 1, "snare", BACKBEAT);
    data.truncate(data.len() - 7);

    let err = decode(&data[..]).unwrap_err();
    assert!(matches!(err, SpliceError::Truncated { .. }));
}

#[test]
fn test_name_length_claiming_too_much_is_fatal() {
    let mut data = build_header("0.808-alpha", 120.0);
    data.push(0);
    data.extend_from_slice(&[0, 0, 0]);
    data.push(255);
    data.extend_from_slice(b"kick");

    let err = decode(&data[..]).unwrap_err();
    assert!(matches!(
        err,
        SpliceError::Truncated {
            context: "track name",
            needed: 255,
            ..
        }
    ));
}

#[test]
fn test_step_bytes_other_than_one_are_inactive() {
    let mut data = build_header("0.808-alpha", 120.0);
    push_track(
        &mut data,
        0,
        "kick",
        [1, 2, 0, 255, 1, 0, 0, 0, 128, 0, 0, 0, 1, 0, 0, 64],
    );

    let pattern = decode(&data[..]).unwrap();
    assert_eq!(pattern.tracks()[0].render_steps(), "|x---|x---|----|x---|");
}

#[test]
fn test_display_matches_expected_text() {
    let mut data = build_header("0.808-alpha", 98.4);
    push_track(&mut data, 0, "kick", FOUR_ON_THE_FLOOR);
    push_track(&mut data, 1, "snare", BACKBEAT);
    push_track(&mut data, 5, "cowbell", [0; STEPS_PER_TRACK]);

    let pattern = decode(&data[..]).unwrap();
    let expected = "Saved with HW Version: 0.808-alpha\n\
                    Tempo: 98.4\n\
                    (0) kick\t|x---|x---|x---|x---|\n\
                    (1) snare\t|----|x---|----|x---|\n\
                    (5) cowbell\t|----|----|----|----|\n";
    assert_eq!(pattern.to_string(), expected);
}

#[test]
fn test_whole_number_tempo_displays_without_fraction() {
    let data = build_header("0.909", 240.0);
    let pattern = decode(&data[..]).unwrap();
    assert_eq!(
        pattern.to_string(),
        "Saved with HW Version: 0.909\nTempo: 240\n"
    );
}

#[test]
fn test_decode_file_matches_in_memory_decode() {
    use std::io::Write;

    let mut data = build_header("0.808-alpha", 120.0);
    push_track(&mut data, 0, "kick", FOUR_ON_THE_FLOOR);
    push_track(&mut data, 1, "hh-close", [1; STEPS_PER_TRACK]);

    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(&data).unwrap();
    file.flush().unwrap();

    let from_file = decode_file(file.path()).unwrap();
    let from_memory = decode(&data[..]).unwrap();
    assert_eq!(from_file, from_memory);
}

#[test]
fn test_decode_file_missing_path_is_io_error() {
    let err = decode_file("no/such/pattern.splice").unwrap_err();
    assert!(matches!(err, SpliceError::Io(_)));
}
