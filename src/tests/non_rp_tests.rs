// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
use crate::config::DUMMY_NON_RP_MARKER;
use crate::error::DecodeError;
use crate::fixtures::{sample_checkpoint, CHECKPOINT_TAG};
use crate::non_rp::{
    classify, classify_with, dummy_marker, encode_checkpoint_payload, is_dummy, CheckpointCodec,
};
use crate::types::{CheckpointMsg, NonRpClassification};

#[test]
fn test_dummy_marker_layout() {
    let marker = dummy_marker(99, "testchain");

    let mut expected = DUMMY_NON_RP_MARKER.to_vec();
    expected.push(b'|');
    expected.extend_from_slice(&[0, 0, 0, 0, 0, 0, 0, 99]);
    expected.push(b'|');
    expected.extend_from_slice(b"testchain");

    assert_eq!(marker, expected);
    assert_eq!(marker.len(), DUMMY_NON_RP_MARKER.len() + 1 + 8 + 1 + 9);
}

#[test]
fn test_dummy_marker_is_deterministic() {
    assert_eq!(dummy_marker(12345, "heimdallv2-80002"), dummy_marker(12345, "heimdallv2-80002"));
    assert_ne!(dummy_marker(12345, "heimdallv2-80002"), dummy_marker(12346, "heimdallv2-80002"));
    assert_ne!(dummy_marker(12345, "heimdallv2-80002"), dummy_marker(12345, "heimdallv2-137"));
}

#[test]
fn test_previous_height_marker_is_dummy() {
    let payload = dummy_marker(99, "testchain");
    assert_eq!(
        classify(0, 100, "testchain", &payload).unwrap(),
        NonRpClassification::Dummy
    );
}

#[test]
fn test_dummy_holds_across_heights_and_chains() {
    let heights = [0, 2, 3, 1_000, 25_000_000, i64::MAX];
    let chains = ["", "testchain", "heimdallv2-80002", "heimdall-137"];
    for &h in &heights {
        for chain in chains {
            let payload = dummy_marker(h - 1, chain);
            assert!(is_dummy(h, chain, &payload), "height {} chain {:?}", h, chain);
            assert_eq!(
                classify(0, h, chain, &payload).unwrap(),
                NonRpClassification::Dummy
            );
        }
    }
}

#[test]
fn test_single_byte_change_is_never_dummy() {
    let marker = dummy_marker(99, "testchain");
    for i in 0..marker.len() {
        let mut payload = marker.clone();
        payload[i] ^= 0x01;
        let result = classify(0, 100, "testchain", &payload);
        assert!(
            !matches!(result, Ok(NonRpClassification::Dummy)),
            "flipped byte {} still classified as dummy",
            i
        );
    }

    // Truncated and extended markers as well.
    let truncated = &marker[..marker.len() - 1];
    assert!(!is_dummy(100, "testchain", truncated));
    let mut extended = marker.clone();
    extended.push(0);
    assert!(!is_dummy(100, "testchain", &extended));
}

#[test]
fn test_marker_for_same_height_is_not_dummy() {
    // The marker binds to the previous height.
    let payload = dummy_marker(100, "testchain");
    let err = classify(3, 100, "testchain", &payload).unwrap_err();
    assert!(matches!(err, DecodeError::UnrecognizedNonRpPayload { index: 3, .. }));
}

#[test]
fn test_marker_from_other_chain_is_unrecognized() {
    let payload = dummy_marker(99, "otherchain");
    let err = classify(0, 100, "testchain", &payload).unwrap_err();
    assert!(matches!(err, DecodeError::UnrecognizedNonRpPayload { .. }));
}

#[test]
fn test_empty_payload_is_unrecognized() {
    let err = classify(1, 100, "testchain", &[]).unwrap_err();
    assert!(matches!(err, DecodeError::UnrecognizedNonRpPayload { index: 1, .. }));

    let err = classify(1, 100, "testchain", &[CHECKPOINT_TAG]).unwrap_err();
    assert!(matches!(err, DecodeError::UnrecognizedNonRpPayload { index: 1, .. }));
}

#[test]
fn test_checkpoint_is_decoded_after_tag() {
    let msg = sample_checkpoint();
    let payload = encode_checkpoint_payload(CHECKPOINT_TAG, &msg);
    assert_eq!(payload[0], CHECKPOINT_TAG);

    match classify(0, 100, "testchain", &payload).unwrap() {
        NonRpClassification::Checkpoint(decoded) => assert_eq!(decoded, msg),
        other => panic!("expected checkpoint, got {:?}", other),
    }
}

#[test]
fn test_tag_byte_value_is_ignored() {
    let msg = sample_checkpoint();
    let payload = encode_checkpoint_payload(0x7f, &msg);
    let result = classify(0, 100, "testchain", &payload).unwrap();
    assert_eq!(result, NonRpClassification::Checkpoint(msg));
}

struct RejectingCodec;

impl CheckpointCodec for RejectingCodec {
    fn decode_checkpoint(&self, _body: &[u8]) -> Result<CheckpointMsg, String> {
        Err("codec offline".to_string())
    }
}

#[test]
fn test_custom_codec_failure_is_unrecognized() {
    let payload = encode_checkpoint_payload(CHECKPOINT_TAG, &sample_checkpoint());
    let err = classify_with(&RejectingCodec, 4, 100, "testchain", &payload).unwrap_err();
    assert_eq!(
        err,
        DecodeError::UnrecognizedNonRpPayload {
            index: 4,
            reason: "codec offline".to_string()
        }
    );

    // The placeholder never reaches the codec.
    let dummy = dummy_marker(99, "testchain");
    assert_eq!(
        classify_with(&RejectingCodec, 4, 100, "testchain", &dummy).unwrap(),
        NonRpClassification::Dummy
    );
}
