// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
use base64::{engine::general_purpose::STANDARD as B64, Engine};
use prost::Message;

use crate::decode::{decode_commit_info, decode_vote_extension, decode_vote_extensions};
use crate::error::DecodeError;
use crate::fixtures::{commit_info_tx, milestone_extension, side_tx_extension, VoteFixture};
use crate::types::commit::{WireExtendedCommitInfo, WireExtendedVoteInfo};
use crate::types::{BlockIdFlag, SideTxVote, VoteExtension};

#[test]
fn test_empty_txs_is_not_an_error() {
    assert_eq!(decode_commit_info(&[]).unwrap(), None);
}

#[test]
fn test_invalid_base64() {
    let err = decode_commit_info(&["not base64!!".to_string()]).unwrap_err();
    assert!(matches!(err, DecodeError::InvalidBase64(_)));
}

#[test]
fn test_malformed_commit_info() {
    // Field 2 announces 5 bytes but only 1 follows.
    let tx = B64.encode([0x12u8, 0x05, 0x01]);
    let err = decode_commit_info(&[tx]).unwrap_err();
    assert!(matches!(err, DecodeError::MalformedCommitInfo(_)));
}

#[test]
fn test_vote_order_is_preserved() {
    let votes = vec![
        VoteFixture::new(3, 30),
        VoteFixture::new(1, 10),
        VoteFixture::new(2, 20),
    ];
    let info = decode_commit_info(&[commit_info_tx(2, &votes)]).unwrap().unwrap();

    assert_eq!(info.round, 2);
    let order: Vec<u8> = info.votes.iter().map(|v| v.validator_address[0]).collect();
    assert_eq!(order, vec![3, 1, 2]);
    let powers: Vec<i64> = info.votes.iter().map(|v| v.voting_power).collect();
    assert_eq!(powers, vec![30, 10, 20]);
}

#[test]
fn test_only_first_tx_is_decoded() {
    let votes = vec![VoteFixture::new(1, 10)];
    let txs = vec![commit_info_tx(0, &votes), "garbage".to_string()];
    let info = decode_commit_info(&txs).unwrap().unwrap();
    assert_eq!(info.votes.len(), 1);
}

#[test]
fn test_vote_fields_survive_decoding() {
    let ext = milestone_extension(7, vec![vec![0xab]]);
    let vote = VoteFixture::new(9, 42).extension(&ext).raw_non_rp(vec![1, 2, 3]);
    let info = decode_commit_info(&[commit_info_tx(0, &[vote])]).unwrap().unwrap();
    let record = &info.votes[0];

    assert_eq!(record.validator_address, vec![9; 20]);
    assert_eq!(record.block_id_flag, BlockIdFlag::Commit);
    assert_eq!(record.vote_extension, ext.encode_to_vec());
    assert_eq!(record.extension_signature, vec![0xee; 64]);
    assert_eq!(record.non_rp_vote_extension, vec![1, 2, 3]);
    assert_eq!(record.non_rp_extension_signature, vec![0xdd; 64]);
}

#[test]
fn test_vote_without_validator_has_zero_power() {
    let raw = WireExtendedCommitInfo {
        round: 0,
        votes: vec![WireExtendedVoteInfo {
            block_id_flag: BlockIdFlag::Absent as i32,
            ..Default::default()
        }],
    }
    .encode_to_vec();
    let info = decode_commit_info(&[B64.encode(raw)]).unwrap().unwrap();

    assert!(info.votes[0].validator_address.is_empty());
    assert_eq!(info.votes[0].voting_power, 0);
    assert_eq!(info.votes[0].block_id_flag, BlockIdFlag::Absent);
}

#[test]
fn test_unknown_block_id_flag_falls_back() {
    let raw = WireExtendedCommitInfo {
        round: 0,
        votes: vec![WireExtendedVoteInfo {
            block_id_flag: 42,
            ..Default::default()
        }],
    }
    .encode_to_vec();
    let info = decode_commit_info(&[B64.encode(raw)]).unwrap().unwrap();
    assert_eq!(info.votes[0].block_id_flag, BlockIdFlag::Unknown);
}

#[test]
fn test_empty_vote_extension_is_zero_value() {
    let ext = decode_vote_extension(0, &[]).unwrap();
    assert_eq!(ext, VoteExtension::default());
    assert!(ext.is_empty());
    assert!(ext.milestone_proposition.is_none());
}

#[test]
fn test_vote_extension_decodes() {
    let ext = side_tx_extension(
        55,
        vec![(vec![0x01; 32], SideTxVote::Yes), (vec![0x02; 32], SideTxVote::No)],
    );
    let decoded = decode_vote_extension(0, &ext.encode_to_vec()).unwrap();

    assert_eq!(decoded, ext);
    assert_eq!(decoded.height, 55);
    assert_eq!(decoded.side_tx_responses[1].result(), SideTxVote::No);
}

#[test]
fn test_malformed_vote_extension_fails_whole_commit() {
    let good = milestone_extension(7, vec![vec![0xab]]);
    let votes = vec![
        VoteFixture::new(1, 10).extension(&good),
        VoteFixture::new(2, 20).raw_extension(vec![0x0a, 0x05, 0x01]),
        VoteFixture::new(3, 30).extension(&good),
    ];
    let info = decode_commit_info(&[commit_info_tx(0, &votes)]).unwrap().unwrap();

    let err = decode_vote_extensions(&info).unwrap_err();
    assert!(matches!(err, DecodeError::MalformedVoteExtension { index: 1, .. }));
}

#[test]
fn test_extensions_align_with_votes() {
    let votes = vec![
        VoteFixture::new(1, 10),
        VoteFixture::new(2, 20).extension(&milestone_extension(7, vec![vec![0xcd]])),
    ];
    let info = decode_commit_info(&[commit_info_tx(0, &votes)]).unwrap().unwrap();
    let exts = decode_vote_extensions(&info).unwrap();

    assert_eq!(exts.len(), 2);
    assert!(exts[0].is_empty());
    assert_eq!(
        exts[1].milestone_proposition.as_ref().unwrap().block_hashes,
        vec![vec![0xcd]]
    );
}
