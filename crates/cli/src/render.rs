use std::collections::HashMap;

use comfy_table::presets::UTF8_FULL;
use comfy_table::{ContentArrangement, Table};
use heimdall_ve::types::{CheckpointMsg, NonRpClassification, VoteExtension};
use heimdall_ve::{HeightReport, InspectedVote, Tally};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderOptions {
    /// Skip the per-vote sections and print only the tally.
    pub summary_only: bool,
}

fn table(header: Vec<&str>) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(header);
    table
}

pub fn render_report(report: &HeightReport, opts: RenderOptions) -> String {
    let mut out = String::new();
    out.push_str(&render_commit_header(report));
    if !opts.summary_only {
        for (i, vote) in report.votes.iter().enumerate() {
            out.push_str(&render_vote(i + 1, vote));
        }
    }
    out.push_str(&render_summary(report));
    out
}

pub fn render_commit_header(report: &HeightReport) -> String {
    let mut t = table(vec!["Property", "Value"]);
    t.add_row(vec!["Height".to_string(), report.height.to_string()]);
    t.add_row(vec!["Chain ID".to_string(), report.chain_id.clone()]);
    t.add_row(vec!["Round".to_string(), report.round.to_string()]);
    t.add_row(vec!["Votes".to_string(), report.votes.len().to_string()]);
    t.add_row(vec![
        "Total Voting Power".to_string(),
        report.tally.total_power.to_string(),
    ]);

    format!("\nExtended Commit Info\n--------------------\n{t}\n")
}

pub fn render_vote(number: usize, vote: &InspectedVote) -> String {
    let record = &vote.record;
    let mut t = table(vec!["Field", "Value"]);
    t.add_row(vec!["Validator".to_string(), hex::encode(&record.validator_address)]);
    t.add_row(vec!["Power".to_string(), record.voting_power.to_string()]);
    t.add_row(vec![
        "BlockIdFlag".to_string(),
        record.block_id_flag.as_str_name().to_string(),
    ]);
    t.add_row(vec!["VoteExtension".to_string(), hex::encode(&record.vote_extension)]);
    t.add_row(vec![
        "ExtensionSignature".to_string(),
        hex::encode(&record.extension_signature),
    ]);
    t.add_row(vec![
        "NonRpVoteExtension".to_string(),
        hex::encode(&record.non_rp_vote_extension),
    ]);
    t.add_row(vec![
        "NonRpExtensionSignature".to_string(),
        hex::encode(&record.non_rp_extension_signature),
    ]);

    let mut out = format!("\nVote {}\n------\n{t}\n", number);
    out.push_str(&render_extension(&vote.extension));
    out.push_str(&render_non_rp(&vote.non_rp));
    out
}

pub fn render_extension(ext: &VoteExtension) -> String {
    if ext.is_empty() {
        return "VoteExtension: <empty>\n".to_string();
    }

    let mut t = table(vec!["Field", "Value"]);
    t.add_row(vec!["BlockHash".to_string(), hex::encode(&ext.block_hash)]);
    t.add_row(vec!["Height".to_string(), ext.height.to_string()]);
    for (i, resp) in ext.side_tx_responses.iter().enumerate() {
        t.add_row(vec![
            format!("SideTx[{}]", i),
            format!("{} {}", hex::encode(&resp.tx_hash), resp.result().label()),
        ]);
    }
    match &ext.milestone_proposition {
        Some(prop) => {
            for (i, hash) in prop.block_hashes.iter().enumerate() {
                t.add_row(vec![format!("Milestone.BlockHash[{}]", i), hex::encode(hash)]);
            }
            t.add_row(vec![
                "Milestone.StartBlock".to_string(),
                prop.start_block_number.to_string(),
            ]);
            t.add_row(vec!["Milestone.ParentHash".to_string(), hex::encode(&prop.parent_hash)]);
        }
        None => {
            t.add_row(vec!["Milestone".to_string(), "None".to_string()]);
        }
    }

    format!("VoteExtension (decoded):\n{t}\n")
}

pub fn render_non_rp(non_rp: &NonRpClassification) -> String {
    match non_rp {
        NonRpClassification::Dummy => {
            "NonRpVoteExtension [DUMMY #HEIMDALL-VOTE-EXTENSION#]\n".to_string()
        }
        NonRpClassification::Checkpoint(msg) => {
            format!("NonRpVoteExtension [CHECKPOINT MSG]:\n{}\n", render_checkpoint(msg))
        }
    }
}

fn render_checkpoint(msg: &CheckpointMsg) -> Table {
    let mut t = table(vec!["Field", "Value"]);
    t.add_row(vec!["Proposer".to_string(), msg.proposer.clone()]);
    t.add_row(vec!["StartBlock".to_string(), msg.start_block.to_string()]);
    t.add_row(vec!["EndBlock".to_string(), msg.end_block.to_string()]);
    t.add_row(vec!["RootHash".to_string(), hex::encode(&msg.root_hash)]);
    t.add_row(vec!["AccountRootHash".to_string(), hex::encode(&msg.account_root_hash)]);
    t.add_row(vec!["BorChainId".to_string(), msg.bor_chain_id.clone()]);
    t
}

pub fn render_summary(report: &HeightReport) -> String {
    let tally = &report.tally;
    let mut out = String::from("\nSummary\n-------\n");

    out.push_str("Milestone Block Hash Voting Power:\n");
    out.push_str(&milestone_table(tally).to_string());
    out.push_str("\n\nSide-Tx Voting Power by Result:\n");
    out.push_str(&side_tx_table(tally).to_string());
    out.push_str("\n\nNon-RP Vote-Extension Voting Power:\n");
    out.push_str(&non_rp_table(report).to_string());
    out.push('\n');
    out
}

fn milestone_table(tally: &Tally) -> Table {
    let mut t = table(vec!["Block Hash", "Voting Power"]);
    let rows = tally.milestone_sorted();
    if rows.is_empty() {
        t.add_row(vec!["None", ""]);
    }
    for (hash, power) in rows {
        t.add_row(vec![hash.to_string(), tally.share(power)]);
    }
    t
}

fn side_tx_table(tally: &Tally) -> Table {
    let mut t = table(vec!["Tx Hash", "YES", "NO", "UNSPECIFIED"]);
    let rows = tally.side_tx_sorted();
    if rows.is_empty() {
        t.add_row(vec!["None", "", "", ""]);
    }
    for (tx, [yes, no, unspecified]) in rows {
        t.add_row(vec![
            tx.to_string(),
            tally.share(yes),
            tally.share(no),
            tally.share(unspecified),
        ]);
    }
    t
}

fn non_rp_table(report: &HeightReport) -> Table {
    let tally = &report.tally;
    // Identical payloads always classify the same way, so any vote names the bucket.
    let kinds: HashMap<&[u8], &'static str> = report
        .votes
        .iter()
        .map(|v| (v.record.non_rp_vote_extension.as_slice(), v.non_rp.label()))
        .collect();

    let mut t = table(vec!["Non-RP Extension", "Kind", "Voting Power"]);
    let rows = tally.non_rp_sorted();
    if rows.is_empty() {
        t.add_row(vec!["None", "", ""]);
    }
    for (payload, power) in rows {
        t.add_row(vec![
            hex::encode(payload),
            kinds.get(payload).copied().unwrap_or("").to_string(),
            tally.share(power),
        ]);
    }
    t
}
