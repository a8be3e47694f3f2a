use crate::log::record::LogRecord;
use anyhow::{Context, bail};
use regex::Regex;
use std::fs;
use std::path::Path;

/// Harness logs prefix payloads with '#'; everything after the first '#' is
/// the payload, surrounding whitespace dropped.
const PAYLOAD_RE: &str = r"^[^#]*#\s*(.*?)\s*$";

/// Marker carried by the measurement dump line.
const MARKER: &str = "400";

/// Shorter marker payloads are shell echo noise, not the measurement dump.
const MIN_PAYLOAD_LEN: usize = 100;

/// Parse one host log file into a measurement record.
///
/// The record lives on the first payload line that carries the marker and
/// exceeds the length filter:
///
/// node_id, send, received_0..received_{k-1}, real_0..real_{k-1}
///
/// terminated by one trailing delimiter character.
pub fn parse_host_log(path: &Path) -> anyhow::Result<LogRecord> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("read log file {}", path.display()))?;

    let re = Regex::new(PAYLOAD_RE)?;
    let payload = text
        .lines()
        .filter_map(|line| re.captures(line))
        .map(|caps| caps.get(1).unwrap().as_str())
        .find(|p| p.contains(MARKER) && p.len() > MIN_PAYLOAD_LEN);

    let Some(payload) = payload else {
        bail!(
            "no measurement line (marker {MARKER:?}, more than {MIN_PAYLOAD_LEN} chars) in {}",
            path.display()
        );
    };

    parse_payload(payload)
        .with_context(|| format!("bad measurement line in {}", path.display()))
}

/// Decode a comma-separated measurement payload.
fn parse_payload(payload: &str) -> anyhow::Result<LogRecord> {
    // Drop the trailing delimiter.
    let mut chars = payload.chars();
    chars.next_back();
    let body = chars.as_str();

    let csv = body
        .split(',')
        .map(|tok| {
            let tok = tok.trim();
            tok.parse::<u64>()
                .with_context(|| format!("bad integer token {tok:?}"))
        })
        .collect::<anyhow::Result<Vec<u64>>>()?;

    if csv.len() < 2 {
        bail!("expected node id and send count, got {} fields", csv.len());
    }
    let node_id = u32::try_from(csv[0]).context("node id out of range")?;
    let send = csv[1];

    let seqs = &csv[2..];
    if seqs.len() % 2 != 0 {
        bail!(
            "odd sequence payload length {}: cannot split into received/real halves",
            seqs.len()
        );
    }
    let half = seqs.len() / 2;
    let received = seqs[..half].to_vec();
    let real = seqs[half..].to_vec();

    let rate = received
        .iter()
        .zip(&real)
        .map(|(&got, &sent)| (sent != 0).then(|| got as f64 / sent as f64))
        .collect();

    Ok(LogRecord {
        node_id,
        send,
        received,
        real,
        rate,
    })
}
