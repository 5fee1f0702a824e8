use simbench_core::{ErrorInfo, NodeKind, RunParam, SweepError};

/// Fixed ascending frequency table, one prime per derived node index.
const FREQUENCIES: [u64; 25] = [
    2, 3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37, 41, 43, 47, 53, 59, 61, 67, 71, 73, 79, 83, 89, 97,
];

/// Number of node frequencies the encoder can derive before exhaustion.
pub fn frequency_capacity() -> usize {
    FREQUENCIES.len()
}

/// Encodes one run-time assignment into the argument tokens the simulation
/// binary expects.
///
/// Pure and deterministic: identical assignments always yield identical
/// token sequences. The only failure mode is a node count outrunning the
/// frequency table, which is reported rather than papered over with a
/// fabricated value.
pub fn encode(param: &RunParam) -> Result<Vec<String>, SweepError> {
    match param {
        RunParam::GridCells(cells) => {
            let side = grid_side(*cells).to_string();
            Ok(vec![
                "-x".to_string(),
                side.clone(),
                "-y".to_string(),
                side,
            ])
        }
        RunParam::Ticks(count) => Ok(vec!["--ticks".to_string(), count.to_string()]),
        RunParam::Nodes { kind, count } => encode_nodes(*kind, *count),
    }
}

fn encode_nodes(kind: NodeKind, count: u64) -> Result<Vec<String>, SweepError> {
    // Coordinate derivation is the identity on the index: node i sits at (i, i).
    let coords: Vec<String> = (0..count).map(|index| index.to_string()).collect();
    let mut tokens = Vec::new();
    match kind {
        NodeKind::Observation => {
            push_group(&mut tokens, "--xobs", &coords);
            push_group(&mut tokens, "--yobs", &coords);
        }
        NodeKind::Input => {
            let freqs = frequencies(count)?;
            push_group(&mut tokens, "--freqs", &freqs);
            push_group(&mut tokens, "--freqx", &coords);
            push_group(&mut tokens, "--freqy", &coords);
        }
        NodeKind::Start => {
            let freqs = frequencies(count)?;
            push_group(&mut tokens, "--startlevels", &freqs);
            push_group(&mut tokens, "--startx", &coords);
            push_group(&mut tokens, "--starty", &coords);
        }
    }
    Ok(tokens)
}

fn push_group(tokens: &mut Vec<String>, flag: &str, values: &[String]) {
    tokens.push(flag.to_string());
    tokens.extend(values.iter().cloned());
}

fn frequencies(count: u64) -> Result<Vec<String>, SweepError> {
    if count > FREQUENCIES.len() as u64 {
        return Err(SweepError::Frequency(
            ErrorInfo::new(
                "freq-table-exhausted",
                "node count exceeds the deterministic frequency table",
            )
            .with_context("requested", count.to_string())
            .with_context("available", FREQUENCIES.len().to_string())
            .with_hint("lower the node count or extend the prime table"),
        ));
    }
    Ok(FREQUENCIES[..count as usize]
        .iter()
        .map(|freq| freq.to_string())
        .collect())
}

/// Integer floor of the square root: the side length for a square grid
/// holding at most `cells` cells.
fn grid_side(cells: u64) -> u64 {
    if cells == 0 {
        return 0;
    }
    let mut side = (cells as f64).sqrt() as u64;
    while (side + 1).checked_mul(side + 1).is_some_and(|sq| sq <= cells) {
        side += 1;
    }
    while side.checked_mul(side).map_or(true, |sq| sq > cells) {
        side -= 1;
    }
    side
}
