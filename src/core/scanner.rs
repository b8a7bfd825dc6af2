//! Packet scanner: finds `AA AA` sync markers in each line's token stream
//! and decodes attention, meditation and signal quality from the window
//! that follows.
//!
//! The cursor advances one token at a time even after a successful decode,
//! so a sync pair inside a payload starts a second candidate. The scanned
//! window begins at the sync bytes rather than after the length byte, and
//! the trailing byte is never checked. Historical dumps decode the way they
//! always have because of this; do not "fix" it.

use tracing::{debug, trace};
use crate::core::Tokenizer;
use crate::types::{Record, ScanOutcome, ScanStats};
use crate::{CODE_ATTENTION, CODE_MEDITATION, CODE_SIGNAL_QUALITY, PACKET_OVERHEAD, SYNC_BYTE};

/// Tokens required after the first sync byte before a candidate is read
const CANDIDATE_LOOKAHEAD: usize = 4;

/// Why a sync candidate produced no record
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CandidateSkip {
    /// Fewer than four tokens after the sync start
    Truncated,
    /// Declared payload runs past the end of the line
    OutOfBounds,
    /// Window held no known payload code
    NoFields,
}

/// Stateless scanner over hex text dumps
#[derive(Debug, Default)]
pub struct PacketScanner {
    tokenizer: Tokenizer,
}

impl PacketScanner {
    /// Create new scanner
    pub fn new() -> Self {
        Self { tokenizer: Tokenizer::new() }
    }

    /// Scan a whole text blob, line by line
    pub fn scan(&self, text: &str) -> ScanOutcome {
        let mut records = Vec::new();
        let mut stats = ScanStats::default();

        for line in text.lines() {
            let (line_records, line_stats) = self.scan_line(line);
            records.extend(line_records);
            stats.absorb(&line_stats);
        }

        let outcome = ScanOutcome::new(records, stats);
        debug!(
            lines = stats.lines_total,
            short = stats.lines_short,
            candidates = stats.sync_candidates,
            rejected = stats.candidates_rejected,
            records = stats.records,
            reason = outcome.reason.code(),
            "scan complete"
        );
        outcome
    }

    /// Scan and return just the records
    pub fn records(&self, text: &str) -> Vec<Record> {
        self.scan(text).records
    }

    /// Scan a single line from a cold cursor
    pub fn scan_line(&self, line: &str) -> (Vec<Record>, ScanStats) {
        match self.tokenizer.tokenize_line(line) {
            Some(tokens) => {
                let (records, mut stats) = scan_tokens(&tokens);
                stats.lines_total = 1;
                (records, stats)
            }
            None => (
                Vec::new(),
                ScanStats { lines_total: 1, lines_short: 1, ..Default::default() },
            ),
        }
    }
}

/// Slide over one line's tokens, trying every sync offset
pub fn scan_tokens(tokens: &[u8]) -> (Vec<Record>, ScanStats) {
    let mut records = Vec::new();
    let mut stats = ScanStats { tokens_total: tokens.len(), ..Default::default() };

    for (i, pair) in tokens.windows(2).enumerate() {
        if pair != [SYNC_BYTE, SYNC_BYTE] {
            continue;
        }
        stats.sync_candidates += 1;

        match decode_candidate(tokens, i) {
            Ok(record) => records.push(record),
            Err(skip) => {
                stats.candidates_rejected += 1;
                trace!(offset = i, ?skip, "candidate rejected");
            }
        }
    }

    stats.records = records.len();
    (records, stats)
}

/// Decode the candidate whose sync marker starts at `start`.
///
/// Assumes the caller has already matched the sync pair.
pub fn decode_candidate(tokens: &[u8], start: usize) -> Result<Record, CandidateSkip> {
    let len = tokens.len();
    if start + CANDIDATE_LOOKAHEAD >= len {
        return Err(CandidateSkip::Truncated);
    }

    let payload_length = *tokens.get(start + 2).ok_or(CandidateSkip::Truncated)? as usize;
    if start + payload_length + PACKET_OVERHEAD > len {
        return Err(CandidateSkip::OutOfBounds);
    }

    let mut record = Record::default();
    // Window starts at the sync bytes; 0xAA matches no code.
    for j in start..start + payload_length {
        let (Some(&code), Some(&value)) = (tokens.get(j), tokens.get(j + 1)) else {
            continue;
        };
        match code {
            CODE_ATTENTION => record.attention = Some(value),
            CODE_MEDITATION => record.meditation = Some(value),
            CODE_SIGNAL_QUALITY => record.signal_quality = Some(value),
            _ => {}
        }
    }

    if record.is_empty() {
        Err(CandidateSkip::NoFields)
    } else {
        Ok(record)
    }
}

// =============================================================================
// TESTS
// =============================================================================
