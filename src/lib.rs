//! eegscan: packet scanner for single-channel EEG headset dumps
//!
//! Text → tokenizer → scanner → records → report

pub mod core;
pub mod types;

// =============================================================================
// PACKET FRAMING
// =============================================================================

/// Sync byte; two in a row mark a candidate packet start
pub const SYNC_BYTE: u8 = 0xAA;

/// Lines yielding fewer tokens than this are dropped before any packet search
pub const MIN_TOKENS_PER_LINE: usize = 10;

/// Tokens that must follow the first sync byte: sync + length + payload + trailer
pub const PACKET_OVERHEAD: usize = 4;

// =============================================================================
// PAYLOAD CODES
// =============================================================================

/// Poor-signal / contact quality (0 = best)
pub const CODE_SIGNAL_QUALITY: u8 = 0x02;

/// Attention eSense value
pub const CODE_ATTENTION: u8 = 0x04;

/// Meditation eSense value
pub const CODE_MEDITATION: u8 = 0x05;

// =============================================================================
// SIGNAL QUALITY
// =============================================================================

/// Signal quality readings that indicate poor electrode contact
pub const POOR_SIGNAL_VALUES: [u8; 9] = [0x1D, 0x36, 0x37, 0x38, 0x50, 0x51, 0x52, 0x6B, 0xC8];

// =============================================================================
// REPORT DEFAULTS
// =============================================================================

/// Assumed record rate used for the synthetic timeline (Hz)
pub const DEFAULT_SAMPLE_RATE_HZ: f64 = 10.0;

/// Mean score strictly above this is a High level
pub const LEVEL_HIGH_THRESHOLD: f64 = 60.0;

/// Mean score strictly below this is a Low level
pub const LEVEL_LOW_THRESHOLD: f64 = 40.0;

// =============================================================================
// VERSION
// =============================================================================

pub const VERSION: &str = "0.1.0";
