//! Core modules for eegscan

pub mod tokenizer;
pub mod scanner;
pub mod report;

pub use tokenizer::Tokenizer;
pub use scanner::{PacketScanner, CandidateSkip, scan_tokens, decode_candidate};
pub use report::{ReportBuilder, summarize, timeline, save_report, load_report};
