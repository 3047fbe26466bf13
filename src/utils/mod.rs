//! 工具模块

mod generation_log;

pub use generation_log::{GenerationJournal, GenerationRecord, GenerationStats};
