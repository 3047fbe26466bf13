//! 内容生成模块
//!
//! 远程模型可用时调用远程模型，否则或失败时返回本地 mock 内容

mod facade;
mod mock;
mod parse;
mod prompts;
mod question_bank;
mod types;

pub use facade::ContentFacade;
pub use types::*;
