//! 服务层模块

pub mod content;
mod subjects;
pub mod tutor;

pub use content::ContentFacade;
pub use subjects::Subject;
