pub mod assistant;
pub mod fallback;
pub mod format;
pub mod interpreter;
pub mod options;
pub mod pacing;
pub mod suggest;
pub mod terminal;

pub use crate::domain::model::{ExperienceEntry, Portfolio, ProjectEntry, SkillCategory};
pub use crate::domain::ports::{ResumeHost, TextGenerator};
pub use crate::utils::error::Result;
