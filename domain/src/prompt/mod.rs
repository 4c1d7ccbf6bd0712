//! Prompt domain
//!
//! The AI guide's persona and the canned replies it falls back to.

mod fallback;
mod template;

pub use fallback::FallbackReply;
pub use template::{ADVICE_TEMPERATURE, GuidePrompt};
