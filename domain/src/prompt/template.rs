//! Prompt templates for the AI guide

/// Sampling temperature used for every advice request
pub const ADVICE_TEMPERATURE: f32 = 0.7;

/// Fixed persona and generation settings of the AI guide
pub struct GuidePrompt;

impl GuidePrompt {
    /// System instruction sent with every advice request
    pub fn system_instruction() -> &'static str {
        r#"You are an expert local guide for Prague (Praha), Czech Republic.
Your goal is to help tourists understand local laws, culture, and logistics.

Key Knowledge:
- Regulations on alcohol consumption in public.
- Fines for littering, noise (night quiet 22:00-06:00), and animal feeding.
- Public transport etiquette and ticket validation.
- Currency (CZK) and avoiding exchange scams.

Tone: Welcoming, informative, concise, and safety-oriented.
If asked about illegal activities, strictly warn against them citing local laws."#
    }

    pub fn temperature() -> f32 {
        ADVICE_TEMPERATURE
    }
}
