//! Rewrite instruction building: base directive plus tone modifier.

use clap::ValueEnum;

/// Register the rewrite should aim for. Neutral adds nothing to the base
/// instruction; the other tones append a distinct modifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Tone {
    #[default]
    Neutral,
    Humorous,
    Formal,
}

const BASE_INSTRUCTION: &str = "Rewrite the user's text so it sounds natural and human. \
Avoid repetitive or robotic sentence structure. Keep the original meaning intact \
and answer in the same language as the input.";

const HUMOROUS_MODIFIER: &str = " Use a playful, witty tone.";
const FORMAL_MODIFIER: &str = " Use a formal, professional tone.";

/// Build the system instruction sent to the provider for a given tone.
pub fn build_instruction(tone: Tone) -> String {
    let mut instruction = String::from(BASE_INSTRUCTION);
    match tone {
        Tone::Neutral => {}
        Tone::Humorous => instruction.push_str(HUMOROUS_MODIFIER),
        Tone::Formal => instruction.push_str(FORMAL_MODIFIER),
    }
    instruction
}
