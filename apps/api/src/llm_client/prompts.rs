// Cross-cutting prompt fragments shared by every generation call.
// Branch-specific prompts live in coach/prompts.rs alongside their consumers.

/// System prompt applied to both coaching calls. Each branch carries its own
/// persona and output-format instructions in the user prompt.
pub const COACH_SYSTEM: &str = "You are an experienced Korean-speaking career coach \
    for software engineers. Follow the output format requested in the user message \
    exactly, with no commentary outside it. Respond in Korean.";
