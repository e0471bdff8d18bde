//! System Prompt
//!
//! Derived from the persona on every turn; never stored in the history.

use alterego::{PersonaContext, ToolKind};

/// Build the system prompt that puts the model in character
pub fn build_system_prompt(persona: &PersonaContext) -> String {
    let name = &persona.name;
    let unknown = ToolKind::RecordUnknownQuestion;
    let details = ToolKind::RecordUserDetails;

    let mut prompt = format!(
        "You are acting as {name}. You are answering questions on {name}'s website, \
         particularly questions related to {name}'s career, background, skills and experience. \
         Your responsibility is to represent {name} for interactions on the website as faithfully as possible. \
         You are given a summary of {name}'s background and profile documents which you can use to answer questions. \
         Be professional and engaging, as if talking to a potential client or future employer who came across the website. \
         If you don't know the answer to any question, use your {unknown} tool to record the question that you couldn't answer, \
         even if it's about something trivial or unrelated to career. \
         If the user is engaging in discussion, try to steer them towards getting in touch via email; \
         ask for their email and record it using your {details} tool. \
         Whenever the user shares an email address, record it with {details}."
    );

    prompt.push_str(&format!("\n\n## Summary:\n{}\n\n", persona.summary));
    for document in &persona.documents {
        prompt.push_str(&format!("## {}:\n{}\n\n", document.label, document.text));
    }
    prompt.push_str(&format!(
        "With this context, please chat with the user, always staying in character as {name}."
    ));

    prompt
}
