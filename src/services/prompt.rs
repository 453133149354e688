use crate::message::ChatRequest;

pub const SYSTEM_PROMPT: &str = "
You are SenseTheWorld+ — an empathetic travel and wellness assistant.
Be concise, supportive, and always suggest safe, accessible travel ideas.
";

const ABSENT: &str = "None";

/// Build the single prompt string sent to the model.
///
/// Straight interpolation: the message is inserted verbatim and nothing is
/// escaped or truncated.
pub fn compose_prompt(req: &ChatRequest) -> String {
    let profile = &req.profile;

    let mobility = profile.mobility_level.as_deref().unwrap_or(ABSENT);
    let conditions = render_list(profile.conditions.as_deref());
    let triggers = render_list(profile.triggers.as_deref());

    let user_context = format!(
        "
User message: {}

User profile:
- Mobility level: {}
- Conditions: {}
- Triggers: {}

Respond with supportive, concise travel guidance.
",
        req.message, mobility, conditions, triggers
    );

    format!("{}\n{}", SYSTEM_PROMPT, user_context)
}

/// `None` when absent, otherwise `['a', 'b']`.
fn render_list(items: Option<&[String]>) -> String {
    match items {
        None => ABSENT.to_string(),
        Some(items) => {
            let quoted: Vec<String> = items.iter().map(|s| quote(s)).collect();
            format!("[{}]", quoted.join(", "))
        }
    }
}

fn quote(s: &str) -> String {
    // Single quotes unless that would force escaping and double quotes would not.
    let q = if s.contains('\'') && !s.contains('"') { '"' } else { '\'' };

    let mut out = String::with_capacity(s.len() + 2);
    out.push(q);
    for c in s.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c == q => {
                out.push('\\');
                out.push(c);
            }
            // Remaining C0 controls, DEL and C1 controls.
            c if c < ' ' || ('\u{7f}'..='\u{9f}').contains(&c) => {
                out.push_str(&format!("\\x{:02x}", c as u32));
            }
            c => out.push(c),
        }
    }
    out.push(q);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quotes_like_a_list_literal() {
        assert_eq!(quote("crowds"), "'crowds'");
        assert_eq!(quote("it's loud"), "\"it's loud\"");
        assert_eq!(quote("both ' and \""), "'both \\' and \"'");
        assert_eq!(quote("a\\b"), "'a\\\\b'");
        assert_eq!(quote("line\nbreak"), "'line\\nbreak'");
    }

    #[test]
    fn control_characters_are_hex_escaped() {
        assert_eq!(quote("a\u{1}b"), "'a\\x01b'");
        assert_eq!(quote("x\u{7f}"), "'x\\x7f'");
        assert_eq!(quote("\u{1b}[0m"), "'\\x1b[0m'");
        assert_eq!(quote("\u{85}"), "'\\x85'");
        assert_eq!(quote("café"), "'café'");
    }

    #[test]
    fn renders_absent_and_empty_lists_differently() {
        assert_eq!(render_list(None), "None");
        assert_eq!(render_list(Some(&[][..])), "[]");
        let items = vec!["anxiety".to_string(), "vertigo".to_string()];
        assert_eq!(render_list(Some(items.as_slice())), "['anxiety', 'vertigo']");
    }
}
