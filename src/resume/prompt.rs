/// Placeholder replaced with the caller's description.
pub const DESCRIPTION_PLACEHOLDER: &str = "{user_description}";

/// Resume prompt. Replace `{user_description}` before sending.
pub const RESUME_PROMPT_TEMPLATE: &str = r#"Create a professional resume based on the following information:
{user_description}
The resume should include the following sections:
- Personal Information
- Summary
- Work Experience
- Skills

DO NOT use Markdown symbols like #, * or **.
Write section headers like "SUMMARY" and "WORK EXPERIENCE" in ALL CAPS.
"#;

/// Renders the resume prompt for one description.
///
/// The description is inserted as-is. Only the placeholder in the template is
/// replaced, so a description that itself contains `{user_description}` is
/// left untouched.
pub fn render_resume_prompt(description: &str) -> String {
    match RESUME_PROMPT_TEMPLATE.split_once(DESCRIPTION_PLACEHOLDER) {
        Some((head, tail)) => {
            let mut prompt = String::with_capacity(head.len() + description.len() + tail.len());
            prompt.push_str(head);
            prompt.push_str(description);
            prompt.push_str(tail);
            prompt
        }
        None => RESUME_PROMPT_TEMPLATE.to_string(),
    }
}
