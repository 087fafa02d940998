pub const GENERATE_POST: &str = include_str!("../data/prompts/generate_post.txt");

/// Prefix the user's description with the post-generation directive.
pub fn build_prompt(description: &str) -> String {
    format!("{} {}", GENERATE_POST.trim_end(), description)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_directive_is_non_empty() {
        assert!(!GENERATE_POST.trim().is_empty());
    }

    #[test]
    fn test_build_prompt_appends_description() {
        assert_eq!(
            build_prompt("a day at the beach"),
            "Generate a short social post based on this description: a day at the beach"
        );
    }

    #[test]
    fn test_build_prompt_keeps_description_verbatim() {
        let prompt = build_prompt("line one\nline two 🌊");
        assert!(prompt.ends_with("description: line one\nline two 🌊"));
    }
}
