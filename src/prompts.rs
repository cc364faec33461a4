pub const ENHANCE_SYSTEM: &str = include_str!("../data/prompts/enhance_system.txt");
pub const ENHANCE_USER: &str = include_str!("../data/prompts/enhance_user.txt");
pub const VIRAL_SYSTEM: &str = include_str!("../data/prompts/viral_system.txt");
pub const VIRAL_USER: &str = include_str!("../data/prompts/viral_user.txt");
pub const SPIRIT_SYSTEM: &str = include_str!("../data/prompts/spirit_system.txt");
pub const SPIRIT_USER: &str = include_str!("../data/prompts/spirit_user.txt");
pub const COVER_SYSTEM: &str = include_str!("../data/prompts/cover_system.txt");
pub const COVER_USER: &str = include_str!("../data/prompts/cover_user.txt");

/// Replace `{{key}}` placeholders in a template string.
pub fn render(template: &str, vars: &[(&str, &str)]) -> String {
    let mut result = template.to_string();
    for (key, value) in vars {
        result = result.replace(&format!("{{{{{}}}}}", key), value);
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_single_var() {
        assert_eq!(
            render("Hello {{name}}!", &[("name", "world")]),
            "Hello world!"
        );
    }

    #[test]
    fn test_render_multiple_vars() {
        assert_eq!(
            render("{{a}} and {{b}}", &[("a", "cats"), ("b", "dogs")]),
            "cats and dogs"
        );
    }

    #[test]
    fn test_prompts_are_non_empty() {
        assert!(!ENHANCE_SYSTEM.is_empty());
        assert!(!ENHANCE_USER.is_empty());
        assert!(!VIRAL_SYSTEM.is_empty());
        assert!(!VIRAL_USER.is_empty());
        assert!(!SPIRIT_SYSTEM.is_empty());
        assert!(!SPIRIT_USER.is_empty());
        assert!(!COVER_SYSTEM.is_empty());
        assert!(!COVER_USER.is_empty());
    }

    #[test]
    fn test_enhance_user_has_placeholders() {
        assert!(ENHANCE_USER.contains("{{prompt}}"));
        assert!(ENHANCE_USER.contains("{{mood}}"));
    }

    #[test]
    fn test_viral_user_has_placeholders() {
        assert!(VIRAL_USER.contains("{{title}}"));
        assert!(VIRAL_USER.contains("{{description}}"));
    }

    #[test]
    fn test_viral_system_describes_analysis_shape() {
        assert!(VIRAL_SYSTEM.contains("viralScore"));
        assert!(VIRAL_SYSTEM.contains("bestTimeToPost"));
        assert!(VIRAL_SYSTEM.contains("hashtagSuggestions"));
    }

    #[test]
    fn test_spirit_system_names_the_motifs() {
        assert!(SPIRIT_SYSTEM.contains("Jerusalem"));
        assert!(SPIRIT_SYSTEM.contains("Geulah"));
        assert!(SPIRIT_SYSTEM.contains("Rabbénou"));
        assert!(SPIRIT_SYSTEM.contains("Saba Israël"));
    }

    #[test]
    fn test_cover_user_has_placeholders() {
        assert!(COVER_USER.contains("{{title}}"));
        assert!(COVER_USER.contains("{{artist}}"));
        assert!(COVER_USER.contains("{{prompt}}"));
    }
}
