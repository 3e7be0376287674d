//! Prompt construction and tagline response parsing

/// Number of taglines requested per generation call
pub const TAGLINE_COUNT: usize = 5;

/// Build the fixed instruction template around the user's description.
///
/// The template asks for one tagline per line so the response can be split
/// without any further structure.
pub fn build_prompt(description: &str) -> String {
    format!(
        "Generate {TAGLINE_COUNT} creative, memorable, and impactful taglines for this \
         brand/product description: {description}. The taglines should be catchy, unique, \
         and emotionally resonant. Each tagline should be concise (2-8 words) and capture \
         the essence of the brand/product. Return only the taglines, one per line, without \
         any additional text or explanations."
    )
}

/// Split response text into taglines: one per line, whitespace-only lines
/// discarded, original order preserved. No dedup, no ranking.
pub fn parse_taglines(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(ToOwned::to_owned)
        .collect()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    #[test]
    fn test_prompt_embeds_description() {
        let prompt = build_prompt("an independent bookshop");

        assert!(prompt.contains("an independent bookshop"));
        assert!(prompt.contains("one per line"));
        assert!(prompt.contains("5 creative"));
    }

    #[test]
    fn test_parse_removes_blank_lines_and_keeps_order() {
        let taglines = parse_taglines("Line1\n\nLine2\nLine3");

        assert_eq!(taglines, vec!["Line1", "Line2", "Line3"]);
    }

    #[rstest]
    #[case("", Vec::<String>::new())]
    #[case("   \n\t\n", Vec::<String>::new())]
    #[case("only one line", vec!["only one line".to_string()])]
    #[case("  padded  \nsecond", vec!["padded".to_string(), "second".to_string()])]
    #[case("a\r\nb\r\n", vec!["a".to_string(), "b".to_string()])]
    fn test_parse_cases(#[case] input: &str, #[case] expected: Vec<String>) {
        assert_eq!(parse_taglines(input), expected);
    }

    #[test]
    fn test_parse_keeps_duplicates() {
        let taglines = parse_taglines("Same\nSame");

        assert_eq!(taglines, vec!["Same", "Same"]);
    }
}
