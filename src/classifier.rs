use crate::types::Category;

/// Ordered rule groups, first match wins. The ordering is deliberate:
/// unrest keywords take priority over positive ones, so a protest that
/// "sparks positive change" still lands in the unrest bucket.
const RULES: &[(&[&str], Category)] = &[
    (
        &["terrorism", "protest", "political unrest", "riot"],
        Category::Unrest,
    ),
    (
        &["positive", "uplifting", "inspiring"],
        Category::Uplifting,
    ),
    (
        &["natural disaster", "earthquake", "flood", "hurricane"],
        Category::NaturalDisaster,
    ),
];

/// Classify an article by keywords in its title or description.
///
/// Pure and total: lowercases both inputs, checks each rule group in order
/// for a substring match in either field, and falls back to
/// [`Category::Others`] when nothing matches. Matching is substring-based,
/// not tokenized, so "protesting" matches "protest".
pub fn classify(title: &str, description: &str) -> Category {
    let title = title.to_lowercase();
    let description = description.to_lowercase();

    for (keywords, category) in RULES {
        if keywords
            .iter()
            .any(|keyword| title.contains(keyword) || description.contains(keyword))
        {
            return *category;
        }
    }

    Category::Others
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matches_each_rule_group() {
        assert_eq!(classify("riot breaks out downtown", ""), Category::Unrest);
        assert_eq!(
            classify("", "an inspiring tale of recovery"),
            Category::Uplifting
        );
        assert_eq!(
            classify("hurricane approaches the coast", ""),
            Category::NaturalDisaster
        );
        assert_eq!(classify("quarterly earnings report", ""), Category::Others);
    }

    #[test]
    fn case_insensitive() {
        let title = "Massive EARTHQUAKE strikes region";
        assert_eq!(
            classify(title, ""),
            classify(&title.to_uppercase(), ""),
        );
        assert_eq!(classify("TERRORISM suspect held", ""), Category::Unrest);
    }

    #[test]
    fn first_matching_group_wins() {
        // Matches both the unrest and positive groups; rule order decides.
        assert_eq!(
            classify("protest sparks positive change", ""),
            Category::Unrest
        );
        assert_eq!(
            classify("uplifting rescue after flood", ""),
            Category::Uplifting
        );
    }

    #[test]
    fn empty_inputs_yield_others() {
        assert_eq!(classify("", ""), Category::Others);
    }

    #[test]
    fn substring_not_token_matching() {
        assert_eq!(classify("students protesting fees", ""), Category::Unrest);
        assert_eq!(classify("flooding in the valley", ""), Category::NaturalDisaster);
    }

    #[test]
    fn description_alone_is_enough() {
        assert_eq!(
            classify("local news roundup", "riot police deployed overnight"),
            Category::Unrest
        );
    }
}
