//! Skill vocabulary — the fixed list of skill names the service recognizes.
//!
//! Matching is whole-word and case-insensitive. Vocabulary entries are
//! treated as literal strings (escaped before compilation), never as
//! patterns, so a future entry like "C++" cannot corrupt the matcher.

use regex::Regex;

/// Recognized skill names, in report order. Not learned or inferred.
const DEFAULT_SKILLS: &[&str] = &[
    "Python",
    "Machine Learning",
    "Data Analysis",
    "Java",
    "SQL",
    "Excel",
    "NLP",
    "Cloud",
];

/// Fixed, ordered skill vocabulary with one compiled matcher per entry.
/// Built once at startup and shared read-only via `AppState`.
pub struct SkillVocabulary {
    entries: Vec<SkillMatcher>,
}

struct SkillMatcher {
    name: String,
    pattern: Regex,
}

impl SkillVocabulary {
    /// Compiles word-boundary matchers for a custom skill list.
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let entries = names
            .into_iter()
            .map(|n| {
                let name = n.as_ref().to_string();
                let pattern = Regex::new(&format!(r"(?i)\b{}\b", regex::escape(&name)))
                    .expect("escaped skill name is a valid pattern");
                SkillMatcher { name, pattern }
            })
            .collect();
        Self { entries }
    }

    /// The built-in vocabulary.
    pub fn default_set() -> Self {
        Self::new(DEFAULT_SKILLS.iter().copied())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Vocabulary skills appearing in `text` as whole words, case-insensitive.
    /// Returned in vocabulary order; each skill appears at most once.
    pub fn extract_skills(&self, text: &str) -> Vec<String> {
        self.entries
            .iter()
            .filter(|m| m.pattern.is_match(text))
            .map(|m| m.name.clone())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extracts_known_skills() {
        let vocab = SkillVocabulary::new(["Python", "SQL"]);
        assert_eq!(
            vocab.extract_skills("I know Python and SQL well"),
            vec!["Python".to_string(), "SQL".to_string()]
        );
    }

    #[test]
    fn test_matching_is_case_insensitive() {
        let vocab = SkillVocabulary::new(["Python", "SQL"]);
        assert_eq!(
            vocab.extract_skills("I know python"),
            vec!["Python".to_string()]
        );
    }

    #[test]
    fn test_whole_word_only() {
        // "JavaScript" must not count as "Java".
        let vocab = SkillVocabulary::default_set();
        assert!(vocab.extract_skills("JavaScript developer").is_empty());
        assert_eq!(
            vocab.extract_skills("Java developer"),
            vec!["Java".to_string()]
        );
    }

    #[test]
    fn test_multiword_skill() {
        let vocab = SkillVocabulary::default_set();
        assert_eq!(
            vocab.extract_skills("background in machine learning models"),
            vec!["Machine Learning".to_string()]
        );
    }

    #[test]
    fn test_duplicates_collapse() {
        let vocab = SkillVocabulary::default_set();
        assert_eq!(
            vocab.extract_skills("Python, Python, and more Python"),
            vec!["Python".to_string()]
        );
    }

    #[test]
    fn test_empty_text_yields_no_skills() {
        let vocab = SkillVocabulary::default_set();
        assert!(vocab.extract_skills("").is_empty());
    }

    #[test]
    fn test_results_follow_vocabulary_order() {
        let vocab = SkillVocabulary::default_set();
        assert_eq!(
            vocab.extract_skills("SQL first here, Python second"),
            vec!["Python".to_string(), "SQL".to_string()]
        );
    }

    #[test]
    fn test_default_set_size() {
        let vocab = SkillVocabulary::default_set();
        assert_eq!(vocab.len(), 8);
        assert!(!vocab.is_empty());
    }
}
