// Comparator: skill-set overlap and textual similarity between a resume
// and a job description.

pub mod handlers;
pub mod similarity;

use serde::Serialize;

use crate::extract::fields::ExtractedProfile;
use crate::matching::similarity::{round2, similarity};

/// Overlap report between a resume and a job description.
/// Derived from two profiles; immutable and request-scoped.
#[derive(Debug, Clone, Serialize)]
pub struct ComparisonResult {
    pub matching_skills: Vec<String>,
    /// JD skills the resume lacks. Directional, unlike `matching_skills`.
    pub missing_skills: Vec<String>,
    /// Bag-of-words cosine similarity of the two skill sets, 0-100,
    /// rounded to 2 decimal places.
    pub similarity_score: f64,
}

/// Skills present in both sets (intersection). Symmetric.
pub fn matching_skills(resume: &[String], jd: &[String]) -> Vec<String> {
    resume.iter().filter(|s| jd.contains(s)).cloned().collect()
}

/// JD skills not present in the resume (set difference, JD minus resume).
pub fn missing_skills(resume: &[String], jd: &[String]) -> Vec<String> {
    jd.iter().filter(|s| !resume.contains(s)).cloned().collect()
}

/// Full comparison of two extracted profiles. The similarity vectors are
/// built from the recognized skill lists, not the raw document texts.
pub fn compare(resume: &ExtractedProfile, jd: &ExtractedProfile) -> ComparisonResult {
    let score = similarity(&resume.skills.join(" "), &jd.skills.join(" "));
    ComparisonResult {
        matching_skills: matching_skills(&resume.skills, &jd.skills),
        missing_skills: missing_skills(&resume.skills, &jd.skills),
        similarity_score: round2(score),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn skills(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_matching_and_missing() {
        let resume = skills(&["Python"]);
        let jd = skills(&["Python", "SQL"]);
        assert_eq!(matching_skills(&resume, &jd), skills(&["Python"]));
        assert_eq!(missing_skills(&resume, &jd), skills(&["SQL"]));
    }

    #[test]
    fn test_matching_is_symmetric() {
        let r = skills(&["Python", "SQL"]);
        let j = skills(&["SQL", "Python", "Java"]);
        let mut a = matching_skills(&r, &j);
        let mut b = matching_skills(&j, &r);
        a.sort();
        b.sort();
        assert_eq!(a, b);
    }

    #[test]
    fn test_missing_is_directional() {
        let r = skills(&["Python"]);
        let j = skills(&["Python", "SQL"]);
        assert_eq!(missing_skills(&r, &j), skills(&["SQL"]));
        assert!(missing_skills(&j, &r).is_empty());
    }

    #[test]
    fn test_empty_sets() {
        let none: Vec<String> = vec![];
        assert!(matching_skills(&none, &none).is_empty());
        assert!(missing_skills(&none, &none).is_empty());
    }

    #[test]
    fn test_compare_identical_profiles_scores_100() {
        let profile = crate::extract::fields::ExtractedProfile {
            name: None,
            email: None,
            phone: None,
            experience_years: None,
            skills: skills(&["Python", "SQL"]),
        };
        let result = compare(&profile, &profile.clone());
        assert_eq!(result.similarity_score, 100.0);
        assert_eq!(result.matching_skills, skills(&["Python", "SQL"]));
        assert!(result.missing_skills.is_empty());
    }

    #[test]
    fn test_compare_empty_profiles_scores_zero() {
        let empty = crate::extract::fields::ExtractedProfile {
            name: None,
            email: None,
            phone: None,
            experience_years: None,
            skills: vec![],
        };
        let result = compare(&empty, &empty.clone());
        assert_eq!(result.similarity_score, 0.0);
    }
}
