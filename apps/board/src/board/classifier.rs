//! Skill classifier — maps a tag keyword to a chip `Category`.
//!
//! The keyword lists overlap ("python" is both backend and language, "react" both
//! frontend and framework). Lists are checked in the order of `KEYWORD_TABLE` and the
//! first hit wins, so the overlap resolves to the earlier category.

use crate::models::job::Category;

const FRONTEND: &[&str] = &[
    "html",
    "css",
    "sass",
    "frontend",
    "react",
    "vue",
    "javascript",
    "typescript",
];

const BACKEND: &[&str] = &[
    "backend", "ruby", "ror", "python", "php", "java", "c#", "node", "express",
];

const FULLSTACK: &[&str] = &["fullstack", "full stack", "django", "laravel"];

const LANGUAGE: &[&str] = &[
    "python",
    "ruby",
    "javascript",
    "typescript",
    "php",
    "java",
    "c#",
    "go",
];

const FRAMEWORK: &[&str] = &[
    "react", "vue", "angular", "svelte", "django", "laravel", "rails", "express",
];

/// Priority order matters.
const KEYWORD_TABLE: &[(Category, &[&str])] = &[
    (Category::Frontend, FRONTEND),
    (Category::Backend, BACKEND),
    (Category::Fullstack, FULLSTACK),
    (Category::Language, LANGUAGE),
    (Category::Framework, FRAMEWORK),
];

/// Classifies a skill keyword, case-insensitively. Unknown keywords are `Other`.
pub fn classify(skill: &str) -> Category {
    let lowercase = skill.to_lowercase();

    KEYWORD_TABLE
        .iter()
        .find(|(_, keywords)| keywords.contains(&lowercase.as_str()))
        .map(|(category, _)| *category)
        .unwrap_or(Category::Other)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_react_resolves_to_frontend_not_framework() {
        assert_eq!(classify("react"), Category::Frontend);
        assert_eq!(classify("React"), Category::Frontend);
    }

    #[test]
    fn test_python_resolves_to_backend_not_language() {
        assert_eq!(classify("python"), Category::Backend);
        assert_eq!(classify("Python"), Category::Backend);
    }

    #[test]
    fn test_django_resolves_to_fullstack_not_framework() {
        assert_eq!(classify("Django"), Category::Fullstack);
    }

    #[test]
    fn test_go_is_language() {
        assert_eq!(classify("Go"), Category::Language);
    }

    #[test]
    fn test_framework_only_keywords() {
        assert_eq!(classify("Angular"), Category::Framework);
        assert_eq!(classify("Svelte"), Category::Framework);
        assert_eq!(classify("Rails"), Category::Framework);
    }

    #[test]
    fn test_express_hits_backend_first() {
        assert_eq!(classify("Express"), Category::Backend);
    }

    #[test]
    fn test_multi_word_and_symbol_keywords() {
        assert_eq!(classify("Full Stack"), Category::Fullstack);
        assert_eq!(classify("C#"), Category::Backend);
        assert_eq!(classify("RoR"), Category::Backend);
    }

    #[test]
    fn test_unknown_keyword_is_other() {
        assert_eq!(classify("COBOL"), Category::Other);
        assert_eq!(classify(""), Category::Other);
        assert_eq!(classify("Senior"), Category::Other);
    }

    #[test]
    fn test_no_trimming_or_substring_matching() {
        assert_eq!(classify(" react"), Category::Other);
        assert_eq!(classify("reactjs"), Category::Other);
    }
}
