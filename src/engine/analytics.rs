//! Analytics Engine
//!
//! Derives aggregate statistics from the full blog list.

use std::collections::HashSet;

use serde::Serialize;

use crate::error::Result;
use crate::models::BlogRecord;

/// Lower-cased marker looked for in titles.
pub const PRIVACY_KEYWORD: &str = "privacy";

/// Statistics computed over one snapshot of the blog list.
///
/// Serialized with the field names the stats endpoint exposes.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalyticsResult {
    #[serde(rename = "totalBlogs")]
    pub total_blogs: usize,
    #[serde(rename = "blogWithLongestTitle")]
    pub longest_title_blog: Option<BlogRecord>,
    #[serde(rename = "blogsWithPrivacyTitle")]
    pub privacy_title_blogs: Vec<BlogRecord>,
    #[serde(rename = "blogWithUniqueTitle")]
    pub unique_titles: Vec<String>,
}

/// Computes [`AnalyticsResult`] for `blogs`.
///
/// Title length is measured in Unicode scalar values; ties go to the
/// earliest record. Deduplication of titles is exact and case-sensitive.
///
/// # Errors
/// `InvalidRecord` if any record has no title.
pub fn analyze(blogs: &[BlogRecord]) -> Result<AnalyticsResult> {
    let mut longest: Option<(usize, &BlogRecord)> = None;
    let mut privacy_title_blogs = Vec::new();
    let mut seen = HashSet::new();
    let mut unique_titles = Vec::new();

    for blog in blogs {
        let title = blog.require_title()?;

        let length = title.chars().count();
        if longest.map_or(true, |(best, _)| length > best) {
            longest = Some((length, blog));
        }

        if title.to_lowercase().contains(PRIVACY_KEYWORD) {
            privacy_title_blogs.push(blog.clone());
        }

        if seen.insert(title) {
            unique_titles.push(title.to_string());
        }
    }

    Ok(AnalyticsResult {
        total_blogs: blogs.len(),
        longest_title_blog: longest.map(|(_, blog)| blog.clone()),
        privacy_title_blogs,
        unique_titles,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;
    use proptest::prelude::*;

    fn blogs(titles: &[&str]) -> Vec<BlogRecord> {
        titles
            .iter()
            .enumerate()
            .map(|(i, title)| BlogRecord::new(i.to_string(), *title))
            .collect()
    }

    #[test]
    fn test_analyze_empty() {
        let result = analyze(&[]).unwrap();

        assert_eq!(result.total_blogs, 0);
        assert!(result.longest_title_blog.is_none());
        assert!(result.privacy_title_blogs.is_empty());
        assert!(result.unique_titles.is_empty());
    }

    #[test]
    fn test_analyze_empty_serializes_null_longest() {
        let json = serde_json::to_string(&analyze(&[]).unwrap()).unwrap();
        assert_eq!(
            json,
            r#"{"totalBlogs":0,"blogWithLongestTitle":null,"blogsWithPrivacyTitle":[],"blogWithUniqueTitle":[]}"#
        );
    }

    #[test]
    fn test_analyze_longest_and_unique() {
        let result = analyze(&blogs(&["A", "AA", "A"])).unwrap();

        assert_eq!(result.total_blogs, 3);
        assert_eq!(
            result.longest_title_blog.unwrap().title.as_deref(),
            Some("AA")
        );
        assert_eq!(result.unique_titles, vec!["A", "AA"]);
    }

    #[test]
    fn test_longest_title_tie_goes_to_first() {
        let result = analyze(&blogs(&["abc", "xyz", "de"])).unwrap();
        assert_eq!(result.longest_title_blog.unwrap().id, "0");
    }

    #[test]
    fn test_longest_title_counts_characters() {
        // Four characters but eight bytes
        let result = analyze(&blogs(&["日本語版", "abcde"])).unwrap();
        assert_eq!(result.longest_title_blog.unwrap().id, "1");
    }

    #[test]
    fn test_privacy_filter() {
        let result = analyze(&blogs(&["Privacy Policy", "Other"])).unwrap();

        assert_eq!(result.privacy_title_blogs.len(), 1);
        assert_eq!(
            result.privacy_title_blogs[0].title.as_deref(),
            Some("Privacy Policy")
        );
    }

    #[test]
    fn test_privacy_filter_case_insensitive_substring() {
        let result =
            analyze(&blogs(&["On DATA PRIVACY", "privacy", "Private matters", "x"])).unwrap();

        let ids: Vec<&str> = result
            .privacy_title_blogs
            .iter()
            .map(|b| b.id.as_str())
            .collect();
        assert_eq!(ids, vec!["0", "1"]);
    }

    #[test]
    fn test_unique_titles_case_sensitive() {
        let result = analyze(&blogs(&["Rust", "rust", "Rust", "Go"])).unwrap();
        assert_eq!(result.unique_titles, vec!["Rust", "rust", "Go"]);
    }

    #[test]
    fn test_missing_title_is_invalid_record() {
        let mut input = blogs(&["A"]);
        input.push(BlogRecord {
            id: "broken".to_string(),
            title: None,
            extra: Default::default(),
        });

        let result = analyze(&input);
        assert!(matches!(result, Err(AppError::InvalidRecord(msg)) if msg.contains("broken")));
    }

    proptest! {
        #[test]
        fn prop_unique_titles_are_distinct_and_ordered(
            titles in prop::collection::vec("[a-cA-C]{0,3}", 0..40)
        ) {
            let refs: Vec<&str> = titles.iter().map(String::as_str).collect();
            let result = analyze(&blogs(&refs)).unwrap();

            let distinct: HashSet<&String> = result.unique_titles.iter().collect();
            prop_assert_eq!(distinct.len(), result.unique_titles.len());

            // Each unique title appears in first-occurrence order
            let mut expected = Vec::new();
            for title in &titles {
                if !expected.contains(title) {
                    expected.push(title.clone());
                }
            }
            prop_assert_eq!(&result.unique_titles, &expected);
            prop_assert_eq!(result.total_blogs, titles.len());
        }

        #[test]
        fn prop_longest_title_is_maximal(
            titles in prop::collection::vec("[a-z ]{0,12}", 1..30)
        ) {
            let refs: Vec<&str> = titles.iter().map(String::as_str).collect();
            let result = analyze(&blogs(&refs)).unwrap();
            let longest = result.longest_title_blog.unwrap();
            let longest_len = longest.title.as_deref().unwrap().chars().count();

            prop_assert!(titles.iter().all(|t| t.chars().count() <= longest_len));
            let first_at_max = titles.iter().position(|t| t.chars().count() == longest_len).unwrap();
            prop_assert_eq!(longest.id, first_at_max.to_string());
        }
    }
}
