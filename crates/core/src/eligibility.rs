//! The eligibility engine.
//!
//! Pure, synchronous classification of which catalog courses a user may
//! newly take, given a snapshot of the catalog and the user's completed
//! course codes. The caller (the API layer) is responsible for supplying
//! consistent snapshots and for rejecting malformed input before these
//! functions run; nothing in here touches a database or raises an error.

use std::collections::HashSet;

use crate::course::Course;

/// Compute the courses a user is newly eligible to take.
///
/// A course is included when all of the following hold:
///
/// 1. its code is not already in `completed` (a completed course is never
///    "eligible" again);
/// 2. every prerequisite code is a member of `completed` — an empty
///    prerequisite list is trivially satisfied, and a prerequisite that
///    exists nowhere in the catalog stays unsatisfied until that literal
///    code appears in `completed`;
/// 3. if `category` is given, the course's category matches it exactly.
///
/// Results preserve catalog order and carry full course records. Codes are
/// compared as opaque case-sensitive tokens; no normalization happens here.
pub fn eligible_courses(
    catalog: &[Course],
    completed: &[String],
    category: Option<&str>,
) -> Vec<Course> {
    let completed: HashSet<&str> = completed.iter().map(String::as_str).collect();

    catalog
        .iter()
        .filter(|course| !completed.contains(course.code.as_str()))
        .filter(|course| {
            course
                .prerequisites
                .iter()
                .all(|prereq| completed.contains(prereq.as_str()))
        })
        .filter(|course| category.is_none_or(|cat| course.category == cat))
        .cloned()
        .collect()
}

/// Sum the credit weights of the given courses.
///
/// Courses without a credit value count as 0. The sum is commutative, so
/// callers may pass the list in any order.
pub fn total_credits(courses: &[Course]) -> i64 {
    courses
        .iter()
        .map(|course| i64::from(course.credits.unwrap_or(0)))
        .sum()
}

/// Union an existing completed set with newly selected codes.
///
/// Deterministic regardless of how the selection was built up in the UI:
/// existing codes keep their order, new codes are appended in first-seen
/// order, and duplicates collapse to one membership. Every save path goes
/// through this, so saving is always non-destructive.
pub fn merge_completed(existing: &[String], selected: &[String]) -> Vec<String> {
    let mut seen: HashSet<&str> = HashSet::with_capacity(existing.len() + selected.len());
    let mut merged = Vec::with_capacity(existing.len() + selected.len());

    for code in existing.iter().chain(selected.iter()) {
        if seen.insert(code.as_str()) {
            merged.push(code.clone());
        }
    }
    merged
}

#[cfg(test)]
mod tests {
    use super::*;

    fn course(code: &str, category: &str, prereqs: &[&str]) -> Course {
        Course {
            code: code.to_string(),
            name: format!("{code} name"),
            category: category.to_string(),
            prerequisites: prereqs.iter().map(|p| p.to_string()).collect(),
            credits: None,
            description: None,
        }
    }

    fn codes(courses: &[Course]) -> Vec<&str> {
        courses.iter().map(|c| c.code.as_str()).collect()
    }

    fn completed(codes: &[&str]) -> Vec<String> {
        codes.iter().map(|c| c.to_string()).collect()
    }

    /// Two-course chain, nothing completed: only the intro course unlocks.
    #[test]
    fn test_empty_completed_unlocks_only_intro() {
        let catalog = vec![
            course("CSC101", "Core", &[]),
            course("CSC201", "Core", &["CSC101"]),
        ];

        let result = eligible_courses(&catalog, &[], None);
        assert_eq!(codes(&result), vec!["CSC101"]);
    }

    /// Completing the intro excludes it and unlocks its dependent.
    #[test]
    fn test_completion_unlocks_dependent() {
        let catalog = vec![
            course("CSC101", "Core", &[]),
            course("CSC201", "Core", &["CSC101"]),
        ];

        let result = eligible_courses(&catalog, &completed(&["CSC101"]), None);
        assert_eq!(codes(&result), vec!["CSC201"]);
    }

    /// Everything completed yields an empty result.
    #[test]
    fn test_all_completed_yields_empty() {
        let catalog = vec![
            course("CSC101", "Core", &[]),
            course("CSC201", "Core", &["CSC101"]),
        ];

        let result = eligible_courses(&catalog, &completed(&["CSC101", "CSC201"]), None);
        assert!(result.is_empty());
    }

    /// A prerequisite code absent from the catalog permanently blocks the
    /// dependent course, no matter what else is completed.
    #[test]
    fn test_dangling_prerequisite_blocks_course() {
        let catalog = vec![
            course("CSC101", "Core", &[]),
            course("CSC201", "Core", &["CSC101"]),
            course("CSC301", "Core", &["CSC999"]),
        ];

        let result = eligible_courses(&catalog, &completed(&["CSC101", "CSC201"]), None);
        assert!(
            !codes(&result).contains(&"CSC301"),
            "course with a dangling prerequisite must not appear"
        );

        // ...until the literal code shows up in the completed set.
        let result = eligible_courses(&catalog, &completed(&["CSC101", "CSC201", "CSC999"]), None);
        assert_eq!(codes(&result), vec!["CSC301"]);
    }

    /// The category filter keeps only exact matches.
    #[test]
    fn test_category_filter() {
        let catalog = vec![
            course("CSC101", "Core", &[]),
            course("ART110", "Elective", &[]),
        ];

        let result = eligible_courses(&catalog, &[], Some("Core"));
        assert_eq!(codes(&result), vec!["CSC101"]);

        // No matching category at all.
        let result = eligible_courses(&catalog, &[], Some("Lab"));
        assert!(result.is_empty());
    }

    /// P4: the filtered result is exactly the unfiltered result restricted
    /// to the requested category.
    #[test]
    fn test_category_filter_is_pure_restriction() {
        let catalog = vec![
            course("CSC101", "Core", &[]),
            course("CSC201", "Core", &["CSC101"]),
            course("ART110", "Elective", &[]),
            course("MTH120", "Core", &[]),
        ];
        let done = completed(&["CSC101"]);

        let unfiltered = eligible_courses(&catalog, &done, None);
        let filtered = eligible_courses(&catalog, &done, Some("Core"));

        let expected: Vec<&Course> = unfiltered
            .iter()
            .filter(|c| c.category == "Core")
            .collect();
        assert_eq!(filtered.iter().collect::<Vec<_>>(), expected);
    }

    /// P1 + P2: nothing completed appears in the result, and every result
    /// course has all prerequisites satisfied.
    #[test]
    fn test_exclusion_and_satisfaction_invariants() {
        let catalog = vec![
            course("CSC101", "Core", &[]),
            course("CSC201", "Core", &["CSC101"]),
            course("CSC250", "Core", &["CSC101", "CSC201"]),
            course("ART110", "Elective", &[]),
        ];
        let done = completed(&["CSC101", "ART110"]);

        let result = eligible_courses(&catalog, &done, None);
        for c in &result {
            assert!(!done.contains(&c.code), "completed course {} returned", c.code);
            for prereq in &c.prerequisites {
                assert!(done.contains(prereq), "unsatisfied prerequisite {prereq}");
            }
        }
    }

    /// P5: identical inputs produce identical output.
    #[test]
    fn test_idempotence() {
        let catalog = vec![
            course("CSC101", "Core", &[]),
            course("CSC201", "Core", &["CSC101"]),
        ];
        let done = completed(&["CSC101"]);

        let first = eligible_courses(&catalog, &done, None);
        let second = eligible_courses(&catalog, &done, None);
        assert_eq!(first, second);
    }

    /// Result order is catalog order, not name or code order.
    #[test]
    fn test_result_preserves_catalog_order() {
        let catalog = vec![
            course("ZZZ100", "Core", &[]),
            course("AAA100", "Core", &[]),
            course("MMM100", "Core", &[]),
        ];

        let result = eligible_courses(&catalog, &[], None);
        assert_eq!(codes(&result), vec!["ZZZ100", "AAA100", "MMM100"]);
    }

    /// Codes are compared case-sensitively, as opaque tokens.
    #[test]
    fn test_codes_are_case_sensitive() {
        let catalog = vec![course("CSC201", "Core", &["CSC101"])];

        let result = eligible_courses(&catalog, &completed(&["csc101"]), None);
        assert!(result.is_empty(), "lowercase code must not satisfy CSC101");
    }

    /// An empty catalog yields an empty result.
    #[test]
    fn test_empty_catalog() {
        let result = eligible_courses(&[], &completed(&["CSC101"]), None);
        assert!(result.is_empty());
    }

    // -----------------------------------------------------------------------
    // total_credits
    // -----------------------------------------------------------------------

    fn with_credits(code: &str, credits: Option<i32>) -> Course {
        Course {
            credits,
            ..course(code, "Core", &[])
        }
    }

    /// P6: empty list sums to 0; null credits contribute nothing.
    #[test]
    fn test_total_credits() {
        assert_eq!(total_credits(&[]), 0);

        let courses = vec![
            with_credits("CSC101", Some(3)),
            with_credits("CSC201", None),
            with_credits("MTH120", Some(4)),
        ];
        assert_eq!(total_credits(&courses), 7);
    }

    /// The sum is order-independent.
    #[test]
    fn test_total_credits_commutative() {
        let mut courses = vec![
            with_credits("CSC101", Some(3)),
            with_credits("MTH120", Some(4)),
            with_credits("CSC201", None),
        ];
        let forward = total_credits(&courses);
        courses.reverse();
        assert_eq!(forward, total_credits(&courses));
    }

    // -----------------------------------------------------------------------
    // merge_completed
    // -----------------------------------------------------------------------

    /// New codes append after existing ones, in first-seen order.
    #[test]
    fn test_merge_appends_new_codes() {
        let existing = completed(&["CSC101", "CSC201"]);
        let selected = completed(&["MTH120", "CSC101", "ART110"]);

        let merged = merge_completed(&existing, &selected);
        assert_eq!(merged, completed(&["CSC101", "CSC201", "MTH120", "ART110"]));
    }

    /// Merging is non-destructive: nothing already saved is lost.
    #[test]
    fn test_merge_preserves_existing() {
        let existing = completed(&["CSC101", "CSC201"]);
        let merged = merge_completed(&existing, &[]);
        assert_eq!(merged, existing);
    }

    /// Duplicates inside the selection collapse to one membership.
    #[test]
    fn test_merge_collapses_duplicates() {
        let selected = completed(&["CSC101", "CSC101", "CSC201"]);
        let merged = merge_completed(&[], &selected);
        assert_eq!(merged, completed(&["CSC101", "CSC201"]));
    }
}
