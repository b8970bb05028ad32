//! Tag merging across provenance sets.
//!
//! Recipes carry two tag sets: tags the author typed and tags the ML
//! collaborator generated. Search and display want one combined set with the
//! author's tags first and duplicates collapsed case-insensitively, keeping
//! whichever casing appeared first.

/// Merge user tags and AI tags into the combined searchable set.
pub fn merge_tags(user_tags: &[String], ai_tags: &[String]) -> Vec<String> {
    let mut merged: Vec<String> = Vec::with_capacity(user_tags.len() + ai_tags.len());

    for tag in user_tags.iter().chain(ai_tags.iter()) {
        let tag = tag.trim();
        if tag.is_empty() {
            continue;
        }
        if !merged.iter().any(|seen| seen.eq_ignore_ascii_case(tag)) {
            merged.push(tag.to_string());
        }
    }

    merged
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tags(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn user_tags_come_first() {
        let merged = merge_tags(&tags(&["dinner", "quick"]), &tags(&["italian"]));
        assert_eq!(merged, tags(&["dinner", "quick", "italian"]));
    }

    #[test]
    fn dedup_is_case_insensitive_and_keeps_first_casing() {
        let merged = merge_tags(&tags(&["Vegan", "soup"]), &tags(&["vegan", "Soup", "cozy"]));
        assert_eq!(merged, tags(&["Vegan", "soup", "cozy"]));
    }

    #[test]
    fn blank_tags_are_dropped() {
        let merged = merge_tags(&tags(&["", "  ", "bread"]), &tags(&[" bread "]));
        assert_eq!(merged, tags(&["bread"]));
    }
}
