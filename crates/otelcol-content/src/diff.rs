//! Text diffs for previewing fragment rewrites

use similar::TextDiff;

/// Lines of context around each hunk.
const CONTEXT_RADIUS: usize = 3;

/// Unified diff of `old` against `new`, labelled with `name`.
///
/// Returns an empty string when the two texts are identical.
pub fn unified_diff(name: &str, old: &str, new: &str) -> String {
    if old == new {
        return String::new();
    }

    let old_label = format!("a/{name}");
    let new_label = format!("b/{name}");
    TextDiff::from_lines(old, new)
        .unified_diff()
        .context_radius(CONTEXT_RADIUS)
        .header(&old_label, &new_label)
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identical_texts_have_no_diff() {
        assert_eq!(unified_diff("a.yaml", "a: 1\n", "a: 1\n"), "");
    }

    #[test]
    fn removed_line_is_marked() {
        let diff = unified_diff(
            "settings.yaml",
            "fields:\n  foo: bar\n  bar: baz\n",
            "fields:\n  bar: baz\n",
        );
        assert!(diff.contains("--- a/settings.yaml"));
        assert!(diff.contains("+++ b/settings.yaml"));
        assert!(diff.contains("-  foo: bar"));
        assert!(!diff.contains("-  bar: baz"));
    }
}
