//! Selector combination for nested rules.
//!
//! A child key is combined with its parent selector according to where the
//! `$` marker appears:
//!
//! | Key | Meaning | `"a, b"` + key |
//! |-----|---------|----------------|
//! | `$x$` | literal selector, parent ignored | `x` |
//! | `x$` | prefix each parent branch | `x a, x b` |
//! | `$x` | pseudo-class on each parent branch | `a:x, b:x` |
//! | `x` | descendant, crossed with every branch | `a x, b x` |
//!
//! Commas inside parentheses or brackets (`:not(a, b)`, `[title="a,b"]`)
//! do not split branches.

/// The reserved marker character in selector keys.
pub const MARKER: char = '$';

/// How a child key combines with its parent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyKind<'a> {
    /// `$x$`: `x` used verbatim.
    Literal(&'a str),
    /// `x$`: `x` prepended to each parent branch.
    GroupPrefix(&'a str),
    /// `$x`: `:x` appended to each parent branch.
    Pseudo(&'a str),
    /// Plain descendant.
    Descendant(&'a str),
}

/// Classifies a child key by its marker placement.
pub fn classify_key(key: &str) -> KeyKind<'_> {
    let key = key.trim();
    let leading = key.starts_with(MARKER);
    let trailing = key.len() > 1 && key.ends_with(MARKER);
    match (leading, trailing) {
        (true, true) => KeyKind::Literal(key[1..key.len() - 1].trim()),
        (false, true) => KeyKind::GroupPrefix(key[..key.len() - 1].trim()),
        (true, false) => KeyKind::Pseudo(key[1..].trim()),
        (false, false) => KeyKind::Descendant(key),
    }
}

/// Splits a selector on top-level commas, trimming each branch.
pub fn branches(selector: &str) -> Vec<&str> {
    let mut out = Vec::new();
    let mut depth = 0usize;
    let mut quote: Option<char> = None;
    let mut start = 0;

    for (i, c) in selector.char_indices() {
        match (quote, c) {
            (Some(q), c) if c == q => quote = None,
            (Some(_), _) => {}
            (None, '"') | (None, '\'') => quote = Some(c),
            (None, '(') | (None, '[') => depth += 1,
            (None, ')') | (None, ']') => depth = depth.saturating_sub(1),
            (None, ',') if depth == 0 => {
                out.push(selector[start..i].trim());
                start = i + 1;
            }
            _ => {}
        }
    }
    out.push(selector[start..].trim());
    out.retain(|branch| !branch.is_empty());
    out
}

/// Combines a parent selector with a child key.
///
/// An empty parent means the key is at the top level, where every form
/// except the literal one reduces to the key text itself.
pub fn combine(parent: &str, key: &str) -> String {
    let parents = branches(parent);
    match classify_key(key) {
        KeyKind::Literal(selector) => selector.to_string(),
        KeyKind::GroupPrefix(prefix) => {
            if parents.is_empty() {
                return prefix.to_string();
            }
            parents
                .iter()
                .map(|p| format!("{} {}", prefix, p))
                .collect::<Vec<_>>()
                .join(", ")
        }
        KeyKind::Pseudo(pseudo) => {
            if parents.is_empty() {
                return format!(":{}", pseudo);
            }
            parents
                .iter()
                .map(|p| format!("{}:{}", p, pseudo))
                .collect::<Vec<_>>()
                .join(", ")
        }
        KeyKind::Descendant(child) => {
            let children = branches(child);
            if parents.is_empty() {
                return children.join(", ");
            }
            parents
                .iter()
                .flat_map(|p| children.iter().map(move |c| format!("{} {}", p, c)))
                .collect::<Vec<_>>()
                .join(", ")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // =========================================================================
    // Classification
    // =========================================================================

    #[test]
    fn test_classify_key() {
        assert_eq!(classify_key("$body > p$"), KeyKind::Literal("body > p"));
        assert_eq!(classify_key("html.ie$"), KeyKind::GroupPrefix("html.ie"));
        assert_eq!(classify_key("$hover"), KeyKind::Pseudo("hover"));
        assert_eq!(classify_key("li"), KeyKind::Descendant("li"));
    }

    #[test]
    fn test_lone_marker_is_pseudo() {
        assert_eq!(classify_key("$"), KeyKind::Pseudo(""));
    }

    // =========================================================================
    // Branches
    // =========================================================================

    #[test]
    fn test_branches_respect_parentheses() {
        assert_eq!(branches("a, b:not(.x, .y), c"), vec!["a", "b:not(.x, .y)", "c"]);
        assert_eq!(branches(r#"a[title="x,y"], b"#), vec![r#"a[title="x,y"]"#, "b"]);
        assert!(branches("  ").is_empty());
    }

    // =========================================================================
    // Combination
    // =========================================================================

    #[test]
    fn test_pseudo_class_on_every_branch() {
        assert_eq!(combine("a, b", "$hover"), "a:hover, b:hover");
    }

    #[test]
    fn test_descendant() {
        assert_eq!(combine("ul", "li"), "ul li");
    }

    #[test]
    fn test_descendant_cross_product() {
        assert_eq!(combine("a, b", "c, d"), "a c, a d, b c, b d");
    }

    #[test]
    fn test_group_prefix() {
        assert_eq!(combine("a, b", "html.ie$"), "html.ie a, html.ie b");
    }

    #[test]
    fn test_literal_ignores_parent() {
        assert_eq!(combine("nav ul", "$body > header$"), "body > header");
    }

    #[test]
    fn test_top_level_keys() {
        assert_eq!(combine("", "h1,h2"), "h1, h2");
        assert_eq!(combine("", "$root"), ":root");
        assert_eq!(combine("", "$@font-face$"), "@font-face");
    }
}
