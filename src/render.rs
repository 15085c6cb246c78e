//! Placeholder substitution for message templates.
//!
//! Templates mark substitution points as `{name}`. Rendering is a single
//! left-to-right pass: matched tokens are replaced with the caller's value,
//! unknown tokens and unclosed braces are emitted verbatim, and replacement
//! values are never re-scanned, so substitution cannot recurse.

/// What: Substitute `{name}` placeholders in a template string.
///
/// Inputs:
/// - `template`: Template text possibly containing `{name}` tokens
/// - `values`: (name, replacement) pairs supplied by the caller
///
/// Output:
/// - The rendered string; tokens without a matching name are left as-is
///
/// Details:
/// - Lenient by design: templates are shared across call sites with
///   different placeholder sets, so an unmatched token is not an error
/// - No locale-specific digit formatting happens here; the quantity arrives
///   as a plain decimal string like any other value
///
/// # Example
///
/// ```
/// use pluralcat::render::render;
///
/// let s = render("Base directory is set: {dir}", &[("dir", "/home/user")]);
/// assert_eq!(s, "Base directory is set: /home/user");
/// ```
#[must_use]
pub fn render(template: &str, values: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];

        if let Some(close) = after.find('}') {
            let name = &after[..close];
            if let Some((_, value)) = values.iter().find(|(n, _)| *n == name) {
                out.push_str(value);
            } else {
                out.push('{');
                out.push_str(name);
                out.push('}');
            }
            rest = &after[close + 1..];
        } else {
            // Unclosed brace: emit the rest verbatim
            out.push_str(&rest[open..]);
            rest = "";
        }
    }

    out.push_str(rest);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_placeholder() {
        assert_eq!(
            render("Open this directory in {app}", &[("app", "Finder")]),
            "Open this directory in Finder"
        );
    }

    #[test]
    fn multiple_placeholders() {
        assert_eq!(
            render("{name}さん、今日は{day}です。", &[("name", "田中"), ("day", "火曜日")]),
            "田中さん、今日は火曜日です。"
        );
    }

    #[test]
    fn repeated_placeholder() {
        assert_eq!(render("{x} and {x}", &[("x", "A")]), "A and A");
    }

    #[test]
    fn unknown_token_left_verbatim() {
        assert_eq!(render("Welcome, {name}!", &[]), "Welcome, {name}!");
        assert_eq!(
            render("Back to \"{dir}\"", &[("app", "x")]),
            "Back to \"{dir}\""
        );
    }

    #[test]
    fn unclosed_brace_left_verbatim() {
        assert_eq!(render("Hello {world", &[("world", "x")]), "Hello {world");
    }

    #[test]
    fn empty_braces_left_verbatim() {
        assert_eq!(render("Hello {}", &[]), "Hello {}");
    }

    #[test]
    fn no_placeholders() {
        assert_eq!(render("Quick Access", &[]), "Quick Access");
        assert_eq!(render("", &[("a", "b")]), "");
    }

    #[test]
    fn replacement_values_are_not_rescanned() {
        assert_eq!(
            render("{a} {b}", &[("a", "{b}"), ("b", "B")]),
            "{b} B"
        );
    }

    #[test]
    fn count_is_a_plain_decimal_value() {
        assert_eq!(render("{count} files", &[("count", "115")]), "115 files");
    }
}
