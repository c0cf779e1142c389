// Shared prompt-building utilities.
// Each service that needs LLM calls defines its own prompts.rs alongside it;
// this file holds the substitution helper they all use.

/// Fills `{name}` placeholders in `template` with the matching value from `vars`.
///
/// Substitution is single-pass: text inserted from `vars` is never rescanned,
/// so a résumé that happens to contain `{job_description}` stays verbatim.
/// Unknown placeholders are left untouched.
pub fn fill_template(template: &str, vars: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after_open = &rest[open + 1..];

        let replaced = after_open.find('}').and_then(|close| {
            let name = &after_open[..close];
            vars.iter()
                .find(|(key, _)| *key == name)
                .map(|(_, value)| (*value, close))
        });

        match replaced {
            Some((value, close)) => {
                out.push_str(value);
                rest = &after_open[close + 1..];
            }
            None => {
                out.push('{');
                rest = after_open;
            }
        }
    }

    out.push_str(rest);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fill_template_replaces_all_occurrences() {
        let out = fill_template("{a} and {b} and {a}", &[("a", "x"), ("b", "y")]);
        assert_eq!(out, "x and y and x");
    }

    #[test]
    fn test_fill_template_does_not_rescan_inserted_values() {
        let out = fill_template(
            "R: {resume_text}\nJ: {job_description}",
            &[("resume_text", "see {job_description}"), ("job_description", "Rust dev")],
        );
        assert_eq!(out, "R: see {job_description}\nJ: Rust dev");
    }

    #[test]
    fn test_fill_template_leaves_unknown_placeholders() {
        let out = fill_template("{known} {unknown} {", &[("known", "k")]);
        assert_eq!(out, "k {unknown} {");
    }

    #[test]
    fn test_fill_template_handles_non_ascii() {
        let out = fill_template("Résumé: {r} ✓", &[("r", "naïve")]);
        assert_eq!(out, "Résumé: naïve ✓");
    }
}
