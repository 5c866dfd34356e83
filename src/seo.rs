//! SEO embedding: page title, meta description, and the JSON-LD placeholder
//!
//! The title and description are derived from the resume's `basics` section.
//! JSON-LD itself is generated client-side by the template's own script, so
//! the `{{ JSON_LD }}` token only receives a marker comment.

use serde_yaml::Value;

/// Comment substituted for `{{ JSON_LD }}`; the schema is built in the
/// browser from the embedded CV data.
pub const JSON_LD_COMMENT: &str = "<!-- JSON-LD Schema generated dynamically by JavaScript -->";

/// Substitute the `{{ PAGE_TITLE }}`, `{{ META_DESCRIPTION }}` and
/// `{{ JSON_LD }}` tokens.
///
/// The title is `"{name} - {label}"` from `basics.name` and `basics.label`;
/// missing fields render as empty strings. The description is
/// `basics.intro.text` with double quotes escaped for attribute context and
/// whitespace runs collapsed to single spaces. Every occurrence of each token
/// is replaced.
pub fn embed_seo(template: &str, cv: &Value) -> String {
    let basics = cv.get("basics");

    let title = format!("{} - {}", scalar(basics, "name"), scalar(basics, "label"));

    let intro = basics
        .and_then(|b| b.get("intro"))
        .and_then(|i| i.get("text"))
        .and_then(Value::as_str)
        .unwrap_or("");
    let escaped = intro.replace('"', "&quot;");
    let description = escaped.split_whitespace().collect::<Vec<_>>().join(" ");

    template
        .replace("{{ PAGE_TITLE }}", &title)
        .replace("{{ META_DESCRIPTION }}", &description)
        .replace("{{ JSON_LD }}", JSON_LD_COMMENT)
}

/// Fetch a `basics` field as display text; scalar numbers and bools are
/// stringified, missing or non-scalar values render empty.
fn scalar(basics: Option<&Value>, key: &str) -> String {
    match basics.and_then(|b| b.get(key)) {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) => n.to_string(),
        Some(Value::Bool(b)) => b.to_string(),
        _ => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn cv(yaml: &str) -> Value {
        serde_yaml::from_str(yaml).unwrap()
    }

    #[test]
    fn test_title_from_name_and_label() {
        let cv = cv("basics:\n  name: Ada Lovelace\n  label: Engineer\n");
        let out = embed_seo("<title>{{ PAGE_TITLE }}</title>", &cv);
        assert_eq!(out, "<title>Ada Lovelace - Engineer</title>");
    }

    #[test]
    fn test_missing_fields_render_empty() {
        let cv = cv("basics:\n  name: Ada\n");
        let out = embed_seo("{{ PAGE_TITLE }}", &cv);
        assert_eq!(out, "Ada - ");

        let cv: Value = serde_yaml::from_str("{}").unwrap();
        let out = embed_seo("{{ PAGE_TITLE }}|{{ META_DESCRIPTION }}", &cv);
        assert_eq!(out, " - |");
    }

    #[test]
    fn test_description_escapes_quotes_and_collapses_whitespace() {
        let cv = cv("basics:\n  name: A\n  label: B\n  intro:\n    text: \"x \\\"y\\\"\\nz\"\n");
        let out = embed_seo("{{ PAGE_TITLE }}|{{ META_DESCRIPTION }}", &cv);
        assert_eq!(out, "A - B|x &quot;y&quot; z");
    }

    #[test]
    fn test_description_trims_surrounding_whitespace() {
        let cv = cv("basics:\n  intro:\n    text: \"  spaced   out\\n\\n  \"\n");
        let out = embed_seo("{{ META_DESCRIPTION }}", &cv);
        assert_eq!(out, "spaced out");
    }

    #[test]
    fn test_scalar_name_and_label_stringified() {
        let cv = cv("basics:\n  name: 42\n  label: true\n");
        let out = embed_seo("{{ PAGE_TITLE }}", &cv);
        assert_eq!(out, "42 - true");
    }

    #[test]
    fn test_json_ld_token_gets_marker_comment() {
        let cv = cv("basics: {}");
        let out = embed_seo("{{ JSON_LD }}", &cv);
        assert_eq!(out, JSON_LD_COMMENT);
    }

    #[test]
    fn test_all_occurrences_replaced() {
        let cv = cv("basics:\n  name: A\n  label: B\n");
        let out = embed_seo("{{ PAGE_TITLE }} and {{ PAGE_TITLE }}", &cv);
        assert_eq!(out, "A - B and A - B");
    }
}
