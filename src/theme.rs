//! Theme support for the CV template
//!
//! A theme document maps style token names to CSS values, grouped into
//! sections for light and dark display modes plus a few decorative accent
//! categories. Tokens are rewritten to CSS custom properties (underscores
//! become hyphens, a category prefix is prepended) and the generated blocks
//! are spliced over the template's existing `:root` / `.dark` variable blocks.

use serde::Deserialize;
use serde_yaml::{Mapping, Value};

/// Literal scrollbar thumb color the stock template carries inline.
const THUMB_LITERAL: &str = "background: #313847;";
/// Literal scrollbar thumb hover color the stock template carries inline.
const THUMB_HOVER_LITERAL: &str = "background: #3f4759;";

/// A theme document with optional token sections.
///
/// Every section is a mapping of token name to CSS value; key order is
/// preserved through to the generated declarations. Unknown sections are
/// ignored. A section that is present but empty still produces its block,
/// matching the distinction between "no dark mode" and "dark mode with no
/// overrides".
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Theme {
    /// Variables scoped to `:root`.
    pub light: Option<Mapping>,
    /// Variables scoped to `.dark`.
    pub dark: Option<Mapping>,
    /// Scrollbar variables, emitted into `:root` with a `scrollbar-` prefix.
    pub scrollbar: Option<Mapping>,
    /// Decorative accents for light mode, emitted into `:root` with a
    /// `decorative-` prefix.
    pub decorative_light: Option<Mapping>,
    /// Decorative accents for dark mode, emitted into `.dark` with a
    /// `decorative-` prefix. Only applied when a `dark` section exists.
    pub decorative_dark: Option<Mapping>,
    /// Logo gradient stops, emitted into `:root` with a `logo-` prefix.
    pub logo_gradients: Option<Mapping>,
}

impl Theme {
    /// Parse a theme document from YAML text.
    ///
    /// An empty or comment-only document parses to a theme with no sections,
    /// which applies as a no-op.
    pub fn from_str(content: &str) -> Result<Self, serde_yaml::Error> {
        let theme: Option<Theme> = serde_yaml::from_str(content)?;
        Ok(theme.unwrap_or_default())
    }

    /// Render the `:root` and `.dark` CSS variable blocks for this theme.
    ///
    /// The root block collects light variables, then scrollbar, then
    /// decorative-light, then logo-gradient variables, in that order. The
    /// dark block collects dark variables then decorative-dark variables and
    /// follows the root block after a blank line. A theme with no applicable
    /// sections renders to the empty string.
    pub fn css_variables(&self) -> String {
        let mut root_lines = Vec::new();
        if let Some(light) = &self.light {
            push_declarations(&mut root_lines, light, "");
        }
        if let Some(scrollbar) = &self.scrollbar {
            push_declarations(&mut root_lines, scrollbar, "scrollbar-");
        }
        if let Some(decorative) = &self.decorative_light {
            push_declarations(&mut root_lines, decorative, "decorative-");
        }
        if let Some(gradients) = &self.logo_gradients {
            push_declarations(&mut root_lines, gradients, "logo-");
        }

        let mut blocks = Vec::new();
        if self.has_root_section() {
            blocks.push(format_block(":root", &root_lines));
        }
        if let Some(dark) = &self.dark {
            let mut dark_lines = Vec::new();
            push_declarations(&mut dark_lines, dark, "");
            if let Some(decorative) = &self.decorative_dark {
                push_declarations(&mut dark_lines, decorative, "decorative-");
            }
            blocks.push(format_block(".dark", &dark_lines));
        }
        blocks.join("\n\n")
    }

    /// Apply this theme to a template.
    ///
    /// Replaces the first `:root { … } .dark { … }` region with the generated
    /// variable blocks. If the template has no such region, or the theme has
    /// no sections at all, the template is returned unmodified. Independently,
    /// the two inline scrollbar thumb colors are rewritten to variable
    /// references when the theme defines `thumb` / `thumb_hover` under
    /// `scrollbar`.
    pub fn embed(&self, template: &str) -> String {
        if !self.has_sections() {
            return template.to_string();
        }

        let mut out = match find_variable_blocks(template) {
            Some(region) => {
                let mut spliced = String::with_capacity(template.len());
                spliced.push_str(&template[..region.start]);
                spliced.push_str(&self.css_variables());
                spliced.push_str(&template[region.end..]);
                spliced
            }
            None => template.to_string(),
        };

        if let Some(scrollbar) = &self.scrollbar {
            if scrollbar.get("thumb").is_some() {
                out = out.replace(THUMB_LITERAL, "background: var(--scrollbar-thumb);");
            }
            if scrollbar.get("thumb_hover").is_some() {
                out = out.replace(THUMB_HOVER_LITERAL, "background: var(--scrollbar-thumb-hover);");
            }
        }

        out
    }

    fn has_root_section(&self) -> bool {
        self.light.is_some()
            || self.scrollbar.is_some()
            || self.decorative_light.is_some()
            || self.logo_gradients.is_some()
    }

    fn has_sections(&self) -> bool {
        self.has_root_section() || self.dark.is_some() || self.decorative_dark.is_some()
    }
}

/// Append one `--name: value;` declaration line per section entry.
///
/// Token names are hyphenated (`thumb_hover` -> `thumb-hover`) and prefixed
/// with the section's category tag. Non-string keys are skipped.
fn push_declarations(lines: &mut Vec<String>, section: &Mapping, prefix: &str) {
    for (key, value) in section {
        let Some(key) = key.as_str() else { continue };
        let name = key.replace('_', "-");
        lines.push(format!("            --{}{}: {};", prefix, name, scalar_text(value)));
    }
}

fn scalar_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        _ => String::new(),
    }
}

/// Wrap declaration lines in a selector block, indented to sit inside the
/// template's `<style>` element.
fn format_block(selector: &str, lines: &[String]) -> String {
    format!("        {} {{\n{}\n        }}", selector, lines.join("\n"))
}

/// Locate the first `:root { … }` block immediately followed (whitespace
/// only) by a `.dark { … }` block, returning the byte range spanning both.
///
/// Both bodies must be non-empty and brace-free, mirroring the shape of the
/// variable blocks the stock template ships with.
fn find_variable_blocks(template: &str) -> Option<std::ops::Range<usize>> {
    let mut from = 0;
    while let Some(offset) = template[from..].find(":root") {
        let start = from + offset;
        if let Some(len) = match_block_pair(&template[start..]) {
            return Some(start..start + len);
        }
        from = start + 1;
    }
    None
}

/// Match `:root { … } .dark { … }` at the start of `text`, returning the
/// matched length.
fn match_block_pair(text: &str) -> Option<usize> {
    let pos = skip_whitespace(text, ":root".len());
    let pos = match_body(text, pos)?;
    let pos = skip_whitespace(text, pos);
    if !text[pos..].starts_with(".dark") {
        return None;
    }
    let pos = skip_whitespace(text, pos + ".dark".len());
    match_body(text, pos)
}

/// Match `{ … }` at `pos` where the body is non-empty and contains no closing
/// brace, returning the position just past the closing brace.
fn match_body(text: &str, pos: usize) -> Option<usize> {
    if !text[pos..].starts_with('{') {
        return None;
    }
    let body_start = pos + 1;
    let end = body_start + text[body_start..].find('}')?;
    if end == body_start {
        return None;
    }
    Some(end + 1)
}

fn skip_whitespace(text: &str, pos: usize) -> usize {
    pos + text[pos..].len() - text[pos..].trim_start().len()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const TEMPLATE: &str = "<style>\n        :root {\n            --bg: white;\n        }\n\n        .dark {\n            --bg: black;\n        }\n</style>";

    #[test]
    fn test_light_only_generates_root_block() {
        let theme = Theme::from_str("light:\n  bg_primary: '#ffffff'\n  text_color: '#111111'\n").unwrap();
        let css = theme.css_variables();
        assert_eq!(
            css,
            "        :root {\n            --bg-primary: #ffffff;\n            --text-color: #111111;\n        }"
        );
    }

    #[test]
    fn test_light_and_dark_blocks_separated_by_blank_line() {
        let theme = Theme::from_str("light:\n  bg: '#fff'\ndark:\n  bg: '#000'\n").unwrap();
        let css = theme.css_variables();
        assert_eq!(
            css,
            "        :root {\n            --bg: #fff;\n        }\n\n        .dark {\n            --bg: #000;\n        }"
        );
    }

    #[test]
    fn test_root_insertion_order_scrollbar_decorative_logo() {
        let theme = Theme::from_str(
            "light:\n  bg: '#fff'\nscrollbar:\n  thumb: '#112233'\ndecorative_light:\n  dot: '#aaa'\nlogo_gradients:\n  start: '#f00'\n",
        )
        .unwrap();
        let css = theme.css_variables();
        assert_eq!(
            css,
            "        :root {\n            --bg: #fff;\n            --scrollbar-thumb: #112233;\n            --decorative-dot: #aaa;\n            --logo-start: #f00;\n        }"
        );
    }

    #[test]
    fn test_decorative_dark_requires_dark_section() {
        let theme = Theme::from_str("light:\n  bg: '#fff'\ndecorative_dark:\n  dot: '#555'\n").unwrap();
        let css = theme.css_variables();
        assert!(!css.contains("decorative-dot"));
        assert!(!css.contains(".dark"));

        let theme = Theme::from_str("dark:\n  bg: '#000'\ndecorative_dark:\n  dot: '#555'\n").unwrap();
        let css = theme.css_variables();
        assert_eq!(
            css,
            "        .dark {\n            --bg: #000;\n            --decorative-dot: #555;\n        }"
        );
    }

    #[test]
    fn test_underscores_become_hyphens() {
        let theme = Theme::from_str("scrollbar:\n  thumb_hover_color: '#abc'\n").unwrap();
        assert!(theme.css_variables().contains("--scrollbar-thumb-hover-color: #abc;"));
    }

    #[test]
    fn test_embed_replaces_variable_region() {
        let theme = Theme::from_str("light:\n  bg: '#fafafa'\ndark:\n  bg: '#101010'\n").unwrap();
        let out = theme.embed(TEMPLATE);
        assert!(out.contains("--bg: #fafafa;"));
        assert!(out.contains("--bg: #101010;"));
        assert!(!out.contains("--bg: white;"));
        assert!(!out.contains("--bg: black;"));
        assert!(out.starts_with("<style>\n"));
        assert!(out.ends_with("\n</style>"));
    }

    #[test]
    fn test_embed_light_only_drops_dark_block() {
        let theme = Theme::from_str("light:\n  bg: '#fafafa'\n").unwrap();
        let out = theme.embed(TEMPLATE);
        assert!(out.contains("--bg: #fafafa;"));
        assert!(!out.contains(".dark"));
    }

    #[test]
    fn test_embed_without_variable_region_is_noop() {
        let theme = Theme::from_str("light:\n  bg: '#fafafa'\n").unwrap();
        let template = "<style>\n        .page { color: red; }\n</style>";
        assert_eq!(theme.embed(template), template);
    }

    #[test]
    fn test_embed_requires_adjacent_dark_block() {
        let theme = Theme::from_str("light:\n  bg: '#fafafa'\n").unwrap();
        // A rule between the blocks breaks the pattern.
        let template = ":root {\n  --a: 1;\n}\n.page { x }\n.dark {\n  --a: 2;\n}";
        assert_eq!(theme.embed(template), template);
    }

    #[test]
    fn test_embed_replaces_first_region_only() {
        let theme = Theme::from_str("light:\n  bg: '#fafafa'\n").unwrap();
        let template = ":root {\n a \n}\n.dark {\n b \n}\n:root {\n c \n}\n.dark {\n d \n}";
        let out = theme.embed(template);
        assert!(out.contains("--bg: #fafafa;"));
        assert!(out.contains(":root {\n c \n}"));
    }

    #[test]
    fn test_scrollbar_literal_rewrite() {
        let theme = Theme::from_str("scrollbar:\n  thumb: '#112233'\n  thumb_hover: '#445566'\n").unwrap();
        let template = "a { background: #313847; }\nb { background: #3f4759; }";
        let out = theme.embed(template);
        assert_eq!(
            out,
            "a { background: var(--scrollbar-thumb); }\nb { background: var(--scrollbar-thumb-hover); }"
        );
    }

    #[test]
    fn test_scrollbar_literal_rewrite_gated_on_keys() {
        let theme = Theme::from_str("scrollbar:\n  track: '#000000'\n").unwrap();
        let template = "a { background: #313847; }\nb { background: #3f4759; }";
        assert_eq!(theme.embed(template), template);
    }

    #[test]
    fn test_sectionless_theme_is_noop() {
        // Parsed but section-less: the template keeps its stock blocks.
        let theme = Theme::from_str("{}").unwrap();
        assert_eq!(theme.embed(TEMPLATE), TEMPLATE);
    }

    #[test]
    fn test_empty_document_parses_and_applies_as_noop() {
        let theme = Theme::from_str("").unwrap();
        assert_eq!(theme.embed(TEMPLATE), TEMPLATE);

        let theme = Theme::from_str("# colors to be decided\n").unwrap();
        assert_eq!(theme.embed(TEMPLATE), TEMPLATE);
    }

    #[test]
    fn test_unknown_sections_ignored() {
        let theme = Theme::from_str("light:\n  bg: '#fff'\nbanner:\n  text: hello\n").unwrap();
        assert!(!theme.css_variables().contains("banner"));
    }
}
