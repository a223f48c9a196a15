use indexmap::IndexMap;

/// Flat placeholder-name to literal-value mapping used for one render pass.
pub type ReplacementMap = IndexMap<String, String>;

/// Substitutes `{{key}}` tokens in a single left-to-right pass.
///
/// A key present in the map is replaced by its literal value; an unknown key
/// is left byte-for-byte verbatim. Substituted values are not re-scanned.
pub fn render_str(template: &str, replacements: &ReplacementMap) -> String {
    let mut output = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(start) = rest.find("{{") {
        output.push_str(&rest[..start]);
        let after = &rest[start + 2..];

        match after.find("}}") {
            Some(end) => {
                let key = &after[..end];
                match replacements.get(key) {
                    Some(value) => output.push_str(value),
                    None => {
                        output.push_str("{{");
                        output.push_str(key);
                        output.push_str("}}");
                    }
                }
                rest = &after[end + 2..];
            }
            // Unterminated token; emit the braces and keep scanning.
            None => {
                output.push_str("{{");
                rest = after;
            }
        }
    }

    output.push_str(rest);
    output
}
