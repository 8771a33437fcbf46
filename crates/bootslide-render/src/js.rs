//! Small helpers for embedding ids and strings in inline scripts.

const SELECTOR_META: &str = r##"!"#$%&'()*+,./:;<=>?@[\]^`{|}~"##;

/// Escapes CSS selector metacharacters in an element id, as jQuery expects for `#id`.
pub fn escape_selector_id(id: &str) -> String {
    let mut out = String::with_capacity(id.len() + 4);
    for ch in id.chars() {
        if SELECTOR_META.contains(ch) {
            out.push('\\');
        }
        out.push(ch);
    }
    out
}

/// A JavaScript string literal for `text`.
pub fn string_literal(text: &str) -> String {
    // JSON strings are valid JS string literals.
    serde_json::Value::from(text).to_string()
}

/// A JavaScript string literal holding the `#id` selector for `id`.
pub fn id_selector(id: &str) -> String {
    string_literal(&format!("#{}", escape_selector_id(id)))
}

/// A JavaScript string literal holding the `input[name="..."]` selector for a form field.
pub fn input_name_selector(name: &str) -> String {
    let quoted = name.replace('\\', "\\\\").replace('"', "\\\"");
    string_literal(&format!("input[name=\"{quoted}\"]"))
}

/// Guards against a literal `</script` closing the surrounding element early.
pub fn guard_script_body(body: &str) -> String {
    body.replace("</", "<\\/")
}
