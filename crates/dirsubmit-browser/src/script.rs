//! JavaScript snippets evaluated in the page to resolve locators.
//!
//! String literals are embedded through `serde_json`, which produces valid
//! JavaScript string syntax for any input.

use dirsubmit_core::Locator;

fn js_string(value: &str) -> String {
    serde_json::to_string(value).unwrap_or_else(|_| "\"\"".to_string())
}

/// Expression evaluating to an array of the elements a locator matches
fn matches_expr(locator: &Locator) -> String {
    match locator {
        Locator::Css { selector } => {
            format!("Array.from(document.querySelectorAll({}))", js_string(selector))
        }
        Locator::Text { tag, text } => format!(
            "Array.from(document.getElementsByTagName({tag})).filter(el => \
             (el.innerText || el.textContent || '').toLowerCase().includes({text}.toLowerCase()))",
            tag = js_string(tag),
            text = js_string(text),
        ),
    }
}

pub(crate) fn count_script(locator: &Locator) -> String {
    format!("(() => {}.length)()", matches_expr(locator))
}

/// Sets the value through the native setter so framework-controlled inputs
/// observe the change, then fires `input` and `change`. Evaluates to `false`
/// when nothing matched.
pub(crate) fn fill_script(locator: &Locator, value: &str) -> String {
    format!(
        r#"(() => {{
    const el = {matches}[0];
    if (!el) return false;
    el.scrollIntoView({{ block: 'center' }});
    el.focus();
    const value = {value};
    let proto = null;
    if (el instanceof HTMLTextAreaElement) proto = HTMLTextAreaElement.prototype;
    else if (el instanceof HTMLInputElement) proto = HTMLInputElement.prototype;
    const descriptor = proto ? Object.getOwnPropertyDescriptor(proto, 'value') : null;
    if (descriptor && descriptor.set) descriptor.set.call(el, value);
    else if (el.isContentEditable) el.textContent = value;
    else el.value = value;
    el.dispatchEvent(new Event('input', {{ bubbles: true }}));
    el.dispatchEvent(new Event('change', {{ bubbles: true }}));
    return true;
}})()"#,
        matches = matches_expr(locator),
        value = js_string(value),
    )
}

/// Snapshot used by the idle heuristic: ready state plus resource count
pub(crate) const IDLE_PROBE_SCRIPT: &str = "(() => ({ \
    ready: document.readyState === 'complete', \
    resources: performance.getEntriesByType('resource').length }))()";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_css_count_script_quotes_selector() {
        let script = count_script(&Locator::css(r#"input[name="product[name]"]"#));
        assert_eq!(
            script,
            r#"(() => Array.from(document.querySelectorAll("input[name=\"product[name]\"]")).length)()"#
        );
    }

    #[test]
    fn test_text_count_script_is_case_insensitive() {
        let script = count_script(&Locator::text("button", "Login"));
        assert!(script.contains(r#"getElementsByTagName("button")"#));
        assert!(script.contains(r#""Login".toLowerCase()"#));
    }

    #[test]
    fn test_fill_script_escapes_value() {
        let script = fill_script(
            &Locator::css("#Description"),
            "Don't run on schedule.\n\"Quoted\"",
        );
        assert!(script.contains(r#"const value = "Don't run on schedule.\n\"Quoted\"";"#));
        assert!(script.contains("dispatchEvent(new Event('input'"));
        assert!(script.contains("return false;"));
    }
}
