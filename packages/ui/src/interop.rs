//! JavaScript snippets for the components that reach past the DOM
//! abstraction: window scroll tracking, the shared reveal observer, and the
//! async clipboard.

/// Escape a string so it's safe to embed inside a JS string literal
/// (double-quoted).
pub(crate) fn js_string_literal(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('"');
    for c in s.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c < '\x20' => {
                out.push_str(&format!("\\u{:04x}", c as u32));
            }
            _ => out.push(c),
        }
    }
    out.push('"');
    out
}

/// Long-lived bridge reporting `window.scrollY` to Rust on every scroll
/// event, plus once at startup.
pub(crate) const SCROLL_BRIDGE_JS: &str = r#"(function() {
    var report = function() { dioxus.send(window.scrollY); };
    window.addEventListener('scroll', report, { passive: true });
    report();
})();"#;

/// One-shot clipboard write; resolves to `true` when the write succeeded.
pub(crate) fn clipboard_write_js(text: &str) -> String {
    format!(
        "navigator.clipboard.writeText({}).then(function() {{ dioxus.send(true); }}, function() {{ dioxus.send(false); }});",
        js_string_literal(text)
    )
}

/// Register one element with the shared reveal observer, creating the
/// observer and the visible-state style override on first use. Observed
/// elements are revealed once, then unobserved.
pub(crate) fn observe_reveal_js(element_id: &str) -> String {
    format!(
        r#"(function() {{
    if (!window.__revealObserver) {{
        var style = document.createElement('style');
        style.textContent = '.reveal.visible {{ opacity: 1 !important; transform: translateY(0) !important; }}';
        document.head.appendChild(style);
        window.__revealObserver = new IntersectionObserver(function(entries) {{
            entries.forEach(function(entry) {{
                if (entry.isIntersecting) {{
                    entry.target.classList.add('visible');
                    window.__revealObserver.unobserve(entry.target);
                }}
            }});
        }}, {{ threshold: 0.1, rootMargin: '0px 0px -50px 0px' }});
    }}
    var el = document.getElementById({id});
    if (el) {{ window.__revealObserver.observe(el); }}
}})();"#,
        id = js_string_literal(element_id)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_text_is_only_quoted() {
        assert_eq!(js_string_literal("hello"), "\"hello\"");
    }

    #[test]
    fn quotes_backslashes_and_newlines_are_escaped() {
        assert_eq!(js_string_literal("a\"b"), "\"a\\\"b\"");
        assert_eq!(js_string_literal("a\\b"), "\"a\\\\b\"");
        assert_eq!(js_string_literal("a\nb"), "\"a\\nb\"");
    }

    #[test]
    fn control_characters_become_unicode_escapes() {
        assert_eq!(js_string_literal("\x01"), "\"\\u0001\"");
    }

    #[test]
    fn clipboard_snippet_embeds_the_exact_text() {
        let js = clipboard_write_js("Xk9!");
        assert!(js.contains("writeText(\"Xk9!\")"));
    }

    #[test]
    fn reveal_snippet_carries_the_observer_options_and_id() {
        let js = observe_reveal_js("reveal-3");
        assert!(js.contains("threshold: 0.1"));
        assert!(js.contains("rootMargin: '0px 0px -50px 0px'"));
        assert!(js.contains("getElementById(\"reveal-3\")"));
    }
}
