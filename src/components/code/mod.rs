//! Source snippets and the example panels every gallery page is built from.

use leptos::prelude::*;

stylance::import_crate_style!(css, "src/components/code/code.module.css");

/// Language assumed when none is given.
pub const DEFAULT_LANGUAGE: &str = "rust";

/// A `<pre><code>` block.
///
/// The code is inserted as text, so markup in it is escaped. An empty
/// snippet still renders the `<code>` element.
#[component]
pub fn CodeBlock(
    #[prop(into)] code: String,
    #[prop(optional)] language: Option<&'static str>,
    /// Extra class on the outer `<pre>`.
    #[prop(optional, into)]
    class: Option<String>,
) -> impl IntoView {
    let language = language.unwrap_or(DEFAULT_LANGUAGE);
    let outer = match class {
        Some(extra) => format!("{} {}", css::block, extra),
        None => css::block.to_string(),
    };

    view! {
        <pre class=outer data-language=language>
            <code class=format!("language-{}", language)>{code}</code>
        </pre>
    }
}

/// A titled demo: description, live preview and its source.
#[component]
pub fn CodeExample(
    #[prop(into)] title: String,
    #[prop(optional, into)] description: Option<String>,
    #[prop(into)] code: String,
    #[prop(optional)] language: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <section class=css::example>
            <h2 class=css::exampleTitle>{title}</h2>
            {description.map(|d| view! { <p class=css::description>{d}</p> })}
            <div class=css::preview>{children()}</div>
            <details class=css::source>
                <summary>"Source"</summary>
                {match language {
                    Some(lang) => view! { <CodeBlock code=code language=lang /> }.into_any(),
                    None => view! { <CodeBlock code=code /> }.into_any(),
                }}
            </details>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::render_at;

    #[test]
    fn test_default_language() {
        let html = render_at("/", || view! { <CodeBlock code="let x = 1;" /> });
        assert!(html.contains("language-rust"));
        assert!(html.contains("let x = 1;"));
    }

    #[test]
    fn test_language_and_class() {
        let html = render_at("/", || {
            view! { <CodeBlock code="[dependencies]" language="toml" class="wide" /> }
        });
        assert!(html.contains("language-toml"));
        assert!(html.contains("wide"));
    }

    #[test]
    fn test_code_is_escaped() {
        let html = render_at("/", || view! { <CodeBlock code="<script>alert(1)</script>" /> });
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
    }

    #[test]
    fn test_empty_code_still_has_element() {
        let html = render_at("/", || view! { <CodeBlock code="" /> });
        assert!(html.contains("<code"));
        assert!(html.contains("</code>"));
    }

    #[test]
    fn test_example_panel() {
        let html = render_at("/", || {
            view! {
                <CodeExample title="Basic" description="A plain grid" code="<DataGrid />">
                    <p>"preview"</p>
                </CodeExample>
            }
        });
        assert!(html.contains("Basic"));
        assert!(html.contains("A plain grid"));
        assert!(html.contains("preview"));
        assert!(html.contains("&lt;DataGrid /&gt;"));
    }
}
