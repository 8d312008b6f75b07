use mdx_remote_client::{
    EvaluateRequest, MdxRemoteProps, SerializeOptions, evaluate, mdx_remote,
};
use serde_json::json;

#[test]
fn evaluate_success_carries_content_and_no_error() {
    let result = evaluate(EvaluateRequest {
        source: "---\ntitle: Post\n---\n\n# Hi\n".into(),
        options: SerializeOptions {
            parse_frontmatter: true,
            ..Default::default()
        },
    });

    assert!(result.error.is_none());
    assert!(result.content.is_some());
    assert_eq!(result.frontmatter, json!({ "title": "Post" }));
    assert!(result.scope.contains_key("toc"));
}

#[test]
fn evaluate_failure_carries_error_and_no_content() {
    let result = evaluate(EvaluateRequest {
        source: "<Unclosed>".into(),
        options: SerializeOptions::default(),
    });

    assert!(result.content.is_none());
    let error = result.error.expect("compile error expected");
    assert!(error.to_string().contains("Unclosed"));
}

#[test]
fn mdx_remote_returns_content_on_success() {
    let content = mdx_remote(MdxRemoteProps {
        source: "foo **bar**".into(),
        options: SerializeOptions::default(),
        on_error: None,
    })
    .unwrap();

    assert!(content.contains("function"));
}

#[test]
fn mdx_remote_propagates_error_without_fallback() {
    let err = mdx_remote(MdxRemoteProps {
        source: "<Unclosed>".into(),
        options: SerializeOptions::default(),
        on_error: None,
    })
    .unwrap_err();

    assert!(err.to_string().contains("Unclosed"));
}

#[test]
fn mdx_remote_renders_fallback_instead_of_failing() {
    let rendered = mdx_remote(MdxRemoteProps {
        source: "<Unclosed>".into(),
        options: SerializeOptions::default(),
        on_error: Some(Box::new(|error| format!("<pre>{error}</pre>"))),
    })
    .unwrap();

    assert!(rendered.starts_with("<pre>"));
    assert!(rendered.contains("Unclosed"));
}
