use super::*;

#[test]
fn renders_headings_and_lists() {
    let out = render_markdown_html("## Results\n\n- 40% faster\n- zero downtime\n");
    assert!(out.contains("<h2>Results</h2>"));
    assert!(out.contains("<li>40% faster</li>"));
}

#[test]
fn strips_raw_html() {
    let out = render_markdown_html("before <script>alert(1)</script> after");
    assert!(!out.contains("<script>"));
    assert!(out.contains("before"));
}

#[test]
fn empty_input_renders_nothing() {
    assert_eq!(render_markdown_html(""), "");
}
