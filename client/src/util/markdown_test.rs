use super::*;

#[test]
fn renders_basic_markdown() {
    let html = render_markdown_html("Pay **before** resumption.\n\n- Term 1\n- Term 2");
    assert!(html.contains("<strong>before</strong>"));
    assert!(html.contains("<li>Term 1</li>"));
}

#[test]
fn drops_raw_html() {
    let html = render_markdown_html("Hello <script>alert(1)</script> world\n\n<div onclick=\"x\">block</div>");
    assert!(!html.contains("<script>"));
    assert!(!html.contains("onclick"));
    assert!(html.contains("Hello"));
}

#[test]
fn renders_tables() {
    let html = render_markdown_html("| Term | Fee |\n|---|---|\n| First | 50,000 |");
    assert!(html.contains("<table>"));
    assert!(html.contains("<td>50,000</td>"));
}

#[test]
fn empty_input_renders_nothing() {
    assert_eq!(render_markdown_html(""), "");
}

#[test]
fn script_link_targets_are_neutralized() {
    let html = render_markdown_html("[Pay here](javascript:alert(document.cookie))");
    assert!(!html.contains("javascript"));
    assert!(html.contains(r##"<a href="#">Pay here</a>"##));

    let html = render_markdown_html("![logo](data:text/html;base64,PHNjcmlwdD4=)");
    assert!(!html.contains("data:"));
}

#[test]
fn obfuscated_schemes_are_rejected() {
    assert!(!is_safe_url("JavaScript:alert(1)"));
    assert!(!is_safe_url(" java\tscript:alert(1)"));
    assert!(!is_safe_url("vbscript:msgbox"));
}

#[test]
fn web_mail_and_relative_links_survive() {
    let html = render_markdown_html("[Portal](https://pay.school.test/fees) or [email](mailto:bursar@school.test)");
    assert!(html.contains(r#"href="https://pay.school.test/fees""#));
    assert!(html.contains(r#"href="mailto:bursar@school.test""#));
    assert!(is_safe_url("/parent"));
    assert!(is_safe_url("receipts/2024?term=1:2"));
    assert!(is_safe_url("#bank-details"));
}
