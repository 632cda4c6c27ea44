use markdown2html::markdown_to_html;
use serde::Deserialize;
use std::fs;

#[derive(Debug, Deserialize)]
struct Case {
    markdown: String,
    html: String,
    example: u32,
    section: String,
}

#[test]
fn conversion_cases() {
    let data = fs::read_to_string("tests/data/cases.json").expect("Failed to read cases.json");
    let cases: Vec<Case> = serde_json::from_str(&data).expect("Failed to parse cases.json");
    assert!(!cases.is_empty());

    let mut failures = Vec::new();

    for case in cases.iter() {
        let result = markdown_to_html(&case.markdown);
        if result != case.html {
            eprintln!("\n❌ Case {} failed ({})", case.example, case.section);
            eprintln!("  Input: {:?}", case.markdown);
            eprintln!("  Expected: {:?}", case.html);
            eprintln!("  Got: {:?}", result);
            failures.push(case.example);
        }
    }

    assert!(failures.is_empty(), "failed cases: {:?}", failures);
}

#[test]
fn output_is_balanced() {
    let inputs = [
        "- a\n* b\ntext",
        "* a\n- b\n- c",
        "para\n- a\ntext\n",
        "# h\n- a\n\n* b\nx\ny",
    ];

    for input in inputs {
        let html = markdown_to_html(input);
        for tag in ["ul", "ol", "p"] {
            let opens = html.lines().filter(|l| *l == format!("<{}>", tag)).count();
            let closes = html.lines().filter(|l| *l == format!("</{}>", tag)).count();
            assert_eq!(opens, closes, "unbalanced <{}> in {:?}", tag, html);
        }
    }
}
