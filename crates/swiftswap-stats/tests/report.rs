//! Report shape and line-diff invariants

use swiftswap_stats::{
    LineStatus, StatisticsCalculator, compare_lines, split_lines,
};

#[test]
fn test_total_lines_is_max_of_both_sides() {
    let cases = [
        ("", "a\nb"),
        ("a\nb\nc", ""),
        ("a\nb", "a\nb"),
        ("x\n", "x\ny\nz\n"),
    ];

    for (original, converted) in cases {
        let stats = StatisticsCalculator::new().calculate(original, converted, "", None);
        let expected = split_lines(original).len().max(split_lines(converted).len());
        assert_eq!(stats.total_lines, expected, "{original:?} -> {converted:?}");
        assert_eq!(
            stats.modified_lines + stats.unchanged_lines + stats.lines_added + stats.lines_removed,
            expected
        );
    }
}

#[test]
fn test_class_rename_scenario() {
    let original = split_lines(r#"<div class="foo">"#);
    let converted = split_lines(r#"<div className="foo">"#);
    let result = compare_lines(&original, &converted);

    assert_eq!(result.len(), 1);
    assert_eq!(result[0].status, LineStatus::Modified);
    assert_eq!(result[0].changes.len(), 1);
}

#[test]
fn test_stats_serialize_camel_case() {
    let stats = StatisticsCalculator::new().calculate("<br>", "<br />", "React/JSX", None);
    let json = serde_json::to_value(&stats).unwrap();

    assert_eq!(json["totalLines"], 1);
    assert_eq!(json["tagModifications"], 1);
    assert_eq!(json["ruleSetApplied"], "React/JSX");
    assert_eq!(json["characterCount"]["before"], 4);
    assert_eq!(json["characterCount"]["after"], 6);
    assert!(json["processingTime"].is_number());
}

#[test]
fn test_line_comparison_serializes_missing_index_as_minus_one() {
    let result = compare_lines(&["a"], &["a", "b"]);
    let json = serde_json::to_value(&result[1]).unwrap();

    assert_eq!(json["originalIndex"], -1);
    assert_eq!(json["convertedIndex"], 1);
    assert_eq!(json["status"], "added");
    assert_eq!(json["changes"][0]["type"], "content");
    assert_eq!(json["changes"][0]["afterText"], "b");
}
