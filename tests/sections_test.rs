// Section ranges, attribute lookups and search

use odf_editor::OdfDocument;

const SAMPLE: &str = "\
; header comment

[Organ]
ChurchName=Test
; inline comment
NumberOfManuals=1

[Manual001]
Name=Great
NumberOfStops=2
Stop001=1
Stop002=2
[Stop001]
Name=Flute
[Stop002]
Name=Principal
";

#[test]
fn test_line_ranges() {
    let doc = OdfDocument::from_text(SAMPLE);
    assert_eq!(doc.line_range("Header"), 0..2);
    assert_eq!(doc.line_range("Organ"), 2..7);
    assert_eq!(doc.line_range("Stop002"), 14..16);
    assert_eq!(doc.line_range("Stop009"), 0..0);
}

#[test]
fn test_get_section() {
    let doc = OdfDocument::from_text(SAMPLE);
    assert_eq!(doc.get_section("Stop001"), vec!["[Stop001]", "Name=Flute"]);
    assert_eq!(doc.get_section("Header"), vec!["; header comment", ""]);
    assert!(doc.get_section("Unknown").is_empty());
}

#[test]
fn test_attribute_value() {
    let doc = OdfDocument::from_text(SAMPLE);
    assert_eq!(doc.attribute_value("Manual001", "NumberOfStops"), Some("2"));
    assert_eq!(doc.attribute_value("Manual001", "Missing"), None);
    // attributes of the next section are not visible
    assert_eq!(doc.attribute_value("Stop001", "Stop002"), None);
}

#[test]
fn test_parent_manual() {
    let doc = OdfDocument::from_text(SAMPLE);
    assert_eq!(doc.parent_manual("Stop002"), Some("Manual001".to_string()));
    assert_eq!(doc.parent_manual("Stop003"), None);
}

#[test]
fn test_search() {
    let doc = OdfDocument::from_text(SAMPLE);
    assert_eq!(
        doc.search("Name="),
        vec![
            "Manual001 : Name=Great",
            "Organ : ChurchName=Test",
            "Stop001 : Name=Flute",
            "Stop002 : Name=Principal",
        ]
    );
    assert_eq!(doc.search("header"), vec!["Header : ; header comment"]);
    assert!(doc.search("").is_empty());
}

#[test]
fn test_remove_then_add_section() {
    let mut doc = OdfDocument::from_text(SAMPLE);
    doc.remove_section("Stop001").unwrap();
    assert_eq!(doc.line_range("Stop002"), 12..14);
    assert!(doc.parents("Stop001").is_empty());

    let uid = doc
        .set_section("", &["[Stop001]".to_string(), "Name=Bourdon".to_string()])
        .unwrap();
    assert_eq!(uid, "Stop001");
    assert_eq!(doc.parents("Stop001"), vec!["Manual001"]);
    assert_eq!(doc.lines().last().map(String::as_str), Some("Name=Bourdon"));
}
