// Object graph edges, names and rebuild behavior through the document API

use odf_editor::{ObjectGraph, OdfDocument, PanelFormat};

const NEW_FORMAT: &str = "\
[Organ]
ChurchName=St. Mary
NumberOfManuals=2
[Manual000]
Name=Pedal
NumberOfStops=1
Stop001=2
[Manual001]
Name=Great
NumberOfCouplers=1
Coupler001=1
[Coupler001]
Name=Great to Pedal
[Stop002]
Name=Subbass
WindchestGroup=1
[WindchestGroup001]
Name=Pedal chest
[Panel000]
NumberOfGUIElements=1
[Panel000Element001]
Type=Stop
Stop=2
[Panel001]
Name=Extra
[Panel001Image001]
Image=images\\console\\wood.bmp
[Rank001]
Name=Orphan
";

#[test]
fn test_naming_containment() {
    let doc = OdfDocument::from_text(NEW_FORMAT);
    assert_eq!(
        doc.children("Organ"),
        vec!["Manual000", "Manual001", "Panel000", "Panel001", "WindchestGroup001"]
    );
    assert_eq!(doc.parents("Panel001Image001"), vec!["Panel001"]);
    assert_eq!(doc.parents("Panel000Element001"), vec!["Panel000"]);
}

#[test]
fn test_pedal_manual_is_child_of_root() {
    let doc = OdfDocument::from_text(NEW_FORMAT);
    assert_eq!(doc.parents("Manual000"), vec!["Organ"]);
}

#[test]
fn test_reference_edges() {
    let doc = OdfDocument::from_text(NEW_FORMAT);
    // numeric suffix reference
    assert_eq!(doc.children("Manual001"), vec!["Coupler001"]);
    // windchest group is the parent of the object referencing it
    assert_eq!(doc.children("WindchestGroup001"), vec!["Stop002"]);
    // panel element referencing a main panel object
    assert_eq!(
        doc.parents("Stop002"),
        vec!["Manual000", "Panel000Element001", "WindchestGroup001"]
    );
}

#[test]
fn test_unreferenced_object_has_no_parent() {
    let doc = OdfDocument::from_text(NEW_FORMAT);
    assert!(doc.parents("Rank001").is_empty());
    assert!(doc.parents("Organ").is_empty());
}

#[test]
fn test_object_names() {
    let doc = OdfDocument::from_text(NEW_FORMAT);
    assert_eq!(doc.object_names("Organ"), Some("St. Mary"));
    assert_eq!(doc.object_names("Panel000Element001"), Some("Stop"));
    // only the file name of an image path is kept
    assert_eq!(doc.object_names("Panel001Image001"), Some("wood.bmp"));
    assert_eq!(doc.object_names("Missing001"), None);
}

#[test]
fn test_panel_format_follows_edits() {
    let mut doc = OdfDocument::from_text(NEW_FORMAT);
    assert_eq!(doc.panel_format(), PanelFormat::New);
    assert_eq!(doc.parent_panel("Stop002"), Some("Panel000".to_string()));

    doc.remove_section("Panel000").unwrap();
    assert_eq!(doc.panel_format(), PanelFormat::Old);
    assert_eq!(doc.parent_panel("Stop002"), Some("Organ".to_string()));
    assert_eq!(doc.parent_panel("Panel001Image001"), Some("Panel001".to_string()));
    assert_eq!(doc.parent_panel("Panel001"), None);
}

#[test]
fn test_rebuild_is_idempotent() {
    let doc = OdfDocument::from_text(NEW_FORMAT);
    let first = ObjectGraph::build(doc.lines());
    let second = ObjectGraph::build(doc.lines());
    assert_eq!(first, second);
    assert_eq!(&first, doc.graph());
}

#[test]
fn test_edges_follow_section_edit() {
    let mut doc = OdfDocument::from_text(NEW_FORMAT);
    doc.set_section("Manual001", &["Name=Great".to_string()]).unwrap();
    assert!(doc.children("Manual001").is_empty());
    assert!(doc.parents("Coupler001").is_empty());
}

#[test]
fn test_graph_json() {
    let doc = OdfDocument::from_text(NEW_FORMAT);
    let json = doc.graph_json().unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["Stop002"]["names"], "Subbass");
    assert_eq!(value["Manual001"]["children"][0], "Coupler001");
    assert_eq!(value["Organ"]["header_line"], 0);
}
