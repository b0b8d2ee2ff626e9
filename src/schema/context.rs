//! Check context
//!
//! [`CheckContext`] carries everything a validation pass reads (lines,
//! graph, panel format, options) plus the diagnostics it writes.
//! [`RecordCheck`] binds the context to one object and its pending
//! attributes; rule functions only talk to a `RecordCheck`.

use std::path::{Path, PathBuf};

use crate::config::CheckOptions;
use crate::defaults::{DEFAULT_PANEL_HEIGHT, DEFAULT_PANEL_WIDTH};
use crate::diagnostics::Diagnostics;
use crate::structure::graph::ObjectGraph;
use crate::structure::sections::{attribute_value, parent_manual, parent_panel, PanelFormat};
use crate::utils::bitmap;
use crate::utils::ids::{index_str, parse_digits, split_index, zero_pad};

use super::attribute::{AttrType, PendingAttribute, PendingAttributes};
use super::values;

/// Shared state of a validation pass
pub struct CheckContext<'a> {
    pub lines: &'a [String],
    pub graph: &'a ObjectGraph,
    pub format: PanelFormat,
    pub options: &'a CheckOptions,
    /// Directory file attributes are relative to
    pub base_dir: Option<&'a Path>,
    pub diagnostics: &'a mut Diagnostics,
}

impl<'a> CheckContext<'a> {
    /// Value of an attribute of any object, read from the line store
    pub fn lookup(&self, uid: &str, name: &str) -> Option<&'a str> {
        let lines: &'a [String] = self.lines;
        attribute_value(lines, self.graph, uid, name)
    }

    /// Attribute value of any object when it is written with digits only
    pub fn lookup_digits(&self, uid: &str, name: &str) -> Option<i64> {
        self.lookup(uid, name).and_then(parse_digits)
    }

    /// Path of a file attribute value, `\` separators accepted
    pub fn resolve_file(&self, value: &str) -> PathBuf {
        let relative = value.replace('\\', "/");
        match self.base_dir {
            Some(dir) => dir.join(relative),
            None => PathBuf::from(relative),
        }
    }
}

/// Object type targeted by a reference attribute
///
/// `Switch002` -> `Switch`, `ManualNumber` -> `Manual`,
/// `Stop003Manual` -> `Manual`, `Pipe015WindchestGroup` -> `WindchestGroup`.
pub fn reference_target_type(name: &str) -> &str {
    let base = split_index(name).map_or(name, |(prefix, _)| prefix);
    if let Some(stripped) = base.strip_suffix("Number") {
        stripped
    } else if base.ends_with("Manual") {
        "Manual"
    } else if base.ends_with("WindchestGroup") {
        "WindchestGroup"
    } else {
        base
    }
}

/// UID targeted by a reference attribute and its value
pub fn reference_target(name: &str, value: &str) -> String {
    let number = value.trim_start_matches(['+', '-']);
    format!("{}{}", reference_target_type(name), zero_pad(number))
}

/// Checks of one object
pub struct RecordCheck<'c, 'a> {
    uid: String,
    pending: PendingAttributes,
    ctx: &'c mut CheckContext<'a>,
}

impl<'c, 'a> RecordCheck<'c, 'a> {
    pub fn new(ctx: &'c mut CheckContext<'a>, uid: &str, pending: PendingAttributes) -> Self {
        Self {
            uid: uid.to_string(),
            pending,
            ctx,
        }
    }

    pub fn uid(&self) -> &str {
        &self.uid
    }

    pub fn format(&self) -> PanelFormat {
        self.ctx.format
    }

    pub fn is_new_format(&self) -> bool {
        self.ctx.format == PanelFormat::New
    }

    pub fn exists(&self, uid: &str) -> bool {
        self.ctx.graph.contains(uid)
    }

    /// Attributes not consumed by any check
    pub fn into_remaining(self) -> PendingAttributes {
        self.pending
    }

    /// Value of a pending attribute without checking it
    pub fn peek(&self, name: &str) -> Option<&str> {
        self.pending.peek(name)
    }

    /// Value of an attribute of any object, read from the line store
    pub fn lookup(&self, uid: &str, name: &str) -> Option<&'a str> {
        self.ctx.lookup(uid, name)
    }

    pub fn lookup_digits(&self, uid: &str, name: &str) -> Option<i64> {
        self.ctx.lookup_digits(uid, name)
    }

    /// `Error in <uid> : <text>`
    pub fn error(&mut self, text: impl std::fmt::Display) {
        self.ctx.diagnostics.error_in(&self.uid, text);
    }

    /// Message not tied to the object
    pub fn report(&mut self, message: impl Into<String>) {
        self.ctx.diagnostics.add(message);
    }

    /// Check an attribute and consume it
    ///
    /// Returns the value when the attribute is present, valid and not empty.
    /// An out-of-range integer is reported and returned clamped to the range.
    pub fn check(&mut self, name: &str, attr_type: AttrType, required: bool) -> Option<String> {
        if let Some((min, max)) = attr_type.bounds() {
            if max < min {
                let message = format!(
                    "INTERNAL ERROR : attribute check called with max < min for {} / {} : min={}, max={}",
                    self.uid, name, min, max
                );
                self.report(message);
                return None;
            }
        }

        let Some(attribute) = self.pending.take(name) else {
            if required {
                let text = format!("the attribute {} is expected, it is missing or misspelled", name);
                self.error(text);
            }
            return None;
        };
        self.ctx.diagnostics.count_checked();

        let value = self.validate(name, &attribute, attr_type)?;
        if value.is_empty() {
            None
        } else {
            Some(value)
        }
    }

    fn validate(&mut self, name: &str, attribute: &PendingAttribute, attr_type: AttrType) -> Option<String> {
        let value = attribute.value.as_str();
        let invalid = |what: &str| format!("the assigned value is not a valid {}", what);

        let problem = match attr_type {
            AttrType::Integer { min, max } => {
                return match values::parse_integer(value) {
                    Some(n) if (min..=max).contains(&n) => Some(n.to_string()),
                    parsed => {
                        self.fault(attribute, format!(
                            "the assigned value must be an integer in the range [{} - {}]",
                            min, max
                        ));
                        parsed.map(|n| n.clamp(min, max).to_string())
                    }
                };
            }
            AttrType::Float { min, max } => match values::parse_decimal(value) {
                Some(x) if x >= min as f64 && x <= max as f64 => None,
                _ => Some(format!(
                    "the assigned value must be an integer or decimal in the range [{} - {}]",
                    min, max
                )),
            },
            AttrType::Boolean => {
                if values::is_boolean(value) {
                    return Some(value.to_uppercase());
                }
                Some("the assigned value must be Y or N (boolean attribute)".to_string())
            }
            AttrType::Text => None,
            AttrType::Colour => (!values::is_colour(value)).then(|| invalid("colour")),
            AttrType::FontSize => (!values::is_font_size(value)).then(|| invalid("font size")),
            AttrType::PanelSize => (!values::is_panel_size(value)).then(|| invalid("panel size")),
            AttrType::CouplerType => (!values::is_coupler_type(value)).then(|| invalid("coupler type")),
            AttrType::ElementType => {
                (!values::is_element_type(value)).then(|| invalid("panel element type"))
            }
            AttrType::TremulantType => {
                (!values::is_tremulant_type(value)).then(|| invalid("tremulant type"))
            }
            AttrType::PistonType => (!values::is_piston_type(value)).then(|| invalid("piston type")),
            AttrType::DrawstopFunction => {
                (!values::is_drawstop_function(value)).then(|| invalid("drawstop function"))
            }
            AttrType::FileName => {
                (!self.file_found(value)).then(|| "file does not exist".to_string())
            }
            AttrType::ObjectRef => {
                let target = reference_target(name, value);
                (!self.exists(&target)).then(|| format!("the object {} does not exist", target))
            }
            AttrType::PipeWave => {
                if values::is_wave_file(value) {
                    (!self.file_found(value)).then(|| "file not found".to_string())
                } else if value.starts_with("REF:") {
                    (!values::is_pipe_reference(value))
                        .then(|| "wrong pipe referencing, expected REF:999:999:999".to_string())
                } else if value != "EMPTY" {
                    Some("wrong pipe definition".to_string())
                } else {
                    None
                }
            }
        };

        match problem {
            Some(text) => {
                self.fault(attribute, text);
                None
            }
            None => Some(value.to_string()),
        }
    }

    fn fault(&mut self, attribute: &PendingAttribute, text: String) {
        self.ctx.diagnostics.error_at(&self.uid, &attribute.line, text);
    }

    /// True when file checking is off or the file exists
    fn file_found(&self, value: &str) -> bool {
        !self.ctx.options.check_file_names || self.ctx.resolve_file(value).is_file()
    }

    pub fn integer(&mut self, name: &str, min: i64, max: i64, required: bool) -> Option<i64> {
        self.check(name, AttrType::Integer { min, max }, required)
            .and_then(|v| values::parse_integer(&v))
    }

    /// Integer attribute whose value is kept only when non-negative
    pub fn natural(&mut self, name: &str, min: i64, max: i64, required: bool) -> Option<i64> {
        self.integer(name, min, max, required).filter(|n| *n >= 0)
    }

    pub fn float(&mut self, name: &str, min: i64, max: i64, required: bool) -> Option<String> {
        self.check(name, AttrType::Float { min, max }, required)
    }

    /// `Some(true)` for `Y`, `Some(false)` for `N`
    pub fn boolean(&mut self, name: &str, required: bool) -> Option<bool> {
        self.check(name, AttrType::Boolean, required).map(|v| v == "Y")
    }

    pub fn text(&mut self, name: &str, required: bool) -> Option<String> {
        self.check(name, AttrType::Text, required)
    }

    pub fn file(&mut self, name: &str, required: bool) -> Option<String> {
        self.check(name, AttrType::FileName, required)
    }

    pub fn object_ref(&mut self, name: &str, required: bool) -> Option<String> {
        self.check(name, AttrType::ObjectRef, required)
    }

    /// Required references `<prefix>001` .. `<prefix><count>`
    pub fn references(&mut self, prefix: &str, count: i64) {
        for index in 1..=count {
            self.object_ref(&format!("{}{}", prefix, index_str(index)), true);
        }
    }

    /// `NumberOfX` attribute reconciled with the objects of type `object_type`
    pub fn count(
        &mut self,
        name: &str,
        object_type: &str,
        min: i64,
        max: i64,
        required: bool,
    ) -> Option<i64> {
        let declared = self.natural(name, min, max, required)?;
        self.reconcile(name, declared, object_type);
        Some(declared)
    }

    /// Compare a declared count with the objects defined in the document
    ///
    /// Index 000 only counts for manuals (the pedal); other `000` objects
    /// except the main panel are reported.
    pub fn reconcile(&mut self, name: &str, declared: i64, object_type: &str) {
        let zero_objects: Vec<String> = self
            .ctx
            .graph
            .indexed_of_type(object_type)
            .filter(|&(_, index)| index == 0)
            .map(|(uid, _)| uid.to_string())
            .collect();
        if object_type != "Manual" && object_type != "Panel" {
            for uid in &zero_objects {
                self.report(format!(
                    "Error : the object identifier {} cannot have the index 000",
                    uid
                ));
            }
        }

        let count = self.ctx.graph.count_of_type(object_type, object_type == "Manual");
        if count as i64 != declared {
            let text = format!(
                "{}={} whereas {} {} object(s) defined",
                name, declared, count, object_type
            );
            self.error(text);
        }
    }

    /// Number of objects `<type>NNN` with an index above 000
    pub fn objects_of_type(&self, object_type: &str) -> i64 {
        self.ctx.graph.count_of_type(object_type, false) as i64
    }

    /// Screen size of the panel displaying this object
    pub fn panel_size(&self) -> (i64, i64) {
        match parent_panel(&self.uid, self.ctx.format) {
            Some(panel) => (
                self.lookup_digits(&panel, "DispScreenSizeHoriz")
                    .unwrap_or(DEFAULT_PANEL_WIDTH),
                self.lookup_digits(&panel, "DispScreenSizeVert")
                    .unwrap_or(DEFAULT_PANEL_HEIGHT),
            ),
            None => (DEFAULT_PANEL_WIDTH, DEFAULT_PANEL_HEIGHT),
        }
    }

    /// Pixel size of an image attribute value, or `fallback` when files are not inspected
    pub fn image_size(&self, file: &str, fallback: (i64, i64)) -> (i64, i64) {
        if !self.ctx.options.check_file_names {
            return fallback;
        }
        bitmap::image_size(&self.ctx.resolve_file(file)).unwrap_or(fallback)
    }

    /// Manual listing this object
    pub fn parent_manual(&self) -> Option<String> {
        parent_manual(self.ctx.lines, self.ctx.graph, &self.uid)
    }

    /// Position and size attributes bounded by the panel
    ///
    /// Returns the maximal width and height of the object: its `Width` and
    /// `Height` when given, else the panel size.
    pub fn placement(&mut self) -> (i64, i64) {
        let (panel_width, panel_height) = self.panel_size();
        self.integer("PositionX", 0, panel_width, false);
        self.integer("PositionY", 0, panel_height, false);
        let width = self.natural("Width", 0, panel_width, false);
        let height = self.natural("Height", 0, panel_height, false);
        (width.unwrap_or(panel_width), height.unwrap_or(panel_height))
    }

    /// `TileOffsetX` / `TileOffsetY` within a bitmap
    pub fn tile_offset(&mut self, (bitmap_width, bitmap_height): (i64, i64)) {
        self.integer("TileOffsetX", 0, bitmap_width, false);
        self.integer("TileOffsetY", 0, bitmap_height, false);
    }

    /// `<prefix>Left/Top/Width/Height` rectangle within the object
    ///
    /// Returns the checked width and height.
    pub fn rectangle(&mut self, prefix: &str, (max_width, max_height): (i64, i64)) -> (Option<i64>, Option<i64>) {
        self.integer(&format!("{}Left", prefix), 0, max_width, false);
        self.integer(&format!("{}Top", prefix), 0, max_height, false);
        let width = self.natural(&format!("{}Width", prefix), 0, max_width, false);
        let height = self.natural(&format!("{}Height", prefix), 0, max_height, false);
        (width, height)
    }

    /// Text rectangle and `TextBreakWidth` (bounded by the text width or `default_break`)
    pub fn text_area(&mut self, max: (i64, i64), default_break: i64) {
        let (text_width, _) = self.rectangle("TextRect", max);
        self.integer("TextBreakWidth", 0, text_width.unwrap_or(default_break), false);
    }

    /// Common label text attributes
    pub fn label_text(&mut self) {
        self.check("DispLabelColour", AttrType::Colour, false);
        self.check("DispLabelFontSize", AttrType::FontSize, false);
        self.text("DispLabelFontName", false);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Fixture {
        lines: Vec<String>,
        graph: ObjectGraph,
        options: CheckOptions,
        diagnostics: Diagnostics,
    }

    impl Fixture {
        fn new(text: &str) -> Self {
            let lines: Vec<String> = text.lines().map(str::to_string).collect();
            let graph = ObjectGraph::build(&lines);
            Self {
                lines,
                graph,
                options: CheckOptions::default(),
                diagnostics: Diagnostics::new(),
            }
        }

        fn run(&mut self, uid: &str, f: impl FnOnce(&mut RecordCheck)) -> PendingAttributes {
            let section =
                crate::structure::sections::section_lines(&self.lines, &self.graph, uid).to_vec();
            let mut ctx = CheckContext {
                lines: &self.lines,
                graph: &self.graph,
                format: PanelFormat::Old,
                options: &self.options,
                base_dir: None,
                diagnostics: &mut self.diagnostics,
            };
            let mut record = RecordCheck::new(&mut ctx, uid, PendingAttributes::from_lines(&section));
            f(&mut record);
            record.into_remaining()
        }
    }

    #[test]
    fn test_reference_target() {
        assert_eq!(reference_target("Switch002", "12"), "Switch012");
        assert_eq!(reference_target("ManualNumber", "2"), "Manual002");
        assert_eq!(reference_target("Stop003Manual", "1"), "Manual001");
        assert_eq!(reference_target("CouplerNumber004", "-3"), "Coupler003");
        assert_eq!(reference_target("Pipe015WindchestGroup", "1"), "WindchestGroup001");
        assert_eq!(reference_target("WindchestGroup", "7"), "WindchestGroup007");
    }

    #[test]
    fn test_integer_in_range_is_consumed() {
        let mut fx = Fixture::new("[Stop001]\nGain=5\nName=Flute\n");
        let left = fx.run("Stop001", |r| {
            assert_eq!(r.integer("Gain", 0, 10, true), Some(5));
        });
        assert_eq!(left.len(), 1);
        assert!(fx.diagnostics.is_empty());
        assert_eq!(fx.diagnostics.checked_attributes(), 1);
    }

    #[test]
    fn test_integer_out_of_range_is_clamped() {
        let mut fx = Fixture::new("[Stop001]\nGain=50\nTrackerDelay=-5\n");
        fx.run("Stop001", |r| {
            assert_eq!(r.integer("Gain", 0, 10, true), Some(10));
            assert_eq!(r.integer("TrackerDelay", 0, 10, true), Some(0));
        });
        assert_eq!(
            fx.diagnostics.messages()[0],
            "Error in Stop001 / Gain=50 : the assigned value must be an integer in the range [0 - 10]"
        );
        assert_eq!(fx.diagnostics.len(), 2);
    }

    #[test]
    fn test_not_an_integer() {
        let mut fx = Fixture::new("[Stop001]\nGain=abc\n");
        fx.run("Stop001", |r| assert_eq!(r.integer("Gain", 0, 10, true), None));
        assert_eq!(fx.diagnostics.len(), 1);
    }

    #[test]
    fn test_missing_required() {
        let mut fx = Fixture::new("[Organ]\nChurchName=X\n");
        fx.run("Organ", |r| {
            assert_eq!(r.text("ChurchAddress", true), None);
            assert_eq!(r.text("OrganBuilder", false), None);
        });
        assert_eq!(
            fx.diagnostics.messages(),
            &["Error in Organ : the attribute ChurchAddress is expected, it is missing or misspelled"]
        );
    }

    #[test]
    fn test_bound_guard() {
        let mut fx = Fixture::new("[Stop001]\nGain=1\n");
        let left = fx.run("Stop001", |r| assert_eq!(r.integer("Gain", 5, 1, true), None));
        assert_eq!(left.len(), 1);
        assert!(fx.diagnostics.messages()[0].starts_with("INTERNAL ERROR"));
    }

    #[test]
    fn test_boolean_and_empty_text() {
        let mut fx = Fixture::new("[Coupler001]\nUnisonOff=y\nName=\n");
        fx.run("Coupler001", |r| {
            assert_eq!(r.boolean("UnisonOff", true), Some(true));
            assert_eq!(r.text("Name", false), None);
        });
        assert!(fx.diagnostics.is_empty());
        assert_eq!(fx.diagnostics.checked_attributes(), 2);
    }

    #[test]
    fn test_object_reference() {
        let mut fx = Fixture::new("[Manual001]\nStop001=1\nStop002=2\n[Stop001]\n");
        fx.run("Manual001", |r| r.references("Stop", 2));
        assert_eq!(
            fx.diagnostics.messages(),
            &["Error in Manual001 / Stop002=2 : the object Stop002 does not exist"]
        );
    }

    #[test]
    fn test_pipe_wave() {
        let mut fx = Fixture::new("[Rank001]\nPipe001=EMPTY\nPipe002=REF:1:2:3\nPipe003=noise\nPipe004=a.wav\n");
        fx.run("Rank001", |r| {
            for index in 1..=4 {
                r.check(&format!("Pipe{}", index_str(index)), AttrType::PipeWave, true);
            }
        });
        assert_eq!(
            fx.diagnostics.messages(),
            &[
                "Error in Rank001 / Pipe002=REF:1:2:3 : wrong pipe referencing, expected REF:999:999:999",
                "Error in Rank001 / Pipe003=noise : wrong pipe definition",
            ]
        );
    }

    #[test]
    fn test_file_check() {
        let mut fx = Fixture::new("[Image001]\nImage=missing\\file.png\n");
        fx.options = CheckOptions::with_file_check();
        fx.run("Image001", |r| assert_eq!(r.file("Image", true), None));
        assert_eq!(
            fx.diagnostics.messages(),
            &["Error in Image001 / Image=missing\\file.png : file does not exist"]
        );
    }

    #[test]
    fn test_reconcile() {
        let mut fx = Fixture::new("[Organ]\nNumberOfTremulants=3\n[Tremulant000]\n[Tremulant001]\n[Tremulant002]\n");
        fx.run("Organ", |r| {
            r.count("NumberOfTremulants", "Tremulant", 0, 10, true);
        });
        assert_eq!(
            fx.diagnostics.messages(),
            &[
                "Error : the object identifier Tremulant000 cannot have the index 000",
                "Error in Organ : NumberOfTremulants=3 whereas 2 Tremulant object(s) defined",
            ]
        );
    }

    #[test]
    fn test_manual_counts_pedal() {
        let mut fx = Fixture::new("[Organ]\nNumberOfManuals=2\n[Manual000]\n[Manual001]\n");
        fx.run("Organ", |r| {
            r.count("NumberOfManuals", "Manual", 1, 16, true);
        });
        assert!(fx.diagnostics.is_empty());
    }

    #[test]
    fn test_panel_size() {
        let mut fx = Fixture::new("[Organ]\nDispScreenSizeHoriz=1024\nDispScreenSizeVert=Large\n[Stop001]\n");
        fx.run("Stop001", |r| assert_eq!(r.panel_size(), (1024, DEFAULT_PANEL_HEIGHT)));
    }
}
