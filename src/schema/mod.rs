//! Schema validation
//!
//! A full pass checks the line syntax of every section, then runs the rule
//! set of each object kind on the attributes of the object. Whatever a rule
//! set does not consume is reported as unexpected. Results only go to the
//! diagnostics log, a document with errors can still be saved.

pub mod attribute;
pub mod context;
pub mod kind;
pub mod rules;
pub mod values;

use crate::defaults::{HEADER_UID, ROOT_UID};
use crate::structure::sections::{section_lines, PanelFormat};
use crate::text::syntax::check_line;

use attribute::PendingAttributes;
use context::{CheckContext, RecordCheck};
use kind::RecordKind;

pub use attribute::AttrType;

/// Messages every pass writes: start notice, format notice, attribute count
const BOILERPLATE_MESSAGES: usize = 3;

/// Check the whole document
///
/// `progress` is called with the UID of each object before it is checked.
pub fn validate(ctx: &mut CheckContext<'_>, mut progress: impl FnMut(&str)) {
    let first_message = ctx.diagnostics.len();
    ctx.diagnostics.reset_checked();

    ctx.diagnostics.add("Checking the data...");
    ctx.diagnostics.add(match ctx.format {
        PanelFormat::New => "New panel format detected",
        PanelFormat::Old => "Old panel format detected",
    });

    let lines = ctx.lines;
    let graph = ctx.graph;

    check_syntax(ctx, section_lines(lines, graph, HEADER_UID), "the header");

    if !graph.contains(ROOT_UID) {
        ctx.diagnostics
            .add(format!("Error : the object {} is not defined", ROOT_UID));
    }

    for uid in graph.uids() {
        progress(uid);
        let section = section_lines(lines, graph, uid);
        check_syntax(ctx, section, uid);
        check_object(ctx, uid, PendingAttributes::from_lines(section));
    }

    for (uid, record) in graph.iter() {
        if uid != ROOT_UID && record.parents.is_empty() {
            ctx.diagnostics
                .add(format!("Warning : the object {} is not used", uid));
        }
    }

    let checked = ctx.diagnostics.checked_attributes();
    ctx.diagnostics.add(format!("{} attributes checked", checked));
    if ctx.diagnostics.len() - first_message <= BOILERPLATE_MESSAGES {
        ctx.diagnostics.add("None error found");
    }
    log::debug!("validation pass done, {} attributes checked", checked);
}

fn check_syntax(ctx: &mut CheckContext<'_>, lines: &[String], location: &str) {
    for line in lines {
        if let Err(err) = check_line(line) {
            ctx.diagnostics
                .add(format!("Syntax error in {} '{}' : {}", location, line, err));
        }
    }
}

/// Run the rules of one object and report what they left over
fn check_object(ctx: &mut CheckContext<'_>, uid: &str, pending: PendingAttributes) {
    for name in pending.repeated_names() {
        ctx.diagnostics
            .error_in(uid, format!("the attribute {} is defined more than once", name));
    }

    let Some(kind) = RecordKind::from_uid(uid) else {
        ctx.diagnostics.add(format!(
            "Error : the object identifier {} is invalid or misspelled",
            uid
        ));
        return;
    };

    let mut record = RecordCheck::new(ctx, uid, pending);
    rules::dispatch(kind, &mut record);
    let remaining = record.into_remaining();

    for attribute in remaining.remaining() {
        ctx.diagnostics.count_checked();
        ctx.diagnostics.warning_in(
            uid,
            format!(
                "the attribute {} is not expected in this object or is misspelled",
                attribute.name
            ),
        );
    }
}
