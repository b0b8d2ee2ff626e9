//! Manual (keyboard) rules

use crate::defaults::{KEY_IMAGE_HEIGHT, KEY_IMAGE_WIDTH};
use crate::schema::context::RecordCheck;
use crate::utils::ids::index_str;

/// Key types of an octave, in order
const KEY_TYPES: [&str; 12] = ["C", "Cis", "D", "Dis", "E", "F", "Fis", "G", "Gis", "A", "Ais", "B"];

const MAX_LOGICAL_KEYS: i64 = 192;
const MAX_ACCESSIBLE_KEYS: i64 = 85;

pub fn check_manual(r: &mut RecordCheck<'_, '_>) {
    let is_manual = r.uid().starts_with("Manual");

    r.text("Name", is_manual);
    let logical_keys = r.natural("NumberOfLogicalKeys", 1, MAX_LOGICAL_KEYS, is_manual);
    for index in 1..=logical_keys.unwrap_or(0) {
        check_key_images(r, &format!("Key{}", index_str(index)));
    }

    let logical_keys = logical_keys.unwrap_or(MAX_LOGICAL_KEYS);
    r.integer("FirstAccessibleKeyLogicalKeyNumber", 1, logical_keys.max(1), is_manual);
    r.integer("FirstAccessibleKeyMIDINoteNumber", 0, 127, is_manual);
    let accessible_keys = r
        .natural("NumberOfAccessibleKeys", 0, MAX_ACCESSIBLE_KEYS, is_manual)
        .unwrap_or(MAX_ACCESSIBLE_KEYS);

    for (name, prefix) in [
        ("NumberOfCouplers", "Coupler"),
        ("NumberOfDivisionals", "Divisional"),
        ("NumberOfStops", "Stop"),
    ] {
        if let Some(count) = r.natural(name, 0, 999, false) {
            r.references(prefix, count);
        }
    }
    for (name, object_type) in [("NumberOfSwitches", "Switch"), ("NumberOfTremulants", "Tremulant")] {
        let max = r.objects_of_type(object_type);
        if let Some(count) = r.natural(name, 0, max, false) {
            r.references(object_type, count);
        }
    }

    for index in 0..=127 {
        r.integer(&format!("MIDIKey{}", index_str(index)), 0, 127, false);
    }
    r.integer("MIDIInputNumber", 0, 200, false);
    r.boolean("Displayed", false);

    let (panel_width, panel_height) = r.panel_size();
    r.integer("PositionX", 0, panel_width, false);
    r.integer("PositionY", 0, panel_height, false);

    r.boolean("DispKeyColourInverted", false);
    r.boolean("DispKeyColourWooden", false);
    r.integer("DisplayFirstNote", 0, 127, false);

    if let Some(count) = r.natural("DisplayKeys", 1, accessible_keys.max(1), false) {
        for index in 1..=count {
            let key = format!("DisplayKey{}", index_str(index));
            r.integer(&key, 0, 127, false);
            r.integer(&format!("{}Note", key), 0, 127, false);
        }
    }

    check_key_types(r);
}

/// `KeyNNN...` attributes, only looked at when the key has its own image
fn check_key_images(r: &mut RecordCheck<'_, '_>, key: &str) {
    let Some(image) = r.file(&format!("{}ImageOn", key), false) else {
        return;
    };
    r.file(&format!("{}ImageOff", key), false);
    r.file(&format!("{}MaskOn", key), false);
    r.file(&format!("{}MaskOff", key), false);
    r.integer(&format!("{}Width", key), 0, 500, false);
    r.integer(&format!("{}Offset", key), -500, 500, false);
    r.integer(&format!("{}YOffset", key), 0, 500, false);

    let bitmap = r.image_size(&image, (KEY_IMAGE_WIDTH, KEY_IMAGE_HEIGHT));
    r.rectangle(&format!("{}MouseRect", key), bitmap);
}

/// One key-type attribute family (`ImageOn`, `Width`, ...)
#[derive(Clone, Copy)]
enum KeyProperty {
    File(&'static str),
    Range(&'static str, i64, i64),
}

const KEY_PROPERTIES: [KeyProperty; 7] = [
    KeyProperty::File("ImageOn"),
    KeyProperty::File("ImageOff"),
    KeyProperty::File("MaskOn"),
    KeyProperty::File("MaskOff"),
    KeyProperty::Range("Width", 0, 500),
    KeyProperty::Range("Offset", -500, 500),
    KeyProperty::Range("YOffset", 0, 500),
];

impl KeyProperty {
    fn check(self, r: &mut RecordCheck<'_, '_>, key_type: &str) -> bool {
        match self {
            KeyProperty::File(name) => r.file(&format!("{}_{}", name, key_type), false).is_some(),
            KeyProperty::Range(name, min, max) => r
                .integer(&format!("{}_{}", name, key_type), min, max, false)
                .is_some(),
        }
    }
}

/// `<Property>_<KeyType>` attributes plus one `_First<KeyType>` and one
/// `_Last<KeyType>` per property
///
/// Stops at the first key type without `ImageOn_<KeyType>`. A second
/// `_First`/`_Last` definition of a property stays unchecked.
fn check_key_types(r: &mut RecordCheck<'_, '_>) {
    let mut first_found = [false; KEY_PROPERTIES.len()];
    let mut last_found = [false; KEY_PROPERTIES.len()];

    for key_type in KEY_TYPES {
        if !KEY_PROPERTIES[0].check(r, key_type) {
            break;
        }
        for property in &KEY_PROPERTIES[1..] {
            property.check(r, key_type);
        }
        for (i, property) in KEY_PROPERTIES.iter().enumerate() {
            if !first_found[i] {
                first_found[i] = property.check(r, &format!("First{}", key_type));
            }
        }
        for (i, property) in KEY_PROPERTIES.iter().enumerate() {
            if !last_found[i] {
                last_found[i] = property.check(r, &format!("Last{}", key_type));
            }
        }
    }
}
