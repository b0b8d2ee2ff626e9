//! Enclosure (swell box) rules

use crate::defaults::{
    ENCLOSURE_BITMAP_HEIGHT, ENCLOSURE_BITMAP_WIDTH, ENCLOSURE_IMAGE_HEIGHT, ENCLOSURE_IMAGE_WIDTH,
    ENCLOSURE_MOUSE_AXIS,
};
use crate::schema::context::RecordCheck;
use crate::utils::ids::index_str;

pub fn check_enclosure(r: &mut RecordCheck<'_, '_>) {
    r.text("Name", false);
    r.integer("AmpMinimumLevel", 0, 100, false);
    r.integer("MIDIInputNumber", 0, 100, false);
    r.boolean("Displayed", false);
    r.label_text();
    r.text("DispLabelText", false);
    r.integer("EnclosureStyle", 1, 4, false);

    let bitmap = match r.natural("BitmapCount", 1, 127, false) {
        Some(count) => {
            let mut last = None;
            for index in 1..=count {
                let index = index_str(index);
                last = r.file(&format!("Bitmap{}", index), true);
                r.file(&format!("Mask{}", index), false);
            }
            // all the bitmaps of an enclosure share the size of the last one
            let fallback = (ENCLOSURE_IMAGE_WIDTH, ENCLOSURE_IMAGE_HEIGHT);
            match last {
                Some(image) => r.image_size(&image, fallback),
                None => fallback,
            }
        }
        None => (ENCLOSURE_BITMAP_WIDTH, ENCLOSURE_BITMAP_HEIGHT),
    };

    let max = r.placement();
    r.tile_offset(bitmap);

    let (_, mouse_height) = r.rectangle("MouseRect", max);
    let axis_max = mouse_height.unwrap_or(ENCLOSURE_MOUSE_AXIS);
    let start = r.natural("MouseAxisStart", 0, axis_max, false);
    let axis_min = start.unwrap_or(ENCLOSURE_MOUSE_AXIS);
    r.integer("MouseAxisEnd", axis_min, axis_max.max(axis_min), false);

    r.text_area(max, bitmap.0);
}
