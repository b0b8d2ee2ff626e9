//! Panel label rules

use crate::defaults::{label_bitmap_size, LABEL_IMAGE_HEIGHT, LABEL_IMAGE_WIDTH};
use crate::schema::context::RecordCheck;
use crate::structure::sections::parent_panel;

/// Drawstop columns of a panel when it declares none
const DEFAULT_DRAWSTOP_COLUMNS: i64 = 12;

pub fn check_label(r: &mut RecordCheck<'_, '_>) {
    r.text("Name", false);
    let free_x = r.boolean("FreeXPlacement", false);
    let free_y = r.boolean("FreeYPlacement", false);

    let (panel_width, panel_height) = r.panel_size();
    r.integer("DispXpos", 0, panel_width, false);
    r.integer("DispYpos", 0, panel_height, false);

    r.boolean("DispAtTopOfDrawstopCol", free_y == Some(false));

    let columns = parent_panel(r.uid(), r.format())
        .and_then(|panel| r.lookup_digits(&panel, "DispDrawstopCols"))
        .unwrap_or(DEFAULT_DRAWSTOP_COLUMNS);
    let fixed_column = free_x == Some(false);
    r.integer("DispDrawstopCol", 1, columns.max(1), fixed_column);
    r.boolean("DispSpanDrawstopColToRight", fixed_column);

    r.label_text();
    let image_num = r.integer("DispImageNum", 1, 12, false);
    let image = r.file("Image", false);
    r.file("Mask", false);

    let max = r.placement();

    let bitmap = match image {
        Some(image) => r.image_size(&image, (LABEL_IMAGE_WIDTH, LABEL_IMAGE_HEIGHT)),
        None => label_bitmap_size(image_num),
    };
    r.tile_offset(bitmap);

    r.text_area(max, bitmap.0);
}
