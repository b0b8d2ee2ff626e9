//! Panel image rules

use crate::schema::context::RecordCheck;

pub fn check_image(r: &mut RecordCheck<'_, '_>) {
    let image = r.file("Image", true);
    r.file("Mask", false);

    let panel = r.panel_size();
    r.placement();

    let bitmap = match image {
        Some(image) => r.image_size(&image, panel),
        None => panel,
    };
    r.tile_offset(bitmap);
}
