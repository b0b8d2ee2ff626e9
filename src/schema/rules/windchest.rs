//! Windchest group rules

use crate::schema::context::RecordCheck;

pub fn check_windchest_group(r: &mut RecordCheck<'_, '_>) {
    for (name, object_type) in [("NumberOfEnclosures", "Enclosure"), ("NumberOfTremulants", "Tremulant")] {
        let max = r.objects_of_type(object_type);
        if let Some(count) = r.natural(name, 0, max, true) {
            r.references(object_type, count);
        }
    }

    r.text("Name", false);
}
