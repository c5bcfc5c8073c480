mod submit_ocr_job;
mod verify_object_exists;

pub use submit_ocr_job::*;
pub use verify_object_exists::*;
