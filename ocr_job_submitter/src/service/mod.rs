pub mod batch;
pub mod ocr;
pub mod s3;
