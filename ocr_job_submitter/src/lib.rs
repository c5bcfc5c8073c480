//! Lambda that submits an ocr batch job for every document uploaded to s3.
//!
//! The object referenced by the notification is checked for existence, a time limited
//! signed url is generated for it, and a job reading from that url is submitted to batch.

pub mod config;
pub mod context;
pub mod error;
pub mod handler;
pub mod model;
pub mod service;
