mod event;
mod job;
mod key;

pub use event::*;
pub use job::*;
pub use key::*;

use serde::{Deserialize, Serialize};

/// The value returned to the lambda runtime on success
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct HandlerResponse {
    pub status: String,
}

impl HandlerResponse {
    pub fn ok() -> Self {
        Self {
            status: "ok".to_string(),
        }
    }
}
