use serde::{Deserialize, Serialize};
use crate::enums::status::Status;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SpeedLabel {
    Fast,
    Average,
    Slow,
}

impl From<Status> for SpeedLabel {
    fn from(status: Status) -> Self {
        match status {
            Status::Success => SpeedLabel::Fast,
            Status::Warning => SpeedLabel::Average,
            Status::Critical | Status::Info => SpeedLabel::Slow,
        }
    }
}
