use serde::{Deserialize, Serialize};
use crate::enums::priority::Priority;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoadmapItem {
    /// Day range of the phase, e.g. `"8-15"`.
    pub day: String,
    pub task: String,
    pub target: String,
    pub priority: Priority,
}
