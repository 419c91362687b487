pub mod plan;
pub mod tracks;
pub mod workflow;

pub use plan::find_next_task;
pub use tracks::{count_in_progress, parse_track_registry};
pub use workflow::{resolve_threshold, ThresholdCache};
