pub mod constants;
pub mod handoff;
pub mod plan;
pub mod track;
pub mod usage;

pub use handoff::{HandoffState, PendingHandoff};
pub use plan::{NextTask, PlanTaskStatus};
pub use track::{ActiveTrack, TrackCounts, TrackRegistry, TrackStatus};
pub use usage::{UsageEvent, UsageRecord};
