/// Status of an actionable task line in a track's `plan.md`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlanTaskStatus {
    Pending,
    InProgress,
}

impl PlanTaskStatus {
    /// Verb used when presenting the task to a resuming session.
    pub fn resume_verb(&self) -> &'static str {
        match self {
            PlanTaskStatus::InProgress => "Resuming",
            PlanTaskStatus::Pending => "Next",
        }
    }
}

/// The task a resumed session should pick up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NextTask {
    pub task: String,
    /// Title of the enclosing `Phase N:` heading, if any preceded the task
    pub phase: Option<String>,
    pub status: PlanTaskStatus,
}
