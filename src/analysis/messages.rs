/// Template builder for factor descriptions and recommendations.
/// Wording is centralized here so every caller surfaces the same phrasing
/// and tests can pin it in one place.
pub struct AnalysisMessages;

impl AnalysisMessages {
    // -- Risk factor descriptions ------------------------------------------

    pub fn overdue(days_past: i64) -> String {
        format!("The deadline is already {} days past.", days_past)
    }

    pub fn imminent() -> String {
        "Less than 24 hours before the deadline.".to_string()
    }

    pub fn short_runway(days_left: i64) -> String {
        format!("Only {} days before the deadline.", days_left)
    }

    pub fn high_priority_low_progress() -> String {
        "High-priority deadline with little progress.".to_string()
    }

    pub fn weekend() -> String {
        "The deadline falls on a weekend, which can complicate wrapping up.".to_string()
    }

    pub fn off_hours() -> String {
        "The deadline is set outside normal working hours.".to_string()
    }

    pub fn unfavorable_history(missed_percent: i64) -> String {
        format!(
            "Historically, {}% of similar deadlines were not completed on time.",
            missed_percent
        )
    }

    pub fn analysis_error() -> String {
        "The analysis could not be completed for this deadline.".to_string()
    }
}

// ---------------------------------------------------------------------------
// Recommendation wording
// ---------------------------------------------------------------------------

pub const RECO_OVERDUE_RESCHEDULE: &str = "Reset the deadline to a new, realistic date";
pub const RECO_OVERDUE_COMMUNICATE: &str =
    "Communicate immediately with stakeholders about the delay";

pub const RECO_IMMINENT_FOCUS: &str = "Concentrate all effort on this task first";
pub const RECO_IMMINENT_CLEAR_CALENDAR: &str =
    "Eliminate all non-essential distractions and meetings";

pub const RECO_SHORT_DAILY_BLOCK: &str = "Allocate a dedicated block of time to this task each day";
pub const RECO_SHORT_UNBLOCK: &str = "Identify and resolve potential blockers quickly";

pub const RECO_DECOMPOSE: &str = "Break the deadline down into smaller, manageable subtasks";
pub const RECO_MILESTONES: &str = "Define intermediate milestones to track progress";

pub const RECO_DELEGATE: &str = "Consider delegating other, lower-priority tasks";
pub const RECO_MORE_RESOURCES: &str = "Request additional resources if needed";

pub const RECO_WEEKEND_FINISH_FRIDAY: &str = "Plan to finish by the preceding Friday";
pub const RECO_HISTORY_ROOT_CAUSE: &str =
    "Analyze the causes of previous misses to avoid repeating them";
pub const RECO_FOCUSED_SESSION: &str = "Run a focused, sprint-style work session on this task";

pub const RECO_GENERIC_CHECKPOINTS: &str = "Set up regular checkpoints to track progress";
pub const RECO_GENERIC_DOCUMENT: &str = "Document progress and obstacles as they come up";
pub const RECO_GENERIC_COMMUNICATE: &str = "Keep communication clear with all stakeholders";

pub const RECO_VERIFY_INPUT: &str = "Verify the deadline data and try again";
