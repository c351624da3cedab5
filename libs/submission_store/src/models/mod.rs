mod submission;

pub use submission::{StopwatchTime, Submission};
