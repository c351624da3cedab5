mod payload;
mod store;

pub use payload::SubmissionPayload;
pub use store::Store;
