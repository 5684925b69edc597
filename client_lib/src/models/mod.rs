pub mod post;

pub use post::{ResourceRecord, SubmissionPayload};
