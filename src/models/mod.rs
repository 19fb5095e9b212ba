pub mod candidate;
pub mod page;
pub mod resource;
pub mod session;

pub use candidate::{CandidateStatus, ProjectCandidate};
pub use page::PageEvent;
pub use resource::{ExtractedResource, ResourceIdentifier, Specificity};
pub use session::Session;
