//! TutorialService: CRUD execution over the statement builders.

mod tutorials;
pub use tutorials::TutorialService;
