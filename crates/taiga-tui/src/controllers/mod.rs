pub mod backlog;
pub mod project;
pub mod sprint;

pub use backlog::{BacklogController, BacklogSignal};
pub use project::ProjectDetailController;
pub use sprint::{SprintController, SprintSignal};
