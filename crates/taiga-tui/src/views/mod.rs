pub mod backlog;
pub mod project;
pub mod sprint;

pub use backlog::{BacklogFocus, BacklogView};
pub use project::{ProjectDetailView, ProjectMode};
pub use sprint::{SprintFocus, SprintView};
