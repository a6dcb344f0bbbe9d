use taiga_domain::Project;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProjectMode {
    #[default]
    Backlog,
    Milestones,
}

impl ProjectMode {
    pub fn title(&self) -> &'static str {
        match self {
            Self::Backlog => "Backlog",
            Self::Milestones => "Milestones",
        }
    }
}

#[derive(Debug, Clone)]
pub struct ProjectDetailView {
    pub project: Project,
    pub mode: ProjectMode,
}

impl ProjectDetailView {
    pub fn new(project: Project) -> Self {
        Self {
            project,
            mode: ProjectMode::default(),
        }
    }
}
