use chrono::{DateTime, Utc};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Info,
    Error,
}

#[derive(Debug, Clone)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
    pub timestamp: DateTime<Utc>,
}

/// Status line showing the latest info or error message. Only the last
/// messages are kept; the counts cover every message since the last clear.
#[derive(Debug, Default)]
pub struct Notifier {
    history: Vec<Notice>,
    infos: usize,
    errors: usize,
}

impl Notifier {
    const MAX_HISTORY: usize = 50;

    pub fn new() -> Self {
        Self::default()
    }

    pub fn info_msg(&mut self, message: impl Into<String>) {
        let message = message.into();
        tracing::info!("{}", message);
        self.push(NoticeLevel::Info, message);
    }

    pub fn error_msg(&mut self, message: impl Into<String>) {
        let message = message.into();
        tracing::warn!("{}", message);
        self.push(NoticeLevel::Error, message);
    }

    fn push(&mut self, level: NoticeLevel, message: String) {
        match level {
            NoticeLevel::Info => self.infos += 1,
            NoticeLevel::Error => self.errors += 1,
        }
        if self.history.len() == Self::MAX_HISTORY {
            self.history.remove(0);
        }
        self.history.push(Notice {
            level,
            message,
            timestamp: Utc::now(),
        });
    }

    pub fn current(&self) -> Option<&Notice> {
        self.history.last()
    }

    pub fn history(&self) -> &[Notice] {
        &self.history
    }

    pub fn info_count(&self) -> usize {
        self.infos
    }

    pub fn error_count(&self) -> usize {
        self.errors
    }

    pub fn clear(&mut self) {
        self.history.clear();
        self.infos = 0;
        self.errors = 0;
    }
}
