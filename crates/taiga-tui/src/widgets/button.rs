use super::Widget;
use crate::signals::WidgetId;

#[derive(Debug, Clone)]
pub struct Button {
    id: WidgetId,
    pub label: String,
}

impl Button {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            id: WidgetId::next(),
            label: label.into(),
        }
    }
}

impl Widget for Button {
    fn id(&self) -> WidgetId {
        self.id
    }
}
