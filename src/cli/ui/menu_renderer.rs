/// Text model of one screen: a title, numbered entries and the answer prompt.
#[derive(Clone, Debug, PartialEq)]
pub struct MenuView {
    pub title: String,
    pub context: Vec<String>,
    pub items: Vec<MenuItem>,
    pub prompt: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct MenuItem {
    pub key: String,
    pub label: String,
}

impl MenuItem {
    pub fn new(key: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
        }
    }
}

impl MenuView {
    pub fn new(title: impl Into<String>, prompt: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            context: Vec::new(),
            items: Vec::new(),
            prompt: prompt.into(),
        }
    }

    pub fn with_context(mut self, line: impl Into<String>) -> Self {
        self.context.push(line.into());
        self
    }

    /// Numbers `labels` from 1 in the order given.
    pub fn with_numbered<I, S>(mut self, labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let start = self.items.len();
        for (offset, label) in labels.into_iter().enumerate() {
            self.items
                .push(MenuItem::new((start + offset + 1).to_string(), label));
        }
        self
    }

    pub fn with_item(mut self, key: impl Into<String>, label: impl Into<String>) -> Self {
        self.items.push(MenuItem::new(key, label));
        self
    }

    /// Body lines below the title.
    pub fn body_lines(&self) -> Vec<String> {
        let mut lines = self.context.clone();
        lines.extend(
            self.items
                .iter()
                .map(|item| format!("  {}. {}", item.key, item.label)),
        );
        lines
    }
}
