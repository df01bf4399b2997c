/// The description currently shown to the user. Each replacement discards
/// the previous text.
#[derive(Debug, Default, Clone)]
pub struct DescriptionEditor {
    text: String,
}

impl DescriptionEditor {
    pub fn current(&self) -> &str {
        &self.text
    }

    pub fn replace(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}
