/// A canned response option attached to a message.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct QuickReply {
    /// Label shown on the reply button.
    pub title: String,
    /// Value handed back to the caller on selection.
    pub value: String,
}

impl QuickReply {
    /// Create a quick reply from its title and value.
    pub fn new(title: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            value: value.into(),
        }
    }
}
