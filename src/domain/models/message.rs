#[cfg(test)]
#[path = "message_test.rs"]
mod tests;

use super::Author;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum MessageType {
    Normal,
    Error,
    /// Placeholder shown while an answer is being produced. Replaced once the
    /// backend responds.
    Typing,
}

#[derive(Clone, Debug)]
pub struct Message {
    pub author: Author,
    pub text: String,
    mtype: MessageType,
}

impl Message {
    pub fn new(author: Author, text: &str) -> Message {
        return Message::new_with_type(author, MessageType::Normal, text);
    }

    pub fn new_with_type(author: Author, mtype: MessageType, text: &str) -> Message {
        return Message {
            author,
            text: text.trim_end().replace('\t', "  "),
            mtype,
        };
    }

    pub fn typing() -> Message {
        return Message::new_with_type(
            Author::Assistant,
            MessageType::Typing,
            "Reviewing the documents...",
        );
    }

    pub fn message_type(&self) -> MessageType {
        return self.mtype;
    }

    pub fn is_typing(&self) -> bool {
        return self.mtype == MessageType::Typing;
    }
}
