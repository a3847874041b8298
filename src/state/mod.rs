mod media;
mod message;
mod quick_reply;

pub use media::Media;
pub use message::{EMPTY_MESSAGE, Message, ParentPreview, User};
pub use quick_reply::QuickReply;
