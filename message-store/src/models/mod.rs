mod message;

pub use message::{IdPolicy, Message, NewMessage};
