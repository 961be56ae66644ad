mod item;
mod message;

pub use item::Item;
pub use message::Message;
