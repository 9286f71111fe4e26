use crate::domains::message::Message;
use crate::error::Result;

pub trait MessageCodec: Send + Sync {
    fn encode(&self, message: &Message) -> Result<String>;
    fn decode(&self, frame: &str) -> Result<Message>;
}
