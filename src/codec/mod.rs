pub mod case;
pub mod safe_number;

use crate::domains::message::Message;
use crate::error::Result;
use crate::interfaces::codec::MessageCodec;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct JsonCodec {
    pub snake_case_keys: bool,
    pub camel_case_payload: bool,
}

impl JsonCodec {
    pub fn new(snake_case_keys: bool, camel_case_payload: bool) -> Self {
        Self {
            snake_case_keys,
            camel_case_payload,
        }
    }

    pub fn verbatim() -> Self {
        Self::new(false, false)
    }
}

impl Default for JsonCodec {
    fn default() -> Self {
        Self::new(true, true)
    }
}

impl MessageCodec for JsonCodec {
    fn encode(&self, message: &Message) -> Result<String> {
        message.to_json(self.snake_case_keys)
    }

    fn decode(&self, frame: &str) -> Result<Message> {
        Message::from_json(frame, self.camel_case_payload)
    }
}
