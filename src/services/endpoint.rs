use serde_json::Value;
use tracing::debug;

use crate::codec::JsonCodec;
use crate::config::Config;
use crate::domains::message::{Message, MessageOptions};
use crate::domains::service::{mode_services, Mode, ServiceName};
use crate::error::Result;
use crate::interfaces::codec::MessageCodec;

pub struct ServiceEndpoint {
    origin: ServiceName,
    mode: Mode,
    services: &'static [ServiceName],
    codec: Box<dyn MessageCodec>,
}

impl ServiceEndpoint {
    pub fn new(origin: ServiceName, codec: Box<dyn MessageCodec>) -> Self {
        let mode = Mode::default();
        Self {
            origin,
            mode,
            services: mode_services(mode),
            codec,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self {
            origin: config.service(),
            mode: config.mode(),
            services: config.services(),
            codec: Box::new(config.codec()),
        }
    }

    pub fn origin(&self) -> &ServiceName {
        &self.origin
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn services(&self) -> &'static [ServiceName] {
        self.services
    }

    pub fn request(
        &self,
        command: impl Into<String>,
        destination: impl Into<ServiceName>,
        data: Value,
    ) -> Message {
        let message = Message::new(
            MessageOptions::new(command, self.origin.clone(), destination).data(data),
        );
        debug!(
            command = message.command().unwrap_or_default(),
            request_id = message.request_id(),
            "built request"
        );
        message
    }

    pub fn acknowledge(&self, request: &Message, data: Value) -> Message {
        request.reply(data)
    }

    pub fn encode(&self, message: &Message) -> Result<String> {
        self.codec.encode(message)
    }

    pub fn decode(&self, frame: &str) -> Result<Message> {
        self.codec.decode(frame)
    }
}

impl Default for ServiceEndpoint {
    fn default() -> Self {
        Self::new(ServiceName::Events, Box::new(JsonCodec::default()))
    }
}
