use rand_core::{OsRng, RngCore};
use serde_json::{Map, Value};
use tracing::{debug, warn};

use crate::codec::case::{to_camel_case, to_snake_case};
use crate::codec::safe_number::to_safe_number;
use crate::domains::service::ServiceName;
use crate::error::{ApiError, Result};

pub const REQUEST_ID_BYTES: usize = 32;

pub fn generate_request_id() -> String {
    let mut bytes = [0u8; REQUEST_ID_BYTES];
    OsRng.fill_bytes(&mut bytes);
    hex::encode(bytes)
}

#[derive(Debug, Clone, Default)]
pub struct MessageOptions {
    pub command: Option<String>,
    pub origin: Option<ServiceName>,
    pub destination: Option<ServiceName>,
    pub data: Option<Value>,
    pub ack: Option<bool>,
    pub request_id: Option<String>,
}

impl MessageOptions {
    pub fn new(
        command: impl Into<String>,
        origin: impl Into<ServiceName>,
        destination: impl Into<ServiceName>,
    ) -> Self {
        Self {
            command: Some(command.into()),
            origin: Some(origin.into()),
            destination: Some(destination.into()),
            ..Self::default()
        }
    }

    pub fn data(mut self, data: Value) -> Self {
        self.data = Some(data);
        self
    }

    pub fn ack(mut self, ack: bool) -> Self {
        self.ack = Some(ack);
        self
    }

    pub fn request_id(mut self, request_id: impl Into<String>) -> Self {
        self.request_id = Some(request_id.into());
        self
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Message {
    command: Option<String>,
    data: Value,
    origin: Option<ServiceName>,
    destination: Option<ServiceName>,
    ack: bool,
    request_id: String,
}

impl Message {
    pub fn new(options: MessageOptions) -> Self {
        let MessageOptions {
            command,
            origin,
            destination,
            data,
            ack,
            request_id,
        } = options;

        Self {
            command,
            data: data.unwrap_or_else(|| Value::Object(Map::new())),
            origin,
            destination,
            ack: ack.unwrap_or(false),
            request_id: request_id.unwrap_or_else(generate_request_id),
        }
    }

    pub fn command(&self) -> Option<&str> {
        self.command.as_deref()
    }

    pub fn data(&self) -> &Value {
        &self.data
    }

    pub fn into_data(self) -> Value {
        self.data
    }

    pub fn origin(&self) -> Option<&ServiceName> {
        self.origin.as_ref()
    }

    pub fn destination(&self) -> Option<&ServiceName> {
        self.destination.as_ref()
    }

    pub fn ack(&self) -> bool {
        self.ack
    }

    pub fn request_id(&self) -> &str {
        &self.request_id
    }

    /// True when command, origin and destination are all present. Decoding
    /// does not require them; transports that do should check this.
    pub fn has_addressing(&self) -> bool {
        self.command.is_some() && self.origin.is_some() && self.destination.is_some()
    }

    pub fn reply(&self, data: Value) -> Message {
        Message {
            command: self.command.clone(),
            data,
            origin: self.destination.clone(),
            destination: self.origin.clone(),
            ack: true,
            request_id: self.request_id.clone(),
        }
    }

    pub fn is_reply_to(&self, request: &Message) -> bool {
        self.ack && self.request_id == request.request_id
    }

    pub fn to_json(&self, use_snake_case: bool) -> Result<String> {
        let mut envelope = Map::new();
        if let Some(command) = &self.command {
            envelope.insert("command".to_string(), Value::String(command.clone()));
        }
        envelope.insert("data".to_string(), self.data.clone());
        if let Some(origin) = &self.origin {
            envelope.insert("origin".to_string(), Value::String(origin.to_string()));
        }
        if let Some(destination) = &self.destination {
            envelope.insert(
                "destination".to_string(),
                Value::String(destination.to_string()),
            );
        }
        envelope.insert("ack".to_string(), Value::Bool(self.ack));
        envelope.insert(
            "request_id".to_string(),
            Value::String(self.request_id.clone()),
        );

        let mut value = Value::Object(envelope);
        if use_snake_case {
            value = to_snake_case(value);
        }

        let text = serde_json::to_string(&value)?;
        debug!(
            command = self.command().unwrap_or_default(),
            request_id = %self.request_id,
            ack = self.ack,
            "encoded message"
        );
        Ok(text)
    }

    /// Decodes an envelope. `request_id` is always read from its snake_case
    /// key; with `use_camel_case` the payload keys are converted to camelCase.
    ///
    /// Missing `command`, `origin` or `destination` are left unset rather
    /// than rejected. Missing `data`, `ack` or `request_id` take the same
    /// defaults as [`Message::new`].
    pub fn from_json(json: &str, use_camel_case: bool) -> Result<Self> {
        let parsed: Value = serde_json::from_str(json)?;
        let Value::Object(mut fields) = parsed else {
            return Err(ApiError::Parse("message must be a JSON object".to_string()));
        };

        let command = take_string(&mut fields, "command")?;
        let origin = take_string(&mut fields, "origin")?.map(ServiceName::from);
        let destination = take_string(&mut fields, "destination")?.map(ServiceName::from);
        let request_id = take_string(&mut fields, "request_id")?;
        let ack = match fields.remove("ack") {
            None | Some(Value::Null) => None,
            Some(Value::Bool(ack)) => Some(ack),
            Some(other) => {
                return Err(ApiError::Parse(format!(
                    "field `ack` must be a boolean, got {other}"
                )))
            }
        };
        let data = match fields.remove("data") {
            None | Some(Value::Null) => None,
            Some(data) => {
                let data = to_safe_number(data);
                Some(if use_camel_case { to_camel_case(data) } else { data })
            }
        };

        let message = Message::new(MessageOptions {
            command,
            origin,
            destination,
            data,
            ack,
            request_id,
        });

        if !message.has_addressing() {
            warn!(
                request_id = %message.request_id,
                "decoded message without command, origin or destination"
            );
        }
        debug!(
            command = message.command().unwrap_or_default(),
            request_id = %message.request_id,
            ack = message.ack,
            "decoded message"
        );
        Ok(message)
    }
}

fn take_string(fields: &mut Map<String, Value>, key: &str) -> Result<Option<String>> {
    match fields.remove(key) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(value)) => Ok(Some(value)),
        Some(other) => Err(ApiError::Parse(format!(
            "field `{key}` must be a string, got {other}"
        ))),
    }
}
