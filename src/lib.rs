pub mod codec;
pub mod config;
pub mod domains;
pub mod error;
pub mod interfaces;
pub mod services;

pub use crate::codec::JsonCodec;
pub use crate::config::Config;
pub use crate::domains::message::{generate_request_id, Message, MessageOptions};
pub use crate::domains::service::{Mode, ServiceName};
pub use crate::error::{ApiError, Result};
pub use crate::interfaces::codec::MessageCodec;
pub use crate::services::endpoint::ServiceEndpoint;
