use super::ResponseType;
use hickory_proto::op::Message;

/// A resolved DNS response together with how it was produced.
#[derive(Debug, Clone)]
pub struct DnsResponse {
    pub message: Message,
    pub response_type: ResponseType,
    /// Human readable explanation, e.g. "CACHED" or "BLOCKED (ads)"
    pub reason: String,
}

impl DnsResponse {
    pub fn new(message: Message, response_type: ResponseType, reason: impl Into<String>) -> Self {
        Self {
            message,
            response_type,
            reason: reason.into(),
        }
    }
}
