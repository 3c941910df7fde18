pub mod response;
pub mod response_type;

pub use response::DnsResponse;
pub use response_type::ResponseType;
