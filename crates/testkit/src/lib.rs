//! Ferrous DNS test kit
//!
//! Fixtures (worker-indexed ports, temp files, a fixed-body HTTP server,
//! a request invoker for axum handlers) and matchers for asserting on
//! [`DnsResponse`](ferrous_dns_domain::DnsResponse) values, hickory messages
//! and records.
//!
//! ```ignore
//! use ferrous_dns_testkit::*;
//!
//! assert_that(&response, have_reason("CACHED"));
//! assert_that(&response, be_dns_record("example.com.", A, "10.0.0.1"));
//! assert_that(&response, have_ttl(equal(300)));
//! assert_not(&response, have_no_answer());
//! ```
pub mod errors;
pub mod fixtures;
pub mod logging;
pub mod matcher;
pub mod ports;
pub mod request;
pub mod response;
pub mod server;

use hickory_proto::rr::RecordType;

pub use errors::MatchError;
pub use fixtures::temp_file;
pub use logging::init_test_logging;
pub use matcher::dns::{
    have_edns_option, have_no_answer, have_reason, have_response_type, have_return_code,
    have_ttl,
};
pub use matcher::record::{be_dns_record, DnsRecordMatcher, RecordSource, Subject};
pub use matcher::{
    assert_not, assert_that, be_empty, custom, equal, not, with_transform, Matcher,
};
pub use ports::{get_host_port, get_int_port, get_string_port, parallel_process};
pub use request::do_get_request;
pub use response::{to_answer, to_extra};
pub use server::{TestServer, TestServerBuilder};

pub const A: RecordType = RecordType::A;
pub const AAAA: RecordType = RecordType::AAAA;
pub const CNAME: RecordType = RecordType::CNAME;
pub const HTTPS: RecordType = RecordType::HTTPS;
pub const MX: RecordType = RecordType::MX;
pub const PTR: RecordType = RecordType::PTR;
pub const SRV: RecordType = RecordType::SRV;
pub const TXT: RecordType = RecordType::TXT;
pub const DS: RecordType = RecordType::DS;
