use ferrous_dns_domain::DnsResponse;
use hickory_proto::rr::Record;

/// Answer section of the wrapped message.
pub fn to_answer(response: &DnsResponse) -> &[Record] {
    response.message.answers()
}

/// Additional section of the wrapped message.
pub fn to_extra(response: &DnsResponse) -> &[Record] {
    response.message.additionals()
}
