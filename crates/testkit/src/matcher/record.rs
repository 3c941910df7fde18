use super::Matcher;
use crate::MatchError;
use ferrous_dns_domain::DnsResponse;
use hickory_proto::op::Message;
use hickory_proto::rr::{RData, Record, RecordType};
use std::fmt::Debug;
use std::net::IpAddr;

/// The input shapes record matchers accept.
#[derive(Debug, Clone, Copy)]
pub enum Subject<'a> {
    Response(&'a DnsResponse),
    Message(&'a Message),
    Records(&'a [Record]),
    Record(&'a Record),
    /// Any other value, identified by its type name only.
    Unsupported(&'static str),
}

impl<'a> Subject<'a> {
    pub fn unsupported<T: ?Sized>() -> Self {
        Subject::Unsupported(std::any::type_name::<T>())
    }

    /// Candidate records: the answer section for responses and messages.
    pub fn records(&self, context: &'static str) -> Result<&'a [Record], MatchError> {
        match *self {
            Subject::Response(response) => Ok(response.message.answers()),
            Subject::Message(message) => Ok(message.answers()),
            Subject::Records(records) => Ok(records),
            Subject::Record(record) => Ok(std::slice::from_ref(record)),
            Subject::Unsupported(type_name) => {
                Err(MatchError::UnsupportedType { context, type_name })
            }
        }
    }
}

pub trait RecordSource {
    fn subject(&self) -> Subject<'_>;
}

impl RecordSource for DnsResponse {
    fn subject(&self) -> Subject<'_> {
        Subject::Response(self)
    }
}

impl RecordSource for Message {
    fn subject(&self) -> Subject<'_> {
        Subject::Message(self)
    }
}

impl RecordSource for [Record] {
    fn subject(&self) -> Subject<'_> {
        Subject::Records(self)
    }
}

impl RecordSource for Vec<Record> {
    fn subject(&self) -> Subject<'_> {
        Subject::Records(self)
    }
}

impl RecordSource for Record {
    fn subject(&self) -> Subject<'_> {
        Subject::Record(self)
    }
}

impl RecordSource for Subject<'_> {
    fn subject(&self) -> Subject<'_> {
        *self
    }
}

/// Matches when any candidate record has the given owner name, type and answer.
///
/// Answers are compared in one textual form per type:
///
/// | type | answer |
/// |---|---|
/// | A | dotted decimal |
/// | AAAA | any textual IPv6 form, compared as 16 bytes |
/// | CNAME, PTR, MX | target name, e.g. `mail.example.com.` |
/// | SRV | `"priority weight port target"` |
/// | TXT | chunks joined by a single space |
///
/// Records of any other type never match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DnsRecordMatcher {
    domain: String,
    record_type: RecordType,
    answer: String,
}

pub fn be_dns_record(
    domain: impl Into<String>,
    record_type: RecordType,
    answer: impl Into<String>,
) -> DnsRecordMatcher {
    DnsRecordMatcher {
        domain: domain.into(),
        record_type,
        answer: answer.into(),
    }
}

impl DnsRecordMatcher {
    fn match_single(&self, record: &Record) -> bool {
        if record.record_type() != self.record_type || record.name().to_string() != self.domain {
            return false;
        }

        match record.data() {
            RData::A(a) => a.0.to_string() == self.answer,
            RData::AAAA(aaaa) => match self.answer.parse::<IpAddr>() {
                Ok(IpAddr::V6(ip)) => ip == aaaa.0,
                Ok(IpAddr::V4(ip)) => ip.to_ipv6_mapped() == aaaa.0,
                Err(_) => false,
            },
            RData::CNAME(cname) => cname.0.to_string() == self.answer,
            RData::PTR(ptr) => ptr.0.to_string() == self.answer,
            RData::SRV(srv) => {
                format!(
                    "{} {} {} {}",
                    srv.priority(),
                    srv.weight(),
                    srv.port(),
                    srv.target()
                ) == self.answer
            }
            RData::TXT(txt) => {
                txt.txt_data()
                    .iter()
                    .map(|chunk| String::from_utf8_lossy(chunk))
                    .collect::<Vec<_>>()
                    .join(" ")
                    == self.answer
            }
            RData::MX(mx) => mx.exchange().to_string() == self.answer,
            _ => false,
        }
    }

    fn message<T: Debug + ?Sized>(&self, actual: &T, to: &str) -> String {
        format!(
            "Expected\n\t{:?}\n {} contain\n\t domain '{}', type '{}', answer '{}'",
            actual, to, self.domain, self.record_type, self.answer
        )
    }
}

impl<T: RecordSource + Debug + ?Sized> Matcher<T> for DnsRecordMatcher {
    fn matches(&self, actual: &T) -> Result<bool, MatchError> {
        let records = actual.subject().records("DNS record matching")?;

        Ok(records.iter().any(|record| self.match_single(record)))
    }

    fn failure_message(&self, actual: &T) -> String {
        self.message(actual, "to")
    }

    fn negated_failure_message(&self, actual: &T) -> String {
        self.message(actual, "not to")
    }
}
