use super::record::{RecordSource, Subject};
use super::{be_empty, custom, format_object, with_transform, Matcher};
use crate::response::to_answer;
use crate::MatchError;
use ferrous_dns_domain::{DnsResponse, ResponseType};
use hickory_proto::op::Edns;
use hickory_proto::rr::rdata::opt::EdnsCode;
use hickory_proto::rr::Record;
use std::fmt::Debug;

pub fn have_no_answer() -> impl Matcher<DnsResponse> {
    with_transform(|response: &DnsResponse| to_answer(response).to_vec(), be_empty())
}

pub fn have_reason(reason: impl Into<String>) -> impl Matcher<DnsResponse> {
    let reason = reason.into();
    let data = format!("{:?}", reason);

    custom(
        move |response: &DnsResponse| Ok(response.reason == reason),
        "have reason",
        data,
    )
}

pub fn have_response_type(response_type: ResponseType) -> impl Matcher<DnsResponse> {
    custom(
        move |response: &DnsResponse| Ok(response.response_type == response_type),
        "have ResponseType",
        response_type.as_str(),
    )
}

pub fn have_return_code(code: u16) -> impl Matcher<DnsResponse> {
    custom(
        move |response: &DnsResponse| Ok(u16::from(response.message.response_code()) == code),
        "have RCode",
        format!("{} ({})", code, rcode_name(code)),
    )
}

fn rcode_name(code: u16) -> &'static str {
    match code {
        0 => "NOERROR",
        1 => "FORMERR",
        2 => "SERVFAIL",
        3 => "NXDOMAIN",
        4 => "NOTIMP",
        5 => "REFUSED",
        6 => "YXDOMAIN",
        7 => "YXRRSET",
        8 => "NXRRSET",
        9 => "NOTAUTH",
        10 => "NOTZONE",
        16 => "BADSIG",
        17 => "BADKEY",
        18 => "BADTIME",
        19 => "BADMODE",
        20 => "BADNAME",
        21 => "BADALG",
        22 => "BADTRUNC",
        23 => "BADCOOKIE",
        _ => "UNKNOWN",
    }
}

/// Matches a response or message whose EDNS0 record carries option `code`.
///
/// Inputs without a message (record lists, single records, unsupported
/// shapes) never match and never error.
pub fn have_edns_option(code: u16) -> HaveEdnsOption {
    HaveEdnsOption { code }
}

pub struct HaveEdnsOption {
    code: u16,
}

impl HaveEdnsOption {
    fn edns<'a>(subject: Subject<'a>) -> Option<&'a Edns> {
        match subject {
            Subject::Response(response) => response.message.extensions().as_ref(),
            Subject::Message(message) => message.extensions().as_ref(),
            _ => None,
        }
    }

    fn message<T: Debug + ?Sized>(&self, actual: &T, to: &str) -> String {
        format!(
            "Expected:\n{}\n{} have EDNS option:\n    {}",
            format_object(actual, 1),
            to,
            self.code
        )
    }
}

impl<T: RecordSource + Debug + ?Sized> Matcher<T> for HaveEdnsOption {
    fn matches(&self, actual: &T) -> Result<bool, MatchError> {
        let found = Self::edns(actual.subject())
            .is_some_and(|edns| edns.option(EdnsCode::from(self.code)).is_some());

        Ok(found)
    }

    fn failure_message(&self, actual: &T) -> String {
        self.message(actual, "to")
    }

    fn negated_failure_message(&self, actual: &T) -> String {
        self.message(actual, "not to")
    }
}

/// Applies `matcher` to the TTL of the first candidate record.
///
/// Only the first record is inspected.
/// Empty input and unsupported shapes are errors, not mismatches.
pub fn have_ttl<M: Matcher<u32>>(matcher: M) -> HaveTtl<M> {
    HaveTtl { matcher }
}

pub struct HaveTtl<M> {
    matcher: M,
}

impl<M> HaveTtl<M> {
    fn first_ttl(subject: Subject<'_>) -> Result<u32, MatchError> {
        subject
            .records("TTL matching")?
            .first()
            .map(Record::ttl)
            .ok_or(MatchError::EmptyAnswer)
    }

    fn error_message<T: Debug + ?Sized>(actual: &T, err: &MatchError) -> String {
        format!("Expected\n{}\nto have a TTL, but {}", format_object(actual, 1), err)
    }
}

impl<T, M> Matcher<T> for HaveTtl<M>
where
    T: RecordSource + Debug + ?Sized,
    M: Matcher<u32>,
{
    fn matches(&self, actual: &T) -> Result<bool, MatchError> {
        let ttl = Self::first_ttl(actual.subject())?;
        self.matcher.matches(&ttl)
    }

    fn failure_message(&self, actual: &T) -> String {
        match Self::first_ttl(actual.subject()) {
            Ok(ttl) => self.matcher.failure_message(&ttl),
            Err(e) => Self::error_message(actual, &e),
        }
    }

    fn negated_failure_message(&self, actual: &T) -> String {
        match Self::first_ttl(actual.subject()) {
            Ok(ttl) => self.matcher.negated_failure_message(&ttl),
            Err(e) => Self::error_message(actual, &e),
        }
    }
}
