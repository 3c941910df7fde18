#![allow(dead_code)]
use ferrous_dns_domain::{DnsResponse, ResponseType};
use hickory_proto::op::{Edns, Message, MessageType, OpCode, ResponseCode};
use hickory_proto::rr::rdata::opt::EdnsOption;
use hickory_proto::rr::rdata::{A, AAAA, CNAME, MX, NS, PTR, SRV, TXT};
use hickory_proto::rr::{Name, RData, Record};
use std::net::{Ipv4Addr, Ipv6Addr};
use std::str::FromStr;

pub fn name(domain: &str) -> Name {
    Name::from_str(domain).unwrap()
}

pub fn a_record(domain: &str, ip: &str, ttl: u32) -> Record {
    let ip = Ipv4Addr::from_str(ip).unwrap();
    Record::from_rdata(name(domain), ttl, RData::A(A(ip)))
}

pub fn aaaa_record(domain: &str, ip: &str, ttl: u32) -> Record {
    let ip = Ipv6Addr::from_str(ip).unwrap();
    Record::from_rdata(name(domain), ttl, RData::AAAA(AAAA(ip)))
}

pub fn cname_record(domain: &str, target: &str, ttl: u32) -> Record {
    Record::from_rdata(name(domain), ttl, RData::CNAME(CNAME(name(target))))
}

pub fn ptr_record(domain: &str, target: &str, ttl: u32) -> Record {
    Record::from_rdata(name(domain), ttl, RData::PTR(PTR(name(target))))
}

pub fn ns_record(domain: &str, target: &str, ttl: u32) -> Record {
    Record::from_rdata(name(domain), ttl, RData::NS(NS(name(target))))
}

pub fn mx_record(domain: &str, preference: u16, exchange: &str, ttl: u32) -> Record {
    Record::from_rdata(name(domain), ttl, RData::MX(MX::new(preference, name(exchange))))
}

pub fn srv_record(
    domain: &str,
    priority: u16,
    weight: u16,
    port: u16,
    target: &str,
    ttl: u32,
) -> Record {
    let srv = SRV::new(priority, weight, port, name(target));
    Record::from_rdata(name(domain), ttl, RData::SRV(srv))
}

pub fn txt_record(domain: &str, chunks: &[&str], ttl: u32) -> Record {
    let txt = TXT::new(chunks.iter().map(|c| c.to_string()).collect());
    Record::from_rdata(name(domain), ttl, RData::TXT(txt))
}

pub struct DnsResponseBuilder {
    answers: Vec<Record>,
    additionals: Vec<Record>,
    rcode: ResponseCode,
    response_type: ResponseType,
    reason: String,
    edns: Option<Edns>,
}

impl DnsResponseBuilder {
    pub fn new() -> Self {
        Self {
            answers: Vec::new(),
            additionals: Vec::new(),
            rcode: ResponseCode::NoError,
            response_type: ResponseType::Resolved,
            reason: "RESOLVED".to_string(),
            edns: None,
        }
    }

    pub fn answer(mut self, record: Record) -> Self {
        self.answers.push(record);
        self
    }

    pub fn additional(mut self, record: Record) -> Self {
        self.additionals.push(record);
        self
    }

    pub fn rcode(mut self, rcode: ResponseCode) -> Self {
        self.rcode = rcode;
        self
    }

    pub fn response_type(mut self, response_type: ResponseType) -> Self {
        self.response_type = response_type;
        self
    }

    pub fn reason(mut self, reason: &str) -> Self {
        self.reason = reason.to_string();
        self
    }

    /// Adds an EDNS0 record without options.
    pub fn edns(mut self) -> Self {
        self.edns.get_or_insert_with(Edns::new);
        self
    }

    pub fn edns_option(mut self, code: u16, data: &[u8]) -> Self {
        self.edns
            .get_or_insert_with(Edns::new)
            .options_mut()
            .insert(EdnsOption::Unknown(code, data.to_vec()));
        self
    }

    pub fn build_message(self) -> Message {
        let mut message = Message::new(0x1234, MessageType::Response, OpCode::Query);
        message.set_response_code(self.rcode);
        for record in self.answers {
            message.add_answer(record);
        }
        for record in self.additionals {
            message.add_additional(record);
        }
        if let Some(edns) = self.edns {
            message.set_edns(edns);
        }
        message
    }

    pub fn build(self) -> DnsResponse {
        let response_type = self.response_type;
        let reason = self.reason.clone();
        DnsResponse::new(self.build_message(), response_type, reason)
    }
}

impl Default for DnsResponseBuilder {
    fn default() -> Self {
        Self::new()
    }
}
