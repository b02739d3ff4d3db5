use rootwalk_application::{classify, Step};
use rootwalk_domain::{DnsResponse, RecordType, RecordValue, ResourceRecord};
use std::net::IpAddr;
use std::sync::Arc;

fn ip(s: &str) -> IpAddr {
    s.parse().unwrap()
}

#[test]
fn test_alias_outranks_address_in_same_answer() {
    let response = DnsResponse::answer(vec![
        ResourceRecord::address("www.example.", ip("192.0.2.1")),
        ResourceRecord::cname("www.example.", "cdn.example."),
    ]);

    assert_eq!(
        classify(&response, RecordType::A),
        Step::Alias(Arc::from("cdn.example."))
    );
}

#[test]
fn test_first_alias_in_section_order() {
    let response = DnsResponse::answer(vec![
        ResourceRecord::cname("a.example.", "b.example."),
        ResourceRecord::cname("b.example.", "c.example."),
    ]);

    assert_eq!(
        classify(&response, RecordType::AAAA),
        Step::Alias(Arc::from("b.example."))
    );
}

#[test]
fn test_first_matching_answer_in_section_order() {
    let response = DnsResponse::answer(vec![
        ResourceRecord::address("h.example.", ip("2001:db8::1")),
        ResourceRecord::address("h.example.", ip("192.0.2.7")),
        ResourceRecord::address("h.example.", ip("192.0.2.8")),
    ]);

    assert_eq!(
        classify(&response, RecordType::A),
        Step::Answer(RecordValue::Address(ip("192.0.2.7")))
    );
    assert_eq!(
        classify(&response, RecordType::AAAA),
        Step::Answer(RecordValue::Address(ip("2001:db8::1")))
    );
}

#[test]
fn test_first_glue_address_wins() {
    let response = DnsResponse::referral(
        vec![
            ResourceRecord::ns("tld.", "ns1.tld."),
            ResourceRecord::ns("tld.", "ns2.tld."),
        ],
        vec![
            ResourceRecord::address("ns2.tld.", ip("10.0.0.2")),
            ResourceRecord::address("ns1.tld.", ip("10.0.0.1")),
        ],
    );

    assert_eq!(classify(&response, RecordType::A), Step::Glue(ip("10.0.0.2")));
}

#[test]
fn test_delegation_lists_ns_in_order_and_skips_other_authority_records() {
    let soa = ResourceRecord::new(
        "tld.",
        RecordType::SOA,
        RecordValue::Text("a.tld. hostmaster.tld. 1 7200 900 1209600 300".to_string()),
    );
    let response = DnsResponse::referral(
        vec![
            soa,
            ResourceRecord::ns("tld.", "b.tld."),
            ResourceRecord::ns("tld.", "a.tld."),
        ],
        vec![],
    );

    assert_eq!(
        classify(&response, RecordType::A),
        Step::Delegation(vec![Arc::from("b.tld."), Arc::from("a.tld.")])
    );
}

#[test]
fn test_authority_without_ns_is_exhausted() {
    let soa = ResourceRecord::new(
        "tld.",
        RecordType::SOA,
        RecordValue::Text("a.tld. hostmaster.tld. 1 7200 900 1209600 300".to_string()),
    );
    let response = DnsResponse::referral(vec![soa], vec![]);

    assert_eq!(classify(&response, RecordType::A), Step::Exhausted);
}
