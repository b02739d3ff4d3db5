mod dns_server_mock;

pub use dns_server_mock::{a_record, cname_record, name, ns_record, reply_to, MockDnsServer};
