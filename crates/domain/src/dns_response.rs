use super::ResourceRecord;

/// Decoded reply from one name server.
///
/// Sections keep the order the server sent them in; the resolver's
/// first-match-wins selection depends on it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DnsResponse {
    pub answers: Vec<ResourceRecord>,
    pub authority: Vec<ResourceRecord>,
    pub additional: Vec<ResourceRecord>,
    pub truncated: bool,
}

impl DnsResponse {
    pub fn new(
        answers: Vec<ResourceRecord>,
        authority: Vec<ResourceRecord>,
        additional: Vec<ResourceRecord>,
    ) -> Self {
        Self {
            answers,
            authority,
            additional,
            truncated: false,
        }
    }

    pub fn answer(records: Vec<ResourceRecord>) -> Self {
        Self::new(records, vec![], vec![])
    }

    pub fn referral(authority: Vec<ResourceRecord>, additional: Vec<ResourceRecord>) -> Self {
        Self::new(vec![], authority, additional)
    }

    pub fn is_empty(&self) -> bool {
        self.answers.is_empty() && self.authority.is_empty() && self.additional.is_empty()
    }
}
