//! Typed items of the DNS listing responses, for use with `Sequence`
//!
//! ```
//! use alidns::records::{DOMAIN_RECORDS, DomainRecord};
//! use alidns::extract::{Bindings, Document, Sequence};
//!
//! let doc = Document::from(r#"{"DomainRecords":{"Record":[{"RecordId":"1","RR":"www","Type":"A","Value":"192.0.2.1","TTL":600}]}}"#);
//! let mut records: Vec<DomainRecord> = Vec::new();
//! Bindings::new().pair(Sequence::new(&mut records), DOMAIN_RECORDS).apply(&doc).unwrap();
//! assert_eq!(records[0].rr, "www");
//! ```

use serde::Deserialize;

/// Path of each domain in a `DescribeDomains` response.
pub const DOMAINS: &str = "Domains.Domain.*";
/// Path of each record in a `DescribeDomainRecords` response.
pub const DOMAIN_RECORDS: &str = "DomainRecords.Record.*";

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct Domain {
    pub domain_id: String,
    pub domain_name: String,
    pub record_count: u64,
    pub version_code: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct DomainRecord {
    pub record_id: String,
    pub domain_name: String,
    #[serde(rename = "RR")]
    pub rr: String,
    #[serde(rename = "Type")]
    pub record_type: String,
    pub value: String,
    #[serde(rename = "TTL")]
    pub ttl: u64,
    pub line: String,
    pub status: String,
    pub locked: bool,
}
