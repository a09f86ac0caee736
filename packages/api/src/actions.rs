//! Parameter builders for the DNS actions
//!
//! Each builder sets the action and its required parameters, then applies
//! `overlays` in order. Overlays may override anything, including `Action`.
//!
//! ```
//! use alidns::actions::{describe_domain_records, page_size};
//!
//! let params = describe_domain_records("example.com", [page_size(100, [])]);
//! assert_eq!(params.get("Action"), Some("DescribeDomainRecords"));
//! assert_eq!(params.get("PageSize"), Some("100"));
//! ```

use alidns_client::Params;

pub const ACTION: &str = "Action";
pub const DOMAIN_NAME: &str = "DomainName";
pub const RECORD_ID: &str = "RecordId";
pub const RR: &str = "RR";
pub const TYPE: &str = "Type";
pub const VALUE: &str = "Value";
pub const PAGE_NUMBER: &str = "PageNumber";
pub const PAGE_SIZE: &str = "PageSize";

pub const DESCRIBE_DOMAINS: &str = "DescribeDomains";
pub const DESCRIBE_DOMAIN_RECORDS: &str = "DescribeDomainRecords";
pub const DESCRIBE_DOMAIN_RECORD_INFO: &str = "DescribeDomainRecordInfo";
pub const ADD_DOMAIN_RECORD: &str = "AddDomainRecord";
pub const UPDATE_DOMAIN_RECORD: &str = "UpdateDomainRecord";
pub const DELETE_DOMAIN_RECORD: &str = "DeleteDomainRecord";

fn action(name: &str, overlays: impl IntoIterator<Item = Params>) -> Params {
    Params::new().with(ACTION, name).merge(overlays)
}

/// List the domains of the account.
#[must_use]
pub fn describe_domains(overlays: impl IntoIterator<Item = Params>) -> Params {
    action(DESCRIBE_DOMAINS, overlays)
}

/// List the records of `domain`.
#[must_use]
pub fn describe_domain_records(
    domain: &str,
    overlays: impl IntoIterator<Item = Params>,
) -> Params {
    Params::new()
        .with(ACTION, DESCRIBE_DOMAIN_RECORDS)
        .with(DOMAIN_NAME, domain)
        .merge(overlays)
}

/// Fetch one record by id.
#[must_use]
pub fn describe_domain_record_info(
    record_id: &str,
    overlays: impl IntoIterator<Item = Params>,
) -> Params {
    Params::new()
        .with(ACTION, DESCRIBE_DOMAIN_RECORD_INFO)
        .with(RECORD_ID, record_id)
        .merge(overlays)
}

/// Create a record. `rr` is the host part, `@` for the apex.
#[must_use]
pub fn add_domain_record(
    rr: &str,
    domain: &str,
    record_type: &str,
    value: &str,
    overlays: impl IntoIterator<Item = Params>,
) -> Params {
    Params::new()
        .with(ACTION, ADD_DOMAIN_RECORD)
        .with(RR, rr)
        .with(DOMAIN_NAME, domain)
        .with(TYPE, record_type)
        .with(VALUE, value)
        .merge(overlays)
}

/// Replace the host, type and value of an existing record.
#[must_use]
pub fn update_domain_record(
    record_id: &str,
    rr: &str,
    record_type: &str,
    value: &str,
    overlays: impl IntoIterator<Item = Params>,
) -> Params {
    Params::new()
        .with(ACTION, UPDATE_DOMAIN_RECORD)
        .with(RECORD_ID, record_id)
        .with(RR, rr)
        .with(TYPE, record_type)
        .with(VALUE, value)
        .merge(overlays)
}

#[must_use]
pub fn delete_domain_record(
    record_id: &str,
    overlays: impl IntoIterator<Item = Params>,
) -> Params {
    Params::new()
        .with(ACTION, DELETE_DOMAIN_RECORD)
        .with(RECORD_ID, record_id)
        .merge(overlays)
}

/// Select a page; `get_all` sets this itself.
#[must_use]
pub fn page(number: u64, overlays: impl IntoIterator<Item = Params>) -> Params {
    Params::new().with(PAGE_NUMBER, number).merge(overlays)
}

#[must_use]
pub fn page_size(size: u64, overlays: impl IntoIterator<Item = Params>) -> Params {
    Params::new().with(PAGE_SIZE, size).merge(overlays)
}
