//! Default values for `ClientConfig`, matching the public AliDNS endpoint

use std::time::Duration;

use url::Url;

use super::types::{ClientConfig, PaginationConfig};

pub const DEFAULT_ENDPOINT: &str = "https://alidns.aliyuncs.com/";
pub const DEFAULT_API_VERSION: &str = "2015-01-09";
pub const DEFAULT_FORMAT: &str = "json";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);
pub const DEFAULT_USER_AGENT: &str = concat!("alidns-rs/", env!("CARGO_PKG_VERSION"));

pub const PAGE_NUMBER: &str = "PageNumber";
pub const TOTAL_COUNT: &str = "TotalCount";
pub const PAGE_SIZE: &str = "PageSize";

fn default_endpoint() -> Url {
    // constant input, covered by test_default_config_is_valid
    Url::parse(DEFAULT_ENDPOINT).unwrap_or_else(|_| unreachable!("default endpoint is a valid URL"))
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            api_version: DEFAULT_API_VERSION.to_string(),
            format: DEFAULT_FORMAT.to_string(),
            timeout: DEFAULT_TIMEOUT,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            pagination: PaginationConfig::default(),
        }
    }
}

impl Default for PaginationConfig {
    fn default() -> Self {
        Self {
            page_number_path: PAGE_NUMBER.to_string(),
            total_count_path: TOTAL_COUNT.to_string(),
            page_size_path: PAGE_SIZE.to_string(),
            page_number_param: PAGE_NUMBER.to_string(),
        }
    }
}
