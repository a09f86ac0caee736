//! Paginated retrieval
//!
//! Pages are fetched strictly one after another. After each page the counters
//! are extracted through the same path pipeline as caller bindings, and the
//! loop continues while the current page is below `ceil(total / size)`.

use tracing::debug;

use super::core::Client;
use crate::config::PaginationConfig;
use crate::error::Result;
use crate::extract::{self, BindingMode, Bindings, Document, Path, Scalar};
use crate::http::Params;
use crate::transport::CallContext;

/// Counters reported by one page.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PageState {
    pub page_number: u64,
    pub total_count: u64,
    pub page_size: u64,
}

impl PageState {
    /// Read the counters from `document`. A missing or zero page number means
    /// the server returned the page that was asked for.
    ///
    /// # Errors
    ///
    /// Returns a decode error if a counter is present but not an integer.
    pub fn extract(document: &Document, config: &PaginationConfig, requested: u64) -> Result<Self> {
        let value = document.value()?;
        let counter = |path: &str| -> Result<u64> {
            let mut slot = 0u64;
            extract::bind(value, &Path::parse(path), &mut Scalar::new(&mut slot))?;
            Ok(slot)
        };

        let page_number = match counter(&config.page_number_path)? {
            0 => requested,
            n => n,
        };
        Ok(Self {
            page_number,
            total_count: counter(&config.total_count_path)?,
            page_size: counter(&config.page_size_path)?,
        })
    }

    /// `ceil(total_count / page_size)`, or `None` when either is zero.
    #[must_use]
    pub fn total_pages(&self) -> Option<u64> {
        if self.total_count == 0 || self.page_size == 0 {
            return None;
        }
        Some(self.total_count.div_ceil(self.page_size))
    }

    /// Whether another page should be requested.
    #[must_use]
    pub fn has_next(&self) -> bool {
        self.total_pages()
            .is_some_and(|pages| self.page_number < pages)
    }
}

impl Client {
    /// Fetch every page of an action, binding each page in order.
    ///
    /// Sequences accumulate across pages. On error the values bound from
    /// earlier pages are kept.
    ///
    /// # Errors
    ///
    /// Returns an arity error before any request if a binding has no path.
    /// Otherwise returns the first error from any page.
    pub async fn get_all(
        &self,
        params: Params,
        bindings: &mut Bindings<'_>,
        ctx: &CallContext,
    ) -> Result<()> {
        bindings.validate(BindingMode::Paginated)?;
        let pagination = &self.config.pagination;

        let mut state = PageState::default();
        loop {
            let requested = state.page_number + 1;
            let page_params = params
                .clone()
                .merge([Params::new().with(&pagination.page_number_param, requested)]);

            let document = self.fetch_document(page_params, ctx).await?;
            bindings.apply(&document)?;

            state = PageState::extract(&document, pagination, requested)?;
            debug!(
                page = state.page_number,
                total_count = state.total_count,
                page_size = state.page_size,
                "page fetched"
            );
            if !state.has_next() {
                return Ok(());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> PaginationConfig {
        PaginationConfig::default()
    }

    #[test]
    fn test_total_pages_rounds_up() {
        let state = PageState {
            page_number: 1,
            total_count: 7,
            page_size: 3,
        };
        assert_eq!(state.total_pages(), Some(3));
        assert!(state.has_next());
        assert!(
            !PageState {
                page_number: 3,
                ..state
            }
            .has_next()
        );
    }

    #[test]
    fn test_zero_counters_stop() {
        let empty = PageState {
            page_number: 1,
            total_count: 0,
            page_size: 20,
        };
        assert_eq!(empty.total_pages(), None);
        assert!(!empty.has_next());

        let no_size = PageState {
            page_number: 1,
            total_count: 5,
            page_size: 0,
        };
        assert!(!no_size.has_next());
    }

    #[test]
    fn test_extract_counters() {
        let doc = Document::from(r#"{"PageNumber":2,"TotalCount":7,"PageSize":3}"#);
        let state = PageState::extract(&doc, &config(), 2).expect("counters decode");
        assert_eq!(
            state,
            PageState {
                page_number: 2,
                total_count: 7,
                page_size: 3
            }
        );
    }

    #[test]
    fn test_missing_page_number_uses_requested() {
        let doc = Document::from(r#"{"TotalCount":7,"PageSize":3}"#);
        let state = PageState::extract(&doc, &config(), 2).expect("counters decode");
        assert_eq!(state.page_number, 2);
        assert!(state.has_next());
    }

    #[test]
    fn test_non_integer_counter_is_decode_error() {
        let doc = Document::from(r#"{"TotalCount":"many","PageSize":3}"#);
        let err = PageState::extract(&doc, &config(), 1).expect_err("string counter");
        assert!(err.is_decode());
    }

    #[test]
    fn test_custom_counter_paths() {
        let config = PaginationConfig {
            total_count_path: "Paging.Total".to_string(),
            page_size_path: "Paging.Size".to_string(),
            page_number_path: "Paging.Page".to_string(),
            ..PaginationConfig::default()
        };
        let doc = Document::from(r#"{"Paging":{"Total":10,"Size":5,"Page":1}}"#);
        let state = PageState::extract(&doc, &config, 1).expect("counters decode");
        assert_eq!(state.total_pages(), Some(2));
    }
}
