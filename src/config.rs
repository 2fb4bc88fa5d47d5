use crate::error::{Error, Result};

/// Number of bills shown per page unless the caller overrides it.
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Configuration for the bill view pipeline
#[derive(Debug, Clone, Copy)]
pub struct ViewConfig {
    pub page_size: usize,
}

impl ViewConfig {
    /// Create a configuration with an explicit page size.
    /// A zero page size is a caller programming error and is rejected
    /// eagerly rather than producing nonsensical pagination.
    pub fn new(page_size: usize) -> Result<Self> {
        let config = Self { page_size };
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.page_size == 0 {
            return Err(Error::Config(
                "page size must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

/// Caller-owned view state: the search box contents and the selected page.
/// The pipeline itself is stateless; the UI layer holds one of these and
/// passes its fields into `compute_view` on every change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewState {
    pub search_term: String,
    pub current_page: usize,
}

impl ViewState {
    pub fn new() -> Self {
        Self {
            search_term: String::new(),
            current_page: 1,
        }
    }

    /// Replace the search term. Changing the term resets the current page
    /// to 1 so the caller never requests a page beyond the new filtered set.
    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.search_term = term.into();
        self.current_page = 1;
    }

    /// Select a page. Values below 1 are normalized to 1.
    pub fn go_to_page(&mut self, page: usize) {
        self.current_page = page.max(1);
    }
}

impl Default for ViewState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_page_size_rejected() {
        assert!(ViewConfig::new(0).is_err());
        assert!(ViewConfig::new(1).is_ok());
    }

    #[test]
    fn test_default_config_is_valid() {
        let config = ViewConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.page_size, 10);
    }

    #[test]
    fn test_search_term_change_resets_page() {
        let mut state = ViewState::new();
        state.go_to_page(4);
        assert_eq!(state.current_page, 4);

        state.set_search_term("SB");
        assert_eq!(state.search_term, "SB");
        assert_eq!(state.current_page, 1);
    }

    #[test]
    fn test_go_to_page_normalizes_zero() {
        let mut state = ViewState::new();
        state.go_to_page(0);
        assert_eq!(state.current_page, 1);
    }
}
