//! # Catalog Errors
//!
//! One error type for the whole engine. Variants fall into two groups:
//!
//! - **Build-time** (`DuplicateRoute`, `EmptyPage`, `DuplicateTabLabel`):
//!   a bad route table. Catalog assembly stops and startup aborts.
//! - **Runtime** (`RouteNotFound`, `InvalidTabIndex`, `NoActivePage`):
//!   returned to whoever issued the request. State is left untouched and
//!   the process keeps running.

/// Errors raised while building or driving the catalog.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CatalogError {
    #[error("route '{0}' is already registered")]
    DuplicateRoute(String),

    #[error("no page registered for route '{0}'")]
    RouteNotFound(String),

    #[error("tab index {index} is out of range (page has {tab_count} tabs)")]
    InvalidTabIndex { index: usize, tab_count: usize },

    #[error("page '{0}' has no tabs")]
    EmptyPage(String),

    #[error("page '{route_key}' defines tab '{label}' more than once")]
    DuplicateTabLabel { route_key: String, label: String },

    #[error("no page is active")]
    NoActivePage,
}

impl CatalogError {
    /// True for errors that only happen while assembling the catalog.
    pub fn is_build_time(&self) -> bool {
        matches!(
            self,
            CatalogError::DuplicateRoute(_)
                | CatalogError::EmptyPage(_)
                | CatalogError::DuplicateTabLabel { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        assert_eq!(
            CatalogError::RouteNotFound("nope".into()).to_string(),
            "no page registered for route 'nope'"
        );
        assert_eq!(
            CatalogError::InvalidTabIndex { index: 5, tab_count: 2 }.to_string(),
            "tab index 5 is out of range (page has 2 tabs)"
        );
    }

    #[test]
    fn test_build_time_classification() {
        assert!(CatalogError::DuplicateRoute("a".into()).is_build_time());
        assert!(CatalogError::EmptyPage("a".into()).is_build_time());
        assert!(!CatalogError::RouteNotFound("a".into()).is_build_time());
        assert!(!CatalogError::NoActivePage.is_build_time());
    }
}
