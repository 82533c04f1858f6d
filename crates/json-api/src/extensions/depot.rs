//! Depot helper extensions.

use std::any::Any;

use salvo::prelude::{Depot, StatusError};
use tracing::error;

/// Helpers for mapping depot extraction failures to HTTP errors.
pub(crate) trait DepotExt {
    /// Fetch an injected value, or fail the request with a 500.
    fn obtain_or_500<T: Any + Send + Sync>(&self) -> Result<&T, StatusError>;
}

impl DepotExt for Depot {
    fn obtain_or_500<T: Any + Send + Sync>(&self) -> Result<&T, StatusError> {
        self.obtain::<T>().map_err(|_missing| {
            error!(
                type_name = std::any::type_name::<T>(),
                "missing injected depot value"
            );

            StatusError::internal_server_error()
        })
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use salvo::http::StatusCode;

    use super::*;

    #[test]
    fn injected_value_is_returned() {
        let mut depot = Depot::new();

        depot.inject(Arc::new(7_u8));

        assert_eq!(
            depot.obtain_or_500::<Arc<u8>>().ok().map(|value| **value),
            Some(7),
            "injected value"
        );
    }

    #[test]
    fn missing_value_is_a_500() {
        let depot = Depot::new();

        assert!(
            depot
                .obtain_or_500::<Arc<u8>>()
                .is_err_and(|error| error.code == StatusCode::INTERNAL_SERVER_ERROR),
            "expected 500"
        );
    }
}
