//! Pagination query parsing helpers.

use salvo::oapi::extract::QueryParam;

/// Parsed `page`/`limit` query parameters.
#[derive(Debug, Clone, Copy)]
pub(crate) struct PageParams {
    pub(crate) page: u32,
    pub(crate) limit: u32,
}

impl PageParams {
    /// Resolve optional query parameters; the service layer clamps the
    /// values it is unwilling to honour.
    pub(crate) fn resolve(
        page: QueryParam<u32, false>,
        limit: QueryParam<u32, false>,
    ) -> Self {
        Self {
            page: page.into_inner().unwrap_or(1),
            limit: limit.into_inner().unwrap_or(20),
        }
    }
}
