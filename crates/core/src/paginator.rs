//! Paginator constructors

use crate::capability::{Oper, Paginator};
use crate::descriptor::Op;
use crate::payload::{PageSize, Payload};

/// Page request
pub const PAGE: &str = "Page";

/// Request `size` rows of 1-based `page`
///
/// No bounds checking: zero or negative arguments are a caller error and
/// reach the converter unchanged.
pub fn paginate(page: i64, size: i64) -> Paginator {
    Op::new(PAGE, "", Payload::Page(PageSize::new(page, size))).paginator()
}

impl Paginator {
    /// The page request, if the payload is one
    pub fn page_size(&self) -> Option<&PageSize> {
        self.value().as_page()
    }
}

/// Row limit of a paginator
///
/// Returns 0 when there is no paginator or when its payload cannot produce
/// a limit, so "no pagination" and "pagination without a limit" look the
/// same to the caller.
pub fn get_limit(paginator: Option<&Paginator>) -> i64 {
    paginator
        .and_then(|p| p.value().as_limiter())
        .map_or(0, |limiter| limiter.limit())
}
