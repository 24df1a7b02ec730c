//! `?page=&limit=` handling shared by scan history and the admin job-role listing.

use serde::{Deserialize, Serialize};

use crate::errors::AppError;

pub const DEFAULT_PAGE: i64 = 1;
pub const DEFAULT_LIMIT: i64 = 10;
pub const MAX_LIMIT: i64 = 100;

#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct PageQuery {
    pub page: Option<i64>,
    pub limit: Option<i64>,
}

/// A validated page window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page {
    pub page: i64,
    pub limit: i64,
}

impl PageQuery {
    pub fn validate(self) -> Result<Page, AppError> {
        let page = self.page.unwrap_or(DEFAULT_PAGE);
        let limit = self.limit.unwrap_or(DEFAULT_LIMIT);

        if page < 1 {
            return Err(AppError::Validation(
                "Page must be a positive integer".to_string(),
            ));
        }
        if !(1..=MAX_LIMIT).contains(&limit) {
            return Err(AppError::Validation(format!(
                "Limit must be between 1 and {MAX_LIMIT}"
            )));
        }

        // OFFSET must fit in an i64.
        if (page - 1).checked_mul(limit).is_none() {
            return Err(AppError::Validation(
                "Page must be a positive integer".to_string(),
            ));
        }

        Ok(Page { page, limit })
    }
}

impl Page {
    pub fn offset(&self) -> i64 {
        (self.page - 1).saturating_mul(self.limit)
    }

    pub fn meta(&self, total: i64) -> PageMeta {
        let total_pages = (total + self.limit - 1) / self.limit;
        PageMeta {
            total,
            page: self.page,
            limit: self.limit,
            total_pages,
            has_next_page: self.page < total_pages,
            has_prev_page: self.page > 1,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageMeta {
    pub total: i64,
    pub page: i64,
    pub limit: i64,
    pub total_pages: i64,
    pub has_next_page: bool,
    pub has_prev_page: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let page = PageQuery::default().validate().unwrap();
        assert_eq!(page, Page { page: 1, limit: 10 });
        assert_eq!(page.offset(), 0);
    }

    #[test]
    fn test_rejects_out_of_range() {
        let bad = [
            PageQuery { page: Some(0), limit: None },
            PageQuery { page: None, limit: Some(0) },
            PageQuery { page: None, limit: Some(101) },
        ];
        for query in bad {
            assert!(matches!(query.validate(), Err(AppError::Validation(_))));
        }
    }

    #[test]
    fn test_rejects_page_whose_offset_overflows() {
        let query = PageQuery {
            page: Some(i64::MAX),
            limit: Some(10),
        };
        assert!(matches!(query.validate(), Err(AppError::Validation(_))));

        let last = PageQuery {
            page: Some(i64::MAX / 100),
            limit: Some(100),
        };
        let page = last.validate().unwrap();
        assert!(page.offset() > 0);
    }

    #[test]
    fn test_meta_math() {
        let page = Page { page: 2, limit: 10 };
        assert_eq!(page.offset(), 10);
        let meta = page.meta(25);
        assert_eq!(meta.total_pages, 3);
        assert!(meta.has_next_page);
        assert!(meta.has_prev_page);

        let last = Page { page: 3, limit: 10 }.meta(25);
        assert!(!last.has_next_page);
    }

    #[test]
    fn test_meta_empty() {
        let meta = Page { page: 1, limit: 10 }.meta(0);
        assert_eq!(meta.total_pages, 0);
        assert!(!meta.has_next_page);
        assert!(!meta.has_prev_page);
    }

    #[test]
    fn test_meta_serializes_camel_case() {
        let value = serde_json::to_value(Page { page: 1, limit: 5 }.meta(6)).unwrap();
        assert_eq!(value["totalPages"], 2);
        assert_eq!(value["hasNextPage"], true);
        assert_eq!(value["hasPrevPage"], false);
    }
}
