use serde::Deserialize;

const MAX_PER_PAGE: u64 = 100;

/// Query-string pagination parameters shared by the listing endpoints.
/// Each route supplies its own default page size (8 for reference data,
/// 9 for the admin user listing, 12 for personal lists).
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct PageQuery {
    pub page: Option<u64>,
    pub per_page: Option<u64>,
}

/// Resolved offset/limit window, 1-based page numbering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page {
    pub number: u64,
    pub offset: u64,
    pub limit: u64,
}

impl PageQuery {
    pub fn resolve(self, default_per_page: u64) -> Page {
        let number = self.page.unwrap_or(1).max(1);
        let limit = self
            .per_page
            .unwrap_or(default_per_page)
            .clamp(1, MAX_PER_PAGE);

        Page {
            number,
            offset: (number - 1) * limit,
            limit,
        }
    }
}

impl Page {
    /// Window covering everything; used where a service call needs the
    /// full set (dictionaries, search).
    pub fn all() -> Self {
        Page {
            number: 1,
            offset: 0,
            limit: u64::MAX,
        }
    }
}
