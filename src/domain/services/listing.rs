//! Turns untrusted listing parameters into parameterized count/list SQL.
//!
//! User-supplied values only ever travel through bind parameters. The two
//! positions that cannot be bound (ORDER BY column, LIMIT/OFFSET) are a
//! whitelisted enum and computed integers.

use crate::domain::models::user::UserStatus;

pub const PAGE_SIZE: i64 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortField {
    Id,
    Name,
    Email,
    Phone,
    CreatedAt,
}

impl SortField {
    /// Unknown input silently falls back to `id`.
    pub fn resolve(raw: &str) -> Self {
        match raw {
            "name" => SortField::Name,
            "email" => SortField::Email,
            "phone" => SortField::Phone,
            "created_at" => SortField::CreatedAt,
            _ => SortField::Id,
        }
    }

    pub fn column(self) -> &'static str {
        match self {
            SortField::Id => "id",
            SortField::Name => "name",
            SortField::Email => "email",
            SortField::Phone => "phone",
            SortField::CreatedAt => "created_at",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusFilter {
    All,
    Only(UserStatus),
}

impl StatusFilter {
    /// Unknown input silently falls back to `all`.
    pub fn resolve(raw: &str) -> Self {
        match raw {
            "active" => StatusFilter::Only(UserStatus::Active),
            "inactive" => StatusFilter::Only(UserStatus::Inactive),
            _ => StatusFilter::All,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            StatusFilter::All => "all",
            StatusFilter::Only(status) => status.as_str(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct ListQuery {
    pub search: String,
    pub status: StatusFilter,
    pub sort: SortField,
    pub page: i64,
}

impl ListQuery {
    pub fn from_params(
        search: Option<String>,
        status: Option<String>,
        sort_by: Option<String>,
        page: Option<i64>,
    ) -> Self {
        Self {
            search: search.unwrap_or_default().trim().to_string(),
            status: StatusFilter::resolve(status.as_deref().unwrap_or("all")),
            sort: SortField::resolve(sort_by.as_deref().unwrap_or("id")),
            // the upper bound is deliberately not clamped: a page past the
            // end is an empty page, not an error
            page: page.unwrap_or(1).max(1),
        }
    }
}

/// Count and list statements sharing one WHERE clause and one bind list.
/// The list statement appends ORDER BY / LIMIT / OFFSET only.
#[derive(Debug)]
pub struct ListSql {
    pub count_sql: String,
    pub list_sql: String,
    pub binds: Vec<String>,
}

pub fn build_sql(query: &ListQuery) -> ListSql {
    let mut where_clause = String::from(" WHERE 1=1");
    let mut binds = Vec::new();

    if !query.search.is_empty() {
        where_clause.push_str(" AND (name LIKE ? OR email LIKE ?)");
        let term = format!("%{}%", query.search);
        binds.push(term.clone());
        binds.push(term);
    }

    if let StatusFilter::Only(status) = query.status {
        where_clause.push_str(" AND status = ?");
        binds.push(status.as_str().to_string());
    }

    let count_sql = format!("SELECT COUNT(*) FROM users{where_clause}");

    let offset = (query.page - 1) * PAGE_SIZE;
    let list_sql = format!(
        "SELECT id, name, email, phone, address, status, created_at, updated_at \
         FROM users{where_clause} ORDER BY {} LIMIT {PAGE_SIZE} OFFSET {offset}",
        query.sort.column()
    );

    ListSql {
        count_sql,
        list_sql,
        binds,
    }
}

pub fn total_pages(total: i64) -> i64 {
    (total + PAGE_SIZE - 1) / PAGE_SIZE
}
