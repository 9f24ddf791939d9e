//! Links into the PostgreSQL server configuration manual.
//!
//! Rules are checked top to bottom and the first match wins. The order is
//! what keeps overlapping prefixes apart: `wal_sender_timeout` is a WAL
//! setting before it is a timeout, and `max_wal_size` must reach the WAL page
//! before the generic `max_` resource rule sees it.

const DOCS_BASE: &str = "https://www.postgresql.org/docs";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocPage {
    Autovacuum,
    Wal,
    Logging,
    Resource,
    Client,
    /// Configuration chapter index; carries no anchor.
    Index,
}

impl DocPage {
    pub fn file(self) -> &'static str {
        match self {
            DocPage::Autovacuum => "runtime-config-autovacuum.html",
            DocPage::Wal => "runtime-config-wal.html",
            DocPage::Logging => "runtime-config-logging.html",
            DocPage::Resource => "runtime-config-resource.html",
            DocPage::Client => "runtime-config-client.html",
            DocPage::Index => "runtime-config.html",
        }
    }
}

struct DocRule {
    matches: fn(&str) -> bool,
    page: DocPage,
}

const DOC_RULES: &[DocRule] = &[
    DocRule {
        matches: |n| n.starts_with("autovacuum") || n.starts_with("vacuum"),
        page: DocPage::Autovacuum,
    },
    DocRule {
        matches: |n| n.starts_with("wal_") || n.starts_with("max_wal_") || n.starts_with("min_wal_"),
        page: DocPage::Wal,
    },
    DocRule {
        matches: |n| n.starts_with("log_") || n == "logging_collector",
        page: DocPage::Logging,
    },
    DocRule {
        matches: |n| {
            n.starts_with("max_")
                || n.starts_with("shared_")
                || matches!(n, "work_mem" | "maintenance_work_mem" | "effective_cache_size")
        },
        page: DocPage::Resource,
    },
    DocRule {
        matches: |n| n.contains("timeout") || n.contains("TimeZone"),
        page: DocPage::Client,
    },
];

/// Page a parameter is documented on.
pub fn doc_page(name: &str) -> DocPage {
    DOC_RULES
        .iter()
        .find(|rule| (rule.matches)(name))
        .map(|rule| rule.page)
        .unwrap_or(DocPage::Index)
}

/// Full documentation URL for a parameter in the given server version.
pub fn doc_url(name: &str, db_version: &str) -> String {
    let page = doc_page(name);
    let base = format!("{DOCS_BASE}/{db_version}/{}", page.file());
    if page == DocPage::Index {
        return base;
    }
    format!("{base}#{}", anchor(name))
}

fn anchor(name: &str) -> String {
    format!("guc-{}", name.to_ascii_lowercase().replace('_', "-"))
}
