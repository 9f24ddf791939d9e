//! Presentation data for derived PostgreSQL settings.
//!
//! Restart-required lookup, localized descriptions and UI strings,
//! documentation links, and SQL / conf renderings. Nothing here feeds back
//! into the derivation itself.

pub mod descriptions;
pub mod docs;
pub mod error;
pub mod i18n;
pub mod render;
pub mod report;
pub mod restart;

pub use descriptions::description;
pub use docs::{DocPage, doc_page, doc_url};
pub use error::{CatalogError, Result};
pub use i18n::{Lang, category_label, t, yes_no};
pub use render::{alter_system_script, alter_system_statement, conf_fragment};
pub use report::{Report, ReportRow, build_report};
pub use restart::is_restart_required;
