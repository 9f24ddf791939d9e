//! Derived parameters decorated for display.

use pgtune_core::{Category, ConfigInput, DerivedParameter, FORMULA_VERSION, derive};
use serde::Serialize;

use crate::descriptions::description;
use crate::docs::doc_url;
use crate::error::Result;
use crate::i18n::{Lang, category_label};
use crate::restart::is_restart_required;

#[derive(Debug, Clone, Serialize)]
pub struct ReportRow {
    pub name: &'static str,
    pub value: String,
    pub category: Category,
    pub category_label: &'static str,
    pub restart_required: bool,
    pub description: &'static str,
    pub doc_url: String,
}

impl ReportRow {
    pub fn new(param: &DerivedParameter, db_version: &str, lang: Lang) -> Self {
        Self {
            name: param.name,
            value: param.value.clone(),
            category: param.category,
            category_label: category_label(param.category, lang),
            restart_required: is_restart_required(param.name),
            description: description(param.name, lang),
            doc_url: doc_url(param.name, db_version),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Report {
    pub formula_version: u32,
    pub lang: Lang,
    pub input: ConfigInput,
    pub rows: Vec<ReportRow>,
}

impl Report {
    /// Bare parameter list, in derivation order.
    pub fn parameters(&self) -> Vec<DerivedParameter> {
        self.rows
            .iter()
            .map(|r| DerivedParameter {
                name: r.name,
                value: r.value.clone(),
                category: r.category,
            })
            .collect()
    }

    /// Rows grouped by category in display order; empty groups are skipped.
    pub fn grouped(&self) -> Vec<(Category, Vec<&ReportRow>)> {
        Category::ALL
            .into_iter()
            .map(|c| (c, self.rows.iter().filter(|r| r.category == c).collect::<Vec<_>>()))
            .filter(|(_, rows)| !rows.is_empty())
            .collect()
    }

    pub fn restart_required(&self) -> impl Iterator<Item = &ReportRow> {
        self.rows.iter().filter(|r| r.restart_required)
    }
}

/// Derive parameters for `input` and decorate them in `lang`.
pub fn build_report(input: &ConfigInput, lang: Lang) -> Result<Report> {
    let params = derive(input)?;
    tracing::debug!(
        cpu_cores = input.cpu_cores,
        memory_gb = input.memory_gb,
        storage = %input.storage_type,
        count = params.len(),
        "derived parameters"
    );
    let rows = params
        .iter()
        .map(|p| ReportRow::new(p, &input.db_version, lang))
        .collect();
    Ok(Report {
        formula_version: FORMULA_VERSION,
        lang,
        input: input.clone(),
        rows,
    })
}
