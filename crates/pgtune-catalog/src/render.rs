//! Text renderings of a derived parameter list: `ALTER SYSTEM` script and a
//! `postgresql.conf` fragment.

use std::fmt::Write;

use pgtune_core::{Category, DerivedParameter};

use crate::i18n::{Lang, category_label, t};
use crate::restart::is_restart_required;

/// Quote a value as a SQL string literal.
fn quote(value: &str) -> String {
    format!("'{}'", value.replace('\'', "''"))
}

/// One `ALTER SYSTEM SET` statement.
pub fn alter_system_statement(param: &DerivedParameter) -> String {
    format!("ALTER SYSTEM SET {} = {};", param.name, quote(&param.value))
}

/// Full script in derivation order, ending with a config reload.
///
/// When any parameter needs a restart, a leading comment lists them, since
/// the reload alone will not apply those.
pub fn alter_system_script(params: &[DerivedParameter], lang: Lang) -> String {
    let mut out = String::new();
    if params.is_empty() {
        let _ = writeln!(out, "-- {}", t("noParams", lang));
        return out;
    }

    let restart: Vec<&str> = params
        .iter()
        .map(|p| p.name)
        .filter(|name| is_restart_required(name))
        .collect();
    if !restart.is_empty() {
        let _ = writeln!(out, "-- {}: {}", t("restartNotice", lang), restart.join(", "));
    }

    for param in params {
        let _ = writeln!(out, "{}", alter_system_statement(param));
    }
    out.push_str("SELECT pg_reload_conf();\n");
    out
}

/// `postgresql.conf` fragment grouped under localized category headers.
pub fn conf_fragment(params: &[DerivedParameter], lang: Lang) -> String {
    let mut out = String::new();
    for category in Category::ALL {
        let group: Vec<&DerivedParameter> =
            params.iter().filter(|p| p.category == category).collect();
        if group.is_empty() {
            continue;
        }
        if !out.is_empty() {
            out.push('\n');
        }
        let _ = writeln!(out, "# {}", category_label(category, lang));
        for param in group {
            let _ = writeln!(out, "{} = {}", param.name, quote(&param.value));
        }
    }
    out
}
