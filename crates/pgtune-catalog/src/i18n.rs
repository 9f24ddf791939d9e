//! UI strings for the two supported locales.
//!
//! Lookup contract: a key with no entry in the requested language resolves
//! to the key itself, so a missing translation shows up as its identifier
//! instead of an empty cell.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use pgtune_core::Category;
use serde::{Deserialize, Serialize};

use crate::error::CatalogError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Lang {
    #[default]
    Zh,
    En,
}

impl Lang {
    pub fn as_str(self) -> &'static str {
        match self {
            Lang::Zh => "zh",
            Lang::En => "en",
        }
    }
}

impl fmt::Display for Lang {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Lang {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "zh" => Ok(Lang::Zh),
            "en" => Ok(Lang::En),
            _ => Err(CatalogError::UnknownLanguage(s.to_string())),
        }
    }
}

const ZH: &[(&str, &str)] = &[
    ("title", "PostgreSQL 性能参数优化工具"),
    ("subtitle", "根据您的服务器配置自动生成优化的 PostgreSQL 参数"),
    ("serverConfig", "服务器配置"),
    ("dbVersion", "PostgreSQL 版本"),
    ("cpuCores", "CPU 核心数"),
    ("memoryGB", "内存 (GB)"),
    ("storageType", "存储类型"),
    ("ssd", "SSD"),
    ("hdd", "机械硬盘 (HDD)"),
    ("generatedParams", "生成的配置参数"),
    ("paramName", "参数名"),
    ("paramValue", "参数值"),
    ("restartRequired", "是否需要重启"),
    ("description", "描述"),
    ("category", "分类"),
    ("yes", "是"),
    ("no", "否"),
    ("noParams", "没有可复制的配置参数，请先生成配置"),
    ("viewDoc", "查看官方文档"),
    ("alterSystemSQL", "ALTER SYSTEM SQL 语句"),
    ("restartNotice", "以下参数需要重启服务才能生效"),
    ("paramDescriptionDefault", "该参数的详细说明请参考 PostgreSQL 官方文档"),
    ("categoryPerformance", "性能相关参数"),
    ("categoryAutovacuum", "自动清理相关配置"),
    ("categoryTimeout", "超时相关"),
    ("categoryLogging", "日志记录相关"),
    ("categoryOther", "其他参数"),
];

const EN: &[(&str, &str)] = &[
    ("title", "PostgreSQL Performance Parameter Optimizer"),
    (
        "subtitle",
        "Automatically generate optimized PostgreSQL parameters based on your server configuration",
    ),
    ("serverConfig", "Server Configuration"),
    ("dbVersion", "PostgreSQL Version"),
    ("cpuCores", "CPU Cores"),
    ("memoryGB", "Memory (GB)"),
    ("storageType", "Storage Type"),
    ("ssd", "SSD"),
    ("hdd", "Hard Disk Drive (HDD)"),
    ("generatedParams", "Generated Configuration Parameters"),
    ("paramName", "Parameter Name"),
    ("paramValue", "Parameter Value"),
    ("restartRequired", "Restart Required"),
    ("description", "Description"),
    ("category", "Category"),
    ("yes", "Yes"),
    ("no", "No"),
    (
        "noParams",
        "No parameters to copy, please generate configuration first",
    ),
    ("viewDoc", "View Official Documentation"),
    ("alterSystemSQL", "ALTER SYSTEM SQL Statements"),
    (
        "restartNotice",
        "The following parameters require a server restart to take effect",
    ),
    (
        "paramDescriptionDefault",
        "Please refer to PostgreSQL official documentation for detailed description of this parameter",
    ),
    ("categoryPerformance", "Performance Parameters"),
    ("categoryAutovacuum", "Autovacuum Configuration"),
    ("categoryTimeout", "Timeout Settings"),
    ("categoryLogging", "Logging Configuration"),
    ("categoryOther", "Other Parameters"),
];

static TRANSLATIONS: LazyLock<HashMap<Lang, HashMap<&'static str, &'static str>>> =
    LazyLock::new(|| {
        HashMap::from([
            (Lang::Zh, ZH.iter().copied().collect()),
            (Lang::En, EN.iter().copied().collect()),
        ])
    });

/// Translate a UI key, falling back to the key itself.
pub fn t<'a>(key: &'a str, lang: Lang) -> &'a str {
    TRANSLATIONS
        .get(&lang)
        .and_then(|table| table.get(key).copied())
        .unwrap_or(key)
}

/// Translation key for a category label.
pub fn category_key(category: Category) -> &'static str {
    match category {
        Category::Performance => "categoryPerformance",
        Category::Autovacuum => "categoryAutovacuum",
        Category::Timeout => "categoryTimeout",
        Category::Logging => "categoryLogging",
        Category::Other => "categoryOther",
    }
}

pub fn category_label(category: Category, lang: Lang) -> &'static str {
    t(category_key(category), lang)
}

/// Localized yes/no.
pub fn yes_no(value: bool, lang: Lang) -> &'static str {
    t(if value { "yes" } else { "no" }, lang)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup() {
        assert_eq!(t("yes", Lang::Zh), "是");
        assert_eq!(t("yes", Lang::En), "Yes");
    }

    #[test]
    fn test_missing_key_falls_back_to_key() {
        assert_eq!(t("noSuchKey", Lang::En), "noSuchKey");
        assert_eq!(t("noSuchKey", Lang::Zh), "noSuchKey");
    }

    #[test]
    fn test_both_tables_have_same_keys() {
        let zh: Vec<_> = ZH.iter().map(|(k, _)| *k).collect();
        let en: Vec<_> = EN.iter().map(|(k, _)| *k).collect();
        assert_eq!(zh, en);
    }

    #[test]
    fn test_category_labels() {
        assert_eq!(category_label(Category::Timeout, Lang::En), "Timeout Settings");
        assert_eq!(category_label(Category::Autovacuum, Lang::Zh), "自动清理相关配置");
        for category in Category::ALL {
            assert_ne!(category_label(category, Lang::En), category_key(category));
        }
    }

    #[test]
    fn test_lang_parse() {
        assert_eq!("EN".parse::<Lang>().unwrap(), Lang::En);
        assert_eq!("zh".parse::<Lang>().unwrap(), Lang::Zh);
        assert!("fr".parse::<Lang>().is_err());
    }
}
