use std::fmt;

use pgtune_core::DeriveError;

#[derive(Debug)]
pub enum CatalogError {
    UnknownLanguage(String),
    Derive(DeriveError),
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogError::UnknownLanguage(lang) => {
                write!(f, "unknown language '{lang}' (expected 'zh' or 'en')")
            }
            CatalogError::Derive(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for CatalogError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CatalogError::Derive(e) => Some(e),
            CatalogError::UnknownLanguage(_) => None,
        }
    }
}

impl From<DeriveError> for CatalogError {
    fn from(e: DeriveError) -> Self {
        CatalogError::Derive(e)
    }
}

pub type Result<T> = std::result::Result<T, CatalogError>;
