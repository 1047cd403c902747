use serde::Serialize;

use super::assistant::ChatMessageViewModel;

#[derive(Debug, Clone, Serialize)]
pub struct SectionListViewModel {
    pub role: String,
    pub sections: Vec<SectionEntryViewModel>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SectionEntryViewModel {
    pub shortcut: usize,
    pub slug: String,
    pub title: String,
    pub home: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct AskResultViewModel {
    pub role: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scenario: Option<String>,
    pub question: ChatMessageViewModel,
    pub reply: ChatMessageViewModel,
}

#[derive(Debug, Clone, Serialize)]
pub struct ConfigViewModel {
    pub path: String,
    pub exists: bool,
    pub toml: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ConfigPathViewModel {
    pub path: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct CatalogCheckViewModel {
    pub source: String,
    pub tables: Vec<TableCountViewModel>,
    pub issues: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct TableCountViewModel {
    pub table: String,
    pub rows: usize,
}
