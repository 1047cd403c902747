use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct AssistantPanelViewModel {
    pub open: bool,
    pub thinking: bool,
    pub input: String,
    pub placeholder: String,
    /// Scenario tag for employee submissions; absent for managers.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scenario: Option<String>,
    pub queued: usize,
    pub messages: Vec<ChatMessageViewModel>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ChatMessageViewModel {
    pub id: u64,
    pub sender: String,
    pub time: String,
    pub content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payload: Option<PayloadViewModel>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PayloadViewModel {
    Analysis(AnalysisViewModel),
    Report(ReportViewModel),
    Memory(MemoryLookupViewModel),
}

#[derive(Debug, Clone, Serialize)]
pub struct AnalysisViewModel {
    pub summary: String,
    pub evidence: Vec<EvidenceViewModel>,
    pub recommendation: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct EvidenceViewModel {
    pub icon: String,
    pub title: String,
    pub value: String,
    pub description: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ReportViewModel {
    pub title: String,
    pub date_label: String,
    pub sections: Vec<ReportSectionViewModel>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ReportSectionViewModel {
    pub heading: String,
    pub bullets: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct MemoryLookupViewModel {
    pub summary: String,
    pub attachments: Vec<AttachmentViewModel>,
}

#[derive(Debug, Clone, Serialize)]
pub struct AttachmentViewModel {
    pub memory_id: u32,
    pub title: String,
    pub app: String,
    pub timestamp: String,
    pub category: String,
}
