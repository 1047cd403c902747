use mohan_engine::{Catalog, DashboardState};
use mohan_types::{ChatMessage, ChatPayload, Role, Sender, StandupReport};

use crate::presentation::formatters::icon_glyph;
use crate::presentation::view_models::{
    AnalysisViewModel, AssistantPanelViewModel, AttachmentViewModel, ChatMessageViewModel,
    EvidenceViewModel, MemoryLookupViewModel, PayloadViewModel, ReportSectionViewModel,
    ReportViewModel,
};

pub fn present_assistant(state: &DashboardState, catalog: &Catalog) -> AssistantPanelViewModel {
    let assistant = &state.assistant;
    let role = state.role();

    let placeholder = match role {
        Role::Manager => format!("Ask about strategy drift, e.g. \"{}\"", catalog.default_question),
        Role::Employee => "Ask about your past work or draft a standup".to_string(),
    };

    AssistantPanelViewModel {
        open: state.panels.assistant_window,
        thinking: assistant.is_thinking(),
        input: assistant.input.clone(),
        placeholder,
        scenario: match role {
            Role::Manager => None,
            Role::Employee => Some(assistant.scenario.as_str().to_string()),
        },
        queued: assistant.queued(),
        messages: assistant.messages.iter().map(present_message).collect(),
    }
}

pub fn present_message(message: &ChatMessage) -> ChatMessageViewModel {
    ChatMessageViewModel {
        id: message.id,
        sender: match message.sender {
            Sender::User => "user".to_string(),
            Sender::Assistant => "assistant".to_string(),
        },
        time: message.sent_at.format("%H:%M").to_string(),
        content: message.content.clone(),
        payload: message.payload.as_ref().map(present_payload),
    }
}

pub fn present_payload(payload: &ChatPayload) -> PayloadViewModel {
    match payload {
        ChatPayload::Analysis(card) => PayloadViewModel::Analysis(AnalysisViewModel {
            summary: card.summary.clone(),
            evidence: card
                .evidence
                .iter()
                .map(|item| EvidenceViewModel {
                    icon: icon_glyph(item.icon).to_string(),
                    title: item.title.clone(),
                    value: item.value.clone(),
                    description: item.description.clone(),
                })
                .collect(),
            recommendation: card.recommendation.clone(),
        }),
        ChatPayload::Report(report) => PayloadViewModel::Report(present_report(report)),
        ChatPayload::Memory(lookup) => PayloadViewModel::Memory(MemoryLookupViewModel {
            summary: lookup.summary.clone(),
            attachments: lookup
                .attachments
                .iter()
                .map(|a| AttachmentViewModel {
                    memory_id: a.memory_id,
                    title: a.title.clone(),
                    app: a.app.clone(),
                    timestamp: a.timestamp.clone(),
                    category: a.category.label().to_string(),
                })
                .collect(),
        }),
    }
}

pub fn present_report(report: &StandupReport) -> ReportViewModel {
    ReportViewModel {
        title: report.title.clone(),
        date_label: report.date_label.clone(),
        sections: report
            .sections
            .iter()
            .map(|s| ReportSectionViewModel {
                heading: s.heading.clone(),
                bullets: s.bullets.clone(),
            })
            .collect(),
    }
}

/// Analysis card carried by a payload, if it is one.
pub fn analysis_card(payload: &ChatPayload) -> Option<AnalysisViewModel> {
    match payload {
        ChatPayload::Analysis(_) => match present_payload(payload) {
            PayloadViewModel::Analysis(vm) => Some(vm),
            _ => None,
        },
        _ => None,
    }
}

/// Most recent analysis card in the chat log, shown in the AI drawer.
pub fn latest_analysis(messages: &[ChatMessage]) -> Option<AnalysisViewModel> {
    messages
        .iter()
        .rev()
        .find_map(|m| m.payload.as_ref().and_then(analysis_card))
}
