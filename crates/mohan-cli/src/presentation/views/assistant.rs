use std::fmt;

use crate::presentation::view_models::{
    AnalysisViewModel, AssistantPanelViewModel, ChatMessageViewModel, PayloadViewModel,
    ReportViewModel,
};

pub(crate) fn sender_label(sender: &str) -> &'static str {
    match sender {
        "user" => "You",
        _ => "Mohan AI",
    }
}

pub(crate) fn write_analysis(
    f: &mut fmt::Formatter,
    analysis: &AnalysisViewModel,
    indent: &str,
) -> fmt::Result {
    writeln!(f, "{}Summary: {}", indent, analysis.summary)?;
    for item in &analysis.evidence {
        writeln!(f, "{}{} {}: {}", indent, item.icon, item.title, item.value)?;
        writeln!(f, "{}    {}", indent, item.description)?;
    }
    writeln!(f, "{}Recommendation: {}", indent, analysis.recommendation)
}

pub(crate) fn write_report(
    f: &mut fmt::Formatter,
    report: &ReportViewModel,
    indent: &str,
) -> fmt::Result {
    writeln!(f, "{}{} ({})", indent, report.title, report.date_label)?;
    for section in &report.sections {
        writeln!(f, "{}  {}", indent, section.heading)?;
        for bullet in &section.bullets {
            writeln!(f, "{}    - {}", indent, bullet)?;
        }
    }
    Ok(())
}

pub(crate) fn write_payload(
    f: &mut fmt::Formatter,
    payload: &PayloadViewModel,
    indent: &str,
) -> fmt::Result {
    match payload {
        PayloadViewModel::Analysis(analysis) => write_analysis(f, analysis, indent),
        PayloadViewModel::Report(report) => write_report(f, report, indent),
        PayloadViewModel::Memory(lookup) => {
            writeln!(f, "{}{}", indent, lookup.summary)?;
            for a in &lookup.attachments {
                writeln!(
                    f,
                    "{}  #{} {} ({}, {}, {})",
                    indent, a.memory_id, a.title, a.app, a.category, a.timestamp
                )?;
            }
            Ok(())
        }
    }
}

pub(crate) fn write_message(
    f: &mut fmt::Formatter,
    message: &ChatMessageViewModel,
    indent: &str,
) -> fmt::Result {
    writeln!(
        f,
        "{}[{}] {}: {}",
        indent,
        message.time,
        sender_label(&message.sender),
        message.content
    )?;
    if let Some(payload) = &message.payload {
        write_payload(f, payload, &format!("{}    ", indent))?;
    }
    Ok(())
}

pub struct AssistantPanelView<'a> {
    data: &'a AssistantPanelViewModel,
}

impl<'a> AssistantPanelView<'a> {
    pub fn new(data: &'a AssistantPanelViewModel) -> Self {
        Self { data }
    }
}

impl<'a> fmt::Display for AssistantPanelView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let panel = self.data;
        match &panel.scenario {
            Some(scenario) => writeln!(f, "Mohan AI (scenario: {})", scenario)?,
            None => writeln!(f, "Mohan AI")?,
        }
        for message in &panel.messages {
            write_message(f, message, "  ")?;
        }
        if panel.thinking {
            writeln!(f, "  ... analyzing screen context")?;
        }
        if panel.queued > 0 {
            writeln!(f, "  ({} question(s) queued)", panel.queued)?;
        }
        if panel.input.is_empty() {
            writeln!(f, "  > {}", panel.placeholder)
        } else {
            writeln!(f, "  > {}", panel.input)
        }
    }
}
