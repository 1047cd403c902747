use mohan_engine::Catalog;
use mohan_types::{ChatMessage, Role, Scenario};
use std::path::Path;

use super::assistant::present_message;
use crate::presentation::view_models::{
    AskResultViewModel, CatalogCheckViewModel, CommandResultViewModel, ConfigPathViewModel,
    ConfigViewModel, Guidance, SectionEntryViewModel, SectionListViewModel, StatusBadge,
    TableCountViewModel,
};

pub fn present_sections(role: Role) -> CommandResultViewModel<SectionListViewModel> {
    let home = role.home_section();
    let content = SectionListViewModel {
        role: role.label().to_string(),
        sections: role
            .sections()
            .iter()
            .enumerate()
            .map(|(idx, section)| SectionEntryViewModel {
                shortcut: idx + 1,
                slug: section.slug().to_string(),
                title: section.title().to_string(),
                home: *section == home,
            })
            .collect(),
    };

    CommandResultViewModel::new(content).with_suggestion(
        Guidance::new("Render one section").with_command(format!(
            "mohan --role {} snapshot --section {}",
            role.as_str(),
            home.slug()
        )),
    )
}

pub fn present_ask(
    role: Role,
    scenario: Option<Scenario>,
    question: &ChatMessage,
    reply: &ChatMessage,
) -> CommandResultViewModel<AskResultViewModel> {
    let content = AskResultViewModel {
        role: role.label().to_string(),
        scenario: scenario.map(|s| s.as_str().to_string()),
        question: present_message(question),
        reply: present_message(reply),
    };
    CommandResultViewModel::new(content)
}

pub fn present_config(
    path: &Path,
    exists: bool,
    toml: String,
) -> CommandResultViewModel<ConfigViewModel> {
    let content = ConfigViewModel {
        path: path.display().to_string(),
        exists,
        toml,
    };

    if exists {
        return CommandResultViewModel::new(content);
    }
    CommandResultViewModel::new(content)
        .with_badge(StatusBadge::info("No config file yet, showing defaults"))
        .with_suggestion(Guidance::new("Write the defaults to disk").with_command("mohan config init"))
}

pub fn present_config_init(
    path: &Path,
    overwritten: bool,
) -> CommandResultViewModel<ConfigPathViewModel> {
    let label = if overwritten {
        "Config overwritten with defaults"
    } else {
        "Config written"
    };
    CommandResultViewModel::new(ConfigPathViewModel {
        path: path.display().to_string(),
    })
    .with_badge(StatusBadge::success(label))
}

pub fn present_config_path(path: &Path) -> CommandResultViewModel<ConfigPathViewModel> {
    CommandResultViewModel::new(ConfigPathViewModel {
        path: path.display().to_string(),
    })
}

pub fn present_catalog_check(
    source: &str,
    catalog: &Catalog,
) -> CommandResultViewModel<CatalogCheckViewModel> {
    let count = |table: &str, rows: usize| TableCountViewModel {
        table: table.to_string(),
        rows,
    };
    let issues: Vec<String> = catalog.validate().iter().map(ToString::to_string).collect();

    let badge = if issues.is_empty() {
        StatusBadge::success("Catalog is consistent")
    } else {
        StatusBadge::warning(format!("{} issue(s) found", issues.len()))
    };

    let content = CatalogCheckViewModel {
        source: source.to_string(),
        tables: vec![
            count("manager_metrics", catalog.manager_metrics.len()),
            count("employee_metrics", catalog.employee_metrics.len()),
            count("risks", catalog.risks.len()),
            count("departments", catalog.departments.len()),
            count("drifts", catalog.drifts.len()),
            count("workflows", catalog.workflows.len()),
            count("workflow_insights", catalog.workflow_insights.len()),
            count("compositions", catalog.compositions.len()),
            count("team_insights", catalog.team_insights.len()),
            count("memories", catalog.memories.len()),
        ],
        issues,
    };

    CommandResultViewModel::new(content).with_badge(badge)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sections_mark_home() {
        let result = present_sections(Role::Manager);
        let homes: Vec<&str> = result
            .content
            .sections
            .iter()
            .filter(|s| s.home)
            .map(|s| s.slug.as_str())
            .collect();
        assert_eq!(homes, vec!["system-status"]);
        assert_eq!(result.content.sections.len(), 5);
    }

    #[test]
    fn test_catalog_check_counts_builtin() {
        let catalog = Catalog::builtin();
        let result = present_catalog_check("builtin", &catalog);
        assert!(result.content.issues.is_empty());
        let memories = result
            .content
            .tables
            .iter()
            .find(|t| t.table == "memories")
            .map(|t| t.rows);
        assert_eq!(memories, Some(6));
    }

    #[test]
    fn test_catalog_check_reports_issues() {
        let mut catalog = Catalog::builtin();
        catalog.team_insights[0].department = "Legal".to_string();
        let result = present_catalog_check("custom.json", &catalog);
        assert_eq!(
            result.content.issues,
            vec!["reference to unknown department 'Legal'".to_string()]
        );
    }
}
