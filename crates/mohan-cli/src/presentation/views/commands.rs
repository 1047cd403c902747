use std::fmt;

use super::assistant::write_message;
use crate::presentation::view_models::{
    AskResultViewModel, CatalogCheckViewModel, ConfigPathViewModel, ConfigViewModel,
    SectionListViewModel,
};

// --------------------------------------------------------
// Section List
// --------------------------------------------------------

impl fmt::Display for SectionListViewModel {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "{} sections:", self.role)?;
        for entry in &self.sections {
            let home = if entry.home { "  (home)" } else { "" };
            writeln!(
                f,
                "  {}  {:<18} {}{}",
                entry.shortcut, entry.slug, entry.title, home
            )?;
        }
        Ok(())
    }
}

// --------------------------------------------------------
// Ask
// --------------------------------------------------------

impl fmt::Display for AskResultViewModel {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write_message(f, &self.question, "")?;
        write_message(f, &self.reply, "")
    }
}

// --------------------------------------------------------
// Config
// --------------------------------------------------------

impl fmt::Display for ConfigViewModel {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "# {}", self.path)?;
        write!(f, "{}", self.toml)?;
        if !self.toml.ends_with('\n') {
            writeln!(f)?;
        }
        Ok(())
    }
}

impl fmt::Display for ConfigPathViewModel {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "{}", self.path)
    }
}

// --------------------------------------------------------
// Catalog Check
// --------------------------------------------------------

impl fmt::Display for CatalogCheckViewModel {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "Catalog: {}", self.source)?;
        writeln!(f, "{:<20} {:>5}", "TABLE", "ROWS")?;
        writeln!(f, "{}", "-".repeat(26))?;
        for table in &self.tables {
            writeln!(f, "{:<20} {:>5}", table.table, table.rows)?;
        }
        if !self.issues.is_empty() {
            writeln!(f, "\nIssues:")?;
            for issue in &self.issues {
                writeln!(f, "  - {}", issue)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::presentation::presenters::present_sections;
    use mohan_types::Role;

    #[test]
    fn test_section_list_plain() {
        let result = present_sections(Role::Employee);
        insta::assert_snapshot!(result.content.to_string(), @r"
        Employee sections:
          1  my-focus           My Focus  (home)
          2  memory-recall      Memory Recall
          3  standup-report     Standup Report
          4  settings           Settings
        ");
    }
}
