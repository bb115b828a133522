//! Reporting collaborator that receives submitted ads

/// Receives every formatted report produced by a form submission
#[cfg_attr(test, mockall::automock)]
pub trait ReportSink {
    fn emit(&mut self, publication: &str, report: &str);
}

/// Keeps submitted reports in memory so they can be shown in the UI and
/// printed once the terminal is restored.
#[derive(Debug, Clone, Default)]
pub struct BufferedSink {
    reports: Vec<String>,
}

impl BufferedSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reports(&self) -> &[String] {
        &self.reports
    }

    pub fn last(&self) -> Option<&str> {
        self.reports.last().map(String::as_str)
    }

    pub fn into_reports(self) -> Vec<String> {
        self.reports
    }
}

impl ReportSink for BufferedSink {
    fn emit(&mut self, _publication: &str, report: &str) {
        self.reports.push(report.to_string());
    }
}
