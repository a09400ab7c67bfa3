use crate::{plotting::chart_kind::ChartKind, report::AnalysisReport};

/// Returns a title for an analysis report
impl AnalysisReport {
    pub fn title(&self, kind: ChartKind) -> String {
        format!("{} - {} Data", kind, self.source)
    }
}
