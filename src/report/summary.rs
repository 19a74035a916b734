use super::ClusterReport;
use std::fmt::Write;

/// Human-readable summary: SSE, then one-based cluster sizes
pub fn render_summary(report: &ClusterReport) -> String {
    let mut out = String::new();

    // Writing into a String cannot fail
    let _ = writeln!(out, "sse = {:.2}", report.sse);
    if !report.converged {
        let _ = writeln!(
            out,
            "warning: stopped after {} iterations without converging",
            report.iterations
        );
    }
    let _ = writeln!(out, "CLUSTER SIZES:");
    for cluster in &report.clusters {
        let _ = writeln!(out, "{}: {} tweets", cluster.id + 1, cluster.size);
    }

    out
}
