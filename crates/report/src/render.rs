//! HTML rendering of the merged report, plus the external rendering
//! collaborator seam.

use recon_core::Report;

/// Fixed interpretive legend mapping open-interest/funding sign
/// combinations to named market regimes. Appended to every rendered
/// report.
pub const LEGEND_HTML: &str = "<div class=\"legend\">\
<h2>Open Interest &amp; Funding Cheat Sheet</h2>\
<ul>\
<li><strong>Bullish Squeeze:</strong> OI+ Fund-</li>\
<li><strong>Uptrend:</strong> OI+ Fund+</li>\
<li><strong>Downtrend:</strong> OI- Fund-</li>\
<li><strong>Short Squeeze:</strong> OI- Fund+</li>\
</ul></div>";

/// Render the report as a standalone HTML fragment: heading, data table,
/// legend.
pub fn render_html(report: &Report) -> String {
    let mut html = String::new();

    html.push_str(&format!(
        "<h1>Analysis Report for {}</h1>\n<p>Generated at {}</p>\n",
        escape(&report.label),
        report.generated_at.format("%Y-%m-%d %H:%M:%S UTC"),
    ));

    html.push_str("<table>\n<thead><tr>");
    for column in &report.columns {
        html.push_str(&format!("<th>{}</th>", escape(column)));
    }
    html.push_str("</tr></thead>\n<tbody>\n");
    for row in &report.rows {
        html.push_str("<tr>");
        for cell in row {
            html.push_str(&format!("<td>{}</td>", escape(cell)));
        }
        html.push_str("</tr>\n");
    }
    html.push_str("</tbody>\n</table>\n");

    html.push_str(LEGEND_HTML);
    html
}

fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

/// External rendering/delivery collaborator (e.g. remote HTML-to-PDF
/// conversion). Consumes the rendered HTML and returns the delivered
/// byte stream; the only stage allowed to report a hard failure.
pub trait ReportRenderer {
    fn render(&self, html: &str) -> anyhow::Result<Vec<u8>>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn make_report() -> Report {
        Report {
            label: "user-42".to_string(),
            columns: vec!["ticker".into(), "price".into()],
            rows: vec![vec!["BTC".into(), "64000".into()]],
            generated_at: Utc::now(),
        }
    }

    #[test]
    fn test_render_contains_heading_table_and_legend() {
        let html = render_html(&make_report());
        assert!(html.contains("Analysis Report for user-42"));
        assert!(html.contains("<th>ticker</th>"));
        assert!(html.contains("<td>BTC</td>"));
        assert!(html.contains("Bullish Squeeze"));
        assert!(html.contains("Short Squeeze"));
    }

    #[test]
    fn test_cells_are_escaped() {
        let mut report = make_report();
        report.rows[0][0] = "<script>&".to_string();
        let html = render_html(&report);
        assert!(html.contains("&lt;script&gt;&amp;"));
        assert!(!html.contains("<script>"));
    }

    #[test]
    fn test_renderer_seam_failure_surfaces() {
        struct FailingRenderer;
        impl ReportRenderer for FailingRenderer {
            fn render(&self, _html: &str) -> anyhow::Result<Vec<u8>> {
                anyhow::bail!("conversion service unavailable")
            }
        }

        let err = FailingRenderer.render("<h1>x</h1>").unwrap_err();
        assert!(err.to_string().contains("unavailable"));
    }
}
