use crate::model::record::StudentRecord;
use crate::report::SummaryData;

const RULE_WIDTH: usize = 60;

pub fn render_report_text(
    summary: &SummaryData,
    top: &[&StudentRecord],
    chart_files: &[String],
) -> String {
    let heavy = "=".repeat(RULE_WIDTH);
    let light = "-".repeat(RULE_WIDTH);
    let mut out = String::new();

    out.push('\n');
    out.push_str(&format!("{heavy}\n"));
    out.push_str("   Student Performance Progression & Risk Analyzer Report\n");
    out.push_str(&format!("{heavy}\n"));
    out.push_str(&format!(
        " Total Students Analyzed : {}\n",
        summary.n_students
    ));
    out.push_str(&format!(
        " High Risk Students      : {}\n",
        summary.status_counts.high_risk
    ));
    match summary.toughest {
        Some(t) => out.push_str(&format!(
            " Toughest Subject        : {} (Avg: {:.1})\n",
            t.subject.title(),
            t.mean
        )),
        None => out.push_str(" Toughest Subject        : n/a (no records)\n"),
    }
    for m in &summary.subject_means {
        if m.mean.is_nan() {
            continue;
        }
        out.push_str(&format!(
            "   {:<21} : {:.1}\n",
            m.subject.title(),
            m.mean
        ));
    }

    out.push_str(&format!("{light}\n"));
    out.push_str(&format!(" Top {} At-Risk Students:\n", top.len()));
    out.push_str(&top_risk_table(top));
    out.push_str(&format!("{light}\n"));

    out.push_str(&format!(" Success! {} Graphs Generated:\n", chart_files.len()));
    for (i, name) in chart_files.iter().enumerate() {
        out.push_str(&format!(" {}. {}\n", i + 1, name));
    }
    out.push_str(&format!("{heavy}\n"));
    out
}

fn top_risk_table(top: &[&StudentRecord]) -> String {
    let mut out = format!(
        " {:<10}  {:>14}  {:>13}  {:>10}\n",
        "Student_ID", "Attendance_Pct", "Average_Score", "Risk_Score"
    );
    for rec in top {
        out.push_str(&format!(
            " {:<10}  {:>14}  {:>13.2}  {:>10.2}\n",
            rec.student_id, rec.attendance_pct, rec.average_score, rec.risk_score
        ));
    }
    out
}
