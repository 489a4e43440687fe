use ci_core::Theory;
use ci_engine::result::percent;
use ci_engine::AssessmentResult;

const WIDE_RULE: usize = 80;
const NARROW_RULE: usize = 70;

/// Renders a rank table and a per-theory table for already ranked results.
pub fn render_comparative(ranked: &[AssessmentResult]) -> String {
    let indicator_count = ranked
        .first()
        .map(|result| result.total_indicators)
        .unwrap_or_default();
    let mut lines = vec![
        "=".repeat(WIDE_RULE),
        "CONSCIOUSNESS INDICATOR ASSESSMENT: COMPARATIVE REPORT".to_string(),
        format!(
            "Battery: {indicator_count} indicators across {} theories",
            Theory::ALL.len()
        ),
        "=".repeat(WIDE_RULE),
        String::new(),
        format!(
            "{:<6}{:<30}{:<25}{:<12}{:<12}",
            "Rank", "System", "Type", "Credence", "Satisfied"
        ),
        "-".repeat(WIDE_RULE),
    ];
    for (idx, result) in ranked.iter().enumerate() {
        lines.push(format!(
            "{:<6}{:<30}{:<25}{:<12}{}/{}",
            idx + 1,
            result.system_name,
            result.system_type,
            percent(result.credence, 1),
            result.satisfied_count,
            result.total_indicators
        ));
    }

    let mut header = format!("{:<30}", "System");
    for theory in Theory::ALL {
        header.push_str(&format!("{:>8}", theory.as_str()));
    }
    lines.extend([
        "-".repeat(WIDE_RULE),
        String::new(),
        "THEORY COMPARISON:".to_string(),
        header,
        "-".repeat(NARROW_RULE),
    ]);
    for result in ranked {
        let mut row = format!("{:<30}", result.system_name);
        for theory in Theory::ALL {
            row.push_str(&format!("{:>7} ", percent(result.theory_score(theory), 0)));
        }
        lines.push(row.trim_end().to_string());
    }
    lines.extend([String::new(), "=".repeat(WIDE_RULE)]);
    lines.join("\n")
}
