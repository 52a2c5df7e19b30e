use biometria_core::metrics;
use biometria_core::models::score::{MetricAge, ScoreResult};

/// Plain-text report of a score result.
pub fn render_text(result: &ScoreResult) -> String {
    let mut output = String::new();
    output.push_str(&format!("Chronological age: {}\n\n", result.chronological_age));

    for metric in &result.metrics {
        let label = metrics::label(&metric.metric_name);
        match metric.outcome {
            MetricAge::Scored(age) => output.push_str(&format!("- {label}: {age}\n")),
            MetricAge::Unscorable(reason) => {
                output.push_str(&format!("- {label}: not scored ({})\n", reason.describe()));
            }
        }
    }
    output.push('\n');

    match &result.overall {
        Some(overall) => {
            output.push_str(&format!("Biological age: {:.1}\n", overall.biological_age));
            output.push_str(&format!("Differential: {:+}\n", overall.differential));
            output.push_str(&format!("Category: {}\n", overall.category.label()));
            output.push_str(&format!("{}\n", overall.explanation));
        }
        None => output.push_str("Biological age: not available (no metric could be scored)\n"),
    }
    output
}
