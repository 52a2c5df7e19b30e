use biometria_core::models::score::{Category, OverallAge};

use crate::config::ScoringConfig;

/// `biological_age - chronological_age`, rounded to whole years.
pub fn differential(biological_age: f64, chronological_age: i32) -> i32 {
    (biological_age - f64::from(chronological_age)).round() as i32
}

pub fn classify(differential: i32, config: &ScoringConfig) -> Category {
    if differential <= config.rejuvenated_threshold {
        Category::Rejuvenated
    } else if differential >= config.aged_threshold {
        Category::Aged
    } else {
        Category::Normal
    }
}

/// Human-readable reading of a differential.
pub fn explain(differential: i32) -> String {
    let years = |n: i32| if n.abs() == 1 { "year" } else { "years" };
    match differential {
        0 => "Biological age matches chronological age".to_string(),
        d if d < 0 => format!("{} {} younger than chronological age", -d, years(d)),
        d => format!("{d} {} older than chronological age", years(d)),
    }
}

/// Build the aggregate from an already averaged biological age.
pub fn assess(biological_age: f64, chronological_age: i32, config: &ScoringConfig) -> OverallAge {
    let differential = differential(biological_age, chronological_age);
    OverallAge {
        biological_age,
        differential,
        category: classify(differential, config),
        explanation: explain(differential),
    }
}
