use maud::{html, Markup};

pub const CONDITION_LABELS: [&str; 5] = [
    "Very deteriorated",
    "Needs renovation",
    "Good condition",
    "Renovated",
    "Brand new",
];

pub fn condition_label(condition: u8) -> &'static str {
    let idx = usize::from(condition.clamp(1, 5)) - 1;
    CONDITION_LABELS[idx]
}

pub fn grade_label(grade: u8) -> String {
    format!("{grade} / 13")
}

/// Range input with a live label. `labels`, when given, is the `|`-separated
/// text shown per step, otherwise the label reads `value / max`.
pub fn range_slider(
    name: &str,
    label: &str,
    (min, max): (i32, i32),
    value: i32,
    current_label: &str,
    labels: Option<&str>,
) -> Markup {
    let value = value.clamp(min, max);
    let pct = if max > min {
        f64::from(value - min) / f64::from(max - min) * 100.0
    } else {
        0.0
    };

    html! {
        div class="field slider" {
            div class="slider-head" {
                label class="field-label" for=(name) { (label) }
                span id=(format!("{name}-label")) class="slider-badge" { (current_label) }
            }
            input
                type="range"
                id=(name)
                name=(name)
                min=(min)
                max=(max)
                step="1"
                value=(value)
                data-labels=[labels]
                style=(format!("--slider-pct: {pct:.1}%"));
        }
    }
}
