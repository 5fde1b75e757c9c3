use crate::format;
use maud::{html, Markup};

/// Bounds for a +/- counter.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CounterConfig {
    pub min: f64,
    pub max: f64,
    pub step: f64,
}

pub const BEDROOMS: CounterConfig = CounterConfig {
    min: 1.0,
    max: 10.0,
    step: 1.0,
};

pub const BATHROOMS: CounterConfig = CounterConfig {
    min: 0.5,
    max: 8.0,
    step: 0.5,
};

/// Hidden input plus +/- buttons; `static/app.js` wires the buttons.
pub fn counter(name: &str, label: &str, value: f64, cfg: CounterConfig) -> Markup {
    let value = value.clamp(cfg.min, cfg.max);

    html! {
        div class="field counter" data-min=(cfg.min) data-max=(cfg.max) data-step=(cfg.step) {
            span class="field-label" { (label) }
            div class="counter-controls" {
                button type="button" class="counter-btn" data-target=(name) data-action="dec" aria-label=(format!("Fewer {}", label.to_lowercase())) { "−" }
                span id=(format!("{name}-display")) class="counter-value" { (format::counter_value(value)) }
                button type="button" class="counter-btn" data-target=(name) data-action="inc" aria-label=(format!("More {}", label.to_lowercase())) { "+" }
            }
            input type="hidden" id=(name) name=(name) value=(value);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamps_into_bounds() {
        let markup = counter("bedrooms", "Bedrooms", 0.0, BEDROOMS).into_string();

        assert!(markup.contains("name=\"bedrooms\" value=\"1\""));
    }

    #[test]
    fn renders_half_values() {
        let markup = counter("bathrooms", "Bathrooms", 2.5, BATHROOMS).into_string();

        assert!(markup.contains(">2.5<"));
        assert!(markup.contains("name=\"bathrooms\" value=\"2.5\""));
        assert!(markup.contains("data-step=\"0.5\""));
    }
}
