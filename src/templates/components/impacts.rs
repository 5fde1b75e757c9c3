use crate::domain::analysis::Impact;
use maud::{html, Markup};

pub fn impacts_list(impacts: &[Impact]) -> Markup {
    html! {
        div id="impacts-list" class="impacts" {
            @for impact in impacts {
                @let tone = if impact.is_positive() { "positive" } else { "negative" };
                div class="impact-item" {
                    div class=(format!("impact-icon {tone}")) {
                        span class="material-symbols-rounded" { (impact.icon) }
                    }
                    div class="impact-info" {
                        p class="impact-label" { (impact.label) }
                        p class="impact-desc" { (impact.description) }
                    }
                    span class=(format!("impact-pct {tone}")) {
                        @if impact.is_positive() { "+" }
                        (impact.pct) "%"
                    }
                }
            }
        }
    }
}
