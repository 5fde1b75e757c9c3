use crate::forms::FormFields;
use maud::{html, Markup};

pub mod chart;
pub mod counter;
pub mod error;
pub mod impacts;
pub mod share;
pub mod slider;

pub use chart::price_chart;
pub use error::html_error_response;
pub use impacts::impacts_list;
pub use slider::range_slider;

pub fn card(title: &str, body: Markup) -> Markup {
    html! {
        section class="card" {
            h2 class="card-title" { (title) }
            div class="card-body" {
                (body)
            }
        }
    }
}

/// Invisible form that re-posts the submitted property fields to `action`.
/// Buttons elsewhere on the page target it through their `form` attribute.
pub fn carry_form(id: &str, action: &str, fields: &FormFields) -> Markup {
    html! {
        form id=(id) method="post" action=(action) hidden {
            @for (name, value) in fields.pairs() {
                input type="hidden" name=(name) value=(value);
            }
        }
    }
}

pub fn toast(message: Option<&str>) -> Markup {
    html! {
        @if let Some(msg) = message {
            div id="toast" class="toast show" role="alert" { (msg) }
        } @else {
            div id="toast" class="toast hidden" role="status" {}
        }
    }
}
