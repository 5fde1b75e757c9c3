use crate::navigation::Step;
use maud::{html, Markup, DOCTYPE};

/// Id of the hidden form the back button submits. Each page that has a back
/// target renders it with [`crate::templates::components::carry_form`].
pub const BACK_FORM_ID: &str = "nav-back-form";

/// Mobile app shell: shared title bar, step dots, progress bar and loading
/// overlay around one screen.
pub fn app_layout(step: Step, share_text: Option<&str>, content: Markup) -> Markup {
    let cfg = step.config();

    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { "MAIA · " (cfg.title) }
                link rel="preconnect" href="https://fonts.googleapis.com";
                link rel="stylesheet" href="https://fonts.googleapis.com/css2?family=Roboto:wght@400;500;700&display=swap";
                link rel="stylesheet" href="https://fonts.googleapis.com/css2?family=Material+Symbols+Rounded";
                link rel="stylesheet" href="/static/app.css";
                script src="/static/app.js" defer {}
            }
            body {
                header class="app-bar" {
                    @if let Some(back) = cfg.back {
                        button
                            type="submit"
                            id="nav-back"
                            class="icon-btn"
                            form=(BACK_FORM_ID)
                            aria-label=(format!("Back to {}", back.config().title))
                        {
                            span class="material-symbols-rounded" { "arrow_back" }
                        }
                    } @else {
                        span id="spacer-left" class="icon-spacer" {}
                    }

                    h1 id="nav-title" { (cfg.title) }

                    @if cfg.share {
                        button
                            type="button"
                            id="nav-share"
                            class="icon-btn"
                            aria-label="Share"
                            data-share-text=(share_text.unwrap_or_default())
                        {
                            span class="material-symbols-rounded" { "share" }
                        }
                    } @else {
                        span id="spacer-right" class="icon-spacer" {}
                    }
                }

                nav class="stepper" aria-label="Progress" {
                    @for (i, s) in Step::ALL.iter().enumerate() {
                        @if i > 0 {
                            div.step-line.completed[s.number() <= step.number()] {}
                        }
                        div.step-dot.active[*s == step].completed[s.number() < step.number()]
                            data-step=(s.number())
                        {
                            (s.number())
                        }
                    }
                }

                div
                    id="main-progress-bar"
                    class="progress"
                    role="progressbar"
                    aria-valuemin="0"
                    aria-valuemax="100"
                    aria-valuenow=(cfg.progress)
                {
                    div id="progress-fill" class="progress-fill" style=(format!("width: {}%", cfg.progress)) {}
                }

                main class="screen active" data-step=(step.number()) {
                    div class="screen-scroll" {
                        (content)
                    }
                }

                div id="loading-overlay" class="loading-overlay hidden" {
                    div class="spinner" {}
                    p id="loading-text" { "Calculating valuation…" }
                }
            }
        }
    }
}
