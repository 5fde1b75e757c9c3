// src/navigation.rs

/// The three screens of the flow, in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Property = 1,
    Valuation = 2,
    Analysis = 3,
}

/// Header configuration shared by every screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepConfig {
    pub title: &'static str,
    pub back: Option<Step>,
    pub share: bool,
    pub progress: u8,
}

impl Step {
    pub const ALL: [Step; 3] = [Step::Property, Step::Valuation, Step::Analysis];

    pub fn number(self) -> u8 {
        self as u8
    }

    pub fn config(self) -> StepConfig {
        match self {
            Step::Property => StepConfig {
                title: "Property Details",
                back: None,
                share: false,
                progress: 33,
            },
            Step::Valuation => StepConfig {
                title: "Your Valuation",
                back: Some(Step::Property),
                share: true,
                progress: 66,
            },
            Step::Analysis => StepConfig {
                title: "Market Analysis",
                back: Some(Step::Valuation),
                share: true,
                progress: 100,
            },
        }
    }

    /// Form action that re-enters this step from its successor's hidden fields.
    pub fn action(self) -> &'static str {
        match self {
            Step::Property => "/edit",
            Step::Valuation => "/valuation",
            Step::Analysis => "/analysis",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn back_targets_previous_step() {
        assert_eq!(Step::Property.config().back, None);
        assert_eq!(Step::Valuation.config().back, Some(Step::Property));
        assert_eq!(Step::Analysis.config().back, Some(Step::Valuation));
    }

    #[test]
    fn progress_increases() {
        let progress: Vec<_> = Step::ALL.iter().map(|s| s.config().progress).collect();
        assert_eq!(progress, vec![33, 66, 100]);
        assert!(!Step::Property.config().share);
    }
}
