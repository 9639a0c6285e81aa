//! Tour Step Definitions
//!
//! The onboarding walkthrough as declarative data: six steps, each with
//! its copy, an optional anchor in the page, and its button row.

/// Side of the anchor element the step card prefers.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum AttachSide {
    Top,
    Bottom,
    Left,
    Right,
}

/// Element a step points at.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StepAnchor {
    /// CSS selector of the anchor element.
    pub selector: &'static str,
    pub side: AttachSide,
}

/// What pressing a step button does.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum StepAction {
    Back,
    Next,
    Skip,
    Finish,
}

/// One button on a step card.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StepButton {
    pub label: &'static str,
    pub action: StepAction,
    /// Rendered in the muted style.
    pub secondary: bool,
}

/// One step of the walkthrough.
pub struct TourStep {
    pub id: &'static str,
    pub title: &'static str,
    pub body: &'static str,
    pub anchor: Option<StepAnchor>,
    pub buttons: &'static [StepButton],
}

const BACK: StepButton = StepButton {
    label: "Back",
    action: StepAction::Back,
    secondary: true,
};
const NEXT: StepButton = StepButton {
    label: "Next",
    action: StepAction::Next,
    secondary: false,
};

/// The walkthrough, in order.
pub const TOUR_STEPS: &[TourStep] = &[
    TourStep {
        id: "welcome",
        title: "Welcome to Baseline!",
        body: "Let's take a quick tour of the key features to help you get the most \
               out of your sleep tracking experience.",
        anchor: None,
        buttons: &[
            StepButton {
                label: "Skip Tour",
                action: StepAction::Skip,
                secondary: true,
            },
            StepButton {
                label: "Start",
                action: StepAction::Next,
                secondary: false,
            },
        ],
    },
    TourStep {
        id: "dashboard",
        title: "Sleep Dashboard",
        body: "This is your main dashboard showing your recent sleep patterns, \
               including total sleep time, sleep efficiency, and nightly trends.",
        anchor: Some(StepAnchor {
            selector: ".dashboard-card",
            side: AttachSide::Bottom,
        }),
        buttons: &[BACK, NEXT],
    },
    TourStep {
        id: "insights",
        title: "AI-Powered Insights",
        body: "Get personalized, science-backed insights about your sleep patterns \
               and recommendations for improvement.",
        anchor: Some(StepAnchor {
            selector: ".insights-section",
            side: AttachSide::Bottom,
        }),
        buttons: &[BACK, NEXT],
    },
    TourStep {
        id: "charts",
        title: "Sleep Trends & Analytics",
        body: "Visualize your sleep patterns over time with interactive charts and \
               detailed breakdowns of sleep stages.",
        anchor: Some(StepAnchor {
            selector: ".visualization-section",
            side: AttachSide::Top,
        }),
        buttons: &[BACK, NEXT],
    },
    TourStep {
        id: "upload",
        title: "Upload More Data",
        body: "Keep your sleep data up-to-date by uploading new exports from your \
               Apple Health app.",
        anchor: Some(StepAnchor {
            selector: "[href=\"/data\"]",
            side: AttachSide::Right,
        }),
        buttons: &[BACK, NEXT],
    },
    TourStep {
        id: "profile",
        title: "Profile & Settings",
        body: "Customize your experience, update your profile, and manage your \
               preferences here.",
        anchor: Some(StepAnchor {
            selector: "[href=\"/profile\"]",
            side: AttachSide::Right,
        }),
        buttons: &[
            BACK,
            StepButton {
                label: "Finish",
                action: StepAction::Finish,
                secondary: false,
            },
        ],
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn steps_are_in_walkthrough_order() {
        let ids: Vec<_> = TOUR_STEPS.iter().map(|s| s.id).collect();
        assert_eq!(
            ids,
            ["welcome", "dashboard", "insights", "charts", "upload", "profile"]
        );
    }

    #[test]
    fn welcome_is_unanchored_and_skippable() {
        let welcome = &TOUR_STEPS[0];
        assert!(welcome.anchor.is_none());
        assert!(welcome
            .buttons
            .iter()
            .any(|b| b.action == StepAction::Skip));
    }

    #[test]
    fn only_the_last_step_finishes() {
        for (i, step) in TOUR_STEPS.iter().enumerate() {
            let finishes = step.buttons.iter().any(|b| b.action == StepAction::Finish);
            assert_eq!(finishes, i == TOUR_STEPS.len() - 1, "step {}", step.id);
        }
    }

    #[test]
    fn anchored_steps_carry_selectors() {
        assert_eq!(
            TOUR_STEPS[1].anchor.unwrap().selector,
            ".dashboard-card"
        );
        assert_eq!(TOUR_STEPS[4].anchor.unwrap().selector, "[href=\"/data\"]");
        assert_eq!(TOUR_STEPS[3].anchor.unwrap().side, AttachSide::Top);
    }
}
