//! Wizard — the client-side state machine behind the upload/analyze flow.
//!
//! One authoritative state and a pure transition function per user action,
//! replacing the implicit "derive the step from which fields are set" scheme.
//! The host (a UI shell) renders from the current state and feeds events in;
//! this crate does no I/O and owns no timers — the host drives `Tick`.

use serde_json::Value;

/// Banner shown when Submit is pressed without both inputs present.
pub const VALIDATION_MESSAGE: &str =
    "Please upload your resume and paste the job description.";

/// Fallback banner when a failed request carries no server error message.
pub const GENERIC_ERROR_MESSAGE: &str = "Something went wrong. Please try again.";

/// Fixed loading labels. Purely decorative: the server reports no incremental
/// progress, so the host advances one label per 2-second tick, capped at the
/// last. Not tied to actual server state.
pub const LOADING_STEPS: [&str; 6] = [
    "Parsing your resume...",
    "Analyzing job description...",
    "Calculating match score...",
    "Optimizing resume content...",
    "Running ATS simulation...",
    "Generating cover letter...",
];

/// Seconds between loading-step advances.
pub const LOADING_STEP_INTERVAL_SECS: u64 = 2;

/// Result tabs, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    OptimizedResume,
    KeyChanges,
    SkillGaps,
    AtsAnalysis,
    Keywords,
    CoverLetter,
}

impl Tab {
    pub const ALL: [Tab; 6] = [
        Tab::OptimizedResume,
        Tab::KeyChanges,
        Tab::SkillGaps,
        Tab::AtsAnalysis,
        Tab::Keywords,
        Tab::CoverLetter,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Tab::OptimizedResume => "Optimized Resume",
            Tab::KeyChanges => "Key Changes",
            Tab::SkillGaps => "Skill Gaps",
            Tab::AtsAnalysis => "ATS Analysis",
            Tab::Keywords => "Keywords",
            Tab::CoverLetter => "Cover Letter",
        }
    }
}

/// The selected résumé file. Only the metadata the wizard decides on — the
/// bytes themselves stay with the host until submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResumeFile {
    pub name: String,
}

/// User inputs gathered before submission.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Inputs {
    pub resume_file: Option<ResumeFile>,
    pub job_description: String,
}

impl Inputs {
    fn is_empty(&self) -> bool {
        self.resume_file.is_none() && self.job_description.is_empty()
    }

    fn is_submittable(&self) -> bool {
        self.resume_file.is_some() && !self.job_description.trim().is_empty()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum WizardState {
    /// No file, no text.
    Idle,
    /// At least one input present, nothing submitted yet.
    Ready { inputs: Inputs },
    /// Request in flight. `step` indexes [`LOADING_STEPS`].
    Loading { inputs: Inputs, step: usize },
    /// Analysis received and being displayed.
    Results { analysis: Value, active_tab: Tab },
}

/// One event per user action (or host timer tick).
#[derive(Debug, Clone)]
pub enum WizardEvent {
    /// File picked or dropped. Non-PDF mime types are ignored outright.
    SelectFile { name: String, mime_type: String },
    EditJobDescription(String),
    Submit,
    /// Host's 2-second loading timer fired.
    Tick,
    AnalysisSucceeded(Value),
    /// Carries the server's error message when the response had one.
    AnalysisFailed(Option<String>),
    SelectTab(Tab),
    Reset,
}

/// The wizard: current state plus the error banner (shown alongside the
/// input form in `Idle`/`Ready`).
#[derive(Debug, Clone, PartialEq)]
pub struct Wizard {
    pub state: WizardState,
    pub error: Option<String>,
}

impl Default for Wizard {
    fn default() -> Self {
        Self::new()
    }
}

impl Wizard {
    pub fn new() -> Self {
        Self {
            state: WizardState::Idle,
            error: None,
        }
    }

    /// Index into the 4-step progress bar: idle 0, ready 1, loading 2, results 3.
    pub fn step_index(&self) -> usize {
        match self.state {
            WizardState::Idle => 0,
            WizardState::Ready { .. } => 1,
            WizardState::Loading { .. } => 2,
            WizardState::Results { .. } => 3,
        }
    }

    /// Applies one event. Events that make no sense in the current state
    /// (e.g. `Tick` outside `Loading`) are ignored.
    pub fn apply(&mut self, event: WizardEvent) {
        let gathering_inputs = matches!(
            self.state,
            WizardState::Idle | WizardState::Ready { .. }
        );

        match event {
            WizardEvent::SelectFile { name, mime_type } => {
                if !gathering_inputs || mime_type != "application/pdf" {
                    return; // file stays unset / unchanged
                }
                let mut inputs = self.take_inputs();
                inputs.resume_file = Some(ResumeFile { name });
                self.state = WizardState::Ready { inputs };
            }

            WizardEvent::EditJobDescription(text) => {
                if !gathering_inputs {
                    return;
                }
                let mut inputs = self.take_inputs();
                inputs.job_description = text;
                self.state = if inputs.is_empty() {
                    WizardState::Idle
                } else {
                    WizardState::Ready { inputs }
                };
            }

            WizardEvent::Submit => {
                if !gathering_inputs {
                    return;
                }
                let inputs = self.take_inputs();
                if inputs.is_submittable() {
                    self.error = None;
                    self.state = WizardState::Loading { inputs, step: 0 };
                } else {
                    self.error = Some(VALIDATION_MESSAGE.to_string());
                    self.state = if inputs.is_empty() {
                        WizardState::Idle
                    } else {
                        WizardState::Ready { inputs }
                    };
                }
            }

            WizardEvent::Tick => {
                if let WizardState::Loading { step, .. } = &mut self.state {
                    *step = (*step + 1).min(LOADING_STEPS.len() - 1);
                }
            }

            WizardEvent::AnalysisSucceeded(analysis) => {
                if matches!(self.state, WizardState::Loading { .. }) {
                    self.error = None;
                    self.state = WizardState::Results {
                        analysis,
                        active_tab: Tab::OptimizedResume,
                    };
                }
            }

            WizardEvent::AnalysisFailed(server_message) => {
                if let WizardState::Loading { inputs, .. } = &mut self.state {
                    let inputs = std::mem::take(inputs);
                    self.error = Some(
                        server_message.unwrap_or_else(|| GENERIC_ERROR_MESSAGE.to_string()),
                    );
                    self.state = WizardState::Ready { inputs };
                }
            }

            WizardEvent::SelectTab(tab) => {
                if let WizardState::Results { active_tab, .. } = &mut self.state {
                    *active_tab = tab;
                }
            }

            WizardEvent::Reset => {
                self.state = WizardState::Idle;
                self.error = None;
            }
        }
    }

    /// Pulls the inputs out of an input-gathering state. Callers have already
    /// ruled out `Loading`/`Results`.
    fn take_inputs(&mut self) -> Inputs {
        match &mut self.state {
            WizardState::Ready { inputs } => std::mem::take(inputs),
            _ => Inputs::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn select_pdf(wizard: &mut Wizard) {
        wizard.apply(WizardEvent::SelectFile {
            name: "resume.pdf".to_string(),
            mime_type: "application/pdf".to_string(),
        });
    }

    fn to_loading(wizard: &mut Wizard) {
        select_pdf(wizard);
        wizard.apply(WizardEvent::EditJobDescription("Senior Rust dev".to_string()));
        wizard.apply(WizardEvent::Submit);
        assert!(matches!(wizard.state, WizardState::Loading { .. }));
    }

    #[test]
    fn test_starts_idle_with_no_banner() {
        let wizard = Wizard::new();
        assert_eq!(wizard.state, WizardState::Idle);
        assert_eq!(wizard.error, None);
        assert_eq!(wizard.step_index(), 0);
    }

    #[test]
    fn test_non_pdf_file_does_not_populate_upload_state() {
        let mut wizard = Wizard::new();
        wizard.apply(WizardEvent::SelectFile {
            name: "resume.docx".to_string(),
            mime_type: "application/vnd.openxmlformats-officedocument.wordprocessingml.document"
                .to_string(),
        });
        assert_eq!(wizard.state, WizardState::Idle);
    }

    #[test]
    fn test_non_pdf_drop_keeps_existing_file() {
        let mut wizard = Wizard::new();
        select_pdf(&mut wizard);
        wizard.apply(WizardEvent::SelectFile {
            name: "notes.txt".to_string(),
            mime_type: "text/plain".to_string(),
        });
        match &wizard.state {
            WizardState::Ready { inputs } => {
                assert_eq!(inputs.resume_file.as_ref().unwrap().name, "resume.pdf");
            }
            other => panic!("expected Ready, got {other:?}"),
        }
    }

    #[test]
    fn test_submit_with_only_file_shows_banner_and_stays_ready() {
        let mut wizard = Wizard::new();
        select_pdf(&mut wizard);
        wizard.apply(WizardEvent::Submit);

        assert_eq!(wizard.error.as_deref(), Some(VALIDATION_MESSAGE));
        assert!(matches!(wizard.state, WizardState::Ready { .. }));
        assert_eq!(wizard.step_index(), 1);
    }

    #[test]
    fn test_submit_with_whitespace_jd_is_rejected() {
        let mut wizard = Wizard::new();
        select_pdf(&mut wizard);
        wizard.apply(WizardEvent::EditJobDescription("   ".to_string()));
        wizard.apply(WizardEvent::Submit);
        assert!(matches!(wizard.state, WizardState::Ready { .. }));
        assert!(wizard.error.is_some());
    }

    #[test]
    fn test_submit_with_both_inputs_enters_loading_and_clears_banner() {
        let mut wizard = Wizard::new();
        select_pdf(&mut wizard);
        wizard.apply(WizardEvent::Submit); // first attempt raises the banner
        wizard.apply(WizardEvent::EditJobDescription("Senior role".to_string()));
        wizard.apply(WizardEvent::Submit);

        assert_eq!(wizard.error, None);
        match &wizard.state {
            WizardState::Loading { step, .. } => assert_eq!(*step, 0),
            other => panic!("expected Loading, got {other:?}"),
        }
        assert_eq!(wizard.step_index(), 2);
    }

    #[test]
    fn test_loading_ticks_cap_at_last_step() {
        let mut wizard = Wizard::new();
        to_loading(&mut wizard);
        for _ in 0..20 {
            wizard.apply(WizardEvent::Tick);
        }
        match &wizard.state {
            WizardState::Loading { step, .. } => assert_eq!(*step, LOADING_STEPS.len() - 1),
            other => panic!("expected Loading, got {other:?}"),
        }
    }

    #[test]
    fn test_success_shows_results_on_default_tab() {
        let mut wizard = Wizard::new();
        to_loading(&mut wizard);
        wizard.apply(WizardEvent::AnalysisSucceeded(json!({"matchScore": 84})));

        match &wizard.state {
            WizardState::Results { analysis, active_tab } => {
                assert_eq!(analysis["matchScore"], 84);
                assert_eq!(*active_tab, Tab::OptimizedResume);
            }
            other => panic!("expected Results, got {other:?}"),
        }
        assert_eq!(wizard.step_index(), 3);
    }

    #[test]
    fn test_failure_returns_to_ready_with_server_message() {
        let mut wizard = Wizard::new();
        to_loading(&mut wizard);
        wizard.apply(WizardEvent::AnalysisFailed(Some(
            "Analysis failed: quota exceeded".to_string(),
        )));

        assert_eq!(wizard.error.as_deref(), Some("Analysis failed: quota exceeded"));
        match &wizard.state {
            WizardState::Ready { inputs } => {
                // Inputs survive a failed round trip
                assert!(inputs.resume_file.is_some());
                assert_eq!(inputs.job_description, "Senior Rust dev");
            }
            other => panic!("expected Ready, got {other:?}"),
        }
    }

    #[test]
    fn test_failure_without_message_uses_generic_fallback() {
        let mut wizard = Wizard::new();
        to_loading(&mut wizard);
        wizard.apply(WizardEvent::AnalysisFailed(None));
        assert_eq!(wizard.error.as_deref(), Some(GENERIC_ERROR_MESSAGE));
    }

    #[test]
    fn test_tab_selection_only_applies_in_results() {
        let mut wizard = Wizard::new();
        wizard.apply(WizardEvent::SelectTab(Tab::CoverLetter));
        assert_eq!(wizard.state, WizardState::Idle);

        to_loading(&mut wizard);
        wizard.apply(WizardEvent::AnalysisSucceeded(json!({})));
        wizard.apply(WizardEvent::SelectTab(Tab::Keywords));
        match &wizard.state {
            WizardState::Results { active_tab, .. } => assert_eq!(*active_tab, Tab::Keywords),
            other => panic!("expected Results, got {other:?}"),
        }
    }

    #[test]
    fn test_reset_clears_everything() {
        let mut wizard = Wizard::new();
        to_loading(&mut wizard);
        wizard.apply(WizardEvent::AnalysisSucceeded(json!({"matchScore": 50})));
        wizard.apply(WizardEvent::Reset);

        assert_eq!(wizard.state, WizardState::Idle);
        assert_eq!(wizard.error, None);
        assert_eq!(wizard.step_index(), 0);
    }

    #[test]
    fn test_clearing_job_description_without_file_returns_to_idle() {
        let mut wizard = Wizard::new();
        wizard.apply(WizardEvent::EditJobDescription("some text".to_string()));
        assert!(matches!(wizard.state, WizardState::Ready { .. }));

        wizard.apply(WizardEvent::EditJobDescription(String::new()));
        assert_eq!(wizard.state, WizardState::Idle);
    }

    #[test]
    fn test_input_events_during_loading_are_ignored() {
        let mut wizard = Wizard::new();
        to_loading(&mut wizard);
        let before = wizard.clone();

        wizard.apply(WizardEvent::Submit);
        wizard.apply(WizardEvent::EditJobDescription("late edit".to_string()));
        select_pdf(&mut wizard);

        assert_eq!(wizard, before);
    }

    #[test]
    fn test_tick_outside_loading_is_ignored() {
        let mut wizard = Wizard::new();
        wizard.apply(WizardEvent::Tick);
        assert_eq!(wizard.state, WizardState::Idle);
    }

    #[test]
    fn test_all_tabs_have_labels() {
        for tab in Tab::ALL {
            assert!(!tab.label().is_empty());
        }
    }
}
