use keychord_common::Rect;
use tracing::{debug, info};

use crate::classifier::{classify, CapturedEvent, Classification, HitTest, RecorderState};
use crate::input::{resolve_conflicts, Conflict, ConflictRegistry};
use crate::keymap::Shortcut;

use super::prompt::ConflictPrompt;
use super::types::{ClassificationResult, OverrideChoice};

type ClassifiedCallback = Box<dyn FnMut(&ClassificationResult)>;
type CommittedCallback = Box<dyn FnMut(&Shortcut)>;
type ClearedCallback = Box<dyn FnMut()>;

/// A shortcut recorder session.
///
/// Owns the focus state and the bound shortcut. Events are handled one at a
/// time, to completion, through [`Recorder::handle_event`].
pub struct Recorder {
    state: RecorderState,
    shortcut: Option<Shortcut>,
    hit_test: HitTest,
    on_classified: Option<ClassifiedCallback>,
    on_committed: Option<CommittedCallback>,
    on_cleared: Option<ClearedCallback>,
}

impl Recorder {
    pub fn new(hit_test: HitTest) -> Self {
        Self {
            state: RecorderState::Idle,
            shortcut: None,
            hit_test,
            on_classified: None,
            on_committed: None,
            on_cleared: None,
        }
    }

    /// Seed the bound shortcut, e.g. from a persisted record.
    pub fn with_shortcut(mut self, shortcut: Option<Shortcut>) -> Self {
        self.shortcut = shortcut;
        self
    }

    /// Fired once for every handled event.
    pub fn on_classified(&mut self, f: impl FnMut(&ClassificationResult) + 'static) {
        self.on_classified = Some(Box::new(f));
    }

    /// Fired once per successful commit.
    pub fn on_committed(&mut self, f: impl FnMut(&Shortcut) + 'static) {
        self.on_committed = Some(Box::new(f));
    }

    /// Fired whenever the binding is erased.
    pub fn on_cleared(&mut self, f: impl FnMut() + 'static) {
        self.on_cleared = Some(Box::new(f));
    }

    pub fn state(&self) -> RecorderState {
        self.state
    }

    pub fn is_recording(&self) -> bool {
        self.state == RecorderState::Recording
    }

    pub fn shortcut(&self) -> Option<&Shortcut> {
        self.shortcut.as_ref()
    }

    /// Text the control shows: the bound shortcut, or nothing.
    pub fn display(&self) -> String {
        self.shortcut.map(|s| s.to_string()).unwrap_or_default()
    }

    pub fn set_bounds(&mut self, bounds: Rect) {
        self.hit_test.bounds = bounds;
    }

    /// Start recording.
    pub fn focus(&mut self) {
        if self.state != RecorderState::Recording {
            debug!("recorder focused");
        }
        self.state = RecorderState::Recording;
    }

    /// Stop recording.
    pub fn blur(&mut self) {
        if self.state != RecorderState::Idle {
            debug!("recorder blurred");
        }
        self.state = RecorderState::Idle;
    }

    /// Erase the bound shortcut. Focus is unchanged.
    pub fn clear(&mut self) {
        if let Some(previous) = self.shortcut.take() {
            info!(%previous, "shortcut cleared");
        }
        if let Some(cb) = self.on_cleared.as_mut() {
            cb();
        }
    }

    /// Process one captured event to completion.
    ///
    /// Candidates are checked against `registry` (menu, then disallowed, then
    /// system). Conflict notices go through `prompt` with the recorder
    /// blurred. Returns the same result passed to `on_classified`.
    pub fn handle_event<R, P>(
        &mut self,
        event: &CapturedEvent,
        registry: &R,
        prompt: &mut P,
    ) -> ClassificationResult
    where
        R: ConflictRegistry + ?Sized,
        P: ConflictPrompt + ?Sized,
    {
        let classification = classify(event, self.state, &self.hit_test);
        debug!(?classification, "classified event");

        let result = match classification {
            Classification::Ignored => ClassificationResult::Ignored,
            Classification::Cancel => {
                self.blur();
                ClassificationResult::Cancel
            }
            Classification::Blur => {
                self.blur();
                ClassificationResult::Blur
            }
            Classification::ClearRequest => {
                self.clear();
                ClassificationResult::ClearRequest
            }
            Classification::Rejected(reason) => ClassificationResult::Rejected { reason },
            Classification::ModifierOnlyCandidate(shortcut)
            | Classification::RegularCandidate(shortcut) => {
                self.accept_candidate(shortcut, registry, prompt)
            }
        };

        if let Some(cb) = self.on_classified.as_mut() {
            cb(&result);
        }
        result
    }

    fn accept_candidate<R, P>(
        &mut self,
        shortcut: Shortcut,
        registry: &R,
        prompt: &mut P,
    ) -> ClassificationResult
    where
        R: ConflictRegistry + ?Sized,
        P: ConflictPrompt + ?Sized,
    {
        match resolve_conflicts(&shortcut, registry) {
            None => self.commit(shortcut, false),
            Some(Conflict::System) => {
                self.blur();
                match prompt.confirm_system_override(&shortcut) {
                    OverrideChoice::ForceOverride => {
                        info!(%shortcut, "system shortcut overridden");
                        self.commit(shortcut, true)
                    }
                    OverrideChoice::KeepDefault => {
                        self.focus();
                        ClassificationResult::ConflictSystem { shortcut }
                    }
                }
            }
            Some(conflict) => {
                self.blur();
                prompt.notify_conflict(&shortcut, &conflict);
                self.focus();
                match conflict {
                    Conflict::Menu { title } => {
                        ClassificationResult::ConflictMenu { shortcut, title }
                    }
                    _ => ClassificationResult::ConflictDisallowed { shortcut },
                }
            }
        }
    }

    fn commit(&mut self, shortcut: Shortcut, overrode_system: bool) -> ClassificationResult {
        self.shortcut = Some(shortcut);
        self.state = RecorderState::Idle;
        info!(%shortcut, modifier_only = shortcut.is_modifier_only(), "shortcut committed");

        if let Some(cb) = self.on_committed.as_mut() {
            cb(&shortcut);
        }
        ClassificationResult::Committed {
            shortcut,
            overrode_system,
        }
    }
}

impl std::fmt::Debug for Recorder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Recorder")
            .field("state", &self.state)
            .field("shortcut", &self.shortcut)
            .field("hit_test", &self.hit_test)
            .finish_non_exhaustive()
    }
}
