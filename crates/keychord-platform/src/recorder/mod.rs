//! Recorder session: focus state, the bound shortcut, conflict handling and
//! host callbacks.

mod prompt;
mod session;
mod types;

pub use prompt::{ConflictPrompt, FixedPrompt};
pub use session::Recorder;
pub use types::{ClassificationResult, OverrideChoice};

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;
    use crate::classifier::{CapturedEvent, HitTest, RecorderState, RejectReason};
    use crate::input::{Conflict, ShortcutRegistry};
    use crate::keymap::{keycodes, parse_shortcut, ModifierFlags, Shortcut};
    use keychord_common::{Point, Rect};

    const K: u16 = 0x28;

    /// Records every prompt call and answers system conflicts with `choice`.
    #[derive(Default)]
    struct ScriptedPrompt {
        choice: Option<OverrideChoice>,
        notices: Vec<Conflict>,
        system_prompts: usize,
    }

    impl ConflictPrompt for ScriptedPrompt {
        fn notify_conflict(&mut self, _shortcut: &Shortcut, conflict: &Conflict) {
            self.notices.push(conflict.clone());
        }

        fn confirm_system_override(&mut self, _shortcut: &Shortcut) -> OverrideChoice {
            self.system_prompts += 1;
            self.choice.unwrap_or(OverrideChoice::KeepDefault)
        }
    }

    fn recorder() -> Recorder {
        let mut recorder = Recorder::new(HitTest::new(Rect::new(0.0, 0.0, 160.0, 24.0)));
        recorder.focus();
        recorder
    }

    fn registry() -> ShortcutRegistry {
        let mut registry = ShortcutRegistry::new();
        registry.bind_menu_item("Quit", parse_shortcut("Cmd+Q").unwrap());
        registry.disallow(parse_shortcut("Cmd+Q").unwrap());
        registry.disallow(parse_shortcut("Ctrl+K").unwrap());
        registry.reserve_for_system(parse_shortcut("Cmd+Space").unwrap());
        registry
    }

    fn commits(recorder: &mut Recorder) -> Rc<RefCell<Vec<Shortcut>>> {
        let log = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&log);
        recorder.on_committed(move |s| sink.borrow_mut().push(*s));
        log
    }

    #[test]
    fn focus_and_blur() {
        let mut recorder = Recorder::new(HitTest::new(Rect::new(0.0, 0.0, 10.0, 10.0)));
        assert_eq!(recorder.state(), RecorderState::Idle);
        recorder.focus();
        assert!(recorder.is_recording());
        recorder.blur();
        assert_eq!(recorder.state(), RecorderState::Idle);
    }

    #[test]
    fn modifier_only_shortcut_commits() {
        let mut recorder = recorder();
        let committed = commits(&mut recorder);
        let mut prompt = ScriptedPrompt::default();

        let result = recorder.handle_event(
            &CapturedEvent::modifiers_only(ModifierFlags::FUNCTION),
            &registry(),
            &mut prompt,
        );

        let expected = Shortcut::modifier_only(ModifierFlags::FUNCTION).unwrap();
        assert_eq!(
            result,
            ClassificationResult::Committed {
                shortcut: expected,
                overrode_system: false
            }
        );
        assert_eq!(recorder.shortcut(), Some(&expected));
        assert_eq!(recorder.state(), RecorderState::Idle);
        assert_eq!(*committed.borrow(), vec![expected]);
    }

    #[test]
    fn regular_shortcut_commits() {
        let mut recorder = recorder();
        let committed = commits(&mut recorder);

        let result = recorder.handle_event(
            &CapturedEvent::key_down(K, ModifierFlags::COMMAND | ModifierFlags::SHIFT),
            &registry(),
            &mut ScriptedPrompt::default(),
        );

        assert!(result.committed().is_some());
        assert_eq!(committed.borrow().len(), 1);
        assert!(!recorder.display().is_empty());
    }

    #[test]
    fn bare_event_beeps_and_keeps_recording() {
        let mut recorder = recorder();
        let committed = commits(&mut recorder);

        let result = recorder.handle_event(
            &CapturedEvent::modifiers_only(ModifierFlags::empty()),
            &registry(),
            &mut ScriptedPrompt::default(),
        );

        assert_eq!(
            result,
            ClassificationResult::Rejected {
                reason: RejectReason::NoKey
            }
        );
        assert!(result.should_beep());
        assert!(recorder.is_recording());
        assert!(committed.borrow().is_empty());
    }

    #[test]
    fn escape_cancels_without_commit() {
        let mut recorder = recorder();
        let committed = commits(&mut recorder);

        let result = recorder.handle_event(
            &CapturedEvent::escape(),
            &registry(),
            &mut ScriptedPrompt::default(),
        );

        assert_eq!(result, ClassificationResult::Cancel);
        assert_eq!(recorder.state(), RecorderState::Idle);
        assert!(committed.borrow().is_empty());
    }

    #[test]
    fn tab_and_outside_click_blur() {
        let mut recorder = recorder();
        let result = recorder.handle_event(
            &CapturedEvent::tab(),
            &registry(),
            &mut ScriptedPrompt::default(),
        );
        assert_eq!(result, ClassificationResult::Blur);
        assert!(!recorder.is_recording());

        recorder.focus();
        let result = recorder.handle_event(
            &CapturedEvent::pointer_up(Point::new(300.0, 5.0)),
            &registry(),
            &mut ScriptedPrompt::default(),
        );
        assert_eq!(result, ClassificationResult::Blur);
        assert!(!recorder.is_recording());
    }

    #[test]
    fn inside_click_is_ignored() {
        let mut recorder = recorder();
        let result = recorder.handle_event(
            &CapturedEvent::pointer_up(Point::new(5.0, 5.0)),
            &registry(),
            &mut ScriptedPrompt::default(),
        );
        assert_eq!(result, ClassificationResult::Ignored);
        assert!(recorder.is_recording());
    }

    #[test]
    fn delete_clears_binding_and_keeps_focus() {
        let seeded = Shortcut::new(Some(K), ModifierFlags::COMMAND).unwrap();
        let mut recorder = recorder().with_shortcut(Some(seeded));
        let cleared = Rc::new(RefCell::new(0));
        let sink = Rc::clone(&cleared);
        recorder.on_cleared(move || *sink.borrow_mut() += 1);

        let result = recorder.handle_event(
            &CapturedEvent::delete(),
            &registry(),
            &mut ScriptedPrompt::default(),
        );

        assert_eq!(result, ClassificationResult::ClearRequest);
        assert_eq!(recorder.shortcut(), None);
        assert_eq!(recorder.display(), "");
        assert!(recorder.is_recording());
        assert_eq!(*cleared.borrow(), 1);
    }

    #[test]
    fn menu_conflict_notifies_and_refocuses() {
        let mut recorder = recorder();
        let committed = commits(&mut recorder);
        let mut prompt = ScriptedPrompt::default();

        let result = recorder.handle_event(
            &CapturedEvent::key_down(0x0C, ModifierFlags::COMMAND), // Cmd+Q
            &registry(),
            &mut prompt,
        );

        assert!(matches!(
            result,
            ClassificationResult::ConflictMenu { ref title, .. } if title == "Quit"
        ));
        assert_eq!(
            prompt.notices,
            vec![Conflict::Menu {
                title: "Quit".into()
            }]
        );
        assert!(recorder.is_recording());
        assert_eq!(recorder.shortcut(), None);
        assert!(committed.borrow().is_empty());
    }

    #[test]
    fn disallowed_conflict_notifies_and_refocuses() {
        let mut recorder = recorder();
        let mut prompt = ScriptedPrompt::default();

        let result = recorder.handle_event(
            &CapturedEvent::key_down(K, ModifierFlags::CONTROL),
            &registry(),
            &mut prompt,
        );

        assert!(matches!(result, ClassificationResult::ConflictDisallowed { .. }));
        assert_eq!(prompt.notices, vec![Conflict::Disallowed]);
        assert!(recorder.is_recording());
        assert_eq!(recorder.shortcut(), None);
    }

    #[test]
    fn system_conflict_force_override_commits() {
        let mut recorder = recorder();
        let committed = commits(&mut recorder);
        let mut prompt = ScriptedPrompt {
            choice: Some(OverrideChoice::ForceOverride),
            ..Default::default()
        };

        let result = recorder.handle_event(
            &CapturedEvent::key_down(keycodes::SPACE, ModifierFlags::COMMAND),
            &registry(),
            &mut prompt,
        );

        let expected = parse_shortcut("Cmd+Space").unwrap();
        assert_eq!(
            result,
            ClassificationResult::Committed {
                shortcut: expected,
                overrode_system: true
            }
        );
        assert_eq!(prompt.system_prompts, 1);
        assert_eq!(recorder.state(), RecorderState::Idle);
        assert_eq!(*committed.borrow(), vec![expected]);
    }

    #[test]
    fn system_conflict_keep_default_discards() {
        let mut recorder = recorder();
        let committed = commits(&mut recorder);
        let mut prompt = ScriptedPrompt {
            choice: Some(OverrideChoice::KeepDefault),
            ..Default::default()
        };

        let result = recorder.handle_event(
            &CapturedEvent::key_down(keycodes::SPACE, ModifierFlags::COMMAND),
            &registry(),
            &mut prompt,
        );

        assert!(matches!(result, ClassificationResult::ConflictSystem { .. }));
        assert!(recorder.is_recording());
        assert_eq!(recorder.shortcut(), None);
        assert!(committed.borrow().is_empty());
    }

    #[test]
    fn on_classified_fires_once_per_event() {
        let mut recorder = recorder();
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        recorder.on_classified(move |r| sink.borrow_mut().push(r.clone()));

        let registry = registry();
        let mut prompt = FixedPrompt::default();
        let events = [
            CapturedEvent::modifiers_only(ModifierFlags::empty()),
            CapturedEvent::modifiers_only(ModifierFlags::OPTION),
            CapturedEvent::escape(),
        ];
        for event in &events {
            recorder.handle_event(event, &registry, &mut prompt);
        }

        let seen = seen.borrow();
        assert_eq!(seen.len(), 3);
        assert!(seen[0].should_beep());
        assert!(seen[1].committed().is_some());
        // Idle after the commit, so Escape passes through.
        assert_eq!(seen[2], ClassificationResult::Ignored);
    }

    #[test]
    fn idle_recorder_ignores_keys() {
        let mut recorder = Recorder::new(HitTest::new(Rect::new(0.0, 0.0, 10.0, 10.0)));
        let result = recorder.handle_event(
            &CapturedEvent::modifiers_only(ModifierFlags::COMMAND),
            &registry(),
            &mut FixedPrompt::default(),
        );
        assert_eq!(result, ClassificationResult::Ignored);
        assert_eq!(recorder.shortcut(), None);
    }

    #[test]
    fn result_serializes_with_type_tag() {
        let shortcut = Shortcut::modifier_only(ModifierFlags::FUNCTION).unwrap();
        let result = ClassificationResult::Committed {
            shortcut,
            overrode_system: false,
        };
        let json = serde_json::to_string(&result).unwrap();
        assert_eq!(
            json,
            r#"{"type":"committed","shortcut":{"modifiers":8388608},"overrode_system":false}"#
        );

        let json = serde_json::to_string(&ClassificationResult::Rejected {
            reason: RejectReason::NoKey,
        })
        .unwrap();
        assert_eq!(json, r#"{"type":"rejected","reason":"no_key"}"#);
    }

    #[test]
    fn clear_fires_even_when_unbound() {
        let mut recorder = recorder();
        let cleared = Rc::new(RefCell::new(false));
        let sink = Rc::clone(&cleared);
        recorder.on_cleared(move || *sink.borrow_mut() = true);
        recorder.clear();
        assert!(*cleared.borrow());
    }
}
