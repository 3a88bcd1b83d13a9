//! Debounced search submission.
//!
//! # Design
//! - Every observed change of the live search text re-arms one timer.
//! - The commit reads the search mode from the store when it fires.
//! - Teardown disarms; nothing commits after the toolbar is gone.

use crate::core::debounce::{DebouncePhase, Debouncer, Scheduler};
use crate::features::links::actions::LinkDispatch;
use crate::features::links::logic::commit_actions;

/// Commits the live search text after a quiet period.
pub struct SearchSubmitter<S: Scheduler, D> {
    debouncer: Debouncer<S>,
    dispatch: D,
}

impl<S, D> SearchSubmitter<S, D>
where
    S: Scheduler,
    S::Handle: 'static,
    D: LinkDispatch + Clone + 'static,
{
    /// Build an idle submitter.
    #[must_use]
    pub fn new(scheduler: S, dispatch: D, timeout_ms: u32) -> Self {
        Self {
            debouncer: Debouncer::new(scheduler, timeout_ms),
            dispatch,
        }
    }

    /// Observe a new value of the live search text.
    pub fn input_changed(&mut self, value: String) {
        let dispatch = self.dispatch.clone();
        self.debouncer.arm(move || commit_search(&dispatch, &value));
    }

    /// Cancel any pending commit.
    pub fn teardown(&mut self) {
        self.debouncer.disarm();
    }

    /// Whether a commit is scheduled.
    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.debouncer.phase() == DebouncePhase::Pending
    }
}

/// Commit `value` using the search mode currently held by the store.
pub fn commit_search<D: LinkDispatch>(dispatch: &D, value: &str) {
    let is_tag = dispatch.table_config().is_tag;
    dispatch.dispatch_all(commit_actions(is_tag, value));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::testing::ManualScheduler;
    use crate::features::links::actions::UserAction;
    use crate::features::links::logic::{
        SearchKeyOutcome, SearchMode, interpret_search_key, mode_change_actions,
    };
    use crate::features::links::state::{
        UrlTableConfig, UrlTableConfigPatch, UserLinksState, reduce,
    };
    use std::cell::RefCell;
    use std::rc::Rc;

    const TIMEOUT: u32 = 500;

    #[derive(Clone, Default)]
    struct RecordingDispatch {
        state: Rc<RefCell<UserLinksState>>,
        log: Rc<RefCell<Vec<UserAction>>>,
    }

    impl RecordingDispatch {
        fn commits(&self) -> Vec<UrlTableConfigPatch> {
            self.log
                .borrow()
                .iter()
                .filter_map(|action| match action {
                    UserAction::SetUrlTableConfig(patch) if patch.search_text.is_some() => {
                        Some(patch.clone())
                    }
                    _ => None,
                })
                .collect()
        }

        fn fetches(&self) -> usize {
            self.log
                .borrow()
                .iter()
                .filter(|action| **action == UserAction::GetUrlsForUser)
                .count()
        }
    }

    impl LinkDispatch for RecordingDispatch {
        fn table_config(&self) -> UrlTableConfig {
            self.state.borrow().table_config.clone()
        }

        fn dispatch(&self, action: UserAction) {
            self.log.borrow_mut().push(action.clone());
            let _ = reduce(&mut self.state.borrow_mut(), action);
        }
    }

    /// Wires a submitter the way the toolbar does: every stored change of
    /// `search_input` is observed by the submitter.
    struct Harness {
        clock: ManualScheduler,
        dispatch: RecordingDispatch,
        submitter: SearchSubmitter<ManualScheduler, RecordingDispatch>,
    }

    impl Harness {
        fn new() -> Self {
            let clock = ManualScheduler::new();
            let dispatch = RecordingDispatch::default();
            let submitter = SearchSubmitter::new(clock.clone(), dispatch.clone(), TIMEOUT);
            Self {
                clock,
                dispatch,
                submitter,
            }
        }

        /// First render: the toolbar observes whatever `search_input` holds.
        fn mount(&mut self) {
            let value = self.dispatch.table_config().search_input;
            self.submitter.input_changed(value);
        }

        /// Dispatch actions and observe any resulting `search_input` change.
        fn dispatch_all(&mut self, actions: impl IntoIterator<Item = UserAction>) {
            let before = self.dispatch.table_config().search_input;
            self.dispatch.dispatch_all(actions);
            let after = self.dispatch.table_config().search_input;
            if before != after {
                self.submitter.input_changed(after);
            }
        }

        fn type_at(&mut self, at: u64, value: &str) {
            self.clock.advance_to(at);
            self.set_input(value);
        }

        fn set_input(&mut self, value: &str) {
            let before = self.dispatch.table_config().search_input;
            self.dispatch.dispatch(UserAction::SetUrlTableConfig(
                UrlTableConfigPatch::search_input(value),
            ));
            if before != value {
                self.submitter.input_changed(value.to_string());
            }
        }
    }

    #[test]
    fn burst_within_window_commits_last_value_once() {
        let mut harness = Harness::new();
        harness.type_at(0, "a");
        harness.type_at(100, "ab");
        harness.type_at(200, "abc");

        harness.clock.advance_to(699);
        assert!(harness.dispatch.commits().is_empty());
        harness.clock.advance_to(700);

        let commits = harness.dispatch.commits();
        assert_eq!(commits.len(), 1);
        assert_eq!(commits[0].search_text.as_deref(), Some("abc"));
        assert_eq!(harness.dispatch.fetches(), 1);
        assert!(!harness.submitter.is_pending());
    }

    #[test]
    fn mount_loads_table_once_after_quiet_period() {
        let mut harness = Harness::new();
        harness.mount();
        assert!(harness.submitter.is_pending());

        harness.clock.advance_to(u64::from(TIMEOUT) - 1);
        assert_eq!(harness.dispatch.fetches(), 0);
        harness.clock.advance_to(u64::from(TIMEOUT));

        assert_eq!(harness.dispatch.fetches(), 1);
        let commits = harness.dispatch.commits();
        assert_eq!(commits.len(), 1);
        assert_eq!(commits[0].search_text.as_deref(), Some(""));
        assert_eq!(commits[0].tags.as_deref(), Some(""));
        harness.clock.advance(10 * u64::from(TIMEOUT));
        assert_eq!(harness.dispatch.fetches(), 1);
    }

    #[test]
    fn switching_mode_commits_empty_search_under_new_mode() {
        let mut harness = Harness::new();
        harness.type_at(0, "vip");
        harness.clock.advance(u64::from(TIMEOUT));
        assert_eq!(
            harness.dispatch.state.borrow().table_config.search_text,
            "vip"
        );

        harness.dispatch_all(mode_change_actions(SearchMode::Tag));
        assert_eq!(harness.dispatch.table_config().search_input, "");
        assert!(harness.submitter.is_pending());
        harness.clock.advance(u64::from(TIMEOUT));

        let state = harness.dispatch.state.borrow();
        assert!(state.table_config.is_tag);
        assert_eq!(state.table_config.search_text, "");
        assert_eq!(state.table_config.tags, "");
        assert_eq!(harness.dispatch.fetches(), 2);
    }

    #[test]
    fn spaced_changes_commit_independently() {
        let mut harness = Harness::new();
        harness.type_at(0, "a");
        harness.type_at(600, "b");
        harness.clock.advance(TIMEOUT.into());

        let terms: Vec<_> = harness
            .dispatch
            .commits()
            .into_iter()
            .filter_map(|patch| patch.search_text)
            .collect();
        assert_eq!(terms, vec!["a".to_string(), "b".to_string()]);
    }

    #[test]
    fn teardown_before_timeout_commits_nothing() {
        let mut harness = Harness::new();
        harness.type_at(0, "abc");
        harness.submitter.teardown();
        harness.clock.advance(10 * u64::from(TIMEOUT));
        assert!(harness.dispatch.commits().is_empty());
        assert_eq!(harness.dispatch.fetches(), 0);
    }

    #[test]
    fn dropping_the_submitter_cancels_the_commit() {
        let Harness {
            clock,
            dispatch,
            mut submitter,
        } = Harness::new();
        submitter.input_changed("abc".into());
        drop(submitter);
        clock.advance(u64::from(TIMEOUT));
        assert!(dispatch.commits().is_empty());
    }

    #[test]
    fn commit_uses_mode_at_fire_time() {
        let mut harness = Harness::new();
        harness.type_at(0, "vip");
        harness
            .dispatch
            .dispatch(UserAction::SetUrlTableConfig(UrlTableConfigPatch::is_tag(
                true,
            )));
        harness.clock.advance(u64::from(TIMEOUT));

        let state = harness.dispatch.state.borrow();
        assert_eq!(state.table_config.tags, "vip");
        assert_eq!(state.table_config.search_text, "");
        assert_eq!(state.table_config.page_number, 0);
    }

    #[test]
    fn commit_resets_page_and_flags_before_fetch() {
        let mut harness = Harness::new();
        harness
            .dispatch
            .dispatch(UserAction::SetUrlTableConfig(UrlTableConfigPatch::page(3)));
        harness.type_at(0, "promo");
        harness.clock.advance(u64::from(TIMEOUT));

        let log = harness.dispatch.log.borrow();
        let flag = log
            .iter()
            .position(|action| *action == UserAction::IsFetchingUrls(true))
            .expect("fetching flag");
        let fetch = log
            .iter()
            .position(|action| *action == UserAction::GetUrlsForUser)
            .expect("fetch");
        assert!(flag < fetch);
        assert_eq!(harness.dispatch.state.borrow().table_config.page_number, 0);
    }

    #[test]
    fn escape_clears_input_and_commits_empty_search() {
        let mut harness = Harness::new();
        harness.type_at(0, "abc");
        harness.clock.advance(u64::from(TIMEOUT));
        assert_eq!(harness.dispatch.commits().len(), 1);

        harness.clock.advance(50);
        let at = harness.clock.now();
        if interpret_search_key("Escape") == Some(SearchKeyOutcome::ClearAndBlur) {
            harness.type_at(at, "");
        }
        assert_eq!(harness.dispatch.table_config().search_input, "");

        harness.clock.advance(u64::from(TIMEOUT));
        let commits = harness.dispatch.commits();
        assert_eq!(commits.len(), 2);
        assert_eq!(commits[1].search_text.as_deref(), Some(""));
        assert_eq!(commits[1].tags.as_deref(), Some(""));
    }

    #[test]
    fn enter_does_not_shorten_the_window() {
        let mut harness = Harness::new();
        harness.type_at(0, "abc");
        assert_eq!(interpret_search_key("Enter"), Some(SearchKeyOutcome::Blur));
        // Enter only blurs; blur re-submits the same text.
        harness.type_at(100, "abc");

        harness.clock.advance_to(499);
        assert!(harness.dispatch.commits().is_empty());
        harness.clock.advance_to(500);
        assert_eq!(harness.dispatch.commits().len(), 1);
    }
}
