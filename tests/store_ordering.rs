//! Serialized action processing and disposal of a running store.

mod common;

use std::collections::HashMap;
use std::sync::Arc;

use navflow::config::StoreConfig;
use navflow::mvi::{Action, Effect, Feature, Intent, Reducer, UiState, Work};
use navflow::store::Store;
use parking_lot::Mutex;
use tokio::sync::oneshot;

use common::{idle, settle};

#[derive(Debug, Clone, Default, PartialEq)]
struct JobsState {
    in_flight: u32,
    finished: Vec<&'static str>,
    applied: u64,
}

impl UiState for JobsState {}

#[derive(Debug)]
enum JobsIntent {
    Start(&'static str),
    Bump,
}

impl Intent for JobsIntent {}

#[derive(Debug, Clone, PartialEq)]
enum JobsAction {
    Started(&'static str),
    Finished(&'static str),
    Bumped,
}

impl Action for JobsAction {}

#[derive(Debug, Clone, PartialEq)]
enum JobsEffect {
    Done(&'static str),
}

impl Effect for JobsEffect {}

struct JobsReducer;

impl Reducer for JobsReducer {
    type State = JobsState;
    type Action = JobsAction;

    fn reduce(mut state: JobsState, action: JobsAction) -> JobsState {
        match action {
            JobsAction::Started(_) => state.in_flight += 1,
            JobsAction::Finished(name) => {
                state.in_flight -= 1;
                state.finished.push(name);
            }
            JobsAction::Bumped => {}
        }
        state.applied += 1;
        state
    }
}

type Gates = Arc<Mutex<HashMap<&'static str, oneshot::Receiver<()>>>>;

struct JobsFeature {
    gates: Gates,
}

impl Feature for JobsFeature {
    const NAME: &'static str = "jobs";

    type State = JobsState;
    type Intent = JobsIntent;
    type Action = JobsAction;
    type Effect = JobsEffect;
    type Reducer = JobsReducer;

    fn actions(_state: &JobsState, intent: JobsIntent) -> Vec<JobsAction> {
        match intent {
            JobsIntent::Start(name) => vec![JobsAction::Started(name)],
            JobsIntent::Bump => vec![JobsAction::Bumped],
        }
    }

    fn effects(_state: &JobsState, action: &JobsAction) -> Vec<JobsEffect> {
        match action {
            JobsAction::Finished(name) => vec![JobsEffect::Done(name)],
            _ => Vec::new(),
        }
    }

    fn work(&self, _state: &JobsState, action: &JobsAction) -> Option<Work<JobsAction>> {
        match action {
            JobsAction::Started(name) => {
                let name = *name;
                let gate = self.gates.lock().remove(name);
                Some(Box::pin(async move {
                    if let Some(gate) = gate {
                        let _ = gate.await;
                    }
                    JobsAction::Finished(name)
                }))
            }
            _ => None,
        }
    }
}

fn gated(names: &[&'static str]) -> (Gates, HashMap<&'static str, oneshot::Sender<()>>) {
    let gates: Gates = Arc::default();
    let mut releases = HashMap::new();
    for name in names {
        let (tx, rx) = oneshot::channel();
        gates.lock().insert(*name, rx);
        releases.insert(*name, tx);
    }
    (gates, releases)
}

#[tokio::test]
async fn results_apply_in_completion_order() {
    let (gates, mut releases) = gated(&["A", "B"]);
    let store = Store::spawn(JobsFeature { gates }, &StoreConfig::default());
    let mut effects = store.subscribe_effects();
    let mut states = store.observe();

    store.send(JobsIntent::Start("A"));
    store.send(JobsIntent::Start("B"));
    settle(&mut states, |s| s.in_flight == 2).await;

    releases.remove("B").expect("gate B").send(()).expect("B waiting");
    let state = settle(&mut states, |s| s.finished.len() == 1).await;
    assert_eq!(state.finished, vec!["B"]);

    releases.remove("A").expect("gate A").send(()).expect("A waiting");
    let state = settle(&mut states, |s| s.finished.len() == 2).await;
    assert_eq!(state.finished, vec!["B", "A"]);
    assert_eq!(state.in_flight, 0);

    assert_eq!(effects.recv().await.expect("effect"), JobsEffect::Done("B"));
    assert_eq!(effects.recv().await.expect("effect"), JobsEffect::Done("A"));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_senders_are_serialized() {
    let store = Arc::new(Store::spawn(
        JobsFeature {
            gates: Arc::default(),
        },
        &StoreConfig::default(),
    ));
    let mut states = store.observe();

    let mut senders = Vec::new();
    for _ in 0..8 {
        let dispatcher = store.dispatcher();
        senders.push(tokio::spawn(async move {
            for _ in 0..25 {
                dispatcher.send(JobsIntent::Bump);
            }
        }));
    }
    for sender in senders {
        sender.await.expect("sender task");
    }

    let state = settle(&mut states, |s| s.applied == 200).await;
    assert_eq!(state.applied, 200);
}

#[tokio::test]
async fn late_results_are_ignored_after_dispose() {
    let (gates, mut releases) = gated(&["A"]);
    let store = Store::spawn(JobsFeature { gates }, &StoreConfig::default());
    let mut states = store.observe();

    store.send(JobsIntent::Start("A"));
    settle(&mut states, |s| s.in_flight == 1).await;

    store.dispose();
    assert!(store.is_disposed());

    let _ = releases.remove("A").expect("gate A").send(());
    store.send(JobsIntent::Bump);
    idle().await;

    let state = store.state();
    assert_eq!(state.in_flight, 1);
    assert!(state.finished.is_empty());
    assert_eq!(state.applied, 1);
}

#[tokio::test]
async fn unchanged_state_does_not_notify() {
    #[derive(Debug, Clone, Default, PartialEq)]
    struct Flag(bool);
    impl UiState for Flag {}

    #[derive(Debug)]
    struct Set;
    impl Intent for Set {}

    #[derive(Debug, Clone)]
    struct SetAction;
    impl Action for SetAction {}

    #[derive(Debug, Clone)]
    enum NoEffect {}
    impl Effect for NoEffect {}

    struct FlagReducer;
    impl Reducer for FlagReducer {
        type State = Flag;
        type Action = SetAction;
        fn reduce(_state: Flag, _action: SetAction) -> Flag {
            Flag(true)
        }
    }

    struct FlagFeature;
    impl Feature for FlagFeature {
        const NAME: &'static str = "flag";
        type State = Flag;
        type Intent = Set;
        type Action = SetAction;
        type Effect = NoEffect;
        type Reducer = FlagReducer;

        fn actions(_state: &Flag, _intent: Set) -> Vec<SetAction> {
            vec![SetAction]
        }
    }

    let store = Store::spawn(FlagFeature, &StoreConfig::default());
    let mut states = store.observe();

    store.send(Set);
    settle(&mut states, |s| s.0).await;
    states.borrow_and_update();

    store.send(Set);
    idle().await;
    assert!(!states.has_changed().expect("store alive"));
}
