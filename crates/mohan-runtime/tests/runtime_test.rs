use mohan_engine::{
    Action, BusyPolicy, CannedResponder, Catalog, DashboardOptions, Panel, ResponseProvider,
};
use mohan_runtime::{DashboardRuntime, Error};
use mohan_types::{ChatPayload, Role, Scenario};
use std::sync::Arc;
use std::time::Duration;

fn runtime(role: Role, policy: BusyPolicy) -> DashboardRuntime {
    let catalog = Catalog::builtin();
    let provider: Arc<dyn ResponseProvider> = Arc::new(CannedResponder::new(
        catalog.canned.clone(),
        CannedResponder::DEFAULT_DELAY,
    ));
    let options = DashboardOptions {
        role,
        busy_policy: policy,
        seed: Some(7),
        ..DashboardOptions::default()
    };
    DashboardRuntime::new(catalog, options, provider).unwrap()
}

async fn wait(ms: u64) {
    tokio::time::sleep(Duration::from_millis(ms)).await;
    tokio::task::yield_now().await;
}

#[tokio::test(start_paused = true)]
async fn test_mount_animation_lands_on_exact_values() {
    let mut rt = runtime(Role::Manager, BusyPolicy::Ignore);
    rt.dispatch(Action::Mount);
    assert!(rt.has_pending_effects());
    assert_eq!(rt.state().metrics.slots(), &["", "", ""]);

    rt.settle().await;

    assert!(!rt.has_pending_effects());
    assert_eq!(
        rt.state().metrics.slots(),
        &["14.2 Days", "62%", "340 Hours"]
    );
}

#[tokio::test(start_paused = true)]
async fn test_unmount_freezes_display() {
    let mut rt = runtime(Role::Employee, BusyPolicy::Ignore);
    rt.dispatch(Action::Mount);
    wait(200).await;
    rt.drain();

    rt.unmount();
    let frozen = rt.state().metrics.slots().to_vec();

    wait(5_000).await;
    rt.drain();
    assert_eq!(rt.state().metrics.slots(), frozen.as_slice());
    assert!(!rt.has_pending_effects());
}

#[tokio::test(start_paused = true)]
async fn test_remount_animates_again() {
    let mut rt = runtime(Role::Manager, BusyPolicy::Ignore);
    rt.dispatch(Action::Mount);
    rt.unmount();
    rt.dispatch(Action::Mount);
    rt.settle().await;
    assert_eq!(rt.state().metrics.text(1), Some("62%"));
}

#[tokio::test(start_paused = true)]
async fn test_reply_arrives_after_delay() {
    let mut rt = runtime(Role::Manager, BusyPolicy::Ignore);
    rt.dispatch(Action::PrefillDefaultQuestion);
    rt.dispatch(Action::SubmitInput);
    assert!(rt.state().assistant.is_thinking());

    wait(1_400).await;
    rt.drain();
    assert!(rt.state().assistant.is_thinking());
    assert_eq!(rt.state().assistant.messages.len(), 1);

    wait(200).await;
    rt.drain();
    let assistant = &rt.state().assistant;
    assert!(!assistant.is_thinking());
    assert_eq!(assistant.messages.len(), 2);
    assert!(matches!(
        assistant.messages[1].payload,
        Some(ChatPayload::Analysis(_))
    ));
    assert!(rt.state().panels.ai_drawer);
}

#[tokio::test(start_paused = true)]
async fn test_closing_window_keeps_pending_reply() {
    let mut rt = runtime(Role::Employee, BusyPolicy::Ignore);
    rt.dispatch(Action::Submit {
        text: "standup".to_string(),
        scenario: Some(Scenario::Report),
    });
    rt.dispatch(Action::SetPanel(Panel::AssistantWindow, false));

    rt.settle().await;
    let kinds: Vec<&str> = rt
        .state()
        .assistant
        .messages
        .iter()
        .filter_map(|m| m.payload.as_ref().map(|p| p.kind()))
        .collect();
    assert_eq!(kinds, vec!["report"]);
    assert!(!rt.state().panels.assistant_window);
}

#[tokio::test(start_paused = true)]
async fn test_role_switch_discards_pending_reply() {
    let mut rt = runtime(Role::Manager, BusyPolicy::Ignore);
    rt.dispatch(Action::Submit {
        text: "why?".to_string(),
        scenario: None,
    });
    wait(500).await;
    rt.dispatch(Action::SwitchRole(Role::Employee));

    rt.settle().await;
    assert!(rt.state().assistant.messages.is_empty());
    assert!(!rt.state().assistant.is_thinking());
    assert!(!rt.state().panels.ai_drawer);
}

#[tokio::test(start_paused = true)]
async fn test_queue_policy_answers_both() {
    let mut rt = runtime(Role::Employee, BusyPolicy::Queue);
    rt.dispatch(Action::Submit {
        text: "first".to_string(),
        scenario: None,
    });
    rt.dispatch(Action::Submit {
        text: "second".to_string(),
        scenario: Some(Scenario::Report),
    });

    rt.settle().await;
    let kinds: Vec<&str> = rt
        .state()
        .assistant
        .messages
        .iter()
        .filter_map(|m| m.payload.as_ref().map(|p| p.kind()))
        .collect();
    assert_eq!(kinds, vec!["memory", "report"]);
}

#[tokio::test(start_paused = true)]
async fn test_ignore_policy_drops_second_submission() {
    let mut rt = runtime(Role::Employee, BusyPolicy::Ignore);
    rt.dispatch(Action::Submit {
        text: "first".to_string(),
        scenario: None,
    });
    rt.dispatch(Action::Submit {
        text: "second".to_string(),
        scenario: None,
    });

    rt.settle().await;
    assert_eq!(rt.state().assistant.messages.len(), 2);
}

#[test]
fn test_new_requires_executor() {
    let catalog = Catalog::builtin();
    let provider: Arc<dyn ResponseProvider> =
        Arc::new(CannedResponder::instant(catalog.canned.clone()));
    let result = DashboardRuntime::new(catalog, DashboardOptions::default(), provider);
    assert!(matches!(result, Err(Error::NoExecutor(_))));
}
