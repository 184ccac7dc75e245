// Page and modal stacks driven frame by frame through realistic flows

use mybuild_ar::animation::{FadeBackdrop, SlideTransition};
use mybuild_ar::navigation::{
    BackdropAnimation, InteractionGate, ModalContainer, NavigationError, PageContainer,
    TransitionState, View,
};
use std::collections::HashSet;

const DT: f32 = 1.0 / 60.0;

fn slide(seconds: f32) -> Box<SlideTransition> {
    Box::new(SlideTransition {
        push_enter: seconds,
        push_exit: seconds,
        pop_enter: seconds,
        pop_exit: seconds,
        ..SlideTransition::default()
    })
}

fn pages(ids: &[&str], gate: &InteractionGate) -> PageContainer {
    let mut container = PageContainer::new().with_interaction_gate(gate.clone());
    for (order, id) in ids.iter().enumerate() {
        assert!(container.register(View::new(*id, order as i32, slide(0.1))));
    }
    container
}

fn run_until_idle(container: &mut PageContainer) -> usize {
    let mut frames = 0;
    while container.is_in_transition() {
        container.update(DT);
        frames += 1;
        assert!(frames < 1_000, "transition never finished");
    }
    frames
}

fn assert_unique(stack: &[String]) {
    let unique: HashSet<&String> = stack.iter().collect();
    assert_eq!(unique.len(), stack.len(), "duplicate view in {:?}", stack);
}

#[test]
fn test_push_pop_flow_keeps_stack_consistent() {
    let gate = InteractionGate::new();
    let mut container = pages(&["home", "shop", "cart", "checkout"], &gate);

    for id in ["home", "shop", "cart", "checkout"] {
        container.push(id, true, |_| {}).unwrap();
        assert!(!gate.is_interactable());
        assert!(run_until_idle(&mut container) > 1);
        assert!(gate.is_interactable());
        assert_eq!(container.top(), Some(id));
        assert_unique(container.stack());
    }

    // Only the top page stays visible once the transition settles
    for view in container.views() {
        assert_eq!(view.is_visible(), view.id() == "checkout", "{}", view.id());
        assert_eq!(view.state(), TransitionState::None);
    }

    container.pop_to(true, "shop").unwrap();
    run_until_idle(&mut container);
    assert_eq!(container.stack(), ["home", "shop"]);
    assert!(container.view("shop").unwrap().is_visible());
    assert!(!container.view("cart").unwrap().is_visible());

    container.pop(false, 2).unwrap();
    assert!(!container.is_in_transition());
    assert_eq!(container.depth(), 0);
}

#[test]
fn test_requests_during_transition_are_rejected() {
    let gate = InteractionGate::new();
    let mut container = pages(&["home", "settings"], &gate);
    container.push("home", false, |_| {}).unwrap();

    let handle = container.push("settings", true, |_| {}).unwrap();
    assert!(!handle.is_terminal());

    assert_eq!(
        container.pop(true, 1).unwrap_err(),
        NavigationError::TransitionInProgress { container: "PageContainer" }
    );
    assert!(matches!(
        container.push("home", true, |_| {}),
        Err(NavigationError::TransitionInProgress { .. })
    ));

    run_until_idle(&mut container);
    assert!(handle.is_terminal());
    assert_eq!(container.stack(), ["home", "settings"]);
}

#[test]
fn test_invalid_requests_leave_container_usable() {
    let gate = InteractionGate::new();
    let mut container = pages(&["home", "about"], &gate);

    assert!(matches!(
        container.push("missing", true, |_| {}),
        Err(NavigationError::UnknownView(_))
    ));
    assert!(gate.is_interactable());
    assert!(!container.is_in_transition());

    assert!(matches!(
        container.pop(true, 1),
        Err(NavigationError::PopCountExceedsDepth { requested: 1, depth: 0 })
    ));

    container.push("home", false, |_| {}).unwrap();
    assert!(matches!(
        container.push("home", false, |_| {}),
        Err(NavigationError::AlreadyInStack(_))
    ));
    assert!(matches!(
        container.pop_to(false, "about"),
        Err(NavigationError::DestinationNotFound(_))
    ));
    assert!(matches!(container.pop(false, 0), Err(NavigationError::InvalidPopCount(0))));

    container.push("about", true, |_| {}).unwrap();
    run_until_idle(&mut container);
    assert_eq!(container.stack(), ["home", "about"]);
}

#[test]
fn test_on_load_configures_view_before_enter() {
    let gate = InteractionGate::new();
    let mut container = pages(&["profile"], &gate);

    container
        .push("profile", true, |view| view.set_property("user", "ada"))
        .unwrap();
    assert_eq!(container.view("profile").unwrap().property("user"), Some("ada"));
    assert_eq!(
        container.view("profile").unwrap().state(),
        TransitionState::PushEnter
    );
}

#[test]
fn test_modals_stack_with_backdrops() {
    let gate = InteractionGate::new();
    let mut modals = ModalContainer::new()
        .with_interaction_gate(gate.clone())
        .with_backdrops(Box::new(|_modal_id: &str| {
            Box::new(FadeBackdrop::new(0.05)) as Box<dyn BackdropAnimation>
        }));
    modals.register(View::new("confirm", 10, slide(0.1)));
    modals.register(View::new("alert", 20, slide(0.1)));

    modals.push("confirm", true, |_| {}).unwrap();
    while modals.is_in_transition() {
        modals.update(DT);
    }
    modals.push("alert", true, |_| {}).unwrap();
    while modals.is_in_transition() {
        modals.update(DT);
    }

    // A covered modal stays visible underneath the new one
    assert!(modals.view("confirm").unwrap().is_visible());
    assert!(modals.view("alert").unwrap().is_visible());
    assert_eq!(modals.backdrops(), vec!["confirm", "alert"]);

    modals.pop(true, 2).unwrap();
    assert!(!gate.is_interactable());
    while modals.is_in_transition() {
        modals.update(DT);
    }
    assert!(gate.is_interactable());
    assert!(modals.backdrops().is_empty());
    assert_eq!(modals.depth(), 0);
    assert_eq!(modals.pending_animations(), 0);
}

#[test]
fn test_shared_gate_between_pages_and_modals() {
    let gate = InteractionGate::new();
    let mut pages = pages(&["home"], &gate);
    let mut modals = ModalContainer::new().with_interaction_gate(gate.clone());
    modals.register(View::new("confirm", 0, slide(0.2)));

    pages.push("home", true, |_| {}).unwrap();
    modals.push("confirm", true, |_| {}).unwrap();

    // Pages finish first but the modal still holds the gate
    run_until_idle(&mut pages);
    assert!(!gate.is_interactable());

    while modals.is_in_transition() {
        modals.update(DT);
    }
    assert!(gate.is_interactable());
}
