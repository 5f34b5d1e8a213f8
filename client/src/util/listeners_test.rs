use super::*;

#[test]
fn drag_and_key_listeners_live_on_document() {
    assert_eq!(target_of(Listener::PointerMove), ListenerTarget::Document);
    assert_eq!(target_of(Listener::PointerUp), ListenerTarget::Document);
    assert_eq!(target_of(Listener::PointerCancel), ListenerTarget::Document);
    assert_eq!(target_of(Listener::KeyDown), ListenerTarget::Document);
}

#[test]
fn pointer_leave_lives_on_root_element() {
    assert_eq!(target_of(Listener::PointerLeave), ListenerTarget::Root);
}

#[test]
fn resize_lives_on_window() {
    assert_eq!(target_of(Listener::WindowResize), ListenerTarget::Window);
}
