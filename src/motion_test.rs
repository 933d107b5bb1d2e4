use super::*;

#[test]
fn hidden_tab_pauses() {
    assert_eq!(PlayState::for_visibility(true), PlayState::Paused);
    assert_eq!(PlayState::for_visibility(false), PlayState::Running);
}

#[test]
fn play_state_css_values() {
    assert_eq!(PlayState::Paused.as_css(), "paused");
    assert_eq!(PlayState::Running.as_css(), "running");
}

#[test]
fn stagger_delay_steps_by_half_second() {
    assert_eq!(stagger_delay(0, 0.5), "0s");
    assert_eq!(stagger_delay(1, 0.5), "0.5s");
    assert_eq!(stagger_delay(4, 0.5), "2s");
}
