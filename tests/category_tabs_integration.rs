// SPDX-License-Identifier: MPL-2.0
//! End-to-end checks of the category strip driven through its messages.

use tubegrid::catalog::Category;
use tubegrid::config::TabsConfig;
use tubegrid::ui::category_tabs::{update, Event, Message, State, StripMetrics};

fn measured(client_width: f32, scroll_width: f32) -> Message {
    Message::Measured(StripMetrics {
        client_width,
        scroll_width,
    })
}

#[test]
fn paging_through_a_long_strip() {
    let mut state = State::from_config(&TabsConfig::default());
    update(&mut state, measured(800.0, 1_500.0));

    assert_eq!(state.translate(), 300.0);
    assert!(state.is_left_visible());
    assert!(state.is_right_visible());

    update(&mut state, Message::PageRight);
    assert_eq!(state.translate(), 500.0);
    update(&mut state, Message::PageRight);
    assert_eq!(state.translate(), 700.0);
    assert!(!state.is_right_visible());

    update(&mut state, Message::PageRight);
    assert_eq!(state.translate(), 700.0);

    for _ in 0..5 {
        update(&mut state, Message::PageLeft);
    }
    assert_eq!(state.translate(), 0.0);
    assert!(!state.is_left_visible());
    assert!(state.is_right_visible());
}

#[test]
fn widening_the_window_hides_both_affordances() {
    let mut state = State::from_config(&TabsConfig::default());
    update(&mut state, measured(800.0, 1_500.0));
    update(&mut state, measured(2_000.0, 1_500.0));

    assert_eq!(state.translate(), 0.0);
    assert!(!state.is_left_visible());
    assert!(!state.is_right_visible());
}

#[test]
fn selection_is_reported_without_moving_the_strip() {
    let mut state = State::from_config(&TabsConfig::default());
    update(&mut state, measured(800.0, 1_500.0));
    let before = state.translate();

    let event = update(&mut state, Message::Select(Category::from("React")));
    assert_eq!(event, Event::Selected(Category::from("React")));
    assert_eq!(state.translate(), before);
}

#[test]
fn configured_step_is_used() {
    let mut state = State::from_config(&TabsConfig {
        initial_translate: Some(0.0),
        page_step: Some(120.0),
    });
    update(&mut state, measured(400.0, 1_000.0));
    update(&mut state, Message::PageRight);
    assert_eq!(state.translate(), 120.0);
}
