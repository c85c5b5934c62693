use accordion::{
    Accordion, AccordionBuilder, AccordionConfig, AccordionEvent, Command, Dom, EventQueue,
    FixedViewport, Key, MemoryDom, Modifiers, Viewport,
};

fn faq_dom(count: usize) -> MemoryDom {
    let mut dom = MemoryDom::new();
    dom.insert("faq");
    for i in 0..count {
        dom.insert_under(format!("trigger-{i}"), "faq")
            .data("role", "trigger");
        dom.insert_under(format!("panel-{i}"), "faq")
            .data("role", "panel")
            .natural_height(4);
    }
    dom
}

fn mounted(count: usize, config: AccordionConfig) -> (Accordion<MemoryDom>, EventQueue) {
    let events = EventQueue::new();
    let widget = AccordionBuilder::new("faq")
        .config(config)
        .mount(faq_dom(count), events.clone())
        .expect("mount failed");
    (widget, events)
}

// ============================================================================
// Keyboard navigation
// ============================================================================

#[test]
fn test_arrow_navigation_wraps() {
    let (mut widget, _events) = mounted(3, AccordionConfig::default());

    // No selection yet: Right/Down selects the first item
    widget.handle_key(Key::Right, Modifiers::new());
    assert_eq!(widget.state().selected(), Some(0));
    assert_eq!(widget.dom().focused(), Some("trigger-0"));

    // At index 0, Left/Up wraps to the last item
    widget.handle_key(Key::Left, Modifiers::new());
    assert_eq!(widget.state().selected(), Some(2));
    assert_eq!(widget.dom().focused(), Some("trigger-2"));

    // At the last item, Right/Down wraps to index 0
    widget.handle_key(Key::Down, Modifiers::new());
    assert_eq!(widget.state().selected(), Some(0));

    widget.handle_key(Key::Up, Modifiers::new());
    assert_eq!(widget.state().selected(), Some(2));
}

#[test]
fn test_left_up_with_no_selection_picks_last() {
    let (mut widget, _events) = mounted(3, AccordionConfig::default());
    widget.handle_key(Key::Up, Modifiers::new());
    assert_eq!(widget.state().selected(), Some(2));
    assert_eq!(widget.dom().focused(), Some("trigger-2"));
}

#[test]
fn test_navigation_does_not_change_expansion() {
    let config = AccordionConfig {
        default_expanded: vec![true],
        ..Default::default()
    };
    let (mut widget, events) = mounted(3, config);

    for key in [Key::Right, Key::Down, Key::Left, Key::Up] {
        widget.handle_key(key, Modifiers::new());
    }

    assert_eq!(widget.state().expanded_indices(), vec![0]);
    assert!(events.is_empty());
}

#[test]
fn test_active_marker_follows_selection() {
    let (mut widget, _events) = mounted(3, AccordionConfig::default());

    widget.handle_key(Key::Right, Modifiers::new());
    widget.handle_key(Key::Right, Modifiers::new());

    assert!(widget.dom().has_class("trigger-1", "is-active"));
    assert!(!widget.dom().has_class("trigger-0", "is-active"));
}

#[test]
fn test_enter_and_space_activate_selection() {
    let (mut widget, events) = mounted(3, AccordionConfig::default());

    widget.handle_key(Key::Right, Modifiers::new());
    widget.handle_key(Key::Enter, Modifiers::new());
    assert_eq!(widget.state().expanded_indices(), vec![0]);
    assert_eq!(
        events.drain(),
        vec![AccordionEvent::ItemOpened {
            accordion: "faq".into(),
            index: 0,
        }]
    );

    // Space toggles the same item back closed
    widget.handle_key(Key::Char(' '), Modifiers::new());
    assert!(widget.state().expanded_indices().is_empty());
    assert_eq!(
        events.drain(),
        vec![AccordionEvent::ItemClosed {
            accordion: "faq".into(),
            index: 0,
        }]
    );
}

#[test]
fn test_activation_with_no_selection_is_noop() {
    let (mut widget, events) = mounted(3, AccordionConfig::default());
    widget.handle_key(Key::Enter, Modifiers::new());
    assert!(widget.state().expanded_indices().is_empty());
    assert!(events.is_empty());
}

#[test]
fn test_modified_keys_are_ignored() {
    let (mut widget, events) = mounted(3, AccordionConfig::default());
    widget.handle_key(Key::Right, Modifiers::new());

    widget.handle_key(Key::Enter, Modifiers::ctrl());
    widget.handle_key(Key::Right, Modifiers::alt());

    assert_eq!(widget.state().selected(), Some(0));
    assert!(widget.state().expanded_indices().is_empty());
    assert!(events.is_empty());
}

// ============================================================================
// Clicks
// ============================================================================

#[test]
fn test_click_on_trigger_toggles() {
    let (mut widget, events) = mounted(3, AccordionConfig::default());

    widget.handle_click("trigger-2");
    assert_eq!(widget.state().expanded_indices(), vec![2]);
    assert_eq!(widget.state().selected(), Some(2));
    assert_eq!(events.drain().len(), 1);
}

#[test]
fn test_click_elsewhere_is_ignored() {
    let (mut widget, events) = mounted(3, AccordionConfig::default());
    widget.handle_click("panel-1");
    widget.handle_click("faq");
    assert!(widget.state().expanded_indices().is_empty());
    assert!(events.is_empty());
}

// ============================================================================
// External commands
// ============================================================================

#[test]
fn test_command_dispatch() {
    let config = AccordionConfig {
        multiselectable: true,
        ..Default::default()
    };
    let (mut widget, events) = mounted(3, config);

    widget.handle_event(&Command::ToggleItem {
        id: "trigger-1".into(),
        open: Some(true),
    });
    assert_eq!(widget.state().expanded_indices(), vec![1]);

    widget.handle_event(&Command::OpenAll);
    assert_eq!(widget.state().expanded_indices(), vec![0, 1, 2]);

    widget.handle_event(&Command::CloseAll);
    assert!(widget.state().expanded_indices().is_empty());

    // opened(1), opened(0), opened(2), closed(0), closed(1), closed(2)
    assert_eq!(events.drain().len(), 6);
}

#[test]
fn test_viewport_resize_command_recomputes() {
    let config = AccordionConfig {
        default_expanded: vec![true],
        ..Default::default()
    };
    let (mut widget, _events) = mounted(2, config);

    widget.dom_mut().set_natural_height("panel-0", 12);
    widget.handle_event(&Command::ViewportResized);

    assert_eq!(widget.state().height(0), 12);
    assert_eq!(widget.dom().inline_height("panel-0"), Some(12));
    assert_eq!(widget.dom().attr("panel-0", "data-max-height"), Some("12"));
}

// ============================================================================
// Viewport auto-open
// ============================================================================

fn auto_open_config(multiselectable: bool) -> AccordionConfig {
    AccordionConfig {
        multiselectable,
        auto_open_viewports: vec!["wide".into(), "large".into()],
        ..Default::default()
    }
}

#[test]
fn test_auto_open_on_matching_viewport() {
    let events = EventQueue::new();
    let widget = AccordionBuilder::new("faq")
        .config(auto_open_config(true))
        .viewport(FixedViewport(Viewport::Wide))
        .mount(faq_dom(3), events)
        .unwrap();

    assert_eq!(widget.state().expanded_indices(), vec![0, 1, 2]);
}

#[test]
fn test_auto_open_single_open_expands_first_only() {
    let events = EventQueue::new();
    let widget = AccordionBuilder::new("faq")
        .config(auto_open_config(false))
        .viewport(FixedViewport(Viewport::Large))
        .mount(faq_dom(3), events)
        .unwrap();

    assert_eq!(widget.state().expanded_indices(), vec![0]);
}

#[test]
fn test_auto_open_on_other_viewport_uses_defaults() {
    let events = EventQueue::new();
    let widget = AccordionBuilder::new("faq")
        .config(auto_open_config(true))
        .viewport(FixedViewport(Viewport::Small))
        .mount(faq_dom(3), events)
        .unwrap();

    assert!(widget.state().expanded_indices().is_empty());
}

#[test]
fn test_auto_open_without_probe_uses_defaults() {
    let mut config = auto_open_config(true);
    config.default_expanded = vec![false, true, false];
    let (widget, _events) = mounted(3, config);

    assert_eq!(widget.state().expanded_indices(), vec![1]);
}
