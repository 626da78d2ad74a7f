//! Property tests for classification and dispatch.

use eventide::{
    Category, Event, EventBus, EventKind, SubscriberId,
    catalog::{AppTick, KeyChar, WindowMoved},
    testing::{CountingHandler, RecordingHandler},
};
use proptest::prelude::*;

fn kind_strategy() -> impl Strategy<Value = EventKind> {
    prop::sample::select(EventKind::ALL.to_vec())
}

fn category_strategy() -> impl Strategy<Value = Category> {
    any::<u32>().prop_map(Category::from_bits_truncate)
}

/// Property: an event's categories are exactly its kind's table entry.
#[test]
fn prop_event_categories_follow_kind() {
    proptest!(|(x in any::<i32>(), y in any::<i32>(), code_point in any::<u32>())| {
        let moved = Event::new(WindowMoved { x, y });
        prop_assert_eq!(moved.categories(), EventKind::WindowMoved.categories());

        let typed = Event::new(KeyChar { code_point });
        prop_assert_eq!(typed.categories(), Category::KEY | Category::INPUT);
        prop_assert!(!typed.is_handled());
    });
}

/// Property: `in_category` yields exactly the kinds whose mask intersects.
#[test]
fn prop_in_category_matches_table() {
    proptest!(|(category in category_strategy(), kind in kind_strategy())| {
        let listed = EventKind::in_category(category).any(|k| k == kind);
        prop_assert_eq!(listed, kind.categories().intersects(category));
    });
}

/// Property: kind names round-trip through `FromStr`.
#[test]
fn prop_kind_name_round_trip() {
    proptest!(|(kind in kind_strategy())| {
        prop_assert_eq!(kind.name().parse::<EventKind>().ok(), Some(kind));
    });
}

/// Property: N queued events reach a subscriber exactly N times, in one pass,
/// and leave the queue empty.
#[test]
fn prop_every_queued_event_delivered_once() {
    proptest!(|(count in 0usize..200, subscribers in 1u64..8)| {
        let mut bus = EventBus::new();
        let counters: Vec<_> = (0..subscribers)
            .map(|id| {
                let counter = CountingHandler::new();
                bus.subscribe(SubscriberId(id), EventKind::AppTick, counter.clone());
                counter
            })
            .collect();

        for _ in 0..count {
            bus.trigger(AppTick);
        }
        let report = bus.process_events();

        prop_assert_eq!(report.stats.events, count);
        prop_assert_eq!(report.stats.deliveries, count * subscribers as usize);
        prop_assert_eq!(bus.pending(), 0);
        for counter in &counters {
            prop_assert_eq!(counter.count(), count);
        }
    });
}

/// Property: a subscriber sees exactly the events of the kinds it subscribed
/// to, in queue order.
#[test]
fn prop_delivery_filters_by_kind() {
    proptest!(|(
        queued in prop::collection::vec(kind_strategy(), 0..50),
        wanted in prop::collection::btree_set(kind_strategy(), 0..6),
    )| {
        let mut bus = EventBus::new();
        let recorder = RecordingHandler::new();
        for kind in &wanted {
            bus.subscribe(SubscriberId(1), *kind, recorder.clone());
        }

        for kind in &queued {
            bus.queue_event(sample_event(*kind));
        }
        bus.process_events();

        let expected: Vec<_> = queued.iter().copied().filter(|k| wanted.contains(k)).collect();
        prop_assert_eq!(recorder.kinds(), expected);
    });
}

fn sample_event(kind: EventKind) -> Event {
    use eventide::{KeyCode, MouseButton, catalog as c};

    match kind {
        EventKind::Empty => c::Empty.into(),
        EventKind::WindowResize => c::WindowResized { width: 1, height: 1 }.into(),
        EventKind::WindowClose => c::WindowClosed.into(),
        EventKind::WindowMoved => c::WindowMoved { x: 0, y: 0 }.into(),
        EventKind::AppRender => c::AppRender.into(),
        EventKind::AppUpdate => c::AppUpdate.into(),
        EventKind::AppTick => c::AppTick.into(),
        EventKind::KeyPressed => c::KeyPressed::new(KeyCode::A).into(),
        EventKind::KeyReleased => c::KeyReleased { key: KeyCode::A }.into(),
        EventKind::KeyChar => c::KeyChar { code_point: 97 }.into(),
        EventKind::MouseButtonPressed => c::MouseButtonPressed {
            button: MouseButton::LEFT,
            modifiers: eventide::Modifiers::empty(),
        }
        .into(),
        EventKind::MouseButtonReleased => c::MouseButtonReleased {
            button: MouseButton::LEFT,
        }
        .into(),
        EventKind::MouseMoved => c::MouseMoved { x: 0.0, y: 0.0 }.into(),
        EventKind::MouseScrolled => c::MouseScrolled {
            x_offset: 0.0,
            y_offset: 1.0,
        }
        .into(),
    }
}
