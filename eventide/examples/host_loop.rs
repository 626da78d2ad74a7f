//! A scripted host loop with a few subscribers.
//!
//! Bus records are printed at debug level through `tracing-subscriber`.
//!
//! ```text
//! cargo run -p eventide --example host_loop
//! ```

use eventide::{
    Category, Event, EventBus, EventKind, HostLoop, KeyCode, LoopConfig, ScriptedSource,
    SubscriberId,
    backend::RawInput,
    catalog::{KeyPressed, WindowClosed, WindowResized},
    handlers::LoggingHandler,
};

const APP: SubscriberId = SubscriberId(54);
const RENDERER: SubscriberId = SubscriberId(1);
const LOGGER: SubscriberId = SubscriberId(99);

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    let source = ScriptedSource::new()
        .frame([RawInput::Resized {
            width: 800,
            height: 600,
        }])
        .frame([
            RawInput::Key {
                key: 65,
                scancode: 38,
                action: 1,
                mods: 0x2,
            },
            RawInput::CursorPos { x: 12.0, y: 40.0 },
        ])
        .frame([RawInput::Key {
            key: 256,
            scancode: 9,
            action: 1,
            mods: 0,
        }])
        .frame([RawInput::Closed]);

    let mut host = HostLoop::with_config(
        EventBus::new(),
        source,
        LoopConfig::default().with_max_ticks(100),
    );
    let control = host.control();
    let publisher = host.bus().publisher();
    let bus = host.bus_mut();

    bus.subscribe(RENDERER, EventKind::WindowResize, |event: &mut Event| {
        if let Some(resized) = event.payload::<WindowResized>() {
            println!("renderer: viewport {}x{}", resized.width, resized.height);
        }
        true
    });

    // Escape asks for a close through the queue; it lands next iteration.
    bus.subscribe(APP, EventKind::KeyPressed, move |event: &mut Event| {
        match event.payload::<KeyPressed>() {
            Some(key) if key.key == KeyCode::ESCAPE => {
                publisher.trigger(WindowClosed);
                true
            }
            _ => false,
        }
    });

    bus.subscribe(APP, EventKind::WindowClose, move |_: &mut Event| {
        println!("app: closing");
        control.stop();
        true
    });

    bus.subscribe_category(LOGGER, Category::INPUT, LoggingHandler::new("input"));

    let summary = host.run();
    println!(
        "ran {} ticks, {} events, {} deliveries",
        summary.ticks, summary.stats.events, summary.stats.deliveries
    );

    host.shutdown();
}
