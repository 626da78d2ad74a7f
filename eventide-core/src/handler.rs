//! # Handlers
//!
//! A handler is the callback a subscriber registers for an event kind. It
//! receives the event mutably for the duration of the call and reports whether
//! it considers the event handled.
//!
//! # Usage Patterns
//!
//! 1. **Closure**: `|event: &mut Event| -> bool { ... }`
//! 2. **Struct implementation**: `impl Handler for MyHandler`
//!
//! Closures may return anything implementing [`IntoHandled`]: `bool`, `()`,
//! `Option<T>` or `Result<T, E>`.

use crate::{error::BoxError, event::Event};

/// Callback invoked with a queued event during dispatch.
///
/// The returned boolean is the handler's own verdict on whether it handled
/// the event. It is recorded by the dispatcher; setting the event's `handled`
/// flag is a separate, explicit step.
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not an event handler",
    label = "missing `Handler` implementation",
    note = "Closures must take `&mut Event` and return `bool`, `()`, `Option<_>` or `Result<_, _>`."
)]
pub trait Handler: 'static {
    /// Handle one event.
    fn handle(&mut self, event: &mut Event) -> Result<bool, BoxError>;
}

// Blanket impl for closures
impl<F, R> Handler for F
where
    F: FnMut(&mut Event) -> R + 'static,
    R: IntoHandled,
{
    fn handle(&mut self, event: &mut Event) -> Result<bool, BoxError> {
        (self)(event).into_handled()
    }
}

/// Conversion of a handler's output into its handled verdict.
///
/// - `bool` → as is
/// - `()` → not handled
/// - `Option<T>` → `None` is not handled, `Some` delegates
/// - `Result<T, E>` → delegates to `T` or reports `E` as a handler failure
pub trait IntoHandled {
    /// Convert into the handled verdict or a failure.
    fn into_handled(self) -> Result<bool, BoxError>;
}

impl IntoHandled for bool {
    fn into_handled(self) -> Result<bool, BoxError> {
        Ok(self)
    }
}

impl IntoHandled for () {
    fn into_handled(self) -> Result<bool, BoxError> {
        Ok(false)
    }
}

impl<T: IntoHandled> IntoHandled for Option<T> {
    fn into_handled(self) -> Result<bool, BoxError> {
        match self {
            Some(t) => t.into_handled(),
            None => Ok(false),
        }
    }
}

impl<T, E> IntoHandled for Result<T, E>
where
    T: IntoHandled,
    E: Into<BoxError>,
{
    fn into_handled(self) -> Result<bool, BoxError> {
        match self {
            Ok(t) => t.into_handled(),
            Err(e) => Err(e.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{AppTick, WindowResized};

    fn run<H: Handler>(mut handler: H, event: &mut Event) -> Result<bool, BoxError> {
        handler.handle(event)
    }

    #[test]
    fn test_closure_outputs() {
        let mut event = Event::new(AppTick);

        assert!(run(|_: &mut Event| true, &mut event).unwrap());
        assert!(!run(|_: &mut Event| {}, &mut event).unwrap());
        assert!(!run(|_: &mut Event| None::<bool>, &mut event).unwrap());
        assert!(run(|_: &mut Event| Some(true), &mut event).unwrap());
        assert!(run(|_: &mut Event| Ok::<_, BoxError>(true), &mut event).unwrap());
    }

    #[test]
    fn test_error_output() {
        let mut event = Event::new(AppTick);
        let err = run(
            |_: &mut Event| -> Result<bool, BoxError> { Err("boom".into()) },
            &mut event,
        )
        .unwrap_err();
        assert_eq!(err.to_string(), "boom");
    }

    #[test]
    fn test_handler_can_mutate_event() {
        let mut event = Event::new(WindowResized {
            width: 1,
            height: 1,
        });

        let handled = run(
            |event: &mut Event| {
                if let Some(resized) = event.payload_mut::<WindowResized>() {
                    resized.width = 640;
                }
                event.set_handled(true);
                true
            },
            &mut event,
        )
        .unwrap();

        assert!(handled);
        assert!(event.is_handled());
        assert_eq!(event.payload::<WindowResized>().unwrap().width, 640);
    }

    struct Toggle(bool);

    impl Handler for Toggle {
        fn handle(&mut self, _event: &mut Event) -> Result<bool, BoxError> {
            self.0 = !self.0;
            Ok(self.0)
        }
    }

    #[test]
    fn test_struct_handler() {
        let mut event = Event::new(AppTick);
        let mut toggle = Toggle(false);
        assert!(toggle.handle(&mut event).unwrap());
        assert!(!toggle.handle(&mut event).unwrap());
    }
}
