//! Procedural macros for `eventide`.
//!
//! - `#[derive(Payload)]` - binds a payload struct to its `EventKind` and its
//!   `EventData` variant.

use proc_macro::TokenStream;

mod payload;

/// Derive macro for implementing `Payload` on an event catalog struct.
///
/// The struct must carry a `#[payload(kind = Variant)]` attribute naming the
/// `EventKind` it belongs to. The `EventData` variant is expected to share the
/// struct's name.
///
/// ```rust,ignore
/// #[derive(Clone, Debug, PartialEq, Payload)]
/// #[payload(kind = WindowResize)]
/// pub struct WindowResized {
///     pub width: i32,
///     pub height: i32,
/// }
/// ```
#[proc_macro_derive(Payload, attributes(payload))]
pub fn derive_payload(input: TokenStream) -> TokenStream {
    payload::derive_payload_impl(input)
}
