//! Rendering-service frame URLs
//!
//! Remote pages are never loaded directly; the shell points the content
//! frame at `<service-base>?url=<encoded target>` and the service fetches
//! and renders the target. Load success or failure is not observable here.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

/// Characters left intact by `encodeURIComponent`.
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~')
    .remove(b'!')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Percent-encode a URL component (query value or frame target).
pub(crate) fn encode_component(input: &str) -> String {
    utf8_percent_encode(input, COMPONENT).to_string()
}

/// Build the frame URL that delegates `target` to the rendering service.
pub fn frame_url(service_base: &str, target: &str) -> String {
    format!("{service_base}?url={}", encode_component(target))
}
