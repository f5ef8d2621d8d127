use url::Url;

/// Returns the reference as a URL when it is an absolute http(s) link.
///
/// Schedules usually hold links, but free-text references are allowed and are
/// rendered as plain text.
#[must_use]
pub fn reference_link(reference: &str) -> Option<Url> {
    let url = Url::parse(reference.trim()).ok()?;
    matches!(url.scheme(), "http" | "https").then_some(url)
}
