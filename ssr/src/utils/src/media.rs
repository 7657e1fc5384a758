use consts::MEDIA_BASE_URL;
use reqwest::Url;

/// Absolute, renderable URL for a media reference from the API.
pub fn media_url(reference: &str) -> Option<String> {
    resolve_against(&MEDIA_BASE_URL, reference)
}

/// Pure resolution against an explicit base. Absolute URLs (including
/// `data:` and `blob:`) pass through, protocol-relative ones get `https:`,
/// everything else is taken relative to `base`.
pub fn resolve_against(base: &Url, reference: &str) -> Option<String> {
    let reference = reference.trim();
    if reference.is_empty() {
        return None;
    }
    if let Some(rest) = reference.strip_prefix("//") {
        return Some(format!("https://{rest}"));
    }
    if let Ok(url) = Url::parse(reference) {
        if !url.cannot_be_a_base() || matches!(url.scheme(), "data" | "blob") {
            return Some(reference.to_string());
        }
    }
    base.join(reference.trim_start_matches('/'))
        .ok()
        .map(String::from)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base() -> Url {
        Url::parse("https://media.example.com/files/").unwrap()
    }

    #[test]
    fn absolute_urls_pass_through() {
        for r in [
            "https://cdn.example.com/v.mp4",
            "http://x/y.jpg",
            "data:image/png;base64,AAAA",
            "blob:https://app/123",
        ] {
            assert_eq!(resolve_against(&base(), r).as_deref(), Some(r));
        }
    }

    #[test]
    fn relative_references_join_the_base() {
        assert_eq!(
            resolve_against(&base(), "/reels/1.mp4").as_deref(),
            Some("https://media.example.com/files/reels/1.mp4")
        );
        assert_eq!(
            resolve_against(&base(), "thumbs/1.jpg").as_deref(),
            Some("https://media.example.com/files/thumbs/1.jpg")
        );
    }

    #[test]
    fn protocol_relative_gets_https() {
        assert_eq!(
            resolve_against(&base(), "//cdn.example.com/a.jpg").as_deref(),
            Some("https://cdn.example.com/a.jpg")
        );
    }

    #[test]
    fn blank_reference_resolves_to_nothing() {
        assert_eq!(resolve_against(&base(), "  "), None);
    }
}
