//! Inline SVG shown when a book has no cover.

const COVER_SVG: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" width="150" height="200" viewBox="0 0 150 200"><rect width="150" height="200" fill="#f0f0f0"/><text x="75" y="100" font-family="sans-serif" font-size="16" fill="#999" text-anchor="middle" dominant-baseline="middle">Book</text></svg>"##;

/// `data:` URI for the cover placeholder.
pub fn cover_placeholder() -> String {
    format!("data:image/svg+xml,{}", encode(COVER_SVG))
}

/// The cover to render: the book's own image or the placeholder.
pub fn cover_or_placeholder(src: Option<&str>) -> String {
    match src.map(str::trim).filter(|s| !s.is_empty()) {
        Some(src) => src.to_string(),
        None => cover_placeholder(),
    }
}

/// Escape the characters that break an unquoted-ish SVG data URI.
fn encode(svg: &str) -> String {
    let mut out = String::with_capacity(svg.len() * 2);
    for ch in svg.chars() {
        match ch {
            '<' => out.push_str("%3C"),
            '>' => out.push_str("%3E"),
            '#' => out.push_str("%23"),
            '"' => out.push('\''),
            '%' => out.push_str("%25"),
            _ => out.push(ch),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_placeholder_is_escaped() {
        let uri = cover_placeholder();
        assert!(uri.starts_with("data:image/svg+xml,%3Csvg"));
        assert!(!uri.contains('#'));
        assert!(!uri.contains('"'));
        assert!(uri.contains("%23f0f0f0"));
    }

    #[test]
    fn test_real_cover_wins() {
        assert_eq!(cover_or_placeholder(Some("/covers/1.jpg")), "/covers/1.jpg");
        assert!(cover_or_placeholder(Some(" ")).starts_with("data:"));
        assert!(cover_or_placeholder(None).starts_with("data:"));
    }
}
