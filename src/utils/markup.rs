use crate::utils::error::{RefreshError, Result};
use regex::Regex;
use std::sync::OnceLock;

/// Locate the inner-content span of the element with the given id.
///
/// Injected graph markup regularly contains the container's own tag, so the
/// closing tag is found by depth-counting same-tag open/close pairs rather
/// than taking the first match.
fn locate_inner(document: &str, element_id: &str) -> Result<(usize, usize)> {
    let pattern = format!(
        r#"<([A-Za-z][A-Za-z0-9-]*)\b[^>]*\bid\s*=\s*"{}"[^>]*>"#,
        regex::escape(element_id)
    );
    let open_tag = Regex::new(&pattern)?;

    let caps = open_tag
        .captures(document)
        .ok_or_else(|| RefreshError::ContainerNotFoundError {
            id: element_id.to_string(),
            page: "document".to_string(),
        })?;

    let whole = caps.get(0).ok_or_else(|| RefreshError::RenderError {
        message: "container match without span".to_string(),
    })?;
    let tag = caps.get(1).map(|m| m.as_str()).unwrap_or("div");

    let inner_start = whole.end();
    let tag_scan = Regex::new(&format!(r"(?i)<(/?){}(\b[^>]*)?>", regex::escape(tag)))?;

    let mut depth = 0usize;
    for tag_caps in tag_scan.captures_iter(&document[inner_start..]) {
        let matched = match tag_caps.get(0) {
            Some(m) => m,
            None => continue,
        };
        let is_closing = tag_caps.get(1).map(|m| !m.as_str().is_empty()).unwrap_or(false);

        if is_closing {
            if depth == 0 {
                return Ok((inner_start, inner_start + matched.start()));
            }
            depth -= 1;
        } else if !matched.as_str().ends_with("/>") {
            depth += 1;
        }
    }

    Err(RefreshError::RenderError {
        message: format!("no closing </{}> for container '{}'", tag, element_id),
    })
}

/// Replace the inner content of the element with the given id, returning the
/// rewritten document.
pub fn replace_inner(document: &str, element_id: &str, markup: &str) -> Result<String> {
    let (inner_start, inner_end) = locate_inner(document, element_id)?;

    let mut rewritten =
        String::with_capacity(document.len() - (inner_end - inner_start) + markup.len());
    rewritten.push_str(&document[..inner_start]);
    rewritten.push_str(markup);
    rewritten.push_str(&document[inner_end..]);
    Ok(rewritten)
}

/// Extract the current inner content of the element with the given id.
pub fn extract_inner(document: &str, element_id: &str) -> Result<String> {
    let (inner_start, inner_end) = locate_inner(document, element_id)?;
    Ok(document[inner_start..inner_end].to_string())
}

/// Check fetched markup for active content before it is injected unescaped.
/// Returns a short description of the first finding.
pub fn active_content(markup: &str) -> Option<&'static str> {
    let lowered = markup.to_ascii_lowercase();
    if lowered.contains("<script") {
        return Some("a <script> element");
    }
    if lowered.contains("javascript:") {
        return Some("a javascript: URL");
    }
    // Inline event handlers such as onclick= / onerror=
    static EVENT_HANDLER: OnceLock<Regex> = OnceLock::new();
    let handler = EVENT_HANDLER
        .get_or_init(|| Regex::new(r#"[\s"']on[a-z]+\s*="#).expect("valid handler pattern"));
    if handler.is_match(&lowered) {
        return Some("an inline event handler");
    }
    None
}
