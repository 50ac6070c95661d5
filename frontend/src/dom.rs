//! Thin wrappers over the browser APIs the features touch.

use web_sys::{Document, Element, HtmlElement, Window};

use crate::counter::{Bounds, Viewport};
use crate::error::SiteError;

pub fn window() -> Result<Window, SiteError> {
    web_sys::window().ok_or(SiteError::Browser("window"))
}

pub fn document() -> Result<Document, SiteError> {
    window()?.document().ok_or(SiteError::Browser("document"))
}

pub fn body() -> Result<HtmlElement, SiteError> {
    document()?.body().ok_or(SiteError::Browser("document.body"))
}

/// Visible window size, falling back to the root element's client box.
pub fn viewport() -> Result<Viewport, SiteError> {
    let window = window()?;
    let inner = (
        window.inner_width().ok().and_then(|w| w.as_f64()),
        window.inner_height().ok().and_then(|h| h.as_f64()),
    );
    if let (Some(width), Some(height)) = inner {
        return Ok(Viewport { width, height });
    }
    let root = window
        .document()
        .and_then(|document| document.document_element())
        .ok_or(SiteError::Browser("document.documentElement"))?;
    Ok(Viewport {
        width: f64::from(root.client_width()),
        height: f64::from(root.client_height()),
    })
}

pub fn bounds(element: &Element) -> Bounds {
    let rect = element.get_bounding_client_rect();
    Bounds {
        top: rect.top(),
        left: rect.left(),
        bottom: rect.bottom(),
        right: rect.right(),
    }
}

/// Stops the page behind an open dialog from scrolling.
pub fn lock_body_scroll(locked: bool) -> Result<(), SiteError> {
    let overflow = if locked { "hidden" } else { "auto" };
    body()?
        .style()
        .set_property("overflow", overflow)
        .map_err(|_| SiteError::Browser("body.style"))
}

pub fn alert(message: &str) -> Result<(), SiteError> {
    window()?
        .alert_with_message(message)
        .map_err(|_| SiteError::Browser("alert"))
}
