use thiserror::Error;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, ScrollBehavior, ScrollToOptions, Window};

use crate::nav::{SectionId, SectionLayout, Viewport};
use crate::theme::RootStyle;

#[derive(Error, Debug, Clone)]
pub enum DomError {
    #[error("No window available")]
    NoWindow,
    #[error("No document available")]
    NoDocument,
    #[error("Document has no root element")]
    NoRootElement,
    #[error("DOM call failed: {0}")]
    Js(String),
}

/// The browser window, read through [`Viewport`].
pub struct BrowserViewport {
    window: Window,
    document: Document,
}

impl BrowserViewport {
    pub fn new() -> Result<Self, DomError> {
        let window = web_sys::window().ok_or(DomError::NoWindow)?;
        let document = window.document().ok_or(DomError::NoDocument)?;
        Ok(Self { window, document })
    }
}

impl SectionLayout for BrowserViewport {
    fn section_top(&self, id: SectionId) -> Option<f64> {
        let el = self.document.get_element_by_id(id.as_str())?;
        let el = el.dyn_into::<HtmlElement>().ok()?;
        Some(f64::from(el.offset_top()))
    }
}

impl Viewport for BrowserViewport {
    fn scroll_y(&self) -> f64 {
        match self.window.scroll_y() {
            Ok(y) => y,
            Err(err) => {
                log::warn!("couldn't read scroll offset: {err:?}");
                0.0
            }
        }
    }

    fn smooth_scroll_to(&self, top: f64) {
        let opts = ScrollToOptions::new();
        opts.set_top(top);
        opts.set_behavior(ScrollBehavior::Smooth);
        self.window.scroll_to_with_scroll_to_options(&opts);
    }
}

/// The `<html>` element.
pub struct DocumentRoot {
    root: Element,
}

impl DocumentRoot {
    pub fn new() -> Result<Self, DomError> {
        let root = web_sys::window()
            .ok_or(DomError::NoWindow)?
            .document()
            .ok_or(DomError::NoDocument)?
            .document_element()
            .ok_or(DomError::NoRootElement)?;
        Ok(Self { root })
    }

    fn toggle_class(&self, class: &str, enabled: bool) -> Result<(), DomError> {
        self.root
            .class_list()
            .toggle_with_force(class, enabled)
            .map(|_| ())
            .map_err(|err| DomError::Js(format!("{err:?}")))
    }
}

impl RootStyle for DocumentRoot {
    fn set_class(&self, class: &str, enabled: bool) {
        if let Err(err) = self.toggle_class(class, enabled) {
            log::warn!("couldn't update root class {class}: {err}");
        }
    }
}
