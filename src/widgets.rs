//! Widget adapter and one-shot initializer.
//!
//! DESIGN
//! ======
//! Page behaviour never talks to the Bootstrap runtime directly. It goes
//! through [`WidgetLibrary`], which exposes only the operations actually
//! used: construct a widget on an element, and close an alert. The browser
//! implementation is [`Bootstrap`]; tests use a recording fake.
//!
//! Modals are bound at most once per element, tracked by an explicit
//! [`Registry`] rather than a marker property on the node.

#[cfg(test)]
#[path = "widgets_test.rs"]
mod widgets_test;

use std::fmt;

use crate::registry::Registry;

/// Widget types the initializer constructs. Alerts are never constructed
/// up front; they are only ever closed through [`WidgetLibrary::close_alert`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WidgetKind {
    Tooltip,
    Popover,
    Modal,
}

impl WidgetKind {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Tooltip => "tooltip",
            Self::Popover => "popover",
            Self::Modal => "modal",
        }
    }
}

impl fmt::Display for WidgetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error raised by a [`WidgetLibrary`] call.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum WidgetError {
    /// The library refused to construct a widget on the element.
    #[error("failed to construct {kind}: {reason}")]
    Construct { kind: WidgetKind, reason: String },
    /// The library failed to close an alert.
    #[error("failed to close alert: {0}")]
    Close(String),
}

/// The widget operations page behaviour depends on.
pub trait WidgetLibrary {
    /// Element handle type (a DOM element in the browser).
    type Element: PartialEq;

    /// Construct a widget of `kind` on `element`.
    ///
    /// # Errors
    ///
    /// Returns [`WidgetError::Construct`] if the library rejects the element.
    fn construct(&mut self, kind: WidgetKind, element: &Self::Element) -> Result<(), WidgetError>;

    /// Close (animate out and remove) an alert element.
    ///
    /// # Errors
    ///
    /// Returns [`WidgetError::Close`] if the library cannot close it.
    fn close_alert(&mut self, element: &Self::Element) -> Result<(), WidgetError>;
}

/// Widget-bearing elements found on the page.
#[derive(Debug)]
pub struct PageWidgets<E> {
    pub tooltips: Vec<E>,
    pub popovers: Vec<E>,
    pub modals: Vec<E>,
}

impl<E> Default for PageWidgets<E> {
    fn default() -> Self {
        Self { tooltips: Vec::new(), popovers: Vec::new(), modals: Vec::new() }
    }
}

/// Outcome counts of one [`WidgetInitializer::run`] pass.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct InitReport {
    pub constructed: usize,
    pub skipped: usize,
    pub failed: usize,
}

/// Activates widgets and remembers which modals are already bound.
pub struct WidgetInitializer<L: WidgetLibrary> {
    library: L,
    modals: Registry<L::Element>,
}

impl<L: WidgetLibrary> WidgetInitializer<L> {
    #[must_use]
    pub fn new(library: L) -> Self {
        Self { library, modals: Registry::new() }
    }

    /// Construct one widget per element. Modals already bound by an earlier
    /// pass are skipped; failures are logged and counted.
    pub fn run(&mut self, page: PageWidgets<L::Element>) -> InitReport {
        let mut report = InitReport::default();
        for element in &page.tooltips {
            self.construct(WidgetKind::Tooltip, element, &mut report);
        }
        for element in &page.popovers {
            self.construct(WidgetKind::Popover, element, &mut report);
        }
        for element in page.modals {
            if self.modals.contains(&element) {
                report.skipped += 1;
                continue;
            }
            if self.construct(WidgetKind::Modal, &element, &mut report) {
                self.modals.insert(element);
            }
        }
        report
    }

    fn construct(&mut self, kind: WidgetKind, element: &L::Element, report: &mut InitReport) -> bool {
        match self.library.construct(kind, element) {
            Ok(()) => {
                report.constructed += 1;
                true
            }
            Err(err) => {
                log::warn!("{err}");
                report.failed += 1;
                false
            }
        }
    }

    /// Number of modals bound so far.
    #[must_use]
    pub fn bound_modals(&self) -> usize {
        self.modals.len()
    }

    pub fn library(&self) -> &L {
        &self.library
    }

    pub fn library_mut(&mut self) -> &mut L {
        &mut self.library
    }
}

#[cfg(feature = "hydrate")]
pub use browser::{Bootstrap, collect};

#[cfg(feature = "hydrate")]
mod browser {
    use wasm_bindgen::prelude::*;
    use web_sys::{Document, Element};

    use super::{PageWidgets, WidgetError, WidgetKind, WidgetLibrary};
    use crate::dom;

    #[wasm_bindgen]
    extern "C" {
        #[wasm_bindgen(js_namespace = bootstrap)]
        type Tooltip;
        #[wasm_bindgen(constructor, js_namespace = bootstrap, catch)]
        fn new(element: &Element) -> Result<Tooltip, JsValue>;
    }

    #[wasm_bindgen]
    extern "C" {
        #[wasm_bindgen(js_namespace = bootstrap)]
        type Popover;
        #[wasm_bindgen(constructor, js_namespace = bootstrap, catch)]
        fn new(element: &Element) -> Result<Popover, JsValue>;
    }

    #[wasm_bindgen]
    extern "C" {
        #[wasm_bindgen(js_namespace = bootstrap)]
        type Modal;
        #[wasm_bindgen(constructor, js_namespace = bootstrap, catch)]
        fn new(element: &Element) -> Result<Modal, JsValue>;
    }

    #[wasm_bindgen]
    extern "C" {
        #[wasm_bindgen(js_namespace = bootstrap)]
        type Alert;
        #[wasm_bindgen(constructor, js_namespace = bootstrap, catch)]
        fn new(element: &Element) -> Result<Alert, JsValue>;
        #[wasm_bindgen(method, catch)]
        fn close(this: &Alert) -> Result<(), JsValue>;
    }

    /// [`WidgetLibrary`] backed by the global `bootstrap` namespace.
    #[derive(Clone, Copy, Debug, Default)]
    pub struct Bootstrap;

    impl WidgetLibrary for Bootstrap {
        type Element = Element;

        fn construct(&mut self, kind: WidgetKind, element: &Element) -> Result<(), WidgetError> {
            let result = match kind {
                WidgetKind::Tooltip => Tooltip::new(element).map(drop),
                WidgetKind::Popover => Popover::new(element).map(drop),
                WidgetKind::Modal => Modal::new(element).map(drop),
            };
            result.map_err(|err| WidgetError::Construct { kind, reason: dom::describe(&err) })
        }

        fn close_alert(&mut self, element: &Element) -> Result<(), WidgetError> {
            let alert = Alert::new(element).map_err(|err| WidgetError::Close(dom::describe(&err)))?;
            alert.close().map_err(|err| WidgetError::Close(dom::describe(&err)))
        }
    }

    /// Gather tooltip, popover and modal elements from `document`.
    #[must_use]
    pub fn collect(document: &Document) -> PageWidgets<Element> {
        PageWidgets {
            tooltips: dom::query_all(document, "[data-bs-toggle=\"tooltip\"]"),
            popovers: dom::query_all(document, "[data-bs-toggle=\"popover\"]"),
            modals: dom::query_all(document, ".modal"),
        }
    }
}
