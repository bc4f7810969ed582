// Platform adapters for combokit
//
// An adapter connects a host's document-level presses to a
// `DocumentListeners` registry so that click-away handlers fire.

use crate::component::NodeId;
use crate::events::{DocumentListeners, PointerEvent, PointerKind};

/// Trait for platform adapters
pub trait PlatformAdapter {
    /// Start forwarding document presses into `document`
    fn attach(&mut self, document: DocumentListeners) -> Result<(), crate::Error>;

    /// Stop forwarding. Detaching an unattached adapter does nothing.
    fn detach(&mut self) -> Result<(), crate::Error>;

    /// Whether the adapter is currently attached
    fn is_attached(&self) -> bool;
}

/// Adapter for hosts without a DOM
///
/// The host reports presses itself through [`HeadlessPlatform::press`].
#[derive(Debug, Default)]
pub struct HeadlessPlatform {
    document: Option<DocumentListeners>,
}

impl HeadlessPlatform {
    pub fn new() -> Self {
        Self::default()
    }

    /// Report a press of `kind` on `target` (or on nothing rendered).
    /// Returns how many click-away handlers ran.
    pub fn press(&self, kind: PointerKind, target: Option<NodeId>) -> Result<usize, crate::Error> {
        let document = self
            .document
            .as_ref()
            .ok_or_else(|| crate::Error::Platform("headless platform is not attached".into()))?;
        Ok(document.dispatch(&PointerEvent::new(kind, target))?)
    }
}

impl PlatformAdapter for HeadlessPlatform {
    fn attach(&mut self, document: DocumentListeners) -> Result<(), crate::Error> {
        if self.document.is_some() {
            return Err(crate::Error::Platform("already attached".into()));
        }
        self.document = Some(document);
        Ok(())
    }

    fn detach(&mut self) -> Result<(), crate::Error> {
        self.document = None;
        Ok(())
    }

    fn is_attached(&self) -> bool {
        self.document.is_some()
    }
}

/// Browser document bridge
#[cfg(feature = "web")]
pub mod web {
    use wasm_bindgen::closure::Closure;
    use wasm_bindgen::JsCast;
    use web_sys::{Document, Element, Event};

    use super::PlatformAdapter;
    use crate::component::NodeId;
    use crate::events::{DocumentListeners, PointerEvent, PointerKind};

    /// DOM events treated as presses
    const PRESS_EVENTS: [(&str, PointerKind); 2] = [
        ("pointerdown", PointerKind::Down),
        ("touchstart", PointerKind::TouchStart),
    ];

    type Listener = (&'static str, Closure<dyn FnMut(Event)>);

    /// Forwards `pointerdown` and `touchstart` on `window.document` into a
    /// listener registry
    ///
    /// Rendered nodes are found through their `data-node` attribute; a press
    /// on anything else is reported with no target.
    #[derive(Default)]
    pub struct DocumentBridge {
        document: Option<Document>,
        listeners: Vec<Listener>,
    }

    impl DocumentBridge {
        pub fn new() -> Self {
            Self::default()
        }
    }

    fn node_id(event: &Event) -> Option<NodeId> {
        let element = event.target()?.dyn_into::<Element>().ok()?;
        let anchor = element.closest("[data-node]").ok()??;
        NodeId::parse(&anchor.get_attribute("data-node")?)
    }

    impl PlatformAdapter for DocumentBridge {
        fn attach(&mut self, registry: DocumentListeners) -> Result<(), crate::Error> {
            if self.document.is_some() {
                return Err(crate::Error::Platform("already attached".into()));
            }
            let document = web_sys::window()
                .and_then(|window| window.document())
                .ok_or_else(|| crate::Error::Platform("no document available".into()))?;

            for (name, kind) in PRESS_EVENTS {
                let registry = registry.clone();
                let closure = Closure::<dyn FnMut(Event)>::new(move |event: Event| {
                    let press = PointerEvent::new(kind, node_id(&event));
                    if let Err(e) = registry.dispatch(&press) {
                        log::warn!("dropped document {name}: {e}");
                    }
                });
                document
                    .add_event_listener_with_callback(
                        name,
                        closure.as_ref().unchecked_ref::<js_sys::Function>(),
                    )
                    .map_err(|e| crate::Error::Platform(format!("{e:?}")))?;
                self.listeners.push((name, closure));
            }

            log::debug!("document bridge attached");
            self.document = Some(document);
            Ok(())
        }

        fn detach(&mut self) -> Result<(), crate::Error> {
            let Some(document) = self.document.take() else {
                return Ok(());
            };
            for (name, closure) in self.listeners.drain(..) {
                document
                    .remove_event_listener_with_callback(
                        name,
                        closure.as_ref().unchecked_ref::<js_sys::Function>(),
                    )
                    .map_err(|e| crate::Error::Platform(format!("{e:?}")))?;
            }
            log::debug!("document bridge detached");
            Ok(())
        }

        fn is_attached(&self) -> bool {
            self.document.is_some()
        }
    }

    impl Drop for DocumentBridge {
        fn drop(&mut self) {
            if let Err(e) = self.detach() {
                log::warn!("failed to detach document bridge: {e}");
            }
        }
    }
}
