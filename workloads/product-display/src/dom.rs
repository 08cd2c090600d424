//! Browser binding: page regions, delegated listeners and the start hook.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use anyhow::{anyhow, Context};
use gloo::events::EventListener;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Element, Event};
use widget_sdk::prelude::*;

use crate::controller::{logger_for, Controller};
use crate::surface::{Region, Surface};

/// Host element of the widget. Falls back to `<body>` when absent.
const ROOT_SELECTOR: &str = r#"[data-widget="product-display"]"#;

/// Optional JSON `WidgetConfig` on the root element.
const CONFIG_ATTRIBUTE: &str = "data-widget-config";

/// Regions resolved once against the host document.
pub struct DomSurface {
    regions: HashMap<Region, Element>,
}

impl DomSurface {
    /// Resolve every region under `root`.
    pub fn bind(root: &Element) -> Result<Self, WidgetError> {
        let mut regions = HashMap::new();
        for region in Region::ALL {
            let element = root
                .query_selector(&region.selector())
                .ok()
                .flatten()
                .ok_or_else(|| WidgetError::MissingRegion(region.name().to_string()))?;
            regions.insert(region, element);
        }
        Ok(Self { regions })
    }

    fn element(&self, region: Region) -> Option<&Element> {
        self.regions.get(&region)
    }
}

impl Surface for DomSurface {
    fn replace(&mut self, region: Region, html: &str) {
        if let Some(element) = self.element(region) {
            element.set_inner_html(html);
        }
    }
}

struct Widget {
    controller: Controller,
    surface: DomSurface,
}

#[wasm_bindgen(start)]
pub async fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    run()
        .await
        .map_err(|e| JsValue::from_str(&format!("product-display: {:#}", e)))
}

async fn run() -> anyhow::Result<()> {
    let document = web_sys::window()
        .and_then(|w| w.document())
        .context("no document")?;
    let root = match document
        .query_selector(ROOT_SELECTOR)
        .map_err(|e| anyhow!("bad root selector: {:?}", e))?
    {
        Some(root) => root,
        None => document.body().context("document has no body")?.into(),
    };

    let config = match root.get_attribute(CONFIG_ATTRIBUTE) {
        Some(raw) => serde_json::from_str::<WidgetConfig>(&raw)
            .with_context(|| format!("invalid {}", CONFIG_ATTRIBUTE))?,
        None => WidgetConfig::default(),
    };

    let session = SessionId::generate();
    let logger = logger_for(&config, session.clone());
    let mut surface = DomSurface::bind(&root)?;
    let source = HttpProductSource::new(config.endpoint.clone(), FetchClient::new(session));

    let mut controller = Controller::new(config, logger);
    controller.load(&source, &mut surface).await?;

    let containers: Vec<(Region, Element)> = Region::INTERACTIVE
        .iter()
        .filter_map(|region| surface.element(*region).map(|el| (*region, el.clone())))
        .collect();
    let widget = Rc::new(RefCell::new(Widget {
        controller,
        surface,
    }));
    attach_listeners(&widget, containers);
    widget.borrow_mut().controller.listen()?;
    Ok(())
}

/// One click listener per interactive container, kept for the page's lifetime.
fn attach_listeners(widget: &Rc<RefCell<Widget>>, containers: Vec<(Region, Element)>) {
    for (region, container) in containers {
        let widget = Rc::clone(widget);
        let scope = container.clone();
        EventListener::new(&container, "click", move |event: &Event| {
            let attribute = clicked_attribute(&scope, region, event);
            let mut guard = widget.borrow_mut();
            let Widget {
                controller,
                surface,
            } = &mut *guard;
            controller.handle_click(region, attribute.as_deref(), surface);
        })
        .forget();
    }
}

/// Item attribute of the clicked element or its nearest carrying ancestor
/// inside `container`.
fn clicked_attribute(container: &Element, region: Region, event: &Event) -> Option<String> {
    let name = region.item_attribute()?;
    let target = event.target()?.dyn_into::<Element>().ok()?;
    let item = target.closest(&format!("[{}]", name)).ok().flatten()?;
    if !container.contains(Some(item.as_ref())) {
        return None;
    }
    item.get_attribute(name)
}
