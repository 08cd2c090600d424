//! Widget controller.
//!
//! Owns the selection state and drives the lifecycle:
//! `Loading -> Ready -> Interactive`, or `Loading -> Failed`.
//! Every user action is a synchronous mutation followed by a re-render
//! of the regions it affects, and nothing else.

use widget_sdk::prelude::*;

use crate::data::ProductDetails;
use crate::sections::*;
use crate::state::SelectionState;
use crate::surface::{Region, Surface};

/// Result of a delegated click.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClickOutcome {
    /// State changed; the listed regions were re-rendered.
    Updated(Vec<Region>),
    /// The click did not resolve to a valid item. Nothing changed.
    Ignored,
}

/// Build the logger described by `config`.
///
/// An unknown level name falls back to `info` and is reported once.
pub fn logger_for(config: &WidgetConfig, session: SessionId) -> StructuredLogger {
    let format = if config.log_json {
        LogFormat::Json
    } else {
        LogFormat::Human
    };
    let parsed = config.log_level.parse::<LogLevel>();
    let logger = StructuredLogger::new(session)
        .with_widget("product-display")
        .with_format(format)
        .with_min_level(*parsed.as_ref().unwrap_or(&LogLevel::Info));

    if let Err(e) = parsed {
        logger
            .warn_builder("Invalid log level, using info")
            .field("error", e.to_string())
            .emit();
    }
    logger
}

/// One product display widget instance.
pub struct Controller {
    config: WidgetConfig,
    logger: StructuredLogger,
    phase: WidgetPhase,
    state: SelectionState,
    product: Option<ProductDetails>,
    gallery: Vec<GalleryImage>,
    notification: Option<String>,
    observers: Vec<Box<dyn LifecycleObserver>>,
}

impl Controller {
    /// Create a controller in the `Loading` phase.
    pub fn new(config: WidgetConfig, logger: StructuredLogger) -> Self {
        Self {
            config,
            logger,
            phase: WidgetPhase::Loading,
            state: SelectionState::new(),
            product: None,
            gallery: Vec::new(),
            notification: None,
            observers: Vec::new(),
        }
    }

    /// Register a lifecycle observer.
    pub fn with_observer(mut self, observer: impl LifecycleObserver + 'static) -> Self {
        self.observers.push(Box::new(observer));
        self
    }

    pub fn config(&self) -> &WidgetConfig {
        &self.config
    }

    pub fn phase(&self) -> &WidgetPhase {
        &self.phase
    }

    pub fn state(&self) -> &SelectionState {
        &self.state
    }

    pub fn product(&self) -> Option<&ProductDetails> {
        self.product.as_ref()
    }

    pub fn gallery(&self) -> &[GalleryImage] {
        &self.gallery
    }

    /// Fetch the product once, decode it and render every region.
    ///
    /// Only valid in `Loading`; a second call is rejected without fetching.
    pub async fn load<S>(&mut self, source: &S, surface: &mut dyn Surface) -> Result<(), WidgetError>
    where
        S: ProductSource + ?Sized,
    {
        self.expect_loading()?;

        self.logger
            .info_builder("Product fetch started")
            .field("source", source.describe())
            .emit();

        let result = source.fetch_product().await;
        self.finish_load(result, surface)
    }

    fn expect_loading(&self) -> Result<(), WidgetError> {
        if self.phase != WidgetPhase::Loading {
            return Err(WidgetError::InvalidTransition {
                from: self.phase.name().to_string(),
                to: WidgetPhase::Ready.name().to_string(),
            });
        }
        Ok(())
    }

    /// Complete the load with the outcome of the fetch.
    fn finish_load(
        &mut self,
        result: Result<Vec<u8>, FetchError>,
        surface: &mut dyn Surface,
    ) -> Result<(), WidgetError> {
        self.expect_loading()?;
        let body = match result {
            Ok(body) => body,
            Err(e) => return Err(self.fail(e.into(), surface)),
        };
        self.logger
            .debug_builder("Product fetched")
            .field_i64("bytes", body.len() as i64)
            .emit();

        match ProductDetails::from_json(&body) {
            Ok(product) => self.initialize(product, surface),
            Err(e) => Err(self.fail(e.into(), surface)),
        }
    }

    /// Set the data-dependent defaults and render every region.
    pub fn initialize(
        &mut self,
        product: ProductDetails,
        surface: &mut dyn Surface,
    ) -> Result<(), WidgetError> {
        self.phase.advance(WidgetPhase::Ready)?;

        let mut state = SelectionState::new();
        if let Some(color) = product.colors.first() {
            state.set_color(0, color.name.clone());
        }
        if let Some(size) = product.sizes.first() {
            state.set_size(0, size.clone());
        }
        self.state = state;
        self.gallery = resolve_images(&self.config.image_policy, &product.images);
        self.product = Some(product);

        self.paint(&Region::ALL, surface);

        self.logger
            .info_builder("Widget ready")
            .field("color", self.state.color_name())
            .field("size", self.state.size_name())
            .field_i64("images", self.gallery.len() as i64)
            .emit();
        self.notify();
        Ok(())
    }

    /// Enter `Interactive`. Call once the click listeners are attached.
    pub fn listen(&mut self) -> Result<(), WidgetError> {
        self.phase.advance(WidgetPhase::Interactive)?;
        self.logger.info("Widget interactive");
        self.notify();
        Ok(())
    }

    /// Handle a click delegated from `region`.
    ///
    /// `attribute` is the value of the region's item attribute on the
    /// clicked element, if one was found.
    pub fn handle_click(
        &mut self,
        region: Region,
        attribute: Option<&str>,
        surface: &mut dyn Surface,
    ) -> ClickOutcome {
        if !self.phase.is_interactive() {
            self.logger
                .trace_builder("Click before interactive")
                .field("region", region.name())
                .field("phase", self.phase.name())
                .emit();
            return ClickOutcome::Ignored;
        }

        let changed = match region {
            Region::Colors => self.select_color(attribute),
            Region::Sizes => self.select_size(attribute),
            Region::QuantityControls => self.step_quantity(attribute),
            Region::Thumbnails => self.select_image(attribute),
            Region::AddToCart => Some(self.add_to_cart()),
            _ => None,
        };

        match changed {
            Some(regions) => {
                self.paint(&regions, surface);
                ClickOutcome::Updated(regions)
            }
            None => {
                self.logger
                    .trace_builder("Click ignored")
                    .field("region", region.name())
                    .field("attribute", attribute.unwrap_or_default())
                    .emit();
                ClickOutcome::Ignored
            }
        }
    }

    fn select_color(&mut self, attribute: Option<&str>) -> Option<Vec<Region>> {
        let index = parse_index(attribute?)?;
        let name = self.product.as_ref()?.colors.get(index)?.name.clone();
        self.logger
            .debug_builder("Color selected")
            .field_i64("index", index as i64)
            .field("name", name.as_str())
            .emit();
        self.state.set_color(index, name);
        Some(vec![Region::Colors])
    }

    fn select_size(&mut self, attribute: Option<&str>) -> Option<Vec<Region>> {
        let index = parse_index(attribute?)?;
        let name = self.product.as_ref()?.sizes.get(index)?.clone();
        self.logger
            .debug_builder("Size selected")
            .field_i64("index", index as i64)
            .field("name", name.as_str())
            .emit();
        self.state.set_size(index, name);
        Some(vec![Region::Sizes])
    }

    fn step_quantity(&mut self, attribute: Option<&str>) -> Option<Vec<Region>> {
        let delta = step_delta(attribute?)?;
        let quantity = self.state.adjust_quantity(delta);
        self.logger
            .debug_builder("Quantity changed")
            .field_i64("quantity", quantity as i64)
            .emit();
        Some(vec![Region::Quantity])
    }

    fn select_image(&mut self, attribute: Option<&str>) -> Option<Vec<Region>> {
        let id = parse_index(attribute?)?;
        if !self.gallery.iter().any(|img| img.id == id) {
            return None;
        }
        self.state.set_active_image(id);
        self.logger
            .debug_builder("Image selected")
            .field_i64("image", id as i64)
            .emit();
        Some(vec![Region::MainImage, Region::Thumbnails])
    }

    fn add_to_cart(&mut self) -> Vec<Region> {
        let message = cart_message(
            &self.config.product_name,
            self.state.color_name(),
            self.state.size_name(),
        );
        self.logger
            .info_builder("Added to cart")
            .field("color", self.state.color_name())
            .field("size", self.state.size_name())
            .field_i64("quantity", self.state.quantity() as i64)
            .emit();
        self.notification = Some(message);
        vec![Region::Notification]
    }

    /// Enter `Failed`, show the error and hand the error back.
    fn fail(&mut self, error: WidgetError, surface: &mut dyn Surface) -> WidgetError {
        let next = WidgetPhase::Failed(error.to_string());
        if self.phase.advance(next).is_err() {
            self.logger
                .warn_builder("Failure outside loading")
                .field("phase", self.phase.name())
                .emit();
        }

        self.logger
            .error_builder("Widget failed")
            .field("error", error.to_string())
            .emit();
        surface.replace(
            Region::Notification,
            &render_error_notification("Sorry, this product could not be loaded."),
        );
        self.notify();
        error
    }

    fn paint(&self, regions: &[Region], surface: &mut dyn Surface) {
        for region in regions {
            if let Some(html) = self.render_region(*region) {
                surface.replace(*region, &html);
            }
        }
    }

    fn render_region(&self, region: Region) -> Option<String> {
        let product = self.product.as_ref()?;
        let html = match region {
            Region::Price | Region::Discount | Region::DiscountedPrice => {
                let view = render_price(&product.price, &product.compare_at_price);
                match region {
                    Region::Price => view.initial,
                    Region::Discount => view.discount,
                    _ => view.final_price,
                }
            }
            Region::Colors => render_color_swatches(&product.colors, self.state.color_index()),
            Region::Sizes => render_size_options(&product.sizes, self.state.size_index()),
            Region::Quantity => render_quantity(self.state.quantity()),
            Region::QuantityControls => render_quantity_controls(),
            Region::MainImage => render_image_gallery(&self.gallery, self.state.active_image()).main,
            Region::Thumbnails => {
                render_image_gallery(&self.gallery, self.state.active_image()).thumbnails
            }
            Region::Description => {
                render_description(&product.description, self.config.description_policy)
            }
            Region::Notification => render_notification(self.notification.as_deref()?),
            // host-owned trigger
            Region::AddToCart => return None,
        };
        Some(html)
    }

    fn notify(&self) {
        for observer in &self.observers {
            observer.on_phase(&self.phase);
        }
    }
}

fn parse_index(value: &str) -> Option<usize> {
    value.trim().parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::collections::HashMap;
    use std::rc::Rc;

    use futures::executor::block_on;

    const BODY: &str = r##"{"product": {
        "price": "$80.00",
        "compare_at_price": "$100.00",
        "options": [
            {"values": [{"Red": "#ff0000"}, {"Blue": "#0000ff"}]},
            {"values": ["S", "M"]}
        ],
        "images": [],
        "description": "<p>desc</p>"
    }}"##;

    #[derive(Default)]
    struct Recording {
        regions: HashMap<Region, String>,
        writes: Vec<Region>,
    }

    impl Surface for Recording {
        fn replace(&mut self, region: Region, html: &str) {
            self.regions.insert(region, html.to_string());
            self.writes.push(region);
        }
    }

    struct PhaseLog(Rc<RefCell<Vec<String>>>);

    impl LifecycleObserver for PhaseLog {
        fn on_phase(&self, phase: &WidgetPhase) {
            self.0.borrow_mut().push(phase.name().to_string());
        }
    }

    fn controller() -> Controller {
        let config = WidgetConfig::default();
        let logger = logger_for(&config, SessionId::from_string("test"));
        Controller::new(config, logger)
    }

    fn interactive() -> (Controller, Recording) {
        let mut controller = controller();
        let mut surface = Recording::default();
        controller
            .finish_load(Ok(BODY.as_bytes().to_vec()), &mut surface)
            .unwrap();
        controller.listen().unwrap();
        surface.writes.clear();
        (controller, surface)
    }

    #[test]
    fn test_initial_render() {
        let mut controller = controller();
        let mut surface = Recording::default();
        controller
            .finish_load(Ok(BODY.as_bytes().to_vec()), &mut surface)
            .unwrap();

        assert_eq!(controller.phase(), &WidgetPhase::Ready);
        assert_eq!(surface.regions[&Region::Price], "$100.00");
        assert_eq!(surface.regions[&Region::Discount], "20% off");
        assert_eq!(surface.regions[&Region::DiscountedPrice], "$80.00");
        assert_eq!(surface.regions[&Region::Quantity], "1");
        assert_eq!(surface.regions[&Region::Description], "<p>desc</p>");
        assert!(!surface.regions.contains_key(&Region::Notification));
        assert_eq!(controller.state().color_name(), "Red");
        assert_eq!(controller.state().size_name(), "S");
        assert_eq!(controller.gallery().len(), 4);
    }

    #[test]
    fn test_clicks_ignored_until_interactive() {
        let mut controller = controller();
        let mut surface = Recording::default();
        controller
            .finish_load(Ok(BODY.as_bytes().to_vec()), &mut surface)
            .unwrap();
        surface.writes.clear();

        let outcome = controller.handle_click(Region::Colors, Some("1"), &mut surface);
        assert_eq!(outcome, ClickOutcome::Ignored);
        assert_eq!(controller.state().color_index(), 0);
        assert!(surface.writes.is_empty());
    }

    #[test]
    fn test_color_click_renders_only_colors() {
        let (mut controller, mut surface) = interactive();
        let outcome = controller.handle_click(Region::Colors, Some("1"), &mut surface);
        assert_eq!(outcome, ClickOutcome::Updated(vec![Region::Colors]));
        assert_eq!(surface.writes, vec![Region::Colors]);
        assert_eq!(controller.state().color_name(), "Blue");
        assert_eq!(surface.regions[&Region::Colors].matches("selected").count(), 1);
    }

    #[test]
    fn test_out_of_range_index_ignored() {
        let (mut controller, mut surface) = interactive();
        for attr in [Some("2"), Some("-1"), Some("x"), None] {
            assert_eq!(
                controller.handle_click(Region::Sizes, attr, &mut surface),
                ClickOutcome::Ignored
            );
        }
        assert_eq!(controller.state().size_index(), 0);
        assert!(surface.writes.is_empty());
    }

    #[test]
    fn test_thumbnail_click() {
        let (mut controller, mut surface) = interactive();
        let outcome = controller.handle_click(Region::Thumbnails, Some("3"), &mut surface);
        assert_eq!(
            outcome,
            ClickOutcome::Updated(vec![Region::MainImage, Region::Thumbnails])
        );
        assert_eq!(controller.state().active_image(), 3);
        assert!(surface.regions[&Region::MainImage].contains("image-product-3.jpg"));

        assert_eq!(
            controller.handle_click(Region::Thumbnails, Some("9"), &mut surface),
            ClickOutcome::Ignored
        );
        assert_eq!(controller.state().active_image(), 3);
    }

    #[test]
    fn test_non_interactive_region_ignored() {
        let (mut controller, mut surface) = interactive();
        assert_eq!(
            controller.handle_click(Region::Price, Some("0"), &mut surface),
            ClickOutcome::Ignored
        );
    }

    #[test]
    fn test_fetch_failure_enters_failed() {
        let mut controller = controller();
        let mut surface = Recording::default();
        let err = controller
            .finish_load(
                Err(FetchError::Http {
                    status: 404,
                    url: "/p.json".into(),
                }),
                &mut surface,
            )
            .unwrap_err();

        assert!(matches!(err, WidgetError::FetchFailure(_)));
        assert_eq!(controller.phase().name(), "failed");
        assert_eq!(surface.writes, vec![Region::Notification]);
        assert!(surface.regions[&Region::Notification].contains("notification--error"));
        assert!(controller.listen().is_err());
    }

    #[test]
    fn test_late_fetch_result_rejected() {
        let (mut controller, mut surface) = interactive();
        let err = controller
            .finish_load(Err(FetchError::Request("offline".into())), &mut surface)
            .unwrap_err();

        assert_eq!(
            err,
            WidgetError::InvalidTransition {
                from: "interactive".into(),
                to: "ready".into()
            }
        );
        assert!(controller.phase().is_interactive());
        assert!(surface.writes.is_empty());
        assert!(!surface.regions.contains_key(&Region::Notification));
    }

    #[test]
    fn test_price_regions_match_price_view() {
        let (controller, _) = interactive();
        let product = controller.product().unwrap();
        let view = render_price(&product.price, &product.compare_at_price);
        assert_eq!(controller.render_region(Region::Price), Some(view.initial));
        assert_eq!(controller.render_region(Region::Discount), Some(view.discount));
        assert_eq!(
            controller.render_region(Region::DiscountedPrice),
            Some(view.final_price)
        );
    }

    #[test]
    fn test_second_load_rejected_without_fetch() {
        let mut controller = controller();
        let mut surface = Recording::default();
        let source = StaticProductSource::from_body(BODY);
        block_on(controller.load(&source, &mut surface)).unwrap();
        assert!(block_on(controller.load(&source, &mut surface)).is_err());
        assert_eq!(source.calls(), 1);
    }

    #[test]
    fn test_observers_see_each_phase() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut controller = controller().with_observer(PhaseLog(seen.clone()));
        let mut surface = Recording::default();
        controller
            .finish_load(Ok(BODY.as_bytes().to_vec()), &mut surface)
            .unwrap();
        controller.listen().unwrap();
        assert_eq!(*seen.borrow(), vec!["ready", "interactive"]);
    }

    #[test]
    fn test_logger_for_invalid_level() {
        let mut config = WidgetConfig::default();
        config.log_level = "loud".into();
        let logger = logger_for(&config, SessionId::from_string("s"));
        assert!(logger.enabled(LogLevel::Info));
        assert!(!logger.enabled(LogLevel::Debug));
    }
}
