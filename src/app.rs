use canvas::config::CurveConfig;
use canvas::engine::{Engine, EngineCore};
use canvas::error::CanvasError;
use web_sys::{CanvasRenderingContext2d, Document, HtmlCanvasElement, Window};

use crate::dom::{self, CANVAS_ID};
use crate::events;
use crate::overlay::DomOverlay;
use crate::scheduler::RafScheduler;
use crate::widgets::Widgets;

/// A mounted page: engine wired to the DOM, ready to start its frame loop.
pub struct App {
    engine: Engine,
    ctx: CanvasRenderingContext2d,
    overlay: DomOverlay,
}

impl App {
    /// Look up the page elements, size the canvas, and attach all listeners.
    ///
    /// # Errors
    ///
    /// Fails when the canvas or its 2D context is missing, or a listener
    /// cannot be attached. Every other element is optional.
    pub fn mount(window: &Window, document: &Document, config: &CurveConfig) -> Result<Self, CanvasError> {
        let canvas_el: HtmlCanvasElement = dom::element(document, CANVAS_ID)?;
        let ctx = dom::context_2d(&canvas_el)?;

        let engine = Engine::new(EngineCore::new(config));
        let viewport = dom::fit_canvas_to_parent(&canvas_el);
        engine.with(|core| core.resize(viewport.width, viewport.height));

        let widgets = Widgets::find(document);
        widgets.seed(config, engine.snapshot().camera().zoom);
        events::wire(window, &canvas_el, &engine, &widgets)?;

        log::info!("mounted #{CANVAS_ID} at {}x{}", viewport.width, viewport.height);
        Ok(Self { engine, ctx, overlay: DomOverlay::find(document) })
    }

    /// Drive the frame loop until the browser stops delivering frames.
    pub async fn run(self, window: Window) {
        let mut scheduler = RafScheduler::new(window);
        let mut frames = self.engine.render_loop(self.ctx, self.overlay);
        frames.run(&mut scheduler).await;
    }
}
