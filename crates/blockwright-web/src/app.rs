use std::cell::RefCell;
use std::rc::Rc;

use blockwright_core::view::Viewport;
use blockwright_editor::{Editor, EditorSettings, InputEvent};
use web_sys::{Element, HtmlCanvasElement};

use crate::canvas2d::Canvas2d;
use crate::error::WebError;

pub type SharedApp = Rc<RefCell<Application>>;

/// Element ids the page may provide for readouts.
const STATUS_ELEMENT_ID: &str = "blockwright-status";
const HOVER_ELEMENT_ID: &str = "blockwright-hover";

/// Browser-side application. Owns the editor and the drawing surface.
pub struct Application {
    editor: Editor,
    canvas: HtmlCanvasElement,
    surface: Canvas2d,
    status_el: Option<Element>,
    hover_el: Option<Element>,
}

impl Application {
    pub fn new(canvas: HtmlCanvasElement, settings: EditorSettings) -> Result<Self, WebError> {
        let surface = Canvas2d::from_canvas(&canvas)?;
        let document = canvas.owner_document();
        let find = |id: &str| document.as_ref().and_then(|d| d.get_element_by_id(id));
        let mut app = Self {
            editor: Editor::new(settings, Viewport::default()).with_clock(now_ms),
            status_el: find(STATUS_ELEMENT_ID),
            hover_el: find(HOVER_ELEMENT_ID),
            canvas,
            surface,
        };
        app.fit_to_container();
        Ok(app)
    }

    pub fn editor(&self) -> &Editor {
        &self.editor
    }

    pub fn editor_mut(&mut self) -> &mut Editor {
        &mut self.editor
    }

    /// Forward one input event, redrawing when the editor asks for it.
    pub fn handle(&mut self, event: InputEvent) {
        if self.editor.handle_event(event).redraw {
            self.redraw();
        }
    }

    /// Size the canvas to its container: CSS pixels for the editor,
    /// physical pixels for the backing store.
    pub fn fit_to_container(&mut self) {
        let window = web_sys::window().expect("no global window");
        let dpr = window.device_pixel_ratio();
        let (css_width, css_height) = match self.canvas.parent_element() {
            Some(parent) => (parent.client_width(), parent.client_height()),
            None => (self.canvas.client_width(), self.canvas.client_height()),
        };
        let (css_width, css_height) = (css_width.max(1) as f64, css_height.max(1) as f64);

        self.canvas.set_width((css_width * dpr).round() as u32);
        self.canvas.set_height((css_height * dpr).round() as u32);
        let style = self.canvas.style();
        style.set_property("width", &format!("{css_width}px")).ok();
        style.set_property("height", &format!("{css_height}px")).ok();
        self.surface.resize(css_width, css_height, dpr);

        log::info!(
            "Canvas: {}x{} CSS, {}x{} physical (DPI: {:.2})",
            css_width,
            css_height,
            self.canvas.width(),
            self.canvas.height(),
            dpr
        );

        self.editor.handle_event(InputEvent::Resize {
            width: css_width as f32,
            height: css_height as f32,
        });
        // The backing store was cleared by the resize either way.
        self.redraw();
    }

    pub fn redraw(&mut self) {
        self.editor.render(&mut self.surface);
        self.publish_readouts();
    }

    fn publish_readouts(&self) {
        if let Some(el) = &self.status_el {
            el.set_text_content(Some(&self.editor.status().text));
        }
        if let Some(el) = &self.hover_el {
            let text = self
                .editor
                .hover_cell()
                .map(|c| format!("({}, {}, {})", c.x, c.y, c.z))
                .unwrap_or_default();
            el.set_text_content(Some(&text));
        }
    }
}

/// Browser wall clock in Unix milliseconds.
pub fn now_ms() -> u64 {
    js_sys::Date::now() as u64
}
