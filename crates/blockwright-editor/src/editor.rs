use std::time::{SystemTime, UNIX_EPOCH};

use blockwright_core::color::ColorTag;
use blockwright_core::error::EditError;
use blockwright_core::types::GridCoord;
use blockwright_core::view::{ViewState, Viewport};
use blockwright_grid::{GridConfig, Library, VoxelGrid, Workspace};
use blockwright_persist::PersistError;
use blockwright_render::{Canvas, PickEngine, PickTarget, Renderer, Scene};
use glam::{IVec3, Vec2};

use crate::input::{Click, DragDelta, Gesture, InputEvent, Key, PointerButton};
use crate::settings::EditorSettings;
use crate::status::Status;
use crate::tools::{paint, place, remove, Tool};

/// Source of "now" in Unix milliseconds.
pub type Clock = fn() -> u64;

/// Wall clock for native hosts. Browsers supply their own.
pub fn system_clock() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}

/// What the host must do after an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EventResponse {
    pub redraw: bool,
}

/// One editing session: view, grid, library, tools and pointer state.
///
/// Every mutation happens inside a method call and is followed by the
/// host redrawing when the returned response asks for it.
pub struct Editor {
    view: ViewState,
    viewport: Viewport,
    workspace: Workspace,
    settings: EditorSettings,
    renderer: Renderer,
    tool: Tool,
    color: ColorTag,
    show_floor: bool,
    gesture: Gesture,
    pan_modifier: bool,
    pointer: Option<Vec2>,
    hover: Option<PickTarget>,
    status: Status,
    clock: Clock,
}

impl Editor {
    pub fn new(settings: EditorSettings, viewport: Viewport) -> Self {
        let config = GridConfig::new(settings.footprint, settings.grid_height);
        Self {
            view: ViewState::default(),
            viewport,
            workspace: Workspace::new(config),
            renderer: Renderer::new(settings.render_style()),
            tool: Tool::default(),
            color: settings.start_color(),
            show_floor: settings.show_floor,
            settings,
            gesture: Gesture::Idle,
            pan_modifier: false,
            pointer: None,
            hover: None,
            status: Status::info("Ready"),
            clock: system_clock,
        }
    }

    pub fn with_clock(mut self, clock: Clock) -> Self {
        self.clock = clock;
        self
    }

    // -- readouts --

    pub fn view(&self) -> &ViewState {
        &self.view
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn grid(&self) -> &VoxelGrid {
        &self.workspace.grid
    }

    pub fn library(&self) -> &Library {
        &self.workspace.library
    }

    pub fn workspace(&self) -> &Workspace {
        &self.workspace
    }

    pub fn settings(&self) -> &EditorSettings {
        &self.settings
    }

    pub fn cell_count(&self) -> usize {
        self.workspace.grid.len()
    }

    pub fn status(&self) -> &Status {
        &self.status
    }

    pub fn tool(&self) -> Tool {
        self.tool
    }

    pub fn color(&self) -> &ColorTag {
        &self.color
    }

    pub fn show_floor(&self) -> bool {
        self.show_floor
    }

    pub fn hover(&self) -> Option<&PickTarget> {
        self.hover.as_ref()
    }

    /// Cell shown in the hover readout: for a hovered face, the empty cell
    /// across it (`source + normal`); otherwise the ground cell at y = 0.
    pub fn hover_cell(&self) -> Option<GridCoord> {
        self.hover.map(|target| match target {
            PickTarget::Face(face) => face.target,
            PickTarget::Ground { x, z } => IVec3::new(x, 0, z),
        })
    }

    /// Where the cube tool would place, shown as the translucent preview.
    pub fn preview_cell(&self) -> Option<GridCoord> {
        if self.tool != Tool::Cube {
            return None;
        }
        place::preview(&self.workspace.grid, self.hover.as_ref()?)
    }

    // -- drawing --

    pub fn scene(&self) -> Scene {
        let grid = &self.workspace.grid;
        let mut scene = Scene::from_grid(grid);
        if self.show_floor {
            scene.floor = Some(grid.config());
        }
        if let Some(PickTarget::Face(face)) = self.hover {
            scene.highlight = Some((face.source, face.face));
        }
        scene.preview = self.preview_cell().map(|cell| (cell, self.color.rgb()));
        scene
    }

    pub fn render(&self, canvas: &mut dyn Canvas) {
        self.renderer.draw(canvas, &self.view, self.viewport, &self.scene());
    }

    // -- input --

    pub fn handle_event(&mut self, event: InputEvent) -> EventResponse {
        let redraw = match event {
            InputEvent::PointerDown { pos, button } => {
                self.pointer = Some(pos);
                self.gesture.press(pos, button, self.pan_modifier);
                self.refresh_hover()
            }
            InputEvent::PointerMove { pos } => {
                self.pointer = Some(pos);
                let moved = match self.gesture.motion(pos) {
                    Some(DragDelta::Rotate(d)) => {
                        let k = self.settings.rotate_deg_per_pixel;
                        self.view.rotate_by(d.x * k, -d.y * k);
                        true
                    }
                    Some(DragDelta::Pan(d)) => {
                        self.view.pan_by(d);
                        true
                    }
                    None => false,
                };
                self.refresh_hover() || moved
            }
            InputEvent::PointerUp { pos, button } => {
                self.pointer = Some(pos);
                let click = self.gesture.release(pos, button);
                self.refresh_hover();
                match click {
                    Some(click) => {
                        self.click(click);
                        true
                    }
                    // Ending a drag restores the hover it suppressed.
                    None => true,
                }
            }
            InputEvent::PointerLeave => {
                self.gesture.cancel();
                self.pointer = None;
                self.hover.take().is_some()
            }
            InputEvent::Wheel { pos, delta_y } => self.wheel(pos, delta_y),
            InputEvent::KeyDown(key) => self.key_down(key),
            InputEvent::KeyUp(Key::Space) => {
                self.pan_modifier = false;
                false
            }
            InputEvent::KeyUp(_) => false,
            InputEvent::Resize { width, height } => self.resize(width, height),
        };
        EventResponse { redraw }
    }

    fn wheel(&mut self, pos: Vec2, delta_y: f32) -> bool {
        if delta_y == 0.0 || !delta_y.is_finite() {
            return false;
        }
        let step = self.settings.zoom_step;
        let factor = if delta_y < 0.0 { step } else { 1.0 / step };
        let before = self.view.zoom();
        self.view.zoom_at(factor, pos, self.viewport.center());
        self.pointer = Some(pos);
        self.refresh_hover();
        if self.view.zoom() != before {
            self.set_status(Status::info(format!("Zoom: {:.0}%", self.view.zoom() * 100.0)));
        }
        true
    }

    fn key_down(&mut self, key: Key) -> bool {
        match key {
            Key::Space => {
                self.pan_modifier = true;
                false
            }
            Key::Char('r') if self.pan_modifier => {
                self.reset_view();
                true
            }
            _ if self.pan_modifier => false,
            Key::Char(c) => match Tool::from_key(c) {
                Some(tool) => {
                    self.set_tool(tool);
                    true
                }
                None => false,
            },
            Key::ArrowLeft => {
                self.view.rotate_by(-self.settings.key_rotate_step_deg, 0.0);
                self.refresh_hover();
                true
            }
            Key::ArrowRight => {
                self.view.rotate_by(self.settings.key_rotate_step_deg, 0.0);
                self.refresh_hover();
                true
            }
            Key::Other => false,
        }
    }

    /// Re-run picking at the last pointer position. Returns true when the
    /// hover target changed.
    fn refresh_hover(&mut self) -> bool {
        let hover = match self.pointer {
            Some(pos) if !self.gesture.is_dragging() => {
                PickEngine::new(&self.workspace.grid, &self.view, self.viewport).pick(pos)
            }
            _ => None,
        };
        let changed = hover != self.hover;
        self.hover = hover;
        changed
    }

    fn click(&mut self, click: Click) {
        let Some(target) = self.hover else {
            return;
        };
        let grid = &mut self.workspace.grid;
        let status = match (click.button, self.tool) {
            (PointerButton::Primary, Tool::Cube) => place::execute(grid, &target, self.color.clone())
                .map(|cell| Status::info(format!("Added cube at {cell}"))),
            (PointerButton::Primary, Tool::Paint) => paint::execute(grid, &target, self.color.clone())
                .map(|cell| Status::info(format!("Painted cube at {cell}"))),
            (PointerButton::Primary, Tool::Erase)
            | (PointerButton::Secondary, Tool::Cube | Tool::Erase) => remove::execute(grid, &target)
                .map(|cell| Status::info(format!("Deleted cube at {}", cell.coord()))),
            _ => return,
        };
        self.set_status(status.unwrap_or_else(Status::rejected));
        self.refresh_hover();
    }

    fn set_status(&mut self, status: Status) {
        log::info!("{status}");
        self.status = status;
    }

    // -- view --

    pub fn reset_view(&mut self) {
        self.view.reset();
        self.refresh_hover();
        self.set_status(Status::info("View reset"));
    }

    /// Idempotent; returns true when the size changed.
    pub fn resize(&mut self, width: f32, height: f32) -> bool {
        let viewport = Viewport::new(width, height);
        if viewport == self.viewport {
            return false;
        }
        self.viewport = viewport;
        self.refresh_hover();
        true
    }

    // -- tools and grid --

    pub fn set_tool(&mut self, tool: Tool) {
        self.tool = tool;
        self.set_status(Status::info(format!("Tool: {}", tool.name())));
    }

    pub fn set_color(&mut self, color: ColorTag) {
        self.set_status(Status::info(format!("Color: {color}")));
        self.color = color;
    }

    pub fn set_show_floor(&mut self, show: bool) {
        self.show_floor = show;
        self.set_status(Status::info(if show { "Floor grid shown" } else { "Floor grid hidden" }));
    }

    /// Returns the number of purged cells.
    pub fn set_footprint(&mut self, footprint: u32) -> usize {
        let purged = self.workspace.grid.set_footprint(footprint);
        let n = self.workspace.grid.config().footprint();
        self.set_status(Status::info(format!("Grid size set to {n}x{n}")));
        self.refresh_hover();
        purged
    }

    /// Returns the number of purged cells.
    pub fn set_max_height(&mut self, height: u32) -> usize {
        let purged = self.workspace.grid.set_max_height(height);
        let h = self.workspace.grid.config().max_height();
        self.set_status(Status::info(format!("Grid height set to {h}")));
        self.refresh_hover();
        purged
    }

    pub fn clear_grid(&mut self) {
        self.workspace.grid.clear();
        self.refresh_hover();
        self.set_status(Status::info("Grid cleared"));
    }

    // -- library --

    /// Save the build as a new polyhedron. Returns its id.
    pub fn finalize_build(&mut self) -> Result<String, EditError> {
        let now = (self.clock)();
        let Workspace { grid, library } = &mut self.workspace;
        let result = library
            .finalize(grid, now)
            .map(|poly| (poly.id.clone(), poly.name.clone()));
        let (id, name) = self.report(result)?;
        self.set_status(Status::info(format!("Created {name}")));
        self.refresh_hover();
        Ok(id)
    }

    pub fn edit_polyhedron(&mut self, id: &str) -> Result<(), EditError> {
        let Workspace { grid, library } = &mut self.workspace;
        let result = library.load_into(id, grid);
        let skipped = self.report(result)?;
        let mut text = format!("Editing {id}");
        if skipped > 0 {
            text.push_str(&format!(" ({skipped} cubes outside the grid)"));
        }
        self.set_status(Status::info(text));
        self.refresh_hover();
        Ok(())
    }

    pub fn delete_polyhedron(&mut self, id: &str) -> Result<(), EditError> {
        let result = self.workspace.library.delete(id);
        let removed = self.report(result)?;
        self.set_status(Status::info(format!("Deleted {}", removed.name)));
        Ok(())
    }

    /// Copy a polyhedron. Returns the new id.
    pub fn duplicate_polyhedron(&mut self, id: &str) -> Result<String, EditError> {
        let now = (self.clock)();
        let result = self
            .workspace
            .library
            .duplicate(id, now)
            .map(|poly| (poly.id.clone(), poly.name.clone()));
        let (new_id, name) = self.report(result)?;
        self.set_status(Status::info(format!("Created {name}")));
        Ok(new_id)
    }

    pub fn duplicate_selected(&mut self) -> Result<String, EditError> {
        let selected = self.workspace.library.selected().map(|p| p.id.clone());
        match selected {
            Some(id) => self.duplicate_polyhedron(&id),
            None => self.report(Err(EditError::NoSelection)),
        }
    }

    /// Empty the grid and the library.
    pub fn clear_workspace(&mut self) {
        self.workspace.clear();
        self.refresh_hover();
        self.set_status(Status::info("Workspace cleared"));
    }

    fn report<T>(&mut self, result: Result<T, EditError>) -> Result<T, EditError> {
        if let Err(e) = &result {
            log::debug!("editor: rejected: {e}");
            self.set_status(Status::rejected(e));
        }
        result
    }

    // -- persistence --

    pub fn export_project(&mut self) -> Result<String, PersistError> {
        let text = blockwright_persist::export_project(&self.workspace, (self.clock)())?;
        self.set_status(Status::info("Project saved"));
        Ok(text)
    }

    pub fn export_file_name(&self) -> String {
        blockwright_persist::export_file_name((self.clock)())
    }

    /// Replace the workspace with a project file. A rejected file leaves
    /// everything as it was. Returns the import warnings.
    pub fn import_project(&mut self, text: &str) -> Result<Vec<String>, PersistError> {
        let data = match blockwright_persist::import_project(text) {
            Ok(data) => data,
            Err(e) => {
                self.set_status(Status::rejected(format!("import failed: {e}")));
                return Err(e);
            }
        };
        let warnings = data.warnings.clone();
        data.apply(&mut self.workspace);
        self.hover = None;
        self.refresh_hover();
        self.set_status(Status::info(format!(
            "Project loaded: {} polyhedrons",
            self.workspace.library.len()
        )));
        Ok(warnings)
    }
}
