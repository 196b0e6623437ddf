pub mod config;
pub mod grid;
pub mod library;

pub use config::GridConfig;
pub use grid::VoxelGrid;
pub use library::{Library, Polyhedron};

/// Primary public struct for the blockwright-grid crate.
/// Holds the build grid being edited and the library of saved polyhedrons.
#[derive(Debug, Clone, Default)]
pub struct Workspace {
    pub grid: VoxelGrid,
    pub library: Library,
}

impl Workspace {
    pub fn new(config: GridConfig) -> Self {
        Self {
            grid: VoxelGrid::new(config),
            library: Library::new(),
        }
    }

    /// Empty both the grid and the library. Bounds are kept.
    pub fn clear(&mut self) {
        self.grid.clear();
        self.library.clear();
        log::info!("workspace: cleared");
    }

    /// Install a loaded project: new bounds, new library, empty grid.
    pub fn restore(&mut self, config: GridConfig, polyhedrons: Vec<Polyhedron>) {
        self.grid = VoxelGrid::new(config);
        self.library.replace(polyhedrons);
        log::info!(
            "workspace: restored {} polyhedrons on a {}x{} grid",
            self.library.len(),
            config.footprint(),
            config.max_height()
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use blockwright_core::color::ColorTag;

    #[test]
    fn test_restore_replaces_everything() {
        let mut ws = Workspace::default();
        let red = ColorTag::parse("#ff0000").expect("valid");
        ws.grid.add(0, 0, red.clone()).expect("room");
        ws.library.finalize(&mut ws.grid, 0).expect("saved");
        ws.grid.add(1, 1, red).expect("room");

        ws.restore(GridConfig::new(6, 3), Vec::new());
        assert!(ws.grid.is_empty());
        assert!(ws.library.is_empty());
        assert_eq!(ws.grid.config(), GridConfig::new(6, 3));
    }
}
