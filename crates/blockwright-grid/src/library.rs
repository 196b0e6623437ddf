use blockwright_core::error::EditError;
use blockwright_core::types::VoxelCell;
use serde::{Deserialize, Serialize};

use crate::grid::VoxelGrid;

/// A finished build saved into the library.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Polyhedron {
    pub id: String,
    pub name: String,
    pub cubes: Vec<VoxelCell>,
    /// Unix milliseconds.
    pub created_at: u64,
}

/// Ordered collection of saved polyhedrons plus the current selection.
#[derive(Debug, Clone)]
pub struct Library {
    polyhedrons: Vec<Polyhedron>,
    next_number: u32,
    selected: Option<String>,
}

impl Default for Library {
    fn default() -> Self {
        Self {
            polyhedrons: Vec::new(),
            next_number: 1,
            selected: None,
        }
    }
}

impl Library {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.polyhedrons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.polyhedrons.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Polyhedron> {
        self.polyhedrons.iter()
    }

    pub fn as_slice(&self) -> &[Polyhedron] {
        &self.polyhedrons
    }

    pub fn get(&self, id: &str) -> Option<&Polyhedron> {
        self.polyhedrons.iter().find(|p| p.id == id)
    }

    pub fn selected(&self) -> Option<&Polyhedron> {
        self.selected.as_deref().and_then(|id| self.get(id))
    }

    /// Next `poly<n>` id not already in the library. Numbering wraps to 1
    /// past `u32::MAX`.
    fn next_id(&mut self) -> (String, u32) {
        loop {
            let n = self.next_number;
            self.next_number = n.checked_add(1).unwrap_or(1);
            let id = format!("poly{n}");
            if self.get(&id).is_none() {
                return (id, n);
            }
        }
    }

    /// Save the grid contents as a new polyhedron, select it and clear the grid.
    pub fn finalize(&mut self, grid: &mut VoxelGrid, created_at: u64) -> Result<&Polyhedron, EditError> {
        if grid.is_empty() {
            return Err(EditError::EmptyBuild);
        }
        let (id, n) = self.next_id();
        let poly = Polyhedron {
            id: id.clone(),
            name: format!("Polyhedron {n}"),
            cubes: grid.to_cells(),
            created_at,
        };
        log::info!("library: saved {} with {} cubes", poly.id, poly.cubes.len());
        grid.clear();
        self.polyhedrons.push(poly);
        self.selected = Some(id);
        self.polyhedrons.last().ok_or(EditError::EmptyBuild)
    }

    /// Replace the grid contents with a saved polyhedron and select it.
    /// Returns the number of cubes that did not fit the current bounds.
    pub fn load_into(&mut self, id: &str, grid: &mut VoxelGrid) -> Result<usize, EditError> {
        let poly = self
            .get(id)
            .ok_or_else(|| EditError::UnknownPolyhedron(id.to_string()))?;
        let skipped = grid.replace_cells(&poly.cubes);
        if skipped > 0 {
            log::warn!("library: {skipped} cubes of {id} fall outside the grid");
        }
        self.selected = Some(id.to_string());
        Ok(skipped)
    }

    pub fn delete(&mut self, id: &str) -> Result<Polyhedron, EditError> {
        let index = self
            .polyhedrons
            .iter()
            .position(|p| p.id == id)
            .ok_or_else(|| EditError::UnknownPolyhedron(id.to_string()))?;
        if self.selected.as_deref() == Some(id) {
            self.selected = None;
        }
        let removed = self.polyhedrons.remove(index);
        log::info!("library: deleted {}", removed.id);
        Ok(removed)
    }

    /// Copy a polyhedron under a fresh id, appending " (copy)" to its name.
    pub fn duplicate(&mut self, id: &str, created_at: u64) -> Result<&Polyhedron, EditError> {
        let source = self
            .get(id)
            .ok_or_else(|| EditError::UnknownPolyhedron(id.to_string()))?;
        let name = format!("{} (copy)", source.name);
        let cubes = source.cubes.clone();
        let (new_id, _) = self.next_id();
        self.polyhedrons.push(Polyhedron {
            id: new_id,
            name,
            cubes,
            created_at,
        });
        self.polyhedrons
            .last()
            .ok_or_else(|| EditError::UnknownPolyhedron(id.to_string()))
    }

    /// Drop every polyhedron and restart numbering at 1.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Replace the whole library, e.g. after an import. Numbering continues
    /// after the highest `poly<n>` id present, or restarts at 1 when that id
    /// is `u32::MAX`.
    pub fn replace(&mut self, polyhedrons: Vec<Polyhedron>) {
        let highest = polyhedrons
            .iter()
            .filter_map(|p| p.id.strip_prefix("poly")?.parse::<u32>().ok())
            .max()
            .unwrap_or(0);
        self.polyhedrons = polyhedrons;
        self.next_number = highest.checked_add(1).unwrap_or(1);
        self.selected = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GridConfig;
    use blockwright_core::color::ColorTag;
    use glam::IVec3;

    fn build(grid: &mut VoxelGrid, n: usize) {
        let color = ColorTag::parse("#4ecdc4").expect("valid");
        for i in 0..n {
            grid.add(i as i32 - 2, 0, color.clone()).expect("room");
        }
    }

    #[test]
    fn test_finalize_names_and_clears() {
        let mut grid = VoxelGrid::new(GridConfig::default());
        let mut lib = Library::new();
        build(&mut grid, 3);

        let poly = lib.finalize(&mut grid, 1000).expect("non-empty build");
        assert_eq!(poly.id, "poly1");
        assert_eq!(poly.name, "Polyhedron 1");
        assert_eq!(poly.cubes.len(), 3);
        assert_eq!(poly.created_at, 1000);
        assert!(grid.is_empty());
        assert_eq!(lib.selected().map(|p| p.id.as_str()), Some("poly1"));
    }

    #[test]
    fn test_finalize_empty_rejected() {
        let mut grid = VoxelGrid::new(GridConfig::default());
        let mut lib = Library::new();
        assert_eq!(lib.finalize(&mut grid, 0).err(), Some(EditError::EmptyBuild));
        assert!(lib.is_empty());
    }

    #[test]
    fn test_edit_loads_cubes() {
        let mut grid = VoxelGrid::new(GridConfig::default());
        let mut lib = Library::new();
        build(&mut grid, 2);
        lib.finalize(&mut grid, 0).expect("saved");

        assert_eq!(lib.load_into("poly1", &mut grid), Ok(0));
        assert_eq!(grid.len(), 2);
        assert!(grid.is_occupied(IVec3::new(-2, 0, 0)));
        assert_eq!(
            lib.load_into("poly9", &mut grid),
            Err(EditError::UnknownPolyhedron("poly9".into()))
        );
    }

    #[test]
    fn test_duplicate_and_delete() {
        let mut grid = VoxelGrid::new(GridConfig::default());
        let mut lib = Library::new();
        build(&mut grid, 1);
        lib.finalize(&mut grid, 0).expect("saved");

        let copy = lib.duplicate("poly1", 5).expect("exists");
        assert_eq!(copy.id, "poly2");
        assert_eq!(copy.name, "Polyhedron 1 (copy)");

        lib.delete("poly1").expect("exists");
        assert!(lib.selected().is_none());
        assert_eq!(lib.len(), 1);
        assert!(lib.delete("poly1").is_err());

        build(&mut grid, 1);
        assert_eq!(lib.finalize(&mut grid, 0).expect("saved").id, "poly3");
    }

    #[test]
    fn test_clear_resets_numbering() {
        let mut grid = VoxelGrid::new(GridConfig::default());
        let mut lib = Library::new();
        build(&mut grid, 1);
        lib.finalize(&mut grid, 0).expect("saved");
        lib.clear();
        build(&mut grid, 1);
        assert_eq!(lib.finalize(&mut grid, 0).expect("saved").id, "poly1");
    }

    #[test]
    fn test_replace_continues_numbering() {
        let mut lib = Library::new();
        let mk = |id: &str| Polyhedron {
            id: id.to_string(),
            name: id.to_string(),
            cubes: Vec::new(),
            created_at: 0,
        };
        lib.replace(vec![mk("poly4"), mk("custom"), mk("poly2")]);
        let mut grid = VoxelGrid::new(GridConfig::default());
        build(&mut grid, 1);
        assert_eq!(lib.finalize(&mut grid, 0).expect("saved").id, "poly5");
    }

    #[test]
    fn test_numbering_wraps_without_reusing_ids() {
        let mut lib = Library::new();
        let mk = |id: &str| Polyhedron {
            id: id.to_string(),
            name: id.to_string(),
            cubes: Vec::new(),
            created_at: 0,
        };
        lib.replace(vec![mk("poly4294967295"), mk("poly1")]);
        let mut grid = VoxelGrid::new(GridConfig::default());
        build(&mut grid, 1);
        assert_eq!(lib.finalize(&mut grid, 0).expect("saved").id, "poly2");
        assert_eq!(lib.duplicate("poly4294967295", 0).expect("exists").id, "poly3");

        let mut ids: Vec<&str> = lib.iter().map(|p| p.id.as_str()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), lib.len());
    }

    #[test]
    fn test_polyhedron_json_is_camel_case() {
        let poly = Polyhedron {
            id: "poly1".into(),
            name: "Polyhedron 1".into(),
            cubes: Vec::new(),
            created_at: 42,
        };
        let json = serde_json::to_string(&poly).expect("serialize");
        assert!(json.contains("\"createdAt\":42"));
    }
}
