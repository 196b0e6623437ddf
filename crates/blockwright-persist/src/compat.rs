use std::collections::HashSet;

use blockwright_core::constants::{MAX_FOOTPRINT, MAX_GRID_HEIGHT};
use blockwright_grid::GridConfig;
use glam::IVec3;

use crate::error::PersistError;
use crate::format::{ProjectFile, Timestamp, FORMAT_VERSION};

/// Validate a parsed project file and return any compatibility warnings.
///
/// Returns Ok(warnings) when the file can be applied as-is, Err on the first
/// problem that would leave the workspace inconsistent. Date-string
/// timestamps are a warning, not an error.
pub fn validate_project(file: &ProjectFile) -> Result<Vec<String>, PersistError> {
    if file.version > FORMAT_VERSION {
        return Err(PersistError::UnsupportedVersion(file.version));
    }
    if !(1..=MAX_FOOTPRINT).contains(&file.grid_size) {
        return Err(PersistError::GridSizeOutOfRange(file.grid_size, MAX_FOOTPRINT));
    }
    if !(1..=MAX_GRID_HEIGHT).contains(&file.grid_height) {
        return Err(PersistError::GridHeightOutOfRange(file.grid_height, MAX_GRID_HEIGHT));
    }
    let config = GridConfig::new(file.grid_size, file.grid_height);

    let mut warnings = Vec::new();
    if let Timestamp::Text(text) = &file.created_at {
        warnings.push(format!("project timestamp '{text}' is not Unix milliseconds"));
    }

    let mut ids = HashSet::new();
    for poly in &file.polyhedrons {
        if !ids.insert(poly.id.as_str()) {
            return Err(PersistError::DuplicateId(poly.id.clone()));
        }

        let mut cells: HashSet<IVec3> = HashSet::with_capacity(poly.cubes.len());
        for cube in &poly.cubes {
            let cell = cube.coord();
            if !config.contains(cell) {
                return Err(PersistError::CubeOutOfBounds {
                    id: poly.id.clone(),
                    cell,
                });
            }
            if !cells.insert(cell) {
                return Err(PersistError::DuplicateCube {
                    id: poly.id.clone(),
                    cell,
                });
            }
        }
        if let Some(cell) = cells
            .iter()
            .find(|c| c.y > 0 && !cells.contains(&(**c - IVec3::Y)))
        {
            return Err(PersistError::FloatingCube {
                id: poly.id.clone(),
                cell: *cell,
            });
        }

        if poly.cubes.is_empty() {
            warnings.push(format!("polyhedron '{}' has no cubes", poly.id));
        }
        if let Timestamp::Text(text) = &poly.created_at {
            warnings.push(format!(
                "polyhedron '{}' timestamp '{text}' is not Unix milliseconds; using 0",
                poly.id
            ));
        }
    }

    Ok(warnings)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::format::PolyhedronRecord;
    use blockwright_core::{ColorTag, VoxelCell};

    fn cube(x: i32, y: i32, z: i32) -> VoxelCell {
        VoxelCell::new(IVec3::new(x, y, z), ColorTag::parse("#336699").expect("valid"))
    }

    fn poly(id: &str, cubes: Vec<VoxelCell>) -> PolyhedronRecord {
        PolyhedronRecord {
            id: id.to_string(),
            name: id.to_string(),
            cubes,
            created_at: Timestamp::Millis(1),
        }
    }

    fn project(polyhedrons: Vec<PolyhedronRecord>) -> ProjectFile {
        ProjectFile {
            version: FORMAT_VERSION,
            polyhedrons,
            grid_size: 10,
            grid_height: 5,
            created_at: Timestamp::Millis(1),
        }
    }

    #[test]
    fn test_valid_project_no_warnings() {
        let file = project(vec![poly("poly1", vec![cube(0, 0, 0), cube(0, 1, 0)])]);
        let warnings = validate_project(&file).expect("should succeed");
        assert!(warnings.is_empty());
    }

    #[test]
    fn test_text_timestamp_warns() {
        let mut file = project(vec![poly("poly1", vec![cube(0, 0, 0)])]);
        file.polyhedrons[0].created_at = Timestamp::Text("2024-05-01T10:00:00Z".into());
        let warnings = validate_project(&file).expect("should succeed with warnings");
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].contains("not Unix milliseconds"));
    }

    #[test]
    fn test_newer_version_rejected() {
        let mut file = project(Vec::new());
        file.version = 2;
        assert!(matches!(
            validate_project(&file),
            Err(PersistError::UnsupportedVersion(2))
        ));
    }

    #[test]
    fn test_grid_ranges_rejected() {
        let mut file = project(Vec::new());
        file.grid_size = 0;
        assert!(matches!(
            validate_project(&file),
            Err(PersistError::GridSizeOutOfRange(0, _))
        ));
        file.grid_size = 10;
        file.grid_height = MAX_GRID_HEIGHT + 1;
        assert!(matches!(
            validate_project(&file),
            Err(PersistError::GridHeightOutOfRange(..))
        ));
    }

    #[test]
    fn test_duplicate_id_rejected() {
        let file = project(vec![
            poly("poly1", vec![cube(0, 0, 0)]),
            poly("poly1", vec![cube(1, 0, 0)]),
        ]);
        assert!(matches!(
            validate_project(&file),
            Err(PersistError::DuplicateId(id)) if id == "poly1"
        ));
    }

    #[test]
    fn test_cube_errors() {
        let dup = project(vec![poly("a", vec![cube(0, 0, 0), cube(0, 0, 0)])]);
        assert!(matches!(validate_project(&dup), Err(PersistError::DuplicateCube { .. })));

        let out = project(vec![poly("a", vec![cube(5, 0, 0)])]);
        assert!(matches!(validate_project(&out), Err(PersistError::CubeOutOfBounds { .. })));

        let high = project(vec![poly("a", vec![cube(0, 5, 0)])]);
        assert!(matches!(validate_project(&high), Err(PersistError::CubeOutOfBounds { .. })));

        let floating = project(vec![poly("a", vec![cube(0, 0, 0), cube(1, 1, 0)])]);
        match validate_project(&floating) {
            Err(PersistError::FloatingCube { cell, .. }) => assert_eq!(cell, IVec3::new(1, 1, 0)),
            other => panic!("expected floating cube error, got {other:?}"),
        }
    }
}
