use blockwright_grid::{GridConfig, Polyhedron, Workspace};

use crate::compat;
use crate::error::PersistError;
use crate::format::*;

/// A validated project file ready to replace the workspace.
#[derive(Debug, Clone)]
pub struct ProjectData {
    pub config: GridConfig,
    pub polyhedrons: Vec<Polyhedron>,
    /// Export time, when the file carries it as Unix milliseconds.
    pub created_at: Option<u64>,
    /// Compatibility warnings (e.g., date-string timestamps).
    pub warnings: Vec<String>,
}

impl ProjectData {
    /// Replace the workspace wholesale. Nothing can fail at this point.
    pub fn apply(self, workspace: &mut Workspace) {
        for warning in &self.warnings {
            log::warn!("persist: {warning}");
        }
        workspace.restore(self.config, self.polyhedrons);
    }
}

/// Parse and validate a project file. Nothing is mutated here, so a
/// rejected file leaves the caller's state untouched.
pub fn import_project(text: &str) -> Result<ProjectData, PersistError> {
    let file: ProjectFile = serde_json::from_str(text)?;
    let warnings = compat::validate_project(&file)?;

    Ok(ProjectData {
        config: GridConfig::new(file.grid_size, file.grid_height),
        created_at: file.created_at.as_millis(),
        polyhedrons: file
            .polyhedrons
            .into_iter()
            .map(PolyhedronRecord::into_polyhedron)
            .collect(),
        warnings,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::save;
    use blockwright_core::ColorTag;
    use glam::IVec3;

    fn sample_workspace() -> Workspace {
        let mut ws = Workspace::new(GridConfig::new(6, 3));
        let red = ColorTag::parse("#ff0000").expect("valid");
        let blue = ColorTag::parse("#0000ff").expect("valid");
        ws.grid.add(0, 0, red.clone()).expect("room");
        ws.grid.add(0, 0, blue).expect("room");
        ws.grid.add(-3, 2, red).expect("room");
        ws.library.finalize(&mut ws.grid, 10).expect("saved");
        ws
    }

    #[test]
    fn test_export_import_restores_library() {
        let original = sample_workspace();
        let text = save::export_project(&original, 99).expect("serializes");
        let data = import_project(&text).expect("valid file");
        assert!(data.warnings.is_empty());
        assert_eq!(data.created_at, Some(99));

        let mut ws = Workspace::default();
        ws.grid.add(1, 1, ColorTag::parse("#00ff00").expect("valid")).expect("room");
        data.apply(&mut ws);

        assert!(ws.grid.is_empty());
        assert_eq!(ws.grid.config(), GridConfig::new(6, 3));
        assert_eq!(ws.library.as_slice(), original.library.as_slice());
        let poly = ws.library.get("poly1").expect("imported");
        assert!(poly.cubes.iter().any(|c| c.coord() == IVec3::new(0, 1, 0)));
    }

    #[test]
    fn test_import_continues_numbering() {
        let text = save::export_project(&sample_workspace(), 0).expect("serializes");
        let mut ws = Workspace::default();
        import_project(&text).expect("valid").apply(&mut ws);
        ws.grid.add(0, 0, ColorTag::parse("#123456").expect("valid")).expect("room");
        assert_eq!(ws.library.finalize(&mut ws.grid, 0).expect("saved").id, "poly2");
    }

    #[test]
    fn test_max_numbered_id_reexports_cleanly() {
        let json = r##"{
            "polyhedrons": [{
                "id": "poly4294967295", "name": "Last",
                "cubes": [{"x": 0, "y": 0, "z": 0, "color": "#336699"}]
            }]
        }"##;
        let mut ws = Workspace::default();
        import_project(json).expect("valid").apply(&mut ws);
        ws.grid.add(1, 1, ColorTag::parse("#123456").expect("valid")).expect("room");
        assert_eq!(ws.library.finalize(&mut ws.grid, 0).expect("saved").id, "poly1");

        let text = save::export_project(&ws, 0).expect("serializes");
        let data = import_project(&text).expect("own export reimports");
        assert_eq!(data.polyhedrons.len(), 2);
    }

    #[test]
    fn test_malformed_json_rejected() {
        assert!(matches!(import_project("{ not json"), Err(PersistError::Json(_))));
        assert!(matches!(
            import_project(r#"{"gridSize": -1}"#),
            Err(PersistError::Json(_))
        ));
    }

    #[test]
    fn test_bad_color_rejected() {
        let json = r#"{"polyhedrons":[{"id":"p","name":"p","cubes":[{"x":0,"y":0,"z":0,"color":"red"}]}]}"#;
        match import_project(json) {
            Err(PersistError::Json(msg)) => assert!(msg.contains("red")),
            other => panic!("expected json error, got {other:?}"),
        }
    }

    #[test]
    fn test_legacy_file_with_date_strings() {
        let json = r##"{
            "polyhedrons": [{
                "id": "poly3", "name": "Tower",
                "cubes": [{"x": 0, "y": 0, "z": 0, "color": "#FF6B6B"}],
                "createdAt": "2024-03-02T08:15:00.000Z"
            }],
            "gridSize": 10,
            "gridHeight": 5,
            "createdAt": "2024-03-02T08:20:00.000Z"
        }"##;
        let data = import_project(json).expect("legacy files load");
        assert_eq!(data.warnings.len(), 2);
        assert_eq!(data.created_at, None);
        assert_eq!(data.polyhedrons[0].created_at, 0);
        assert_eq!(data.polyhedrons[0].cubes[0].color.as_str(), "#ff6b6b");
    }

    #[test]
    fn test_rejected_import_leaves_workspace() {
        let ws = sample_workspace();
        let json = r#"{"gridSize": 4, "gridHeight": 99}"#;
        assert!(import_project(json).is_err());
        assert_eq!(ws.library.len(), 1);
        assert_eq!(ws.grid.config(), GridConfig::new(6, 3));
    }
}
