use blockwright_grid::Workspace;

use crate::error::PersistError;
use crate::format::*;

/// Serialize the workspace library and grid bounds as a pretty-printed
/// project file. The grid being edited is not part of the file.
pub fn export_project(workspace: &Workspace, created_at: u64) -> Result<String, PersistError> {
    let config = workspace.grid.config();
    let file = ProjectFile {
        version: FORMAT_VERSION,
        polyhedrons: workspace.library.iter().map(PolyhedronRecord::from).collect(),
        grid_size: config.footprint(),
        grid_height: config.max_height(),
        created_at: Timestamp::Millis(created_at),
    };
    let text = serde_json::to_string_pretty(&file)?;
    log::info!(
        "persist: exported {} polyhedrons ({} bytes)",
        file.polyhedrons.len(),
        text.len()
    );
    Ok(text)
}

/// Download name for an export made at `created_at`.
pub fn export_file_name(created_at: u64) -> String {
    format!("polyhedron_project_{created_at}{FILE_EXTENSION}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use blockwright_core::ColorTag;
    use blockwright_grid::GridConfig;

    #[test]
    fn test_export_shape() {
        let mut ws = Workspace::new(GridConfig::new(8, 4));
        ws.grid.add(0, 0, ColorTag::parse("#ff0000").expect("valid")).expect("room");
        ws.library.finalize(&mut ws.grid, 1234).expect("saved");

        let text = export_project(&ws, 5678).expect("serializes");
        let value: serde_json::Value = serde_json::from_str(&text).expect("valid json");

        assert_eq!(value["version"], 1);
        assert_eq!(value["gridSize"], 8);
        assert_eq!(value["gridHeight"], 4);
        assert_eq!(value["createdAt"], 5678);
        let poly = &value["polyhedrons"][0];
        assert_eq!(poly["id"], "poly1");
        assert_eq!(poly["name"], "Polyhedron 1");
        assert_eq!(poly["createdAt"], 1234);
        assert_eq!(poly["cubes"][0]["color"], "#ff0000");
        assert_eq!(poly["cubes"][0]["y"], 0);
    }

    #[test]
    fn test_export_is_pretty() {
        let ws = Workspace::default();
        let text = export_project(&ws, 0).expect("serializes");
        assert!(text.contains('\n'));
        assert!(text.contains("\"polyhedrons\": []"));
    }

    #[test]
    fn test_file_name() {
        assert_eq!(export_file_name(42), "polyhedron_project_42.json");
    }
}
