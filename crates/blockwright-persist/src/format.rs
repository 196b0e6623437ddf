use blockwright_core::constants::{DEFAULT_FOOTPRINT, DEFAULT_GRID_HEIGHT};
use blockwright_core::types::VoxelCell;
use blockwright_grid::Polyhedron;
use serde::{Deserialize, Serialize};

/// Current project file version.
pub const FORMAT_VERSION: u32 = 1;

/// File extension offered for downloads and accepted by the upload picker.
pub const FILE_EXTENSION: &str = ".json";

/// MIME type of an exported project.
pub const MIME_TYPE: &str = "application/json";

/// A creation time as found in a project file. Files written by this crate
/// use Unix milliseconds; older files may carry a date string instead.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Timestamp {
    Millis(u64),
    Text(String),
}

impl Default for Timestamp {
    fn default() -> Self {
        Timestamp::Millis(0)
    }
}

impl Timestamp {
    pub fn as_millis(&self) -> Option<u64> {
        match self {
            Timestamp::Millis(ms) => Some(*ms),
            Timestamp::Text(_) => None,
        }
    }
}

/// One polyhedron as stored on disk.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PolyhedronRecord {
    pub id: String,
    pub name: String,
    pub cubes: Vec<VoxelCell>,
    #[serde(default)]
    pub created_at: Timestamp,
}

impl From<&Polyhedron> for PolyhedronRecord {
    fn from(poly: &Polyhedron) -> Self {
        Self {
            id: poly.id.clone(),
            name: poly.name.clone(),
            cubes: poly.cubes.clone(),
            created_at: Timestamp::Millis(poly.created_at),
        }
    }
}

impl PolyhedronRecord {
    pub fn into_polyhedron(self) -> Polyhedron {
        Polyhedron {
            created_at: self.created_at.as_millis().unwrap_or(0),
            id: self.id,
            name: self.name,
            cubes: self.cubes,
        }
    }
}

/// Top-level project file. Missing fields fall back to the editor defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectFile {
    #[serde(default = "default_version")]
    pub version: u32,
    #[serde(default)]
    pub polyhedrons: Vec<PolyhedronRecord>,
    #[serde(default = "default_grid_size")]
    pub grid_size: u32,
    #[serde(default = "default_grid_height")]
    pub grid_height: u32,
    #[serde(default)]
    pub created_at: Timestamp,
}

fn default_version() -> u32 {
    FORMAT_VERSION
}

fn default_grid_size() -> u32 {
    DEFAULT_FOOTPRINT
}

fn default_grid_height() -> u32 {
    DEFAULT_GRID_HEIGHT
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minimal_file_uses_defaults() {
        let file: ProjectFile = serde_json::from_str("{}").expect("empty object parses");
        assert_eq!(file.version, FORMAT_VERSION);
        assert_eq!(file.grid_size, DEFAULT_FOOTPRINT);
        assert_eq!(file.grid_height, DEFAULT_GRID_HEIGHT);
        assert!(file.polyhedrons.is_empty());
    }

    #[test]
    fn test_timestamp_accepts_number_or_string() {
        let n: Timestamp = serde_json::from_str("1700000000000").expect("number");
        assert_eq!(n.as_millis(), Some(1_700_000_000_000));
        let s: Timestamp = serde_json::from_str("\"2024-01-01T00:00:00.000Z\"").expect("string");
        assert_eq!(s.as_millis(), None);
    }

    #[test]
    fn test_unknown_fields_ignored() {
        let json = r##"{
            "polyhedrons": [{
                "id": "poly1", "name": "A", "position": {"x": 1, "y": 2},
                "cubes": [{"x": 0, "y": 0, "z": 0, "color": "#ff0000"}]
            }],
            "gridSize": 8
        }"##;
        let file: ProjectFile = serde_json::from_str(json).expect("extra fields are fine");
        assert_eq!(file.polyhedrons[0].cubes.len(), 1);
        assert_eq!(file.grid_size, 8);
    }
}
