use blockwright_grid::Polyhedron;
use blockwright_persist::ProjectData;

/// Cube count, height and footprint of one polyhedron.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PolyStats {
    pub cubes: usize,
    /// Tallest column, in cubes.
    pub height: i32,
    /// Extent along x and z, in cells.
    pub extent: (i32, i32),
}

impl PolyStats {
    pub fn of(poly: &Polyhedron) -> Self {
        let coords = poly.cubes.iter().map(|c| c.coord());
        let (min, max) = coords.fold(None, |acc, c| match acc {
            None => Some((c, c)),
            Some((lo, hi)) => Some((lo.min(c), hi.max(c))),
        })
        .map(|(lo, hi)| (lo, hi + 1))
        .unwrap_or_default();
        Self {
            cubes: poly.cubes.len(),
            height: max.y.max(0),
            extent: (max.x - min.x, max.z - min.z),
        }
    }
}

/// Format a project as a markdown summary table.
pub fn format_markdown(data: &ProjectData) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "Grid: {}x{} footprint, height {}\n",
        data.config.footprint(),
        data.config.footprint(),
        data.config.max_height()
    ));
    if let Some(ms) = data.created_at {
        out.push_str(&format!("Exported at: {ms} (Unix ms)\n"));
    }
    out.push_str(&format!("Polyhedrons: {}\n\n", data.polyhedrons.len()));

    if data.polyhedrons.is_empty() {
        return out;
    }

    out.push_str("| Id | Name | Cubes | Height | Extent (x*z) | Created (Unix ms) |\n");
    out.push_str("|----|------|-------|--------|--------------|-------------------|\n");
    for poly in &data.polyhedrons {
        let stats = PolyStats::of(poly);
        out.push_str(&format!(
            "| {} | {} | {} | {} | {}x{} | {} |\n",
            poly.id, poly.name, stats.cubes, stats.height, stats.extent.0, stats.extent.1, poly.created_at,
        ));
    }

    for warning in &data.warnings {
        out.push_str(&format!("\nwarning: {warning}"));
    }
    out
}
