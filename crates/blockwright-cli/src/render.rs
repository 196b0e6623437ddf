use blockwright_core::color::Rgb;
use blockwright_core::types::GridCoord;
use blockwright_core::view::{ViewState, Viewport};
use blockwright_grid::Polyhedron;
use blockwright_persist::ProjectData;
use blockwright_render::{Renderer, Scene};
use glam::{IVec3, Vec2};

use crate::args::RenderArgs;
use crate::error::CliError;
use crate::svg::SvgCanvas;

/// Scene for one polyhedron on its floor, or for all of them in a row
/// along x, one footprint apart.
pub fn build_scene(data: &ProjectData, poly: Option<&str>) -> Result<Scene, CliError> {
    if let Some(id) = poly {
        let poly = data
            .polyhedrons
            .iter()
            .find(|p| p.id == id)
            .ok_or_else(|| CliError::UnknownPolyhedron(id.to_string()))?;
        let mut scene = Scene::from_cells(&poly.cubes);
        scene.floor = Some(data.config);
        return Ok(scene);
    }

    if data.polyhedrons.is_empty() {
        return Err(CliError::NothingToRender);
    }
    let spacing = data.config.footprint() as i32 + 1;
    let count = data.polyhedrons.len() as i32;
    let first = -((count - 1) * spacing) / 2;
    let cells = data
        .polyhedrons
        .iter()
        .enumerate()
        .flat_map(|(i, poly)| offset_cells(poly, IVec3::new(first + i as i32 * spacing, 0, 0)))
        .collect();
    Ok(Scene {
        cells,
        ..Default::default()
    })
}

fn offset_cells(poly: &Polyhedron, offset: IVec3) -> impl Iterator<Item = (GridCoord, Rgb)> + '_ {
    poly.cubes.iter().map(move |c| (c.coord() + offset, c.color.rgb()))
}

/// Draw the requested scene into an SVG document.
pub fn render_svg(data: &ProjectData, args: &RenderArgs) -> Result<String, CliError> {
    let scene = build_scene(data, args.poly.as_deref())?;
    let view = ViewState::new(args.yaw, args.pitch, args.zoom, Vec2::ZERO);
    let viewport = Viewport::new(args.width as f32, args.height as f32);
    let mut canvas = SvgCanvas::new(args.width, args.height);
    Renderer::default().draw(&mut canvas, &view, viewport, &scene);
    log::info!("render: {} cubes at {}x{}", scene.cells.len(), args.width, args.height);
    Ok(canvas.finish())
}

#[cfg(test)]
mod tests {
    use super::*;
    use blockwright_core::{ColorTag, VoxelCell};
    use blockwright_grid::GridConfig;
    use std::path::PathBuf;

    fn data(polys: usize) -> ProjectData {
        let color = ColorTag::parse("#4ecdc4").expect("valid");
        ProjectData {
            config: GridConfig::new(4, 3),
            polyhedrons: (1..=polys)
                .map(|n| Polyhedron {
                    id: format!("poly{n}"),
                    name: format!("Polyhedron {n}"),
                    cubes: vec![VoxelCell::new(IVec3::ZERO, color.clone())],
                    created_at: 0,
                })
                .collect(),
            created_at: None,
            warnings: vec![],
        }
    }

    fn args(poly: Option<&str>) -> RenderArgs {
        RenderArgs {
            input: PathBuf::from("in.json"),
            output: PathBuf::from("out.svg"),
            poly: poly.map(String::from),
            yaw: 45.0,
            pitch: 30.0,
            zoom: 1.0,
            width: 400,
            height: 300,
        }
    }

    #[test]
    fn test_single_polyhedron_with_floor() {
        let scene = build_scene(&data(2), Some("poly2")).expect("exists");
        assert_eq!(scene.cells.len(), 1);
        assert_eq!(scene.floor, Some(GridConfig::new(4, 3)));
        assert!(matches!(
            build_scene(&data(2), Some("poly9")),
            Err(CliError::UnknownPolyhedron(_))
        ));
    }

    #[test]
    fn test_all_polyhedrons_side_by_side() {
        let scene = build_scene(&data(3), None).expect("non-empty");
        let xs: Vec<i32> = scene.cells.iter().map(|(c, _)| c.x).collect();
        assert_eq!(xs, vec![-5, 0, 5]);
        assert!(scene.floor.is_none());
        assert!(matches!(build_scene(&data(0), None), Err(CliError::NothingToRender)));
    }

    #[test]
    fn test_svg_has_faces_and_floor() {
        let svg = render_svg(&data(1), &args(Some("poly1"))).expect("renders");
        // 6 faces, each filled and outlined.
        assert_eq!(svg.matches("<polygon").count(), 12);
        // 4x4 footprint: 5 lines each way.
        assert_eq!(svg.matches("<line").count(), 10);
        assert!(svg.contains("fill=\"#f0f0f0\""));
    }
}
