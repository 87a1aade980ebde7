//! End-to-end tests: grid in, SVG document out

use pretty_assertions::assert_eq;
use rust_decimal_macros::dec;

use qrsvg::drawers::CornerRadius;
use qrsvg::pipeline::draw_modules;
use qrsvg::{
    render_grid, render_with_config, Drawer, DrawerStyle, Drawn, GridError, ModuleGrid,
    OutputMode, RenderConfig, RenderContext, RenderError, Settings, StyleKind, SvgConfig, Sweep,
    Unit,
};

/// Compact pixel-unit documents without an XML declaration
fn compact(style: DrawerStyle, mode: OutputMode) -> RenderConfig {
    RenderConfig::new()
        .with_box_size(dec!(10))
        .with_border(0)
        .with_style(style)
        .with_svg(
            SvgConfig::new()
                .with_unit(Unit::Px)
                .with_mode(mode)
                .with_standalone(false)
                .with_pretty_print(false),
        )
}

fn center_only() -> ModuleGrid {
    ModuleGrid::from_text("...\n.#.\n...\n").unwrap()
}

/// Body of the `d` attribute of the compound path
fn path_data(svg: &str) -> &str {
    let start = svg.find(r#" d=""#).expect("document has a path") + 4;
    let end = svg[start..].find('"').unwrap();
    &svg[start..start + end]
}

#[test]
fn test_center_square_covers_its_box() {
    let config = compact(DrawerStyle::new(StyleKind::Square), OutputMode::Elements);
    let svg = render_grid(&center_only(), &config).unwrap();
    assert_eq!(
        svg,
        concat!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" version="1.1" width="30" height="30" viewBox="0 0 30 30">"#,
            r##"<rect x="10" y="10" width="10" height="10" fill="#000000"/>"##,
            "</svg>"
        )
    );
}

#[test]
fn test_center_circle() {
    let config = compact(DrawerStyle::new(StyleKind::Circle), OutputMode::Elements);
    let svg = render_grid(&center_only(), &config).unwrap();
    assert!(svg.contains(r##"<circle cx="15" cy="15" r="5" fill="#000000"/>"##));
    assert_eq!(svg.matches("<circle").count(), 1);
}

#[test]
fn test_center_rounded_has_four_round_corners() {
    let config = compact(DrawerStyle::new(StyleKind::Rounded), OutputMode::Path);
    let svg = render_grid(&center_only(), &config).unwrap();
    assert_eq!(
        path_data(&svg),
        "M12.5,10H17.5A2.5,2.5 0 0 1 20,12.5V17.5A2.5,2.5 0 0 1 17.5,20H12.5A2.5,2.5 0 0 1 10,17.5V12.5A2.5,2.5 0 0 1 12.5,10Z"
    );
}

#[test]
fn test_horizontal_bar_run() {
    let grid = ModuleGrid::from_text("###\n").unwrap();
    let config = compact(DrawerStyle::new(StyleKind::HorizontalBars), OutputMode::Path);
    let svg = render_grid(&grid, &config).unwrap();
    assert_eq!(
        path_data(&svg),
        concat!(
            "M4,1H10V9H4A4,4 0 0 1 0,5A4,4 0 0 1 4,1Z",
            "M10,1H20V9H10Z",
            "M20,1H26A4,4 0 0 1 30,5A4,4 0 0 1 26,9H20Z"
        )
    );
}

#[test]
fn test_vertical_bar_run() {
    let grid = ModuleGrid::from_text("#\n#\n").unwrap();
    let style = DrawerStyle::new(StyleKind::VerticalBars).with_shrink(dec!(1));
    let svg = render_grid(&grid, &compact(style, OutputMode::Path)).unwrap();
    assert_eq!(
        path_data(&svg),
        concat!(
            "M5,0A5,5 0 0 1 10,5V10H0V5A5,5 0 0 1 5,0Z",
            "M0,10H10V15A5,5 0 0 1 5,20A5,5 0 0 1 0,15Z"
        )
    );
}

#[test]
fn test_rounded_block_rounds_outer_corners_only() {
    let grid = ModuleGrid::from_text("##\n##\n").unwrap();
    let style = DrawerStyle::new(StyleKind::Rounded).with_radius(dec!(3));
    let svg = render_grid(&grid, &compact(style, OutputMode::Elements)).unwrap();

    let paths: Vec<&str> = svg
        .split("<path d=\"")
        .skip(1)
        .map(|rest| &rest[..rest.find('"').unwrap()])
        .collect();
    assert_eq!(
        paths,
        vec![
            "M3,0H10V10H0V3Q0,0 3,0Z",
            "M10,0H17Q20,0 20,3V10H10Z",
            "M0,10H10V20H3Q0,20 0,17Z",
            "M10,10H20V17Q20,20 17,20H10Z",
        ]
    );
}

#[test]
fn test_sequential_and_parallel_documents_match() {
    let text: String = (0..33)
        .map(|r| {
            let mut row: String = (0..33)
                .map(|c| if (r * r + c * 5) % 7 < 3 { '#' } else { '.' })
                .collect();
            row.push('\n');
            row
        })
        .collect();
    let grid = ModuleGrid::from_text(&text).unwrap();

    for kind in StyleKind::ALL {
        for mode in [OutputMode::Elements, OutputMode::Path] {
            let config = RenderConfig::new()
                .with_box_size(dec!(2.7))
                .with_style(DrawerStyle::new(kind))
                .with_mode(mode);
            let sequential = render_grid(&grid, &config.clone().with_sweep(Sweep::Sequential)).unwrap();
            let parallel = render_grid(&grid, &config.with_sweep(Sweep::Parallel)).unwrap();
            assert_eq!(sequential, parallel, "{kind} in {mode} mode");
        }
    }
}

#[test]
fn test_fused_runs_meet_exactly_at_cell_edges() {
    // A long row with an awkward box size: each bar must start exactly where
    // the previous one ended.
    let grid = ModuleGrid::new(vec![vec![true; 177]]).unwrap();
    let context = RenderContext::try_new(dec!(3.3), 4).unwrap();
    let drawer = Drawer::configure(
        &DrawerStyle::new(StyleKind::HorizontalBars),
        &context,
        OutputMode::Path,
    )
    .unwrap();

    let fragments: Vec<_> = draw_modules(&grid, &context, &drawer, Sweep::Parallel)
        .into_iter()
        .map(|d| match d {
            Drawn::Fragment(path) => path,
            other => panic!("expected a fragment, got {:?}", other),
        })
        .collect();
    assert_eq!(fragments.len(), 177);

    for (col, pair) in fragments.windows(2).enumerate() {
        let edge = dec!(3.3) * rust_decimal::Decimal::from(col + 1 + 4);
        let starts_at = match &pair[1].segments[0] {
            qrsvg::renderer::PathSegment::MoveTo(p) => p.x,
            other => panic!("fragment starts with {:?}", other),
        };
        assert_eq!(starts_at, edge, "column {}", col + 1);
    }
}

#[test]
fn test_default_document_is_in_millimetres() {
    let svg = render_with_config("#\n", &RenderConfig::new()).unwrap();
    assert!(svg.starts_with(r#"<?xml version="1.0" encoding="UTF-8"?>"#));
    assert!(svg.contains(r#"width="9mm" height="9mm" viewBox="0 0 9 9""#));
}

#[test]
fn test_settings_drive_the_render() {
    let settings = Settings::from_str(
        r##"
box_size = 10
border = 1
unit = "px"
mode = "path"
pretty_print = false
standalone = false
background = "#fafafa"

[style]
kind = "gapped-square"
fill = "#336699"
"##,
    )
    .unwrap();
    let config = settings.apply(RenderConfig::new()).unwrap();
    let svg = render_with_config("#\n", &config).unwrap();
    assert_eq!(
        svg,
        concat!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" version="1.1" width="30" height="30" viewBox="0 0 30 30">"#,
            r##"<rect x="0" y="0" width="100%" height="100%" fill="#fafafa"/>"##,
            r##"<path id="qr-path" d="M11,11H19V19H11Z" fill="#336699" fill-opacity="1" fill-rule="nonzero" stroke="none"/>"##,
            "</svg>"
        )
    );
}

#[test]
fn test_clamped_radius_still_renders() {
    let style = DrawerStyle::new(StyleKind::Rounded).with_radius(dec!(50));
    let svg = render_grid(&center_only(), &compact(style, OutputMode::Path)).unwrap();
    assert_eq!(
        path_data(&svg),
        "M15,10A5,5 0 0 1 20,15A5,5 0 0 1 15,20A5,5 0 0 1 10,15A5,5 0 0 1 15,10Z"
    );
}

#[test]
fn test_invalid_parameters_are_rejected_before_drawing() {
    let negative = DrawerStyle {
        radius: Some(CornerRadius::Ratio(dec!(-1))),
        ..DrawerStyle::new(StyleKind::Rounded)
    };
    assert!(matches!(
        render_grid(&center_only(), &compact(negative, OutputMode::Path)),
        Err(RenderError::Config(_))
    ));

    let too_big = DrawerStyle::new(StyleKind::Circle).with_size_ratio(dec!(1.5));
    assert!(matches!(
        render_grid(&center_only(), &compact(too_big, OutputMode::Elements)),
        Err(RenderError::Config(_))
    ));
}

#[test]
fn test_grid_error_report_names_the_file() {
    let source = "##\n#%\n";
    let Err(RenderError::Grid(err)) = render_with_config(source, &RenderConfig::new()) else {
        panic!("expected a grid error");
    };
    assert_eq!(err, GridError::invalid_cell(2, 2, '%', 4..5));
    let report = err.format(source, "symbol.txt");
    assert!(report.contains("symbol.txt"));
}
