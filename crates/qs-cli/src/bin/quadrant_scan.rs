use std::fs;
use std::io::Cursor;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use clap::Parser;
use image::{ImageFormat, Rgba, RgbaImage};
use log::info;
use qs_core::{Axis, Image, ImageView, Rect, luminance_rgba, profile};
use qs_edge::{AxisEdges, EdgeConfig, compose_regions, detect_edges};
use serde::{Deserialize, Serialize};

const OUTLINE: Rgba<u8> = Rgba([0, 255, 0, 255]);

#[derive(Parser, Debug)]
#[command(name = "quadrant_scan")]
#[command(about = "Locate a quadrant-split bounding box in a scanned image")]
struct Cli {
    /// Input raster image (TIFF, PNG, ...)
    input: PathBuf,

    /// Output PNG with the detected regions outlined
    #[arg(long, default_value = "test.png")]
    out: PathBuf,

    /// JSON file with scan parameters; flags below override its values
    #[arg(long)]
    config: Option<PathBuf>,

    /// Column sampled for the vertical boundaries
    #[arg(long)]
    column: Option<usize>,

    /// Row sampled for the horizontal boundaries
    #[arg(long)]
    row: Option<usize>,

    #[arg(long)]
    block_size: Option<usize>,

    #[arg(long)]
    search_limit: Option<usize>,

    #[arg(long, allow_negative_numbers = true)]
    margin: Option<isize>,

    /// Write a JSON report with edges, transitions and regions
    #[arg(long)]
    report: Option<PathBuf>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
struct ScanConfig {
    column: usize,
    row: usize,
    block_size: usize,
    search_limit: usize,
    margin: isize,
}

impl Default for ScanConfig {
    fn default() -> Self {
        let edge = EdgeConfig::default();
        Self {
            column: 140,
            row: 145,
            block_size: edge.block_size,
            search_limit: edge.search_limit,
            margin: edge.margin,
        }
    }
}

impl ScanConfig {
    fn edge(&self) -> EdgeConfig {
        EdgeConfig {
            block_size: self.block_size,
            search_limit: self.search_limit,
            margin: self.margin,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
struct TransitionDto {
    peak_index: usize,
    peak_value: f32,
    block_start: usize,
    anchor: usize,
    lowest: usize,
}

#[derive(Debug, Clone, Serialize)]
struct AxisDto {
    axis: &'static str,
    index: usize,
    edges: [isize; 4],
    transitions: Vec<TransitionDto>,
}

#[derive(Debug, Clone, Serialize)]
struct RegionDto {
    min: [isize; 2],
    max: [isize; 2],
    size: [isize; 2],
}

#[derive(Debug, Clone, Serialize)]
struct ReportDto {
    input: String,
    width: usize,
    height: usize,
    config: ScanConfig,
    columns: AxisDto,
    rows: AxisDto,
    regions: Vec<RegionDto>,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    let cfg = resolve_config(&cli)?;
    let edge_cfg = cfg.edge();

    let (rgba, gray) = load_input(&cli.input)?;
    info!(
        "loaded {} ({}x{})",
        cli.input.display(),
        gray.width(),
        gray.height()
    );

    let view = gray.as_view();
    let (columns, rows) = rayon::join(
        || detect_axis(&view, Axis::Column, cfg.column, &edge_cfg),
        || detect_axis(&view, Axis::Row, cfg.row, &edge_cfg),
    );
    let (columns, rows) = (columns?, rows?);

    println!("{}", join_edges(&columns.edges));
    println!("{}", join_edges(&rows.edges));

    let regions = compose_regions(&columns, &rows);
    let sizes: Vec<String> = regions.iter().map(|r| r.size().to_string()).collect();
    println!("{}", sizes.join(" "));

    let mut overlay = rgba;
    for region in &regions {
        draw_rect_outline(&mut overlay, region, OUTLINE);
    }

    let mut outputs = vec![(cli.out.clone(), encode_png(&overlay)?)];
    if let Some(path) = &cli.report {
        let report = ReportDto {
            input: cli.input.display().to_string(),
            width: gray.width(),
            height: gray.height(),
            config: cfg.clone(),
            columns: axis_dto(Axis::Column, cfg.column, &columns),
            rows: axis_dto(Axis::Row, cfg.row, &rows),
            regions: regions.iter().map(region_dto).collect(),
        };
        let bytes = serde_json::to_vec_pretty(&report).context("serializing report json")?;
        outputs.push((path.clone(), bytes));
    }
    write_outputs(&outputs)?;

    Ok(())
}

fn resolve_config(cli: &Cli) -> Result<ScanConfig> {
    let mut cfg = match &cli.config {
        Some(path) => read_json(path)
            .with_context(|| format!("reading scan config {}", path.display()))?,
        None => ScanConfig::default(),
    };

    if let Some(v) = cli.column {
        cfg.column = v;
    }
    if let Some(v) = cli.row {
        cfg.row = v;
    }
    if let Some(v) = cli.block_size {
        cfg.block_size = v;
    }
    if let Some(v) = cli.search_limit {
        cfg.search_limit = v;
    }
    if let Some(v) = cli.margin {
        cfg.margin = v;
    }

    if let Err(err) = cfg.edge().validate() {
        bail!("invalid scan config: {err}.");
    }
    Ok(cfg)
}

fn load_input(path: &Path) -> Result<(RgbaImage, Image<f32>)> {
    let dyn_img =
        image::open(path).with_context(|| format!("opening input image {}", path.display()))?;

    let rgba16 = dyn_img.to_rgba16();
    let (w, h) = rgba16.dimensions();
    let data = rgba16
        .pixels()
        .map(|px| luminance_rgba(px[0], px[1], px[2], px[3]))
        .collect();
    let gray = Image::from_vec(w as usize, h as usize, data)
        .with_context(|| format!("constructing grayscale image from {}", path.display()))?;

    Ok((dyn_img.to_rgba8(), gray))
}

fn detect_axis(
    view: &ImageView<'_, f32>,
    axis: Axis,
    index: usize,
    cfg: &EdgeConfig,
) -> Result<AxisEdges> {
    let points = profile(view, axis, index)
        .with_context(|| format!("sampling {axis} {index}"))?;
    detect_edges(&points, cfg).with_context(|| format!("detecting edges along {axis} {index}"))
}

fn join_edges(edges: &[isize; 4]) -> String {
    edges
        .iter()
        .map(|e| e.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Outlines `rect` the way a pixel grid does: the top and left sides start
/// at `min`, the bottom and right sides sit on `max`.
fn draw_rect_outline(img: &mut RgbaImage, rect: &Rect, color: Rgba<u8>) {
    let (w, h) = (img.width() as isize, img.height() as isize);
    for x in rect.min.x.max(0)..rect.max.x.min(w) {
        put_pixel_checked(img, x, rect.min.y, color);
        put_pixel_checked(img, x, rect.max.y, color);
    }
    for y in rect.min.y.max(0)..rect.max.y.min(h) {
        put_pixel_checked(img, rect.min.x, y, color);
        put_pixel_checked(img, rect.max.x, y, color);
    }
}

fn put_pixel_checked(img: &mut RgbaImage, x: isize, y: isize, color: Rgba<u8>) {
    let (Ok(ux), Ok(uy)) = (u32::try_from(x), u32::try_from(y)) else {
        return;
    };
    if ux >= img.width() || uy >= img.height() {
        return;
    }
    img.put_pixel(ux, uy, color);
}

fn axis_dto(axis: Axis, index: usize, found: &AxisEdges) -> AxisDto {
    let transitions = found
        .transitions
        .iter()
        .map(|t| TransitionDto {
            peak_index: t.peak.index,
            peak_value: t.peak.value,
            block_start: t.block_start,
            anchor: t.anchor,
            lowest: t.lowest,
        })
        .collect();

    AxisDto {
        axis: match axis {
            Axis::Column => "column",
            Axis::Row => "row",
        },
        index,
        edges: found.edges,
        transitions,
    }
}

fn region_dto(rect: &Rect) -> RegionDto {
    RegionDto {
        min: [rect.min.x, rect.min.y],
        max: [rect.max.x, rect.max.y],
        size: [rect.width(), rect.height()],
    }
}

fn encode_png(img: &RgbaImage) -> Result<Vec<u8>> {
    let mut buf = Vec::new();
    img.write_to(&mut Cursor::new(&mut buf), ImageFormat::Png)
        .context("encoding overlay png")?;
    Ok(buf)
}

/// Writes every file or none: on failure the files already written are
/// removed again.
fn write_outputs(outputs: &[(PathBuf, Vec<u8>)]) -> Result<()> {
    for (i, (path, bytes)) in outputs.iter().enumerate() {
        if let Err(err) = fs::write(path, bytes) {
            for (done, _) in &outputs[..i] {
                let _ = fs::remove_file(done);
            }
            return Err(err).with_context(|| format!("writing {}", path.display()));
        }
        info!("wrote {}", path.display());
    }
    Ok(())
}

fn read_json<T: for<'de> Deserialize<'de>>(path: &Path) -> Result<T> {
    let data = fs::read(path).with_context(|| format!("reading {}", path.display()))?;
    serde_json::from_slice(&data).with_context(|| format!("parsing json {}", path.display()))
}
