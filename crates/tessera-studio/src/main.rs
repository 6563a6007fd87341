use anyhow::Result;
use log::info;

use tessera_engine::coords::{CornerRadius, EdgeWidths, Rect};
use tessera_engine::logging::{init_logging, LoggingConfig};
use tessera_engine::mesh::Mesh;
use tessera_engine::paint::Color;
use tessera_engine::render::{DispatchConfig, Dispatcher, Surface};
use tessera_engine::scene::{DrawList, ImageCmd, ImageId, TextCmd};
use tessera_engine::tessellate::{TessConfig, Tessellator};

const WIDTH: f32 = 820.0;
const HEIGHT: f32 = 560.0;

const BODY_FONT: u16 = 0;

fn main() -> Result<()> {
    init_logging(LoggingConfig::default());

    let tessellator = Tessellator::new(TessConfig::default())?;
    let mut dispatcher = Dispatcher::new(tessellator, DispatchConfig::default());

    let frame = sample_frame();
    let mut surface = LogSurface::default();

    for scale in [1.0, 2.0] {
        dispatcher.set_scale_factor(scale);
        let stats = dispatcher.dispatch(&mut surface, frame.commands())?;
        println!("  scale {scale}: {stats}");
    }

    Ok(())
}

/// A document viewer: header bar with menu buttons, a sidebar of
/// document entries (one selected) and a clipped content pane.
fn sample_frame() -> DrawList {
    let panel = Color::from_rgba8(90, 90, 90, 255);
    let button = Color::from_rgba8(140, 140, 140, 255);
    let accent = Color::from_rgba8(81, 162, 255, 255);

    let mut list = DrawList::new();

    // Window background.
    list.push_solid_rect(Rect::new(0.0, 0.0, WIDTH, HEIGHT), Color::from_rgba8(43, 41, 51, 255));

    // ── header ──
    let header = Rect::new(16.0, 16.0, WIDTH - 32.0, 60.0);
    list.push_rect(header, CornerRadius::all(5.0), panel);
    for (i, label) in ["File", "Edit", "Upload", "Media", "Support"].into_iter().enumerate() {
        let r = Rect::new(32.0 + i as f32 * 96.0, 28.0, 80.0, 36.0);
        list.push_rect(r, CornerRadius::all(5.0), button);
        list.push_text(Rect::new(r.x + 16.0, r.y + 8.0, r.width - 32.0, 20.0), label, BODY_FONT, 16.0, Color::white());
    }

    // ── sidebar ──
    let sidebar = Rect::new(16.0, 92.0, 250.0, HEIGHT - 108.0);
    list.push_rect(sidebar, CornerRadius::all(5.0), panel);
    for (i, title) in ["Squirrels", "Lorem Ipsum", "Vacuum Instructions", "Article 4", "Article 5"]
        .into_iter()
        .enumerate()
    {
        let r = Rect::new(32.0, 108.0 + i as f32 * 48.0, 218.0, 40.0);
        if i == 0 {
            list.push_rect(r, CornerRadius::all(5.0), Color::from_rgba8(120, 120, 120, 255));
            list.push_border(r, CornerRadius::all(5.0), EdgeWidths::all(4.0), accent);
        }
        list.push_text(Rect::new(r.x + 16.0, r.y + 8.0, r.width - 32.0, 24.0), title, BODY_FONT, 20.0, Color::white());
    }

    // ── content ──
    let content = Rect::new(282.0, 92.0, WIDTH - 298.0, HEIGHT - 108.0);
    list.push_rect(content, CornerRadius::all(5.0), panel);
    list.push_clip(content);
    list.push_text(
        Rect::new(content.x + 16.0, content.y + 16.0, content.width - 32.0, 28.0),
        "Squirrels",
        BODY_FONT,
        24.0,
        Color::white(),
    );
    list.push_image(Rect::new(content.x + 16.0, content.y + 60.0, 240.0, 180.0), ImageId(1));
    list.push_border(
        Rect::new(content.x + 12.0, content.y + 56.0, 248.0, 188.0),
        CornerRadius::new(12.0, 12.0, 0.0, 0.0),
        EdgeWidths::new(4.0, 1.0, 1.0, 1.0),
        Color::white(),
    );
    list.pop_clip();

    list
}

/// Surface that logs what it would draw.
#[derive(Debug, Default)]
struct LogSurface {
    clip_depth: usize,
}

impl Surface for LogSurface {
    fn draw_mesh(&mut self, mesh: &Mesh) -> Result<()> {
        info!(
            "mesh: {} triangles, {} vertices, {} bytes",
            mesh.triangle_count(),
            mesh.vertices.len(),
            mesh.vertex_bytes().len() + mesh.index_bytes().len()
        );
        Ok(())
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) -> Result<()> {
        info!("fill_rect: {rect:?} {:?}", color.to_rgba8());
        Ok(())
    }

    fn draw_text(&mut self, text: &TextCmd) -> Result<()> {
        info!("text: {:?} at ({}, {}) size {}", text.text, text.rect.x, text.rect.y, text.font_size);
        Ok(())
    }

    fn draw_image(&mut self, image: &ImageCmd) -> Result<()> {
        info!("image: {:?} into {:?}", image.image, image.rect);
        Ok(())
    }

    fn push_clip(&mut self, rect: Rect) -> Result<()> {
        self.clip_depth += 1;
        info!("push_clip: {rect:?} (depth {})", self.clip_depth);
        Ok(())
    }

    fn pop_clip(&mut self) -> Result<()> {
        anyhow::ensure!(self.clip_depth > 0, "pop_clip with no clip pushed");
        self.clip_depth -= 1;
        info!("pop_clip (depth {})", self.clip_depth);
        Ok(())
    }
}
