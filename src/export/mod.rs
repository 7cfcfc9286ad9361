//! Screen export module.
//!
//! A result screen is captured by rendering its content into an off-screen
//! buffer the size of the terminal and rasterizing every cell into a fixed
//! block of pixels. The bitmap is then handed to a `PhotoLibrary`.

mod error;

pub use error::SaveError;

use crate::screening::content::ScreenContent;
use crate::ui::widgets::content::framed_paragraph;
use crate::ui::Theme;
use chrono::{DateTime, Local};
use embedded_graphics::{
    draw_target::DrawTarget,
    geometry::{OriginDimensions, Point, Size},
    mono_font::{
        ascii::{FONT_8X13, FONT_8X13_BOLD, FONT_8X13_ITALIC},
        MonoTextStyleBuilder,
    },
    pixelcolor::{Rgb888, RgbColor},
    text::{Baseline, Text},
    Drawable, Pixel,
};
use image::{ImageFormat, Rgba, RgbaImage};
use log::*;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier},
    widgets::Widget,
};
use std::{convert::Infallible, fs, path::PathBuf};

/// Pixel size of one terminal cell in an exported image.
///
pub const CELL_WIDTH: u32 = 8;
pub const CELL_HEIGHT: u32 = 16;

/// Row inside a cell where the 13 px glyph starts.
///
const GLYPH_TOP: u32 = 1;

/// Capture size used when the terminal size is unknown.
///
const FALLBACK_COLUMNS: u16 = 80;
const FALLBACK_ROWS: u16 = 24;

/// A captured screen.
///
#[derive(Debug, Clone, PartialEq)]
pub struct Bitmap {
    image: RgbaImage,
}

impl Bitmap {
    pub fn new(image: RgbaImage) -> Self {
        Bitmap { image }
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    pub fn is_empty(&self) -> bool {
        self.width() == 0 || self.height() == 0
    }

    pub fn pixel(&self, x: u32, y: u32) -> [u8; 4] {
        self.image.get_pixel(x, y).0
    }

    pub fn as_image(&self) -> &RgbaImage {
        &self.image
    }
}

/// Captures whatever is currently displayed.
///
pub trait Renderer {
    fn capture_current_view(&self) -> Bitmap;
}

/// Stores captured screens, returning where the image ended up.
///
pub trait PhotoLibrary {
    fn save(&self, bitmap: &Bitmap) -> Result<PathBuf, SaveError>;
}

/// Renders screen content off-screen at a fixed terminal size.
///
pub struct ViewRenderer<'a> {
    content: &'a ScreenContent,
    theme: &'a Theme,
    area: Rect,
}

impl<'a> ViewRenderer<'a> {
    pub fn new(content: &'a ScreenContent, theme: &'a Theme, size: Rect) -> Self {
        let (width, height) = if size.width == 0 || size.height == 0 {
            (FALLBACK_COLUMNS, FALLBACK_ROWS)
        } else {
            (size.width, size.height)
        };
        ViewRenderer {
            content,
            theme,
            area: Rect::new(0, 0, width, height),
        }
    }

    /// Render the content into a fresh cell buffer.
    ///
    pub fn buffer(&self) -> Buffer {
        let mut buffer = Buffer::empty(self.area);
        framed_paragraph(self.content, self.theme).render(self.area, &mut buffer);
        buffer
    }
}

impl Renderer for ViewRenderer<'_> {
    fn capture_current_view(&self) -> Bitmap {
        rasterize(&self.buffer(), self.theme)
    }
}

/// Turn a cell buffer into pixels, one `CELL_WIDTH` x `CELL_HEIGHT` block per
/// cell. Box-drawing cells become strokes; other symbols are drawn with an
/// 8x13 monospace font in the cell's foreground color.
///
pub fn rasterize(buffer: &Buffer, theme: &Theme) -> Bitmap {
    let area = buffer.area;
    let background = rgba(theme.background.to_rgb());
    let mut image = RgbaImage::from_pixel(
        u32::from(area.width) * CELL_WIDTH,
        u32::from(area.height) * CELL_HEIGHT,
        background,
    );

    for row in 0..area.height {
        for column in 0..area.width {
            let cell = buffer.get(area.x + column, area.y + row);
            let left = u32::from(column) * CELL_WIDTH;
            let top = u32::from(row) * CELL_HEIGHT;
            let bg = resolve_color(cell.bg, theme.background.to_rgb());
            let fg = resolve_color(cell.fg, theme.text.to_rgb());

            fill(&mut image, left, top, CELL_WIDTH, CELL_HEIGHT, rgba(bg));
            if !draw_box_symbol(&mut image, cell.symbol(), left, top, rgba(fg)) {
                draw_text_symbol(&mut image, cell.symbol(), cell.modifier, left, top, fg);
            }
        }
    }

    Bitmap::new(image)
}

/// Draw target writing straight into an RGBA image.
///
struct Canvas<'a> {
    image: &'a mut RgbaImage,
}

impl OriginDimensions for Canvas<'_> {
    fn size(&self) -> Size {
        Size::new(self.image.width(), self.image.height())
    }
}

impl DrawTarget for Canvas<'_> {
    type Color = Rgb888;
    type Error = Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(point, color) in pixels {
            let (Ok(x), Ok(y)) = (u32::try_from(point.x), u32::try_from(point.y)) else {
                continue;
            };
            if x < self.image.width() && y < self.image.height() {
                self.image
                    .put_pixel(x, y, Rgba([color.r(), color.g(), color.b(), 255]));
            }
        }
        Ok(())
    }
}

fn draw_text_symbol(
    image: &mut RgbaImage,
    symbol: &str,
    modifier: Modifier,
    left: u32,
    top: u32,
    [r, g, b]: [u8; 3],
) {
    if symbol.trim().is_empty() {
        return;
    }
    let font = if modifier.contains(Modifier::BOLD) {
        &FONT_8X13_BOLD
    } else if modifier.contains(Modifier::ITALIC) {
        &FONT_8X13_ITALIC
    } else {
        &FONT_8X13
    };
    let builder = MonoTextStyleBuilder::new()
        .font(font)
        .text_color(Rgb888::new(r, g, b));
    let style = if modifier.contains(Modifier::UNDERLINED) {
        builder.underline().build()
    } else {
        builder.build()
    };
    let origin = Point::new(left as i32, (top + GLYPH_TOP) as i32);
    let mut canvas = Canvas { image };
    Text::with_baseline(symbol, origin, style, Baseline::Top)
        .draw(&mut canvas)
        .ok();
}

/// Draw box-drawing and bullet symbols as strokes. Returns false for any
/// other symbol.
///
fn draw_box_symbol(image: &mut RgbaImage, symbol: &str, left: u32, top: u32, color: Rgba<u8>) -> bool {
    let mid_x = left + CELL_WIDTH / 2;
    let mid_y = top + CELL_HEIGHT / 2;
    let (up, down, leftward, rightward) = match symbol {
        "─" => (false, false, true, true),
        "│" => (true, true, false, false),
        "┌" => (false, true, false, true),
        "┐" => (false, true, true, false),
        "└" => (true, false, false, true),
        "┘" => (true, false, true, false),
        "•" => {
            fill(image, mid_x - 1, mid_y - 1, 3, 3, color);
            return true;
        }
        _ => return false,
    };
    if up {
        fill(image, mid_x, top, 1, CELL_HEIGHT / 2 + 1, color);
    }
    if down {
        fill(image, mid_x, mid_y, 1, CELL_HEIGHT - CELL_HEIGHT / 2, color);
    }
    if leftward {
        fill(image, left, mid_y, CELL_WIDTH / 2 + 1, 1, color);
    }
    if rightward {
        fill(image, mid_x, mid_y, CELL_WIDTH - CELL_WIDTH / 2, 1, color);
    }
    true
}

fn fill(image: &mut RgbaImage, left: u32, top: u32, width: u32, height: u32, color: Rgba<u8>) {
    let right = (left + width).min(image.width());
    let bottom = (top + height).min(image.height());
    for y in top..bottom {
        for x in left..right {
            image.put_pixel(x, y, color);
        }
    }
}

fn rgba([r, g, b]: [u8; 3]) -> Rgba<u8> {
    Rgba([r, g, b, 255])
}

/// Map a terminal color to RGB, using `default` for the terminal's own color.
///
fn resolve_color(color: Color, default: [u8; 3]) -> [u8; 3] {
    match color {
        Color::Rgb(r, g, b) => [r, g, b],
        Color::Black => [0, 0, 0],
        Color::White => [255, 255, 255],
        Color::Gray => [229, 229, 229],
        Color::DarkGray => [102, 102, 102],
        Color::Red => [205, 49, 49],
        Color::Green => [13, 188, 121],
        Color::Blue => [36, 114, 200],
        _ => default,
    }
}

/// Photo library backed by a directory of PNG files.
///
pub struct DirectoryLibrary {
    directory: PathBuf,
}

impl DirectoryLibrary {
    pub fn new(directory: PathBuf) -> Self {
        DirectoryLibrary { directory }
    }

    pub fn directory(&self) -> &PathBuf {
        &self.directory
    }

    fn file_name(at: DateTime<Local>) -> String {
        format!("screening-{}.png", at.format("%Y%m%d-%H%M%S%3f"))
    }
}

impl PhotoLibrary for DirectoryLibrary {
    fn save(&self, bitmap: &Bitmap) -> Result<PathBuf, SaveError> {
        if bitmap.is_empty() {
            return Err(SaveError::EmptyBitmap);
        }
        if !self.directory.exists() {
            fs::create_dir_all(&self.directory).map_err(|e| SaveError::CreateDirectoryFailed {
                path: self.directory.clone(),
                source: e,
            })?;
        }

        let path = self.directory.join(DirectoryLibrary::file_name(Local::now()));
        bitmap
            .as_image()
            .save_with_format(&path, ImageFormat::Png)
            .map_err(|e| SaveError::WriteFailed {
                path: path.clone(),
                source: e,
            })?;
        info!(
            "Saved {}x{} screening image to {}",
            bitmap.width(),
            bitmap.height(),
            path.display()
        );
        Ok(path)
    }
}
