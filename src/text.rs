//! Text rasterization
//!
//! Renders a string on the CPU into an opaque RGBA image that becomes the
//! effect's texture: solid background, white outlined text, centred and
//! squeezed to the canvas width.

use crate::error::HoverError;
use std::collections::VecDeque;
use glyphon::cosmic_text::Weight;
use glyphon::{Attrs, Buffer, Color, Family, FontSystem, Metrics, Shaping, SwashCache};

/// Outline width as a fraction of the font size.
const STROKE_RATIO: f32 = 0.005;

/// An sRGB colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub const BLACK: Rgb = Rgb(0, 0, 0);
    pub const WHITE: Rgb = Rgb(255, 255, 255);

    /// Parse `#rgb`, `#rrggbb`, `black` or `white`.
    pub fn parse(s: &str) -> Result<Self, HoverError> {
        let invalid = || HoverError::InvalidColor(s.to_string());
        let trimmed = s.trim();

        match trimmed.to_ascii_lowercase().as_str() {
            "black" => return Ok(Self::BLACK),
            "white" => return Ok(Self::WHITE),
            _ => {}
        }

        let hex = trimmed.strip_prefix('#').ok_or_else(invalid)?;
        if !hex.is_ascii() {
            return Err(invalid());
        }
        let channel = |s: &str| u8::from_str_radix(s, 16).map_err(|_| invalid());

        match hex.len() {
            3 => {
                let r = channel(&hex[0..1])?;
                let g = channel(&hex[1..2])?;
                let b = channel(&hex[2..3])?;
                Ok(Rgb(r * 17, g * 17, b * 17))
            }
            6 => Ok(Rgb(
                channel(&hex[0..2])?,
                channel(&hex[2..4])?,
                channel(&hex[4..6])?,
            )),
            _ => Err(invalid()),
        }
    }

    /// Linear-space colour for a render pass clear.
    pub fn to_wgpu(self) -> wgpu::Color {
        let linear = |c: u8| {
            let c = c as f64 / 255.0;
            if c <= 0.04045 {
                c / 12.92
            } else {
                ((c + 0.055) / 1.055).powf(2.4)
            }
        };
        wgpu::Color {
            r: linear(self.0),
            g: linear(self.1),
            b: linear(self.2),
            a: 1.0,
        }
    }
}

/// What to draw.
#[derive(Debug, Clone, PartialEq)]
pub struct TextStyle {
    pub text: String,
    pub font_family: String,
    /// Font size in canvas pixels. `None` means twice the canvas width.
    pub font_size: Option<f32>,
    /// Background colour behind the white text.
    pub fill_color: Rgb,
    pub font_weight: u16,
}

impl Default for TextStyle {
    fn default() -> Self {
        Self {
            text: "ARTIEL".to_string(),
            font_family: "artiel".to_string(),
            font_size: None,
            fill_color: Rgb::BLACK,
            font_weight: 100,
        }
    }
}

/// An opaque RGBA8 image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextImage {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<u8>,
}

impl TextImage {
    fn filled(width: u32, height: u32, color: Rgb) -> Self {
        let pixels = [color.0, color.1, color.2, 255].repeat((width * height) as usize);
        Self {
            width,
            height,
            pixels,
        }
    }

    /// Get the pixel at `(x, y)`, or `None` outside the image.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = ((y * self.width + x) * 4) as usize;
        let p = self.pixels.get(i..i + 4)?;
        Some([p[0], p[1], p[2], p[3]])
    }
}

/// Horizontal and vertical text scale for a canvas.
///
/// Text wider than the canvas is shrunk to fit; the vertical scale is further
/// divided by the canvas aspect ratio. Unmeasurable text keeps scale 1.
pub fn fit_scale(canvas_width: u32, canvas_height: u32, text_width: f32) -> (f32, f32) {
    let width = canvas_width as f32;
    let horizontal = if text_width > 0.0 {
        (width / text_width).min(1.0)
    } else {
        1.0
    };
    let aspect = width / canvas_height as f32;
    (horizontal, horizontal / aspect)
}

/// Canvas size for a viewport: twice its dimensions, shrunk uniformly to fit
/// `max_dimension`.
pub fn canvas_size(
    viewport_width: f32,
    viewport_height: f32,
    max_dimension: u32,
) -> Result<(u32, u32), HoverError> {
    let width = (viewport_width * 2.0).round().max(0.0) as u32;
    let height = (viewport_height * 2.0).round().max(0.0) as u32;
    if width == 0 || height == 0 {
        return Err(HoverError::EmptyContainer { width, height });
    }
    if max_dimension == 0 {
        return Err(HoverError::TextureTooLarge {
            width,
            height,
            limit: max_dimension,
        });
    }

    let largest = width.max(height);
    if largest <= max_dimension {
        return Ok((width, height));
    }

    let shrink = max_dimension as f32 / largest as f32;
    let clamped = (
        ((width as f32 * shrink) as u32).clamp(1, max_dimension),
        ((height as f32 * shrink) as u32).clamp(1, max_dimension),
    );
    tracing::warn!(
        requested = ?(width, height),
        clamped = ?clamped,
        "text canvas exceeds texture limit"
    );
    Ok(clamped)
}

/// Line box of shaped text.
#[derive(Debug, Clone, Copy, Default)]
struct LineBox {
    width: f32,
    top: f32,
    height: f32,
}

/// Half-open pixel rectangle in text space.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct PixelRect {
    left: i32,
    top: i32,
    right: i32,
    bottom: i32,
}

impl PixelRect {
    fn width(&self) -> usize {
        (self.right - self.left).max(0) as usize
    }

    fn height(&self) -> usize {
        (self.bottom - self.top).max(0) as usize
    }

    fn grow(self, by: i32) -> Self {
        Self {
            left: self.left - by,
            top: self.top - by,
            right: self.right + by,
            bottom: self.bottom + by,
        }
    }

    fn intersect(self, other: Self) -> Option<Self> {
        let rect = Self {
            left: self.left.max(other.left),
            top: self.top.max(other.top),
            right: self.right.min(other.right),
            bottom: self.bottom.min(other.bottom),
        };
        (rect.left < rect.right && rect.top < rect.bottom).then_some(rect)
    }

    /// Smallest rectangle holding both `self` and the given span.
    fn union(self, x: i32, y: i32, w: u32, h: u32) -> Self {
        Self {
            left: self.left.min(x),
            top: self.top.min(y),
            right: self.right.max(x + w as i32),
            bottom: self.bottom.max(y + h as i32),
        }
    }
}

/// Where shaped text lands on the canvas.
///
/// Text space is the glyph layout at the horizontally fitted font size.
/// Columns map 1:1 onto the canvas; rows are scaled by `squeeze` about the
/// centre of the line box.
#[derive(Debug, Clone, Copy)]
struct Placement {
    canvas_width: u32,
    canvas_height: u32,
    /// Canvas column of text-space column 0.
    offset_x: i32,
    /// Text-space y that lands on the canvas centre.
    center_y: f32,
    squeeze: f32,
}

impl Placement {
    fn new(canvas_width: u32, canvas_height: u32, line: &LineBox, squeeze: f32) -> Self {
        Self {
            canvas_width,
            canvas_height,
            offset_x: (canvas_width as f32 / 2.0 - line.width / 2.0).round() as i32,
            center_y: line.top + line.height / 2.0,
            squeeze,
        }
    }

    /// Text-space row coordinate sampled by canvas row `y`, in pixel-centre units.
    fn source_y(&self, y: u32) -> f32 {
        (y as f32 + 0.5 - self.canvas_height as f32 / 2.0) / self.squeeze + self.center_y - 0.5
    }

    /// Text-space pixels that can reach the canvas.
    fn visible(&self) -> PixelRect {
        let last_row = self.canvas_height.saturating_sub(1);
        PixelRect {
            left: -self.offset_x,
            top: self.source_y(0).floor() as i32,
            right: self.canvas_width as i32 - self.offset_x,
            bottom: self.source_y(last_row).floor() as i32 + 2,
        }
    }

    /// Mask window for `ink` dilated by `radius`, clipped to what the canvas shows.
    fn mask_window(&self, ink: PixelRect, radius: usize) -> Option<PixelRect> {
        let radius = radius as i32;
        self.visible().grow(radius).intersect(ink.grow(radius))
    }
}

/// Coverage mask over a window of text space.
struct Mask {
    window: PixelRect,
    width: usize,
    height: usize,
    data: Vec<f32>,
}

impl Mask {
    fn new(window: PixelRect) -> Self {
        let (width, height) = (window.width(), window.height());
        Self {
            window,
            width,
            height,
            data: vec![0.0; width * height],
        }
    }

    /// Coverage at text-space pixel `(x, y)`; zero outside the window.
    fn sample(&self, x: i32, y: i32) -> f32 {
        let (mx, my) = (x - self.window.left, y - self.window.top);
        if mx < 0 || my < 0 || mx as usize >= self.width || my as usize >= self.height {
            return 0.0;
        }
        self.data[my as usize * self.width + mx as usize]
    }

    fn cover(&mut self, x: i32, y: i32, w: u32, h: u32, alpha: f32) {
        let (x, y) = (x - self.window.left, y - self.window.top);
        for py in y.max(0)..(y + h as i32).min(self.height as i32) {
            for px in x.max(0)..(x + w as i32).min(self.width as i32) {
                let cell = &mut self.data[py as usize * self.width + px as usize];
                *cell = cell.max(alpha);
            }
        }
    }

    /// Grow coverage by `radius` pixels in every direction.
    fn dilate(&mut self, radius: usize) {
        if radius == 0 || self.data.is_empty() {
            return;
        }

        let mut line = vec![0.0; self.width.max(self.height)];
        for row in self.data.chunks_exact_mut(self.width) {
            line[..row.len()].copy_from_slice(row);
            sliding_max(&line[..row.len()], radius, row);
        }

        let mut column = vec![0.0; self.height];
        for x in 0..self.width {
            for (y, value) in column.iter_mut().enumerate() {
                *value = self.data[y * self.width + x];
            }
            sliding_max(&column, radius, &mut line[..self.height]);
            for (y, value) in line[..self.height].iter().enumerate() {
                self.data[y * self.width + x] = *value;
            }
        }
    }
}

/// `dst[i] = max(src[i - radius ..= i + radius])`, clipped at the ends.
///
/// Monotonic-queue sliding maximum, linear in `src.len()` for any radius.
fn sliding_max(src: &[f32], radius: usize, dst: &mut [f32]) {
    let mut window: VecDeque<usize> = VecDeque::with_capacity(2 * radius + 1);
    let mut next = 0;
    for (i, out) in dst.iter_mut().enumerate().take(src.len()) {
        let last = (i + radius).min(src.len() - 1);
        while next <= last {
            while window.back().is_some_and(|&j| src[j] <= src[next]) {
                window.pop_back();
            }
            window.push_back(next);
            next += 1;
        }
        while window.front().is_some_and(|&j| j + radius < i) {
            window.pop_front();
        }
        *out = window.front().map_or(0.0, |&j| src[j]);
    }
}

/// Rasterizes text images with the system font database.
pub struct TextTextureGenerator {
    font_system: FontSystem,
    swash_cache: SwashCache,
    max_dimension: u32,
}

impl TextTextureGenerator {
    /// Create a generator limited to `max_dimension` pixels per side.
    pub fn new(max_dimension: u32) -> Self {
        Self {
            font_system: FontSystem::new(),
            swash_cache: SwashCache::new(),
            max_dimension,
        }
    }

    fn shape(&mut self, style: &TextStyle, font_size: f32) -> (Buffer, LineBox) {
        let mut buffer = Buffer::new(&mut self.font_system, Metrics::new(font_size, font_size));
        let attrs = Attrs::new()
            .family(Family::Name(&style.font_family))
            .weight(Weight(style.font_weight));
        buffer.set_size(&mut self.font_system, None, None);
        buffer.set_text(
            &mut self.font_system,
            &style.text,
            &attrs,
            Shaping::Advanced,
            None,
        );
        buffer.shape_until_scroll(&mut self.font_system, false);

        let mut line = LineBox::default();
        for (i, run) in buffer.layout_runs().enumerate() {
            line.width = line.width.max(run.line_w);
            if i == 0 {
                line.top = run.line_top;
            }
            line.height = run.line_top + run.line_height - line.top;
        }
        (buffer, line)
    }

    /// Bounding box of every pixel the glyphs of `buffer` touch.
    fn ink_bounds(&mut self, buffer: &Buffer) -> Option<PixelRect> {
        let mut ink: Option<PixelRect> = None;
        buffer.draw(
            &mut self.font_system,
            &mut self.swash_cache,
            Color::rgb(255, 255, 255),
            |x, y, w, h, color| {
                if color.a() == 0 || w == 0 || h == 0 {
                    return;
                }
                let span = PixelRect {
                    left: x,
                    top: y,
                    right: x + w as i32,
                    bottom: y + h as i32,
                };
                ink = Some(ink.map_or(span, |ink| ink.union(x, y, w, h)));
            },
        );
        ink
    }

    /// Rasterize `style` for a viewport of `viewport` logical pixels.
    pub fn generate(
        &mut self,
        style: &TextStyle,
        viewport: (f32, f32),
    ) -> Result<TextImage, HoverError> {
        if style.font_weight == 0 || style.font_weight > 1000 {
            return Err(HoverError::InvalidFontWeight(style.font_weight));
        }

        let (width, height) = canvas_size(viewport.0, viewport.1, self.max_dimension)?;
        let mut image = TextImage::filled(width, height, style.fill_color);

        let font_size = style.font_size.unwrap_or((width as f32 * 2.0).floor());
        let (_, nominal) = self.shape(style, font_size);
        if nominal.width <= 0.0 || font_size <= 0.0 {
            tracing::debug!(text = %style.text, "nothing to rasterize");
            return Ok(image);
        }

        let (scale_x, scale_y) = fit_scale(width, height, nominal.width);

        // Shape again at the horizontally scaled size so glyphs rasterize
        // crisply; the vertical squeeze is applied while compositing.
        let (buffer, line) = self.shape(style, font_size * scale_x);
        let stroke_radius = (font_size * STROKE_RATIO * scale_x / 2.0).round() as usize;
        let placement = Placement::new(width, height, &line, scale_y / scale_x);

        // Oversized text mostly falls outside the canvas; only the visible
        // part of the glyphs is kept.
        let Some(window) = self
            .ink_bounds(&buffer)
            .and_then(|ink| placement.mask_window(ink, stroke_radius))
        else {
            tracing::debug!(text = %style.text, "no glyph pixels reach the canvas");
            return Ok(image);
        };

        let mut mask = Mask::new(window);
        buffer.draw(
            &mut self.font_system,
            &mut self.swash_cache,
            Color::rgb(255, 255, 255),
            |x, y, w, h, color| {
                mask.cover(x, y, w, h, color.a() as f32 / 255.0);
            },
        );
        mask.dilate(stroke_radius);

        composite(&mut image, &mask, &placement, style.fill_color);

        tracing::debug!(
            text = %style.text,
            width,
            height,
            font_size,
            scale_x,
            scale_y,
            mask = ?(mask.width, mask.height),
            "rasterized text texture"
        );
        Ok(image)
    }
}

/// Blend the mask onto `image` as white over `background`.
fn composite(image: &mut TextImage, mask: &Mask, placement: &Placement, background: Rgb) {
    let width = image.width as usize;
    let columns = (mask.window.left + placement.offset_x).max(0) as usize
        ..((mask.window.right + placement.offset_x).max(0) as usize).min(width);

    for y in 0..image.height {
        let src_y = placement.source_y(y);
        let y0 = src_y.floor();
        let t = src_y - y0;
        let r0 = y0 as i32;
        if r0 + 1 < mask.window.top || r0 >= mask.window.bottom {
            continue;
        }

        for x in columns.clone() {
            let mx = x as i32 - placement.offset_x;
            let a0 = mask.sample(mx, r0);
            let a1 = mask.sample(mx, r0 + 1);
            let alpha = a0 + (a1 - a0) * t;
            if alpha <= 0.0 {
                continue;
            }

            let blend = |c: u8| (c as f32 * (1.0 - alpha) + 255.0 * alpha).round() as u8;
            let i = (y as usize * width + x) * 4;
            image.pixels[i] = blend(background.0);
            image.pixels[i + 1] = blend(background.1);
            image.pixels[i + 2] = blend(background.2);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Bounds `(left, top, right, bottom)` of pixels brighter than mid grey.
    fn bright_bounds(image: &TextImage) -> Option<(u32, u32, u32, u32)> {
        let mut bounds: Option<(u32, u32, u32, u32)> = None;
        for y in 0..image.height {
            for x in 0..image.width {
                if image.pixel(x, y).is_some_and(|p| p[0] > 128) {
                    let (l, t, r, b) = bounds.unwrap_or((x, y, x, y));
                    bounds = Some((l.min(x), t.min(y), r.max(x), b.max(y)));
                }
            }
        }
        bounds
    }

    fn has_fonts(generator: &TextTextureGenerator) -> bool {
        generator.font_system.db().faces().next().is_some()
    }

    #[test]
    fn test_parse_colors() {
        assert_eq!(Rgb::parse("#000000").unwrap(), Rgb::BLACK);
        assert_eq!(Rgb::parse("#fff").unwrap(), Rgb::WHITE);
        assert_eq!(Rgb::parse("#1a2B3c").unwrap(), Rgb(0x1a, 0x2b, 0x3c));
        assert_eq!(Rgb::parse("White").unwrap(), Rgb::WHITE);
        assert!(Rgb::parse("000000").is_err());
        assert!(Rgb::parse("#12345").is_err());
        assert!(Rgb::parse("#gg0000").is_err());
    }

    #[test]
    fn test_fit_scale() {
        assert_eq!(fit_scale(200, 100, 400.0), (0.5, 0.25));
        assert_eq!(fit_scale(200, 100, 100.0), (1.0, 0.5));
        assert_eq!(fit_scale(200, 100, 0.0), (1.0, 0.5));
    }

    #[test]
    fn test_canvas_size() {
        assert_eq!(canvas_size(640.0, 360.0, 8192).unwrap(), (1280, 720));
        assert_eq!(canvas_size(8000.0, 2000.0, 8000).unwrap(), (8000, 2000));
        assert!(matches!(
            canvas_size(0.0, 100.0, 8192),
            Err(HoverError::EmptyContainer { .. })
        ));
    }

    #[test]
    fn test_pixel_out_of_range() {
        let image = TextImage::filled(4, 2, Rgb::WHITE);
        assert_eq!(image.pixel(3, 1), Some([255, 255, 255, 255]));
        assert_eq!(image.pixel(4, 0), None);
        assert_eq!(image.pixel(0, 2), None);
    }

    #[test]
    fn test_sliding_max_matches_naive() {
        let src: Vec<f32> = (0..57).map(|i| ((i * 37 + 11) % 23) as f32 / 23.0).collect();
        for radius in [1, 2, 5, 30, 100] {
            let mut fast = vec![0.0; src.len()];
            sliding_max(&src, radius, &mut fast);
            for (i, value) in fast.iter().enumerate() {
                let lo = i.saturating_sub(radius);
                let hi = (i + radius).min(src.len() - 1);
                let naive = src[lo..=hi].iter().copied().fold(0.0, f32::max);
                assert_eq!(*value, naive, "radius {} index {}", radius, i);
            }
        }
    }

    #[test]
    fn test_dilate_grows_square() {
        let mut mask = Mask::new(PixelRect {
            left: -5,
            top: 10,
            right: 6,
            bottom: 21,
        });
        mask.cover(0, 15, 1, 1, 0.5);
        mask.dilate(2);

        for y in 10i32..21 {
            for x in -5i32..6 {
                let inside = x.abs() <= 2 && (y - 15).abs() <= 2;
                let expected = if inside { 0.5 } else { 0.0 };
                assert_eq!(mask.sample(x, y), expected, "at ({}, {})", x, y);
            }
        }
    }

    #[test]
    fn test_oversized_text_mask_is_clipped_to_canvas() {
        // A single tall glyph at the default size of twice the canvas width.
        let (width, height) = (2560, 1440);
        let line = LineBox {
            width: 700.0,
            top: 0.0,
            height: 5120.0,
        };
        let squeeze = height as f32 / width as f32;
        let placement = Placement::new(width, height, &line, squeeze);
        let ink = PixelRect {
            left: 40,
            top: 600,
            right: 660,
            bottom: 4800,
        };

        let window = placement.mask_window(ink, 13).unwrap();
        assert!(window.width() <= 620 + 26);
        assert!(window.height() <= width as usize + 26 + 3);

        // The canvas centre row still samples inside the window.
        let center = placement.source_y(height / 2) as i32;
        assert!(window.top <= center && center < window.bottom);
    }

    #[test]
    fn test_offscreen_ink_has_no_window() {
        let line = LineBox {
            width: 100.0,
            top: 0.0,
            height: 100.0,
        };
        let placement = Placement::new(100, 100, &line, 1.0);
        let ink = PixelRect {
            left: 0,
            top: 500,
            right: 10,
            bottom: 510,
        };
        assert_eq!(placement.mask_window(ink, 2), None);
    }

    #[test]
    fn test_empty_text_is_background() {
        let mut generator = TextTextureGenerator::new(8192);
        let style = TextStyle {
            text: String::new(),
            fill_color: Rgb(10, 20, 30),
            ..Default::default()
        };
        let image = generator.generate(&style, (16.0, 8.0)).unwrap();

        assert_eq!((image.width, image.height), (32, 16));
        assert!(image.pixels.chunks(4).all(|p| p == [10, 20, 30, 255]));
    }

    #[test]
    fn test_generation_is_deterministic() {
        let mut generator = TextTextureGenerator::new(8192);
        let style = TextStyle::default();

        let first = generator.generate(&style, (48.0, 24.0)).unwrap();
        let second = generator.generate(&style, (48.0, 24.0)).unwrap();

        assert_eq!(first, second);
        assert_eq!((first.width, first.height), (96, 48));
        assert_eq!(first.pixel(0, 0), Some([0, 0, 0, 255]));
        assert!(first.pixels.chunks(4).all(|p| p[3] == 255));
    }

    #[test]
    fn test_text_spans_canvas_and_is_centred() {
        let mut generator = TextTextureGenerator::new(8192);
        if !has_fonts(&generator) {
            return;
        }

        let image = generator.generate(&TextStyle::default(), (320.0, 180.0)).unwrap();
        assert_eq!((image.width, image.height), (640, 360));
        let (left, top, right, bottom) = bright_bounds(&image).unwrap();

        let (w, h) = (image.width as f32, image.height as f32);
        assert!((right - left) as f32 >= 0.9 * w, "bbox x {}..{}", left, right);
        let center_x = (left + right) as f32 / 2.0;
        let center_y = (top + bottom) as f32 / 2.0;
        assert!((center_x - w / 2.0).abs() <= 0.05 * w, "bbox x {}..{}", left, right);
        assert!((center_y - h / 2.0).abs() <= 0.05 * h, "bbox y {}..{}", top, bottom);
    }

    #[test]
    fn test_text_height_follows_aspect() {
        let mut generator = TextTextureGenerator::new(8192);
        if !has_fonts(&generator) {
            return;
        }

        // Text height is a fixed share of the canvas height, so its height
        // relative to its width scales with 1 / aspect.
        let mut share = |viewport: (f32, f32)| {
            let image = generator.generate(&TextStyle::default(), viewport).unwrap();
            let (_, top, _, bottom) = bright_bounds(&image).unwrap();
            (bottom - top + 1) as f32 / image.height as f32
        };
        let wide = share((320.0, 180.0));
        let tall = share((180.0, 320.0));

        assert!(wide > 0.0 && tall > 0.0);
        assert!((wide - tall).abs() <= 0.05, "wide {} tall {}", wide, tall);
    }

    #[test]
    fn test_short_text_at_large_viewport() {
        let mut generator = TextTextureGenerator::new(8192);
        let style = TextStyle {
            text: "I".to_string(),
            ..Default::default()
        };
        let image = generator.generate(&style, (1280.0, 720.0)).unwrap();
        assert_eq!((image.width, image.height), (2560, 1440));
        assert!(image.pixels.chunks(4).all(|p| p[3] == 255));
    }

    #[test]
    fn test_invalid_weight() {
        let mut generator = TextTextureGenerator::new(8192);
        let style = TextStyle {
            font_weight: 0,
            ..Default::default()
        };
        assert!(matches!(
            generator.generate(&style, (16.0, 8.0)),
            Err(HoverError::InvalidFontWeight(0))
        ));
    }
}
