//! Rasterizes a point cloud together with the reference unit circle.

use byteorder::{LittleEndian, WriteBytesExt};
use cgmath::Point2;
use image::{Rgb, RgbImage};
use std::error::Error;
use std::f64::consts::TAU;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

#[derive(Debug, Clone)]
pub struct PlotStyle {
    /// Width and height of the (square) image in pixels
    pub size: u32,
    /// Half extent of the viewport, [-extent, extent]^2
    pub extent: f64,
    pub background: Rgb<u8>,
    pub point_color: Rgb<u8>,
    /// Radius of a point in pixels
    pub point_radius: f64,
    pub circle_color: Rgb<u8>,
    /// Width of the circle outline in pixels
    pub circle_width: f64,
    /// Number of angle steps used to trace the circle
    pub circle_steps: usize,
}

impl Default for PlotStyle {
    fn default() -> Self {
        PlotStyle {
            size: 800,
            extent: 1.1,
            background: Rgb([0, 0, 0]),
            point_color: Rgb([0x00, 0x88, 0x88]),
            point_radius: 2.0,
            circle_color: Rgb([0xff, 0x00, 0x00]),
            circle_width: 5.0,
            circle_steps: 1000,
        }
    }
}

impl PlotStyle {
    /// Continuous pixel coordinates, y pointing down
    pub fn to_pixel(&self, p: Point2<f64>) -> Point2<f64> {
        let scale = self.size as f64 / (2.0 * self.extent);
        Point2::new((p.x + self.extent) * scale, (self.extent - p.y) * scale)
    }
}

/// Parse a `#rrggbb` color
pub fn parse_color(s: &str) -> Option<Rgb<u8>> {
    let hex = s.strip_prefix('#')?;
    if hex.len() != 6 || !hex.is_ascii() {
        return None;
    }
    let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
    Some(Rgb([channel(0)?, channel(2)?, channel(4)?]))
}

fn stamp(img: &mut RgbImage, c: Point2<f64>, radius: f64, color: Rgb<u8>) {
    // Below this a disc may cover no pixel center
    let radius = radius.max(0.75);
    let (w, h) = img.dimensions();
    let x0 = ((c.x - radius).floor() as i64).max(0);
    let x1 = ((c.x + radius).ceil() as i64).min(w as i64 - 1);
    let y0 = ((c.y - radius).floor() as i64).max(0);
    let y1 = ((c.y + radius).ceil() as i64).min(h as i64 - 1);
    for y in y0..=y1 {
        for x in x0..=x1 {
            let dx = x as f64 + 0.5 - c.x;
            let dy = y as f64 + 0.5 - c.y;
            if dx * dx + dy * dy <= radius * radius {
                img.put_pixel(x as u32, y as u32, color);
            }
        }
    }
}

fn draw_circle(img: &mut RgbImage, style: &PlotStyle) {
    let steps = style.circle_steps.max(2);
    let vertex = |i: usize| {
        let theta = TAU * i as f64 / (steps - 1) as f64;
        style.to_pixel(Point2::new(theta.cos(), theta.sin()))
    };
    let half_width = style.circle_width / 2.0;
    for i in 1..steps {
        let (a, b) = (vertex(i - 1), vertex(i));
        let length = ((b.x - a.x).powi(2) + (b.y - a.y).powi(2)).sqrt();
        let nb_stamps = (length * 2.0).ceil().max(1.0) as usize;
        for s in 0..=nb_stamps {
            let t = s as f64 / nb_stamps as f64;
            let p = Point2::new(a.x + (b.x - a.x) * t, a.y + (b.y - a.y) * t);
            stamp(img, p, half_width, style.circle_color);
        }
    }
}

/// Points first, then the reference circle on top
pub fn render(points: &[Point2<f64>], style: &PlotStyle) -> RgbImage {
    let mut img = RgbImage::from_pixel(style.size, style.size, style.background);
    for p in points {
        stamp(&mut img, style.to_pixel(*p), style.point_radius, style.point_color);
    }
    draw_circle(&mut img, style);
    img
}

/// Save following the file extension (png or pfm)
pub fn save(imgout_path_str: &str, img: &RgbImage) -> Result<(), Box<dyn Error>> {
    let output_ext = match Path::new(imgout_path_str).extension() {
        None => return Err(format!("no file extension provided: {}", imgout_path_str).into()),
        Some(x) => x.to_str().unwrap_or(""),
    };
    match output_ext {
        "png" => save_png(imgout_path_str, img)?,
        "pfm" => save_pfm(imgout_path_str, img)?,
        _ => return Err(format!("unknown output file extension: {}", output_ext).into()),
    }
    info!("Saved {}", imgout_path_str);
    Ok(())
}

pub fn save_png(imgout_path_str: &str, img: &RgbImage) -> Result<(), Box<dyn Error>> {
    img.save_with_format(imgout_path_str, image::ImageFormat::Png)?;
    Ok(())
}

pub fn save_pfm(imgout_path_str: &str, img: &RgbImage) -> Result<(), Box<dyn Error>> {
    let mut file = BufWriter::new(File::create(Path::new(imgout_path_str))?);
    let (w, h) = img.dimensions();
    let header = format!("PF\n{} {}\n-1.0\n", w, h);
    file.write_all(header.as_bytes())?;
    // Scanlines are stored bottom to top
    for y in (0..h).rev() {
        for x in 0..w {
            let p = img.get_pixel(x, y);
            for c in p.0.iter() {
                file.write_f32::<LittleEndian>(*c as f32 / 255.0)?;
            }
        }
    }
    file.flush()?;
    Ok(())
}
