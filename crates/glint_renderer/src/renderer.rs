//! Pixel loop and output packing.
//!
//! The only place the tracer touches a caller-owned pixel buffer. Rows are
//! disjoint slices of that buffer, so they can be rendered in parallel with
//! rayon without any synchronization.

use std::time::Instant;

use glint_core::Color;
use glint_math::Interval;
use image::RgbaImage;
use rayon::prelude::*;
use thiserror::Error;

use crate::{Integrator, Scene};

/// Bytes per output pixel.
const BYTES_PER_PIXEL: usize = 4;

/// Errors that can occur when writing into a pixel buffer.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum RenderError {
    #[error("Row stride {stride} is smaller than one row of pixels ({min} bytes)")]
    StrideTooSmall { stride: usize, min: usize },

    #[error("Pixel buffer holds {len} bytes, image needs {required}")]
    BufferTooSmall { len: usize, required: usize },
}

/// Byte order of each pixel in the output buffer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PixelFormat {
    /// `0xFF_RR_GG_BB` stored little-endian: bytes B, G, R, A
    #[default]
    Bgra,
    /// Bytes R, G, B, A
    Rgba,
}

/// How rows are scheduled.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RenderMode {
    SingleThreaded,
    /// Rows are distributed across the rayon thread pool
    #[default]
    Multithreaded,
}

/// Convert one linear channel to 8 bits. NaN maps to 0.
#[inline]
fn channel_to_u8(value: f32) -> u8 {
    Interval::CHANNEL.clamp(value * 255.0) as u8
}

/// Convert a color to 8-bit RGBA with alpha forced opaque.
pub fn color_to_rgba(color: Color) -> [u8; 4] {
    [
        channel_to_u8(color.x),
        channel_to_u8(color.y),
        channel_to_u8(color.z),
        255,
    ]
}

/// Pack a color as `0xFF_RR_GG_BB`.
pub fn pack_pixel(color: Color) -> u32 {
    let [r, g, b, a] = color_to_rgba(color);
    u32::from_be_bytes([a, r, g, b])
}

/// Encode a color in the requested byte order.
#[inline]
fn pixel_bytes(color: Color, format: PixelFormat) -> [u8; 4] {
    match format {
        PixelFormat::Bgra => pack_pixel(color).to_le_bytes(),
        PixelFormat::Rgba => color_to_rgba(color),
    }
}

/// Trace the primary ray through the center of pixel (x, y).
pub fn render_pixel(integrator: &Integrator<'_>, scene: &Scene, x: u32, y: u32) -> Color {
    let ray = scene.camera().primary_ray(x, y);
    integrator.trace_ray(&ray, 0)
}

fn render_row(integrator: &Integrator<'_>, scene: &Scene, y: u32, row: &mut [u8], format: PixelFormat) {
    let pixels = row.chunks_exact_mut(BYTES_PER_PIXEL);
    for (x, pixel) in (0..scene.settings().width).zip(pixels) {
        let color = render_pixel(integrator, scene, x, y);
        pixel.copy_from_slice(&pixel_bytes(color, format));
    }
}

/// Render the scene into a caller-owned buffer.
///
/// `stride` is the distance in bytes between the starts of consecutive rows
/// and may include padding; padding bytes are left untouched. Exactly one
/// pixel is written per (x, y) and the buffer is never read.
pub fn render_into(
    scene: &Scene,
    buffer: &mut [u8],
    stride: usize,
    format: PixelFormat,
    mode: RenderMode,
) -> Result<(), RenderError> {
    let width = scene.settings().width as usize;
    let height = scene.settings().height as usize;

    let row_bytes = width * BYTES_PER_PIXEL;
    if stride < row_bytes {
        return Err(RenderError::StrideTooSmall { stride, min: row_bytes });
    }
    let required = stride * (height - 1) + row_bytes;
    if buffer.len() < required {
        return Err(RenderError::BufferTooSmall {
            len: buffer.len(),
            required,
        });
    }

    log::info!("Rendering {}x{} ({:?})", width, height, mode);
    let start = Instant::now();

    let integrator = Integrator::new(scene);
    let rows = &mut buffer[..required];
    match mode {
        RenderMode::SingleThreaded => {
            rows.chunks_mut(stride)
                .enumerate()
                .for_each(|(y, row)| render_row(&integrator, scene, y as u32, &mut row[..row_bytes], format));
        }
        RenderMode::Multithreaded => {
            log::debug!("Distributing {} rows over {} threads", height, rayon::current_num_threads());
            rows.par_chunks_mut(stride)
                .enumerate()
                .for_each(|(y, row)| render_row(&integrator, scene, y as u32, &mut row[..row_bytes], format));
        }
    }

    log::info!("Rendered in {:?}", start.elapsed());
    Ok(())
}

/// Render the scene to a tightly packed RGBA image.
pub fn render_image(scene: &Scene, mode: RenderMode) -> Result<RgbaImage, RenderError> {
    let width = scene.settings().width;
    let height = scene.settings().height;
    let stride = width as usize * BYTES_PER_PIXEL;

    let mut pixels = vec![0u8; stride * height as usize];
    render_into(scene, &mut pixels, stride, PixelFormat::Rgba, mode)?;

    let required = pixels.len();
    RgbaImage::from_raw(width, height, pixels).ok_or(RenderError::BufferTooSmall { len: 0, required })
}

#[cfg(test)]
mod tests {
    use super::*;
    use glint_core::{CameraDesc, Material, ObjectDesc, RenderSettings, SceneDesc};
    use glint_math::Vec3;

    fn red_ball_scene(width: u32, height: u32) -> Scene {
        let desc = SceneDesc::new(
            CameraDesc::default(),
            RenderSettings::default().with_resolution(width, height),
        )
        .with_object(ObjectDesc::sphere(
            Vec3::ZERO,
            2.0,
            Material::diffuse(Color::new(0.7, 0.1, 0.1)).with_specular(Color::new(0.9, 0.1, 0.1)),
        ))
        .with_object(ObjectDesc::sphere(
            Vec3::new(5.0, 5.0, 5.0),
            0.5,
            Material::light(Color::ONE, Color::ONE),
        ));
        Scene::new(&desc).unwrap()
    }

    #[test]
    fn test_pack_pixel() {
        assert_eq!(pack_pixel(Color::ZERO), 0xFF00_0000);
        assert_eq!(pack_pixel(Color::ONE), 0xFFFF_FFFF);
        assert_eq!(pack_pixel(Color::new(1.0, 0.0, 0.0)), 0xFFFF_0000);
        assert_eq!(pack_pixel(Color::new(0.0, 0.0, 1.0)), 0xFF00_00FF);
    }

    #[test]
    fn test_packing_clamps_out_of_range() {
        assert_eq!(color_to_rgba(Color::new(4.0, -1.0, 0.5)), [255, 0, 127, 255]);
        assert_eq!(
            color_to_rgba(Color::new(f32::NAN, f32::INFINITY, f32::NEG_INFINITY)),
            [0, 255, 0, 255]
        );
    }

    #[test]
    fn test_pixel_byte_orders() {
        let color = Color::new(1.0, 0.5, 0.0);
        assert_eq!(pixel_bytes(color, PixelFormat::Rgba), [255, 127, 0, 255]);
        assert_eq!(pixel_bytes(color, PixelFormat::Bgra), [0, 127, 255, 255]);
    }

    #[test]
    fn test_stride_too_small() {
        let scene = red_ball_scene(4, 4);
        let mut buffer = vec![0u8; 64];
        let result = render_into(&scene, &mut buffer, 12, PixelFormat::Bgra, RenderMode::SingleThreaded);
        assert_eq!(result, Err(RenderError::StrideTooSmall { stride: 12, min: 16 }));
    }

    #[test]
    fn test_buffer_too_small() {
        let scene = red_ball_scene(4, 4);
        let mut buffer = vec![0u8; 63];
        let result = render_into(&scene, &mut buffer, 16, PixelFormat::Bgra, RenderMode::SingleThreaded);
        assert_eq!(result, Err(RenderError::BufferTooSmall { len: 63, required: 64 }));
    }

    #[test]
    fn test_padding_is_untouched() {
        let scene = red_ball_scene(4, 4);
        let stride = 24;
        // Last row needs no trailing padding
        let mut buffer = vec![0xAB_u8; stride * 3 + 16];
        render_into(&scene, &mut buffer, stride, PixelFormat::Bgra, RenderMode::Multithreaded).unwrap();

        for y in 0..4 {
            let row = &buffer[y * stride..];
            // Every pixel is opaque
            for x in 0..4 {
                assert_eq!(row[x * 4 + 3], 255);
            }
            if y < 3 {
                assert!(row[16..24].iter().all(|&b| b == 0xAB));
            }
        }
    }

    #[test]
    fn test_modes_are_identical() {
        let scene = red_ball_scene(16, 12);
        let single = render_image(&scene, RenderMode::SingleThreaded).unwrap();
        let multi = render_image(&scene, RenderMode::Multithreaded).unwrap();
        assert_eq!(single.as_raw(), multi.as_raw());
    }

    #[test]
    fn test_red_ball_end_to_end() {
        let scene = red_ball_scene(4, 4);
        let background = color_to_rgba(scene.settings().background);
        let image = render_image(&scene, RenderMode::SingleThreaded).unwrap();

        // Corner rays miss everything
        for (x, y) in [(0, 0), (3, 0), (0, 3), (3, 3)] {
            assert!(scene.find_nearest_hit(&scene.camera().primary_ray(x, y)).is_none());
            assert_eq!(image.get_pixel(x, y).0, background);
        }

        // Upper-right inner pixel faces the light
        let [r, g, b, a] = image.get_pixel(2, 1).0;
        assert!(r > g && r > b, "expected red, got {:?}", [r, g, b]);
        assert_eq!(a, 255);
    }

    #[test]
    fn test_demo_scene_has_no_non_finite_colors() {
        let mut desc = glint_core::demo::demo_scene();
        desc.settings = desc.settings.with_resolution(48, 36);
        let scene = Scene::new(&desc).unwrap();
        let integrator = Integrator::new(&scene);

        for y in 0..36 {
            for x in 0..48 {
                let color = render_pixel(&integrator, &scene, x, y);
                assert!(color.is_finite(), "pixel ({x}, {y}) is {color:?}");
            }
        }
    }
}
