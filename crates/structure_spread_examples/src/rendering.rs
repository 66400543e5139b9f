//! Shared helpers for the examples: tracing setup and PNG chunk maps.
use std::path::Path;

use image::{ImageResult, Rgb, RgbImage};
use structure_spread::prelude::ChunkPos;
use tracing_subscriber::EnvFilter;

/// Initializes tracing from `RUST_LOG`, defaulting to `info`.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

/// Pixel layout of a rendered chunk map.
///
/// The map covers the square of chunks within `chunk_radius` of the origin,
/// one `chunk_px` square of pixels per chunk.
#[derive(Debug, Clone)]
pub struct MapConfig {
    /// Chebyshev radius of rendered chunks around the origin.
    pub chunk_radius: i32,
    /// Edge length of one chunk in pixels.
    pub chunk_px: u32,
    /// Background color.
    pub background: [u8; 3],
    /// Color and chunk spacing of cell boundary lines, when drawn.
    pub grid_lines: Option<([u8; 3], i32)>,
}

impl MapConfig {
    pub fn new(chunk_radius: i32) -> Self {
        Self {
            chunk_radius,
            chunk_px: 4,
            background: [24, 26, 33],
            grid_lines: None,
        }
    }

    pub fn with_chunk_px(mut self, chunk_px: u32) -> Self {
        self.chunk_px = chunk_px;
        self
    }

    pub fn with_background(mut self, background: [u8; 3]) -> Self {
        self.background = background;
        self
    }

    pub fn with_grid_lines(mut self, color: [u8; 3], spacing: i32) -> Self {
        self.grid_lines = Some((color, spacing));
        self
    }

    fn side_px(&self) -> u32 {
        (2 * self.chunk_radius + 1) as u32 * self.chunk_px
    }
}

/// An RGB canvas addressed by chunk coordinates.
pub struct ChunkMap {
    config: MapConfig,
    image: RgbImage,
}

impl ChunkMap {
    pub fn new(config: MapConfig) -> Self {
        let side = config.side_px();
        let mut image = RgbImage::from_pixel(side, side, Rgb(config.background));

        if let Some((color, spacing)) = config.grid_lines {
            for chunk in -config.chunk_radius..=config.chunk_radius {
                if chunk.rem_euclid(spacing.max(1)) != 0 {
                    continue;
                }
                let line = (chunk + config.chunk_radius) as u32 * config.chunk_px;
                for pixel in 0..side {
                    image.put_pixel(line, pixel, Rgb(color));
                    image.put_pixel(pixel, line, Rgb(color));
                }
            }
        }

        Self { config, image }
    }

    fn chunk_origin_px(&self, chunk: ChunkPos) -> Option<(u32, u32)> {
        let radius = self.config.chunk_radius;
        if chunk.x.abs() > radius || chunk.z.abs() > radius {
            return None;
        }
        let px = (chunk.x + radius) as u32 * self.config.chunk_px;
        let pz = (chunk.z + radius) as u32 * self.config.chunk_px;
        Some((px, pz))
    }

    /// Fills the chunk's square. Chunks outside the map are ignored.
    pub fn fill_chunk(&mut self, chunk: ChunkPos, color: [u8; 3]) {
        let Some((px, pz)) = self.chunk_origin_px(chunk) else {
            return;
        };
        for dx in 0..self.config.chunk_px {
            for dz in 0..self.config.chunk_px {
                self.image.put_pixel(px + dx, pz + dz, Rgb(color));
            }
        }
    }

    /// Draws only the border pixels of the chunk's square, for highlights.
    pub fn outline_chunk(&mut self, chunk: ChunkPos, color: [u8; 3]) {
        let Some((px, pz)) = self.chunk_origin_px(chunk) else {
            return;
        };
        let last = self.config.chunk_px - 1;
        for d in 0..self.config.chunk_px {
            self.image.put_pixel(px + d, pz, Rgb(color));
            self.image.put_pixel(px + d, pz + last, Rgb(color));
            self.image.put_pixel(px, pz + d, Rgb(color));
            self.image.put_pixel(px + last, pz + d, Rgb(color));
        }
    }

    pub fn save(&self, path: impl AsRef<Path>) -> ImageResult<()> {
        self.image.save(path)
    }
}
