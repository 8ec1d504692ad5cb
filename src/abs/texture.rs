//! Structs and functions for handling textures.
//!
//! The module provides the [`Texture`] struct which is a CPU representation of a GPU texture.

use std::{path::Path, sync::Arc};

use glow::HasContext;
use image::{DynamicImage, GenericImageView};

#[derive(Debug, thiserror::Error)]
pub enum TextureError {
    #[error("failed to load image {path}: {source}")]
    Image {
        path: String,
        #[source]
        source: image::ImageError,
    },
    #[error("failed to create texture: {0}")]
    Create(String),
}

/// Pixel layout uploaded to the GPU.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PixelFormat {
    Rgb,
    Rgba,
}

/// Sampling parameters for a [`Texture`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextureOptions {
    pub wrap: u32,
    pub min_filter: u32,
    pub mag_filter: u32,
    pub format: PixelFormat,
}

impl TextureOptions {
    /// Repeating, linearly filtered RGBA.
    pub fn linear() -> Self {
        Self {
            wrap: glow::REPEAT,
            min_filter: glow::LINEAR,
            mag_filter: glow::LINEAR,
            format: PixelFormat::Rgba,
        }
    }

    /// Repeating RGB with trilinear minification and nearest magnification.
    pub fn mipmapped_rgb() -> Self {
        Self {
            wrap: glow::REPEAT,
            min_filter: glow::LINEAR_MIPMAP_LINEAR,
            mag_filter: glow::NEAREST,
            format: PixelFormat::Rgb,
        }
    }
}

/// Represents a texture stored on the GPU side.
pub struct Texture {
    gl: Arc<glow::Context>,
    id: glow::Texture,
    width: u32,
    height: u32,
}

impl Texture {
    /// Decodes the image at `path` and uploads it.
    pub fn from_path(
        gl: &Arc<glow::Context>,
        path: impl AsRef<Path>,
        options: TextureOptions,
    ) -> Result<Self, TextureError> {
        let path = path.as_ref();
        let image = image::open(path).map_err(|source| {
            let err = TextureError::Image {
                path: path.display().to_string(),
                source,
            };
            log::error!("{err}");
            err
        })?;
        let texture = Self::new(gl, &image, options)?;
        log::debug!(
            "Loaded texture {} ({}x{})",
            path.display(),
            texture.width,
            texture.height
        );
        Ok(texture)
    }

    /// Creates a new texture from the given [`image::DynamicImage`].
    pub fn new(gl: &Arc<glow::Context>, image: &DynamicImage, options: TextureOptions) -> Result<Self, TextureError> {
        let (width, height) = image.dimensions();
        let (format, data) = match options.format {
            PixelFormat::Rgb => (glow::RGB, image.to_rgb8().into_raw()),
            PixelFormat::Rgba => (glow::RGBA, image.to_rgba8().into_raw()),
        };
        unsafe {
            let texture = gl.create_texture().map_err(TextureError::Create)?;
            gl.bind_texture(glow::TEXTURE_2D, Some(texture));
            // RGB rows are not 4-byte aligned for odd widths.
            gl.pixel_store_i32(glow::UNPACK_ALIGNMENT, 1);
            gl.tex_image_2d(
                glow::TEXTURE_2D,
                0,
                format as i32,
                width as i32,
                height as i32,
                0,
                format,
                glow::UNSIGNED_BYTE,
                glow::PixelUnpackData::Slice(Some(data.as_slice())),
            );
            gl.generate_mipmap(glow::TEXTURE_2D);
            gl.tex_parameter_i32(glow::TEXTURE_2D, glow::TEXTURE_WRAP_S, options.wrap as i32);
            gl.tex_parameter_i32(glow::TEXTURE_2D, glow::TEXTURE_WRAP_T, options.wrap as i32);
            gl.tex_parameter_i32(
                glow::TEXTURE_2D,
                glow::TEXTURE_MIN_FILTER,
                options.min_filter as i32,
            );
            gl.tex_parameter_i32(
                glow::TEXTURE_2D,
                glow::TEXTURE_MAG_FILTER,
                options.mag_filter as i32,
            );
            gl.bind_texture(glow::TEXTURE_2D, None);

            Ok(Self {
                gl: Arc::clone(gl),
                id: texture,
                width,
                height,
            })
        }
    }

    /// Returns the width of the texture.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Returns the height of the texture.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Binds the texture to the specified texture unit.
    pub fn bind(&self, unit: u32) {
        unsafe {
            self.gl.active_texture(glow::TEXTURE0 + unit);
            self.gl.bind_texture(glow::TEXTURE_2D, Some(self.id));
        }
    }
}

impl Drop for Texture {
    fn drop(&mut self) {
        unsafe {
            self.gl.delete_texture(self.id);
        }
    }
}
