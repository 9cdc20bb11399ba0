//! Read-only font and image cache.
//!
//! Assets are loaded once through [`AssetCacheBuilder`] and then shared
//! (typically as `Arc<AssetCache>`) by every card composer. The cache is
//! immutable after `build()`, so lookups need no locking.

use std::collections::HashMap;
use std::fs;
use std::path::Path;
use std::sync::Arc;

use image::RgbaImage;

use crate::error::{AssetError, BuildError};
use crate::font::{Font, FontFace};

/// Named fonts and decoded images.
#[derive(Debug, Default)]
pub struct AssetCache {
    fonts: HashMap<String, FontFace>,
    images: HashMap<String, Arc<RgbaImage>>,
}

impl AssetCache {
    pub fn builder() -> AssetCacheBuilder {
        AssetCacheBuilder::default()
    }

    /// A font face at a pixel size.
    pub fn font(&self, name: &str, size: f32) -> Result<Font, BuildError> {
        self.fonts
            .get(name)
            .map(|face| Font::new(face.clone(), size))
            .ok_or_else(|| BuildError::UnknownAsset {
                kind: "font",
                name: name.to_string(),
            })
    }

    /// A decoded image, shared rather than copied.
    pub fn image(&self, name: &str) -> Result<Arc<RgbaImage>, BuildError> {
        self.images
            .get(name)
            .cloned()
            .ok_or_else(|| BuildError::UnknownAsset {
                kind: "image",
                name: name.to_string(),
            })
    }

    pub fn font_names(&self) -> impl Iterator<Item = &str> {
        self.fonts.keys().map(String::as_str)
    }

    pub fn image_names(&self) -> impl Iterator<Item = &str> {
        self.images.keys().map(String::as_str)
    }
}

/// Loads assets into a new [`AssetCache`]. Later entries replace earlier
/// ones with the same name.
#[derive(Debug, Default)]
pub struct AssetCacheBuilder {
    cache: AssetCache,
}

impl AssetCacheBuilder {
    /// Register an already-constructed face (e.g. a block face).
    pub fn face(mut self, name: impl Into<String>, face: FontFace) -> Self {
        self.cache.fonts.insert(name.into(), face);
        self
    }

    /// Parse and register a TTF/OTF font.
    pub fn font_bytes(self, name: impl Into<String>, bytes: &[u8]) -> Result<Self, AssetError> {
        let name = name.into();
        let face = FontFace::from_bytes(bytes).map_err(|reason| AssetError::Font {
            name: name.clone(),
            reason,
        })?;
        tracing::debug!(font = %name, "loaded font");
        Ok(self.face(name, face))
    }

    /// Read, parse and register a font file.
    pub fn font_file(self, name: impl Into<String>, path: impl AsRef<Path>) -> Result<Self, AssetError> {
        let bytes = read(path.as_ref())?;
        self.font_bytes(name, &bytes)
    }

    /// Register decoded pixels.
    pub fn pixels(mut self, name: impl Into<String>, pixels: RgbaImage) -> Self {
        self.cache.images.insert(name.into(), Arc::new(pixels));
        self
    }

    /// Decode and register an encoded image (PNG, JPEG, ...).
    pub fn image_bytes(self, name: impl Into<String>, bytes: &[u8]) -> Result<Self, AssetError> {
        let name = name.into();
        let pixels = image::load_from_memory(bytes)
            .map_err(|source| AssetError::Image {
                name: name.clone(),
                source,
            })?
            .to_rgba8();
        tracing::debug!(image = %name, width = pixels.width(), height = pixels.height(), "loaded image");
        Ok(self.pixels(name, pixels))
    }

    /// Read, decode and register an image file.
    pub fn image_file(self, name: impl Into<String>, path: impl AsRef<Path>) -> Result<Self, AssetError> {
        let bytes = read(path.as_ref())?;
        self.image_bytes(name, &bytes)
    }

    pub fn build(self) -> AssetCache {
        self.cache
    }
}

fn read(path: &Path) -> Result<Vec<u8>, AssetError> {
    fs::read(path).map_err(|source| AssetError::Io {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn png(width: u32, height: u32) -> Vec<u8> {
        let mut bytes = Vec::new();
        RgbaImage::new(width, height)
            .write_to(&mut Cursor::new(&mut bytes), image::ImageFormat::Png)
            .unwrap();
        bytes
    }

    #[test]
    fn lookups_by_name() {
        let cache = AssetCache::builder()
            .face("mono", FontFace::block(0.5, 0.8, 0.2))
            .image_bytes("icon", &png(3, 2))
            .unwrap()
            .build();

        let font = cache.font("mono", 14.0).unwrap();
        assert_eq!(font.size(), 14.0);
        assert_eq!(cache.image("icon").unwrap().dimensions(), (3, 2));
    }

    #[test]
    fn unknown_names_fail() {
        let cache = AssetCache::builder().build();
        assert!(matches!(
            cache.font("missing", 12.0),
            Err(BuildError::UnknownAsset { kind: "font", .. })
        ));
        assert!(matches!(
            cache.image("missing"),
            Err(BuildError::UnknownAsset { kind: "image", .. })
        ));
    }

    #[test]
    fn bad_font_bytes_name_the_asset() {
        let err = AssetCache::builder().font_bytes("broken", b"xyz").unwrap_err();
        assert!(matches!(err, AssetError::Font { ref name, .. } if name == "broken"));
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = AssetCache::builder()
            .image_file("icon", "/definitely/not/here.png")
            .unwrap_err();
        assert!(matches!(err, AssetError::Io { .. }));
    }

    #[test]
    fn images_are_shared() {
        let cache = AssetCache::builder().pixels("bg", RgbaImage::new(2, 2)).build();
        let a = cache.image("bg").unwrap();
        let b = cache.image("bg").unwrap();
        assert!(Arc::ptr_eq(&a, &b));
    }
}
