//! Icon Management
//!
//! Embedded SVG icons rasterized into egui textures once at startup. Icons
//! are drawn white and tinted by the widgets that place them, so one texture
//! set serves every theme.

use std::collections::HashMap;

use egui::load::SizedTexture;
use egui::{Context, TextureHandle, TextureOptions, Vec2};
use resvg::tiny_skia;
use rust_embed::RustEmbed;
use thiserror::Error;

#[derive(RustEmbed)]
#[folder = "assets/icons"]
struct IconAssets;

/// Rasterization edge length in pixels; large enough for crisp 16-24pt use
const ICON_TEXTURE_SIZE: u32 = 64;

/// Icons bundled with the UI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AppIcon {
    /// Pin trigger glyph
    Pin,
    /// Project component
    Project,
    /// Directory component
    Folder,
    /// File component
    File,
}

impl AppIcon {
    /// All bundled icons
    pub const ALL: [AppIcon; 4] = [
        AppIcon::Pin,
        AppIcon::Project,
        AppIcon::Folder,
        AppIcon::File,
    ];

    fn asset_name(self) -> &'static str {
        match self {
            AppIcon::Pin => "pin.svg",
            AppIcon::Project => "project.svg",
            AppIcon::Folder => "folder.svg",
            AppIcon::File => "file.svg",
        }
    }
}

/// Errors raised while decoding bundled icons
#[derive(Debug, Error)]
pub enum IconError {
    /// The named asset is not embedded in the binary
    #[error("icon asset {0} is not bundled")]
    MissingAsset(&'static str),
    /// The asset is not valid SVG
    #[error("failed to parse {name}: {source}")]
    InvalidSvg {
        /// Asset file name
        name: &'static str,
        /// Parser error
        #[source]
        source: usvg::Error,
    },
    /// Pixmap allocation failed
    #[error("failed to allocate pixmap for {0}")]
    Raster(&'static str),
}

/// Loads and caches icon textures
pub struct IconManager {
    textures: HashMap<AppIcon, TextureHandle>,
}

impl IconManager {
    /// Rasterize every bundled icon into the given egui context
    pub fn new(ctx: &Context) -> Result<Self, IconError> {
        let mut textures = HashMap::new();
        for icon in AppIcon::ALL {
            let name = icon.asset_name();
            let asset = IconAssets::get(name).ok_or(IconError::MissingAsset(name))?;
            let image = rasterize(name, &asset.data)?;
            let texture = ctx.load_texture(name, image, TextureOptions::LINEAR);
            textures.insert(icon, texture);
        }
        Ok(Self { textures })
    }

    /// Texture handle for an icon
    pub fn get(&self, icon: AppIcon) -> Option<&TextureHandle> {
        self.textures.get(&icon)
    }

    /// Widget-sized image for an icon
    pub fn image(&self, icon: AppIcon, size: f32) -> Option<egui::Image<'_>> {
        self.get(icon)
            .map(|texture| egui::Image::new(SizedTexture::new(texture.id(), Vec2::splat(size))))
    }
}

fn rasterize(name: &'static str, data: &[u8]) -> Result<egui::ColorImage, IconError> {
    let tree = usvg::Tree::from_data(data, &usvg::Options::default())
        .map_err(|source| IconError::InvalidSvg { name, source })?;
    let mut pixmap = tiny_skia::Pixmap::new(ICON_TEXTURE_SIZE, ICON_TEXTURE_SIZE)
        .ok_or(IconError::Raster(name))?;

    let size = tree.size();
    let transform = tiny_skia::Transform::from_scale(
        ICON_TEXTURE_SIZE as f32 / size.width(),
        ICON_TEXTURE_SIZE as f32 / size.height(),
    );
    resvg::render(&tree, transform, &mut pixmap.as_mut());

    Ok(egui::ColorImage::from_rgba_premultiplied(
        [ICON_TEXTURE_SIZE as usize, ICON_TEXTURE_SIZE as usize],
        pixmap.data(),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_bundled_icons_load() {
        let ctx = Context::default();
        let manager = IconManager::new(&ctx).unwrap();

        for icon in AppIcon::ALL {
            assert!(manager.get(icon).is_some(), "{:?} did not load", icon);
        }
    }

    #[test]
    fn test_image_carries_requested_size() {
        let ctx = Context::default();
        let manager = IconManager::new(&ctx).unwrap();

        assert!(manager.image(AppIcon::Pin, 16.0).is_some());
    }
}
