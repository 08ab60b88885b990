// Copyright 2025 Eric Jingryd (tidynest@proton.me)
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! src/core/assets.rs
//!
//! Image choices and the rule that maps an image key to its data
//!
//! The four selectable images are compiled into the binary, so the app
//! works from any working directory. An optional images directory overrides
//! them: `"Portada"` resolves to `<images_dir>/Portada.png` when that file
//! exists, otherwise to the bundled copy. Decoding is left to the view.

use std::{
    fmt,
    path::{Path, PathBuf},
    str::FromStr,
};

use crate::core::error::AssetError;

/// File extension of every image asset
pub const IMAGE_EXTENSION: &str = "png";

/// The fixed set of images offered by the selector
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ImageChoice {
    Portada,
    Componentes,
    Suscripcion,
    Notificacion,
}

impl ImageChoice {
    /// All choices, in the order the selector lists them
    pub const ALL: [ImageChoice; 4] = [
        ImageChoice::Portada,
        ImageChoice::Componentes,
        ImageChoice::Suscripcion,
        ImageChoice::Notificacion,
    ];

    /// The label shown in the selector, which is also the asset key
    pub fn label(&self) -> &'static str {
        match self {
            ImageChoice::Portada => "Portada",
            ImageChoice::Componentes => "Componentes",
            ImageChoice::Suscripcion => "Suscripción",
            ImageChoice::Notificacion => "Notificación",
        }
    }

    /// Position in [`ImageChoice::ALL`]
    pub fn index(&self) -> u32 {
        match self {
            ImageChoice::Portada => 0,
            ImageChoice::Componentes => 1,
            ImageChoice::Suscripcion => 2,
            ImageChoice::Notificacion => 3,
        }
    }

    pub fn from_index(index: u32) -> Option<Self> {
        Self::ALL.get(usize::try_from(index).ok()?).copied()
    }

    /// Labels of all choices, for populating a string list
    pub fn labels() -> [&'static str; 4] {
        Self::ALL.map(|choice| choice.label())
    }
}

impl fmt::Display for ImageChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ImageChoice {
    type Err = AssetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|choice| choice.label() == s)
            .ok_or_else(|| AssetError::InvalidKey(s.to_string()))
    }
}

/// Returns the PNG bytes compiled into the binary for `key`
pub fn bundled_image(key: &str) -> Option<&'static [u8]> {
    let bytes: &'static [u8] = match key.parse::<ImageChoice>().ok()? {
        ImageChoice::Portada => include_bytes!("../../assets/images/Portada.png"),
        ImageChoice::Componentes => include_bytes!("../../assets/images/Componentes.png"),
        ImageChoice::Suscripcion => include_bytes!("../../assets/images/Suscripción.png"),
        ImageChoice::Notificacion => include_bytes!("../../assets/images/Notificación.png"),
    };
    Some(bytes)
}

/// Where the data for an image key comes from
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AssetSource {
    /// `<key>.png` in the images directory
    File(PathBuf),
    /// Copy compiled into the binary
    Bundled(&'static [u8]),
}

impl fmt::Display for AssetSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AssetSource::File(path) => write!(f, "{}", path.display()),
            AssetSource::Bundled(bytes) => write!(f, "bundled ({} bytes)", bytes.len()),
        }
    }
}

/// Resolves image keys to files or bundled data
#[derive(Clone, Debug, Default)]
pub struct AssetResolver {
    images_dir: Option<PathBuf>,
}

impl AssetResolver {
    /// Resolver that only knows the bundled images
    pub fn bundled() -> Self {
        Self::default()
    }

    /// Resolver that prefers files in `images_dir` over the bundled images
    pub fn with_images_dir(images_dir: Option<PathBuf>) -> Self {
        Self { images_dir }
    }

    pub fn images_dir(&self) -> Option<&Path> {
        self.images_dir.as_deref()
    }

    /// Returns `<images_dir>/<key>.png` without touching the filesystem
    pub fn path_for(&self, key: &str) -> Option<PathBuf> {
        self.images_dir
            .as_ref()
            .map(|dir| dir.join(format!("{}.{}", key, IMAGE_EXTENSION)))
    }

    /// Resolves a key to image data
    ///
    /// # Returns
    ///
    /// * `Ok(AssetSource::File)` - `<key>.png` exists in the images directory
    /// * `Ok(AssetSource::Bundled)` - No override file, but the key is bundled
    /// * `Err(AssetError::InvalidKey)` - Key is empty or contains a path component
    /// * `Err(AssetError::NotFound)` - Neither a file nor a bundled image
    pub fn resolve(&self, key: &str) -> Result<AssetSource, AssetError> {
        if !is_plain_key(key) {
            return Err(AssetError::InvalidKey(key.to_string()));
        }

        if let Some(path) = self.path_for(key).filter(|path| path.is_file()) {
            return Ok(AssetSource::File(path));
        }

        bundled_image(key)
            .map(AssetSource::Bundled)
            .ok_or_else(|| AssetError::NotFound(key.to_string()))
    }

    /// Resolves every selectable image, in selector order
    pub fn check_all(&self) -> Vec<(ImageChoice, Result<AssetSource, AssetError>)> {
        ImageChoice::ALL
            .into_iter()
            .map(|choice| (choice, self.resolve(choice.label())))
            .collect()
    }
}

/// A key is plain when it names a file directly inside the images directory
fn is_plain_key(key: &str) -> bool {
    !key.trim().is_empty() && key != "." && key != ".." && !key.contains(['/', '\\'])
}
