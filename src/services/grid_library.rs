use std::cell::RefCell;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

use scope_recolor::{GridBitmapSource, Layout, RgbImage};

use crate::rendering::decode_file;

/// Grid-line bitmaps stored as image files in a data directory.
///
/// Each layout's `grids` entry names its file relative to the directory.
/// Decoded bitmaps are kept for the lifetime of the library, so a batch of
/// captures with the same layout decodes its grid only once.
pub struct GridLibrary {
    data_dir: PathBuf,
    cache: RefCell<HashMap<String, RgbImage>>,
}

impl GridLibrary {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
            cache: RefCell::new(HashMap::new()),
        }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Path of the grid bitmap for `layout`
    pub fn path_for(&self, layout: &Layout) -> PathBuf {
        self.data_dir.join(&layout.grid_image.file)
    }
}

impl GridBitmapSource for GridLibrary {
    fn load(&self, layout: &Layout) -> Result<RgbImage, Box<dyn std::error::Error + Send + Sync>> {
        if let Some(img) = self.cache.borrow().get(&layout.id) {
            tracing::trace!(layout = %layout.id, "Grid bitmap from cache");
            return Ok(img.clone());
        }

        let path = self.path_for(layout);
        tracing::debug!(layout = %layout.id, path = %path.display(), "Loading grid bitmap");
        let img = decode_file(&path)?;
        self.cache
            .borrow_mut()
            .insert(layout.id.clone(), img.clone());
        Ok(img)
    }
}
