//! The palette controller: turns user intents into palette edits and layout
//! changes, and forwards apply/clear requests to a host.
//!
//! The working palette lives in memory and is only written back on an explicit
//! save. Unsaved edits survive as long as the controller does.

use thiserror::Error;

use crate::color::{self, ROUND_DECIMALS, Rgb};
use crate::error::Rejected;
use crate::host::{ColorApplier, HostError};
use crate::layout::{Cell, LayoutIndex, Placement, Reflow};
use crate::palette::{ColorEntry, Palette, is_blank, normalize_name};
use crate::storage::{DocumentStorage, PersistedDocument, SaveOption, StorageResult};

/// The two error messages the tool window can show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorBanner {
    /// Under the new-color name field.
    ColorName,
    /// Under the delete table.
    SelectedColor,
}

/// Visibility and text of the error banners.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Banners {
    color_name: Option<String>,
    selected_color: Option<String>,
}

impl Banners {
    /// Message of a banner, `None` when hidden.
    pub fn message(&self, banner: ErrorBanner) -> Option<&str> {
        match banner {
            ErrorBanner::ColorName => self.color_name.as_deref(),
            ErrorBanner::SelectedColor => self.selected_color.as_deref(),
        }
    }

    pub fn is_visible(&self, banner: ErrorBanner) -> bool {
        self.message(banner).is_some()
    }

    fn slot(&mut self, banner: ErrorBanner) -> &mut Option<String> {
        match banner {
            ErrorBanner::ColorName => &mut self.color_name,
            ErrorBanner::SelectedColor => &mut self.selected_color,
        }
    }

    fn show(&mut self, banner: ErrorBanner, rejected: &Rejected) {
        *self.slot(banner) = Some(rejected.to_string());
    }

    fn hide(&mut self, banner: ErrorBanner) {
        *self.slot(banner) = None;
    }
}

/// Result of a successful add.
#[derive(Debug, Clone, PartialEq)]
pub struct AddOutcome {
    pub entry: ColorEntry,
    pub placement: Placement,
}

/// Result of a successful delete.
#[derive(Debug, Clone, PartialEq)]
pub struct DeleteOutcome {
    pub removed: ColorEntry,
    pub reflow: Reflow,
}

/// Failure to apply a named color.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApplyError {
    #[error(transparent)]
    Rejected(#[from] Rejected),
    #[error(transparent)]
    Host(#[from] HostError),
}

/// Owns the working palette, its layout and the document it came from.
pub struct PaletteController {
    storage: Box<dyn DocumentStorage>,
    document: PersistedDocument,
    palette: Palette,
    layout: LayoutIndex,
    banners: Banners,
}

impl PaletteController {
    /// Load the document from `storage`.
    ///
    /// Fails when the document cannot be read or parsed; without a palette
    /// there is nothing to show.
    pub fn load(storage: impl DocumentStorage + 'static) -> StorageResult<Self> {
        Self::load_boxed(Box::new(storage))
    }

    /// Like [`Self::load`] for an already boxed storage.
    pub fn load_boxed(storage: Box<dyn DocumentStorage>) -> StorageResult<Self> {
        let document = storage.load()?;
        let palette = document.palette.clone();
        log::info!(
            "Palette controller ready with {} colors from {}",
            palette.len(),
            storage.describe()
        );
        Ok(Self {
            storage,
            layout: LayoutIndex::for_count(palette.len()),
            document,
            palette,
            banners: Banners::default(),
        })
    }

    /// The working palette.
    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    /// The document as last loaded or saved.
    pub fn document(&self) -> &PersistedDocument {
        &self.document
    }

    pub fn total_rows(&self) -> usize {
        self.layout.total_rows()
    }

    pub fn banners(&self) -> &Banners {
        &self.banners
    }

    /// Where the document is stored.
    pub fn storage_description(&self) -> String {
        self.storage.describe()
    }

    /// Whether the working palette differs from the stored one.
    pub fn is_dirty(&self) -> bool {
        self.palette != self.document.palette
    }

    /// Every entry with its grid cell, for building the grids from scratch.
    pub fn cells(&self) -> impl Iterator<Item = (Cell, &ColorEntry)> {
        self.palette
            .iter()
            .enumerate()
            .map(|(i, entry)| (Cell::of_index(i), entry))
    }

    /// Create a color from slider values and append it.
    pub fn add_color(
        &mut self,
        name: &str,
        hue: f64,
        saturation: f64,
        value: f64,
    ) -> Result<AddOutcome, Rejected> {
        match self.try_add(name, hue, saturation, value) {
            Ok(outcome) => {
                self.banners.hide(ErrorBanner::ColorName);
                log::info!(
                    "Added color \"{}\" at ({}, {})",
                    outcome.entry.name,
                    outcome.placement.cell.row,
                    outcome.placement.cell.column
                );
                Ok(outcome)
            }
            Err(rejected) => {
                log::warn!("{}", rejected);
                self.banners.show(ErrorBanner::ColorName, &rejected);
                Err(rejected)
            }
        }
    }

    fn try_add(
        &mut self,
        name: &str,
        hue: f64,
        saturation: f64,
        value: f64,
    ) -> Result<AddOutcome, Rejected> {
        if is_blank(name) {
            return Err(Rejected::EmptyName);
        }
        let name = normalize_name(name);
        if self.palette.contains(&name) {
            return Err(Rejected::DuplicateName(name));
        }

        let rgb = color::hsv_to_rgb(hue, saturation, value).rounded(ROUND_DECIMALS);
        let entry = ColorEntry::uniform(name, rgb);
        let count = self.palette.len();
        self.palette.push(entry.clone())?;
        let placement = self.layout.append(count);
        Ok(AddOutcome { entry, placement })
    }

    /// Delete the color the user picked in the name table.
    ///
    /// `name` is `None` when nothing is selected.
    pub fn delete_selected(&mut self, name: Option<&str>) -> Result<DeleteOutcome, Rejected> {
        match self.try_delete(name) {
            Ok(outcome) => {
                self.banners.hide(ErrorBanner::SelectedColor);
                log::info!(
                    "Deleted color \"{}\", {} shifted, {} rows",
                    outcome.removed.name,
                    outcome.reflow.moves.len(),
                    outcome.reflow.rows_after
                );
                Ok(outcome)
            }
            Err(rejected) => {
                log::warn!("{}", rejected);
                self.banners.show(ErrorBanner::SelectedColor, &rejected);
                Err(rejected)
            }
        }
    }

    fn try_delete(&mut self, name: Option<&str>) -> Result<DeleteOutcome, Rejected> {
        let name = name.ok_or(Rejected::NoSelection)?;
        let index = self
            .palette
            .index_of(name)
            .ok_or_else(|| Rejected::NotFound(normalize_name(name)))?;
        let reflow = self
            .layout
            .remove(&self.palette, index)
            .ok_or_else(|| Rejected::NotFound(normalize_name(name)))?;
        let removed = self
            .palette
            .remove(index)
            .ok_or_else(|| Rejected::NotFound(normalize_name(name)))?;
        Ok(DeleteOutcome { removed, reflow })
    }

    /// The `(scene, outliner)` pair stored under `name`.
    pub fn colors_for(&self, name: &str) -> Result<(Rgb, Rgb), Rejected> {
        self.palette
            .get(name)
            .map(ColorEntry::colors)
            .ok_or_else(|| Rejected::NotFound(normalize_name(name)))
    }

    /// Apply the color named `name` to the host's current selection.
    pub fn apply_color<A: ColorApplier + ?Sized>(
        &self,
        name: &str,
        applier: &mut A,
    ) -> Result<(Rgb, Rgb), ApplyError> {
        let (scene, outliner) = self.colors_for(name)?;
        let targets = applier.selection();
        applier.apply(scene, outliner, &targets)?;
        log::debug!("Applied \"{}\" to {} object(s)", name, targets.len());
        Ok((scene, outliner))
    }

    /// Remove color from the host's current selection.
    pub fn clear_color<A: ColorApplier + ?Sized>(&self, applier: &mut A) -> Result<(), HostError> {
        let targets = applier.selection();
        applier.clear(&targets)
    }

    /// Write the working palette into the document and save it.
    ///
    /// On failure nothing in memory changes, so the save can be retried.
    pub fn save_changes(&mut self, option: SaveOption) -> StorageResult<()> {
        let mut document = self.document.clone();
        document.store(option, &self.palette);
        if let Err(e) = self.storage.save(&document) {
            log::error!("Failed to save {}: {}", self.storage.describe(), e);
            return Err(e);
        }
        self.document = document;
        Ok(())
    }

    /// Re-read the document, discarding unsaved edits.
    ///
    /// On failure the working palette is kept.
    pub fn reload(&mut self) -> StorageResult<()> {
        let document = self.storage.load()?;
        self.install(document);
        Ok(())
    }

    /// Switch to another document. On failure the current one is kept.
    pub fn open(&mut self, storage: Box<dyn DocumentStorage>) -> StorageResult<()> {
        let document = storage.load()?;
        self.storage = storage;
        self.install(document);
        Ok(())
    }

    fn install(&mut self, document: PersistedDocument) {
        self.palette = document.palette.clone();
        self.layout = LayoutIndex::for_count(self.palette.len());
        self.document = document;
        self.banners = Banners::default();
        log::info!(
            "Loaded {} colors from {}",
            self.palette.len(),
            self.storage.describe()
        );
    }
}
