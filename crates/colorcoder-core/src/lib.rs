//! ColorCoder Core Library
//!
//! Named-color palette management: the palette model and its JSON document,
//! grid layout bookkeeping for the color buttons and name table, and the
//! controller that applies colors through a host binding.

pub mod color;
pub mod controller;
pub mod error;
pub mod host;
pub mod layout;
pub mod palette;
pub mod registry;
pub mod storage;

pub use color::{Preview, Rgb, hsv_to_rgb, preview};
pub use controller::{AddOutcome, ApplyError, Banners, DeleteOutcome, ErrorBanner, PaletteController};
pub use error::Rejected;
pub use host::{ColorApplier, HostError, ObjectId, SceneHost};
pub use layout::{Cell, CellMove, CellTable, GRID_COLUMNS, LayoutIndex, Placement, Reflow};
pub use palette::{ColorEntry, Palette};
pub use registry::ToolRegistry;
pub use storage::{DocumentStorage, FileStorage, MemoryStorage, PersistedDocument, SaveOption, StorageError};
