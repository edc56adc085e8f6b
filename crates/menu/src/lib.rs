//! `steward-menu` — permission-filtered navigation menu.
//!
//! A static catalog of destinations is compiled (or loaded) once; the
//! assembler derives a per-render tree from it plus the current permission
//! snapshot. The derived tree is pure data for the navigation renderer:
//! nothing here draws anything.

pub mod assemble;
pub mod catalog;
pub mod icon;

pub use assemble::{ActionAccess, ProcessedGroup, ProcessedLeaf, ProcessedMenuNode, build_menu};
pub use catalog::{CatalogError, MenuEntry, MenuGroup, MenuLeaf, catalog_from_json};
pub use icon::Icon;
