//! Document model types.
//!
//! Two families live here: the classification model ([`StructureMap`] and
//! its elements) produced from extracted text, and the rendering model
//! ([`StyledDocument`] and [`PaginatedDocument`]) produced from marker text.

mod document;
mod element;
mod page;
mod structure;
mod styled;

pub use document::{Metadata, PaginatedDocument};
pub use element::{ElementKind, HeadingLevel, StructuralElement};
pub use page::{FontFace, Page, PlacedLine, PlacedWord};
pub use structure::{NumberedItem, NumberedList, StructureCounts, StructureMap};
pub use styled::{plain_text, Alignment, ListEntry, StyledBlock, StyledDocument, TextRun};
