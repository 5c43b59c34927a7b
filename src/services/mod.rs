//! Service layer for ItemPlus
//!
//! The service layer provides business logic on top of the storage layer:
//! export selection and enrichment, price resolution, and the item save hook.

pub mod export;
pub mod item;
pub mod price;
pub mod pricing;
pub mod selection;

pub use export::ExportService;
pub use item::{on_item_save, ItemService, SaveKind};
pub use price::PriceService;
pub use pricing::resolve_price;
pub use selection::{parse_item_refs, select_weight_items};
