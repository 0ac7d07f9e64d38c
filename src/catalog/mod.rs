pub mod listing;
pub mod numbering;
pub mod selection_input;

pub use listing::{render_listing, write_listing};
pub use numbering::{number, SectionCatalog};
pub use selection_input::{extract_addresses, parse_selection, read_selection, render_selection, write_selection};
