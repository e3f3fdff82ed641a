pub mod rearrange;

mod layout;
mod page_list;
mod types;

pub use layout::sort_order;
pub use page_list::parse_page_list;
pub use rearrange::{
    REARRANGED_SUFFIX, REMOVED_PAGES_SUFFIX, compute_deletion, compute_rearrangement, load_pdf,
    load_pdf_bytes, output_file_name, pdf_to_bytes, rearrange_pages, remove_pages, save_pdf,
};
pub use types::*;
