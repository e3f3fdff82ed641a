//! Page rearrangement and removal
//!
//! This module orchestrates the pipeline:
//! 1. Resolve the instruction (explicit page list or named sort mode) into
//!    a zero-based target order or deletion set
//! 2. Pad the document with blank pages when the mode lays out more slots
//!    than the document has pages
//! 3. Rebuild the page tree in the new order

mod io;
mod pages;

pub use io::{load_pdf, load_pdf_bytes, pdf_to_bytes, save_pdf};

use std::path::{Path, PathBuf};
use std::str::FromStr;

use lopdf::Document;

use crate::layout::sort_order;
use crate::page_list::parse_page_list;
use crate::types::{Result, SortMode};

/// Suffix for the output of a rearrangement
pub const REARRANGED_SUFFIX: &str = "_rearranged";
/// Suffix for the output of a page removal
pub const REMOVED_PAGES_SUFFIX: &str = "_removed_pages";

/// Resolve a rearrangement instruction into a zero-based target order.
///
/// A non-blank `mode` takes precedence over the explicit `page_order`;
/// otherwise `page_order` is split on `,` and parsed as a page list. For
/// the half-sheet modes the order covers the padded page count (see
/// [`SortMode::required_page_count`]).
pub fn compute_rearrangement(
    page_order: Option<&str>,
    mode: Option<&str>,
    total_pages: usize,
) -> Result<Vec<usize>> {
    match parse_mode(mode)? {
        Some(mode) => Ok(sort_order(mode, total_pages)),
        None => {
            let tokens: Vec<&str> = page_order.unwrap_or_default().split(',').collect();
            parse_page_list(&tokens, total_pages, false)
        }
    }
}

/// Resolve a page selection into the ascending, deduplicated set of
/// zero-based indices to delete.
pub fn compute_deletion(page_order: &str, total_pages: usize) -> Result<Vec<usize>> {
    let tokens: Vec<&str> = page_order.split(',').collect();
    let mut indices = parse_page_list(&tokens, total_pages, false)?;
    indices.sort_unstable();
    indices.dedup();
    Ok(indices)
}

/// Rearrange the pages of `document` by explicit page order or sort mode.
pub async fn rearrange_pages(
    document: Document,
    page_order: Option<String>,
    mode: Option<String>,
) -> Result<Document> {
    tokio::task::spawn_blocking(move || {
        rearrange_sync(document, page_order.as_deref(), mode.as_deref())
    })
    .await?
}

/// Remove the selected pages from `document`.
pub async fn remove_pages(document: Document, page_order: String) -> Result<Document> {
    tokio::task::spawn_blocking(move || remove_sync(document, &page_order)).await?
}

fn rearrange_sync(
    mut document: Document,
    page_order: Option<&str>,
    mode: Option<&str>,
) -> Result<Document> {
    let total_pages = document.get_pages().len();
    let mode = parse_mode(mode)?;

    if let Some(mode) = mode {
        let required = mode.required_page_count(total_pages);
        if required > total_pages {
            log::debug!("padding {total_pages}-page document to {required} pages for {mode}");
            pages::pad_with_blank_pages(&mut document, required - total_pages)?;
        }
    }

    let order = match mode {
        Some(mode) => sort_order(mode, total_pages),
        None => {
            let tokens: Vec<&str> = page_order.unwrap_or_default().split(',').collect();
            parse_page_list(&tokens, total_pages, false)?
        }
    };
    log::debug!("new page order for {total_pages} pages: {order:?}");

    pages::apply_order(&mut document, &order)?;
    Ok(document)
}

fn remove_sync(mut document: Document, page_order: &str) -> Result<Document> {
    let total_pages = document.get_pages().len();
    let to_delete = compute_deletion(page_order, total_pages)?;
    log::debug!("removing {} of {total_pages} pages", to_delete.len());

    pages::remove_indices(&mut document, &to_delete)?;
    Ok(document)
}

fn parse_mode(mode: Option<&str>) -> Result<Option<SortMode>> {
    match mode.map(str::trim).filter(|m| !m.is_empty()) {
        Some(name) => SortMode::from_str(name).map(Some),
        None => Ok(None),
    }
}

/// Derive the output file name: input name with the extension stripped,
/// `suffix` appended and the `.pdf` extension restored.
pub fn output_file_name(input: &Path, suffix: &str) -> PathBuf {
    let stem = input.file_stem().unwrap_or_default().to_string_lossy();
    input.with_file_name(format!("{stem}{suffix}.pdf"))
}
