//! Page-tree manipulation: reordering, removal and blank-page padding
//!
//! Pages are handled as opaque `ObjectId`s; nothing here looks at page
//! content. Reordering rewrites the root pages node with a flat `Kids`
//! array, reparenting every kept page to it.

use lopdf::{Dictionary, Document, Object, ObjectId, Stream};

use crate::types::{RearrangeError, Result};

/// Rebuild the document's page tree so pages appear in `order`.
///
/// `order` holds zero-based indices into the current page sequence. An
/// index may appear more than once (the page object is shared) or not at
/// all (the page is dropped). The new sequence is fully materialized
/// before the tree is touched.
pub(crate) fn apply_order(doc: &mut Document, order: &[usize]) -> Result<()> {
    let page_ids: Vec<ObjectId> = doc.get_pages().values().copied().collect();
    let reordered = select_pages(&page_ids, order)?;
    rebuild_page_tree(doc, &reordered)?;
    doc.prune_objects();
    Ok(())
}

/// Select `pages[order[k]]` for each `k`, leaving `pages` untouched.
pub(crate) fn select_pages(pages: &[ObjectId], order: &[usize]) -> Result<Vec<ObjectId>> {
    order
        .iter()
        .map(|&index| {
            pages
                .get(index)
                .copied()
                .ok_or(RearrangeError::IndexOutOfRange {
                    index,
                    total_pages: pages.len(),
                })
        })
        .collect()
}

/// Remove the pages at the given zero-based indices.
///
/// Indices are removed in strictly descending order so each removal leaves
/// the positions still to be removed untouched. Duplicates collapse.
pub(crate) fn remove_indices(doc: &mut Document, indices: &[usize]) -> Result<()> {
    let mut page_ids: Vec<ObjectId> = doc.get_pages().values().copied().collect();
    let mut sorted = indices.to_vec();
    sorted.sort_unstable();
    sorted.dedup();
    for &index in sorted.iter().rev() {
        if index >= page_ids.len() {
            return Err(RearrangeError::IndexOutOfRange {
                index,
                total_pages: page_ids.len(),
            });
        }
        page_ids.remove(index);
    }
    rebuild_page_tree(doc, &page_ids)?;
    doc.prune_objects();
    Ok(())
}

/// Append `count` blank pages, sized like the last existing page (Letter
/// when the document is empty).
pub(crate) fn pad_with_blank_pages(doc: &mut Document, count: usize) -> Result<()> {
    if count == 0 {
        return Ok(());
    }
    let mut page_ids: Vec<ObjectId> = doc.get_pages().values().copied().collect();
    let media_box = page_ids
        .last()
        .and_then(|&id| doc.get_dictionary(id).ok())
        .and_then(|page| page.get(b"MediaBox").ok())
        .and_then(|obj| obj.as_array().ok().cloned())
        .unwrap_or_else(letter_media_box);

    let pages_id = root_pages_id(doc)?;
    for _ in 0..count {
        page_ids.push(create_blank_page(doc, &media_box, pages_id));
    }
    rebuild_page_tree(doc, &page_ids)
}

fn rebuild_page_tree(doc: &mut Document, page_ids: &[ObjectId]) -> Result<()> {
    let pages_id = root_pages_id(doc)?;

    for &page_id in page_ids {
        let page = doc.get_object_mut(page_id)?.as_dict_mut()?;
        page.set("Parent", Object::Reference(pages_id));
    }

    let kids: Vec<Object> = page_ids
        .iter()
        .map(|&id| Object::Reference(id))
        .collect();
    let pages = doc.get_object_mut(pages_id)?.as_dict_mut()?;
    pages.set("Count", Object::Integer(page_ids.len() as i64));
    pages.set("Kids", Object::Array(kids));
    Ok(())
}

fn root_pages_id(doc: &Document) -> Result<ObjectId> {
    let catalog_id = doc.trailer.get(b"Root")?.as_reference()?;
    let pages_id = doc.get_dictionary(catalog_id)?.get(b"Pages")?.as_reference()?;
    Ok(pages_id)
}

fn create_blank_page(doc: &mut Document, media_box: &[Object], parent_id: ObjectId) -> ObjectId {
    let content_id = doc.add_object(Stream::new(Dictionary::new(), Vec::new()));

    let mut page = Dictionary::new();
    page.set("Type", Object::Name(b"Page".to_vec()));
    page.set("Parent", Object::Reference(parent_id));
    page.set("MediaBox", Object::Array(media_box.to_vec()));
    page.set("Contents", Object::Reference(content_id));
    page.set("Resources", Object::Dictionary(Dictionary::new()));

    doc.add_object(page)
}

fn letter_media_box() -> Vec<Object> {
    vec![
        Object::Integer(0),
        Object::Integer(0),
        Object::Integer(612),
        Object::Integer(792),
    ]
}
