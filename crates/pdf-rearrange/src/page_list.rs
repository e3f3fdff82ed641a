//! Parsing of user-supplied page selections like `1,3-5,n`

use crate::types::{RearrangeError, Result};

/// Placeholder token for the last page of the document
const LAST_PAGE_TOKEN: &str = "n";

/// Parse comma-split page-selection tokens into zero-based page indices.
///
/// Accepts single page numbers, ranges with either endpoint order (`3-7`
/// ascending, `7-3` descending) and the placeholder `n` for the last page,
/// standalone or as a range endpoint. Input is 1-based and every resolved
/// page must fall within `1..=total_pages`. Blank tokens are skipped, so an
/// empty selection yields an empty order. `reverse` flips the final order.
pub fn parse_page_list(tokens: &[&str], total_pages: usize, reverse: bool) -> Result<Vec<usize>> {
    let mut order = Vec::new();
    for raw in tokens {
        let token = raw.trim();
        if token.is_empty() {
            continue;
        }
        if let Some((from, to)) = token.split_once('-') {
            let from = parse_page_number(from.trim(), total_pages)?;
            let to = parse_page_number(to.trim(), total_pages)?;
            if from <= to {
                order.extend((from..=to).map(|page| page - 1));
            } else {
                order.extend((to..=from).rev().map(|page| page - 1));
            }
        } else {
            order.push(parse_page_number(token, total_pages)? - 1);
        }
    }
    if reverse {
        order.reverse();
    }
    Ok(order)
}

/// Resolve a single token to a 1-based page number within the document.
fn parse_page_number(token: &str, total_pages: usize) -> Result<usize> {
    let page = if token.eq_ignore_ascii_case(LAST_PAGE_TOKEN) {
        total_pages
    } else {
        token.parse().map_err(|_| {
            RearrangeError::InvalidRange(format!("invalid page number: {token:?}"))
        })?
    };
    if page == 0 || page > total_pages {
        return Err(RearrangeError::InvalidRange(format!(
            "page {page} is out of bounds for a document with {total_pages} pages"
        )));
    }
    Ok(page)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_pages_and_range() {
        let order = parse_page_list(&["3-5", "1"], 10, false).unwrap();
        assert_eq!(order, vec![2, 3, 4, 0]);
    }

    #[test]
    fn test_descending_range() {
        let order = parse_page_list(&["7-3"], 10, false).unwrap();
        assert_eq!(order, vec![6, 5, 4, 3, 2]);
    }

    #[test]
    fn test_last_page_placeholder() {
        assert_eq!(parse_page_list(&["n"], 10, false).unwrap(), vec![9]);
        assert_eq!(parse_page_list(&["N"], 10, false).unwrap(), vec![9]);
        assert_eq!(
            parse_page_list(&["8-n"], 10, false).unwrap(),
            vec![7, 8, 9]
        );
        assert_eq!(
            parse_page_list(&["n-8"], 10, false).unwrap(),
            vec![9, 8, 7]
        );
    }

    #[test]
    fn test_last_page_placeholder_on_empty_document() {
        let err = parse_page_list(&["n"], 0, false).unwrap_err();
        assert!(matches!(err, RearrangeError::InvalidRange(_)));
    }

    #[test]
    fn test_reverse_flag() {
        let order = parse_page_list(&["1", "2-4"], 10, true).unwrap();
        assert_eq!(order, vec![3, 2, 1, 0]);
    }

    #[test]
    fn test_empty_and_blank_tokens() {
        assert!(parse_page_list(&[], 10, false).unwrap().is_empty());
        assert!(parse_page_list(&[""], 10, false).unwrap().is_empty());
        assert_eq!(
            parse_page_list(&[" 2 ", "", " 4 - 5 "], 10, false).unwrap(),
            vec![1, 3, 4]
        );
    }

    #[test]
    fn test_out_of_bounds_page() {
        let err = parse_page_list(&["11"], 10, false).unwrap_err();
        assert!(matches!(err, RearrangeError::InvalidRange(_)));
        let err = parse_page_list(&["0"], 10, false).unwrap_err();
        assert!(matches!(err, RearrangeError::InvalidRange(_)));
        let err = parse_page_list(&["5-12"], 10, false).unwrap_err();
        assert!(matches!(err, RearrangeError::InvalidRange(_)));
    }

    #[test]
    fn test_malformed_tokens() {
        for token in ["abc", "1-2-3", "3-", "-3", "1.5"] {
            let err = parse_page_list(&[token], 10, false).unwrap_err();
            assert!(
                matches!(err, RearrangeError::InvalidRange(_)),
                "token {token:?} should be rejected"
            );
        }
    }
}
