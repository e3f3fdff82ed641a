use thiserror::Error;

#[derive(Error, Debug)]
pub enum RearrangeError {
    #[error("PDF error: {0}")]
    Pdf(#[from] lopdf::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid page range: {0}")]
    InvalidRange(String),
    #[error("Unsupported sort mode: {0}")]
    UnsupportedMode(String),
    #[error("Page index {index} is out of range for a document with {total_pages} pages")]
    IndexOutOfRange { index: usize, total_pages: usize },
    #[error("Task join error: {0}")]
    TaskJoin(#[from] tokio::task::JoinError),
}

pub type Result<T> = std::result::Result<T, RearrangeError>;

/// Named page sort modes
///
/// Each mode is a rule for computing a new page order from the page count
/// alone. The wire names are SCREAMING_SNAKE and parse case-insensitively.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortMode {
    /// Last page first
    ReverseOrder,
    /// Front/back printing pairs in sequential reading order
    DuplexSort,
    /// Outermost pair inward: 1, N, 2, N-1, ...
    BookletSort,
    /// Rotated 4-page chunks for side-stitch binding
    SideStitchBookletSort,
    /// All odd-position pages, then all even-position pages
    OddEvenSplit,
    /// Inverse of the split: interleave the two halves
    OddEvenMerge,
    RemoveFirst,
    RemoveLast,
    RemoveFirstAndLast,
    /// Half-sheet booklet over the whole document, padded to a multiple of 4
    BookletHalfSheetSort,
    /// Half-sheet booklet applied per 16-page chunk (4 sheets of 4 faces)
    BookHalfSheetSort,
}

impl SortMode {
    pub const ALL: [SortMode; 11] = [
        SortMode::ReverseOrder,
        SortMode::DuplexSort,
        SortMode::BookletSort,
        SortMode::SideStitchBookletSort,
        SortMode::OddEvenSplit,
        SortMode::OddEvenMerge,
        SortMode::RemoveFirst,
        SortMode::RemoveLast,
        SortMode::RemoveFirstAndLast,
        SortMode::BookletHalfSheetSort,
        SortMode::BookHalfSheetSort,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            SortMode::ReverseOrder => "REVERSE_ORDER",
            SortMode::DuplexSort => "DUPLEX_SORT",
            SortMode::BookletSort => "BOOKLET_SORT",
            SortMode::SideStitchBookletSort => "SIDE_STITCH_BOOKLET_SORT",
            SortMode::OddEvenSplit => "ODD_EVEN_SPLIT",
            SortMode::OddEvenMerge => "ODD_EVEN_MERGE",
            SortMode::RemoveFirst => "REMOVE_FIRST",
            SortMode::RemoveLast => "REMOVE_LAST",
            SortMode::RemoveFirstAndLast => "REMOVE_FIRST_AND_LAST",
            SortMode::BookletHalfSheetSort => "BOOKLET_HALF_SHEET_SORT",
            SortMode::BookHalfSheetSort => "BOOK_HALF_SHEET_SORT",
        }
    }

    /// Page count the mode lays out.
    ///
    /// The half-sheet modes fill whole folded sheets, so their orders are
    /// computed over the next multiple of 4; the document must be padded
    /// with blank pages up to this count before the order is applied.
    pub fn required_page_count(self, total_pages: usize) -> usize {
        match self {
            SortMode::BookletHalfSheetSort | SortMode::BookHalfSheetSort => {
                crate::layout::next_multiple_of(total_pages, 4)
            }
            _ => total_pages,
        }
    }
}

impl std::fmt::Display for SortMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for SortMode {
    type Err = RearrangeError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_uppercase().as_str() {
            "REVERSE_ORDER" => Ok(SortMode::ReverseOrder),
            "DUPLEX_SORT" => Ok(SortMode::DuplexSort),
            "BOOKLET_SORT" => Ok(SortMode::BookletSort),
            "SIDE_STITCH_BOOKLET_SORT" => Ok(SortMode::SideStitchBookletSort),
            "ODD_EVEN_SPLIT" => Ok(SortMode::OddEvenSplit),
            "ODD_EVEN_MERGE" => Ok(SortMode::OddEvenMerge),
            "REMOVE_FIRST" => Ok(SortMode::RemoveFirst),
            "REMOVE_LAST" => Ok(SortMode::RemoveLast),
            "REMOVE_FIRST_AND_LAST" => Ok(SortMode::RemoveFirstAndLast),
            "BOOKLET_HALF_SHEET_SORT" => Ok(SortMode::BookletHalfSheetSort),
            "BOOK_HALF_SHEET_SORT" => Ok(SortMode::BookHalfSheetSort),
            _ => Err(RearrangeError::UnsupportedMode(s.to_string())),
        }
    }
}

#[cfg(feature = "serde")]
mod serde_impls {
    use super::*;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    impl Serialize for SortMode {
        fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
        where
            S: Serializer,
        {
            serializer.serialize_str(self.as_str())
        }
    }

    impl<'de> Deserialize<'de> for SortMode {
        fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
        where
            D: Deserializer<'de>,
        {
            let s = String::deserialize(deserializer)?;
            s.parse().map_err(serde::de::Error::custom)
        }
    }
}
