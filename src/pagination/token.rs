use std::fmt;

use serde::{Serialize, Serializer};

/// One renderable unit of a pagination control
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PageToken {
    /// A 1-indexed page number
    Page(usize),
    /// Placeholder for two or more hidden pages
    Ellipsis,
}

impl PageToken {
    pub fn page(&self) -> Option<usize> {
        match self {
            PageToken::Page(page) => Some(*page),
            PageToken::Ellipsis => None,
        }
    }

    pub fn is_ellipsis(&self) -> bool {
        matches!(self, PageToken::Ellipsis)
    }
}

impl fmt::Display for PageToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PageToken::Page(page) => write!(f, "{}", page),
            PageToken::Ellipsis => write!(f, "…"),
        }
    }
}

/// Page numbers serialize as numbers, ellipses as the string `"ellipsis"`
impl Serialize for PageToken {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            PageToken::Page(page) => serializer.serialize_u64(*page as u64),
            PageToken::Ellipsis => serializer.serialize_str("ellipsis"),
        }
    }
}
