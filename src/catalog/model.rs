#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogOrigin {
    Source,
    Fallback,
    /// Loading failed and no fallback was allowed
    Unavailable,
}

/// Records of one domain, in the order the source listed them
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog<T> {
    pub records: Vec<T>,
    pub origin: CatalogOrigin,
}

impl<T> Catalog<T> {
    pub fn from_source(records: Vec<T>) -> Self {
        Self {
            records,
            origin: CatalogOrigin::Source,
        }
    }

    pub fn fallback(records: Vec<T>) -> Self {
        Self {
            records,
            origin: CatalogOrigin::Fallback,
        }
    }

    pub fn unavailable() -> Self {
        Self {
            records: vec![],
            origin: CatalogOrigin::Unavailable,
        }
    }

    pub fn is_fallback(&self) -> bool {
        self.origin == CatalogOrigin::Fallback
    }

    pub fn is_unavailable(&self) -> bool {
        self.origin == CatalogOrigin::Unavailable
    }
}
