//! Query state for the paginated movie list.
//!
//! Tracks page, page size, sort, and per-field filters, and renders them as
//! the query parameters the server expects. Changing the sort or a filter
//! resets the page to zero; changing the page touches nothing else.

/// Sort key accepted by the movie list endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SortKey {
    Id,
    CreationDate,
    Name,
    OscarsCount,
    Budget,
}

impl SortKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::Id => "id",
            SortKey::CreationDate => "creationDate",
            SortKey::Name => "name",
            SortKey::OscarsCount => "oscarsCount",
            SortKey::Budget => "budget",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "id" => Some(SortKey::Id),
            "creationDate" => Some(SortKey::CreationDate),
            "name" => Some(SortKey::Name),
            "oscarsCount" => Some(SortKey::OscarsCount),
            "budget" => Some(SortKey::Budget),
            _ => None,
        }
    }
}

/// Sort direction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SortOrder {
    Asc,
    Desc,
}

impl SortOrder {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortOrder::Asc => "asc",
            SortOrder::Desc => "desc",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "asc" => Some(SortOrder::Asc),
            "desc" => Some(SortOrder::Desc),
            _ => None,
        }
    }
}

/// Filterable field of the movie list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterField {
    Name,
    Genre,
    Mpaa,
    Operator,
    Director,
    Screenwriter,
}

impl FilterField {
    /// All filter fields, in the order they appear in serialized queries.
    pub const ALL: [FilterField; 6] = [
        FilterField::Name,
        FilterField::Genre,
        FilterField::Mpaa,
        FilterField::Operator,
        FilterField::Director,
        FilterField::Screenwriter,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            FilterField::Name => "name",
            FilterField::Genre => "genre",
            FilterField::Mpaa => "mpaa",
            FilterField::Operator => "operator",
            FilterField::Director => "director",
            FilterField::Screenwriter => "screenwriter",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "name" => Some(FilterField::Name),
            "genre" => Some(FilterField::Genre),
            "mpaa" => Some(FilterField::Mpaa),
            "operator" => Some(FilterField::Operator),
            "director" => Some(FilterField::Director),
            "screenwriter" => Some(FilterField::Screenwriter),
            _ => None,
        }
    }

    fn index(&self) -> usize {
        *self as usize
    }
}

/// Pagination, sort, and filter state for the movie list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MovieQuery {
    page: u32,
    size: u32,
    sort_by: SortKey,
    sort_order: SortOrder,
    filters: [String; 6],
}

impl MovieQuery {
    /// New query with the defaults the list view opens with: first page,
    /// ten records, newest first.
    pub fn new() -> Self {
        Self::with_size(10)
    }

    /// New query with an explicit page size. The size is fixed for the
    /// lifetime of the query; zero is bumped to one.
    pub fn with_size(size: u32) -> Self {
        Self {
            page: 0,
            size: size.max(1),
            sort_by: SortKey::CreationDate,
            sort_order: SortOrder::Desc,
            filters: Default::default(),
        }
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn size(&self) -> u32 {
        self.size
    }

    pub fn sort_by(&self) -> &SortKey {
        &self.sort_by
    }

    pub fn sort_order(&self) -> &SortOrder {
        &self.sort_order
    }

    /// Current (trimmed) filter value for a field; empty means unset.
    pub fn filter(&self, field: FilterField) -> &str {
        &self.filters[field.index()]
    }

    pub fn set_page(&mut self, page: u32) {
        self.page = page;
    }

    pub fn next_page(&mut self) {
        self.page += 1;
    }

    /// Move back one page, stopping at the first.
    pub fn prev_page(&mut self) {
        self.page = self.page.saturating_sub(1);
    }

    pub fn set_sort_by(&mut self, sort_by: SortKey) {
        self.sort_by = sort_by;
        self.page = 0;
    }

    pub fn set_sort_order(&mut self, sort_order: SortOrder) {
        self.sort_order = sort_order;
        self.page = 0;
    }

    /// Set a filter value. Whitespace is trimmed; a value that is empty
    /// after trimming clears the filter.
    pub fn set_filter(&mut self, field: FilterField, value: &str) {
        self.filters[field.index()] = value.trim().to_string();
        self.page = 0;
    }

    /// Clear every filter.
    pub fn clear_filters(&mut self) {
        self.filters = Default::default();
        self.page = 0;
    }

    /// Render the query as request parameters, in a stable order. Unset
    /// filters are omitted entirely.
    pub fn to_params(&self) -> Vec<(String, String)> {
        let mut params = vec![
            ("page".to_string(), self.page.to_string()),
            ("size".to_string(), self.size.to_string()),
            ("sortBy".to_string(), self.sort_by.as_str().to_string()),
            ("sortOrder".to_string(), self.sort_order.as_str().to_string()),
        ];
        for field in FilterField::ALL {
            let value = self.filter(field);
            if !value.is_empty() {
                params.push((field.as_str().to_string(), value.to_string()));
            }
        }
        params
    }

    /// Rebuild a query from serialized parameters. Unknown keys are
    /// ignored; an unparseable value for a known key yields `None`.
    pub fn from_params(params: &[(String, String)]) -> Option<Self> {
        let mut query = Self::new();
        for (key, value) in params {
            match key.as_str() {
                "page" => query.page = value.parse().ok()?,
                "size" => query.size = value.parse::<u32>().ok()?.max(1),
                "sortBy" => query.sort_by = SortKey::from_str(value)?,
                "sortOrder" => query.sort_order = SortOrder::from_str(value)?,
                _ => {
                    if let Some(field) = FilterField::from_str(key) {
                        query.filters[field.index()] = value.trim().to_string();
                    }
                }
            }
        }
        Some(query)
    }
}

impl Default for MovieQuery {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let query = MovieQuery::new();
        assert_eq!(query.page(), 0);
        assert_eq!(query.size(), 10);
        assert_eq!(query.sort_by(), &SortKey::CreationDate);
        assert_eq!(query.sort_order(), &SortOrder::Desc);
        for field in FilterField::ALL {
            assert_eq!(query.filter(field), "");
        }
    }

    #[test]
    fn test_sort_and_filter_changes_reset_page() {
        let mut query = MovieQuery::new();

        query.set_page(3);
        query.set_sort_by(SortKey::Name);
        assert_eq!(query.page(), 0);

        query.set_page(3);
        query.set_sort_order(SortOrder::Asc);
        assert_eq!(query.page(), 0);

        query.set_page(3);
        query.set_filter(FilterField::Genre, "HORROR");
        assert_eq!(query.page(), 0);

        query.set_page(5);
        assert_eq!(query.page(), 5);
        assert_eq!(query.filter(FilterField::Genre), "HORROR");
    }

    #[test]
    fn test_prev_page_clamps_at_zero() {
        let mut query = MovieQuery::new();
        query.prev_page();
        assert_eq!(query.page(), 0);
        query.next_page();
        query.next_page();
        query.prev_page();
        assert_eq!(query.page(), 1);
    }

    #[test]
    fn test_to_params_trims_and_omits_blank_filters() {
        let mut query = MovieQuery::new();
        query.set_filter(FilterField::Name, "  alien  ");
        query.set_filter(FilterField::Operator, "   ");

        let params = query.to_params();
        assert_eq!(
            params,
            vec![
                ("page".to_string(), "0".to_string()),
                ("size".to_string(), "10".to_string()),
                ("sortBy".to_string(), "creationDate".to_string()),
                ("sortOrder".to_string(), "desc".to_string()),
                ("name".to_string(), "alien".to_string()),
            ]
        );
    }

    #[test]
    fn test_params_round_trip() {
        let mut query = MovieQuery::with_size(25);
        query.set_sort_by(SortKey::OscarsCount);
        query.set_sort_order(SortOrder::Asc);
        query.set_filter(FilterField::Mpaa, "PG_13");
        query.set_filter(FilterField::Director, "Scott");
        query.set_page(4);

        let rebuilt = MovieQuery::from_params(&query.to_params()).unwrap();
        assert_eq!(rebuilt, query);
    }

    #[test]
    fn test_from_params_rejects_bad_values() {
        let params = vec![("page".to_string(), "minus one".to_string())];
        assert!(MovieQuery::from_params(&params).is_none());

        let params = vec![("sortBy".to_string(), "shoeSize".to_string())];
        assert!(MovieQuery::from_params(&params).is_none());
    }

    #[test]
    fn test_zero_size_bumped_to_one() {
        assert_eq!(MovieQuery::with_size(0).size(), 1);
    }
}
