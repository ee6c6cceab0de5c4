use crate::courses::course::Course;
use crate::courses::error::CourseError;
use serde::Deserialize;
use std::cmp::Ordering;
use std::str::FromStr;

const DEFAULT_PAGE: usize = 1;
const DEFAULT_LIMIT: usize = 3;

fn default_page() -> usize {
    DEFAULT_PAGE
}

fn default_limit() -> usize {
    DEFAULT_LIMIT
}

/// Query string of `GET /courses`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ListQuery {
    #[serde(default)]
    pub search: String,
    #[serde(default)]
    pub sort: Option<String>,
    #[serde(default = "default_page")]
    pub page: usize,
    #[serde(default = "default_limit")]
    pub limit: usize,
}

impl Default for ListQuery {
    fn default() -> Self {
        Self {
            search: String::new(),
            sort: None,
            page: DEFAULT_PAGE,
            limit: DEFAULT_LIMIT,
        }
    }
}

impl ListQuery {
    pub fn parse(query: Option<&str>) -> Result<Self, CourseError> {
        let query = match query {
            Some(query) if !query.is_empty() => serde_qs::from_str::<Self>(query)
                .map_err(|e| CourseError::InvalidQuery(format!("invalid query: {}", e)))?,
            _ => Self::default(),
        };
        if query.page == 0 || query.limit == 0 {
            return Err(CourseError::InvalidQuery(
                "page and limit must be positive integers".to_string(),
            ));
        }
        Ok(query)
    }

    /// An empty `sort` parameter means no sorting.
    pub fn sort_spec(&self) -> Result<Option<SortSpec>, CourseError> {
        match self.sort.as_deref() {
            None | Some("") => Ok(None),
            Some(sort) => sort.parse().map(Some),
        }
    }

    pub fn matches(&self, course: &Course) -> bool {
        let needle = self.search.trim().to_lowercase();
        course.name.trim().to_lowercase().contains(&needle)
            || course.description.trim().to_lowercase().contains(&needle)
    }

    /// Bounds of the requested page, clamped to `len`.
    pub fn window(&self, len: usize) -> Result<(usize, usize), CourseError> {
        let end = self
            .page
            .checked_mul(self.limit)
            .ok_or_else(|| CourseError::InvalidQuery("page out of range".to_string()))?;
        let start = end - self.limit;
        Ok((start.min(len), end.min(len)))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortField {
    Id,
    Name,
    Description,
    Price,
    Duration,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Asc,
    Desc,
}

/// Parsed form of `<field>-asc` / `<field>-desc`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortSpec {
    pub field: SortField,
    pub order: SortOrder,
}

impl FromStr for SortField {
    type Err = CourseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "id" => Ok(SortField::Id),
            "name" => Ok(SortField::Name),
            "description" => Ok(SortField::Description),
            "price" => Ok(SortField::Price),
            "duration" => Ok(SortField::Duration),
            _ => Err(CourseError::InvalidQuery(format!(
                "cannot sort by unknown field: {}",
                s
            ))),
        }
    }
}

impl FromStr for SortOrder {
    type Err = CourseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "asc" => Ok(SortOrder::Asc),
            "desc" => Ok(SortOrder::Desc),
            _ => Err(CourseError::InvalidQuery(format!(
                "unknown sort direction: {}",
                s
            ))),
        }
    }
}

impl FromStr for SortSpec {
    type Err = CourseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (field, order) = s.split_once('-').ok_or_else(|| {
            CourseError::InvalidQuery(format!(
                "sort must look like <field>-asc or <field>-desc, got: {}",
                s
            ))
        })?;
        Ok(SortSpec {
            field: field.parse()?,
            order: order.parse()?,
        })
    }
}

impl SortField {
    pub fn compare(&self, a: &Course, b: &Course) -> Ordering {
        match self {
            SortField::Id => match (a.id.numeric(), b.id.numeric()) {
                (Some(a), Some(b)) => a.cmp(&b),
                _ => a.id.as_str().cmp(b.id.as_str()),
            },
            SortField::Name => a.name.cmp(&b.name),
            SortField::Description => a.description.cmp(&b.description),
            SortField::Price => a.price.total_cmp(&b.price),
            SortField::Duration => a.duration.cmp(&b.duration),
        }
    }
}

impl SortSpec {
    pub fn sort(&self, courses: &mut [Course]) {
        courses.sort_by(|a, b| {
            let ordering = self.field.compare(a, b);
            match self.order {
                SortOrder::Asc => ordering,
                SortOrder::Desc => ordering.reverse(),
            }
        });
    }
}

/// One page of search results.
#[derive(Debug, Clone, PartialEq)]
pub struct Listing {
    /// Number of courses matching the search, across all pages.
    pub total: usize,
    pub has_more: bool,
    pub sorted: bool,
    pub courses: Vec<Course>,
}
