use crate::courses::course::{Course, CourseFields, CourseId};
use crate::courses::error::CourseError;
use crate::courses::query::{ListQuery, Listing};

/// In-memory course collection. Insertion order is kept, ids for new
/// courses come from a counter that never goes backwards, so an id freed
/// by a delete is not handed out again.
#[derive(Debug, Clone)]
pub struct CourseDB {
    courses: Vec<Course>,
    /// `None` once every numeric id has been handed out.
    next_id: Option<u64>,
}

impl CourseDB {
    pub fn init(seed: Vec<Course>) -> Self {
        let next_id = seed
            .iter()
            .filter_map(|c| c.id.numeric())
            .max()
            .map_or(Some(1), |max| max.checked_add(1));
        Self {
            courses: seed,
            next_id,
        }
    }

    #[cfg(test)]
    pub fn all(&self) -> &[Course] {
        &self.courses
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.courses.len()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.courses.is_empty()
    }

    /// Search, then sort, then cut the requested page.
    pub fn list(&self, query: &ListQuery) -> Result<Listing, CourseError> {
        let sort = query.sort_spec()?;
        let mut found: Vec<Course> = self
            .courses
            .iter()
            .filter(|c| query.matches(c))
            .cloned()
            .collect();
        if let Some(sort) = sort {
            sort.sort(&mut found);
        }

        let total = found.len();
        let (start, end) = query.window(total)?;
        let has_more = total > query.page.saturating_mul(query.limit);
        found.truncate(end);
        let courses = found.split_off(start);

        Ok(Listing {
            total,
            has_more,
            sorted: sort.is_some(),
            courses,
        })
    }

    pub fn get_by_name(&self, name: &str) -> Option<&Course> {
        let name = name.trim().to_lowercase();
        self.courses
            .iter()
            .find(|c| c.name.trim().to_lowercase() == name)
    }

    pub fn get_by_id(&self, id: &CourseId) -> Option<&Course> {
        self.courses.iter().find(|c| c.id == *id)
    }

    pub fn create(&mut self, fields: CourseFields) -> Result<Course, CourseError> {
        let id = self.peek_id()?;
        let course = fields.into_course(CourseId::from(id))?;
        self.next_id = id.checked_add(1);
        self.courses.push(course.clone());
        Ok(course)
    }

    /// Removes the course and returns what is left of the collection.
    pub fn delete(&mut self, id: &CourseId) -> Result<&[Course], CourseError> {
        let idx = self.position(id)?;
        self.courses.remove(idx);
        Ok(&self.courses)
    }

    /// Replaces every field of the course, all of them must be given.
    pub fn replace(&mut self, id: &CourseId, fields: CourseFields) -> Result<Course, CourseError> {
        let idx = self.position(id)?;
        let course = fields.into_course(id.clone())?;
        self.courses[idx] = course.clone();
        Ok(course)
    }

    /// Overwrites only the given fields.
    pub fn patch(&mut self, id: &CourseId, fields: CourseFields) -> Result<Course, CourseError> {
        let idx = self.position(id)?;
        let course = &mut self.courses[idx];
        fields.apply_to(course);
        Ok(course.clone())
    }

    fn position(&self, id: &CourseId) -> Result<usize, CourseError> {
        self.courses
            .iter()
            .position(|c| c.id == *id)
            .ok_or(CourseError::NotFound)
    }

    // Skips ids a seed may already hold under a non-canonical spelling
    // ("09" vs "9" are different ids but the same number).
    fn peek_id(&mut self) -> Result<u64, CourseError> {
        loop {
            let id = self.next_id.ok_or(CourseError::IdsExhausted)?;
            if self.get_by_id(&CourseId::from(id)).is_none() {
                return Ok(id);
            }
            self.next_id = id.checked_add(1);
        }
    }
}
