use crate::courses::course::Course;
use anyhow::{Context, Result};

const BUILTIN_COURSES: &str = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/seed/courses.json"));

/// The course list the service starts with when the config names no seed file.
pub fn builtin() -> Result<Vec<Course>> {
    parse(BUILTIN_COURSES).context("built-in course seed is malformed")
}

pub fn parse(json: &str) -> Result<Vec<Course>> {
    Ok(serde_json::from_str(json)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_seed() -> Result<()> {
        let courses = builtin()?;
        assert_eq!(courses.len(), 8);
        assert_eq!(courses[2].id.as_str(), "3");
        assert_eq!(courses[2].name, "React for Beginners");
        assert_eq!(courses[7].price, 39.99);
        Ok(())
    }

    #[test]
    fn test_parse_numeric_ids() -> Result<()> {
        let courses = parse(
            r#"[{"id":10,"name":"A","description":"B","price":1.5,"duration":"1 day"}]"#,
        )?;
        assert_eq!(courses[0].id.as_str(), "10");
        Ok(())
    }
}
