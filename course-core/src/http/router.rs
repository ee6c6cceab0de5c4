use crate::courses::CourseId;
use hyper::Method;
use percent_encoding::percent_decode_str;

pub const AVAILABLE_ROUTES: &[&str] = &[
    "GET /courses",
    "GET /courses/name/:name",
    "GET /courses/:id",
    "POST /courses",
    "PUT /courses/:id",
    "PATCH /courses/:id",
    "DELETE /courses/:id",
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    List,
    Create,
    GetByName(String),
    GetById(CourseId),
    Replace(CourseId),
    Patch(CourseId),
    Delete(CourseId),
}

impl Route {
    /// Matches a request line against the course routes. A single trailing
    /// slash is ignored.
    pub fn resolve(method: &Method, path: &str) -> Option<Self> {
        let path = path.strip_suffix('/').filter(|p| !p.is_empty()).unwrap_or(path);
        let segments: Vec<&str> = path.split('/').skip(1).collect();

        match (method, segments.as_slice()) {
            (&Method::GET, ["courses"]) => Some(Route::List),
            (&Method::POST, ["courses"]) => Some(Route::Create),
            (&Method::GET, ["courses", "name", name]) => Some(Route::GetByName(decode(name)?)),
            (&Method::GET, ["courses", id]) => Some(Route::GetById(param_id(id)?)),
            (&Method::PUT, ["courses", id]) => Some(Route::Replace(param_id(id)?)),
            (&Method::PATCH, ["courses", id]) => Some(Route::Patch(param_id(id)?)),
            (&Method::DELETE, ["courses", id]) => Some(Route::Delete(param_id(id)?)),
            _ => None,
        }
    }
}

fn decode(segment: &str) -> Option<String> {
    if segment.is_empty() {
        return None;
    }
    percent_decode_str(segment)
        .decode_utf8()
        .ok()
        .map(|s| s.into_owned())
}

fn param_id(segment: &str) -> Option<CourseId> {
    decode(segment).map(CourseId::new)
}
