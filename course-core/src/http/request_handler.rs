use crate::app_ctx::AppContext;
use crate::courses::{Course, CourseDB, CourseError, CourseFields, CourseId, ListQuery};
use crate::http::payload::{Message, Page, Posted, RouteNotFound, WithData};
use crate::http::response::Response;
use crate::http::router::{Route, AVAILABLE_ROUTES};
use anyhow::Result;
use bytes::Bytes;
use course_auth::api_key::{AuthError, API_KEY_HEADER};
use http_body_util::{BodyExt, Full};
use hyper::body::Body;
use hyper::Request;
use lazy_static::lazy_static;
use reqwest::StatusCode;
use std::sync::Arc;
use tokio::sync::RwLock;

const SUCCESS: &str = "success";
const NOT_FOUND: &str = "not found";

lazy_static! {
    static ref ROUTE_NOT_FOUND: String = serde_json::to_string(&RouteNotFound {
        message: "route not found",
        available_routes: AVAILABLE_ROUTES,
    })
    .unwrap_or_default();
}

/// Entry point for every HTTP request. Errors that escape a route are
/// turned into a 500 here, so the connection never sees them.
pub async fn handle_request<B>(
    req: Request<B>,
    app_ctx: Arc<AppContext>,
    course_db: Arc<RwLock<CourseDB>>,
) -> Result<hyper::Response<Full<Bytes>>>
where
    B: Body,
    B::Error: std::error::Error + Send + Sync + 'static,
{
    let method = req.method().clone();
    let path = req.uri().path().to_string();

    let response = match dispatch(req, &app_ctx, &course_db).await {
        Ok(response) => response,
        Err(e) => {
            log::error!("{} {} failed: {:#}", method, path, e);
            internal_error(&e)?
        }
    };
    log::info!("{} {} -> {}", method, path, response.status.as_u16());

    response.into_hyper()
}

async fn dispatch<B>(
    req: Request<B>,
    app_ctx: &AppContext,
    course_db: &RwLock<CourseDB>,
) -> Result<Response<Bytes>>
where
    B: Body,
    B::Error: std::error::Error + Send + Sync + 'static,
{
    let route = match Route::resolve(req.method(), req.uri().path()) {
        Some(route) => route,
        None => return not_found(),
    };

    match route {
        Route::List => {
            let api_key = req
                .headers()
                .get(API_KEY_HEADER)
                .map(|v| String::from_utf8_lossy(v.as_bytes()).into_owned());
            if let Err(e) = app_ctx.blueprint.extensions.api_key.verify(api_key.as_deref()) {
                return unauthorized(e);
            }
            list(req.uri().query(), course_db).await
        }
        Route::GetByName(name) => {
            let course_db = course_db.read().await;
            found_or_null(course_db.get_by_name(&name).cloned())
        }
        Route::GetById(id) => {
            let course_db = course_db.read().await;
            found_or_null(course_db.get_by_id(&id).cloned())
        }
        Route::Create => create(into_fields(req).await?, course_db).await,
        Route::Replace(id) => replace(&id, into_fields(req).await?, course_db).await,
        Route::Patch(id) => patch(&id, into_fields(req).await?, course_db).await,
        Route::Delete(id) => delete(&id, course_db).await,
    }
}

async fn into_fields<B>(req: Request<B>) -> Result<Result<CourseFields, CourseError>>
where
    B: Body,
    B::Error: std::error::Error + Send + Sync + 'static,
{
    let body = req.into_body().collect().await?.to_bytes();
    Ok(CourseFields::from_json(&body))
}

async fn list(query: Option<&str>, course_db: &RwLock<CourseDB>) -> Result<Response<Bytes>> {
    let query = match ListQuery::parse(query) {
        Ok(query) => query,
        Err(e) => return course_error(e),
    };
    let listing = match course_db.read().await.list(&query) {
        Ok(listing) => listing,
        Err(e) => return course_error(e),
    };

    if listing.sorted {
        Response::json(
            StatusCode::OK,
            &WithData {
                message: SUCCESS,
                data: &listing.courses,
            },
        )
    } else {
        Response::json(StatusCode::OK, &Page::new(SUCCESS, &listing))
    }
}

async fn create(
    fields: Result<CourseFields, CourseError>,
    course_db: &RwLock<CourseDB>,
) -> Result<Response<Bytes>> {
    let created = match fields {
        Ok(fields) => course_db.write().await.create(fields),
        Err(e) => Err(e),
    };
    match created {
        Ok(course) => Response::json(
            StatusCode::OK,
            &Posted {
                status: "posted",
                data: &course,
            },
        ),
        Err(e) => course_error(e),
    }
}

async fn replace(
    id: &CourseId,
    fields: Result<CourseFields, CourseError>,
    course_db: &RwLock<CourseDB>,
) -> Result<Response<Bytes>> {
    let mut course_db = course_db.write().await;
    // a missing course wins over a bad body
    let replaced = match fields {
        Ok(fields) => course_db.replace(id, fields),
        Err(e) if course_db.get_by_id(id).is_some() => Err(e),
        Err(_) => Err(CourseError::NotFound),
    };
    match replaced {
        Ok(course) => Response::json(
            StatusCode::OK,
            &WithData {
                message: "updated",
                data: &course,
            },
        ),
        Err(e) => course_error(e),
    }
}

async fn patch(
    id: &CourseId,
    fields: Result<CourseFields, CourseError>,
    course_db: &RwLock<CourseDB>,
) -> Result<Response<Bytes>> {
    let mut course_db = course_db.write().await;
    let patched = match fields {
        Ok(fields) => course_db.patch(id, fields),
        Err(e) if course_db.get_by_id(id).is_some() => Err(e),
        Err(_) => Err(CourseError::NotFound),
    };
    match patched {
        Ok(course) => Response::json(
            StatusCode::OK,
            &WithData {
                message: "partial update complete",
                data: &course,
            },
        ),
        Err(CourseError::NotFound) => Response::json(
            StatusCode::NOT_FOUND,
            &Message {
                message: "not found with given ID",
            },
        ),
        Err(e) => course_error(e),
    }
}

async fn delete(id: &CourseId, course_db: &RwLock<CourseDB>) -> Result<Response<Bytes>> {
    let mut course_db = course_db.write().await;
    match course_db.delete(id) {
        Ok(remaining) => Response::json(
            StatusCode::OK,
            &WithData {
                message: "deleted",
                data: remaining,
            },
        ),
        Err(e) => course_error(e),
    }
}

fn found_or_null(course: Option<Course>) -> Result<Response<Bytes>> {
    let message = if course.is_some() { SUCCESS } else { NOT_FOUND };
    Response::json(
        StatusCode::OK,
        &WithData {
            message,
            data: course,
        },
    )
}

fn course_error(e: CourseError) -> Result<Response<Bytes>> {
    let status = match e {
        CourseError::InvalidData => StatusCode::FORBIDDEN,
        CourseError::InvalidQuery(_) => StatusCode::BAD_REQUEST,
        CourseError::NotFound => StatusCode::NOT_FOUND,
        CourseError::IdsExhausted => StatusCode::INTERNAL_SERVER_ERROR,
    };
    Response::json(
        status,
        &Message {
            message: &e.to_string(),
        },
    )
}

fn unauthorized(e: AuthError) -> Result<Response<Bytes>> {
    Response::json(
        StatusCode::UNAUTHORIZED,
        &Message {
            message: &e.to_string(),
        },
    )
}

fn internal_error(e: &anyhow::Error) -> Result<Response<Bytes>> {
    let message = e.to_string();
    let message = if message.is_empty() { "fail" } else { &message };
    Response::json(StatusCode::INTERNAL_SERVER_ERROR, &Message { message })
}

fn not_found() -> Result<Response<Bytes>> {
    Ok(Response::from_json_bytes(
        StatusCode::NOT_FOUND,
        Bytes::from(ROUTE_NOT_FOUND.as_str()),
    ))
}
