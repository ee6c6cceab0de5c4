//! JSON bodies returned by the course endpoints.

use crate::courses::{Course, Listing};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct Message<'a> {
    pub message: &'a str,
}

/// `{message, data}`; `data` serializes as `null` when absent.
#[derive(Debug, Serialize)]
pub struct WithData<'a, T: Serialize> {
    pub message: &'a str,
    pub data: T,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<'a> {
    pub message: &'a str,
    pub total: usize,
    pub has_more: bool,
    pub data: &'a [Course],
}

#[derive(Debug, Serialize)]
pub struct Posted<'a> {
    pub status: &'a str,
    pub data: &'a Course,
}

#[derive(Debug, Serialize)]
pub struct RouteNotFound<'a> {
    pub message: &'a str,
    pub available_routes: &'a [&'a str],
}

impl<'a> Page<'a> {
    pub fn new(message: &'a str, listing: &'a Listing) -> Self {
        Self {
            message,
            total: listing.total,
            has_more: listing.has_more,
            data: &listing.courses,
        }
    }
}
