//! Courses, their chapters and chapter videos.

use std::fmt::Display;

use serde::Serialize;
use serde_json::Value;

use super::{ApiClient, seg};
use crate::net::error::ClientError;
use crate::net::request::ApiRequest;
use crate::net::transport::Transport;

#[cfg(test)]
#[path = "course_test.rs"]
mod tests;

pub const DEFAULT_PAGE: u32 = 1;
pub const DEFAULT_PAGE_SIZE: u32 = 10;

/// Paging for listing endpoints. Both fields default on the backend too.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page {
    pub page: u32,
    pub size: u32,
}

impl Default for Page {
    fn default() -> Self {
        Self { page: DEFAULT_PAGE, size: DEFAULT_PAGE_SIZE }
    }
}

pub struct CourseApi<'a, T> {
    pub(crate) client: &'a ApiClient<T>,
}

impl<T: Transport> CourseApi<'_, T> {
    pub async fn create_course(&self, data: &impl Serialize) -> Result<Value, ClientError> {
        self.client.send(ApiRequest::post("/courses").json(data)?).await
    }

    pub async fn update_course(&self, id: impl Display, data: &impl Serialize) -> Result<Value, ClientError> {
        self.client
            .send(ApiRequest::put(format!("/courses/{}", seg(id))).json(data)?)
            .await
    }

    pub async fn delete_course(&self, id: impl Display) -> Result<Value, ClientError> {
        self.client
            .send(ApiRequest::delete(format!("/courses/{}", seg(id))))
            .await
    }

    pub async fn get_course(&self, id: impl Display) -> Result<Value, ClientError> {
        self.client
            .send(ApiRequest::get(format!("/courses/{}", seg(id))))
            .await
    }

    /// Paged course catalogue, optionally filtered by publication status.
    pub async fn list_courses(&self, page: Page, status: Option<i32>) -> Result<Value, ClientError> {
        let req = ApiRequest::get("/courses")
            .query("page", Some(page.page))
            .query("size", Some(page.size))
            .query("status", status);
        self.client.send(req).await
    }

    pub async fn get_teacher_courses(&self, teacher_id: impl Display) -> Result<Value, ClientError> {
        self.client
            .send(ApiRequest::get(format!("/courses/teacher/{}", seg(teacher_id))))
            .await
    }

    pub async fn search_courses(&self, keyword: &str, page: Page) -> Result<Value, ClientError> {
        let req = ApiRequest::get("/courses/search")
            .query("keyword", Some(keyword))
            .query("page", Some(page.page))
            .query("size", Some(page.size));
        self.client.send(req).await
    }

    /// Chapters of a course, each with its videos.
    pub async fn get_course_chapters(&self, course_id: impl Display) -> Result<Value, ClientError> {
        self.client
            .send(ApiRequest::get(format!("/courses/{}/chapters", seg(course_id))))
            .await
    }

    pub async fn create_chapter(&self, data: &impl Serialize) -> Result<Value, ClientError> {
        self.client
            .send(ApiRequest::post("/courses/chapters").json(data)?)
            .await
    }

    pub async fn update_chapter(&self, id: impl Display, data: &impl Serialize) -> Result<Value, ClientError> {
        self.client
            .send(ApiRequest::put(format!("/courses/chapters/{}", seg(id))).json(data)?)
            .await
    }

    pub async fn delete_chapter(&self, id: impl Display) -> Result<Value, ClientError> {
        self.client
            .send(ApiRequest::delete(format!("/courses/chapters/{}", seg(id))))
            .await
    }

    pub async fn create_video(&self, data: &impl Serialize) -> Result<Value, ClientError> {
        self.client
            .send(ApiRequest::post("/courses/videos").json(data)?)
            .await
    }

    pub async fn update_video(&self, id: impl Display, data: &impl Serialize) -> Result<Value, ClientError> {
        self.client
            .send(ApiRequest::put(format!("/courses/videos/{}", seg(id))).json(data)?)
            .await
    }

    pub async fn delete_video(&self, id: impl Display) -> Result<Value, ClientError> {
        self.client
            .send(ApiRequest::delete(format!("/courses/videos/{}", seg(id))))
            .await
    }
}
