//! Report assignments and their submissions.

use std::fmt::Display;

use serde::Serialize;
use serde_json::Value;

use super::{ApiClient, seg};
use crate::net::error::ClientError;
use crate::net::request::ApiRequest;
use crate::net::transport::Transport;

#[cfg(test)]
#[path = "report_test.rs"]
mod tests;

pub struct ReportApi<'a, T> {
    pub(crate) client: &'a ApiClient<T>,
}

impl<T: Transport> ReportApi<'_, T> {
    pub async fn get_course_reports(&self, course_id: impl Display) -> Result<Value, ClientError> {
        self.client
            .send(ApiRequest::get(format!("/reports/course/{}", seg(course_id))))
            .await
    }

    pub async fn create_report(&self, data: &impl Serialize) -> Result<Value, ClientError> {
        self.client.send(ApiRequest::post("/reports").json(data)?).await
    }

    pub async fn update_report(&self, id: impl Display, data: &impl Serialize) -> Result<Value, ClientError> {
        self.client
            .send(ApiRequest::put(format!("/reports/{}", seg(id))).json(data)?)
            .await
    }

    pub async fn delete_report(&self, id: impl Display) -> Result<Value, ClientError> {
        self.client
            .send(ApiRequest::delete(format!("/reports/{}", seg(id))))
            .await
    }

    pub async fn get_report_detail(&self, id: impl Display) -> Result<Value, ClientError> {
        self.client
            .send(ApiRequest::get(format!("/reports/{}", seg(id))))
            .await
    }

    /// Have the AI grade a submitted report.
    pub async fn review_report_with_ai(&self, data: &impl Serialize) -> Result<Value, ClientError> {
        self.client
            .send(ApiRequest::post("/reports/review-ai").json(data)?)
            .await
    }

    pub async fn get_report_submissions(&self, report_id: impl Display) -> Result<Value, ClientError> {
        self.client
            .send(ApiRequest::get(format!("/reports/{}/submissions", seg(report_id))))
            .await
    }

    pub async fn submit_report(&self, report_id: impl Display, data: &impl Serialize) -> Result<Value, ClientError> {
        self.client
            .send(ApiRequest::post(format!("/reports/{}/submit", seg(report_id))).json(data)?)
            .await
    }
}
