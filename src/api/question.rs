//! Student Q&A with AI answers.

use std::fmt::Display;

use serde::Serialize;
use serde_json::{Value, json};

use super::{ApiClient, seg};
use crate::net::error::ClientError;
use crate::net::request::ApiRequest;
use crate::net::transport::Transport;

#[cfg(test)]
#[path = "question_test.rs"]
mod tests;

/// History page size when the caller does not pick one.
pub const DEFAULT_HISTORY_LIMIT: u32 = 50;

pub struct QuestionApi<'a, T> {
    pub(crate) client: &'a ApiClient<T>,
}

impl<T: Transport> QuestionApi<'_, T> {
    pub async fn create_question(&self, data: &impl Serialize) -> Result<Value, ClientError> {
        self.client.send(ApiRequest::post("/questions").json(data)?).await
    }

    /// Ask the AI to answer question `id`. `params` (e.g. `courseContext`)
    /// travel as query parameters.
    pub async fn answer_with_ai(&self, id: impl Display, params: &Value) -> Result<Value, ClientError> {
        let req = ApiRequest::post(format!("/questions/{}/answer-ai", seg(id))).query_object(params);
        self.client.send(req).await
    }

    pub async fn get_question(&self, id: impl Display) -> Result<Value, ClientError> {
        self.client
            .send(ApiRequest::get(format!("/questions/{}", seg(id))))
            .await
    }

    /// Paged questions for a course; `params` carries `page` / `size`.
    pub async fn get_course_questions(&self, course_id: impl Display, params: &Value) -> Result<Value, ClientError> {
        let req = ApiRequest::get(format!("/questions/course/{}", seg(course_id))).query_object(params);
        self.client.send(req).await
    }

    /// Paged questions asked by a student; `params` carries `page` / `size`.
    pub async fn get_student_questions(&self, student_id: impl Display, params: &Value) -> Result<Value, ClientError> {
        let req = ApiRequest::get(format!("/questions/student/{}", seg(student_id))).query_object(params);
        self.client.send(req).await
    }

    pub async fn update_question_status(&self, id: impl Display, status: i32) -> Result<Value, ClientError> {
        let req = ApiRequest::put(format!("/questions/{}/status", seg(id))).query("status", Some(status));
        self.client.send(req).await
    }

    /// Chat history for a student. `courseId` is always sent as a key;
    /// `limit` defaults to [`DEFAULT_HISTORY_LIMIT`].
    pub async fn get_chat_history(
        &self,
        student_id: impl Display,
        course_id: Option<&str>,
        limit: Option<u32>,
    ) -> Result<Value, ClientError> {
        let req = ApiRequest::get(format!("/questions/history/{}", seg(student_id)))
            .query("courseId", course_id)
            .query("limit", Some(limit.unwrap_or(DEFAULT_HISTORY_LIMIT)));
        self.client.send(req).await
    }

    /// Persist an answer produced by a streamed AI reply.
    pub async fn save_answer(&self, question_id: impl Display, content: &str) -> Result<Value, ClientError> {
        let req = ApiRequest::post(format!("/questions/{}/save-answer", seg(question_id))).json(&json!({ "content": content }))?;
        self.client.send(req).await
    }
}
