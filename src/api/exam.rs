//! Exams: CRUD, questions, submissions.

use std::fmt::Display;

use serde::Serialize;
use serde_json::Value;

use super::{ApiClient, seg};
use crate::net::error::ClientError;
use crate::net::request::ApiRequest;
use crate::net::transport::Transport;

#[cfg(test)]
#[path = "exam_test.rs"]
mod tests;

pub struct ExamApi<'a, T> {
    pub(crate) client: &'a ApiClient<T>,
}

impl<T: Transport> ExamApi<'_, T> {
    /// `GET /exams/course/{courseId}`
    pub async fn get_course_exams(&self, course_id: impl Display) -> Result<Value, ClientError> {
        self.client
            .send(ApiRequest::get(format!("/exams/course/{}", seg(course_id))))
            .await
    }

    /// `POST /exams`
    pub async fn create_exam(&self, data: &impl Serialize) -> Result<Value, ClientError> {
        self.client.send(ApiRequest::post("/exams").json(data)?).await
    }

    /// `PUT /exams/{id}`
    pub async fn update_exam(&self, id: impl Display, data: &impl Serialize) -> Result<Value, ClientError> {
        self.client
            .send(ApiRequest::put(format!("/exams/{}", seg(id))).json(data)?)
            .await
    }

    /// `DELETE /exams/{id}`
    pub async fn delete_exam(&self, id: impl Display) -> Result<Value, ClientError> {
        self.client
            .send(ApiRequest::delete(format!("/exams/{}", seg(id))))
            .await
    }

    /// `GET /exams/{id}`
    pub async fn get_exam_detail(&self, id: impl Display) -> Result<Value, ClientError> {
        self.client
            .send(ApiRequest::get(format!("/exams/{}", seg(id))))
            .await
    }

    /// `POST /exams/questions`
    pub async fn add_question(&self, data: &impl Serialize) -> Result<Value, ClientError> {
        self.client
            .send(ApiRequest::post("/exams/questions").json(data)?)
            .await
    }

    /// `GET /exams/{examId}/questions`
    pub async fn get_exam_questions(&self, exam_id: impl Display) -> Result<Value, ClientError> {
        self.client
            .send(ApiRequest::get(format!("/exams/{}/questions", seg(exam_id))))
            .await
    }

    /// `POST /exams/{examId}/generate-questions`: AI-drafted questions for a
    /// knowledge point.
    pub async fn generate_questions(
        &self,
        exam_id: impl Display,
        knowledge_point: &str,
        difficulty: &str,
        count: u32,
    ) -> Result<Value, ClientError> {
        let req = ApiRequest::post(format!("/exams/{}/generate-questions", seg(exam_id)))
            .query("knowledgePoint", Some(knowledge_point))
            .query("difficulty", Some(difficulty))
            .query("count", Some(count));
        self.client.send(req).await
    }

    /// `GET /exams/{examId}/submissions`
    pub async fn get_exam_submissions(&self, exam_id: impl Display) -> Result<Value, ClientError> {
        self.client
            .send(ApiRequest::get(format!("/exams/{}/submissions", seg(exam_id))))
            .await
    }

    /// `POST /exams/{examId}/submit`
    pub async fn submit_exam(&self, exam_id: impl Display, data: &impl Serialize) -> Result<Value, ClientError> {
        self.client
            .send(ApiRequest::post(format!("/exams/{}/submit", seg(exam_id))).json(data)?)
            .await
    }

    /// `GET /exams/{examId}/check-submission/{studentId}`
    pub async fn check_exam_submission(&self, exam_id: impl Display, student_id: impl Display) -> Result<Value, ClientError> {
        self.client
            .send(ApiRequest::get(format!(
                "/exams/{}/check-submission/{}",
                seg(exam_id),
                seg(student_id)
            )))
            .await
    }
}
