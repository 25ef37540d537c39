//! Chapter exercises: exercise and question management, submission and
//! grading.

use std::fmt::Display;

use serde::Serialize;
use serde_json::Value;

use super::{ApiClient, seg};
use crate::net::error::ClientError;
use crate::net::request::ApiRequest;
use crate::net::transport::Transport;

#[cfg(test)]
#[path = "exercise_test.rs"]
mod tests;

pub struct ExerciseApi<'a, T> {
    pub(crate) client: &'a ApiClient<T>,
}

impl<T: Transport> ExerciseApi<'_, T> {
    // ---- exercises ----

    pub async fn create_exercise(&self, data: &impl Serialize) -> Result<Value, ClientError> {
        self.client
            .send(ApiRequest::post("/chapter-exercises").json(data)?)
            .await
    }

    pub async fn update_exercise(&self, id: impl Display, data: &impl Serialize) -> Result<Value, ClientError> {
        self.client
            .send(ApiRequest::put(format!("/chapter-exercises/{}", seg(id))).json(data)?)
            .await
    }

    pub async fn delete_exercise(&self, id: impl Display) -> Result<Value, ClientError> {
        self.client
            .send(ApiRequest::delete(format!("/chapter-exercises/{}", seg(id))))
            .await
    }

    pub async fn get_exercise_detail(&self, id: impl Display) -> Result<Value, ClientError> {
        self.client
            .send(ApiRequest::get(format!("/chapter-exercises/{}", seg(id))))
            .await
    }

    pub async fn get_exercises_by_chapter(&self, chapter_id: impl Display) -> Result<Value, ClientError> {
        self.client
            .send(ApiRequest::get(format!("/chapter-exercises/chapter/{}", seg(chapter_id))))
            .await
    }

    // ---- questions ----

    pub async fn add_exercise_question(&self, data: &impl Serialize) -> Result<Value, ClientError> {
        self.client
            .send(ApiRequest::post("/chapter-exercises/questions").json(data)?)
            .await
    }

    pub async fn update_exercise_question(&self, id: impl Display, data: &impl Serialize) -> Result<Value, ClientError> {
        self.client
            .send(ApiRequest::put(format!("/chapter-exercises/questions/{}", seg(id))).json(data)?)
            .await
    }

    pub async fn delete_exercise_question(&self, id: impl Display) -> Result<Value, ClientError> {
        self.client
            .send(ApiRequest::delete(format!("/chapter-exercises/questions/{}", seg(id))))
            .await
    }

    pub async fn get_exercise_questions(&self, exercise_id: impl Display) -> Result<Value, ClientError> {
        self.client
            .send(ApiRequest::get(format!("/chapter-exercises/{}/questions", seg(exercise_id))))
            .await
    }

    // ---- submission and grading ----

    pub async fn submit_exercise(&self, data: &impl Serialize) -> Result<Value, ClientError> {
        self.client
            .send(ApiRequest::post("/chapter-exercises/submit").json(data)?)
            .await
    }

    /// A student's submissions, optionally narrowed to one exercise. The
    /// `exerciseId` key is always present on the descriptor.
    pub async fn get_student_submissions(
        &self,
        student_id: impl Display,
        exercise_id: Option<&str>,
    ) -> Result<Value, ClientError> {
        let req = ApiRequest::get(format!("/chapter-exercises/submissions/student/{}", seg(student_id)))
            .query("exerciseId", exercise_id);
        self.client.send(req).await
    }

    pub async fn get_exercise_submissions(&self, exercise_id: impl Display) -> Result<Value, ClientError> {
        self.client
            .send(ApiRequest::get(format!("/chapter-exercises/{}/submissions", seg(exercise_id))))
            .await
    }

    pub async fn get_submission_detail(&self, id: impl Display) -> Result<Value, ClientError> {
        self.client
            .send(ApiRequest::get(format!("/chapter-exercises/submissions/{}", seg(id))))
            .await
    }
}
