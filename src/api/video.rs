//! Video interaction: playback progress, notes, danmaku, in-video quizzes,
//! learning records, subtitles and knowledge-point popups.

use std::fmt::Display;

use serde::Serialize;
use serde_json::Value;

use super::{ApiClient, seg};
use crate::net::error::ClientError;
use crate::net::request::ApiRequest;
use crate::net::transport::Transport;

#[cfg(test)]
#[path = "video_test.rs"]
mod tests;

const PREFIX: &str = "/video-interaction";

pub struct VideoApi<'a, T> {
    pub(crate) client: &'a ApiClient<T>,
}

impl<T: Transport> VideoApi<'_, T> {
    async fn get(&self, path: String) -> Result<Value, ClientError> {
        self.client.send(ApiRequest::get(format!("{PREFIX}{path}"))).await
    }

    async fn post(&self, path: &str, data: &impl Serialize) -> Result<Value, ClientError> {
        self.client
            .send(ApiRequest::post(format!("{PREFIX}{path}")).json(data)?)
            .await
    }

    async fn put(&self, path: String, data: &impl Serialize) -> Result<Value, ClientError> {
        self.client
            .send(ApiRequest::put(format!("{PREFIX}{path}")).json(data)?)
            .await
    }

    async fn delete(&self, path: String) -> Result<Value, ClientError> {
        self.client
            .send(ApiRequest::delete(format!("{PREFIX}{path}")))
            .await
    }

    // =========================================================================
    // PROGRESS
    // =========================================================================

    pub async fn update_video_progress(&self, data: &impl Serialize) -> Result<Value, ClientError> {
        self.post("/progress", data).await
    }

    pub async fn get_video_progress(&self, video_id: impl Display, student_id: impl Display) -> Result<Value, ClientError> {
        self.get(format!("/progress/{}/{}", seg(video_id), seg(student_id)))
            .await
    }

    pub async fn get_student_progress(&self, student_id: impl Display) -> Result<Value, ClientError> {
        self.get(format!("/progress/student/{}", seg(student_id))).await
    }

    // =========================================================================
    // NOTES
    // =========================================================================

    pub async fn add_video_note(&self, data: &impl Serialize) -> Result<Value, ClientError> {
        self.post("/notes", data).await
    }

    pub async fn update_video_note(&self, id: impl Display, data: &impl Serialize) -> Result<Value, ClientError> {
        self.put(format!("/notes/{}", seg(id)), data).await
    }

    pub async fn delete_video_note(&self, id: impl Display) -> Result<Value, ClientError> {
        self.delete(format!("/notes/{}", seg(id))).await
    }

    pub async fn get_video_notes(&self, video_id: impl Display, student_id: impl Display) -> Result<Value, ClientError> {
        self.get(format!("/notes/{}/{}", seg(video_id), seg(student_id)))
            .await
    }

    pub async fn get_student_notes(&self, student_id: impl Display) -> Result<Value, ClientError> {
        self.get(format!("/notes/student/{}", seg(student_id))).await
    }

    /// Have the AI tidy a set of notes.
    pub async fn organize_notes(&self, data: &impl Serialize) -> Result<Value, ClientError> {
        self.post("/notes/organize", data).await
    }

    // =========================================================================
    // DANMAKU
    // =========================================================================

    pub async fn send_danmaku(&self, data: &impl Serialize) -> Result<Value, ClientError> {
        self.post("/danmaku", data).await
    }

    pub async fn get_video_danmaku(&self, video_id: impl Display) -> Result<Value, ClientError> {
        self.get(format!("/danmaku/{}", seg(video_id))).await
    }

    /// `PUT` with no body.
    pub async fn hide_danmaku(&self, id: impl Display) -> Result<Value, ClientError> {
        self.client
            .send(ApiRequest::put(format!("{PREFIX}/danmaku/{}/hide", seg(id))))
            .await
    }

    // =========================================================================
    // QUIZZES
    // =========================================================================

    pub async fn create_video_quiz(&self, data: &impl Serialize) -> Result<Value, ClientError> {
        self.post("/quiz", data).await
    }

    pub async fn get_video_quizzes(&self, video_id: impl Display) -> Result<Value, ClientError> {
        self.get(format!("/quiz/{}", seg(video_id))).await
    }

    pub async fn update_video_quiz(&self, id: impl Display, data: &impl Serialize) -> Result<Value, ClientError> {
        self.put(format!("/quiz/{}", seg(id)), data).await
    }

    pub async fn delete_video_quiz(&self, id: impl Display) -> Result<Value, ClientError> {
        self.delete(format!("/quiz/{}", seg(id))).await
    }

    // =========================================================================
    // LEARNING RECORDS
    // =========================================================================

    /// A student's learning records. The `courseId` key is always present on
    /// the descriptor, with no value when `course_id` is `None`.
    pub async fn get_learning_records(&self, student_id: impl Display, course_id: Option<&str>) -> Result<Value, ClientError> {
        let req = ApiRequest::get(format!("{PREFIX}/learning-records/{}", seg(student_id))).query("courseId", course_id);
        self.client.send(req).await
    }

    // =========================================================================
    // SUBTITLES
    // =========================================================================

    pub async fn create_subtitle(&self, data: &impl Serialize) -> Result<Value, ClientError> {
        self.post("/subtitles", data).await
    }

    /// Machine-translate an existing subtitle track.
    pub async fn translate_subtitle(&self, data: &impl Serialize) -> Result<Value, ClientError> {
        self.post("/subtitles/translate", data).await
    }

    pub async fn get_video_subtitles(&self, video_id: impl Display) -> Result<Value, ClientError> {
        self.get(format!("/subtitles/video/{}", seg(video_id))).await
    }

    pub async fn get_subtitle_by_language(&self, video_id: impl Display, language: &str) -> Result<Value, ClientError> {
        self.get(format!("/subtitles/{}/{}", seg(video_id), seg(language)))
            .await
    }

    pub async fn delete_subtitle(&self, id: impl Display) -> Result<Value, ClientError> {
        self.delete(format!("/subtitles/{}", seg(id))).await
    }

    // =========================================================================
    // KNOWLEDGE POINTS
    // =========================================================================

    pub async fn create_knowledge_point(&self, data: &impl Serialize) -> Result<Value, ClientError> {
        self.post("/knowledge-points", data).await
    }

    pub async fn get_video_knowledge_points(&self, video_id: impl Display) -> Result<Value, ClientError> {
        self.get(format!("/knowledge-points/{}", seg(video_id))).await
    }

    pub async fn update_knowledge_point(&self, id: impl Display, data: &impl Serialize) -> Result<Value, ClientError> {
        self.put(format!("/knowledge-points/{}", seg(id)), data).await
    }

    pub async fn delete_knowledge_point(&self, id: impl Display) -> Result<Value, ClientError> {
        self.delete(format!("/knowledge-points/{}", seg(id))).await
    }
}
