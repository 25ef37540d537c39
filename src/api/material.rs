//! Teaching materials, including the text → slides → video pipeline.

use std::fmt::Display;

use serde::Serialize;
use serde_json::Value;

use super::{ApiClient, seg};
use crate::net::error::ClientError;
use crate::net::request::ApiRequest;
use crate::net::transport::Transport;

#[cfg(test)]
#[path = "material_test.rs"]
mod tests;

pub struct MaterialApi<'a, T> {
    pub(crate) client: &'a ApiClient<T>,
}

impl<T: Transport> MaterialApi<'_, T> {
    pub async fn create_material(&self, data: &impl Serialize) -> Result<Value, ClientError> {
        self.client.send(ApiRequest::post("/materials").json(data)?).await
    }

    /// Generate a slide deck from source text.
    pub async fn text_to_ppt(&self, data: &impl Serialize) -> Result<Value, ClientError> {
        self.client
            .send(ApiRequest::post("/materials/text-to-ppt").json(data)?)
            .await
    }

    /// Render a slide deck to video.
    pub async fn ppt_to_video(&self, data: &impl Serialize) -> Result<Value, ClientError> {
        self.client
            .send(ApiRequest::post("/materials/ppt-to-video").json(data)?)
            .await
    }

    pub async fn get_material_detail(&self, id: impl Display) -> Result<Value, ClientError> {
        self.client
            .send(ApiRequest::get(format!("/materials/{}", seg(id))))
            .await
    }

    pub async fn get_materials_by_course(&self, course_id: impl Display) -> Result<Value, ClientError> {
        self.client
            .send(ApiRequest::get(format!("/materials/course/{}", seg(course_id))))
            .await
    }

    pub async fn get_materials_by_chapter(&self, chapter_id: impl Display) -> Result<Value, ClientError> {
        self.client
            .send(ApiRequest::get(format!("/materials/chapter/{}", seg(chapter_id))))
            .await
    }

    pub async fn update_material(&self, id: impl Display, data: &impl Serialize) -> Result<Value, ClientError> {
        self.client
            .send(ApiRequest::put(format!("/materials/{}", seg(id))).json(data)?)
            .await
    }

    pub async fn delete_material(&self, id: impl Display) -> Result<Value, ClientError> {
        self.client
            .send(ApiRequest::delete(format!("/materials/{}", seg(id))))
            .await
    }
}
