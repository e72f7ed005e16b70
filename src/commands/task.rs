//! Task Requests
//!
//! Listing a project's tasks and moving a task between columns.

use serde::Serialize;

use super::{encode_segment, ApiError, HttpClient};
use crate::models::Task;

#[derive(Serialize)]
struct StatusArgs<'a> {
    status: &'a str,
}

pub fn tasks_url(project_id: &str) -> String {
    format!("/api/projects/{}/tasks", encode_segment(project_id))
}

pub fn task_status_url(task_id: &str) -> String {
    format!("/tasks/{}/status", encode_segment(task_id))
}

pub async fn list_tasks(client: &HttpClient, project_id: &str) -> Result<Vec<Task>, ApiError> {
    client.get_json(&tasks_url(project_id)).await
}

/// Ask the server to move a task. Only the status code matters.
pub async fn update_task_status(client: &HttpClient, task_id: &str, status: &str) -> Result<(), ApiError> {
    client
        .send_json("PUT", &task_status_url(task_id), &StatusArgs { status })
        .await
        .map(|_| ())
}
