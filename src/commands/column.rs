//! Column Requests

use super::{encode_segment, ApiError, HttpClient};
use crate::models::NewColumn;

pub fn columns_url(project_id: &str) -> String {
    format!("/api/projects/{}/columns", encode_segment(project_id))
}

/// Create a column; any success status counts
pub async fn create_column(client: &HttpClient, project_id: &str, column: &NewColumn) -> Result<(), ApiError> {
    client
        .send_json("POST", &columns_url(project_id), column)
        .await
        .map(|_| ())
}
