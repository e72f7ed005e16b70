//! Kanban Board
//!
//! Controller, card presentation and the markup adapter for one project.

mod card;
mod controller;
mod dom;

use std::rc::Rc;

use leptos::task::spawn_local;
use web_dragdrop::Subscription;
use web_sys::Document;

pub use controller::{BoardApi, BoardController, ColumnOutcome};
pub use dom::DomBoard;

use crate::commands::{self, ApiError, HttpClient};
use crate::models::{NewColumn, Task};
use crate::toast::Toasts;

/// The controller as wired on a real page
pub type PageBoard = BoardController<DomBoard, HttpClient, Toasts>;

impl BoardApi for HttpClient {
    async fn list_tasks(&self, project_id: &str) -> Result<Vec<Task>, ApiError> {
        commands::list_tasks(self, project_id).await
    }

    async fn update_task_status(&self, task_id: &str, status: &str) -> Result<(), ApiError> {
        commands::update_task_status(self, task_id, status).await
    }

    async fn create_column(&self, project_id: &str, column: &NewColumn) -> Result<(), ApiError> {
        commands::create_column(self, project_id, column).await
    }
}

/// Build the board for `project_id`, bind its listeners and start the first load
pub fn mount(document: &Document, project_id: String, client: HttpClient, toasts: Toasts) -> (Rc<PageBoard>, Subscription) {
    let board = Rc::new(BoardController::new(
        project_id,
        DomBoard::new(document.clone()),
        client,
        toasts,
    ));
    let subscription = dom::bind(&board, document);

    let loader = board.clone();
    spawn_local(async move {
        loader.load_tasks().await;
    });

    (board, subscription)
}
