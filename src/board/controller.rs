//! Board Controller
//!
//! Task cache, drag feedback and the move/load flows of one project board.
//! The DOM and the backend sit behind `BoardView` and `BoardApi` so the
//! flows run the same against the page and against test doubles.
//!
//! Moves are confirmed before they are shown: the card only changes column
//! once the server has accepted the new status, so a refused move needs no
//! rollback.

use std::cell::RefCell;
use std::collections::HashMap;

use web_dragdrop::{pointer_left, Subtree};

use super::card::Card;
use crate::commands::ApiError;
use crate::config::{TOAST_ERROR_MS, TOAST_SHORT_MS};
use crate::models::{NewColumn, Task};
use crate::toast::{Notifier, ToastKind};

/// Column and card markup the controller drives
pub trait BoardView {
    /// Position in the markup tree, used to tell a real leave from a move into a child
    type Node: Subtree;

    /// Empty every column's card list
    fn clear_columns(&self);
    /// The column region for `status`
    fn column_node(&self, status: &str) -> Option<Self::Node>;
    /// Append a card to the column for `status`; false when there is no such column
    fn append_card(&self, status: &str, card: &Card) -> bool;
    /// Move an existing card into the column for `status`; false when either is missing
    fn relocate_card(&self, task_id: &str, status: &str) -> bool;
    /// Toggle the drop-target highlight of a column
    fn set_drop_marker(&self, status: &str, active: bool);
}

/// Backend calls made from the board
#[allow(async_fn_in_trait)]
pub trait BoardApi {
    async fn list_tasks(&self, project_id: &str) -> Result<Vec<Task>, ApiError>;
    async fn update_task_status(&self, task_id: &str, status: &str) -> Result<(), ApiError>;
    async fn create_column(&self, project_id: &str, column: &NewColumn) -> Result<(), ApiError>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    /// Server accepted; card and cache follow
    Moved,
    /// Server answered with a failure status
    Rejected,
    /// Request never got an answer
    Failed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnOutcome {
    /// Blank name or status, nothing sent
    Invalid,
    Created,
    Rejected,
    Failed,
}

pub struct BoardController<V, A, N> {
    project_id: String,
    view: V,
    api: A,
    notifier: N,
    tasks: RefCell<HashMap<String, Task>>,
}

impl<V: BoardView, A: BoardApi, N: Notifier> BoardController<V, A, N> {
    pub fn new(project_id: impl Into<String>, view: V, api: A, notifier: N) -> Self {
        Self {
            project_id: project_id.into(),
            view,
            api,
            notifier,
            tasks: RefCell::new(HashMap::new()),
        }
    }

    // ========================
    // Loading
    // ========================

    /// Fetch every task and redraw the board. Failures are only logged.
    pub async fn load_tasks(&self) {
        match self.api.list_tasks(&self.project_id).await {
            Ok(tasks) => {
                log::info!("[BOARD] Loaded {} tasks for project {}", tasks.len(), self.project_id);
                self.render_tasks(tasks);
            }
            Err(e) => log::error!("[BOARD] Error loading tasks: {}", e),
        }
    }

    /// Replace the cache and redraw every card from scratch
    pub fn render_tasks(&self, tasks: Vec<Task>) {
        self.view.clear_columns();
        self.tasks.borrow_mut().clear();
        for task in tasks {
            self.render_task(&task);
            self.tasks.borrow_mut().insert(task.id.clone(), task);
        }
    }

    /// Draw one card. A status without a column is skipped silently.
    pub fn render_task(&self, task: &Task) -> bool {
        self.view.append_card(&task.status, &Card::from_task(task))
    }

    // ========================
    // Drag feedback
    // ========================

    pub fn drag_over(&self, status: &str) {
        self.view.set_drop_marker(status, true);
    }

    /// Clear the marker unless the pointer only moved onto something inside
    /// the column. `related` is where the pointer went, if anywhere.
    pub fn drag_leave(&self, status: &str, related: Option<&V::Node>) {
        let Some(column) = self.view.column_node(status) else {
            return;
        };
        if pointer_left(&column, related) {
            self.view.set_drop_marker(status, false);
        }
    }

    /// Handle a drop on the column for `status`
    pub async fn drop_on(&self, status: &str, payload: Option<String>) -> Option<MoveOutcome> {
        self.view.set_drop_marker(status, false);
        let task_id = payload.filter(|id| !id.is_empty())?;
        if status.is_empty() {
            return None;
        }
        Some(self.move_task(&task_id, status).await)
    }

    // ========================
    // Moves
    // ========================

    /// Ask the server to move a task and, once it agrees, move the card.
    /// Concurrent moves of one task apply in response order.
    pub async fn move_task(&self, task_id: &str, new_status: &str) -> MoveOutcome {
        match self.api.update_task_status(task_id, new_status).await {
            Ok(()) => {
                if self.view.relocate_card(task_id, new_status) {
                    if let Some(task) = self.tasks.borrow_mut().get_mut(task_id) {
                        task.status = new_status.to_string();
                    }
                }
                self.notifier.notify(
                    &format!("Task moved to {}", new_status),
                    ToastKind::Success,
                    TOAST_SHORT_MS,
                );
                MoveOutcome::Moved
            }
            Err(e) if e.is_rejection() => {
                log::warn!("[BOARD] Move of {} to {} refused: {}", task_id, new_status, e);
                self.notifier.notify("Failed to move task", ToastKind::Error, TOAST_ERROR_MS);
                MoveOutcome::Rejected
            }
            Err(e) => {
                log::error!("[BOARD] Error moving task: {}", e);
                self.notifier.notify("Error moving task", ToastKind::Error, TOAST_ERROR_MS);
                MoveOutcome::Failed
            }
        }
    }

    // ========================
    // Columns
    // ========================

    /// Request a new column. The caller reloads the page on `Created`.
    pub async fn add_column(&self, name: &str, status: &str) -> ColumnOutcome {
        let Some(column) = NewColumn::parse(name, status) else {
            self.notifier.notify("Please fill all fields", ToastKind::Warning, TOAST_SHORT_MS);
            return ColumnOutcome::Invalid;
        };
        match self.api.create_column(&self.project_id, &column).await {
            Ok(()) => {
                log::info!("[BOARD] Column {} created", column.status);
                ColumnOutcome::Created
            }
            Err(e) if e.is_rejection() => {
                log::warn!("[BOARD] Column {} refused: {}", column.status, e);
                self.notifier.notify("Failed to add column", ToastKind::Error, TOAST_ERROR_MS);
                ColumnOutcome::Rejected
            }
            Err(e) => {
                log::error!("[BOARD] Error adding column: {}", e);
                self.notifier.notify("Error adding column", ToastKind::Error, TOAST_ERROR_MS);
                ColumnOutcome::Failed
            }
        }
    }
}
