//! Board Markup
//!
//! `BoardView` over the server-rendered columns, and the drag listeners
//! that feed the controller.

use std::rc::Rc;

use leptos::task::spawn_local;
use wasm_bindgen::JsValue;
use web_sys::{Document, Element, Node};
use web_dragdrop::{accept_drop, begin_drag, read_payload, related_node, target_with_class, Subscription};

use super::card::Card;
use super::controller::{BoardApi, BoardController, BoardView};
use crate::config::{COLUMN_CLASS, TASK_CARD_CLASS, TASK_LIST_CLASS};
use crate::dom;
use crate::toast::Notifier;

const DRAGGING_CLASS: &str = "dragging";
const DRAG_OVER_CLASS: &str = "drag-over";

pub struct DomBoard {
    document: Document,
}

impl DomBoard {
    pub fn new(document: Document) -> Self {
        Self { document }
    }

    fn columns(&self) -> Vec<Element> {
        dom::query_all(&self.document, &format!(".{}", COLUMN_CLASS))
    }

    /// Column whose `data-status` equals `status`
    fn column(&self, status: &str) -> Option<Element> {
        self.columns()
            .into_iter()
            .find(|column| column.get_attribute("data-status").as_deref() == Some(status))
    }

    fn task_list(&self, status: &str) -> Option<Element> {
        self.column(status)?
            .query_selector(&format!(".{}", TASK_LIST_CLASS))
            .ok()
            .flatten()
    }

    fn card(&self, task_id: &str) -> Option<Element> {
        dom::query_all(&self.document, &format!(".{}", TASK_CARD_CLASS))
            .into_iter()
            .find(|card| card.get_attribute("data-task-id").as_deref() == Some(task_id))
    }

    fn element(&self, tag: &str, class: &str) -> Result<Element, JsValue> {
        let element = self.document.create_element(tag)?;
        element.set_class_name(class);
        Ok(element)
    }

    /// Build the card element; all task text is inserted as text
    fn build_card(&self, card: &Card) -> Result<Element, JsValue> {
        let root = self.element("div", TASK_CARD_CLASS)?;
        root.set_attribute("draggable", "true")?;
        root.set_attribute("data-task-id", &card.task_id)?;

        let header = self.element("div", "task-header")?;
        let kind = self.element("span", &format!("task-type {}", card.type_icon.class))?;
        let icon = self.element("i", &format!("fas {}", card.type_icon.icon))?;
        kind.append_child(&icon)?;
        header.append_child(&kind)?;
        let priority = self.element("span", &format!("task-priority {}", card.priority_class))?;
        header.append_child(&priority)?;
        root.append_child(&header)?;

        let title = self.element("div", "task-title")?;
        title.set_text_content(Some(&card.title));
        root.append_child(&title)?;

        let meta = self.element("div", "task-meta")?;
        let id = self.element("span", "task-id")?;
        id.set_text_content(Some(&format!("#{}", card.short_id)));
        meta.append_child(&id)?;
        if let Some(assignee) = &card.assignee {
            let name = self.element("span", "task-assignee")?;
            name.set_text_content(Some(assignee));
            meta.append_child(&name)?;
        }
        root.append_child(&meta)?;

        Ok(root)
    }
}

impl BoardView for DomBoard {
    type Node = Node;

    fn clear_columns(&self) {
        for list in dom::query_all(&self.document, &format!(".{}", TASK_LIST_CLASS)) {
            list.set_inner_html("");
        }
    }

    fn column_node(&self, status: &str) -> Option<Node> {
        self.column(status).map(Node::from)
    }

    fn append_card(&self, status: &str, card: &Card) -> bool {
        let Some(list) = self.task_list(status) else {
            return false;
        };
        match self.build_card(card) {
            Ok(element) => list.append_child(&element).is_ok(),
            Err(e) => {
                log::error!("[BOARD] Could not build card {}: {:?}", card.task_id, e);
                false
            }
        }
    }

    fn relocate_card(&self, task_id: &str, status: &str) -> bool {
        match (self.card(task_id), self.task_list(status)) {
            (Some(card), Some(list)) => list.append_child(&card).is_ok(),
            _ => false,
        }
    }

    fn set_drop_marker(&self, status: &str, active: bool) {
        if let Some(column) = self.column(status) {
            let _ = column.class_list().toggle_with_force(DRAG_OVER_CLASS, active);
        }
    }
}

/// Wire drag events to the controller. Card listeners are delegated to the
/// document; column listeners bind to the columns present now.
pub fn bind<A, N>(board: &Rc<BoardController<DomBoard, A, N>>, document: &Document) -> Subscription
where
    A: BoardApi + 'static,
    N: Notifier + 'static,
{
    let mut subscription = Subscription::new();

    subscription.listen_drag(document.as_ref(), "dragstart", |ev| {
        if let Some(card) = target_with_class(ev.target(), TASK_CARD_CLASS) {
            let _ = card.class_list().add_1(DRAGGING_CLASS);
            if let Some(task_id) = card.get_attribute("data-task-id") {
                begin_drag(&ev, &task_id);
            }
        }
    });

    subscription.listen_drag(document.as_ref(), "dragend", |ev| {
        if let Some(card) = target_with_class(ev.target(), TASK_CARD_CLASS) {
            let _ = card.class_list().remove_1(DRAGGING_CLASS);
        }
    });

    for column in dom::query_all(document, &format!(".{}", COLUMN_CLASS)) {
        let Some(status) = column.get_attribute("data-status") else {
            continue;
        };

        let over = board.clone();
        let over_status = status.clone();
        subscription.listen_drag(column.as_ref(), "dragover", move |ev| {
            accept_drop(&ev);
            over.drag_over(&over_status);
        });

        let leave = board.clone();
        let leave_status = status.clone();
        subscription.listen_drag(column.as_ref(), "dragleave", move |ev| {
            leave.drag_leave(&leave_status, related_node(&ev).as_ref());
        });

        let on_drop = board.clone();
        subscription.listen_drag(column.as_ref(), "drop", move |ev| {
            ev.prevent_default();
            let board = on_drop.clone();
            let status = status.clone();
            let payload = read_payload(&ev);
            spawn_local(async move {
                board.drop_on(&status, payload).await;
            });
        });
    }

    log::info!("[BOARD] Bound {} drag listeners", subscription.len());
    subscription
}

#[cfg(all(test, target_arch = "wasm32"))]
mod browser_tests {
    use super::*;
    use crate::models::{Priority, Task, TaskKind};
    use wasm_bindgen_test::*;
    use web_dragdrop::pointer_left;

    wasm_bindgen_test_configure!(run_in_browser);

    /// Columns for `statuses` under a fresh root in `<body>`
    fn board_with(statuses: &[&str]) -> (DomBoard, Element) {
        let document = dom::document().unwrap();
        let root = document.create_element("div").unwrap();
        for status in statuses {
            let column = document.create_element("div").unwrap();
            column.set_class_name(COLUMN_CLASS);
            column.set_attribute("data-status", status).unwrap();
            let list = document.create_element("div").unwrap();
            list.set_class_name(TASK_LIST_CLASS);
            column.append_child(&list).unwrap();
            root.append_child(&column).unwrap();
        }
        document.body().unwrap().append_child(&root).unwrap();
        (DomBoard::new(document), root)
    }

    fn list_of(root: &Element, status: &str) -> Element {
        root.query_selector(&format!("[data-status=\"{}\"] .{}", status, TASK_LIST_CLASS))
            .unwrap()
            .unwrap()
    }

    fn card(id: &str, title: &str, status: &str) -> Card {
        Card::from_task(&Task {
            id: id.to_string(),
            title: title.to_string(),
            status: status.to_string(),
            priority: Priority::High,
            kind: TaskKind::Bug,
            assigned_to: Some("dana".to_string()),
        })
    }

    #[wasm_bindgen_test]
    fn relocated_card_ends_up_in_target_list() {
        let (board, root) = board_with(&["reloc-todo", "reloc-done"]);
        assert!(board.append_card("reloc-todo", &card("reloc-1", "Fix login", "reloc-todo")));

        assert!(board.relocate_card("reloc-1", "reloc-done"));

        let done = list_of(&root, "reloc-done");
        assert_eq!(done.child_element_count(), 1);
        let moved = done.first_element_child().unwrap();
        assert_eq!(moved.get_attribute("data-task-id").as_deref(), Some("reloc-1"));
        assert_eq!(list_of(&root, "reloc-todo").child_element_count(), 0);
        root.remove();
    }

    #[wasm_bindgen_test]
    fn card_text_is_not_parsed_as_markup() {
        let (board, root) = board_with(&["text-todo"]);
        assert!(board.append_card("text-todo", &card("text-1", "<b>bold</b>", "text-todo")));

        let title = root.query_selector(".task-title").unwrap().unwrap();
        assert_eq!(title.child_element_count(), 0);
        assert_eq!(title.text_content().as_deref(), Some("<b>bold</b>"));
        let assignee = root.query_selector(".task-assignee").unwrap().unwrap();
        assert_eq!(assignee.text_content().as_deref(), Some("dana"));
        root.remove();
    }

    #[wasm_bindgen_test]
    fn missing_column_or_card_changes_nothing() {
        let (board, root) = board_with(&["miss-todo"]);
        assert!(!board.append_card("miss-archived", &card("miss-1", "Nowhere", "miss-archived")));
        assert!(!board.relocate_card("miss-unknown", "miss-todo"));
        assert_eq!(list_of(&root, "miss-todo").child_element_count(), 0);
        root.remove();
    }

    #[wasm_bindgen_test]
    fn leaving_onto_own_card_stays_inside_column() {
        let (board, root) = board_with(&["leave-todo", "leave-done"]);
        board.append_card("leave-todo", &card("leave-1", "Inside", "leave-todo"));

        let column = board.column_node("leave-todo").unwrap();
        let inner: Node = root.query_selector(".task-title").unwrap().unwrap().into();
        let other = board.column_node("leave-done").unwrap();

        assert!(!pointer_left(&column, Some(&inner)));
        assert!(pointer_left(&column, Some(&other)));
        assert!(pointer_left(&column, None));
        root.remove();
    }
}
