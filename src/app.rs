use crate::domain::{display_tasks, is_valid_text, FilterMode, IdGenerator, SortMode, Task, UiMode};
use crate::persistence::{load_tasks, save_tasks, KeyValueStore};
use tracing::{debug, error, info};

/// The one task currently being edited, with its uncommitted text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditSession {
    pub task_id: String,
    pub scratch: String,
}

/// What a submission (Enter in the input line) ended up doing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Submission {
    Added,
    Saved,
    Ignored,
}

/// Main application state
pub struct AppState {
    /// Committed tasks, in creation order
    pub tasks: Vec<Task>,
    /// Pending text of the new-task input line
    pub input: String,
    pub edit: Option<EditSession>,
    pub filter: FilterMode,
    pub sort: SortMode,
    /// Index into the display list, not into `tasks`
    pub selected_index: usize,
    pub ui_mode: UiMode,
    pub use_ascii: bool,
    pub show_keybindings: bool,
    store: Box<dyn KeyValueStore>,
    ids: Box<dyn IdGenerator>,
}

impl AppState {
    /// Build the state, reading saved tasks from the store once
    pub fn load(store: Box<dyn KeyValueStore>, ids: Box<dyn IdGenerator>) -> Self {
        let tasks = load_tasks(store.as_ref());

        Self {
            tasks,
            input: String::new(),
            edit: None,
            filter: FilterMode::default(),
            sort: SortMode::default(),
            selected_index: 0,
            ui_mode: UiMode::Normal,
            use_ascii: false,
            show_keybindings: true,
            store,
            ids,
        }
    }

    /// Write the whole task list; failures are logged, never surfaced
    fn persist(&self) {
        if let Err(e) = save_tasks(self.store.as_ref(), &self.tasks) {
            error!(error = %e, "failed to save tasks");
        }
    }

    fn position_of(&self, id: &str) -> Option<usize> {
        self.tasks.iter().position(|t| t.id == id)
    }

    pub fn find_task(&self, id: &str) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    // --- Task store ---

    /// Append a new task. Blank text is ignored.
    pub fn add_task(&mut self, text: String) -> bool {
        if !is_valid_text(&text) {
            debug!("ignoring add with blank text");
            return false;
        }

        let mut id = self.ids.next_id();
        while self.position_of(&id).is_some() {
            id = self.ids.next_id();
        }

        let task = Task::new(id, text);
        info!(id = %task.id, "added task");
        self.tasks.push(task);
        self.persist();
        true
    }

    /// Add the pending input as a task, clearing the input on success
    pub fn add_from_input(&mut self) -> bool {
        let added = self.add_task(self.input.clone());
        if added {
            self.input.clear();
        }
        added
    }

    /// Remove a task by id; also ends an edit of that task
    pub fn remove_task(&mut self, id: &str) -> bool {
        let Some(idx) = self.position_of(id) else {
            debug!(id, "remove: no such task");
            return false;
        };

        self.tasks.remove(idx);
        if self.edit.as_ref().is_some_and(|e| e.task_id == id) {
            self.edit = None;
        }
        info!(id, "removed task");
        self.persist();
        self.clamp_selection();
        true
    }

    pub fn toggle_complete(&mut self, id: &str) -> bool {
        let Some(idx) = self.position_of(id) else {
            debug!(id, "toggle: no such task");
            return false;
        };

        self.tasks[idx].toggle();
        debug!(id, completed = self.tasks[idx].completed, "toggled task");
        self.persist();
        self.clamp_selection();
        true
    }

    /// Commit the edit session's scratch text to its task.
    /// Blank scratch text leaves the session open.
    pub fn save_edit(&mut self) -> bool {
        let Some(session) = &self.edit else {
            return false;
        };
        if !is_valid_text(&session.scratch) {
            debug!("ignoring save with blank text");
            return false;
        }

        let Some(session) = self.edit.take() else {
            return false;
        };
        let Some(idx) = self.position_of(&session.task_id) else {
            debug!(id = %session.task_id, "save: task under edit is gone");
            return false;
        };

        self.tasks[idx].text = session.scratch;
        info!(id = %session.task_id, "saved edit");
        self.persist();
        self.clamp_selection();
        true
    }

    // --- Edit session ---

    /// Start editing a task, abandoning any unsaved edit
    pub fn begin_edit(&mut self, id: &str) -> bool {
        let Some(task) = self.find_task(id) else {
            debug!(id, "edit: no such task");
            return false;
        };

        self.edit = Some(EditSession {
            task_id: task.id.clone(),
            scratch: task.text.clone(),
        });
        true
    }

    /// Replace the scratch text verbatim
    pub fn update_scratch(&mut self, text: String) {
        if let Some(session) = &mut self.edit {
            session.scratch = text;
        }
    }

    pub fn cancel_edit(&mut self) {
        self.edit = None;
    }

    pub fn is_editing(&self, id: &str) -> bool {
        self.edit.as_ref().is_some_and(|e| e.task_id == id)
    }

    // --- Input line ---

    /// Enter: save the edit if one is open, otherwise add the pending input
    pub fn submit(&mut self) -> Submission {
        let done = if self.edit.is_some() {
            self.save_edit().then_some(Submission::Saved)
        } else {
            self.add_from_input().then_some(Submission::Added)
        };
        done.unwrap_or(Submission::Ignored)
    }

    /// Text currently shown in the input line
    pub fn active_text(&self) -> &str {
        match &self.edit {
            Some(session) => &session.scratch,
            None => &self.input,
        }
    }

    /// Type a character into the scratch text (when editing) or the pending input
    pub fn input_push_char(&mut self, c: char) {
        match &self.edit {
            Some(session) => {
                let mut text = session.scratch.clone();
                text.push(c);
                self.update_scratch(text);
            }
            None => self.input.push(c),
        }
    }

    pub fn input_backspace(&mut self) {
        match &self.edit {
            Some(session) => {
                let mut text = session.scratch.clone();
                text.pop();
                self.update_scratch(text);
            }
            None => {
                self.input.pop();
            }
        }
    }

    // --- View ---

    /// Filtered and sorted tasks, as displayed
    pub fn visible_tasks(&self) -> Vec<&Task> {
        display_tasks(&self.tasks, self.filter, self.sort)
    }

    pub fn set_filter(&mut self, filter: FilterMode) {
        self.filter = filter;
        self.clamp_selection();
    }

    pub fn set_sort(&mut self, sort: SortMode) {
        self.sort = sort;
        self.clamp_selection();
    }

    pub fn cycle_filter(&mut self) {
        self.set_filter(self.filter.next());
    }

    pub fn cycle_sort(&mut self) {
        self.set_sort(self.sort.next());
    }

    // --- Selection ---

    pub fn selected_task_id(&self) -> Option<String> {
        self.visible_tasks()
            .get(self.selected_index)
            .map(|t| t.id.clone())
    }

    pub fn move_selection_up(&mut self) {
        if self.selected_index > 0 {
            self.selected_index -= 1;
        }
    }

    pub fn move_selection_down(&mut self) {
        if self.selected_index + 1 < self.visible_tasks().len() {
            self.selected_index += 1;
        }
    }

    /// Keep the selection inside the display list
    fn clamp_selection(&mut self) {
        let len = self.visible_tasks().len();
        if len == 0 {
            self.selected_index = 0;
        } else if self.selected_index >= len {
            self.selected_index = len - 1;
        }
    }

    pub fn toggle_selected(&mut self) {
        if let Some(id) = self.selected_task_id() {
            self.toggle_complete(&id);
        }
    }

    pub fn remove_selected(&mut self) {
        if let Some(id) = self.selected_task_id() {
            self.remove_task(&id);
        }
    }

    /// Begin editing the selected task and focus the input line
    pub fn edit_selected(&mut self) {
        if let Some(id) = self.selected_task_id() {
            if self.begin_edit(&id) {
                self.ui_mode = UiMode::TextEntry;
            }
        }
    }
}
