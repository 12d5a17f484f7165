//! Centralised in-memory task store.
//!
//! Every mutation goes through [`TaskStore::dispatch`], which runs the pure
//! [`reduce`] function, swaps in the resulting snapshot and notifies
//! subscribers before returning. Readers hold `Rc<TasksState>` snapshots that
//! never change under them.

use crate::task::{Task, TaskId};
use std::fmt;
use std::rc::Rc;

/// Immutable snapshot of the task collection, in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TasksState {
    tasks: Vec<Task>,
}

impl TasksState {
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn find(&self, id: &TaskId) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id() == *id)
    }
}

/// Mutations understood by the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskAction {
    Add(Task),
    Remove(TaskId),
}

/// Applies `action` to `state`, returning the next snapshot.
///
/// Returns `None` when the action leaves the collection untouched, which only
/// happens when removing an id that is not present. Ids and timestamps are
/// minted before dispatch, so the reducer itself is deterministic.
pub fn reduce(state: &TasksState, action: TaskAction) -> Option<TasksState> {
    match action {
        TaskAction::Add(task) => {
            let mut tasks = state.tasks.clone();
            tasks.push(task);
            Some(TasksState { tasks })
        }
        TaskAction::Remove(id) => {
            state.find(&id)?;
            let tasks = state
                .tasks
                .iter()
                .filter(|task| task.id() != id)
                .cloned()
                .collect();
            Some(TasksState { tasks })
        }
    }
}

/// Handle returned by [`TaskStore::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Listener = Box<dyn Fn(&TasksState)>;

/// Single-writer holder of the session's tasks.
pub struct TaskStore {
    state: Rc<TasksState>,
    listeners: Vec<(SubscriptionId, Listener)>,
    next_subscription: u64,
}

impl Default for TaskStore {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for TaskStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TaskStore")
            .field("state", &self.state)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

impl TaskStore {
    pub fn new() -> Self {
        TaskStore {
            state: Rc::new(TasksState::default()),
            listeners: Vec::new(),
            next_subscription: 1,
        }
    }

    /// Runs `action` through the reducer and notifies subscribers if anything changed.
    pub fn dispatch(&mut self, action: TaskAction) {
        tracing::debug!(?action, "dispatching task action");
        match reduce(&self.state, action) {
            Some(next) => {
                self.state = Rc::new(next);
                for (_, listener) in &self.listeners {
                    listener(&self.state);
                }
            }
            None => tracing::trace!("task action was a no-op"),
        }
    }

    /// Appends a new task and returns its id.
    pub fn create(&mut self, description: impl Into<String>) -> TaskId {
        let task = Task::new(description);
        let id = task.id();
        self.dispatch(TaskAction::Add(task));
        id
    }

    /// Removes the task with `id`. Unknown ids are ignored.
    pub fn delete(&mut self, id: &TaskId) {
        self.dispatch(TaskAction::Remove(*id));
    }

    /// Current snapshot. Cheap to clone and safe to keep around.
    pub fn select_all(&self) -> Rc<TasksState> {
        Rc::clone(&self.state)
    }

    pub fn tasks(&self) -> &[Task] {
        self.state.tasks()
    }

    /// Registers a listener called synchronously after every effective mutation.
    pub fn subscribe(&mut self, listener: impl Fn(&TasksState) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Removes a listener. Returns whether it was registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(listener_id, _)| *listener_id != id);
        self.listeners.len() != before
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    fn descriptions(store: &TaskStore) -> Vec<&str> {
        store.tasks().iter().map(Task::description).collect()
    }

    #[test]
    fn new_store_is_empty() {
        let store = TaskStore::new();

        assert!(store.select_all().is_empty());
    }

    #[test]
    fn create_appends_in_call_order() {
        let mut store = TaskStore::new();

        store.create("Task 1");
        store.create("Task 2");
        store.create("Task 3");

        assert_eq!(store.select_all().len(), 3);
        assert_eq!(descriptions(&store), vec!["Task 1", "Task 2", "Task 3"]);
    }

    #[test]
    fn create_returns_id_of_new_task() {
        let mut store = TaskStore::new();

        let id = store.create("buy milk");

        let task = store.select_all().find(&id).cloned().unwrap();
        assert_eq!(task.description(), "buy milk");
    }

    #[test]
    fn rapid_creates_get_distinct_ids() {
        let mut store = TaskStore::new();

        let ids: Vec<TaskId> = (0..100).map(|i| store.create(format!("task {i}"))).collect();

        let unique: std::collections::HashSet<_> = ids.iter().collect();
        assert_eq!(unique.len(), 100);
    }

    #[test]
    fn delete_removes_exactly_one_and_keeps_order() {
        let mut store = TaskStore::new();
        store.create("first");
        let middle = store.create("second");
        store.create("third");

        store.delete(&middle);

        assert_eq!(descriptions(&store), vec!["first", "third"]);
    }

    #[test]
    fn delete_of_unknown_id_is_a_no_op() {
        let mut store = TaskStore::new();
        store.create("only");
        let before = store.select_all();

        store.delete(&TaskId::new());

        let after = store.select_all();
        assert!(Rc::ptr_eq(&before, &after));
        assert_eq!(*before, *after);
    }

    #[test]
    fn old_snapshots_are_not_affected_by_later_mutations() {
        let mut store = TaskStore::new();
        store.create("first");
        let snapshot = store.select_all();

        store.create("second");

        assert_eq!(snapshot.len(), 1);
        assert_eq!(store.select_all().len(), 2);
    }

    #[test]
    fn subscribers_see_new_state_synchronously() {
        let mut store = TaskStore::new();
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        store.subscribe(move |state| sink.borrow_mut().push(state.len()));

        let id = store.create("a");
        store.create("b");
        store.delete(&id);

        assert_eq!(*seen.borrow(), vec![1, 2, 1]);
    }

    #[test]
    fn subscribers_are_not_notified_on_no_op() {
        let mut store = TaskStore::new();
        let calls = Rc::new(RefCell::new(0));
        let counter = Rc::clone(&calls);
        store.subscribe(move |_| *counter.borrow_mut() += 1);

        store.delete(&TaskId::new());

        assert_eq!(*calls.borrow(), 0);
    }

    #[test]
    fn unsubscribed_listener_stops_receiving() {
        let mut store = TaskStore::new();
        let calls = Rc::new(RefCell::new(0));
        let counter = Rc::clone(&calls);
        let subscription = store.subscribe(move |_| *counter.borrow_mut() += 1);

        store.create("a");
        assert!(store.unsubscribe(subscription));
        store.create("b");

        assert_eq!(*calls.borrow(), 1);
        assert!(!store.unsubscribe(subscription));
    }

    #[test]
    fn reducer_returns_none_for_missing_remove() {
        let state = TasksState::default();

        assert_eq!(reduce(&state, TaskAction::Remove(TaskId::new())), None);
    }

    #[test]
    fn reducer_does_not_touch_input_state() {
        let state = TasksState::default();

        let next = reduce(&state, TaskAction::Add(Task::new("x"))).unwrap();

        assert!(state.is_empty());
        assert_eq!(next.len(), 1);
    }
}
