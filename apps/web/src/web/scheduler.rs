use fxhash::FxHashMap;
use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;
use tour::kernel::scheduler::{Scheduler, Task, TaskKey};
use tracing::trace;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::Window;

/// `setTimeout`-backed scheduler; the pending handle of each key is kept for `clearTimeout`.
#[derive(Debug, Clone)]
pub struct TimeoutScheduler {
    window: Window,
    handles: Rc<RefCell<FxHashMap<TaskKey, i32>>>,
}

impl TimeoutScheduler {
    #[must_use]
    pub fn new(window: Window) -> Self {
        Self { window, handles: Rc::default() }
    }
}

impl Scheduler for TimeoutScheduler {
    fn schedule(&self, key: TaskKey, delay: Duration, task: Task) {
        self.cancel(key);

        let handles = Rc::clone(&self.handles);
        let callback = Closure::once_into_js(move || {
            handles.borrow_mut().remove(&key);
            task();
        });
        let millis = i32::try_from(delay.as_millis()).unwrap_or(i32::MAX);

        match self
            .window
            .set_timeout_with_callback_and_timeout_and_arguments_0(callback.unchecked_ref(), millis)
        {
            Ok(handle) => {
                self.handles.borrow_mut().insert(key, handle);
            },
            Err(err) => trace!(?key, error = ?err, "setTimeout failed"),
        }
    }

    fn cancel(&self, key: TaskKey) -> bool {
        let Some(handle) = self.handles.borrow_mut().remove(&key) else {
            return false;
        };
        self.window.clear_timeout_with_handle(handle);
        true
    }
}
