pub use crate::document::{Browser, DefaultAction, Document};
pub use crate::scheduler::{Scheduler, Task, TaskKey};
