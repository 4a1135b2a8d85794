pub mod enums;
pub mod mood;
pub mod records;
pub mod stats;
pub mod task;
pub mod text;
pub mod timer;
pub mod views;

pub use enums::{TimerPhase, UiMode};
pub use mood::{MoodEntry, MoodScore};
pub use records::Records;
pub use task::{Task, TaskId};
pub use timer::{SessionLengthChange, Timer, TimerEvent};
pub use views::{Dashboard, MoodRow, TaskRow};
