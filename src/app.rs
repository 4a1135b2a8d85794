use crate::clock::Clock;
use crate::config::Config;
use crate::domain::task::display_order;
use crate::domain::{Dashboard, MoodScore, SessionLengthChange, TaskId, Timer, TimerEvent, UiMode};
use crate::notifications;
use crate::persistence::Store;
use anyhow::Result;
use tracing::{debug, info, trace};

/// Input form state for adding tasks
#[derive(Debug, Clone, Default)]
pub struct TaskFormState {
    pub title: String,
    pub tag: String,
    pub editing_field: usize, // 0 = title, 1 = tag
}

/// Input form state for logging a mood
#[derive(Debug, Clone, Default)]
pub struct MoodFormState {
    pub score: Option<MoodScore>,
    pub note: String,
    pub editing_field: usize, // 0 = score, 1 = note
}

/// Main application state. Owns every piece of state; the event loop only talks to this.
pub struct AppState {
    pub store: Store,
    pub timer: Timer,
    pub config: Config,
    clock: Box<dyn Clock>,
    pub ui_mode: UiMode,
    pub selected_index: usize,
    pub task_form: Option<TaskFormState>,
    pub mood_form: Option<MoodFormState>,
    pub session_length_input: Option<String>,
}

impl AppState {
    pub fn new(store: Store, config: Config, clock: Box<dyn Clock>) -> Self {
        let timer = Timer::new(config.session_minutes);

        Self {
            store,
            timer,
            config,
            clock,
            ui_mode: UiMode::Normal,
            selected_index: 0,
            task_form: None,
            mood_form: None,
            session_length_input: None,
        }
    }

    /// Current view of everything on screen
    pub fn dashboard(&self) -> Dashboard {
        Dashboard::build(
            self.store.records(),
            &self.timer,
            self.clock.now_ms(),
            self.config.stale_after_days,
        )
    }

    // ---- Tasks ----

    /// Add a task. Returns false (and changes nothing) if the title is blank.
    pub fn add_task(&mut self, title: &str, tag: &str) -> Result<bool> {
        let now = self.clock.now_ms();
        match self.store.add_task(title, tag, now)? {
            Some(id) => {
                debug!(%id, "task added");
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Flip completion of a task; unknown ids are ignored
    pub fn toggle_task(&mut self, id: &TaskId) -> Result<()> {
        let now = self.clock.now_ms();
        if self.store.toggle_task(id, now)? {
            debug!(%id, "task toggled");
        }
        Ok(())
    }

    /// Remove a task; unknown ids are ignored
    pub fn delete_task(&mut self, id: &TaskId) -> Result<()> {
        if self.store.delete_task(id)? {
            debug!(%id, "task deleted");
            self.clamp_selection();
        }
        Ok(())
    }

    /// Id of the highlighted row, in display order
    pub fn selected_task_id(&self) -> Option<TaskId> {
        display_order(&self.store.records().tasks)
            .get(self.selected_index)
            .map(|task| task.id.clone())
    }

    pub fn toggle_selected(&mut self) -> Result<()> {
        match self.selected_task_id() {
            Some(id) => self.toggle_task(&id),
            None => Ok(()),
        }
    }

    pub fn delete_selected(&mut self) -> Result<()> {
        match self.selected_task_id() {
            Some(id) => self.delete_task(&id),
            None => Ok(()),
        }
    }

    /// Move selection up
    pub fn move_selection_up(&mut self) {
        if self.selected_index > 0 {
            self.selected_index -= 1;
        }
    }

    /// Move selection down
    pub fn move_selection_down(&mut self) {
        if self.selected_index + 1 < self.store.records().tasks.len() {
            self.selected_index += 1;
        }
    }

    fn clamp_selection(&mut self) {
        let len = self.store.records().tasks.len();
        if len == 0 {
            self.selected_index = 0;
        } else if self.selected_index >= len {
            self.selected_index = len - 1;
        }
    }

    // ---- Timer ----

    pub fn start_timer(&mut self) {
        if self.timer.start(self.clock.instant()) {
            debug!(remaining_secs = self.timer.remaining_secs(), "timer started");
        }
    }

    pub fn pause_timer(&mut self) {
        if self.timer.pause() {
            debug!(remaining_secs = self.timer.remaining_secs(), "timer paused");
        }
    }

    pub fn reset_timer(&mut self) {
        self.timer.reset();
        debug!("timer reset");
    }

    /// Apply a session length typed by the user
    pub fn change_session_length(&mut self, input: &str) -> SessionLengthChange {
        let change = self.timer.set_session_length(input, self.clock.instant());
        debug!(?change, "session length changed");
        change
    }

    /// Called by the event loop on every iteration
    pub fn tick(&mut self) -> Result<()> {
        match self.timer.poll(self.clock.instant()) {
            Some(TimerEvent::Tick { remaining_secs }) => trace!(remaining_secs, "timer tick"),
            Some(TimerEvent::Completed) => {
                let total = self.store.record_focus_session()?;
                info!(total, "focus session completed");
                notifications::notify_session_complete(total);
            }
            None => {}
        }
        Ok(())
    }

    // ---- Moods ----

    /// Log a mood. Returns false (and changes nothing) if no score was chosen.
    pub fn submit_mood(&mut self, score: Option<MoodScore>, note: &str) -> Result<bool> {
        let Some(score) = score else {
            return Ok(false);
        };
        let now = self.clock.now_ms();
        self.store.add_mood(score, note, now)?;
        debug!(score = score.value(), "mood logged");
        Ok(true)
    }

    // ---- Purge ----

    /// Ask for confirmation; nothing is cleared yet
    pub fn request_purge(&mut self) {
        self.ui_mode = UiMode::ConfirmPurge;
    }

    /// Confirmed: wipe tasks, focus count and moods
    pub fn confirm_purge(&mut self) -> Result<()> {
        self.ui_mode = UiMode::Normal;
        self.store.purge()?;
        self.selected_index = 0;
        Ok(())
    }

    pub fn cancel_purge(&mut self) {
        self.ui_mode = UiMode::Normal;
    }

    // ---- Forms ----

    /// Start adding a new task (opens input form)
    pub fn start_add_task(&mut self) {
        self.task_form = Some(TaskFormState::default());
        self.ui_mode = UiMode::AddingTask;
    }

    /// Start logging a mood (opens mood form)
    pub fn start_log_mood(&mut self) {
        self.mood_form = Some(MoodFormState::default());
        self.ui_mode = UiMode::LoggingMood;
    }

    /// Start editing the session length, prefilled with the current value
    pub fn start_edit_session_length(&mut self) {
        self.session_length_input = Some(self.timer.session_minutes().to_string());
        self.ui_mode = UiMode::EditingSessionLength;
    }

    /// Switch between fields of the open form
    pub fn form_toggle_field(&mut self) {
        match self.ui_mode {
            UiMode::AddingTask => {
                if let Some(form) = &mut self.task_form {
                    form.editing_field = (form.editing_field + 1) % 2;
                }
            }
            UiMode::LoggingMood => {
                if let Some(form) = &mut self.mood_form {
                    form.editing_field = (form.editing_field + 1) % 2;
                }
            }
            _ => {}
        }
    }

    /// Add character to the focused field of the open form
    pub fn form_add_char(&mut self, c: char) {
        match self.ui_mode {
            UiMode::AddingTask => {
                if let Some(form) = &mut self.task_form {
                    match form.editing_field {
                        0 => form.title.push(c),
                        _ => form.tag.push(c),
                    }
                }
            }
            UiMode::LoggingMood => {
                if let Some(form) = &mut self.mood_form {
                    if form.editing_field == 0 {
                        // Score field takes a digit 1-5
                        if let Some(score) = c.to_digit(10).and_then(|d| MoodScore::try_from(d as u8).ok()) {
                            form.score = Some(score);
                        }
                    } else {
                        form.note.push(c);
                    }
                }
            }
            UiMode::EditingSessionLength => {
                if let Some(input) = &mut self.session_length_input {
                    input.push(c);
                }
            }
            _ => {}
        }
    }

    /// Backspace in the focused field of the open form
    pub fn form_backspace(&mut self) {
        match self.ui_mode {
            UiMode::AddingTask => {
                if let Some(form) = &mut self.task_form {
                    match form.editing_field {
                        0 => form.title.pop(),
                        _ => form.tag.pop(),
                    };
                }
            }
            UiMode::LoggingMood => {
                if let Some(form) = &mut self.mood_form {
                    if form.editing_field == 0 {
                        form.score = None;
                    } else {
                        form.note.pop();
                    }
                }
            }
            UiMode::EditingSessionLength => {
                if let Some(input) = &mut self.session_length_input {
                    input.pop();
                }
            }
            _ => {}
        }
    }

    /// Step the mood score selector up or down
    pub fn mood_form_step_score(&mut self, up: bool) {
        if let Some(form) = &mut self.mood_form {
            form.score = Some(match (form.score, up) {
                (Some(score), true) => score.raise(),
                (Some(score), false) => score.lower(),
                (None, true) => MoodScore::LOWEST,
                (None, false) => MoodScore::HIGHEST,
            });
            form.editing_field = 0;
        }
    }

    /// Submit the open form. Invalid input keeps the form open with focus on the offending
    /// field.
    pub fn submit_form(&mut self) -> Result<()> {
        match self.ui_mode {
            UiMode::AddingTask => {
                if let Some(mut form) = self.task_form.take() {
                    if self.add_task(&form.title, &form.tag)? {
                        self.ui_mode = UiMode::Normal;
                    } else {
                        form.editing_field = 0;
                        self.task_form = Some(form);
                    }
                }
            }
            UiMode::LoggingMood => {
                if let Some(mut form) = self.mood_form.take() {
                    if self.submit_mood(form.score, &form.note)? {
                        self.ui_mode = UiMode::Normal;
                    } else {
                        form.editing_field = 0;
                        self.mood_form = Some(form);
                    }
                }
            }
            UiMode::EditingSessionLength => {
                if let Some(input) = self.session_length_input.take() {
                    self.change_session_length(&input);
                }
                self.ui_mode = UiMode::Normal;
            }
            _ => {}
        }
        Ok(())
    }

    /// Close whichever form is open without applying it
    pub fn cancel_form(&mut self) {
        self.task_form = None;
        self.mood_form = None;
        self.session_length_input = None;
        self.ui_mode = UiMode::Normal;
    }
}
