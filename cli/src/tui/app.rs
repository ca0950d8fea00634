use ratatui::widgets::TableState;
use weekplan_core::{
    parse_quick_entry, DayScheduleDto, FileScheduleRepository, FreeSlotDto, ScheduleError,
    ScheduleResult, ScheduleService,
};

use crate::display::{day_name, describe_activity, today};

pub enum InputMode {
    Normal,
    Adding,
    Renaming,
}

pub struct App {
    pub service: ScheduleService<FileScheduleRepository>,
    pub day: u8,
    pub day_view: DayScheduleDto,
    pub free_slots: Vec<FreeSlotDto>,
    pub state: TableState,
    pub input: String,
    pub input_mode: InputMode,
    pub cursor_position: usize,
    pub status: Option<String>,
    pub dirty: bool,
}

impl App {
    pub fn new(service: ScheduleService<FileScheduleRepository>) -> App {
        let mut app = App {
            service,
            day: today(),
            day_view: DayScheduleDto { day: 1, activities: Vec::new() },
            free_slots: Vec::new(),
            state: TableState::default(),
            input: String::new(),
            input_mode: InputMode::Normal,
            cursor_position: 0,
            status: None,
            dirty: false,
        };
        app.refresh();
        app
    }

    /// Rebuilds the views of the current day and clamps the selection.
    fn refresh(&mut self) {
        match (
            self.service.activities_for_day(self.day),
            self.service.free_slots_for_day(self.day),
        ) {
            (Ok(view), Ok(slots)) => {
                self.day_view = view;
                self.free_slots = slots;
            }
            (Err(e), _) | (_, Err(e)) => self.status = Some(e.to_string()),
        }

        let len = self.day_view.activities.len();
        match self.state.selected() {
            _ if len == 0 => self.state.select(None),
            Some(i) if i >= len => self.state.select(Some(len - 1)),
            None => self.state.select(Some(0)),
            _ => {}
        }
    }

    pub fn next(&mut self) {
        let len = self.day_view.activities.len();
        if len == 0 { return; }

        let i = match self.state.selected() {
            Some(i) if i + 1 < len => i + 1,
            _ => 0,
        };
        self.state.select(Some(i));
    }

    pub fn previous(&mut self) {
        let len = self.day_view.activities.len();
        if len == 0 { return; }

        let i = match self.state.selected() {
            Some(0) | None => len - 1,
            Some(i) => i - 1,
        };
        self.state.select(Some(i));
    }

    pub fn next_day(&mut self) {
        self.day = if self.day >= 7 { 1 } else { self.day + 1 };
        self.state.select(None);
        self.refresh();
    }

    pub fn previous_day(&mut self) {
        self.day = if self.day <= 1 { 7 } else { self.day - 1 };
        self.state.select(None);
        self.refresh();
    }

    /// Removes the highlighted row itself, not the first activity sharing
    /// its name.
    pub fn delete_selected(&mut self) {
        let selected = self.state.selected().and_then(|i| {
            let view = self.service.schedule().activities_for_day(self.day).ok()?;
            view.get(i).map(|a| (*a).clone())
        });
        let Some(activity) = selected else {
            return;
        };

        match self.service.remove_exact(&activity) {
            Ok(()) => {
                self.dirty = true;
                self.status = Some(format!("Removed {}", describe_activity(&activity)));
            }
            Err(e) => self.status = Some(e.to_string()),
        }
        self.refresh();
    }

    pub fn save(&mut self) {
        match self.service.save() {
            Ok(()) => {
                self.dirty = false;
                self.status = Some(format!(
                    "Saved to {}",
                    self.service.repository().path().display()
                ));
            }
            Err(e) => self.status = Some(e.to_string()),
        }
    }

    pub fn reload(&mut self) {
        match self.service.reload() {
            Ok(()) => {
                self.dirty = false;
                self.status = Some(format!(
                    "Reloaded '{}' ({} activities)",
                    self.service.schedule().name(),
                    self.service.schedule().len()
                ));
            }
            Err(e) => self.status = Some(e.to_string()),
        }
        self.refresh();
    }

    pub fn enter_add_mode(&mut self) {
        self.input_mode = InputMode::Adding;
        self.input.clear();
        self.cursor_position = 0;
    }

    pub fn enter_rename_mode(&mut self) {
        self.input_mode = InputMode::Renaming;
        self.input = self.service.schedule().name().to_string();
        self.cursor_position = self.input.chars().count();
    }

    pub fn exit_input_mode(&mut self) {
        self.input_mode = InputMode::Normal;
    }

    pub fn input_char(&mut self, c: char) {
        let byte_index = self.byte_index(self.cursor_position);
        self.input.insert(byte_index, c);
        self.cursor_position += 1;
    }

    pub fn delete_char(&mut self) {
        if self.cursor_position > 0 {
            let byte_index = self.byte_index(self.cursor_position - 1);
            self.input.remove(byte_index);
            self.cursor_position -= 1;
        }
    }

    pub fn move_cursor_left(&mut self) {
        if self.cursor_position > 0 {
            self.cursor_position -= 1;
        }
    }

    pub fn move_cursor_right(&mut self) {
        if self.cursor_position < self.input.chars().count() {
            self.cursor_position += 1;
        }
    }

    /// Byte offset of the `chars`-th character of the input.
    pub fn byte_index(&self, chars: usize) -> usize {
        self.input.chars().take(chars).map(|c| c.len_utf8()).sum()
    }

    pub fn submit_command(&mut self) {
        if self.input.trim().is_empty() {
            self.exit_input_mode();
            return;
        }

        match self.input_mode {
            InputMode::Adding => {
                if let Err(e) = self.submit_add() {
                    self.status = Some(conflict_message(e));
                }
            }
            InputMode::Renaming => self.submit_rename(),
            InputMode::Normal => {},
        }

        self.input.clear();
        self.cursor_position = 0;
        self.exit_input_mode();
    }

    fn submit_add(&mut self) -> ScheduleResult<()> {
        let activity = parse_quick_entry(&self.input)?.validate()?;
        let day = activity.day();
        let label = describe_activity(&activity);

        self.service.add_activity(activity)?;
        self.dirty = true;
        self.status = Some(format!("Added {}", label));

        self.day = day;
        self.refresh();
        Ok(())
    }

    fn submit_rename(&mut self) {
        match self.service.rename(&self.input) {
            Ok(()) => {
                self.dirty = true;
                self.status =
                    Some(format!("Schedule renamed to '{}'", self.service.schedule().name()));
            }
            Err(e) => self.status = Some(e.to_string()),
        }
    }

    pub fn title(&self) -> String {
        let marker = if self.dirty { " *" } else { "" };
        format!("{}{} - {}", self.service.schedule().name(), marker, day_name(self.day))
    }
}

fn conflict_message(err: ScheduleError) -> String {
    match err {
        ScheduleError::Conflict { candidate, existing } => format!(
            "Conflict: '{}' overlaps {}",
            candidate.name(),
            describe_activity(&existing)
        ),
        other => other.to_string(),
    }
}
