pub mod forms;

use std::time::Duration;

use chrono_tz::Tz;
use crossterm::event::{self, Event, KeyEvent, KeyEventKind};
use engine::{
    CsvStore, EngineError, Ledger, ListQuery, MonthFilter, SortOrder, export_csv, import_csv,
};

use crate::{
    config::{self, AppConfig},
    error::{AppError, Result},
    ui::{
        self,
        keymap::{AppAction, map_key},
    },
};

pub use forms::{EditForm, FormField, PathPrompt, PromptPurpose, TransactionForm};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Tracker,
    Statistics,
}

impl Section {
    pub const ALL: [Section; 2] = [Self::Tracker, Self::Statistics];

    pub fn label(self) -> &'static str {
        match self {
            Self::Tracker => "Tracker",
            Self::Statistics => "Statistics",
        }
    }

    fn toggle(self) -> Self {
        match self {
            Self::Tracker => Self::Statistics,
            Self::Statistics => Self::Tracker,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrackerMode {
    Browse,
    Form,
    Search,
    Edit,
    /// Waiting for y/n on the given ledger row.
    ConfirmDelete(usize),
    Prompt,
}

#[derive(Debug)]
pub struct TrackerState {
    pub mode: TrackerMode,
    pub form: TransactionForm,
    pub search: String,
    pub order: SortOrder,
    /// Last query applied with Enter, reapplied after every change.
    pub applied: Option<ListQuery>,
    /// Ledger positions in display order.
    pub rows: Vec<usize>,
    /// Position inside `rows`.
    pub selected: Option<usize>,
    pub edit: Option<EditForm>,
    pub prompt: Option<PathPrompt>,
}

impl TrackerState {
    fn new(ledger: &Ledger) -> Self {
        Self {
            mode: TrackerMode::Browse,
            form: TransactionForm::default(),
            search: String::new(),
            order: SortOrder::default(),
            applied: None,
            rows: ledger.all_rows(),
            selected: None,
            edit: None,
            prompt: None,
        }
    }

    /// Ledger row behind the highlighted table line.
    pub fn selected_row(&self) -> Option<usize> {
        self.selected.and_then(|pos| self.rows.get(pos).copied())
    }

    fn select_next(&mut self) {
        if self.rows.is_empty() {
            return;
        }
        self.selected = Some(match self.selected {
            None => 0,
            Some(pos) => (pos + 1).min(self.rows.len() - 1),
        });
    }

    fn select_prev(&mut self) {
        if self.rows.is_empty() {
            return;
        }
        self.selected = Some(self.selected.map_or(0, |pos| pos.saturating_sub(1)));
    }
}

#[derive(Debug, Default)]
pub struct StatsState {
    pub month: MonthFilter,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertLevel {
    Info,
    Warning,
    Error,
}

/// Modal message; blocks every other key until dismissed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alert {
    pub level: AlertLevel,
    pub title: String,
    pub message: String,
}

impl Alert {
    fn info(title: &str, message: impl Into<String>) -> Self {
        Self {
            level: AlertLevel::Info,
            title: title.to_string(),
            message: message.into(),
        }
    }

    fn warning(title: &str, message: impl Into<String>) -> Self {
        Self {
            level: AlertLevel::Warning,
            title: title.to_string(),
            message: message.into(),
        }
    }

    fn from_engine(err: &EngineError) -> Self {
        let level = match err {
            EngineError::MissingField(_) | EngineError::RowNotFound(_) => AlertLevel::Warning,
            _ => AlertLevel::Error,
        };
        Self {
            level,
            title: err.title().to_string(),
            message: err.to_string(),
        }
    }
}

#[derive(Debug)]
pub struct AppState {
    pub section: Section,
    pub ledger: Ledger,
    pub categories: Vec<String>,
    pub tracker: TrackerState,
    pub stats: StatsState,
    pub alert: Option<Alert>,
    pub help: bool,
    pub data_file: String,
}

impl AppState {
    pub fn currency_symbol(&self) -> &str {
        self.ledger.currency_symbol()
    }
}

pub struct App {
    store: CsvStore,
    timezone: Option<Tz>,
    pub state: AppState,
    should_quit: bool,
}

impl App {
    pub fn new(config: AppConfig) -> Result<Self> {
        let timezone = config.timezone()?;
        let store = CsvStore::new(&config.data_file);
        let transactions = store.load(&config.currency_symbol)?;

        let ledger = Ledger::builder()
            .transactions(transactions)
            .currency_symbol(config.currency_symbol.as_str())
            .build();
        let state = AppState {
            section: Section::Tracker,
            tracker: TrackerState::new(&ledger),
            ledger,
            categories: config.categories,
            stats: StatsState::default(),
            alert: None,
            help: false,
            data_file: config.data_file,
        };

        Ok(Self {
            store,
            timezone,
            state,
            should_quit: false,
        })
    }

    pub fn run(&mut self) -> Result<()> {
        let mut terminal = ui::setup_terminal()?;
        let result = self.event_loop(&mut terminal);
        ui::restore_terminal(&mut terminal)?;
        result
    }

    fn event_loop(&mut self, terminal: &mut ui::Terminal) -> Result<()> {
        let tick_rate = Duration::from_millis(200);

        while !self.should_quit {
            terminal
                .draw(|frame| ui::render(frame, &self.state))
                .map_err(|err| AppError::Terminal(err.to_string()))?;

            if event::poll(tick_rate)? {
                match event::read()? {
                    Event::Key(key) if key.kind == KeyEventKind::Press => self.handle_key(key),
                    _ => {}
                }
            }
        }

        Ok(())
    }

    pub(crate) fn handle_key(&mut self, key: KeyEvent) {
        let action = map_key(key);
        if action == AppAction::Quit {
            self.should_quit = true;
            return;
        }

        if self.state.alert.is_some() {
            if matches!(action, AppAction::Submit | AppAction::Cancel) {
                self.state.alert = None;
            }
            return;
        }

        if self.state.help {
            if matches!(
                action,
                AppAction::Submit | AppAction::Cancel | AppAction::Input('?')
            ) {
                self.state.help = false;
            }
            return;
        }

        match self.state.tracker.mode {
            TrackerMode::Browse => self.handle_browse(action),
            TrackerMode::Form => self.handle_form(action),
            TrackerMode::Search => self.handle_search(action),
            TrackerMode::Edit => self.handle_edit(action),
            TrackerMode::ConfirmDelete(index) => self.handle_confirm_delete(action, index),
            TrackerMode::Prompt => self.handle_prompt(action),
        }
    }

    fn handle_browse(&mut self, action: AppAction) {
        match action {
            AppAction::NextField | AppAction::PrevField => {
                self.state.section = self.state.section.toggle();
            }
            AppAction::Input('q') => self.should_quit = true,
            AppAction::Input('?') => self.state.help = true,
            AppAction::Input('1') => self.state.section = Section::Tracker,
            AppAction::Input('2') => self.state.section = Section::Statistics,
            _ => match self.state.section {
                Section::Tracker => self.handle_tracker_browse(action),
                Section::Statistics => self.handle_stats(action),
            },
        }
    }

    fn handle_stats(&mut self, action: AppAction) {
        let stats = &mut self.state.stats;
        match action {
            AppAction::Right | AppAction::Down | AppAction::Input('l') => {
                stats.month = stats.month.next();
            }
            AppAction::Left | AppAction::Up | AppAction::Input('h') => {
                stats.month = stats.month.prev();
            }
            _ => {}
        }
    }

    fn handle_tracker_browse(&mut self, action: AppAction) {
        let tracker = &mut self.state.tracker;
        match action {
            AppAction::Up | AppAction::Input('k') => tracker.select_prev(),
            AppAction::Down | AppAction::Input('j') => tracker.select_next(),
            AppAction::Cancel => tracker.selected = None,
            AppAction::Input('a') => tracker.mode = TrackerMode::Form,
            AppAction::Input('/') => tracker.mode = TrackerMode::Search,
            AppAction::Input('o') => {
                tracker.order = tracker.order.toggle();
                self.apply_query();
            }
            AppAction::Input('c') => self.clear_query(),
            AppAction::Input('e') => self.open_edit(),
            AppAction::Input('d') => self.confirm_delete(),
            AppAction::Input('x') => self.open_prompt(PromptPurpose::Export),
            AppAction::Input('i') => self.open_prompt(PromptPurpose::Import),
            _ => {}
        }
    }

    fn handle_form(&mut self, action: AppAction) {
        let form = &mut self.state.tracker.form;
        match action {
            AppAction::Cancel => self.state.tracker.mode = TrackerMode::Browse,
            AppAction::NextField => form.focus_next(),
            AppAction::PrevField => form.focus_prev(),
            AppAction::Left | AppAction::Right if form.focus == FormField::Kind => {
                form.cycle_kind();
            }
            AppAction::Up if form.focus == FormField::Category => {
                form.cycle_preset(&self.state.categories, false);
            }
            AppAction::Down if form.focus == FormField::Category => {
                form.cycle_preset(&self.state.categories, true);
            }
            AppAction::Up => form.focus_prev(),
            AppAction::Down => form.focus_next(),
            AppAction::Backspace => form.backspace(),
            AppAction::Input(ch) => form.push(ch),
            AppAction::Submit => self.submit_add(),
            _ => {}
        }
    }

    fn handle_edit(&mut self, action: AppAction) {
        let Some(edit) = self.state.tracker.edit.as_mut() else {
            self.state.tracker.mode = TrackerMode::Browse;
            return;
        };
        let form = &mut edit.form;
        match action {
            AppAction::Cancel => {
                self.state.tracker.edit = None;
                self.state.tracker.mode = TrackerMode::Browse;
            }
            AppAction::NextField | AppAction::Down => form.focus_next(),
            AppAction::PrevField | AppAction::Up => form.focus_prev(),
            AppAction::Left | AppAction::Right if form.focus == FormField::Kind => {
                form.cycle_kind();
            }
            AppAction::Backspace => form.backspace(),
            AppAction::Input(ch) => form.push(ch),
            AppAction::Submit => self.submit_edit(),
            _ => {}
        }
    }

    fn handle_search(&mut self, action: AppAction) {
        let tracker = &mut self.state.tracker;
        match action {
            AppAction::Cancel => tracker.mode = TrackerMode::Browse,
            AppAction::Backspace => {
                tracker.search.pop();
            }
            AppAction::Input(ch) => tracker.search.push(ch),
            AppAction::Submit => {
                tracker.mode = TrackerMode::Browse;
                self.apply_query();
            }
            _ => {}
        }
    }

    fn handle_confirm_delete(&mut self, action: AppAction, index: usize) {
        match action {
            AppAction::Submit | AppAction::Input('y' | 'Y') => {
                self.state.tracker.mode = TrackerMode::Browse;
                self.delete(index);
            }
            AppAction::Cancel | AppAction::Input('n' | 'N') => {
                self.state.tracker.mode = TrackerMode::Browse;
            }
            _ => {}
        }
    }

    fn handle_prompt(&mut self, action: AppAction) {
        let Some(prompt) = self.state.tracker.prompt.as_mut() else {
            self.state.tracker.mode = TrackerMode::Browse;
            return;
        };
        match action {
            AppAction::Cancel => self.close_prompt(),
            AppAction::Backspace => {
                prompt.input.pop();
            }
            AppAction::Input(ch) => prompt.input.push(ch),
            AppAction::Submit => {
                let purpose = prompt.purpose;
                let path = prompt.input.trim().to_string();
                self.close_prompt();
                if path.is_empty() {
                    return;
                }
                match purpose {
                    PromptPurpose::Export => self.export(&path),
                    PromptPurpose::Import => self.import(&path),
                }
            }
            _ => {}
        }
    }

    fn submit_add(&mut self) {
        let draft = self.state.tracker.form.draft();
        let today = config::today(self.timezone);
        match self.state.ledger.add(&draft, today) {
            Ok(_) => {
                self.state.tracker.form.clear();
                self.state.tracker.mode = TrackerMode::Browse;
                self.after_change();
                if self.persist() {
                    self.state.alert = Some(Alert::info("Success", "Entry added successfully!"));
                }
            }
            Err(err) => self.state.alert = Some(Alert::from_engine(&err)),
        }
    }

    fn open_edit(&mut self) {
        let tracker = &mut self.state.tracker;
        let Some(index) = tracker.selected_row() else {
            self.state.alert = Some(Alert::warning("No selection", "Select a row to edit!"));
            return;
        };
        let Some(tx) = self.state.ledger.get(index) else {
            return;
        };
        tracker.edit = Some(EditForm {
            index,
            form: TransactionForm::from_transaction(tx),
        });
        tracker.mode = TrackerMode::Edit;
    }

    fn submit_edit(&mut self) {
        let Some(edit) = self.state.tracker.edit.as_ref() else {
            return;
        };
        let index = edit.index;
        let draft = edit.form.draft();
        match self.state.ledger.edit(index, &draft) {
            Ok(()) => {
                self.state.tracker.edit = None;
                self.state.tracker.mode = TrackerMode::Browse;
                self.after_change();
                if self.persist() {
                    self.state.alert =
                        Some(Alert::info("Updated", "Entry updated successfully!"));
                }
            }
            Err(err) => self.state.alert = Some(Alert::from_engine(&err)),
        }
    }

    fn confirm_delete(&mut self) {
        match self.state.tracker.selected_row() {
            Some(index) => self.state.tracker.mode = TrackerMode::ConfirmDelete(index),
            None => {
                self.state.alert = Some(Alert::warning(
                    "No selection",
                    "Please select a row to delete",
                ));
            }
        }
    }

    fn delete(&mut self, index: usize) {
        match self.state.ledger.delete(index) {
            Ok(_) => {
                self.state.tracker.selected = None;
                self.after_change();
                if self.persist() {
                    self.state.alert = Some(Alert::info("Deleted", "Entry deleted successfully"));
                }
            }
            Err(err) => self.state.alert = Some(Alert::from_engine(&err)),
        }
    }

    fn open_prompt(&mut self, purpose: PromptPurpose) {
        self.state.tracker.prompt = Some(PathPrompt {
            purpose,
            input: String::new(),
        });
        self.state.tracker.mode = TrackerMode::Prompt;
    }

    fn close_prompt(&mut self) {
        self.state.tracker.prompt = None;
        self.state.tracker.mode = TrackerMode::Browse;
    }

    fn export(&mut self, path: &str) {
        match export_csv(&self.state.ledger, path) {
            Ok(written) => {
                self.state.alert = Some(Alert::info(
                    "Export Complete",
                    format!("CSV has been exported to:\n{}", written.display()),
                ));
            }
            Err(err) => {
                tracing::error!(error = %err, "export to {path} failed");
                self.state.alert = Some(Alert::from_engine(&err));
            }
        }
    }

    fn import(&mut self, path: &str) {
        let report = match import_csv(path, self.state.currency_symbol()) {
            Ok(report) => report,
            Err(err @ EngineError::MissingColumn(_)) => {
                self.state.alert = Some(Alert::from_engine(&err));
                return;
            }
            Err(err) => {
                tracing::error!(error = %err, "import from {path} failed");
                self.state.alert = Some(Alert {
                    level: AlertLevel::Error,
                    title: "Error".to_string(),
                    message: format!("Failed to import CSV:\n{err}"),
                });
                return;
            }
        };

        let rejected = report.rejected;
        self.state.ledger.extend(report.transactions);
        self.after_change();
        if self.persist() {
            let message = if rejected == 0 {
                "CSV imported successfully!".to_string()
            } else {
                format!("CSV imported successfully!\n{rejected} invalid rows were skipped.")
            };
            self.state.alert = Some(Alert::info("Success", message));
        }
    }

    fn apply_query(&mut self) {
        let tracker = &mut self.state.tracker;
        tracker.applied = Some(ListQuery::new(tracker.search.trim(), tracker.order));
        tracker.selected = None;
        self.refresh_rows();
    }

    fn clear_query(&mut self) {
        let tracker = &mut self.state.tracker;
        tracker.search.clear();
        tracker.order = SortOrder::default();
        tracker.applied = None;
        tracker.selected = None;
        self.refresh_rows();
    }

    fn refresh_rows(&mut self) {
        let tracker = &mut self.state.tracker;
        tracker.rows = match &tracker.applied {
            Some(query) => self.state.ledger.query(query),
            None => self.state.ledger.all_rows(),
        };
    }

    /// Rebuilds the table after the ledger changed, keeping the selection in
    /// range.
    fn after_change(&mut self) {
        self.refresh_rows();
        let tracker = &mut self.state.tracker;
        if let Some(pos) = tracker.selected
            && pos >= tracker.rows.len()
        {
            tracker.selected = tracker.rows.len().checked_sub(1);
        }
    }

    /// Writes the ledger back to its file. Returns `false` (and raises an
    /// alert) when the save failed.
    fn persist(&mut self) -> bool {
        match self.store.save(&self.state.ledger) {
            Ok(()) => true,
            Err(err) => {
                tracing::error!(error = %err, "failed to save {}", self.store.path().display());
                self.state.alert = Some(Alert {
                    level: AlertLevel::Error,
                    title: "Error".to_string(),
                    message: format!("Failed to save transactions:\n{err}"),
                });
                false
            }
        }
    }
}
