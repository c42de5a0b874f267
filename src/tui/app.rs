use crossterm::event::{KeyCode, KeyEvent};
use ratatui::widgets::ListState;

use crate::config::KeybindingConfig;
use crate::domain::item::parse_quantity;
use crate::domain::ShoppingItem;
use crate::location::lookup::LookupOutcome;
use crate::location::{AddressLookup, LocationSession};
use crate::store::ItemStore;
use crate::tui::event::Action;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Name,
    Quantity,
}

/// Text typed into the add dialog or the inline editor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemForm {
    pub name: String,
    pub quantity: String,
    pub focus: FormField,
}

impl ItemForm {
    pub fn empty() -> Self {
        Self {
            name: String::new(),
            quantity: String::new(),
            focus: FormField::Name,
        }
    }

    pub fn from_item(item: &ShoppingItem) -> Self {
        Self {
            name: item.name.clone(),
            quantity: item.quantity.to_string(),
            focus: FormField::Name,
        }
    }

    fn field_mut(&mut self) -> &mut String {
        match self.focus {
            FormField::Name => &mut self.name,
            FormField::Quantity => &mut self.quantity,
        }
    }

    pub fn push(&mut self, c: char) {
        self.field_mut().push(c);
    }

    pub fn backspace(&mut self) {
        self.field_mut().pop();
    }

    pub fn toggle_focus(&mut self) {
        self.focus = match self.focus {
            FormField::Name => FormField::Quantity,
            FormField::Quantity => FormField::Name,
        };
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    Browse,
    Adding(ItemForm),
    Editing { id: u32, form: ItemForm },
    ConfirmDelete { id: u32, name: String },
}

/// Work the event loop has to do outside of the app state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    Locate,
}

pub struct TuiApp {
    pub store: ItemStore,
    pub location: LocationSession,
    pub mode: Mode,
    pub index: usize,
    pub list_state: ListState,
    pub should_quit: bool,
    pub status_message: Option<String>,
    /// In-flight address lookup; dropping it cancels the request.
    pub lookup: Option<AddressLookup>,
}

impl TuiApp {
    pub fn new(store: ItemStore) -> Self {
        let mut list_state = ListState::default();
        list_state.select(Some(0));

        Self {
            store,
            location: LocationSession::new(),
            mode: Mode::Browse,
            index: 0,
            list_state,
            should_quit: false,
            status_message: None,
            lookup: None,
        }
    }

    pub fn selected_item(&self) -> Option<&ShoppingItem> {
        self.store.items().get(self.index)
    }

    pub fn is_looking_up(&self) -> bool {
        self.lookup.is_some()
    }

    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    pub fn handle_key(&mut self, key: KeyEvent, keybindings: &KeybindingConfig) -> Effect {
        match std::mem::replace(&mut self.mode, Mode::Browse) {
            Mode::Browse => return self.handle_browse(keybindings.get_action(&key)),
            Mode::Adding(form) => self.handle_add_form(key, form),
            Mode::Editing { id, form } => self.handle_edit_form(key, id, form),
            Mode::ConfirmDelete { id, name } => self.handle_confirm_delete(key, id, name),
        }
        Effect::None
    }

    fn handle_browse(&mut self, action: Action) -> Effect {
        match action {
            Action::Quit => self.should_quit = true,
            Action::MoveUp => self.move_up(),
            Action::MoveDown => self.move_down(),
            Action::AddItem => {
                self.status_message = None;
                self.mode = Mode::Adding(ItemForm::empty());
            }
            Action::EditItem => self.begin_edit(),
            Action::DeleteItem => {
                if let Some(item) = self.selected_item() {
                    self.mode = Mode::ConfirmDelete {
                        id: item.id,
                        name: item.name.clone(),
                    };
                }
            }
            Action::Locate => return Effect::Locate,
            Action::None => {}
        }
        Effect::None
    }

    fn handle_add_form(&mut self, key: KeyEvent, mut form: ItemForm) {
        match key.code {
            KeyCode::Esc => self.set_status("Add cancelled"),
            KeyCode::Enter => match self.store.add(&form.name, &form.quantity, None) {
                Some(id) => {
                    self.set_status(format!("Added #{} {}", id, form.name.trim()));
                    self.select(self.store.len().saturating_sub(1));
                }
                None => {
                    self.set_status("Enter a name and a whole-number quantity");
                    self.mode = Mode::Adding(form);
                }
            },
            _ => {
                edit_text(&mut form, key.code);
                self.mode = Mode::Adding(form);
            }
        }
    }

    fn handle_edit_form(&mut self, key: KeyEvent, id: u32, mut form: ItemForm) {
        if key.code == KeyCode::Enter {
            let Some(quantity) = parse_quantity(&form.quantity) else {
                self.set_status("Quantity must be a whole number");
                self.mode = Mode::Editing { id, form };
                return;
            };
            if self.store.commit_edit(id, &form.name, quantity) {
                self.set_status(format!("Saved #{}", id));
                return;
            }
            self.set_status("Name cannot be blank");
        } else {
            edit_text(&mut form, key.code);
        }
        self.mode = Mode::Editing { id, form };
    }

    fn handle_confirm_delete(&mut self, key: KeyEvent, id: u32, name: String) {
        match key.code {
            KeyCode::Char('y') | KeyCode::Char('Y') => {
                self.store.delete(id);
                self.clamp_selection();
                self.set_status(format!("Deleted {}", name));
            }
            _ => self.set_status("Delete cancelled"),
        }
    }

    fn begin_edit(&mut self) {
        let Some(item) = self.selected_item() else {
            return;
        };
        let id = item.id;
        self.store.begin_edit(id);
        // re-read: the store handed back a new list
        if let Some(item) = self.store.get(id) {
            self.mode = Mode::Editing {
                id,
                form: ItemForm::from_item(item),
            };
        }
    }

    /// Folds a finished lookup into the session and the store's ambient address.
    pub fn apply_lookup(&mut self, outcome: LookupOutcome) {
        self.location.update_location(outcome.coordinate);
        let count = match self.location.record(outcome.result).map(|found| found.len()) {
            Ok(count) => count,
            Err(e) => {
                self.set_status(format!("Address lookup failed: {}", e));
                return;
            }
        };

        // An empty answer clears the address too; only failures keep the old one.
        let primary = self.location.primary_address().to_string();
        self.store.set_ambient_address(primary.clone());
        if count == 0 {
            self.set_status(format!("No address found near {}", outcome.coordinate));
        } else {
            self.set_status(format!("Address ({} candidates): {}", count, primary));
        }
    }

    /// Polls the in-flight lookup, if any.
    pub fn on_tick(&mut self) {
        let outcome = self.lookup.as_mut().and_then(AddressLookup::poll_outcome);
        if let Some(outcome) = outcome {
            self.lookup = None;
            self.apply_lookup(outcome);
        }
    }

    pub fn move_up(&mut self) {
        if self.index > 0 {
            self.select(self.index - 1);
        }
    }

    pub fn move_down(&mut self) {
        if self.index + 1 < self.store.len() {
            self.select(self.index + 1);
        }
    }

    fn select(&mut self, index: usize) {
        self.index = index;
        self.list_state.select(Some(index));
    }

    fn clamp_selection(&mut self) {
        let last = self.store.len().saturating_sub(1);
        self.select(self.index.min(last));
    }
}

fn edit_text(form: &mut ItemForm, code: KeyCode) {
    match code {
        KeyCode::Tab | KeyCode::BackTab | KeyCode::Up | KeyCode::Down => form.toggle_focus(),
        KeyCode::Backspace => form.backspace(),
        KeyCode::Char(c) => form.push(c),
        _ => {}
    }
}
