use engine::{Transaction, TransactionDraft, TransactionKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Kind,
    Category,
    Amount,
    Notes,
}

impl FormField {
    pub const ALL: [FormField; 4] = [Self::Kind, Self::Category, Self::Amount, Self::Notes];

    pub fn label(self) -> &'static str {
        match self {
            Self::Kind => "Type",
            Self::Category => "Category",
            Self::Amount => "Amount",
            Self::Notes => "Notes",
        }
    }

    pub fn next(self) -> Self {
        match self {
            Self::Kind => Self::Category,
            Self::Category => Self::Amount,
            Self::Amount => Self::Notes,
            Self::Notes => Self::Kind,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            Self::Kind => Self::Notes,
            Self::Category => Self::Kind,
            Self::Amount => Self::Category,
            Self::Notes => Self::Amount,
        }
    }
}

/// Input state shared by the add form and the edit popup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransactionForm {
    /// `None` until a type is picked.
    pub kind: Option<TransactionKind>,
    pub category: String,
    pub amount: String,
    pub notes: String,
    pub focus: FormField,
    preset: Option<usize>,
}

impl Default for TransactionForm {
    fn default() -> Self {
        Self {
            kind: None,
            category: String::new(),
            amount: String::new(),
            notes: String::new(),
            focus: FormField::Kind,
            preset: None,
        }
    }
}

impl TransactionForm {
    pub fn from_transaction(tx: &Transaction) -> Self {
        let draft = TransactionDraft::from_transaction(tx);
        Self {
            kind: Some(tx.kind),
            category: draft.category,
            amount: draft.amount,
            notes: draft.notes,
            focus: FormField::Amount,
            preset: None,
        }
    }

    pub fn draft(&self) -> TransactionDraft {
        TransactionDraft::new(
            self.kind.map(TransactionKind::as_str).unwrap_or_default(),
            self.category.as_str(),
            self.amount.as_str(),
            self.notes.as_str(),
        )
    }

    pub fn value(&self, field: FormField) -> String {
        match field {
            FormField::Kind => self
                .kind
                .map(|kind| kind.as_str().to_string())
                .unwrap_or_default(),
            FormField::Category => self.category.clone(),
            FormField::Amount => self.amount.clone(),
            FormField::Notes => self.notes.clone(),
        }
    }

    pub fn focus_next(&mut self) {
        self.focus = self.focus.next();
    }

    pub fn focus_prev(&mut self) {
        self.focus = self.focus.prev();
    }

    /// Flips between income and expense; the first press picks income.
    pub fn cycle_kind(&mut self) {
        self.kind = Some(match self.kind {
            Some(TransactionKind::Income) => TransactionKind::Expense,
            Some(TransactionKind::Expense) | None => TransactionKind::Income,
        });
    }

    /// Replaces the category with the next (or previous) preset.
    pub fn cycle_preset(&mut self, presets: &[String], forward: bool) {
        if presets.is_empty() {
            return;
        }
        let last = presets.len() - 1;
        let index = match (self.preset, forward) {
            (None, true) => 0,
            (None, false) => last,
            (Some(i), true) => if i >= last { 0 } else { i + 1 },
            (Some(i), false) => if i == 0 { last } else { i - 1 },
        };
        self.preset = Some(index);
        self.category = presets[index].clone();
    }

    pub fn push(&mut self, ch: char) {
        match self.focus {
            FormField::Kind => match ch {
                'i' | 'I' => self.kind = Some(TransactionKind::Income),
                'e' | 'E' => self.kind = Some(TransactionKind::Expense),
                _ => {}
            },
            FormField::Category => {
                self.preset = None;
                self.category.push(ch);
            }
            FormField::Amount => self.amount.push(ch),
            FormField::Notes => self.notes.push(ch),
        }
    }

    pub fn backspace(&mut self) {
        match self.focus {
            FormField::Kind => self.kind = None,
            FormField::Category => {
                self.preset = None;
                self.category.pop();
            }
            FormField::Amount => {
                self.amount.pop();
            }
            FormField::Notes => {
                self.notes.pop();
            }
        }
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// Edit popup bound to a ledger row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditForm {
    pub index: usize,
    pub form: TransactionForm,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptPurpose {
    Export,
    Import,
}

impl PromptPurpose {
    pub fn title(self) -> &'static str {
        match self {
            Self::Export => "Export CSV",
            Self::Import => "Import CSV",
        }
    }
}

/// Single line path input replacing the save/open file dialogs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathPrompt {
    pub purpose: PromptPurpose,
    pub input: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn presets() -> Vec<String> {
        vec!["Food".to_string(), "Bills".to_string(), "Health".to_string()]
    }

    #[test]
    fn presets_wrap_in_both_directions() {
        let mut form = TransactionForm::default();
        form.cycle_preset(&presets(), false);
        assert_eq!(form.category, "Health");
        form.cycle_preset(&presets(), true);
        assert_eq!(form.category, "Food");
        form.cycle_preset(&presets(), true);
        assert_eq!(form.category, "Bills");
    }

    #[test]
    fn typing_in_category_leaves_preset_cycle() {
        let mut form = TransactionForm {
            focus: FormField::Category,
            ..TransactionForm::default()
        };
        form.cycle_preset(&presets(), true);
        form.push('s');
        assert_eq!(form.category, "Foods");
        form.cycle_preset(&presets(), true);
        assert_eq!(form.category, "Food");
    }

    #[test]
    fn draft_leaves_type_empty_until_chosen() {
        let mut form = TransactionForm::default();
        assert_eq!(form.draft().kind, "");
        form.cycle_kind();
        assert_eq!(form.draft().kind, "Income");
        form.cycle_kind();
        assert_eq!(form.draft().kind, "Expense");
    }
}
