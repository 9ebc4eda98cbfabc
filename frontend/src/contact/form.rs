//! Contact form draft and its `Editing -> Submitting -> Editing` cycle.

use std::rc::Rc;

use log::info;
use thiserror::Error;
use yew::functional::Reducible;

pub const SUCCESS_MESSAGE: &str = "Message sent successfully! I'll get back to you soon.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Subject,
    Message,
}

impl Field {
    pub const ALL: [Field; 4] = [Field::Name, Field::Email, Field::Subject, Field::Message];

    /// Matches the `name` attribute of the form control.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|field| field.name() == name)
    }

    pub fn name(self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Subject => "subject",
            Field::Message => "message",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Field::Name => "Name",
            Field::Email => "Email",
            Field::Subject => "Subject",
            Field::Message => "Message",
        }
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FormError {
    #[error("{} is required", .0.label())]
    MissingField(Field),

    #[error("a message is already being sent")]
    AlreadySubmitting,

    #[error("no message is being sent")]
    NotSubmitting,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactDraft {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactDraft {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Subject => &self.subject,
            Field::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: Field, value: String) {
        match field {
            Field::Name => self.name = value,
            Field::Email => self.email = value,
            Field::Subject => self.subject = value,
            Field::Message => self.message = value,
        }
    }

    /// First required field left empty, in form order.
    pub fn missing_field(&self) -> Option<Field> {
        Field::ALL
            .into_iter()
            .find(|field| self.get(*field).trim().is_empty())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormPhase {
    #[default]
    Editing,
    Submitting,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    draft: ContactDraft,
    phase: FormPhase,
}

impl ContactForm {
    pub fn draft(&self) -> &ContactDraft {
        &self.draft
    }

    pub fn phase(&self) -> FormPhase {
        self.phase
    }

    /// The submit control is disabled while this holds.
    pub fn is_submitting(&self) -> bool {
        self.phase == FormPhase::Submitting
    }

    pub fn edit(&mut self, field: Field, value: String) {
        self.draft.set(field, value);
    }

    pub fn begin_submit(&mut self) -> Result<(), FormError> {
        if self.is_submitting() {
            return Err(FormError::AlreadySubmitting);
        }
        if let Some(field) = self.draft.missing_field() {
            return Err(FormError::MissingField(field));
        }
        self.phase = FormPhase::Submitting;
        Ok(())
    }

    /// Resolves a submission: clears the draft and returns to editing.
    pub fn complete_submit(&mut self) -> Result<(), FormError> {
        if !self.is_submitting() {
            return Err(FormError::NotSubmitting);
        }
        self.draft = ContactDraft::default();
        self.phase = FormPhase::Editing;
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    Sent,
    Rejected(FormError),
}

impl Notice {
    pub fn text(&self) -> String {
        match self {
            Notice::Sent => SUCCESS_MESSAGE.to_string(),
            Notice::Rejected(err) => err.to_string(),
        }
    }
}

/// Form plus the last user-facing notice, driven through `use_reducer`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactFormState {
    pub form: ContactForm,
    pub notice: Option<Notice>,
}

pub enum ContactAction {
    Edit(Field, String),
    Submit,
    Resolve,
    Dismiss,
}

impl Reducible for ContactFormState {
    type Action = ContactAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            ContactAction::Edit(field, value) => next.form.edit(field, value),
            ContactAction::Submit => match next.form.begin_submit() {
                Ok(()) => {
                    info!("sending contact message");
                    next.notice = None;
                }
                Err(err) => next.notice = Some(Notice::Rejected(err)),
            },
            ContactAction::Resolve => {
                if next.form.complete_submit().is_ok() {
                    info!("contact message sent");
                    next.notice = Some(Notice::Sent);
                }
            }
            ContactAction::Dismiss => next.notice = None,
        }
        Rc::new(next)
    }
}
