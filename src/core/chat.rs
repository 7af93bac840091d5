//! Session bookkeeping around the dispatcher: creating sessions, the role and
//! clear commands, settings changes and persistence.

use crate::commands::{parse_invocation, CommandId};
use crate::core::dispatch::Dispatcher;
use crate::core::message::{Message, MessagePart, Role};
use crate::core::session::ChatSession;
use crate::core::settings::Settings;
use crate::core::store::{Store, StoreError};
use crate::i18n::{Language, LocaleKey, Translator};
use chrono::Utc;
use tracing::{debug, warn};

/// How the controller will treat a prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptAction<'a> {
    /// Blank input.
    Ignore,
    /// The clear command: close the active session.
    NewSession,
    /// The role command with a non-empty persona.
    SetRole(&'a str),
    Dispatch,
}

impl<'a> PromptAction<'a> {
    pub fn classify(prompt: &'a str, t: &Translator) -> Self {
        let prompt = prompt.trim();
        if prompt.is_empty() {
            return PromptAction::Ignore;
        }
        if prompt.eq_ignore_ascii_case("/clear") || prompt == CommandId::Clear.localized_name(t) {
            return PromptAction::NewSession;
        }
        if let Some(invocation) = parse_invocation(prompt) {
            let word = invocation.word.to_lowercase();
            let is_role = word == CommandId::Role.canonical()
                || word == CommandId::Role.localized_word(t).to_lowercase();
            if is_role && !invocation.args.is_empty() {
                return PromptAction::SetRole(invocation.args);
            }
        }
        PromptAction::Dispatch
    }
}

/// Result of [`ChatController::submit`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    Ignored,
    /// The active session was closed; the next prompt starts a new one.
    NewSession,
    /// The model message appended to the active session.
    Reply(Message),
}

pub struct ChatController {
    store: Store,
    dispatcher: Dispatcher,
    settings: Settings,
    language_override: Option<Language>,
    /// Newest first.
    sessions: Vec<ChatSession>,
    current: Option<String>,
}

impl ChatController {
    pub fn new(store: Store, dispatcher: Dispatcher, settings: Settings) -> Self {
        Self {
            store,
            dispatcher,
            settings,
            language_override: None,
            sessions: Vec::new(),
            current: None,
        }
    }

    /// Loads settings and, when history is enabled, stored sessions. The most
    /// recent session becomes active.
    pub fn load(store: Store, dispatcher: Dispatcher) -> Result<Self, StoreError> {
        let settings = store.load_settings()?;
        let mut controller = Self::new(store, dispatcher, settings);
        controller.reload_history()?;
        Ok(controller)
    }

    /// Uses `language` for this controller without changing stored settings.
    pub fn with_language(mut self, language: Language) -> Self {
        self.language_override = Some(language);
        self
    }

    pub fn translator(&self) -> Translator {
        Translator::new(self.language_override.unwrap_or(self.settings.language))
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn sessions(&self) -> &[ChatSession] {
        &self.sessions
    }

    pub fn current_session(&self) -> Option<&ChatSession> {
        let id = self.current.as_deref()?;
        self.sessions.iter().find(|session| session.id == id)
    }

    pub fn new_chat(&mut self) {
        self.current = None;
    }

    /// Makes the session with `id` active. Returns `false` for unknown ids.
    pub fn select_chat(&mut self, id: &str) -> bool {
        if self.sessions.iter().any(|session| session.id == id) {
            self.current = Some(id.to_string());
            true
        } else {
            false
        }
    }

    pub fn clear_history(&mut self) -> Result<(), StoreError> {
        self.store.clear_history()?;
        self.sessions.clear();
        self.current = None;
        Ok(())
    }

    /// Persists new settings. Disabling history drops sessions from memory
    /// but leaves stored history alone; enabling it reloads stored history.
    /// A language change replaces any per-run language override.
    pub fn update_settings(&mut self, settings: Settings) -> Result<(), StoreError> {
        let was_saving = self.settings.save_history;
        self.store.save_settings(&settings)?;
        if settings.language != self.settings.language {
            self.language_override = None;
        }
        self.settings = settings;

        match (was_saving, settings.save_history) {
            (true, false) => {
                self.sessions.clear();
                self.current = None;
            }
            (false, true) => self.reload_history()?,
            _ => {}
        }
        Ok(())
    }

    pub async fn submit(&mut self, prompt: &str) -> SubmitOutcome {
        let t = self.translator();
        let action = PromptAction::classify(prompt, &t);
        match action {
            PromptAction::Ignore => return SubmitOutcome::Ignored,
            PromptAction::NewSession => {
                self.new_chat();
                return SubmitOutcome::NewSession;
            }
            PromptAction::SetRole(_) | PromptAction::Dispatch => {}
        }

        let index = self.active_index(prompt, &t);

        if let PromptAction::SetRole(persona) = action {
            debug!(persona, "updating system instruction");
            let session = &mut self.sessions[index];
            session.system_instruction = persona.to_string();
            let confirmation = t.format(LocaleKey::RoleSetConfirmation, &[persona]);
            let reply = session
                .push(Role::Model, vec![MessagePart::text(confirmation)], Utc::now())
                .clone();
            self.persist();
            return SubmitOutcome::Reply(reply);
        }

        self.sessions[index].push(Role::User, vec![MessagePart::text(prompt)], Utc::now());
        self.persist();

        let system_instruction = self.sessions[index].system_instruction.clone();
        let parts = self
            .dispatcher
            .dispatch(prompt, &system_instruction, &t)
            .await;

        let reply = self.sessions[index]
            .push(Role::Model, parts, Utc::now())
            .clone();
        self.persist();
        SubmitOutcome::Reply(reply)
    }

    /// Index of the active session, starting a new one at the front when
    /// none is active.
    fn active_index(&mut self, prompt: &str, t: &Translator) -> usize {
        if let Some(id) = self.current.as_deref() {
            if let Some(index) = self.sessions.iter().position(|session| session.id == id) {
                return index;
            }
        }

        let mut session = ChatSession::start(
            prompt,
            t.t(LocaleKey::DefaultSystemInstruction),
            Utc::now(),
        );
        let base = session.id.clone();
        let mut counter = 1;
        while self.sessions.iter().any(|existing| existing.id == session.id) {
            session.id = format!("{base}-{counter}");
            counter += 1;
        }
        self.current = Some(session.id.clone());
        self.sessions.insert(0, session);
        0
    }

    fn reload_history(&mut self) -> Result<(), StoreError> {
        if !self.settings.save_history {
            return Ok(());
        }
        self.sessions = self.store.load_history()?;
        self.current = self.sessions.first().map(|session| session.id.clone());
        Ok(())
    }

    fn persist(&self) {
        if !self.settings.save_history {
            return;
        }
        if let Err(err) = self.store.save_history(&self.sessions) {
            warn!(error = %err, "failed to save chat history");
        }
    }
}
