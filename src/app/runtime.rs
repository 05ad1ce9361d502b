use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::domain::ContactRecord;
use crate::form::FormState;
use crate::presentation::{UiContext, draw};
use crate::submit::{SubmitAction, SubmitAttempt, SubmitController, SubmitEvent};

use super::contact_form::SuccessSink;
use super::options::UiOptions;
use super::status::StatusLine;
use super::terminal::TerminalGuard;

const HELP_TEXT: &str = "Tab/Shift+Tab move • Enter next field • Ctrl+S send • Ctrl+Q quit";

pub(crate) struct App {
    form: FormState,
    controller: SubmitController,
    action: Box<dyn SubmitAction>,
    on_success: Option<SuccessSink>,
    title: Option<String>,
    options: UiOptions,
    status: StatusLine,
    exit_armed: bool,
    should_quit: bool,
    last_accepted: Option<ContactRecord>,
}

impl App {
    pub(crate) fn new(
        form: FormState,
        controller: SubmitController,
        action: Box<dyn SubmitAction>,
        on_success: Option<SuccessSink>,
        title: Option<String>,
        options: UiOptions,
    ) -> Self {
        Self {
            form,
            controller,
            action,
            on_success,
            title,
            options,
            status: StatusLine::new(),
            exit_armed: false,
            should_quit: false,
            last_accepted: None,
        }
    }

    pub(crate) fn run(&mut self) -> Result<Option<ContactRecord>> {
        let mut terminal = TerminalGuard::new()?;
        while !self.should_quit {
            terminal.draw(|frame| self.draw(frame))?;
            if event::poll(self.options.tick_rate)? {
                match event::read()? {
                    Event::Key(key) => self.handle_key(key),
                    Event::Resize(_, _) => {}
                    Event::Mouse(_) => {}
                    Event::FocusGained | Event::FocusLost | Event::Paste(_) => {}
                }
            }
            self.pump_submission();
        }
        Ok(self.last_accepted.take())
    }

    fn draw(&self, frame: &mut ratatui::Frame<'_>) {
        let help = if self.options.show_help {
            Some(HELP_TEXT)
        } else {
            None
        };
        draw(
            frame,
            UiContext {
                title: self.title.as_deref(),
                form: &self.form,
                submission: self.controller.state(),
                status_message: self.status.message(),
                dirty: self.form.is_dirty(),
                help,
            },
        );
    }

    fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }

        if key.modifiers.contains(KeyModifiers::CONTROL) {
            match key.code {
                KeyCode::Char('s') | KeyCode::Char('S') => {
                    self.exit_armed = false;
                    self.on_submit();
                }
                KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Char('c')
                | KeyCode::Char('C') => self.on_exit(),
                _ => {}
            }
            return;
        }

        match key.code {
            KeyCode::Tab | KeyCode::Down => {
                self.form.focus_next();
                self.exit_armed = false;
            }
            KeyCode::BackTab | KeyCode::Up => {
                self.form.focus_prev();
                self.exit_armed = false;
            }
            KeyCode::Enter if !self.form.focused().accepts_newlines() => {
                self.form.focus_next();
                self.exit_armed = false;
            }
            KeyCode::Esc => {
                self.exit_armed = false;
                self.status.ready();
            }
            _ => {
                if self.form.handle_key(&key) {
                    self.exit_armed = false;
                    self.status.editing(self.form.focused().label());
                }
            }
        }
    }

    fn on_submit(&mut self) {
        match self.controller.trigger(self.form.input(), self.action.as_mut()) {
            SubmitAttempt::Started => {
                self.form.clear_errors();
                self.status.sending();
            }
            SubmitAttempt::Rejected(errors) => {
                self.status.issues_remaining(errors.len());
                self.form.set_errors(errors);
            }
            SubmitAttempt::Ignored => {}
        }
    }

    /// Observe the in-flight submission once per loop turn.
    fn pump_submission(&mut self) {
        match self.controller.poll() {
            Some(SubmitEvent::Succeeded(record)) => {
                self.status.sent();
                if let Some(sink) = self.on_success.as_mut() {
                    sink(record.clone());
                }
                self.last_accepted = Some(record);
                if self.options.clear_on_success {
                    self.form.clear();
                }
            }
            Some(SubmitEvent::Failed(reason)) => {
                // Entered values stay put for correction and resubmission.
                self.status.send_failed(&reason);
            }
            None => {}
        }
    }

    fn on_exit(&mut self) {
        let unsent = self.form.is_dirty() || self.controller.is_submitting();
        if self.options.confirm_exit && unsent && !self.exit_armed {
            self.exit_armed = true;
            self.status.pending_exit();
            return;
        }
        self.should_quit = true;
    }
}
