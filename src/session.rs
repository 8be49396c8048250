//! Session Loop
//!
//! Pulls events from the front-end and hands them to the controller, one at
//! a time, until a close request is accepted or input runs out.

use std::io;

use anyhow::Result;

use crate::config::Config;
use crate::controller::{
    CloseDecision, DocumentController, HandleClose, HandleFileMenu, HandleTextChange, Outcome,
};
use crate::core::FileSystem;
use crate::ui::{Event, EventSource, Frontend, LineFrontend, MenuAction};

/// Whether the loop keeps going after an event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

/// Drives one controller from one event source
pub struct Session<U, F> {
    controller: DocumentController<U, F>,
}

impl<U: Frontend + EventSource, F: FileSystem> Session<U, F> {
    pub fn new(controller: DocumentController<U, F>) -> Self {
        Self { controller }
    }

    pub fn controller(&self) -> &DocumentController<U, F> {
        &self.controller
    }

    pub fn into_controller(self) -> DocumentController<U, F> {
        self.controller
    }

    /// Handle one event to completion
    pub fn dispatch(&mut self, event: Event) -> Flow {
        log::trace!("Dispatching {:?}", event);
        match event {
            Event::MenuOpened => {
                self.controller.handle_menu_opened();
                self.controller.frontend_mut().show_menu();
            }
            Event::Menu(action) => {
                self.menu_action(action);
            }
            Event::TextChanged => {
                self.controller.handle_text_changed();
            }
            Event::CloseRequested => {
                if self.controller.handle_close_request() == CloseDecision::Close {
                    return Flow::Exit;
                }
                log::debug!("Close vetoed");
            }
            Event::InputClosed => {
                if self.controller.document().is_modified() {
                    log::warn!("Input closed; unsaved changes are discarded");
                }
                return Flow::Exit;
            }
        }
        Flow::Continue
    }

    fn menu_action(&mut self, action: MenuAction) -> Outcome {
        // Picking an item opens the menu first
        let menu = self.controller.handle_menu_opened();
        if !action.is_enabled(menu) {
            self.controller.frontend_mut().action_refused(action);
            return Outcome::Ignored;
        }

        let outcome = match action {
            MenuAction::New => self.controller.handle_new(),
            MenuAction::Open => self.controller.handle_open(),
            MenuAction::Save => self.controller.handle_save(),
            MenuAction::SaveAs => self.controller.handle_save_as(),
        };
        log::debug!("{} finished: {:?}", action.label(), outcome);
        outcome
    }

    /// Run until the session exits
    pub fn run_until_closed(&mut self) -> Result<()> {
        loop {
            let event = self.controller.frontend_mut().next_event()?;
            if self.dispatch(event) == Flow::Exit {
                return Ok(());
            }
        }
    }
}

/// Run the editor on the process terminal
pub fn run(config: Config) -> Result<()> {
    let stdin = io::stdin();
    let frontend = LineFrontend::new(stdin.lock(), io::stdout());
    let controller = DocumentController::new(&config, frontend);

    log::info!("Editor started in {}", config.working_dir.display());
    Session::new(controller).run_until_closed()
}
