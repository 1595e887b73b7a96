// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use crate::{MenuSelection, ModalKind, UserRole};

/// Which screen owns the display: the landing page, or exactly one modal.
/// Transitions are explicit state replacements through `dispatch`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppMode {
    Landing,
    Modal(ModalKind),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppState {
    pub mode: AppMode,
    pub menu_visible: bool,
    pub role: Option<UserRole>,
    pub status_line: Option<String>,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            mode: AppMode::Landing,
            menu_visible: false,
            role: None,
            status_line: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppCommand {
    OpenModal(ModalKind),
    CloseModal,
    OpenMenu,
    CloseMenu,
    MenuSelect(MenuSelection),
    SetRole(Option<UserRole>),
    CompleteSignIn,
    SetStatus(String),
    ClearStatus,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppEvent {
    ModeChanged(AppMode),
    MenuVisibilityChanged(bool),
    RoleChanged(Option<UserRole>),
    StatusUpdated(String),
    StatusCleared,
}

impl AppState {
    pub fn dispatch(&mut self, command: AppCommand) -> Vec<AppEvent> {
        match command {
            AppCommand::OpenModal(kind) => {
                self.mode = AppMode::Modal(kind);
                vec![AppEvent::ModeChanged(self.mode)]
            }
            AppCommand::CloseModal => {
                self.mode = AppMode::Landing;
                vec![AppEvent::ModeChanged(self.mode)]
            }
            AppCommand::OpenMenu => {
                self.menu_visible = true;
                vec![AppEvent::MenuVisibilityChanged(true)]
            }
            AppCommand::CloseMenu => {
                self.menu_visible = false;
                vec![AppEvent::MenuVisibilityChanged(false)]
            }
            AppCommand::MenuSelect(selection) => {
                let mut events = Vec::new();
                if self.menu_visible {
                    self.menu_visible = false;
                    events.push(AppEvent::MenuVisibilityChanged(false));
                }
                match selection.modal() {
                    Some(kind) => {
                        self.mode = AppMode::Modal(kind);
                        events.push(AppEvent::ModeChanged(self.mode));
                    }
                    None => {
                        if self.mode != AppMode::Landing {
                            self.mode = AppMode::Landing;
                            events.push(AppEvent::ModeChanged(self.mode));
                        }
                    }
                }
                events
            }
            AppCommand::SetRole(role) => {
                self.role = role;
                vec![AppEvent::RoleChanged(role)]
            }
            AppCommand::CompleteSignIn => {
                // Mirrors the sign-in flow: the modal closes and the menu
                // reopens so the user can pick a destination.
                self.mode = AppMode::Landing;
                self.menu_visible = true;
                vec![
                    AppEvent::ModeChanged(self.mode),
                    AppEvent::MenuVisibilityChanged(true),
                ]
            }
            AppCommand::SetStatus(message) => {
                self.status_line = Some(message.clone());
                vec![AppEvent::StatusUpdated(message)]
            }
            AppCommand::ClearStatus => {
                self.status_line = None;
                vec![AppEvent::StatusCleared]
            }
        }
    }
}
