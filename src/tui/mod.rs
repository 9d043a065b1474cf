//! Interactive TUI for editing and previewing role gradients.
//!
//! Architecture: Activity-based with tui-realm for components.
//! Each screen (activity) has its own Application instance; the shared
//! message and model types live at this level.

mod activities;
mod activity;
mod components;
mod model;

pub mod ids;
pub mod msg;

mod event;

use std::io::stdout;
use std::sync::LazyLock;

use color_eyre::eyre::Result;
use crossterm_actions::{
    ActionBinding, ActionConfig, AppEvent, EditingMode, TuiEvent, TuiRealmDispatcher, defaults,
    keys,
};
use ratatui::{
    Terminal,
    crossterm::ExecutableCommand,
    crossterm::event::{DisableMouseCapture, EnableMouseCapture},
    crossterm::terminal::{
        EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
    },
    prelude::CrosstermBackend,
};

use crate::cli::Cli;
use crate::config::Settings;

pub use event::UserEvent;
pub use model::Model;

use activity::{ActivityManager, Context};
use msg::Msg;

// ============================================================================
// Event handling (shared across activities)
// ============================================================================

/// Unified application events - wraps TuiEvent + custom actions.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub enum AppAction {
    /// Standard TUI events (navigation, input, selection, app)
    Tui(TuiEvent),
    /// Switch to the generated-stylesheet screen
    CssPreview,
    /// Append a new role to the list
    AddRole,
    /// Ask to delete the selected role
    DeleteRole,
    /// Move the selected role one position up
    MoveRoleUp,
    /// Move the selected role one position down
    MoveRoleDown,
    /// Copy the generated stylesheet to the clipboard
    CopyCss,
}

/// Global dispatcher instance - shared by all components.
pub static DISPATCHER: LazyLock<TuiRealmDispatcher<AppAction>> = LazyLock::new(|| {
    let mut config = ActionConfig::new(EditingMode::Emacs);

    // Import all standard TuiEvent bindings wrapped in AppAction::Tui
    for binding in defaults::emacs_defaults().bindings() {
        config.bind(ActionBinding {
            action: AppAction::Tui(binding.action),
            keys: binding.keys.clone(),
            description: binding.description.clone(),
        });
    }

    // Add custom bindings
    config.bind(
        ActionBinding::builder()
            .action(AppAction::CssPreview)
            .key(keys::char('c'))
            .description("View generated CSS")
            .build(),
    );
    config.bind(
        ActionBinding::builder()
            .action(AppAction::AddRole)
            .key(keys::char('a'))
            .description("Add role")
            .build(),
    );
    config.bind(
        ActionBinding::builder()
            .action(AppAction::DeleteRole)
            .key(keys::char('d'))
            .description("Delete role")
            .build(),
    );
    config.bind(
        ActionBinding::builder()
            .action(AppAction::MoveRoleUp)
            .key(keys::char('K'))
            .description("Move role up")
            .build(),
    );
    config.bind(
        ActionBinding::builder()
            .action(AppAction::MoveRoleDown)
            .key(keys::char('J'))
            .description("Move role down")
            .build(),
    );
    config.bind(
        ActionBinding::builder()
            .action(AppAction::CopyCss)
            .key(keys::char('y'))
            .description("Copy CSS to clipboard")
            .build(),
    );

    config.compile();
    TuiRealmDispatcher::new(config)
});

/// Convenience function for components to access the dispatcher.
pub fn dispatcher() -> &'static TuiRealmDispatcher<AppAction> {
    &DISPATCHER
}

/// Handle global application events that are common across all components.
/// Returns Some(Msg) if the action was handled, None otherwise.
pub fn handle_global_app_events(action: &AppAction) -> Option<Msg> {
    match action {
        AppAction::Tui(TuiEvent::App(AppEvent::Quit)) => Some(Msg::Quit),
        AppAction::Tui(TuiEvent::App(AppEvent::Help)) => Some(Msg::ShowHelp),
        AppAction::CssPreview => Some(Msg::SwitchToCssPreview),
        _ => None,
    }
}

// ============================================================================
// Terminal session guard
// ============================================================================

/// Raw mode + alternate screen + mouse capture, released on drop so the
/// window-level listener can never outlive the editor.
struct TerminalGuard;

impl TerminalGuard {
    fn acquire() -> Result<Self> {
        enable_raw_mode()?;
        stdout()
            .execute(EnterAlternateScreen)?
            .execute(EnableMouseCapture)?;
        Ok(Self)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = stdout().execute(DisableMouseCapture);
        let _ = stdout().execute(LeaveAlternateScreen);
        let _ = disable_raw_mode();
    }
}

// ============================================================================
// TUI entry point
// ============================================================================

/// Run the interactive TUI using activity-based architecture.
pub fn run(cli: &Cli, settings: Settings) -> Result<()> {
    let guard = TerminalGuard::acquire()?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout()))?;

    let model = Model::new(cli, settings);
    let context = Context { model };
    let mut manager = ActivityManager::new(context);

    let result = manager.run(&mut terminal);

    drop(guard);
    result
}
