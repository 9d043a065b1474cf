//! Application model for the TUI.

use ratatui::layout::{Position, Rect};
use tuirealm::Update;

use crate::cli::{Cli, ThemeArg};
use crate::config::Settings;
use crate::css;
use crate::popover::{PopoverFocus, SwatchRegion};
use crate::role::{RoleId, RoleList, RolePatch};
use crate::theme::ThemeKind;

use super::msg::Msg;

/// Application model containing all state.
pub struct Model {
    /// The role store - sole owner of the role list
    pub roles: RoleList,
    /// Which color picker (if any) is open
    pub popover: PopoverFocus,
    /// Editor cursor position (index into the role list)
    pub selected: usize,
    /// Swatch button areas from the last draw, for click hit-testing
    pub swatch_regions: Vec<SwatchRegion>,
    /// Area of the open picker popover from the last draw
    pub popover_area: Option<Rect>,
    /// Role awaiting delete confirmation
    pub pending_delete: Option<RoleId>,

    // UI state
    pub show_help: bool,
    pub message: Option<String>,

    // Settings
    pub themes: Vec<ThemeKind>,
    pub sample_message: String,
    pub suggested_colors: Vec<String>,
}

impl Model {
    /// Create model from CLI arguments and settings.
    pub fn new(cli: &Cli, settings: Settings) -> Self {
        let theme = settings.preview.theme.unwrap_or(cli.theme);
        // The CLI default is Both; an explicit CLI flag wins over the file
        let theme = if cli.theme != ThemeArg::Both {
            cli.theme
        } else {
            theme
        };
        let themes = match theme {
            ThemeArg::Both => vec![ThemeKind::Dark, ThemeKind::Light],
            ThemeArg::Dark => vec![ThemeKind::Dark],
            ThemeArg::Light => vec![ThemeKind::Light],
        };

        Self {
            roles: RoleList::starter(),
            popover: PopoverFocus::default(),
            selected: 0,
            swatch_regions: Vec::new(),
            popover_area: None,
            pending_delete: None,
            show_help: false,
            message: None,
            sample_message: settings.sample_message(),
            suggested_colors: settings.suggested_colors(),
            themes,
        }
    }

    /// Clamp the editor cursor to the current list length.
    fn clamp_selection(&mut self) {
        if !self.roles.is_empty() {
            self.selected = self.selected.min(self.roles.len() - 1);
        } else {
            self.selected = 0;
        }
    }

    /// Route a click through the swatch-region registry: a hit on a swatch
    /// toggles that picker, a click inside the open popover is ignored, and
    /// anything else closes an open picker.
    fn handle_click(&mut self, position: Position) {
        if let Some(area) = self.popover_area
            && area.contains(position)
        {
            return;
        }
        if let Some(region) = self
            .swatch_regions
            .iter()
            .find(|r| r.area.contains(position))
        {
            self.popover.toggle(region.role_id, region.slot);
        } else if self.popover.handle_click(position, &self.swatch_regions) {
            tracing::debug!("picker closed by outside click");
        }
    }

    /// Copy the full stylesheet to the system clipboard. Fire-and-forget:
    /// neither success nor failure is surfaced, only logged.
    fn copy_stylesheet(&self) {
        let sheet = css::stylesheet(self.roles.roles());
        match arboard::Clipboard::new().and_then(|mut cb| cb.set_text(sheet)) {
            Ok(()) => tracing::debug!("stylesheet copied to clipboard"),
            Err(e) => tracing::warn!("clipboard write failed: {e}"),
        }
    }
}

impl Update<Msg> for Model {
    fn update(&mut self, msg: Option<Msg>) -> Option<Msg> {
        let msg = msg?;

        match msg {
            // Role store operations
            Msg::RoleAdded => {
                self.roles.add();
                self.selected = self.roles.len() - 1;
                self.message = None;
                None
            }
            Msg::DeleteRequested(id) => {
                if self.roles.get(id).is_some() {
                    self.pending_delete = Some(id);
                }
                None
            }
            Msg::DeleteConfirmed(id) => {
                self.pending_delete = None;
                if let Some(open) = self.popover.open()
                    && open.role_id == id
                {
                    self.popover.clear();
                }
                if let Some(role) = self.roles.get(id) {
                    self.message = Some(format!("Deleted \"{}\"", role.name));
                }
                self.roles.delete(id);
                self.clamp_selection();
                None
            }
            Msg::DeleteCancelled => {
                self.pending_delete = None;
                None
            }
            Msg::RoleRenamed(id, name) => {
                self.roles.update(id, RolePatch::name(name));
                self.message = None;
                None
            }
            Msg::RoleMoved(from, to) => {
                self.message = None;
                self.roles.reorder(from, to);
                if from == self.selected && to < self.roles.len() {
                    self.selected = to;
                }
                None
            }
            Msg::SelectionChanged(idx) => {
                self.selected = idx;
                self.clamp_selection();
                None
            }

            // Color picker popover
            Msg::PickerToggled(id, slot) => {
                self.popover.toggle(id, slot);
                None
            }
            Msg::PickerClosed => {
                self.popover.clear();
                None
            }
            Msg::ColorPicked(id, slot, color) => {
                self.roles.update(id, RolePatch::color(slot, color));
                None
            }

            // Window-level interaction
            Msg::Clicked(column, row) => {
                self.handle_click(Position::new(column, row));
                None
            }

            // Clipboard
            Msg::CopyCss => {
                self.copy_stylesheet();
                None
            }

            // Help modal
            Msg::ShowHelp => {
                self.show_help = true;
                None
            }
            Msg::HideHelp => {
                self.show_help = false;
                None
            }

            // Handled at the activity level
            Msg::Quit
            | Msg::FocusNext
            | Msg::FocusPrev
            | Msg::SwitchToCssPreview
            | Msg::None => None,
        }
    }
}
