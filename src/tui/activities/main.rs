//! Main activity - the role editing and preview screen.

use std::io::Stdout;
use std::time::Duration;

use color_eyre::eyre::Result;
use ratatui::{
    Terminal,
    crossterm::event::{self, Event, KeyCode},
    layout::{Constraint, Direction, Flex, Layout, Rect},
    prelude::CrosstermBackend,
    style::{Modifier, Style},
    widgets::{Block, Borders, Paragraph},
};
use tuirealm::{Application, EventListenerCfg, PollStrategy, Update};

use crate::popover::Selection;
use crate::theme::ThemeKind;
use crate::tui::Model;
use crate::tui::activity::{Activity, Context, ExitReason};
use crate::tui::components::{
    MAIN_FOOTER_ACTIONS, Picker, Preview, Roster, format_footer, render_confirm, render_help,
    roster,
};
use crate::tui::event::UserEvent;
use crate::tui::ids::Id;
use crate::tui::msg::Msg;

// ============================================================================
// Focus management
// ============================================================================

/// All focusable component IDs in order. Previews may be hidden by the theme
/// selection, and the picker replaces everything while it is open.
const ALL_FOCUS_IDS: &[Id] = &[Id::Roster, Id::PreviewDark, Id::PreviewLight];

/// Manages focus state for Tab navigation.
pub struct FocusManager {
    current_idx: usize,
    /// Current list of visible/focusable IDs
    visible_ids: Vec<Id>,
}

impl FocusManager {
    pub fn new() -> Self {
        Self {
            current_idx: 0,
            visible_ids: ALL_FOCUS_IDS.to_vec(),
        }
    }

    /// Update which components are focusable based on model state.
    pub fn update_visible(&mut self, model: &Model) {
        self.visible_ids = if model.popover.is_open() {
            vec![Id::Picker]
        } else {
            ALL_FOCUS_IDS
                .iter()
                .copied()
                .filter(|id| match *id {
                    Id::PreviewDark => model.themes.contains(&ThemeKind::Dark),
                    Id::PreviewLight => model.themes.contains(&ThemeKind::Light),
                    _ => true,
                })
                .collect()
        };

        // Clamp current index if it's now out of bounds
        if self.current_idx >= self.visible_ids.len() {
            self.current_idx = self.visible_ids.len().saturating_sub(1);
        }
    }

    /// Get the current focus component ID.
    pub fn current_focus(&self) -> Id {
        self.visible_ids
            .get(self.current_idx)
            .copied()
            .unwrap_or(Id::Roster)
    }

    /// Move focus to next component and return its ID.
    pub fn focus_next(&mut self) -> Id {
        if !self.visible_ids.is_empty() {
            self.current_idx = (self.current_idx + 1) % self.visible_ids.len();
        }
        self.current_focus()
    }

    /// Move focus to previous component and return its ID.
    pub fn focus_prev(&mut self) -> Id {
        if !self.visible_ids.is_empty() {
            self.current_idx =
                (self.current_idx + self.visible_ids.len() - 1) % self.visible_ids.len();
        }
        self.current_focus()
    }
}

impl Default for FocusManager {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// Layout
// ============================================================================

/// Precomputed screen regions for one frame. Built outside the draw closure
/// so the swatch-region registry and the renderer share one source of truth.
struct MainLayout {
    title: Rect,
    editor: Rect,
    /// Editor area inside its border, where the role rows live
    roster_inner: Rect,
    /// One pane per configured theme, in model order
    previews: Vec<Rect>,
    status: Rect,
}

fn compute_layout(area: Rect, theme_count: usize) -> MainLayout {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Title
            Constraint::Min(10),   // Content
            Constraint::Length(1), // Status
        ])
        .split(area);

    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
        .split(rows[1]);

    let editor = cols[0];
    let roster_inner = Block::default().borders(Borders::ALL).inner(editor);

    let count = theme_count.max(1) as u32;
    let previews = Layout::default()
        .direction(Direction::Vertical)
        .constraints(vec![Constraint::Ratio(1, count); count as usize])
        .split(cols[1])
        .to_vec();

    MainLayout {
        title: rows[0],
        editor,
        roster_inner,
        previews,
        status: rows[2],
    }
}

/// Centered popover area for the picker; grows with the palette.
fn popover_rect(area: Rect, palette_len: usize) -> Rect {
    let grid_rows = palette_len.div_ceil(5) as u16;
    let height = (grid_rows + 5).min(area.height);
    let width = 40.min(area.width);
    let vertical = Layout::vertical([Constraint::Length(height)]).flex(Flex::Center);
    let horizontal = Layout::horizontal([Constraint::Length(width)]).flex(Flex::Center);
    let [popover] = vertical.areas(area);
    let [popover] = horizontal.areas(popover);
    popover
}

fn preview_id(kind: ThemeKind) -> Id {
    match kind {
        ThemeKind::Dark => Id::PreviewDark,
        ThemeKind::Light => Id::PreviewLight,
    }
}

// ============================================================================
// MainActivity
// ============================================================================

/// The role editing activity.
#[derive(Default)]
pub struct MainActivity {
    app: Option<Application<Id, Msg, UserEvent>>,
    focus: FocusManager,
    context: Option<Context>,
    exit_reason: Option<ExitReason>,
    /// Which picker popover is currently mounted, if any
    mounted_picker: Option<Selection>,
}

impl MainActivity {
    /// Create and configure the tui-realm application.
    fn create_application() -> Application<Id, Msg, UserEvent> {
        Application::init(
            EventListenerCfg::default()
                .crossterm_input_listener(Duration::from_millis(20), 10)
                .poll_timeout(Duration::from_millis(50)),
        )
    }

    /// Mount all initial components.
    fn mount_components(app: &mut Application<Id, Msg, UserEvent>, model: &Model) -> Result<()> {
        let roster = Roster::new(model.roles.roles().to_vec(), model.selected);
        app.mount(Id::Roster, Box::new(roster), vec![])?;

        for kind in &model.themes {
            let preview = Preview::new(
                *kind,
                model.roles.roles().to_vec(),
                model.sample_message.clone(),
            );
            app.mount(preview_id(*kind), Box::new(preview), vec![])?;
        }

        // Set initial focus
        app.active(&Id::Roster)?;

        Ok(())
    }

    /// Remount everything that renders role data with the current snapshot.
    fn sync_display_components(app: &mut Application<Id, Msg, UserEvent>, model: &Model) {
        let _ = app.umount(&Id::Roster);
        let roster = Roster::new(model.roles.roles().to_vec(), model.selected);
        let _ = app.mount(Id::Roster, Box::new(roster), vec![]);

        for kind in &model.themes {
            let _ = app.umount(&preview_id(*kind));
            let preview = Preview::new(
                *kind,
                model.roles.roles().to_vec(),
                model.sample_message.clone(),
            );
            let _ = app.mount(preview_id(*kind), Box::new(preview), vec![]);
        }
    }

    /// Mount or unmount the picker so it matches the popover selection.
    /// The component only exists while its popover is open.
    fn reconcile_picker(&mut self) {
        let model = &mut self.context.as_mut().expect("context should be set").model;
        let desired = model.popover.open();
        if desired == self.mounted_picker {
            return;
        }
        let app = self.app.as_mut().expect("app should be initialized");

        if self.mounted_picker.is_some() {
            let _ = app.umount(&Id::Picker);
            self.mounted_picker = None;
        }

        if let Some(selection) = desired {
            match model.roles.get(selection.role_id) {
                Some(role) => {
                    let picker = Picker::new(
                        selection.role_id,
                        selection.slot,
                        role.name.clone(),
                        role.color(selection.slot).to_string(),
                        model.suggested_colors.clone(),
                    );
                    let _ = app.mount(Id::Picker, Box::new(picker), vec![]);
                    self.mounted_picker = Some(selection);
                }
                None => model.popover.clear(),
            }
        }

        self.focus.update_visible(model);
        let _ = app.active(&self.focus.current_focus());
    }
}

impl Activity for MainActivity {
    fn on_create(&mut self, context: Context) {
        self.context = Some(context);
        let mut app = Self::create_application();

        let model = &mut self.context.as_mut().expect("context is set").model;
        // A fresh mount never starts with a stale popover
        model.popover.clear();
        model.pending_delete = None;

        if let Err(e) = Self::mount_components(&mut app, model) {
            tracing::error!("Failed to mount components: {}", e);
        }

        self.app = Some(app);
        self.focus.update_visible(&self.context.as_ref().expect("context is set").model);
    }

    fn on_draw(&mut self, terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<()> {
        let size = terminal.size()?;
        let area = Rect::new(0, 0, size.width, size.height);

        {
            let model = &mut self.context.as_mut().expect("context should be set").model;
            let layout = compute_layout(area, model.themes.len());

            // Rebuild the region registry from the same layout the renderer
            // uses; clicks are tested against these rather than a widget tree.
            model.swatch_regions =
                roster::swatch_regions(layout.roster_inner, model.roles.roles(), model.selected);
            model.popover_area = model
                .popover
                .is_open()
                .then(|| popover_rect(area, model.suggested_colors.len()));
        }

        let app = self.app.as_mut().expect("app should be initialized");
        let model = &mut self.context.as_mut().expect("context should be set").model;
        let layout = compute_layout(area, model.themes.len());
        let picker_open = self.mounted_picker.is_some();

        terminal.draw(|frame| {
            let title = format!(" Role Preview ({} roles) ", model.roles.len());
            let title_widget =
                Paragraph::new(title).style(Style::default().add_modifier(Modifier::BOLD));
            frame.render_widget(title_widget, layout.title);

            app.view(&Id::Roster, frame, layout.editor);
            for (kind, pane) in model.themes.iter().zip(layout.previews.iter()) {
                app.view(&preview_id(*kind), frame, *pane);
            }

            let status = model
                .message
                .clone()
                .unwrap_or_else(|| {
                    format_footer(
                        MAIN_FOOTER_ACTIONS,
                        &[("pick", "1/2"), ("rename", "Enter")],
                    )
                });
            let status_widget =
                Paragraph::new(status).style(Style::default().add_modifier(Modifier::DIM));
            frame.render_widget(status_widget, layout.status);

            if let Some(popover) = model.popover_area
                && picker_open
            {
                app.view(&Id::Picker, frame, popover);
            }

            if let Some(id) = model.pending_delete {
                let name = model.roles.get(id).map(|r| r.name.as_str()).unwrap_or("");
                render_confirm(frame, name);
            }

            if model.show_help {
                render_help(frame);
            }
        })?;

        // Handle help modal events separately (intercepts all input when visible)
        if model.show_help {
            if let Event::Key(key) = event::read()? {
                match key.code {
                    KeyCode::Esc | KeyCode::Enter | KeyCode::Char('q') | KeyCode::Char('?') => {
                        model.show_help = false;
                    }
                    _ => {}
                }
            }
            return Ok(());
        }

        // The delete confirmation is a blocking yes/no gate: nothing else
        // happens until the user decides
        if let Some(id) = model.pending_delete {
            if let Event::Key(key) = event::read()? {
                match key.code {
                    KeyCode::Char('y') | KeyCode::Enter => {
                        let mut current = Some(Msg::DeleteConfirmed(id));
                        while let Some(m) = current {
                            current = model.update(Some(m));
                        }
                        Self::sync_display_components(app, model);
                        self.focus.update_visible(model);
                        let _ = app.active(&self.focus.current_focus());
                        self.reconcile_picker();
                    }
                    KeyCode::Char('n') | KeyCode::Esc => {
                        let mut current = Some(Msg::DeleteCancelled);
                        while let Some(m) = current {
                            current = model.update(Some(m));
                        }
                    }
                    _ => {}
                }
            }
            return Ok(());
        }

        // Use tick() - the canonical tui-realm heartbeat
        match app.tick(PollStrategy::Once) {
            Ok(messages) => {
                let mut needs_sync = false;

                for msg in messages {
                    // Handle focus changes at activity level
                    match &msg {
                        Msg::FocusNext => {
                            self.focus.update_visible(model);
                            let next = self.focus.focus_next();
                            let _ = app.active(&next);
                        }
                        Msg::FocusPrev => {
                            self.focus.update_visible(model);
                            let prev = self.focus.focus_prev();
                            let _ = app.active(&prev);
                        }
                        Msg::SwitchToCssPreview => {
                            self.exit_reason = Some(ExitReason::SwitchToCssPreview);
                            return Ok(());
                        }
                        _ => {}
                    }

                    // Check for quit
                    if matches!(msg, Msg::Quit) {
                        self.exit_reason = Some(ExitReason::Quit);
                        return Ok(());
                    }

                    // Anything that changes role data needs a remount of the
                    // display components afterwards
                    if matches!(
                        msg,
                        Msg::RoleAdded
                            | Msg::RoleRenamed(_, _)
                            | Msg::RoleMoved(_, _)
                            | Msg::ColorPicked(_, _, _)
                    ) {
                        needs_sync = true;
                    }

                    // Process through model, handle chained messages
                    let mut current = Some(msg);
                    while let Some(m) = current {
                        current = model.update(Some(m));
                    }
                }

                // Sync components after changes
                if needs_sync {
                    Self::sync_display_components(app, model);
                    self.focus.update_visible(model);
                    let _ = app.active(&self.focus.current_focus());
                }
                self.reconcile_picker();
            }
            Err(_) => {
                // Timeout is fine, just continue
            }
        }

        Ok(())
    }

    fn will_umount(&self) -> Option<&ExitReason> {
        self.exit_reason.as_ref()
    }

    fn on_destroy(&mut self) -> Option<Context> {
        self.app = None;
        self.context.take()
    }
}
