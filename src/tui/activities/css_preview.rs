//! CSS preview activity - displays the generated stylesheet.

use std::io::Stdout;
use std::time::Duration;

use color_eyre::eyre::Result;
use crossterm_actions::{NavigationEvent, TuiEvent};
use ratatui::{
    Terminal,
    layout::{Constraint, Direction, Layout, Rect},
    prelude::CrosstermBackend,
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState},
};
use tuirealm::{
    Application, Component, Event, EventListenerCfg, MockComponent, PollStrategy, State,
    StateValue,
    command::{Cmd, CmdResult, Direction as CmdDirection},
    props::{AttrValue, Attribute, Props},
};

use crate::css;
use crate::theme::PreviewTheme;
use crate::tui::activity::{Activity, Context, ExitReason};
use crate::tui::components::{CSS_FOOTER_ACTIONS, format_footer};
use crate::tui::{AppAction, dispatcher, handle_global_app_events};

// ============================================================================
// Component identifiers (scoped to CssPreviewActivity)
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Id {
    CssView,
}

// ============================================================================
// Messages (scoped to CssPreviewActivity)
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub enum Msg {
    Quit,
    Back,
    Copy,
    ScrollUp,
    ScrollDown,
}

// ============================================================================
// User events (required by tui-realm)
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserEvent {}

// ============================================================================
// CssView Component
// ============================================================================

pub struct CssView {
    props: Props,
    lines: Vec<Line<'static>>,
    scroll: usize,
    visible_height: usize,
}

impl CssView {
    pub fn new(stylesheet: &str) -> Self {
        let theme = PreviewTheme::dark();
        let lines = stylesheet
            .lines()
            .map(|line| {
                Line::from(ratatui::text::Span::styled(
                    line.to_string(),
                    Style::default().fg(theme.text),
                ))
            })
            .collect();
        Self {
            props: Props::default(),
            lines,
            scroll: 0,
            visible_height: 20,
        }
    }

    fn scroll_up(&mut self) {
        self.scroll = self.scroll.saturating_sub(1);
    }

    fn scroll_down(&mut self) {
        let max_scroll = self.lines.len().saturating_sub(self.visible_height);
        self.scroll = (self.scroll + 1).min(max_scroll);
    }
}

impl MockComponent for CssView {
    fn view(&mut self, frame: &mut ratatui::Frame, area: Rect) {
        let theme = PreviewTheme::dark();
        let bg_style = Style::default().bg(theme.background);
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(bg_style.fg(Color::DarkGray))
            .style(bg_style);
        let inner = block.inner(area);
        frame.render_widget(block, area);

        self.visible_height = inner.height as usize;

        // Render stylesheet lines with line numbers
        let visible_lines: Vec<Line> = self
            .lines
            .iter()
            .enumerate()
            .skip(self.scroll)
            .take(inner.height as usize)
            .map(|(i, line)| {
                let line_num = format!("{:4} ", i + 1);
                let mut spans = vec![ratatui::text::Span::styled(
                    line_num,
                    Style::default().fg(theme.muted).bg(theme.background),
                )];
                spans.extend(line.spans.clone());
                Line::from(spans)
            })
            .collect();

        let css_widget = Paragraph::new(visible_lines).style(bg_style);
        frame.render_widget(css_widget, inner);

        // Scrollbar
        if self.lines.len() > inner.height as usize {
            let scrollbar = Scrollbar::new(ScrollbarOrientation::VerticalRight);
            let mut scrollbar_state = ScrollbarState::new(self.lines.len()).position(self.scroll);
            frame.render_stateful_widget(scrollbar, area, &mut scrollbar_state);
        }
    }

    fn query(&self, attr: Attribute) -> Option<AttrValue> {
        self.props.get(attr)
    }

    fn attr(&mut self, attr: Attribute, value: AttrValue) {
        self.props.set(attr, value);
    }

    fn state(&self) -> State {
        State::One(StateValue::Usize(self.scroll))
    }

    fn perform(&mut self, cmd: Cmd) -> CmdResult {
        match cmd {
            Cmd::Scroll(CmdDirection::Up) => {
                self.scroll_up();
                CmdResult::Changed(self.state())
            }
            Cmd::Scroll(CmdDirection::Down) => {
                self.scroll_down();
                CmdResult::Changed(self.state())
            }
            _ => CmdResult::None,
        }
    }
}

impl Component<Msg, UserEvent> for CssView {
    fn on(&mut self, ev: Event<UserEvent>) -> Option<Msg> {
        // Extract keyboard event
        let Event::Keyboard(key_event) = ev else {
            return None;
        };

        // Handle Esc for going back (not mapped in dispatcher)
        if key_event.code == tuirealm::event::Key::Esc {
            return Some(Msg::Back);
        }

        // Use dispatcher to convert to semantic action
        let action = dispatcher().dispatch(&key_event)?;

        if let Some(msg) = handle_global_app_events(&action) {
            // Convert global Msg to our local Msg
            return match msg {
                crate::tui::msg::Msg::Quit => Some(Msg::Quit),
                crate::tui::msg::Msg::SwitchToCssPreview => Some(Msg::Back), // Toggle back
                _ => None,
            };
        }

        match action {
            // Scrolling
            AppAction::Tui(TuiEvent::Navigation(NavigationEvent::Up)) => {
                self.perform(Cmd::Scroll(CmdDirection::Up));
                Some(Msg::ScrollUp)
            }
            AppAction::Tui(TuiEvent::Navigation(NavigationEvent::Down)) => {
                self.perform(Cmd::Scroll(CmdDirection::Down));
                Some(Msg::ScrollDown)
            }

            // Clipboard
            AppAction::CopyCss => Some(Msg::Copy),

            _ => None,
        }
    }
}

// ============================================================================
// CssPreviewActivity
// ============================================================================

#[derive(Default)]
pub struct CssPreviewActivity {
    app: Option<Application<Id, Msg, UserEvent>>,
    context: Option<Context>,
    exit_reason: Option<ExitReason>,
    stylesheet: String,
}

impl CssPreviewActivity {
    fn create_application() -> Application<Id, Msg, UserEvent> {
        Application::init(
            EventListenerCfg::default()
                .crossterm_input_listener(Duration::from_millis(20), 10)
                .poll_timeout(Duration::from_millis(50)),
        )
    }

    /// Copy the stylesheet to the clipboard. Fire-and-forget: neither
    /// success nor failure is surfaced, only logged.
    fn copy_to_clipboard(&self) {
        match arboard::Clipboard::new().and_then(|mut cb| cb.set_text(self.stylesheet.clone())) {
            Ok(()) => tracing::debug!("stylesheet copied to clipboard"),
            Err(e) => tracing::warn!("clipboard write failed: {e}"),
        }
    }
}

impl Activity for CssPreviewActivity {
    fn on_create(&mut self, context: Context) {
        self.stylesheet = css::stylesheet(context.model.roles.roles());
        self.context = Some(context);

        // Create application and mount component
        let mut app = Self::create_application();
        let css_view = CssView::new(&self.stylesheet);
        let _ = app.mount(Id::CssView, Box::new(css_view), vec![]);
        let _ = app.active(&Id::CssView);

        self.app = Some(app);
    }

    fn on_draw(&mut self, terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<()> {
        let app = self.app.as_mut().expect("app should be initialized");

        // Draw UI
        terminal.draw(|frame| {
            let area = frame.area();

            let rows = Layout::default()
                .direction(Direction::Vertical)
                .constraints([
                    Constraint::Length(1), // Title
                    Constraint::Min(10),   // Stylesheet
                    Constraint::Length(1), // Status
                ])
                .split(area);

            // Title bar
            let title_widget = Paragraph::new(" Generated CSS ")
                .style(Style::default().add_modifier(Modifier::BOLD));
            frame.render_widget(title_widget, rows[0]);

            // Stylesheet view
            app.view(&Id::CssView, frame, rows[1]);

            // Status bar
            let status = format_footer(CSS_FOOTER_ACTIONS, &[("back", "Esc")]);
            let status_widget =
                Paragraph::new(status).style(Style::default().add_modifier(Modifier::DIM));
            frame.render_widget(status_widget, rows[2]);
        })?;

        // Process events through tui-realm
        match app.tick(PollStrategy::Once) {
            Ok(messages) => {
                for msg in messages {
                    match msg {
                        Msg::Quit => {
                            self.exit_reason = Some(ExitReason::Quit);
                            return Ok(());
                        }
                        Msg::Back => {
                            self.exit_reason = Some(ExitReason::SwitchToMain);
                            return Ok(());
                        }
                        Msg::Copy => self.copy_to_clipboard(),
                        Msg::ScrollUp | Msg::ScrollDown => {
                            // Already handled in component
                        }
                    }
                }
            }
            Err(_) => {
                // Timeout, continue
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
