//! Themed chat preview Component.
//!
//! Read-only projection of the role list: a message stream and a member
//! sidebar, colored like the chat client's dark or light theme.

use crossterm_actions::{NavigationEvent, SelectionEvent, TuiEvent};
use ratatui::Frame;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use tuirealm::{
    Component, Event, MockComponent, State, StateValue,
    command::{Cmd, CmdResult, Direction as CmdDirection},
    event::{MouseButton, MouseEventKind},
    props::{AttrValue, Attribute, Props},
};

use crate::gradient::Decoration;
use crate::role::Role;
use crate::theme::{PreviewTheme, ThemeKind};
use crate::tui::msg::Msg;
use crate::tui::{AppAction, UserEvent, dispatcher, handle_global_app_events};

/// Sidebar width in cells.
const SIDEBAR_WIDTH: u16 = 20;

/// One themed preview pane.
pub struct Preview {
    props: Props,
    theme: PreviewTheme,
    roles: Vec<Role>,
    sample_message: String,
    scroll: usize,
    visible_height: usize,
}

impl Preview {
    pub fn new(kind: ThemeKind, roles: Vec<Role>, sample_message: String) -> Self {
        Self {
            props: Props::default(),
            theme: PreviewTheme::for_kind(kind),
            roles,
            sample_message,
            scroll: 0,
            visible_height: 10,
        }
    }

    fn gradient_name(&self, role: &Role) -> Vec<Span<'static>> {
        Decoration::new(role.color_one.clone(), role.color_two.clone()).styled_spans(&role.name)
    }

    /// The message stream: name line, body line, and a separating blank per
    /// role, in list order.
    fn message_lines(&self) -> Vec<Line<'static>> {
        let mut lines = Vec::new();
        for role in &self.roles {
            let mut name_line = vec![Span::styled(
                "● ",
                Style::default().fg(self.theme.avatar),
            )];
            name_line.extend(self.gradient_name(role));
            lines.push(Line::from(name_line));
            lines.push(Line::from(Span::styled(
                format!("  {}", self.sample_message),
                Style::default().fg(self.theme.text),
            )));
            lines.push(Line::from(""));
        }
        lines
    }

    /// The member sidebar: online header plus one entry per role.
    fn sidebar_lines(&self) -> Vec<Line<'static>> {
        let mut lines = vec![Line::from(Span::styled(
            format!("ONLINE—{}", self.roles.len()),
            Style::default()
                .fg(self.theme.muted)
                .add_modifier(Modifier::BOLD),
        ))];
        for role in &self.roles {
            let mut entry = vec![Span::styled(
                "● ",
                Style::default().fg(self.theme.avatar),
            )];
            entry.extend(self.gradient_name(role));
            lines.push(Line::from(entry));
        }
        lines
    }

    fn scroll_up(&mut self) {
        self.scroll = self.scroll.saturating_sub(1);
    }

    fn scroll_down(&mut self) {
        let max_scroll = (self.roles.len() * 3).saturating_sub(self.visible_height);
        self.scroll = (self.scroll + 1).min(max_scroll);
    }
}

impl MockComponent for Preview {
    fn view(&mut self, frame: &mut Frame, area: Rect) {
        let focused = self
            .props
            .get_or(Attribute::Focus, AttrValue::Flag(false))
            .unwrap_flag();

        let border_style = if focused {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        let block = Block::default()
            .title(format!(" {} Preview ", self.theme.kind.label()))
            .borders(Borders::ALL)
            .border_style(border_style);
        let inner = block.inner(area);
        frame.render_widget(block, area);

        self.visible_height = inner.height as usize;

        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Min(10), Constraint::Length(SIDEBAR_WIDTH)])
            .split(inner);

        let messages: Vec<Line> = self
            .message_lines()
            .into_iter()
            .skip(self.scroll)
            .take(self.visible_height)
            .collect();
        let stream = Paragraph::new(messages).style(Style::default().bg(self.theme.background));
        frame.render_widget(stream, cols[0]);

        let sidebar: Vec<Line> = self
            .sidebar_lines()
            .into_iter()
            .take(self.visible_height)
            .collect();
        let members = Paragraph::new(sidebar).style(Style::default().bg(self.theme.surface));
        frame.render_widget(members, cols[1]);
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

impl Component<Msg, UserEvent> for Preview {
    fn on(&mut self, ev: Event<UserEvent>) -> Option<Msg> {
        let focused = self
            .props
            .get_or(Attribute::Focus, AttrValue::Flag(false))
            .unwrap_flag();

        if !focused {
            return None;
        }

        if let Event::Mouse(mouse) = &ev {
            return match mouse.kind {
                MouseEventKind::Down(MouseButton::Left) => {
                    Some(Msg::Clicked(mouse.column, mouse.row))
                }
                _ => None,
            };
        }

        let Event::Keyboard(key_event) = ev else {
            return None;
        };

        let action = dispatcher().dispatch(&key_event)?;

        if let Some(msg) = handle_global_app_events(&action) {
            return Some(msg);
        }

        match action {
            AppAction::CopyCss => Some(Msg::CopyCss),

            AppAction::Tui(TuiEvent::Selection(SelectionEvent::Next)) => Some(Msg::FocusNext),
            AppAction::Tui(TuiEvent::Selection(SelectionEvent::Prev)) => Some(Msg::FocusPrev),

            AppAction::Tui(TuiEvent::Navigation(NavigationEvent::Up)) => {
                self.perform(Cmd::Scroll(CmdDirection::Up));
                None
            }
            AppAction::Tui(TuiEvent::Navigation(NavigationEvent::Down)) => {
                self.perform(Cmd::Scroll(CmdDirection::Down));
                None
            }

            _ => None,
        }
    }
}
