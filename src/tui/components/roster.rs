//! Role list editor Component.

use crossterm_actions::{InputEvent, NavigationEvent, SelectionEvent, TuiEvent};
use ratatui::Frame;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use tuirealm::{
    Component, Event, MockComponent, State, StateValue,
    command::{Cmd, CmdResult, Direction as CmdDirection},
    event::{Key, MouseButton, MouseEventKind},
    props::{AttrValue, Attribute, Props},
};

use crate::gradient::{Decoration, parse_color};
use crate::popover::SwatchRegion;
use crate::role::{ColorSlot, Role};
use crate::tui::msg::Msg;
use crate::tui::{AppAction, UserEvent, dispatcher, handle_global_app_events};

/// Width of the drag-handle column ("≡ ").
const HANDLE_WIDTH: u16 = 2;
/// Width of one swatch button ("#rrggbb").
const SWATCH_WIDTH: u16 = 7;
/// Gap between the two swatch buttons.
const SWATCH_GAP: u16 = 1;

/// First visible row index for a given cursor position, keeping the cursor
/// inside the viewport. Shared by rendering and click hit-testing so both
/// always agree on where each row is.
fn scroll_offset(selected: usize, visible: usize) -> usize {
    if visible == 0 {
        return selected;
    }
    selected.saturating_sub(visible - 1)
}

/// Swatch button areas for the rows currently visible inside `inner`.
pub fn swatch_regions(inner: Rect, roles: &[Role], selected: usize) -> Vec<SwatchRegion> {
    let visible = inner.height as usize;
    let offset = scroll_offset(selected.min(roles.len().saturating_sub(1)), visible);

    let mut regions = Vec::new();
    for (row, role) in roles.iter().enumerate().skip(offset).take(visible) {
        let y = inner.y + (row - offset) as u16;
        let one = Rect::new(inner.x + HANDLE_WIDTH, y, SWATCH_WIDTH, 1).intersection(inner);
        let two = Rect::new(
            inner.x + HANDLE_WIDTH + SWATCH_WIDTH + SWATCH_GAP,
            y,
            SWATCH_WIDTH,
            1,
        )
        .intersection(inner);
        regions.push(SwatchRegion {
            role_id: role.id,
            slot: ColorSlot::One,
            area: one,
        });
        regions.push(SwatchRegion {
            role_id: role.id,
            slot: ColorSlot::Two,
            area: two,
        });
    }
    regions
}

/// Foreground that stays readable on top of an arbitrary swatch color.
fn swatch_fg(hex: &str) -> Color {
    match parse_color(hex) {
        Ok(c) => {
            let luma =
                299 * u32::from(c.red) + 587 * u32::from(c.green) + 114 * u32::from(c.blue);
            if luma > 128_000 { Color::Black } else { Color::White }
        }
        Err(_) => Color::White,
    }
}

/// Editable list of roles: one row per role with a drag handle, the two
/// color swatch buttons, and the name.
pub struct Roster {
    props: Props,
    roles: Vec<Role>,
    selected: usize,
    /// Whether the selected role's name is being edited
    editing: bool,
    /// Buffer for typed input during editing
    edit_buffer: String,
}

impl Roster {
    pub fn new(roles: Vec<Role>, selected: usize) -> Self {
        let selected = selected.min(roles.len().saturating_sub(1));
        Self {
            props: Props::default(),
            roles,
            selected,
            editing: false,
            edit_buffer: String::new(),
        }
    }

    fn current(&self) -> Option<&Role> {
        self.roles.get(self.selected)
    }

    fn start_editing(&mut self) {
        let Some(role) = self.current() else {
            return;
        };
        self.edit_buffer = role.name.clone();
        self.editing = true;
    }

    fn draw_row(&self, row: usize, role: &Role, focused: bool) -> Line<'static> {
        let is_selected = row == self.selected;
        let mut spans: Vec<Span<'static>> = Vec::new();

        let handle_style = if is_selected && focused {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        spans.push(Span::styled(if is_selected { "▸ " } else { "≡ " }, handle_style));

        for (slot, hex) in [(ColorSlot::One, &role.color_one), (ColorSlot::Two, &role.color_two)] {
            let bg = parse_color(hex)
                .map(|c| Color::Rgb(c.red, c.green, c.blue))
                .unwrap_or(Color::DarkGray);
            let text = format!("{:<width$.width$}", hex, width = SWATCH_WIDTH as usize);
            spans.push(Span::styled(
                text,
                Style::default().fg(swatch_fg(hex)).bg(bg),
            ));
            if slot == ColorSlot::One {
                spans.push(Span::raw(" "));
            }
        }
        spans.push(Span::raw(" "));

        if self.editing && is_selected {
            spans.push(Span::styled(
                self.edit_buffer.clone(),
                Style::default().fg(Color::White).bg(Color::DarkGray),
            ));
            spans.push(Span::styled("▏", Style::default().fg(Color::White)));
        } else {
            let decoration = Decoration::new(role.color_one.clone(), role.color_two.clone());
            let mut name = decoration.styled_spans(&role.name);
            if is_selected && focused {
                name = name
                    .into_iter()
                    .map(|s| Span::styled(s.content, s.style.add_modifier(Modifier::BOLD)))
                    .collect();
            }
            spans.extend(name);
        }

        Line::from(spans)
    }
}

impl MockComponent for Roster {
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
            .title(format!(" Roles ({}) ", self.roles.len()))
            .borders(Borders::ALL)
            .border_style(border_style);
        let inner = block.inner(area);
        frame.render_widget(block, area);

        if self.roles.is_empty() {
            let hint = Paragraph::new("No roles - press 'a' to add one")
                .style(Style::default().fg(Color::DarkGray));
            frame.render_widget(hint, inner);
            return;
        }

        let visible = inner.height as usize;
        let offset = scroll_offset(self.selected, visible);
        let lines: Vec<Line> = self
            .roles
            .iter()
            .enumerate()
            .skip(offset)
            .take(visible)
            .map(|(row, role)| self.draw_row(row, role, focused))
            .collect();

        frame.render_widget(Paragraph::new(lines), inner);
    }

    fn query(&self, attr: Attribute) -> Option<AttrValue> {
        self.props.get(attr)
    }

    fn attr(&mut self, attr: Attribute, value: AttrValue) {
        self.props.set(attr, value);
    }

    fn state(&self) -> State {
        State::One(StateValue::Usize(self.selected))
    }

    fn perform(&mut self, cmd: Cmd) -> CmdResult {
        match cmd {
            Cmd::Move(CmdDirection::Up) => {
                if self.selected > 0 {
                    self.selected -= 1;
                    CmdResult::Changed(self.state())
                } else {
                    CmdResult::None
                }
            }
            Cmd::Move(CmdDirection::Down) => {
                if self.selected + 1 < self.roles.len() {
                    self.selected += 1;
                    CmdResult::Changed(self.state())
                } else {
                    CmdResult::None
                }
            }
            _ => CmdResult::None,
        }
    }
}

impl Component<Msg, UserEvent> for Roster {
    fn on(&mut self, ev: Event<UserEvent>) -> Option<Msg> {
        let focused = self
            .props
            .get_or(Attribute::Focus, AttrValue::Flag(false))
            .unwrap_flag();

        if !focused {
            return None;
        }

        // Window-level clicks route through the model's region registry
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

        // Handle name editing separately (raw key input)
        if self.editing {
            match key_event.code {
                Key::Enter => {
                    self.editing = false;
                    let id = self.current()?.id;
                    return Some(Msg::RoleRenamed(id, self.edit_buffer.clone()));
                }
                Key::Esc => {
                    self.editing = false;
                    self.edit_buffer.clear();
                    return None;
                }
                Key::Backspace => {
                    self.edit_buffer.pop();
                    return None;
                }
                Key::Char(c) => {
                    self.edit_buffer.push(c);
                    return None;
                }
                _ => return None,
            }
        }

        // Swatch toggles fire before the dispatcher sees the digits
        if let Key::Char(c) = key_event.code
            && let Some(slot) = match c {
                '1' => Some(ColorSlot::One),
                '2' => Some(ColorSlot::Two),
                _ => None,
            }
        {
            let id = self.current()?.id;
            return Some(Msg::PickerToggled(id, slot));
        }

        // Use dispatcher to convert to semantic action
        let action = dispatcher().dispatch(&key_event)?;

        if let Some(msg) = handle_global_app_events(&action) {
            return Some(msg);
        }

        match action {
            // Role store operations
            AppAction::AddRole => Some(Msg::RoleAdded),
            AppAction::DeleteRole => {
                let id = self.current()?.id;
                Some(Msg::DeleteRequested(id))
            }
            AppAction::MoveRoleUp => {
                if self.selected > 0 {
                    Some(Msg::RoleMoved(self.selected, self.selected - 1))
                } else {
                    // Dragged past the top of the list: nowhere to drop
                    None
                }
            }
            AppAction::MoveRoleDown => {
                if self.selected + 1 < self.roles.len() {
                    Some(Msg::RoleMoved(self.selected, self.selected + 1))
                } else {
                    None
                }
            }
            AppAction::CopyCss => Some(Msg::CopyCss),

            // Focus navigation → bubble up as Msg
            AppAction::Tui(TuiEvent::Selection(SelectionEvent::Next)) => Some(Msg::FocusNext),
            AppAction::Tui(TuiEvent::Selection(SelectionEvent::Prev)) => Some(Msg::FocusPrev),

            // Cursor movement
            AppAction::Tui(TuiEvent::Navigation(NavigationEvent::Up)) => {
                if let CmdResult::Changed(_) = self.perform(Cmd::Move(CmdDirection::Up)) {
                    Some(Msg::SelectionChanged(self.selected))
                } else {
                    None
                }
            }
            AppAction::Tui(TuiEvent::Navigation(NavigationEvent::Down)) => {
                if let CmdResult::Changed(_) = self.perform(Cmd::Move(CmdDirection::Down)) {
                    Some(Msg::SelectionChanged(self.selected))
                } else {
                    None
                }
            }

            // Enter starts renaming the selected role
            AppAction::Tui(TuiEvent::Input(InputEvent::Confirm)) => {
                self.start_editing();
                None
            }

            _ => None,
        }
    }
}
