//! Color picker popover Component.
//!
//! A black box from the store's point of view: given an initial color and a
//! suggested palette, it emits a hex color-change message every time the
//! user applies a value. Mounted when a swatch toggle opens it, unmounted
//! when the selection clears.

use crossterm_actions::{InputEvent, NavigationEvent, TuiEvent};
use ratatui::Frame;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};
use tuirealm::{
    Component, Event, MockComponent, State, StateValue,
    command::{Cmd, CmdResult, Direction as CmdDirection},
    event::{Key, MouseButton, MouseEventKind},
    props::{AttrValue, Attribute, Props},
};

use crate::gradient::parse_color;
use crate::role::{ColorSlot, RoleId};
use crate::tui::msg::Msg;
use crate::tui::{AppAction, UserEvent, dispatcher, handle_global_app_events};

/// Swatches per palette grid row.
const GRID_COLS: usize = 5;

/// Color picker popover bound to one `(role, slot)` pair.
pub struct Picker {
    props: Props,
    role_id: RoleId,
    slot: ColorSlot,
    role_name: String,
    /// Latest applied color
    current: String,
    palette: Vec<String>,
    selected: usize,
    /// Whether a hex value is being typed
    hex_entry: bool,
    hex_buffer: String,
}

impl Picker {
    pub fn new(
        role_id: RoleId,
        slot: ColorSlot,
        role_name: String,
        current: String,
        palette: Vec<String>,
    ) -> Self {
        // Start on the palette entry matching the current color, if any
        let selected = palette
            .iter()
            .position(|c| c.eq_ignore_ascii_case(&current))
            .unwrap_or(0);
        Self {
            props: Props::default(),
            role_id,
            slot,
            role_name,
            current,
            palette,
            selected,
            hex_entry: false,
            hex_buffer: String::new(),
        }
    }

    fn apply(&mut self, color: String) -> Msg {
        self.current = color.clone();
        Msg::ColorPicked(self.role_id, self.slot, color)
    }

    fn apply_selected(&mut self) -> Option<Msg> {
        let color = self.palette.get(self.selected)?.clone();
        Some(self.apply(color))
    }

    fn confirm_hex(&mut self) -> Option<Msg> {
        self.hex_entry = false;
        if self.hex_buffer.is_empty() {
            return None;
        }
        let color = format!("#{}", self.hex_buffer.to_lowercase());
        self.hex_buffer.clear();
        Some(self.apply(color))
    }

    fn grid_move(&mut self, delta: isize) {
        if self.palette.is_empty() {
            return;
        }
        let len = self.palette.len() as isize;
        let next = self.selected as isize + delta;
        if (0..len).contains(&next) {
            self.selected = next as usize;
        }
    }

    fn swatch_color(hex: &str) -> Color {
        parse_color(hex)
            .map(|c| Color::Rgb(c.red, c.green, c.blue))
            .unwrap_or(Color::DarkGray)
    }
}

impl MockComponent for Picker {
    fn view(&mut self, frame: &mut Frame, area: Rect) {
        frame.render_widget(Clear, area);

        let slot_label = match self.slot {
            ColorSlot::One => "first stop",
            ColorSlot::Two => "second stop",
        };
        let block = Block::default()
            .title(format!(" {} - {} ", self.role_name, slot_label))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let grid_rows = self.palette.len().div_ceil(GRID_COLS);
        let mut constraints = vec![Constraint::Length(1), Constraint::Length(1)];
        constraints.extend(std::iter::repeat_n(Constraint::Length(1), grid_rows));
        constraints.push(Constraint::Length(1));
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints(constraints)
            .split(inner);

        // Current value bar
        let current_line = Line::from(vec![
            Span::styled(
                "        ",
                Style::default().bg(Self::swatch_color(&self.current)),
            ),
            Span::raw(" "),
            Span::styled(self.current.clone(), Style::default().fg(Color::White)),
        ]);
        frame.render_widget(Paragraph::new(current_line), rows[0]);

        // Palette grid
        for row in 0..grid_rows {
            let mut spans = Vec::new();
            for col in 0..GRID_COLS {
                let idx = row * GRID_COLS + col;
                let Some(hex) = self.palette.get(idx) else {
                    break;
                };
                let marker = if idx == self.selected && !self.hex_entry {
                    "▸"
                } else {
                    " "
                };
                spans.push(Span::styled(marker, Style::default().fg(Color::White)));
                spans.push(Span::styled(
                    "  ",
                    Style::default().bg(Self::swatch_color(hex)),
                ));
                spans.push(Span::raw(" "));
            }
            frame.render_widget(Paragraph::new(Line::from(spans)), rows[2 + row]);
        }

        // Hex entry line
        let hex_line = if self.hex_entry {
            Line::from(vec![
                Span::styled("Hex: #", Style::default().fg(Color::Cyan)),
                Span::styled(
                    self.hex_buffer.clone(),
                    Style::default().fg(Color::White).bg(Color::DarkGray),
                ),
                Span::styled("▏", Style::default().fg(Color::White)),
            ])
        } else {
            Line::from(Span::styled(
                "Enter: apply   #: type hex   Esc: close",
                Style::default().fg(Color::DarkGray).add_modifier(Modifier::DIM),
            ))
        };
        frame.render_widget(Paragraph::new(hex_line), rows[rows.len() - 1]);
    }

    fn query(&self, attr: Attribute) -> Option<AttrValue> {
        self.props.get(attr)
    }

    fn attr(&mut self, attr: Attribute, value: AttrValue) {
        self.props.set(attr, value);
    }

    fn state(&self) -> State {
        State::One(StateValue::String(self.current.clone()))
    }

    fn perform(&mut self, cmd: Cmd) -> CmdResult {
        match cmd {
            Cmd::Move(CmdDirection::Left) => {
                self.grid_move(-1);
                CmdResult::Changed(self.state())
            }
            Cmd::Move(CmdDirection::Right) => {
                self.grid_move(1);
                CmdResult::Changed(self.state())
            }
            Cmd::Move(CmdDirection::Up) => {
                self.grid_move(-(GRID_COLS as isize));
                CmdResult::Changed(self.state())
            }
            Cmd::Move(CmdDirection::Down) => {
                self.grid_move(GRID_COLS as isize);
                CmdResult::Changed(self.state())
            }
            _ => CmdResult::None,
        }
    }
}

impl Component<Msg, UserEvent> for Picker {
    fn on(&mut self, ev: Event<UserEvent>) -> Option<Msg> {
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

        // Hex entry intercepts raw keys before the dispatcher
        if self.hex_entry {
            match key_event.code {
                Key::Enter => return self.confirm_hex(),
                Key::Esc => {
                    self.hex_entry = false;
                    self.hex_buffer.clear();
                    return None;
                }
                Key::Backspace => {
                    self.hex_buffer.pop();
                    return None;
                }
                Key::Char(c) => {
                    if c.is_ascii_hexdigit() && self.hex_buffer.len() < 6 {
                        self.hex_buffer.push(c);
                    }
                    return None;
                }
                _ => return None,
            }
        }

        match key_event.code {
            Key::Char('#') => {
                self.hex_entry = true;
                self.hex_buffer.clear();
                return None;
            }
            Key::Esc => return Some(Msg::PickerClosed),
            _ => {}
        }

        let action = dispatcher().dispatch(&key_event)?;

        if let Some(msg) = handle_global_app_events(&action) {
            return Some(msg);
        }

        match action {
            AppAction::Tui(TuiEvent::Navigation(NavigationEvent::Left)) => {
                self.perform(Cmd::Move(CmdDirection::Left));
                None
            }
            AppAction::Tui(TuiEvent::Navigation(NavigationEvent::Right)) => {
                self.perform(Cmd::Move(CmdDirection::Right));
                None
            }
            AppAction::Tui(TuiEvent::Navigation(NavigationEvent::Up)) => {
                self.perform(Cmd::Move(CmdDirection::Up));
                None
            }
            AppAction::Tui(TuiEvent::Navigation(NavigationEvent::Down)) => {
                self.perform(Cmd::Move(CmdDirection::Down));
                None
            }
            AppAction::Tui(TuiEvent::Input(InputEvent::Confirm)) => self.apply_selected(),
            _ => None,
        }
    }
}
