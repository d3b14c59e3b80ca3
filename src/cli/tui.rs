use std::collections::HashMap;
use std::io::{self, Stdout, stdout};
use std::process;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use crossterm::terminal::{disable_raw_mode, enable_raw_mode};
use ratatui::Frame;
use ratatui::backend::CrosstermBackend;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap};

use crate::cli::board_display::render_board;
use crate::cli::compressed_actions::{
    CompressedActionGroup, action_detail_label, compress_actions, expand_group,
};
use crate::game::GameAction;
use crate::game::game::Game;

pub type Terminal = ratatui::Terminal<CrosstermBackend<Stdout>>;

/// Full-screen action picker: board on the left, game state and the legal
/// actions on the right. Wall placements show as collapsible groups per
/// board line.
pub struct TuiApp {
    game: Game,
    human_idx: usize,
    actions: Vec<GameAction>,
    compressed_groups: Vec<CompressedActionGroup>,
    selected_action_idx: usize,
    expanded_group: Option<usize>,
    expanded_map: HashMap<usize, usize>,
    show_help: bool,
    selected_action: Option<GameAction>,
}

impl TuiApp {
    pub fn new(game: Game, human_idx: usize, actions: Vec<GameAction>) -> Self {
        let compressed_groups = compress_actions(&actions);
        Self {
            game,
            human_idx,
            actions,
            compressed_groups,
            selected_action_idx: 0,
            expanded_group: None,
            expanded_map: HashMap::new(),
            show_help: false,
            selected_action: None,
        }
    }

    pub fn run(&mut self) -> io::Result<Option<GameAction>> {
        enable_raw_mode()?;
        let backend = CrosstermBackend::new(stdout());
        let mut terminal = Terminal::new(backend)?;
        terminal.clear()?;

        let result = loop {
            terminal.draw(|f| self.render(f))?;

            if event::poll(Duration::from_millis(50))? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press && self.handle_key(key) {
                        break Ok(self.selected_action.take());
                    }
                }
            }
        };

        let _ = terminal.clear();
        let _ = disable_raw_mode();
        let _ = terminal.show_cursor();

        result
    }

    fn handle_key(&mut self, key: KeyEvent) -> bool {
        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
                let _ = disable_raw_mode();
                process::exit(0);
            }
            KeyCode::Char('h') => {
                self.show_help = !self.show_help;
            }
            KeyCode::Up => {
                self.selected_action_idx = self.selected_action_idx.saturating_sub(1);
            }
            KeyCode::Down => {
                let max_idx = if self.expanded_group.is_some() {
                    self.expanded_map.len()
                } else {
                    self.compressed_groups.len()
                };
                if self.selected_action_idx < max_idx.saturating_sub(1) {
                    self.selected_action_idx += 1;
                }
            }
            KeyCode::Enter => {
                if self.expanded_group.is_some() {
                    if let Some(&original_idx) = self.expanded_map.get(&self.selected_action_idx) {
                        if original_idx < self.actions.len() {
                            self.selected_action = Some(self.actions[original_idx]);
                            return true;
                        }
                    }
                } else if self.selected_action_idx < self.compressed_groups.len() {
                    let group = &self.compressed_groups[self.selected_action_idx];
                    if group.actions.len() == 1 {
                        let (original_idx, _) = group.actions[0];
                        self.selected_action = Some(self.actions[original_idx]);
                        return true;
                    }
                    self.expanded_map = expand_group(group);
                    self.expanded_group = Some(self.selected_action_idx);
                    self.selected_action_idx = 0;
                }
            }
            KeyCode::Backspace | KeyCode::Left => {
                if self.expanded_group.is_some() {
                    self.expanded_group = None;
                    self.expanded_map.clear();
                    self.selected_action_idx = 0;
                }
            }
            _ => {}
        }
        false
    }

    fn render(&mut self, f: &mut Frame<'_>) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(20), Constraint::Length(3)])
            .split(f.size());

        let main_chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
            .split(chunks[0]);

        self.render_board(f, main_chunks[0]);
        self.render_right_panel(f, main_chunks[1]);
        self.render_status_bar(f, chunks[1]);
    }

    fn render_board(&self, f: &mut Frame<'_>, area: Rect) {
        let lines: Vec<Line<'_>> = render_board(&self.game.state)
            .lines()
            .map(|line| {
                let spans: Vec<Span<'_>> = line
                    .chars()
                    .map(|ch| Span::styled(ch.to_string(), board_char_style(ch)))
                    .collect();
                Line::from(spans)
            })
            .collect();

        let block = Block::default()
            .borders(Borders::ALL)
            .title("Board")
            .title_style(
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            );

        let paragraph = Paragraph::new(lines)
            .block(block)
            .alignment(Alignment::Left)
            .wrap(Wrap { trim: false });

        f.render_widget(paragraph, area);
    }

    fn render_right_panel(&mut self, f: &mut Frame<'_>, area: Rect) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(9), Constraint::Min(5)])
            .split(area);

        self.render_game_state(f, chunks[0]);
        self.render_actions(f, chunks[1]);
    }

    fn render_game_state(&self, f: &mut Frame<'_>, area: Rect) {
        let mut lines: Vec<Line<'_>> = vec![Line::from(vec![
            Span::raw("Turn "),
            Span::styled(
                self.game.turn.to_string(),
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
        ])];

        for idx in 0..2 {
            let is_current = idx == self.game.current_player;
            let marker = if is_current { "→ " } else { "  " };
            let label = if idx == self.human_idx { "YOU" } else { "BOT" };
            let color = pawn_color(idx);

            lines.push(Line::from(""));
            lines.push(Line::from(vec![
                Span::styled(marker, Style::default().fg(Color::Yellow)),
                Span::styled(
                    format!("{} (pawn {})", label, idx),
                    Style::default().fg(color).add_modifier(Modifier::BOLD),
                ),
            ]));
            lines.push(Line::from(format!(
                "  at {}, goal row {}, {} walls left",
                self.game.state.position(idx),
                self.game.state.goal_row(idx),
                self.game.state.wall_balance(idx),
            )));
        }

        let paragraph = Paragraph::new(lines)
            .block(Block::default().borders(Borders::ALL).title("Game State"))
            .wrap(Wrap { trim: false });

        f.render_widget(paragraph, area);
    }

    fn render_actions(&mut self, f: &mut Frame<'_>, area: Rect) {
        let mut items: Vec<ListItem<'_>> = vec![];

        if let Some(expanded_idx) = self.expanded_group {
            let group = &self.compressed_groups[expanded_idx];
            for (exp_idx, (_, action)) in group.actions.iter().enumerate() {
                let style = if exp_idx == self.selected_action_idx {
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD)
                } else {
                    Style::default()
                };
                items.push(ListItem::new(format!("  {}", action_detail_label(action))).style(style));
            }
        } else {
            for (idx, group) in self.compressed_groups.iter().enumerate() {
                let style = if idx == self.selected_action_idx {
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD)
                } else {
                    Style::default()
                };
                let text = if group.actions.len() == 1 {
                    group.description.clone()
                } else {
                    format!("{} ({} options)", group.description, group.actions.len())
                };
                items.push(ListItem::new(text).style(style));
            }
        }

        let title = if self.expanded_group.is_some() {
            "Available Actions (expanded)"
        } else {
            "Available Actions"
        };

        let list = List::new(items)
            .block(Block::default().borders(Borders::ALL).title(title))
            .highlight_style(
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            );

        let mut state = ListState::default();
        state.select(Some(self.selected_action_idx));
        f.render_stateful_widget(list, area, &mut state);
    }

    fn render_status_bar(&self, f: &mut Frame<'_>, area: Rect) {
        let help_text = if self.show_help {
            "↑/↓: Navigate | Enter: Select/Expand | ←/Backspace: Back | h: Toggle Help | q/Esc: Quit"
        } else {
            "Press 'h' for help"
        };

        let paragraph = Paragraph::new(help_text)
            .block(Block::default().borders(Borders::ALL))
            .style(Style::default().fg(Color::White))
            .alignment(Alignment::Center);

        f.render_widget(paragraph, area);
    }
}

fn board_char_style(ch: char) -> Style {
    match ch {
        '0' => Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        '1' => Style::default()
            .fg(Color::Blue)
            .add_modifier(Modifier::BOLD),
        '|' | '-' => Style::default().fg(Color::Yellow),
        _ => Style::default(),
    }
}

fn pawn_color(idx: usize) -> Color {
    if idx == 0 { Color::Red } else { Color::Blue }
}
