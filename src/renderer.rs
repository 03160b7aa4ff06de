use crate::entities::GameState;
use crate::hud::Hud;
use crate::world::World;
use glam::Vec2;
use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style, Stylize},
    symbols::Marker,
    text::{Line, Span},
    widgets::{
        Block, Borders, Clear, Paragraph,
        canvas::{Canvas, Circle, Line as CanvasLine},
    },
};

/// Rows reserved for the bars and counters above the playfield
const HUD_HEIGHT: u16 = 2;
/// Terminal cells the full health bar spans
const BAR_CELLS: u16 = 20;

/// View struct that holds all game state needed for rendering
pub struct RenderView<'a> {
    pub world: &'a World,
    pub hud: &'a Hud,
    pub area: Rect,
    pub fps: u32,
}

/// Where the world is drawn inside the terminal, and how cells map back to it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    /// Inner playfield area, borders excluded
    pub playfield: Rect,
    pub world_width: f32,
    pub world_height: f32,
}

impl Viewport {
    /// Splits the terminal area into HUD rows, the bordered playfield and the
    /// controls line.
    pub fn new(area: Rect, world_width: f32, world_height: f32) -> Self {
        let framed = framed_playfield(area);
        Self {
            playfield: Block::default().borders(Borders::ALL).inner(framed),
            world_width,
            world_height,
        }
    }

    /// Maps a terminal cell to the world point at its centre. Cells outside
    /// the playfield map to nothing.
    pub fn to_world(&self, column: u16, row: u16) -> Option<Vec2> {
        let area = self.playfield;
        if area.width == 0
            || area.height == 0
            || column < area.x
            || row < area.y
            || column >= area.x + area.width
            || row >= area.y + area.height
        {
            return None;
        }

        let fx = ((column - area.x) as f32 + 0.5) / area.width as f32;
        let fy = ((row - area.y) as f32 + 0.5) / area.height as f32;
        Some(Vec2::new(fx * self.world_width, fy * self.world_height))
    }
}

fn framed_playfield(area: Rect) -> Rect {
    Rect {
        x: area.x,
        y: area.y + HUD_HEIGHT.min(area.height),
        width: area.width,
        height: area.height.saturating_sub(HUD_HEIGHT + 1),
    }
}

/// Handles all rendering responsibilities for the game
#[derive(Default)]
pub struct GameRenderer {}

impl GameRenderer {
    pub fn new() -> Self {
        Self {}
    }

    /// Main render method: scene and HUD, then any state overlay
    pub fn render(&self, frame: &mut Frame, view: &RenderView) {
        self.render_game(frame, view);
        if view.world.state == GameState::Paused {
            self.render_paused(frame, view);
        }
        if view.hud.game_over_visible {
            self.render_game_over(frame, view);
        }
    }

    /// Renders the playfield, the HUD rows and the controls hint
    fn render_game(&self, frame: &mut Frame, view: &RenderView) {
        let area = view.area;
        let world = view.world;
        let (width, height) = (
            world.config.world_width as f64,
            world.config.world_height as f64,
        );
        // Canvas y grows upward, world y grows downward
        let flip = |y: f32| height - y as f64;

        let playfield = Canvas::default()
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::DarkGray)),
            )
            .marker(Marker::Braille)
            .background_color(Color::Black)
            .x_bounds([0.0, width])
            .y_bounds([0.0, height])
            .paint(|ctx| {
                for enemy in &world.enemies {
                    ctx.draw(&Circle {
                        x: enemy.pos.x as f64,
                        y: flip(enemy.pos.y),
                        radius: enemy.radius as f64,
                        color: Color::Red,
                    });
                }

                for projectile in &world.projectiles {
                    ctx.draw(&Circle {
                        x: projectile.pos.x as f64,
                        y: flip(projectile.pos.y),
                        radius: projectile.radius as f64,
                        color: Color::Blue,
                    });
                }

                ctx.draw(&Circle {
                    x: world.player.pos.x as f64,
                    y: flip(world.player.pos.y),
                    radius: world.player.radius as f64,
                    color: Color::White,
                });

                ctx.draw(&CanvasLine::new(
                    world.aim.origin.x as f64,
                    flip(world.aim.origin.y),
                    world.aim.end.x as f64,
                    flip(world.aim.end.y),
                    Color::Red,
                ));
            });

        frame.render_widget(playfield, framed_playfield(area));

        // Health bar row
        let hud = view.hud;
        let health_cells = hud.cells(hud.health_bar_width, BAR_CELLS);
        let overheal_cells = hud.cells(hud.overheal_bar_width, BAR_CELLS);
        let empty_cells = BAR_CELLS.saturating_sub(health_cells);

        let health_line = Line::from(vec![
            Span::styled("HP ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                "█".repeat(health_cells as usize),
                Style::default().fg(Color::Red),
            ),
            Span::styled(
                "█".repeat(overheal_cells as usize),
                Style::default().fg(Color::Yellow),
            ),
            Span::styled(
                "░".repeat(empty_cells as usize),
                Style::default().fg(Color::DarkGray),
            ),
            Span::raw(" "),
            Span::styled(
                hud.health_text.clone(),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
        ]);

        let stats_line = Line::from(vec![
            Span::styled(
                hud.money_text.clone(),
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled("  Enemies: ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                format!("{}", world.enemies.len()),
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled("  FPS: ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                format!("{}", view.fps),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
        ]);

        let hud_area = Rect {
            x: area.x + 1,
            y: area.y,
            width: area.width.saturating_sub(2),
            height: HUD_HEIGHT.min(area.height),
        };
        frame.render_widget(Paragraph::new(vec![health_line, stats_line]), hud_area);

        // Controls hint at bottom
        let controls = Line::from(vec![Span::styled(
            "[WASD/Arrows: Move] [Mouse: Aim] [Space: Fire] [P: Pause] [Q: Quit]",
            Style::default().fg(Color::DarkGray),
        )]);

        let controls_area = Rect {
            x: area.x + 1,
            y: area.y + area.height.saturating_sub(1),
            width: area.width.saturating_sub(2),
            height: 1.min(area.height),
        };

        frame.render_widget(Paragraph::new(controls).centered(), controls_area);
    }

    /// Renders the pause box over the frozen scene
    fn render_paused(&self, frame: &mut Frame, view: &RenderView) {
        let pause_text = vec![
            Line::from(""),
            Line::from("PAUSED").centered().bold().yellow(),
            Line::from(""),
            Line::from("Press P to resume").centered().white(),
        ];

        let pause_area = centered_box(view.area, 30, 6);
        frame.render_widget(Clear, pause_area);
        frame.render_widget(
            Paragraph::new(pause_text)
                .block(
                    Block::default()
                        .borders(Borders::ALL)
                        .border_style(Style::default().fg(Color::Yellow)),
                )
                .alignment(Alignment::Center),
            pause_area,
        );
    }

    /// Renders the game over box; the world behind it is already reset
    fn render_game_over(&self, frame: &mut Frame, view: &RenderView) {
        let game_over_text = vec![
            Line::from(""),
            Line::from("Game Over").centered().white().bold(),
            Line::from(""),
            Line::from("Press R to restart").centered().white(),
            Line::from("Press Q to quit").centered().white(),
        ];

        let game_over_area = centered_box(view.area, 30, 7);
        frame.render_widget(Clear, game_over_area);
        frame.render_widget(
            Paragraph::new(game_over_text)
                .block(Block::default().borders(Borders::ALL))
                .alignment(Alignment::Center),
            game_over_area,
        );
    }
}

fn centered_box(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}
