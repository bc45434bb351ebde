use eframe::egui;
use engine::board::BOARD_SIZE;
use engine::game_state::GameState;
use engine::types::{Mark, Position};

pub struct BoardView {
    last_hover: Option<Position>,
}

impl BoardView {
    const MIN_CELL_SIZE: f32 = 40.0;
    const MAX_CELL_SIZE: f32 = 160.0;
    const GRID_LINE_WIDTH: f32 = 2.0;
    const MARK_STROKE_WIDTH: f32 = 5.0;
    const WIN_LINE_WIDTH: f32 = 6.0;

    const BACKGROUND: egui::Color32 = egui::Color32::from_rgb(245, 245, 245);
    const GRID: egui::Color32 = egui::Color32::from_rgb(30, 30, 30);
    const X_COLOR: egui::Color32 = egui::Color32::from_rgb(220, 50, 50);
    const O_COLOR: egui::Color32 = egui::Color32::from_rgb(50, 50, 220);
    const WIN_LINE: egui::Color32 = egui::Color32::from_rgb(220, 70, 70);

    pub fn new() -> Self {
        Self { last_hover: None }
    }

    fn calculate_cell_size(available_width: f32, available_height: f32) -> f32 {
        let cell_size = (available_width.min(available_height)) / BOARD_SIZE as f32;
        cell_size.clamp(Self::MIN_CELL_SIZE, Self::MAX_CELL_SIZE)
    }

    /// Paints the board and returns the empty cell that was clicked,
    /// if any. `interactive` gates the hover highlight and clicks; the
    /// shell passes false while the computer is to move or the game is
    /// over.
    pub fn show(
        &mut self,
        ui: &mut egui::Ui,
        game: &GameState,
        interactive: bool,
    ) -> Option<Position> {
        let cell_size = Self::calculate_cell_size(ui.available_width(), ui.available_height());
        let board_span = cell_size * BOARD_SIZE as f32;

        let (rect, response) =
            ui.allocate_exact_size(egui::vec2(board_span, board_span), egui::Sense::click());

        let painter = ui.painter();

        painter.rect_filled(rect, 0.0, Self::BACKGROUND);

        for i in 0..=BOARD_SIZE {
            let x = rect.left() + i as f32 * cell_size;
            painter.line_segment(
                [egui::pos2(x, rect.top()), egui::pos2(x, rect.bottom())],
                egui::Stroke::new(Self::GRID_LINE_WIDTH, Self::GRID),
            );

            let y = rect.top() + i as f32 * cell_size;
            painter.line_segment(
                [egui::pos2(rect.left(), y), egui::pos2(rect.right(), y)],
                egui::Stroke::new(Self::GRID_LINE_WIDTH, Self::GRID),
            );
        }

        for row in 0..BOARD_SIZE {
            for col in 0..BOARD_SIZE {
                let cell_rect = Self::cell_rect(rect, cell_size, Position::new(row, col));
                match game.board.get(Position::new(row, col)) {
                    Some(Mark::X) => Self::draw_x(painter, cell_rect),
                    Some(Mark::O) => Self::draw_o(painter, cell_rect),
                    None => {}
                }
            }
        }

        let mut clicked = None;

        if interactive {
            self.last_hover = response
                .hover_pos()
                .and_then(|pos| Self::cell_at(rect, cell_size, pos))
                .filter(|&pos| game.board.get(pos).is_none());

            if let Some(hover) = self.last_hover {
                painter.rect_filled(
                    Self::cell_rect(rect, cell_size, hover),
                    0.0,
                    egui::Color32::from_rgba_unmultiplied(100, 150, 255, 50),
                );
            }

            if response.clicked() {
                clicked = self.last_hover;
            }
        } else {
            self.last_hover = None;
        }

        if let Some(line) = game.winning_line() {
            painter.line_segment(
                [
                    Self::cell_center(rect, cell_size, line.start),
                    Self::cell_center(rect, cell_size, line.end),
                ],
                egui::Stroke::new(Self::WIN_LINE_WIDTH, Self::WIN_LINE),
            );
        }

        clicked
    }

    fn cell_at(rect: egui::Rect, cell_size: f32, pointer: egui::Pos2) -> Option<Position> {
        if !rect.contains(pointer) {
            return None;
        }
        let col = ((pointer.x - rect.left()) / cell_size) as usize;
        let row = ((pointer.y - rect.top()) / cell_size) as usize;
        if row < BOARD_SIZE && col < BOARD_SIZE {
            Some(Position::new(row, col))
        } else {
            None
        }
    }

    fn cell_rect(rect: egui::Rect, cell_size: f32, pos: Position) -> egui::Rect {
        egui::Rect::from_min_size(
            egui::pos2(
                rect.left() + pos.col as f32 * cell_size,
                rect.top() + pos.row as f32 * cell_size,
            ),
            egui::vec2(cell_size, cell_size),
        )
    }

    fn cell_center(rect: egui::Rect, cell_size: f32, pos: Position) -> egui::Pos2 {
        egui::pos2(
            rect.left() + (pos.col as f32 + 0.5) * cell_size,
            rect.top() + (pos.row as f32 + 0.5) * cell_size,
        )
    }

    fn draw_x(painter: &egui::Painter, rect: egui::Rect) {
        let padding = rect.width() * 0.25;
        let stroke = egui::Stroke::new(Self::MARK_STROKE_WIDTH, Self::X_COLOR);

        painter.line_segment(
            [
                egui::pos2(rect.left() + padding, rect.top() + padding),
                egui::pos2(rect.right() - padding, rect.bottom() - padding),
            ],
            stroke,
        );

        painter.line_segment(
            [
                egui::pos2(rect.right() - padding, rect.top() + padding),
                egui::pos2(rect.left() + padding, rect.bottom() - padding),
            ],
            stroke,
        );
    }

    fn draw_o(painter: &egui::Painter, rect: egui::Rect) {
        let padding = rect.width() * 0.25;
        let radius = (rect.width() / 2.0) - padding;
        let stroke = egui::Stroke::new(Self::MARK_STROKE_WIDTH, Self::O_COLOR);

        painter.circle_stroke(rect.center(), radius, stroke);
    }
}
