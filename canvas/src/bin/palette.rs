use anyhow::Result;
use canvas::{
    appearance,
    egui::{self, Color32, CursorIcon, Key, PointerButton, RichText, Sense, Stroke},
    event, paint, Config, ContextBuilder, ErrorDialog, EventHandler, Program,
};
use figures::{consts::palette::ITEM_SIZE, Board, Figure, FigureKind, Pressed};
use glam::Vec2;

/// Room around the field and the palette.
const MARGIN: f32 = 20.0;
const BUTTONS_HEIGHT: f32 = 60.0;

struct App {
    board: Board,
    thumbnails: Vec<(FigureKind, Figure)>,
    size: f32,
    dialog: ErrorDialog,
}

impl App {
    fn new(config: &Config) -> Self {
        let center = Vec2::new(ITEM_SIZE / 2.0, ITEM_SIZE / 2.0 + 5.0);
        let thumbnails = FigureKind::ALL
            .iter()
            .map(|&kind| (kind, Figure::of_kind(kind, center, ITEM_SIZE / 2.0 - 10.0)))
            .collect();
        Self {
            board: Board::new(config.radius, config.max_figures),
            thumbnails,
            size: config.field_size,
            dialog: ErrorDialog::default(),
        }
    }

    fn delete_selected(&mut self) {
        match self.board.delete_selected() {
            Ok(figure) => log::info!("deleted a figure with {} angles", figure.angles()),
            Err(e) => self.dialog.report(&e),
        }
    }

    fn palette_ui(&mut self, ui: &mut egui::Ui) {
        for (kind, thumbnail) in &self.thumbnails {
            let (response, painter) =
                ui.allocate_painter(egui::vec2(ITEM_SIZE, ITEM_SIZE), Sense::click());
            let rect = response.rect;
            painter.rect_filled(rect, 0.0, paint::BACKGROUND);
            paint::figure(&painter, rect.min, thumbnail);
            if self.board.armed() == Some(*kind) {
                painter.rect_stroke(rect.shrink(1.0), 0.0, Stroke::new(2.0, Color32::BLACK));
            }
            if response.clicked() {
                self.board.arm(*kind);
            }
        }
    }

    fn buttons_ui(&mut self, ui: &mut egui::Ui) {
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            let exit = egui::Button::new(RichText::new("Exit"))
                .fill(paint::FILL)
                .min_size(appearance::button_size());
            if ui.add(exit).clicked() {
                log::info!("exit");
                ui.ctx().send_viewport_cmd(egui::ViewportCommand::Close);
            }
            let delete = egui::Button::new("Delete").min_size(appearance::button_size());
            if ui.add(delete).clicked() {
                self.delete_selected();
            }
        });
    }

    fn field_ui(&mut self, ui: &mut egui::Ui) {
        let (response, painter) =
            ui.allocate_painter(egui::vec2(self.size, self.size), Sense::click_and_drag());
        if !self.dialog.is_open() {
            event::dispatch(ui, response.rect, self);
        }
        paint::field(&painter, response.rect, self.board.figures());

        if self.board.selected().is_some_and(Figure::is_tracking) {
            let icon = if self.board.is_held() {
                CursorIcon::Grabbing
            } else {
                CursorIcon::Move
            };
            ui.ctx().output_mut(|o| o.cursor_icon = icon);
        }
    }
}

impl EventHandler for App {
    fn key_down(&mut self, key: Key) {
        if key == Key::Delete {
            self.delete_selected();
        }
    }

    fn mouse_down(&mut self, button: PointerButton, pos: Vec2) {
        match button {
            PointerButton::Primary => match self.board.press(pos) {
                Ok(Pressed::Placed(i)) => log::info!("placed figure {}", i),
                Ok(Pressed::Selected(i)) => log::info!("selected {:?}", i),
                Err(e) => self.dialog.report(&e),
            },
            PointerButton::Secondary => self.board.deselect(),
            _ => (),
        }
    }

    fn mouse_up(&mut self, button: PointerButton, _pos: Vec2) {
        if button == PointerButton::Primary {
            self.board.release();
        }
    }

    fn mouse_moved(&mut self, pos: Vec2) {
        self.board.motion(pos);
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let enabled = !self.dialog.is_open();

        egui::SidePanel::left("palette")
            .resizable(false)
            .show(ctx, |ui| {
                ui.add_enabled_ui(enabled, |ui| self.palette_ui(ui));
            });
        egui::TopBottomPanel::bottom("buttons")
            .resizable(false)
            .exact_height(BUTTONS_HEIGHT)
            .show(ctx, |ui| {
                ui.add_enabled_ui(enabled, |ui| self.buttons_ui(ui));
            });
        egui::CentralPanel::default().show(ctx, |ui| self.field_ui(ui));

        self.dialog.show(ctx);
    }
}

fn main() -> Result<()> {
    canvas::log::init();

    let config = Config::from_env(Program::Palette)?;
    if config.help {
        print!("{}", Program::Palette.usage());
        return Ok(());
    }

    let palette_height = FigureKind::ALL.len() as f32 * (ITEM_SIZE + MARGIN);
    ContextBuilder::new()
        .title("Application")
        .width(ITEM_SIZE + config.field_size + 3.0 * MARGIN)
        .height(palette_height.max(config.field_size + BUTTONS_HEIGHT + MARGIN))
        .run(move |_cc| App::new(&config))
        .map_err(|e| {
            log::error!("{}", e);
            anyhow::Error::from(e)
        })
}
