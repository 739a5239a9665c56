use anyhow::Result;
use canvas::{
    egui::{self, Key, PointerButton, Sense},
    event, paint, Config, ContextBuilder, ErrorDialog, EventHandler, Program,
};
use figures::{Clicked, Growth};
use glam::Vec2;

struct App {
    field: Growth,
    size: f32,
    dialog: ErrorDialog,
}

impl App {
    fn new(config: &Config) -> Self {
        Self {
            field: Growth::new(config.radius),
            size: config.field_size,
            dialog: ErrorDialog::default(),
        }
    }

    fn field_ui(&mut self, ui: &mut egui::Ui) {
        let (response, painter) =
            ui.allocate_painter(egui::vec2(self.size, self.size), Sense::click());
        if !self.dialog.is_open() {
            event::dispatch(ui, response.rect, self);
        }
        paint::field(&painter, response.rect, self.field.figures());
    }
}

impl EventHandler for App {
    fn key_down(&mut self, key: Key) {
        if key == Key::Delete {
            if let Err(e) = self.field.clear() {
                self.dialog.report(&e);
            }
        }
    }

    fn mouse_down(&mut self, button: PointerButton, pos: Vec2) {
        if button != PointerButton::Primary {
            return;
        }
        match self.field.click(pos) {
            Clicked::Created(i) => log::info!("new triangle {}", i),
            Clicked::Grown(i) => log::info!("figure {} grew", i),
        }
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default()
            .frame(egui::Frame::none())
            .show(ctx, |ui| self.field_ui(ui));
        self.dialog.show(ctx);
    }
}

fn main() -> Result<()> {
    canvas::log::init();

    let config = Config::from_env(Program::Growth)?;
    if config.help {
        print!("{}", Program::Growth.usage());
        return Ok(());
    }

    ContextBuilder::new()
        .title("Growth")
        .width(config.field_size)
        .height(config.field_size)
        .run(move |_cc| App::new(&config))
        .map_err(|e| {
            log::error!("{}", e);
            anyhow::Error::from(e)
        })
}
