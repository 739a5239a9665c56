use eframe::egui::{Align2, Context, Key, Window};

/// A modal "Error" window, the field should ignore input while it's open.
#[derive(Debug, Default)]
pub struct ErrorDialog {
    message: Option<String>,
}

impl ErrorDialog {
    pub fn report(&mut self, err: &dyn std::error::Error) {
        _log::warn!("{}", err);
        self.message = Some(err.to_string());
    }

    pub fn is_open(&self) -> bool {
        self.message.is_some()
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn close(&mut self) {
        self.message = None;
    }

    pub fn show(&mut self, ctx: &Context) {
        let Some(message) = &self.message else {
            return;
        };

        let mut ok = ctx.input(|i| i.key_pressed(Key::Enter) || i.key_pressed(Key::Escape));
        Window::new("Error")
            .collapsible(false)
            .resizable(false)
            .anchor(Align2::CENTER_CENTER, [0.0, 0.0])
            .show(ctx, |ui| {
                ui.label(message.as_str());
                ui.vertical_centered(|ui| {
                    if ui.button("OK").clicked() {
                        ok = true;
                    }
                });
            });

        if ok {
            self.close();
        }
    }
}
