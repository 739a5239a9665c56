use eframe::{egui, App, CreationContext, NativeOptions};

use crate::appearance;

/// Builds the window everything else lives in.
pub struct ContextBuilder {
    title: String,
    width: f32,
    height: f32,
    resizable: bool,
}

impl ContextBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn width(mut self, width: f32) -> Self {
        self.width = width;
        self
    }

    pub fn height(mut self, height: f32) -> Self {
        self.height = height;
        self
    }

    pub fn resizable(mut self, resizable: bool) -> Self {
        self.resizable = resizable;
        self
    }

    pub fn build(&self) -> Result<NativeOptions, BuildError> {
        if !(self.width > 0.0 && self.height > 0.0) {
            return Err(BuildError::Size {
                width: self.width,
                height: self.height,
            });
        }
        let viewport = egui::ViewportBuilder::default()
            .with_title(self.title.clone())
            .with_inner_size([self.width, self.height])
            .with_resizable(self.resizable);
        Ok(NativeOptions {
            viewport,
            ..Default::default()
        })
    }

    /// Opens the window and runs `create`d app until it closes.
    pub fn run<A, F>(self, create: F) -> Result<(), BuildError>
    where
        A: App + 'static,
        F: FnOnce(&CreationContext<'_>) -> A + 'static,
    {
        let options = self.build()?;
        _log::info!("opening {} ({}x{})", self.title, self.width, self.height);
        eframe::run_native(
            &self.title,
            options,
            Box::new(move |cc: &CreationContext<'_>| -> Box<dyn App> {
                cc.egui_ctx.set_style(appearance::style());
                Box::new(create(cc))
            }),
        )
        .map_err(|e| BuildError::Start(e.to_string()))
    }
}

impl Default for ContextBuilder {
    fn default() -> Self {
        Self {
            title: String::from("Figures"),
            width: 600.0,
            height: 600.0,
            resizable: false,
        }
    }
}

#[derive(thiserror::Error, Debug)]
pub enum BuildError {
    #[error("window size must be positive, got {width}x{height}")]
    Size { width: f32, height: f32 },
    #[error("couldn't parse arguments")]
    Args(#[from] pico_args::Error),
    #[error("unexpected arguments {0:?}")]
    Unexpected(Vec<std::ffi::OsString>),
    #[error("--{0} must be positive")]
    NotPositive(&'static str),
    #[error("failed to start: {0}")]
    Start(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_window_is_rejected() {
        let err = ContextBuilder::new().width(0.0).build().err();
        assert!(matches!(err, Some(BuildError::Size { width, .. }) if width == 0.0));
        assert!(ContextBuilder::new().height(f32::NAN).build().is_err());
    }

    #[test]
    fn builds_fixed_size_window() {
        let options = ContextBuilder::new()
            .title("Test")
            .width(820.0)
            .height(700.0)
            .build()
            .unwrap();
        assert_eq!(options.viewport.title.as_deref(), Some("Test"));
        assert_eq!(options.viewport.inner_size, Some(egui::vec2(820.0, 700.0)));
        assert_eq!(options.viewport.resizable, Some(false));
    }
}
