use sdl2::{render::TextureValueError, video::WindowBuildError, IntegerOrSdlError};

/// Failures while setting up or talking to the window system.
///
/// None of these can be recovered from, they end the session.
#[derive(Debug, thiserror::Error)]
pub enum ChromeError {
    #[error("SDL error: {0}")]
    Sdl(String),

    #[error("Failed to create application window: {0}")]
    Window(#[from] WindowBuildError),

    #[error("Failed to create renderer: {0}")]
    Renderer(#[from] IntegerOrSdlError),

    #[error("Failed to create texture: {0}")]
    Texture(#[from] TextureValueError),
}
