use math::{Bitmap, Color};
use sdl2::{
    event::{Event, WindowEvent},
    keyboard::Keycode,
    pixels::PixelFormatEnum,
    render::{Texture, WindowCanvas},
};
use session::{Session, HEIGHT, WIDTH};
use settings::Settings;

use super::{keys::command_for_key, ChromeError, WINDOW_TITLE};

/// Size of one `ARGB8888` pixel, in bytes
const BYTES_PER_PIXEL: usize = 4;

/// Open the window and process input until the user closes it
pub fn run(settings: Settings) -> Result<(), ChromeError> {
    let sdl_context = sdl2::init().map_err(ChromeError::Sdl)?;
    let video_subsystem = sdl_context.video().map_err(ChromeError::Sdl)?;

    let window = video_subsystem
        .window(WINDOW_TITLE, WIDTH, HEIGHT)
        .position_centered()
        .build()?;

    let mut canvas = window.into_canvas().accelerated().build()?;
    let texture_creator = canvas.texture_creator();
    let mut texture =
        texture_creator.create_texture_streaming(PixelFormatEnum::ARGB8888, WIDTH, HEIGHT)?;

    // Everything is drawn here first, the window only ever shows a copy.
    // That way, drawings accumulate across frames.
    let mut view_buffer: Bitmap<Color> = Bitmap::new(WIDTH as usize, HEIGHT as usize);
    let mut session = Session::new(settings);

    session.draw_welcome_scene(&mut view_buffer);
    present(&mut canvas, &mut texture, &view_buffer)?;

    let mut event_pump = sdl_context.event_pump().map_err(ChromeError::Sdl)?;
    loop {
        match event_pump.wait_event() {
            Event::Quit { .. }
            | Event::KeyDown {
                keycode: Some(Keycode::Escape),
                ..
            } => break,
            // Every key press refreshes the window, even if it maps to no command
            Event::KeyDown { keycode, keymod, .. } => {
                let command = keycode.and_then(|keycode| command_for_key(keycode, keymod));
                if let Some(command) = command {
                    session.execute(command, &mut view_buffer);
                }
                present(&mut canvas, &mut texture, &view_buffer)?;
            },
            Event::Window {
                win_event: WindowEvent::Exposed,
                ..
            } => present(&mut canvas, &mut texture, &view_buffer)?,
            _ => {},
        }
    }

    log::info!("Window closed after drawing {} lines", session.lines().len());
    Ok(())
}

/// Upload the view buffer to the window
fn present(
    canvas: &mut WindowCanvas,
    texture: &mut Texture<'_>,
    view_buffer: &Bitmap<Color>,
) -> Result<(), ChromeError> {
    texture
        .with_lock(None, |buffer, pitch| {
            let rows = view_buffer.data().chunks_exact(view_buffer.width());
            for (row, pixels) in rows.enumerate() {
                let line = &mut buffer[row * pitch..][..pixels.len() * BYTES_PER_PIXEL];
                for (bytes, pixel) in line.chunks_exact_mut(BYTES_PER_PIXEL).zip(pixels) {
                    bytes.copy_from_slice(&pixel.to_argb().to_ne_bytes());
                }
            }
        })
        .map_err(ChromeError::Sdl)?;

    canvas.copy(texture, None, None).map_err(ChromeError::Sdl)?;
    canvas.present();
    Ok(())
}
