//! The interactive drawing session, independent of any windowing system
//!
//! A [Session] turns [Commands](Command) into calls to the rasterizer and keeps
//! track of every line drawn so far.

mod command;

pub use command::Command;

use math::{Color, Point};
use random::RNG;
use raster::{draw_line, draw_marker, Algorithm, LineSegment, LineStore, Surface};
use settings::Settings;

/// Canvas width, in pixels
pub const WIDTH: u32 = 800;

/// Canvas height, in pixels
pub const HEIGHT: u32 = 600;

pub const BACKGROUND_COLOR: Color = Color::BLACK;
pub const STAR_COLOR: Color = Color::WHITE;
pub const MARKER_COLOR: Color = Color::YELLOW;

/// The line shown on startup, before any command was issued
const WELCOME_LINE: (Point, Point) = (Point::new(100, 100), Point::new(499, 400));

pub struct Session {
    settings: Settings,
    rng: RNG,
    lines: LineStore,
}

impl Session {
    #[must_use]
    pub fn new(settings: Settings) -> Self {
        let rng = settings.seed.map_or_else(RNG::from_time, RNG::with_seed);

        Self {
            settings,
            rng,
            lines: LineStore::new(),
        }
    }

    #[must_use]
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Every line drawn since the last reset
    #[must_use]
    pub fn lines(&self) -> &LineStore {
        &self.lines
    }

    pub fn execute<S: Surface + ?Sized>(&mut self, command: Command, surface: &mut S) {
        log::info!("Executing {command:?}");

        match command {
            Command::DrawRandomLine(color) => {
                self.draw_random_line(color, surface);
            },
            Command::Reset => self.reset(surface),
            Command::Replay => self.replay(surface),
            Command::ReplayRecorded => self.replay_recorded(surface),
        }
    }

    /// Clear the surface and draw the startup picture.
    ///
    /// The line drawn here is not recorded.
    pub fn draw_welcome_scene<S: Surface + ?Sized>(&self, surface: &mut S) {
        let (from, to) = WELCOME_LINE;

        surface.clear(BACKGROUND_COLOR);
        draw_line(
            surface,
            Algorithm::IncrementalError,
            from,
            to,
            Color::WHITE,
        );
        draw_marker(surface, from, self.settings.marker_size, MARKER_COLOR);
        draw_marker(surface, to, self.settings.marker_size, MARKER_COLOR);
    }

    /// Draw a line between two random points on the canvas, mark its endpoints and record it
    pub fn draw_random_line<S: Surface + ?Sized>(
        &mut self,
        color: Color,
        surface: &mut S,
    ) -> LineSegment {
        let from = self.random_point();
        let to = self.random_point();
        let line = LineSegment::new(from, to, color).with_algorithm(self.settings.algorithm);

        log::debug!(
            "Drawing {} line from {from:?} to {to:?}",
            line.algorithm()
        );

        line.draw(surface);
        draw_marker(surface, from, self.settings.marker_size, MARKER_COLOR);
        draw_marker(surface, to, self.settings.marker_size, MARKER_COLOR);

        self.lines.append(line);
        line
    }

    /// Replace everything on the surface with a starfield and forget all lines
    pub fn reset<S: Surface + ?Sized>(&mut self, surface: &mut S) {
        surface.clear(BACKGROUND_COLOR);

        for _ in 0..self.settings.star_count {
            let star = self.random_point();
            surface.set_pixel(star.x, star.y, STAR_COLOR);
        }

        self.lines.clear();
    }

    /// Draw all recorded lines again
    pub fn replay<S: Surface + ?Sized>(&self, surface: &mut S) {
        self.lines.replay(surface);
    }

    /// Draw all recorded lines again, each with its own algorithm
    pub fn replay_recorded<S: Surface + ?Sized>(&self, surface: &mut S) {
        self.lines.replay_recorded(surface);
    }

    fn random_point(&mut self) -> Point {
        let x = self.rng.next_below(WIDTH);
        let y = self.rng.next_below(HEIGHT);

        Point::new(x as i32, y as i32)
    }
}

#[cfg(test)]
mod tests {
    use super::{Session, HEIGHT, MARKER_COLOR, WIDTH};
    use math::{Bitmap, Color, Point};
    use raster::{Algorithm, IncrementalErrorLine};
    use settings::Settings;

    fn seeded(seed: u64) -> Session {
        Session::new(Settings {
            seed: Some(seed),
            ..Settings::default()
        })
    }

    fn canvas() -> Bitmap<Color> {
        Bitmap::new(WIDTH as usize, HEIGHT as usize)
    }

    #[test]
    fn random_lines_stay_on_the_canvas() {
        let mut session = seeded(3);
        let mut canvas = canvas();

        for _ in 0..200 {
            let line = session.draw_random_line(Color::GREEN, &mut canvas);
            for point in [line.from(), line.to()] {
                assert!(canvas.contains_point(point.x, point.y), "{point:?}");
            }
        }
        assert_eq!(session.lines().len(), 200);
    }

    #[test]
    fn random_line_is_drawn_and_marked() {
        let mut session = seeded(11);
        let mut canvas = canvas();
        let line = session.draw_random_line(Color::RED, &mut canvas);

        assert_eq!(line.algorithm(), Algorithm::IncrementalError);
        for point in [line.from(), line.to()] {
            assert_eq!(
                canvas.get_pixel(point.x as usize, point.y as usize),
                MARKER_COLOR
            );
        }
        assert_eq!(session.lines().iter().next(), Some(&line));
    }

    #[test]
    fn configured_algorithm_is_recorded() {
        let mut session = Session::new(Settings {
            seed: Some(5),
            algorithm: Algorithm::Parametric,
            ..Settings::default()
        });
        let line = session.draw_random_line(Color::BLUE, &mut canvas());
        assert_eq!(line.algorithm(), Algorithm::Parametric);
    }

    #[test]
    fn same_seed_same_lines() {
        let mut first = seeded(1234);
        let mut second = seeded(1234);

        for _ in 0..10 {
            assert_eq!(
                first.draw_random_line(Color::RED, &mut canvas()),
                second.draw_random_line(Color::RED, &mut canvas())
            );
        }
    }

    #[test]
    fn welcome_scene() {
        let session = seeded(1);
        let mut canvas = canvas();
        session.draw_welcome_scene(&mut canvas);

        assert_eq!(canvas.get_pixel(100, 100), MARKER_COLOR);
        assert_eq!(canvas.get_pixel(499, 400), MARKER_COLOR);
        for pixel in IncrementalErrorLine::new(Point::new(100, 100), Point::new(499, 400)) {
            let color = canvas.get_pixel(pixel.x as usize, pixel.y as usize);
            assert!(color == Color::WHITE || color == MARKER_COLOR);
        }
        assert!(session.lines().is_empty());
    }
}
