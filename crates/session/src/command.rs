use math::Color;

/// Something the user asked the session to do
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    /// Draw a line of the given color between two random points and remember it
    DrawRandomLine(Color),

    /// Clear the canvas to a starfield and forget every line
    Reset,

    /// Draw every remembered line again with the incremental error algorithm
    Replay,

    /// Draw every remembered line again with the algorithm it was first drawn with
    ReplayRecorded,
}
