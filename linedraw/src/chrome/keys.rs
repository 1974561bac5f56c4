use math::Color;
use sdl2::keyboard::{Keycode, Mod};
use session::Command;

/// The command triggered by pressing `keycode` while `keymod` is held, if any
pub(super) fn command_for_key(keycode: Keycode, keymod: Mod) -> Option<Command> {
    let shift = keymod.intersects(Mod::LSHIFTMOD | Mod::RSHIFTMOD);

    let command = match keycode {
        Keycode::Num1 | Keycode::Kp1 => Command::DrawRandomLine(Color::RED),
        Keycode::Num2 | Keycode::Kp2 => Command::DrawRandomLine(Color::GREEN),
        Keycode::Num3 | Keycode::Kp3 => Command::DrawRandomLine(Color::BLUE),
        Keycode::Num4 | Keycode::Kp4 => Command::Reset,
        Keycode::R if shift => Command::ReplayRecorded,
        Keycode::R => Command::Replay,
        _ => return None,
    };

    Some(command)
}

#[cfg(test)]
mod tests {
    use super::command_for_key;
    use math::Color;
    use sdl2::keyboard::{Keycode, Mod};
    use session::Command;

    #[test]
    fn number_keys() {
        assert_eq!(
            command_for_key(Keycode::Num1, Mod::NOMOD),
            Some(Command::DrawRandomLine(Color::RED))
        );
        assert_eq!(
            command_for_key(Keycode::Num2, Mod::NOMOD),
            Some(Command::DrawRandomLine(Color::GREEN))
        );
        assert_eq!(
            command_for_key(Keycode::Num3, Mod::NOMOD),
            Some(Command::DrawRandomLine(Color::BLUE))
        );
        assert_eq!(command_for_key(Keycode::Num4, Mod::NOMOD), Some(Command::Reset));
        assert_eq!(command_for_key(Keycode::R, Mod::NOMOD), Some(Command::Replay));
    }

    #[test]
    fn other_keys_are_ignored() {
        assert_eq!(command_for_key(Keycode::Num5, Mod::NOMOD), None);
        assert_eq!(command_for_key(Keycode::Space, Mod::NOMOD), None);
    }

    #[test]
    fn shift_r_replays_with_the_recorded_algorithms() {
        assert_eq!(
            command_for_key(Keycode::R, Mod::LSHIFTMOD),
            Some(Command::ReplayRecorded)
        );
        assert_eq!(
            command_for_key(Keycode::R, Mod::RSHIFTMOD | Mod::NUMMOD),
            Some(Command::ReplayRecorded)
        );
        assert_eq!(command_for_key(Keycode::R, Mod::NUMMOD), Some(Command::Replay));
    }
}
