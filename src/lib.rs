//! scical library exports for the binary and integration tests

use clap::ValueEnum;

use crate::core::state::AngleMode;

pub mod core;
pub mod tui;

#[cfg(test)]
pub mod test_support;

/// Angle unit as accepted by `--angle-mode`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum AngleModeArg {
    Deg,
    Rad,
}

impl From<AngleModeArg> for AngleMode {
    fn from(arg: AngleModeArg) -> Self {
        match arg {
            AngleModeArg::Deg => AngleMode::Deg,
            AngleModeArg::Rad => AngleMode::Rad,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_angle_mode_arg_parses_cli_names() {
        let arg = AngleModeArg::from_str("rad", true).unwrap();
        assert_eq!(AngleMode::from(arg), AngleMode::Rad);
        assert_eq!(AngleMode::from(AngleModeArg::Deg), AngleMode::Deg);
        assert!(AngleModeArg::from_str("grad", true).is_err());
    }
}
