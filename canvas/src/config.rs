use figures::consts;
use pico_args::Arguments;

use crate::BuildError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Program {
    Growth,
    Palette,
}

impl Program {
    pub fn usage(self) -> &'static str {
        match self {
            Program::Growth => {
                "\
growth: click to add triangles, click a figure to give it another vertex

USAGE:
  growth [OPTIONS]

OPTIONS:
  --field-size <PX>   width and height of the field [default: 400]
  --radius <PX>       radius of new figures [default: 40]
  -h, --help          print this help
"
            }
            Program::Palette => {
                "\
palette: stamp figures from the palette, select and move them

USAGE:
  palette [OPTIONS]

OPTIONS:
  --field-size <PX>   width and height of the field [default: 600]
  --radius <PX>       radius of new figures [default: 80]
  --max-figures <N>   figures allowed on the field [default: 5]
  -h, --help          print this help
"
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    pub field_size: f32,
    pub radius: f32,
    pub max_figures: usize,
    pub help: bool,
}

impl Config {
    pub fn defaults(program: Program) -> Self {
        match program {
            Program::Growth => Self {
                field_size: consts::growth::FIELD_SIZE,
                radius: consts::growth::RADIUS,
                max_figures: usize::MAX,
                help: false,
            },
            Program::Palette => Self {
                field_size: consts::palette::FIELD_SIZE,
                radius: consts::palette::RADIUS,
                max_figures: consts::palette::MAX_FIGURES,
                help: false,
            },
        }
    }

    pub fn from_env(program: Program) -> Result<Self, BuildError> {
        Self::parse(program, Arguments::from_env())
    }

    /// Overrides the defaults of `program` with whatever `args` hold.
    pub fn parse(program: Program, mut args: Arguments) -> Result<Self, BuildError> {
        let mut config = Self::defaults(program);
        config.help = args.contains(["-h", "--help"]);

        if let Some(size) = args.opt_value_from_str("--field-size")? {
            config.field_size = positive("field-size", size)?;
        }
        if let Some(radius) = args.opt_value_from_str("--radius")? {
            config.radius = positive("radius", radius)?;
        }
        if program == Program::Palette {
            if let Some(max) = args.opt_value_from_str::<_, usize>("--max-figures")? {
                if max == 0 {
                    return Err(BuildError::NotPositive("max-figures"));
                }
                config.max_figures = max;
            }
        }

        let rest = args.finish();
        if !rest.is_empty() {
            return Err(BuildError::Unexpected(rest));
        }
        Ok(config)
    }
}

fn positive(name: &'static str, value: f32) -> Result<f32, BuildError> {
    if value > 0.0 {
        Ok(value)
    } else {
        Err(BuildError::NotPositive(name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ffi::OsString;

    fn args(list: &[&str]) -> Arguments {
        Arguments::from_vec(list.iter().map(|s| OsString::from(*s)).collect())
    }

    #[test]
    fn no_arguments_gives_defaults() {
        let growth = Config::parse(Program::Growth, args(&[])).unwrap();
        assert_eq!(growth, Config::defaults(Program::Growth));
        assert_eq!(growth.field_size, 400.0);
        assert_eq!(growth.radius, 40.0);

        let palette = Config::parse(Program::Palette, args(&[])).unwrap();
        assert_eq!(palette.field_size, 600.0);
        assert_eq!(palette.radius, 80.0);
        assert_eq!(palette.max_figures, 5);
        assert!(!palette.help);
    }

    #[test]
    fn overrides() {
        let config = Config::parse(
            Program::Palette,
            args(&["--radius", "30", "--max-figures", "8", "--field-size", "500"]),
        )
        .unwrap();
        assert_eq!(config.radius, 30.0);
        assert_eq!(config.max_figures, 8);
        assert_eq!(config.field_size, 500.0);
    }

    #[test]
    fn help_flag() {
        assert!(Config::parse(Program::Growth, args(&["-h"])).unwrap().help);
        assert!(Config::parse(Program::Palette, args(&["--help"])).unwrap().help);
    }

    #[test]
    fn invalid_values() {
        assert!(matches!(
            Config::parse(Program::Growth, args(&["--radius", "0"])),
            Err(BuildError::NotPositive("radius"))
        ));
        assert!(matches!(
            Config::parse(Program::Palette, args(&["--max-figures", "0"])),
            Err(BuildError::NotPositive("max-figures"))
        ));
        assert!(matches!(
            Config::parse(Program::Growth, args(&["--field-size", "big"])),
            Err(BuildError::Args(_))
        ));
    }

    #[test]
    fn growth_has_no_capacity() {
        assert!(matches!(
            Config::parse(Program::Growth, args(&["--max-figures", "3"])),
            Err(BuildError::Unexpected(_))
        ));
    }
}
