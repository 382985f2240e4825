//! Command-line options.

use crate::error::AppError;
use crate::TermInt;

pub const DEFAULT_WIDTH: TermInt = 30;
pub const DEFAULT_HEIGHT: TermInt = 20;
pub const DEMO_WIDTH: TermInt = 25;
pub const DEMO_HEIGHT: TermInt = 15;

pub const USAGE: &str = "\
Usage: snake [--width N] [--height N] [--seed N] [--demo]

  --width N    board width including the walls (default 30, demo 25)
  --height N   board height including the walls (default 20, demo 15)
  --seed N     seed for food placement
  --demo       run a short scripted game instead of the interactive one
  --help       show this message";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    pub width: TermInt,
    pub height: TermInt,
    pub seed: Option<u64>,
    pub demo: bool,
    pub help: bool,
}

impl Options {
    /// Parses the arguments that follow the program name.
    pub fn from_args<I, S>(args: I) -> Result<Self, AppError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut width = None;
        let mut height = None;
        let mut seed = None;
        let mut demo = false;
        let mut help = false;

        let mut args = args.into_iter();
        while let Some(arg) = args.next() {
            match arg.as_ref() {
                "--width" => width = Some(parse_value("--width", args.next())?),
                "--height" => height = Some(parse_value("--height", args.next())?),
                "--seed" => seed = Some(parse_value("--seed", args.next())?),
                "--demo" => demo = true,
                "-h" | "--help" => help = true,
                other => return Err(AppError::Usage(format!("unknown argument '{}'", other))),
            }
        }

        let (default_w, default_h) = if demo {
            (DEMO_WIDTH, DEMO_HEIGHT)
        } else {
            (DEFAULT_WIDTH, DEFAULT_HEIGHT)
        };

        Ok(Options {
            width: width.unwrap_or(default_w),
            height: height.unwrap_or(default_h),
            seed,
            demo,
            help,
        })
    }
}

fn parse_value<T, S>(flag: &str, value: Option<S>) -> Result<T, AppError>
where
    T: std::str::FromStr,
    S: AsRef<str>,
{
    let value = value.ok_or_else(|| AppError::Usage(format!("{} needs a value", flag)))?;
    value.as_ref()
        .parse()
        .map_err(|_| AppError::Usage(format!("invalid value '{}' for {}", value.as_ref(), flag)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<Options, AppError> {
        Options::from_args(args.iter())
    }

    #[test]
    fn test_defaults() {
        let opts = parse(&[]).unwrap();
        assert_eq!((opts.width, opts.height), (DEFAULT_WIDTH, DEFAULT_HEIGHT));
        assert_eq!(opts.seed, None);
        assert!(!opts.demo);

        let opts = parse(&["--demo"]).unwrap();
        assert_eq!((opts.width, opts.height), (DEMO_WIDTH, DEMO_HEIGHT));
    }

    #[test]
    fn test_explicit_values() {
        let opts = parse(&["--height", "12", "--width", "40", "--seed", "7", "--demo"]).unwrap();
        assert_eq!((opts.width, opts.height), (40, 12));
        assert_eq!(opts.seed, Some(7));
        assert!(opts.demo);
    }

    #[test]
    fn test_bad_arguments() {
        assert!(matches!(parse(&["--width"]), Err(AppError::Usage(_))));
        assert!(matches!(parse(&["--width", "wide"]), Err(AppError::Usage(_))));
        assert!(matches!(parse(&["--height", "-3"]), Err(AppError::Usage(_))));
        assert!(matches!(parse(&["--fast"]), Err(AppError::Usage(_))));
    }
}
