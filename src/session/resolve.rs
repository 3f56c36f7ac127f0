//! Input file resolution
//!
//! Decides which file to load: the command-line argument when given,
//! otherwise whatever the user enters at the prompt, falling back to the
//! default file on request.

use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::core::paths::can_open;
use crate::core::util::{display_name, first_token, leading_integer};
use crate::session::console::Console;

/// Response to the retry prompt that selects the default file
const USE_DEFAULT: i64 = 2;

/// Where the resolved input came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// Named on the command line; not checked until load
    Argument(PathBuf),
    /// Entered at the prompt and verified to open
    Entered(PathBuf),
    /// The configured default file
    Default(PathBuf),
}

impl Resolution {
    pub fn path(&self) -> &Path {
        match self {
            Resolution::Argument(path) | Resolution::Entered(path) | Resolution::Default(path) => {
                path
            }
        }
    }

    pub fn into_path(self) -> PathBuf {
        match self {
            Resolution::Argument(path) | Resolution::Entered(path) | Resolution::Default(path) => {
                path
            }
        }
    }
}

/// Resolve the input path, prompting until the user names a readable file
/// or asks for the default.
pub fn resolve_input<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    argument: Option<&Path>,
    default_input: &Path,
) -> io::Result<Resolution> {
    if let Some(path) = argument {
        debug!(path = %path.display(), "input taken from argument");
        return Ok(Resolution::Argument(path.to_path_buf()));
    }

    let default_name = display_name(default_input);
    let use_default = || Resolution::Default(default_input.to_path_buf());

    loop {
        console.print(&format!(
            "Place the file in the working directory and\n\
             enter the input file name or leave blank to use\n\
             the default file (\"{}\"): ",
            default_name
        ))?;

        let entered = match console.read_line()? {
            Some(line) => line,
            None => {
                info!("input closed at file prompt, using default file");
                return Ok(use_default());
            }
        };

        if entered.is_empty() {
            return Ok(use_default());
        }

        let candidate = PathBuf::from(&entered);
        if can_open(&candidate) {
            return Ok(Resolution::Entered(candidate));
        }

        debug!(path = %entered, "entered file cannot be opened");
        console.println(&format!("Error: cannot open file \"{}\".", entered))?;
        console.print(&format!(
            "Enter 1 to try again or {} to use the default file (\"{}\"): ",
            USE_DEFAULT, default_name
        ))?;

        let Some(line) = console.read_line()? else {
            return Ok(use_default());
        };
        // Anything other than the default option goes back to the file prompt
        if first_token(&line).and_then(leading_integer) == Some(USE_DEFAULT) {
            return Ok(use_default());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::io::Cursor;
    use tempfile::tempdir;

    fn run(input: &str, argument: Option<&Path>, default: &Path) -> (Resolution, String) {
        let mut console = Console::new(Cursor::new(input.as_bytes().to_vec()), Vec::new());
        let resolution = resolve_input(&mut console, argument, default).unwrap();
        let output = String::from_utf8(console.into_output()).unwrap();
        (resolution, output)
    }

    #[test]
    fn test_argument_is_accepted_without_check() {
        let missing = Path::new("does/not/exist.txt");
        let (resolution, output) = run("", Some(missing), Path::new("default.txt"));
        assert_eq!(resolution, Resolution::Argument(missing.to_path_buf()));
        assert!(output.is_empty());
    }

    #[test]
    fn test_blank_selects_default() {
        let default = Path::new("items/default.txt");
        let (resolution, output) = run("\n", None, default);
        assert_eq!(resolution, Resolution::Default(default.to_path_buf()));
        assert!(output.contains("the default file (\"default.txt\"): "));
    }

    #[test]
    fn test_file_prompt_text() {
        let (_, output) = run("\n", None, Path::new("items/list.txt"));
        assert_eq!(
            output,
            "Place the file in the working directory and\n\
             enter the input file name or leave blank to use\n\
             the default file (\"list.txt\"): "
        );
    }

    #[test]
    fn test_readable_file_is_accepted() {
        let temp = tempdir().unwrap();
        let file = temp.path().join("list.txt");
        fs::write(&file, "Apples").unwrap();

        let input = format!("{}\n", file.display());
        let (resolution, output) = run(&input, None, Path::new("default.txt"));
        assert_eq!(resolution, Resolution::Entered(file));
        assert!(!output.contains("Error"));
    }

    #[test]
    fn test_unreadable_then_default_option() {
        let default = Path::new("default.txt");
        let (resolution, output) = run("missing.txt\n2\n", None, default);
        assert_eq!(resolution, Resolution::Default(default.to_path_buf()));
        assert!(output.contains("Error: cannot open file \"missing.txt\"."));
        assert!(output.contains("Enter 1 to try again or 2 to use the default file"));
    }

    #[test]
    fn test_any_other_option_reprompts() {
        let temp = tempdir().unwrap();
        let file = temp.path().join("list.txt");
        fs::write(&file, "Apples").unwrap();

        let input = format!("missing.txt\n7\nnope.txt\nx\n{}\n", file.display());
        let (resolution, output) = run(&input, None, Path::new("default.txt"));

        assert_eq!(resolution, Resolution::Entered(file));
        assert_eq!(output.matches("enter the input file name").count(), 3);
        assert_eq!(output.matches("Error: cannot open file").count(), 2);
    }

    #[test]
    fn test_end_of_input_uses_default() {
        let default = Path::new("default.txt");
        let (resolution, _) = run("", None, default);
        assert_eq!(resolution, Resolution::Default(default.to_path_buf()));

        let (resolution, _) = run("missing.txt\n", None, default);
        assert_eq!(resolution, Resolution::Default(default.to_path_buf()));
    }

    #[test]
    fn test_resolution_path() {
        let resolution = Resolution::Entered(PathBuf::from("a.txt"));
        assert_eq!(resolution.path(), Path::new("a.txt"));
        assert_eq!(resolution.into_path(), PathBuf::from("a.txt"));
    }
}
