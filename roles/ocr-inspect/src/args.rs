use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Parse and validate a buffer file.
    Decode(PathBuf),
    /// Build a buffer from a TOML boot request.
    Encode(PathBuf),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Args {
    pub config_path: Option<PathBuf>,
    pub command: Command,
}

enum ArgsState {
    Next,
    ExpectConfigPath,
    ExpectDecodePath,
    ExpectEncodePath,
}

enum ArgsResult {
    Config(PathBuf),
    Command(Command),
    None,
    Help(String),
}

impl Args {
    const HELP_MSG: &'static str = "Usage: ocr-inspect [-c/--config <path>] \
        <decode <buffer-file> | encode <request.toml>>, -h/--help";

    pub fn from_args() -> Result<Self, String> {
        Self::parse(std::env::args().skip(1))
    }

    pub fn parse<I>(cli_args: I) -> Result<Self, String>
    where
        I: IntoIterator<Item = String>,
    {
        let mut state = ArgsState::Next;
        let mut results = Vec::new();

        for item in cli_args {
            let result = match state {
                ArgsState::Next => match item.as_str() {
                    "-c" | "--config" => {
                        state = ArgsState::ExpectConfigPath;
                        ArgsResult::None
                    }
                    "decode" => {
                        state = ArgsState::ExpectDecodePath;
                        ArgsResult::None
                    }
                    "encode" => {
                        state = ArgsState::ExpectEncodePath;
                        ArgsResult::None
                    }
                    "-h" | "--help" => ArgsResult::Help(Self::HELP_MSG.to_string()),
                    other => ArgsResult::Help(format!(
                        "Error: unexpected argument '{other}'\n{}",
                        Self::HELP_MSG
                    )),
                },
                ArgsState::ExpectConfigPath => {
                    state = ArgsState::Next;
                    ArgsResult::Config(PathBuf::from(item))
                }
                ArgsState::ExpectDecodePath => {
                    state = ArgsState::Next;
                    ArgsResult::Command(Command::Decode(PathBuf::from(item)))
                }
                ArgsState::ExpectEncodePath => {
                    state = ArgsState::Next;
                    ArgsResult::Command(Command::Encode(PathBuf::from(item)))
                }
            };
            results.push(result);
        }

        match state {
            ArgsState::Next => {}
            ArgsState::ExpectConfigPath => return Err("Missing <path> after -c/--config".into()),
            ArgsState::ExpectDecodePath | ArgsState::ExpectEncodePath => {
                return Err(format!("Missing input path\n{}", Self::HELP_MSG))
            }
        }

        let mut config_path = None;
        let mut command = None;
        for res in results {
            match res {
                ArgsResult::Config(p) => config_path = Some(p),
                ArgsResult::Command(c) => command = Some(c),
                ArgsResult::Help(h) => return Err(h),
                ArgsResult::None => {}
            }
        }

        let command = command.ok_or_else(|| Self::HELP_MSG.to_string())?;
        Ok(Self {
            config_path,
            command,
        })
    }
}
