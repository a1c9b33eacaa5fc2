// Command enum to represent shell commands
#[derive(Debug, PartialEq)]
pub enum Command {
    Quit,
    Help,
    Folders,
    Mkdir(String),
    Rmdir(String),
    Rename { folder: String, new_name: String },
    Touch { folder: String, file: String, contents: String },
    Write { folder: String, file: String, contents: String },
    Cat { folder: String, file: String },
    Rm { folder: String, file: String },
    Mv { from: String, file: String, to: String },
    Cp { from: String, file: String, to: String },
    Ls(String),
    Du(String),
    Invalid(String),
    Unknown(String),
}

#[derive(Debug, PartialEq)]
pub enum CommandStatus {
    Continue,
    Quit,
}

#[derive(Debug, PartialEq)]
pub struct CommandResult {
    pub status: CommandStatus,
    pub message: Option<String>,
}

impl CommandResult {
    pub fn reply(message: impl Into<String>) -> Self {
        Self {
            status: CommandStatus::Continue,
            message: Some(message.into()),
        }
    }

    pub fn quit(message: impl Into<String>) -> Self {
        Self {
            status: CommandStatus::Quit,
            message: Some(message.into()),
        }
    }
}

// Parse raw command line into Command enum
pub fn parse_command(raw: &str) -> Command {
    let trimmed = raw.trim();
    let mut parts = trimmed.splitn(2, char::is_whitespace);
    let cmd = parts.next().unwrap_or("").to_ascii_uppercase();
    let rest = parts.next().unwrap_or("").trim();
    let args: Vec<&str> = rest.split_whitespace().collect();

    match cmd.as_str() {
        "QUIT" | "Q" => Command::Quit,
        "HELP" => Command::Help,
        "FOLDERS" => Command::Folders,
        "MKDIR" => match args.as_slice() {
            [] => Command::Mkdir(String::new()),
            [folder] => Command::Mkdir(folder.to_string()),
            _ => Command::Invalid(usage("MKDIR")),
        },
        "RMDIR" => match args.as_slice() {
            [folder] => Command::Rmdir(folder.to_string()),
            _ => Command::Invalid(usage("RMDIR")),
        },
        "RENAME" => match args.as_slice() {
            [folder, new_name] => Command::Rename {
                folder: folder.to_string(),
                new_name: new_name.to_string(),
            },
            _ => Command::Invalid(usage("RENAME")),
        },
        "TOUCH" => match args.as_slice() {
            [] => Command::Invalid(usage("TOUCH")),
            [folder] => Command::Touch {
                folder: folder.to_string(),
                file: String::new(),
                contents: String::new(),
            },
            [folder, file, ..] => Command::Touch {
                folder: folder.to_string(),
                file: file.to_string(),
                contents: trailing_text(rest, 2),
            },
        },
        "WRITE" => match args.as_slice() {
            [folder, file, _, ..] => Command::Write {
                folder: folder.to_string(),
                file: file.to_string(),
                contents: trailing_text(rest, 2),
            },
            _ => Command::Invalid(usage("WRITE")),
        },
        "CAT" => match args.as_slice() {
            [folder, file] => Command::Cat {
                folder: folder.to_string(),
                file: file.to_string(),
            },
            _ => Command::Invalid(usage("CAT")),
        },
        "RM" => match args.as_slice() {
            [folder, file] => Command::Rm {
                folder: folder.to_string(),
                file: file.to_string(),
            },
            _ => Command::Invalid(usage("RM")),
        },
        "MV" => match args.as_slice() {
            [from, file, to] => Command::Mv {
                from: from.to_string(),
                file: file.to_string(),
                to: to.to_string(),
            },
            _ => Command::Invalid(usage("MV")),
        },
        "CP" => match args.as_slice() {
            [from, file, to] => Command::Cp {
                from: from.to_string(),
                file: file.to_string(),
                to: to.to_string(),
            },
            _ => Command::Invalid(usage("CP")),
        },
        "LS" => match args.as_slice() {
            [folder] => Command::Ls(folder.to_string()),
            _ => Command::Invalid(usage("LS")),
        },
        "DU" => match args.as_slice() {
            [folder] => Command::Du(folder.to_string()),
            _ => Command::Invalid(usage("DU")),
        },
        _ => Command::Unknown(trimmed.to_string()),
    }
}

/// Usage line for a command keyword
pub fn usage(cmd: &str) -> String {
    let args = match cmd {
        "MKDIR" => "[folder]",
        "RMDIR" | "LS" | "DU" => "<folder>",
        "RENAME" => "<folder> <new-name>",
        "TOUCH" => "<folder> [file [contents...]]",
        "WRITE" => "<folder> <file> <contents...>",
        "CAT" | "RM" => "<folder> <file>",
        "MV" | "CP" => "<from-folder> <file> <to-folder>",
        _ => "",
    };
    format!("Usage: {} {}", cmd, args).trim_end().to_string()
}

// Text after the first `skip` whitespace-separated words, inner spacing kept
fn trailing_text(rest: &str, skip: usize) -> String {
    let mut remaining = rest;
    for _ in 0..skip {
        remaining = remaining.trim_start();
        match remaining.find(char::is_whitespace) {
            Some(end) => remaining = &remaining[end..],
            None => return String::new(),
        }
    }
    remaining.trim().to_string()
}
