//! Command parsing
//!
//! Turns the raw argument vector into a typed command. Arity is validated
//! against a fixed table at parse time, before any operation runs.

use crate::error::UsageError;

/// Typed command, one variant per dispatch verb
#[derive(Debug, PartialEq)]
pub enum Command {
    Optimize(String),
    Create(String),
    Delete(String),
    Rename(String, String),
    Move(String, String),
    List(String),
    Write(String, String),
    Read(String),
    GetSize(String),
    Copy(String, String),
    Mkdir(String),
    Rmdir(String),
    Info(String),
    GetPerms(String),
    SetPerms(String, u32),
    Backup(String),
    Restore(String),
    Backups(String),
    Checksum(String),
}

/// Number of positional arguments each verb requires
fn arity(verb: &str) -> Option<usize> {
    match verb {
        "optimize" | "create" | "delete" | "list" | "read" | "getsize" | "mkdir" | "rmdir"
        | "info" | "getperms" | "backup" | "restore" | "backups" | "checksum" => Some(1),
        "rename" | "move" | "write" | "copy" | "setperms" => Some(2),
        _ => None,
    }
}

/// Parse the process argument vector (program name included) into a command
pub fn parse_command(args: &[String]) -> Result<Command, UsageError> {
    let verb = args.get(1).ok_or(UsageError::MissingVerb)?;

    let expected = arity(verb).ok_or_else(|| UsageError::UnknownVerb(verb.clone()))?;
    if args.len() < 2 + expected {
        return Err(UsageError::MissingArguments {
            verb: verb.clone(),
            expected,
        });
    }

    let command = match verb.as_str() {
        "optimize" => Command::Optimize(args[2].clone()),
        "create" => Command::Create(args[2].clone()),
        "delete" => Command::Delete(args[2].clone()),
        "rename" => Command::Rename(args[2].clone(), args[3].clone()),
        "move" => Command::Move(args[2].clone(), args[3].clone()),
        "list" => Command::List(args[2].clone()),
        "write" => Command::Write(args[2].clone(), args[3].clone()),
        "read" => Command::Read(args[2].clone()),
        "getsize" => Command::GetSize(args[2].clone()),
        "copy" => Command::Copy(args[2].clone(), args[3].clone()),
        "mkdir" => Command::Mkdir(args[2].clone()),
        "rmdir" => Command::Rmdir(args[2].clone()),
        "info" => Command::Info(args[2].clone()),
        "getperms" => Command::GetPerms(args[2].clone()),
        "setperms" => {
            let mode = parse_mode(&args[3])?;
            Command::SetPerms(args[2].clone(), mode)
        }
        "backup" => Command::Backup(args[2].clone()),
        "restore" => Command::Restore(args[2].clone()),
        "backups" => Command::Backups(args[2].clone()),
        "checksum" => Command::Checksum(args[2].clone()),
        _ => return Err(UsageError::UnknownVerb(verb.clone())),
    };

    Ok(command)
}

fn parse_mode(raw: &str) -> Result<u32, UsageError> {
    match u32::from_str_radix(raw, 8) {
        Ok(mode) if mode <= 0o7777 => Ok(mode),
        _ => Err(UsageError::InvalidMode(raw.to_string())),
    }
}

/// Usage text printed on any usage error
pub fn usage(program: &str) -> String {
    format!(
        "Usage: {} <operation> <parameters>\n\
         Available operations:\n\
         optimize <path>\n\
         create <filename>\n\
         delete <filename>\n\
         rename <oldname> <newname>\n\
         move <source> <destination>\n\
         list <path>\n\
         write <filename> <data>\n\
         read <filename>\n\
         getsize <filename>\n\
         copy <source> <destination>\n\
         mkdir <path>\n\
         rmdir <path>\n\
         info <path>\n\
         getperms <path>\n\
         setperms <path> <octal-mode>\n\
         backup <filename>\n\
         restore <filename>\n\
         backups <filename>\n\
         checksum <filename>",
        program
    )
}
