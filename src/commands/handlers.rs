//! Command handlers
//!
//! One handler per verb. Results are printed to stdout; failures propagate
//! to the caller, which reports them and maps them to the exit code. The
//! optimize handler is the exception: its steps report their own failures
//! and it always completes.

use crate::backup;
use crate::commands::parser::Command;
use crate::config::ToolConfig;
use crate::error::MaintError;
use crate::fileops::operations;
use crate::maintenance::{ShellBackend, VolumeMaintainer};

/// Dispatch a parsed command to its handler
pub fn handle_command(command: &Command, config: &ToolConfig) -> Result<(), MaintError> {
    match command {
        Command::Optimize(path) => handle_cmd_optimize(path, config),
        Command::Create(path) => Ok(operations::create_file(path)?),
        Command::Delete(path) => Ok(operations::delete_file(path)?),
        Command::Rename(old_path, new_path) => Ok(operations::rename_file(old_path, new_path)?),
        Command::Move(source, destination) => Ok(operations::move_file(source, destination)?),
        Command::List(path) => handle_cmd_list(path),
        Command::Write(path, data) => Ok(operations::append_to_file(path, data)?),
        Command::Read(path) => handle_cmd_read(path),
        Command::GetSize(path) => handle_cmd_getsize(path),
        Command::Copy(source, destination) => Ok(operations::copy_file(source, destination)?),
        Command::Mkdir(path) => Ok(operations::create_directory(path)?),
        Command::Rmdir(path) => Ok(operations::remove_directory(path)?),
        Command::Info(path) => handle_cmd_info(path),
        Command::GetPerms(path) => handle_cmd_getperms(path),
        Command::SetPerms(path, mode) => Ok(operations::set_permissions(path, *mode)?),
        Command::Backup(path) => handle_cmd_backup(path, config),
        Command::Restore(path) => handle_cmd_restore(path, config),
        Command::Backups(path) => handle_cmd_backups(path, config),
        Command::Checksum(path) => handle_cmd_checksum(path),
    }
}

// Command handler for OPTIMIZE
fn handle_cmd_optimize(path: &str, config: &ToolConfig) -> Result<(), MaintError> {
    let backend = ShellBackend::new(&config.volume);
    let maintainer = VolumeMaintainer::new(backend);
    // Report-but-continue: step failures never change the exit status
    maintainer.run_all(path);
    Ok(())
}

// Command handler for LIST
fn handle_cmd_list(path: &str) -> Result<(), MaintError> {
    for entry in operations::list_directory(path)? {
        println!("{}", entry);
    }
    Ok(())
}

// Command handler for READ
fn handle_cmd_read(path: &str) -> Result<(), MaintError> {
    for line in operations::read_lines(path)? {
        println!("{}", line);
    }
    Ok(())
}

// Command handler for GETSIZE
fn handle_cmd_getsize(path: &str) -> Result<(), MaintError> {
    let size = operations::file_size(path)?;
    println!("{} bytes", size);
    Ok(())
}

// Command handler for INFO
fn handle_cmd_info(path: &str) -> Result<(), MaintError> {
    let info = operations::file_info(path)?;
    println!("Name: {}", info.name);
    println!("Size: {}", info.size);
    println!("Permissions: {:o}", info.mode);
    match info.modified {
        Some(modified) => println!("Modified: {}", modified.format("%Y-%m-%d %H:%M:%S")),
        None => println!("Modified: unknown"),
    }
    println!("IsDir: {}", info.is_dir);
    Ok(())
}

// Command handler for GETPERMS
fn handle_cmd_getperms(path: &str) -> Result<(), MaintError> {
    let mode = operations::permissions(path)?;
    println!("{:o}", mode);
    Ok(())
}

// Command handler for BACKUP
fn handle_cmd_backup(path: &str, config: &ToolConfig) -> Result<(), MaintError> {
    let backup_path = backup::backup_file(path, &config.backup)?;
    println!("Backup of {} created at {}", path, backup_path.display());
    Ok(())
}

// Command handler for RESTORE
fn handle_cmd_restore(path: &str, config: &ToolConfig) -> Result<(), MaintError> {
    let backup_path = backup::restore_backup(path, &config.backup)?;
    println!("File {} restored from {}", path, backup_path.display());
    Ok(())
}

// Command handler for BACKUPS
fn handle_cmd_backups(path: &str, config: &ToolConfig) -> Result<(), MaintError> {
    for name in backup::list_backups(path, &config.backup)? {
        println!("{}", name);
    }
    Ok(())
}

// Command handler for CHECKSUM
fn handle_cmd_checksum(path: &str) -> Result<(), MaintError> {
    let digest = backup::checksum(path)?;
    println!("{}", digest);
    Ok(())
}
