// {
//   "command": "generate:migration:pivot",
//   "status": "success",
//   "data": {
//     "path": "./database/migrations/2024_05_01_120000_create_role_user_pivot_table.php",
//     "class_name": "CreateRoleUserPivotTable",
//     "pivot_table_name": "role_user",
//     "written": true
//   },
//   "error": null
// }
use colored::Colorize;
use pivotgen_codegen::{GeneratedFile, PIVOT_LABEL};
use pivotgen_core::{GenerationError, GenerationResult};
use serde::Serialize;
use std::io::{self, Write};

#[derive(Debug, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CommandStatus {
    Success,
    Error,
}

#[derive(Debug, Serialize)]
pub struct ErrorReport {
    pub code: &'static str,
    pub message: String,
}

impl From<&GenerationError> for ErrorReport {
    fn from(e: &GenerationError) -> Self {
        Self {
            code: e.code(),
            message: e.to_string(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct CommandOutput<'a> {
    pub command: String,
    pub status: CommandStatus,
    pub data: Option<&'a GeneratedFile>,
    pub error: Option<ErrorReport>,
}

impl<'a> CommandOutput<'a> {
    pub fn new(command: impl Into<String>, result: &'a GenerationResult<GeneratedFile>) -> Self {
        match result {
            Ok(file) => Self {
                command: command.into(),
                status: CommandStatus::Success,
                data: Some(file),
                error: None,
            },
            Err(e) => Self {
                command: command.into(),
                status: CommandStatus::Error,
                data: None,
                error: Some(ErrorReport::from(e)),
            },
        }
    }
}

/// Process exit status for a command result
pub fn exit_code(result: &GenerationResult<GeneratedFile>) -> u8 {
    match result {
        Ok(_) => 0,
        Err(e) => e.exit_code(),
    }
}

/// Exit status when the report itself could not be written.
pub const REPORT_FAILURE_EXIT_CODE: u8 = 5;

/// Render the result as pretty JSON.
pub fn render_json(command: &str, result: &GenerationResult<GeneratedFile>) -> anyhow::Result<String> {
    let output = CommandOutput::new(command, result);
    Ok(serde_json::to_string_pretty(&output)?)
}

/// Write the human-readable status report.
///
/// Successes go to `out`, failures to `err`.
pub fn render_human_output(
    result: &GenerationResult<GeneratedFile>,
    out: &mut impl Write,
    err: &mut impl Write,
) -> io::Result<()> {
    match result {
        Ok(file) if file.written => {
            writeln!(out, "{}", format!("{PIVOT_LABEL} created successfully.").green())?;
            writeln!(out, "- {}", file.path.display())?;
        }
        Ok(file) => {
            writeln!(
                out,
                "{} {}",
                "Dry run:".yellow().bold(),
                format!("would create {}", file.path.display()).dimmed()
            )?;
            writeln!(out)?;
            write!(out, "{}", file.content)?;
        }
        Err(GenerationError::AlreadyExists { kind, path }) => {
            writeln!(err, "{}", format!("{kind} already exists!").red())?;
            writeln!(err, "- {}", path.display())?;
            writeln!(err, "  Re-run with {} to overwrite it.", "--force".yellow())?;
        }
        Err(e) => {
            writeln!(err, "{} {}", "error:".red().bold(), e)?;
        }
    }
    Ok(())
}

/// Write the report in the requested format.
pub fn write_report(
    command: &str,
    json: bool,
    result: &GenerationResult<GeneratedFile>,
    out: &mut impl Write,
    err: &mut impl Write,
) -> anyhow::Result<()> {
    if json {
        writeln!(out, "{}", render_json(command, result)?)?;
    } else {
        render_human_output(result, out, err)?;
    }
    out.flush()?;
    Ok(())
}

/// Process exit status once the report has been attempted.
pub fn final_exit_code(
    report: &anyhow::Result<()>,
    result: &GenerationResult<GeneratedFile>,
) -> u8 {
    match report {
        Ok(()) => exit_code(result),
        Err(_) => REPORT_FAILURE_EXIT_CODE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    struct BrokenPipe;

    impl Write for BrokenPipe {
        fn write(&mut self, _: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    fn human(result: &GenerationResult<GeneratedFile>) -> (String, String) {
        let mut out = Vec::new();
        let mut err = Vec::new();
        render_human_output(result, &mut out, &mut err).unwrap();
        (
            String::from_utf8(out).unwrap(),
            String::from_utf8(err).unwrap(),
        )
    }

    fn generated() -> GeneratedFile {
        GeneratedFile {
            path: PathBuf::from("database/migrations/x_create_role_user_pivot_table.php"),
            class_name: "CreateRoleUserPivotTable".to_string(),
            pivot_table_name: "role_user".to_string(),
            content: "<?php".to_string(),
            written: true,
        }
    }

    #[test]
    fn test_success_json() {
        let result: GenerationResult<GeneratedFile> = Ok(generated());
        let json: serde_json::Value =
            serde_json::from_str(&render_json("generate:migration:pivot", &result).unwrap())
                .unwrap();

        assert_eq!(json["status"], "success");
        assert_eq!(json["data"]["class_name"], "CreateRoleUserPivotTable");
        assert_eq!(json["data"]["pivot_table_name"], "role_user");
        assert!(json["data"].get("content").is_none());
        assert!(json["error"].is_null());
        assert_eq!(exit_code(&result), 0);
    }

    #[test]
    fn test_already_exists_json() {
        let result: GenerationResult<GeneratedFile> =
            Err(GenerationError::already_exists("Pivot", "database/migrations/x.php"));
        let json: serde_json::Value =
            serde_json::from_str(&render_json("generate:migration:pivot", &result).unwrap())
                .unwrap();

        assert_eq!(json["status"], "error");
        assert_eq!(json["error"]["code"], "already_exists");
        assert!(json["data"].is_null());
        assert_eq!(exit_code(&result), 1);
    }

    #[test]
    fn test_human_success() {
        let (out, err) = human(&Ok(generated()));

        assert!(out.contains("Pivot created successfully."));
        assert!(out.contains("- database/migrations/x_create_role_user_pivot_table.php"));
        assert!(err.is_empty());
    }

    #[test]
    fn test_human_already_exists() {
        let result: GenerationResult<GeneratedFile> =
            Err(GenerationError::already_exists("Pivot", "database/migrations/x.php"));
        let (out, err) = human(&result);

        assert!(out.is_empty());
        assert!(err.contains("Pivot already exists!"));
        assert!(err.contains("- database/migrations/x.php"));
        assert!(err.contains("--force"));
        assert_eq!(exit_code(&result), 1);
    }

    #[test]
    fn test_human_dry_run_prints_content() {
        let mut file = generated();
        file.written = false;
        let (out, _) = human(&Ok(file));

        assert!(out.contains("Dry run:"));
        assert!(out.ends_with("<?php"));
    }

    #[test]
    fn test_human_other_error() {
        let result: GenerationResult<GeneratedFile> =
            Err(GenerationError::stub_not_found("stubs/pivot.stub", "missing"));
        let (_, err) = human(&result);

        assert!(err.contains("error:"));
        assert!(err.contains("stubs/pivot.stub"));
    }

    #[test]
    fn test_unwritable_report_has_its_own_exit_code() {
        let result: GenerationResult<GeneratedFile> = Ok(generated());
        let report = write_report(
            "generate:migration:pivot",
            true,
            &result,
            &mut BrokenPipe,
            &mut io::sink(),
        );

        assert!(report.is_err());
        assert_eq!(final_exit_code(&report, &result), REPORT_FAILURE_EXIT_CODE);
        assert_eq!(final_exit_code(&Ok(()), &result), 0);
    }
}
