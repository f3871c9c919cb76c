//! Text/JSON output and delete confirmation.

use dialoguer::Confirm;
use serde::Serialize;

use crate::app::render::{ListOutput, Template, render_list};
use crate::domain::AppError;

/// Prints view-models either through their text renderer or as JSON.
#[derive(Debug, Clone, Copy)]
pub struct Output {
    json: bool,
}

impl Output {
    pub fn new(json: bool) -> Self {
        Self { json }
    }

    pub fn emit<T, F>(&self, value: &T, text: F) -> Result<(), AppError>
    where
        T: Serialize,
        F: FnOnce(&T) -> Result<String, AppError>,
    {
        let rendered = if self.json { to_json(value)? } else { text(value)? };
        println!("{}", rendered.trim_end());
        Ok(())
    }

    pub fn list<R: Serialize>(
        &self,
        template: Template,
        output: &ListOutput<R>,
    ) -> Result<(), AppError> {
        self.emit(output, |output| render_list(template, output))
    }

    /// Report a completed action. JSON mode prints `{"status":..,"id":..}`.
    pub fn done(&self, message: &str, id: &str) -> Result<(), AppError> {
        if self.json {
            let body = serde_json::json!({ "status": "ok", "id": id, "message": message });
            println!("{}", to_json(&body)?);
        } else {
            println!("✅ {}", message);
        }
        Ok(())
    }
}

fn to_json<T: Serialize>(value: &T) -> Result<String, AppError> {
    serde_json::to_string_pretty(value)
        .map_err(|e| AppError::ParseError { what: "output".into(), details: e.to_string() })
}

/// Ask before deleting. `--yes` skips the prompt; Esc or `n` cancels.
pub fn confirm_delete(what: &str, assume_yes: bool) -> Result<bool, AppError> {
    if assume_yes {
        return Ok(true);
    }
    let answer = Confirm::new()
        .with_prompt(format!("Delete {}?", what))
        .default(false)
        .interact_opt()
        .map_err(|err| AppError::InvalidInput(format!("Failed to read confirmation: {}", err)))?;
    Ok(answer.unwrap_or(false))
}
