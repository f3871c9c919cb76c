use log::info;

use super::{NavigateTo, Submitted, optional_text};
use crate::domain::{AbsenceType, AbsenceTypePayload, AppError, RequiredFields};
use crate::ports::AbsenceTypesApi;

#[derive(Debug, Clone, PartialEq)]
pub struct AbsenceTypeForm {
    pub name: String,
    pub description: String,
    pub color: String,
    pub icon: String,
    pub active: bool,
    editing: Option<String>,
}

impl Default for AbsenceTypeForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            description: String::new(),
            color: String::new(),
            icon: String::new(),
            active: true,
            editing: None,
        }
    }
}

impl AbsenceTypeForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Edit form prefilled from the stored absence type.
    pub fn edit(api: &impl AbsenceTypesApi, id: &str) -> Result<Self, AppError> {
        api.get_absence_type(id).map(|absence_type| Self::from_entity(&absence_type))
    }

    pub fn from_entity(absence_type: &AbsenceType) -> Self {
        Self {
            name: absence_type.name.clone(),
            description: absence_type.description.clone().unwrap_or_default(),
            color: absence_type.color.clone().unwrap_or_default(),
            icon: absence_type.icon.clone().unwrap_or_default(),
            active: absence_type.active,
            editing: Some(absence_type.id.clone()),
        }
    }

    pub fn editing_id(&self) -> Option<&str> {
        self.editing.as_deref()
    }

    pub fn validate(&self) -> Result<(), AppError> {
        RequiredFields::new().text("name", Some(self.name.as_str())).finish()
    }

    /// Request body. Creating leaves blank optionals out; editing sends them
    /// as empty strings so a PATCH clears the stored value.
    pub fn payload(&self) -> AbsenceTypePayload {
        let text = |value: &str| match self.editing {
            Some(_) => Some(value.trim().to_string()),
            None => optional_text(value),
        };
        AbsenceTypePayload {
            name: self.name.trim().to_string(),
            description: text(&self.description),
            color: text(&self.color),
            icon: text(&self.icon),
            active: Some(self.active),
        }
    }

    pub fn submit(
        &self,
        api: &impl AbsenceTypesApi,
    ) -> Result<Submitted<AbsenceType>, AppError> {
        self.validate()?;
        let payload = self.payload();
        let entity = match &self.editing {
            Some(id) => api.update_absence_type(id, &payload)?,
            None => api.create_absence_type(&payload)?,
        };
        info!("Saved absence type {}", entity.id);
        Ok(Submitted { entity, navigate_to: NavigateTo::AbsenceTypes })
    }
}
