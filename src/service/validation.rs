//! Required-field checks for incoming requests.

use crate::model::{CenterForm, NewCenter};

pub const MISSING_FIELD: &str = "You are missing a required field";
pub const MISSING_ID: &str = "You did not provide an ID!";

pub struct RequestValidator;

impl RequestValidator {
    /// `name`, `location` and `contact` must all be present and non-empty.
    pub fn new_center(form: CenterForm) -> Result<NewCenter, &'static str> {
        match (form.name, form.location, form.contact) {
            (Some(name), Some(location), Some(contact))
                if !name.is_empty() && !location.is_empty() && !contact.is_empty() =>
            {
                Ok(NewCenter {
                    name,
                    location,
                    contact,
                })
            }
            _ => Err(MISSING_FIELD),
        }
    }

    /// The id is opaque; only emptiness is checked.
    pub fn center_id(id: Option<String>) -> Result<String, &'static str> {
        id.filter(|s| !s.is_empty()).ok_or(MISSING_ID)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(name: &str, location: &str, contact: &str) -> CenterForm {
        CenterForm {
            name: Some(name.into()),
            location: Some(location.into()),
            contact: Some(contact.into()),
        }
    }

    #[test]
    fn complete_form_is_accepted() {
        let c = RequestValidator::new_center(form("Clinic A", "Downtown", "555-0100")).unwrap();
        assert_eq!(c.name, "Clinic A");
        assert_eq!(c.location, "Downtown");
        assert_eq!(c.contact, "555-0100");
    }

    #[test]
    fn any_empty_field_is_rejected() {
        for f in [form("", "l", "c"), form("n", "", "c"), form("n", "l", "")] {
            assert_eq!(RequestValidator::new_center(f), Err(MISSING_FIELD));
        }
    }

    #[test]
    fn absent_field_is_rejected() {
        let f = CenterForm {
            contact: None,
            ..form("n", "l", "c")
        };
        assert_eq!(RequestValidator::new_center(f), Err(MISSING_FIELD));
    }

    #[test]
    fn id_is_not_parsed() {
        assert_eq!(RequestValidator::center_id(Some("abc".into())), Ok("abc".to_string()));
        assert_eq!(RequestValidator::center_id(Some(String::new())), Err(MISSING_ID));
        assert_eq!(RequestValidator::center_id(None), Err(MISSING_ID));
    }
}
