use clinic_db_client::owners::create::NewOwner;
use models_clinic::{ValidationErrors, validate};
use utoipa::ToSchema;

/// Create payload for an owner. All fields are raw optionals so that the
/// validation layer can report every field problem at once instead of
/// failing on the first deserialization mismatch.
#[derive(serde::Serialize, serde::Deserialize, Debug, ToSchema)]
pub struct CreateOwnerRequest {
    pub name: Option<String>,
    pub cpf: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub address: Option<String>,
}

impl CreateOwnerRequest {
    pub fn validate(self) -> Result<NewOwner, ValidationErrors> {
        let mut errors = ValidationErrors::default();

        let name = validate::required_string(&mut errors, "name", self.name);
        let address = validate::required_string(&mut errors, "address", self.address);

        let cpf = validate::required_string(&mut errors, "cpf", self.cpf);
        if let Some(cpf) = &cpf
            && !validate::is_valid_cpf(cpf)
        {
            errors.add("cpf", validate::CPF_MESSAGE);
        }

        let phone = validate::required_string(&mut errors, "phone", self.phone);
        if let Some(phone) = &phone
            && !validate::is_valid_phone(phone)
        {
            errors.add("phone", validate::PHONE_MESSAGE);
        }

        let email = validate::required_string(&mut errors, "email", self.email);
        if let Some(email) = &email
            && !validate::is_valid_email(email)
        {
            errors.add("email", validate::EMAIL_MESSAGE);
        }

        match (name, cpf, phone, email, address) {
            (Some(name), Some(cpf), Some(phone), Some(email), Some(address))
                if errors.is_empty() =>
            {
                Ok(NewOwner {
                    name,
                    cpf,
                    phone,
                    email,
                    address,
                })
            }
            _ => Err(errors),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_request() -> CreateOwnerRequest {
        CreateOwnerRequest {
            name: Some("New Owner".to_string()),
            cpf: Some("99988877766".to_string()),
            phone: Some("11988887777".to_string()),
            email: Some("new@example.com".to_string()),
            address: Some("Rua Nova 10".to_string()),
        }
    }

    #[test]
    fn test_valid_request_passes() {
        let new_owner = valid_request().validate().unwrap();
        assert_eq!(new_owner.cpf, "99988877766");
    }

    #[test]
    fn test_short_cpf_is_rejected() {
        let request = CreateOwnerRequest {
            cpf: Some("123".to_string()),
            ..valid_request()
        };

        let errors = request.validate().unwrap_err();
        assert_eq!(errors.messages("cpf"), [validate::CPF_MESSAGE]);
    }

    #[test]
    fn test_missing_fields_are_all_reported() {
        let errors = CreateOwnerRequest {
            name: None,
            cpf: None,
            phone: None,
            email: None,
            address: None,
        }
        .validate()
        .unwrap_err();

        for field in ["name", "cpf", "phone", "email", "address"] {
            assert_eq!(errors.messages(field), [validate::REQUIRED_MESSAGE], "{field}");
        }
    }

    #[test]
    fn test_invalid_email_is_rejected() {
        let request = CreateOwnerRequest {
            email: Some("not-an-email".to_string()),
            ..valid_request()
        };

        let errors = request.validate().unwrap_err();
        assert_eq!(errors.messages("email"), [validate::EMAIL_MESSAGE]);
    }
}
