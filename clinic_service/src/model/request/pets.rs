use chrono::NaiveDate;
use clinic_db_client::pets::create::NewPet;
use models_clinic::{Gender, Species, ValidationErrors, validate};
use utoipa::ToSchema;
use uuid::Uuid;

pub const DATE_FORMAT_MESSAGE: &str =
    "Date has wrong format. Use one of these formats instead: YYYY-MM-DD.";

#[derive(serde::Serialize, serde::Deserialize, Debug, ToSchema)]
pub struct CreatePetRequest {
    pub name: Option<String>,
    /// One of `M`, `F`
    pub gender: Option<String>,
    /// One of `d`, `c`
    pub species: Option<String>,
    pub breed: Option<String>,
    pub birth_date: Option<String>,
    /// Id of the owning [Owner](models_clinic::Owner)
    pub owner: Option<String>,
}

pub(crate) fn invalid_choice(value: &str, choices: &[&str]) -> String {
    format!(
        "\"{value}\" is not a valid choice. Valid choices: {}.",
        choices.join(", ")
    )
}

pub(crate) fn invalid_pk(value: &str) -> String {
    format!("Invalid pk \"{value}\" - object does not exist.")
}

impl CreatePetRequest {
    pub fn validate(self) -> Result<NewPet, ValidationErrors> {
        let mut errors = ValidationErrors::default();

        let name = validate::required_string(&mut errors, "name", self.name);
        let breed = validate::required_string(&mut errors, "breed", self.breed);

        let gender = match validate::required_string(&mut errors, "gender", self.gender) {
            Some(code) => match Gender::from_code(&code) {
                Some(gender) => Some(gender),
                None => {
                    errors.add("gender", invalid_choice(&code, &Gender::CODES));
                    None
                }
            },
            None => None,
        };

        let species = match validate::required_string(&mut errors, "species", self.species) {
            Some(code) => match Species::from_code(&code) {
                Some(species) => Some(species),
                None => {
                    errors.add("species", invalid_choice(&code, &Species::CODES));
                    None
                }
            },
            None => None,
        };

        let birth_date = match self.birth_date {
            None => None,
            Some(raw) => match NaiveDate::parse_from_str(&raw, "%Y-%m-%d") {
                Ok(date) => Some(date),
                Err(_) => {
                    errors.add("birth_date", DATE_FORMAT_MESSAGE);
                    None
                }
            },
        };

        let owner_id = match validate::required_string(&mut errors, "owner", self.owner) {
            Some(raw) => match Uuid::parse_str(&raw) {
                Ok(id) => Some(id),
                Err(_) => {
                    errors.add("owner", invalid_pk(&raw));
                    None
                }
            },
            None => None,
        };

        match (name, gender, species, breed, owner_id) {
            (Some(name), Some(gender), Some(species), Some(breed), Some(owner_id))
                if errors.is_empty() =>
            {
                Ok(NewPet {
                    name,
                    gender,
                    species,
                    breed,
                    birth_date,
                    owner_id,
                })
            }
            _ => Err(errors),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_request() -> CreatePetRequest {
        CreatePetRequest {
            name: Some("Mittens".to_string()),
            gender: Some("F".to_string()),
            species: Some("c".to_string()),
            breed: Some("Siamese".to_string()),
            birth_date: Some("2022-03-01".to_string()),
            owner: Some(Uuid::new_v4().to_string()),
        }
    }

    #[test]
    fn test_valid_request_passes() {
        let new_pet = valid_request().validate().unwrap();
        assert_eq!(new_pet.gender, Gender::Female);
        assert_eq!(new_pet.species, Species::Cat);
        assert_eq!(new_pet.birth_date, NaiveDate::from_ymd_opt(2022, 3, 1));
    }

    #[test]
    fn test_invalid_species_lists_choice_error() {
        let request = CreatePetRequest {
            species: Some("hamster".to_string()),
            ..valid_request()
        };

        let errors = request.validate().unwrap_err();
        assert_eq!(
            errors.messages("species"),
            ["\"hamster\" is not a valid choice. Valid choices: d, c."]
        );
    }

    #[test]
    fn test_birth_date_is_optional_but_checked() {
        let request = CreatePetRequest {
            birth_date: None,
            ..valid_request()
        };
        assert_eq!(request.validate().unwrap().birth_date, None);

        let request = CreatePetRequest {
            birth_date: Some("01/03/2022".to_string()),
            ..valid_request()
        };
        let errors = request.validate().unwrap_err();
        assert_eq!(errors.messages("birth_date"), [DATE_FORMAT_MESSAGE]);
    }

    #[test]
    fn test_malformed_owner_id_is_invalid_pk() {
        let request = CreatePetRequest {
            owner: Some("not-a-uuid".to_string()),
            ..valid_request()
        };

        let errors = request.validate().unwrap_err();
        assert_eq!(
            errors.messages("owner"),
            ["Invalid pk \"not-a-uuid\" - object does not exist."]
        );
    }
}
