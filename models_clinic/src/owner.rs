use chrono::{DateTime, Utc};
use utoipa::ToSchema;
use uuid::Uuid;

/// A pet owner. `cpf` and `email` are unique across all owners.
#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, PartialEq, Eq, ToSchema, sqlx::FromRow)]
pub struct Owner {
    pub id: Uuid,
    pub name: String,
    /// Brazilian taxpayer id, exactly 11 digits
    pub cpf: String,
    /// DDD + number, exactly 11 digits
    pub phone: String,
    pub email: String,
    pub address: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Owner {
    /// `12345678901` -> `123.456.789-01`
    pub fn formatted_cpf(&self) -> String {
        if self.cpf.len() == 11 {
            format!(
                "{}.{}.{}-{}",
                &self.cpf[..3],
                &self.cpf[3..6],
                &self.cpf[6..9],
                &self.cpf[9..]
            )
        } else {
            self.cpf.clone()
        }
    }

    /// `11999990000` -> `(11) 99999-0000`
    pub fn formatted_phone(&self) -> String {
        if self.phone.len() == 11 {
            format!(
                "({}) {}-{}",
                &self.phone[..2],
                &self.phone[2..7],
                &self.phone[7..]
            )
        } else {
            self.phone.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn owner_with(cpf: &str, phone: &str) -> Owner {
        Owner {
            id: Uuid::new_v4(),
            name: "Test Owner".to_string(),
            cpf: cpf.to_string(),
            phone: phone.to_string(),
            email: "testowner@example.com".to_string(),
            address: "Rua Teste 1".to_string(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_formatted_cpf() {
        let owner = owner_with("00011122233", "11999990000");
        assert_eq!(owner.formatted_cpf(), "000.111.222-33");
        assert_eq!(owner.formatted_phone(), "(11) 99999-0000");
    }

    #[test]
    fn test_formatting_leaves_short_values_alone() {
        let owner = owner_with("123", "456");
        assert_eq!(owner.formatted_cpf(), "123");
        assert_eq!(owner.formatted_phone(), "456");
    }
}
