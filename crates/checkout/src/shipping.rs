//! Checkout form data.

use serde::Serialize;

use pyroshop_core::{DomainError, DomainResult};

use crate::identity::IdentityProvider;

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct ShippingDetails {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub pincode: String,
}

impl ShippingDetails {
    /// Blank form with name and email taken from the signed-in user, if any.
    pub fn prefilled(identity: &dyn IdentityProvider) -> Self {
        let user = identity.current_user().unwrap_or_default();
        Self {
            full_name: user.display_name.unwrap_or_default(),
            email: user.email.unwrap_or_default(),
            ..Self::default()
        }
    }

    /// Every field is required; the email must look like one.
    pub fn validate(&self) -> DomainResult<()> {
        let fields = [
            ("full name", &self.full_name),
            ("email", &self.email),
            ("phone", &self.phone),
            ("address", &self.address),
            ("city", &self.city),
            ("state", &self.state),
            ("pincode", &self.pincode),
        ];
        for (label, value) in fields {
            if value.trim().is_empty() {
                return Err(DomainError::validation(format!("{label} is required")));
            }
        }

        if !looks_like_email(self.email.trim()) {
            return Err(DomainError::validation("email address is not valid"));
        }

        Ok(())
    }
}

fn looks_like_email(email: &str) -> bool {
    match email.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.contains('@')
                && domain.contains('.')
                && !domain.starts_with('.')
                && !domain.ends_with('.')
        }
        None => false,
    }
}

/// Card details typed into the form.
///
/// Nothing is charged or transmitted; the details only label the confirmation.
#[derive(Clone, PartialEq, Eq, Default)]
pub struct PaymentDetails {
    pub card_name: String,
    pub card_number: String,
    pub expiry_date: String,
    pub cvv: String,
}

impl PaymentDetails {
    /// `•••• 4242`, or `card` when fewer than four digits were entered.
    pub fn masked_card(&self) -> String {
        let digits: Vec<char> = self.card_number.chars().filter(char::is_ascii_digit).collect();
        if digits.len() < 4 {
            return "card".to_string();
        }
        let last4: String = digits[digits.len() - 4..].iter().collect();
        format!("•••• {last4}")
    }
}

impl core::fmt::Debug for PaymentDetails {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("PaymentDetails")
            .field("card_name", &self.card_name)
            .field("card_number", &self.masked_card())
            .field("expiry_date", &"**/**")
            .field("cvv", &"***")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::identity::{AnonymousIdentity, CurrentUser, StaticIdentity};

    fn complete() -> ShippingDetails {
        ShippingDetails {
            full_name: "Asha Rao".into(),
            email: "asha@example.in".into(),
            phone: "9800000000".into(),
            address: "12 MG Road".into(),
            city: "Sivakasi".into(),
            state: "Tamil Nadu".into(),
            pincode: "626123".into(),
        }
    }

    #[test]
    fn prefill_uses_the_signed_in_user() {
        let identity = StaticIdentity(CurrentUser {
            display_name: Some("Asha Rao".into()),
            email: Some("asha@example.in".into()),
        });
        let form = ShippingDetails::prefilled(&identity);
        assert_eq!(form.full_name, "Asha Rao");
        assert_eq!(form.email, "asha@example.in");
        assert!(form.city.is_empty());

        let anonymous = ShippingDetails::prefilled(&AnonymousIdentity);
        assert_eq!(anonymous, ShippingDetails::default());
    }

    #[test]
    fn complete_form_validates() {
        assert!(complete().validate().is_ok());
    }

    #[test]
    fn blank_fields_are_reported_by_name() {
        let mut form = complete();
        form.city = "  ".into();
        match form.validate() {
            Err(DomainError::Validation(msg)) => assert_eq!(msg, "city is required"),
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn implausible_emails_are_rejected() {
        for email in ["asha", "asha@", "@example.in", "asha@example", "a@b@c.in", "asha@.in"] {
            let mut form = complete();
            form.email = email.into();
            assert!(form.validate().is_err(), "accepted {email}");
        }
    }

    #[test]
    fn payment_debug_never_shows_the_full_number() {
        let payment = PaymentDetails {
            card_name: "Asha Rao".into(),
            card_number: "4242 4242 4242 4242".into(),
            expiry_date: "12/30".into(),
            cvv: "123".into(),
        };
        let rendered = format!("{payment:?}");
        assert!(rendered.contains("•••• 4242"));
        assert!(!rendered.contains("4242 4242"));
        assert!(!rendered.contains("123"));
        assert_eq!(PaymentDetails::default().masked_card(), "card");
    }
}
