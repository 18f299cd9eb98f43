use crate::catalog::Catalog;
use crate::models::CreateBookingRequest;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Name must be between 3 and 25 characters.")]
    NameLength,

    #[error("Phone number must be exactly 10 digits.")]
    PhoneFormat,

    #[error("Aadhar number must be exactly 12 digits.")]
    AadharFormat,

    #[error("Rental service must be one of the available services.")]
    UnknownRentalService,

    #[error("Car model must be one of the available models.")]
    UnknownCarModel,

    #[error("Passenger count must be a valid number between 1 and 7.")]
    PassengerRange,
}

/// Pure, synchronous intake validation. First failing rule wins; runs before
/// any store mutation so a rejected request leaves no trace.
pub fn validate(candidate: &CreateBookingRequest, catalog: &Catalog) -> Result<(), ValidationError> {
    let name_len = candidate.full_name.chars().count();
    if !(3..=25).contains(&name_len) {
        return Err(ValidationError::NameLength);
    }

    if !all_digits(&candidate.phone_number, 10) {
        return Err(ValidationError::PhoneFormat);
    }

    if let Some(aadhar) = candidate.aadhar_number.as_deref() {
        if !aadhar.is_empty() && !all_digits(aadhar, 12) {
            return Err(ValidationError::AadharFormat);
        }
    }

    if !catalog.has_rental_service(&candidate.rental_service_name) {
        return Err(ValidationError::UnknownRentalService);
    }

    if !catalog.has_car_model(&candidate.car_model) {
        return Err(ValidationError::UnknownCarModel);
    }

    if !(1..=7).contains(&candidate.passengers) {
        return Err(ValidationError::PassengerRange);
    }

    Ok(())
}

fn all_digits(s: &str, expected_len: usize) -> bool {
    s.len() == expected_len && s.bytes().all(|b| b.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn candidate() -> CreateBookingRequest {
        CreateBookingRequest {
            full_name: "Asha Rao".to_string(),
            email: "a@x.com".to_string(),
            phone_number: "9876543210".to_string(),
            aadhar_number: None,
            rental_service_name: "City Cruise".to_string(),
            car_model: "Dzire".to_string(),
            pickup_date: NaiveDate::from_ymd_opt(2025, 1, 10).unwrap(),
            return_date: NaiveDate::from_ymd_opt(2025, 1, 12).unwrap(),
            pickup_location: "MG Road".to_string(),
            pickup_lat: None,
            pickup_lng: None,
            passengers: 2,
        }
    }

    #[test]
    fn test_valid_candidate_passes() {
        assert!(validate(&candidate(), &Catalog::default()).is_ok());
    }

    #[test]
    fn test_name_too_short() {
        let mut c = candidate();
        c.full_name = "Al".to_string();
        assert_eq!(
            validate(&c, &Catalog::default()),
            Err(ValidationError::NameLength)
        );
    }

    #[test]
    fn test_name_too_long() {
        let mut c = candidate();
        c.full_name = "A".repeat(26);
        assert_eq!(
            validate(&c, &Catalog::default()),
            Err(ValidationError::NameLength)
        );
    }

    #[test]
    fn test_name_boundaries_accepted() {
        let mut c = candidate();
        c.full_name = "Ana".to_string();
        assert!(validate(&c, &Catalog::default()).is_ok());
        c.full_name = "A".repeat(25);
        assert!(validate(&c, &Catalog::default()).is_ok());
    }

    #[test]
    fn test_phone_too_short() {
        let mut c = candidate();
        c.phone_number = "12345".to_string();
        assert_eq!(
            validate(&c, &Catalog::default()),
            Err(ValidationError::PhoneFormat)
        );
    }

    #[test]
    fn test_phone_non_numeric() {
        let mut c = candidate();
        c.phone_number = "987654321x".to_string();
        assert_eq!(
            validate(&c, &Catalog::default()),
            Err(ValidationError::PhoneFormat)
        );
    }

    #[test]
    fn test_aadhar_wrong_length() {
        let mut c = candidate();
        c.aadhar_number = Some("12345".to_string());
        assert_eq!(
            validate(&c, &Catalog::default()),
            Err(ValidationError::AadharFormat)
        );
    }

    #[test]
    fn test_aadhar_valid() {
        let mut c = candidate();
        c.aadhar_number = Some("123456789012".to_string());
        assert!(validate(&c, &Catalog::default()).is_ok());
    }

    #[test]
    fn test_empty_aadhar_treated_as_absent() {
        // The form submits an empty string when the field is left blank.
        let mut c = candidate();
        c.aadhar_number = Some(String::new());
        assert!(validate(&c, &Catalog::default()).is_ok());
    }

    #[test]
    fn test_unknown_rental_service() {
        let mut c = candidate();
        c.rental_service_name = "Submarine Tours".to_string();
        assert_eq!(
            validate(&c, &Catalog::default()),
            Err(ValidationError::UnknownRentalService)
        );
    }

    #[test]
    fn test_unknown_car_model() {
        let mut c = candidate();
        c.car_model = "Batmobile".to_string();
        assert_eq!(
            validate(&c, &Catalog::default()),
            Err(ValidationError::UnknownCarModel)
        );
    }

    #[test]
    fn test_passengers_out_of_range() {
        let mut c = candidate();
        c.passengers = 0;
        assert_eq!(
            validate(&c, &Catalog::default()),
            Err(ValidationError::PassengerRange)
        );
        c.passengers = 8;
        assert_eq!(
            validate(&c, &Catalog::default()),
            Err(ValidationError::PassengerRange)
        );
    }

    #[test]
    fn test_passenger_boundaries_accepted() {
        let mut c = candidate();
        c.passengers = 1;
        assert!(validate(&c, &Catalog::default()).is_ok());
        c.passengers = 7;
        assert!(validate(&c, &Catalog::default()).is_ok());
    }

    #[test]
    fn test_first_failure_wins() {
        let mut c = candidate();
        c.full_name = "Al".to_string();
        c.phone_number = "123".to_string();
        assert_eq!(
            validate(&c, &Catalog::default()),
            Err(ValidationError::NameLength)
        );
    }

    #[test]
    fn test_custom_catalog_is_honored() {
        let catalog = Catalog {
            rental_services: vec!["Desert Safari".to_string()],
            car_models: vec!["Jimny".to_string()],
        };
        let mut c = candidate();
        c.rental_service_name = "Desert Safari".to_string();
        c.car_model = "Jimny".to_string();
        assert!(validate(&c, &catalog).is_ok());
        assert_eq!(
            validate(&candidate(), &catalog),
            Err(ValidationError::UnknownRentalService)
        );
    }
}
