use std::env;

/// The rental-service and car-model lists offered to customers. Injected into
/// the validator so the lifecycle core stays decoupled from catalog content.
#[derive(Clone, Debug)]
pub struct Catalog {
    pub rental_services: Vec<String>,
    pub car_models: Vec<String>,
}

impl Catalog {
    /// Reads `RENTAL_SERVICES` / `CAR_MODELS` as comma-separated lists,
    /// falling back to the stock catalog.
    pub fn from_env() -> Self {
        Self {
            rental_services: env_list("RENTAL_SERVICES")
                .unwrap_or_else(|| Self::default().rental_services),
            car_models: env_list("CAR_MODELS").unwrap_or_else(|| Self::default().car_models),
        }
    }

    pub fn has_rental_service(&self, name: &str) -> bool {
        self.rental_services.iter().any(|s| s == name)
    }

    pub fn has_car_model(&self, name: &str) -> bool {
        self.car_models.iter().any(|m| m == name)
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self {
            rental_services: [
                "Airport Transfers",
                "City Cruise",
                "Tours & Trips",
                "Corporate Rental",
                "Event Rental",
            ]
            .map(String::from)
            .to_vec(),
            car_models: ["Hycross", "Crysta", "Innova", "Ertiga", "Ciaz", "Dzire"]
                .map(String::from)
                .to_vec(),
        }
    }
}

fn env_list(key: &str) -> Option<Vec<String>> {
    let raw = env::var(key).ok()?;
    let items: Vec<String> = raw
        .split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect();
    if items.is_empty() {
        None
    } else {
        Some(items)
    }
}
