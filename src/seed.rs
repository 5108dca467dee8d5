// src/seed.rs
use crate::dtos::kyc::KycRecord;

/// Fixed KYC seed dataset loaded by the bulk-index endpoint.
pub fn kyc_records() -> Vec<KycRecord> {
    let rows: [(u32, &str, &str, &str, &str, &str, &str); 10] = [
        (1, "John", "Doe", "Stanford University", "john.doe@example.com", "Acme Corp", "Palo Alto"),
        (2, "Jane", "Doe", "MIT", "jane.doe@example.com", "Globex", "Cambridge"),
        (3, "Alice", "Johnson", "UC Berkeley", "alice.johnson@example.com", "Initech", "Berkeley"),
        (4, "Robert", "Smith", "Carnegie Mellon", "robert.smith@example.com", "Umbrella Group", "Pittsburgh"),
        (5, "Maria", "Garcia", "University of Texas", "maria.garcia@example.com", "Stark Industries", "Austin"),
        (6, "Wei", "Chen", "Tsinghua University", "wei.chen@example.com", "Wayne Enterprises", "Beijing"),
        (7, "Priya", "Patel", "IIT Bombay", "priya.patel@example.com", "Hooli", "Mumbai"),
        (8, "Liam", "Murphy", "Trinity College Dublin", "liam.murphy@example.com", "Vandelay Industries", "Dublin"),
        (9, "Emma", "Dubois", "Sorbonne", "emma.dubois@example.com", "Soylent Corp", "Paris"),
        (10, "Johan", "Larsson", "KTH Royal Institute", "johan.larsson@example.com", "Aperture Labs", "Stockholm"),
    ];

    rows.into_iter()
        .map(|(id, first_name, last_name, university, email, company_name, address_city)| {
            KycRecord {
                id,
                first_name: first_name.to_string(),
                last_name: last_name.to_string(),
                university: university.to_string(),
                email: email.to_string(),
                company_name: company_name.to_string(),
                address_city: address_city.to_string(),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn seed_is_non_empty_with_unique_ids() {
        let records = kyc_records();
        assert!(!records.is_empty());

        let ids: HashSet<u32> = records.iter().map(|r| r.id).collect();
        assert_eq!(ids.len(), records.len());
    }

    #[test]
    fn seed_records_serialize_with_indexed_field_names() {
        let record = &kyc_records()[0];
        let value = serde_json::to_value(record).unwrap();

        assert_eq!(value["firstName"], "John");
        assert_eq!(value["lastName"], "Doe");
        assert!(value.get("companyName").is_some());
        assert!(value.get("addressCity").is_some());
    }
}
