//! # Form Validation Benchmarks
//!
//! Measures the cost of validating each form, single-field checks, the JSON
//! entry point, and doctor search over growing rosters.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use serde_json::json;

use telehealth_forms::functional::prelude::*;
use telehealth_forms::models::doctor::Doctor;
use telehealth_forms::services::doctor_search_service::{search, DoctorQuery, SortBy};

fn valid_profile() -> ProfileSetupInput {
    ProfileSetupInput {
        full_name: "Layla Haddad".to_string(),
        phone: "0501234567".to_string(),
        email: "layla@example.com".to_string(),
        date_of_birth: Some("1990-05-17".to_string()),
        address: Some("12 Palm Street, Dubai".to_string()),
        medical_history: Some("Seasonal asthma".to_string()),
        consent_telemedicine: true,
        consent_privacy: true,
        ..Default::default()
    }
}

/// Generate a roster for search benchmarks
pub fn generate_doctors(size: usize) -> Vec<Doctor> {
    const SPECIALTIES: [&str; 4] = ["Cardiology", "Dermatology", "Pediatrics", "General Practice"];

    (0..size)
        .map(|i| Doctor {
            id: i.to_string(),
            name: format!("Dr. Provider {}", i),
            specialty: SPECIALTIES[i % SPECIALTIES.len()].to_string(),
            rating: 3.0 + (i % 20) as f32 / 10.0,
            experience_years: (i % 30) as u32,
            consultation_fee: 10000 + (i as u32 % 50) * 500,
            available: i % 3 != 0,
            languages: vec!["English".to_string(), "Arabic".to_string()],
        })
        .collect()
}

/// Benchmark: whole-form validation, valid and invalid input
pub fn benchmark_form_validation(c: &mut Criterion) {
    let mut group = c.benchmark_group("form_validation");

    let login = login_schema();
    let good_login = LoginInput {
        phone: "+971501234567".to_string(),
        password: "SecurePass123!".to_string(),
    };
    let bad_login = LoginInput {
        phone: "050".to_string(),
        password: "weak".to_string(),
    };
    group.bench_function("login_valid", |b| {
        b.iter(|| black_box(validate_form(&login, black_box(&good_login))))
    });
    group.bench_function("login_invalid", |b| {
        b.iter(|| black_box(validate_form(&login, black_box(&bad_login))))
    });

    let sign_up = sign_up_schema();
    let mismatch = SignUpInput {
        phone: "0501234567".to_string(),
        password: "SecurePass123!".to_string(),
        confirm_password: "SecurePass321!".to_string(),
    };
    group.bench_function("sign_up_mismatch", |b| {
        b.iter(|| black_box(validate_form(&sign_up, black_box(&mismatch))))
    });

    let profile = ProfileSetupSchema::as_of(2026);
    let input = valid_profile();
    group.bench_function("profile_setup_valid", |b| {
        b.iter(|| black_box(validate_form(&profile, black_box(&input))))
    });

    group.finish();
}

/// Benchmark: single-field checks used while typing
pub fn benchmark_field_validation(c: &mut Criterion) {
    let mut group = c.benchmark_group("field_validation");

    let email = email_schema();
    let phone = phone_schema();
    let date_of_birth = date_of_birth_schema_as_of(2026);

    for value in ["user@example.com", "invalid-email"] {
        group.bench_with_input(BenchmarkId::new("email", value), value, |b, value| {
            b.iter(|| black_box(validate_field(&email, value)))
        });
    }
    group.bench_function("phone", |b| {
        b.iter(|| black_box(validate_field(&phone, black_box("0501234567"))))
    });
    group.bench_function("date_of_birth", |b| {
        b.iter(|| black_box(validate_field(&date_of_birth, black_box("1990/05/17"))))
    });

    group.finish();
}

/// Benchmark: deserialization plus validation from raw JSON
pub fn benchmark_json_entry_point(c: &mut Criterion) {
    let schema = ProfileSetupSchema::as_of(2026);
    let value = serde_json::to_value(valid_profile()).unwrap_or_else(|_| json!({}));

    c.bench_function("profile_setup_from_json", |b| {
        b.iter(|| black_box(validate_form_value(&schema, black_box(value.clone()))))
    });
}

/// Benchmark: doctor search filtering and sorting
pub fn benchmark_doctor_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("doctor_search");
    let query = DoctorQuery::new()
        .text("provider")
        .available_only()
        .min_rating(4.0)
        .sort_by(SortBy::FeeLowToHigh);

    for size in [100, 1000, 10000].iter() {
        let doctors = generate_doctors(*size);
        group.bench_with_input(BenchmarkId::new("filtered_sorted", size), &doctors, |b, doctors| {
            b.iter(|| black_box(search(doctors, &query).len()))
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    benchmark_form_validation,
    benchmark_field_validation,
    benchmark_json_entry_point,
    benchmark_doctor_search
);

criterion_main!(benches);
