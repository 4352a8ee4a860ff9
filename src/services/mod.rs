pub mod doctor_search_service;
