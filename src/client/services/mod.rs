pub mod predict_service;
