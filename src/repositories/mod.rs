//! # Repository Layer
//!
//! This module contains repository implementations that encapsulate SeaORM
//! operations for database entities, providing a clean API for data access.

pub mod client;
pub mod company;
pub mod invoice;
pub mod tax_rate;

pub use client::ClientRepository;
pub use company::CompanyRepository;
pub use invoice::InvoiceRepository;
pub use tax_rate::TaxRateRepository;
