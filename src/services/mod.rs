pub mod advisory_service;
pub mod image_service;
pub mod tenant_service;

pub use advisory_service::AdvisoryService;
pub use image_service::ImageHostService;
pub use tenant_service::TenantService;
