pub mod tenant;

pub use tenant::{partition_middleware, PartitionPool, TenantId, TENANT_HEADER};
