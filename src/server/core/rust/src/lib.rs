/* src/server/core/rust/src/lib.rs */

pub mod copy;
pub mod errors;
pub mod metadata;
pub mod page;
pub mod portal;
pub mod record;
pub mod registry;
pub mod resolve;
pub mod route;
pub mod schema;
pub mod server;
pub mod site;
pub mod sitemap;

// Re-exports for ergonomic use
pub use copy::CopyTable;
pub use errors::RideError;
pub use metadata::{ComposedMetadata, PageTemplate, compose, compose_static};
pub use page::{Page, RenderEnv, Section, SectionKind};
pub use portal::{PortalClient, PortalError};
pub use record::{EntityRecord, RecordKind, Variant};
pub use registry::{Registry, Testimonial};
pub use resolve::{Resolution, Resolver, fallback_record};
pub use route::{HubDef, PageType, RouteDef, RouteTable, normalize_path};
pub use schema::{Clock, FixedClock, SchemaDocument, SchemaKind, SystemClock};
pub use server::{RenderedPage, RideServer, RideSite};
pub use site::{BusinessProfile, FallbackDefaults, SiteDefaults};
